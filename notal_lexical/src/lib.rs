//! This crate implements the lexical analysis phase of Notal. This phase is responsible for
//! scanning the source code into tokens.
//!
//! Tokens are pulled one at a time from a [`tokenizer::Tokenizer`]; the source is never tokenized
//! up front.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod token;
pub mod tokenizer;
