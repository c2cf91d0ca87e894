//! This crate provides the syntax tree and parser for Notal. This phase is responsible for pulling
//! tokens from the tokenizer and building the syntax tree out of them.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod parser;
pub mod syntax_tree;
