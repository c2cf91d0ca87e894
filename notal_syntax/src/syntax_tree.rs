//! Contains all the definition of syntax trees for the Notal language and their parsing logic.
//!
//! Every node serializes to the same JSON shape: an object tagged with a `"type"` field naming the
//! node, plus its fields.

pub mod literal;
pub mod program;
