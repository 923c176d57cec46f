//! Retrieval-augmented answering.
//!
//! The composition is a linear pipeline: retrieve the nearest chunks,
//! join them into a context string, render the answer prompt, and send
//! it to the generation model.

pub mod answer;
pub mod context;

pub use answer::{answer, RagAnswer};
pub use context::assemble_context;
