//! The parsing core: graph and coloring readers plus their error type.
//!
//! Everything here is pure and browser-free so it can be unit tested
//! natively; the pages feed it text read from uploaded files.

mod coloring;
mod dimacs;
mod error;

pub use coloring::{Coloring, read_coloring};
pub use dimacs::{Graph, read_graph};
pub use error::ModelError;
