//! Canvas renderer glue: a force-directed interactive view of abstract
//! node/edge/color records.

mod component;
mod render;
mod state;
mod types;

pub use component::GraphCanvas;
pub use types::{GraphData, GraphLink, GraphNode};
