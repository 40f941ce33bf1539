//! Force-directed canvas used for ingredient constellations.

mod component;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, NodeShape};
