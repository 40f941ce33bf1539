pub mod canvas;
pub mod force_graph;
pub mod sunburst;
