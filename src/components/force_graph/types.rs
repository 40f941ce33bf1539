use std::collections::HashSet;
use std::f64::consts::PI;

use log::debug;

use crate::cuisine::{KitchenConstellation, VisualType};

/// Outline a node is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeShape {
	#[default]
	Circle,
	Triangle,
	Square,
	Diamond,
	Pentagon,
	Hexagon,
}

impl NodeShape {
	/// Side count and rotation for polygonal shapes, `None` for circles.
	fn polygon(&self) -> Option<(u32, f64)> {
		match self {
			NodeShape::Circle => None,
			NodeShape::Triangle => Some((3, -PI / 2.0)),
			NodeShape::Square => Some((4, PI / 4.0)),
			NodeShape::Diamond => Some((4, 0.0)),
			NodeShape::Pentagon => Some((5, -PI / 2.0)),
			NodeShape::Hexagon => Some((6, 0.0)),
		}
	}

	/// Text glyph matching the outline, for legends.
	pub fn glyph(&self) -> char {
		match self {
			NodeShape::Circle => '●',
			NodeShape::Triangle => '▲',
			NodeShape::Square => '■',
			NodeShape::Diamond => '◆',
			NodeShape::Pentagon => '⬟',
			NodeShape::Hexagon => '⬢',
		}
	}

	/// Vertices of the outline around `(x, y)` with circumradius `r`.
	pub fn vertices(&self, x: f64, y: f64, r: f64) -> Vec<(f64, f64)> {
		let Some((sides, rotation)) = self.polygon() else {
			return Vec::new();
		};
		(0..sides)
			.map(|i| {
				let a = rotation + f64::from(i) * 2.0 * PI / f64::from(sides);
				(x + r * a.cos(), y + r * a.sin())
			})
			.collect()
	}
}

impl From<VisualType> for NodeShape {
	fn from(v: VisualType) -> Self {
		match v {
			VisualType::Basket => NodeShape::Square,
			VisualType::Grain => NodeShape::Diamond,
			VisualType::Vegetable => NodeShape::Hexagon,
			VisualType::Herb => NodeShape::Triangle,
			VisualType::Bottle => NodeShape::Pentagon,
			VisualType::Spice => NodeShape::Circle,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub color: String,
	pub shape: NodeShape,
	/// Drawn larger with a bold label.
	pub emphasized: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl From<&KitchenConstellation> for GraphData {
	/// The simulation is keyed by id, so repeated ids collapse onto the
	/// first node carrying them.
	fn from(c: &KitchenConstellation) -> Self {
		let mut seen = HashSet::new();
		let nodes = c
			.nodes
			.iter()
			.filter(|n| {
				let fresh = seen.insert(n.id.as_str());
				if !fresh {
					debug!("Dropping repeated constellation node '{}'", n.id);
				}
				fresh
			})
			.map(|n| GraphNode {
				id: n.id.clone(),
				label: n.name.clone(),
				color: n.color.clone(),
				shape: n.visual_type.into(),
				emphasized: n.is_signature,
			})
			.collect();
		let links = c
			.links
			.iter()
			.map(|l| GraphLink {
				source: l.source.clone(),
				target: l.target.clone(),
			})
			.collect();
		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cuisine::build_kitchen_constellation;

	#[test]
	fn converts_constellation() {
		let c = build_kitchen_constellation(&["beef", "tomato"], &["basil"]);
		let g = GraphData::from(&c);
		assert_eq!(g.nodes.len(), 3);
		assert_eq!(g.nodes[0].shape, NodeShape::Square);
		assert!(g.nodes[0].emphasized);
		assert_eq!(g.links.len(), c.links.len());
	}

	#[test]
	fn repeated_ids_keep_first_node() {
		let c = build_kitchen_constellation(&["garlic"], &["garlic", "ginger"]);
		let g = GraphData::from(&c);
		let ids: Vec<&str> = g.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["garlic", "ginger"]);
		// first garlic is the key-ingredient node
		assert_eq!(g.nodes[0].color, c.nodes[0].color);
	}

	#[test]
	fn polygon_vertices() {
		assert!(NodeShape::Circle.vertices(0.0, 0.0, 1.0).is_empty());
		let hex = NodeShape::Hexagon.vertices(1.0, 2.0, 3.0);
		assert_eq!(hex.len(), 6);
		assert!((hex[0].0 - 4.0).abs() < 1e-9 && (hex[0].1 - 2.0).abs() < 1e-9);
		for (x, y) in hex {
			let d = ((x - 1.0).powi(2) + (y - 2.0).powi(2)).sqrt();
			assert!((d - 3.0).abs() < 1e-9);
		}
	}
}
