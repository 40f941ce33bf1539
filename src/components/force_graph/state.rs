use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, NodeShape};

pub const NODE_RADIUS: f64 = 6.0;
pub const SIGNATURE_RADIUS: f64 = 10.0;
/// Extra world-space slack around a node that still counts as a hit.
const HIT_SLACK: f64 = 5.0;
const SEED_RING: f64 = 120.0;

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: String,
	pub color: String,
	pub shape: NodeShape,
	pub radius: f64,
	pub emphasized: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	pub const MIN_ZOOM: f64 = 0.2;
	pub const MAX_ZOOM: f64 = 6.0;

	fn centered(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let k = (self.k * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
		let ratio = k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = k;
	}
}

/// What the pointer is currently doing to the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	DragNode {
		idx: DefaultNodeIdx,
		pointer: (f64, f64),
		node: (f32, f32),
	},
	Pan {
		pointer: (f64, f64),
		origin: (f64, f64),
	},
}

#[derive(Clone, Debug, Default)]
pub struct Highlight {
	pub focus: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	/// Eased 0..1 strength of the highlight.
	pub t: f64,
	delay: f64,
	/// Focus kept around while the highlight fades out.
	fading: Option<(DefaultNodeIdx, HashSet<DefaultNodeIdx>)>,
}

impl Highlight {
	const DELAY: f64 = 0.08;
	const RISE: f64 = 1.8;
	const FALL: f64 = 1.26;

	fn step(&mut self, dt: f64) {
		if self.focus.is_some() {
			self.delay = (self.delay + dt).min(Self::DELAY);
			if self.delay >= Self::DELAY {
				self.t += (1.0 - self.t) * Self::RISE * dt;
			}
		} else {
			self.t -= self.t * Self::FALL * dt;
			if self.t < 0.01 {
				self.t = 0.0;
				self.fading = None;
			}
		}
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub gesture: Gesture,
	pub highlight: Highlight,
	pub width: f64,
	pub height: f64,
	adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, params: SimulationParameters) -> Self {
		let mut graph = ForceGraph::new(params);
		let mut id_to_idx = HashMap::new();
		let count = data.nodes.len().max(1) as f64;

		for (i, node) in data.nodes.iter().enumerate() {
			if id_to_idx.contains_key(&node.id) {
				continue;
			}
			// signature nodes seed on an inner ring so they settle centrally
			let ring = if node.emphasized { SEED_RING * 0.5 } else { SEED_RING };
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (ring * angle.cos()) as f32,
				y: (ring * angle.sin()) as f32,
				mass: if node.emphasized { 15.0 } else { 10.0 },
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color: node.color.clone(),
					shape: node.shape,
					radius: if node.emphasized {
						SIGNATURE_RADIUS
					} else {
						NODE_RADIUS
					},
					emphasized: node.emphasized,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>> = HashMap::new();
		for link in &data.links {
			let (Some(&src), Some(&tgt)) = (id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			else {
				continue;
			};
			if src == tgt {
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
			adjacency.entry(src).or_default().insert(tgt);
			adjacency.entry(tgt).or_default().insert(src);
		}

		Self {
			graph,
			transform: ViewTransform::centered(width, height),
			gesture: Gesture::Idle,
			highlight: Highlight::default(),
			width,
			height,
			adjacency,
		}
	}

	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x(), node.y()));
			}
		});
		pos
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_SLACK {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn neighbors(&self, idx: DefaultNodeIdx) -> Option<&HashSet<DefaultNodeIdx>> {
		self.adjacency.get(&idx)
	}

	pub fn set_focus(&mut self, node: Option<DefaultNodeIdx>) {
		if self.highlight.focus == node {
			return;
		}
		let previous = self.highlight.focus.take();
		let previous_neighbors = std::mem::take(&mut self.highlight.neighbors);

		match node {
			Some(idx) => {
				if previous.is_none() {
					self.highlight.delay = 0.0;
				}
				self.highlight.fading = None;
				self.highlight.neighbors = self.neighbors(idx).cloned().unwrap_or_default();
			}
			None => {
				self.highlight.fading = previous.map(|p| (p, previous_neighbors));
			}
		}
		self.highlight.focus = node;
	}

	fn focus_and_neighbors(&self) -> Option<(DefaultNodeIdx, &HashSet<DefaultNodeIdx>)> {
		match (self.highlight.focus, &self.highlight.fading) {
			(Some(f), _) => Some((f, &self.highlight.neighbors)),
			(None, Some((f, n))) => Some((*f, n)),
			(None, None) => None,
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.focus_and_neighbors()
			.is_some_and(|(f, n)| f == idx || n.contains(&idx))
	}

	pub fn is_focused(&self, idx: DefaultNodeIdx) -> bool {
		self.focus_and_neighbors().is_some_and(|(f, _)| f == idx)
	}

	pub fn has_highlight(&self) -> bool {
		self.focus_and_neighbors().is_some()
	}

	pub fn begin_gesture(&mut self, sx: f64, sy: f64) {
		self.gesture = match self.node_at_position(sx, sy) {
			Some(idx) => Gesture::DragNode {
				idx,
				pointer: (sx, sy),
				node: self.node_position(idx).unwrap_or_default(),
			},
			None => Gesture::Pan {
				pointer: (sx, sy),
				origin: (self.transform.x, self.transform.y),
			},
		};
	}

	pub fn update_gesture(&mut self, sx: f64, sy: f64) {
		match self.gesture {
			Gesture::Idle => {
				let hovered = self.node_at_position(sx, sy);
				self.set_focus(hovered);
			}
			Gesture::DragNode { idx, pointer, node } => {
				let k = self.transform.k;
				let nx = node.0 + ((sx - pointer.0) / k) as f32;
				let ny = node.1 + ((sy - pointer.1) / k) as f32;
				self.graph.visit_nodes_mut(|n| {
					if n.index() == idx {
						n.data.x = nx;
						n.data.y = ny;
						n.data.is_anchor = true;
					}
				});
			}
			Gesture::Pan { pointer, origin } => {
				self.transform.x = origin.0 + (sx - pointer.0);
				self.transform.y = origin.1 + (sy - pointer.1);
			}
		}
	}

	/// Finish the current gesture. A dragged node stays pinned where it
	/// was dropped.
	pub fn end_gesture(&mut self) {
		self.gesture = Gesture::Idle;
	}

	pub fn cancel_gesture(&mut self) {
		self.gesture = Gesture::Idle;
		self.set_focus(None);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.highlight.step(dt as f64);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node_count(s: &ForceGraphState) -> usize {
		let mut n = 0;
		s.graph.visit_nodes(|_| n += 1);
		n
	}

	fn node(id: &str, emphasized: bool) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: id.into(),
			color: "#fff".into(),
			shape: NodeShape::Circle,
			emphasized,
		}
	}

	fn link(a: &str, b: &str) -> GraphLink {
		GraphLink {
			source: a.into(),
			target: b.into(),
		}
	}

	fn state() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![node("a", true), node("b", false), node("c", false), node("a", false)],
			links: vec![link("a", "b"), link("b", "zzz"), link("c", "c")],
		};
		ForceGraphState::new(&data, 800.0, 600.0, crate::config::SimulationConfig::default().into())
	}

	fn idx_of(s: &ForceGraphState, label: &str) -> DefaultNodeIdx {
		let mut found = None;
		s.graph.visit_nodes(|n| {
			if n.data.user_data.label == label {
				found = Some(n.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn skips_repeated_ids_dangling_and_self_links() {
		let s = state();
		assert_eq!(node_count(&s), 3);
		let (a, b, c) = (idx_of(&s, "a"), idx_of(&s, "b"), idx_of(&s, "c"));
		assert!(s.neighbors(a).unwrap().contains(&b));
		assert!(s.neighbors(b).unwrap().contains(&a));
		assert!(s.neighbors(c).is_none());
	}

	#[test]
	fn hit_test_uses_screen_transform() {
		let s = state();
		let a = idx_of(&s, "a");
		let (x, y) = s.node_position(a).unwrap();
		let (sx, sy) = (x as f64 + s.transform.x, y as f64 + s.transform.y);
		assert_eq!(s.node_at_position(sx, sy), Some(a));
		assert_eq!(s.node_at_position(-5000.0, -5000.0), None);
	}

	#[test]
	fn focus_highlights_neighbors_and_fades() {
		let mut s = state();
		let (a, b, c) = (idx_of(&s, "a"), idx_of(&s, "b"), idx_of(&s, "c"));
		s.set_focus(Some(a));
		assert!(s.is_focused(a));
		assert!(s.is_highlighted(b));
		assert!(!s.is_highlighted(c));

		s.set_focus(None);
		assert!(s.has_highlight(), "fading focus still highlights");
		s.highlight.t = 0.005;
		s.tick(0.016);
		assert!(!s.has_highlight());
	}

	#[test]
	fn pan_moves_transform() {
		let mut s = state();
		let before = s.transform;
		s.begin_gesture(-5000.0, -5000.0);
		s.update_gesture(-4990.0, -4980.0);
		s.end_gesture();
		assert_eq!(s.transform.x, before.x + 10.0);
		assert_eq!(s.transform.y, before.y + 20.0);
		assert_eq!(s.gesture, Gesture::Idle);
	}

	#[test]
	fn zoom_keeps_anchor_point() {
		let mut t = ViewTransform::centered(800.0, 600.0);
		let before = t.screen_to_graph(100.0, 100.0);
		t.zoom_at(100.0, 100.0, 2.0);
		let after = t.screen_to_graph(100.0, 100.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
		t.zoom_at(0.0, 0.0, 1000.0);
		assert_eq!(t.k, ViewTransform::MAX_ZOOM);
	}
}
