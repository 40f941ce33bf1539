//! Radial partition of a [`SunburstNode`] tree.
//!
//! Angles run clockwise from 12 o'clock in `[0, 2π)`; each node's sweep is
//! proportional to the number of leaves beneath it. The root occupies the
//! center disc and produces no segment.

use std::f64::consts::TAU;

use crate::cuisine::SunburstNode;
use crate::cuisine::palette::DEFAULT_CATEGORY_COLOR;

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub name: String,
	pub color: String,
	/// 1 for the root's children.
	pub depth: usize,
	pub start: f64,
	pub end: f64,
	pub leaves: usize,
	pub is_leaf: bool,
	pub parent: Option<usize>,
}

impl Segment {
	pub fn sweep(&self) -> f64 {
		self.end - self.start
	}

	pub fn contains_angle(&self, angle: f64) -> bool {
		angle >= self.start && angle < self.end
	}
}

/// Flattened layout, parents before children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
	pub segments: Vec<Segment>,
	pub max_depth: usize,
	pub total_leaves: usize,
}

pub fn partition(root: &SunburstNode) -> Partition {
	let total_leaves = root.leaf_count();
	let mut out = Partition {
		segments: Vec::new(),
		max_depth: root.depth(),
		total_leaves,
	};
	if total_leaves == 0 {
		return out;
	}
	let color = root.color.as_deref().unwrap_or(DEFAULT_CATEGORY_COLOR);
	place_children(root, 0.0, TAU / total_leaves as f64, 1, None, color, &mut out.segments);
	out
}

fn place_children(
	node: &SunburstNode,
	start: f64,
	per_leaf: f64,
	depth: usize,
	parent: Option<usize>,
	inherited_color: &str,
	out: &mut Vec<Segment>,
) {
	let mut cursor = start;
	for child in node.children() {
		let leaves = child.leaf_count();
		let end = cursor + per_leaf * leaves as f64;
		let color = child.color.as_deref().unwrap_or(inherited_color);
		out.push(Segment {
			name: child.name.clone(),
			color: color.to_string(),
			depth,
			start: cursor,
			end,
			leaves,
			is_leaf: child.is_leaf(),
			parent,
		});
		let idx = out.len() - 1;
		place_children(child, cursor, per_leaf, depth + 1, Some(idx), color, out);
		cursor = end;
	}
}

impl Partition {
	/// Width of one ring when the chart has outer radius `radius`.
	pub fn ring_width(&self, radius: f64) -> f64 {
		radius / (self.max_depth + 1) as f64
	}

	/// Segment under the offset `(dx, dy)` from the chart center.
	pub fn segment_at(&self, dx: f64, dy: f64, radius: f64) -> Option<usize> {
		let ring = self.ring_width(radius);
		let r = dx.hypot(dy);
		if ring <= 0.0 || r >= radius {
			return None;
		}
		let depth = (r / ring).floor() as usize;
		let angle = clock_angle(dx, dy);
		self.segments
			.iter()
			.position(|s| s.depth == depth && s.contains_angle(angle))
	}

	/// True when `idx` is `other` or one of its ancestors.
	pub fn is_ancestor_or_self(&self, idx: usize, other: usize) -> bool {
		let mut cur = Some(other);
		while let Some(i) = cur {
			if i == idx {
				return true;
			}
			cur = self.segments.get(i).and_then(|s| s.parent);
		}
		false
	}

	/// Segments sharing a branch with `focus` (its ancestors and descendants).
	pub fn in_branch(&self, idx: usize, focus: usize) -> bool {
		self.is_ancestor_or_self(idx, focus) || self.is_ancestor_or_self(focus, idx)
	}
}

/// Clockwise angle from 12 o'clock of the offset `(dx, dy)` in screen
/// coordinates (y down).
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
	(dy.atan2(dx) + TAU / 4.0).rem_euclid(TAU)
}
