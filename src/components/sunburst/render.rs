use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::layout::Partition;

const BACKGROUND: &str = "#1b1a17";
/// Canvas angles start at 3 o'clock; the layout starts at 12.
const OFFSET: f64 = -TAU / 4.0;
/// Skip labels on arcs shorter than this many pixels.
const MIN_LABEL_ARC: f64 = 36.0;

pub struct SunburstView<'a> {
	pub partition: &'a Partition,
	pub hovered: Option<usize>,
	pub title: &'a str,
	pub width: f64,
	pub height: f64,
}

impl SunburstView<'_> {
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	pub fn radius(&self) -> f64 {
		(self.width.min(self.height) / 2.0 - 8.0).max(0.0)
	}
}

pub fn render(view: &SunburstView, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);

	let (cx, cy) = view.center();
	let ring = view.partition.ring_width(view.radius());

	for (idx, seg) in view.partition.segments.iter().enumerate() {
		let (inner, outer) = (seg.depth as f64 * ring, (seg.depth + 1) as f64 * ring);
		let dimmed = view
			.hovered
			.is_some_and(|h| !view.partition.in_branch(idx, h));

		ctx.set_global_alpha(if dimmed { 0.35 } else { 1.0 });
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, outer, seg.start + OFFSET, seg.end + OFFSET);
		let _ = ctx.arc_with_anticlockwise(cx, cy, inner, seg.end + OFFSET, seg.start + OFFSET, true);
		ctx.close_path();
		ctx.set_fill_style_str(&seg.color);
		ctx.fill();
		ctx.set_stroke_style_str(BACKGROUND);
		ctx.set_line_width(1.0);
		ctx.stroke();

		let mid_r = (inner + outer) / 2.0;
		if seg.sweep() * mid_r >= MIN_LABEL_ARC && !dimmed {
			let mid = (seg.start + seg.end) / 2.0 + OFFSET;
			ctx.set_fill_style_str("rgba(20, 18, 15, 0.9)");
			ctx.set_font("10px sans-serif");
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&seg.name, cx + mid_r * mid.cos(), cy + mid_r * mid.sin() + 3.0);
		}
	}
	ctx.set_global_alpha(1.0);

	draw_caption(view, ctx, cx, cy);
}

fn draw_caption(view: &SunburstView, ctx: &CanvasRenderingContext2d, cx: f64, cy: f64) {
	let (headline, detail) = match view.hovered.and_then(|h| view.partition.segments.get(h)) {
		Some(seg) if seg.is_leaf => (seg.name.clone(), String::new()),
		Some(seg) => (seg.name.clone(), format!("{} items", seg.leaves)),
		None => (
			view.title.to_string(),
			format!("{} items", view.partition.total_leaves),
		),
	};
	ctx.set_text_align("center");
	ctx.set_fill_style_str("#f5ead6");
	ctx.set_font("bold 13px sans-serif");
	let _ = ctx.fill_text(&headline, cx, cy);
	if !detail.is_empty() {
		ctx.set_font("11px sans-serif");
		let _ = ctx.fill_text(&detail, cx, cy + 15.0);
	}
}
