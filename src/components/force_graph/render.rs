use std::f64::consts::PI;

use force_graph::Node;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};

const BACKGROUND: &str = "#1b1a17";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = ease_out_cubic(state.highlight.t);

	state.graph.visit_edges(|n1, n2, _| {
		let lit = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		// pairings are undirected: plain segments, brighter when both ends are lit
		let (alpha, width) = if lit {
			(0.35 + 0.5 * t, (1.2 + 0.8 * t) / k)
		} else {
			(0.35 - 0.25 * t, 1.2 / k)
		};
		ctx.set_stroke_style_str(&format!("rgba(240, 214, 170, {alpha})"));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn trace_shape(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, r: f64) {
	ctx.begin_path();
	let vertices = info.shape.vertices(x, y, r);
	match vertices.split_first() {
		None => {
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		}
		Some((&(fx, fy), rest)) => {
			ctx.move_to(fx, fy);
			for &(vx, vy) in rest {
				ctx.line_to(vx, vy);
			}
			ctx.close_path();
		}
	}
}

fn draw_label(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, r: f64, alpha: f64, k: f64) {
	let base = if info.emphasized { 12.0 } else { 10.0 };
	let size = base / k.max(0.5);
	let weight = if info.emphasized { "bold " } else { "" };
	ctx.set_font(&format!("{weight}{size}px sans-serif"));
	ctx.set_fill_style_str(&format!("rgba(255, 248, 235, {alpha})"));
	let _ = ctx.fill_text(&info.label, x + r + 4.0, y + size / 3.0);
}

fn draw_node(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, node: &Node<NodeInfo>, t: f64) {
	let info = &node.data.user_data;
	let idx = node.index();
	let (x, y, k) = (node.x() as f64, node.y() as f64, state.transform.k);
	let lit = state.has_highlight() && state.is_highlighted(idx);
	let focused = lit && state.is_focused(idx);

	let (alpha, r) = match (state.has_highlight(), lit, focused) {
		(false, _, _) => (1.0, info.radius),
		(true, false, _) => (1.0 - 0.7 * t, info.radius * (1.0 - 0.15 * t)),
		(true, true, true) => (1.0, info.radius * (1.0 + 0.35 * t)),
		(true, true, false) => (1.0, info.radius * (1.0 + 0.2 * t)),
	};

	if focused && t > 0.01 {
		let glow = r * (1.8 + 1.2 * t);
		if let Ok(gradient) = ctx.create_radial_gradient(x, y, r * 0.3, x, y, glow) {
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 236, 200, {})", 0.35 * t));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 236, 200, 0)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	ctx.set_global_alpha(alpha);
	trace_shape(ctx, info, x, y, r);
	ctx.set_fill_style_str(&info.color);
	ctx.fill();
	if info.emphasized {
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_line_width(1.5 / k);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);

	let label_alpha = if lit || info.emphasized { alpha } else { alpha * 0.75 };
	draw_label(ctx, info, x, y, r, label_alpha, k);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.highlight.t);

	// dimmed nodes first so highlighted ones paint on top
	state.graph.visit_nodes(|node| {
		if !(state.has_highlight() && state.is_highlighted(node.index())) {
			draw_node(state, ctx, node, t);
		}
	});
	if !state.has_highlight() {
		return;
	}
	state.graph.visit_nodes(|node| {
		if state.is_highlighted(node.index()) {
			draw_node(state, ctx, node, t);
		}
	});
}
