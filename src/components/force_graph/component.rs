use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ForceGraphState;
use super::types::GraphData;
use crate::components::canvas::{canvas_point, context_2d};
use crate::config::AppConfig;

const FRAME_DT: f32 = 0.016;

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn pointer_in(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	Some(canvas_point(&canvas, ev))
}

fn request_frame(frame: &FrameCallback) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *frame.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Drive tick + render from `requestAnimationFrame` until `alive` clears.
fn start_animation(
	state: SharedState,
	frame: FrameCallback,
	alive: Arc<AtomicBool>,
	ctx: CanvasRenderingContext2d,
) {
	let frame_inner = frame.clone();
	*frame.borrow_mut() = Some(Closure::new(move || {
		if !alive.load(Ordering::Relaxed) {
			debug!("Constellation animation stopped");
			return;
		}
		if let Some(ref mut s) = *state.borrow_mut() {
			s.tick(FRAME_DT);
			render::render(s, &ctx);
		}
		request_frame(&frame_inner);
	}));
	request_frame(&frame);
}

/// Force-directed canvas for a [`GraphData`]. Rebuilds the simulation
/// whenever `data` changes; the animation loop is started once per mount.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 520.0)] height: f64,
) -> impl IntoView {
	let params = use_context::<AppConfig>().unwrap_or_default().simulation;
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));

	let (state_init, frame_init, alive_init) = (state.clone(), frame.clone(), alive.clone());
	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		debug!(
			"Building constellation: {} nodes, {} links",
			graph.nodes.len(),
			graph.links.len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&graph, width, height, params.into()));

		if frame_init.borrow().is_some() {
			return;
		}
		match context_2d(&canvas) {
			Some(ctx) => start_animation(state_init.clone(), frame_init.clone(), alive_init.clone(), ctx),
			None => warn!("Canvas 2d context unavailable; constellation not drawn"),
		}
	});
	on_cleanup(move || alive.store(false, Ordering::Relaxed));

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_in(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_gesture(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_in(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.update_gesture(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_gesture();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.cancel_gesture();
		}
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_in(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.transform.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
