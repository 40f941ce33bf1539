use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::{Partition, partition};
use super::render::{SunburstView, render};
use crate::components::canvas::{canvas_point, context_2d};
use crate::cuisine::SunburstNode;

#[derive(Default)]
struct SunburstState {
	partition: Partition,
	hovered: Option<usize>,
	width: f64,
	height: f64,
	ctx: Option<CanvasRenderingContext2d>,
}

impl SunburstState {
	fn view<'a>(&'a self, title: &'a str) -> SunburstView<'a> {
		SunburstView {
			partition: &self.partition,
			hovered: self.hovered,
			title,
			width: self.width,
			height: self.height,
		}
	}

	fn draw(&self, title: &str) {
		if let Some(ctx) = &self.ctx {
			render(&self.view(title), ctx);
		}
	}

	/// Returns true when the hovered segment changed.
	fn hover_at(&mut self, x: f64, y: f64) -> bool {
		let view = self.view("");
		let (cx, cy) = view.center();
		let hovered = self.partition.segment_at(x - cx, y - cy, view.radius());
		let changed = hovered != self.hovered;
		self.hovered = hovered;
		changed
	}
}

/// Radial chart of a cuisine's ingredient hierarchy. Redrawn on data
/// change and on hover; there is no animation loop.
#[component]
pub fn SunburstCanvas(
	#[prop(into)] data: Signal<SunburstNode>,
	#[prop(into)] title: Signal<String>,
	#[prop(default = 420.0)] size: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<SunburstState>> = Rc::new(RefCell::new(SunburstState::default()));

	let state_init = state.clone();
	Effect::new(move |_| {
		let tree = data.get();
		let title = title.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size as u32);
		canvas.set_height(size as u32);

		let mut s = state_init.borrow_mut();
		if s.ctx.is_none() {
			s.ctx = context_2d(&canvas);
			if s.ctx.is_none() {
				warn!("Canvas 2d context unavailable; sunburst not drawn");
			}
		}
		s.partition = partition(&tree);
		s.hovered = None;
		s.width = size;
		s.height = size;
		debug!("Sunburst laid out: {} segments", s.partition.segments.len());
		s.draw(&title);
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let mut s = state_mm.borrow_mut();
		if s.hover_at(x, y) {
			s.draw(&title.get_untracked());
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		let mut s = state_ml.borrow_mut();
		if s.hovered.take().is_some() {
			s.draw(&title.get_untracked());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="sunburst-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; cursor: crosshair;"
		/>
	}
}
