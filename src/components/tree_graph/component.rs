use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::CanvasState;
use super::types::TreeGraphData;

/// Mouse travel (screen px) below which a press/release counts as a click.
const CLICK_SLOP: f64 = 4.0;

type Shared = Rc<RefCell<Option<(CanvasState, CanvasRenderingContext2d)>>>;

#[component]
pub fn TreeGraphCanvas(
	#[prop(into)] data: Signal<TreeGraphData>,
	#[prop(into)] dark: Signal<bool>,
	#[prop(into)] on_node_click: Callback<String>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let shared: Shared = Rc::new(RefCell::new(None));

	// Rebuild the canvas state whenever the graph or the theme changes. The
	// scene is static between rebuilds, so there is no animation loop; the
	// event handlers below redraw after each mutation instead.
	let shared_init = shared.clone();
	Effect::new(move |_| {
		let data = data.get();
		let dark = dark.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let state = CanvasState::new(&data, &ctx, w, h, dark);
		render::render(&state, &ctx);
		*shared_init.borrow_mut() = Some((state, ctx));
	});

	let shared_md = shared.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some((ref mut s, _)) = *shared_md.borrow_mut() {
			if let Some(i) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node = Some(i);
				s.drag.moved = false;
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.drag.node_start_x = s.nodes[i].position.x;
				s.drag.node_start_y = s.nodes[i].position.y;
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let shared_mm = shared.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some((ref mut s, ref ctx)) = *shared_mm.borrow_mut() {
			if s.drag.active {
				if let Some(i) = s.drag.node {
					let (dx, dy) = (x - s.drag.start_x, y - s.drag.start_y);
					if dx.abs() > CLICK_SLOP || dy.abs() > CLICK_SLOP {
						s.drag.moved = true;
					}
					s.nodes[i].position.x = s.drag.node_start_x + dx / s.transform.k;
					s.nodes[i].position.y = s.drag.node_start_y + dy / s.transform.k;
					render::render(s, ctx);
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
				render::render(s, ctx);
			}
		}
	};

	let shared_mu = shared.clone();
	let on_mouseup = move |_: MouseEvent| {
		let mut clicked = None;
		if let Some((ref mut s, _)) = *shared_mu.borrow_mut() {
			if s.drag.active && !s.drag.moved {
				if let Some(i) = s.drag.node {
					clicked = Some(s.nodes[i].path.clone());
				}
			}
			s.drag.active = false;
			s.drag.node = None;
			s.pan.active = false;
		}
		if let Some(path) = clicked {
			on_node_click.run(path);
		}
	};

	let shared_ml = shared.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some((ref mut s, _)) = *shared_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node = None;
			s.pan.active = false;
		}
	};

	let shared_wh = shared.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some((ref mut s, ref ctx)) = *shared_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
			render::render(s, ctx);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="tree-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
