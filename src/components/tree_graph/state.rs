use std::collections::HashMap;

use web_sys::CanvasRenderingContext2d;

use super::types::{GraphEdge, GraphNode, TreeGraphData};

pub const NODE_HEIGHT: f64 = 40.0;
pub const NODE_MIN_WIDTH: f64 = 120.0;
pub const NODE_PADDING: f64 = 10.0;
pub const LABEL_FONT: &str = "13px sans-serif";

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 2.0;
const FIT_PADDING: f64 = 0.2;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything the canvas needs to draw and hit-test one laid-out tree.
///
/// Rebuilt wholesale whenever the graph signal changes; node positions here
/// are a display copy, the core records are never touched.
pub struct CanvasState {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub widths: Vec<f64>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub dark: bool,
	index: HashMap<String, usize>,
}

impl CanvasState {
	pub fn new(
		data: &TreeGraphData,
		ctx: &CanvasRenderingContext2d,
		width: f64,
		height: f64,
		dark: bool,
	) -> Self {
		ctx.set_font(LABEL_FONT);
		let widths = data
			.nodes
			.iter()
			.map(|node| {
				let text_width = ctx
					.measure_text(&node.label)
					.map(|m| m.width())
					.unwrap_or(node.label.len() as f64 * 7.0);
				(text_width + 2.0 * NODE_PADDING).max(NODE_MIN_WIDTH)
			})
			.collect();
		let index = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.clone(), i))
			.collect();

		let mut state = Self {
			nodes: data.nodes.clone(),
			edges: data.edges.clone(),
			widths,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			dark,
			index,
		};
		match state.nodes.iter().position(|n| n.highlighted) {
			Some(focus) => state.center_on(focus),
			None => state.fit_view(),
		}
		state
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	/// World-space bounding box over all node boxes.
	pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		for (i, node) in self.nodes.iter().enumerate() {
			let (x, y) = (node.position.x, node.position.y);
			let (x2, y2) = (x + self.widths[i], y + NODE_HEIGHT);
			bounds = Some(match bounds {
				None => (x, y, x2, y2),
				Some((min_x, min_y, max_x, max_y)) => {
					(min_x.min(x), min_y.min(y), max_x.max(x2), max_y.max(y2))
				}
			});
		}
		bounds
	}

	/// Scale and center the view so the whole tree is visible with a margin,
	/// clamped to the zoom range.
	pub fn fit_view(&mut self) {
		let Some((min_x, min_y, max_x, max_y)) = self.bounds() else {
			return;
		};
		let (bw, bh) = ((max_x - min_x).max(1.0), (max_y - min_y).max(1.0));
		let k = ((self.width / bw).min(self.height / bh) / (1.0 + 2.0 * FIT_PADDING))
			.clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (min_x + bw / 2.0) * k,
			y: self.height / 2.0 - (min_y + bh / 2.0) * k,
			k,
		};
	}

	/// Center the view on one node at 1:1 zoom.
	pub fn center_on(&mut self, index: usize) {
		let node = &self.nodes[index];
		let cx = node.position.x + self.widths[index] / 2.0;
		let cy = node.position.y + NODE_HEIGHT / 2.0;
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx,
			y: self.height / 2.0 - cy,
			k: 1.0,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node box under a screen position, if any.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		(0..self.nodes.len()).rev().find(|&i| {
			let p = self.nodes[i].position;
			gx >= p.x && gx <= p.x + self.widths[i] && gy >= p.y && gy <= p.y + NODE_HEIGHT
		})
	}

	/// Zoom by `factor` keeping the screen point (x, y) fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}
