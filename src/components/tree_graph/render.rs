use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, LABEL_FONT, NODE_HEIGHT, NODE_PADDING};
use super::types::NodeKind;

const GRID_GAP: f64 = 16.0;
const EDGE_WIDTH: f64 = 1.5;
const ARROW_SIZE: f64 = 8.0;
const CORNER_RADIUS: f64 = 8.0;
const HIGHLIGHT_SCALE: f64 = 1.1;

const MINIMAP_WIDTH: f64 = 160.0;
const MINIMAP_HEIGHT: f64 = 110.0;
const MINIMAP_MARGIN: f64 = 12.0;

fn kind_colors(kind: NodeKind) -> (&'static str, &'static str) {
	match kind {
		NodeKind::Object => ("#637cec", "#5a67d8"),
		NodeKind::Array => ("#4ec07e", "#38a169"),
		NodeKind::Primitive => ("#ed8936", "#dd6b20"),
	}
}

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(if state.dark { "#1a1a2e" } else { "#fafafa" });
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();

	draw_minimap(state, ctx);
}

/// Dotted background, drawn in screen space so the dots track pan and zoom.
fn draw_grid(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let gap = GRID_GAP * state.transform.k;
	if gap < 6.0 {
		return;
	}
	ctx.set_fill_style_str(if state.dark { "#444" } else { "#aaa" });
	let start_x = state.transform.x.rem_euclid(gap);
	let start_y = state.transform.y.rem_euclid(gap);
	let mut x = start_x;
	while x < state.width {
		let mut y = start_y;
		while y < state.height {
			ctx.begin_path();
			let _ = ctx.arc(x, y, 1.0, 0.0, 2.0 * PI);
			ctx.fill();
			y += gap;
		}
		x += gap;
	}
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let stroke = if state.dark { "#666" } else { "#b1b1b7" };
	ctx.set_stroke_style_str(stroke);
	ctx.set_fill_style_str(stroke);
	ctx.set_line_width(EDGE_WIDTH);

	for edge in &state.edges {
		let (Some(src), Some(tgt)) = (
			state.node_index(&edge.source),
			state.node_index(&edge.target),
		) else {
			continue;
		};
		// Bottom center of the source box to top center of the target box.
		let x1 = state.nodes[src].position.x + state.widths[src] / 2.0;
		let y1 = state.nodes[src].position.y + NODE_HEIGHT;
		let x2 = state.nodes[tgt].position.x + state.widths[tgt] / 2.0;
		let y2 = state.nodes[tgt].position.y;

		let mid_y = (y1 + y2) / 2.0;
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.bezier_curve_to(x1, mid_y, x2, mid_y, x2, y2 - ARROW_SIZE);
		ctx.stroke();

		// Closed arrowhead pointing into the target.
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(x2 - ARROW_SIZE * 0.5, y2 - ARROW_SIZE);
		ctx.line_to(x2 + ARROW_SIZE * 0.5, y2 - ARROW_SIZE);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_baseline("middle");

	for (i, node) in state.nodes.iter().enumerate() {
		let (mut x, mut y) = (node.position.x, node.position.y);
		let (mut w, mut h) = (state.widths[i], NODE_HEIGHT);
		if node.highlighted {
			// Grow around the center, matching the search glow treatment.
			let (cx, cy) = (x + w / 2.0, y + h / 2.0);
			w *= HIGHLIGHT_SCALE;
			h *= HIGHLIGHT_SCALE;
			x = cx - w / 2.0;
			y = cy - h / 2.0;
			ctx.set_shadow_color("#ffd700");
			ctx.set_shadow_blur(20.0);
		}

		let (fill, border) = kind_colors(node.kind);
		rounded_rect(ctx, x, y, w, h, CORNER_RADIUS);
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
		ctx.set_stroke_style_str(border);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&node.label, x + NODE_PADDING, y + h / 2.0);
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	ctx.quadratic_curve_to(x + w, y, x + w, y + r);
	ctx.line_to(x + w, y + h - r);
	ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	ctx.line_to(x + r, y + h);
	ctx.quadratic_curve_to(x, y + h, x, y + h - r);
	ctx.line_to(x, y + r);
	ctx.quadratic_curve_to(x, y, x + r, y);
	ctx.close_path();
}

/// Corner overview: the whole tree shrunk into a fixed box plus the current
/// viewport rectangle.
fn draw_minimap(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let Some((min_x, min_y, max_x, max_y)) = state.bounds() else {
		return;
	};
	let map_x = state.width - MINIMAP_WIDTH - MINIMAP_MARGIN;
	let map_y = state.height - MINIMAP_HEIGHT - MINIMAP_MARGIN;
	let inner = 8.0;
	let scale = ((MINIMAP_WIDTH - 2.0 * inner) / (max_x - min_x).max(1.0))
		.min((MINIMAP_HEIGHT - 2.0 * inner) / (max_y - min_y).max(1.0));
	let to_map = |x: f64, y: f64| {
		(
			map_x + inner + (x - min_x) * scale,
			map_y + inner + (y - min_y) * scale,
		)
	};

	ctx.save();
	ctx.begin_path();
	ctx.rect(map_x, map_y, MINIMAP_WIDTH, MINIMAP_HEIGHT);
	ctx.clip();

	ctx.set_fill_style_str(if state.dark {
		"rgba(0, 0, 0, 0.6)"
	} else {
		"rgba(0, 0, 0, 0.2)"
	});
	ctx.fill_rect(map_x, map_y, MINIMAP_WIDTH, MINIMAP_HEIGHT);

	for (i, node) in state.nodes.iter().enumerate() {
		let (x, y) = to_map(node.position.x, node.position.y);
		let (fill, _) = kind_colors(node.kind);
		ctx.set_fill_style_str(fill);
		ctx.fill_rect(
			x,
			y,
			(state.widths[i] * scale).max(2.0),
			(NODE_HEIGHT * scale).max(2.0),
		);
	}

	// Visible world rect under the current transform.
	let (vx, vy) = (
		-state.transform.x / state.transform.k,
		-state.transform.y / state.transform.k,
	);
	let (vx2, vy2) = (
		vx + state.width / state.transform.k,
		vy + state.height / state.transform.k,
	);
	let (rx, ry) = to_map(vx, vy);
	let (rx2, ry2) = to_map(vx2, vy2);
	ctx.set_stroke_style_str(if state.dark { "#ddd" } else { "#333" });
	ctx.set_line_width(1.0);
	ctx.stroke_rect(rx, ry, rx2 - rx, ry2 - ry);

	ctx.restore();
}
