use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphCanvasState, NODE_RADIUS};

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.6)");
	ctx.set_line_width(1.5 / k);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		// Stop the line at the node outlines.
		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
}

fn draw_nodes(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();

		if let Some(label) = &node.data.user_data.label {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
			let _ = ctx.fill_text(label, x + NODE_RADIUS + 3.0, y + 3.0);
		}
	});
}
