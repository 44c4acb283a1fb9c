use std::collections::{HashMap, HashSet};

use super::types::{GraphEdge, GraphNode, Position};

pub const HORIZONTAL_SPACING: f64 = 200.0;
pub const VERTICAL_SPACING: f64 = 100.0;

/// Position every node reachable from the root: one horizontal row per depth
/// level, rows spaced `VERTICAL_SPACING` apart, each row centered around
/// x = 0. Siblings do not dodge cousins' subtrees; rows are centered
/// independently.
///
/// Pure transform: returns repositioned copies and leaves the input alone.
/// Deterministic and idempotent for a given node/edge order. If no root
/// exists (every node is an edge target) the nodes come back unchanged.
pub fn layout(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<GraphNode> {
	let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
	for edge in edges {
		children
			.entry(edge.source.as_str())
			.or_default()
			.push(edge.target.as_str());
	}

	let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
	let Some(root) = nodes.iter().find(|n| !targets.contains(n.id.as_str())) else {
		return nodes.to_vec();
	};

	let mut levels: Vec<Vec<&str>> = Vec::new();
	collect_levels(root.id.as_str(), 0, &children, &mut levels);

	let mut slots: HashMap<&str, (usize, usize)> = HashMap::new();
	for (level, ids) in levels.iter().enumerate() {
		for (index, id) in ids.iter().enumerate() {
			slots.insert(*id, (level, index));
		}
	}

	nodes
		.iter()
		.map(|node| {
			let mut node = node.clone();
			if let Some(&(level, index)) = slots.get(node.id.as_str()) {
				let row_width = levels[level].len() as f64 * HORIZONTAL_SPACING;
				node.position = Position {
					x: -row_width / 2.0 + index as f64 * HORIZONTAL_SPACING,
					y: level as f64 * VERTICAL_SPACING,
				};
			}
			node
		})
		.collect()
}

/// Depth-first walk recording node ids per level in visit order, which is
/// the child order the builder emitted.
fn collect_levels<'a>(
	id: &'a str,
	level: usize,
	children: &HashMap<&str, Vec<&'a str>>,
	levels: &mut Vec<Vec<&'a str>>,
) {
	if levels.len() == level {
		levels.push(Vec::new());
	}
	levels[level].push(id);
	if let Some(kids) = children.get(id) {
		for kid in kids {
			collect_levels(kid, level + 1, children, levels);
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::super::build::build_graph;
	use super::*;

	fn positions(nodes: &[GraphNode]) -> Vec<(f64, f64)> {
		nodes.iter().map(|n| (n.position.x, n.position.y)).collect()
	}

	#[test]
	fn rows_and_columns() {
		let data = build_graph(&json!({"user": {"id": 1, "hobbies": ["a", "b"]}}));
		let nodes = layout(&data.nodes, &data.edges);
		let at = |path: &str| {
			let n = nodes.iter().find(|n| n.path == path).unwrap();
			(n.position.x, n.position.y)
		};

		// Levels 0 and 1 hold one node each, centered.
		assert_eq!(at("$"), (-100.0, 0.0));
		assert_eq!(at("$.user"), (-100.0, 100.0));
		// Level 2: two siblings, row width 400 centered on zero.
		assert_eq!(at("$.user.id"), (-200.0, 200.0));
		assert_eq!(at("$.user.hobbies"), (0.0, 200.0));
		// Level 3: the array elements.
		assert_eq!(at("$.user.hobbies[0]"), (-200.0, 300.0));
		assert_eq!(at("$.user.hobbies[1]"), (0.0, 300.0));
	}

	#[test]
	fn idempotent() {
		let data = build_graph(&json!({"a": [1, 2, 3], "b": {"c": true}}));
		let once = layout(&data.nodes, &data.edges);
		let twice = layout(&once, &data.edges);
		assert_eq!(positions(&once), positions(&twice));
	}

	#[test]
	fn input_is_not_mutated() {
		let data = build_graph(&json!({"a": 1}));
		let _ = layout(&data.nodes, &data.edges);
		assert!(
			data.nodes
				.iter()
				.all(|n| n.position == Position::default())
		);
	}

	#[test]
	fn empty_graph_is_a_noop() {
		assert!(layout(&[], &[]).is_empty());
	}

	#[test]
	fn no_root_means_no_repositioning() {
		let data = build_graph(&json!({"a": 1}));
		let nodes = &data.nodes;
		// Fabricate a cycle so every node is some edge's target.
		let edges = vec![
			GraphEdge {
				id: "x".into(),
				source: nodes[0].id.clone(),
				target: nodes[1].id.clone(),
			},
			GraphEdge {
				id: "y".into(),
				source: nodes[1].id.clone(),
				target: nodes[0].id.clone(),
			},
		];
		assert_eq!(positions(&layout(nodes, &edges)), positions(nodes));
	}
}
