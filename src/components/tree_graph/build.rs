use log::debug;
use serde_json::Value;
use thiserror::Error;

use super::types::{GraphEdge, GraphNode, NodeKind, Position, TreeGraphData};

/// The input text was not valid JSON.
#[derive(Debug, Error)]
#[error("Invalid JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parse `text` and flatten the document into a node/edge graph.
///
/// All-or-nothing: on a parse failure nothing is built and the caller
/// replaces its graph with an empty one.
pub fn parse_document(text: &str) -> Result<TreeGraphData, ParseError> {
	let value: Value = serde_json::from_str(text)?;
	let data = build_graph(&value);
	debug!(
		"built graph: {} nodes, {} edges",
		data.nodes.len(),
		data.edges.len()
	);
	Ok(data)
}

/// Convert a parsed JSON value into a flat node list plus parent→child edges.
///
/// Nodes are emitted pre-order: every node precedes its descendants, with
/// children in document order (array index order, object insertion order).
/// Positions are all zero until the layout pass runs.
pub fn build_graph(value: &Value) -> TreeGraphData {
	let mut data = TreeGraphData::default();
	visit(value, None, "root", "$", 0, &mut data);
	data
}

/// Emit the node for `value`, recurse into its children, and return the
/// emitted node's id so the caller can attach its edge to it.
fn visit(
	value: &Value,
	parent_id: Option<&str>,
	key: &str,
	path: &str,
	depth: usize,
	out: &mut TreeGraphData,
) -> String {
	let id = format!("{}-{}-{}", parent_id.unwrap_or("root"), key, depth);
	let (kind, label) = match value {
		Value::Array(_) => (NodeKind::Array, format!("{key} []")),
		Value::Object(_) => (NodeKind::Object, format!("{key} {{}}")),
		// serde_json renders primitives as their JSON literals: strings come
		// out quoted and escaped, null/bool/number as-is.
		primitive => (NodeKind::Primitive, format!("{key}: {primitive}")),
	};
	out.nodes.push(GraphNode {
		id: id.clone(),
		label,
		path: path.to_string(),
		kind,
		position: Position::default(),
		value: value.clone(),
		highlighted: false,
	});

	match value {
		Value::Array(items) => {
			for (index, item) in items.iter().enumerate() {
				let child_key = format!("[{index}]");
				let child_path = format!("{path}[{index}]");
				link_child(item, &id, &child_key, &child_path, depth, out);
			}
		}
		Value::Object(entries) => {
			for (child_key, child) in entries {
				let child_path = if path == "$" {
					format!("$.{child_key}")
				} else {
					format!("{path}.{child_key}")
				};
				link_child(child, &id, child_key, &child_path, depth, out);
			}
		}
		_ => {}
	}

	id
}

fn link_child(
	value: &Value,
	parent_id: &str,
	key: &str,
	path: &str,
	parent_depth: usize,
	out: &mut TreeGraphData,
) {
	let child_id = visit(value, Some(parent_id), key, path, parent_depth + 1, out);
	out.edges.push(GraphEdge {
		id: format!("{parent_id}-{child_id}"),
		source: parent_id.to_string(),
		target: child_id,
	});
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use serde_json::json;

	use super::*;

	fn paths(data: &TreeGraphData) -> Vec<&str> {
		data.nodes.iter().map(|n| n.path.as_str()).collect()
	}

	#[test]
	fn sample_document_paths() {
		let data = build_graph(&json!({"user": {"id": 1, "hobbies": ["a", "b"]}}));
		assert_eq!(
			paths(&data),
			vec![
				"$",
				"$.user",
				"$.user.id",
				"$.user.hobbies",
				"$.user.hobbies[0]",
				"$.user.hobbies[1]",
			]
		);
	}

	#[test]
	fn tree_shape() {
		let data = build_graph(&json!({
			"a": [1, {"b": null}],
			"c": "x",
		}));
		assert_eq!(data.nodes.len() - 1, data.edges.len());

		let targets: HashSet<&str> = data.edges.iter().map(|e| e.target.as_str()).collect();
		let roots: Vec<&GraphNode> = data
			.nodes
			.iter()
			.filter(|n| !targets.contains(n.id.as_str()))
			.collect();
		assert_eq!(roots.len(), 1);
		assert_eq!(roots[0].path, "$");
	}

	#[test]
	fn ids_and_paths_unique() {
		let data = build_graph(&json!({
			"user": {"name": "a", "tags": ["x", "y"]},
			"other": {"name": "b", "tags": ["x", "y"]},
		}));
		let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		let unique_paths: HashSet<&str> = paths(&data).into_iter().collect();
		assert_eq!(ids.len(), data.nodes.len());
		assert_eq!(unique_paths.len(), data.nodes.len());
	}

	#[test]
	fn root_id_and_kind() {
		let data = build_graph(&json!({}));
		assert_eq!(data.nodes[0].id, "root-root-0");
		assert_eq!(data.nodes[0].kind, NodeKind::Object);
	}

	#[test]
	fn labels_per_kind() {
		let data = build_graph(&json!({
			"name": "Ada",
			"age": 36,
			"active": true,
			"nothing": null,
			"tags": [],
			"address": {},
		}));
		let labels: Vec<&str> = data.nodes.iter().map(|n| n.label.as_str()).collect();
		assert_eq!(
			labels,
			vec![
				"root {}",
				"name: \"Ada\"",
				"age: 36",
				"active: true",
				"nothing: null",
				"tags []",
				"address {}",
			]
		);
	}

	#[test]
	fn array_children_keyed_by_index() {
		let data = build_graph(&json!(["a", "b"]));
		assert_eq!(data.nodes[1].label, "[0]: \"a\"");
		assert_eq!(data.nodes[1].path, "$[0]");
		assert_eq!(data.nodes[2].path, "$[1]");
	}

	#[test]
	fn empty_containers_have_no_edges() {
		for (doc, label) in [(json!([]), "root []"), (json!({}), "root {}")] {
			let data = build_graph(&doc);
			assert_eq!(data.nodes.len(), 1);
			assert!(data.edges.is_empty());
			assert_eq!(data.nodes[0].label, label);
		}
	}

	#[test]
	fn edges_point_at_the_child_subtree_root() {
		let data = build_graph(&json!({"a": {"b": 1}}));
		// root → a, a → b; never root → b.
		assert_eq!(data.edges.len(), 2);
		let root_edge = data.edges.iter().find(|e| e.source == "root-root-0").unwrap();
		assert_eq!(root_edge.target, "root-root-0-a-1");
		assert_eq!(root_edge.id, "root-root-0-root-root-0-a-1");
	}

	#[test]
	fn object_members_keep_insertion_order() {
		let data = build_graph(&serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap());
		assert_eq!(paths(&data), vec!["$", "$.z", "$.a", "$.m"]);
	}

	#[test]
	fn parse_document_success() {
		let data = parse_document(r#"{"user": {"id": 1}}"#).unwrap();
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.edges.len(), 2);
	}

	#[test]
	fn parse_document_failure_message() {
		let err = parse_document("{ not json").unwrap_err();
		assert!(err.to_string().starts_with("Invalid JSON: "));
	}

	#[test]
	fn nodes_retain_their_subtree_value() {
		let data = build_graph(&json!({"user": {"id": 1}}));
		let user = data.nodes.iter().find(|n| n.path == "$.user").unwrap();
		assert_eq!(user.value, json!({"id": 1}));
	}
}
