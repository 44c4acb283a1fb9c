use super::types::GraphNode;

/// Find the first node whose path contains `query` as a substring.
///
/// An exact path match is just a containment match, so whichever node comes
/// first in list order wins even when an exact match exists later in the
/// list. That order dependence is deliberate, kept as-is and pinned by the
/// tests below. A blank query never matches.
pub fn find_by_path<'a>(nodes: &'a [GraphNode], query: &str) -> Option<&'a GraphNode> {
	let query = query.trim();
	if query.is_empty() {
		return None;
	}
	nodes.iter().find(|node| node.path.contains(query))
}

/// Flag the node with `id` as highlighted and every other node as not.
///
/// Returns a fresh collection with the flag explicitly set on every node, so
/// a previous highlight can never survive. An unknown id leaves everything
/// un-highlighted.
pub fn highlight(nodes: &[GraphNode], id: &str) -> Vec<GraphNode> {
	nodes
		.iter()
		.map(|node| {
			let mut node = node.clone();
			node.highlighted = node.id == id;
			node
		})
		.collect()
}

/// Remove any active highlight.
pub fn clear_highlight(nodes: &[GraphNode]) -> Vec<GraphNode> {
	nodes
		.iter()
		.map(|node| {
			let mut node = node.clone();
			node.highlighted = false;
			node
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::super::build::build_graph;
	use super::super::types::{NodeKind, Position};
	use super::*;

	fn node(id: &str, path: &str) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			label: String::new(),
			path: path.to_string(),
			kind: NodeKind::Primitive,
			position: Position::default(),
			value: json!(null),
			highlighted: false,
		}
	}

	#[test]
	fn empty_inputs_find_nothing() {
		assert!(find_by_path(&[], "$.x").is_none());
		let nodes = vec![node("a", "$")];
		assert!(find_by_path(&nodes, "").is_none());
		assert!(find_by_path(&nodes, "   ").is_none());
	}

	#[test]
	fn query_is_trimmed() {
		let nodes = vec![node("a", "$"), node("b", "$.a")];
		assert_eq!(find_by_path(&nodes, " $.a ").unwrap().id, "b");
	}

	#[test]
	fn first_match_in_list_order() {
		let nodes = vec![node("r", "$"), node("a", "$.a"), node("ab", "$.a.b")];
		// "$" does not contain "$.a", so the exact match is also the first
		// containment match here.
		assert_eq!(find_by_path(&nodes, "$.a").unwrap().id, "a");
	}

	#[test]
	fn substring_before_exact_wins() {
		// Pins the documented order dependence: an earlier substring match
		// beats a later exact match.
		let nodes = vec![node("ab", "$.ab"), node("a", "$.a")];
		assert_eq!(find_by_path(&nodes, "$.a").unwrap().id, "ab");
	}

	#[test]
	fn bare_fragment_matches_by_containment() {
		let data = build_graph(&json!({"products": [{"name": "x"}]}));
		let found = find_by_path(&data.nodes, "products[0].name").unwrap();
		assert_eq!(found.path, "$.products[0].name");
	}

	#[test]
	fn highlight_flags_exactly_one() {
		let nodes = vec![node("a", "$"), node("b", "$.b"), node("c", "$.c")];
		let out = highlight(&nodes, "b");
		assert_eq!(out.iter().filter(|n| n.highlighted).count(), 1);
		assert!(out.iter().find(|n| n.id == "b").unwrap().highlighted);
	}

	#[test]
	fn highlight_replaces_previous() {
		let nodes = vec![node("a", "$"), node("b", "$.b")];
		let out = highlight(&highlight(&nodes, "a"), "b");
		assert!(!out[0].highlighted);
		assert!(out[1].highlighted);
	}

	#[test]
	fn highlight_unknown_id_clears_all() {
		let nodes = vec![node("a", "$"), node("b", "$.b")];
		let out = highlight(&highlight(&nodes, "a"), "missing");
		assert!(out.iter().all(|n| !n.highlighted));
	}

	#[test]
	fn clear_highlight_resets() {
		let nodes = vec![node("a", "$"), node("b", "$.b")];
		let out = clear_highlight(&highlight(&nodes, "a"));
		assert!(out.iter().all(|n| !n.highlighted));
	}
}
