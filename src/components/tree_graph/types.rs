use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Object,
	Array,
	Primitive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub path: String,
	pub kind: NodeKind,
	pub position: Position,
	/// Original subtree, kept for inspection.
	pub value: Value,
	pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeGraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}
