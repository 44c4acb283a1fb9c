mod build;
mod component;
mod layout;
mod render;
mod search;
mod state;
mod types;

pub use build::{ParseError, build_graph, parse_document};
pub use component::TreeGraphCanvas;
pub use layout::layout;
pub use search::{clear_highlight, find_by_path, highlight};
pub use types::{GraphEdge, GraphNode, NodeKind, Position, TreeGraphData};
