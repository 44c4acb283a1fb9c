use leptos::prelude::*;
use log::{info, warn};

use crate::components::tree_graph::{
	TreeGraphCanvas, TreeGraphData, clear_highlight, find_by_path, highlight, layout,
	parse_document,
};

/// Built-in document shown on first load and restored by "Reset to Sample".
const SAMPLE_JSON: &str = r#"{
  "user": {
    "id": 1,
    "name": "John Doe",
    "email": "john@example.com",
    "active": true,
    "address": {
      "street": "123 Main St",
      "city": "New York",
      "zipcode": "10001"
    },
    "hobbies": ["reading", "gaming", "coding"]
  },
  "products": [
    {
      "id": 101,
      "name": "Laptop",
      "price": 999.99,
      "inStock": true
    },
    {
      "id": 102,
      "name": "Mouse",
      "price": 29.99,
      "inStock": false
    }
  ]
}"#;

/// Default Home Page: JSON input, search controls, and the tree canvas.
///
/// All application state lives here as signals; the core functions are pure
/// and get every input passed in. Each action replaces the graph wholesale.
#[component]
pub fn Home() -> impl IntoView {
	let (json_input, set_json_input) = signal(SAMPLE_JSON.to_string());
	let (error, set_error) = signal(String::new());
	let (graph, set_graph) = signal(TreeGraphData::default());
	let (search_path, set_search_path) = signal(String::new());
	let (search_message, set_search_message) = signal(String::new());
	let (dark_mode, set_dark_mode) = signal(false);

	let visualize = move |_| {
		set_error.set(String::new());
		set_search_message.set(String::new());
		match parse_document(&json_input.get()) {
			Ok(data) => {
				let nodes = layout(&data.nodes, &data.edges);
				info!("visualized {} nodes, {} edges", nodes.len(), data.edges.len());
				set_graph.set(TreeGraphData {
					nodes,
					edges: data.edges,
				});
			}
			Err(err) => {
				warn!("{err}");
				set_error.set(err.to_string());
				set_graph.set(TreeGraphData::default());
			}
		}
	};

	let search = move |_| {
		let query = search_path.get();
		if query.trim().is_empty() {
			set_search_message.set("Please enter a search path".to_string());
			return;
		}
		let data = graph.get();
		let found = find_by_path(&data.nodes, &query).map(|n| (n.id.clone(), n.path.clone()));
		match found {
			Some((id, path)) => {
				info!("search {query:?} matched {path}");
				set_search_message.set(format!("Match found: {path}"));
				set_graph.set(TreeGraphData {
					nodes: highlight(&data.nodes, &id),
					edges: data.edges,
				});
			}
			None => {
				info!("search {query:?} found no match");
				set_search_message.set("No match found".to_string());
				set_graph.set(TreeGraphData {
					nodes: clear_highlight(&data.nodes),
					edges: data.edges,
				});
			}
		}
	};

	let clear = move |_| {
		set_json_input.set(String::new());
		set_graph.set(TreeGraphData::default());
		set_error.set(String::new());
		set_search_path.set(String::new());
		set_search_message.set(String::new());
	};

	let reset = move |_| {
		set_json_input.set(SAMPLE_JSON.to_string());
		set_error.set(String::new());
		set_search_path.set(String::new());
		set_search_message.set(String::new());
	};

	// Fire-and-forget clipboard write; the returned promise is not awaited.
	let on_node_click = Callback::new(move |path: String| {
		if let Some(window) = web_sys::window() {
			let _ = window.navigator().clipboard().write_text(&path);
		}
		set_search_message.set(format!("Copied path: {path}"));
	});

	let toggle_dark = move |_| set_dark_mode.update(|dark| *dark = !*dark);

	view! {
		<div class=move || {
			if dark_mode.get() { "visualizer-container dark-mode" } else { "visualizer-container" }
		}>
			<div class="header">
				<h1>"JSON Tree Visualizer"</h1>
				<button class="theme-toggle" on:click=toggle_dark>
					{move || if dark_mode.get() { "Light" } else { "Dark" }}
				</button>
			</div>

			<div class="controls-panel">
				<div class="input-section">
					<div class="input-header">
						<label>"JSON Input:"</label>
						<div class="input-buttons">
							<button class="btn-secondary" on:click=reset>
								"Reset to Sample"
							</button>
							<button class="btn-secondary" on:click=clear>
								"Clear All"
							</button>
						</div>
					</div>
					<textarea
						prop:value=move || json_input.get()
						on:input=move |ev| set_json_input.set(event_target_value(&ev))
						placeholder="Paste your JSON here..."
						rows=10
						class="json-input"
					></textarea>
					<Show when=move || !error.get().is_empty()>
						<div class="error-message">{move || error.get()}</div>
					</Show>
					<button class="btn-primary" on:click=visualize>
						"Generate Tree"
					</button>
				</div>

				<div class="search-section">
					<label>"Search by JSON Path:"</label>
					<div class="search-controls">
						<input
							type="text"
							prop:value=move || search_path.get()
							on:input=move |ev| set_search_path.set(event_target_value(&ev))
							placeholder="e.g., $.user.address.city or products[0].name"
							class="search-input"
						/>
						<button class="btn-primary" on:click=search>
							"Search"
						</button>
					</div>
					<Show when=move || !search_message.get().is_empty()>
						<div class=move || {
							if search_message.get().contains("No match") {
								"search-message not-found"
							} else {
								"search-message found"
							}
						}>{move || search_message.get()}</div>
					</Show>
				</div>
			</div>

			<div class="tree-container">
				<div class="tree-info">
					"Click on any node to copy its path | Drag to pan | Scroll to zoom"
				</div>
				<Show
					when=move || !graph.get().nodes.is_empty()
					fallback=|| {
						view! {
							<div class="empty-state">
								<p>"Enter JSON and click \"Generate Tree\" to visualize"</p>
							</div>
						}
					}
				>
					<TreeGraphCanvas data=graph dark=dark_mode on_node_click=on_node_click />
				</Show>
			</div>
		</div>
	}
}
