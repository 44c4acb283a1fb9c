//! Binary entry point: mount the app into the document body.

use json_tree_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
