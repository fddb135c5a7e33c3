//! Trunk entry point: mount the app to the document body.

use graph_coloring_canvas::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
