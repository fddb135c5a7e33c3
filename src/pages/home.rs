use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};

use crate::components::graph_canvas::{GraphCanvas, GraphData};
use crate::model::{Coloring, Graph, read_coloring, read_graph};

/// Reads the file selected in the input behind `ev` as UTF-8 text and
/// hands it to `on_text`. Does nothing when the selection was cleared.
fn read_text_file(ev: &Event, on_text: impl Fn(String) + 'static) {
	let Some(input) = ev
		.target()
		.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
	else {
		return;
	};
	let Some(file) = input.files().and_then(|files| files.get(0)) else {
		return;
	};

	let reader = FileReader::new().unwrap();
	let reader_result = reader.clone();
	let onload = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
		if let Some(text) = reader_result.result().ok().and_then(|v| v.as_string()) {
			on_text(text);
		}
	});
	reader.set_onload(Some(onload.as_ref().unchecked_ref()));
	// The closure must outlive this call; FileReader holds the only handle.
	onload.forget();
	let _ = reader.read_as_text(&file);
}

/// Upload page: graph and coloring file pickers feeding the canvas.
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(None::<Graph>);
	let coloring = RwSignal::new(None::<Coloring>);
	let error = RwSignal::new(None::<String>);

	let on_graph_file = move |ev: Event| {
		read_text_file(&ev, move |text| match read_graph(&text) {
			Ok(parsed) => {
				log::info!(
					"Loaded graph: {} vertices, {} edges declared",
					parsed.declared_vertices,
					parsed.declared_edges
				);
				error.set(None);
				graph.set(Some(parsed));
			}
			Err(err) => {
				error.set(Some(err.to_string()));
				graph.set(None);
			}
		});
	};

	let on_coloring_file = move |ev: Event| {
		read_text_file(&ev, move |text| {
			let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
			match read_coloring(&text, &mut rng) {
				Ok(parsed) => {
					log::info!("Loaded coloring for {} vertices", parsed.len());
					error.set(None);
					coloring.set(Some(parsed));
				}
				Err(err) => {
					error.set(Some(err.to_string()));
					coloring.set(None);
				}
			}
		});
	};

	let data = Signal::derive(move || {
		graph.with(|graph| match graph {
			Some(graph) => {
				coloring.with(|coloring| GraphData::from_model(graph, coloring.as_ref()))
			}
			None => GraphData::default(),
		})
	});

	view! {
		<div class="app">
			<div class="upload-panel">
				<h1>"Graph Coloring Canvas"</h1>
				<label>
					"Select a graph model"
					<input type="file" on:change=on_graph_file />
				</label>
				<label>
					"Select a coloring model"
					<input type="file" on:change=on_coloring_file />
				</label>
				{move || {
					error
						.get()
						.map(|message| view! { <p class="error-banner">{message}</p> })
				}}
			</div>
			<GraphCanvas data=data />
		</div>
	}
}
