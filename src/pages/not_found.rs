use leptos::prelude::*;

/// 404 page for unmatched routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="app">
			<h1>"Not Found"</h1>
			<p>
				<a href="/">"Back to the canvas"</a>
			</p>
		</div>
	}
}
