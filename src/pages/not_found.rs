use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page not-found">
			<h1>"Nothing cooking here"</h1>
			<p>"That page doesn't exist."</p>
			<A href="/">"Back to the atlas"</A>
		</div>
	}
}
