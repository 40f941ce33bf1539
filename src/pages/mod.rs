pub mod country;
pub mod home;
pub mod journal;
pub mod not_found;

use leptos::prelude::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum PageError {
	#[error("No cuisine profile for '{0}'")]
	UnknownCountry(String),
}

/// Lists the errors caught by an `ErrorBoundary`.
pub fn error_list(errors: ArcRwSignal<Errors>) -> impl IntoView {
	view! {
		<h1>"Uh oh! Something went wrong!"</h1>

		<p>"Errors: "</p>
		<ul>
			{move || {
				errors
					.get()
					.into_iter()
					.map(|(_, e)| view! { <li>{e.to_string()}</li> })
					.collect_view()
			}}
		</ul>
	}
}
