//! Cuisine Atlas: a Leptos client-side app for exploring national cuisines
//! through their ingredients, plus a personal food journal.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{error, info};

// Modules
pub mod config;
pub mod cuisine;
pub mod data;
pub mod journal;
mod components;
mod pages;

use crate::config::AppConfig;
use crate::journal::storage;

// Top-Level pages
use crate::pages::country::CountryPage;
use crate::pages::home::Home;
use crate::pages::journal::JournalPage;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(AppConfig::default().log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router for the atlas, country and journal pages, with a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::default();
	let journal = RwSignal::new(storage::load_or_default(&config.journal_key));
	let journal_key = config.journal_key.clone();
	// the first run only subscribes; what was just loaded is already stored
	Effect::new(move |subscribed: Option<()>| {
		journal.with(|j| {
			if subscribed.is_none() {
				return;
			}
			if let Err(e) = storage::save(&journal_key, j) {
				error!("Journal not saved: {e}");
			}
		});
	});
	provide_context(journal);
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Cuisine Atlas" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="top-nav">
				<A href="/">"Atlas"</A>
				<A href="/journal">"Journal"</A>
			</nav>
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/country/:id") view=CountryPage />
					<Route path=path!("/journal") view=JournalPage />
				</Routes>
			</main>
		</Router>
	}
}
