use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use log::{info, warn};

use crate::config::AppConfig;
use crate::data::{countries, find_country};
use crate::journal::preferences::rank_preferences;
use crate::journal::{EntryKind, Journal, NewEntry};

fn today() -> String {
	let iso = String::from(js_sys::Date::new_0().to_iso_string());
	iso.chars().take(10).collect()
}

fn country_name(id: &str) -> String {
	find_country(id).map_or_else(|| id.to_string(), |c| format!("{} {}", c.flag, c.name))
}

#[component]
fn EntryForm(journal: RwSignal<Journal>) -> impl IntoView {
	let kind = RwSignal::new(EntryKind::DishTry.key().to_string());
	let country = RwSignal::new(countries().first().map(|c| c.id.clone()).unwrap_or_default());
	let title = RwSignal::new(String::new());
	let date = RwSignal::new(today());
	let rating = RwSignal::new("4".to_string());
	let notes = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let entry = NewEntry {
			kind: EntryKind::from_key(&kind.get_untracked()).unwrap_or(EntryKind::DishTry),
			country_id: country.get_untracked(),
			title: title.get_untracked(),
			date: date.get_untracked(),
			rating: rating.get_untracked().parse().unwrap_or(0),
			notes: notes.get_untracked(),
		};
		match journal.try_update(|j| j.add(entry)) {
			Some(Ok(id)) => {
				info!("Journal entry {id} added");
				title.set(String::new());
				notes.set(String::new());
				error.set(None);
			}
			Some(Err(e)) => error.set(Some(e.to_string())),
			None => warn!("Journal signal disposed; entry dropped"),
		}
	};

	view! {
		<form class="entry-form" on:submit=on_submit>
			<label>
				"What"
				<select prop:value=move || kind.get() on:change=move |ev| kind.set(event_target_value(&ev))>
					{EntryKind::ALL
						.into_iter()
						.map(|k| view! { <option value=k.key()>{k.label()}</option> })
						.collect_view()}
				</select>
			</label>
			<label>
				"Country"
				<select prop:value=move || country.get() on:change=move |ev| country.set(event_target_value(&ev))>
					{countries()
						.iter()
						.map(|c| view! { <option value=c.id.clone()>{country_name(&c.id)}</option> })
						.collect_view()}
				</select>
			</label>
			<label>"Title" <input type="text" bind:value=title /></label>
			<label>"Date" <input type="date" bind:value=date /></label>
			<label>
				"Rating"
				<select prop:value=move || rating.get() on:change=move |ev| rating.set(event_target_value(&ev))>
					{(NewEntry::MIN_RATING..=NewEntry::MAX_RATING)
						.map(|r| view! { <option value=r.to_string()>{"★".repeat(usize::from(r))}</option> })
						.collect_view()}
				</select>
			</label>
			<label>"Notes" <textarea bind:value=notes></textarea></label>
			<button type="submit">"Add entry"</button>
			{move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
		</form>
	}
}

#[component]
fn Preferences(journal: RwSignal<Journal>) -> impl IntoView {
	let weights = use_context::<AppConfig>().unwrap_or_default().preference_weights;
	let ranking = Memo::new(move |_| journal.with(|j| rank_preferences(j, &weights)));

	view! {
		<section class="preferences">
			<h2>"What you like best"</h2>
			<Show
				when=move || !ranking.read().is_empty()
				fallback=|| view! { <p>"Rate a few dishes to see your favourite cuisines."</p> }
			>
				<ol>
					{move || {
						ranking
							.get()
							.into_iter()
							.map(|p| {
								view! {
									<li>
										<A href=format!("/country/{}", p.country_id)>{country_name(&p.country_id)}</A>
										{format!(" · {:.2} ({} entries, mean {:.1})", p.score, p.entries, p.mean_rating)}
									</li>
								}
							})
							.collect_view()
					}}
				</ol>
			</Show>
		</section>
	}
}

/// Food journal page: log entries, delete them, and see the ranking.
#[component]
pub fn JournalPage() -> impl IntoView {
	let Some(journal) = use_context::<RwSignal<Journal>>() else {
		warn!("Journal page rendered without a journal in context");
		return view! { <p>"The journal is unavailable."</p> }.into_any();
	};

	let remove = move |id: u64| {
		journal.update(|j| match j.remove(id) {
			Ok(e) => info!("Journal entry {} removed", e.id),
			Err(e) => warn!("{e}"),
		});
	};

	view! {
		<div class="page journal">
			<header>
				<A href="/">"← All countries"</A>
				<h1>"Food journal"</h1>
			</header>
			<EntryForm journal=journal />
			<section class="entries">
				<h2>"Entries"</h2>
				<ul>
					{move || {
						journal
							.get()
							.entries()
							.iter()
							.rev()
							.map(|e| {
								let id = e.id;
								view! {
									<li>
										<strong>{e.title.clone()}</strong>
										{format!(" · {} · {} · {}", e.kind, country_name(&e.country_id), e.date)}
										" "{"★".repeat(usize::from(e.rating))}
										{(!e.notes.is_empty()).then(|| view! { <p class="notes">{e.notes.clone()}</p> })}
										<button on:click=move |_| remove(id)>"Delete"</button>
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</section>
			<Preferences journal=journal />
		</div>
	}
	.into_any()
}
