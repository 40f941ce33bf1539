use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::debug;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, NodeShape};
use crate::components::sunburst::SunburstCanvas;
use crate::config::AppConfig;
use crate::cuisine::{VisualType, build_kitchen_constellation_with, build_sunburst_data};
use crate::data::{Country, FlavorProfile, find_country};
use crate::journal::Journal;
use crate::pages::{PageError, error_list};

const LEGEND: [(VisualType, &str); 6] = [
	(VisualType::Basket, "Proteins"),
	(VisualType::Grain, "Starches"),
	(VisualType::Vegetable, "Produce"),
	(VisualType::Herb, "Fresh herbs"),
	(VisualType::Bottle, "Sauces & condiments"),
	(VisualType::Spice, "Spices & everything else"),
];

#[component]
fn FlavorBars(profile: FlavorProfile) -> impl IntoView {
	view! {
		<ul class="flavor-bars">
			{profile
				.axes()
				.map(|(axis, value)| {
					let pct = f64::from(value) * 100.0 / f64::from(FlavorProfile::MAX);
					view! {
						<li>
							<span class="axis">{axis.label()}</span>
							<span class="bar" style=format!("width: {pct:.0}%")></span>
							<span class="value">{value}</span>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

#[component]
fn ShapeLegend() -> impl IntoView {
	view! {
		<ul class="shape-legend">
			{LEGEND
				.into_iter()
				.map(|(visual, label)| {
					let glyph = NodeShape::from(visual).glyph();
					view! { <li><span class="glyph">{glyph.to_string()}</span>" "{label}</li> }
				})
				.collect_view()}
		</ul>
	}
}

#[component]
fn CountryJournal(country_id: String) -> impl IntoView {
	let journal = use_context::<RwSignal<Journal>>();
	let entries = Memo::new(move |_| {
		journal
			.map(|j| j.with(|j| j.for_country(&country_id).cloned().collect::<Vec<_>>()))
			.unwrap_or_default()
	});

	view! {
		<section class="country-journal">
			<h2>"Your journal"</h2>
			<Show
				when=move || !entries.read().is_empty()
				fallback=|| view! { <p>"Nothing logged yet. "<A href="/journal">"Add an entry"</A></p> }
			>
				<ul>
					{move || {
						entries
							.get()
							.into_iter()
							.map(|e| {
								view! {
									<li>
										<strong>{e.title}</strong>
										" · "{e.kind.label()}" · "{"★".repeat(usize::from(e.rating))}
										<span class="date">{e.date}</span>
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</Show>
		</section>
	}
}

#[component]
fn CountryDetail(country: &'static Country) -> impl IntoView {
	let limits = use_context::<AppConfig>().unwrap_or_default().signature_limits;
	let profile = &country.cuisine_profile;

	let constellation = build_kitchen_constellation_with(
		&profile.key_ingredients,
		&profile.spices_and_seasonings,
		&limits,
	);
	let sunburst = build_sunburst_data(&profile.key_ingredients, &profile.spices_and_seasonings);
	debug!(
		"{}: {} constellation nodes, {} pairings",
		country.id,
		constellation.nodes.len(),
		constellation.links.len()
	);
	let graph = GraphData::from(&constellation);

	view! {
		<div class="page country">
			<header>
				<A href="/">"← All countries"</A>
				<h1>{country.flag.clone()}" "{country.name.clone()}</h1>
				<p class="description">{profile.description.clone()}</p>
			</header>

			<section class="flavor">
				<h2>"Flavor profile"</h2>
				<FlavorBars profile=profile.flavor_profile />
			</section>

			<section class="constellation">
				<h2>"Kitchen constellation"</h2>
				<p class="subtitle">"Drag ingredients around. Scroll to zoom. Hover to see what pairs."</p>
				<ForceGraphCanvas data=graph height=480.0 />
				<ShapeLegend />
			</section>

			<section class="sunburst">
				<h2>"Pantry breakdown"</h2>
				<SunburstCanvas data=sunburst title=country.name.clone() />
			</section>

			<section class="dishes">
				<h2>"Popular dishes"</h2>
				<ul>
					{profile
						.popular_dishes
						.iter()
						.map(|d| view! { <li><strong>{d.name.clone()}</strong>" · "{d.description.clone()}</li> })
						.collect_view()}
				</ul>
				<h2>"Regional variations"</h2>
				<ul>
					{profile
						.regional_variations
						.iter()
						.map(|r| {
							view! {
								<li>
									<strong>{r.region.clone()}</strong>" · "{r.description.clone()}
									<span class="dishes">{r.dishes.join(", ")}</span>
								</li>
							}
						})
						.collect_view()}
				</ul>
				<p class="methods">"Cooking methods: "{profile.cooking_methods.join(", ")}</p>
			</section>

			<CountryJournal country_id=country.id.clone() />
		</div>
	}
}

/// Cuisine detail page for `/country/:id`.
#[component]
pub fn CountryPage() -> impl IntoView {
	let params = use_params_map();
	let country_id = move || params.read().get("id").unwrap_or_default();

	view! {
		<ErrorBoundary fallback=error_list>
			{move || {
				let id = country_id();
				find_country(&id)
					.map(|country| view! { <CountryDetail country=country /> })
					.ok_or(PageError::UnknownCountry(id))
			}}
		</ErrorBoundary>
	}
}
