use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::{Country, countries_by_region};
use crate::pages::error_list;

#[component]
fn CountryCard(country: &'static Country) -> impl IntoView {
	let profile = &country.cuisine_profile;
	let (axis, _) = profile.flavor_profile.dominant();
	let headline: Vec<&str> = profile
		.key_ingredients
		.iter()
		.take(3)
		.map(String::as_str)
		.collect();

	view! {
		<li class="country-card">
			<A href=format!("/country/{}", country.id)>
				<span class="flag">{country.flag.clone()}</span>
				<span class="name">{country.name.clone()}</span>
			</A>
			<p class="dominant">{format!("Mostly {}", axis.label().to_lowercase())}</p>
			<p class="staples">{headline.join(", ")}</p>
		</li>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let regions = countries_by_region();

	view! {
		<ErrorBoundary fallback=error_list>
			<div class="page home">
				<header>
					<h1>"Cuisine Atlas"</h1>
					<p class="subtitle">"Pick a country to explore its pantry."</p>
				</header>
				{regions
					.into_iter()
					.map(|(region, members)| {
						view! {
							<section class="region">
								<h2>{region}</h2>
								<ul class="country-grid">
									{members
										.into_iter()
										.map(|country| view! { <CountryCard country=country /> })
										.collect_view()}
								</ul>
							</section>
						}
					})
					.collect_view()}
			</div>
		</ErrorBoundary>
	}
}
