//! Static sections of the landing page.

use leptos::prelude::*;

use crate::components::timeline::{EntranceTimeline, Stage};

const NAV_LINKS: [&str; 3] = ["Ecosystem", "Algorithms", "Archives"];

/// Fixed top bar. Its five elements enter as the first timeline stage.
#[component]
pub fn NavBar(timeline: EntranceTimeline) -> impl IntoView {
	let style = move |i: usize| timeline.style_for(Stage::Nav, i);

	view! {
		<nav class="top-nav">
			<div class="nav-el brand" style=style(0)>
				<div class="brand-tile">"▲"</div>
				<span class="brand-word">"Edufintra"</span>
			</div>
			<div class="nav-links">
				{NAV_LINKS
					.iter()
					.enumerate()
					.map(|(i, item)| {
						view! {
							<a href="#" class="nav-el nav-link" style=style(i + 1)>
								{*item}
							</a>
						}
					})
					.collect_view()}
			</div>
			<div class="nav-el nav-status" style=style(4)>
				<span class="status-pill">
					<span class="pulse-dot" />
					"V0.2.0 Calibrating"
				</span>
			</div>
		</nav>
	}
}

#[component]
fn FeatureItem(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
	view! {
		<div class="feature group">
			<div class="feature-icon">
				<span>{icon}</span>
			</div>
			<div class="feature-copy">
				<h3>{title}</h3>
				<p>{desc}</p>
			</div>
		</div>
	}
}

/// Three-column feature teaser.
#[component]
pub fn FeatureGrid() -> impl IntoView {
	view! {
		<section class="feature-grid">
			<FeatureItem
				icon="▥"
				title="NEURAL ANALYTICS"
				desc="Moving beyond technical analysis into cognitive behavioral mapping of high-volume flows."
			/>
			<FeatureItem
				icon="◎"
				title="KINETIC TRAINING"
				desc="Haptic simulation modules that teach you to feel the market rhythm before you see it."
			/>
			<FeatureItem
				icon="↗"
				title="ALPHA SYNTHESIS"
				desc="Aggregating fragmented data into actionable sovereign intelligence protocols."
			/>
		</section>
	}
}

/// Decorative market strip. Two identical halves so the CSS scroll loops
/// seamlessly.
#[component]
pub fn Ticker() -> impl IntoView {
	let strip = || {
		(0..10)
			.map(|_| {
				view! {
					<span class="ticker-item">
						"BTC " <span class="up">"▲ 64,821"</span> " • "
						"ETH " <span class="down">"▼ 3,492"</span> " • "
						"SYSTEM " <span class="plain">"OPTIMIZING"</span> " • "
						"EDUFINTRA PROTOCOL " <span class="up">"ACTIVE"</span> " • "
						"GENESIS BLOCK " <span class="plain">"PENDING"</span> " • "
					</span>
				}
			})
			.collect_view()
	};

	view! {
		<div class="ticker-wrap">
			<div class="ticker">{strip()} {strip()}</div>
		</div>
	}
}
