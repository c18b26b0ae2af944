//! The landing page itself: entrance sequence, waitlist form, playground.
//!
//! On mount the page starts one insight fetch and one challenge fetch; they
//! run independently and each fills its own panel when it returns. Signals
//! are written with `try_*` so an answer arriving after unmount is dropped.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};

use super::sections::{FeatureGrid, NavBar, Ticker};
use super::state::{ChallengeDesk, SubscribeForm};
use crate::components::hero_tilt::HeroVisual;
use crate::components::particle_field::ParticleFieldCanvas;
use crate::components::timeline::{EntranceTimeline, Stage};
use crate::services::{GeminiClient, Insight, fetch_challenge, fetch_insight};

/// Full landing page: background, nav, hero, playground, features, ticker.
#[component]
pub fn LandingPage() -> impl IntoView {
	let timeline = EntranceTimeline::landing();
	debug!("edufintra: entrance sequence runs {:.1}s", timeline.total_duration());
	let client = StoredValue::new_local(GeminiClient::from_build_env());

	let insight = RwSignal::new(None::<Insight>);
	let desk = RwSignal::new(ChallengeDesk::default());
	let form = RwSignal::new(SubscribeForm::default());
	let email = RwSignal::new(String::new());

	let load_insight = move || {
		let Some(client) = client.try_get_value() else {
			return;
		};
		spawn_local(async move {
			let fetched = fetch_insight(&client).await;
			let _ = insight.try_set(Some(fetched.into_inner()));
		});
	};

	let load_challenge = move || {
		let Some(client) = client.try_get_value() else {
			return;
		};
		if desk.try_update(|d| d.begin()).is_none() {
			return;
		}
		spawn_local(async move {
			let fetched = fetch_challenge(&client).await;
			let _ = desk.try_update(|d| d.resolve(fetched.into_inner()));
		});
	};

	load_insight();
	load_challenge();

	on_cleanup(move || {
		let _ = desk.try_update(|d| d.teardown());
	});

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let value = email.get_untracked();
		if form.try_update(|f| f.submit(&value)) == Some(true) {
			info!("edufintra: waitlist form submitted");
		}
	};

	let fade = {
		let timeline = timeline.clone();
		move |i: usize| timeline.style_for(Stage::FadeIn, i)
	};

	view! {
		<div class="landing">
			<ParticleFieldCanvas />
			<div class="hologram-grid" />

			<NavBar timeline=timeline.clone() />

			<header class="hero">
				<div class="hero-copy">
					<div class="fade-in maintenance-badge" style=fade(0)>
						<span class="badge-icon">"⚠"</span>
						"Under Protocol Maintenance"
					</div>

					<h1 class="headline">
						<span class="reveal-3d" style=timeline.style_for(Stage::Reveal, 0)>
							"TRADING"
						</span>
						<span class="reveal-3d text-gradient" style=timeline.style_for(Stage::Reveal, 1)>
							"INTELLIGENCE"
						</span>
					</h1>

					<p class="fade-in lead" style=fade(1)>
						"The architecture of modern trading is being redefined. Edufintra is synchronizing its neural engine. Join the waitlist for the "
						<strong>"Mainnet Genesis."</strong>
					</p>

					<div class="fade-in subscribe" style=fade(2)>
						<Show
							when=move || !form.get().is_subscribed()
							fallback=|| {
								view! {
									<div class="success-txt">
										"NODE SYNCHRONIZED. PREPARE FOR ASCENSION."
									</div>
								}
							}
						>
							<form class="subscribe-form" on:submit=on_submit>
								<input
									type="email"
									required
									placeholder="Enter Neural Key (Email)..."
									prop:value=move || email.get()
									on:input=move |ev| email.set(event_target_value(&ev))
								/>
								<button type="submit">"Secure Access ✉"</button>
							</form>
						</Show>
					</div>
				</div>

				<div class="hero-visual" style=timeline.style_for(Stage::HeroVisual, 0)>
					<HeroVisual />
				</div>
			</header>

			<section class="playground">
				<div class="playground-intro">
					<div class="eyebrow">"▮ Alpha Playground"</div>
					<h2>"Sharpen Your " <br /> "Technical Edge"</h2>
					<p class="muted">
						"While we optimize the platform, engage with our logic sandbox. Solve complex market patterns generated by our neural core."
					</p>
					{move || {
						insight
							.get()
							.map(|i| {
								view! {
									<div class="insight-quote">
										<p>"\u{201c}" {i.wisdom} "\u{201d}"</p>
										<span>"\u{2014} Market Insight: " {i.topic}</span>
									</div>
								}
							})
					}}
				</div>

				<div class="playground-box glass-panel">
					<div class="playground-watermark">"〰"</div>
					{move || {
						desk.with(|d| {
							if d.is_loading() {
								view! {
									<div class="playground-loading">
										<div class="spinner" />
										<span>"Calibrating Market Logic..."</span>
									</div>
								}
									.into_any()
							} else {
								let (text, hint) = d
									.current()
									.map(|c| (c.challenge.clone(), c.hint.clone()))
									.unwrap_or_default();
								view! {
									<div
										class="playground-content playground-reveal"
										data-reveal=d.reveal_count().to_string()
									>
										<div class="eyebrow">"◎ Pattern Verification"</div>
										<h3>{text}</h3>
										<div class="playground-actions">
											<button on:click=move |_| load_challenge()>
												"Generate Pattern"
											</button>
											<p class="hint">"Logic: " {hint}</p>
										</div>
									</div>
								}
									.into_any()
							}
						})
					}}
				</div>
			</section>

			<FeatureGrid />
			<Ticker />
		</div>
	}
}
