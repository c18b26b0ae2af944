//! Entrance sequence for the landing page.
//!
//! Each stage animates a group of elements, staggered by index, and is placed
//! relative to the end of the previous stage (a negative offset overlaps
//! them). The schedule is turned into per-element CSS `animation` shorthands so
//! the browser plays it once on mount without any script-driven tweening.

use super::ease::Ease;

/// Which group of elements a stage animates. Doubles as the CSS keyframes name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	/// Logo, links and status pill drop in from above.
	Nav,
	/// Headline lines fly in from deep z.
	Reveal,
	/// Hero visual scales up.
	HeroVisual,
	/// Badge, lead copy and form rise and fade in.
	FadeIn,
}

impl Stage {
	/// CSS keyframes played by elements of this stage.
	pub fn keyframes(self) -> &'static str {
		match self {
			Stage::Nav => "enter-nav",
			Stage::Reveal => "enter-reveal",
			Stage::HeroVisual => "enter-hero",
			Stage::FadeIn => "enter-fade",
		}
	}
}

/// One stage of the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct StageSpec {
	/// Element group this stage animates.
	pub stage: Stage,
	/// Seconds per element.
	pub duration: f64,
	/// Seconds between consecutive elements.
	pub stagger: f64,
	/// Timing curve for every element.
	pub ease: Ease,
	/// Start relative to the end of the previous stage.
	pub offset: f64,
	/// Number of elements in the group.
	pub count: usize,
}

impl StageSpec {
	fn span(&self) -> f64 {
		self.duration + self.stagger * self.count.saturating_sub(1) as f64
	}
}

/// Resolved schedule: absolute start time of every stage.
#[derive(Clone, Debug)]
pub struct EntranceTimeline {
	stages: Vec<(StageSpec, f64)>,
}

impl EntranceTimeline {
	/// Lay out `specs` one after another. Stage starts never go below zero.
	pub fn new(specs: Vec<StageSpec>) -> Self {
		let mut cursor = 0.0_f64;
		let stages = specs
			.into_iter()
			.map(|spec| {
				let start = (cursor + spec.offset).max(0.0);
				cursor = start + spec.span();
				(spec, start)
			})
			.collect();
		Self { stages }
	}

	/// The page's default sequence.
	pub fn landing() -> Self {
		Self::new(vec![
			StageSpec {
				stage: Stage::Nav,
				duration: 1.2,
				stagger: 0.1,
				ease: Ease::ExpoOut,
				offset: 0.0,
				count: 5,
			},
			StageSpec {
				stage: Stage::Reveal,
				duration: 2.0,
				stagger: 0.2,
				ease: Ease::ExpoOut,
				offset: -0.8,
				count: 2,
			},
			StageSpec {
				stage: Stage::HeroVisual,
				duration: 1.5,
				stagger: 0.0,
				ease: Ease::Power4Out,
				offset: -1.5,
				count: 1,
			},
			StageSpec {
				stage: Stage::FadeIn,
				duration: 1.0,
				stagger: 0.1,
				ease: Ease::Power3Out,
				offset: -1.0,
				count: 3,
			},
		])
	}

	fn find(&self, stage: Stage) -> Option<&(StageSpec, f64)> {
		self.stages.iter().find(|(spec, _)| spec.stage == stage)
	}

	/// Absolute start of element `index` in `stage`, in seconds.
	pub fn delay_for(&self, stage: Stage, index: usize) -> Option<f64> {
		let (spec, start) = self.find(stage)?;
		Some(start + spec.stagger * index as f64)
	}

	/// Inline style playing the element's entrance once.
	pub fn style_for(&self, stage: Stage, index: usize) -> String {
		match (self.find(stage), self.delay_for(stage, index)) {
			(Some((spec, _)), Some(delay)) => format!(
				"animation: {} {:.2}s {} {:.2}s both;",
				stage.keyframes(),
				spec.duration,
				spec.ease.css(),
				delay
			),
			_ => String::new(),
		}
	}

	/// When the last element finishes.
	pub fn total_duration(&self) -> f64 {
		self.stages
			.iter()
			.map(|(spec, start)| start + spec.span())
			.fold(0.0, f64::max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn landing_stages_overlap_as_scheduled() {
		let tl = EntranceTimeline::landing();
		// nav: 0 .. 1.2 + 4 * 0.1 = 1.6
		assert!(approx(tl.delay_for(Stage::Nav, 0).unwrap(), 0.0));
		assert!(approx(tl.delay_for(Stage::Nav, 4).unwrap(), 0.4));
		// reveal starts 0.8 before nav ends
		assert!(approx(tl.delay_for(Stage::Reveal, 0).unwrap(), 0.8));
		assert!(approx(tl.delay_for(Stage::Reveal, 1).unwrap(), 1.0));
		// reveal ends at 0.8 + 2.2 = 3.0, hero at 1.5 before that
		assert!(approx(tl.delay_for(Stage::HeroVisual, 0).unwrap(), 1.5));
		// hero ends at 3.0, fade-in 1.0 before
		assert!(approx(tl.delay_for(Stage::FadeIn, 0).unwrap(), 2.0));
		assert!(approx(tl.delay_for(Stage::FadeIn, 2).unwrap(), 2.2));
		assert!(approx(tl.total_duration(), 3.2));
	}

	#[test]
	fn start_never_goes_negative() {
		let tl = EntranceTimeline::new(vec![StageSpec {
			stage: Stage::FadeIn,
			duration: 1.0,
			stagger: 0.0,
			ease: Ease::Linear,
			offset: -5.0,
			count: 1,
		}]);
		assert_eq!(tl.delay_for(Stage::FadeIn, 0), Some(0.0));
	}

	#[test]
	fn style_uses_stage_keyframes_and_ease() {
		let tl = EntranceTimeline::landing();
		assert_eq!(
			tl.style_for(Stage::Reveal, 1),
			"animation: enter-reveal 2.00s cubic-bezier(0.16, 1, 0.3, 1) 1.00s both;"
		);
	}

	#[test]
	fn unknown_stage_has_no_style() {
		let tl = EntranceTimeline::new(Vec::new());
		assert_eq!(tl.delay_for(Stage::Nav, 0), None);
		assert!(tl.style_for(Stage::Nav, 0).is_empty());
		assert_eq!(tl.total_duration(), 0.0);
	}
}
