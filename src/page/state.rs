//! UI state for the waitlist form and the challenge panel.

use crate::services::Challenge;

/// Waitlist form. Once subscribed it stays subscribed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubscribeForm {
	/// Form is showing.
	#[default]
	Idle,
	/// Success text replaces the form.
	Subscribed,
}

impl SubscribeForm {
	/// Handle a form submission. Returns whether the state changed.
	///
	/// Only presence is checked; the browser's `type="email" required` already
	/// blocks obviously empty submissions before this runs.
	pub fn submit(&mut self, email: &str) -> bool {
		match self {
			SubscribeForm::Idle if !email.trim().is_empty() => {
				*self = SubscribeForm::Subscribed;
				true
			}
			_ => false,
		}
	}

	/// Whether the success text should show.
	pub fn is_subscribed(self) -> bool {
		self == SubscribeForm::Subscribed
	}
}

/// Challenge panel: what is shown and whether requests are still out.
///
/// Requests may complete in any order. Each answer replaces the panel content
/// as it arrives, so the last one to resolve is what stays on screen.
#[derive(Clone, Debug, Default)]
pub struct ChallengeDesk {
	in_flight: usize,
	shown: Option<Challenge>,
	reveals: u32,
	closed: bool,
}

impl ChallengeDesk {
	/// Register a new request.
	pub fn begin(&mut self) {
		if !self.closed {
			self.in_flight += 1;
		}
	}

	/// Deliver one answer. Returns whether the display changed.
	pub fn resolve(&mut self, challenge: Challenge) -> bool {
		if self.closed {
			return false;
		}
		self.in_flight = self.in_flight.saturating_sub(1);
		self.shown = Some(challenge);
		self.reveals += 1;
		true
	}

	/// Spinner stays up while any request is outstanding.
	pub fn is_loading(&self) -> bool {
		self.in_flight > 0
	}

	/// Challenge on screen, if any answer has arrived.
	pub fn current(&self) -> Option<&Challenge> {
		self.shown.as_ref()
	}

	/// Bumped on every applied answer; keys the panel's reveal animation.
	pub fn reveal_count(&self) -> u32 {
		self.reveals
	}

	/// The panel is gone; later answers are dropped.
	pub fn teardown(&mut self) {
		self.closed = true;
		self.in_flight = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn challenge(text: &str) -> Challenge {
		Challenge {
			challenge: text.to_string(),
			hint: format!("hint for {text}"),
		}
	}

	#[test]
	fn subscribe_transitions_once_with_an_email() {
		let mut form = SubscribeForm::default();

		assert!(form.submit("trader@example.com"));
		assert!(form.is_subscribed());
		assert!(!form.submit("another@example.com"));
		assert_eq!(form, SubscribeForm::Subscribed);
	}

	#[test]
	fn blank_email_does_not_subscribe() {
		let mut form = SubscribeForm::default();

		assert!(!form.submit(""));
		assert!(!form.submit("   "));
		assert_eq!(form, SubscribeForm::Idle);
	}

	#[test]
	fn single_request_round_trip() {
		let mut desk = ChallengeDesk::default();
		assert!(!desk.is_loading());
		assert_eq!(desk.current(), None);

		desk.begin();
		assert!(desk.is_loading());
		assert!(desk.resolve(challenge("a")));

		assert!(!desk.is_loading());
		assert_eq!(desk.current(), Some(&challenge("a")));
		assert_eq!(desk.reveal_count(), 1);
	}

	#[test]
	fn loading_persists_until_every_request_returns() {
		let mut desk = ChallengeDesk::default();
		desk.begin();
		desk.begin();

		desk.resolve(challenge("first"));
		assert!(desk.is_loading());

		desk.resolve(challenge("second"));
		assert!(!desk.is_loading());
		assert_eq!(desk.current(), Some(&challenge("second")));
	}

	#[test]
	fn last_resolved_answer_wins_when_requests_overlap() {
		let mut desk = ChallengeDesk::default();
		desk.begin();
		desk.begin();

		// The newer request answers first, the older one last.
		assert!(desk.resolve(challenge("B")));
		assert!(desk.is_loading());
		assert!(desk.resolve(challenge("A")));

		assert!(!desk.is_loading());
		assert_eq!(desk.current(), Some(&challenge("A")));
		assert_eq!(desk.reveal_count(), 2);
	}

	#[test]
	fn answers_after_teardown_are_ignored() {
		let mut desk = ChallengeDesk::default();
		desk.begin();

		desk.teardown();

		assert!(!desk.resolve(challenge("late")));
		assert_eq!(desk.current(), None);
		assert!(!desk.is_loading());
	}
}
