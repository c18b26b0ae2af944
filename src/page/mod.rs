//! Page composition and the little state it owns.

mod component;
mod sections;
pub mod state;

pub use component::LandingPage;
pub use state::{ChallengeDesk, SubscribeForm};
