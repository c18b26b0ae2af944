//! Pointer-tilted 3D hero visual.
//!
//! [`tilt`] holds the rotation math and the eased tween; the component listens
//! to window `mousemove` and writes the sampled rotation while the tween runs.
//! The frame loop idles once the card comes to rest.

mod component;
pub mod tilt;

pub use component::HeroVisual;
pub use tilt::{Rotation, TiltDriver, TiltFrame, TiltTween, target_rotation};
