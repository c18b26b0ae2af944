//! Animated particle background.
//!
//! A full-viewport canvas of drifting points with:
//! - Lines between particles closer than 120 units, fading with distance
//! - Repulsion away from the pointer within 150 units
//! - Toroidal wrap at the viewport edges
//! - A "candle" variant drawn as a thin bar, green or red by vertical drift
//!
//! The simulation in [`particles`] has no DOM dependency and is driven by the
//! component through [`crate::components::frame_loop`].
//!
//! # Example
//!
//! ```ignore
//! view! { <ParticleFieldCanvas /> }
//! ```

mod component;
pub mod particles;
mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use particles::{Bounds, FieldConfig, Particle, ParticleField, Pointer};
pub use theme::{Color, FieldTheme};
