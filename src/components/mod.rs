//! UI components and the animation plumbing behind them.

pub mod dom;
pub mod ease;
pub mod frame_loop;
pub mod hero_tilt;
pub mod particle_field;
pub mod timeline;
