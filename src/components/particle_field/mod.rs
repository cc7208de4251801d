//! Ambient particle background for the hero section.
//!
//! Renders a fixed set of softly bouncing dots on a full-viewport HTML canvas:
//! - Exactly [`PARTICLE_COUNT`] particles seeded uniformly across the surface
//! - Constant per-particle velocity, flipped on contact with an edge
//! - Canvas tracks window resizes without reshuffling particles
//! - Frame loop stops and listeners detach when the component is disposed
//!
//! # Example
//!
//! ```ignore
//! use hero_particles::{FieldStyle, ParticleFieldCanvas};
//!
//! view! {
//!     <div class="hero-background">
//!         <ParticleFieldCanvas field_style=FieldStyle::default() />
//!     </div>
//! }
//! ```

mod component;
pub mod field;
pub mod frame_loop;
pub mod mount;
pub mod particles;
pub mod render;
pub mod style;

pub use component::ParticleFieldCanvas;
pub use field::{PARTICLE_COUNT, ParticleField};
pub use style::{Color, FieldStyle, StyleError};
