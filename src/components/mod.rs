//! Building blocks of simulated objects.
//!
//! Overview
//! - `interpolated` – current/previous position pair and blending
//! - `object` – an interpolated position paired with a sprite
//! - `sprite` – texture reference, size, pivot and orientation
pub mod interpolated;
pub mod object;
pub mod sprite;
