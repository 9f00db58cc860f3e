//! Grids of coloured squares that flee the mouse and spring back home.
//!
//! Main components:
//! - [`geometry`]: 2D points and distance.
//! - [`pointer`]: the cursor of one surface.
//! - [`pixel`]: one square and its per-frame motion.
//! - [`grid`]: character matrix to pixels.
//! - [`surface`]: pixels + cursor, cleared and repainted every frame.
//! - [`scheduler`]: the frame loop over all surfaces.
//! - [`draw`] / [`headless`]: window and windowless frame hosts.
//! - [`config`], [`color`], [`error`], [`types`]: plumbing.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod headless;
pub mod pixel;
pub mod pointer;
pub mod scheduler;
pub mod surface;
pub mod types;
