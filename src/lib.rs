//! Grid raycaster: walls by per-column ray marching, decorations as
//! depth-tested billboards.
//!
//! ```text
//! image ──► world::GridMap ──► world::Scene ─┐
//!                                            ├─► renderer::Software ──► Frame
//!            sim::apply_input ──► Pose ──────┘
//! ```

pub mod assets;
pub mod config;
pub mod renderer;
pub mod sim;
pub mod world;
