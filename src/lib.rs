//! Tile layout engine: packs a changing set of rectangular tiles into a
//! container so they cover the most area their aspect-ratio limits allow,
//! optionally giving one "big" tile a larger slice, and animates tiles from
//! their previous positions to the new ones.

pub mod big_box;
pub mod clock;
pub mod config;
pub mod container;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod ratio;
pub mod surface;
pub mod transition;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Animate, AnimateOptions, LayoutConfig, LayoutOptions};
pub use container::{compute_layout, LayoutContainer, LayoutResult, Placement};
pub use error::ConfigError;
pub use geometry::{Rect, Size};
pub use ratio::RatioBand;
pub use surface::{Surface, TileInfo};
pub use transition::Easing;
