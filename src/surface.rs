use crate::geometry::{Rect, Size};
use crate::ratio::DEFAULT_NATURAL_RATIO;
use std::fmt::Debug;
use std::hash::Hash;

/// One tile as reported by a [`Surface`] on a given layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TileInfo<Id> {
    pub id: Id,
    /// Wants the preferential big slot.
    pub big: bool,
    /// Height/width of the tile's content (a video's intrinsic shape), if known.
    pub natural_ratio: Option<f64>,
}

impl<Id> TileInfo<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            big: false,
            natural_ratio: None,
        }
    }

    pub fn big(id: Id) -> Self {
        Self {
            id,
            big: true,
            natural_ratio: None,
        }
    }

    pub fn with_natural_ratio(mut self, ratio: f64) -> Self {
        self.natural_ratio = Some(ratio);
        self
    }

    /// Natural ratio, falling back to 4:3 when unknown or nonsensical.
    pub fn shape(&self) -> f64 {
        self.natural_ratio
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(DEFAULT_NATURAL_RATIO)
    }
}

/// The rendering side a layout container drives.
///
/// The container asks for the size and tile list fresh on every pass and
/// pushes positions back through [`Surface::apply_rect`].
pub trait Surface {
    type Id: Clone + Eq + Hash + Debug;

    fn size(&self) -> Size;

    /// Current tiles in insertion order.
    fn tiles(&self) -> Vec<TileInfo<Self::Id>>;

    /// Make `rect` the visible position and size of tile `id`.
    fn apply_rect(&mut self, id: &Self::Id, rect: Rect);
}
