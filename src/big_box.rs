use crate::geometry::Rect;
use crate::ratio::{self, RatioBand};

/// How a container is split between the big tile and everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Allocation {
    /// The big tile itself, clamped and centred in `big_region`.
    pub big: Rect,
    /// The slice of the container reserved for the big tile.
    pub big_region: Rect,
    /// What is left for the ordinary tiles.
    pub remainder: Rect,
}

/// Carve a `big_percentage` slice off `region` for the big tile.
///
/// Wide containers are split along the width, tall or square ones along the
/// height. The big slice is a whole number of pixels so the remainder is
/// too. `big_first` puts the big slice on the left/top edge.
pub fn allocate(
    region: Rect,
    big_percentage: f64,
    big_first: bool,
    big_band: RatioBand,
) -> Allocation {
    let (big_region, remainder) = if region.width > region.height {
        let big_w = (region.width * big_percentage).floor();
        let rest_w = region.width - big_w;
        if big_first {
            (
                Rect::new(region.left, region.top, big_w, region.height),
                Rect::new(region.left + big_w, region.top, rest_w, region.height),
            )
        } else {
            (
                Rect::new(region.left + rest_w, region.top, big_w, region.height),
                Rect::new(region.left, region.top, rest_w, region.height),
            )
        }
    } else {
        let big_h = (region.height * big_percentage).floor();
        let rest_h = region.height - big_h;
        if big_first {
            (
                Rect::new(region.left, region.top, region.width, big_h),
                Rect::new(region.left, region.top + big_h, region.width, rest_h),
            )
        } else {
            (
                Rect::new(region.left, region.top + rest_h, region.width, big_h),
                Rect::new(region.left, region.top, region.width, rest_h),
            )
        }
    };

    Allocation {
        big: fit(big_region, big_band),
        big_region,
        remainder,
    }
}

/// A single tile sized like a one-cell grid: whole pixels, clamped, centred.
pub fn fit(region: Rect, band: RatioBand) -> Rect {
    let (w, h) = ratio::clamp(region.width.floor(), region.height.floor(), band);
    region.centered(w, h)
}
