/// Allowed height/width band for a tile.
///
/// Ratios are height divided by width: `3.0 / 2.0` permits a tile half again
/// as tall as it is wide, `9.0 / 16.0` permits a widescreen tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBand {
    pub min: f64,
    pub max: f64,
}

/// Shape assumed for tiles whose content does not report one (4:3 video).
pub const DEFAULT_NATURAL_RATIO: f64 = 3.0 / 4.0;

impl RatioBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A band that admits exactly one shape.
    pub fn fixed(ratio: f64) -> Self {
        Self {
            min: ratio,
            max: ratio,
        }
    }
}

/// Trim a cell so its height/width falls inside `band`.
///
/// Only ever shrinks: a cell that is too tall loses height, one that is too
/// wide loses width, so the result still fits in the original cell.
pub fn clamp(width: f64, height: f64, band: RatioBand) -> (f64, f64) {
    let ratio = height / width;
    if ratio > band.max {
        (width, width * band.max)
    } else if ratio < band.min {
        (height / band.min, height)
    } else {
        (width, height)
    }
}
