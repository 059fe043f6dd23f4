/// A positioned rectangle, relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Available width and height of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// A `width` x `height` rect centred inside `self`.
    pub fn centered(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.left + (self.width - width) / 2.0,
            self.top + (self.height - height) / 2.0,
            width,
            height,
        )
    }

    /// Zero-size rect at the centre of `self`. New tiles grow out of it.
    pub fn collapsed(&self) -> Rect {
        self.centered(0.0, 0.0)
    }

    /// Linear interpolation of all four fields, `t` in [0, 1].
    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect::new(
            mix(self.left, to.left),
            mix(self.top, to.top),
            mix(self.width, to.width),
            mix(self.height, to.height),
        )
    }

    /// True if `other` lies within `self`, allowing `eps` of float slack.
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.left >= self.left - eps
            && other.top >= self.top - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }
}
