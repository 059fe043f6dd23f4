use crate::geometry::Rect;
use crate::ratio::{self, RatioBand};

/// Winning partition for a set of equally sized boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
    pub box_width: f64,
    pub box_height: f64,
    /// Left padding that centres a full row in the available width. Short
    /// rows start half a box further in for every missing box.
    pub offset_x: f64,
    /// Top padding that centres all rows in the available height.
    pub offset_y: f64,
}

impl GridDimensions {
    /// Total area covered by `count` boxes at the effective size.
    pub fn total_area(&self, count: usize) -> f64 {
        count as f64 * self.box_width * self.box_height
    }
}

/// Try every column count and keep the one whose boxes cover the most area.
/// Ties go to the fewer-column partition. Returns `None` for zero boxes.
pub fn best_dimensions(
    count: usize,
    width: f64,
    height: f64,
    band: RatioBand,
) -> Option<GridDimensions> {
    if count == 0 {
        return None;
    }

    let mut best: Option<(f64, GridDimensions)> = None;
    for cols in 1..=count {
        let rows = count.div_ceil(cols);
        // Cells are whole pixels; the clamp may then make them fractional
        let cell_w = (width / cols as f64).floor();
        let cell_h = (height / rows as f64).floor();
        let (box_width, box_height) = ratio::clamp(cell_w, cell_h, band);
        let candidate = GridDimensions {
            cols,
            rows,
            box_width,
            box_height,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let area = candidate.total_area(count);

        let better = match best {
            Some((best_area, _)) => area > best_area,
            None => true,
        };
        if better {
            best = Some((area, candidate));
        }
    }

    let (_, mut dims) = best?;
    dims.offset_x = (width - dims.cols as f64 * dims.box_width) / 2.0;
    dims.offset_y = (height - dims.rows as f64 * dims.box_height) / 2.0;
    tracing::debug!(
        count,
        cols = dims.cols,
        rows = dims.rows,
        box_width = dims.box_width,
        box_height = dims.box_height,
        "grid partition chosen"
    );
    Some(dims)
}

/// Lay out `count` boxes inside `region`, row-major.
/// Every row is packed and centred horizontally, the block is centred
/// vertically, so a short final row sits in the middle.
pub fn arrange(count: usize, region: Rect, band: RatioBand) -> Vec<Rect> {
    let Some(dims) = best_dimensions(count, region.width, region.height, band) else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(count);
    let mut y = region.top + dims.offset_y;
    for row in 0..dims.rows {
        let first = row * dims.cols;
        let in_row = dims.cols.min(count - first);
        let missing = (dims.cols - in_row) as f64;
        let mut x = region.left + dims.offset_x + missing * dims.box_width / 2.0;
        for _ in 0..in_row {
            result.push(Rect::new(x, y, dims.box_width, dims.box_height));
            x += dims.box_width;
        }
        y += dims.box_height;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_band() -> RatioBand {
        RatioBand::new(9.0 / 16.0, 3.0 / 2.0)
    }

    #[test]
    fn zero_boxes_is_a_no_op() {
        assert!(best_dimensions(0, 400.0, 300.0, default_band()).is_none());
        assert!(arrange(0, Rect::new(0.0, 0.0, 400.0, 300.0), default_band()).is_empty());
    }

    #[test]
    fn single_box_is_clamped_and_centred() {
        let rects = arrange(1, Rect::new(0.0, 0.0, 80.0, 300.0), default_band());
        assert_eq!(rects, vec![Rect::new(0.0, 90.0, 80.0, 120.0)]);
    }

    #[test]
    fn two_boxes_side_by_side() {
        let dims = best_dimensions(2, 400.0, 300.0, default_band()).unwrap();
        assert_eq!((dims.cols, dims.rows), (2, 1));
        assert_eq!((dims.box_width, dims.box_height), (200.0, 300.0));
        assert_eq!((dims.offset_x, dims.offset_y), (0.0, 0.0));
    }

    #[test]
    fn five_boxes_pick_three_columns() {
        let dims = best_dimensions(5, 400.0, 300.0, default_band()).unwrap();
        assert_eq!((dims.cols, dims.rows), (3, 2));
        assert_eq!((dims.box_width, dims.box_height), (133.0, 150.0));
    }

    #[test]
    fn short_last_row_is_centred() {
        let rects = arrange(5, Rect::new(0.0, 0.0, 400.0, 300.0), default_band());
        assert_eq!(rects.len(), 5);
        // first row: three boxes, padded by the floor remainder
        assert_eq!(rects[0].left, 0.5);
        assert_eq!(rects[0].top, 0.0);
        assert_eq!(rects[2].left, 266.5);
        // second row: two boxes centred
        assert_eq!(rects[3].left, 67.0);
        assert_eq!(rects[3].top, 150.0);
        assert_eq!(rects[4].left, 200.0);
    }

    #[test]
    fn rows_start_at_offset_x() {
        let region = Rect::new(10.0, 20.0, 400.0, 300.0);
        let dims = best_dimensions(5, region.width, region.height, default_band()).unwrap();
        assert_eq!(dims.offset_x, 0.5);

        let rects = arrange(5, region, default_band());
        assert_eq!(rects[0].left, region.left + dims.offset_x);
        assert_eq!(rects[0].top, region.top + dims.offset_y);
        // one box short: shifted by half a box
        assert_eq!(rects[3].left, region.left + dims.offset_x + 66.5);
        assert_eq!(rects[3].left, 77.0);
    }

    #[test]
    fn ties_prefer_fewer_columns() {
        // 2 boxes pinned to 3/4: one column gives 200x150, two columns 200x150
        let dims = best_dimensions(2, 400.0, 300.0, RatioBand::fixed(0.75)).unwrap();
        assert_eq!(dims.cols, 1);
        assert_eq!((dims.box_width, dims.box_height), (200.0, 150.0));
    }

    #[test]
    fn offset_by_region_origin() {
        let rects = arrange(4, Rect::new(320.0, 0.0, 80.0, 300.0), default_band());
        assert_eq!(rects.len(), 4);
        for (i, r) in rects.iter().enumerate() {
            assert_eq!((r.left, r.width, r.height), (320.0, 80.0, 75.0));
            assert_eq!(r.top, 75.0 * i as f64);
        }
    }
}
