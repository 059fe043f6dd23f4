//! Property-based tests for the layout geometry.

use proptest::prelude::*;
use tileview::grid::{arrange, best_dimensions};
use tileview::ratio::clamp;
use tileview::{compute_layout, LayoutOptions, RatioBand, Rect, Size, TileInfo};

const EPS: f64 = 1e-6;

fn band() -> impl Strategy<Value = RatioBand> {
    (0.2..2.0f64, 0.0..2.0f64).prop_map(|(min, spread)| RatioBand::new(min, min + spread))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Clamping lands inside the band and never grows a side.
    #[test]
    fn clamp_shrinks_into_band(w in 1.0..2000.0f64, h in 1.0..2000.0f64, b in band()) {
        let (cw, ch) = clamp(w, h, b);
        prop_assert!(cw <= w + EPS && ch <= h + EPS);
        let r = ch / cw;
        prop_assert!(
            r >= b.min - EPS && r <= b.max + EPS,
            "ratio {} outside [{}, {}]",
            r,
            b.min,
            b.max
        );
    }

    /// Every box gets a cell: rows x cols covers the count.
    #[test]
    fn partition_is_complete(
        count in 1usize..40,
        w in 50.0..2000.0f64,
        h in 50.0..2000.0f64,
        b in band(),
    ) {
        let dims = best_dimensions(count, w, h, b).unwrap();
        prop_assert!(dims.cols * dims.rows >= count);
        prop_assert!(dims.cols >= 1 && dims.cols <= count);

        let rects = arrange(count, Rect::new(0.0, 0.0, w, h), b);
        prop_assert_eq!(rects.len(), count);
    }

    /// A bigger container never makes the boxes smaller.
    #[test]
    fn area_is_monotonic(
        count in 1usize..25,
        w in 50.0..1500.0f64,
        h in 50.0..1500.0f64,
        dw in 0.0..500.0f64,
        dh in 0.0..500.0f64,
        b in band(),
    ) {
        let small = best_dimensions(count, w, h, b).unwrap();
        let large = best_dimensions(count, w + dw, h + dh, b).unwrap();
        let small_area = small.box_width * small.box_height;
        let large_area = large.box_width * large.box_height;
        prop_assert!(large_area + EPS >= small_area, "{} < {}", large_area, small_area);
    }

    /// Boxes stay inside the region and never overlap.
    #[test]
    fn boxes_fit_without_overlap(
        count in 1usize..20,
        w in 50.0..1500.0f64,
        h in 50.0..1500.0f64,
        b in band(),
    ) {
        let region = Rect::new(10.0, 20.0, w, h);
        let rects = arrange(count, region, b);
        for (i, r) in rects.iter().enumerate() {
            prop_assert!(
                region.contains_rect(r, EPS),
                "box {} {:?} escapes {:?}",
                i,
                r,
                region
            );
            for other in &rects[i + 1..] {
                let overlap_w = r.right().min(other.right()) - r.left.max(other.left);
                let overlap_h = r.bottom().min(other.bottom()) - r.top.max(other.top);
                prop_assert!(overlap_w <= EPS || overlap_h <= EPS);
            }
        }
    }

    /// Same input, same output, with or without a big tile.
    #[test]
    fn layout_is_deterministic(
        count in 0u32..12,
        big in proptest::option::of(0u32..12),
        w in 0.0..1500.0f64,
        h in 0.0..1500.0f64,
    ) {
        let cfg = LayoutOptions::default().validate().unwrap();
        let tiles: Vec<TileInfo<u32>> = (0..count)
            .map(|id| TileInfo { big: Some(id) == big, ..TileInfo::new(id) })
            .collect();
        let size = Size::new(w, h);
        let first = compute_layout(&cfg, size, &tiles);
        let second = compute_layout(&cfg, size, &tiles);
        prop_assert_eq!(first.len(), tiles.len());
        prop_assert_eq!(first, second);
    }
}
