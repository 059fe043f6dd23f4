use crate::big_box;
use crate::clock::{Clock, SystemClock};
use crate::config::{LayoutConfig, LayoutOptions};
use crate::error::ConfigError;
use crate::geometry::{Rect, Size};
use crate::grid;
use crate::surface::{Surface, TileInfo};
use crate::transition::Scheduler;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};

/// Where one tile ends up after a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<Id> {
    pub id: Id,
    pub rect: Rect,
}

/// One placement per tile, in the surface's tile order.
pub type LayoutResult<Id> = Vec<Placement<Id>>;

type CompletionFn<Id> = Box<dyn FnMut(&Id)>;

/// Stateful layout driver for one surface.
///
/// Remembers the last target rect of every tile so the next pass can
/// animate from it. Animation is frame-driven: the host calls
/// [`LayoutContainer::tick`] until it returns `false`.
pub struct LayoutContainer<S: Surface, C: Clock = SystemClock> {
    surface: S,
    options: LayoutOptions,
    config: LayoutConfig,
    clock: C,
    current: HashMap<S::Id, Rect>,
    scheduler: Scheduler<S::Id>,
    on_complete: Option<CompletionFn<S::Id>>,
}

impl<S: Surface> LayoutContainer<S, SystemClock> {
    pub fn new(surface: S, options: LayoutOptions) -> Result<Self, ConfigError> {
        Self::with_clock(surface, options, SystemClock::new())
    }
}

impl<S: Surface, C: Clock> LayoutContainer<S, C> {
    pub fn with_clock(surface: S, options: LayoutOptions, clock: C) -> Result<Self, ConfigError> {
        let config = options.validate()?;
        tracing::debug!(?config, "layout container created");
        Ok(Self {
            surface,
            options,
            config,
            clock,
            current: HashMap::new(),
            scheduler: Scheduler::new(),
            on_complete: None,
        })
    }

    /// Called once per tile when it reaches its target. With animation off
    /// this happens inside [`LayoutContainer::layout`].
    pub fn on_complete(&mut self, callback: impl FnMut(&S::Id) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Replace the options. Takes effect on the next [`LayoutContainer::layout`].
    pub fn set_options(&mut self, options: LayoutOptions) -> Result<(), ConfigError> {
        self.config = options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Last target rect computed for `id`, even while still animating there.
    pub fn current_rect(&self, id: &S::Id) -> Option<Rect> {
        self.current.get(id).copied()
    }

    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Recompute every tile's rect and start moving tiles toward it.
    pub fn layout(&mut self) -> LayoutResult<S::Id> {
        let size = self.surface.size();
        let tiles = self.surface.tiles();
        let placements = compute_layout(&self.config, size, &tiles);

        let live: HashSet<&S::Id> = tiles.iter().map(|t| &t.id).collect();
        self.current.retain(|id, _| live.contains(id));
        self.scheduler.retain(|id| live.contains(id));

        let now = self.clock.now();
        let mut finished = Vec::new();
        for placement in &placements {
            let from = self
                .current
                .get(&placement.id)
                .copied()
                .unwrap_or_else(|| placement.rect.collapsed());
            let step = self.scheduler.schedule(
                placement.id.clone(),
                from,
                placement.rect,
                self.config.duration,
                self.config.easing,
                now,
            );
            self.surface.apply_rect(&placement.id, step.rect);
            self.current.insert(placement.id.clone(), placement.rect);
            if step.done {
                finished.push(placement.id.clone());
            }
        }

        tracing::debug!(
            tiles = placements.len(),
            width = size.width,
            height = size.height,
            animating = self.scheduler.len(),
            "layout pass"
        );
        self.notify(finished);
        placements
    }

    /// Advance in-flight transitions to the clock's current time.
    /// Returns true while anything is still moving.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let surface = &mut self.surface;
        let finished = self.scheduler.tick(now, |id, rect| surface.apply_rect(id, rect));
        self.notify(finished);
        !self.scheduler.is_empty()
    }

    fn notify(&mut self, finished: Vec<S::Id>) {
        let Some(callback) = self.on_complete.as_mut() else {
            return;
        };
        for id in finished {
            // One tile's failing callback must not starve the rest
            if panic::catch_unwind(AssertUnwindSafe(|| callback(&id))).is_err() {
                tracing::warn!(tile = ?id, "completion callback panicked");
            }
        }
    }
}

/// Pure layout of `tiles` in a `size` container.
///
/// The first tile flagged big gets the big slot; any later flags are
/// ignored. A zero-sized container yields zero rects for every tile.
pub fn compute_layout<Id: Clone>(
    config: &LayoutConfig,
    size: Size,
    tiles: &[TileInfo<Id>],
) -> LayoutResult<Id> {
    if tiles.is_empty() {
        return Vec::new();
    }
    if size.is_degenerate() {
        return tiles
            .iter()
            .map(|t| Placement {
                id: t.id.clone(),
                rect: Rect::ZERO,
            })
            .collect();
    }

    let container = Rect::from_size(size);
    let big = tiles.iter().position(|t| t.big);
    let flagged = tiles.iter().filter(|t| t.big).count();
    if flagged > 1 {
        tracing::debug!(flagged, "several tiles flagged big, using the first");
    }

    let rects: Vec<Rect> = match big {
        Some(big_idx) if tiles.len() > 1 => {
            let big_tile = &tiles[big_idx];
            let alloc = big_box::allocate(
                container,
                config.big_percentage,
                config.big_first,
                config.big_band(big_tile.shape()),
            );
            let others: Vec<&TileInfo<Id>> = tiles
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != big_idx)
                .map(|(_, t)| t)
                .collect();
            let band = config.ordinary_band(others[0].shape());
            let mut small = grid::arrange(others.len(), alloc.remainder, band).into_iter();

            (0..tiles.len())
                .map(|i| {
                    if i == big_idx {
                        alloc.big
                    } else {
                        small.next().unwrap_or(Rect::ZERO)
                    }
                })
                .collect()
        }
        Some(_) => vec![big_box::fit(container, config.big_band(tiles[0].shape()))],
        None => grid::arrange(tiles.len(), container, config.ordinary_band(tiles[0].shape())),
    };

    tiles
        .iter()
        .zip(rects)
        .map(|(t, rect)| Placement {
            id: t.id.clone(),
            rect,
        })
        .collect()
}
