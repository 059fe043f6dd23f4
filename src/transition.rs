use crate::geometry::Rect;
use serde::Deserialize;
use std::time::Duration;

/// Progress curve applied to a transition's linear time fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    /// Slow at both ends (half a cosine wave).
    Swing,
    /// Fast start, smooth deceleration.
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Swing => 0.5 - (t * std::f64::consts::PI).cos() / 2.0,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Result of scheduling one tile: the rect to show right now, and whether the
/// tile has already reached its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub rect: Rect,
    pub done: bool,
}

#[derive(Clone, Debug)]
struct Transition<Id> {
    id: Id,
    from: Rect,
    to: Rect,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl<Id> Transition<Id> {
    fn progress(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.start);
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }
}

/// In-flight tile transitions, each running on its own clock.
///
/// Kept in scheduling order so completions are reported in tile order.
#[derive(Debug)]
pub struct Scheduler<Id> {
    active: Vec<Transition<Id>>,
}

impl<Id> Default for Scheduler<Id> {
    fn default() -> Self {
        Self { active: Vec::new() }
    }
}

impl<Id: PartialEq + Clone> Scheduler<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving `id` from `from` to `to`. A transition already running for
    /// `id` is dropped without completing. Zero duration finishes at once.
    pub fn schedule(
        &mut self,
        id: Id,
        from: Rect,
        to: Rect,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> Step {
        let existing = self.active.iter().position(|t| t.id == id);

        if duration.is_zero() {
            if let Some(idx) = existing {
                self.active.remove(idx);
            }
            return Step { rect: to, done: true };
        }

        let transition = Transition {
            id,
            from,
            to,
            start: now,
            duration,
            easing,
        };
        match existing {
            Some(idx) => self.active[idx] = transition,
            None => self.active.push(transition),
        }
        Step {
            rect: from,
            done: false,
        }
    }

    /// Advance every transition to `now`, handing each tile's current rect to
    /// `apply`. Finished tiles get their exact target and are returned in order.
    pub fn tick(&mut self, now: Duration, mut apply: impl FnMut(&Id, Rect)) -> Vec<Id> {
        let mut finished = Vec::new();
        self.active.retain(|t| {
            let p = t.progress(now);
            if p >= 1.0 {
                apply(&t.id, t.to);
                finished.push(t.id.clone());
                false
            } else {
                apply(&t.id, t.from.lerp(&t.to, t.easing.apply(p)));
                true
            }
        });
        if !self.active.is_empty() {
            tracing::trace!(in_flight = self.active.len(), "transitions advanced");
        }
        finished
    }

    /// Forget transitions for tiles that no longer exist.
    pub fn retain(&mut self, mut keep: impl FnMut(&Id) -> bool) {
        self.active.retain(|t| keep(&t.id));
    }

    pub fn is_running(&self, id: &Id) -> bool {
        self.active.iter().any(|t| &t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}
