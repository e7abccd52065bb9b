use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ElementId;
use crate::render::Color;

use super::scene::BarGeometry;

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Animated properties of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedProps {
    pub fill: Color,
    pub bar: Option<BarGeometry>,
}

impl AnimatedProps {
    fn interpolate(self, target: Self, t: f64) -> Self {
        let bar = match (self.bar, target.bar) {
            (Some(from), Some(to)) => Some(from.lerp(to, t)),
            (_, to) => to,
        };
        Self {
            fill: self.fill.lerp(target.fill, t),
            bar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: AnimatedProps,
    to: AnimatedProps,
    start_ms: f64,
    duration_ms: f64,
}

impl Transition {
    fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    fn sample(&self, now_ms: f64, easing: Easing) -> AnimatedProps {
        if now_ms <= self.start_ms {
            return self.from;
        }
        if self.duration_ms <= 0.0 || now_ms >= self.end_ms() {
            return self.to;
        }
        let t = easing.apply((now_ms - self.start_ms) / self.duration_ms);
        self.from.interpolate(self.to, t)
    }
}

/// Deterministic clock-driven transition set, one pending transition per
/// element.
///
/// Hosts advance the clock from their frame callback; tests advance it by
/// fixed steps.
#[derive(Debug, Clone, Default)]
pub struct TransitionTimeline {
    now_ms: f64,
    easing: Easing,
    active: IndexMap<ElementId, Transition>,
}

impl TransitionTimeline {
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self {
            now_ms: 0.0,
            easing,
            active: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Starts animating `id` from `from` to `to` after `delay_ms`.
    ///
    /// A pending transition of the same element is replaced; callers pass the
    /// currently sampled props as `from` so the change continues smoothly.
    pub fn schedule(
        &mut self,
        id: ElementId,
        from: AnimatedProps,
        to: AnimatedProps,
        delay_ms: f64,
        duration_ms: f64,
    ) {
        self.active.insert(
            id,
            Transition {
                from,
                to,
                start_ms: self.now_ms + delay_ms.max(0.0),
                duration_ms: duration_ms.max(0.0),
            },
        );
    }

    pub fn cancel(&mut self, id: &ElementId) {
        self.active.shift_remove(id);
    }

    /// Props of `id` at the current clock, if it is animating.
    #[must_use]
    pub fn sample(&self, id: &ElementId) -> Option<AnimatedProps> {
        self.active
            .get(id)
            .map(|transition| transition.sample(self.now_ms, self.easing))
    }

    /// Moves the clock forward and drops finished transitions.
    ///
    /// Returns the number of transitions that completed in this step.
    pub fn advance(&mut self, delta_ms: f64) -> usize {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
        let now = self.now_ms;
        let before = self.active.len();
        self.active.retain(|_, transition| transition.end_ms() > now);
        before - self.active.len()
    }
}
