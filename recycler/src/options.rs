use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::pool::UnitFactory;
use crate::{Easing, MovementMode, ScrollEvent, Viewport};

/// A listener for [`ScrollEvent`]s. Listeners run synchronously, in registration order, and must
/// not call back into the engine.
pub type Listener = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// Default gap between consecutive units along the scroll axis.
pub const DEFAULT_SPACING: f32 = 15.0;

/// Default duration of the automatic centering navigation triggered by centralize-on-stop.
pub const DEFAULT_STOP_NAVIGATION_MS: u64 = 200;

/// Configuration for [`crate::Recycler::initiate`].
///
/// This type is cheap to clone: the factory and listeners are stored in `Arc`s.
pub struct RecyclerOptions<U> {
    /// Viewport geometry. Required.
    pub viewport: Option<Viewport>,
    /// Creates new view units. Required.
    pub factory: Option<UnitFactory<U>>,
    /// Fixed gap between units.
    pub spacing: f32,
    /// Whether the pool may create units beyond the ones it already has.
    pub growth_allowed: bool,
    /// Number of units created eagerly at initialization.
    pub forced_pool_size: Option<usize>,
    pub movement: MovementMode,
    /// Navigate to the centered element when movement stops.
    pub centralize_on_stop: bool,
    pub stop_navigation_ms: u64,
    /// When set, content coordinates are rebased once the offset magnitude exceeds this value.
    pub rebase_threshold: Option<f32>,
    pub listeners: Vec<Listener>,
}

impl<U> Clone for RecyclerOptions<U> {
    fn clone(&self) -> Self {
        Self {
            viewport: self.viewport,
            factory: self.factory.clone(),
            spacing: self.spacing,
            growth_allowed: self.growth_allowed,
            forced_pool_size: self.forced_pool_size,
            movement: self.movement,
            centralize_on_stop: self.centralize_on_stop,
            stop_navigation_ms: self.stop_navigation_ms,
            rebase_threshold: self.rebase_threshold,
            listeners: self.listeners.clone(),
        }
    }
}

impl<U> Default for RecyclerOptions<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> RecyclerOptions<U> {
    pub fn new() -> Self {
        Self {
            viewport: None,
            factory: None,
            spacing: DEFAULT_SPACING,
            growth_allowed: true,
            forced_pool_size: None,
            movement: MovementMode::default(),
            centralize_on_stop: false,
            stop_navigation_ms: DEFAULT_STOP_NAVIGATION_MS,
            rebase_threshold: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_factory(mut self, factory: impl Fn() -> U + Send + Sync + 'static) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_growth_allowed(mut self, growth_allowed: bool) -> Self {
        self.growth_allowed = growth_allowed;
        self
    }

    pub fn with_forced_pool_size(mut self, forced_pool_size: Option<usize>) -> Self {
        self.forced_pool_size = forced_pool_size;
        self
    }

    pub fn with_movement(mut self, movement: MovementMode) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_centralize_on_stop(mut self, centralize_on_stop: bool) -> Self {
        self.centralize_on_stop = centralize_on_stop;
        self
    }

    pub fn with_stop_navigation_ms(mut self, stop_navigation_ms: u64) -> Self {
        self.stop_navigation_ms = stop_navigation_ms;
        self
    }

    pub fn with_rebase_threshold(mut self, rebase_threshold: Option<f32>) -> Self {
        self.rebase_threshold = rebase_threshold;
        self
    }

    pub fn with_listener(mut self, listener: impl Fn(&ScrollEvent) + Send + Sync + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }
}

impl<U> core::fmt::Debug for RecyclerOptions<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("viewport", &self.viewport)
            .field("has_factory", &self.factory.is_some())
            .field("spacing", &self.spacing)
            .field("growth_allowed", &self.growth_allowed)
            .field("forced_pool_size", &self.forced_pool_size)
            .field("movement", &self.movement)
            .field("centralize_on_stop", &self.centralize_on_stop)
            .field("stop_navigation_ms", &self.stop_navigation_ms)
            .field("rebase_threshold", &self.rebase_threshold)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Pacing for [`crate::Recycler::move_to_index`].
///
/// Exactly one of `total_ms` / `per_element_ms` is needed; when both are set, `total_ms` wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    pub total_ms: Option<u64>,
    /// Time per element between the currently centered index and the target.
    pub per_element_ms: Option<u64>,
    pub easing: Easing,
}

impl Navigation {
    pub fn total(duration_ms: u64) -> Self {
        Self {
            total_ms: Some(duration_ms),
            ..Self::default()
        }
    }

    pub fn per_element(duration_ms: u64) -> Self {
        Self {
            per_element_ms: Some(duration_ms),
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub(crate) fn duration_ms(&self, distance: usize) -> Option<u64> {
        match (self.total_ms, self.per_element_ms) {
            (Some(total), _) => Some(total),
            (None, Some(per)) => Some(per.saturating_mul(distance as u64)),
            (None, None) => None,
        }
    }
}
