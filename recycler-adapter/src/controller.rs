use recycler::{
    DataSource, Limit, MovementMode, Navigation, Recycler, RecyclerOptions, Result, ViewUnit,
};

use crate::{SpringBack, rubber_delta};

/// Quiet period after the last movement before the controller reports that movement stopped.
pub const DEFAULT_STOP_DELAY_MS: u64 = 150;

/// Frame step assumed for the first tick, before a previous timestamp exists.
const FIRST_FRAME_MS: u64 = 16;

/// A framework-neutral frame driver that wraps a [`recycler::Recycler`].
///
/// The engine reacts to content-offset notifications; this type produces them for UIs that do
/// not have a native scroll container. It does not hold any UI objects. Adapters drive it by
/// calling:
/// - `begin_drag` / `drag` / `end_drag` from pointer events
/// - `on_scroll` for wheel or inertia movement produced elsewhere
/// - `tick(now_ms)` each frame, for navigation, elastic spring-back and stop detection
///
/// Every method that moves the content returns the offset the UI should display.
#[derive(Debug)]
pub struct Controller<D, U> {
    r: Recycler<D, U>,
    spring: SpringBack,
    drag_raw: f32,
    last_tick_ms: Option<u64>,
    last_movement_ms: Option<u64>,
    stop_delay_ms: u64,
}

impl<D, U> Controller<D, U>
where
    D: DataSource,
    U: ViewUnit<D::Item>,
{
    pub fn new(options: RecyclerOptions<U>, data: D, start_index: usize) -> Result<Self> {
        Ok(Self::from_recycler(Recycler::initiate(
            options,
            data,
            start_index,
        )?))
    }

    pub fn from_recycler(r: Recycler<D, U>) -> Self {
        Self {
            r,
            spring: SpringBack::default(),
            drag_raw: 0.0,
            last_tick_ms: None,
            last_movement_ms: None,
            stop_delay_ms: DEFAULT_STOP_DELAY_MS,
        }
    }

    pub fn recycler(&self) -> &Recycler<D, U> {
        &self.r
    }

    pub fn recycler_mut(&mut self) -> &mut Recycler<D, U> {
        &mut self.r
    }

    pub fn into_recycler(self) -> Recycler<D, U> {
        self.r
    }

    pub fn stop_delay_ms(&self) -> u64 {
        self.stop_delay_ms
    }

    pub fn set_stop_delay_ms(&mut self, stop_delay_ms: u64) {
        self.stop_delay_ms = stop_delay_ms;
    }

    /// Spring-back smoothing time in seconds.
    pub fn set_elasticity(&mut self, smooth_time: f32) {
        self.spring = SpringBack::new(smooth_time);
    }

    /// `true` while the content springs back from an overscroll.
    pub fn is_settling(&self) -> bool {
        !self.r.is_dragging() && !self.r.is_navigating() && self.r.needs_elastic_return()
    }

    pub fn begin_drag(&mut self, now_ms: u64) {
        self.r.begin_drag();
        self.spring.reset();
        self.drag_raw = self.r.content_offset();
        self.last_movement_ms = Some(now_ms);
    }

    /// Moves the content by `delta` as part of a drag.
    ///
    /// In elastic mode a drag past a resting edge is resisted with [`rubber_delta`].
    pub fn drag(&mut self, delta: f32, now_ms: u64) -> f32 {
        self.drag_raw += delta;
        let mut offset = self.drag_raw;
        if self.r.options().movement == MovementMode::Elastic {
            if let Limit::Blocked { corrective, .. } = self.r.probe(offset) {
                let overscroll = offset - corrective;
                offset = corrective + rubber_delta(overscroll, self.r.viewport_extent());
            }
        }
        self.last_movement_ms = Some(now_ms);
        let shift = self.r.content_shift();
        let shown = self.r.on_scroll(offset);
        // The unresisted drag position lives in content coordinates too.
        self.drag_raw += self.r.content_shift() - shift;
        shown
    }

    pub fn end_drag(&mut self, now_ms: u64) {
        self.r.end_drag();
        self.last_movement_ms = Some(now_ms);
    }

    /// Forwards a content-offset change that happened outside a drag (wheel, inertia).
    pub fn on_scroll(&mut self, offset: f32, now_ms: u64) -> f32 {
        self.last_movement_ms = Some(now_ms);
        self.r.on_scroll(offset)
    }

    pub fn on_viewport_size(&mut self, width: f32, height: f32) {
        self.r.set_viewport_size(width, height);
    }

    /// Starts an animated navigation to `index`; see [`Recycler::move_to_index`].
    pub fn move_to_index(
        &mut self,
        index: usize,
        navigation: Navigation,
        now_ms: u64,
    ) -> Result<f32> {
        let target = self.r.move_to_index(index, navigation, now_ms)?;
        self.spring.reset();
        self.last_movement_ms = None;
        Ok(target)
    }

    /// Advances the controller.
    ///
    /// - If a navigation is running, advances it and returns the new offset.
    /// - Otherwise, if the content is overscrolled in elastic mode and not dragged, steps the
    ///   spring-back and returns the new offset.
    /// - Otherwise, once nothing moved for the stop delay, notifies the engine that movement
    ///   stopped (which may start a centering navigation) and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let dt_ms = self
            .last_tick_ms
            .map_or(FIRST_FRAME_MS, |last| now_ms.saturating_sub(last));
        self.last_tick_ms = Some(now_ms);

        if self.r.is_navigating() {
            let offset = self.r.tick(now_ms);
            if !self.r.is_navigating() {
                rdebug!(now_ms, "navigation finished");
            }
            return offset;
        }
        if self.r.is_dragging() {
            return None;
        }

        if self.r.needs_elastic_return() {
            if let Some(target) = self.r.corrective_offset() {
                let next = self.spring.step(self.r.content_offset(), target, dt_ms);
                rtrace!(next, target, "spring-back");
                self.last_movement_ms = Some(now_ms);
                return Some(self.r.on_scroll(next));
            }
        }

        let last = self.last_movement_ms?;
        if now_ms.saturating_sub(last) < self.stop_delay_ms {
            return None;
        }
        self.last_movement_ms = None;
        self.spring.reset();
        rdebug!(now_ms, "movement stopped");
        self.r.stop_moving(now_ms);
        None
    }
}
