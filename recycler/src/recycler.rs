use alloc::collections::VecDeque;
use alloc::sync::Arc;

use crate::boundary::{self, WindowEdges};
use crate::pool::{Pool, Slot, SlotId, extent_of};
use crate::{
    Axis, ContentLayout, DataSource, Directions, Error, Limit, MovementMode, Navigation,
    RecyclerOptions, Result, ScrollEvent, ScrollState, Tween, ViewUnit, Viewport,
};

/// Fraction of a unit's extent added as hysteresis before it counts as outside the window.
const EDGE_TOLERANCE: f32 = 0.1;

#[derive(Clone, Copy, Debug)]
struct ActiveNavigation {
    tween: Tween,
    target: usize,
}

/// A headless recycling scroll engine.
///
/// The engine keeps a small pool of view units bound to a contiguous window of the data source
/// and moves units from one edge of the window to the other as the content offset changes. It
/// does not own any UI objects beyond the units its factory creates; your adapter drives it by:
/// - forwarding content-offset changes to [`Recycler::on_scroll`],
/// - forwarding drag begin/end and movement-stopped notifications,
/// - calling [`Recycler::tick`] each frame while a navigation is running,
///
/// and after each call reading back [`Recycler::content_offset`] (the engine may clamp or rebase
/// it) and each active unit's position.
///
/// Coordinates are content-space values along the live axis. A unit's position is its leading
/// edge; the viewport covers `[content_offset, content_offset + extent)`.
pub struct Recycler<D, U> {
    options: RecyclerOptions<U>,
    data: D,
    pool: Pool<U>,
    /// Active units ordered by data index (lowest first).
    window: VecDeque<SlotId>,
    axis: Axis,
    viewport: Viewport,
    scroll: ScrollState,
    limit: Limit,
    needs_elastic_return: bool,
    scroll_enabled: bool,
    centered: Option<SlotId>,
    navigation: Option<ActiveNavigation>,
    next_order: u64,
    /// Index the window was last built from; used to rebuild an empty window.
    start_index: usize,
    /// Sum of all rebase shifts applied to content coordinates.
    content_shift: f32,
}

impl<D, U> Recycler<D, U>
where
    D: DataSource,
    U: ViewUnit<D::Item>,
{
    /// Validates the configuration, creates the pool and builds the initial window starting at
    /// `start_index`.
    ///
    /// Errors are returned before anything is created:
    /// - [`Error::MissingViewport`] / [`Error::MissingTemplate`] for missing options,
    /// - [`Error::IndexOutOfRange`] unless `start_index < data.len()`,
    /// - [`Error::NoScrollAxis`] if the viewport enables neither axis.
    ///
    /// Enabling both axes is not an error: the horizontal flag is turned off, a warning is
    /// logged, and the engine scrolls vertically.
    pub fn initiate(options: RecyclerOptions<U>, data: D, start_index: usize) -> Result<Self> {
        let mut viewport = options.viewport.ok_or(Error::MissingViewport)?;
        let factory = options.factory.clone().ok_or(Error::MissingTemplate)?;
        let len = data.len();
        if start_index >= len {
            return Err(Error::IndexOutOfRange {
                index: start_index,
                len,
            });
        }
        let axis = resolve_axis(&mut viewport)?;
        viewport.layout = ContentLayout::Manual;

        let mut pool = Pool::new();
        pool.initialize(
            options.forced_pool_size.unwrap_or(0),
            Some(factory),
            options.growth_allowed,
        )?;

        rdebug!(
            len,
            start_index,
            spacing = options.spacing,
            forced_pool_size = options.forced_pool_size,
            "Recycler::initiate"
        );

        let mut r = Self {
            options,
            data,
            pool,
            window: VecDeque::new(),
            axis,
            viewport,
            scroll: ScrollState::default(),
            limit: Limit::Clear,
            needs_elastic_return: false,
            scroll_enabled: false,
            centered: None,
            navigation: None,
            next_order: 0,
            start_index,
            content_shift: 0.0,
        };
        r.build_window(start_index);
        Ok(r)
    }

    /// Replaces the data source and rebuilds the window.
    ///
    /// With `start_index = None` the window restarts at the previously centered index, clamped to
    /// the new length. An explicit index must be valid for the new data; otherwise nothing
    /// changes and [`Error::IndexOutOfRange`] is returned.
    pub fn change_list(&mut self, data: D, start_index: Option<usize>) -> Result<()> {
        let len = data.len();
        let start = match start_index {
            Some(index) if index >= len => return Err(Error::IndexOutOfRange { index, len }),
            Some(index) => index,
            None => self
                .centered_index()
                .unwrap_or(0)
                .min(len.saturating_sub(1)),
        };
        rdebug!(len, start, "Recycler::change_list");

        self.navigation = None;
        self.release_window();
        self.data = data;

        if len == 0 {
            self.scroll = ScrollState {
                dragging: self.scroll.dragging,
                ..ScrollState::default()
            };
            self.scroll_enabled = false;
            self.limit = Limit::Clear;
            self.needs_elastic_return = false;
            return Ok(());
        }

        self.build_window(start);
        Ok(())
    }

    pub fn options(&self) -> &RecyclerOptions<U> {
        &self.options
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn pool(&self) -> &Pool<U> {
        &self.pool
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport.extent(self.axis)
    }

    pub fn spacing(&self) -> f32 {
        self.options.spacing
    }

    pub fn content_offset(&self) -> f32 {
        self.scroll.offset
    }

    /// Total shift applied to content coordinates by rebasing so far.
    ///
    /// Anything that keeps offsets of its own across calls (a drag origin, an inertia target)
    /// must add the change of this value after each call.
    pub fn content_shift(&self) -> f32 {
        self.content_shift
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// `false` when the whole data set fits in the viewport; scroll notifications are ignored
    /// in that state.
    pub fn can_scroll(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.scroll.dragging
    }

    pub fn is_navigating(&self) -> bool {
        self.navigation.is_some()
    }

    /// Target index of the in-flight navigation, if any.
    pub fn navigation_target(&self) -> Option<usize> {
        self.navigation.map(|n| n.target)
    }

    /// Result of the last boundary-limiter run.
    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// `true` when the content is overscrolled in elastic mode and the presentation layer should
    /// spring back to [`Recycler::corrective_offset`].
    pub fn needs_elastic_return(&self) -> bool {
        self.needs_elastic_return
    }

    pub fn corrective_offset(&self) -> Option<f32> {
        self.limit.corrective()
    }

    /// Returns `false` iff any of `directions` was blocked by the last limiter run.
    pub fn can_move(&self, directions: Directions) -> bool {
        boundary::can_move(self.limit, directions)
    }

    /// Runs the limiter against a hypothetical offset without applying it.
    ///
    /// Adapters use this to rubber-band a drag before forwarding it. Only the current window is
    /// considered, so an offset far outside it reports `Clear`.
    pub fn probe(&self, offset: f32) -> Limit {
        match self.edges() {
            Some(edges) => boundary::limit(edges, self.data.len(), offset, self.viewport_extent()),
            None => Limit::Clear,
        }
    }

    pub fn lowest(&self) -> Option<&Slot<U>> {
        self.window.front().map(|&id| self.pool.slot(id))
    }

    pub fn highest(&self) -> Option<&Slot<U>> {
        self.window.back().map(|&id| self.pool.slot(id))
    }

    pub fn centered(&self) -> Option<&Slot<U>> {
        self.centered.map(|id| self.pool.slot(id))
    }

    pub fn centered_index(&self) -> Option<usize> {
        self.centered().and_then(Slot::index)
    }

    pub fn active_len(&self) -> usize {
        self.window.len()
    }

    /// Iterates over the data indices of the active window, lowest first.
    pub fn window_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.window
            .iter()
            .filter_map(|&id| self.pool.slot(id).index)
    }

    /// Visits active units in index order without allocating.
    pub fn for_each_active(&self, mut f: impl FnMut(&Slot<U>)) {
        for &id in &self.window {
            f(self.pool.slot(id));
        }
    }

    /// Finds the active unit bound to `index`.
    pub fn slot_for_index(&self, index: usize) -> Option<&Slot<U>> {
        let id = self
            .pool
            .find(|s| s.is_active() && s.index() == Some(index))?;
        self.pool.get(id)
    }

    /// Mutable access to the unit bound to `index`, e.g. to resize it. Call
    /// [`Recycler::refresh_positions`] afterwards if its extent changed.
    pub fn unit_for_index_mut(&mut self, index: usize) -> Option<&mut U> {
        let id = self
            .pool
            .find(|s| s.is_active() && s.index() == Some(index))?;
        self.pool.get_mut(id).map(Slot::unit_mut)
    }

    pub fn add_listener(&mut self, listener: impl Fn(&ScrollEvent) + Send + Sync + 'static) {
        self.options.listeners.push(Arc::new(listener));
    }

    pub fn set_growth_allowed(&mut self, growth_allowed: bool) {
        self.options.growth_allowed = growth_allowed;
        self.pool.set_growth_allowed(growth_allowed);
    }

    pub fn set_movement(&mut self, movement: MovementMode) {
        self.options.movement = movement;
    }

    pub fn set_centralize_on_stop(&mut self, centralize_on_stop: bool) {
        self.options.centralize_on_stop = centralize_on_stop;
    }

    /// Content-offset change notification from the UI layer.
    ///
    /// Runs one full update: velocity, drag-delta event, boundary limiting, centering, then
    /// recycling at the edges. Returns the content offset the UI should display, which differs
    /// from `offset` when the engine clamped or rebased it.
    pub fn on_scroll(&mut self, offset: f32) -> f32 {
        if !self.scroll_enabled || self.window.is_empty() {
            return self.scroll.offset;
        }
        self.apply_offset(offset);
        self.scroll.offset
    }

    pub fn begin_drag(&mut self) {
        self.scroll.dragging = true;
        self.cancel_navigation();
        self.emit(ScrollEvent::DragBegin);
    }

    pub fn end_drag(&mut self) {
        self.scroll.dragging = false;
        self.emit(ScrollEvent::DragEnd);
    }

    /// Movement-stopped notification.
    ///
    /// With centralize-on-stop enabled this emits [`ScrollEvent::ScrollStopped`] and starts a
    /// navigation that centers the currently centered element. Returns the navigation's target
    /// offset, if one was started.
    pub fn stop_moving(&mut self, now_ms: u64) -> Option<f32> {
        self.scroll.velocity = 0.0;
        if !self.options.centralize_on_stop {
            return None;
        }
        let centered = self.centered_index();
        self.emit(ScrollEvent::ScrollStopped { centered });
        let index = centered?;
        self.move_to_index(
            index,
            Navigation::total(self.options.stop_navigation_ms),
            now_ms,
        )
        .ok()
    }

    /// Starts an animated navigation that centers `index` in the viewport.
    ///
    /// Cancels any navigation already in flight. The target offset is derived from the lowest
    /// active unit's extent and the spacing, so it is exact for uniformly sized units. While the
    /// navigation runs, elastic return is suppressed and the limiter only reports boundaries.
    ///
    /// Returns the target offset.
    pub fn move_to_index(
        &mut self,
        index: usize,
        navigation: Navigation,
        now_ms: u64,
    ) -> Result<f32> {
        let len = self.data.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let distance = self
            .centered_index()
            .map_or(index, |c| c.abs_diff(index));
        let duration_ms = navigation
            .duration_ms(distance)
            .ok_or(Error::MissingDuration)?;

        self.navigation = None;
        let Some(&lowest) = self.window.front() else {
            return Ok(self.scroll.offset);
        };
        if !self.scroll_enabled {
            return Ok(self.scroll.offset);
        }

        let slot = self.pool.slot(lowest);
        let lowest_index = slot.index.unwrap_or(0);
        let reference = self.unit_extent(lowest);
        let stride = reference + self.options.spacing;
        let target = slot.position + (index as f32 - lowest_index as f32) * stride + reference / 2.0
            - self.viewport_extent() / 2.0;

        self.scroll.velocity = 0.0;
        self.needs_elastic_return = false;
        self.navigation = Some(ActiveNavigation {
            tween: Tween::new(
                self.scroll.offset,
                target,
                now_ms,
                duration_ms,
                navigation.easing,
            ),
            target: index,
        });
        rdebug!(index, target, duration_ms, "Recycler::move_to_index");
        Ok(target)
    }

    pub fn cancel_navigation(&mut self) {
        self.navigation = None;
    }

    /// Advances an in-flight navigation. Returns the new content offset while navigating and
    /// `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let nav = self.navigation?;
        let offset = nav.tween.sample(now_ms);
        self.apply_offset(offset);
        if nav.tween.is_done(now_ms) {
            self.navigation = None;
            self.scroll.velocity = 0.0;
        }
        Some(self.scroll.offset)
    }

    /// Updates the viewport extents and re-lays out the window so the viewport stays covered.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.refresh_positions();
    }

    /// Re-chains the active window after units changed size.
    ///
    /// The lowest unit keeps its position; every following unit is placed `spacing` after the
    /// previous one. Draggability, centering and boundaries are recomputed.
    ///
    /// An empty window (e.g. after a pool stall) is rebuilt from the index it was last built
    /// from.
    pub fn refresh_positions(&mut self) {
        let Some(&lowest) = self.window.front() else {
            let len = self.data.len();
            if len > 0 {
                self.build_window(self.start_index.min(len - 1));
            }
            return;
        };
        let mut cursor = self.pool.slot(lowest).position;
        for i in 0..self.window.len() {
            let id = self.window[i];
            self.place(id, cursor);
            cursor += self.unit_extent(id) + self.options.spacing;
        }

        self.top_up();
        self.update_scroll_enabled();
        if !self.scroll_enabled {
            self.pin_to_origin();
        }
        self.update_centering();
        self.run_limiter();
    }

    fn build_window(&mut self, start_index: usize) {
        let len = self.data.len();
        let spacing = self.options.spacing;
        let target = self.viewport_extent() * 2.0;
        let mut total = 0.0;

        self.start_index = start_index;
        let mut cursor = 0.0;
        let mut index = start_index;
        while index < len && (total < target || self.window.is_empty()) {
            let Some(id) = self.collect_bound(index) else {
                break;
            };
            let extent = self.unit_extent(id);
            self.place(id, cursor);
            self.window.push_back(id);
            cursor += extent + spacing;
            total += extent + spacing;
            index += 1;
        }

        let mut lead = 0.0;
        let mut lowest = start_index;
        while !self.window.is_empty() && total < target && lowest > 0 {
            let Some(id) = self.collect_bound(lowest - 1) else {
                break;
            };
            let extent = self.unit_extent(id);
            lead -= extent + spacing;
            self.place(id, lead);
            self.window.push_front(id);
            total += extent + spacing;
            lowest -= 1;
        }

        if lead != 0.0 {
            for i in 0..self.window.len() {
                let id = self.window[i];
                let position = self.pool.slot(id).position - lead;
                self.place(id, position);
            }
        }

        rdebug!(
            start_index,
            active = self.window.len(),
            created = self.pool.created(),
            total,
            "Recycler::build_window"
        );

        self.update_scroll_enabled();
        let offset = if self.scroll_enabled { -lead } else { 0.0 };
        self.scroll = ScrollState {
            offset,
            previous: offset,
            velocity: 0.0,
            dragging: self.scroll.dragging,
        };
        if self.scroll_enabled {
            if let Some(edges) = self.edges() {
                if let Limit::Blocked { corrective, .. } =
                    boundary::limit(edges, len, offset, self.viewport_extent())
                {
                    self.scroll.offset = corrective;
                    self.scroll.previous = corrective;
                }
            }
        }

        self.update_centering();
        self.run_limiter();
    }

    fn apply_offset(&mut self, offset: f32) {
        self.scroll.velocity = offset - self.scroll.offset;
        self.scroll.previous = self.scroll.offset;
        self.scroll.offset = offset;
        self.emit(ScrollEvent::Drag {
            delta: self.scroll.velocity,
        });

        self.rebase_if_needed();

        if !self.run_limiter() {
            // Pinned at an edge: nothing to recycle, but keep the centered unit current.
            self.update_centering();
            return;
        }

        self.update_centering();
        self.recycle();
        self.top_up();
        if self.centered.is_none() {
            // A jump past the whole window recycled the centered unit.
            self.update_centering();
        }

        let unclamped = self.scroll.offset;
        self.run_limiter();
        if self.scroll.offset != unclamped {
            self.top_up();
            self.update_centering();
        }
    }

    /// Runs the boundary limiter and applies the movement mode. Returns `true` when clear.
    fn run_limiter(&mut self) -> bool {
        self.needs_elastic_return = false;
        let Some(edges) = self.edges() else {
            self.limit = Limit::Clear;
            return true;
        };
        let offset = self.scroll.offset;
        self.limit = boundary::limit(edges, self.data.len(), offset, self.viewport_extent());

        let Limit::Blocked { corrective, .. } = self.limit else {
            return true;
        };
        if self.navigation.is_some() || !self.scroll_enabled {
            return false;
        }

        let overscrolled = offset != corrective;
        match self.options.movement {
            MovementMode::Clamped if overscrolled => {
                rtrace!(offset, corrective, "clamped at edge");
                self.scroll.offset = corrective;
                self.scroll.previous = corrective;
                self.scroll.velocity = 0.0;
            }
            MovementMode::Elastic => {
                self.needs_elastic_return = overscrolled;
            }
            _ => {}
        }
        false
    }

    fn update_centering(&mut self) {
        let offset = self.scroll.offset;
        let center = offset + self.viewport_extent() / 2.0;
        let axis = self.axis;

        let mut best: Option<(SlotId, f32)> = None;
        for &id in &self.window {
            let slot = self.pool.slot_mut(id);
            let extent = extent_of(slot.unit().width(), slot.unit().height(), axis);
            let unit_center = slot.position + extent / 2.0;
            slot.position_in_viewport = unit_center - offset;
            slot.distance_from_center = abs(unit_center - center);
            let distance = slot.distance_from_center;
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((id, distance)),
            }
        }

        let Some((mut next, distance)) = best else {
            self.centered = None;
            return;
        };
        if let Some(prev) = self.centered {
            let slot = self.pool.slot(prev);
            if slot.active && slot.distance_from_center <= distance {
                next = prev;
            }
        }
        if self.centered == Some(next) {
            return;
        }

        let previous = self.centered.take().and_then(|prev| {
            let slot = self.pool.slot_mut(prev);
            slot.centered = false;
            slot.unit_mut().set_centered(false);
            slot.index
        });
        let slot = self.pool.slot_mut(next);
        slot.centered = true;
        slot.unit_mut().set_centered(true);
        let current = slot.index;
        self.centered = Some(next);

        if let Some(current) = current {
            self.emit(ScrollEvent::CenterChanged { previous, current });
        }
    }

    /// Moves units that fell off the trailing side of the motion to the leading side.
    ///
    /// The window is kept within half a viewport of margin beyond each viewport edge, plus a
    /// 10% hysteresis of the unit being tested. A single call may recycle several units when the
    /// offset jumped far.
    fn recycle(&mut self) {
        let velocity = self.scroll.velocity;
        let offset = self.scroll.offset;
        let extent = self.viewport_extent();
        let margin = extent / 2.0;
        let spacing = self.options.spacing;
        let len = self.data.len();

        if velocity > 0.0 {
            while let (Some(&lowest), Some(&highest)) = (self.window.front(), self.window.back()) {
                let lowest_extent = self.unit_extent(lowest);
                let lowest_end = self.pool.slot(lowest).position + lowest_extent;
                if lowest_end >= offset - margin - EDGE_TOLERANCE * lowest_extent {
                    break;
                }
                let highest_slot = self.pool.slot(highest);
                let Some(next) = highest_slot.index.map(|i| i + 1).filter(|&i| i < len) else {
                    break;
                };
                let anchor = highest_slot.position + self.unit_extent(highest) + spacing;

                self.window.pop_front();
                self.release_slot(lowest);
                let Some(id) = self.collect_bound(next) else {
                    break;
                };
                self.place(id, anchor);
                self.window.push_back(id);
                rtrace!(index = next, position = anchor, "recycled forward");
            }
        } else if velocity < 0.0 {
            while let (Some(&lowest), Some(&highest)) = (self.window.front(), self.window.back()) {
                let highest_extent = self.unit_extent(highest);
                let highest_start = self.pool.slot(highest).position;
                if highest_start <= offset + extent + margin + EDGE_TOLERANCE * highest_extent {
                    break;
                }
                let lowest_slot = self.pool.slot(lowest);
                let Some(next) = lowest_slot.index.and_then(|i| i.checked_sub(1)) else {
                    break;
                };
                let lowest_start = lowest_slot.position;

                self.window.pop_back();
                self.release_slot(highest);
                let Some(id) = self.collect_bound(next) else {
                    break;
                };
                let position = lowest_start - spacing - self.unit_extent(id);
                self.place(id, position);
                self.window.push_front(id);
                rtrace!(index = next, position, "recycled backward");
            }
        }
    }

    /// Collects extra units while the viewport itself is not covered. Stops silently when the
    /// pool cannot supply one.
    fn top_up(&mut self) {
        let offset = self.scroll.offset;
        let extent = self.viewport_extent();
        let spacing = self.options.spacing;
        let len = self.data.len();

        while let Some(&highest) = self.window.back() {
            let slot = self.pool.slot(highest);
            let end = slot.position + self.unit_extent(highest);
            if end >= offset + extent {
                break;
            }
            let Some(next) = slot.index.map(|i| i + 1).filter(|&i| i < len) else {
                break;
            };
            let Some(id) = self.collect_bound(next) else {
                break;
            };
            self.place(id, end + spacing);
            self.window.push_back(id);
        }

        while let Some(&lowest) = self.window.front() {
            let slot = self.pool.slot(lowest);
            let start = slot.position;
            if start <= offset {
                break;
            }
            let Some(next) = slot.index.and_then(|i| i.checked_sub(1)) else {
                break;
            };
            let Some(id) = self.collect_bound(next) else {
                break;
            };
            let position = start - spacing - self.unit_extent(id);
            self.place(id, position);
            self.window.push_front(id);
        }
    }

    fn rebase_if_needed(&mut self) {
        let Some(threshold) = self.options.rebase_threshold else {
            return;
        };
        if abs(self.scroll.offset) <= threshold {
            return;
        }
        let Some(&lowest) = self.window.front() else {
            return;
        };
        let delta = self.pool.slot(lowest).position;
        if delta == 0.0 {
            return;
        }
        for i in 0..self.window.len() {
            let id = self.window[i];
            let position = self.pool.slot(id).position - delta;
            self.place(id, position);
        }
        self.scroll.offset -= delta;
        self.scroll.previous -= delta;
        self.content_shift -= delta;
        if let Some(nav) = &mut self.navigation {
            nav.tween.shift(-delta);
        }
        rdebug!(delta, offset = self.scroll.offset, "rebased content coordinates");
    }

    fn update_scroll_enabled(&mut self) {
        let len = self.data.len();
        self.scroll_enabled = match self.edges() {
            Some(edges) => {
                let partial = edges.lowest_index != 0 || edges.highest_index != len - 1;
                // Spacing only separates units; none trails the last one.
                let content = edges.highest_end - edges.lowest_start;
                partial || content > self.viewport_extent()
            }
            None => false,
        };
    }

    /// Parks the content at the window origin when scrolling is disabled.
    fn pin_to_origin(&mut self) {
        let origin = self.lowest().map_or(0.0, Slot::position);
        self.scroll.offset = origin;
        self.scroll.previous = origin;
        self.scroll.velocity = 0.0;
    }

    fn edges(&self) -> Option<WindowEdges> {
        let (&lowest, &highest) = (self.window.front()?, self.window.back()?);
        let lo = self.pool.slot(lowest);
        let hi = self.pool.slot(highest);
        Some(WindowEdges {
            lowest_index: lo.index?,
            lowest_start: lo.position,
            highest_index: hi.index?,
            highest_end: hi.position + self.unit_extent(highest),
        })
    }

    fn collect_bound(&mut self, index: usize) -> Option<SlotId> {
        let item = self.data.get(index)?;
        let id = self.pool.collect()?;
        let order = self.next_order;
        self.next_order += 1;

        let slot = self.pool.slot_mut(id);
        slot.index = Some(index);
        slot.centered = false;
        slot.order = order;
        slot.unit_mut().bind(item, index);
        slot.unit_mut().bring_to_front();
        Some(id)
    }

    fn release_slot(&mut self, id: SlotId) {
        if self.centered == Some(id) {
            self.centered = None;
            self.pool.slot_mut(id).unit_mut().set_centered(false);
        }
        self.pool.release(id);
    }

    fn release_window(&mut self) {
        while let Some(id) = self.window.pop_front() {
            self.release_slot(id);
        }
        self.centered = None;
    }

    fn place(&mut self, id: SlotId, position: f32) {
        let slot = self.pool.slot_mut(id);
        slot.position = position;
        slot.unit_mut().place(position);
    }

    fn unit_extent(&self, id: SlotId) -> f32 {
        let unit = self.pool.slot(id).unit();
        extent_of(unit.width(), unit.height(), self.axis)
    }

    fn emit(&self, event: ScrollEvent) {
        for listener in &self.options.listeners {
            listener(&event);
        }
    }
}

impl<D, U> core::fmt::Debug for Recycler<D, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("axis", &self.axis)
            .field("viewport", &self.viewport)
            .field("scroll", &self.scroll)
            .field("limit", &self.limit)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("active", &self.window.len())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

fn resolve_axis(viewport: &mut Viewport) -> Result<Axis> {
    match (viewport.horizontal, viewport.vertical) {
        (true, true) => {
            rwarn!("scrolling on both axes is not supported; falling back to vertical");
            viewport.horizontal = false;
            Ok(Axis::Vertical)
        }
        (true, false) => Ok(Axis::Horizontal),
        (false, true) => Ok(Axis::Vertical),
        (false, false) => Err(Error::NoScrollAxis),
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
