use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Axis, Error, Lifecycle, Result};

/// A view-unit factory. Called whenever the pool needs a new instance.
pub type UnitFactory<U> = Arc<dyn Fn() -> U + Send + Sync>;

/// Stable handle to a unit owned by a [`Pool`].
///
/// Units are never destroyed for the lifetime of the pool (until it is re-initialized), so a
/// handle stays valid across collect/release cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    pub fn get(self) -> usize {
        self.0
    }
}

/// A pooled view unit plus the engine's bookkeeping for it.
#[derive(Clone, Debug)]
pub struct Slot<U> {
    unit: U,
    pub(crate) index: Option<usize>,
    pub(crate) position: f32,
    pub(crate) active: bool,
    pub(crate) centered: bool,
    pub(crate) position_in_viewport: f32,
    pub(crate) distance_from_center: f32,
    pub(crate) order: u64,
}

impl<U> Slot<U> {
    fn new(unit: U) -> Self {
        Self {
            unit,
            index: None,
            position: 0.0,
            active: false,
            centered: false,
            position_in_viewport: 0.0,
            distance_from_center: 0.0,
            order: 0,
        }
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    pub fn unit_mut(&mut self) -> &mut U {
        &mut self.unit
    }

    /// The data index this unit is bound to, or `None` if it was never bound.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Content-space coordinate of the unit's leading edge along the live axis.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Distance of the unit's center from the viewport's leading edge.
    pub fn position_in_viewport(&self) -> f32 {
        self.position_in_viewport
    }

    /// Absolute distance of the unit's center from the viewport's center.
    pub fn distance_from_center(&self) -> f32 {
        self.distance_from_center
    }

    /// Stacking order; higher values draw in front.
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// Recycling pool of view units.
///
/// Units are created lazily (or eagerly up to a capacity hint at initialization) and are never
/// dropped while the pool is alive; releasing a unit only flips it to inactive.
pub struct Pool<U> {
    slots: Vec<Slot<U>>,
    factory: Option<UnitFactory<U>>,
    growth_allowed: bool,
}

impl<U> Default for Pool<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Pool<U> {
    /// Creates an empty, uninitialized pool. `collect` returns `None` until
    /// [`Pool::initialize`] supplies a factory.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            factory: None,
            growth_allowed: true,
        }
    }

    /// Clears any existing units and pre-creates `capacity_hint` released units.
    ///
    /// Fails with [`Error::MissingTemplate`] if `factory` is `None`; the pool is left untouched in
    /// that case.
    pub fn initialize(
        &mut self,
        capacity_hint: usize,
        factory: Option<UnitFactory<U>>,
        growth_allowed: bool,
    ) -> Result<()> {
        let factory = factory.ok_or(Error::MissingTemplate)?;
        self.slots.clear();
        self.slots.reserve(capacity_hint);
        for _ in 0..capacity_hint {
            self.slots.push(Slot::new(factory()));
        }
        self.factory = Some(factory);
        self.growth_allowed = growth_allowed;
        rdebug!(capacity_hint, growth_allowed, "Pool::initialize");
        Ok(())
    }

    pub fn growth_allowed(&self) -> bool {
        self.growth_allowed
    }

    pub fn set_growth_allowed(&mut self, growth_allowed: bool) {
        self.growth_allowed = growth_allowed;
    }

    /// Total number of units ever created (active and inactive).
    pub fn created(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot<U>> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Slot<U>> {
        self.slots.get_mut(id.0)
    }

    /// Iterates over the currently active units. Order follows creation, not layout.
    pub fn active(&self) -> impl Iterator<Item = (SlotId, &Slot<U>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (SlotId(i), s))
    }

    /// Iterates over every unit the pool owns.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot<U>)> + '_ {
        self.slots.iter().enumerate().map(|(i, s)| (SlotId(i), s))
    }

    /// Linear scan for the first unit matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&Slot<U>) -> bool) -> Option<SlotId> {
        self.slots.iter().position(|s| pred(s)).map(SlotId)
    }

    pub(crate) fn slot(&self, id: SlotId) -> &Slot<U> {
        &self.slots[id.0]
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> &mut Slot<U> {
        &mut self.slots[id.0]
    }
}

impl<U: Lifecycle> Pool<U> {
    /// Returns the first inactive unit, creating one if none is free and growth is allowed.
    ///
    /// Returns `None` when the pool is exhausted; callers treat that as a stall, not an error.
    pub fn collect(&mut self) -> Option<SlotId> {
        let id = match self.slots.iter().position(|s| !s.active) {
            Some(i) => i,
            None => {
                if !self.growth_allowed {
                    rdebug!(created = self.slots.len(), "Pool::collect stalled");
                    return None;
                }
                let factory = self.factory.as_ref()?;
                self.slots.push(Slot::new(factory()));
                rdebug!(created = self.slots.len(), "Pool::collect grew");
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[id];
        slot.active = true;
        slot.unit.activate();
        Some(SlotId(id))
    }

    /// Marks a unit inactive and clears its centered flag.
    ///
    /// Releasing an inactive or unknown unit is a no-op. Returns whether anything changed.
    pub fn release(&mut self, id: SlotId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0) else {
            return false;
        };
        if !slot.active {
            return false;
        }
        slot.active = false;
        slot.centered = false;
        slot.unit.deactivate();
        true
    }

    pub fn release_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.active) {
            slot.active = false;
            slot.centered = false;
            slot.unit.deactivate();
        }
    }
}

impl<U> core::fmt::Debug for Pool<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pool")
            .field("created", &self.slots.len())
            .field("active", &self.active_count())
            .field("growth_allowed", &self.growth_allowed)
            .finish_non_exhaustive()
    }
}

/// Extent of a unit along `axis`.
pub(crate) fn extent_of(width: f32, height: f32, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => width,
        Axis::Vertical => height,
    }
}
