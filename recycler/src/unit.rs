use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// An ordered, length-queryable, randomly indexable sequence of data elements.
///
/// The engine only ever reads from the source; it never mutates it.
pub trait DataSource {
    type Item: ?Sized;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> DataSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> DataSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

impl<S: DataSource + ?Sized> DataSource for Rc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

/// Activation hooks invoked by the [`crate::Pool`] when a unit is collected or released.
pub trait Lifecycle {
    /// Called when the unit is collected from the pool (becomes visible).
    fn activate(&mut self) {}

    /// Called when the unit is released back to the pool (becomes hidden).
    fn deactivate(&mut self) {}
}

/// A pooled, positionable view element that can be bound to one data element at a time.
///
/// Implement this for whatever your UI layer uses to display a row/cell. Sizes are read after
/// every `bind`, so a unit may resize itself to fit its content. All hooks except `bind` and the
/// size accessors default to no-ops.
pub trait ViewUnit<T: ?Sized>: Lifecycle {
    /// Populates the unit with `item`, which lives at `index` in the data source.
    fn bind(&mut self, item: &T, index: usize);

    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Called whenever the engine moves the unit. `position` is the content-space coordinate of
    /// the unit's leading edge along the live axis.
    fn place(&mut self, position: f32) {
        let _ = position;
    }

    /// Called when the unit enters the stacking order ahead of every other active unit.
    fn bring_to_front(&mut self) {}

    /// Called when the unit becomes (or stops being) the one closest to the viewport center.
    fn set_centered(&mut self, centered: bool) {
        let _ = centered;
    }
}
