use bitflags::bitflags;

/// The single live scroll axis of an engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How the content inside the viewport is laid out.
///
/// The engine places units itself, so it always switches a viewport to `Manual`. A UI layer
/// reads this back to disable its own layout groups / size fitters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentLayout {
    #[default]
    Auto,
    /// Auto layout disabled and content anchored to fill the viewport uniformly.
    Manual,
}

/// Viewport geometry and scroll-axis flags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub horizontal: bool,
    pub vertical: bool,
    pub width: f32,
    pub height: f32,
    pub layout: ContentLayout,
}

impl Viewport {
    pub fn new(horizontal: bool, vertical: bool, width: f32, height: f32) -> Self {
        Self {
            horizontal,
            vertical,
            width,
            height,
            layout: ContentLayout::Auto,
        }
    }

    pub fn horizontal(width: f32, height: f32) -> Self {
        Self::new(true, false, width, height)
    }

    pub fn vertical(width: f32, height: f32) -> Self {
        Self::new(false, true, width, height)
    }

    /// Size of the viewport along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// How the engine reacts when the content is dragged past the first or last element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Boundaries are reported but never enforced.
    Unrestricted,
    /// Overscroll is allowed; the presentation layer springs back to the corrective offset.
    #[default]
    Elastic,
    /// Overscroll is hard-stopped at the resting position.
    Clamped,
}

bitflags! {
    /// Directions in which movement is currently blocked.
    ///
    /// `START`/`END` are index-space directions (toward index 0 / toward the last index).
    /// `POSITIVE`/`NEGATIVE` are the matching screen-space drag directions along the live axis:
    /// dragging content in the positive direction reveals lower indices.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Directions: u8 {
        const START = 1 << 0;
        const END = 1 << 1;
        const NEGATIVE = 1 << 2;
        const POSITIVE = 1 << 3;
    }
}

/// Outcome of one boundary-limiter run.
///
/// `Clear` is kept distinct from `Blocked` with an empty set: a run either found the window
/// resting inside its bounds or it did not.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Limit {
    #[default]
    Clear,
    Blocked {
        directions: Directions,
        /// The content offset at which the blocked edge rests.
        corrective: f32,
    },
}

impl Limit {
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    pub fn directions(&self) -> Directions {
        match self {
            Self::Clear => Directions::empty(),
            Self::Blocked { directions, .. } => *directions,
        }
    }

    pub fn corrective(&self) -> Option<f32> {
        match self {
            Self::Clear => None,
            Self::Blocked { corrective, .. } => Some(*corrective),
        }
    }
}

/// A lightweight snapshot of the scroll state along the live axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
    pub previous: f32,
    /// `offset - previous` from the last scroll notification.
    pub velocity: f32,
    pub dragging: bool,
}

/// Notifications fanned out to registered listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    DragBegin,
    DragEnd,
    /// Emitted once per scroll notification with the offset delta of that notification.
    Drag { delta: f32 },
    /// Emitted when movement stopped and centralize-on-stop is enabled.
    ScrollStopped { centered: Option<usize> },
    CenterChanged {
        previous: Option<usize>,
        current: usize,
    },
}
