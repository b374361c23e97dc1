use crate::{Directions, Limit};

/// The edge units of the active window, as seen by the limiter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WindowEdges {
    pub lowest_index: usize,
    /// Leading-edge coordinate of the lowest-index unit.
    pub lowest_start: f32,
    pub highest_index: usize,
    /// Trailing-edge coordinate of the highest-index unit.
    pub highest_end: f32,
}

/// Computes whether the window sits at the start/end of the data and whether the content offset
/// has reached or passed the resting position for that edge.
///
/// Resting positions:
/// - start: the offset that aligns index 0's leading edge with the viewport's leading edge;
/// - end: the offset that aligns the last index's trailing edge with the viewport's trailing
///   edge (never less than the start resting position).
///
/// When both edges are blocked the start edge wins the corrective offset.
pub(crate) fn limit(edges: WindowEdges, len: usize, offset: f32, viewport_extent: f32) -> Limit {
    let mut directions = Directions::empty();
    let mut corrective = None;

    if edges.lowest_index == 0 {
        let rest = edges.lowest_start;
        if offset <= rest {
            directions |= Directions::START | Directions::POSITIVE;
            corrective = Some(rest);
        }
    }

    if len > 0 && edges.highest_index == len - 1 {
        let mut rest = edges.highest_end - viewport_extent;
        if edges.lowest_index == 0 {
            rest = rest.max(edges.lowest_start);
        }
        if offset >= rest {
            directions |= Directions::END | Directions::NEGATIVE;
            corrective.get_or_insert(rest);
        }
    }

    match corrective {
        Some(corrective) => Limit::Blocked {
            directions,
            corrective,
        },
        None => Limit::Clear,
    }
}

/// `true` iff none of the requested `directions` is blocked in `last`.
pub(crate) fn can_move(last: Limit, directions: Directions) -> bool {
    !last.directions().intersects(directions)
}
