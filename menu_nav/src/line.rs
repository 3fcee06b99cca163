// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::metric::{WRAP_WEIGHT, WrapRule};
use crate::navigator::{enter_nearest_edge, find_nearest};
use crate::skeleton::{Skeleton, SkeletonAxis};
use crate::{Axis, Direction, DistanceCost, MenuSpace, Navigator};

/// Navigates by the distance between widget skeletons.
///
/// Treating widgets as segments rather than points keeps long widgets
/// connected to the thin widgets lined up along their edges, which a
/// center-to-center metric would reject as too far off-axis.
///
/// The cost of a candidate is computed in two stages:
///
/// 1. When the origin's skeleton runs across the requested direction (a wide
///    widget moving up or down, a tall one moving left or right), every
///    candidate endpoint that falls within the skeleton's span is in line,
///    and costs only its distance along the direction.
/// 2. Otherwise the cost is the Manhattan length `dx + dy` from an anchor on
///    the origin to the nearest admissible candidate endpoint. The anchor is
///    the origin's center when its skeleton runs across the direction, and
///    the leading endpoint of the skeleton otherwise.
///
/// Every stretch that crosses a menu edge costs [`wrap_weight`](Self::wrap_weight)
/// times its length, so same-side neighbors beat wrap-around ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineNavigator {
    /// Penalty multiplier for distance travelled across a menu edge.
    pub wrap_weight: f64,
}

impl Default for LineNavigator {
    fn default() -> Self {
        Self {
            wrap_weight: WRAP_WEIGHT,
        }
    }
}

impl LineNavigator {
    #[inline]
    fn rule(&self) -> WrapRule {
        WrapRule::Penalized {
            weight: self.wrap_weight,
        }
    }
}

/// Distance to `target` when it is in line with `from` across `direction`.
fn in_line_distance(
    rule: WrapRule,
    from: &Skeleton,
    target: Point,
    size: Size,
    direction: Direction,
) -> Option<f64> {
    match (from.axis, direction.axis()) {
        (SkeletonAxis::Vertical, Axis::Horizontal) => {
            within_span(from.a.y, from.b.y, target.y, size.height)
                .then(|| rule.directed(from.a.x, target.x, size.width, direction))
        }
        (SkeletonAxis::Horizontal, Axis::Vertical) => {
            within_span(from.a.x, from.b.x, target.x, size.width)
                .then(|| rule.directed(from.a.y, target.y, size.height, direction))
        }
        _ => None,
    }
}

/// Whether `t` lies in the half-open span `[start, end)` of a space of size
/// `n`, where the span may continue past the edge and re-enter at zero.
#[inline]
fn within_span(start: f64, end: f64, t: f64, n: f64) -> bool {
    let offset = (t - start) % n;
    let offset = if offset < 0.0 { offset + n } else { offset };
    offset < end - start
}

/// Point on `from` that diagonal distances are measured from.
fn diagonal_anchor(from: &Skeleton, direction: Direction) -> Point {
    match (from.axis, direction) {
        (SkeletonAxis::Horizontal, Direction::Up | Direction::Down)
        | (SkeletonAxis::Vertical, Direction::Left | Direction::Right) => from.a.midpoint(from.b),
        (SkeletonAxis::Horizontal, Direction::Left) | (SkeletonAxis::Vertical, Direction::Up) => {
            from.a
        }
        (SkeletonAxis::Horizontal, Direction::Right)
        | (SkeletonAxis::Vertical, Direction::Down) => from.b,
        (SkeletonAxis::Point, _) => from.a,
    }
}

impl DistanceCost for LineNavigator {
    fn cost(&self, start: Rect, end: Rect, direction: Direction, size: Size) -> Option<f64> {
        let rule = self.rule();
        let from = Skeleton::of(start);
        let to = Skeleton::of(end);

        let in_line = to
            .endpoints()
            .into_iter()
            .filter_map(|t| in_line_distance(rule, &from, t, size, direction))
            .reduce(f64::min);
        if in_line.is_some() {
            return in_line;
        }

        let anchor = diagonal_anchor(&from, direction);
        to.endpoints()
            .into_iter()
            .filter_map(|t| rule.offsets(anchor, t, size, direction))
            .map(|(dx, dy)| dx + dy)
            .reduce(f64::min)
    }
}

impl<K> Navigator<K> for LineNavigator
where
    K: Copy + Eq,
{
    fn find(&self, origin: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K> {
        find_nearest(self, origin, direction, space)
    }

    fn enter_div(&self, div: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K> {
        enter_nearest_edge(div, direction, space)
    }
}
