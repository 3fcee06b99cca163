// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator traits and the shared nearest-candidate search.

use kurbo::{Rect, Size};

use crate::logging::trace;
use crate::{Axis, Direction, EuclidianNavigator, LineNavigator, MenuSpace};

/// Trait for directional navigators.
///
/// A navigator receives the focused widget, a direction, and a read-only view
/// of the menu, and returns the widget that should receive focus, if any.
/// `None` is a normal answer: it means focus stays where it is.
pub trait Navigator<K>
where
    K: Copy + Eq,
{
    /// The widget reached when moving from `origin` towards `direction`.
    ///
    /// Never returns `origin` itself. Returns `None` when `origin` is not in
    /// `space` or not mounted.
    fn find(&self, origin: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K>;

    /// The widget reached when the div `div` is entered moving towards
    /// `direction`.
    ///
    /// Returns `None` when the div should be skipped.
    fn enter_div(&self, div: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K>;
}

/// A directional cost between two widgets, used by [`find_nearest`].
pub trait DistanceCost {
    /// Cost of moving from `start` to `end` towards `direction` in a menu of
    /// the given `size`.
    ///
    /// Returns `None` when `end` should not be reached from `start` in that
    /// direction. A returned cost is never negative.
    fn cost(&self, start: Rect, end: Rect, direction: Direction, size: Size) -> Option<f64>;
}

/// Find the reachable candidate with the smallest [`DistanceCost::cost`].
///
/// Every focusable, mounted widget other than `origin` is a candidate.
/// Candidates are visited in slice order and only a strictly smaller cost
/// replaces the current best, so on exact ties the earliest entry wins.
pub fn find_nearest<K, C>(
    cost: &C,
    origin: K,
    direction: Direction,
    space: &MenuSpace<'_, K>,
) -> Option<K>
where
    K: Copy + Eq,
    C: DistanceCost + ?Sized,
{
    let start = space.get(origin)?;
    if !start.is_mounted() {
        return None;
    }
    let size = space.size();

    let mut best: Option<(K, f64)> = None;
    for candidate in space.candidates() {
        if candidate.id == origin {
            continue;
        }
        let Some(c) = cost.cost(start.rect, candidate.rect, direction, size) else {
            continue;
        };
        if best.is_none_or(|(_, b)| c < b) {
            best = Some((candidate.id, c));
        }
    }

    trace!(
        ?direction,
        cost = best.map(|(_, c)| c),
        "nearest candidate search"
    );
    best.map(|(id, _)| id)
}

/// Enter `div` moving towards `direction`.
///
/// Picks the focusable descendant of `div` whose leading edge is closest to
/// the edge of the div that is crossed on the way in: the left edge when
/// moving right, the top edge when moving down, and so on. Ties go to the
/// descendant whose center is closest to the div's center across the
/// direction, then to slice order. Returns `None` when `div` is unknown or
/// holds nothing focusable.
pub fn enter_nearest_edge<K>(div: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K>
where
    K: Copy + Eq,
{
    let bounds = space.get(div)?.rect.abs();
    let div_center = bounds.center();

    let mut best: Option<(K, f64, f64)> = None;
    for entry in space.candidates() {
        if entry.id == div || !space.is_within(entry.id, div) {
            continue;
        }
        let rect = entry.rect.abs();
        let lead = match direction {
            Direction::Right => rect.x0 - bounds.x0,
            Direction::Left => bounds.x1 - rect.x1,
            Direction::Down => rect.y0 - bounds.y0,
            Direction::Up => bounds.y1 - rect.y1,
        };
        let center = rect.center();
        let across = match direction.axis() {
            Axis::Horizontal => (center.y - div_center.y).abs(),
            Axis::Vertical => (center.x - div_center.x).abs(),
        };
        let better = match best {
            None => true,
            Some((_, l, a)) => lead < l || (lead == l && across < a),
        };
        if better {
            best = Some((entry.id, lead, across));
        }
    }
    best.map(|(id, _, _)| id)
}

/// Runtime choice between the built-in navigators.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavigatorKind {
    /// See [`EuclidianNavigator`].
    Euclidian(EuclidianNavigator),
    /// See [`LineNavigator`].
    Line(LineNavigator),
}

impl Default for NavigatorKind {
    fn default() -> Self {
        Self::Line(LineNavigator::default())
    }
}

impl DistanceCost for NavigatorKind {
    fn cost(&self, start: Rect, end: Rect, direction: Direction, size: Size) -> Option<f64> {
        match self {
            Self::Euclidian(n) => n.cost(start, end, direction, size),
            Self::Line(n) => n.cost(start, end, direction, size),
        }
    }
}

impl<K> Navigator<K> for NavigatorKind
where
    K: Copy + Eq,
{
    fn find(&self, origin: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K> {
        match self {
            Self::Euclidian(n) => n.find(origin, direction, space),
            Self::Line(n) => n.find(origin, direction, space),
        }
    }

    fn enter_div(&self, div: K, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K> {
        match self {
            Self::Euclidian(n) => n.enter_div(div, direction, space),
            Self::Line(n) => n.enter_div(div, direction, space),
        }
    }
}
