// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distances in a wrap-around (modulus) coordinate space.
//!
//! Menu space is a torus: a coordinate `x` and `x + n` name the same place
//! when `n` is the menu width (or height, for y). Every distance here is
//! measured along one axis of that space.
//!
//! Two rules are provided. [`WrapRule::Plain`] measures wrapped distances as
//! they are. [`WrapRule::Penalized`] multiplies any stretch that crosses the
//! menu edge by a weight, so that a neighbor on the same side is preferred
//! over one that is only reachable by wrapping, even when the wrapped path is
//! numerically shorter. The Euclidian navigator uses the former and the line
//! navigator the latter; they are intentionally different.

use kurbo::{Point, Size};

use crate::{Axis, Direction};

/// Penalty applied to wrap-around stretches by the line navigator.
pub const WRAP_WEIGHT: f64 = 2.0;

/// How a distance that crosses the menu edge is charged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WrapRule {
    /// Wrapped stretches cost their length.
    Plain,
    /// Wrapped stretches cost `weight` times their length.
    Penalized {
        /// Multiplier for the wrapped stretch. Expected to be at least `1.0`.
        weight: f64,
    },
}

impl WrapRule {
    /// The rule used by the line navigator.
    pub const PENALIZED: Self = Self::Penalized {
        weight: WRAP_WEIGHT,
    };

    #[inline]
    fn weight(self) -> f64 {
        match self {
            Self::Plain => 1.0,
            Self::Penalized { weight } => weight,
        }
    }

    /// Distance between `start` and `end` in either direction, in a space of
    /// size `n`.
    ///
    /// Under [`WrapRule::Plain`] this is `min(r, n - r)` with `r = |end - start|`
    /// reduced modulo `n`, which always lies in `[0, n/2]`.
    #[inline]
    pub fn undirected(self, start: f64, end: f64, n: f64) -> f64 {
        debug_assert!(n > 0.0, "wrap size must be strictly positive");
        let r = (end - start).abs() % n;
        r.min(self.weight() * (n - r))
    }

    /// Distance travelled from `start` to `end` moving only in `direction`,
    /// in a space of size `n`.
    ///
    /// The forward difference is `end - start` for right/down and
    /// `start - end` for left/up. A negative difference means the move has
    /// to cross the edge, which costs `n + difference` (times the weight).
    #[inline]
    pub fn directed(self, start: f64, end: f64, n: f64, direction: Direction) -> f64 {
        debug_assert!(n > 0.0, "wrap size must be strictly positive");
        let raw = if direction.is_increasing() {
            end - start
        } else {
            start - end
        };
        let forward = raw % n;
        if forward < 0.0 {
            self.weight() * (n + forward)
        } else {
            forward
        }
    }

    /// Per-axis offsets `(dx, dy)` from `start` to `end` for a move in
    /// `direction`.
    ///
    /// The axis of `direction` is measured with [`Self::directed`], the other
    /// with [`Self::undirected`]. Returns `None` when `end` lies outside the
    /// 90° cone around `direction`, that is when the perpendicular offset
    /// exceeds the offset along the direction.
    pub fn offsets(
        self,
        start: Point,
        end: Point,
        size: Size,
        direction: Direction,
    ) -> Option<(f64, f64)> {
        let (dx, dy) = match direction.axis() {
            Axis::Horizontal => (
                self.directed(start.x, end.x, size.width, direction),
                self.undirected(start.y, end.y, size.height),
            ),
            Axis::Vertical => (
                self.undirected(start.x, end.x, size.width),
                self.directed(start.y, end.y, size.height, direction),
            ),
        };
        inside_cone(dx, dy, direction).then_some((dx, dy))
    }
}

/// Whether offsets `(dx, dy)` fall within the 90° cone centered on
/// `direction`.
#[inline]
pub fn inside_cone(dx: f64, dy: f64, direction: Direction) -> bool {
    match direction.axis() {
        Axis::Horizontal => dy <= dx,
        Axis::Vertical => dx <= dy,
    }
}
