// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::metric::WrapRule;
use crate::navigator::{enter_nearest_edge, find_nearest};
use crate::{Direction, DistanceCost, MenuSpace, Navigator};

/// Navigates to the candidate whose center is closest to the origin's center.
///
/// Distances wrap around the menu edges without any penalty. Only candidates
/// inside the 90° cone centered on the requested direction are considered,
/// and the cost is the straight-line length of the wrapped offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EuclidianNavigator;

impl DistanceCost for EuclidianNavigator {
    fn cost(&self, start: Rect, end: Rect, direction: Direction, size: Size) -> Option<f64> {
        let (dx, dy) = WrapRule::Plain.offsets(start.center(), end.center(), size, direction)?;
        Some(Vec2::new(dx, dy).hypot())
    }
}

impl<K> Navigator<K> for EuclidianNavigator
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
