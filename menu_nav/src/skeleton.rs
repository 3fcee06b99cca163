// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Orientation of a [`Skeleton`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkeletonAxis {
    /// Wider than tall: the segment runs along x.
    Horizontal,
    /// Taller than wide: the segment runs along y.
    Vertical,
    /// Square: the segment collapses to the center.
    Point,
}

/// The central segment of a widget: the points farthest from its borders.
///
/// For a `w × h` rect with `w > h` this is the horizontal line through the
/// center, inset by `h / 2` from the left and right edges (and symmetrically
/// for tall rects). `a` is always the endpoint with the smaller coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Skeleton {
    /// Orientation of the segment.
    pub axis: SkeletonAxis,
    /// Left (horizontal) or top (vertical) endpoint.
    pub a: Point,
    /// Right (horizontal) or bottom (vertical) endpoint.
    pub b: Point,
}

impl Skeleton {
    /// Compute the skeleton of `rect`.
    pub fn of(rect: Rect) -> Self {
        let rect = rect.abs();
        let center = rect.center();
        let (width, height) = (rect.width(), rect.height());
        if width < height {
            let inset = width / 2.0;
            Self {
                axis: SkeletonAxis::Vertical,
                a: Point::new(center.x, rect.y0 + inset),
                b: Point::new(center.x, rect.y1 - inset),
            }
        } else if width > height {
            let inset = height / 2.0;
            Self {
                axis: SkeletonAxis::Horizontal,
                a: Point::new(rect.x0 + inset, center.y),
                b: Point::new(rect.x1 - inset, center.y),
            }
        } else {
            Self {
                axis: SkeletonAxis::Point,
                a: center,
                b: center,
            }
        }
    }

    /// Both endpoints, `a` first.
    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }
}
