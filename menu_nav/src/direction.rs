// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal navigation directions and the axes they move along.

/// A cardinal direction of focus movement.
///
/// Hosts map their input devices (arrow keys, d-pads, sticks) onto these four
/// values; the navigators never see raw input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller y.
    Up,
    /// Towards larger y.
    Down,
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
}

/// One of the two axes of menu space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Direction {
    /// All four directions, in the order gateways store their targets.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The two directions at right angles to this one.
    #[inline]
    pub const fn perpendiculars(self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }

    /// The axis this direction moves along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether moving this way increases the coordinate on [`Self::axis`].
    #[inline]
    pub const fn is_increasing(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    /// Slot of this direction within [`Self::ALL`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

impl Axis {
    /// The other axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
