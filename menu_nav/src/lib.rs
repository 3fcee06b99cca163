// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu Nav: directional focus routing for wrap-around menus.
//!
//! Given the focused widget and an arrow direction, a navigator picks the
//! widget that should receive focus next. The menu is a torus: moving off the
//! right edge continues from the left, moving off the bottom continues from
//! the top.
//!
//! This crate models navigation as a combination of:
//! - **Directions** ([`Direction`]): up, down, left, right.
//! - A **read-only view of the menu** ([`WidgetEntry`] / [`MenuSpace`]) that
//!   describes where widgets live and which of them can take focus.
//! - Pluggable **navigators** ([`Navigator`]) that score every candidate with
//!   a directional cost ([`DistanceCost`]) and pick the cheapest one:
//!   [`LineNavigator`] (the default) and [`EuclidianNavigator`].
//! - **Gateways** ([`Gateway`] / [`GatewayTable`]): per-widget caches that
//!   can freeze ("crystallize") the four neighbors of a widget.
//!
//! ## Minimal example
//!
//! Three buttons in a row that wraps around:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use menu_nav::{Direction, LineNavigator, MenuSpace, Navigator, WidgetEntry};
//!
//! const ROOT: u32 = 0;
//! let entries = [
//!     WidgetEntry::new(1_u32, Rect::new(0.0, 0.0, 1.0, 1.0), ROOT),
//!     WidgetEntry::new(2_u32, Rect::new(1.0, 0.0, 2.0, 1.0), ROOT),
//!     WidgetEntry::new(3_u32, Rect::new(2.0, 0.0, 3.0, 1.0), ROOT),
//! ];
//! let space = MenuSpace::new(Size::new(3.0, 1.0), &entries).unwrap();
//! let nav = LineNavigator::default();
//!
//! assert_eq!(nav.find(1, Direction::Right, &space), Some(2));
//! // The last button wraps back to the first.
//! assert_eq!(nav.find(3, Direction::Right, &space), Some(1));
//! ```
//!
//! ## Crystallizing
//!
//! Searching scans every widget of the menu. Menus that rarely change can
//! freeze the answers per widget:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use menu_nav::{Direction, GatewayTable, MenuSpace, NavigatorKind, WidgetEntry};
//!
//! let entries = [
//!     WidgetEntry::new(1_u32, Rect::new(0.0, 0.0, 1.0, 1.0), 0),
//!     WidgetEntry::new(2_u32, Rect::new(0.0, 2.0, 1.0, 3.0), 0),
//! ];
//! let space = MenuSpace::new(Size::new(1.0, 4.0), &entries).unwrap();
//! let nav = NavigatorKind::default();
//!
//! let mut gateways = GatewayTable::new();
//! gateways.crystallize_all(&space, &nav);
//! assert!(gateways.is_crystallized(1));
//! assert_eq!(gateways.step(1, Direction::Down, &space, &nav), Some(2));
//! ```
//!
//! The core types are generic over the widget identifier `K`, so callers can
//! use any small, copyable handle. Geometry is expressed with [`kurbo`] types.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for searches and crystallization.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod direction;
mod error;
mod euclidian;
mod gateway;
mod line;
mod logging;
pub mod metric;
mod navigator;
mod skeleton;
mod space;

pub use direction::{Axis, Direction};
pub use error::MenuError;
pub use euclidian::EuclidianNavigator;
pub use gateway::{Gateway, GatewayTable};
pub use line::LineNavigator;
pub use navigator::{DistanceCost, Navigator, NavigatorKind, enter_nearest_edge, find_nearest};
pub use skeleton::{Skeleton, SkeletonAxis};
pub use space::{MenuSpace, WidgetEntry};
