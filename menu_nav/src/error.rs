// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while building a [`MenuSpace`](crate::MenuSpace).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum MenuError {
    /// The menu's width or height is zero, negative, or not a number.
    ///
    /// Both dimensions act as the modulus of the wrap-around space, so they
    /// must be strictly positive.
    #[error("menu bounds must be strictly positive, got {width}x{height}")]
    InvalidBounds {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}
