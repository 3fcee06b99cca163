// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a menu that navigators search.

use kurbo::{Point, Rect, Size};

use crate::MenuError;

/// A single widget within a [`MenuSpace`].
///
/// Entries are produced by the host's layout code; navigators never change
/// them. Divs (grouping containers) are entries too: a widget belongs to a
/// div when its [`parent`](Self::parent) is the div's id.
#[derive(Clone, Debug)]
pub struct WidgetEntry<K> {
    /// Identifier for this widget.
    pub id: K,
    /// Bounds in menu space. The top-left corner is `rect.origin()`.
    pub rect: Rect,
    /// Whether this widget can receive focus.
    pub focusable: bool,
    /// The div or menu root this widget is mounted in.
    ///
    /// `None` means the widget is not mounted; such widgets never navigate
    /// and are never navigated to.
    pub parent: Option<K>,
}

impl<K> WidgetEntry<K> {
    /// Create a focusable widget mounted under `parent`.
    pub fn new(id: K, rect: Rect, parent: K) -> Self {
        Self {
            id,
            rect,
            focusable: true,
            parent: Some(parent),
        }
    }

    /// Center of the widget's bounds.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Whether the widget is mounted in a menu or div.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.parent.is_some()
    }
}

/// A wrap-around menu: its bounds plus every widget it contains.
///
/// The bounds are the modulus of the toroidal coordinate space: leaving the
/// right edge re-enters at the left, leaving the bottom re-enters at the top.
/// Entries are searched in slice order, which is also the tie-break order
/// when two candidates cost exactly the same.
#[derive(Clone, Debug)]
pub struct MenuSpace<'a, K> {
    size: Size,
    nodes: &'a [WidgetEntry<K>],
}

impl<'a, K> MenuSpace<'a, K> {
    /// Create a menu space of the given bounds.
    ///
    /// Fails when either dimension is not strictly positive.
    pub fn new(size: Size, nodes: &'a [WidgetEntry<K>]) -> Result<Self, MenuError> {
        // Written negated so that NaN is rejected as well.
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(MenuError::InvalidBounds {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { size, nodes })
    }

    /// Bounds of the menu.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// All widgets in the menu, in registration order.
    #[inline]
    pub fn nodes(&self) -> &'a [WidgetEntry<K>] {
        self.nodes
    }
}

impl<'a, K: Copy + Eq> MenuSpace<'a, K> {
    /// Look up a widget by id.
    pub fn get(&self, id: K) -> Option<&'a WidgetEntry<K>> {
        self.nodes.iter().find(|e| e.id == id)
    }

    /// Widgets that may receive focus: focusable and mounted.
    pub fn candidates(&self) -> impl Iterator<Item = &'a WidgetEntry<K>> + 'a {
        self.nodes.iter().filter(|e| e.focusable && e.is_mounted())
    }

    /// Whether `id` is `ancestor` or sits below it in the parent chain.
    ///
    /// The walk is bounded by the number of entries, so a malformed parent
    /// cycle terminates.
    pub fn is_within(&self, id: K, ancestor: K) -> bool {
        let mut current = id;
        for _ in 0..=self.nodes.len() {
            if current == ancestor {
                return true;
            }
            match self.get(current).and_then(|e| e.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}
