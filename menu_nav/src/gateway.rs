// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget navigation caches.
//!
//! A [`Gateway`] starts out empty and answers every step by running a
//! navigator. Crystallizing it runs the navigator once per direction and
//! freezes the answers; from then on steps are table lookups until the
//! gateway is crystallized again. Gateways are independent: crystallizing one
//! never touches another, so neighbor relations are only symmetric if the
//! geometry makes them so.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::logging::debug;
use crate::{Direction, LineNavigator, MenuSpace, Navigator};

/// Navigation cache for a single widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gateway<K> {
    origin: K,
    crystallized: bool,
    targets: [Option<K>; 4],
}

impl<K> Gateway<K>
where
    K: Copy + Eq,
{
    /// Create an uncrystallized gateway for `origin`.
    pub fn new(origin: K) -> Self {
        Self {
            origin,
            crystallized: false,
            targets: [None; 4],
        }
    }

    /// Create a gateway with hand-picked neighbors.
    ///
    /// The result is already crystallized, so the given neighbors are used as
    /// is and no navigator runs until it is crystallized again.
    pub fn wired(
        origin: K,
        up: Option<K>,
        right: Option<K>,
        down: Option<K>,
        left: Option<K>,
    ) -> Self {
        Self {
            origin,
            crystallized: true,
            targets: [up, right, down, left],
        }
    }

    /// The widget this gateway belongs to.
    #[inline]
    pub fn origin(&self) -> K {
        self.origin
    }

    /// Whether the targets are frozen.
    #[inline]
    pub fn is_crystallized(&self) -> bool {
        self.crystallized
    }

    /// The frozen target for `direction`.
    ///
    /// Returns `None` both when the gateway is not crystallized and when the
    /// frozen answer is "no neighbor"; check [`Self::is_crystallized`] to tell
    /// them apart.
    #[inline]
    pub fn target(&self, direction: Direction) -> Option<K> {
        if self.crystallized {
            self.targets[direction.index()]
        } else {
            None
        }
    }

    /// Freeze the targets for all four directions using the line navigator.
    pub fn crystallize(&mut self, space: &MenuSpace<'_, K>) {
        self.crystallize_with(space, &LineNavigator::default());
    }

    /// Freeze the targets for all four directions using `navigator`.
    ///
    /// Running this again on an unchanged space stores the same targets.
    pub fn crystallize_with<N>(&mut self, space: &MenuSpace<'_, K>, navigator: &N)
    where
        N: Navigator<K> + ?Sized,
    {
        for direction in Direction::ALL {
            self.targets[direction.index()] = navigator.find(self.origin, direction, space);
        }
        self.crystallized = true;
        debug!(
            found = self.targets.iter().filter(|t| t.is_some()).count(),
            "gateway crystallized"
        );
    }

    /// The widget reached from the origin towards `direction`, using the line
    /// navigator when not crystallized.
    pub fn step(&self, direction: Direction, space: &MenuSpace<'_, K>) -> Option<K> {
        self.step_with(direction, space, &LineNavigator::default())
    }

    /// The widget reached from the origin towards `direction`.
    ///
    /// A crystallized gateway answers from its table and ignores `navigator`.
    /// Otherwise `navigator` runs, and its answer is not cached.
    pub fn step_with<N>(
        &self,
        direction: Direction,
        space: &MenuSpace<'_, K>,
        navigator: &N,
    ) -> Option<K>
    where
        N: Navigator<K> + ?Sized,
    {
        if self.crystallized {
            self.targets[direction.index()]
        } else {
            navigator.find(self.origin, direction, space)
        }
    }
}

/// Gateways for every widget of a menu, keyed by widget id.
///
/// Gateways are created by [`gateway_mut`](Self::gateway_mut),
/// [`crystallize`](Self::crystallize), [`crystallize_all`](Self::crystallize_all),
/// and [`insert`](Self::insert); lookups such as [`step`](Self::step) never
/// create one. Remove a widget's gateway when the widget goes away;
/// crystallized gateways of the remaining widgets may still point at it until
/// they are crystallized again.
#[derive(Clone, Debug)]
pub struct GatewayTable<K> {
    gateways: HashMap<K, Gateway<K>>,
}

impl<K> Default for GatewayTable<K> {
    fn default() -> Self {
        Self {
            gateways: HashMap::new(),
        }
    }
}

impl<K> GatewayTable<K>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gateways created so far.
    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    /// Whether no gateway has been created yet.
    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }

    /// The gateway of `id`, if one exists.
    pub fn get(&self, id: K) -> Option<&Gateway<K>> {
        self.gateways.get(&id)
    }

    /// The gateway of `id`, creating an uncrystallized one if needed.
    pub fn gateway_mut(&mut self, id: K) -> &mut Gateway<K> {
        self.gateways.entry(id).or_insert_with(|| Gateway::new(id))
    }

    /// Install a prepared gateway (for example one built with
    /// [`Gateway::wired`]), replacing any existing gateway for its origin.
    pub fn insert(&mut self, gateway: Gateway<K>) -> Option<Gateway<K>> {
        self.gateways.insert(gateway.origin(), gateway)
    }

    /// Drop the gateway of `id`.
    pub fn remove(&mut self, id: K) -> Option<Gateway<K>> {
        self.gateways.remove(&id)
    }

    /// Whether the gateway of `id` exists and is crystallized.
    pub fn is_crystallized(&self, id: K) -> bool {
        self.get(id).is_some_and(Gateway::is_crystallized)
    }

    /// Crystallize the gateway of `id` with `navigator`.
    pub fn crystallize<N>(&mut self, id: K, space: &MenuSpace<'_, K>, navigator: &N)
    where
        N: Navigator<K> + ?Sized,
    {
        self.gateway_mut(id).crystallize_with(space, navigator);
    }

    /// Crystallize a gateway for every focusable, mounted widget of `space`.
    pub fn crystallize_all<N>(&mut self, space: &MenuSpace<'_, K>, navigator: &N)
    where
        N: Navigator<K> + ?Sized,
    {
        for entry in space.candidates() {
            self.crystallize(entry.id, space, navigator);
        }
    }

    /// Step from `id` towards `direction`.
    ///
    /// Uses the frozen table when the gateway of `id` is crystallized and
    /// runs `navigator` otherwise. Never creates a gateway.
    pub fn step<N>(
        &self,
        id: K,
        direction: Direction,
        space: &MenuSpace<'_, K>,
        navigator: &N,
    ) -> Option<K>
    where
        N: Navigator<K> + ?Sized,
    {
        match self.get(id) {
            Some(gateway) => gateway.step_with(direction, space, navigator),
            None => navigator.find(id, direction, space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EuclidianNavigator, NavigatorKind, WidgetEntry};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Rect, Size};

    const ROOT: u32 = 0;

    fn unit(id: u32, x: f64, y: f64) -> WidgetEntry<u32> {
        WidgetEntry::new(id, Rect::new(x, y, x + 1.0, y + 1.0), ROOT)
    }

    fn grid() -> Vec<WidgetEntry<u32>> {
        vec![
            unit(1, 0.0, 0.0),
            unit(2, 2.0, 0.0),
            unit(3, 0.0, 2.0),
            unit(4, 2.0, 2.0),
        ]
    }

    #[test]
    fn lazy_step_matches_find_and_does_not_cache() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let gateway = Gateway::new(1_u32);
        let nav = LineNavigator::default();

        for d in Direction::ALL {
            assert_eq!(gateway.step(d, &space), nav.find(1, d, &space));
        }
        assert!(!gateway.is_crystallized());
        assert_eq!(gateway.target(Direction::Right), None);
    }

    #[test]
    fn crystallized_step_matches_find() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let nav = EuclidianNavigator;
        let mut gateway = Gateway::new(4_u32);
        gateway.crystallize_with(&space, &nav);

        assert!(gateway.is_crystallized());
        for d in Direction::ALL {
            assert_eq!(gateway.target(d), nav.find(4, d, &space));
            assert_eq!(gateway.step_with(d, &space, &nav), nav.find(4, d, &space));
        }
        assert_eq!(gateway.target(Direction::Left), Some(3));
        assert_eq!(gateway.target(Direction::Up), Some(2));
    }

    #[test]
    fn crystallize_is_idempotent() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let mut gateway = Gateway::new(2_u32);
        gateway.crystallize(&space);
        let first = gateway.clone();
        gateway.crystallize(&space);
        assert_eq!(gateway, first);
    }

    #[test]
    fn crystallized_gateway_ignores_later_changes() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let mut gateway = Gateway::new(1_u32);
        gateway.crystallize(&space);
        assert_eq!(gateway.step(Direction::Right, &space), Some(2));

        let moved = vec![unit(1, 0.0, 0.0), unit(3, 0.0, 2.0)];
        let shrunk = MenuSpace::new(Size::new(4.0, 4.0), &moved).unwrap();
        assert_eq!(gateway.step(Direction::Right, &shrunk), Some(2));

        gateway.crystallize(&shrunk);
        assert_eq!(gateway.step(Direction::Right, &shrunk), None);
    }

    #[test]
    fn wired_gateway_uses_given_neighbors() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let gateway = Gateway::wired(1_u32, None, Some(4), None, None);
        assert!(gateway.is_crystallized());
        assert_eq!(gateway.step(Direction::Right, &space), Some(4));
        assert_eq!(gateway.step(Direction::Down, &space), None);
    }

    #[test]
    fn table_creates_lazily_and_isolates_gateways() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let nav = NavigatorKind::default();
        let mut table = GatewayTable::new();
        assert!(table.is_empty());

        assert_eq!(table.step(1, Direction::Down, &space, &nav), Some(3));
        assert!(table.is_empty());

        table.crystallize(1, &space, &nav);
        assert_eq!(table.len(), 1);
        assert!(table.is_crystallized(1));
        assert!(!table.is_crystallized(2));
        assert_eq!(table.step(1, Direction::Down, &space, &nav), Some(3));

        table.insert(Gateway::wired(2, None, None, None, Some(4)));
        assert_eq!(table.step(2, Direction::Left, &space, &nav), Some(4));
        assert!(table.remove(2).is_some());
        assert_eq!(table.step(2, Direction::Left, &space, &nav), Some(1));
    }

    #[test]
    fn only_mutating_calls_create_gateways() {
        let entries = grid();
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let nav = NavigatorKind::default();
        let mut table = GatewayTable::new();

        for d in Direction::ALL {
            table.step(1, d, &space, &nav);
        }
        assert!(!table.is_crystallized(1));
        assert!(table.get(1).is_none());
        assert!(table.is_empty());

        let gateway = table.gateway_mut(1);
        assert_eq!(gateway.origin(), 1);
        assert!(!gateway.is_crystallized());
        assert_eq!(table.len(), 1);
        assert!(!table.is_crystallized(1));
    }

    #[test]
    fn crystallize_all_covers_candidates() {
        let mut entries = grid();
        entries[3].focusable = false;
        let space = MenuSpace::new(Size::new(4.0, 4.0), &entries).unwrap();
        let mut table = GatewayTable::new();
        table.crystallize_all(&space, &LineNavigator::default());

        assert_eq!(table.len(), 3);
        assert!(!table.is_crystallized(4));
        for id in [1, 2, 3] {
            for d in Direction::ALL {
                assert_ne!(table.step(id, d, &space, &EuclidianNavigator), Some(id));
                assert_ne!(table.step(id, d, &space, &EuclidianNavigator), Some(4));
            }
        }
    }
}
