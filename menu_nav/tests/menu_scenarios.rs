// Copyright 2025 the Menu Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigation over small menus.

use kurbo::{Rect, Size};
use menu_nav::{
    Direction, EuclidianNavigator, GatewayTable, LineNavigator, MenuSpace, Navigator,
    NavigatorKind, WidgetEntry,
};

const ROOT: u32 = 0;

fn unit(id: u32, x: f64, y: f64) -> WidgetEntry<u32> {
    WidgetEntry::new(id, Rect::new(x, y, x + 1.0, y + 1.0), ROOT)
}

#[test]
fn wrap_around_row_with_every_navigator() {
    let entries = [unit(1, 0.0, 0.0), unit(2, 1.0, 0.0), unit(3, 2.0, 0.0)];
    let space = MenuSpace::new(Size::new(3.0, 1.0), &entries).unwrap();
    let navigators = [
        NavigatorKind::default(),
        NavigatorKind::Euclidian(EuclidianNavigator),
    ];

    for nav in navigators {
        assert_eq!(nav.find(1, Direction::Right, &space), Some(2), "{nav:?}");
        assert_eq!(nav.find(2, Direction::Right, &space), Some(3), "{nav:?}");
        assert_eq!(nav.find(3, Direction::Right, &space), Some(1), "{nav:?}");
        assert_eq!(nav.find(1, Direction::Left, &space), Some(3), "{nav:?}");
    }
}

#[test]
fn vertical_stack_blocks_sideways_moves() {
    let entries = [unit(1, 0.0, 0.0), unit(2, 0.0, 2.0), unit(3, 0.0, 4.0)];
    let space = MenuSpace::new(Size::new(1.0, 6.0), &entries).unwrap();

    for nav in [
        NavigatorKind::default(),
        NavigatorKind::Euclidian(EuclidianNavigator),
    ] {
        assert_eq!(nav.find(1, Direction::Left, &space), None, "{nav:?}");
        assert_eq!(nav.find(1, Direction::Right, &space), None, "{nav:?}");
    }
}

#[test]
fn toolbar_over_grid() {
    // A wide toolbar above a 3×2 grid of cells.
    let mut entries = vec![WidgetEntry::new(
        100_u32,
        Rect::new(0.0, 0.0, 12.0, 2.0),
        ROOT,
    )];
    let mut id = 1;
    for row in 0..2_u8 {
        for col in 0..3_u8 {
            let (x, y) = (f64::from(col) * 4.0, 4.0 + f64::from(row) * 4.0);
            entries.push(WidgetEntry::new(id, Rect::new(x, y, x + 2.0, y + 2.0), ROOT));
            id += 1;
        }
    }
    let space = MenuSpace::new(Size::new(12.0, 12.0), &entries).unwrap();
    let nav = LineNavigator::default();

    // Every cell of the top row is under the toolbar's span.
    for cell in 1..=3 {
        assert_eq!(nav.find(cell, Direction::Up, &space), Some(100));
    }
    // All top-row cells are in line at the same cost; the first registered wins.
    assert_eq!(nav.find(100, Direction::Down, &space), Some(1));
    assert_eq!(nav.find(1, Direction::Down, &space), Some(4));
    assert_eq!(nav.find(3, Direction::Right, &space), Some(1));
}

#[test]
fn entering_a_div_and_caching_its_neighbors() {
    let mut panel = WidgetEntry::new(50_u32, Rect::new(6.0, 0.0, 12.0, 6.0), ROOT);
    panel.focusable = false;
    let entries = [
        unit(1, 0.0, 2.0),
        panel,
        WidgetEntry::new(51, Rect::new(6.0, 0.0, 9.0, 3.0), 50),
        WidgetEntry::new(52, Rect::new(9.0, 0.0, 12.0, 3.0), 50),
        WidgetEntry::new(53, Rect::new(6.0, 3.0, 9.0, 6.0), 50),
    ];
    let space = MenuSpace::new(Size::new(12.0, 6.0), &entries).unwrap();
    let nav = NavigatorKind::default();

    assert_eq!(nav.enter_div(50, Direction::Right, &space), Some(51));
    assert_eq!(nav.enter_div(50, Direction::Left, &space), Some(52));
    assert_eq!(nav.enter_div(50, Direction::Up, &space), Some(53));
    assert_eq!(nav.enter_div(1, Direction::Right, &space), None);

    let mut gateways = GatewayTable::new();
    gateways.crystallize_all(&space, &nav);
    assert!(!gateways.is_crystallized(50));
    for id in [1, 51, 52, 53] {
        assert!(gateways.is_crystallized(id));
        for d in Direction::ALL {
            assert_eq!(gateways.step(id, d, &space, &nav), nav.find(id, d, &space));
        }
    }
}
