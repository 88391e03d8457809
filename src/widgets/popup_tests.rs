//! Tests for widgets/popup

use super::*;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 2,
        y: 2,
        width: 60,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 40, 8, SCREEN);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 5);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 8);
}

#[test]
fn test_popup_below_anchor_clamps_height_to_bounds() {
    let anchor = Rect {
        x: 0,
        y: 18,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 80, 12, SCREEN);

    assert_eq!(popup.y, 21);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_below_anchor_clamps_width_to_bounds() {
    let anchor = Rect {
        x: 70,
        y: 0,
        width: 10,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 40, 5, SCREEN);

    assert_eq!(popup.x, 70);
    assert_eq!(popup.width, 10);
}

#[test]
fn test_popup_below_anchor_at_bottom_edge_is_empty() {
    let anchor = Rect {
        x: 0,
        y: 21,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 80, 5, SCREEN);

    assert_eq!(popup.y, 24);
    assert_eq!(popup.height, 0);
}

#[test]
fn test_inner_rect_basic() {
    let area = Rect {
        x: 10,
        y: 20,
        width: 30,
        height: 6,
    };

    let inner = inner_rect(area);

    assert_eq!(inner.x, 11);
    assert_eq!(inner.y, 21);
    assert_eq!(inner.width, 28);
    assert_eq!(inner.height, 4);
}

#[test]
fn test_inner_rect_too_small_saturates() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 1,
        height: 1,
    };

    let inner = inner_rect(area);

    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
