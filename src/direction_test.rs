#![allow(clippy::float_cmp)]

use super::EdgeRule::{Free, Invert, Lock};
use super::*;

// =============================================================
// EdgeRule
// =============================================================

#[test]
fn edge_rule_apply() {
    assert_eq!(EdgeRule::Free.apply(7.0), 7.0);
    assert_eq!(EdgeRule::Invert.apply(7.0), -7.0);
    assert_eq!(EdgeRule::Lock.apply(7.0), 0.0);
}

#[test]
fn edge_rule_only_lock_is_locked() {
    assert!(EdgeRule::Lock.is_locked());
    assert!(!EdgeRule::Free.is_locked());
    assert!(!EdgeRule::Invert.is_locked());
}

// =============================================================
// Projection table
// =============================================================

#[test]
fn top_inverts_height_and_locks_horizontal() {
    let r = Direction::Top.rules();
    assert_eq!(r, EdgeRules { width: Lock, height: Invert, top: Free, left: Lock });
}

#[test]
fn top_right_inverts_height_and_locks_left() {
    let r = Direction::TopRight.rules();
    assert_eq!(r, EdgeRules { width: Free, height: Invert, top: Free, left: Lock });
}

#[test]
fn right_only_moves_width() {
    let r = Direction::Right.rules();
    assert_eq!(r, EdgeRules { width: Free, height: Lock, top: Lock, left: Lock });
}

#[test]
fn bottom_right_grows_both_and_pins_origin() {
    let r = Direction::BottomRight.rules();
    assert_eq!(r, EdgeRules { width: Free, height: Free, top: Lock, left: Lock });
}

#[test]
fn bottom_only_moves_height() {
    let r = Direction::Bottom.rules();
    assert_eq!(r, EdgeRules { width: Lock, height: Free, top: Lock, left: Lock });
}

#[test]
fn bottom_left_inverts_width_and_locks_top() {
    let r = Direction::BottomLeft.rules();
    assert_eq!(r, EdgeRules { width: Invert, height: Free, top: Lock, left: Free });
}

#[test]
fn left_inverts_width_and_locks_vertical() {
    let r = Direction::Left.rules();
    assert_eq!(r, EdgeRules { width: Invert, height: Lock, top: Lock, left: Free });
}

#[test]
fn top_left_inverts_both_without_locks() {
    let r = Direction::TopLeft.rules();
    assert_eq!(r, EdgeRules { width: Invert, height: Invert, top: Free, left: Free });
}

#[test]
fn moving_edges_never_free_and_locked_on_same_axis_pair() {
    // A handle that moves the top edge must also resize height, and likewise
    // for left/width; otherwise the element would translate instead of resize.
    for d in Direction::ALL {
        let r = d.rules();
        if !r.top.is_locked() {
            assert_eq!(r.height, Invert, "{d}");
        }
        if !r.left.is_locked() {
            assert_eq!(r.width, Invert, "{d}");
        }
    }
}

// =============================================================
// Names and parsing
// =============================================================

#[test]
fn all_has_eight_distinct_directions() {
    for (i, a) in Direction::ALL.iter().enumerate() {
        for (j, b) in Direction::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn display_round_trips_through_from_str() {
    for d in Direction::ALL {
        assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
    }
}

#[test]
fn from_str_accepts_kebab_snake_and_compass() {
    assert_eq!("top-left".parse::<Direction>().unwrap(), Direction::TopLeft);
    assert_eq!("bottom_right".parse::<Direction>().unwrap(), Direction::BottomRight);
    assert_eq!(" Left ".parse::<Direction>().unwrap(), Direction::Left);
    assert_eq!("ne".parse::<Direction>().unwrap(), Direction::TopRight);
}

#[test]
fn from_str_rejects_unknown() {
    let err = "middle".parse::<Direction>().unwrap_err();
    assert!(matches!(err, ResizeError::UnknownDirection(ref s) if s == "middle"));
}

#[test]
fn cursor_names_follow_compass() {
    assert_eq!(Direction::Top.cursor(), "n-resize");
    assert_eq!(Direction::BottomLeft.cursor(), "sw-resize");
    assert_eq!(Direction::TopLeft.cursor(), "nw-resize");
}

#[test]
fn serde_uses_screaming_snake_case() {
    assert_eq!(serde_json::to_value(Direction::BottomRight).unwrap(), "BOTTOM_RIGHT");
    let d: Direction = serde_json::from_str("\"top-right\"").unwrap();
    assert_eq!(d, Direction::TopRight);
    assert!(serde_json::from_str::<Direction>("\"diagonal\"").is_err());
}
