//! Tests for geometry, angles, and silhouette parsing.

use glam::Vec2;

use crate::constants::{OFFSCREEN_MARGIN, SILHOUETTE_MIN_EXTENT};
use crate::enums::{AssetKey, MoveKey};
use crate::silhouette::{AssetError, MemoryStore, Silhouette, SilhouetteStore};
use crate::types::{angle_difference_deg, ArenaSize, Rect};

// ---- Rect ----

#[test]
fn test_rect_intersects_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_rect_intersects_disjoint() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn test_rect_touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn test_rect_centered_at() {
    let r = Rect::centered_at(Vec2::new(50.0, 50.0), 20.0, 10.0);
    assert_eq!(r.x, 40.0);
    assert_eq!(r.y, 45.0);
    assert_eq!(r.center(), Vec2::new(50.0, 50.0));
}

// ---- Arena margin ----

#[test]
fn test_arena_margin_boundary_is_inclusive() {
    let arena = ArenaSize::new(800.0, 600.0);
    // Exactly at the margin still counts as inside.
    assert!(arena.contains_with_margin(Vec2::new(800.0 + OFFSCREEN_MARGIN, 300.0), OFFSCREEN_MARGIN));
    assert!(arena.contains_with_margin(Vec2::new(-OFFSCREEN_MARGIN, 300.0), OFFSCREEN_MARGIN));
    // One unit beyond is out.
    assert!(!arena.contains_with_margin(Vec2::new(801.0 + OFFSCREEN_MARGIN, 300.0), OFFSCREEN_MARGIN));
    assert!(!arena.contains_with_margin(Vec2::new(400.0, -OFFSCREEN_MARGIN - 1.0), OFFSCREEN_MARGIN));
}

// ---- Angles ----

#[test]
fn test_angle_difference_simple() {
    assert_eq!(angle_difference_deg(0.0, 90.0), 90.0);
    assert_eq!(angle_difference_deg(90.0, 0.0), -90.0);
    assert_eq!(angle_difference_deg(45.0, 45.0), 0.0);
}

#[test]
fn test_angle_difference_wraparound() {
    // 179 -> -179 is a +2 step through 180, not -358.
    assert!((angle_difference_deg(179.0, -179.0) - 2.0).abs() < 1e-4);
    assert!((angle_difference_deg(-179.0, 179.0) + 2.0).abs() < 1e-4);
    // Opposite directions resolve to a half turn.
    assert!((angle_difference_deg(0.0, 180.0).abs() - 180.0).abs() < 1e-4);
}

// ---- Move keys ----

#[test]
fn test_wasd_and_arrows_alias_to_same_axis() {
    assert_eq!(
        MoveKey::W.axis_contribution(),
        MoveKey::Up.axis_contribution()
    );
    assert_eq!(
        MoveKey::A.axis_contribution(),
        MoveKey::Left.axis_contribution()
    );
    assert_eq!(
        MoveKey::S.axis_contribution(),
        MoveKey::Down.axis_contribution()
    );
    assert_eq!(
        MoveKey::D.axis_contribution(),
        MoveKey::Right.axis_contribution()
    );
}

// ---- Silhouettes ----

#[test]
fn test_silhouette_parse_extents() {
    let colored = "255,0,0 10,10 40,20 30,55\n0,255,0 5,5";
    let outlines = "10,10 40,20 30,55";
    let s = Silhouette::parse(AssetKey::Enemy, colored, outlines).unwrap();
    assert_eq!(s.colored_regions.len(), 2);
    assert_eq!(s.outlines.len(), 1);
    assert_eq!(s.width, 45.0); // 40 + 5 pad
    assert_eq!(s.height, 60.0); // 55 + 5 pad
}

#[test]
fn test_silhouette_skips_comments_and_blank_lines() {
    let colored = "// header\n\n255,0,0 10,10\n// trailing";
    let s = Silhouette::parse(AssetKey::Turret, colored, "\n//nothing\n").unwrap();
    assert_eq!(s.colored_regions.len(), 1);
    assert!(s.outlines.is_empty());
}

#[test]
fn test_silhouette_degenerate_gets_minimum_extent() {
    // Empty point data yields the floor size instead of an error.
    let s = Silhouette::parse(AssetKey::Enemy, "", "").unwrap();
    assert_eq!(s.width, SILHOUETTE_MIN_EXTENT);
    assert_eq!(s.height, SILHOUETTE_MIN_EXTENT);
}

#[test]
fn test_silhouette_malformed_line_is_reported() {
    let err = Silhouette::parse(AssetKey::Enemy, "255,0,0 10,10\nnot-a-color 1,2", "")
        .unwrap_err();
    match err {
        AssetError::Malformed { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_memory_store_missing_asset_is_not_found() {
    let store = MemoryStore::new();
    let err = store.load(AssetKey::Enemy).unwrap_err();
    assert!(matches!(err, AssetError::NotFound { key: AssetKey::Enemy }));
}

#[test]
fn test_default_shapes_cover_all_session_assets() {
    use crate::enums::{ProjectileKind, ShipClass};

    let store = MemoryStore::with_default_shapes();
    assert!(store.load(AssetKey::Ship(ShipClass::Interceptor)).is_ok());
    assert!(store.load(AssetKey::Enemy).is_ok());
    assert!(store.load(AssetKey::Turret).is_ok());
    assert!(store
        .load(AssetKey::Projectile(ProjectileKind::EnemyShot))
        .is_ok());
}
