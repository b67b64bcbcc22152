use super::*;

#[test]
fn settled_tween_reports_its_value() {
    let t = Tween::settled(1.0, 0.5, Ease::OutQuad);
    assert!(t.is_settled());
    assert_eq!(t.value(), 1.0);
    assert_eq!(*t.target(), 1.0);
}

#[test]
fn linear_tween_interpolates_and_settles() {
    let mut t = Tween::settled(0.0, 1.0, Ease::Linear);
    assert!(t.retarget(10.0));
    t.advance(0.25);
    assert!((t.value() - 2.5).abs() < 1e-12);
    t.advance(5.0);
    assert!(t.is_settled());
    assert_eq!(t.value(), 10.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::settled(0.0, 1.0, Ease::Linear);
    t.retarget(10.0);
    t.advance(0.5);
    let mid = t.value();
    assert!(t.retarget(0.0));
    assert!((t.value() - mid).abs() < 1e-12);
    t.advance(0.5);
    assert!((t.value() - mid / 2.0).abs() < 1e-12);
}

#[test]
fn retarget_to_same_target_keeps_segment() {
    let mut t = Tween::settled(1.0, 1.0, Ease::Linear);
    t.retarget(0.0);
    t.advance(0.4);
    let before = t.value();
    assert!(!t.retarget(0.0));
    assert_eq!(t.value(), before);
    t.advance(0.6);
    assert_eq!(t.value(), 0.0);
}

#[test]
fn zero_duration_snaps() {
    let mut t = Tween::settled(1.0, 0.0, Ease::OutQuad);
    t.retarget(0.3);
    assert_eq!(t.value(), 0.3);
}

#[test]
fn ignores_bad_steps() {
    let mut t = Tween::settled(0.0, 1.0, Ease::Linear);
    t.retarget(1.0);
    t.advance(f64::NAN);
    t.advance(-1.0);
    assert_eq!(t.value(), 0.0);
}
