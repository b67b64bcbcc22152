use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn usable_half_width_filters_unmeasured_content() {
    assert_eq!(usable_half_width(None), None);
    assert_eq!(usable_half_width(Some(0.0)), None);
    assert_eq!(usable_half_width(Some(-4.0)), None);
    assert_eq!(usable_half_width(Some(f64::NAN)), None);
    assert_eq!(usable_half_width(Some(f64::INFINITY)), None);
    assert_eq!(usable_half_width(Some(900.0)), Some(450.0));
}

#[test]
fn idle_driver_does_not_move() {
    let mut d = ScrollDriver::new(65.0, ScrollDirection::Left);
    assert!(!d.advance(1.0, 1.0));
    assert_eq!(d.offset_px(), 0.0);
    assert!(!d.start(0.0));
    assert!(!d.start(f64::NAN));
    assert!(!d.is_running());
}

#[test]
fn motion_is_linear_at_constant_speed() {
    let mut d = ScrollDriver::new(10.0, ScrollDirection::Left);
    assert!(d.start(500.0));
    d.advance(2.5, 1.0);
    assert!(approx(d.offset_px(), -125.0));
    d.advance(2.5, 1.0);
    assert!(approx(d.offset_px(), -250.0));
    assert!(approx(d.velocity_px_per_sec(1.0), 50.0));
}

#[test]
fn one_nominal_duration_is_one_full_cycle() {
    let mut d = ScrollDriver::new(65.0, ScrollDirection::Left);
    d.start(1234.0);
    let dt = 1.0 / 60.0;
    for _ in 0..(65 * 60) {
        d.advance(dt, 1.0);
    }
    assert_eq!(d.cycles() + u64::from(d.progress() > 0.5), 1);
    let residual = d.progress().min(1.0 - d.progress());
    assert!(residual < 1e-6, "residual {residual}");
}

#[test]
fn speed_scale_stretches_the_cycle() {
    let mut d = ScrollDriver::new(10.0, ScrollDirection::Left);
    d.start(100.0);
    d.advance(10.0, 0.5);
    assert!(approx(d.progress(), 0.5));
    d.advance(10.0, 0.5);
    assert_eq!(d.cycles(), 1);
    assert!(approx(d.progress(), 0.0));
}

#[test]
fn large_steps_count_every_wrap() {
    let mut d = ScrollDriver::new(2.0, ScrollDirection::Left);
    d.start(10.0);
    d.advance(7.0, 1.0);
    assert_eq!(d.cycles(), 3);
    assert!(approx(d.progress(), 0.5));
    assert!(approx(d.offset_px(), -5.0));
}

#[test]
fn right_direction_runs_from_minus_half_to_zero() {
    let mut d = ScrollDriver::new(4.0, ScrollDirection::Right);
    d.start(100.0);
    assert!(approx(d.offset_px(), -100.0));
    d.advance(1.0, 1.0);
    assert!(approx(d.offset_px(), -75.0));
}

#[test]
fn pause_and_cancel_stop_motion() {
    let mut d = ScrollDriver::new(4.0, ScrollDirection::Left);
    d.start(100.0);
    d.advance(1.0, 1.0);
    d.pause();
    assert!(!d.advance(1.0, 1.0));
    assert!(approx(d.offset_px(), -25.0));
    d.resume();
    assert!(d.advance(1.0, 1.0));
    d.cancel();
    assert!(!d.advance(1.0, 1.0));
    assert!(!d.start(100.0));
    assert!(approx(d.offset_px(), -50.0));
}

#[test]
fn translation_is_horizontal() {
    let mut d = ScrollDriver::new(4.0, ScrollDirection::Left);
    d.start(100.0);
    d.advance(2.0, 1.0);
    let v = d.translation();
    assert!(approx(v.x, -50.0));
    assert_eq!(v.y, 0.0);
}
