use super::*;

#[test]
fn defaults_match_the_tech_strip() {
    let cfg = MarqueeConfig::default();
    assert_eq!(cfg.loop_duration_secs, 65.0);
    assert_eq!(cfg.direction, ScrollDirection::Left);
    assert_eq!(cfg.hover.damped_scale, 0.3);
    assert_eq!(cfg.hover.transition_secs, 0.5);
    assert_eq!(cfg.bob.amplitude_px, 8.0);
    assert_eq!(cfg.bob.period_variants, 3);
    cfg.validate().unwrap();
}

#[test]
fn empty_json_object_uses_defaults() {
    let cfg: MarqueeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, MarqueeConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg: MarqueeConfig =
        serde_json::from_str(r#"{ "loop_duration_secs": 30, "hover": { "damped_scale": 0.5 } }"#)
            .unwrap();
    assert_eq!(cfg.loop_duration_secs, 30.0);
    assert_eq!(cfg.hover.damped_scale, 0.5);
    assert_eq!(cfg.hover.transition_secs, 0.5);
    assert_eq!(cfg.bob, BobConfig::default());
}

#[test]
fn rejects_bad_timing() {
    let mut cfg = MarqueeConfig::default();
    cfg.loop_duration_secs = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = MarqueeConfig::default();
    cfg.hover.damped_scale = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = MarqueeConfig::default();
    cfg.hover.damped_scale = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = MarqueeConfig::default();
    cfg.bob.period_variants = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = MarqueeConfig::default();
    cfg.hover.transition_secs = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("hover.transition_secs"));

    let mut cfg = MarqueeConfig::default();
    cfg.bob.amplitude_px = f64::NAN;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("bob.amplitude_px"));
}
