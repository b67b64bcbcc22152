use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Track(f64),
    Item(usize, f64),
    Released(Teardown),
}

#[derive(Default)]
struct RecordingHost {
    width: Option<f64>,
    measure_calls: usize,
    calls: Vec<Call>,
}

impl RecordingHost {
    fn laid_out(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    fn track_offsets(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Track(x) => Some(*x),
                _ => None,
            })
            .collect()
    }

    fn item_updates(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Item(..)))
            .count()
    }
}

impl RenderHost for RecordingHost {
    fn measure_track_width(&mut self) -> Option<f64> {
        self.measure_calls += 1;
        self.width
    }

    fn translate_track(&mut self, offset: Vec2) {
        self.calls.push(Call::Track(offset.x));
    }

    fn translate_item(&mut self, index: usize, offset: Vec2) {
        self.calls.push(Call::Item(index, offset.y));
    }

    fn released(&mut self, resource: Teardown) {
        self.calls.push(Call::Released(resource));
    }
}

fn abc() -> Vec<CarouselItem> {
    ["A", "B", "C"]
        .into_iter()
        .map(|n| CarouselItem::new(n, format!("{n}.svg")))
        .collect()
}

#[test]
fn mount_with_layout_starts_running() {
    let mut host = RecordingHost::laid_out(600.0);
    let session = MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.track().len(), 6);
    assert_eq!(session.oscillator_count(), 6);
    assert_eq!(session.state().offset_px, 0.0);
    drop(session);
    assert_eq!(host.track_offsets(), [0.0]);
}

#[test]
fn unmeasured_width_defers_start() {
    let mut host = RecordingHost::default();
    {
        let mut session =
            MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
        assert_eq!(session.phase(), Phase::Measuring);
        session.tick(0.1);
        session.tick(0.1);
        assert_eq!(session.phase(), Phase::Measuring);
        assert_eq!(session.state().offset_px, 0.0);
    }
    assert_eq!(host.measure_calls, 3);
    assert!(host.track_offsets().is_empty());
    assert!(host.item_updates() > 0);
}

#[test]
fn zero_width_is_not_a_measurement() {
    let mut host = RecordingHost::laid_out(0.0);
    let mut session = MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
    session.tick(1.0);
    let state = session.state();
    assert_eq!(state.phase, Phase::Measuring);
    assert!(state.offset_px.is_finite());
}

#[test]
fn empty_list_renders_nothing() {
    let mut host = RecordingHost::laid_out(600.0);
    {
        let mut session =
            MarqueeSession::mount(Vec::new(), &MarqueeConfig::default(), &mut host).unwrap();
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.oscillator_count(), 0);
        session.tick(1.0);
        session.pointer_enter();
    }
    assert!(host.calls.is_empty());
    assert_eq!(host.measure_calls, 0);
}

#[test]
fn invalid_config_is_rejected() {
    let mut host = RecordingHost::laid_out(600.0);
    let cfg = MarqueeConfig {
        loop_duration_secs: 0.0,
        ..MarqueeConfig::default()
    };
    assert!(MarqueeSession::mount(abc(), &cfg, &mut host).is_err());
}

#[test]
fn ticks_translate_track_and_tiles() {
    let mut host = RecordingHost::laid_out(1300.0);
    {
        let mut session =
            MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
        session.tick(6.5);
        assert!((session.state().offset_px + 65.0).abs() < 1e-9);
    }
    let offsets = host.track_offsets();
    assert_eq!(offsets.len(), 2);
    assert!((offsets[1] + 65.0).abs() < 1e-9);
    assert_eq!(host.item_updates(), 6);
}

#[test]
fn pausing_scroll_keeps_tiles_bobbing() {
    let mut host = RecordingHost::laid_out(600.0);
    {
        let mut session =
            MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
        session.pause_scroll();
        for _ in 0..10 {
            session.tick(0.1);
        }
        assert_eq!(session.state().offset_px, 0.0);
    }
    assert_eq!(host.track_offsets(), [0.0]);
    assert_eq!(host.item_updates(), 60);
    let tile0_moved = host
        .calls
        .iter()
        .any(|c| matches!(c, Call::Item(0, y) if *y < 0.0));
    assert!(tile0_moved);
}

#[test]
fn hover_damps_but_never_stops() {
    let mut host = RecordingHost::laid_out(600.0);
    let mut session = MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
    session.tick(1.0);
    session.pointer_enter();
    let mut prev = session.state().offset_px;
    for _ in 0..120 {
        session.tick(1.0 / 60.0);
        let now = session.state().offset_px;
        assert!(now < prev);
        prev = now;
    }
    let state = session.state();
    assert!(state.hovered);
    assert!((state.speed_scale - 0.3).abs() < 1e-9);
    session.pointer_leave();
    assert_eq!(session.state().target_scale, 1.0);
}

#[test]
fn teardown_releases_in_order_and_stops_updates() {
    let mut host = RecordingHost::laid_out(600.0);
    {
        let mut session =
            MarqueeSession::mount(abc(), &MarqueeConfig::default(), &mut host).unwrap();
        session.tick(0.5);
        session.unmount();
    }
    let tail: Vec<Call> = host.calls.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(
        tail,
        [
            Call::Released(Teardown::ScrollDriver),
            Call::Released(Teardown::Oscillators),
            Call::Released(Teardown::HoverListeners),
        ]
    );
    let released = host
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Released(_)))
        .count();
    assert_eq!(released, 3);
}
