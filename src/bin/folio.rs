use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use folio::{
    ContactForm, Field, FormStatus, Fps, FrameClock, HttpRelay, MarqueeSession, Phase,
    RenderHost, SiteConfig, Vec2,
};

const ACCESS_KEY_ENV: &str = "FOLIO_RELAY_ACCESS_KEY";

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a site config.
    Check(CheckArgs),
    /// Drive a headless marquee and print one JSON line per sampled frame.
    Sample(SampleArgs),
    /// Send a message through the contact relay.
    Contact(ContactArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Site config JSON. Uses the built-in config when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Site config JSON. Uses the built-in config when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rendered width of the doubled track in pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seconds to simulate.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Frames before the host can report a width.
    #[arg(long, default_value_t = 0)]
    layout_delay_frames: u64,

    /// Pointer enters at this time (seconds).
    #[arg(long)]
    hover_at: Option<f64>,

    /// Pointer leaves at this time (seconds).
    #[arg(long)]
    leave_at: Option<f64>,

    /// Print every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Parser, Debug)]
struct ContactArgs {
    /// Site config JSON. Uses the built-in config when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Relay access key; falls back to `FOLIO_RELAY_ACCESS_KEY`, then the config.
    #[arg(long)]
    access_key: Option<String>,

    /// Sender name.
    #[arg(long)]
    name: String,

    /// Sender email.
    #[arg(long)]
    email: String,

    /// Subject line.
    #[arg(long)]
    subject: String,

    /// Message body.
    #[arg(long)]
    message: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Contact(args) => cmd_contact(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SiteConfig> {
    let cfg = match path {
        Some(p) => SiteConfig::from_path(p)
            .with_context(|| format!("load site config '{}'", p.display()))?,
        None => SiteConfig::default(),
    };
    cfg.validate().context("validate site config")?;
    Ok(cfg)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    println!(
        "ok: {} items ({} tiles), loop {}s, hover x{} over {}s, {} stats",
        cfg.items.len(),
        cfg.items.len() * 2,
        cfg.marquee.loop_duration_secs,
        cfg.marquee.hover.damped_scale,
        cfg.marquee.hover.transition_secs,
        cfg.stats.len(),
    );
    Ok(())
}

/// Render host with no visuals: reports a fixed width once "laid out" and keeps the last
/// translations.
struct HeadlessHost {
    width: f64,
    layout_delay_frames: u64,
    measured_frames: u64,
    track: Vec2,
    tiles: Vec<f64>,
}

impl RenderHost for HeadlessHost {
    fn measure_track_width(&mut self) -> Option<f64> {
        let ready = self.measured_frames >= self.layout_delay_frames;
        self.measured_frames += 1;
        ready.then_some(self.width)
    }

    fn translate_track(&mut self, offset: Vec2) {
        self.track = offset;
    }

    fn translate_item(&mut self, index: usize, offset: Vec2) {
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = offset.y;
        }
    }
}

#[derive(serde::Serialize)]
struct FrameLine {
    frame: u64,
    time: f64,
    phase: Phase,
    offset_px: f64,
    speed_scale: f64,
    cycles: u64,
    hovered: bool,
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let fps = Fps::new(args.fps, 1)?;
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be a non-negative number");
    }
    let total_frames = fps.secs_to_frames_floor(args.seconds);
    let every = args.every.max(1);

    let mut host = HeadlessHost {
        width: args.width,
        layout_delay_frames: args.layout_delay_frames,
        measured_frames: 0,
        track: Vec2::ZERO,
        tiles: vec![0.0; cfg.items.len() * 2],
    };
    let mut session = MarqueeSession::mount(cfg.items.clone(), &cfg.marquee, &mut host)?;
    let mut clock = FrameClock::new(fps);
    let mut hovered = false;
    let mut left = false;

    for _ in 0..total_frames {
        let dt = clock.step();
        let now = clock.now_secs();
        if !hovered && args.hover_at.is_some_and(|t| now >= t) {
            session.pointer_enter();
            hovered = true;
        }
        if !left && args.leave_at.is_some_and(|t| now >= t) {
            session.pointer_leave();
            left = true;
        }
        session.tick(dt);

        if clock.frame().0 % every == 0 {
            let state = session.state();
            let line = FrameLine {
                frame: clock.frame().0,
                time: now,
                phase: state.phase,
                offset_px: state.offset_px,
                speed_scale: state.speed_scale,
                cycles: state.cycles,
                hovered: state.hovered,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    session.unmount();

    tracing::info!(
        frames = total_frames,
        track_x = host.track.x,
        tile0_y = ?host.tiles.first(),
        "sample finished"
    );
    Ok(())
}

fn cmd_contact(args: ContactArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let access_key = args
        .access_key
        .or_else(|| std::env::var(ACCESS_KEY_ENV).ok())
        .unwrap_or_else(|| cfg.relay.access_key.clone());

    let relay = HttpRelay::new(&cfg.relay)?;
    let mut form = ContactForm::new(access_key);
    form.set(Field::Name, args.name);
    form.set(Field::Email, args.email);
    form.set(Field::Subject, args.subject);
    form.set(Field::Message, args.message);

    match form.submit(&relay).context("submit contact form")? {
        FormStatus::Submitted { .. } => {
            eprintln!("sent");
            Ok(())
        }
        FormStatus::Failed { detail } => {
            anyhow::bail!("{} ({detail})", folio::FAILURE_NOTICE)
        }
        FormStatus::Editing | FormStatus::Submitting => {
            anyhow::bail!("submission did not complete")
        }
    }
}
