//! Folio is the motion core of a single-page portfolio.
//!
//! Its centerpiece is a seamless, endlessly looping logo marquee. Everything is modeled as
//! plain state advanced by a frame clock, and a [`RenderHost`] applies the results.
//!
//! # Marquee overview
//!
//! 1. **Duplicate**: the source item list becomes a doubled [`Track`] (`source ++ source`)
//! 2. **Measure**: the host reports the rendered track width; scrolling waits for a usable value
//! 3. **Scroll**: [`ScrollDriver`] translates the track by one half width per loop duration, then
//!    wraps to zero. The seam is invisible because both halves are identical
//! 4. **Damp**: [`RateController`] eases the speed multiplier on pointer enter/leave
//! 5. **Bob**: [`OscillatorBank`] moves each tile vertically on its own clock
//!
//! A [`MarqueeSession`] ties these together and releases them when dropped.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Duration-anchored loop**: one loop always takes `loop_duration_secs`; velocity follows the
//!   measured width.
//! - **No host updates after unmount**: a session borrows its host exclusively.
//!
//! The rest of the page (reveal latches, stat counters, project pager, navigation state and the
//! contact form) lives in small, independent state types re-exported below.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod contact;
mod foundation;
mod marquee;
mod page;
mod site;

pub use animation::ease::Ease;
pub use animation::looping::{LoopMode, loop_progress};
pub use animation::tween::{Lerp, Tween};
pub use contact::form::{ContactForm, FAILURE_NOTICE, Field, FormStatus, SUCCESS_NOTICE_SECS};
pub use contact::payload::{ContactFields, ContactPayload, RelayResponse};
pub use contact::relay::{ContactRelay, HttpRelay, RelayConfig};
pub use foundation::core::{Fps, FrameClock, FrameIndex, Vec2};
pub use foundation::error::{FolioError, FolioResult};
pub use marquee::config::{BobConfig, HoverConfig, MarqueeConfig, ScrollDirection};
pub use marquee::driver::{ScrollDriver, usable_half_width};
pub use marquee::oscillator::{ItemOscillator, OscillatorBank};
pub use marquee::rate::{FULL_SPEED, RateController};
pub use marquee::session::{MarqueeSession, Phase, PlaybackState, RenderHost, Teardown};
pub use marquee::track::{CarouselItem, Track};
pub use page::counter::{CountUp, Stat};
pub use page::nav::{NavState, SCROLLED_AFTER_PX, SHOW_AFTER_PX, SectionAnchor, nav_state};
pub use page::pager::{ITEMS_PER_PAGE, Pager};
pub use page::reveal::{RevealLatch, SECTION_THRESHOLD};
pub use site::model::{SiteConfig, default_tech_stack};
