//! # Termhue Caps - Terminal Color Capabilities
//!
//! `termhue-caps` answers the questions a color resolver needs to ask about
//! a terminal: which color profile it supports, what its default background
//! and foreground colors are, and whether its background is light.
//!
//! ## Core Concepts
//!
//! - [`CapabilitySource`]: the sealed query trait consumed by color resolution
//! - [`Stub`]: a source that knows nothing; the safe default
//! - [`Detector`]: a live source reading `TERM`, `COLORTERM`, `NO_COLOR` and
//!   `COLORFGBG`, falling back to the OS appearance preference
//! - [`Snapshot`]: a frozen copy of any source, captured once per render pass
//!
//! ## Quick Start
//!
//! ```rust
//! use termhue_caps::{CapabilitySource, Detector, Snapshot};
//!
//! let caps = Snapshot::capture(&Detector::new());
//! if let Some(profile) = caps.color_profile() {
//!     println!("terminal supports {profile}");
//! }
//! ```
//!
//! ## Unknown vs. Known
//!
//! Every query except [`light_background_mode`](CapabilitySource::light_background_mode)
//! returns an `Option`: `None` means the source could not tell, which is
//! different from a known answer such as [`ColorProfile::Monochrome`].

mod detect;
mod env;
mod mode;
mod profile;
mod rgb;
mod snapshot;
mod source;

pub use detect::Detector;
pub use env::{EnvReader, MockEnv, RealEnv};
pub use mode::{detect_os_mode, reset_mode_detector, set_mode_detector, OsMode};
pub use profile::ColorProfile;
pub use rgb::{Rgb, ANSI16};
pub use snapshot::Snapshot;
pub use source::{stub, CapabilitySource, Stub};
