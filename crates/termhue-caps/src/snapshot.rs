//! Frozen capability snapshots.

use crate::{CapabilitySource, ColorProfile, Rgb};

/// A frozen, consistent read of a capability source.
///
/// Live sources may answer differently from one call to the next (the user
/// can switch the OS theme mid-render). Capturing a snapshot once per render
/// pass guarantees every color resolved in that pass sees the same facts, and
/// makes each query a plain field read.
///
/// Snapshots can also be built directly when an application already knows
/// its terminal:
///
/// ```rust
/// use termhue_caps::{CapabilitySource, ColorProfile, Snapshot};
///
/// let caps = Snapshot::new()
///     .with_color_profile(ColorProfile::Xterm256)
///     .with_light_background(true);
///
/// assert_eq!(caps.color_profile(), Some(ColorProfile::Xterm256));
/// assert!(caps.light_background_mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    color_profile: Option<ColorProfile>,
    background: Option<Rgb>,
    foreground: Option<Rgb>,
    light_background: bool,
}

impl Snapshot {
    /// Creates a snapshot where every fact is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current answers of `source`.
    ///
    /// Each fact is queried exactly once. Capturing a snapshot returns it as
    /// is, without querying it again.
    pub fn capture<S: CapabilitySource + ?Sized>(source: &S) -> Self {
        if let Some(snapshot) = source.as_snapshot() {
            return *snapshot;
        }

        let snapshot = Self {
            color_profile: source.color_profile(),
            background: source.background_color(),
            foreground: source.foreground_color(),
            light_background: source.light_background_mode(),
        };
        tracing::trace!(?snapshot, "captured terminal capabilities");
        snapshot
    }

    /// Sets the known color profile.
    pub fn with_color_profile(mut self, profile: ColorProfile) -> Self {
        self.color_profile = Some(profile);
        self
    }

    /// Sets the known background color.
    pub fn with_background(mut self, rgb: Rgb) -> Self {
        self.background = Some(rgb);
        self
    }

    /// Sets the known foreground color.
    pub fn with_foreground(mut self, rgb: Rgb) -> Self {
        self.foreground = Some(rgb);
        self
    }

    /// Sets whether the background is light.
    pub fn with_light_background(mut self, light: bool) -> Self {
        self.light_background = light;
        self
    }
}

impl CapabilitySource for Snapshot {
    fn color_profile(&self) -> Option<ColorProfile> {
        self.color_profile
    }

    fn background_color(&self) -> Option<Rgb> {
        self.background
    }

    fn foreground_color(&self) -> Option<Rgb> {
        self.foreground
    }

    fn light_background_mode(&self) -> bool {
        self.light_background
    }

    fn as_snapshot(&self) -> Option<&Snapshot> {
        Some(self)
    }
}
