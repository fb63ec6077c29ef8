//! The capability query trait and the stub source.

use crate::{ColorProfile, Rgb, Snapshot};

mod private {
    pub trait Sealed {}

    impl Sealed for crate::Stub {}
    impl Sealed for crate::Snapshot {}
    impl Sealed for crate::Detector {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
    impl<T: Sealed + ?Sized> Sealed for Box<T> {}
}

/// Answers what a terminal can display.
///
/// The set of implementations is closed: [`Stub`], [`Snapshot`] and
/// [`Detector`](crate::Detector). Code that resolves colors takes
/// `&dyn CapabilitySource` and usually hands it a [`Snapshot`] so that one
/// render pass sees consistent answers.
pub trait CapabilitySource: private::Sealed {
    /// The terminal's color profile, or `None` if it is unknown.
    fn color_profile(&self) -> Option<ColorProfile>;

    /// The terminal's background color, or `None` if it is unknown.
    fn background_color(&self) -> Option<Rgb>;

    /// The terminal's default foreground color, or `None` if it is unknown.
    fn foreground_color(&self) -> Option<Rgb>;

    /// Whether the terminal background is light.
    fn light_background_mode(&self) -> bool;

    #[doc(hidden)]
    fn as_snapshot(&self) -> Option<&Snapshot> {
        None
    }
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for &T {
    fn color_profile(&self) -> Option<ColorProfile> {
        (**self).color_profile()
    }

    fn background_color(&self) -> Option<Rgb> {
        (**self).background_color()
    }

    fn foreground_color(&self) -> Option<Rgb> {
        (**self).foreground_color()
    }

    fn light_background_mode(&self) -> bool {
        (**self).light_background_mode()
    }

    fn as_snapshot(&self) -> Option<&Snapshot> {
        (**self).as_snapshot()
    }
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for Box<T> {
    fn color_profile(&self) -> Option<ColorProfile> {
        (**self).color_profile()
    }

    fn background_color(&self) -> Option<Rgb> {
        (**self).background_color()
    }

    fn foreground_color(&self) -> Option<Rgb> {
        (**self).foreground_color()
    }

    fn light_background_mode(&self) -> bool {
        (**self).light_background_mode()
    }

    fn as_snapshot(&self) -> Option<&Snapshot> {
        (**self).as_snapshot()
    }
}

/// A source that knows nothing.
///
/// Every query reports "unknown" (or `false`), which makes every adaptive
/// color resolve to the terminal default. Use it when no capability backend
/// is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stub;

/// Returns the stub capability source.
pub fn stub() -> Stub {
    Stub
}

impl CapabilitySource for Stub {
    fn color_profile(&self) -> Option<ColorProfile> {
        None
    }

    fn background_color(&self) -> Option<Rgb> {
        None
    }

    fn foreground_color(&self) -> Option<Rgb> {
        None
    }

    fn light_background_mode(&self) -> bool {
        false
    }
}
