//! OS light/dark preference detection.
//!
//! When a terminal does not advertise its background color, the OS-wide
//! appearance setting is the best remaining hint. Detection goes through a
//! replaceable function so tests and applications can force a mode:
//!
//! ```rust
//! use termhue_caps::{detect_os_mode, set_mode_detector, OsMode};
//!
//! set_mode_detector(|| Some(OsMode::Light));
//! assert_eq!(detect_os_mode(), Some(OsMode::Light));
//! ```

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// OS-wide appearance setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsMode {
    Light,
    Dark,
}

type ModeDetector = fn() -> Option<OsMode>;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to query the OS appearance preference.
///
/// Use [`reset_mode_detector`] to go back to querying the OS.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS-based detection.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

/// Queries the OS appearance preference.
///
/// Returns `None` when the platform reports no preference or cannot be
/// queried.
pub fn detect_os_mode() -> Option<OsMode> {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> Option<OsMode> {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => Some(OsMode::Dark),
        Ok(OsThemeMode::Light) => Some(OsMode::Light),
        Ok(_) => None,
        Err(_) => {
            tracing::debug!("OS appearance detection failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detect_os_mode_uses_override() {
        set_mode_detector(|| Some(OsMode::Dark));
        assert_eq!(detect_os_mode(), Some(OsMode::Dark));

        set_mode_detector(|| Some(OsMode::Light));
        assert_eq!(detect_os_mode(), Some(OsMode::Light));

        set_mode_detector(|| None);
        assert_eq!(detect_os_mode(), None);

        reset_mode_detector();
    }
}
