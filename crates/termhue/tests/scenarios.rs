//! End-to-end scenarios: detect capabilities, resolve adaptive colors,
//! encode the resulting styles as tags.

use serial_test::serial;
use termhue::quantize::{to_ansi16, to_ansi256};
use termhue::{
    reset_mode_detector, set_mode_detector, stub, AdaptiveColor, AdaptiveStyle, CapabilitySource,
    CellStyle, Color, ColorProfile, Detector, MockEnv, OsMode, Resolve, Snapshot, Style,
};

fn detected(env: MockEnv) -> Snapshot {
    Snapshot::capture(&Detector::with_env(env))
}

#[test]
fn xterm256_dark_uses_extended_palette() {
    let seed = Color::rgb(0x33, 0x66, 0xff);
    let accent = AdaptiveColor::builder(seed).build();
    let caps = detected(
        MockEnv::new()
            .with_var("TERM", "xterm-256color")
            .with_var("COLORFGBG", "15;0"),
    );

    assert_eq!(caps.color_profile(), Some(ColorProfile::Xterm256));
    assert!(!caps.light_background_mode());
    assert_eq!(accent.resolve(&caps), to_ansi256(seed));
}

#[test]
fn ansi_light_uses_light_override() {
    let blue = Color::Indexed(12);
    let red = Color::rgb(255, 0, 0);
    let color = AdaptiveColor::builder(blue).with_light_ansi16(red).build();

    let light = detected(
        MockEnv::new()
            .with_var("TERM", "xterm")
            .with_var("COLORFGBG", "0;15"),
    );
    let dark = detected(
        MockEnv::new()
            .with_var("TERM", "xterm")
            .with_var("COLORFGBG", "15;0"),
    );

    assert_eq!(color.resolve(&light), to_ansi16(red));
    assert_eq!(color.resolve(&dark), to_ansi16(blue));
}

#[test]
fn no_color_resolves_to_default() {
    let caps = detected(
        MockEnv::new()
            .with_var("TERM", "xterm-256color")
            .with_var("NO_COLOR", "1"),
    );
    assert_eq!(caps.color_profile(), Some(ColorProfile::Monochrome));
    assert_eq!(
        AdaptiveColor::from(Color::Indexed(2)).resolve(&caps),
        Color::Default
    );
}

#[test]
fn stub_snapshot_knows_nothing() {
    let caps = Snapshot::capture(&stub());
    assert_eq!(caps.color_profile(), None);
    assert_eq!(caps.background_color(), None);
    assert!(!caps.light_background_mode());

    let color = AdaptiveColor::builder(Color::rgb(1, 2, 3))
        .with_light_rgb(Color::rgb(4, 5, 6))
        .build();
    assert_eq!(color.resolve(&caps), Color::Default);
}

#[test]
#[serial]
fn os_preference_decides_when_background_unknown() {
    set_mode_detector(|| Some(OsMode::Light));
    let caps = detected(MockEnv::new().with_var("COLORTERM", "truecolor"));
    reset_mode_detector();

    let color = AdaptiveColor::builder(Color::rgb(0xee, 0xee, 0xee))
        .with_light_rgb(Color::rgb(0x11, 0x11, 0x11))
        .build();
    assert!(caps.light_background_mode());
    assert_eq!(color.resolve(&caps), Color::rgb(0x11, 0x11, 0x11));
}

#[test]
fn resolved_style_encodes_and_applies() {
    let caps = Snapshot::new().with_color_profile(ColorProfile::Ansi);
    let warning = AdaptiveStyle::new(Style::new().with_bold(true).with_dim(false))
        .with_fg(Color::rgb(255, 0, 0));

    let style = warning.resolve(&caps);
    let tag = style.to_string();
    assert_eq!(tag, "[red::-b]");
    assert_eq!(tag.parse::<Style>().unwrap().to_string(), tag);

    let base = CellStyle::new().with_bg(Color::Indexed(0));
    let cell = style.apply(base);
    assert_eq!(cell.fg(), Color::Indexed(9));
    assert_eq!(cell.bg(), Color::Indexed(0));
}

#[test]
fn declared_palette_from_yaml() {
    #[derive(serde::Deserialize)]
    struct Palette {
        accent: AdaptiveColor,
        muted: AdaptiveColor,
        heading: Style,
    }

    let palette: Palette = serde_yaml::from_str(
        r##"
accent: "#3366ff"
muted:
  color: gray
  light:
    ansi16: silver
heading: "[::bu]"
"##,
    )
    .unwrap();

    let light = Snapshot::new()
        .with_color_profile(ColorProfile::Ansi)
        .with_light_background(true);
    assert_eq!(palette.muted.resolve(&light), Color::Indexed(7));
    assert_eq!(
        palette.accent.dark().rgb(),
        Color::rgb(0x33, 0x66, 0xff)
    );
    assert_eq!(palette.heading.to_string(), "[::bu]");
}
