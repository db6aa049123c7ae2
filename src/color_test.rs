#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parse_hex_supports_short_and_long_forms() {
    assert_eq!(Rgb::parse_hex("#ABC"), Some(Rgb::new(170, 187, 204)));
    assert_eq!(Rgb::parse_hex("  #a1B2c3 "), Some(Rgb::new(161, 178, 195)));
}

#[test]
fn parse_hex_rejects_invalid_inputs() {
    assert_eq!(Rgb::parse_hex("AABBCC"), None);
    assert_eq!(Rgb::parse_hex("#12"), None);
    assert_eq!(Rgb::parse_hex("#abcd"), None);
    assert_eq!(Rgb::parse_hex("#12GG34"), None);
    assert_eq!(Rgb::parse_hex("#ééé"), None);
}

#[test]
fn to_hex_is_canonical_lowercase() {
    assert_eq!(Rgb::parse_hex("#ABC").map(Rgb::to_hex).as_deref(), Some("#aabbcc"));
    assert_eq!(Rgb::new(0, 132, 255).to_hex(), "#0084ff");
}

#[test]
fn lightness_of_black_and_white() {
    assert_eq!(Rgb::new(0, 0, 0).lightness(), 0.0);
    assert_eq!(Rgb::new(255, 255, 255).lightness(), 1.0);
}

#[test]
fn lightness_uses_max_and_min_channels() {
    // (255 + 0) / 2 / 255
    assert!((Rgb::new(255, 0, 128).lightness() - 0.5).abs() < 1e-12);
}

#[test]
fn black_selects_dark_backdrop() {
    assert_eq!(Backdrop::for_color(Rgb::new(0, 0, 0)), Backdrop::Dark);
}

#[test]
fn white_selects_light_backdrop() {
    assert_eq!(Backdrop::for_color(Rgb::new(255, 255, 255)), Backdrop::Light);
}

#[test]
fn mid_gray_just_above_half_selects_light_backdrop() {
    let gray = Rgb::parse_hex("#808080").unwrap();
    assert!(gray.lightness() > 0.5);
    assert_eq!(Backdrop::for_color(gray), Backdrop::Light);
}

#[test]
fn exact_half_selects_dark_backdrop() {
    assert_eq!(Backdrop::for_color(Rgb::new(255, 0, 0)), Backdrop::Dark);
}

#[test]
fn gradient_appends_alpha_suffixes() {
    assert_eq!(
        Backdrop::Light.gradient(Rgb::new(255, 255, 255)),
        "linear-gradient(135deg, #ffffff15 0%, #ffffff05 100%)"
    );
    assert_eq!(
        Backdrop::Dark.gradient(Rgb::parse_hex("#123").unwrap()),
        "linear-gradient(135deg, #11223310 0%, #11223303 100%)"
    );
}

#[test]
fn signed_channels_are_rejected() {
    assert_eq!(Rgb::parse_hex("#+f+f+f"), None);
    assert_eq!(Rgb::parse_hex("#+ff"), None);
}
