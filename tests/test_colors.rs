mod common;

use common::{angle_distance, PRIMARY_HUES};
use hue_wheel::colors::{BLUE, GREEN, RED};
use hue_wheel::prelude::*;

#[test]
fn test_primaries() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), RED);
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), GREEN);
    assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), BLUE);

    for (hue, rgb) in PRIMARY_HUES {
        assert_eq!(hsl_to_rgb(hue, 1.0, 0.5), rgb, "hue {hue}");
        assert_eq!(Rgb::from(Hsl::new(hue, 1.0, 0.5)), rgb, "hue {hue}");
    }
}

#[test]
fn test_truncates_channels() {
    // x = 0.5 exactly, 127.5 truncates down
    assert_eq!(hsl_to_rgb(90.0, 1.0, 0.5), Rgb::new(127, 255, 0));
    assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Rgb::new(127, 127, 127));
}

#[test]
fn test_gray_when_unsaturated() {
    for step in 0..=20 {
        let lightness = f64::from(step) / 20.0;

        for hue in [0.0, 45.0, 179.5, 300.0, 359.9] {
            let Rgb { r, g, b } = hsl_to_rgb(hue, 0.0, lightness);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }
}

#[test]
fn test_in_domain_channels_follow_chroma() {
    for hue in (0..720).map(|h| f64::from(h) / 2.0) {
        for step in 0..=10 {
            let saturation = f64::from(step) / 10.0;
            let rgb = hsl_to_rgb(hue, saturation, 0.5);
            let max = rgb.r.max(rgb.g).max(rgb.b);
            let min = rgb.r.min(rgb.g).min(rgb.b);

            // chroma at lightness 0.5 is the saturation itself
            let expected = saturation * 255.0;
            assert!(
                (f64::from(max - min) - expected).abs() <= 1.0,
                "hue {hue}, saturation {saturation}: {rgb:?}"
            );
        }
    }
}

#[test]
fn test_rgb_to_hsl_quantizes() {
    assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 1.0, 0.5));
    assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240.0, 1.0, 0.5));

    // 36.9 degrees snaps to 35
    let hsl = rgb_to_hsl(255, 157, 0);
    assert_eq!(hsl.hue, 35.0);

    // 358 degrees snaps to 360, which wraps to 0
    let hsl = Hsl::from(Rgb::new(255, 0, 8));
    assert_eq!(hsl.hue, 0.0);
}

#[test]
fn test_round_trip_within_one_step() {
    for (saturation, lightness) in [(1.0, 0.5), (0.5, 0.5)] {
        for hue in (0..360).step_by(7).map(f64::from) {
            let rgb = hsl_to_rgb(hue, saturation, lightness);
            let hsl = Hsl::from(rgb);

            assert!(
                angle_distance(hsl.hue, hue) <= 5.0,
                "hue {hue} came back as {}",
                hsl.hue
            );
            assert!((hsl.saturation - saturation).abs() * 100.0 <= 5.0);
            assert!((hsl.lightness - lightness).abs() * 100.0 <= 5.0);
        }
    }
}

#[test]
fn test_round_up() {
    assert_eq!(hue_wheel::round_half_up(7.5), 8);
    assert_eq!(hue_wheel::round_half_up(7.4), 7);
    assert_eq!(hue_wheel::round_up(7.4, 4.0), 8);
    assert_eq!(hue_wheel::round_up(7.5, 6.0), 7);
}
