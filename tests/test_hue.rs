use hue_wheel::prelude::*;

const DIRECTIONS: [Direction; 2] = [Direction::ClockwiseRbg, Direction::ClockwiseRgb];

#[test]
fn test_red_at_red_start() {
    assert_eq!(get_hue(90.0, 90.0, Direction::ClockwiseRbg), 0.0);
    assert_eq!(get_hue(90.0, 90.0, Direction::ClockwiseRgb), 0.0);
    assert_eq!(get_hue(450.0, 90.0, Direction::ClockwiseRbg), 0.0);
    assert_eq!(get_hue(-270.0, 90.0, Direction::ClockwiseRgb), 0.0);
}

#[test]
fn test_zero_theta_is_one() {
    assert_eq!(get_hue(0.0, 0.0, Direction::ClockwiseRbg), 1.0);
    assert_eq!(get_hue(0.0, 0.0, Direction::ClockwiseRgb), 359.0);
    assert_eq!(
        get_hue(90.0, 0.0, Direction::ClockwiseRbg),
        get_hue(90.0, 1.0, Direction::ClockwiseRbg)
    );
}

#[test]
fn test_hue_always_in_range() {
    let red_starts = [-720.5, -90.0, -1e-12, 0.0, 45.25, 90.0, 359.999, 360.0, 1e6];
    let thetas = [-400.0, -1e-15, 0.0, 0.5, 90.0, 180.0, 270.0, 359.9999, 360.0, 1234.5];

    for direction in DIRECTIONS {
        for red_start in red_starts {
            for theta in thetas {
                let hue = get_hue(red_start, theta, direction);
                assert!(
                    (0.0..360.0).contains(&hue),
                    "get_hue({red_start}, {theta}, {direction:?}) = {hue}"
                );
            }
        }
    }
}

#[test]
fn test_progression() {
    for red_start in [0.0, 90.0, 200.0] {
        for theta in (5..355).step_by(10).map(f64::from) {
            let rbg = get_hue(red_start, theta, Direction::ClockwiseRbg);
            let rbg_next = get_hue(red_start, theta + 1.0, Direction::ClockwiseRbg);
            let rgb = get_hue(red_start, theta, Direction::ClockwiseRgb);
            let rgb_next = get_hue(red_start, theta + 1.0, Direction::ClockwiseRgb);

            // one degree forward, allowing for the wrap through red
            assert!(rbg_next > rbg || rbg_next < 1.0, "rbg at {theta}");
            assert!(rgb_next < rgb || rgb_next > 359.0 - 1e-9, "rgb at {theta}");
        }
    }
}

#[test]
fn test_directions_reflect() {
    // a quarter turn counterclockwise from red
    assert_eq!(get_hue(90.0, 180.0, Direction::ClockwiseRbg), 90.0);
    assert_eq!(get_hue(90.0, 180.0, Direction::ClockwiseRgb), 270.0);
}
