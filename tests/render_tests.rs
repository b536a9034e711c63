//! Tests for the indicator renderers.
//!
//! The renderers are pure, so these tests check their output text directly
//! without going through a meter.

use progress_meter::render::{bar, percent, scaled_units, spinner, BarFace, Kind};
use progress_meter::Error;

fn default_glyphs() -> Vec<String> {
    spinner::DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect()
}

// === Bar ===

#[test]
fn test_bar_half_full() {
    let rendered = bar::render(10, 20, 20, &BarFace::default());
    assert_eq!(rendered, "|==========          |");
    assert_eq!(rendered.matches('=').count(), 10);
}

#[test]
fn test_bar_empty_and_full() {
    let face = BarFace::default();
    assert_eq!(bar::render(0, 100, 20, &face), format!("|{}|", " ".repeat(20)));
    assert_eq!(bar::render(100, 100, 20, &face), format!("|{}|", "=".repeat(20)));
}

#[test]
fn test_bar_filled_units_match_rounding() {
    let width = 20;
    for max_value in [1u64, 3, 7, 20, 1024, 2560] {
        let mut previous = 0;
        for value in 0..=max_value {
            let filled = bar::filled_units(value, max_value, width);
            let expected =
                ((value * width as u64) as f64 / max_value as f64 + 0.5).floor() as usize;
            assert_eq!(filled, expected, "value {value} of {max_value}");
            assert!(filled >= previous, "filled units must never shrink");
            assert!(filled <= width);
            previous = filled;
        }
    }
}

#[test]
fn test_bar_rounds_half_up() {
    // 1/8 of 20 units is 2.5
    assert_eq!(bar::filled_units(1, 8, 20), 3);
    // 1/40 of 20 units is 0.5
    assert_eq!(bar::filled_units(1, 40, 20), 1);
    // 1/41 of 20 units is just under 0.5
    assert_eq!(bar::filled_units(1, 41, 20), 0);
}

#[test]
fn test_bar_clamps_overflowing_value() {
    let face = BarFace::default();
    let full = bar::render(1024, 1024, 20, &face);
    for value in [1025, 2048, u64::MAX] {
        assert_eq!(bar::render(value, 1024, 20, &face), full);
    }
}

#[test]
fn test_bar_has_fixed_width() {
    let face = BarFace::default();
    for value in 0..=64 {
        assert_eq!(bar::render(value, 64, 20, &face).chars().count(), 22);
    }
}

#[test]
fn test_bar_zero_max_value_renders_empty() {
    assert_eq!(bar::filled_units(5, 0, 20), 0);
    assert_eq!(
        bar::render(5, 0, 4, &BarFace::default()),
        "|    |"
    );
}

#[test]
fn test_bar_custom_face() {
    let face = BarFace::new('[', '#', '.', ']');
    assert_eq!(bar::render(1, 2, 6, &face), "[###...]");
}

#[test]
fn test_bar_face_parse_and_display() {
    let face: BarFace = "| =|".parse().unwrap();
    assert_eq!(face, BarFace::default());
    assert_eq!(face.to_string(), "| =|");

    let face: BarFace = "[░█]".parse().unwrap();
    assert_eq!(face.fill, '█');
    assert_eq!(face.empty, '░');
}

#[test]
fn test_bar_face_parse_rejects_wrong_length() {
    for text in ["", "|=|", "| =||"] {
        let err = text.parse::<BarFace>().unwrap_err();
        assert!(matches!(err, Error::InvalidBarFace(ref s) if s == text));
    }
}

// === Percent ===

#[test]
fn test_percent_formatting() {
    assert_eq!(percent::render(0, 1024), "  0%");
    assert_eq!(percent::render(512, 1024), " 50%");
    assert_eq!(percent::render(1024, 1024), "100%");
    assert_eq!(percent::render(42, 100), " 42%");
}

#[test]
fn test_percent_always_four_columns() {
    for max_value in [1u64, 3, 99, 100, 1024, 99_999] {
        for value in (0..=max_value + 10).step_by(((max_value / 50) + 1) as usize) {
            let rendered = percent::render(value, max_value);
            assert_eq!(rendered.len(), percent::WIDTH, "{rendered:?}");
        }
    }
}

#[test]
fn test_percent_clamps_overflowing_value() {
    assert_eq!(percent::render(5000, 1024), percent::render(1024, 1024));
    assert_eq!(percent::percentage(u64::MAX, 3), 100);
}

#[test]
fn test_percent_rounding() {
    assert_eq!(percent::percentage(500, 1024), 49);
    assert_eq!(percent::percentage(501, 1024), 49);
    assert_eq!(percent::percentage(1, 200), 1);
    assert_eq!(percent::percentage(1, 201), 0);
    assert_eq!(percent::percentage(1023, 1024), 100);
}

#[test]
fn test_percent_zero_max_value() {
    assert_eq!(percent::render(10, 0), "  0%");
}

#[test]
fn test_scaled_units_large_values() {
    assert_eq!(scaled_units(u64::MAX, u64::MAX, 100), 100);
    assert_eq!(scaled_units(u64::MAX / 2, u64::MAX, 100), 50);
}

// === Spinner ===

#[test]
fn test_spinner_cycles_with_period_four() {
    let glyphs = default_glyphs();
    let mut phase = 0;
    let mut seen = Vec::new();
    for _ in 0..8 {
        phase = spinner::advance(phase, glyphs.len());
        seen.push(spinner::render(phase, &glyphs).to_string());
    }
    assert_eq!(seen, ["/", "-", "\\", "|", "/", "-", "\\", "|"]);
    assert_eq!(seen[..4], seen[4..]);
}

#[test]
fn test_spinner_advance_wraps() {
    assert_eq!(spinner::advance(3, 4), 0);
    assert_eq!(spinner::advance(0, 1), 0);
    assert_eq!(spinner::advance(7, 0), 0);
}

#[test]
fn test_spinner_render_out_of_range_phase() {
    let glyphs = default_glyphs();
    assert_eq!(spinner::render(5, &glyphs), "/");
    assert_eq!(spinner::render(0, &[]), "");
}

// === Kind ===

#[test]
fn test_kind_from_str() {
    assert_eq!("bar".parse::<Kind>().unwrap(), Kind::Bar);
    assert_eq!(" Percent ".parse::<Kind>().unwrap(), Kind::Percent);
    assert_eq!("SPINNER".parse::<Kind>().unwrap(), Kind::Spinner);
}

#[test]
fn test_kind_from_str_invalid() {
    let err = "gauge".parse::<Kind>().unwrap_err();
    assert!(matches!(err, Error::InvalidKind(ref s) if s == "gauge"));
    assert_eq!(err.to_string(), "Invalid indicator kind: gauge");
}

#[test]
fn test_kind_display_round_trips() {
    for kind in [Kind::Bar, Kind::Percent, Kind::Spinner] {
        assert_eq!(kind.to_string().parse::<Kind>().unwrap(), kind);
    }
}

#[test]
fn test_kind_needs_max_value() {
    assert!(Kind::Bar.needs_max_value());
    assert!(Kind::Percent.needs_max_value());
    assert!(!Kind::Spinner.needs_max_value());
}
