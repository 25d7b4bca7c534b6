use collage_builder::CollageSettings;
use collage_builder::geometry::CanvasTransform;
use egui::{Pos2, Rect, pos2, vec2};

fn assert_near(actual: Pos2, expected: Pos2) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_translate_then_scale() {
    let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 100.0));
    let settings = CollageSettings {
        translation: vec2(0.1, 0.2),
        scale: 1.5,
    };
    let transform = CanvasTransform::new(rect, &settings);

    // Offset by 20 x 20 points, then scaled 1.5x about the canvas centre
    assert_near(transform.to_screen(pos2(0.0, 0.0)), pos2(-20.0, 5.0));
    assert_near(transform.to_screen(pos2(0.5, 0.5)), pos2(130.0, 80.0));
    assert_near(transform.to_screen(pos2(1.0, 1.0)), pos2(280.0, 155.0));

    let screen_rect = transform.screen_rect();
    assert!((screen_rect.width() - 300.0).abs() < 1e-3);
    assert!((screen_rect.height() - 150.0).abs() < 1e-3);
}

#[test]
fn test_screen_to_document_inverts() {
    let rect = Rect::from_min_size(pos2(40.0, 60.0), vec2(360.0, 360.0));
    let settings = CollageSettings {
        translation: vec2(-0.3, 0.15),
        scale: 0.75,
    };
    let transform = CanvasTransform::new(rect, &settings);

    for point in [pos2(0.0, 0.0), pos2(0.3, 0.8), pos2(1.0, 0.5)] {
        assert_near(transform.to_document(transform.to_screen(point)), point);
    }
}

#[test]
fn test_zero_sized_canvas_stays_finite() {
    let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 120.0));
    let settings = CollageSettings {
        translation: vec2(0.4, 0.4),
        scale: 2.0,
    };
    let transform = CanvasTransform::new(rect, &settings);

    let document = transform.to_document(pos2(50.0, 50.0));
    assert!(document.x.is_finite());
    assert!(document.y.is_finite());
    assert_eq!(document.x, 0.0);
}
