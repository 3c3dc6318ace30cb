use kurbo::Shape as _;

use super::*;
use crate::shadow::compositor::SkipReason;

fn square(x0: f64, x1: f64) -> BezPath {
    kurbo::Rect::new(x0, x0, x1, x1).to_path(0.1)
}

#[test]
fn redraw_tracks_content_between_frames() {
    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 3, 0.0, 0.0);
    let mut layout = ShadowLayout::new(Canvas::new(32, 32), cfg).unwrap();
    layout
        .fill_content_path(&square(4.0, 28.0), Rgba8::new(0, 255, 0, 255))
        .unwrap();

    let first = layout.redraw().unwrap();
    assert_eq!(first.erased_rings, 0);
    assert_eq!(first.drawn_rings, 3);
    let first_outline = layout.previous_outline().cloned().unwrap();

    layout.clear_content();
    layout
        .fill_content_path(&square(10.0, 20.0), Rgba8::new(0, 255, 0, 255))
        .unwrap();
    let second = layout.redraw().unwrap();
    assert_eq!(second.erased_rings, 3);
    assert_ne!(layout.previous_outline(), Some(&first_outline));
}

#[test]
fn resize_resets_previous_outline() {
    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 2, 0.0, 0.0);
    let mut layout = ShadowLayout::new(Canvas::new(16, 16), cfg).unwrap();
    layout
        .fill_content_path(&square(2.0, 14.0), Rgba8::new(0, 0, 0, 255))
        .unwrap();
    layout.redraw().unwrap();
    assert!(layout.previous_outline().is_some());

    layout.resize(Canvas::new(24, 24)).unwrap();
    assert!(layout.previous_outline().is_none());
    assert!(layout.canvas().shadow_layer().iter().all(|&b| b == 0));

    let report = layout.redraw().unwrap();
    assert_eq!(report.erased_rings, 0);
    assert_eq!(report.drawn_rings, 0);
}

#[test]
fn unlaid_out_layout_skips_redraw() {
    let mut layout = ShadowLayout::new(Canvas::new(0, 0), ShadowConfig::default()).unwrap();
    let report = layout.redraw().unwrap();
    assert_eq!(report.skipped, Some(SkipReason::EmptySurface));
    assert!(layout.compose(None).data.is_empty());
}

#[test]
fn config_change_applies_on_next_redraw() {
    let mut layout = ShadowLayout::new(Canvas::new(20, 20), ShadowConfig::disabled()).unwrap();
    layout
        .fill_content_path(&square(5.0, 15.0), Rgba8::new(0, 0, 0, 255))
        .unwrap();
    assert_eq!(layout.redraw().unwrap().drawn_rings, 0);

    layout.set_config(ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 4, 1.0, 1.0));
    assert_eq!(layout.config().blur_steps, 4);
    assert_eq!(layout.redraw().unwrap().drawn_rings, 4);
}
