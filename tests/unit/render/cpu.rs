use kurbo::Shape as _;

use super::*;
use crate::{
    shadow::{
        compositor::{ShadowCompositor, draw, erase},
        config::ShadowConfig,
    },
    silhouette::extract::extract_outline,
};

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    kurbo::Rect::new(x0, y0, x1, y1).to_path(0.1)
}

fn canvas_with_square(size: u32, x0: f64, x1: f64) -> CpuCanvas {
    let mut canvas = CpuCanvas::new(Canvas::new(size, size)).unwrap();
    canvas
        .fill_content_path(&rect_path(x0, x0, x1, x1), Rgba8::new(0, 0, 255, 255))
        .unwrap();
    canvas
}

fn alpha_at(layer: &[u8], width: u32, x: u32, y: u32) -> u8 {
    layer[((y * width + x) * 4 + 3) as usize]
}

#[test]
fn oversized_surface_is_rejected() {
    assert!(CpuCanvas::new(Canvas::new(70_000, 10)).is_err());
    assert!(CpuCanvas::new(Canvas::new(10, 70_000)).is_err());
}

#[test]
fn fill_content_path_paints_the_content_layer_only() {
    let canvas = canvas_with_square(40, 10.0, 30.0);
    assert_eq!(alpha_at(canvas.content_layer(), 40, 15, 15), 255);
    assert_eq!(alpha_at(canvas.content_layer(), 40, 5, 5), 0);
    assert!(canvas.shadow_layer().iter().all(|&b| b == 0));
}

#[test]
fn erase_after_draw_restores_the_shadow_layer() {
    let mut canvas = canvas_with_square(40, 10.0, 30.0);
    let size = canvas.size();
    let outline = {
        let snap = canvas.snapshot_content().unwrap();
        extract_outline(&snap)
    };
    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 6, 2.0, 3.0);

    assert_eq!(draw(&mut canvas, &outline, &cfg, size).unwrap(), 6);
    assert!(canvas.shadow_layer().iter().any(|&b| b != 0));

    assert_eq!(erase(&mut canvas, &outline, &cfg, size).unwrap(), 6);
    assert!(canvas.shadow_layer().iter().all(|&b| b == 0));
}

#[test]
fn stale_rings_pollute_a_snapshot_taken_before_erasing() {
    let mut canvas = canvas_with_square(40, 10.0, 30.0);
    let size = canvas.size();
    let clean = {
        let snap = canvas.snapshot_content().unwrap();
        extract_outline(&snap)
    };
    assert_eq!(clean.points()[0].x, 10);

    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 4, 0.0, 0.0);
    draw(&mut canvas, &clean, &cfg, size).unwrap();
    let polluted = {
        let snap = canvas.snapshot_content().unwrap();
        extract_outline(&snap)
    };
    assert_ne!(polluted, clean);

    erase(&mut canvas, &clean, &cfg, size).unwrap();
    let again = {
        let snap = canvas.snapshot_content().unwrap();
        extract_outline(&snap)
    };
    assert_eq!(again, clean);
}

#[test]
fn redraw_after_shape_change_leaves_no_stale_rings() {
    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 200), 5, 1.0, 1.0);

    let mut reused = canvas_with_square(48, 8.0, 40.0);
    let mut comp = ShadowCompositor::new();
    comp.redraw(&mut reused, &cfg).unwrap();
    reused.clear_content();
    reused
        .fill_content_path(&rect_path(18.0, 18.0, 30.0, 30.0), Rgba8::new(0, 0, 255, 255))
        .unwrap();
    let report = comp.redraw(&mut reused, &cfg).unwrap();
    assert_eq!(report.erased_rings, 5);

    let mut fresh = canvas_with_square(48, 18.0, 30.0);
    ShadowCompositor::new().redraw(&mut fresh, &cfg).unwrap();

    assert_eq!(reused.shadow_layer(), fresh.shadow_layer());
}

#[test]
fn offset_moves_the_shadow_down_and_right() {
    let mut canvas = canvas_with_square(60, 10.0, 20.0);
    let cfg = ShadowConfig::new(Rgba8::new(0, 0, 0, 255), 3, 8.0, 8.0);
    ShadowCompositor::new().redraw(&mut canvas, &cfg).unwrap();

    let layer = canvas.shadow_layer();
    let mut near = false;
    for y in 0..60 {
        for x in 0..60 {
            let a = alpha_at(layer, 60, x, y);
            if x < 20 && y < 20 {
                assert_eq!(a, 0, "unexpected shadow at ({x}, {y})");
            }
            if x >= 22 && y >= 22 && a != 0 {
                near = true;
            }
        }
    }
    assert!(near);
}

#[test]
fn compose_paints_content_over_shadow_over_background() {
    let mut canvas = canvas_with_square(40, 10.0, 30.0);
    let cfg = ShadowConfig::new(Rgba8::new(255, 0, 0, 255), 4, 0.0, 0.0);
    ShadowCompositor::new().redraw(&mut canvas, &cfg).unwrap();

    let frame = canvas.compose(Some(Rgba8::new(255, 255, 255, 255)));
    assert_eq!(frame.width, 40);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(20, 20), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));

    let img = frame.to_image().unwrap();
    assert_eq!(img.dimensions(), (40, 40));
}

#[test]
fn non_antialiased_strokes_are_fully_opaque_or_empty() {
    let mut canvas = CpuCanvas::new(Canvas::new(20, 20)).unwrap();
    let style = StrokeStyle {
        anti_alias: false,
        ..StrokeStyle::shadow_ring()
    };
    let mut path = BezPath::new();
    path.move_to((2.3, 2.3));
    path.line_to((17.7, 13.1));
    canvas
        .stroke_path(&path, &style, Rgba8::new(0, 0, 0, 255), PaintMode::Over)
        .unwrap();

    let alphas: Vec<u8> = canvas.shadow_layer().chunks_exact(4).map(|px| px[3]).collect();
    assert!(alphas.iter().all(|&a| a == 0 || a == 255));
    assert!(alphas.contains(&255));
}

#[test]
fn set_content_rejects_wrong_sizes() {
    let mut canvas = CpuCanvas::new(Canvas::new(4, 4)).unwrap();
    assert!(canvas.set_content_premul_rgba8(vec![0; 15]).is_err());
    let img = image::RgbaImage::new(3, 4);
    assert!(canvas.set_content_image(&img).is_err());

    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 128]));
    canvas.set_content_image(&img).unwrap();
    assert_eq!(&canvas.content_layer()[..4], &[128, 128, 128, 128]);
}
