use super::*;
use crate::{
    classify::classifier::Channels,
    events::model::{Event, parse_timestamp},
    geometry::mapper::map_events,
};

fn scenario_scene(canvas: Canvas) -> Scene {
    let ev = |t: &str, s: &str, p: &str| Event::new(parse_timestamp(t).unwrap(), s, p);
    let events = vec![
        ev("2024-03-07 10:00:00", "A", "10"),
        ev("2024-03-07 10:00:10", "B", "on"),
        ev("2024-03-07 10:00:15", "B", "off"),
    ];
    let channels = Channels {
        magnitude: "A".to_string(),
        state: "B".to_string(),
    };
    map_events(&events, canvas.region(), &channels).unwrap()
}

fn renderer() -> CpuRenderer {
    CpuRenderer::new(RenderSettings {
        annotate: false,
        ..RenderSettings::default()
    })
}

#[test]
fn frame_matches_canvas_and_background_is_transparent() {
    let canvas = Canvas::physical();
    let scene = scenario_scene(canvas);
    let frame = renderer().render(&scene, canvas).unwrap();

    assert_eq!((frame.width, frame.height), (793, 1096));
    assert_eq!(frame.data.len(), 793 * 1096 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(792, 1095), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(793, 0), None);
}

#[test]
fn line_is_stroked_in_red_at_its_rank() {
    let canvas = Canvas::physical();
    let scene = scenario_scene(canvas);
    let frame = renderer().render(&scene, canvas).unwrap();

    let line = scene.lines[0];
    let y = line.y1.floor() as u32;
    let x = scene.region.mid_x().floor() as u32;
    assert_eq!(frame.pixel(x, y), Some([255, 0, 0, 255]));
    // Beyond the line's right end.
    assert_eq!(frame.pixel(line.x2.ceil() as u32 + 3, y), Some([0, 0, 0, 0]));
}

#[test]
fn circle_outline_and_cross_are_stroked_but_interior_is_empty() {
    let canvas = Canvas::physical();
    let scene = scenario_scene(canvas);
    let frame = renderer().render(&scene, canvas).unwrap();

    let c = scene.circles[0];
    let (cx, cy) = (c.center.x, c.center.y);
    assert_eq!(
        frame.pixel((cx + c.radius - 2.0).floor() as u32, cy.floor() as u32),
        Some([255, 0, 0, 255])
    );
    assert_eq!(
        frame.pixel((cx + c.radius + 1.0).floor() as u32, cy.floor() as u32),
        Some([0, 0, 0, 0])
    );
    assert_eq!(
        frame.pixel(cx.floor() as u32, cy.floor() as u32),
        Some([255, 0, 0, 255])
    );
    assert_eq!(
        frame.pixel((cx + 3.5).floor() as u32, (cy + 3.5).floor() as u32),
        Some([0, 0, 0, 0])
    );
}

#[test]
fn clear_color_fills_background() {
    let canvas = Canvas {
        width: 64,
        height: 64,
    };
    let scene = scenario_scene(canvas);
    let mut r = CpuRenderer::new(RenderSettings {
        clear_rgba: Some([255, 255, 255, 255]),
        annotate: false,
        ..RenderSettings::default()
    });
    let frame = r.render(&scene, canvas).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn caption_without_fonts_leaves_frame_untouched() {
    let canvas = Canvas {
        width: 64,
        height: 64,
    };
    let scene = scenario_scene(canvas);
    let plain = renderer().render(&scene, canvas).unwrap();
    let captioned = CpuRenderer::new(RenderSettings::default())
        .with_fontdb(Arc::new(usvg::fontdb::Database::new()))
        .render(&scene, canvas)
        .unwrap();
    assert_eq!(plain.data, captioned.data);
}
