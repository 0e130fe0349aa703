//! End-to-end document tests.
//!
//! These tests drive a device through a full open -> primitives -> close
//! sequence and verify the document written to disk.

use std::path::PathBuf;

use svg_device::{DeviceEvent, DeviceSettings, SvgDevice};

/// A unique output path under the system temp directory.
fn temp_target(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("svg-device-{}-{}.svg", std::process::id(), name))
}

/// Drive a fresh device through open, the given primitives, and close;
/// return the written document text.
fn render(name: &str, settings: DeviceSettings, primitives: Vec<DeviceEvent>) -> String {
    let target = temp_target(name);
    let mut device = SvgDevice::new();
    device
        .dispatch(DeviceEvent::Open {
            settings,
            target: target.clone(),
        })
        .unwrap_or_else(|e| panic!("open failed: {e}"));
    for event in primitives {
        device
            .dispatch(event)
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
    }
    device
        .dispatch(DeviceEvent::Close)
        .unwrap_or_else(|e| panic!("close failed: {e}"));

    let document = std::fs::read_to_string(&target)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", target.display()));
    let _ = std::fs::remove_file(&target);
    document
}

#[test]
fn empty_document_has_scaled_root_and_no_body() {
    let document = render("empty", DeviceSettings::new(720.0, 720.0), vec![]);
    assert_eq!(document, "<svg height=\"10\" width=\"10\">\n</svg>");
}

#[test]
fn single_circle_document() {
    let document = render(
        "circle",
        DeviceSettings::new(72.0, 72.0),
        vec![DeviceEvent::Circle { x: 36.0, y: 36.0, r: 5.0 }],
    );
    assert_eq!(
        document,
        "<svg height=\"1\" width=\"1\">\n\
         <circle cx=\"0.5\" cy=\"0.5\" r=\"5\" stroke=\"black\" fill=\"black\"/>\n\
         </svg>"
    );
}

#[test]
fn polyline_points_are_interleaved_and_scaled() {
    let document = render(
        "polyline",
        DeviceSettings::new(144.0, 72.0),
        vec![DeviceEvent::Polyline {
            x: vec![0.0, 72.0, 144.0],
            y: vec![0.0, 72.0, 0.0],
        }],
    );
    assert!(
        document.contains("points=\"0,0 1,1 2,0\""),
        "got: {document}"
    );
}

#[test]
fn text_rotation_is_negated_about_the_anchor() {
    let document = render(
        "text",
        DeviceSettings::new(72.0, 72.0),
        vec![DeviceEvent::Text {
            x: 0.0,
            y: 72.0,
            rot: 30.0,
            content: "hi".to_string(),
        }],
    );
    assert!(
        document.contains("transform=\"rotate(-30,0,1)\""),
        "got: {document}"
    );
    assert!(document.contains(">hi</text>"), "got: {document}");
}

#[test]
fn elements_appear_in_call_order() {
    let document = render(
        "order",
        DeviceSettings::new(72.0, 72.0),
        vec![
            DeviceEvent::Line { x1: 0.0, y1: 0.0, x2: 72.0, y2: 72.0 },
            DeviceEvent::Circle { x: 36.0, y: 36.0, r: 2.0 },
            DeviceEvent::Unknown { kind: "raster".to_string() },
            DeviceEvent::Text {
                x: 0.0,
                y: 0.0,
                rot: 0.0,
                content: "label".to_string(),
            },
        ],
    );

    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(lines.len(), 5, "unknown event must not emit a fragment");
    assert!(lines[1].starts_with("<line "), "got: {}", lines[1]);
    assert!(lines[2].starts_with("<circle "), "got: {}", lines[2]);
    assert!(lines[3].starts_with("<text "), "got: {}", lines[3]);
    assert_eq!(lines[4], "</svg>");
}

#[test]
fn out_of_order_lifecycle_is_rejected() {
    let mut device = SvgDevice::new();
    assert!(device.dispatch(DeviceEvent::Close).is_err());
    assert!(device
        .dispatch(DeviceEvent::Circle { x: 0.0, y: 0.0, r: 1.0 })
        .is_err());

    device
        .dispatch(DeviceEvent::Open {
            settings: DeviceSettings::new(72.0, 72.0),
            target: temp_target("lifecycle"),
        })
        .unwrap();
    device.dispatch(DeviceEvent::Close).unwrap();
    assert!(device
        .dispatch(DeviceEvent::Circle { x: 0.0, y: 0.0, r: 1.0 })
        .is_err());
    let _ = std::fs::remove_file(temp_target("lifecycle"));
}
