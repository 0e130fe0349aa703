//! Events emitted by the host rendering runtime, one per drawing call.

use std::path::PathBuf;

use crate::canvas::DeviceSettings;

/// One drawing instruction from the host runtime.
///
/// The host constructs an event per call and hands it to
/// [`SvgDevice::dispatch`](crate::SvgDevice::dispatch); the event does not
/// outlive that single invocation. The enumeration is closed, so adding a
/// new primitive is a compile-time-checked extension of the dispatcher
/// rather than a silent fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// Open the device and start a new document.
    Open {
        settings: DeviceSettings,
        /// Where the finished document is written on close.
        target: PathBuf,
    },
    /// Finalize the document and write it to the target.
    Close,
    /// Circle centered at (x, y) with radius r.
    Circle { x: f64, y: f64, r: f64 },
    /// Straight line between (x1, y1) and (x2, y2).
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Open polyline through paired coordinates, in input order.
    Polyline { x: Vec<f64>, y: Vec<f64> },
    /// Text run anchored at (x, y), rotated by `rot` degrees.
    Text {
        x: f64,
        y: f64,
        rot: f64,
        content: String,
    },
    /// An event kind this engine does not handle.
    ///
    /// Dispatch ignores it without error; the host tag is kept so callers
    /// can log or inspect what was skipped.
    Unknown { kind: String },
}
