//! # svg-device - Incremental SVG Graphics Device
//!
//! This crate implements a graphics-device callback engine: a host
//! rendering runtime emits one event per drawing action, and the device
//! incrementally builds a textual SVG document that is written to disk
//! once, when the device is closed.
//!
//! ## Overview
//!
//! - **Driving the device**: construct [`DeviceEvent`]s and feed them to
//!   [`SvgDevice::dispatch`] in call order
//! - **Lifecycle**: `Unopened -> Open -> Closed`; open starts a document,
//!   close finalizes and writes it
//! - **Coordinates**: device units are points, converted to user units at
//!   72 points per unit (see [`to_user_units`])
//!
//! ## Events
//!
//! | Event      | Arguments               | Output element |
//! |------------|-------------------------|----------------|
//! | `Open`     | settings, output target | `<svg>`        |
//! | `Close`    | (none)                  | `</svg>`       |
//! | `Circle`   | cx, cy, r               | `<circle>`     |
//! | `Line`     | x1, y1, x2, y2          | `<line>`       |
//! | `Polyline` | xs, ys                  | `<polyline>`   |
//! | `Text`     | x, y, rotation, content | `<text>`       |
//! | `Unknown`  | host tag                | (none)         |
//!
//! Unrecognized event kinds are a deliberate no-op, so a host may emit
//! primitives this engine does not yet support without aborting the
//! document.
//!
//! ## Example
//!
//! ```no_run
//! use svg_device::{DeviceEvent, DeviceSettings, SvgDevice};
//!
//! let mut device = SvgDevice::new();
//! device.dispatch(DeviceEvent::Open {
//!     settings: DeviceSettings::new(72.0, 72.0),
//!     target: "plot.svg".into(),
//! })?;
//! device.dispatch(DeviceEvent::Circle { x: 36.0, y: 36.0, r: 5.0 })?;
//! device.dispatch(DeviceEvent::Close)?;
//! # Ok::<(), svg_device::DeviceError>(())
//! ```
//!
//! ## Limitations
//!
//! The emitted document is a minimal SVG subset: no XML declaration,
//! namespace, or schema. Text content is written verbatim, without
//! escaping of markup-significant characters; the host runtime owns the
//! strings it passes in. Coordinates are not bounds- or NaN-checked.

pub mod canvas;
pub mod config;
pub mod device;
pub mod encode;
pub mod error;
pub mod event;
pub mod units;

pub use canvas::{Canvas, DeviceSettings};
pub use config::{ConfigError, DeviceConfig};
pub use device::SvgDevice;
pub use error::DeviceError;
pub use event::DeviceEvent;
pub use units::{to_user_units, POINTS_PER_UNIT};
