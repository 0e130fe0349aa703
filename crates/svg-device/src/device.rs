//! Event dispatch and the device lifecycle state machine.

use std::mem;

use crate::canvas::Canvas;
use crate::encode;
use crate::error::DeviceError;
use crate::event::DeviceEvent;

/// A single-document SVG device.
///
/// Lifecycle: `Unopened -> Open -> Closed`. Open is the only legal
/// transition out of `Unopened`, primitives are legal only while `Open`,
/// and close is terminal. Out-of-order events are rejected with a
/// [`DeviceError`] instead of silently corrupting the document.
///
/// The device owns the canvas of exactly one document at a time; run one
/// device per document.
#[derive(Debug, Default)]
pub enum SvgDevice {
    #[default]
    Unopened,
    Open(Canvas),
    Closed,
}

impl SvgDevice {
    pub fn new() -> Self {
        Self::Unopened
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The in-progress canvas, if the device is open.
    pub fn canvas(&self) -> Option<&Canvas> {
        match self {
            Self::Open(canvas) => Some(canvas),
            _ => None,
        }
    }

    /// Route one host event to its handler.
    ///
    /// A single exhaustive match over the event kind: lifecycle events move
    /// the device between phases, primitives append one fragment each, and
    /// [`DeviceEvent::Unknown`] is a deliberate no-op in every phase so the
    /// host may emit primitives this engine does not support without
    /// aborting the document.
    ///
    /// # Errors
    ///
    /// Returns a lifecycle error when the event is illegal for the current
    /// phase, or [`DeviceError::Write`] when the final write on close
    /// fails. Any error is fatal for the document; the device must not be
    /// driven further.
    pub fn dispatch(&mut self, event: DeviceEvent) -> Result<(), DeviceError> {
        match event {
            DeviceEvent::Open { settings, target } => match self {
                Self::Unopened => {
                    *self = Self::Open(Canvas::open(settings, target));
                    Ok(())
                }
                Self::Open(_) => Err(DeviceError::AlreadyOpen),
                Self::Closed => Err(DeviceError::Closed),
            },
            DeviceEvent::Close => match mem::replace(self, Self::Closed) {
                Self::Open(canvas) => canvas.close(),
                Self::Unopened => {
                    // Premature close; restore the phase so a later open
                    // still works.
                    *self = Self::Unopened;
                    Err(DeviceError::NotOpen)
                }
                Self::Closed => Err(DeviceError::Closed),
            },
            DeviceEvent::Circle { x, y, r } => self.append(encode::circle(x, y, r)),
            DeviceEvent::Line { x1, y1, x2, y2 } => self.append(encode::line(x1, y1, x2, y2)),
            DeviceEvent::Polyline { x, y } => self.append(encode::polyline(&x, &y)),
            DeviceEvent::Text { x, y, rot, content } => {
                self.append(encode::text(x, y, rot, &content))
            }
            DeviceEvent::Unknown { .. } => Ok(()),
        }
    }

    fn append(&mut self, fragment: String) -> Result<(), DeviceError> {
        match self {
            Self::Open(canvas) => {
                canvas.push(fragment);
                Ok(())
            }
            Self::Unopened => Err(DeviceError::NotOpen),
            Self::Closed => Err(DeviceError::Closed),
        }
    }
}
