//! Canvas state and document lifecycle.

use std::path::{Path, PathBuf};

use crate::error::DeviceError;
use crate::units::to_user_units;

/// Physical canvas size in device units (points), captured at open time
/// and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSettings {
    pub width: f64,
    pub height: f64,
}

impl DeviceSettings {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The in-progress SVG document.
///
/// Fragments are append-only between open and close, in exactly the order
/// the host emits drawing events. The full document is assembled and
/// written exactly once, on close; there is no partial flushing.
#[derive(Debug)]
pub struct Canvas {
    /// Ordered document fragments, starting with the root opening tag.
    fragments: Vec<String>,
    /// Where the finished document is written; set once at open.
    target: PathBuf,
    /// Settings captured at open.
    settings: DeviceSettings,
}

impl Canvas {
    /// Start a new document.
    ///
    /// The first fragment is the root `<svg>` opening tag with the canvas
    /// width and height converted to user units.
    pub fn open(settings: DeviceSettings, target: impl Into<PathBuf>) -> Self {
        let root = format!(
            "<svg height=\"{}\" width=\"{}\">",
            to_user_units(settings.height),
            to_user_units(settings.width),
        );
        Self {
            fragments: vec![root],
            target: target.into(),
            settings,
        }
    }

    /// Append one document fragment.
    pub fn push(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// The settings captured at open.
    pub fn settings(&self) -> DeviceSettings {
        self.settings
    }

    /// Where the finished document will be written.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The fragments accumulated so far, root opener included.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments accumulated so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Finish the document: append the closing root tag, join all fragments
    /// with newlines, and write the result to the target in a single write.
    ///
    /// Consumes the canvas; a closed document cannot be reused. A write
    /// failure is fatal and surfaced to the caller.
    pub fn close(mut self) -> Result<(), DeviceError> {
        self.fragments.push("</svg>".to_string());
        let document = self.fragments.join("\n");
        std::fs::write(&self.target, document).map_err(|source| DeviceError::Write {
            path: self.target,
            source,
        })
    }
}
