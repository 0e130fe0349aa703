//! Error types for the device lifecycle and dispatch loop.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`SvgDevice::dispatch`](crate::SvgDevice::dispatch)
/// and the lifecycle handlers.
///
/// Lifecycle errors are fatal for the whole document: there is no retry
/// policy, and the device must not be driven further after one is returned.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A primitive or close event arrived before the device was opened.
    #[error("device is not open; dispatch an open event first")]
    NotOpen,

    /// An open event arrived while a document was already in progress.
    #[error("device is already open; close the current document first")]
    AlreadyOpen,

    /// An event arrived after the document was closed.
    #[error("device is closed and cannot be reused")]
    Closed,

    /// The single write of the finished document failed.
    #[error("failed to write document to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
