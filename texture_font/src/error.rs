// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error type for font construction.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the font name and pixel size of
/// the request that failed, so callers can report the failure or retry with a
/// different descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Name of the font the failing request referred to, if any.
    font_name: Option<String>,

    /// Pixel size of the failing request, if any.
    size: Option<u32>,

    /// Backend failure underlying this error, if any.
    backend: Option<BackendError>,

    /// Extra human-readable detail.
    detail: Option<String>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The font name of the failing request, if known.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// The pixel size of the failing request, if known.
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    /// The backend failure that caused this error, if any.
    pub fn backend_error(&self) -> Option<&BackendError> {
        self.backend.as_ref()
    }

    pub(crate) fn backend_init(error: BackendError) -> Self {
        Self {
            kind: ErrorKind::BackendInit,
            font_name: None,
            size: None,
            backend: Some(error),
            detail: None,
        }
    }

    pub(crate) fn font_not_found(name: &str, size: u32) -> Self {
        Self {
            kind: ErrorKind::FontLoad,
            font_name: Some(name.into()),
            size: Some(size),
            backend: None,
            detail: Some("no font file matches this name".into()),
        }
    }

    pub(crate) fn font_load(name: &str, size: u32, error: BackendError) -> Self {
        Self {
            kind: ErrorKind::FontLoad,
            font_name: Some(name.into()),
            size: Some(size),
            backend: Some(error),
            detail: None,
        }
    }

    pub(crate) fn invalid_descriptor(name: &str, size: u32, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidDescriptor,
            font_name: Some(name.into()),
            size: Some(size),
            backend: None,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn shut_down(name: &str, size: u32) -> Self {
        Self {
            kind: ErrorKind::ShutDown,
            font_name: Some(name.into()),
            size: Some(size),
            backend: None,
            detail: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::BackendInit => write!(f, "error initializing the rasterizer backend")?,
            ErrorKind::FontLoad => write!(
                f,
                "error loading font '{}' at {}px",
                self.font_name().unwrap_or_default(),
                self.size.unwrap_or_default()
            )?,
            ErrorKind::InvalidDescriptor => write!(
                f,
                "invalid font descriptor '{}' at {}px",
                self.font_name().unwrap_or_default(),
                self.size.unwrap_or_default()
            )?,
            ErrorKind::ShutDown => write!(
                f,
                "font factory was shut down before loading '{}'",
                self.font_name().unwrap_or_default()
            )?,
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        if let Some(backend) = &self.backend {
            write!(f, ": {backend}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.backend
            .as_ref()
            .map(|e| e as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The rasterizer backend failed to initialize. The factory is unusable.
    BackendInit,

    /// The named font could not be found, or the backend rejected its data.
    ///
    /// Recoverable: the caller may retry with another font.
    FontLoad,

    /// The descriptor has an empty name, a zero size, or a character range
    /// that leaves the single-byte code space.
    InvalidDescriptor,

    /// The factory was used after it was shut down.
    ShutDown,
}

/// A failure reported by the rasterizer backend.
///
/// Backends that expose numeric error codes report them through
/// [`BackendError::code`]; others only provide a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    code: Option<i32>,
    message: String,
}

impl BackendError {
    /// Creates a backend error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Creates a backend error carrying a numeric backend error code.
    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// The numeric backend error code, if the backend has one.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// The backend's description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl core::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn font_load_message_names_font_and_backend_code() {
        let err = Error::font_load("DejaVu Sans", 14, BackendError::with_code(2, "bad table"));
        assert_eq!(err.kind(), ErrorKind::FontLoad);
        assert_eq!(
            err.to_string(),
            "error loading font 'DejaVu Sans' at 14px: bad table (code 2)"
        );
    }

    #[test]
    fn not_found_has_no_source() {
        use core::error::Error as _;

        let err = Error::font_not_found("DoesNotExist", 12);
        assert_eq!(err.font_name(), Some("DoesNotExist"));
        assert!(err.source().is_none(), "not-found errors carry no backend error");
        assert!(err.to_string().contains("DoesNotExist"));
    }
}
