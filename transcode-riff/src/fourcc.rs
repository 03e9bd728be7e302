//! Four character codes

use std::borrow::Cow;
use std::fmt;

/// FourCC (Four Character Code) identifier
///
/// Used both as a chunk ID and as the form/list type of a container. Any
/// four bytes are accepted; the content is never validated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Create from bytes
    pub const fn new(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }

    /// Create from a slice, if it is exactly 4 bytes long
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; 4]>::try_from(bytes).ok().map(FourCC)
    }

    /// Get as string (lossy for non-UTF-8 codes)
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Get raw bytes
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC(\"{}\")", self.as_str())
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl From<&[u8; 4]> for FourCC {
    fn from(bytes: &[u8; 4]) -> Self {
        FourCC(*bytes)
    }
}

impl From<FourCC> for [u8; 4] {
    fn from(fourcc: FourCC) -> Self {
        fourcc.0
    }
}

impl AsRef<[u8]> for FourCC {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Structural chunk IDs
pub mod ids {
    use super::FourCC;

    /// Top-level container tag
    pub const RIFF: FourCC = FourCC(*b"RIFF");
    /// Nested list tag
    pub const LIST: FourCC = FourCC(*b"LIST");
}
