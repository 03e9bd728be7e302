//! RIFF and LIST container builder
//!
//! A [`Container`] keeps its children already serialized, in append order,
//! together with a running length. Appending never rescans earlier bytes:
//! every append adds exactly the bytes it wrote to the running length, so the
//! header can be produced at any moment from two fields.
//!
//! Lists nest by value. [`Container::append_list`] copies the finished form
//! of the sub-list, so a sub-list must be complete before it is appended.
//! Later changes to the sub-list are not reflected in the parent.

use crate::chunk::{self, HEADER_SIZE};
use crate::config::ContainerConfig;
use crate::error::{Result, RiffError};
use crate::fourcc::{ids, FourCC};
use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::io::Write;
use std::marker::PhantomData;

/// Size of the form/list type field that opens every container's content
const FORM_TYPE_SIZE: u32 = 4;

/// Which structural tag a container carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Top-level `RIFF` container
    Riff,
    /// Nested `LIST` container
    List,
}

impl ContainerKind {
    /// Structural tag written in the container header
    pub const fn tag(self) -> FourCC {
        match self {
            ContainerKind::Riff => ids::RIFF,
            ContainerKind::List => ids::LIST,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tag(), f)
    }
}

/// In-memory RIFF/LIST container
///
/// `B` selects the byte order of every length field. It defaults to
/// big-endian; use `Container<LittleEndian>` for the little-endian layout
/// read by WAV, AVI and WebP tools. Lists can only be nested into containers
/// of the same byte order.
///
/// The declared length is always `4 + sum(child sizes)`, where a chunk
/// occupies `8 + len` rounded up to even and a list occupies `8 + its
/// declared length`. Since the base value is 4 and every chunk is padded, the
/// declared length is always even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<B = BigEndian> {
    kind: ContainerKind,
    form_type: FourCC,
    /// Length field value: form type plus all serialized children
    len: u32,
    children: usize,
    flush_after_write: bool,
    /// Form type followed by the serialized children
    data: Vec<u8>,
    _order: PhantomData<B>,
}

impl Container {
    /// Create a top-level big-endian `RIFF` container
    pub fn riff(form_type: FourCC) -> Self {
        Self::new(ContainerKind::Riff, form_type)
    }

    /// Create a nested big-endian `LIST` container
    pub fn list(list_type: FourCC) -> Self {
        Self::new(ContainerKind::List, list_type)
    }
}

impl<B: ByteOrder> Container<B> {
    /// Create an empty container with the default configuration
    pub fn new(kind: ContainerKind, form_type: FourCC) -> Self {
        Self::with_config(kind, form_type, &ContainerConfig::default())
    }

    /// Create an empty container
    pub fn with_config(kind: ContainerKind, form_type: FourCC, config: &ContainerConfig) -> Self {
        let mut data = Vec::with_capacity(config.initial_capacity.max(FORM_TYPE_SIZE as usize));
        data.extend_from_slice(form_type.as_bytes());

        Container {
            kind,
            form_type,
            len: FORM_TYPE_SIZE,
            children: 0,
            flush_after_write: config.flush_after_write,
            data,
            _order: PhantomData,
        }
    }

    /// Structural kind (`RIFF` or `LIST`)
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Form type (for `RIFF`) or list type (for `LIST`)
    pub fn form_type(&self) -> FourCC {
        self.form_type
    }

    /// Value of the length field: form type plus every child, padding included
    pub fn declared_len(&self) -> u32 {
        self.len
    }

    /// Total serialized size including the 8-byte header
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE as usize + self.len as usize
    }

    /// Number of chunks and lists appended so far
    pub fn child_count(&self) -> usize {
        self.children
    }

    /// Whether nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.children == 0
    }

    /// Append a data chunk
    ///
    /// The content is copied. An odd-sized chunk is followed by a zero pad
    /// byte that counts towards this container's length but not towards the
    /// chunk's own length field.
    ///
    /// # Panics
    ///
    /// Panics if the chunk does not fit a 32-bit length field, or if the
    /// container's total length would overflow one.
    pub fn append_chunk(&mut self, id: FourCC, data: &[u8]) {
        let added = chunk::append_chunk::<B>(&mut self.data, id, data);
        self.grow(added);

        log::trace!(
            "{} '{}': appended chunk '{}' ({} bytes, {} on wire), length now {}",
            self.kind,
            self.form_type,
            id,
            data.len(),
            added,
            self.len
        );
    }

    /// Append a finished sub-list
    ///
    /// The sub-list's current serialized form is copied, so it can be dropped
    /// or appended again afterwards. Its length is always even, so no pad
    /// byte is needed.
    ///
    /// # Panics
    ///
    /// Panics if `sub` is a top-level `RIFF` container, or if this
    /// container's total length would overflow 32 bits.
    pub fn append_list(&mut self, sub: &Container<B>) {
        assert!(
            sub.kind == ContainerKind::List,
            "only LIST containers can be nested, got {} '{}'",
            sub.kind,
            sub.form_type
        );

        let added = HEADER_SIZE + sub.len;
        sub.write_bytes_into(&mut self.data);
        self.grow(added);

        log::trace!(
            "{} '{}': appended list '{}' ({} children, {} on wire), length now {}",
            self.kind,
            self.form_type,
            sub.form_type,
            sub.children,
            added,
            self.len
        );
    }

    fn grow(&mut self, added: u32) {
        self.len = match self.len.checked_add(added) {
            Some(len) => len,
            None => panic!(
                "{} '{}' exceeds the 32-bit length field",
                self.kind, self.form_type
            ),
        };
        self.children += 1;
    }

    /// Serialize the container: tag, length field, content
    ///
    /// Does not modify the container; calling it again returns the same
    /// bytes until something else is appended.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_bytes_into(&mut out);
        out
    }

    /// Append the serialized container to `out`
    pub fn write_bytes_into(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        chunk::write_header::<B>(out, self.kind.tag(), self.len);
        out.extend_from_slice(&self.data);
    }

    /// Consume the container and return its serialized form
    pub fn into_bytes(self) -> Vec<u8> {
        let header_size = HEADER_SIZE as usize;
        let mut header = Vec::with_capacity(header_size);
        chunk::write_header::<B>(&mut header, self.kind.tag(), self.len);

        // Shift the content right in place and drop the header in front
        let mut data = self.data;
        let content_len = data.len();
        data.resize(content_len + header_size, 0);
        data.copy_within(..content_len, header_size);
        data[..header_size].copy_from_slice(&header);
        data
    }

    /// Write the serialized container to `sink` with a single `write` call
    ///
    /// Fails with [`RiffError::ShortWrite`] if the sink accepts fewer bytes
    /// than the container holds, including when the write itself returns an
    /// error (kept as the source). The write is not retried and the container
    /// is left untouched, so the caller may try again. [`RiffError::Io`] is
    /// only returned when the optional flush fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let bytes = self.bytes();
        let expected = bytes.len();

        log::debug!(
            "Writing {} '{}': {} bytes, {} children",
            self.kind,
            self.form_type,
            expected,
            self.children
        );

        let (written, source) = match sink.write(&bytes) {
            Ok(written) => (written, None),
            Err(e) => (0, Some(e)),
        };
        if written != expected {
            log::warn!(
                "Short write of {} '{}': sink accepted {} of {} bytes",
                self.kind,
                self.form_type,
                written,
                expected
            );
            return Err(RiffError::ShortWrite {
                written,
                expected,
                source,
            });
        }

        if self.flush_after_write {
            sink.flush()?;
        }

        Ok(())
    }
}
