//! Chunk encoding
//!
//! A chunk is `ID(4) Len(4) Data(Len)` followed by one zero byte when `Len`
//! is odd. The pad byte is never counted in `Len`, only in the size the chunk
//! occupies inside its parent.

use crate::fourcc::FourCC;
use byteorder::ByteOrder;

/// Size of a chunk header (ID + length field)
pub const HEADER_SIZE: u32 = 8;

/// Largest content length whose padded chunk still fits a 32-bit size
pub const MAX_CHUNK_LEN: u32 = u32::MAX - HEADER_SIZE - 1;

/// Content length rounded up to the next word boundary
///
/// Exact for `len < u32::MAX`. `u32::MAX` itself has no even 32-bit
/// successor and wraps to 0.
pub const fn padded_len(len: u32) -> u32 {
    len.wrapping_add(len & 1)
}

/// Bytes a chunk with `len` content bytes occupies inside its parent
///
/// Only meaningful for `len <= MAX_CHUNK_LEN`, the largest length a
/// container accepts; larger values wrap instead of panicking.
pub const fn encoded_chunk_size(len: u32) -> u32 {
    HEADER_SIZE.wrapping_add(padded_len(len))
}

/// Write an 8-byte chunk header
pub(crate) fn write_header<B: ByteOrder>(to: &mut Vec<u8>, id: FourCC, len: u32) {
    let mut len_field = [0u8; 4];
    B::write_u32(&mut len_field, len);
    to.extend_from_slice(id.as_bytes());
    to.extend_from_slice(&len_field);
}

/// Append a padded chunk to `to`, returning the bytes it added
///
/// # Panics
///
/// Panics if `data` is longer than [`MAX_CHUNK_LEN`] bytes.
pub(crate) fn append_chunk<B: ByteOrder>(to: &mut Vec<u8>, id: FourCC, data: &[u8]) -> u32 {
    let len = match u32::try_from(data.len()) {
        Ok(len) if len <= MAX_CHUNK_LEN => len,
        _ => panic!("chunk '{}' content of {} bytes exceeds the 32-bit length field", id, data.len()),
    };

    to.reserve(encoded_chunk_size(len) as usize);
    write_header::<B>(to, id, len);
    to.extend_from_slice(data);
    if len & 1 == 1 {
        to.push(0);
    }

    encoded_chunk_size(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 2);
        assert_eq!(padded_len(4), 4);
        assert_eq!(padded_len(7), 8);
    }

    #[test]
    fn test_encoded_chunk_size() {
        assert_eq!(encoded_chunk_size(0), 8);
        assert_eq!(encoded_chunk_size(3), 12);
        assert_eq!(encoded_chunk_size(4), 12);
    }

    #[test]
    fn test_size_helpers_at_the_limit() {
        // Largest accepted length is even and its chunk size still fits
        assert_eq!(MAX_CHUNK_LEN % 2, 0);
        assert_eq!(padded_len(MAX_CHUNK_LEN), MAX_CHUNK_LEN);
        assert_eq!(encoded_chunk_size(MAX_CHUNK_LEN), u32::MAX - 1);
        assert_eq!(padded_len(u32::MAX - 2), u32::MAX - 1);

        // Out-of-range inputs wrap rather than panic
        assert_eq!(padded_len(u32::MAX), 0);
        assert_eq!(encoded_chunk_size(u32::MAX), 8);
    }

    #[test]
    fn test_even_chunk_has_no_padding() {
        let mut buffer = Vec::new();
        let added = append_chunk::<BigEndian>(&mut buffer, FourCC(*b"even"), &[0x00, 0x11, 0x22, 0x33]);

        assert_eq!(added, 12);
        assert_eq!(buffer.len(), 12);
        assert_eq!(&buffer[..4], b"even");
        assert_eq!(&buffer[4..8], &[0, 0, 0, 4]);
        assert_eq!(&buffer[8..], &[0x00, 0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_odd_chunk_is_padded() {
        let mut buffer = Vec::new();
        let added = append_chunk::<BigEndian>(&mut buffer, FourCC(*b"odd "), &[0x44, 0x55, 0x66]);

        // Declared length stays 3, the pad only shows up in the size
        assert_eq!(added, 12);
        assert_eq!(&buffer[4..8], &[0, 0, 0, 3]);
        assert_eq!(&buffer[8..], &[0x44, 0x55, 0x66, 0x00]);
    }

    #[test]
    fn test_empty_chunk() {
        let mut buffer = Vec::new();
        let added = append_chunk::<BigEndian>(&mut buffer, FourCC(*b"none"), &[]);

        assert_eq!(added, 8);
        assert_eq!(buffer, b"none\0\0\0\0");
    }

    #[test]
    fn test_little_endian_header() {
        let mut buffer = Vec::new();
        write_header::<LittleEndian>(&mut buffer, FourCC(*b"data"), 0x0102_0304);
        assert_eq!(buffer, [b'd', b'a', b't', b'a', 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_appends_after_existing_bytes() {
        let mut buffer = b"TEST".to_vec();
        append_chunk::<BigEndian>(&mut buffer, FourCC(*b"one "), &[1]);
        append_chunk::<BigEndian>(&mut buffer, FourCC(*b"two "), &[2, 2]);

        assert_eq!(buffer.len(), 4 + 10 + 10);
        assert_eq!(&buffer[..4], b"TEST");
        assert_eq!(&buffer[14..18], b"two ");
    }
}
