//! RIFF Container Writer
//!
//! This crate builds RIFF (Resource Interchange File Format) containers in
//! memory. RIFF is the chunk-based structure underneath WAV, AVI and WebP.
//!
//! # Features
//!
//! - Incremental chunk and `LIST` appending with nested length bookkeeping
//! - Word-alignment padding for odd-sized chunks
//! - Non-destructive, repeatable serialization
//! - Single-call writes to any `std::io::Write` sink with short-write detection
//! - Big-endian length fields by default, little-endian on request
//!
//! # Example
//!
//! ```
//! use transcode_riff::{Container, FourCC};
//!
//! let mut info = Container::list(FourCC::new(*b"INFO"));
//! info.append_chunk(FourCC::new(*b"ISFT"), b"transcode");
//!
//! let mut riff = Container::riff(FourCC::new(*b"TEST"));
//! riff.append_chunk(FourCC::new(*b"data"), &[0x00, 0x11, 0x22]);
//! riff.append_list(&info);
//!
//! let mut out = Vec::new();
//! riff.write_to(&mut out).unwrap();
//!
//! assert_eq!(&out[..4], b"RIFF");
//! assert_eq!(out.len(), riff.encoded_len());
//! assert_eq!(riff.declared_len() % 2, 0);
//! ```

pub mod chunk;
pub mod config;
mod container;
mod error;
pub mod fourcc;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian};
pub use chunk::{encoded_chunk_size, padded_len, MAX_CHUNK_LEN};
pub use config::ContainerConfig;
pub use container::{Container, ContainerKind};
pub use error::{Result, RiffError};
pub use fourcc::FourCC;
