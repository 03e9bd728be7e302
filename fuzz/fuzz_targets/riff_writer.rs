#![no_main]

//! Fuzz target for the RIFF container writer.
//!
//! Replays arbitrary append sequences against a stack of open lists and checks
//! that every container's length field keeps matching its serialized size.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use transcode_riff::{Container, FourCC};

#[derive(Arbitrary, Debug)]
enum Op {
    /// Append a chunk to the innermost open container
    Chunk { id: [u8; 4], data: Vec<u8> },
    /// Open a new list
    OpenList { list_type: [u8; 4] },
    /// Close the innermost list and append it to its parent
    CloseList,
    /// Serialize the root and compare against its declared length
    Serialize,
}

fuzz_target!(|ops: Vec<Op>| {
    // Keep runs short
    if ops.len() > 256 {
        return;
    }

    let mut root = Container::riff(FourCC::new(*b"FUZZ"));
    let mut open: Vec<Container> = Vec::new();

    for op in ops {
        let current = open.last_mut().unwrap_or(&mut root);
        match op {
            Op::Chunk { id, data } => {
                if data.len() > 64 * 1024 {
                    continue;
                }
                let before = current.declared_len();
                current.append_chunk(FourCC::new(id), &data);
                let grown = current.declared_len() - before;
                assert_eq!(grown, transcode_riff::encoded_chunk_size(data.len() as u32));
            }
            Op::OpenList { list_type } => {
                if open.len() < 32 {
                    open.push(Container::list(FourCC::new(list_type)));
                }
            }
            Op::CloseList => {
                if let Some(list) = open.pop() {
                    let parent = open.last_mut().unwrap_or(&mut root);
                    parent.append_list(&list);
                }
            }
            Op::Serialize => {
                let bytes = root.bytes();
                assert_eq!(bytes.len(), root.declared_len() as usize + 8);
                assert_eq!(root.declared_len() % 2, 0);
                assert_eq!(root.bytes(), bytes);
            }
        }
    }

    while let Some(list) = open.pop() {
        let parent = open.last_mut().unwrap_or(&mut root);
        parent.append_list(&list);
    }

    let mut out = Vec::new();
    root.write_to(&mut out).unwrap();
    assert_eq!(out.len(), root.encoded_len());
});
