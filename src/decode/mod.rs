//! Decompression: header parse, tree rebuild, bit-guided decode.

mod bit_reader;

pub use bit_reader::MsbBitReader;

use crate::error::Result;
use crate::header::Header;
use crate::huffman::{HuffmanNode, HuffmanTree};

/// Decompress a complete compressed file back to its original bytes.
///
/// A header-only file (empty original input) yields empty output. A
/// single-symbol file is replayed from its frequency without reading any
/// packed data. Fails on a truncated or malformed header; corruption in
/// the packed region is not detectable and produces wrong output.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let (header, header_len) = Header::parse(data)?;

    if header.frequencies().is_empty() {
        return Ok(Vec::new());
    }

    let tree = HuffmanTree::from_frequencies(header.frequencies())?;
    let decoded_len = header.decoded_len() as usize;

    if let HuffmanNode::Leaf { byte, .. } = tree.root() {
        return Ok(vec![*byte; decoded_len]);
    }

    let packed = &data[header_len..];
    let mut reader = MsbBitReader::new(packed, header.padding_bits());

    let mut out = Vec::with_capacity(decoded_len);
    let mut node = tree.root();

    while let Some(bit) = reader.read_bit() {
        node = match node {
            HuffmanNode::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            HuffmanNode::Leaf { .. } => unreachable!("walk restarts at the root after each leaf"),
        };

        if let HuffmanNode::Leaf { byte, .. } = node {
            out.push(*byte);
            node = tree.root();
        }
    }

    Ok(out)
}
