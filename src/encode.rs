//! Compression: frequency scan, tree build, header emit, bit packing.

use crate::bits::BitWriter;
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::header::{Header, PADDING_OFFSET};
use crate::huffman::HuffmanTree;

/// Compress `input` into a self-describing header plus packed bitstream.
///
/// Empty input produces a header-only file that decodes back to empty
/// output. Fails if the input uses all 256 distinct byte values or a
/// single byte value occurs more than `u32::MAX` times.
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(&mut out, input)?;
    Ok(out)
}

/// Compress `input`, appending the result to `out`.
///
/// Nothing is written if compression fails.
pub fn encode_into(out: &mut Vec<u8>, input: &[u8]) -> Result<()> {
    let frequencies = FrequencyTable::from_bytes(input);

    if frequencies.is_empty() {
        out.extend_from_slice(&Header::new(frequencies, 0).to_bytes()?);
        return Ok(());
    }

    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let header_bytes = Header::new(frequencies, 0).to_bytes()?;

    let base = out.len();
    out.extend_from_slice(&header_bytes);

    // Single distinct byte: the decoder replays from the frequency alone,
    // so no packed bitstream follows the header
    if tree.root().is_leaf() {
        return Ok(());
    }

    let codes = tree.code_table();
    let mut writer = BitWriter::with_capacity(input.len() / 2 + 1);
    for &byte in input {
        let code = codes.code(byte).expect("counted byte has a code");
        writer.write_code(code);
    }

    let (packed, padding) = writer.finish();
    out.extend_from_slice(&packed);
    out[base + PADDING_OFFSET] = padding;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_input_is_header_only() {
        let out = encode(&[]).unwrap();
        assert_eq!(out, vec![0, 0]);
    }

    #[test]
    fn test_single_symbol_is_header_only() {
        let out = encode(&[b'X'; 1000]).unwrap();
        // One pair, no packed data, padding zero
        assert_eq!(out.len(), 2 + 5);
        assert_eq!(out[0], 1);
        assert_eq!(out[1], 0);
        assert_eq!(out[2], b'X');
        assert_eq!(&out[3..7], &1000u32.to_le_bytes());
    }

    #[test]
    fn test_padding_recorded_in_header() {
        // A:3 B:2 C:1 packs to 1+1+1+2+2+2 = 9 bits -> 2 bytes, 7 padding
        let out = encode(b"AAABBC").unwrap();
        assert_eq!(out[0], 3);
        assert_eq!(out[1], 7);
        assert_eq!(out.len(), 2 + 3 * 5 + 2);
    }

    #[test]
    fn test_byte_aligned_stream_has_zero_padding() {
        // Two symbols, one bit each: 8 bytes of input pack to exactly one byte
        let out = encode(b"ABABABAB").unwrap();
        assert_eq!(out[1], 0);
    }

    #[test]
    fn test_all_256_symbols_rejected() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert_eq!(encode(&data), Err(Error::TooManySymbols(256)));
    }

    #[test]
    fn test_failed_encode_writes_nothing() {
        let data: Vec<u8> = (0..=255u8).collect();
        let mut out = vec![0xAA];
        assert!(encode_into(&mut out, &data).is_err());
        assert_eq!(out, vec![0xAA]);
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = vec![0xAA, 0xBB];
        encode_into(&mut out, b"AAABBC").unwrap();
        assert_eq!(&out[..2], &[0xAA, 0xBB]);
        assert_eq!(out[2], 3); // symbol count at the appended base
        assert_eq!(out[3], 7); // padding patched at base + 1
    }
}
