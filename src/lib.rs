//! # huffrs
//!
//! A minimal-dependency, byte-level Huffman compression library.
//!
//! Compression derives an optimal prefix code from the input's byte
//! frequencies and emits a self-describing header followed by a packed
//! bitstream; decompression rebuilds the identical tree from the header
//! and reverses the process bit-for-bit.
//!
//! ## Example
//!
//! ```rust
//! let input = b"abracadabra";
//! let compressed = huffrs::encode(input)?;
//! let decompressed = huffrs::decode(&compressed)?;
//! assert_eq!(decompressed, input);
//! # Ok::<(), huffrs::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bits;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod header;
pub mod huffman;

pub use decode::decode;
pub use encode::{encode, encode_into};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use header::Header;
pub use huffman::{CodeTable, HuffmanTree};
