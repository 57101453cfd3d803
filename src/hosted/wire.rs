//! Hosted Wire Format
//!
//! One packet per direction per syscall: [`WORDS`] machine words, each as
//! little-endian `usize` bytes, back to back. Requests and replies share the
//! layout. Both ends must agree on the word size.

use std::io::{self, Read, Write};

use crate::syscall::WORDS;

/// Bytes per word on the wire.
pub const WORD_BYTES: usize = core::mem::size_of::<usize>();

/// Bytes per packet.
pub const PACKET_BYTES: usize = WORDS * WORD_BYTES;

/// Serialize a register image.
pub fn encode(words: &[usize; WORDS]) -> [u8; PACKET_BYTES] {
    let mut packet = [0u8; PACKET_BYTES];
    for (chunk, word) in packet.chunks_exact_mut(WORD_BYTES).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    packet
}

/// Deserialize a register image.
pub fn decode(packet: &[u8; PACKET_BYTES]) -> [usize; WORDS] {
    let mut words = [0usize; WORDS];
    for (word, chunk) in words.iter_mut().zip(packet.chunks_exact(WORD_BYTES)) {
        let mut bytes = [0u8; WORD_BYTES];
        bytes.copy_from_slice(chunk);
        *word = usize::from_le_bytes(bytes);
    }
    words
}

/// Write one packet and flush it.
pub fn write_packet<W: Write + ?Sized>(writer: &mut W, words: &[usize; WORDS]) -> io::Result<()> {
    writer.write_all(&encode(words))?;
    writer.flush()
}

/// Read exactly one packet.
///
/// A stream that ends before a full packet arrived yields
/// [`io::ErrorKind::UnexpectedEof`].
pub fn read_packet<R: Read + ?Sized>(reader: &mut R) -> io::Result<[usize; WORDS]> {
    let mut packet = [0u8; PACKET_BYTES];
    reader.read_exact(&mut packet)?;
    Ok(decode(&packet))
}
