//! Chunk transport for patch images.
//!
//! Every Hydrasynth sysex message carries a checksummed, base64-encoded
//! payload. A patch image travels as 22 of them, each holding up to 128
//! image bytes behind a `[0x16, 0x00, index, 0x16]` marker.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::trace;

use super::error::FrameError;
use super::layout::IMAGE_SIZE;
use super::SYSEX_HEADER;

/// Image bytes per chunk.
pub const CHUNK_SIZE: usize = 128;

/// Chunks per image.
pub const CHUNK_COUNT: usize = (IMAGE_SIZE + CHUNK_SIZE - 1) / CHUNK_SIZE;

/// Image bytes in the last chunk.
pub const FINAL_CHUNK_SIZE: usize = IMAGE_SIZE - CHUNK_SIZE * (CHUNK_COUNT - 1);

/// Marker byte that opens and closes the chunk header.
pub const CHUNK_MARKER: u8 = 0x16;

/// Sysex length of a full chunk.
pub const FULL_CHUNK_LEN: usize = sysex_len(CHUNK_SIZE + 4);

/// Sysex length of the final, short chunk.
pub const FINAL_CHUNK_LEN: usize = sysex_len(FINAL_CHUNK_SIZE + 4);

/// Length of the complete sysex message for a command of `len` bytes.
const fn sysex_len(len: usize) -> usize {
    SYSEX_HEADER.len() + (len + 4 + 2) / 3 * 4 + 1
}

/// Wraps a command in checksum, base64 and the sysex envelope.
pub fn encode_payload(command: &[u8]) -> Vec<u8> {
    let crc = crc32fast::hash(command);
    let mut raw = Vec::with_capacity(command.len() + 4);
    raw.extend_from_slice(&(!crc).to_le_bytes());
    raw.extend_from_slice(command);
    let mut msg = Vec::with_capacity(sysex_len(command.len()));
    msg.extend_from_slice(&SYSEX_HEADER);
    msg.extend_from_slice(STANDARD.encode(&raw).as_bytes());
    msg.push(0xF7);
    msg
}

/// Unwraps a sysex message, verifying the envelope and checksum, and returns
/// the command bytes.
pub fn decode_payload(msg: &[u8]) -> Result<Vec<u8>, FrameError> {
    if msg.len() < SYSEX_HEADER.len() + 1 || msg[0] != 0xF0 || msg[msg.len() - 1] != 0xF7 {
        return Err(FrameError::NotSysex);
    }
    if msg[..SYSEX_HEADER.len()] != SYSEX_HEADER {
        return Err(FrameError::WrongHeader);
    }
    let body = &msg[SYSEX_HEADER.len()..msg.len() - 1];
    let raw = STANDARD.decode(body).map_err(|_| FrameError::BadBase64)?;
    if raw.len() < 4 {
        return Err(FrameError::TooShort);
    }
    let (sum, command) = raw.split_at(4);
    let expected = (!crc32fast::hash(command)).to_le_bytes();
    if sum != expected {
        let index = if command.len() > 2 { command[2] } else { 0 };
        return Err(FrameError::BadChecksum { index });
    }
    Ok(command.to_vec())
}

/// Builds the command for chunk `index`: marker header followed by data.
pub fn chunk_command(index: u8, data: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(data.len() + 4);
    cmd.extend_from_slice(&[CHUNK_MARKER, 0x00, index, CHUNK_MARKER]);
    cmd.extend_from_slice(data);
    cmd
}

/// Checks the marker header of a decoded chunk command and returns its data.
pub fn chunk_data(index: u8, command: &[u8]) -> Result<&[u8], FrameError> {
    if command.len() < 4 {
        return Err(FrameError::TooShort);
    }
    if command[..4] != [CHUNK_MARKER, 0x00, index, CHUNK_MARKER] {
        return Err(FrameError::BadMarker { index });
    }
    Ok(&command[4..])
}

/// Splits an image into chunk-sized slices, in transmission order.
pub fn split(image: &[u8]) -> Vec<&[u8]> {
    image.chunks(CHUNK_SIZE).collect()
}

/// Encodes an image as the complete list of chunk messages.
pub fn encode_chunks(image: &[u8]) -> Vec<Vec<u8>> {
    split(image)
        .into_iter()
        .enumerate()
        .map(|(i, data)| {
            trace!("encoding chunk {i} ({} bytes)", data.len());
            encode_payload(&chunk_command(i as u8, data))
        })
        .collect()
}

/// Reassembles chunk data received in order.
pub fn join<T: AsRef<[u8]>>(chunks: &[T]) -> Result<Vec<u8>, FrameError> {
    if chunks.len() != CHUNK_COUNT {
        return Err(FrameError::WrongChunkCount(chunks.len()));
    }
    let mut image = Vec::with_capacity(IMAGE_SIZE);
    for (i, chunk) in chunks.iter().enumerate() {
        let chunk = chunk.as_ref();
        let want = if i + 1 == CHUNK_COUNT {
            FINAL_CHUNK_SIZE
        } else {
            CHUNK_SIZE
        };
        if chunk.len() != want {
            return Err(if chunk.len() < CHUNK_SIZE && i + 1 < CHUNK_COUNT {
                FrameError::ShortChunkTooEarly { index: i as u8 }
            } else {
                FrameError::WrongChunkLength {
                    index: i as u8,
                    len: chunk.len(),
                }
            });
        }
        image.extend_from_slice(chunk);
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Vec<u8> {
        (0..IMAGE_SIZE).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn split_shape() {
        let image = image();
        let chunks = split(&image);
        assert_eq!(chunks.len(), 22);
        assert!(chunks[..21].iter().all(|c| c.len() == 128));
        assert_eq!(chunks[21].len(), 102);
        assert_eq!(join(&chunks).unwrap(), image);
    }

    #[test]
    fn join_rejects_bad_shapes() {
        let image = image();
        let chunks = split(&image);
        assert_eq!(join(&chunks[..21]), Err(FrameError::WrongChunkCount(21)));
        let mut short = chunks.clone();
        short[3] = &short[3][..50];
        assert_eq!(join(&short), Err(FrameError::ShortChunkTooEarly { index: 3 }));

        let long_last = [image[2688..].to_vec(), vec![0; 10]].concat();
        let mut long = chunks.clone();
        long[21] = long_last.as_slice();
        assert_eq!(
            join(&long),
            Err(FrameError::WrongChunkLength { index: 21, len: 112 })
        );
        let mut clipped = chunks.clone();
        clipped[21] = &clipped[21][..90];
        assert_eq!(
            join(&clipped),
            Err(FrameError::WrongChunkLength { index: 21, len: 90 })
        );
    }

    #[test]
    fn message_lengths() {
        assert_eq!(FULL_CHUNK_LEN, 191);
        assert_eq!(FINAL_CHUNK_LEN, 155);
        let msgs = encode_chunks(&image());
        assert_eq!(msgs.len(), 22);
        assert!(msgs[..21].iter().all(|m| m.len() == FULL_CHUNK_LEN));
        assert_eq!(msgs[21].len(), FINAL_CHUNK_LEN);
    }

    #[test]
    fn checksum_is_inverted_little_endian_crc() {
        let cmd = [0x18, 0x00];
        let msg = encode_payload(&cmd);
        assert_eq!(&msg[..6], &SYSEX_HEADER);
        assert_eq!(*msg.last().unwrap(), 0xF7);
        let raw = STANDARD.decode(&msg[6..msg.len() - 1]).unwrap();
        let crc = crc32fast::hash(&cmd);
        assert_eq!(
            raw[..4],
            [
                255 - (crc & 255) as u8,
                255 - ((crc >> 8) & 255) as u8,
                255 - ((crc >> 16) & 255) as u8,
                255 - (crc >> 24) as u8,
            ]
        );
        assert_eq!(&raw[4..], &cmd);
    }

    #[test]
    fn checksum_is_deterministic_and_sensitive() {
        let data = image();
        let a = encode_payload(&chunk_command(4, &data[512..640]));
        let b = encode_payload(&chunk_command(4, &data[512..640]));
        assert_eq!(a, b);
        let mut flipped = data[512..640].to_vec();
        flipped[77] ^= 0x10;
        let c = encode_payload(&chunk_command(4, &flipped));
        let sum = |m: &[u8]| STANDARD.decode(&m[6..m.len() - 1]).unwrap()[..4].to_vec();
        assert_ne!(sum(&a), sum(&c));
    }

    #[test]
    fn decode_verifies_everything() {
        let data = [1u8, 2, 3];
        let msg = encode_payload(&chunk_command(9, &data));
        let cmd = decode_payload(&msg).unwrap();
        assert_eq!(chunk_data(9, &cmd).unwrap(), &data);
        assert_eq!(chunk_data(8, &cmd), Err(FrameError::BadMarker { index: 8 }));

        assert_eq!(decode_payload(&[0x90, 60, 100]), Err(FrameError::NotSysex));
        let mut other = msg.clone();
        other[1] = 0x41;
        assert_eq!(decode_payload(&other), Err(FrameError::WrongHeader));
        let mut garbled = msg.clone();
        garbled[8] = b'!';
        assert_eq!(decode_payload(&garbled), Err(FrameError::BadBase64));

        // Re-encode a tampered payload with a stale checksum.
        let mut raw = STANDARD.decode(&msg[6..msg.len() - 1]).unwrap();
        raw[9] ^= 1;
        let mut tampered = SYSEX_HEADER.to_vec();
        tampered.extend_from_slice(STANDARD.encode(&raw).as_bytes());
        tampered.push(0xF7);
        assert_eq!(
            decode_payload(&tampered),
            Err(FrameError::BadChecksum { index: 9 })
        );
    }
}
