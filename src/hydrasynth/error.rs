//! Error definitions for the Hydrasynth patch codec.
//!
use std::error::Error;
use std::fmt::Display;

use crate::midi_io::MidiIoError;

/// Error enum for everything the dump session and codecs can report.
///
/// Unknown NRPN addresses and unknown remap wire values are deliberately
/// absent: those are dropped or defaulted, never surfaced.
#[derive(Debug)]
pub enum HydraError {
    /// Wrong length/shape or bad marker bytes in a chunk.
    Frame(FrameError),
    /// A chunk arrived at an unexpected position too many times.
    Sequence { expected: u8, got: u8 },
    /// The reassembled image could not be decoded.
    Decode(DecodeError),
    /// The MIDI transport failed.
    Io(MidiIoError),
    /// The device stopped talking before the dump completed.
    Timeout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameError {
    NotSysex,
    WrongHeader,
    BadBase64,
    TooShort,
    BadMarker { index: u8 },
    BadChecksum { index: u8 },
    ShortChunkTooEarly { index: u8 },
    ChunkAfterFinal,
    WrongChunkCount(usize),
    WrongChunkLength { index: u8, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    WrongImageSize(usize),
    UnknownVersion(u8),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            FrameError::NotSysex => write!(f, "not a Hydrasynth sysex message"),
            FrameError::WrongHeader => write!(f, "wrong sysex header"),
            FrameError::BadBase64 => write!(f, "payload is not valid base64"),
            FrameError::TooShort => write!(f, "payload too short for a chunk"),
            FrameError::BadMarker { index } => write!(f, "bad framing marker in chunk {index}"),
            FrameError::BadChecksum { index } => write!(f, "checksum mismatch in chunk {index}"),
            FrameError::ShortChunkTooEarly { index } => {
                write!(f, "short chunk received at position {index}")
            }
            FrameError::ChunkAfterFinal => write!(f, "chunk received after the final chunk"),
            FrameError::WrongChunkCount(n) => write!(f, "expected 22 chunks, got {n}"),
            FrameError::WrongChunkLength { index, len } => {
                write!(f, "chunk {index} carries {len} bytes")
            }
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            DecodeError::WrongImageSize(n) => write!(f, "patch image is {n} bytes, expected 2790"),
            DecodeError::UnknownVersion(v) => write!(f, "unknown patch format version tag {v:#04x}"),
        }
    }
}

impl Display for HydraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydraError::Frame(e) => e.fmt(f),
            HydraError::Sequence { expected, got } => {
                write!(f, "expected chunk {expected}, kept getting chunk {got}")
            }
            HydraError::Decode(e) => e.fmt(f),
            HydraError::Io(e) => e.fmt(f),
            HydraError::Timeout => write!(f, "timed out waiting for the synth"),
        }
    }
}

impl Error for HydraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HydraError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FrameError> for HydraError {
    fn from(e: FrameError) -> Self {
        HydraError::Frame(e)
    }
}
impl From<DecodeError> for HydraError {
    fn from(e: DecodeError) -> Self {
        HydraError::Decode(e)
    }
}
impl From<MidiIoError> for HydraError {
    fn from(e: MidiIoError) -> Self {
        HydraError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, HydraError>;
