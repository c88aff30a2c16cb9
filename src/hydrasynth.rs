//! ASM Hydrasynth patch protocol
//!
//! Types and codecs for the Hydrasynth's two wire formats: the chunked,
//! base64-framed sysex patch dump, and the NRPN live-edit protocol.
//!
//! Neither format is documented by the manufacturer beyond a partial NRPN
//! chart, which is wrong in several places. Everything here follows what the
//! synth actually sends and accepts.
//!

pub mod bulk;
pub mod chunk;
pub mod control;
pub mod io;
pub mod layout;
pub mod nrpn_map;
pub mod remap;
pub mod session;
pub mod store;

mod error;
pub use error::{DecodeError, FrameError, HydraError, Result};

pub use store::{ParamStore, Patch};

use std::time::Duration;

/// Every Hydrasynth sysex message starts with these bytes.
pub const SYSEX_HEADER: [u8; 6] = [0xF0, 0x00, 0x20, 0x2B, 0x00, 0x6F];

/// Commands exchanged inside the sysex envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SysexCommand {
    /// Opens a dump session.
    Begin,
    /// Closes a dump session.
    End,
    /// Asks the synth to commit the image just written.
    SaveRequest,
    DumpRequest {
        bank: u8,
        number: u8,
    },
    /// Acknowledges receipt of the chunk at `position`.
    ChunkAck {
        position: u8,
    },
    Chunk {
        index: u8,
        data: Vec<u8>,
    },
}

impl SysexCommand {
    /// The complete sysex message.
    pub fn to_midi(&self) -> Vec<u8> {
        let mut r: Vec<u8> = vec![];
        self.extend_midi(&mut r);
        r
    }

    pub fn extend_midi(&self, v: &mut Vec<u8>) {
        v.extend(chunk::encode_payload(&self.command_bytes()));
    }

    fn command_bytes(&self) -> Vec<u8> {
        match self {
            SysexCommand::Begin => vec![0x18, 0x00],
            SysexCommand::End => vec![0x1A, 0x00],
            SysexCommand::SaveRequest => vec![0x14, 0x00],
            SysexCommand::DumpRequest { bank, number } => vec![0x04, 0x00, *bank, *number],
            SysexCommand::ChunkAck { position } => {
                vec![0x17, 0x00, *position, chunk::CHUNK_MARKER]
            }
            SysexCommand::Chunk { index, data } => chunk::chunk_command(*index, data),
        }
    }

    pub fn from_midi(m: &[u8]) -> std::result::Result<Self, FrameError> {
        let cmd = chunk::decode_payload(m)?;
        if cmd.len() < 2 || cmd[1] != 0x00 {
            return Err(FrameError::TooShort);
        }
        let result = match (cmd[0], cmd.len()) {
            (0x18, 2) => SysexCommand::Begin,
            (0x1A, 2) => SysexCommand::End,
            (0x14, 2) => SysexCommand::SaveRequest,
            (0x04, 4) => SysexCommand::DumpRequest {
                bank: cmd[2],
                number: cmd[3],
            },
            (0x17, 4) if cmd[3] == chunk::CHUNK_MARKER => {
                SysexCommand::ChunkAck { position: cmd[2] }
            }
            (chunk::CHUNK_MARKER, n) if n >= 4 => {
                let index = cmd[2];
                SysexCommand::Chunk {
                    index,
                    data: chunk::chunk_data(index, &cmd)?.to_vec(),
                }
            }
            (_, n) if n >= 3 => return Err(FrameError::BadMarker { index: cmd[2] }),
            _ => return Err(FrameError::TooShort),
        };
        Ok(result)
    }
}

impl From<&SysexCommand> for Vec<u8> {
    fn from(cmd: &SysexCommand) -> Self {
        cmd.to_midi()
    }
}

/// One step of an outbound plan. The synth's input buffer is small, so
/// plans carry explicit pauses where it needs time to catch up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outgoing {
    Sysex(Vec<u8>),
    /// A channel message (NRPN part, bank select, program change).
    Midi(Vec<u8>),
    Pause(Duration),
}

impl Outgoing {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Outgoing::Sysex(b) | Outgoing::Midi(b) => Some(b),
            Outgoing::Pause(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_survive_the_envelope() {
        let cmds = [
            SysexCommand::Begin,
            SysexCommand::End,
            SysexCommand::SaveRequest,
            SysexCommand::DumpRequest { bank: 2, number: 17 },
            SysexCommand::ChunkAck { position: 21 },
            SysexCommand::Chunk {
                index: 3,
                data: vec![9; 128],
            },
        ];
        for cmd in cmds {
            let midi = cmd.to_midi();
            assert_eq!(&midi[..6], &SYSEX_HEADER);
            assert_eq!(SysexCommand::from_midi(&midi), Ok(cmd));
        }
    }

    #[test]
    fn ack_shape() {
        let midi = SysexCommand::ChunkAck { position: 5 }.to_midi();
        assert_eq!(chunk::decode_payload(&midi).unwrap(), vec![0x17, 0x00, 5, 0x16]);
    }

    #[test]
    fn unknown_commands_are_frame_errors() {
        let midi = chunk::encode_payload(&[0x55, 0x00, 0x01]);
        assert_eq!(
            SysexCommand::from_midi(&midi),
            Err(FrameError::BadMarker { index: 1 })
        );
        let midi = chunk::encode_payload(&[0x55]);
        assert_eq!(SysexCommand::from_midi(&midi), Err(FrameError::TooShort));
    }
}
