//! Patch codec and MIDI tooling for the ASM Hydrasynth.

pub const PGM: &str = "hydrasyx";

pub mod hydrasynth;
pub mod midi_io;
pub mod nrpn;
