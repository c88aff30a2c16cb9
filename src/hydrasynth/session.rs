//! Patch dump sessions.
//!
//! A read is a request followed by 22 chunks from the synth, each of which
//! must be acknowledged before the next arrives. [`DumpReader`] is the
//! receiving state machine; it never touches the transport, so the caller
//! sends whatever replies each step produces. A write needs no replies and
//! is planned up front by [`write_plan`].

use std::time::Duration;

use log::{debug, info, warn};

use super::bulk::{decode_image, encode_image, set_location};
use super::chunk::{self, CHUNK_COUNT, CHUNK_SIZE, FINAL_CHUNK_LEN, FULL_CHUNK_LEN};
use super::error::{FrameError, HydraError};
use super::layout::Version;
use super::store::ParamStore;
use super::{Outgoing, SysexCommand};
use crate::nrpn::bank_and_program;

/// Runtime options for dump sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Out-of-sequence chunks tolerated before a read fails.
    pub max_retries: u32,
    /// Optional pause between written chunks.
    pub chunk_pause: Option<Duration>,
    /// Send the header and footer twice. Some host MIDI stacks drop the
    /// first sysex message sent to the synth.
    pub double_envelope: bool,
    /// Leave the footer to a batch orchestrator.
    pub batch: bool,
    /// MIDI channel for NRPN and patch changes, 1-16.
    pub channel: u8,
    pub matrix_pause: Duration,
    pub settle_pause: Duration,
    /// Bank and slot overwritten when loading a patch into the current
    /// buffer.
    pub scratch: (u8, u8),
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_retries: 3,
            chunk_pause: None,
            double_envelope: !cfg!(target_os = "macos"),
            batch: false,
            channel: 1,
            matrix_pause: Duration::from_millis(50),
            settle_pause: Duration::from_millis(200),
            scratch: (4, 127),
        }
    }
}

impl SessionConfig {
    fn envelope(&self, cmd: SysexCommand) -> Vec<Outgoing> {
        let n = if self.double_envelope { 2 } else { 1 };
        vec![Outgoing::Sysex(cmd.to_midi()); n]
    }

    pub fn header(&self) -> Vec<Outgoing> {
        self.envelope(SysexCommand::Begin)
    }

    /// Closes a session. Batch orchestrators call this once at the end.
    pub fn footer(&self) -> Vec<Outgoing> {
        self.envelope(SysexCommand::End)
    }
}

/// Result of feeding one message to a [`DumpReader`].
#[derive(Debug)]
pub enum Outcome {
    /// Keep waiting.
    Incomplete,
    /// The whole image arrived and was loaded into the store.
    Succeeded(Version),
    /// Not part of the dump.
    Ignored,
    /// The session is over; the store is untouched.
    Failed(HydraError),
}

#[derive(Debug)]
pub struct Step {
    pub outcome: Outcome,
    /// Messages to send back to the synth, in order.
    pub replies: Vec<Outgoing>,
}

impl Step {
    fn new(outcome: Outcome) -> Self {
        Step {
            outcome,
            replies: vec![],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Awaiting(u8),
    Done,
}

/// Receives a patch dump one message at a time.
#[derive(Debug)]
pub struct DumpReader {
    config: SessionConfig,
    state: State,
    chunks: Vec<Vec<u8>>,
    retries: u32,
}

impl DumpReader {
    pub fn new(config: SessionConfig) -> Self {
        DumpReader {
            config,
            state: State::Idle,
            chunks: Vec::with_capacity(CHUNK_COUNT),
            retries: 0,
        }
    }

    /// Opens a session and returns the messages that request the dump.
    pub fn request(&mut self, bank: u8, number: u8) -> Vec<Outgoing> {
        info!("requesting patch {bank}:{number}");
        self.start();
        read_plan(&self.config, bank, number)
    }

    /// Opens a session for a dump requested some other way.
    pub fn start(&mut self) {
        self.state = State::Awaiting(0);
        self.chunks.clear();
        self.retries = 0;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Awaiting(_))
    }

    /// Ends the session on a failure other than a bad message, such as a
    /// timeout. Returns the footer if one is due.
    pub fn abort(&mut self) -> Vec<Outgoing> {
        let was_active = self.is_active();
        self.state = State::Idle;
        self.chunks.clear();
        if was_active {
            self.closing()
        } else {
            vec![]
        }
    }

    fn closing(&self) -> Vec<Outgoing> {
        if self.config.batch {
            vec![]
        } else {
            self.config.footer()
        }
    }

    fn fail(&mut self, e: HydraError) -> Step {
        warn!("patch dump failed: {e}");
        self.state = State::Idle;
        self.chunks.clear();
        Step {
            outcome: Outcome::Failed(e),
            replies: self.closing(),
        }
    }

    /// Handles one inbound message. Anything not shaped like a chunk is
    /// ignored, since other traffic may arrive mid-dump.
    pub fn feed<S: ParamStore + ?Sized>(&mut self, msg: &[u8], store: &mut S) -> Step {
        if msg.len() != FULL_CHUNK_LEN && msg.len() != FINAL_CHUNK_LEN {
            return Step::new(Outcome::Ignored);
        }
        let expected = match self.state {
            State::Idle => return Step::new(Outcome::Ignored),
            State::Done => return self.fail(FrameError::ChunkAfterFinal.into()),
            State::Awaiting(n) => n,
        };
        let (index, data) = match SysexCommand::from_midi(msg) {
            Ok(SysexCommand::Chunk { index, data }) => (index, data),
            Ok(other) => {
                debug!("ignoring {other:?} during dump");
                return Step::new(Outcome::Ignored);
            }
            // Same length as a chunk by coincidence.
            Err(FrameError::NotSysex) | Err(FrameError::WrongHeader) => {
                return Step::new(Outcome::Ignored)
            }
            Err(e) => return self.fail(e.into()),
        };
        if index != expected {
            self.retries += 1;
            if self.retries > self.config.max_retries {
                return self.fail(HydraError::Sequence {
                    expected,
                    got: index,
                });
            }
            warn!(
                "expected chunk {expected}, got {index} (retry {}/{})",
                self.retries, self.config.max_retries
            );
            return Step::new(Outcome::Incomplete);
        }
        let last = usize::from(index) + 1 == CHUNK_COUNT;
        if data.len() < CHUNK_SIZE && !last {
            return self.fail(FrameError::ShortChunkTooEarly { index }.into());
        }
        debug!("chunk {index} ({} bytes)", data.len());
        self.chunks.push(data);
        let mut replies = vec![Outgoing::Sysex(
            SysexCommand::ChunkAck { position: index }.to_midi(),
        )];
        if !last {
            self.state = State::Awaiting(index + 1);
            return Step {
                outcome: Outcome::Incomplete,
                replies,
            };
        }

        let result = chunk::join(&self.chunks)
            .map_err(HydraError::from)
            .and_then(|image| decode_image(&image, store).map_err(HydraError::from));
        self.chunks.clear();
        match result {
            Ok(version) => {
                self.state = State::Done;
                replies.extend(self.closing());
                info!("received {version:?} patch");
                Step {
                    outcome: Outcome::Succeeded(version),
                    replies,
                }
            }
            Err(e) => {
                let mut step = self.fail(e);
                replies.append(&mut step.replies);
                step.replies = replies;
                step
            }
        }
    }
}

/// Messages that open a session and request one patch.
pub fn read_plan(config: &SessionConfig, bank: u8, number: u8) -> Vec<Outgoing> {
    let mut plan = config.header();
    plan.push(Outgoing::Sysex(
        SysexCommand::DumpRequest { bank, number }.to_midi(),
    ));
    plan
}

/// Where a write lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteTarget {
    /// Store the patch in a slot. The synth rewrites the whole bank.
    Slot { bank: u8, number: u8 },
    /// Load the patch into the synth's edit buffer, by way of the scratch
    /// slot and a patch change.
    Current,
}

/// Everything needed to write `store` to the synth.
pub fn write_plan<S: ParamStore + ?Sized>(
    config: &SessionConfig,
    store: &S,
    target: WriteTarget,
) -> Vec<Outgoing> {
    write_image_plan(config, encode_image(store), target)
}

/// Everything needed to write an already-encoded image to the synth.
pub fn write_image_plan(
    config: &SessionConfig,
    mut image: Vec<u8>,
    target: WriteTarget,
) -> Vec<Outgoing> {
    let (bank, number) = match target {
        WriteTarget::Slot { bank, number } => (bank, number),
        WriteTarget::Current => config.scratch,
    };
    set_location(&mut image, bank, number);
    info!("writing patch to {bank}:{number}");

    let mut plan = config.header();
    let chunks = chunk::encode_chunks(&image);
    let n = chunks.len();
    for (i, msg) in chunks.into_iter().enumerate() {
        plan.push(Outgoing::Sysex(msg));
        if let (Some(pause), true) = (config.chunk_pause, i + 1 < n) {
            plan.push(Outgoing::Pause(pause));
        }
    }
    plan.push(Outgoing::Sysex(SysexCommand::SaveRequest.to_midi()));
    if !config.batch {
        plan.extend(config.footer());
    }
    plan.push(Outgoing::Pause(config.settle_pause));
    if target == WriteTarget::Current {
        plan.extend(
            bank_and_program(config.channel, bank, number)
                .into_iter()
                .map(Outgoing::Midi),
        );
        plan.push(Outgoing::Pause(config.settle_pause));
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrasynth::store::Patch;

    fn config() -> SessionConfig {
        SessionConfig {
            double_envelope: false,
            ..Default::default()
        }
    }

    fn sample() -> Patch {
        let mut p = Patch::init();
        p.set_text("name", "Reader Test");
        p.set_value("osc1semi", 5);
        p
    }

    fn sent_chunks(p: &Patch) -> Vec<Vec<u8>> {
        chunk::encode_chunks(&encode_image(p))
    }

    fn is(o: &Outgoing, cmd: SysexCommand) -> bool {
        *o == Outgoing::Sysex(cmd.to_midi())
    }

    #[test]
    fn reads_a_whole_patch() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let plan = reader.request(1, 2);
        assert!(is(&plan[0], SysexCommand::Begin));
        assert!(is(&plan[1], SysexCommand::DumpRequest { bank: 1, number: 2 }));

        let mut store = Patch::new();
        for (i, msg) in chunks.iter().enumerate() {
            let step = reader.feed(msg, &mut store);
            assert!(is(&step.replies[0], SysexCommand::ChunkAck { position: i as u8 }));
            if i < 21 {
                assert!(matches!(step.outcome, Outcome::Incomplete));
                assert_eq!(step.replies.len(), 1);
            } else {
                assert!(matches!(step.outcome, Outcome::Succeeded(Version::V2_0)));
                assert!(is(&step.replies[1], SysexCommand::End));
            }
        }
        assert_eq!(store.text("name"), Some("Reader Test"));
        assert_eq!(store.value("osc1semi"), Some(5));
        assert!(!reader.is_active());
    }

    #[test]
    fn other_traffic_is_ignored() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        // Nothing is accepted before a session opens.
        assert!(matches!(reader.feed(&chunks[0], &mut store).outcome, Outcome::Ignored));
        reader.start();
        for msg in [vec![0xB0, 99, 1], SysexCommand::Begin.to_midi()] {
            let step = reader.feed(&msg, &mut store);
            assert!(matches!(step.outcome, Outcome::Ignored));
            assert!(step.replies.is_empty());
        }
        let mut foreign = chunks[0].clone();
        foreign[1] = 0x41;
        assert!(matches!(reader.feed(&foreign, &mut store).outcome, Outcome::Ignored));
        assert!(matches!(reader.feed(&chunks[0], &mut store).outcome, Outcome::Incomplete));
    }

    #[test]
    fn stale_chunks_are_retried_then_fatal() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        reader.feed(&chunks[0], &mut store);
        for _ in 0..3 {
            let step = reader.feed(&chunks[0], &mut store);
            assert!(matches!(step.outcome, Outcome::Incomplete));
            assert!(step.replies.is_empty());
        }
        let step = reader.feed(&chunks[0], &mut store);
        assert!(matches!(
            step.outcome,
            Outcome::Failed(HydraError::Sequence { expected: 1, got: 0 })
        ));
        assert!(is(&step.replies[0], SysexCommand::End));
        assert!(store.is_empty());
    }

    #[test]
    fn a_retry_can_recover() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        reader.feed(&chunks[0], &mut store);
        reader.feed(&chunks[0], &mut store);
        let mut last = None;
        for msg in &chunks[1..] {
            last = Some(reader.feed(msg, &mut store).outcome);
        }
        assert!(matches!(last, Some(Outcome::Succeeded(_))));
    }

    #[test]
    fn bad_checksum_aborts_with_footer() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        let mut bad = chunks[0].clone();
        // Swap two base64 characters in the data area.
        bad.swap(60, 61);
        if bad == chunks[0] {
            bad[60] = if bad[60] == b'A' { b'B' } else { b'A' };
        }
        let step = reader.feed(&bad, &mut store);
        assert!(matches!(step.outcome, Outcome::Failed(HydraError::Frame(_))));
        assert!(is(&step.replies[0], SysexCommand::End));
    }

    #[test]
    fn decode_errors_still_close_the_session() {
        let mut image = encode_image(&sample());
        image[4] = 0x42;
        let chunks = chunk::encode_chunks(&image);
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        let mut last = None;
        for msg in &chunks {
            last = Some(reader.feed(msg, &mut store));
        }
        let step = last.unwrap();
        assert!(matches!(
            step.outcome,
            Outcome::Failed(HydraError::Decode(_))
        ));
        assert!(is(&step.replies[0], SysexCommand::ChunkAck { position: 21 }));
        assert!(is(&step.replies[1], SysexCommand::End));
        assert!(store.is_empty());
    }

    #[test]
    fn a_chunk_after_the_final_one_is_an_error() {
        let chunks = sent_chunks(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        for msg in &chunks {
            reader.feed(msg, &mut store);
        }
        let step = reader.feed(&chunks[21], &mut store);
        assert!(matches!(
            step.outcome,
            Outcome::Failed(HydraError::Frame(FrameError::ChunkAfterFinal))
        ));
    }

    #[test]
    fn short_chunk_too_early() {
        let image = encode_image(&sample());
        let mut reader = DumpReader::new(config());
        let mut store = Patch::new();
        reader.start();
        // A final-length message at position 0.
        let msg = chunk::encode_payload(&chunk::chunk_command(0, &image[..102]));
        assert_eq!(msg.len(), FINAL_CHUNK_LEN);
        let step = reader.feed(&msg, &mut store);
        assert!(matches!(
            step.outcome,
            Outcome::Failed(HydraError::Frame(FrameError::ShortChunkTooEarly { index: 0 }))
        ));
    }

    #[test]
    fn batch_mode_defers_the_footer() {
        let chunks = sent_chunks(&sample());
        let cfg = SessionConfig {
            batch: true,
            ..config()
        };
        let mut reader = DumpReader::new(cfg.clone());
        let mut store = Patch::new();
        reader.start();
        let mut last = None;
        for msg in &chunks {
            last = Some(reader.feed(msg, &mut store));
        }
        let step = last.unwrap();
        assert!(matches!(step.outcome, Outcome::Succeeded(_)));
        assert_eq!(step.replies.len(), 1);
        reader.start();
        assert!(reader.abort().is_empty());

        let plan = write_plan(&cfg, &sample(), WriteTarget::Slot { bank: 0, number: 0 });
        assert!(!plan.iter().any(|o| is(o, SysexCommand::End)));
    }

    #[test]
    fn abort_sends_the_footer_once_per_session() {
        let mut reader = DumpReader::new(config());
        assert!(reader.abort().is_empty());
        reader.start();
        assert_eq!(reader.abort().len(), 1);
        assert!(reader.abort().is_empty());
    }

    #[test]
    fn write_plan_shape() {
        let cfg = SessionConfig {
            double_envelope: true,
            ..Default::default()
        };
        let plan = write_plan(&cfg, &sample(), WriteTarget::Slot { bank: 2, number: 9 });
        assert!(is(&plan[0], SysexCommand::Begin));
        assert!(is(&plan[1], SysexCommand::Begin));
        let chunks: Vec<_> = plan[2..24]
            .iter()
            .map(|o| SysexCommand::from_midi(o.bytes().unwrap()).unwrap())
            .collect();
        let mut image = vec![];
        for (i, c) in chunks.iter().enumerate() {
            match c {
                SysexCommand::Chunk { index, data } => {
                    assert_eq!(*index as usize, i);
                    image.extend_from_slice(data);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!((image[2], image[3]), (2, 9));
        assert!(is(&plan[24], SysexCommand::SaveRequest));
        assert!(is(&plan[25], SysexCommand::End));
        assert!(is(&plan[26], SysexCommand::End));
        assert_eq!(plan[27], Outgoing::Pause(cfg.settle_pause));
        assert_eq!(plan.len(), 28);
    }

    #[test]
    fn current_patch_goes_through_the_scratch_slot() {
        let cfg = SessionConfig {
            chunk_pause: Some(Duration::from_millis(5)),
            ..config()
        };
        let plan = write_plan(&cfg, &sample(), WriteTarget::Current);
        let pauses = plan
            .iter()
            .filter(|o| **o == Outgoing::Pause(Duration::from_millis(5)))
            .count();
        assert_eq!(pauses, 21);
        let first = SysexCommand::from_midi(plan[1].bytes().unwrap()).unwrap();
        match first {
            SysexCommand::Chunk { data, .. } => assert_eq!((data[2], data[3]), cfg.scratch),
            other => panic!("unexpected {other:?}"),
        }
        let tail: Vec<_> = plan.iter().rev().take(3).cloned().collect();
        assert_eq!(tail[0], Outgoing::Pause(cfg.settle_pause));
        assert_eq!(tail[1], Outgoing::Midi(vec![0xC0, cfg.scratch.1]));
        assert_eq!(tail[2], Outgoing::Midi(vec![0xB0, 32, cfg.scratch.0]));
    }
}
