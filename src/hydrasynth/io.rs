//! Patch dumps and live edits over a MIDI `Stream` and `Sink`.

use std::time::Duration;

use futures::{Sink, SinkExt, Stream, StreamExt};
use log::{debug, warn};

use super::control;
use super::error::{HydraError, Result};
use super::layout::Version;
use super::session::{write_plan, DumpReader, Outcome, SessionConfig, WriteTarget};
use super::store::ParamStore;
use super::Outgoing;
use crate::midi_io::MidiIoError;
use crate::nrpn::NrpnParser;

/// Sends a plan, sleeping through its pauses.
pub async fn play<O>(plan: Vec<Outgoing>, midi_out: &mut O) -> Result<()>
where
    O: Sink<Vec<u8>> + Unpin,
    O::Error: Into<MidiIoError>,
{
    for step in plan {
        match step {
            Outgoing::Sysex(bytes) | Outgoing::Midi(bytes) => midi_out
                .send(bytes)
                .await
                .map_err(|e| HydraError::Io(e.into()))?,
            Outgoing::Pause(d) => tokio::time::sleep(d).await,
        }
    }
    Ok(())
}

/// Requests one patch and loads it into `store`. Gives up if the synth
/// goes quiet for `patience`.
pub async fn read_patch<I, O, S>(
    config: &SessionConfig,
    bank: u8,
    number: u8,
    patience: Duration,
    midi_in: &mut I,
    midi_out: &mut O,
    store: &mut S,
) -> Result<Version>
where
    I: Stream<Item = Vec<u8>> + Unpin,
    O: Sink<Vec<u8>> + Unpin,
    O::Error: Into<MidiIoError>,
    S: ParamStore + ?Sized,
{
    let mut reader = DumpReader::new(config.clone());
    play(reader.request(bank, number), midi_out).await?;
    loop {
        let msg = match tokio::time::timeout(patience, midi_in.next()).await {
            Ok(Some(msg)) => msg,
            Ok(None) | Err(_) => {
                warn!("no reply from the synth");
                play(reader.abort(), midi_out).await?;
                return Err(HydraError::Timeout);
            }
        };
        let step = reader.feed(&msg, store);
        play(step.replies, midi_out).await?;
        match step.outcome {
            Outcome::Incomplete | Outcome::Ignored => {}
            Outcome::Succeeded(version) => return Ok(version),
            Outcome::Failed(e) => return Err(e),
        }
    }
}

/// Writes `store` to the synth.
pub async fn write_patch<O, S>(
    config: &SessionConfig,
    store: &S,
    target: WriteTarget,
    midi_out: &mut O,
) -> Result<()>
where
    O: Sink<Vec<u8>> + Unpin,
    O::Error: Into<MidiIoError>,
    S: ParamStore + ?Sized,
{
    play(write_plan(config, store, target), midi_out).await
}

/// Sends every live-editable parameter of `store` as NRPN.
pub async fn send_parameters<O, S>(config: &SessionConfig, store: &S, midi_out: &mut O) -> Result<()>
where
    O: Sink<Vec<u8>> + Unpin,
    O::Error: Into<MidiIoError>,
    S: ParamStore + ?Sized,
{
    play(
        control::send_all(store, config.channel, config.matrix_pause),
        midi_out,
    )
    .await
}

/// Applies incoming NRPN edits to `store` until the stream ends. Each
/// applied change is passed to `on_update`.
pub async fn follow_edits<I, S, F>(channel: u8, midi_in: &mut I, store: &mut S, mut on_update: F)
where
    I: Stream<Item = Vec<u8>> + Unpin,
    S: ParamStore + ?Sized,
    F: FnMut(&control::Update),
{
    let mut parser = NrpnParser::new(channel);
    while let Some(msg) = midi_in.next().await {
        if let Some(nrpn) = parser.feed(&msg) {
            match control::decode(store, nrpn) {
                Some(update) => on_update(&update),
                None => debug!("dropped {nrpn:?}"),
            }
        }
    }
}
