use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{SinkExt, StreamExt};

use hydrasyx::hydrasynth::bulk::decode_image;
use hydrasyx::hydrasynth::chunk::{encode_chunks, join};
use hydrasyx::hydrasynth::io::{follow_edits, read_patch, send_parameters, write_patch};
use hydrasyx::hydrasynth::layout::{Version, LAYOUT, MYSTERY_BYTES};
use hydrasyx::hydrasynth::session::{SessionConfig, WriteTarget};
use hydrasyx::hydrasynth::{HydraError, ParamStore, Patch, SysexCommand};

fn config() -> SessionConfig {
    SessionConfig {
        double_envelope: true,
        matrix_pause: Duration::ZERO,
        settle_pause: Duration::from_millis(1),
        ..Default::default()
    }
}

/// What the fake synth saw and kept.
#[derive(Default)]
struct SynthLog {
    commands: Vec<SysexCommand>,
    saved: Option<Vec<u8>>,
}

/// Plays the synth's side of the dump protocol until the host hangs up.
/// Written images are kept and served back on request. Mid-dump, it sends
/// some unrelated traffic and one stale chunk.
async fn fake_synth(
    mut from_host: UnboundedReceiver<Vec<u8>>,
    mut to_host: UnboundedSender<Vec<u8>>,
) -> SynthLog {
    let mut log = SynthLog::default();
    let mut incoming: Vec<Vec<u8>> = vec![];
    let mut outgoing: Vec<Vec<u8>> = vec![];
    while let Some(msg) = from_host.next().await {
        let Ok(cmd) = SysexCommand::from_midi(&msg) else {
            continue;
        };
        match &cmd {
            SysexCommand::Begin => incoming.clear(),
            SysexCommand::Chunk { data, .. } => incoming.push(data.clone()),
            SysexCommand::SaveRequest => log.saved = join(&incoming).ok(),
            SysexCommand::DumpRequest { bank, number } => {
                let mut image = log.saved.clone().unwrap_or_default();
                if image.len() > 3 {
                    image[2] = *bank;
                    image[3] = *number;
                }
                outgoing = encode_chunks(&image);
                to_host.send(outgoing[0].clone()).await.unwrap();
            }
            SysexCommand::ChunkAck { position } => {
                let next = usize::from(*position) + 1;
                if next == 3 {
                    to_host.send(vec![0x90, 60, 100]).await.unwrap();
                }
                if next == 6 {
                    to_host.send(outgoing[4].clone()).await.unwrap();
                }
                if let Some(chunk) = outgoing.get(next) {
                    to_host.send(chunk.clone()).await.unwrap();
                }
            }
            _ => {}
        }
        log.commands.push(cmd);
    }
    log
}

fn init_voice() -> Patch {
    let mut p = Patch::init();
    p.set_text("name", "INIT VOICE");
    p.set_value("category", 0);
    p
}

#[tokio::test]
async fn init_voice_survives_write_then_read() {
    let (mut host_tx, synth_rx) = mpsc::unbounded();
    let (synth_tx, mut host_rx) = mpsc::unbounded();
    let synth = tokio::spawn(fake_synth(synth_rx, synth_tx));

    let original = init_voice();
    write_patch(
        &config(),
        &original,
        WriteTarget::Slot { bank: 1, number: 7 },
        &mut host_tx,
    )
    .await
    .unwrap();

    let mut read_back = Patch::new();
    let version = read_patch(
        &config(),
        1,
        7,
        Duration::from_secs(2),
        &mut host_rx,
        &mut host_tx,
        &mut read_back,
    )
    .await
    .unwrap();
    assert_eq!(version, Version::V2_0);
    drop(host_tx);
    let log = synth.await.unwrap();

    assert_eq!(read_back.text("name"), Some("INIT VOICE"));
    assert_eq!(read_back.value("category"), Some(0));
    assert_eq!(read_back.value("bank"), Some(1));
    assert_eq!(read_back.value("number"), Some(7));
    for field in LAYOUT.fields.iter().filter(|f| !f.kind.is_text()) {
        let key = field.key.as_str();
        if key == "bank" || key == "number" {
            continue;
        }
        assert_eq!(read_back.value(key), original.value(key), "{key}");
    }

    let saved = log.saved.unwrap();
    assert_eq!(saved.len(), 2790);
    for (offset, byte) in MYSTERY_BYTES {
        assert_eq!(saved[offset], byte, "byte {offset}");
    }
    let mut decoded = Patch::new();
    decode_image(&saved, &mut decoded).unwrap();
    assert_eq!(decoded.text("name"), Some("INIT VOICE"));

    // Header twice, 22 chunks, save, footer twice; then header twice, the
    // request, 22 acks and the footer twice.
    let count = |want: &SysexCommand| log.commands.iter().filter(|c| *c == want).count();
    assert_eq!(count(&SysexCommand::Begin), 4);
    assert_eq!(count(&SysexCommand::End), 4);
    assert_eq!(count(&SysexCommand::SaveRequest), 1);
    let acks: Vec<u8> = log
        .commands
        .iter()
        .filter_map(|c| match c {
            SysexCommand::ChunkAck { position } => Some(*position),
            _ => None,
        })
        .collect();
    assert_eq!(acks, (0..22).collect::<Vec<u8>>());
    assert_eq!(log.commands.last(), Some(&SysexCommand::End));
}

#[tokio::test]
async fn silent_synth_times_out_and_closes_the_session() {
    let (mut host_tx, mut sent) = mpsc::unbounded::<Vec<u8>>();
    let (_keep_open, mut host_rx) = mpsc::unbounded::<Vec<u8>>();
    let cfg = SessionConfig {
        double_envelope: false,
        ..config()
    };
    let mut store = Patch::new();
    let result = read_patch(
        &cfg,
        0,
        0,
        Duration::from_millis(20),
        &mut host_rx,
        &mut host_tx,
        &mut store,
    )
    .await;
    assert!(matches!(result, Err(HydraError::Timeout)));
    drop(host_tx);
    let mut commands = vec![];
    while let Some(msg) = sent.next().await {
        commands.push(SysexCommand::from_midi(&msg).unwrap());
    }
    assert_eq!(
        commands,
        vec![
            SysexCommand::Begin,
            SysexCommand::DumpRequest { bank: 0, number: 0 },
            SysexCommand::End,
        ]
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn live_edits_reproduce_a_patch() {
    let mut source = Patch::init();
    source.set_value("filter1cutoff", 10);
    source.set_value("osc2semi", -7);
    source.set_value("modmatrix2modtarget", 5);
    source.set_value("macro4target2", 17);
    source.set_value("prefxtype", 3);
    source.set_value("prefx3param2", 20);
    source.set_value("lfo1bpmsync", 1);
    source.set_value("lfo1ratesyncon", 12);
    source.set_value("env2sustain", 40);

    let (mut tx, mut rx) = mpsc::unbounded::<Vec<u8>>();
    send_parameters(&config(), &source, &mut tx).await.unwrap();
    drop(tx);

    let mut target = Patch::init();
    let mut updates = 0;
    follow_edits(1, &mut rx, &mut target, |_| updates += 1).await;
    assert!(updates > 500);
    for key in [
        "filter1cutoff",
        "osc2semi",
        "modmatrix2modtarget",
        "macro4target2",
        "prefxtype",
        "prefx3param2",
        "lfo1bpmsync",
        "lfo1ratesyncon",
    ] {
        assert_eq!(target.value(key), source.value(key), "{key}");
    }
    // Sent unscaled, read back as if the synth had scaled it.
    assert_eq!(target.value("env2sustain"), Some(5));
}
