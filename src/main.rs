use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use futures::StreamExt;
use log::info;
use simple_error::bail;

use hydrasyx::hydrasynth::io::{play, read_patch, send_parameters, write_patch};
use hydrasyx::hydrasynth::session::{SessionConfig, WriteTarget};
use hydrasyx::hydrasynth::store::{range, text_len};
use hydrasyx::hydrasynth::control::{self, ActiveModes};
use hydrasyx::hydrasynth::{ParamStore, Patch, SysexCommand};
use hydrasyx::midi_io::{self, MidiSink, MidiStream};
use hydrasyx::nrpn::NrpnParser;
use hydrasyx::PGM;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// No log output at all.
    #[arg(short, long, global = true)]
    quiet: bool,
    /// MIDI channel the synth listens on.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16), global = true)]
    channel: u8,
    /// Out-of-sequence chunks tolerated while reading a patch.
    #[arg(long, default_value_t = 3, global = true)]
    retries: u32,
    /// Pause between chunks when writing, in milliseconds.
    #[arg(long, global = true)]
    chunk_pause_ms: Option<u64>,
    /// Send session header and footer once instead of twice.
    #[arg(long, global = true)]
    single_envelope: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List MIDI ports.
    List {},
    /// Listen to a port and display received MIDI. Useful for debugging.
    Listen {
        /// The name of the port to listen to. Use the list command to see ports.
        port_name: String,
    },
    /// Read a patch from the synth and print its parameters.
    Get {
        /// MIDI input port the synth replies on.
        input: String,
        /// MIDI output port the synth listens on.
        output: String,
        bank: u8,
        number: u8,
        /// Seconds to wait for each reply.
        #[arg(long, default_value_t = 5)]
        timeout: u64,
    },
    /// Write a patch file of `key = value` lines to the synth.
    Put {
        output: String,
        file: PathBuf,
        /// Store in BANK:NUMBER instead of loading into the edit buffer.
        #[arg(long, value_parser = parse_slot)]
        slot: Option<(u8, u8)>,
    },
    /// Send a patch file's parameters as live edits.
    SendAll { output: String, file: PathBuf },
    /// Set one parameter by live edit. Synced timing and effect parameter
    /// keys switch on their own sync flag or effect type first.
    Nrpn {
        output: String,
        key: String,
        value: i32,
    },
    /// Silence the synth on every channel.
    Panic { output: String },
}

fn parse_slot(s: &str) -> std::result::Result<(u8, u8), String> {
    let (bank, number) = s
        .split_once(':')
        .ok_or_else(|| "expected BANK:NUMBER".to_string())?;
    let bank = bank.parse::<u8>().map_err(|e| e.to_string())?;
    let number = number.parse::<u8>().map_err(|e| e.to_string())?;
    if number > 127 {
        return Err("patch number must be 0-127".to_string());
    }
    Ok((bank, number))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(usize::from(cli.verbose) + 1)
        .init()?;
    let config = SessionConfig {
        max_retries: cli.retries,
        chunk_pause: cli.chunk_pause_ms.map(Duration::from_millis),
        double_envelope: SessionConfig::default().double_envelope && !cli.single_envelope,
        channel: cli.channel,
        ..Default::default()
    };
    match &cli.command {
        Some(Commands::List {}) => list_ports(),
        Some(Commands::Listen { port_name }) => listen(port_name, cli.channel).await,
        Some(Commands::Get {
            input,
            output,
            bank,
            number,
            timeout,
        }) => get(&config, input, output, *bank, *number, *timeout).await,
        Some(Commands::Put { output, file, slot }) => {
            let target = match slot {
                Some((bank, number)) => WriteTarget::Slot {
                    bank: *bank,
                    number: *number,
                },
                None => WriteTarget::Current,
            };
            let patch = load_patch(file)?;
            let mut midi_out = MidiSink::bind(output)?;
            write_patch(&config, &patch, target, &mut midi_out).await?;
            Ok(())
        }
        Some(Commands::SendAll { output, file }) => {
            let patch = load_patch(file)?;
            let mut midi_out = MidiSink::bind(output)?;
            send_parameters(&config, &patch, &mut midi_out).await?;
            Ok(())
        }
        Some(Commands::Nrpn { output, key, value }) => set(&config, output, key, *value).await,
        Some(Commands::Panic { output }) => {
            let mut midi_out = MidiSink::bind(output)?;
            play(control::silence(), &mut midi_out).await?;
            Ok(())
        }
        None => Ok(()),
    }
}

fn list_ports() -> Result<()> {
    let in_ports = midi_io::input_ports()?;
    if in_ports.is_empty() {
        bail!("no input ports found");
    }
    println!("\nAvailable input ports:");
    for (i, p) in in_ports.iter().enumerate() {
        println!("{i}: {p}");
    }
    println!("\nAvailable output ports:");
    for (i, p) in midi_io::output_ports()?.iter().enumerate() {
        println!("{i}: {p}");
    }
    Ok(())
}

async fn listen(port_name: &str, channel: u8) -> Result<()> {
    let mut midi_in = MidiStream::bind(port_name)?;
    println!("Reading input from '{port_name}'. Press Ctrl-C to exit.");
    let mut parser = NrpnParser::new(channel);
    let mut patch = Patch::init();
    while let Some(msg) = midi_in.next().await {
        let hex: Vec<String> = msg.iter().map(|b| format!("{b:02X}")).collect();
        println!("{} (len={})", hex.join(" "), msg.len());
        if let Ok(cmd) = SysexCommand::from_midi(&msg) {
            println!("  {cmd:?}");
        } else if let Some(nrpn) = parser.feed(&msg) {
            match control::decode(&mut patch, nrpn) {
                Some(update) => println!("  {} = {}", update.key, update.value),
                None => println!("  unmapped {nrpn:?}"),
            }
        }
    }
    Ok(())
}

async fn get(
    config: &SessionConfig,
    input: &str,
    output: &str,
    bank: u8,
    number: u8,
    timeout: u64,
) -> Result<()> {
    let mut midi_in = MidiStream::bind(input)?;
    let mut midi_out = MidiSink::bind(output)?;
    let mut patch = Patch::new();
    let version = read_patch(
        config,
        bank,
        number,
        Duration::from_secs(timeout),
        &mut midi_in,
        &mut midi_out,
        &mut patch,
    )
    .await?;
    info!("{PGM} read a {version:?} patch");
    for (key, text) in patch.texts() {
        println!("{key} = {text}");
    }
    for (key, value) in patch.values() {
        println!("{key} = {value}");
    }
    Ok(())
}

async fn set(config: &SessionConfig, output: &str, key: &str, value: i32) -> Result<()> {
    let value = range(key).map_or(value, |(min, max)| value.clamp(min, max));
    let Some(nrpn) = control::encode_with(&ActiveModes::admitting(key), key, value) else {
        bail!("{} has no live-edit form", key);
    };
    let mut midi_out = MidiSink::bind(output)?;
    let plan = nrpn
        .to_midi(config.channel)
        .into_iter()
        .map(hydrasyx::hydrasynth::Outgoing::Midi)
        .collect();
    play(plan, &mut midi_out).await?;
    Ok(())
}

/// Reads `key = value` lines over an init patch. Blank lines and lines
/// starting with `#` are skipped.
fn load_patch(path: &PathBuf) -> Result<Patch> {
    let mut patch = Patch::init();
    for (n, line) in fs::read_to_string(path)?.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            bail!("line {}: expected key = value", n + 1);
        };
        let (key, value) = (key.trim(), value.trim());
        if text_len(key).is_some() {
            patch.set_text(key, value);
        } else {
            match value.parse::<i32>() {
                Ok(v) => patch.set_value(key, v),
                Err(_) => bail!("line {}: {} is not a number", n + 1, value),
            }
        }
    }
    Ok(patch)
}
