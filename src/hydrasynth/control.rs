//! Live-edit codec between store keys and NRPN messages.
//!
//! Encoding and decoding both depend on a few mode parameters that other
//! keys alias against: the two effect types pick which `prefx<T>param<P>`
//! keys the generic effect slots belong to, and the BPM sync flags pick
//! which of a pair of synced/unsynced timing keys is live. Those are
//! captured up front in [`ActiveModes`] rather than read from the store
//! mid-operation.

use std::time::Duration;

use log::{debug, trace};
use midi_control::{ControlEvent, MidiMessage};

use super::nrpn_map::{self, Codec, Gate, NrpnField, ALL_SOUNDS_OFF, FIELDS};
use super::remap::{MOD_DESTINATIONS, MOD_SOURCES};
use super::store::{parse_fx_param, ParamStore};
use super::Outgoing;
use crate::nrpn::{midi_bytes, midi_channel, Nrpn};

/// Flags that gate synced and unsynced timing parameters.
pub const SYNC_FLAGS: [&str; 12] = [
    "voicevibratobpm",
    "delaybpmsync",
    "lfo1bpmsync",
    "lfo2bpmsync",
    "lfo3bpmsync",
    "lfo4bpmsync",
    "lfo5bpmsync",
    "env1bpmsync",
    "env2bpmsync",
    "env3bpmsync",
    "env4bpmsync",
    "env5bpmsync",
];

const MAX_VALUE: i32 = 0x3FFF;

/// Snapshot of the mode parameters the codec consults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveModes {
    pub pre_fx_type: i32,
    pub post_fx_type: i32,
    /// Parallel to [`SYNC_FLAGS`].
    pub synced: [bool; SYNC_FLAGS.len()],
}

impl ActiveModes {
    pub fn capture<S: ParamStore + ?Sized>(store: &S) -> Self {
        let mut modes = ActiveModes {
            pre_fx_type: store.value("prefxtype").unwrap_or(0),
            post_fx_type: store.value("postfxtype").unwrap_or(0),
            ..Default::default()
        };
        for (on, flag) in modes.synced.iter_mut().zip(SYNC_FLAGS) {
            *on = store.value(flag).unwrap_or(0) != 0;
        }
        modes
    }

    /// Modes under which `key` is live: its own sync gate opened, and for
    /// an effect parameter, its effect type selected. Used to edit a single
    /// key with no patch context.
    pub fn admitting(key: &str) -> Self {
        let mut modes = ActiveModes::default();
        if let Some((fx_type, _)) = parse_fx_param(key) {
            if key.starts_with("post") {
                modes.post_fx_type = fx_type;
            } else {
                modes.pre_fx_type = fx_type;
            }
        } else if let Some(Gate::SyncOn(flag)) = nrpn_map::field(key).and_then(|f| f.gate) {
            modes.set_synced(flag, true);
        }
        modes
    }

    /// Sets a sync flag by name. Unknown names are ignored.
    pub fn set_synced(&mut self, flag: &str, on: bool) {
        if let Some(i) = SYNC_FLAGS.iter().position(|f| *f == flag) {
            self.synced[i] = on;
        }
    }

    pub fn is_synced(&self, flag: &str) -> bool {
        SYNC_FLAGS
            .iter()
            .position(|f| *f == flag)
            .map_or(false, |i| self.synced[i])
    }

    pub fn admits(&self, gate: Option<Gate>) -> bool {
        match gate {
            None => true,
            Some(g) => g.is_open(i32::from(self.is_synced(g.flag()))),
        }
    }

    fn fx_type(&self, post: bool) -> i32 {
        if post {
            self.post_fx_type
        } else {
            self.pre_fx_type
        }
    }
}

/// A decoded parameter change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub key: String,
    pub value: i32,
}

fn fx_prefix(post: bool) -> &'static str {
    if post {
        "postfx"
    } else {
        "prefx"
    }
}

/// Finds the wire field for a store key. Effect parameter keys resolve to
/// their generic slot only while their effect type is the current one.
fn resolve(modes: &ActiveModes, key: &str) -> Option<&'static NrpnField> {
    if let Some(field) = nrpn_map::field(key) {
        // The generic slots are not store keys.
        return match field.codec {
            Codec::FxParam { .. } => None,
            _ => Some(field),
        };
    }
    let (fx_type, param) = parse_fx_param(key)?;
    let post = key.starts_with("post");
    if fx_type <= 0 || fx_type != modes.fx_type(post) {
        trace!("{key} is not the current effect, not sent");
        return None;
    }
    nrpn_map::field(&format!("{}param{param}", fx_prefix(post)))
}

/// Encodes one key as an NRPN, given the current modes. Returns `None` for
/// keys without a wire representation and for keys gated off by a mode.
pub fn encode_with(modes: &ActiveModes, key: &str, value: i32) -> Option<Nrpn> {
    let field = resolve(modes, key)?;
    if !modes.admits(field.gate) {
        trace!("{key} gated off, not sent");
        return None;
    }
    let wire = match field.codec {
        Codec::Direct | Codec::Asymmetric => value,
        Codec::Scaled | Codec::FxParam { .. } => value * 8,
        Codec::Cents => {
            if value < 0 {
                value + 8192
            } else {
                value
            }
        }
        Codec::Register { selector, signed } => {
            let w = if signed && value < 0 { value + 128 } else { value };
            i32::from(selector) * 128 + (w & 0x7F)
        }
        Codec::ModSource => i32::from(remap_wire(key, MOD_SOURCES.wire(index(value)))?),
        Codec::ModDestination => {
            i32::from(remap_wire(key, MOD_DESTINATIONS.wire(index(value)))?)
        }
    };
    let nrpn = Nrpn::new(field.address, wire.clamp(0, MAX_VALUE) as u16);
    trace!("{key} = {value} -> {nrpn:?}");
    Some(nrpn)
}

fn index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn remap_wire(key: &str, wire: Option<u16>) -> Option<u16> {
    if wire.is_none() {
        debug!("{key}: index out of range, not sent");
    }
    wire
}

/// Picks which of the fields sharing an address a value refers to.
fn select(candidates: &[&'static NrpnField], value: u16) -> Option<&'static NrpnField> {
    let msb = (value >> 7) as u8;
    let first = *candidates.first()?;
    match first.codec {
        Codec::Register { .. } => candidates
            .iter()
            .find(|f| matches!(f.codec, Codec::Register { selector, .. } if selector == msb))
            .copied(),
        Codec::ModSource | Codec::ModDestination if candidates.len() > 1 => {
            let want_source = msb == 1 || msb == 3;
            candidates
                .iter()
                .find(|f| (f.codec == Codec::ModSource) == want_source)
                .copied()
        }
        _ => Some(first),
    }
}

/// Decodes one NRPN into the key and value it carries, given the current
/// modes. Unknown addresses and selectors, gated-off keys, and effect slots
/// with no effect selected all decode to `None`.
pub fn decode_with(modes: &ActiveModes, nrpn: Nrpn) -> Option<Update> {
    let candidates = nrpn_map::at_address(nrpn.address);
    if candidates.is_empty() {
        debug!("no parameter at NRPN {:#06x}", nrpn.address);
        return None;
    }
    let Some(field) = select(candidates, nrpn.value) else {
        debug!(
            "no parameter at NRPN {:#06x} for value {:#06x}",
            nrpn.address, nrpn.value
        );
        return None;
    };
    if !modes.admits(field.gate) {
        trace!("{} gated off, ignored", field.key);
        return None;
    }
    let wire = i32::from(nrpn.value);
    let mut key = field.key.to_string();
    let value = match field.codec {
        Codec::Direct => wire,
        Codec::Scaled | Codec::Asymmetric => wire / 8,
        Codec::Cents => {
            if wire >= 4096 {
                wire - 8192
            } else {
                wire
            }
        }
        Codec::Register { signed, .. } => {
            let w = wire & 0x7F;
            if signed && w >= 64 {
                w - 128
            } else {
                w
            }
        }
        Codec::ModSource => MOD_SOURCES.index(nrpn.value) as i32,
        Codec::ModDestination => MOD_DESTINATIONS.index(nrpn.value) as i32,
        Codec::FxParam { post } => {
            let fx_type = modes.fx_type(post);
            if fx_type <= 0 {
                trace!("{} with no effect selected, ignored", field.key);
                return None;
            }
            let slot = field.key.rsplit("param").next().unwrap_or("1");
            key = format!("{}{fx_type}param{slot}", fx_prefix(post));
            wire / 8
        }
    };
    trace!("{nrpn:?} -> {key} = {value}");
    Some(Update { key, value })
}

/// Encodes `key` using the modes currently held in `store`.
pub fn encode<S: ParamStore + ?Sized>(store: &S, key: &str) -> Option<Nrpn> {
    let value = store.value(key)?;
    encode_with(&ActiveModes::capture(store), key, value)
}

/// Decodes `nrpn` against `store`'s current modes and applies the result.
pub fn decode<S: ParamStore + ?Sized>(store: &mut S, nrpn: Nrpn) -> Option<Update> {
    let update = decode_with(&ActiveModes::capture(store), nrpn)?;
    store.set_value(&update.key, update.value);
    Some(update)
}

/// Every live-editable value of `store`, in address map order, ready to
/// send. The synth drops mod matrix messages that arrive too close
/// together, so each one is followed by `matrix_pause`.
pub fn send_all<S: ParamStore + ?Sized>(
    store: &S,
    channel: u8,
    matrix_pause: Duration,
) -> Vec<Outgoing> {
    let modes = ActiveModes::capture(store);
    let mut out = vec![];
    let mut push = |key: &str, value: i32, pause: bool| {
        if let Some(nrpn) = encode_with(&modes, key, value) {
            out.extend(nrpn.to_midi(channel).into_iter().map(Outgoing::Midi));
            if pause {
                out.push(Outgoing::Pause(matrix_pause));
            }
        }
    };
    for field in FIELDS.iter() {
        match field.codec {
            Codec::FxParam { post } => {
                let fx_type = modes.fx_type(post);
                let slot = field.key.rsplit("param").next().unwrap_or("1");
                let key = format!("{}{fx_type}param{slot}", fx_prefix(post));
                if let Some(value) = store.value(&key) {
                    push(&key, value, false);
                }
            }
            _ => {
                if let Some(value) = store.value(field.key) {
                    let matrix = field.key.starts_with("modmatrix")
                        && matches!(field.codec, Codec::ModSource | Codec::ModDestination);
                    push(field.key, value, matrix);
                }
            }
        }
    }
    debug!("send all: {} messages", out.len());
    out
}

/// The synth's all-sounds-off message.
pub fn all_sounds_off() -> Nrpn {
    Nrpn::new(ALL_SOUNDS_OFF, 0)
}

const CC_ALL_NOTES_OFF: u8 = 123;

/// Silences the synth whatever channel it listens on: All Notes Off on
/// every channel, then the all-sounds-off NRPN on every channel.
pub fn silence() -> Vec<Outgoing> {
    let notes_off = (1..=16).map(|ch| {
        midi_bytes(MidiMessage::ControlChange(
            midi_channel(ch),
            ControlEvent {
                control: CC_ALL_NOTES_OFF,
                value: 0,
            },
        ))
    });
    let sounds_off = (1..=16).flat_map(|ch| all_sounds_off().to_midi(ch));
    notes_off.chain(sounds_off).map(Outgoing::Midi).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrasynth::store::Patch;

    fn modes() -> ActiveModes {
        ActiveModes::default()
    }

    fn round_trip(modes: &ActiveModes, key: &str, value: i32) -> Update {
        let nrpn = encode_with(modes, key, value).unwrap();
        decode_with(modes, nrpn).unwrap()
    }

    #[test]
    fn arp_octave_destination_uses_the_table() {
        let nrpn = encode_with(&modes(), "modmatrix3modtarget", 5).unwrap();
        assert_eq!(nrpn.address, 0x3E * 128 + 0x02);
        assert_eq!(nrpn.value, 0x04 * 128 + 0x32);
        assert_eq!(nrpn.value, 562);
        let back = decode_with(&modes(), nrpn).unwrap();
        assert_eq!(back.key, "modmatrix3modtarget");
        assert_eq!(back.value, 5);
    }

    #[test]
    fn matrix_source_and_target_share_an_address() {
        let m = modes();
        let src = encode_with(&m, "modmatrix7modsource", 6).unwrap();
        let dst = encode_with(&m, "modmatrix7modtarget", 6).unwrap();
        assert_eq!(src.address, dst.address);
        assert_eq!(decode_with(&m, src).unwrap().key, "modmatrix7modsource");
        assert_eq!(decode_with(&m, dst).unwrap().key, "modmatrix7modtarget");
    }

    #[test]
    fn unknown_remap_values_decode_to_zero() {
        let address = nrpn_map::field("macro2target4").unwrap().address;
        let update = decode_with(&modes(), Nrpn::new(address, 0x3FFF)).unwrap();
        assert_eq!(update, Update { key: "macro2target4".into(), value: 0 });
    }

    #[test]
    fn sustain_alias_decodes_to_the_first_source() {
        let m = modes();
        let cc64 = (0..MOD_SOURCES.len())
            .find(|&i| MOD_SOURCES.name(i) == Some("CC 64"))
            .unwrap();
        let update = round_trip(&m, "modmatrix1modsource", cc64 as i32);
        assert_eq!(MOD_SOURCES.name(update.value as usize), Some("Sustain Ped"));
    }

    #[test]
    fn register_siblings_round_trip() {
        let m = modes();
        let cases = [
            ("osc2mode", 1),
            ("osc3semi", -24),
            ("osc1semi", 7),
            ("mutant4sourcefmlin", 3),
            ("ringmodsource2", 2),
            ("arpchance", 100),
            ("arpdivision", 4),
            ("ribbonglide", 90),
            ("osc2solowavscan6", 12),
            ("lfo3oneshot", 1),
            ("lfo1steps", 16),
            ("env2freerun", 1),
            ("env5reset", 1),
            ("env5bpmsync", 1),
            ("env1delaysyncoff", 100),
        ];
        for (key, value) in cases {
            assert_eq!(
                round_trip(&m, key, value),
                Update { key: key.into(), value },
                "{key}"
            );
        }
    }

    #[test]
    fn signed_register_offsets_by_128() {
        let nrpn = encode_with(&modes(), "osc2semi", -12).unwrap();
        assert_eq!(nrpn.value, 128 + 116);
    }

    #[test]
    fn shared_lfo_and_envelope_register_favours_the_lfo() {
        let lfo = nrpn_map::field("lfo1smooth").unwrap();
        let env = nrpn_map::field("env5loop").unwrap();
        assert_eq!(lfo.address, env.address);
        let nrpn = encode_with(&modes(), "env5loop", 1).unwrap();
        assert_eq!(decode_with(&modes(), nrpn).unwrap().key, "lfo1smooth");
    }

    #[test]
    fn unknown_selector_is_dropped() {
        let address = nrpn_map::field("arpdivision").unwrap().address;
        assert_eq!(decode_with(&modes(), Nrpn::new(address, 0x30 * 128 + 1)), None);
    }

    #[test]
    fn cents_use_a_14_bit_offset() {
        let m = modes();
        assert_eq!(encode_with(&m, "osc1cent", -50).unwrap().value, 8142);
        assert_eq!(encode_with(&m, "osc1cent", 50).unwrap().value, 50);
        assert_eq!(round_trip(&m, "osc3cent", -1).value, -1);
        assert_eq!(encode_with(&m, "allosccent", -50).unwrap().value, 8142);
        assert_eq!(
            round_trip(&m, "allosccent", -50),
            Update { key: "allosccent".into(), value: -50 }
        );
        assert_eq!(round_trip(&m, "allosccent", 50).value, 50);
    }

    #[test]
    fn scaling() {
        let m = modes();
        assert_eq!(encode_with(&m, "filter1cutoff", 100).unwrap().value, 800);
        assert_eq!(round_trip(&m, "filter1cutoff", 100).value, 100);
        // The synth sends sustain scaled but reads it unscaled.
        let sustain = encode_with(&m, "env1sustain", 100).unwrap();
        assert_eq!(sustain.value, 100);
        let incoming = Nrpn::new(sustain.address, 800);
        assert_eq!(decode_with(&m, incoming).unwrap().value, 100);
    }

    #[test]
    fn sync_gates_suppress_both_directions() {
        let mut m = modes();
        assert!(encode_with(&m, "lfo2ratesyncon", 10).is_none());
        let off = encode_with(&m, "lfo2ratesyncoff", 10).unwrap();
        m.set_synced("lfo2bpmsync", true);
        assert!(encode_with(&m, "lfo2ratesyncoff", 10).is_none());
        assert_eq!(decode_with(&m, off), None);
        let on = encode_with(&m, "lfo2ratesyncon", 10).unwrap();
        assert_eq!(decode_with(&m, on).unwrap().key, "lfo2ratesyncon");

        m.set_synced("voicevibratobpm", true);
        assert!(encode_with(&m, "voicevibratoratesyncoff", 3).is_none());
        assert!(encode_with(&m, "voicevibratoratesyncon", 3).is_some());
    }

    #[test]
    fn delay_time_follows_its_sync_flag() {
        let mut m = modes();
        assert!(encode_with(&m, "delaytimesyncon", 20).is_none());
        let off = encode_with(&m, "delaytimesyncoff", 20).unwrap();
        let on_address = nrpn_map::field("delaytimesyncon").unwrap().address;
        assert_eq!(decode_with(&m, Nrpn::new(on_address, 160)), None);
        assert_eq!(decode_with(&m, off).unwrap().key, "delaytimesyncoff");

        m.set_synced("delaybpmsync", true);
        assert!(encode_with(&m, "delaytimesyncoff", 20).is_none());
        assert_eq!(decode_with(&m, off), None);
        let on = encode_with(&m, "delaytimesyncon", 20).unwrap();
        assert_eq!(on.address, on_address);
        assert_eq!(
            decode_with(&m, on),
            Some(Update { key: "delaytimesyncon".into(), value: 20 })
        );
    }

    #[test]
    fn envelope_delay_register_follows_its_sync_flag() {
        let off_field = nrpn_map::field("env3delaysyncoff").unwrap();
        let on_field = nrpn_map::field("env3delaysyncon").unwrap();
        assert_eq!(off_field.address, on_field.address);
        let off_msg = Nrpn::new(off_field.address, 0x08 * 128 + 30);
        let on_msg = Nrpn::new(on_field.address, 0x18 * 128 + 30);

        let mut m = modes();
        assert!(encode_with(&m, "env3delaysyncon", 30).is_none());
        assert_eq!(encode_with(&m, "env3delaysyncoff", 30), Some(off_msg));
        assert_eq!(decode_with(&m, on_msg), None);
        assert_eq!(decode_with(&m, off_msg).unwrap().key, "env3delaysyncoff");

        m.set_synced("env3bpmsync", true);
        assert!(encode_with(&m, "env3delaysyncoff", 30).is_none());
        assert_eq!(encode_with(&m, "env3delaysyncon", 30), Some(on_msg));
        assert_eq!(decode_with(&m, off_msg), None);
        assert_eq!(
            decode_with(&m, on_msg),
            Some(Update { key: "env3delaysyncon".into(), value: 30 })
        );
        // Another envelope's flag does not open this one.
        m.set_synced("env3bpmsync", false);
        m.set_synced("env4bpmsync", true);
        assert_eq!(decode_with(&m, on_msg), None);
    }

    #[test]
    fn fx_params_follow_the_current_type() {
        let mut m = modes();
        m.pre_fx_type = 3;
        m.post_fx_type = 0;
        assert!(encode_with(&m, "prefx2param1", 10).is_none());
        let nrpn = encode_with(&m, "prefx3param4", 10).unwrap();
        assert_eq!(nrpn.address, nrpn_map::field("prefxparam4").unwrap().address);
        assert_eq!(nrpn.value, 80);
        assert_eq!(
            decode_with(&m, nrpn),
            Some(Update { key: "prefx3param4".into(), value: 10 })
        );

        assert!(encode_with(&m, "postfx1param1", 10).is_none());
        let slot = nrpn_map::field("postfxparam1").unwrap().address;
        assert_eq!(decode_with(&m, Nrpn::new(slot, 80)), None);
        assert!(encode_with(&m, "prefxparam1", 10).is_none());
    }

    #[test]
    fn single_keys_open_their_own_mode() {
        let on = ActiveModes::admitting("lfo2ratesyncon");
        assert!(on.is_synced("lfo2bpmsync"));
        assert!(encode_with(&on, "lfo2ratesyncon", 10).is_some());
        let off = ActiveModes::admitting("lfo2ratesyncoff");
        assert!(!off.is_synced("lfo2bpmsync"));
        assert!(encode_with(&off, "lfo2ratesyncoff", 10).is_some());

        let fx = ActiveModes::admitting("postfx6param3");
        assert_eq!((fx.pre_fx_type, fx.post_fx_type), (0, 6));
        let nrpn = encode_with(&fx, "postfx6param3", 12).unwrap();
        assert_eq!(nrpn.address, nrpn_map::field("postfxparam3").unwrap().address);
        assert_eq!(ActiveModes::admitting("filter1cutoff"), modes());
    }

    #[test]
    fn keys_without_wire_form() {
        let m = modes();
        for key in ["name", "category", "color", "bank", "number", "macro1name"] {
            assert!(encode_with(&m, key, 1).is_none(), "{key}");
        }
        assert_eq!(decode_with(&m, Nrpn::new(0, 0)), None);
    }

    #[test]
    fn store_wrappers_apply_updates() {
        let mut p = Patch::init();
        p.set_value("postfxtype", 8);
        let nrpn = Nrpn::new(nrpn_map::field("postfxparam1").unwrap().address, 900 * 8);
        let update = decode(&mut p, nrpn).unwrap();
        assert_eq!(update.key, "postfx8param1");
        assert_eq!(p.value("postfx8param1"), Some(900));
        assert_eq!(encode(&p, "postfx8param1"), Some(nrpn));
    }

    #[test]
    fn send_all_pauses_after_matrix_messages() {
        let mut p = Patch::init();
        p.set_value("prefxtype", 2);
        let pause = Duration::from_millis(50);
        let out = send_all(&p, 1, pause);
        let pauses = out.iter().filter(|o| **o == Outgoing::Pause(pause)).count();
        // 32 matrix slots, source and target each.
        assert_eq!(pauses, 64);
        assert!(out.iter().all(|o| match o {
            Outgoing::Midi(m) => m.len() == 3 && m[0] == 0xB0,
            Outgoing::Pause(_) => true,
            Outgoing::Sysex(_) => false,
        }));
        // Only the current pre effect's parameters are sent.
        let slot = nrpn_map::field("prefxparam1").unwrap().address;
        let slot_msgs = out
            .iter()
            .filter(|o| **o == Outgoing::Midi(vec![0xB0, 99, (slot >> 7) as u8]))
            .count();
        assert!(slot_msgs >= 1);
    }

    #[test]
    fn all_sounds_off_is_an_nrpn() {
        assert_eq!(
            all_sounds_off().to_midi(1),
            vec![vec![0xB0, 99, 0x3F], vec![0xB0, 98, 0x57], vec![0xB0, 6, 0], vec![0xB0, 38, 0]]
        );
    }

    #[test]
    fn silence_covers_every_channel() {
        let out = silence();
        assert_eq!(out.len(), 16 + 16 * 4);
        for ch in 0..16u8 {
            assert_eq!(out[usize::from(ch)], Outgoing::Midi(vec![0xB0 | ch, 123, 0]));
            let nrpn = &out[16 + 4 * usize::from(ch)..16 + 4 * usize::from(ch) + 4];
            assert_eq!(nrpn[0], Outgoing::Midi(vec![0xB0 | ch, 99, 0x3F]));
            assert_eq!(nrpn[1], Outgoing::Midi(vec![0xB0 | ch, 98, 0x57]));
            assert_eq!(nrpn[3], Outgoing::Midi(vec![0xB0 | ch, 38, 0]));
        }
    }
}
