//! The NRPN address map.
//!
//! One entry per live-editable parameter, in the order the synth's NRPN
//! chart lists them (which is also the order a full send uses). Several
//! parameters share an address; they are told apart by a selector in the
//! value's MSB, or for the mod matrix by the remap table the value belongs
//! to.
//!
//! The chart misnames two runs of entries: LFO 4 steps 1-8 appear as LFO 3
//! steps, and macro 6 targets appear as a second copy of macro 5 targets at
//! macro 5's addresses. Both are corrected here.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// How a parameter's value is carried in the 14-bit NRPN value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Direct,
    /// Multiplied by 8 on the wire.
    Scaled,
    /// 14-bit offset: negative values have 8192 added.
    Cents,
    /// Shared address; `selector` goes in the MSB, the value in the LSB.
    /// Signed values below zero have 128 added.
    Register { selector: u8, signed: bool },
    ModSource,
    ModDestination,
    /// The synth sends these multiplied by 8 but does not divide what it
    /// receives, so they go out unscaled and come in scaled.
    Asymmetric,
    /// One of the five generic effect parameter slots. Which
    /// `prefx<T>param<P>` key it means depends on the current effect type.
    FxParam { post: bool },
}

/// A parameter that only exists while a BPM sync flag has a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    SyncOn(&'static str),
    SyncOff(&'static str),
}

impl Gate {
    pub fn flag(self) -> &'static str {
        match self {
            Gate::SyncOn(flag) | Gate::SyncOff(flag) => flag,
        }
    }

    /// Whether the gated parameter is live given the flag's value.
    pub fn is_open(self, flag_value: i32) -> bool {
        match self {
            Gate::SyncOn(_) => flag_value != 0,
            Gate::SyncOff(_) => flag_value == 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NrpnField {
    pub key: &'static str,
    pub address: u16,
    pub codec: Codec,
    pub gate: Option<Gate>,
}

impl NrpnField {
    const fn sync_on(self, flag: &'static str) -> Self {
        NrpnField {
            gate: Some(Gate::SyncOn(flag)),
            ..self
        }
    }

    const fn sync_off(self, flag: &'static str) -> Self {
        NrpnField {
            gate: Some(Gate::SyncOff(flag)),
            ..self
        }
    }
}

const DIRECT: Codec = Codec::Direct;
const SCALED: Codec = Codec::Scaled;
const CENTS: Codec = Codec::Cents;
const MOD_SOURCE: Codec = Codec::ModSource;
const MOD_DESTINATION: Codec = Codec::ModDestination;
const ASYMMETRIC: Codec = Codec::Asymmetric;
const PRE_FX_PARAM: Codec = Codec::FxParam { post: false };
const POST_FX_PARAM: Codec = Codec::FxParam { post: true };

const fn f(key: &'static str, msb: u16, lsb: u16, codec: Codec) -> NrpnField {
    NrpnField {
        key,
        address: msb * 128 + lsb,
        codec,
        gate: None,
    }
}

const fn reg(key: &'static str, msb: u16, lsb: u16, selector: u8) -> NrpnField {
    f(key, msb, lsb, Codec::Register { selector, signed: false })
}

const fn signed_reg(key: &'static str, msb: u16, lsb: u16, selector: u8) -> NrpnField {
    f(key, msb, lsb, Codec::Register { selector, signed: true })
}

/// The synth's answer to All Sounds Off, since it uses CC 120 for the
/// arpeggiator octave.
pub const ALL_SOUNDS_OFF: u16 = 0x3F * 128 + 0x57;

/// Looks up a parameter by key.
pub fn field(key: &str) -> Option<&'static NrpnField> {
    BY_KEY.get(key).copied()
}

/// All parameters sharing `address`, in table order.
pub fn at_address(address: u16) -> &'static [&'static NrpnField] {
    BY_ADDRESS.get(&address).map_or(&[], |v| v.as_slice())
}

static BY_KEY: Lazy<HashMap<&'static str, &'static NrpnField>> =
    Lazy::new(|| FIELDS.iter().map(|f| (f.key, f)).collect());

static BY_ADDRESS: Lazy<HashMap<u16, Vec<&'static NrpnField>>> = Lazy::new(|| {
    let mut map: HashMap<u16, Vec<&'static NrpnField>> = HashMap::new();
    for f in FIELDS.iter() {
        map.entry(f.address).or_default().push(f);
    }
    map
});

pub static FIELDS: [NrpnField; 1026] = [
    f("allosccent", 0x41, 0x04, CENTS),
    reg("osc1mode", 0x3F, 0x18, 0),
    reg("osc2mode", 0x3F, 0x18, 1),
    reg("osc3mode", 0x3F, 0x18, 2),
    signed_reg("osc1semi", 0x3F, 0x11, 0),
    signed_reg("osc2semi", 0x3F, 0x11, 1),
    signed_reg("osc3semi", 0x3F, 0x11, 2),
    f("osc1type", 0x3F, 0x19, DIRECT),
    f("osc1cent", 0x41, 0x01, CENTS),
    f("osc1keytrack", 0x3F, 0x54, DIRECT),
    f("osc1wavscan", 0x41, 0x2A, SCALED),
    reg("osc1solowavscan1", 0x3F, 0x1B, 0),
    reg("osc1solowavscan2", 0x3F, 0x1B, 1),
    reg("osc1solowavscan3", 0x3F, 0x1B, 2),
    reg("osc1solowavscan4", 0x3F, 0x1B, 3),
    reg("osc1solowavscan5", 0x3F, 0x1B, 4),
    reg("osc1solowavscan6", 0x3F, 0x1B, 5),
    reg("osc1solowavscan7", 0x3F, 0x1B, 6),
    reg("osc1solowavscan8", 0x3F, 0x1B, 7),
    f("osc1wavscanwave1", 0x3F, 0x60, DIRECT),
    f("osc1wavscanwave2", 0x3F, 0x61, DIRECT),
    f("osc1wavscanwave3", 0x3F, 0x62, DIRECT),
    f("osc1wavscanwave4", 0x3F, 0x63, DIRECT),
    f("osc1wavscanwave5", 0x3F, 0x64, DIRECT),
    f("osc1wavscanwave6", 0x3F, 0x65, DIRECT),
    f("osc1wavscanwave7", 0x3F, 0x66, DIRECT),
    f("osc1wavscanwave8", 0x3F, 0x67, DIRECT),
    f("osc2type", 0x3F, 0x1A, DIRECT),
    f("osc2cent", 0x41, 0x02, CENTS),
    f("osc2keytrack", 0x3F, 0x55, DIRECT),
    f("osc2wavscan", 0x41, 0x2B, SCALED),
    reg("osc2solowavscan1", 0x3F, 0x1C, 0),
    reg("osc2solowavscan2", 0x3F, 0x1C, 1),
    reg("osc2solowavscan3", 0x3F, 0x1C, 2),
    reg("osc2solowavscan4", 0x3F, 0x1C, 3),
    reg("osc2solowavscan5", 0x3F, 0x1C, 4),
    reg("osc2solowavscan6", 0x3F, 0x1C, 5),
    reg("osc2solowavscan7", 0x3F, 0x1C, 6),
    reg("osc2solowavscan8", 0x3F, 0x1C, 7),
    f("osc2wavscanwave1", 0x3F, 0x68, DIRECT),
    f("osc2wavscanwave2", 0x3F, 0x69, DIRECT),
    f("osc2wavscanwave3", 0x3F, 0x6A, DIRECT),
    f("osc2wavscanwave4", 0x3F, 0x6B, DIRECT),
    f("osc2wavscanwave5", 0x3F, 0x6C, DIRECT),
    f("osc2wavscanwave6", 0x3F, 0x6D, DIRECT),
    f("osc2wavscanwave7", 0x3F, 0x6E, DIRECT),
    f("osc2wavscanwave8", 0x3F, 0x6F, DIRECT),
    f("osc3type", 0x3F, 0x0D, DIRECT),
    f("osc3cent", 0x41, 0x03, CENTS),
    f("osc3keytrack", 0x3F, 0x56, DIRECT),
    reg("mutant1mode", 0x3F, 0x21, 0),
    reg("mutant2mode", 0x3F, 0x21, 1),
    reg("mutant3mode", 0x3F, 0x21, 2),
    reg("mutant4mode", 0x3F, 0x21, 3),
    reg("mutant1sourcefmlin", 0x3F, 0x24, 0),
    reg("mutant2sourcefmlin", 0x3F, 0x24, 1),
    reg("mutant3sourcefmlin", 0x3F, 0x24, 2),
    reg("mutant4sourcefmlin", 0x3F, 0x24, 3),
    reg("mutant1sourceoscsync", 0x3F, 0x22, 0),
    reg("mutant2sourceoscsync", 0x3F, 0x22, 1),
    reg("mutant3sourceoscsync", 0x3F, 0x22, 2),
    reg("mutant4sourceoscsync", 0x3F, 0x22, 3),
    f("mutant1ratio", 0x41, 0x2C, SCALED),
    f("mutant1depth", 0x40, 0x1F, SCALED),
    f("mutant1wet", 0x40, 0x22, SCALED),
    f("mutant1feedback", 0x40, 0x25, SCALED),
    f("mutant1window", 0x40, 0x1C, SCALED),
    f("mutant1warp1", 0x40, 0x60, SCALED),
    f("mutant1warp2", 0x40, 0x61, SCALED),
    f("mutant1warp3", 0x40, 0x62, SCALED),
    f("mutant1warp4", 0x40, 0x63, SCALED),
    f("mutant1warp5", 0x40, 0x64, SCALED),
    f("mutant1warp6", 0x40, 0x65, SCALED),
    f("mutant1warp7", 0x40, 0x66, SCALED),
    f("mutant1warp8", 0x40, 0x67, SCALED),
    f("mutant2ratio", 0x41, 0x2D, SCALED),
    f("mutant2depth", 0x40, 0x20, SCALED),
    f("mutant2wet", 0x40, 0x23, SCALED),
    f("mutant2feedback", 0x40, 0x26, SCALED),
    f("mutant2window", 0x40, 0x1D, SCALED),
    f("mutant2warp1", 0x40, 0x68, SCALED),
    f("mutant2warp2", 0x40, 0x69, SCALED),
    f("mutant2warp3", 0x40, 0x6A, SCALED),
    f("mutant2warp4", 0x40, 0x6B, SCALED),
    f("mutant2warp5", 0x40, 0x6C, SCALED),
    f("mutant2warp6", 0x40, 0x6D, SCALED),
    f("mutant2warp7", 0x40, 0x6E, SCALED),
    f("mutant2warp8", 0x40, 0x6F, SCALED),
    f("mutant3ratio", 0x41, 0x2E, SCALED),
    f("mutant3depth", 0x40, 0x21, SCALED),
    f("mutant3wet", 0x40, 0x24, SCALED),
    f("mutant3feedback", 0x40, 0x27, SCALED),
    f("mutant3window", 0x40, 0x1E, SCALED),
    f("mutant3warp1", 0x40, 0x70, SCALED),
    f("mutant3warp2", 0x40, 0x71, SCALED),
    f("mutant3warp3", 0x40, 0x72, SCALED),
    f("mutant3warp4", 0x40, 0x73, SCALED),
    f("mutant3warp5", 0x40, 0x74, SCALED),
    f("mutant3warp6", 0x40, 0x75, SCALED),
    f("mutant3warp7", 0x40, 0x76, SCALED),
    f("mutant3warp8", 0x40, 0x77, SCALED),
    f("mutant4ratio", 0x41, 0x2F, SCALED),
    f("mutant4depth", 0x40, 0x16, SCALED),
    f("mutant4wet", 0x40, 0x17, SCALED),
    f("mutant4feedback", 0x40, 0x1B, SCALED),
    f("mutant4window", 0x40, 0x1A, SCALED),
    f("mutant4warp1", 0x40, 0x78, SCALED),
    f("mutant4warp2", 0x40, 0x79, SCALED),
    f("mutant4warp3", 0x40, 0x7A, SCALED),
    f("mutant4warp4", 0x40, 0x7B, SCALED),
    f("mutant4warp5", 0x40, 0x7C, SCALED),
    f("mutant4warp6", 0x40, 0x7D, SCALED),
    f("mutant4warp7", 0x40, 0x7E, SCALED),
    f("mutant4warp8", 0x40, 0x7F, SCALED),
    f("noisetype", 0x3F, 0x27, DIRECT),
    f("ringmoddepth", 0x40, 0x03, SCALED),
    reg("ringmodsource1", 0x3F, 0x26, 0),
    reg("ringmodsource2", 0x3F, 0x26, 1),
    f("mixersolo", 0x3F, 0x25, SCALED),
    f("mixerosc1vol", 0x40, 0x07, SCALED),
    f("mixerosc1pan", 0x40, 0x08, SCALED),
    f("mixerosc1filterratio", 0x40, 0x31, SCALED),
    f("mixerosc2vol", 0x40, 0x09, SCALED),
    f("mixerosc2pan", 0x40, 0x0A, SCALED),
    f("mixerosc2filterratio", 0x40, 0x32, SCALED),
    f("mixerosc3vol", 0x40, 0x0B, SCALED),
    f("mixerosc3pan", 0x40, 0x0C, SCALED),
    f("mixerosc3filterratio", 0x40, 0x33, SCALED),
    f("mixernoisevol", 0x40, 0x0D, SCALED),
    f("mixernoisepan", 0x40, 0x0E, SCALED),
    f("mixernoisefilterratio", 0x40, 0x34, SCALED),
    f("mixerringmodvol", 0x40, 0x01, SCALED),
    f("mixerringmodpan", 0x40, 0x04, SCALED),
    f("mixerringmodfilterratio", 0x40, 0x35, SCALED),
    f("mixerfilterrouting", 0x3F, 0x2C, DIRECT),
    f("filter1positionofdrive", 0x3F, 0x29, DIRECT),
    f("filter1cutoff", 0x40, 0x28, SCALED),
    f("filter1drive", 0x40, 0x2B, SCALED),
    f("filter1resonance", 0x40, 0x29, SCALED),
    f("filter1special", 0x40, 0x2A, SCALED),
    f("filter1keytrack", 0x41, 0x66, SCALED),
    f("filter1lfo1amount", 0x41, 0x60, SCALED),
    f("filter1vowelorder", 0x3F, 0x2E, DIRECT),
    f("filter1type", 0x3F, 0x28, DIRECT),
    f("filter1velenv", 0x41, 0x69, SCALED),
    f("filter1env1amount", 0x41, 0x61, SCALED),
    f("filter2positionofdrive", 0x3F, 0x2B, DIRECT),
    f("filter2cutoff", 0x40, 0x2C, SCALED),
    f("filter2resonance", 0x40, 0x2D, SCALED),
    f("filter2morph", 0x40, 0x2E, SCALED),
    f("filter2keytrack", 0x41, 0x67, SCALED),
    f("filter2lfo1amount", 0x41, 0x62, SCALED),
    f("filter2velenv", 0x41, 0x6A, SCALED),
    f("filter2env1amount", 0x41, 0x63, SCALED),
    f("filter2type", 0x3F, 0x23, DIRECT),
    f("amplevel", 0x40, 0x02, SCALED),
    f("ampvelenv", 0x41, 0x6B, SCALED),
    f("amplfo2amount", 0x41, 0x64, SCALED),
    f("prefxtype", 0x3B, 0x7F, SCALED),
    f("prefxpreset", 0x3B, 0x00, SCALED),
    f("prefxwet", 0x41, 0x6E, SCALED),
    f("prefxparam1", 0x41, 0x6F, PRE_FX_PARAM),
    f("prefxparam2", 0x41, 0x70, PRE_FX_PARAM),
    f("prefxparam3", 0x3B, 0x30, PRE_FX_PARAM),
    f("prefxparam4", 0x3B, 0x40, PRE_FX_PARAM),
    f("prefxparam5", 0x3B, 0x50, PRE_FX_PARAM),
    f("prefxsidechain", 0x3B, 0x73, SCALED),
    f("delaybpmsync", 0x3B, 0x70, SCALED),
    f("delaywet", 0x41, 0x78, SCALED),
    f("delayfeedback", 0x41, 0x75, SCALED),
    f("delayfeedtone", 0x41, 0x76, SCALED),
    f("delaytimesyncoff", 0x41, 0x74, SCALED).sync_off("delaybpmsync"),
    f("delaytimesyncon", 0x43, 0x74, SCALED).sync_on("delaybpmsync"),
    f("delaytype", 0x3B, 0x71, SCALED),
    f("delaywettone", 0x41, 0x77, SCALED),
    f("reverbwet", 0x41, 0x7E, SCALED),
    f("reverbhidamp", 0x41, 0x7B, SCALED),
    f("reverblodamp", 0x41, 0x7C, SCALED),
    f("reverbpredelay", 0x41, 0x7D, SCALED),
    f("reverbtime", 0x41, 0x79, SCALED),
    f("reverbtone", 0x41, 0x7A, SCALED),
    f("reverbtype", 0x3C, 0x72, SCALED),
    f("postfxtype", 0x3C, 0x7F, SCALED),
    f("postfxpreset", 0x3C, 0x00, SCALED),
    f("postfxwet", 0x41, 0x71, SCALED),
    f("postfxparam1", 0x41, 0x72, POST_FX_PARAM),
    f("postfxparam2", 0x41, 0x73, POST_FX_PARAM),
    f("postfxparam3", 0x3C, 0x30, POST_FX_PARAM),
    f("postfxparam4", 0x3C, 0x40, POST_FX_PARAM),
    f("postfxparam5", 0x3C, 0x50, POST_FX_PARAM),
    f("postfxsidechain", 0x3C, 0x73, SCALED),
    f("lfo1level", 0x41, 0x0B, SCALED),
    reg("lfo1wave", 0x3F, 0x04, 0x00),
    reg("lfo1bpmsync", 0x3F, 0x04, 0x01),
    reg("lfo1trigsync", 0x3F, 0x04, 0x03),
    reg("lfo1smooth", 0x3F, 0x04, 0x06),
    reg("lfo1steps", 0x3F, 0x04, 0x07),
    reg("lfo1delaysyncoff", 0x3F, 0x04, 0x11).sync_off("lfo1bpmsync"),
    reg("lfo1fadeinsyncoff", 0x3F, 0x04, 0x12).sync_off("lfo1bpmsync"),
    reg("lfo1delaysyncon", 0x3F, 0x04, 0x21).sync_on("lfo1bpmsync"),
    reg("lfo1fadeinsyncon", 0x3F, 0x04, 0x13).sync_on("lfo1bpmsync"),
    reg("lfo1oneshot", 0x3F, 0x04, 0x14),
    f("lfo1phase", 0x3F, 0x30, DIRECT),
    f("lfo1ratesyncoff", 0x41, 0x05, SCALED).sync_off("lfo1bpmsync"),
    f("lfo1ratesyncon", 0x43, 0x05, SCALED).sync_on("lfo1bpmsync"),
    f("lfo1step1", 0x3A, 0x10, SCALED),
    f("lfo1step2", 0x3A, 0x11, SCALED),
    f("lfo1step3", 0x3A, 0x12, SCALED),
    f("lfo1step4", 0x3A, 0x13, SCALED),
    f("lfo1step5", 0x3A, 0x14, SCALED),
    f("lfo1step6", 0x3A, 0x15, SCALED),
    f("lfo1step7", 0x3A, 0x16, SCALED),
    f("lfo1step8", 0x3A, 0x17, SCALED),
    f("lfo1step9", 0x4A, 0x00, SCALED),
    f("lfo1step10", 0x4A, 0x01, SCALED),
    f("lfo1step11", 0x4A, 0x02, SCALED),
    f("lfo1step12", 0x4A, 0x03, SCALED),
    f("lfo1step13", 0x4A, 0x04, SCALED),
    f("lfo1step14", 0x4A, 0x05, SCALED),
    f("lfo1step15", 0x4A, 0x06, SCALED),
    f("lfo1step16", 0x4A, 0x07, SCALED),
    f("lfo1step17", 0x4A, 0x08, SCALED),
    f("lfo1step18", 0x4A, 0x09, SCALED),
    f("lfo1step19", 0x4A, 0x0A, SCALED),
    f("lfo1step20", 0x4A, 0x0B, SCALED),
    f("lfo1step21", 0x4A, 0x0C, SCALED),
    f("lfo1step22", 0x4A, 0x0D, SCALED),
    f("lfo1step23", 0x4A, 0x0E, SCALED),
    f("lfo1step24", 0x4A, 0x0F, SCALED),
    f("lfo1step25", 0x4A, 0x10, SCALED),
    f("lfo1step26", 0x4A, 0x11, SCALED),
    f("lfo1step27", 0x4A, 0x12, SCALED),
    f("lfo1step28", 0x4A, 0x13, SCALED),
    f("lfo1step29", 0x4A, 0x14, SCALED),
    f("lfo1step30", 0x4A, 0x15, SCALED),
    f("lfo1step31", 0x4A, 0x16, SCALED),
    f("lfo1step32", 0x4A, 0x17, SCALED),
    f("lfo1step33", 0x4A, 0x18, SCALED),
    f("lfo1step34", 0x4A, 0x19, SCALED),
    f("lfo1step35", 0x4A, 0x1A, SCALED),
    f("lfo1step36", 0x4A, 0x1B, SCALED),
    f("lfo1step37", 0x4A, 0x1C, SCALED),
    f("lfo1step38", 0x4A, 0x1D, SCALED),
    f("lfo1step39", 0x4A, 0x1E, SCALED),
    f("lfo1step40", 0x4A, 0x1F, SCALED),
    f("lfo1step41", 0x4A, 0x20, SCALED),
    f("lfo1step42", 0x4A, 0x21, SCALED),
    f("lfo1step43", 0x4A, 0x22, SCALED),
    f("lfo1step44", 0x4A, 0x23, SCALED),
    f("lfo1step45", 0x4A, 0x24, SCALED),
    f("lfo1step46", 0x4A, 0x25, SCALED),
    f("lfo1step47", 0x4A, 0x26, SCALED),
    f("lfo1step48", 0x4A, 0x27, SCALED),
    f("lfo1step49", 0x4A, 0x28, SCALED),
    f("lfo1step50", 0x4A, 0x29, SCALED),
    f("lfo1step51", 0x4A, 0x2A, SCALED),
    f("lfo1step52", 0x4A, 0x2B, SCALED),
    f("lfo1step53", 0x4A, 0x2C, SCALED),
    f("lfo1step54", 0x4A, 0x2D, SCALED),
    f("lfo1step55", 0x4A, 0x2E, SCALED),
    f("lfo1step56", 0x4A, 0x2F, SCALED),
    f("lfo1step57", 0x4A, 0x30, SCALED),
    f("lfo1step58", 0x4A, 0x31, SCALED),
    f("lfo1step59", 0x4A, 0x32, SCALED),
    f("lfo1step60", 0x4A, 0x33, SCALED),
    f("lfo1step61", 0x4A, 0x34, SCALED),
    f("lfo1step62", 0x4A, 0x35, SCALED),
    f("lfo1step63", 0x4A, 0x36, SCALED),
    f("lfo1step64", 0x4A, 0x37, SCALED),
    f("lfo2level", 0x41, 0x0C, SCALED),
    reg("lfo2wave", 0x3F, 0x05, 0x00),
    reg("lfo2bpmsync", 0x3F, 0x05, 0x01),
    reg("lfo2trigsync", 0x3F, 0x05, 0x03),
    reg("lfo2smooth", 0x3F, 0x05, 0x06),
    reg("lfo2steps", 0x3F, 0x05, 0x07),
    reg("lfo2delaysyncoff", 0x3F, 0x05, 0x11).sync_off("lfo2bpmsync"),
    reg("lfo2fadeinsyncoff", 0x3F, 0x05, 0x12).sync_off("lfo2bpmsync"),
    reg("lfo2delaysyncon", 0x3F, 0x05, 0x21).sync_on("lfo2bpmsync"),
    reg("lfo2fadeinsyncon", 0x3F, 0x05, 0x13).sync_on("lfo2bpmsync"),
    reg("lfo2oneshot", 0x3F, 0x05, 0x14),
    f("lfo2phase", 0x3F, 0x31, DIRECT),
    f("lfo2ratesyncoff", 0x41, 0x06, SCALED).sync_off("lfo2bpmsync"),
    f("lfo2ratesyncon", 0x43, 0x06, SCALED).sync_on("lfo2bpmsync"),
    f("lfo2step1", 0x3A, 0x18, SCALED),
    f("lfo2step2", 0x3A, 0x19, SCALED),
    f("lfo2step3", 0x3A, 0x1A, SCALED),
    f("lfo2step4", 0x3A, 0x1B, SCALED),
    f("lfo2step5", 0x3A, 0x1C, SCALED),
    f("lfo2step6", 0x3A, 0x1D, SCALED),
    f("lfo2step7", 0x3A, 0x1E, SCALED),
    f("lfo2step8", 0x3A, 0x1F, SCALED),
    f("lfo2step9", 0x4A, 0x40, SCALED),
    f("lfo2step10", 0x4A, 0x41, SCALED),
    f("lfo2step11", 0x4A, 0x42, SCALED),
    f("lfo2step12", 0x4A, 0x43, SCALED),
    f("lfo2step13", 0x4A, 0x44, SCALED),
    f("lfo2step14", 0x4A, 0x45, SCALED),
    f("lfo2step15", 0x4A, 0x46, SCALED),
    f("lfo2step16", 0x4A, 0x47, SCALED),
    f("lfo2step17", 0x4A, 0x48, SCALED),
    f("lfo2step18", 0x4A, 0x49, SCALED),
    f("lfo2step19", 0x4A, 0x4A, SCALED),
    f("lfo2step20", 0x4A, 0x4B, SCALED),
    f("lfo2step21", 0x4A, 0x4C, SCALED),
    f("lfo2step22", 0x4A, 0x4D, SCALED),
    f("lfo2step23", 0x4A, 0x4E, SCALED),
    f("lfo2step24", 0x4A, 0x4F, SCALED),
    f("lfo2step25", 0x4A, 0x50, SCALED),
    f("lfo2step26", 0x4A, 0x51, SCALED),
    f("lfo2step27", 0x4A, 0x52, SCALED),
    f("lfo2step28", 0x4A, 0x53, SCALED),
    f("lfo2step29", 0x4A, 0x54, SCALED),
    f("lfo2step30", 0x4A, 0x55, SCALED),
    f("lfo2step31", 0x4A, 0x56, SCALED),
    f("lfo2step32", 0x4A, 0x57, SCALED),
    f("lfo2step33", 0x4A, 0x58, SCALED),
    f("lfo2step34", 0x4A, 0x59, SCALED),
    f("lfo2step35", 0x4A, 0x5A, SCALED),
    f("lfo2step36", 0x4A, 0x5B, SCALED),
    f("lfo2step37", 0x4A, 0x5C, SCALED),
    f("lfo2step38", 0x4A, 0x5D, SCALED),
    f("lfo2step39", 0x4A, 0x5E, SCALED),
    f("lfo2step40", 0x4A, 0x5F, SCALED),
    f("lfo2step41", 0x4A, 0x60, SCALED),
    f("lfo2step42", 0x4A, 0x61, SCALED),
    f("lfo2step43", 0x4A, 0x62, SCALED),
    f("lfo2step44", 0x4A, 0x63, SCALED),
    f("lfo2step45", 0x4A, 0x64, SCALED),
    f("lfo2step46", 0x4A, 0x65, SCALED),
    f("lfo2step47", 0x4A, 0x66, SCALED),
    f("lfo2step48", 0x4A, 0x67, SCALED),
    f("lfo2step49", 0x4A, 0x68, SCALED),
    f("lfo2step50", 0x4A, 0x69, SCALED),
    f("lfo2step51", 0x4A, 0x6A, SCALED),
    f("lfo2step52", 0x4A, 0x6B, SCALED),
    f("lfo2step53", 0x4A, 0x6C, SCALED),
    f("lfo2step54", 0x4A, 0x6D, SCALED),
    f("lfo2step55", 0x4A, 0x6E, SCALED),
    f("lfo2step56", 0x4A, 0x6F, SCALED),
    f("lfo2step57", 0x4A, 0x70, SCALED),
    f("lfo2step58", 0x4A, 0x71, SCALED),
    f("lfo2step59", 0x4A, 0x72, SCALED),
    f("lfo2step60", 0x4A, 0x73, SCALED),
    f("lfo2step61", 0x4A, 0x74, SCALED),
    f("lfo2step62", 0x4A, 0x75, SCALED),
    f("lfo2step63", 0x4A, 0x76, SCALED),
    f("lfo2step64", 0x4A, 0x77, SCALED),
    f("lfo3level", 0x41, 0x0D, SCALED),
    reg("lfo3wave", 0x3F, 0x06, 0x00),
    reg("lfo3bpmsync", 0x3F, 0x06, 0x01),
    reg("lfo3trigsync", 0x3F, 0x06, 0x03),
    reg("lfo3smooth", 0x3F, 0x06, 0x06),
    reg("lfo3steps", 0x3F, 0x06, 0x07),
    reg("lfo3delaysyncoff", 0x3F, 0x06, 0x11).sync_off("lfo3bpmsync"),
    reg("lfo3fadeinsyncoff", 0x3F, 0x06, 0x12).sync_off("lfo3bpmsync"),
    reg("lfo3delaysyncon", 0x3F, 0x06, 0x21).sync_on("lfo3bpmsync"),
    reg("lfo3fadeinsyncon", 0x3F, 0x06, 0x13).sync_on("lfo3bpmsync"),
    reg("lfo3oneshot", 0x3F, 0x06, 0x14),
    f("lfo3phase", 0x3F, 0x32, DIRECT),
    f("lfo3ratesyncoff", 0x41, 0x07, SCALED).sync_off("lfo3bpmsync"),
    f("lfo3ratesyncon", 0x43, 0x07, SCALED).sync_on("lfo3bpmsync"),
    f("lfo3step1", 0x3A, 0x20, SCALED),
    f("lfo3step2", 0x3A, 0x21, SCALED),
    f("lfo3step3", 0x3A, 0x22, SCALED),
    f("lfo3step4", 0x3A, 0x23, SCALED),
    f("lfo3step5", 0x3A, 0x24, SCALED),
    f("lfo3step6", 0x3A, 0x25, SCALED),
    f("lfo3step7", 0x3A, 0x26, SCALED),
    f("lfo3step8", 0x3A, 0x27, SCALED),
    f("lfo3step9", 0x4B, 0x00, SCALED),
    f("lfo3step10", 0x4B, 0x01, SCALED),
    f("lfo3step11", 0x4B, 0x02, SCALED),
    f("lfo3step12", 0x4B, 0x03, SCALED),
    f("lfo3step13", 0x4B, 0x04, SCALED),
    f("lfo3step14", 0x4B, 0x05, SCALED),
    f("lfo3step15", 0x4B, 0x06, SCALED),
    f("lfo3step16", 0x4B, 0x07, SCALED),
    f("lfo3step17", 0x4B, 0x08, SCALED),
    f("lfo3step18", 0x4B, 0x09, SCALED),
    f("lfo3step19", 0x4B, 0x0A, SCALED),
    f("lfo3step20", 0x4B, 0x0B, SCALED),
    f("lfo3step21", 0x4B, 0x0C, SCALED),
    f("lfo3step22", 0x4B, 0x0D, SCALED),
    f("lfo3step23", 0x4B, 0x0E, SCALED),
    f("lfo3step24", 0x4B, 0x0F, SCALED),
    f("lfo3step25", 0x4B, 0x10, SCALED),
    f("lfo3step26", 0x4B, 0x11, SCALED),
    f("lfo3step27", 0x4B, 0x12, SCALED),
    f("lfo3step28", 0x4B, 0x13, SCALED),
    f("lfo3step29", 0x4B, 0x14, SCALED),
    f("lfo3step30", 0x4B, 0x15, SCALED),
    f("lfo3step31", 0x4B, 0x16, SCALED),
    f("lfo3step32", 0x4B, 0x17, SCALED),
    f("lfo3step33", 0x4B, 0x18, SCALED),
    f("lfo3step34", 0x4B, 0x19, SCALED),
    f("lfo3step35", 0x4B, 0x1A, SCALED),
    f("lfo3step36", 0x4B, 0x1B, SCALED),
    f("lfo3step37", 0x4B, 0x1C, SCALED),
    f("lfo3step38", 0x4B, 0x1D, SCALED),
    f("lfo3step39", 0x4B, 0x1E, SCALED),
    f("lfo3step40", 0x4B, 0x1F, SCALED),
    f("lfo3step41", 0x4B, 0x20, SCALED),
    f("lfo3step42", 0x4B, 0x21, SCALED),
    f("lfo3step43", 0x4B, 0x22, SCALED),
    f("lfo3step44", 0x4B, 0x23, SCALED),
    f("lfo3step45", 0x4B, 0x24, SCALED),
    f("lfo3step46", 0x4B, 0x25, SCALED),
    f("lfo3step47", 0x4B, 0x26, SCALED),
    f("lfo3step48", 0x4B, 0x27, SCALED),
    f("lfo3step49", 0x4B, 0x28, SCALED),
    f("lfo3step50", 0x4B, 0x29, SCALED),
    f("lfo3step51", 0x4B, 0x2A, SCALED),
    f("lfo3step52", 0x4B, 0x2B, SCALED),
    f("lfo3step53", 0x4B, 0x2C, SCALED),
    f("lfo3step54", 0x4B, 0x2D, SCALED),
    f("lfo3step55", 0x4B, 0x2E, SCALED),
    f("lfo3step56", 0x4B, 0x2F, SCALED),
    f("lfo3step57", 0x4B, 0x30, SCALED),
    f("lfo3step58", 0x4B, 0x31, SCALED),
    f("lfo3step59", 0x4B, 0x32, SCALED),
    f("lfo3step60", 0x4B, 0x33, SCALED),
    f("lfo3step61", 0x4B, 0x34, SCALED),
    f("lfo3step62", 0x4B, 0x35, SCALED),
    f("lfo3step63", 0x4B, 0x36, SCALED),
    f("lfo3step64", 0x4B, 0x37, SCALED),
    f("lfo4level", 0x41, 0x0E, SCALED),
    reg("lfo4wave", 0x3F, 0x07, 0x00),
    reg("lfo4bpmsync", 0x3F, 0x07, 0x01),
    reg("lfo4trigsync", 0x3F, 0x07, 0x03),
    reg("lfo4smooth", 0x3F, 0x07, 0x06),
    reg("lfo4steps", 0x3F, 0x07, 0x07),
    reg("lfo4delaysyncoff", 0x3F, 0x07, 0x11).sync_off("lfo4bpmsync"),
    reg("lfo4fadeinsyncoff", 0x3F, 0x07, 0x12).sync_off("lfo4bpmsync"),
    reg("lfo4delaysyncon", 0x3F, 0x07, 0x21).sync_on("lfo4bpmsync"),
    reg("lfo4fadeinsyncon", 0x3F, 0x07, 0x13).sync_on("lfo4bpmsync"),
    reg("lfo4oneshot", 0x3F, 0x07, 0x14),
    f("lfo4phase", 0x3F, 0x33, DIRECT),
    f("lfo4ratesyncoff", 0x41, 0x08, SCALED).sync_off("lfo4bpmsync"),
    f("lfo4ratesyncon", 0x43, 0x08, SCALED).sync_on("lfo4bpmsync"),
    f("lfo4step1", 0x3A, 0x28, SCALED),
    f("lfo4step2", 0x3A, 0x29, SCALED),
    f("lfo4step3", 0x3A, 0x2A, SCALED),
    f("lfo4step4", 0x3A, 0x2B, SCALED),
    f("lfo4step5", 0x3A, 0x2C, SCALED),
    f("lfo4step6", 0x3A, 0x2D, SCALED),
    f("lfo4step7", 0x3A, 0x2E, SCALED),
    f("lfo4step8", 0x3A, 0x2F, SCALED),
    f("lfo4step9", 0x4B, 0x40, SCALED),
    f("lfo4step10", 0x4B, 0x41, SCALED),
    f("lfo4step11", 0x4B, 0x42, SCALED),
    f("lfo4step12", 0x4B, 0x43, SCALED),
    f("lfo4step13", 0x4B, 0x44, SCALED),
    f("lfo4step14", 0x4B, 0x45, SCALED),
    f("lfo4step15", 0x4B, 0x46, SCALED),
    f("lfo4step16", 0x4B, 0x47, SCALED),
    f("lfo4step17", 0x4B, 0x48, SCALED),
    f("lfo4step18", 0x4B, 0x49, SCALED),
    f("lfo4step19", 0x4B, 0x4A, SCALED),
    f("lfo4step20", 0x4B, 0x4B, SCALED),
    f("lfo4step21", 0x4B, 0x4C, SCALED),
    f("lfo4step22", 0x4B, 0x4D, SCALED),
    f("lfo4step23", 0x4B, 0x4E, SCALED),
    f("lfo4step24", 0x4B, 0x4F, SCALED),
    f("lfo4step25", 0x4B, 0x50, SCALED),
    f("lfo4step26", 0x4B, 0x51, SCALED),
    f("lfo4step27", 0x4B, 0x52, SCALED),
    f("lfo4step28", 0x4B, 0x53, SCALED),
    f("lfo4step29", 0x4B, 0x54, SCALED),
    f("lfo4step30", 0x4B, 0x55, SCALED),
    f("lfo4step31", 0x4B, 0x56, SCALED),
    f("lfo4step32", 0x4B, 0x57, SCALED),
    f("lfo4step33", 0x4B, 0x58, SCALED),
    f("lfo4step34", 0x4B, 0x59, SCALED),
    f("lfo4step35", 0x4B, 0x5A, SCALED),
    f("lfo4step36", 0x4B, 0x5B, SCALED),
    f("lfo4step37", 0x4B, 0x5C, SCALED),
    f("lfo4step38", 0x4B, 0x5D, SCALED),
    f("lfo4step39", 0x4B, 0x5E, SCALED),
    f("lfo4step40", 0x4B, 0x5F, SCALED),
    f("lfo4step41", 0x4B, 0x60, SCALED),
    f("lfo4step42", 0x4B, 0x61, SCALED),
    f("lfo4step43", 0x4B, 0x62, SCALED),
    f("lfo4step44", 0x4B, 0x63, SCALED),
    f("lfo4step45", 0x4B, 0x64, SCALED),
    f("lfo4step46", 0x4B, 0x65, SCALED),
    f("lfo4step47", 0x4B, 0x66, SCALED),
    f("lfo4step48", 0x4B, 0x67, SCALED),
    f("lfo4step49", 0x4B, 0x68, SCALED),
    f("lfo4step50", 0x4B, 0x69, SCALED),
    f("lfo4step51", 0x4B, 0x6A, SCALED),
    f("lfo4step52", 0x4B, 0x6B, SCALED),
    f("lfo4step53", 0x4B, 0x6C, SCALED),
    f("lfo4step54", 0x4B, 0x6D, SCALED),
    f("lfo4step55", 0x4B, 0x6E, SCALED),
    f("lfo4step56", 0x4B, 0x6F, SCALED),
    f("lfo4step57", 0x4B, 0x70, SCALED),
    f("lfo4step58", 0x4B, 0x71, SCALED),
    f("lfo4step59", 0x4B, 0x72, SCALED),
    f("lfo4step60", 0x4B, 0x73, SCALED),
    f("lfo4step61", 0x4B, 0x74, SCALED),
    f("lfo4step62", 0x4B, 0x75, SCALED),
    f("lfo4step63", 0x4B, 0x76, SCALED),
    f("lfo4step64", 0x4B, 0x77, SCALED),
    f("lfo5level", 0x41, 0x0F, SCALED),
    reg("lfo5wave", 0x3F, 0x08, 0x00),
    reg("lfo5bpmsync", 0x3F, 0x08, 0x01),
    reg("lfo5trigsync", 0x3F, 0x08, 0x03),
    reg("lfo5smooth", 0x3F, 0x08, 0x06),
    reg("lfo5steps", 0x3F, 0x08, 0x07),
    reg("lfo5delaysyncoff", 0x3F, 0x08, 0x11).sync_off("lfo5bpmsync"),
    reg("lfo5fadeinsyncoff", 0x3F, 0x08, 0x12).sync_off("lfo5bpmsync"),
    reg("lfo5delaysyncon", 0x3F, 0x08, 0x21).sync_on("lfo5bpmsync"),
    reg("lfo5fadeinsyncon", 0x3F, 0x08, 0x13).sync_on("lfo5bpmsync"),
    reg("lfo5oneshot", 0x3F, 0x08, 0x14),
    f("lfo5phase", 0x3F, 0x34, DIRECT),
    f("lfo5ratesyncoff", 0x41, 0x09, SCALED).sync_off("lfo5bpmsync"),
    f("lfo5ratesyncon", 0x43, 0x09, SCALED).sync_on("lfo5bpmsync"),
    f("lfo5step1", 0x3A, 0x30, SCALED),
    f("lfo5step2", 0x3A, 0x31, SCALED),
    f("lfo5step3", 0x3A, 0x32, SCALED),
    f("lfo5step4", 0x3A, 0x33, SCALED),
    f("lfo5step5", 0x3A, 0x34, SCALED),
    f("lfo5step6", 0x3A, 0x35, SCALED),
    f("lfo5step7", 0x3A, 0x36, SCALED),
    f("lfo5step8", 0x3A, 0x37, SCALED),
    f("lfo5step9", 0x4C, 0x00, SCALED),
    f("lfo5step10", 0x4C, 0x01, SCALED),
    f("lfo5step11", 0x4C, 0x02, SCALED),
    f("lfo5step12", 0x4C, 0x03, SCALED),
    f("lfo5step13", 0x4C, 0x04, SCALED),
    f("lfo5step14", 0x4C, 0x05, SCALED),
    f("lfo5step15", 0x4C, 0x06, SCALED),
    f("lfo5step16", 0x4C, 0x07, SCALED),
    f("lfo5step17", 0x4C, 0x08, SCALED),
    f("lfo5step18", 0x4C, 0x09, SCALED),
    f("lfo5step19", 0x4C, 0x0A, SCALED),
    f("lfo5step20", 0x4C, 0x0B, SCALED),
    f("lfo5step21", 0x4C, 0x0C, SCALED),
    f("lfo5step22", 0x4C, 0x0D, SCALED),
    f("lfo5step23", 0x4C, 0x0E, SCALED),
    f("lfo5step24", 0x4C, 0x0F, SCALED),
    f("lfo5step25", 0x4C, 0x10, SCALED),
    f("lfo5step26", 0x4C, 0x11, SCALED),
    f("lfo5step27", 0x4C, 0x12, SCALED),
    f("lfo5step28", 0x4C, 0x13, SCALED),
    f("lfo5step29", 0x4C, 0x14, SCALED),
    f("lfo5step30", 0x4C, 0x15, SCALED),
    f("lfo5step31", 0x4C, 0x16, SCALED),
    f("lfo5step32", 0x4C, 0x17, SCALED),
    f("lfo5step33", 0x4C, 0x18, SCALED),
    f("lfo5step34", 0x4C, 0x19, SCALED),
    f("lfo5step35", 0x4C, 0x1A, SCALED),
    f("lfo5step36", 0x4C, 0x1B, SCALED),
    f("lfo5step37", 0x4C, 0x1C, SCALED),
    f("lfo5step38", 0x4C, 0x1D, SCALED),
    f("lfo5step39", 0x4C, 0x1E, SCALED),
    f("lfo5step40", 0x4C, 0x1F, SCALED),
    f("lfo5step41", 0x4C, 0x20, SCALED),
    f("lfo5step42", 0x4C, 0x21, SCALED),
    f("lfo5step43", 0x4C, 0x22, SCALED),
    f("lfo5step44", 0x4C, 0x23, SCALED),
    f("lfo5step45", 0x4C, 0x24, SCALED),
    f("lfo5step46", 0x4C, 0x25, SCALED),
    f("lfo5step47", 0x4C, 0x26, SCALED),
    f("lfo5step48", 0x4C, 0x27, SCALED),
    f("lfo5step49", 0x4C, 0x28, SCALED),
    f("lfo5step50", 0x4C, 0x29, SCALED),
    f("lfo5step51", 0x4C, 0x2A, SCALED),
    f("lfo5step52", 0x4C, 0x2B, SCALED),
    f("lfo5step53", 0x4C, 0x2C, SCALED),
    f("lfo5step54", 0x4C, 0x2D, SCALED),
    f("lfo5step55", 0x4C, 0x2E, SCALED),
    f("lfo5step56", 0x4C, 0x2F, SCALED),
    f("lfo5step57", 0x4C, 0x30, SCALED),
    f("lfo5step58", 0x4C, 0x31, SCALED),
    f("lfo5step59", 0x4C, 0x32, SCALED),
    f("lfo5step60", 0x4C, 0x33, SCALED),
    f("lfo5step61", 0x4C, 0x34, SCALED),
    f("lfo5step62", 0x4C, 0x35, SCALED),
    f("lfo5step63", 0x4C, 0x36, SCALED),
    f("lfo5step64", 0x4C, 0x37, SCALED),
    reg("env1delaysyncoff", 0x3F, 0x00, 0x08).sync_off("env1bpmsync"),
    f("env1attacksyncoff", 0x41, 0x11, SCALED).sync_off("env1bpmsync"),
    f("env1holdsyncoff", 0x41, 0x16, SCALED).sync_off("env1bpmsync"),
    f("env1decaysyncoff", 0x41, 0x1B, SCALED).sync_off("env1bpmsync"),
    f("env1sustain", 0x41, 0x20, ASYMMETRIC),
    f("env1releasesyncoff", 0x41, 0x25, SCALED).sync_off("env1bpmsync"),
    reg("env1delaysyncon", 0x3F, 0x00, 0x18).sync_on("env1bpmsync"),
    f("env1attacksyncon", 0x43, 0x11, SCALED).sync_on("env1bpmsync"),
    f("env1decaysyncon", 0x43, 0x1B, SCALED).sync_on("env1bpmsync"),
    f("env1holdsyncon", 0x43, 0x16, SCALED).sync_on("env1bpmsync"),
    f("env1releasesyncon", 0x43, 0x25, SCALED).sync_on("env1bpmsync"),
    f("env1atkcurve", 0x3F, 0x70, DIRECT),
    f("env1deccurve", 0x3F, 0x75, DIRECT),
    reg("env1loop", 0x3F, 0x00, 0x06),
    reg("env1legato", 0x3F, 0x00, 0x07),
    reg("env1bpmsync", 0x3F, 0x00, 0x0C),
    reg("env1freerun", 0x3F, 0x00, 0x0D),
    reg("env1reset", 0x3F, 0x00, 0x0F),
    f("env1relcurve", 0x3F, 0x7A, DIRECT),
    f("env1trigsrc1", 0x3A, 0x60, SCALED),
    f("env1trigsrc2", 0x3A, 0x61, SCALED),
    f("env1trigsrc3", 0x3A, 0x62, SCALED),
    f("env1trigsrc4", 0x3A, 0x63, SCALED),
    reg("env2delaysyncoff", 0x3F, 0x01, 0x08).sync_off("env2bpmsync"),
    f("env2attacksyncoff", 0x41, 0x12, SCALED).sync_off("env2bpmsync"),
    f("env2holdsyncoff", 0x41, 0x17, SCALED).sync_off("env2bpmsync"),
    f("env2decaysyncoff", 0x41, 0x1C, SCALED).sync_off("env2bpmsync"),
    f("env2sustain", 0x41, 0x21, ASYMMETRIC),
    f("env2releasesyncoff", 0x41, 0x26, SCALED).sync_off("env2bpmsync"),
    reg("env2delaysyncon", 0x3F, 0x01, 0x18).sync_on("env2bpmsync"),
    f("env2attacksyncon", 0x43, 0x12, SCALED).sync_on("env2bpmsync"),
    f("env2decaysyncon", 0x43, 0x1C, SCALED).sync_on("env2bpmsync"),
    f("env2holdsyncon", 0x43, 0x17, SCALED).sync_on("env2bpmsync"),
    f("env2releasesyncon", 0x43, 0x26, SCALED).sync_on("env2bpmsync"),
    f("env2atkcurve", 0x3F, 0x71, DIRECT),
    f("env2deccurve", 0x3F, 0x76, DIRECT),
    reg("env2loop", 0x3F, 0x01, 0x06),
    reg("env2legato", 0x3F, 0x01, 0x07),
    reg("env2bpmsync", 0x3F, 0x01, 0x0C),
    reg("env2freerun", 0x3F, 0x01, 0x0D),
    reg("env2reset", 0x3F, 0x01, 0x0F),
    f("env2relcurve", 0x3F, 0x7B, DIRECT),
    f("env2trigsrc1", 0x3A, 0x64, SCALED),
    f("env2trigsrc2", 0x3A, 0x65, SCALED),
    f("env2trigsrc3", 0x3A, 0x66, SCALED),
    f("env2trigsrc4", 0x3A, 0x67, SCALED),
    reg("env3delaysyncoff", 0x3F, 0x02, 0x08).sync_off("env3bpmsync"),
    f("env3attacksyncoff", 0x41, 0x13, SCALED).sync_off("env3bpmsync"),
    f("env3holdsyncoff", 0x41, 0x18, SCALED).sync_off("env3bpmsync"),
    f("env3decaysyncoff", 0x41, 0x1D, SCALED).sync_off("env3bpmsync"),
    f("env3sustain", 0x41, 0x22, ASYMMETRIC),
    f("env3releasesyncoff", 0x41, 0x27, SCALED).sync_off("env3bpmsync"),
    reg("env3delaysyncon", 0x3F, 0x02, 0x18).sync_on("env3bpmsync"),
    f("env3attacksyncon", 0x43, 0x13, SCALED).sync_on("env3bpmsync"),
    f("env3decaysyncon", 0x43, 0x1D, SCALED).sync_on("env3bpmsync"),
    f("env3holdsyncon", 0x43, 0x18, SCALED).sync_on("env3bpmsync"),
    f("env3releasesyncon", 0x43, 0x27, SCALED).sync_on("env3bpmsync"),
    f("env3atkcurve", 0x3F, 0x72, DIRECT),
    f("env3deccurve", 0x3F, 0x77, DIRECT),
    reg("env3loop", 0x3F, 0x02, 0x06),
    reg("env3legato", 0x3F, 0x02, 0x07),
    reg("env3bpmsync", 0x3F, 0x02, 0x0C),
    reg("env3freerun", 0x3F, 0x02, 0x0D),
    reg("env3reset", 0x3F, 0x02, 0x0F),
    f("env3relcurve", 0x3F, 0x7C, DIRECT),
    f("env3trigsrc1", 0x3A, 0x68, SCALED),
    f("env3trigsrc2", 0x3A, 0x69, SCALED),
    f("env3trigsrc3", 0x3A, 0x6A, SCALED),
    f("env3trigsrc4", 0x3A, 0x6B, SCALED),
    reg("env4delaysyncoff", 0x3F, 0x03, 0x08).sync_off("env4bpmsync"),
    f("env4attacksyncoff", 0x41, 0x14, SCALED).sync_off("env4bpmsync"),
    f("env4holdsyncoff", 0x41, 0x19, SCALED).sync_off("env4bpmsync"),
    f("env4decaysyncoff", 0x41, 0x1E, SCALED).sync_off("env4bpmsync"),
    f("env4sustain", 0x41, 0x23, ASYMMETRIC),
    f("env4releasesyncoff", 0x41, 0x28, SCALED).sync_off("env4bpmsync"),
    reg("env4delaysyncon", 0x3F, 0x03, 0x18).sync_on("env4bpmsync"),
    f("env4attacksyncon", 0x43, 0x14, SCALED).sync_on("env4bpmsync"),
    f("env4decaysyncon", 0x43, 0x1E, SCALED).sync_on("env4bpmsync"),
    f("env4holdsyncon", 0x43, 0x19, SCALED).sync_on("env4bpmsync"),
    f("env4releasesyncon", 0x43, 0x28, SCALED).sync_on("env4bpmsync"),
    f("env4atkcurve", 0x3F, 0x73, DIRECT),
    f("env4deccurve", 0x3F, 0x78, DIRECT),
    reg("env4loop", 0x3F, 0x03, 0x06),
    reg("env4legato", 0x3F, 0x03, 0x07),
    reg("env4bpmsync", 0x3F, 0x03, 0x0C),
    reg("env4freerun", 0x3F, 0x03, 0x0D),
    reg("env4reset", 0x3F, 0x03, 0x0F),
    f("env4relcurve", 0x3F, 0x7D, DIRECT),
    f("env4trigsrc1", 0x3A, 0x6C, SCALED),
    f("env4trigsrc2", 0x3A, 0x6D, SCALED),
    f("env4trigsrc3", 0x3A, 0x6E, SCALED),
    f("env4trigsrc4", 0x3A, 0x6F, SCALED),
    reg("env5delaysyncoff", 0x3F, 0x04, 0x08).sync_off("env5bpmsync"),
    f("env5attacksyncoff", 0x41, 0x15, SCALED).sync_off("env5bpmsync"),
    f("env5holdsyncoff", 0x41, 0x1A, SCALED).sync_off("env5bpmsync"),
    f("env5decaysyncoff", 0x41, 0x1F, SCALED).sync_off("env5bpmsync"),
    f("env5sustain", 0x41, 0x24, ASYMMETRIC),
    f("env5releasesyncoff", 0x41, 0x29, SCALED).sync_off("env5bpmsync"),
    reg("env5delaysyncon", 0x3F, 0x04, 0x18).sync_on("env5bpmsync"),
    f("env5attacksyncon", 0x43, 0x15, SCALED).sync_on("env5bpmsync"),
    f("env5decaysyncon", 0x43, 0x1F, SCALED).sync_on("env5bpmsync"),
    f("env5holdsyncon", 0x43, 0x1A, SCALED).sync_on("env5bpmsync"),
    f("env5releasesyncon", 0x43, 0x29, SCALED).sync_on("env5bpmsync"),
    f("env5atkcurve", 0x3F, 0x74, DIRECT),
    f("env5deccurve", 0x3F, 0x79, DIRECT),
    reg("env5loop", 0x3F, 0x04, 0x06),
    reg("env5legato", 0x3F, 0x04, 0x07),
    reg("env5bpmsync", 0x3F, 0x04, 0x0C),
    reg("env5freerun", 0x3F, 0x04, 0x0D),
    reg("env5reset", 0x3F, 0x04, 0x0F),
    f("env5relcurve", 0x3F, 0x7E, DIRECT),
    f("env5trigsrc1", 0x3A, 0x70, SCALED),
    f("env5trigsrc2", 0x3A, 0x71, SCALED),
    f("env5trigsrc3", 0x3A, 0x72, SCALED),
    f("env5trigsrc4", 0x3A, 0x73, SCALED),
    reg("arpdivision", 0x39, 0x03, 1),
    reg("arpswing", 0x39, 0x03, 2),
    reg("arpgate", 0x39, 0x03, 3),
    reg("arpoctmode", 0x39, 0x03, 4),
    reg("arpoctave", 0x39, 0x03, 5),
    reg("arpmode", 0x39, 0x03, 6),
    reg("arplength", 0x39, 0x03, 7),
    reg("arptaptrig", 0x39, 0x03, 8),
    reg("arpphrase", 0x39, 0x03, 9),
    reg("arpratchet", 0x39, 0x03, 10),
    reg("arpchance", 0x39, 0x03, 11),
    f("macro1target1", 0x3E, 0x30, MOD_DESTINATION),
    f("macro1target2", 0x3E, 0x31, MOD_DESTINATION),
    f("macro1target3", 0x3E, 0x32, MOD_DESTINATION),
    f("macro1target4", 0x3E, 0x33, MOD_DESTINATION),
    f("macro1target5", 0x3E, 0x34, MOD_DESTINATION),
    f("macro1target6", 0x3E, 0x35, MOD_DESTINATION),
    f("macro1target7", 0x3E, 0x36, MOD_DESTINATION),
    f("macro1target8", 0x3E, 0x37, MOD_DESTINATION),
    f("macro1buttonvalue1", 0x3D, 0x30, SCALED),
    f("macro1buttonvalue2", 0x3D, 0x31, SCALED),
    f("macro1buttonvalue3", 0x3D, 0x32, SCALED),
    f("macro1buttonvalue4", 0x3D, 0x33, SCALED),
    f("macro1buttonvalue5", 0x3D, 0x34, SCALED),
    f("macro1buttonvalue6", 0x3D, 0x35, SCALED),
    f("macro1buttonvalue7", 0x3D, 0x36, SCALED),
    f("macro1buttonvalue8", 0x3D, 0x37, SCALED),
    f("macro1depth1", 0x36, 0x30, SCALED),
    f("macro1depth2", 0x36, 0x31, SCALED),
    f("macro1depth3", 0x36, 0x32, SCALED),
    f("macro1depth4", 0x36, 0x33, SCALED),
    f("macro1depth5", 0x36, 0x34, SCALED),
    f("macro1depth6", 0x36, 0x35, SCALED),
    f("macro1depth7", 0x36, 0x36, SCALED),
    f("macro1depth8", 0x36, 0x37, SCALED),
    f("macro2target1", 0x3E, 0x38, MOD_DESTINATION),
    f("macro2target2", 0x3E, 0x39, MOD_DESTINATION),
    f("macro2target3", 0x3E, 0x3A, MOD_DESTINATION),
    f("macro2target4", 0x3E, 0x3B, MOD_DESTINATION),
    f("macro2target5", 0x3E, 0x3C, MOD_DESTINATION),
    f("macro2target6", 0x3E, 0x3D, MOD_DESTINATION),
    f("macro2target7", 0x3E, 0x3E, MOD_DESTINATION),
    f("macro2target8", 0x3E, 0x3F, MOD_DESTINATION),
    f("macro2buttonvalue1", 0x3D, 0x38, SCALED),
    f("macro2buttonvalue2", 0x3D, 0x39, SCALED),
    f("macro2buttonvalue3", 0x3D, 0x3A, SCALED),
    f("macro2buttonvalue4", 0x3D, 0x3B, SCALED),
    f("macro2buttonvalue5", 0x3D, 0x3C, SCALED),
    f("macro2buttonvalue6", 0x3D, 0x3D, SCALED),
    f("macro2buttonvalue7", 0x3D, 0x3E, SCALED),
    f("macro2buttonvalue8", 0x3D, 0x3F, SCALED),
    f("macro2depth1", 0x36, 0x38, SCALED),
    f("macro2depth2", 0x36, 0x39, SCALED),
    f("macro2depth3", 0x36, 0x3A, SCALED),
    f("macro2depth4", 0x36, 0x3B, SCALED),
    f("macro2depth5", 0x36, 0x3C, SCALED),
    f("macro2depth6", 0x36, 0x3D, SCALED),
    f("macro2depth7", 0x36, 0x3E, SCALED),
    f("macro2depth8", 0x36, 0x3F, SCALED),
    f("macro3target1", 0x3E, 0x40, MOD_DESTINATION),
    f("macro3target2", 0x3E, 0x41, MOD_DESTINATION),
    f("macro3target3", 0x3E, 0x42, MOD_DESTINATION),
    f("macro3target4", 0x3E, 0x43, MOD_DESTINATION),
    f("macro3target5", 0x3E, 0x44, MOD_DESTINATION),
    f("macro3target6", 0x3E, 0x45, MOD_DESTINATION),
    f("macro3target7", 0x3E, 0x46, MOD_DESTINATION),
    f("macro3target8", 0x3E, 0x47, MOD_DESTINATION),
    f("macro3buttonvalue1", 0x3D, 0x40, SCALED),
    f("macro3buttonvalue2", 0x3D, 0x41, SCALED),
    f("macro3buttonvalue3", 0x3D, 0x42, SCALED),
    f("macro3buttonvalue4", 0x3D, 0x43, SCALED),
    f("macro3buttonvalue5", 0x3D, 0x44, SCALED),
    f("macro3buttonvalue6", 0x3D, 0x45, SCALED),
    f("macro3buttonvalue7", 0x3D, 0x46, SCALED),
    f("macro3buttonvalue8", 0x3D, 0x47, SCALED),
    f("macro3depth1", 0x36, 0x40, SCALED),
    f("macro3depth2", 0x36, 0x41, SCALED),
    f("macro3depth3", 0x36, 0x42, SCALED),
    f("macro3depth4", 0x36, 0x43, SCALED),
    f("macro3depth5", 0x36, 0x44, SCALED),
    f("macro3depth6", 0x36, 0x45, SCALED),
    f("macro3depth7", 0x36, 0x46, SCALED),
    f("macro3depth8", 0x36, 0x47, SCALED),
    f("macro4target1", 0x3E, 0x48, MOD_DESTINATION),
    f("macro4target2", 0x3E, 0x49, MOD_DESTINATION),
    f("macro4target3", 0x3E, 0x4A, MOD_DESTINATION),
    f("macro4target4", 0x3E, 0x4B, MOD_DESTINATION),
    f("macro4target5", 0x3E, 0x4C, MOD_DESTINATION),
    f("macro4target6", 0x3E, 0x4D, MOD_DESTINATION),
    f("macro4target7", 0x3E, 0x4E, MOD_DESTINATION),
    f("macro4target8", 0x3E, 0x4F, MOD_DESTINATION),
    f("macro4buttonvalue1", 0x3D, 0x48, SCALED),
    f("macro4buttonvalue2", 0x3D, 0x49, SCALED),
    f("macro4buttonvalue3", 0x3D, 0x4A, SCALED),
    f("macro4buttonvalue4", 0x3D, 0x4B, SCALED),
    f("macro4buttonvalue5", 0x3D, 0x4C, SCALED),
    f("macro4buttonvalue6", 0x3D, 0x4D, SCALED),
    f("macro4buttonvalue7", 0x3D, 0x4E, SCALED),
    f("macro4buttonvalue8", 0x3D, 0x4F, SCALED),
    f("macro4depth1", 0x36, 0x48, SCALED),
    f("macro4depth2", 0x36, 0x49, SCALED),
    f("macro4depth3", 0x36, 0x4A, SCALED),
    f("macro4depth4", 0x36, 0x4B, SCALED),
    f("macro4depth5", 0x36, 0x4C, SCALED),
    f("macro4depth6", 0x36, 0x4D, SCALED),
    f("macro4depth7", 0x36, 0x4E, SCALED),
    f("macro4depth8", 0x36, 0x4F, SCALED),
    f("macro5target1", 0x3E, 0x50, MOD_DESTINATION),
    f("macro5target2", 0x3E, 0x51, MOD_DESTINATION),
    f("macro5target3", 0x3E, 0x52, MOD_DESTINATION),
    f("macro5target4", 0x3E, 0x53, MOD_DESTINATION),
    f("macro5target5", 0x3E, 0x54, MOD_DESTINATION),
    f("macro5target6", 0x3E, 0x55, MOD_DESTINATION),
    f("macro5target7", 0x3E, 0x56, MOD_DESTINATION),
    f("macro5target8", 0x3E, 0x57, MOD_DESTINATION),
    f("macro5buttonvalue1", 0x3D, 0x50, SCALED),
    f("macro5buttonvalue2", 0x3D, 0x51, SCALED),
    f("macro5buttonvalue3", 0x3D, 0x52, SCALED),
    f("macro5buttonvalue4", 0x3D, 0x53, SCALED),
    f("macro5buttonvalue5", 0x3D, 0x54, SCALED),
    f("macro5buttonvalue6", 0x3D, 0x55, SCALED),
    f("macro5buttonvalue7", 0x3D, 0x56, SCALED),
    f("macro5buttonvalue8", 0x3D, 0x57, SCALED),
    f("macro5depth1", 0x36, 0x50, SCALED),
    f("macro5depth2", 0x36, 0x51, SCALED),
    f("macro5depth3", 0x36, 0x52, SCALED),
    f("macro5depth4", 0x36, 0x53, SCALED),
    f("macro5depth5", 0x36, 0x54, SCALED),
    f("macro5depth6", 0x36, 0x55, SCALED),
    f("macro5depth7", 0x36, 0x56, SCALED),
    f("macro5depth8", 0x36, 0x57, SCALED),
    f("macro6target1", 0x3E, 0x58, MOD_DESTINATION),
    f("macro6target2", 0x3E, 0x59, MOD_DESTINATION),
    f("macro6target3", 0x3E, 0x5A, MOD_DESTINATION),
    f("macro6target4", 0x3E, 0x5B, MOD_DESTINATION),
    f("macro6target5", 0x3E, 0x5C, MOD_DESTINATION),
    f("macro6target6", 0x3E, 0x5D, MOD_DESTINATION),
    f("macro6target7", 0x3E, 0x5E, MOD_DESTINATION),
    f("macro6target8", 0x3E, 0x5F, MOD_DESTINATION),
    f("macro6buttonvalue1", 0x3D, 0x58, SCALED),
    f("macro6buttonvalue2", 0x3D, 0x59, SCALED),
    f("macro6buttonvalue3", 0x3D, 0x5A, SCALED),
    f("macro6buttonvalue4", 0x3D, 0x5B, SCALED),
    f("macro6buttonvalue5", 0x3D, 0x5C, SCALED),
    f("macro6buttonvalue6", 0x3D, 0x5D, SCALED),
    f("macro6buttonvalue7", 0x3D, 0x5E, SCALED),
    f("macro6buttonvalue8", 0x3D, 0x5F, SCALED),
    f("macro6depth1", 0x36, 0x58, SCALED),
    f("macro6depth2", 0x36, 0x59, SCALED),
    f("macro6depth3", 0x36, 0x5A, SCALED),
    f("macro6depth4", 0x36, 0x5B, SCALED),
    f("macro6depth5", 0x36, 0x5C, SCALED),
    f("macro6depth6", 0x36, 0x5D, SCALED),
    f("macro6depth7", 0x36, 0x5E, SCALED),
    f("macro6depth8", 0x36, 0x5F, SCALED),
    f("macro7target1", 0x3E, 0x60, MOD_DESTINATION),
    f("macro7target2", 0x3E, 0x61, MOD_DESTINATION),
    f("macro7target3", 0x3E, 0x62, MOD_DESTINATION),
    f("macro7target4", 0x3E, 0x63, MOD_DESTINATION),
    f("macro7target5", 0x3E, 0x64, MOD_DESTINATION),
    f("macro7target6", 0x3E, 0x65, MOD_DESTINATION),
    f("macro7target7", 0x3E, 0x66, MOD_DESTINATION),
    f("macro7target8", 0x3E, 0x67, MOD_DESTINATION),
    f("macro7buttonvalue1", 0x3D, 0x60, SCALED),
    f("macro7buttonvalue2", 0x3D, 0x61, SCALED),
    f("macro7buttonvalue3", 0x3D, 0x62, SCALED),
    f("macro7buttonvalue4", 0x3D, 0x63, SCALED),
    f("macro7buttonvalue5", 0x3D, 0x64, SCALED),
    f("macro7buttonvalue6", 0x3D, 0x65, SCALED),
    f("macro7buttonvalue7", 0x3D, 0x66, SCALED),
    f("macro7buttonvalue8", 0x3D, 0x67, SCALED),
    f("macro7depth1", 0x36, 0x60, SCALED),
    f("macro7depth2", 0x36, 0x61, SCALED),
    f("macro7depth3", 0x36, 0x62, SCALED),
    f("macro7depth4", 0x36, 0x63, SCALED),
    f("macro7depth5", 0x36, 0x64, SCALED),
    f("macro7depth6", 0x36, 0x65, SCALED),
    f("macro7depth7", 0x36, 0x66, SCALED),
    f("macro7depth8", 0x36, 0x67, SCALED),
    f("macro8target1", 0x3E, 0x68, MOD_DESTINATION),
    f("macro8target2", 0x3E, 0x69, MOD_DESTINATION),
    f("macro8target3", 0x3E, 0x6A, MOD_DESTINATION),
    f("macro8target4", 0x3E, 0x6B, MOD_DESTINATION),
    f("macro8target5", 0x3E, 0x6C, MOD_DESTINATION),
    f("macro8target6", 0x3E, 0x6D, MOD_DESTINATION),
    f("macro8target7", 0x3E, 0x6E, MOD_DESTINATION),
    f("macro8target8", 0x3E, 0x6F, MOD_DESTINATION),
    f("macro8buttonvalue1", 0x3D, 0x68, SCALED),
    f("macro8buttonvalue2", 0x3D, 0x69, SCALED),
    f("macro8buttonvalue3", 0x3D, 0x6A, SCALED),
    f("macro8buttonvalue4", 0x3D, 0x6B, SCALED),
    f("macro8buttonvalue5", 0x3D, 0x6C, SCALED),
    f("macro8buttonvalue6", 0x3D, 0x6D, SCALED),
    f("macro8buttonvalue7", 0x3D, 0x6E, SCALED),
    f("macro8buttonvalue8", 0x3D, 0x6F, SCALED),
    f("macro8depth1", 0x36, 0x68, SCALED),
    f("macro8depth2", 0x36, 0x69, SCALED),
    f("macro8depth3", 0x36, 0x6A, SCALED),
    f("macro8depth4", 0x36, 0x6B, SCALED),
    f("macro8depth5", 0x36, 0x6C, SCALED),
    f("macro8depth6", 0x36, 0x6D, SCALED),
    f("macro8depth7", 0x36, 0x6E, SCALED),
    f("macro8depth8", 0x36, 0x6F, SCALED),
    f("macro1panelvalue", 0x3F, 0x58, DIRECT),
    f("macro2panelvalue", 0x3F, 0x59, DIRECT),
    f("macro3panelvalue", 0x3F, 0x5A, DIRECT),
    f("macro4panelvalue", 0x3F, 0x5B, DIRECT),
    f("macro5panelvalue", 0x3F, 0x5C, DIRECT),
    f("macro6panelvalue", 0x3F, 0x5D, DIRECT),
    f("macro7panelvalue", 0x3F, 0x5E, DIRECT),
    f("macro8panelvalue", 0x3F, 0x5F, DIRECT),
    f("modmatrix1modsource", 0x3E, 0x00, MOD_SOURCE),
    f("modmatrix2modsource", 0x3E, 0x01, MOD_SOURCE),
    f("modmatrix3modsource", 0x3E, 0x02, MOD_SOURCE),
    f("modmatrix4modsource", 0x3E, 0x03, MOD_SOURCE),
    f("modmatrix5modsource", 0x3E, 0x04, MOD_SOURCE),
    f("modmatrix6modsource", 0x3E, 0x05, MOD_SOURCE),
    f("modmatrix7modsource", 0x3E, 0x06, MOD_SOURCE),
    f("modmatrix8modsource", 0x3E, 0x07, MOD_SOURCE),
    f("modmatrix9modsource", 0x3E, 0x08, MOD_SOURCE),
    f("modmatrix10modsource", 0x3E, 0x09, MOD_SOURCE),
    f("modmatrix11modsource", 0x3E, 0x0A, MOD_SOURCE),
    f("modmatrix12modsource", 0x3E, 0x0B, MOD_SOURCE),
    f("modmatrix13modsource", 0x3E, 0x0C, MOD_SOURCE),
    f("modmatrix14modsource", 0x3E, 0x0D, MOD_SOURCE),
    f("modmatrix15modsource", 0x3E, 0x0E, MOD_SOURCE),
    f("modmatrix16modsource", 0x3E, 0x0F, MOD_SOURCE),
    f("modmatrix17modsource", 0x3E, 0x10, MOD_SOURCE),
    f("modmatrix18modsource", 0x3E, 0x11, MOD_SOURCE),
    f("modmatrix19modsource", 0x3E, 0x12, MOD_SOURCE),
    f("modmatrix20modsource", 0x3E, 0x13, MOD_SOURCE),
    f("modmatrix21modsource", 0x3E, 0x14, MOD_SOURCE),
    f("modmatrix22modsource", 0x3E, 0x15, MOD_SOURCE),
    f("modmatrix23modsource", 0x3E, 0x16, MOD_SOURCE),
    f("modmatrix24modsource", 0x3E, 0x17, MOD_SOURCE),
    f("modmatrix25modsource", 0x3E, 0x18, MOD_SOURCE),
    f("modmatrix26modsource", 0x3E, 0x19, MOD_SOURCE),
    f("modmatrix27modsource", 0x3E, 0x1A, MOD_SOURCE),
    f("modmatrix28modsource", 0x3E, 0x1B, MOD_SOURCE),
    f("modmatrix29modsource", 0x3E, 0x1C, MOD_SOURCE),
    f("modmatrix30modsource", 0x3E, 0x1D, MOD_SOURCE),
    f("modmatrix31modsource", 0x3E, 0x1E, MOD_SOURCE),
    f("modmatrix32modsource", 0x3E, 0x1F, MOD_SOURCE),
    f("modmatrix1modtarget", 0x3E, 0x00, MOD_DESTINATION),
    f("modmatrix2modtarget", 0x3E, 0x01, MOD_DESTINATION),
    f("modmatrix3modtarget", 0x3E, 0x02, MOD_DESTINATION),
    f("modmatrix4modtarget", 0x3E, 0x03, MOD_DESTINATION),
    f("modmatrix5modtarget", 0x3E, 0x04, MOD_DESTINATION),
    f("modmatrix6modtarget", 0x3E, 0x05, MOD_DESTINATION),
    f("modmatrix7modtarget", 0x3E, 0x06, MOD_DESTINATION),
    f("modmatrix8modtarget", 0x3E, 0x07, MOD_DESTINATION),
    f("modmatrix9modtarget", 0x3E, 0x08, MOD_DESTINATION),
    f("modmatrix10modtarget", 0x3E, 0x09, MOD_DESTINATION),
    f("modmatrix11modtarget", 0x3E, 0x0A, MOD_DESTINATION),
    f("modmatrix12modtarget", 0x3E, 0x0B, MOD_DESTINATION),
    f("modmatrix13modtarget", 0x3E, 0x0C, MOD_DESTINATION),
    f("modmatrix14modtarget", 0x3E, 0x0D, MOD_DESTINATION),
    f("modmatrix15modtarget", 0x3E, 0x0E, MOD_DESTINATION),
    f("modmatrix16modtarget", 0x3E, 0x0F, MOD_DESTINATION),
    f("modmatrix17modtarget", 0x3E, 0x10, MOD_DESTINATION),
    f("modmatrix18modtarget", 0x3E, 0x11, MOD_DESTINATION),
    f("modmatrix19modtarget", 0x3E, 0x12, MOD_DESTINATION),
    f("modmatrix20modtarget", 0x3E, 0x13, MOD_DESTINATION),
    f("modmatrix21modtarget", 0x3E, 0x14, MOD_DESTINATION),
    f("modmatrix22modtarget", 0x3E, 0x15, MOD_DESTINATION),
    f("modmatrix23modtarget", 0x3E, 0x16, MOD_DESTINATION),
    f("modmatrix24modtarget", 0x3E, 0x17, MOD_DESTINATION),
    f("modmatrix25modtarget", 0x3E, 0x18, MOD_DESTINATION),
    f("modmatrix26modtarget", 0x3E, 0x19, MOD_DESTINATION),
    f("modmatrix27modtarget", 0x3E, 0x1A, MOD_DESTINATION),
    f("modmatrix28modtarget", 0x3E, 0x1B, MOD_DESTINATION),
    f("modmatrix29modtarget", 0x3E, 0x1C, MOD_DESTINATION),
    f("modmatrix30modtarget", 0x3E, 0x1D, MOD_DESTINATION),
    f("modmatrix31modtarget", 0x3E, 0x1E, MOD_DESTINATION),
    f("modmatrix32modtarget", 0x3E, 0x1F, MOD_DESTINATION),
    f("modmatrix1depth", 0x41, 0x40, SCALED),
    f("modmatrix2depth", 0x41, 0x41, SCALED),
    f("modmatrix3depth", 0x41, 0x42, SCALED),
    f("modmatrix4depth", 0x41, 0x43, SCALED),
    f("modmatrix5depth", 0x41, 0x44, SCALED),
    f("modmatrix6depth", 0x41, 0x45, SCALED),
    f("modmatrix7depth", 0x41, 0x46, SCALED),
    f("modmatrix8depth", 0x41, 0x47, SCALED),
    f("modmatrix9depth", 0x41, 0x48, SCALED),
    f("modmatrix10depth", 0x41, 0x49, SCALED),
    f("modmatrix11depth", 0x41, 0x4A, SCALED),
    f("modmatrix12depth", 0x41, 0x4B, SCALED),
    f("modmatrix13depth", 0x41, 0x4C, SCALED),
    f("modmatrix14depth", 0x41, 0x4D, SCALED),
    f("modmatrix15depth", 0x41, 0x4E, SCALED),
    f("modmatrix16depth", 0x41, 0x4F, SCALED),
    f("modmatrix17depth", 0x41, 0x50, SCALED),
    f("modmatrix18depth", 0x41, 0x51, SCALED),
    f("modmatrix19depth", 0x41, 0x52, SCALED),
    f("modmatrix20depth", 0x41, 0x53, SCALED),
    f("modmatrix21depth", 0x41, 0x54, SCALED),
    f("modmatrix22depth", 0x41, 0x55, SCALED),
    f("modmatrix23depth", 0x41, 0x56, SCALED),
    f("modmatrix24depth", 0x41, 0x57, SCALED),
    f("modmatrix25depth", 0x41, 0x58, SCALED),
    f("modmatrix26depth", 0x41, 0x59, SCALED),
    f("modmatrix27depth", 0x41, 0x5A, SCALED),
    f("modmatrix28depth", 0x41, 0x5B, SCALED),
    f("modmatrix29depth", 0x41, 0x5C, SCALED),
    f("modmatrix30depth", 0x41, 0x5D, SCALED),
    f("modmatrix31depth", 0x41, 0x5E, SCALED),
    f("modmatrix32depth", 0x41, 0x5F, SCALED),
    reg("ribbonmode", 0x3F, 0x3B, 0),
    reg("ribbonkeyspan", 0x3F, 0x3B, 1),
    reg("ribbonoctave", 0x3F, 0x3B, 2),
    reg("ribbonquantize", 0x3F, 0x3B, 3),
    reg("ribbonmodcontrol", 0x3F, 0x3B, 16),
    reg("ribbonglide", 0x3F, 0x3B, 17),
    f("voicedetune", 0x3F, 0x39, DIRECT),
    f("voicestereowidth", 0x3F, 0x44, DIRECT),
    f("voicevibratoamount", 0x3F, 0x43, DIRECT),
    f("voiceanalogfeel", 0x3F, 0x46, DIRECT),
    f("voicedensity", 0x3F, 0x3C, DIRECT),
    f("voiceglidecurve", 0x3F, 0x14, DIRECT),
    f("voiceglide", 0x3F, 0x12, DIRECT),
    f("voiceglidelegato", 0x3F, 0x1F, DIRECT),
    f("voiceglidetime", 0x3F, 0x15, DIRECT),
    f("voicestereomode", 0x3F, 0x48, DIRECT),
    f("voicepolyphony", 0x3F, 0x13, DIRECT),
    f("voicepitchbend", 0x3F, 0x41, DIRECT),
    f("voicevibratoratesyncoff", 0x3F, 0x42, DIRECT).sync_off("voicevibratobpm"),
    f("voicevibratoratesyncon", 0x3F, 0x3F, DIRECT).sync_on("voicevibratobpm"),
    f("voicerandomphase", 0x3F, 0x1E, DIRECT),
    f("voicewarmmode", 0x3F, 0x4F, DIRECT),
    f("voicevibratobpm", 0x3F, 0x49, DIRECT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        assert_eq!(BY_KEY.len(), FIELDS.len());
    }

    #[test]
    fn corrected_runs() {
        assert_eq!(field("lfo4step1").unwrap().address, 0x3A * 128 + 0x28);
        assert_eq!(field("lfo3step8").unwrap().address, 0x3A * 128 + 0x27);
        assert_eq!(field("macro6target1").unwrap().address, 0x3E * 128 + 0x58);
        assert_eq!(field("macro5target8").unwrap().address, 0x3E * 128 + 0x57);
    }

    #[test]
    fn register_siblings_have_distinct_selectors() {
        for siblings in BY_ADDRESS.values() {
            let mut seen = std::collections::HashMap::new();
            for f in siblings {
                if let Codec::Register { selector, .. } = f.codec {
                    // LFO 1 and envelope 5 share an address; the LFO owns
                    // the selectors both of them use.
                    if let Some(first) = seen.insert(selector, f.key) {
                        assert!(
                            first.starts_with("lfo1") && f.key.starts_with("env5"),
                            "{first} and {} clash",
                            f.key
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sync_gates() {
        let on = field("env3attacksyncon").unwrap().gate.unwrap();
        assert_eq!(on.flag(), "env3bpmsync");
        assert!(on.is_open(1));
        assert!(!on.is_open(0));
        let off = field("voicevibratoratesyncoff").unwrap().gate.unwrap();
        assert_eq!(off, Gate::SyncOff("voicevibratobpm"));
        assert!(field("lfo2level").unwrap().gate.is_none());
    }

    #[test]
    fn mod_matrix_slots_share_an_address() {
        let shared = at_address(0x3E * 128 + 0x04);
        let keys: Vec<_> = shared.iter().map(|f| f.key).collect();
        assert_eq!(keys, ["modmatrix5modsource", "modmatrix5modtarget"]);
        assert!(at_address(0).is_empty());
    }
}
