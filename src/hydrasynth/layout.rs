//! Byte layout of the 2790-byte patch image.
//!
//! Every parameter the bulk format carries is described by a [`Field`]:
//! where it lives, how wide it is, and its legal range. The table is built
//! once, section by section, and is immutable afterwards. The per-type
//! effect parameters are not plain fields; see [`FxBlock`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Size of a complete patch image.
pub const IMAGE_SIZE: usize = 2790;

/// Offset of the format version tag.
pub const VERSION_OFFSET: usize = 4;

/// Byte 0 of every image written to the synth.
pub const WRITE_MODE: u8 = 0x06;

/// Bytes the synth insists on. Nobody knows what they mean, but later
/// fields read back as garbage when they are missing.
pub const MYSTERY_BYTES: [(usize, u8); 4] = [(5, 0x8C), (6, 0x02), (390, 0x01), (2296, 0x50)];

/// Number of effect types, including Bypass.
pub const FX_TYPES: i32 = 10;

/// Patch format version, from the tag at [`VERSION_OFFSET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Version {
    V1_5,
    V2_0,
}

impl Version {
    pub fn from_tag(tag: u8) -> Option<Version> {
        match tag {
            0xC8 => Some(Version::V1_5),
            0xC9 => Some(Version::V2_0),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Version::V1_5 => 0xC8,
            Version::V2_0 => 0xC9,
        }
    }
}

/// One of two boolean flags packed into a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bit {
    Low,
    High,
}

impl Bit {
    fn mask(self) -> u8 {
        match self {
            Bit::Low => 0x01,
            Bit::High => 0x02,
        }
    }

    pub fn get(self, byte: u8) -> i32 {
        i32::from(byte & self.mask() != 0)
    }

    /// Returns `byte` with this flag set or cleared, leaving the sibling alone.
    pub fn set(self, byte: u8, on: bool) -> u8 {
        if on {
            byte | self.mask()
        } else {
            byte & !self.mask()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    U8,
    S8,
    /// Little-endian 16 bits.
    U16,
    S16,
    Flag(Bit),
    /// Value split into `value / 10` at the field offset and `value % 10`
    /// at the distant offset `rem`.
    Split { rem: usize },
    /// Space-padded ASCII of the given length.
    Text(usize),
}

impl Kind {
    pub fn width(self) -> usize {
        match self {
            Kind::U8 | Kind::S8 | Kind::Flag(_) | Kind::Split { .. } => 1,
            Kind::U16 | Kind::S16 => 2,
            Kind::Text(n) => n,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, Kind::Text(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub offset: usize,
    pub kind: Kind,
    pub min: i32,
    pub max: i32,
    /// First format version that carries this field.
    pub since: Version,
}

/// The five parameters of whichever effect type is selected. They occupy a
/// single run of 16-bit slots; only the selected type's keys are read or
/// written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FxBlock {
    /// `prefx` or `postfx`.
    pub prefix: &'static str,
    pub offset: usize,
}

impl FxBlock {
    pub fn type_key(&self) -> String {
        format!("{}type", self.prefix)
    }

    pub fn param_key(&self, fx_type: i32, param: usize) -> String {
        format!("{}{fx_type}param{param}", self.prefix)
    }

    pub fn param_offset(&self, param: usize) -> usize {
        self.offset + 2 * (param - 1)
    }
}

/// Ranges of the five per-type effect parameters, indexed by effect type.
/// Bypass has no parameters.
const FX_PARAM_RANGES: [[(i32, i32); 5]; 9] = [
    [(0, 1024), (0, 1024), (0, 360), (1, 127), (0, 1)],      // chorus
    [(0, 1024), (0, 1024), (0, 360), (1, 127), (0, 1)],      // flanger
    [(0, 1024), (0, 1024), (0, 127), (0, 127), (1, 127)],    // rotary
    [(0, 1024), (0, 1024), (0, 127), (0, 127), (0, 360)],    // phaser
    [(0, 1024), (0, 1023), (0, 5), (58, 100), (1, 16)],      // lo-fi
    [(0, 1024), (0, 1024), (0, 1), (0, 360), (0, 127)],      // tremolo
    [(0, 1020), (0, 1020), (0, 600), (16, 1000), (32, 1000)], // eq
    [(51, 1020), (0, 1024), (1, 400), (5, 560), (0, 512)],   // compressor
    [(0, 1024), (0, 1024), (0, 128), (0, 128), (0, 600)],    // distortion
];

/// Range of `param` (1..=5) for `fx_type` (1..=9).
pub fn fx_param_range(fx_type: i32, param: usize) -> Option<(i32, i32)> {
    let t = usize::try_from(fx_type - 1).ok()?;
    FX_PARAM_RANGES.get(t)?.get(param.checked_sub(1)?).copied()
}

pub struct Layout {
    pub fields: Vec<Field>,
    pub fx: [FxBlock; 2],
    index: HashMap<String, usize>,
}

impl Layout {
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.index.get(key).map(|&i| &self.fields[i])
    }
}

pub static LAYOUT: Lazy<Layout> = Lazy::new(build);

fn build() -> Layout {
    let mut b = Builder::default();
    header(&mut b);
    voice(&mut b);
    oscillators(&mut b);
    mutants(&mut b);
    mixer(&mut b);
    filters(&mut b);
    effects(&mut b);
    lfos(&mut b);
    envelopes(&mut b);
    matrix(&mut b);
    macros(&mut b);
    arpeggiator(&mut b);
    version_2_block(&mut b);
    let index = b
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| (f.key.clone(), i))
        .collect();
    Layout {
        fields: b.fields,
        fx: [
            FxBlock {
                prefix: "prefx",
                offset: 438,
            },
            FxBlock {
                prefix: "postfx",
                offset: 486,
            },
        ],
        index,
    }
}

#[derive(Default)]
struct Builder {
    fields: Vec<Field>,
    since: Option<Version>,
}

impl Builder {
    fn push(&mut self, key: impl Into<String>, offset: usize, kind: Kind, min: i32, max: i32) {
        self.fields.push(Field {
            key: key.into(),
            offset,
            kind,
            min,
            max,
            since: self.since.unwrap_or(Version::V1_5),
        });
    }
    fn u8(&mut self, key: impl Into<String>, offset: usize, min: i32, max: i32) {
        self.push(key, offset, Kind::U8, min, max);
    }
    fn s8(&mut self, key: impl Into<String>, offset: usize, min: i32, max: i32) {
        self.push(key, offset, Kind::S8, min, max);
    }
    fn u16(&mut self, key: impl Into<String>, offset: usize, min: i32, max: i32) {
        self.push(key, offset, Kind::U16, min, max);
    }
    fn s16(&mut self, key: impl Into<String>, offset: usize, min: i32, max: i32) {
        self.push(key, offset, Kind::S16, min, max);
    }
    fn flag(&mut self, key: impl Into<String>, offset: usize, bit: Bit) {
        self.push(key, offset, Kind::Flag(bit), 0, 1);
    }
    fn level(&mut self, key: impl Into<String>, offset: usize) {
        self.u16(key, offset, 0, 1024);
    }
}

fn header(b: &mut Builder) {
    b.u8("bank", 2, 0, 7);
    b.u8("number", 3, 0, 127);
    b.u8("category", 8, 0, 18);
    b.push("name", 9, Kind::Text(16), 0, 0);
    b.u8("color", 26, 0, 31);
}

fn voice(b: &mut Builder) {
    b.u8("voicepolyphony", 32, 0, 6);
    b.u8("voicedensity", 33, 1, 8);
    b.u8("voicedetune", 34, 0, 127);
    b.u8("voiceanalogfeel", 35, 0, 127);
    b.u8("voicestereomode", 36, 0, 2);
    b.u8("voicestereowidth", 37, 0, 127);
    b.u8("voicepitchbend", 38, 0, 24);
    b.u8("voicevibratoamount", 39, 0, 12);
    b.u8("voicevibratoratesyncoff", 40, 0, 127);
    b.u8("voicevibratoratesyncon", 41, 0, 15);
    b.flag("voiceglide", 42, Bit::Low);
    b.flag("voiceglidelegato", 42, Bit::High);
    b.flag("voicerandomphase", 43, Bit::Low);
    b.flag("voicewarmmode", 43, Bit::High);
    b.u8("voicevibratobpm", 44, 0, 1);
    b.u8("voiceglidecurve", 45, 0, 128);
    b.u8("voiceglidetime", 46, 0, 127);
    b.u8("ribbonmode", 47, 0, 2);
    b.u8("ribbonkeyspan", 48, 0, 2);
    b.u8("ribbonoctave", 49, 0, 8);
    b.flag("ribbonquantize", 50, Bit::Low);
    b.flag("ribbonmodcontrol", 50, Bit::High);
    b.u8("ribbonglide", 51, 0, 127);
}

fn oscillators(b: &mut Builder) {
    for osc in 1..=3 {
        let base = 64 + 40 * (osc - 1);
        let k = |s: &str| format!("osc{osc}{s}");
        b.u16(k("type"), base + 1, 0, 218);
        b.s8(k("semi"), base + 3, -36, 36);
        b.s16(k("cent"), base + 4, -50, 50);
        b.u8(k("keytrack"), base + 6, 0, 200);
        if osc == 3 {
            continue;
        }
        b.u8(k("mode"), base, 0, 1);
        b.level(k("wavscan"), base + 7);
        for i in 1..=8 {
            b.u8(k(&format!("wavscanwave{i}")), base + 8 + i, 0, 218);
            b.u8(k(&format!("solowavscan{i}")), base + 16 + i, 0, 127);
        }
    }
}

fn mutants(b: &mut Builder) {
    for m in 1..=4 {
        let base = 184 + 36 * (m - 1);
        let k = |s: &str| format!("mutant{m}{s}");
        b.u8(k("mode"), base, 0, 7);
        b.u8(k("sourcefmlin"), base + 1, 0, 12);
        b.u8(k("sourceoscsync"), base + 2, 0, 2);
        for (i, s) in ["ratio", "depth", "wet", "feedback", "window"].iter().enumerate() {
            b.level(k(s), base + 4 + 2 * i);
        }
        for i in 1..=8 {
            b.level(k(&format!("warp{i}")), base + 12 + 2 * i);
        }
    }
}

fn mixer(b: &mut Builder) {
    b.u8("ringmodsource1", 328, 0, 9);
    b.u8("ringmodsource2", 329, 0, 9);
    b.level("ringmoddepth", 330);
    b.u8("noisetype", 332, 0, 6);
    b.u8("mixersolo", 333, 0, 1);
    b.u8("mixerfilterrouting", 334, 0, 1);
    for (i, src) in ["osc1", "osc2", "osc3", "noise", "ringmod"].iter().enumerate() {
        let base = 336 + 6 * i;
        b.level(format!("mixer{src}vol"), base);
        b.level(format!("mixer{src}pan"), base + 2);
        b.level(format!("mixer{src}filterratio"), base + 4);
    }
}

fn filters(b: &mut Builder) {
    b.u8("filter1type", 368, 0, 15);
    b.u8("filter1positionofdrive", 369, 0, 1);
    b.u8("filter1vowelorder", 370, 0, 7);
    let f1 = [
        "cutoff",
        "resonance",
        "drive",
        "special",
        "keytrack",
        "lfo1amount",
        "velenv",
        "env1amount",
    ];
    for (i, s) in f1.iter().enumerate() {
        b.level(format!("filter1{s}"), 372 + 2 * i);
    }
    b.u8("filter2type", 392, 0, 1);
    b.u8("filter2positionofdrive", 393, 0, 1);
    let f2 = [
        "cutoff",
        "resonance",
        "morph",
        "keytrack",
        "lfo1amount",
        "velenv",
        "env1amount",
    ];
    for (i, s) in f2.iter().enumerate() {
        b.level(format!("filter2{s}"), 394 + 2 * i);
    }
    b.level("amplevel", 416);
    b.level("ampvelenv", 418);
    b.level("amplfo2amount", 420);
}

fn effects(b: &mut Builder) {
    for (prefix, base) in [("prefx", 432), ("postfx", 480)] {
        b.u8(format!("{prefix}type"), base, 0, FX_TYPES - 1);
        b.u8(format!("{prefix}preset"), base + 1, 0, 6);
        b.level(format!("{prefix}wet"), base + 4);
    }
    b.u8("delaytype", 448, 0, 4);
    b.u8("delaybpmsync", 449, 0, 1);
    b.level("delaytimesyncoff", 450);
    b.u8("delaytimesyncon", 452, 0, 20);
    b.level("delayfeedback", 454);
    b.level("delayfeedtone", 456);
    b.level("delaywettone", 458);
    b.level("delaywet", 460);

    b.u8("reverbtype", 464, 0, 3);
    b.push("reverbpredelay", 466, Kind::Split { rem: 2300 }, 0, 1024);
    b.level("reverbtime", 468);
    b.level("reverbtone", 470);
    b.level("reverbhidamp", 472);
    b.level("reverblodamp", 474);
    b.level("reverbwet", 476);
}

fn lfos(b: &mut Builder) {
    for lfo in 1..=5 {
        let base = 512 + 160 * (lfo - 1);
        let k = |s: &str| format!("lfo{lfo}{s}");
        b.u8(k("wave"), base, 0, 10);
        b.u8(k("bpmsync"), base + 1, 0, 1);
        b.u8(k("trigsync"), base + 2, 0, 2);
        b.u8(k("oneshot"), base + 3, 0, 1);
        b.level(k("ratesyncoff"), base + 4);
        b.u8(k("ratesyncon"), base + 6, 0, 26);
        b.u8(k("delaysyncoff"), base + 7, 0, 127);
        b.u8(k("delaysyncon"), base + 8, 0, 27);
        b.u8(k("fadeinsyncoff"), base + 9, 0, 127);
        b.u8(k("fadeinsyncon"), base + 10, 0, 27);
        b.u8(k("smooth"), base + 11, 0, 127);
        b.u8(k("steps"), base + 12, 2, 64);
        b.u16(k("phase"), base + 14, 0, 360);
        b.level(k("level"), base + 16);
        for step in 1..=64 {
            b.level(k(&format!("step{step}")), base + 16 + 2 * step);
        }
    }
}

fn envelopes(b: &mut Builder) {
    for env in 1..=5 {
        let base = 1312 + 48 * (env - 1);
        let k = |s: &str| format!("env{env}{s}");
        b.u8(k("delaysyncoff"), base, 0, 127);
        b.u8(k("delaysyncon"), base + 1, 0, 27);
        for (i, s) in ["attack", "hold", "decay", "release"].iter().enumerate() {
            b.level(k(&format!("{s}syncoff")), base + 2 + 2 * i);
            b.u8(k(&format!("{s}syncon")), base + 10 + i, 0, 27);
        }
        b.level(k("sustain"), base + 14);
        b.u8(k("atkcurve"), base + 16, 0, 128);
        b.u8(k("deccurve"), base + 17, 0, 128);
        b.u8(k("relcurve"), base + 18, 0, 128);
        b.u8(k("loop"), base + 19, 0, 50);
        b.flag(k("legato"), base + 20, Bit::Low);
        b.flag(k("freerun"), base + 20, Bit::High);
        b.flag(k("reset"), base + 21, Bit::Low);
        b.flag(k("bpmsync"), base + 21, Bit::High);
        b.u8(k("trigsrc1"), base + 22, 0, 11);
        b.u8(k("trigsrc2"), base + 23, 0, 11);
    }
}

fn matrix(b: &mut Builder) {
    for slot in 1..=32 {
        let base = 1552 + 6 * (slot - 1);
        b.u16(format!("modmatrix{slot}modsource"), base, 0, 160);
        b.u16(format!("modmatrix{slot}modtarget"), base + 2, 0, 329);
        b.level(format!("modmatrix{slot}depth"), base + 4);
    }
}

fn macros(b: &mut Builder) {
    for m in 1..=8 {
        let base = 1760 + 64 * (m - 1);
        let k = |s: String| format!("macro{m}{s}");
        b.push(k("name".into()), base, Kind::Text(8), 0, 0);
        b.u16(k("panelvalue".into()), base + 8, 0, 127);
        for i in 1..=8 {
            b.u16(k(format!("target{i}")), base + 8 + 2 * i, 0, 329);
            b.level(k(format!("depth{i}")), base + 24 + 2 * i);
            b.level(k(format!("buttonvalue{i}")), base + 40 + 2 * i);
        }
    }
}

fn arpeggiator(b: &mut Builder) {
    b.u8("arpmode", 2280, 0, 7);
    b.u8("arpdivision", 2281, 0, 11);
    b.u8("arpswing", 2282, 50, 75);
    b.u8("arpgate", 2283, 5, 100);
    b.u8("arpoctave", 2284, 1, 4);
    b.u8("arpoctmode", 2285, 0, 4);
    b.u8("arplength", 2286, 0, 32);
    b.u8("arptaptrig", 2287, 0, 1);
    b.u8("arpphrase", 2288, 1, 64);
}

/// Fields added by the 2.0.0 firmware.
fn version_2_block(b: &mut Builder) {
    b.since = Some(Version::V2_0);
    for env in 1..=5 {
        let base = 2390 + 2 * (env - 1);
        b.u8(format!("env{env}trigsrc3"), base, 0, 11);
        b.u8(format!("env{env}trigsrc4"), base + 1, 0, 11);
    }
    b.u8("arpratchet", 2400, 0, 127);
    b.u8("arpchance", 2401, 0, 100);
    b.u8("prefxsidechain", 2402, 0, 4);
    b.u8("postfxsidechain", 2403, 0, 4);
    b.since = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_do_not_overlap() {
        let mut owner: Vec<Option<&str>> = vec![None; IMAGE_SIZE];
        for (offset, _) in MYSTERY_BYTES {
            owner[offset] = Some("mystery");
        }
        owner[0] = Some("write mode");
        owner[VERSION_OFFSET] = Some("version");
        let mut claim = |offset: usize, key: &'static str| {
            if let Some(other) = owner[offset] {
                // Flags share their byte with exactly one sibling.
                assert!(
                    other.starts_with("flag:") && key.starts_with("flag:"),
                    "{key} overlaps {other} at {offset}"
                );
            }
            owner[offset] = Some(key);
        };
        for f in &LAYOUT.fields {
            let key: &'static str = Box::leak(match f.kind {
                Kind::Flag(_) => format!("flag:{}", f.key).into_boxed_str(),
                _ => f.key.clone().into_boxed_str(),
            });
            for i in 0..f.kind.width() {
                claim(f.offset + i, key);
            }
            if let Kind::Split { rem } = f.kind {
                claim(rem, key);
            }
        }
        for fx in &LAYOUT.fx {
            for p in 1..=5 {
                claim(fx.param_offset(p), fx.prefix);
                claim(fx.param_offset(p) + 1, fx.prefix);
            }
        }
    }

    #[test]
    fn keys_are_unique_and_fit() {
        let mut seen = std::collections::HashSet::new();
        for f in &LAYOUT.fields {
            assert!(seen.insert(f.key.as_str()), "duplicate key {}", f.key);
            assert!(f.offset + f.kind.width() <= IMAGE_SIZE);
            assert!(f.min <= f.max);
        }
        assert!(LAYOUT.field("lfo5step64").is_some());
        assert!(LAYOUT.field("macro8buttonvalue8").is_some());
        assert!(LAYOUT.field("osc3wavscan").is_none());
    }

    #[test]
    fn flag_bits_are_independent() {
        let byte = Bit::High.set(Bit::Low.set(0, true), true);
        assert_eq!(byte, 0x03);
        let byte = Bit::Low.set(byte, false);
        assert_eq!(Bit::Low.get(byte), 0);
        assert_eq!(Bit::High.get(byte), 1);
    }

    #[test]
    fn version_tags() {
        assert_eq!(Version::from_tag(0xC8), Some(Version::V1_5));
        assert_eq!(Version::from_tag(0xC9), Some(Version::V2_0));
        assert_eq!(Version::from_tag(0x00), None);
        assert_eq!(Version::V2_0.tag(), 0xC9);
    }

    #[test]
    fn fx_ranges() {
        assert_eq!(fx_param_range(1, 3), Some((0, 360)));
        assert_eq!(fx_param_range(9, 5), Some((0, 600)));
        assert_eq!(fx_param_range(0, 1), None);
        assert_eq!(fx_param_range(10, 1), None);
        assert_eq!(fx_param_range(1, 6), None);
    }
}
