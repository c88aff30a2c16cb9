//! Modulation source and destination remapping.
//!
//! The editor numbers modulation sources and destinations contiguously, but
//! on the wire each one has a sparse, hand-assigned 14-bit value. These
//! tables translate between the two. The order of the entries is the
//! editor's index order and must not change.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::OnceCell;

/// One remap entry: the 14-bit wire value and a display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub wire: u16,
    pub name: &'static str,
}

const fn e(msb: u16, lsb: u16, name: &'static str) -> Entry {
    Entry {
        wire: msb * 128 + lsb,
        name,
    }
}

/// An index remap table with a lazily built reverse lookup.
pub struct RemapTable {
    label: &'static str,
    entries: &'static [Entry],
    reverse: OnceCell<HashMap<u16, usize>>,
}

impl RemapTable {
    const fn new(label: &'static str, entries: &'static [Entry]) -> Self {
        RemapTable {
            label,
            entries,
            reverse: OnceCell::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Wire value for an editor index, or `None` if the index is out of range.
    pub fn wire(&self, index: usize) -> Option<u16> {
        self.entries.get(index).map(|e| e.wire)
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|e| e.name)
    }

    /// Editor index for a wire value. The synth sends values that are not in
    /// the table; those map to index 0 ("Off").
    pub fn index(&self, wire: u16) -> usize {
        match self.reverse_map().get(&wire) {
            Some(i) => *i,
            None => {
                debug!("unknown {} wire value {wire:#06x}, using 0", self.label);
                0
            }
        }
    }

    fn reverse_map(&self) -> &HashMap<u16, usize> {
        self.reverse.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.entries.len());
            for (i, entry) in self.entries.iter().enumerate() {
                // Sustain Ped and CC 64 share a wire value; the first one wins.
                map.entry(entry.wire).or_insert(i);
            }
            map
        })
    }
}

/// Modulation matrix sources.
pub static MOD_SOURCES: RemapTable = RemapTable::new("mod source", &SOURCE_ENTRIES);

/// Modulation matrix and macro destinations.
pub static MOD_DESTINATIONS: RemapTable =
    RemapTable::new("mod destination", &DESTINATION_ENTRIES);

static SOURCE_ENTRIES: [Entry; 161] = [
    e(0x01, 0x00, "Off"),
    e(0x01, 0x01, "Env 1"),
    e(0x01, 0x02, "Env 2"),
    e(0x01, 0x03, "Env 3"),
    e(0x01, 0x04, "Env 4"),
    e(0x01, 0x05, "Env 5"),
    e(0x01, 0x06, "LFO 1"),
    e(0x01, 0x07, "LFO 2"),
    e(0x01, 0x08, "LFO 3"),
    e(0x01, 0x09, "LFO 4"),
    e(0x01, 0x0A, "LFO 5"),
    e(0x01, 0x0B, "LFO 1 Unipolar"),
    e(0x01, 0x0C, "LFO 2 Unipolar"),
    e(0x01, 0x0D, "LFO 3 Unipolar"),
    e(0x01, 0x0E, "LFO 4 Unipolar"),
    e(0x01, 0x0F, "LFO 5 Unipolar"),
    e(0x01, 0x12, "Chan Aftertouch"),
    e(0x01, 0x13, "Poly Aftertouch"),
    e(0x01, 0x16, "Keytrack"),
    e(0x01, 0x14, "Note-On Vel"),
    e(0x03, 0x2B, "Note-Off Vel"),
    e(0x01, 0x17, "Pitch Wheel"),
    e(0x01, 0x18, "Mod Wheel"),
    e(0x01, 0x1B, "Ribbon Absolute"),
    e(0x01, 0x19, "Ribbon Unipolar"),
    e(0x01, 0x1C, "Ribbon Relative"),
    e(0x01, 0x1F, "Expression Ped"),
    e(0x01, 0x68, "Sustain Ped"),
    e(0x01, 0x1D, "Mod In 1"),
    e(0x01, 0x1E, "Mod In 2"),
    e(0x03, 0x28, "MPE-X"),
    e(0x03, 0x2A, "MPE-Y Absolute"),
    e(0x03, 0x2E, "MPE-Y Relative"),
    e(0x01, 0x28, "CC 0"),
    e(0x01, 0x29, "CC 1"),
    e(0x01, 0x2A, "CC 2"),
    e(0x01, 0x2B, "CC 3"),
    e(0x01, 0x2C, "CC 4"),
    e(0x01, 0x2D, "CC 5"),
    e(0x01, 0x2E, "CC 6"),
    e(0x01, 0x2F, "CC 7"),
    e(0x01, 0x30, "CC 8"),
    e(0x01, 0x31, "CC 9"),
    e(0x01, 0x32, "CC 10"),
    e(0x01, 0x33, "CC 11"),
    e(0x01, 0x34, "CC 12"),
    e(0x01, 0x35, "CC 13"),
    e(0x01, 0x36, "CC 14"),
    e(0x01, 0x37, "CC 15"),
    e(0x01, 0x38, "CC 16"),
    e(0x01, 0x39, "CC 17"),
    e(0x01, 0x3A, "CC 18"),
    e(0x01, 0x3B, "CC 19"),
    e(0x01, 0x3C, "CC 20"),
    e(0x01, 0x3D, "CC 21"),
    e(0x01, 0x3E, "CC 22"),
    e(0x01, 0x3F, "CC 23"),
    e(0x01, 0x40, "CC 24"),
    e(0x01, 0x41, "CC 25"),
    e(0x01, 0x42, "CC 26"),
    e(0x01, 0x43, "CC 27"),
    e(0x01, 0x44, "CC 28"),
    e(0x01, 0x45, "CC 29"),
    e(0x01, 0x46, "CC 30"),
    e(0x01, 0x47, "CC 31"),
    e(0x01, 0x48, "CC 32"),
    e(0x01, 0x49, "CC 33"),
    e(0x01, 0x4A, "CC 34"),
    e(0x01, 0x4B, "CC 35"),
    e(0x01, 0x4C, "CC 36"),
    e(0x01, 0x4D, "CC 37"),
    e(0x01, 0x4E, "CC 38"),
    e(0x01, 0x4F, "CC 39"),
    e(0x01, 0x50, "CC 40"),
    e(0x01, 0x51, "CC 41"),
    e(0x01, 0x52, "CC 42"),
    e(0x01, 0x53, "CC 43"),
    e(0x01, 0x54, "CC 44"),
    e(0x01, 0x55, "CC 45"),
    e(0x01, 0x56, "CC 46"),
    e(0x01, 0x57, "CC 47"),
    e(0x01, 0x58, "CC 48"),
    e(0x01, 0x59, "CC 49"),
    e(0x01, 0x5A, "CC 50"),
    e(0x01, 0x5B, "CC 51"),
    e(0x01, 0x5C, "CC 52"),
    e(0x01, 0x5D, "CC 53"),
    e(0x01, 0x5E, "CC 54"),
    e(0x01, 0x5F, "CC 55"),
    e(0x01, 0x60, "CC 56"),
    e(0x01, 0x61, "CC 57"),
    e(0x01, 0x62, "CC 58"),
    e(0x01, 0x63, "CC 59"),
    e(0x01, 0x64, "CC 60"),
    e(0x01, 0x65, "CC 61"),
    e(0x01, 0x66, "CC 62"),
    e(0x01, 0x67, "CC 63"),
    e(0x01, 0x68, "CC 64"),
    e(0x01, 0x69, "CC 65"),
    e(0x01, 0x6A, "CC 66"),
    e(0x01, 0x6B, "CC 67"),
    e(0x01, 0x6C, "CC 68"),
    e(0x01, 0x6D, "CC 69"),
    e(0x01, 0x6E, "CC 70"),
    e(0x01, 0x6F, "CC 71"),
    e(0x01, 0x70, "CC 72"),
    e(0x01, 0x71, "CC 73"),
    e(0x01, 0x72, "CC 74"),
    e(0x01, 0x73, "CC 75"),
    e(0x01, 0x74, "CC 76"),
    e(0x01, 0x75, "CC 77"),
    e(0x01, 0x76, "CC 78"),
    e(0x01, 0x77, "CC 79"),
    e(0x01, 0x78, "CC 80"),
    e(0x01, 0x79, "CC 81"),
    e(0x01, 0x7A, "CC 82"),
    e(0x01, 0x7B, "CC 83"),
    e(0x01, 0x7C, "CC 84"),
    e(0x01, 0x7D, "CC 85"),
    e(0x01, 0x7E, "CC 86"),
    e(0x01, 0x7F, "CC 87"),
    e(0x03, 0x00, "CC 88"),
    e(0x03, 0x01, "CC 89"),
    e(0x03, 0x02, "CC 90"),
    e(0x03, 0x03, "CC 91"),
    e(0x03, 0x04, "CC 92"),
    e(0x03, 0x05, "CC 93"),
    e(0x03, 0x06, "CC 94"),
    e(0x03, 0x07, "CC 95"),
    e(0x03, 0x08, "CC 96"),
    e(0x03, 0x09, "CC 97"),
    e(0x03, 0x0A, "CC 98"),
    e(0x03, 0x0B, "CC 99"),
    e(0x03, 0x0C, "CC 100"),
    e(0x03, 0x0D, "CC 101"),
    e(0x03, 0x0E, "CC 102"),
    e(0x03, 0x0F, "CC 103"),
    e(0x03, 0x10, "CC 104"),
    e(0x03, 0x11, "CC 105"),
    e(0x03, 0x12, "CC 106"),
    e(0x03, 0x13, "CC 107"),
    e(0x03, 0x14, "CC 108"),
    e(0x03, 0x15, "CC 109"),
    e(0x03, 0x16, "CC 110"),
    e(0x03, 0x17, "CC 111"),
    e(0x03, 0x18, "CC 112"),
    e(0x03, 0x19, "CC 113"),
    e(0x03, 0x1A, "CC 114"),
    e(0x03, 0x1B, "CC 115"),
    e(0x03, 0x1C, "CC 116"),
    e(0x03, 0x1D, "CC 117"),
    e(0x03, 0x1E, "CC 118"),
    e(0x03, 0x1F, "CC 119"),
    e(0x03, 0x20, "CC 120"),
    e(0x03, 0x21, "CC 121"),
    e(0x03, 0x22, "CC 122"),
    e(0x03, 0x23, "CC 123"),
    e(0x03, 0x24, "CC 124"),
    e(0x03, 0x25, "CC 125"),
    e(0x03, 0x26, "CC 126"),
    e(0x03, 0x27, "CC 127"),
];

static DESTINATION_ENTRIES: [Entry; 330] = [
    e(0x02, 0x00, "Off"),
    e(0x04, 0x30, "Arp Mode"),
    e(0x04, 0x36, "Arp Division"),
    e(0x04, 0x37, "Arp Swing"),
    e(0x04, 0x35, "Arp Gate"),
    e(0x04, 0x32, "Arp Octave"),
    e(0x04, 0x33, "Arp Oct Mode"),
    e(0x04, 0x34, "Arp Length"),
    e(0x04, 0x31, "Arp Phrase"),
    e(0x04, 0x38, "Arp Ratchet"),
    e(0x04, 0x39, "Arp Chance"),
    e(0x04, 0x01, "Osc 1 Pitch"),
    e(0x04, 0x3A, "Osc 1 Wave"),
    e(0x04, 0x2A, "Osc 1 WaveScan"),
    e(0x04, 0x02, "Osc 2 Pitch"),
    e(0x04, 0x3B, "Osc 2 Wave"),
    e(0x04, 0x2B, "Osc 2 WaveScan"),
    e(0x04, 0x03, "Osc 3 Pitch"),
    e(0x04, 0x3C, "Osc 3 Wave"),
    e(0x04, 0x04, "All Osc Pitch"),
    e(0x04, 0x2C, "Mut 1 Ratio"),
    e(0x02, 0x1F, "Mut 1 Depth"),
    e(0x02, 0x1C, "Mut 1 Window"),
    e(0x02, 0x25, "Mut 1 Feedback"),
    e(0x02, 0x22, "Mut 1 Dry/Wet"),
    e(0x02, 0x60, "Mut 1 Warp 1"),
    e(0x02, 0x61, "Mut 1 Warp 2"),
    e(0x02, 0x62, "Mut 1 Warp 3"),
    e(0x02, 0x63, "Mut 1 Warp 4"),
    e(0x02, 0x64, "Mut 1 Warp 5"),
    e(0x02, 0x65, "Mut 1 Warp 6"),
    e(0x02, 0x66, "Mut 1 Warp 7"),
    e(0x02, 0x67, "Mut 1 Warp 8"),
    e(0x04, 0x2D, "Mut 2 Ratio"),
    e(0x02, 0x20, "Mut 2 Depth"),
    e(0x02, 0x1D, "Mut 2 Window"),
    e(0x02, 0x26, "Mut 2 Feedback"),
    e(0x02, 0x23, "Mut 2 Dry/Wet"),
    e(0x02, 0x68, "Mut 2 Warp 1"),
    e(0x02, 0x69, "Mut 2 Warp 2"),
    e(0x02, 0x6A, "Mut 2 Warp 3"),
    e(0x02, 0x6B, "Mut 2 Warp 4"),
    e(0x02, 0x6C, "Mut 2 Warp 5"),
    e(0x02, 0x6D, "Mut 2 Warp 6"),
    e(0x02, 0x6E, "Mut 2 Warp 7"),
    e(0x02, 0x6F, "Mut 2 Warp 8"),
    e(0x04, 0x2E, "Mut 3 Ratio"),
    e(0x02, 0x21, "Mut 3 Depth"),
    e(0x02, 0x1E, "Mut 3 Window"),
    e(0x02, 0x27, "Mut 3 Feedback"),
    e(0x02, 0x24, "Mut 3 Dry/Wet"),
    e(0x02, 0x70, "Mut 3 Warp 1"),
    e(0x02, 0x71, "Mut 3 Warp 2"),
    e(0x02, 0x72, "Mut 3 Warp 3"),
    e(0x02, 0x73, "Mut 3 Warp 4"),
    e(0x02, 0x74, "Mut 3 Warp 5"),
    e(0x02, 0x75, "Mut 3 Warp 6"),
    e(0x02, 0x76, "Mut 3 Warp 7"),
    e(0x02, 0x77, "Mut 3 Warp 8"),
    e(0x04, 0x2F, "Mut 4 Ratio"),
    e(0x02, 0x16, "Mut 4 Depth"),
    e(0x02, 0x1A, "Mut 4 Window"),
    e(0x02, 0x1B, "Mut 4 Feedback"),
    e(0x02, 0x17, "Mut 4 Dry/Wet"),
    e(0x02, 0x78, "Mut 4 Warp 1"),
    e(0x02, 0x79, "Mut 4 Warp 2"),
    e(0x02, 0x7A, "Mut 4 Warp 3"),
    e(0x02, 0x7B, "Mut 4 Warp 4"),
    e(0x02, 0x7C, "Mut 4 Warp 5"),
    e(0x02, 0x7D, "Mut 4 Warp 6"),
    e(0x02, 0x7E, "Mut 4 Warp 7"),
    e(0x02, 0x7F, "Mut 4 Warp 8"),
    e(0x02, 0x03, "Ring Mod Depth"),
    e(0x02, 0x07, "Osc 1 Vol"),
    e(0x02, 0x09, "Osc 2 Vol"),
    e(0x02, 0x0B, "Osc 3 Vol"),
    e(0x02, 0x01, "Ring Mod Vol"),
    e(0x02, 0x0D, "Noise Vol"),
    e(0x02, 0x08, "Osc 1 Pan"),
    e(0x02, 0x0A, "Osc 2 Pan"),
    e(0x02, 0x0C, "Osc 3 Pan"),
    e(0x02, 0x04, "Ring Mod Pan"),
    e(0x02, 0x0E, "Noise Pan"),
    e(0x02, 0x31, "Osc 1 F1/2"),
    e(0x02, 0x32, "Osc 2 F1/2"),
    e(0x02, 0x33, "Osc 3 F1/2"),
    e(0x02, 0x35, "Ring Mod F1/2"),
    e(0x02, 0x34, "Noise F1/2"),
    e(0x02, 0x28, "Filt 1 Cutoff"),
    e(0x02, 0x29, "Filt 1 Resonance"),
    e(0x02, 0x2B, "Filt 1 Drive"),
    e(0x02, 0x2A, "Filt 1 Control"),
    e(0x04, 0x61, "Filt 1 Env 1"),
    e(0x04, 0x60, "Filt 1 LFO 1"),
    e(0x04, 0x66, "Filt 1 Keytrack"),
    e(0x02, 0x2E, "Filt 2 Morph"),
    e(0x02, 0x2C, "Filt 2 Cutoff"),
    e(0x02, 0x2D, "Filt 2 Resonance"),
    e(0x04, 0x63, "Filt 2 Env 1"),
    e(0x04, 0x62, "Filt 2 LFO 1"),
    e(0x04, 0x67, "Filt 2 Keytrack"),
    e(0x04, 0x64, "Amp LFO 2"),
    e(0x02, 0x02, "Amp Level"),
    e(0x04, 0x6F, "Pre-FX Param1"),
    e(0x04, 0x70, "Pre-FX Param2"),
    e(0x04, 0x6E, "Pre-FX Dry/Wet"),
    e(0x04, 0x74, "Delay Time"),
    e(0x04, 0x75, "Delay Feedback"),
    e(0x04, 0x77, "Delay Wet Tone"),
    e(0x04, 0x76, "Delay Feed Tone"),
    e(0x04, 0x78, "Delay Dry/Wet"),
    e(0x04, 0x79, "Reverb Time"),
    e(0x04, 0x7A, "Reverb Tone"),
    e(0x04, 0x7B, "Reverb Hi Damp"),
    e(0x04, 0x7C, "Reverb Lo Damp"),
    e(0x04, 0x7E, "Reverb Dry/Wet"),
    e(0x04, 0x72, "Post-FX Param1"),
    e(0x04, 0x73, "Post-FX Param2"),
    e(0x04, 0x71, "Post-FX Dry/Wet"),
    e(0x04, 0x11, "Env 1 Attack"),
    e(0x04, 0x16, "Env 1 Hold"),
    e(0x04, 0x1B, "Env 1 Decay"),
    e(0x04, 0x20, "Env 1 Sustain"),
    e(0x04, 0x25, "Env 1 Release"),
    e(0x04, 0x12, "Env 2 Attack"),
    e(0x04, 0x17, "Env 2 Hold"),
    e(0x04, 0x1C, "Env 2 Decay"),
    e(0x04, 0x21, "Env 2 Sustain"),
    e(0x04, 0x26, "Env 2 Release"),
    e(0x04, 0x13, "Env 3 Attack"),
    e(0x04, 0x18, "Env 3 Hold"),
    e(0x04, 0x1D, "Env 3 Decay"),
    e(0x04, 0x22, "Env 3 Sustain"),
    e(0x04, 0x27, "Env 3 Release"),
    e(0x04, 0x14, "Env 4 Attack"),
    e(0x04, 0x19, "Env 4 Hold"),
    e(0x04, 0x1E, "Env 4 Decay"),
    e(0x04, 0x23, "Env 4 Sustain"),
    e(0x04, 0x28, "Env 4 Release"),
    e(0x04, 0x15, "Env 5 Attack"),
    e(0x04, 0x1A, "Env 5 Hold"),
    e(0x04, 0x1F, "Env 5 Decay"),
    e(0x04, 0x24, "Env 5 Sustain"),
    e(0x04, 0x29, "Env 5 Release"),
    e(0x04, 0x05, "LFO 1 Rate"),
    e(0x04, 0x0B, "LFO 1 Level"),
    e(0x04, 0x06, "LFO 2 Rate"),
    e(0x04, 0x0C, "LFO 2 Level"),
    e(0x04, 0x07, "LFO 3 Rate"),
    e(0x04, 0x0D, "LFO 3 Level"),
    e(0x04, 0x08, "LFO 4 Rate"),
    e(0x04, 0x0E, "LFO 4 Level"),
    e(0x04, 0x09, "LFO 5 Rate"),
    e(0x04, 0x0F, "LFO 5 Level"),
    e(0x04, 0x40, "Matrix 1 Depth"),
    e(0x04, 0x41, "Matrix 2 Depth"),
    e(0x04, 0x42, "Matrix 3 Depth"),
    e(0x04, 0x43, "Matrix 4 Depth"),
    e(0x04, 0x44, "Matrix 5 Depth"),
    e(0x04, 0x45, "Matrix 6 Depth"),
    e(0x04, 0x46, "Matrix 7 Depth"),
    e(0x04, 0x47, "Matrix 8 Depth"),
    e(0x04, 0x48, "Matrix 9 Depth"),
    e(0x04, 0x49, "Matrix 10 Depth"),
    e(0x04, 0x4A, "Matrix 11 Depth"),
    e(0x04, 0x4B, "Matrix 12 Depth"),
    e(0x04, 0x4C, "Matrix 13 Depth"),
    e(0x04, 0x4D, "Matrix 14 Depth"),
    e(0x04, 0x4E, "Matrix 15 Depth"),
    e(0x04, 0x4F, "Matrix 16 Depth"),
    e(0x04, 0x50, "Matrix 17 Depth"),
    e(0x04, 0x51, "Matrix 18 Depth"),
    e(0x04, 0x52, "Matrix 19 Depth"),
    e(0x04, 0x53, "Matrix 20 Depth"),
    e(0x04, 0x54, "Matrix 21 Depth"),
    e(0x04, 0x55, "Matrix 22 Depth"),
    e(0x04, 0x56, "Matrix 23 Depth"),
    e(0x04, 0x57, "Matrix 24 Depth"),
    e(0x04, 0x68, "Matrix 25 Depth"),
    e(0x04, 0x69, "Matrix 26 Depth"),
    e(0x04, 0x5A, "Matrix 27 Depth"),
    e(0x04, 0x5B, "Matrix 28 Depth"),
    e(0x04, 0x5C, "Matrix 29 Depth"),
    e(0x04, 0x5D, "Matrix 30 Depth"),
    e(0x04, 0x5E, "Matrix 31 Depth"),
    e(0x04, 0x5F, "Matrix 32 Depth"),
    e(0x02, 0x50, "Macro 1"),
    e(0x02, 0x51, "Macro 2"),
    e(0x02, 0x52, "Macro 3"),
    e(0x02, 0x53, "Macro 4"),
    e(0x02, 0x54, "Macro 5"),
    e(0x02, 0x55, "Macro 6"),
    e(0x02, 0x56, "Macro 7"),
    e(0x02, 0x57, "Macro 8"),
    e(0x02, 0x5A, "Detune"),
    e(0x02, 0x5B, "Analog Feel"),
    e(0x02, 0x5D, "Pitch Bend"),
    e(0x02, 0x5E, "Vibrato Amount"),
    e(0x02, 0x5F, "Vibrato Rate"),
    e(0x02, 0x58, "Glide Time"),
    e(0x02, 0x05, "CV Mod Out 1"),
    e(0x02, 0x06, "CV Mod Out 2"),
    e(0x05, 0x00, "CC 0"),
    e(0x05, 0x01, "CC 1"),
    e(0x05, 0x02, "CC 2"),
    e(0x05, 0x03, "CC 3"),
    e(0x05, 0x04, "CC 4"),
    e(0x05, 0x05, "CC 5"),
    e(0x05, 0x06, "CC 6"),
    e(0x05, 0x07, "CC 7"),
    e(0x05, 0x08, "CC 8"),
    e(0x05, 0x09, "CC 9"),
    e(0x05, 0x0A, "CC 10"),
    e(0x05, 0x0B, "CC 11"),
    e(0x05, 0x0C, "CC 12"),
    e(0x05, 0x0D, "CC 13"),
    e(0x05, 0x0E, "CC 14"),
    e(0x05, 0x0F, "CC 15"),
    e(0x05, 0x10, "CC 16"),
    e(0x05, 0x11, "CC 17"),
    e(0x05, 0x12, "CC 18"),
    e(0x05, 0x13, "CC 19"),
    e(0x05, 0x14, "CC 20"),
    e(0x05, 0x15, "CC 21"),
    e(0x05, 0x16, "CC 22"),
    e(0x05, 0x17, "CC 23"),
    e(0x05, 0x18, "CC 24"),
    e(0x05, 0x19, "CC 25"),
    e(0x05, 0x1A, "CC 26"),
    e(0x05, 0x1B, "CC 27"),
    e(0x05, 0x1C, "CC 28"),
    e(0x05, 0x1D, "CC 29"),
    e(0x05, 0x1E, "CC 30"),
    e(0x05, 0x1F, "CC 31"),
    e(0x05, 0x20, "CC 32"),
    e(0x05, 0x21, "CC 33"),
    e(0x05, 0x22, "CC 34"),
    e(0x05, 0x23, "CC 35"),
    e(0x05, 0x24, "CC 36"),
    e(0x05, 0x25, "CC 37"),
    e(0x05, 0x26, "CC 38"),
    e(0x05, 0x27, "CC 39"),
    e(0x05, 0x28, "CC 40"),
    e(0x05, 0x29, "CC 41"),
    e(0x05, 0x2A, "CC 42"),
    e(0x05, 0x2B, "CC 43"),
    e(0x05, 0x2C, "CC 44"),
    e(0x05, 0x2D, "CC 45"),
    e(0x05, 0x2E, "CC 46"),
    e(0x05, 0x2F, "CC 47"),
    e(0x05, 0x30, "CC 48"),
    e(0x05, 0x31, "CC 49"),
    e(0x05, 0x32, "CC 50"),
    e(0x05, 0x33, "CC 51"),
    e(0x05, 0x34, "CC 52"),
    e(0x05, 0x35, "CC 53"),
    e(0x05, 0x36, "CC 54"),
    e(0x05, 0x37, "CC 55"),
    e(0x05, 0x38, "CC 56"),
    e(0x05, 0x39, "CC 57"),
    e(0x05, 0x3A, "CC 58"),
    e(0x05, 0x3B, "CC 59"),
    e(0x05, 0x3C, "CC 60"),
    e(0x05, 0x3D, "CC 61"),
    e(0x05, 0x3E, "CC 62"),
    e(0x05, 0x3F, "CC 63"),
    e(0x05, 0x40, "CC 64"),
    e(0x05, 0x41, "CC 65"),
    e(0x05, 0x42, "CC 66"),
    e(0x05, 0x43, "CC 67"),
    e(0x05, 0x44, "CC 68"),
    e(0x05, 0x45, "CC 69"),
    e(0x05, 0x46, "CC 70"),
    e(0x05, 0x47, "CC 71"),
    e(0x05, 0x48, "CC 72"),
    e(0x05, 0x49, "CC 73"),
    e(0x05, 0x4A, "CC 74"),
    e(0x05, 0x4B, "CC 75"),
    e(0x05, 0x4C, "CC 76"),
    e(0x05, 0x4D, "CC 77"),
    e(0x05, 0x4E, "CC 78"),
    e(0x05, 0x4F, "CC 79"),
    e(0x05, 0x50, "CC 80"),
    e(0x05, 0x51, "CC 81"),
    e(0x05, 0x52, "CC 82"),
    e(0x05, 0x53, "CC 83"),
    e(0x05, 0x54, "CC 84"),
    e(0x05, 0x55, "CC 85"),
    e(0x05, 0x56, "CC 86"),
    e(0x05, 0x57, "CC 87"),
    e(0x05, 0x58, "CC 88"),
    e(0x05, 0x59, "CC 89"),
    e(0x05, 0x5A, "CC 90"),
    e(0x05, 0x5B, "CC 91"),
    e(0x05, 0x5C, "CC 92"),
    e(0x05, 0x5D, "CC 93"),
    e(0x05, 0x5E, "CC 94"),
    e(0x05, 0x5F, "CC 95"),
    e(0x05, 0x60, "CC 96"),
    e(0x05, 0x61, "CC 97"),
    e(0x05, 0x62, "CC 98"),
    e(0x05, 0x63, "CC 99"),
    e(0x05, 0x64, "CC 100"),
    e(0x05, 0x65, "CC 101"),
    e(0x05, 0x66, "CC 102"),
    e(0x05, 0x67, "CC 103"),
    e(0x05, 0x68, "CC 104"),
    e(0x05, 0x69, "CC 105"),
    e(0x05, 0x6A, "CC 106"),
    e(0x05, 0x6B, "CC 107"),
    e(0x05, 0x6C, "CC 108"),
    e(0x05, 0x6D, "CC 109"),
    e(0x05, 0x6E, "CC 110"),
    e(0x05, 0x6F, "CC 111"),
    e(0x05, 0x70, "CC 112"),
    e(0x05, 0x71, "CC 113"),
    e(0x05, 0x72, "CC 114"),
    e(0x05, 0x73, "CC 115"),
    e(0x05, 0x74, "CC 116"),
    e(0x05, 0x75, "CC 117"),
    e(0x05, 0x76, "CC 118"),
    e(0x05, 0x77, "CC 119"),
    e(0x05, 0x78, "CC 120"),
    e(0x05, 0x79, "CC 121"),
    e(0x05, 0x7A, "CC 122"),
    e(0x05, 0x7B, "CC 123"),
    e(0x05, 0x7C, "CC 124"),
    e(0x05, 0x7D, "CC 125"),
    e(0x05, 0x7E, "CC 126"),
    e(0x05, 0x7F, "CC 127"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_survives_the_reverse_map() {
        for i in 0..MOD_DESTINATIONS.len() {
            let wire = MOD_DESTINATIONS.wire(i).unwrap();
            assert_eq!(MOD_DESTINATIONS.index(wire), i, "destination {i}");
        }
        for i in 0..MOD_SOURCES.len() {
            let wire = MOD_SOURCES.wire(i).unwrap();
            let back = MOD_SOURCES.index(wire);
            if MOD_SOURCES.name(i) == Some("CC 64") {
                assert_eq!(MOD_SOURCES.name(back), Some("Sustain Ped"));
            } else {
                assert_eq!(back, i, "source {i}");
            }
        }
    }

    #[test]
    fn unknown_wire_values_map_to_off() {
        assert_eq!(MOD_SOURCES.index(0x7F * 128 + 0x7F), 0);
        assert_eq!(MOD_DESTINATIONS.index(0), 0);
        assert_eq!(MOD_SOURCES.name(0), Some("Off"));
        assert_eq!(MOD_DESTINATIONS.name(0), Some("Off"));
    }

    #[test]
    fn arp_octave_is_remapped() {
        assert_eq!(MOD_DESTINATIONS.name(5), Some("Arp Octave"));
        assert_eq!(MOD_DESTINATIONS.wire(5), Some(0x04 * 128 + 0x32));
        assert_eq!(MOD_DESTINATIONS.len(), 330);
        assert_eq!(MOD_SOURCES.len(), 161);
    }

    #[test]
    fn sustain_pedal_alias_is_preserved() {
        let sustain = MOD_SOURCES.wire(27).unwrap();
        let cc64 = MOD_SOURCES.wire(97).unwrap();
        assert_eq!(sustain, cc64);
        assert_eq!(MOD_SOURCES.index(cc64), 27);
    }
}
