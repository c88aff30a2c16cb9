//! 14-bit NRPN messages over Control Change.
//!
//! An NRPN is four Control Change messages: CC 99 and CC 98 carry the
//! address MSB and LSB, CC 6 and CC 38 the value MSB and LSB. Some devices
//! abbreviate by omitting unchanged bytes; the Hydrasynth never does, and
//! expects the same in return, so a value is only complete once its CC 38
//! has arrived.

use log::trace;
use midi_control::{Channel, ControlEvent, MidiMessage};

pub const CC_ADDRESS_MSB: u8 = 99;
pub const CC_ADDRESS_LSB: u8 = 98;
pub const CC_VALUE_MSB: u8 = 6;
pub const CC_VALUE_LSB: u8 = 38;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nrpn {
    pub address: u16,
    pub value: u16,
}

impl Nrpn {
    pub fn new(address: u16, value: u16) -> Self {
        Nrpn {
            address: address & 0x3FFF,
            value: value & 0x3FFF,
        }
    }

    /// The four Control Change messages, in transmission order.
    pub fn to_midi_messages(&self, channel: u8) -> [MidiMessage; 4] {
        let ch = midi_channel(channel);
        let cc = |control: u8, value: u16| {
            MidiMessage::ControlChange(
                ch,
                ControlEvent {
                    control,
                    value: value as u8 & 0x7F,
                },
            )
        };
        [
            cc(CC_ADDRESS_MSB, self.address >> 7),
            cc(CC_ADDRESS_LSB, self.address),
            cc(CC_VALUE_MSB, self.value >> 7),
            cc(CC_VALUE_LSB, self.value),
        ]
    }

    /// Raw MIDI bytes for each of the four messages.
    pub fn to_midi(&self, channel: u8) -> Vec<Vec<u8>> {
        self.to_midi_messages(channel)
            .into_iter()
            .map(midi_bytes)
            .collect()
    }
}

/// Raw bytes of one channel message. `midi_control` pads program change
/// and channel pressure to three bytes; the extra zero would be read as a
/// second message under running status, so it is dropped.
pub fn midi_bytes(msg: MidiMessage) -> Vec<u8> {
    let mut bytes = Vec::<u8>::from(msg);
    if matches!(bytes.first().map(|s| s & 0xF0), Some(0xC0 | 0xD0)) {
        bytes.truncate(2);
    }
    bytes
}

/// Maps a 1-based channel number onto `midi_control`'s channel enum.
/// Out-of-range numbers are clamped.
pub fn midi_channel(channel: u8) -> Channel {
    const CHANNELS: [Channel; 16] = [
        Channel::Ch1,
        Channel::Ch2,
        Channel::Ch3,
        Channel::Ch4,
        Channel::Ch5,
        Channel::Ch6,
        Channel::Ch7,
        Channel::Ch8,
        Channel::Ch9,
        Channel::Ch10,
        Channel::Ch11,
        Channel::Ch12,
        Channel::Ch13,
        Channel::Ch14,
        Channel::Ch15,
        Channel::Ch16,
    ];
    CHANNELS[usize::from(channel.clamp(1, 16) - 1)]
}

/// Bank select followed by a program change. The synth selects single
/// patches by bank LSB (CC 32) alone.
pub fn bank_and_program(channel: u8, bank: u8, program: u8) -> Vec<Vec<u8>> {
    let ch = midi_channel(channel);
    [
        MidiMessage::ControlChange(
            ch,
            ControlEvent {
                control: 32,
                value: bank & 0x7F,
            },
        ),
        MidiMessage::ProgramChange(ch, program & 0x7F),
    ]
    .into_iter()
    .map(midi_bytes)
    .collect()
}

/// Assembles NRPNs from a stream of incoming MIDI messages on one channel.
#[derive(Debug)]
pub struct NrpnParser {
    channel: Channel,
    address_msb: Option<u8>,
    address_lsb: Option<u8>,
    value_msb: Option<u8>,
}

impl NrpnParser {
    pub fn new(channel: u8) -> Self {
        NrpnParser {
            channel: midi_channel(channel),
            address_msb: None,
            address_lsb: None,
            value_msb: None,
        }
    }

    /// Feeds one raw MIDI message. Returns a complete NRPN when this message
    /// was its final value byte.
    pub fn feed(&mut self, msg: &[u8]) -> Option<Nrpn> {
        match MidiMessage::from(msg) {
            MidiMessage::ControlChange(ch, ControlEvent { control, value }) if ch == self.channel => {
                self.control(control, value)
            }
            _ => None,
        }
    }

    fn control(&mut self, control: u8, value: u8) -> Option<Nrpn> {
        match control {
            CC_ADDRESS_MSB => {
                self.address_msb = Some(value);
                self.address_lsb = None;
                self.value_msb = None;
            }
            CC_ADDRESS_LSB => {
                self.address_lsb = Some(value);
                self.value_msb = None;
            }
            CC_VALUE_MSB => self.value_msb = Some(value),
            CC_VALUE_LSB => {
                if let (Some(am), Some(al), Some(vm)) =
                    (self.address_msb, self.address_lsb, self.value_msb.take())
                {
                    let nrpn = Nrpn::new(
                        u16::from(am) << 7 | u16::from(al),
                        u16::from(vm) << 7 | u16::from(value),
                    );
                    trace!("received {nrpn:?}");
                    return Some(nrpn);
                }
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_control_changes() {
        let msgs = Nrpn::new(0x3F * 128 + 0x57, 0x0123).to_midi(2);
        assert_eq!(
            msgs,
            vec![
                vec![0xB1, 99, 0x3F],
                vec![0xB1, 98, 0x57],
                vec![0xB1, 6, 0x02],
                vec![0xB1, 38, 0x23],
            ]
        );
    }

    #[test]
    fn parser_needs_all_four() {
        let mut p = NrpnParser::new(1);
        let sent = Nrpn::new(0x41 * 128 + 0x6E, 4000);
        let msgs = sent.to_midi(1);
        assert_eq!(p.feed(&msgs[0]), None);
        assert_eq!(p.feed(&msgs[1]), None);
        // A value LSB with no MSB yet is not a complete message.
        assert_eq!(p.feed(&msgs[3]), None);
        assert_eq!(p.feed(&msgs[2]), None);
        assert_eq!(p.feed(&msgs[3]), Some(sent));
        // Nor can the address be reused without a fresh value MSB.
        assert_eq!(p.feed(&msgs[3]), None);
    }

    #[test]
    fn parser_ignores_other_traffic() {
        let mut p = NrpnParser::new(1);
        let sent = Nrpn::new(0x3E * 128 + 0x01, 0x02 * 128 + 0x10);
        let msgs = sent.to_midi(1);
        let noise = [vec![0x90, 60, 100], vec![0xB2, 6, 1], vec![0xB0, 7, 99]];
        let mut got = None;
        for (m, n) in msgs.iter().zip(noise.iter().cycle()) {
            assert_eq!(p.feed(n), None);
            got = p.feed(m);
        }
        assert_eq!(got, Some(sent));
    }

    #[test]
    fn patch_change_uses_bank_lsb() {
        assert_eq!(
            bank_and_program(3, 4, 127),
            vec![vec![0xB2, 32, 4], vec![0xC2, 127]]
        );
    }

    #[test]
    fn program_change_is_two_bytes() {
        let bytes = midi_bytes(MidiMessage::ProgramChange(Channel::Ch1, 9));
        assert_eq!(bytes, vec![0xC0, 9]);
        let cc = MidiMessage::ControlChange(Channel::Ch4, ControlEvent { control: 7, value: 100 });
        assert_eq!(midi_bytes(cc), vec![0xB3, 7, 100]);
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(midi_channel(0), Channel::Ch1);
        assert_eq!(midi_channel(16), Channel::Ch16);
        assert_eq!(midi_channel(40), Channel::Ch16);
    }
}
