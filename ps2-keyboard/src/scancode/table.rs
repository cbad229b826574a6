//! Code Set 2 translation table.
//!
//! The lower half is indexed by the plain scancode.  Extended codes (those after an `E0` prefix)
//! are all below 0x80 on the wire, so they are stored at `code | 0x80`.  F7 (0x83) and Alt+SysRq
//! (0x84) are the only plain codes above 0x7F, and nothing sends `E0 03` or `E0 04`, so they share
//! the upper half without conflict.  Every other index at or above 0x80 is only reachable through
//! `E0`.
//!
//! The Japanese keys are International 1 to 5 on the keyboard page, which the usage tables name
//! `Kanji1` to `Kanji5`.  The Korean Hangul and Hanja keys (bare `F2` and `F1`) are not in the table
//! at all; the translator handles them.

use crate::{consumer, system, KeyId, Keyboard, Mods};

/// A code with no key behind it.
const NONE: Option<KeyId> = None;

const fn k(key: Keyboard) -> Option<KeyId> {
    Some(KeyId::Key(key))
}

const fn m(mods: Mods) -> Option<KeyId> {
    Some(KeyId::Modifier(mods))
}

const fn c(usage: u16) -> Option<KeyId> {
    Some(KeyId::Consumer(usage))
}

const fn s(usage: u8) -> Option<KeyId> {
    Some(KeyId::System(usage))
}

/// Look up a table index (a plain code, or an extended code with 0x80 set).
pub fn lookup(index: u8) -> Option<KeyId> {
    SET2[index as usize]
}

/// Bytes the keyboard sends that are not keys.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// 0xAA, basic assurance test passed.  Sent at power up and on hot plug.
    SelfTestPassed,
    /// 0xFC or 0xFD.
    SelfTestFailed,
    /// 0xFA, acknowledges a command from the host.
    Ack,
    /// 0xFE, the keyboard wants the last command again.
    Resend,
    /// 0xEE, reply to an echo command.
    Echo,
    /// 0x00 or 0xFF, key detection error or the keyboard's own buffer overran.
    Overrun,
}

pub fn notice(byte: u8) -> Option<Notice> {
    match byte {
        0xAA => Some(Notice::SelfTestPassed),
        0xFC | 0xFD => Some(Notice::SelfTestFailed),
        0xFA => Some(Notice::Ack),
        0xFE => Some(Notice::Resend),
        0xEE => Some(Notice::Echo),
        0x00 | 0xFF => Some(Notice::Overrun),
        _ => None,
    }
}

static SET2: [Option<KeyId>; 256] = [
    // Plain codes.
    NONE, // 0x00
    k(Keyboard::F9), // 0x01
    NONE, // 0x02
    k(Keyboard::F5), // 0x03
    k(Keyboard::F3), // 0x04
    k(Keyboard::F1), // 0x05
    k(Keyboard::F2), // 0x06
    k(Keyboard::F12), // 0x07
    k(Keyboard::F13), // 0x08
    k(Keyboard::F10), // 0x09
    k(Keyboard::F8), // 0x0a
    k(Keyboard::F6), // 0x0b
    k(Keyboard::F4), // 0x0c
    k(Keyboard::Tab), // 0x0d
    k(Keyboard::Grave), // 0x0e
    NONE, // 0x0f
    k(Keyboard::F14), // 0x10
    m(Mods::LEFT_ALT), // 0x11
    m(Mods::LEFT_SHIFT), // 0x12
    k(Keyboard::Kanji2), // 0x13
    m(Mods::LEFT_CONTROL), // 0x14
    k(Keyboard::Q), // 0x15
    k(Keyboard::Keyboard1), // 0x16
    NONE, // 0x17
    k(Keyboard::F15), // 0x18
    NONE, // 0x19
    k(Keyboard::Z), // 0x1a
    k(Keyboard::S), // 0x1b
    k(Keyboard::A), // 0x1c
    k(Keyboard::W), // 0x1d
    k(Keyboard::Keyboard2), // 0x1e
    NONE, // 0x1f
    k(Keyboard::F16), // 0x20
    k(Keyboard::C), // 0x21
    k(Keyboard::X), // 0x22
    k(Keyboard::D), // 0x23
    k(Keyboard::E), // 0x24
    k(Keyboard::Keyboard4), // 0x25
    k(Keyboard::Keyboard3), // 0x26
    NONE, // 0x27
    k(Keyboard::F17), // 0x28
    k(Keyboard::Space), // 0x29
    k(Keyboard::V), // 0x2a
    k(Keyboard::F), // 0x2b
    k(Keyboard::T), // 0x2c
    k(Keyboard::R), // 0x2d
    k(Keyboard::Keyboard5), // 0x2e
    NONE, // 0x2f
    k(Keyboard::F18), // 0x30
    k(Keyboard::N), // 0x31
    k(Keyboard::B), // 0x32
    k(Keyboard::H), // 0x33
    k(Keyboard::G), // 0x34
    k(Keyboard::Y), // 0x35
    k(Keyboard::Keyboard6), // 0x36
    NONE, // 0x37
    k(Keyboard::F19), // 0x38
    NONE, // 0x39
    k(Keyboard::M), // 0x3a
    k(Keyboard::J), // 0x3b
    k(Keyboard::U), // 0x3c
    k(Keyboard::Keyboard7), // 0x3d
    k(Keyboard::Keyboard8), // 0x3e
    NONE, // 0x3f
    k(Keyboard::F20), // 0x40
    k(Keyboard::Comma), // 0x41
    k(Keyboard::K), // 0x42
    k(Keyboard::I), // 0x43
    k(Keyboard::O), // 0x44
    k(Keyboard::Keyboard0), // 0x45
    k(Keyboard::Keyboard9), // 0x46
    NONE, // 0x47
    k(Keyboard::F21), // 0x48
    k(Keyboard::Dot), // 0x49
    k(Keyboard::ForwardSlash), // 0x4a
    k(Keyboard::L), // 0x4b
    k(Keyboard::Semicolon), // 0x4c
    k(Keyboard::P), // 0x4d
    k(Keyboard::Minus), // 0x4e
    NONE, // 0x4f
    k(Keyboard::F22), // 0x50
    k(Keyboard::Kanji1), // 0x51
    k(Keyboard::Apostrophe), // 0x52
    NONE, // 0x53
    k(Keyboard::LeftBrace), // 0x54
    k(Keyboard::Equal), // 0x55
    NONE, // 0x56
    k(Keyboard::F23), // 0x57
    k(Keyboard::CapsLock), // 0x58
    m(Mods::RIGHT_SHIFT), // 0x59
    k(Keyboard::ReturnEnter), // 0x5a
    k(Keyboard::RightBrace), // 0x5b
    NONE, // 0x5c
    k(Keyboard::Backslash), // 0x5d
    NONE, // 0x5e
    k(Keyboard::F24), // 0x5f
    NONE, // 0x60
    k(Keyboard::NonUSBackslash), // 0x61
    NONE, // 0x62
    NONE, // 0x63
    k(Keyboard::Kanji4), // 0x64
    NONE, // 0x65
    k(Keyboard::DeleteBackspace), // 0x66
    k(Keyboard::Kanji5), // 0x67
    NONE, // 0x68
    k(Keyboard::Keypad1), // 0x69
    k(Keyboard::Kanji3), // 0x6a
    k(Keyboard::Keypad4), // 0x6b
    k(Keyboard::Keypad7), // 0x6c
    NONE, // 0x6d
    NONE, // 0x6e
    NONE, // 0x6f
    k(Keyboard::Keypad0), // 0x70
    k(Keyboard::KeypadDot), // 0x71
    k(Keyboard::Keypad2), // 0x72
    k(Keyboard::Keypad5), // 0x73
    k(Keyboard::Keypad6), // 0x74
    k(Keyboard::Keypad8), // 0x75
    k(Keyboard::Escape), // 0x76
    k(Keyboard::KeypadNumLockAndClear), // 0x77
    k(Keyboard::F11), // 0x78
    k(Keyboard::KeypadAdd), // 0x79
    k(Keyboard::Keypad3), // 0x7a
    k(Keyboard::KeypadSubtract), // 0x7b
    k(Keyboard::KeypadMultiply), // 0x7c
    k(Keyboard::Keypad9), // 0x7d
    k(Keyboard::ScrollLock), // 0x7e
    NONE, // 0x7f
    // Extended (E0-prefixed) codes, indexed by code | 0x80.  Two plain codes live here too.
    NONE, // 0x80
    NONE, // 0x81
    NONE, // 0x82
    k(Keyboard::F7), // 0x83 (plain)
    k(Keyboard::PrintScreen), // 0x84 (plain)
    NONE, // 0x85
    NONE, // 0x86
    NONE, // 0x87
    NONE, // 0x88
    NONE, // 0x89
    NONE, // 0x8a
    NONE, // 0x8b
    NONE, // 0x8c
    NONE, // 0x8d
    NONE, // 0x8e
    NONE, // 0x8f
    c(consumer::AC_SEARCH), // 0x90, E0 10
    m(Mods::RIGHT_ALT), // 0x91, E0 11
    NONE, // 0x92
    NONE, // 0x93
    m(Mods::RIGHT_CONTROL), // 0x94, E0 14
    c(consumer::SCAN_PREVIOUS_TRACK), // 0x95, E0 15
    NONE, // 0x96
    NONE, // 0x97
    c(consumer::AC_BOOKMARKS), // 0x98, E0 18
    NONE, // 0x99
    NONE, // 0x9a
    NONE, // 0x9b
    NONE, // 0x9c
    NONE, // 0x9d
    NONE, // 0x9e
    m(Mods::LEFT_GUI), // 0x9f, E0 1f
    c(consumer::AC_REFRESH), // 0xa0, E0 20
    c(consumer::VOLUME_DECREMENT), // 0xa1, E0 21
    NONE, // 0xa2
    c(consumer::MUTE), // 0xa3, E0 23
    NONE, // 0xa4
    NONE, // 0xa5
    NONE, // 0xa6
    m(Mods::RIGHT_GUI), // 0xa7, E0 27
    c(consumer::AC_STOP), // 0xa8, E0 28
    NONE, // 0xa9
    NONE, // 0xaa
    c(consumer::AL_CALCULATOR), // 0xab, E0 2b
    NONE, // 0xac
    NONE, // 0xad
    NONE, // 0xae
    k(Keyboard::Application), // 0xaf, E0 2f
    c(consumer::AC_FORWARD), // 0xb0, E0 30
    NONE, // 0xb1
    c(consumer::VOLUME_INCREMENT), // 0xb2, E0 32
    NONE, // 0xb3
    c(consumer::PLAY_PAUSE), // 0xb4, E0 34
    NONE, // 0xb5
    NONE, // 0xb6
    s(system::POWER_DOWN), // 0xb7, E0 37
    c(consumer::AC_BACK), // 0xb8, E0 38
    NONE, // 0xb9
    c(consumer::AC_HOME), // 0xba, E0 3a
    c(consumer::STOP), // 0xbb, E0 3b
    NONE, // 0xbc
    NONE, // 0xbd
    NONE, // 0xbe
    s(system::SLEEP), // 0xbf, E0 3f
    c(consumer::AL_LOCAL_MACHINE_BROWSER), // 0xc0, E0 40
    NONE, // 0xc1
    NONE, // 0xc2
    NONE, // 0xc3
    NONE, // 0xc4
    NONE, // 0xc5
    NONE, // 0xc6
    NONE, // 0xc7
    c(consumer::AL_EMAIL_READER), // 0xc8, E0 48
    NONE, // 0xc9
    k(Keyboard::KeypadDivide), // 0xca, E0 4a
    NONE, // 0xcb
    NONE, // 0xcc
    c(consumer::SCAN_NEXT_TRACK), // 0xcd, E0 4d
    NONE, // 0xce
    NONE, // 0xcf
    c(consumer::AL_CONSUMER_CONTROL_CONFIGURATION), // 0xd0, E0 50
    NONE, // 0xd1
    NONE, // 0xd2
    NONE, // 0xd3
    NONE, // 0xd4
    NONE, // 0xd5
    NONE, // 0xd6
    NONE, // 0xd7
    NONE, // 0xd8
    NONE, // 0xd9
    k(Keyboard::KeypadEnter), // 0xda, E0 5a
    NONE, // 0xdb
    NONE, // 0xdc
    NONE, // 0xdd
    s(system::WAKE_UP), // 0xde, E0 5e
    NONE, // 0xdf
    NONE, // 0xe0
    NONE, // 0xe1
    NONE, // 0xe2
    NONE, // 0xe3
    NONE, // 0xe4
    NONE, // 0xe5
    NONE, // 0xe6
    NONE, // 0xe7
    NONE, // 0xe8
    k(Keyboard::End), // 0xe9, E0 69
    NONE, // 0xea
    k(Keyboard::LeftArrow), // 0xeb, E0 6b
    k(Keyboard::Home), // 0xec, E0 6c
    NONE, // 0xed
    NONE, // 0xee
    NONE, // 0xef
    k(Keyboard::Insert), // 0xf0, E0 70
    k(Keyboard::DeleteForward), // 0xf1, E0 71
    k(Keyboard::DownArrow), // 0xf2, E0 72
    NONE, // 0xf3
    k(Keyboard::RightArrow), // 0xf4, E0 74
    k(Keyboard::UpArrow), // 0xf5, E0 75
    NONE, // 0xf6
    NONE, // 0xf7
    NONE, // 0xf8
    NONE, // 0xf9
    k(Keyboard::PageDown), // 0xfa, E0 7a
    NONE, // 0xfb
    k(Keyboard::PrintScreen), // 0xfc, E0 7c
    k(Keyboard::PageUp), // 0xfd, E0 7d
    NONE, // 0xfe
    NONE, // 0xff
];

#[cfg(test)]
mod tests {
    use super::{lookup, notice, Notice, SET2};
    use crate::{KeyId, Keyboard, Mods};

    #[test]
    fn halves() {
        assert_eq!(lookup(0x75), Some(KeyId::Key(Keyboard::Keypad8)));
        assert_eq!(lookup(0x75 | 0x80), Some(KeyId::Key(Keyboard::UpArrow)));
        assert_eq!(lookup(0x14), Some(KeyId::Modifier(Mods::LEFT_CONTROL)));
        assert_eq!(lookup(0x14 | 0x80), Some(KeyId::Modifier(Mods::RIGHT_CONTROL)));
        assert_eq!(lookup(0x83), Some(KeyId::Key(Keyboard::F7)));
    }

    #[test]
    fn japanese_keys() {
        let codes = [0x51, 0x13, 0x6a, 0x64, 0x67];
        let keys = [
            Keyboard::Kanji1,
            Keyboard::Kanji2,
            Keyboard::Kanji3,
            Keyboard::Kanji4,
            Keyboard::Kanji5,
        ];
        for (code, key) in codes.into_iter().zip(keys) {
            assert_eq!(lookup(code), Some(KeyId::Key(key)));
        }
    }

    #[test]
    fn modifiers_are_single_bits() {
        for entry in SET2.iter().flatten() {
            if let KeyId::Modifier(mods) = entry {
                assert_eq!(mods.bits().count_ones(), 1);
            }
        }
    }

    #[test]
    fn prefixes_are_not_notices() {
        for byte in [0xE0u8, 0xE1, 0xF0] {
            assert_eq!(notice(byte), None);
        }
        assert_eq!(notice(0xAA), Some(Notice::SelfTestPassed));
    }
}
