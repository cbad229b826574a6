//! Code Set 2 scancode translation
//!
//! PS/2 keyboards send one byte per key change for most keys, but several things complicate
//! this:
//!
//! - A key release is the key's code preceded by `F0`.
//! - Navigation keys, right hand modifiers, and the media keys are preceded by `E0` (and `E0 F0`
//!   for release).  Their codes overlap the plain ones, so they are looked up in the upper half of
//!   the table.
//! - Print Screen wraps itself in fake shift presses (`E0 12`, `E0 59`), which we discard.
//! - Pause has no release at all.  Pressing it sends `E1 14 77 E1 F0 14 F0 77`, which we see as a
//!   make (`E1 14 77`) followed by a break (`E1 F0 14 F0 77`).
//! - The Korean Hangul (`F2`) and Hanja (`F1`) keys send a single byte and no release.  These
//!   come out as a tap.
//!
//! The translator runs in the main loop, one byte at a time.  A byte that makes no sense in the
//! current state is recorded and the translator goes back to idle, so the stream resynchronizes on
//! the next byte.

use crate::diag::{DecodeError, Diagnostics};
use crate::log::{debug, info, warn};
use crate::{Event, KeyEvent, KeyId, Keyboard};

pub use self::table::Notice;

pub mod table;

const EXTENDED: u8 = 0xE0;
const PAUSE: u8 = 0xE1;
const BREAK: u8 = 0xF0;

/// Print Screen's fake left and right shift, after `E0` or `E0 F0`.
const FAKE_LSHIFT: u8 = 0x12;
const FAKE_RSHIFT: u8 = 0x59;

/// The bytes of the Pause sequence after `E1` (and after each `F0` in its break form).
const PAUSE_CTRL: u8 = 0x14;
const PAUSE_NUMLOCK: u8 = 0x77;

const PAUSE_KEY: KeyId = KeyId::Key(Keyboard::Pause);

const HANGUL: u8 = 0xF2;
const HANJA: u8 = 0xF1;

/// The only plain codes above 0x7F.
const F7: u8 = 0x83;
const ALT_SYSRQ: u8 = 0x84;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScancodeState {
    Idle,
    /// Seen `F0`.
    BreakPending,
    /// Seen `E0`.
    Extended,
    /// Seen `E0 F0`.
    ExtendedBreakPending,
    /// Seen `E1`.
    Pause,
    /// Seen `E1 14`.
    PauseCtrl,
    /// Seen `E1 F0`.
    PauseBreak,
    /// Seen `E1 F0 14`.
    PauseBreakCtrl,
    /// Seen `E1 F0 14 F0`.
    PauseBreakCtrlBreak,
}

pub struct ScancodeTranslator {
    state: ScancodeState,
}

impl Default for ScancodeTranslator {
    fn default() -> Self {
        ScancodeTranslator {
            state: ScancodeState::Idle,
        }
    }
}

impl ScancodeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScancodeState {
        self.state
    }

    /// Forget any partial sequence.
    pub fn reset(&mut self) {
        self.state = ScancodeState::Idle;
    }

    /// Consume one byte from the keyboard.  At most one event comes out per byte.
    pub fn feed(&mut self, byte: u8, diag: &Diagnostics) -> Option<Event> {
        let state = self.state;

        // Nearly every transition ends up back at idle.
        self.state = ScancodeState::Idle;

        match state {
            ScancodeState::Idle => match byte {
                EXTENDED => self.state = ScancodeState::Extended,
                BREAK => self.state = ScancodeState::BreakPending,
                PAUSE => self.state = ScancodeState::Pause,
                HANGUL => return Some(Event::Tap(KeyId::Key(Keyboard::LANG1))),
                HANJA => return Some(Event::Tap(KeyId::Key(Keyboard::LANG2))),
                _ => {
                    if let Some(notice) = table::notice(byte) {
                        return handle_notice(notice);
                    }
                    match plain(byte) {
                        Some(id) => return Some(Event::Key(KeyEvent::Make(id))),
                        None => diag.record(DecodeError::Scancode { state, byte }),
                    }
                }
            },
            ScancodeState::BreakPending => match table::lookup(byte) {
                Some(id) => return Some(Event::Key(KeyEvent::Break(id))),
                None => diag.record(DecodeError::Scancode { state, byte }),
            },
            ScancodeState::Extended => match byte {
                FAKE_LSHIFT | FAKE_RSHIFT => (),
                BREAK => self.state = ScancodeState::ExtendedBreakPending,
                _ => return extended(state, byte, diag).map(|id| Event::Key(KeyEvent::Make(id))),
            },
            ScancodeState::ExtendedBreakPending => match byte {
                FAKE_LSHIFT | FAKE_RSHIFT => (),
                _ => return extended(state, byte, diag).map(|id| Event::Key(KeyEvent::Break(id))),
            },

            // Anything unexpected in the Pause sequence just drops back to idle.
            ScancodeState::Pause => match byte {
                PAUSE_CTRL => self.state = ScancodeState::PauseCtrl,
                BREAK => self.state = ScancodeState::PauseBreak,
                _ => debug!("pause sequence abandoned at {:#x}", byte),
            },
            ScancodeState::PauseCtrl => match byte {
                PAUSE_NUMLOCK => return Some(Event::Key(KeyEvent::Make(PAUSE_KEY))),
                _ => debug!("pause sequence abandoned at {:#x}", byte),
            },
            ScancodeState::PauseBreak => match byte {
                PAUSE_CTRL => self.state = ScancodeState::PauseBreakCtrl,
                _ => debug!("pause sequence abandoned at {:#x}", byte),
            },
            ScancodeState::PauseBreakCtrl => match byte {
                BREAK => self.state = ScancodeState::PauseBreakCtrlBreak,
                _ => debug!("pause sequence abandoned at {:#x}", byte),
            },
            ScancodeState::PauseBreakCtrlBreak => match byte {
                PAUSE_NUMLOCK => return Some(Event::Key(KeyEvent::Break(PAUSE_KEY))),
                _ => debug!("pause sequence abandoned at {:#x}", byte),
            },
        }
        None
    }
}

/// Look up a code with no prefix.  The upper half of the table belongs to `E0`, apart from F7 and
/// Alt+SysRq.
fn plain(byte: u8) -> Option<KeyId> {
    match byte {
        0..=0x7F | F7 | ALT_SYSRQ => table::lookup(byte),
        _ => None,
    }
}

/// Look up a code that followed `E0`.  Extended codes are always below 0x80.
fn extended(state: ScancodeState, byte: u8, diag: &Diagnostics) -> Option<KeyId> {
    let id = if byte < 0x80 {
        table::lookup(byte | 0x80)
    } else {
        None
    };
    if id.is_none() {
        diag.record(DecodeError::Scancode { state, byte });
    }
    id
}

fn handle_notice(notice: Notice) -> Option<Event> {
    match notice {
        Notice::SelfTestPassed => {
            info!("keyboard self test passed");
            Some(Event::SelfTest)
        }
        Notice::SelfTestFailed => {
            warn!("keyboard self test failed");
            None
        }
        Notice::Overrun => {
            warn!("keyboard overrun");
            None
        }
        Notice::Ack | Notice::Resend | Notice::Echo => {
            debug!("keyboard notice: {:?}", notice);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScancodeState, ScancodeTranslator};
    use crate::diag::{DecodeError, Diagnostics};
    use crate::{consumer, system, Event, KeyEvent, KeyId, Keyboard, Mods};

    fn make(k: Keyboard) -> Event {
        Event::Key(KeyEvent::Make(KeyId::Key(k)))
    }

    fn brk(k: Keyboard) -> Event {
        Event::Key(KeyEvent::Break(KeyId::Key(k)))
    }

    /// Feed a sequence, returning all of the events, and checking that the translator is back to
    /// idle afterwards.
    fn feed_all(tr: &mut ScancodeTranslator, diag: &Diagnostics, bytes: &[u8]) -> Vec<Event> {
        let events = bytes.iter().filter_map(|&b| tr.feed(b, diag)).collect();
        assert_eq!(tr.state(), ScancodeState::Idle);
        events
    }

    #[test]
    fn plain_make_break() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(feed_all(&mut tr, &diag, &[0x1c]), [make(Keyboard::A)]);
        assert_eq!(tr.feed(0xf0, &diag), None);
        assert_eq!(tr.state(), ScancodeState::BreakPending);
        assert_eq!(feed_all(&mut tr, &diag, &[0x1c]), [brk(Keyboard::A)]);
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn extended_make_break() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(feed_all(&mut tr, &diag, &[0xe0, 0x75]), [make(Keyboard::UpArrow)]);
        assert_eq!(feed_all(&mut tr, &diag, &[0xe0, 0xf0, 0x75]), [brk(Keyboard::UpArrow)]);

        // Without the prefix, the same code is the keypad.
        assert_eq!(feed_all(&mut tr, &diag, &[0x75]), [make(Keyboard::Keypad8)]);
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn modifiers() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(
            feed_all(&mut tr, &diag, &[0x12, 0xe0, 0x14, 0xe0, 0xf0, 0x14, 0xf0, 0x12]),
            [
                Event::Key(KeyEvent::Make(KeyId::Modifier(Mods::LEFT_SHIFT))),
                Event::Key(KeyEvent::Make(KeyId::Modifier(Mods::RIGHT_CONTROL))),
                Event::Key(KeyEvent::Break(KeyId::Modifier(Mods::RIGHT_CONTROL))),
                Event::Key(KeyEvent::Break(KeyId::Modifier(Mods::LEFT_SHIFT))),
            ]
        );
    }

    #[test]
    fn print_screen() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe0, 0x12, 0xe0, 0x7c]),
            [make(Keyboard::PrintScreen)]
        );
        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe0, 0xf0, 0x7c, 0xe0, 0xf0, 0x12]),
            [brk(Keyboard::PrintScreen)]
        );
        // With shift held, the keyboard cancels the shift instead.
        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe0, 0xf0, 0x59, 0xe0, 0x7c]),
            [make(Keyboard::PrintScreen)]
        );
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn pause() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(feed_all(&mut tr, &diag, &[0xe1, 0x14, 0x77]), [make(Keyboard::Pause)]);
        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe1, 0xf0, 0x14, 0xf0, 0x77]),
            [brk(Keyboard::Pause)]
        );

        // What the keyboard actually sends for one press.
        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe1, 0x14, 0x77, 0xe1, 0xf0, 0x14, 0xf0, 0x77]),
            [make(Keyboard::Pause), brk(Keyboard::Pause)]
        );
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn pause_deviation_is_silent() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        let abandoned: [&[u8]; 5] = [
            &[0xe1, 0x1c],
            &[0xe1, 0x14, 0x1c],
            &[0xe1, 0xf0, 0x1c],
            &[0xe1, 0xf0, 0x14, 0x77],
            &[0xe1, 0xf0, 0x14, 0xf0, 0x1c],
        ];
        for seq in abandoned {
            assert!(feed_all(&mut tr, &diag, seq).is_empty());
        }
        assert_eq!(diag.count(), 0);

        // And the next key decodes normally.
        assert_eq!(feed_all(&mut tr, &diag, &[0x1c]), [make(Keyboard::A)]);
    }

    #[test]
    fn unknown_codes() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert!(feed_all(&mut tr, &diag, &[0x02]).is_empty());
        assert_eq!(
            diag.last(),
            Some(DecodeError::Scancode { state: ScancodeState::Idle, byte: 0x02 })
        );

        assert!(feed_all(&mut tr, &diag, &[0xf0, 0x02]).is_empty());
        assert_eq!(
            diag.last(),
            Some(DecodeError::Scancode { state: ScancodeState::BreakPending, byte: 0x02 })
        );

        // An unmapped extended code.
        assert!(feed_all(&mut tr, &diag, &[0xe0, 0x1c]).is_empty());
        assert_eq!(
            diag.last(),
            Some(DecodeError::Scancode { state: ScancodeState::Extended, byte: 0x1c })
        );

        // Extended codes never have the top bit set, even when the table has an entry there.
        assert!(feed_all(&mut tr, &diag, &[0xe0, 0x83]).is_empty());
        assert!(feed_all(&mut tr, &diag, &[0xe0, 0xf0, 0x83]).is_empty());
        assert_eq!(
            diag.last(),
            Some(DecodeError::Scancode { state: ScancodeState::ExtendedBreakPending, byte: 0x83 })
        );
        assert_eq!(diag.count(), 5);

        // Each error left us ready for the next key.
        assert_eq!(feed_all(&mut tr, &diag, &[0x1c]), [make(Keyboard::A)]);
    }

    #[test]
    fn bare_extended_codes() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        // Up arrow and volume up without their E0.
        for byte in [0xf5, 0xb2] {
            assert!(feed_all(&mut tr, &diag, &[byte]).is_empty());
            assert_eq!(
                diag.last(),
                Some(DecodeError::Scancode { state: ScancodeState::Idle, byte })
            );
        }
        assert_eq!(diag.count(), 2);

        // With the prefix they are fine, and so is the next plain key.
        assert_eq!(feed_all(&mut tr, &diag, &[0xe0, 0x75]), [make(Keyboard::UpArrow)]);
        assert_eq!(feed_all(&mut tr, &diag, &[0x1c]), [make(Keyboard::A)]);
        assert_eq!(diag.count(), 2);
    }

    #[test]
    fn korean_keys_tap() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(
            feed_all(&mut tr, &diag, &[0xf2, 0xf1]),
            [
                Event::Tap(KeyId::Key(Keyboard::LANG1)),
                Event::Tap(KeyId::Key(Keyboard::LANG2)),
            ]
        );
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn japanese_keys() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(
            feed_all(&mut tr, &diag, &[0x13, 0xf0, 0x13, 0x51, 0x6a, 0x64, 0x67]),
            [
                make(Keyboard::Kanji2),
                brk(Keyboard::Kanji2),
                make(Keyboard::Kanji1),
                make(Keyboard::Kanji3),
                make(Keyboard::Kanji4),
                make(Keyboard::Kanji5),
            ]
        );
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn f7_above_0x80() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(feed_all(&mut tr, &diag, &[0x83]), [make(Keyboard::F7)]);
        assert_eq!(feed_all(&mut tr, &diag, &[0xf0, 0x83]), [brk(Keyboard::F7)]);
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn notices() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(feed_all(&mut tr, &diag, &[0xaa]), [Event::SelfTest]);
        assert!(feed_all(&mut tr, &diag, &[0xfa, 0xee, 0xfe, 0x00, 0xff, 0xfc]).is_empty());
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn media_and_system() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(
            feed_all(&mut tr, &diag, &[0xe0, 0x32, 0xe0, 0xf0, 0x32, 0xe0, 0x3f]),
            [
                Event::Key(KeyEvent::Make(KeyId::Consumer(consumer::VOLUME_INCREMENT))),
                Event::Key(KeyEvent::Break(KeyId::Consumer(consumer::VOLUME_INCREMENT))),
                Event::Key(KeyEvent::Make(KeyId::System(system::SLEEP))),
            ]
        );
    }

    #[test]
    fn reset_drops_partial_sequence() {
        let diag = Diagnostics::new();
        let mut tr = ScancodeTranslator::new();

        assert_eq!(tr.feed(0xe0, &diag), None);
        assert_eq!(tr.feed(0xf0, &diag), None);
        tr.reset();
        assert_eq!(feed_all(&mut tr, &diag, &[0x75]), [make(Keyboard::Keypad8)]);
    }
}
