//! PS/2 keyboard to USB HID conversion
//!
//! This crate holds everything between the clock/data lines of a PS/2
//! keyboard and the HID reports sent to the host:
//!
//! - [`line`]: decodes individually clocked bits into validated bytes.  This runs in the edge
//!   interrupt.
//! - [`ringbuf`]: carries those bytes from the interrupt to the main loop.
//! - [`scancode`]: interprets the Code Set 2 byte stream (prefixes, breaks, the Pause oddity) into
//!   make/break events.
//! - [`keystate`]: keeps track of what is held down and builds reports from it.
//!
//! The hardware side (pins, interrupts, the USB stack) is left to the firmware, which hands the
//! pieces here their state by reference.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use bitflags::bitflags;

pub use usbd_human_interface_device::page::Keyboard;

pub use converter::Converter;
pub use diag::{DecodeError, DiagWatch, Diagnostics};
pub use keystate::{
    Indicators, KeyState, KeyboardReport, Report, ReportSink, SYSTEM_CONTROL_REPORT_DESCRIPTOR,
};
pub use line::{Edge, LineDecoder, LineState, PinId};
pub use ringbuf::ByteQueue;
pub use scancode::{ScancodeState, ScancodeTranslator};

pub mod converter;
pub mod diag;
pub mod keystate;
pub mod line;
pub mod ringbuf;
pub mod scancode;

#[cfg(not(any(feature = "defmt", feature = "log")))]
compile_error!("One of the features \"defmt\" or \"log\" must be enabled");

#[cfg(feature = "defmt")]
mod log {
    pub use defmt::{debug, info, warn};
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
mod log {
    pub use log::{debug, info, warn};
}

bitflags! {
    /// The modifier byte of a keyboard report.  Bit n corresponds to HID usage `0xE0 + n`.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    pub struct Mods: u8 {
        const LEFT_CONTROL = 0b0000_0001;
        const LEFT_SHIFT = 0b0000_0010;
        const LEFT_ALT = 0b0000_0100;
        const LEFT_GUI = 0b0000_1000;
        const RIGHT_CONTROL = 0b0001_0000;
        const RIGHT_SHIFT = 0b0010_0000;
        const RIGHT_ALT = 0b0100_0000;
        const RIGHT_GUI = 0b1000_0000;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mods {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Mods({=u8:#x})", self.bits())
    }
}

impl Mods {
    /// The keyboard usages for each modifier that is set, lowest bit first.
    pub fn usages(self) -> impl Iterator<Item = Keyboard> {
        (0..8u8)
            .filter(move |bit| self.bits() & (1 << bit) != 0)
            .map(|bit| Keyboard::from(0xE0 + bit))
    }
}

/// Usages on the consumer page (0x0C) that the keyboard can produce.
pub mod consumer {
    pub const SCAN_NEXT_TRACK: u16 = 0x00B5;
    pub const SCAN_PREVIOUS_TRACK: u16 = 0x00B6;
    pub const STOP: u16 = 0x00B7;
    pub const PLAY_PAUSE: u16 = 0x00CD;
    pub const MUTE: u16 = 0x00E2;
    pub const VOLUME_INCREMENT: u16 = 0x00E9;
    pub const VOLUME_DECREMENT: u16 = 0x00EA;
    pub const AL_CONSUMER_CONTROL_CONFIGURATION: u16 = 0x0183;
    pub const AL_EMAIL_READER: u16 = 0x018A;
    pub const AL_CALCULATOR: u16 = 0x0192;
    pub const AL_LOCAL_MACHINE_BROWSER: u16 = 0x0194;
    pub const AC_SEARCH: u16 = 0x0221;
    pub const AC_HOME: u16 = 0x0223;
    pub const AC_BACK: u16 = 0x0224;
    pub const AC_FORWARD: u16 = 0x0225;
    pub const AC_STOP: u16 = 0x0226;
    pub const AC_REFRESH: u16 = 0x0227;
    pub const AC_BOOKMARKS: u16 = 0x022A;
}

/// System control usages on the generic desktop page (0x01).
pub mod system {
    pub const POWER_DOWN: u8 = 0x81;
    pub const SLEEP: u8 = 0x82;
    pub const WAKE_UP: u8 = 0x83;
}

/// A logical key, as a usage page and a usage within it.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum KeyId {
    /// A regular key on the keyboard/keypad page.
    Key(Keyboard),
    /// One of the eight modifiers.  Exactly one bit is set.
    Modifier(Mods),
    /// A media or application key on the consumer page.
    Consumer(u16),
    /// Power, sleep or wake.
    System(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyId {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KeyId::Key(k) => defmt::write!(fmt, "Key({=u8:#x})", *k as u8),
            KeyId::Modifier(m) => defmt::write!(fmt, "Modifier({})", m),
            KeyId::Consumer(c) => defmt::write!(fmt, "Consumer({=u16:#x})", c),
            KeyId::System(s) => defmt::write!(fmt, "System({=u8:#x})", s),
        }
    }
}

/// Key events indicate keys going down (make) or up (break).
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum KeyEvent {
    Make(KeyId),
    Break(KeyId),
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KeyEvent::Make(k) => defmt::write!(fmt, "KeyEvent::Make({})", k),
            KeyEvent::Break(k) => defmt::write!(fmt, "KeyEvent::Break({})", k),
        }
    }
}

impl KeyEvent {
    pub fn key(&self) -> KeyId {
        match self {
            KeyEvent::Make(k) => *k,
            KeyEvent::Break(k) => *k,
        }
    }

    pub fn is_make(&self) -> bool {
        match self {
            KeyEvent::Make(_) => true,
            KeyEvent::Break(_) => false,
        }
    }
}

/// Something the scancode translator saw in the byte stream.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Event {
    /// A key went down or up.
    Key(KeyEvent),

    /// A key that never reports its release.  It goes down and straight back up.
    Tap(KeyId),

    /// The keyboard reported a passed self test.  Keyboards send this on power up and after
    /// being plugged in, so nothing from before it can still be held.
    SelfTest,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Event::Key(k) => defmt::write!(fmt, "Event::Key({})", k),
            Event::Tap(k) => defmt::write!(fmt, "Event::Tap({})", k),
            Event::SelfTest => defmt::write!(fmt, "Event::SelfTest"),
        }
    }
}
