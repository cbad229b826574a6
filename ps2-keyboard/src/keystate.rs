//! Key state aggregation
//!
//! Tracks what the keyboard is holding down and turns every change into a report for the host.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::log::debug;
use crate::{KeyEvent, KeyId, Keyboard, Mods};

/// Number of non-modifier keys a boot keyboard report can carry.
pub const REPORT_KEYS: usize = 6;

bitflags! {
    /// Keyboard LEDs, as set by the host.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Indicators: u8 {
        const NUM_LOCK = 0b0000_0001;
        const CAPS_LOCK = 0b0000_0010;
        const SCROLL_LOCK = 0b0000_0100;
        const COMPOSE = 0b0000_1000;
        const KANA = 0b0001_0000;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Indicators {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Indicators({=u8:#x})", self.bits())
    }
}

/// A boot protocol keyboard report.  Unused key slots hold `NoEventIndicated`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct KeyboardReport {
    pub modifier: Mods,
    pub keys: [Keyboard; REPORT_KEYS],
}

impl Default for KeyboardReport {
    fn default() -> Self {
        KeyboardReport {
            modifier: Mods::empty(),
            keys: [Keyboard::NoEventIndicated; REPORT_KEYS],
        }
    }
}

impl KeyboardReport {
    /// The 8 byte boot layout: modifiers, a reserved byte, then the key slots.
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0] = self.modifier.bits();
        for (dest, key) in bytes[2..].iter_mut().zip(self.keys.iter()) {
            *dest = *key as u8;
        }
        bytes
    }

    /// Every usage held in this report, modifiers first.  This is the form an NKRO writer wants.
    pub fn usages(&self) -> impl Iterator<Item = Keyboard> {
        let keys = self.keys;
        self.modifier
            .usages()
            .chain(keys.into_iter().filter(|k| *k != Keyboard::NoEventIndicated))
    }
}

/// What goes to the host.  Each variant is a separate report, with its own interface.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Report {
    Keyboard(KeyboardReport),
    /// The held consumer usage, 0 for none.
    Consumer(u16),
    /// The held system control usage, 0 for none.
    System(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Report {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Report::Keyboard(r) => {
                let bytes = r.to_bytes();
                defmt::write!(fmt, "Report::Keyboard({:#x})", bytes)
            }
            Report::Consumer(u) => defmt::write!(fmt, "Report::Consumer({=u16:#x})", u),
            Report::System(u) => defmt::write!(fmt, "Report::System({=u8:#x})", u),
        }
    }
}

/// Report descriptor for the system control interface.  The one byte report is the held usage on
/// the generic desktop page, so a [`Report::System`] value goes out as is.
#[rustfmt::skip]
pub const SYSTEM_CONTROL_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01,         // Usage Page (Generic Desktop),
    0x09, 0x80,         // Usage (System Control),
    0xA1, 0x01,         // Collection (Application),
    0x15, 0x00,         //     Logical Minimum (0),
    0x26, 0xB7, 0x00,   //     Logical Maximum (0xB7),
    0x19, 0x00,         //     Usage Minimum (0),
    0x29, 0xB7,         //     Usage Maximum (0xB7),
    0x75, 0x08,         //     Report Size (8),
    0x95, 0x01,         //     Report Count (1),
    0x81, 0x00,         //     Input (Data, Array),
    0xC0,               // End Collection
];

/// The USB side, as far as the aggregator is concerned.
pub trait ReportSink {
    /// Can the host take a report right now?
    fn is_ready(&self) -> bool;

    /// Hand a report to the host.  Only called when `is_ready()` was true.
    fn send_report(&mut self, report: Report);
}

/// The currently held keys.
pub struct KeyState {
    mods: Mods,
    keys: ArrayVec<Keyboard, REPORT_KEYS>,
    consumer: Option<u16>,
    system: Option<u8>,
    indicators: Indicators,
}

impl Default for KeyState {
    fn default() -> Self {
        KeyState {
            mods: Mods::empty(),
            keys: ArrayVec::new(),
            consumer: None,
            system: None,
            indicators: Indicators::empty(),
        }
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a make or break, and send the report for the page it touched.
    pub fn handle_event<S: ReportSink>(&mut self, event: KeyEvent, sink: &mut S) {
        let id = event.key();
        if event.is_make() {
            self.make(id);
        } else {
            self.release(id);
        }
        let report = self.report_for(id);
        send(sink, report);
    }

    fn make(&mut self, id: KeyId) {
        match id {
            KeyId::Modifier(m) => self.mods |= m,
            KeyId::Key(k) => {
                if self.keys.contains(&k) {
                    return;
                }
                if self.keys.try_push(k).is_err() {
                    debug!("rollover: dropping {:?}", id);
                }
            }
            // The consumer and system reports only carry one usage each.  The newest wins.
            KeyId::Consumer(u) => self.consumer = Some(u),
            KeyId::System(u) => self.system = Some(u),
        }
    }

    fn release(&mut self, id: KeyId) {
        match id {
            KeyId::Modifier(m) => self.mods.remove(m),
            KeyId::Key(k) => self.keys.retain(|held| *held != k),
            KeyId::Consumer(u) => {
                if self.consumer == Some(u) {
                    self.consumer = None;
                }
            }
            KeyId::System(u) => {
                if self.system == Some(u) {
                    self.system = None;
                }
            }
        }
    }

    /// Release everything, and tell the host so.
    pub fn reset<S: ReportSink>(&mut self, sink: &mut S) {
        self.mods = Mods::empty();
        self.keys.clear();
        self.consumer = None;
        self.system = None;

        send(sink, self.keyboard_report());
        send(sink, self.consumer_report());
        send(sink, self.system_report());
    }

    fn report_for(&self, id: KeyId) -> Report {
        match id {
            KeyId::Key(_) | KeyId::Modifier(_) => self.keyboard_report(),
            KeyId::Consumer(_) => self.consumer_report(),
            KeyId::System(_) => self.system_report(),
        }
    }

    pub fn keyboard_report(&self) -> Report {
        let mut report = KeyboardReport {
            modifier: self.mods,
            ..KeyboardReport::default()
        };
        report.keys[..self.keys.len()].copy_from_slice(&self.keys);
        Report::Keyboard(report)
    }

    pub fn consumer_report(&self) -> Report {
        Report::Consumer(self.consumer.unwrap_or(0))
    }

    pub fn system_report(&self) -> Report {
        Report::System(self.system.unwrap_or(0))
    }

    pub fn modifiers(&self) -> Mods {
        self.mods
    }

    /// Held non-modifier keys, in the order they went down.
    pub fn pressed(&self) -> &[Keyboard] {
        &self.keys
    }

    pub fn consumer(&self) -> Option<u16> {
        self.consumer
    }

    pub fn system(&self) -> Option<u8> {
        self.system
    }

    /// Record the host's LED state.  This is informational only.
    pub fn set_indicators(&mut self, indicators: Indicators) {
        if indicators != self.indicators {
            debug!("indicators: {:?}", indicators);
        }
        self.indicators = indicators;
    }

    pub fn indicators(&self) -> Indicators {
        self.indicators
    }
}

fn send<S: ReportSink>(sink: &mut S, report: Report) {
    if sink.is_ready() {
        sink.send_report(report);
    } else {
        debug!("host not ready, dropping {:?}", report);
    }
}
