//! Decode diagnostics.
//!
//! Errors in the line decoder and the scancode translator never propagate; the state machine that
//! saw the problem drops back to its idle state and records what happened here.  One instance is
//! shared by the interrupt and the main loop (the firmware keeps it in a `static`), and anything
//! that wants to report on line quality can read it.

use core::cell::Cell;

use critical_section::Mutex;

use crate::line::LineState;
use crate::log::warn;
use crate::scancode::ScancodeState;

/// Everything that can go wrong between the wire and a key event.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum DecodeError {
    /// Start bit was high, or stop bit was low.  The state is where it was noticed.
    Framing(LineState),
    /// The parity bit did not make the number of set bits odd.
    Parity,
    /// The data line could not be read.
    PinRead(LineState),
    /// A byte that has no meaning in the translator state it arrived in.
    Scancode { state: ScancodeState, byte: u8 },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DecodeError::Framing(s) => defmt::write!(fmt, "framing error in {}", s),
            DecodeError::Parity => defmt::write!(fmt, "parity error"),
            DecodeError::PinRead(s) => defmt::write!(fmt, "data pin read failed in {}", s),
            DecodeError::Scancode { state, byte } => {
                defmt::write!(fmt, "unexpected scancode {=u8:#x} in {}", byte, state)
            }
        }
    }
}

/// The last decode error, and how many there have been.
pub struct Diagnostics {
    last: Mutex<Cell<Option<DecodeError>>>,
    count: Mutex<Cell<u32>>,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Diagnostics {
            last: Mutex::new(Cell::new(None)),
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Record an error, replacing whatever was recorded before.
    pub fn record(&self, error: DecodeError) {
        warn!("ps2: {:?}", error);
        critical_section::with(|cs| {
            self.last.borrow(cs).set(Some(error));
            let count = self.count.borrow(cs);
            count.set(count.get().wrapping_add(1));
        });
    }

    pub fn last(&self) -> Option<DecodeError> {
        critical_section::with(|cs| self.last.borrow(cs).get())
    }

    /// The number of errors recorded.  Wraps.
    pub fn count(&self) -> u32 {
        critical_section::with(|cs| self.count.borrow(cs).get())
    }

    pub fn clear(&self) {
        critical_section::with(|cs| {
            self.last.borrow(cs).set(None);
            self.count.borrow(cs).set(0);
        });
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

/// The counters as they were last reported, so that a periodic status check only speaks up when
/// something changed.
#[derive(Default)]
pub struct DiagWatch {
    errors: u32,
    dropped: u32,
}

impl DiagWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error count and last error, if there have been errors since the previous call.
    pub fn errors(&mut self, diag: &Diagnostics) -> Option<(u32, Option<DecodeError>)> {
        let count = diag.count();
        if count == self.errors {
            return None;
        }
        self.errors = count;
        Some((count, diag.last()))
    }

    /// The dropped byte count, if it moved since the previous call.
    pub fn dropped(&mut self, dropped: u32) -> Option<u32> {
        if dropped == self.dropped {
            return None;
        }
        self.dropped = dropped;
        Some(dropped)
    }

    /// Clear the diagnostics, and start counting errors from zero again.
    pub fn clear(&mut self, diag: &Diagnostics) {
        diag.clear();
        self.errors = 0;
    }
}
