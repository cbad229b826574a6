//! The main loop half of the pipeline.
//!
//! Bytes come out of the queue and go in here one at a time; reports come out the other side into
//! a [`ReportSink`].

use crate::diag::Diagnostics;
use crate::keystate::{Indicators, KeyState, ReportSink};
use crate::log::{debug, info};
use crate::scancode::ScancodeTranslator;
use crate::{Event, KeyEvent};

#[derive(Default)]
pub struct Converter {
    translator: ScancodeTranslator,
    keys: KeyState,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one byte from the keyboard.
    pub fn handle_byte<S: ReportSink>(&mut self, byte: u8, diag: &Diagnostics, sink: &mut S) {
        match self.translator.feed(byte, diag) {
            Some(Event::Key(event)) => {
                debug!("{:?}", event);
                self.keys.handle_event(event, sink);
            }
            Some(Event::Tap(id)) => {
                debug!("tap {:?}", id);
                self.keys.handle_event(KeyEvent::Make(id), sink);
                self.keys.handle_event(KeyEvent::Break(id), sink);
            }
            Some(Event::SelfTest) => {
                // A freshly powered keyboard isn't holding anything.
                info!("keyboard connected");
                self.reset(sink);
            }
            None => (),
        }
    }

    /// Drop any partial sequence and release every key.  The caller is responsible for the
    /// interrupt side (the line decoder and the queue).
    pub fn reset<S: ReportSink>(&mut self, sink: &mut S) {
        self.translator.reset();
        self.keys.reset(sink);
    }

    /// The host changed the keyboard LEDs.
    pub fn set_indicators(&mut self, indicators: Indicators) {
        self.keys.set_indicators(indicators);
    }

    pub fn translator(&self) -> &ScancodeTranslator {
        &self.translator
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }
}
