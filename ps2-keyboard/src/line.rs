//! PS/2 line decoding.
//!
//! The keyboard drives the clock.  Each frame is 11 bits, sampled on the falling edge of the clock:
//! a start bit (low), 8 data bits least significant first, an odd parity bit, and a stop bit
//! (high).  The decoder is driven once per falling edge from the GPIO interrupt, so everything here
//! is short and never blocks.
//!
//! Any fault drops the frame and returns to [`LineState::Idle`].  There is no resync signal in the
//! protocol other than the next start bit, so that is all we can do.

use embedded_hal::digital::v2::InputPin;

use crate::diag::{DecodeError, Diagnostics};
use crate::ringbuf::ByteQueue;

/// Identifies a GPIO pin, as reported by the interrupt that fired.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Where we are in a frame.  Each state names the bit that was most recently clocked in.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineState {
    Idle,
    Start,
    /// Data bit 0 through 7.
    Data(u8),
    Parity,
    Stop,
}

impl LineState {
    fn next(self) -> LineState {
        match self {
            LineState::Idle => LineState::Start,
            LineState::Start => LineState::Data(0),
            LineState::Data(7) => LineState::Parity,
            LineState::Data(n) => LineState::Data(n + 1),
            LineState::Parity => LineState::Stop,
            LineState::Stop => LineState::Idle,
        }
    }
}

pub struct LineDecoder {
    /// The pin whose falling edges clock the frame.
    clock: PinId,
    state: LineState,
    /// The byte being assembled.
    data: u8,
    /// Number of set bits seen so far in this frame (data and parity).
    ones: u8,
    /// Bytes decoded correctly but lost because the queue was full.
    dropped: u32,
}

impl LineDecoder {
    pub const fn new(clock: PinId) -> Self {
        LineDecoder {
            clock,
            state: LineState::Idle,
            data: 0,
            ones: 0,
            dropped: 0,
        }
    }

    /// Edge callback entry point.  Anything other than a falling edge on the clock pin is ignored.
    /// The data line is only read for qualifying edges.  Completed bytes go into `queue`, faults
    /// go into `diag`.
    pub fn on_edge<P: InputPin, const N: usize>(
        &mut self,
        pin: PinId,
        edge: Edge,
        data: &P,
        queue: &mut ByteQueue<N>,
        diag: &Diagnostics,
    ) {
        if pin != self.clock || edge != Edge::Falling {
            return;
        }

        let bit = match data.is_high() {
            Ok(bit) => bit,
            Err(_) => {
                let state = self.state.next();
                self.reset();
                diag.record(DecodeError::PinRead(state));
                return;
            }
        };

        match self.clock_bit(bit) {
            Ok(Some(byte)) => {
                if !queue.put(byte) {
                    self.dropped = self.dropped.wrapping_add(1);
                }
            }
            Ok(None) => (),
            Err(err) => diag.record(err),
        }
    }

    /// Advance by one clocked bit.  Returns the byte when a frame completes.
    pub fn clock_bit(&mut self, bit: bool) -> Result<Option<u8>, DecodeError> {
        self.state = self.state.next();
        match self.state {
            // Only reachable by clocking past Stop, which always resets.
            LineState::Idle => return Err(self.abort(DecodeError::Framing(LineState::Idle))),
            LineState::Start => {
                if bit {
                    return Err(self.abort(DecodeError::Framing(LineState::Start)));
                }
            }
            LineState::Data(_) => {
                self.data >>= 1;
                if bit {
                    self.data |= 0x80;
                    self.ones += 1;
                }
            }
            LineState::Parity => {
                if bit {
                    self.ones += 1;
                }
                if self.ones & 1 == 0 {
                    return Err(self.abort(DecodeError::Parity));
                }
            }
            LineState::Stop => {
                if !bit {
                    return Err(self.abort(DecodeError::Framing(LineState::Stop)));
                }
                let byte = self.data;
                self.reset();
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    fn abort(&mut self, err: DecodeError) -> DecodeError {
        self.reset();
        err
    }

    /// Abandon any partial frame.
    pub fn reset(&mut self) {
        self.state = LineState::Idle;
        self.data = 0;
        self.ones = 0;
    }

    pub fn state(&self) -> LineState {
        self.state
    }

    /// How many good bytes have been lost to a full queue.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::v2::InputPin;

    use super::{Edge, LineDecoder, LineState, PinId};
    use crate::diag::{DecodeError, Diagnostics};
    use crate::ringbuf::ByteQueue;

    const CLOCK: PinId = PinId(2);

    /// A data line that reads whatever we set.
    pub(crate) struct Level(pub bool);

    impl InputPin for Level {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Infallible> {
            Ok(self.0)
        }

        fn is_low(&self) -> Result<bool, Infallible> {
            Ok(!self.0)
        }
    }

    /// A data line that always fails to read.
    struct Broken;

    impl InputPin for Broken {
        type Error = ();

        fn is_high(&self) -> Result<bool, ()> {
            Err(())
        }

        fn is_low(&self) -> Result<bool, ()> {
            Err(())
        }
    }

    /// The 11 bits of a frame carrying `byte`.
    pub(crate) fn frame(byte: u8) -> [bool; 11] {
        let mut bits = [false; 11];
        for i in 0..8 {
            bits[i + 1] = byte & (1 << i) != 0;
        }
        bits[9] = byte.count_ones() % 2 == 0;
        bits[10] = true;
        bits
    }

    fn clock_in<const N: usize>(
        dec: &mut LineDecoder,
        bits: &[bool],
        queue: &mut ByteQueue<N>,
        diag: &Diagnostics,
    ) {
        for &bit in bits {
            dec.on_edge(CLOCK, Edge::Falling, &Level(bit), queue, diag);
        }
    }

    #[test]
    fn every_byte_decodes() {
        let diag = Diagnostics::new();
        let mut dec = LineDecoder::new(CLOCK);
        let mut queue = ByteQueue::<16>::new();

        for byte in 0..=255u8 {
            clock_in(&mut dec, &frame(byte), &mut queue, &diag);
            assert_eq!(queue.get(), Some(byte));
            assert!(queue.is_empty());
            assert_eq!(dec.state(), LineState::Idle);
        }
        assert_eq!(diag.count(), 0);
    }

    #[test]
    fn inverted_start() {
        for byte in 0..=255u8 {
            let diag = Diagnostics::new();
            let mut dec = LineDecoder::new(CLOCK);
            let mut queue = ByteQueue::<16>::new();

            let mut bits = frame(byte);
            bits[0] = true;

            clock_in(&mut dec, &bits[..1], &mut queue, &diag);
            assert_eq!(diag.count(), 1);
            assert_eq!(diag.last(), Some(DecodeError::Framing(LineState::Start)));
            assert_eq!(dec.state(), LineState::Idle);

            // The rest of the frame is too short to be mistaken for a byte.
            clock_in(&mut dec, &bits[1..], &mut queue, &diag);
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn inverted_stop() {
        for byte in 0..=255u8 {
            let diag = Diagnostics::new();
            let mut dec = LineDecoder::new(CLOCK);
            let mut queue = ByteQueue::<16>::new();

            let mut bits = frame(byte);
            bits[10] = false;
            clock_in(&mut dec, &bits, &mut queue, &diag);

            assert!(queue.is_empty());
            assert_eq!(diag.count(), 1);
            assert_eq!(diag.last(), Some(DecodeError::Framing(LineState::Stop)));
            assert_eq!(dec.state(), LineState::Idle);
        }
    }

    #[test]
    fn bad_parity() {
        for byte in 0..=255u8 {
            for flip in 1..=8 {
                let diag = Diagnostics::new();
                let mut dec = LineDecoder::new(CLOCK);
                let mut queue = ByteQueue::<16>::new();

                let mut bits = frame(byte);
                bits[flip] = !bits[flip];
                clock_in(&mut dec, &bits[..10], &mut queue, &diag);

                assert!(queue.is_empty());
                assert_eq!(diag.count(), 1);
                assert_eq!(diag.last(), Some(DecodeError::Parity));
                assert_eq!(dec.state(), LineState::Idle);
            }
        }
    }

    #[test]
    fn recovers_after_error() {
        let diag = Diagnostics::new();
        let mut dec = LineDecoder::new(CLOCK);
        let mut queue = ByteQueue::<16>::new();

        let mut bad = frame(0x1c);
        bad[9] = !bad[9];
        clock_in(&mut dec, &bad[..10], &mut queue, &diag);
        clock_in(&mut dec, &frame(0x1c), &mut queue, &diag);

        assert_eq!(diag.count(), 1);
        assert_eq!(queue.get(), Some(0x1c));
        assert_eq!(queue.get(), None);
    }

    #[test]
    fn other_edges_ignored() {
        let diag = Diagnostics::new();
        let mut dec = LineDecoder::new(CLOCK);
        let mut queue = ByteQueue::<16>::new();

        for (i, &bit) in frame(0x75).iter().enumerate() {
            // Noise between every real edge: the wrong edge, the wrong pin, and a start bit that
            // would be a framing error if it were counted.
            dec.on_edge(CLOCK, Edge::Rising, &Level(!bit), &mut queue, &diag);
            dec.on_edge(PinId(3), Edge::Falling, &Level(true), &mut queue, &diag);
            if i == 0 {
                assert_eq!(dec.state(), LineState::Idle);
            }
            dec.on_edge(CLOCK, Edge::Falling, &Level(bit), &mut queue, &diag);
        }

        assert_eq!(diag.count(), 0);
        assert_eq!(queue.get(), Some(0x75));
    }

    #[test]
    fn full_queue_drops() {
        let diag = Diagnostics::new();
        let mut dec = LineDecoder::new(CLOCK);
        let mut queue = ByteQueue::<2>::new();

        for byte in [0xe0, 0x75, 0xe0] {
            clock_in(&mut dec, &frame(byte), &mut queue, &diag);
        }
        assert_eq!(dec.dropped(), 1);
        assert_eq!(diag.count(), 0);
        assert_eq!(queue.get(), Some(0xe0));
        assert_eq!(queue.get(), Some(0x75));
        assert_eq!(queue.get(), None);
    }

    #[test]
    fn pin_read_failure() {
        let diag = Diagnostics::new();
        let mut dec = LineDecoder::new(CLOCK);
        let mut queue = ByteQueue::<16>::new();

        dec.on_edge(CLOCK, Edge::Falling, &Level(false), &mut queue, &diag);
        dec.on_edge(CLOCK, Edge::Falling, &Broken, &mut queue, &diag);
        assert_eq!(diag.last(), Some(DecodeError::PinRead(LineState::Data(0))));
        assert_eq!(dec.state(), LineState::Idle);

        clock_in(&mut dec, &frame(0xaa), &mut queue, &diag);
        assert_eq!(queue.get(), Some(0xaa));
    }
}
