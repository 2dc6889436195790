// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Common-anode seven-segment digit.
//!
//! The display hangs off eight output lines driven as one byte: bit `i` of a pattern drives line
//! `i`, and a `0` bit lights its segment. The display latches whatever was last written, so there
//! is no refresh.

use embedded_hal::digital::{Error as _, ErrorType};

use crate::{Error, Result};

/// Segment patterns for digits 0..=9 (0 = segment lit).
///
/// Digits 2 and 3 share a pattern. This is the table the panel has always shipped with and the
/// duplicate is kept as-is.
pub const SEGMENT_PATTERNS: [u8; 10] = [
    0b1011_1111, // 0
    0b1011_0000, // 1
    0b1111_1001, // 2
    0b1111_1001, // 3
    0b1111_0010, // 4
    0b1001_0010, // 5
    0b1000_0010, // 6
    0b1111_1000, // 7
    0b1000_0000, // 8
    0b1001_0000, // 9
];

/// An 8-line output port written as a single byte.
pub trait SegmentPort: ErrorType {
    /// Drive all eight lines at once from `pattern`.
    fn write_pattern(&mut self, pattern: u8) -> Result<(), Self::Error>;
}

/// Seven-segment display on a [`SegmentPort`].
pub struct SevenSegment<P> {
    port: P,
}

impl<P: SegmentPort> SevenSegment<P> {
    /// Wrap a configured output port. Nothing is written until the first digit is shown.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Show digit `n`: one write of `SEGMENT_PATTERNS[n]` to the port.
    ///
    /// # Panics
    ///
    /// Panics if `n > 9`. Callers only ever pass digits from the preset table.
    pub fn display_number(&mut self, n: u8) -> Result<()> {
        let pattern = SEGMENT_PATTERNS[usize::from(n)];
        self.port
            .write_pattern(pattern)
            .map_err(|e| Error::Display(e.kind()))
    }

    pub fn free(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimSegmentPort;

    #[test]
    fn every_digit_writes_its_table_entry() {
        let port = SimSegmentPort::new();
        let mut display = SevenSegment::new(port.clone());

        for digit in 0..=9u8 {
            display.display_number(digit).unwrap();
            assert_eq!(port.last(), Some(SEGMENT_PATTERNS[usize::from(digit)]));
        }
        assert_eq!(port.writes().len(), 10);
    }

    #[test]
    fn digits_two_and_three_share_a_pattern() {
        // Shipped table quirk: 2 and 3 are indistinguishable on the panel.
        assert_eq!(SEGMENT_PATTERNS[2], 0b1111_1001);
        assert_eq!(SEGMENT_PATTERNS[3], 0b1111_1001);

        let port = SimSegmentPort::new();
        let mut display = SevenSegment::new(port.clone());
        display.display_number(2).unwrap();
        display.display_number(3).unwrap();
        assert_eq!(port.writes(), vec![0b1111_1001, 0b1111_1001]);
    }

    #[test]
    fn table_is_verbatim() {
        assert_eq!(
            SEGMENT_PATTERNS,
            [0xBF, 0xB0, 0xF9, 0xF9, 0xF2, 0x92, 0x82, 0xF8, 0x80, 0x90]
        );
    }

    #[test]
    fn new_display_writes_nothing() {
        let port = SimSegmentPort::new();
        let _display = SevenSegment::new(port.clone());
        assert!(port.writes().is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_digit_panics() {
        let mut display = SevenSegment::new(SimSegmentPort::new());
        let _ = display.display_number(10);
    }
}
