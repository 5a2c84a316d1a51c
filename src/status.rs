//! # Status Register
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7 | N (Negative) |
//! | 6 | V (Overflow) |
//! | 5 | unused, held set |
//! | 4 | B (Break, only meaningful in a pushed copy) |
//! | 3 | D (Decimal, present but inert on the 2A03) |
//! | 2 | I (Interrupt disable) |
//! | 1 | Z (Zero) |
//! | 0 | C (Carry) |

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Value after power-on and reset: interrupts disabled, unused bit set.
    pub const POWER_ON: Status = Status::INTERRUPT_DISABLE.union(Status::UNUSED);

    /// Rebuilds the register from a byte pulled off the stack.
    ///
    /// Break does not exist as a latch inside the processor, so it is dropped;
    /// the unused bit reads back set.
    pub fn from_stack(value: u8) -> Self {
        let mut status = Status::from_bits_retain(value);
        status.remove(Status::BREAK);
        status.insert(Status::UNUSED);
        status
    }

    /// The byte pushed to the stack, with Break set or clear as requested.
    pub fn to_stack(self, brk: bool) -> u8 {
        let mut status = self | Status::UNUSED;
        status.set(Status::BREAK, brk);
        status.bits()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}
