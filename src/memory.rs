//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the processor from the
//! memory it addresses, and `SystemBus`, the flat 64 KiB implementation the core
//! ships with.
//!
//! ## Design Principles
//!
//! - Reads are total over the 16-bit space and never fail.
//! - Reads come in two flavours: `read` may have side effects (I/O-mapped
//!   registers clear latches when read), `peek` never does and is what debug
//!   tooling uses.
//! - Writes return `Result` so that banked or ROM-backed buses can reject them.
//!   Wider device models (mappers, picture/sound units, DMA) live outside the core.

use crate::BusError;

/// Size of the 16-bit address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the processor to read/write bytes.
///
/// # Examples
///
/// ```
/// use rp2a03::{MemoryBus, SystemBus};
///
/// let mut bus = SystemBus::new();
/// bus.write(0x1234, 0x42).unwrap();
///
/// assert_eq!(bus.read(0x1234), 0x42);
/// assert_eq!(bus.peek(0x1234), 0x42);
/// ```
///
/// ## Implementing a Custom Bus
///
/// ```
/// use rp2a03::{BusError, MemoryBus};
///
/// /// 32 KiB of RAM mirrored below a 32 KiB ROM.
/// struct RomRamBus {
///     ram: Vec<u8>,
///     rom: Vec<u8>,
/// }
///
/// impl MemoryBus for RomRamBus {
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are ignored
///         Ok(())
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte as the processor does, allowing side effects.
    ///
    /// The default forwards to [`MemoryBus::peek`]; buses with I/O-mapped
    /// registers override this to apply their read side effects.
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// Reads a byte without any side effect.
    ///
    /// Used for inspection (debuggers, disassemblers, trace output). Must return
    /// the same value `read` would, without changing any state.
    fn peek(&self, addr: u16) -> u8;

    /// Writes a byte to the specified address.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError>;
}

/// A borrowed bus is a bus, so a caller can keep ownership and lend it to the
/// processor with `Cpu<&mut MyBus>`.
impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn peek(&self, addr: u16) -> u8 {
        (**self).peek(addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        (**self).write(addr, value)
    }
}

/// Flat 64 KiB memory bus.
///
/// All 65536 addresses map to one contiguous array, zero-initialised at
/// construction. There is no banking and no unmapped memory.
///
/// # Examples
///
/// ```
/// use rp2a03::{MemoryBus, SystemBus};
///
/// let bus = SystemBus::new();
/// assert_eq!(bus.peek(0x0000), 0x00);
/// assert_eq!(bus.peek(0xFFFF), 0x00);
/// ```
#[derive(Clone)]
pub struct SystemBus {
    ram: Box<[u8; MEMORY_SIZE]>,
}

impl SystemBus {
    /// Creates a new bus with all bytes set to zero.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Writes a value given in wider integer types, validating both operands.
    ///
    /// This is the entry point for callers that do not already hold a `u16`
    /// address and a `u8` value (loaders, scripting front ends). The address is
    /// checked before the value, and nothing is written on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{BusError, SystemBus};
    ///
    /// let mut bus = SystemBus::new();
    /// assert!(bus.write_checked(0xFFFF, 0xFF).is_ok());
    /// assert_eq!(
    ///     bus.write_checked(0x1_0000, 0x00),
    ///     Err(BusError::OutOfRange { address: 0x1_0000 })
    /// );
    /// assert_eq!(
    ///     bus.write_checked(0x0000, 0x100),
    ///     Err(BusError::ValueOutOfRange { value: 0x100 })
    /// );
    /// ```
    pub fn write_checked(&mut self, address: u32, value: u32) -> Result<(), BusError> {
        let addr = u16::try_from(address).map_err(|_| BusError::OutOfRange { address })?;
        let value = u8::try_from(value).map_err(|_| BusError::ValueOutOfRange { value })?;
        self.write(addr, value)
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// Fails without writing anything if the image would run past 0xFFFF.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<(), BusError> {
        let start = origin as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(BusError::OutOfRange {
                address: end as u32 - 1,
            });
        }
        self.ram[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.ram[..]
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for SystemBus {
    fn peek(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        self.ram[addr as usize] = value;
        Ok(())
    }
}
