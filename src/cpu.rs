//! # Processor State and Clock
//!
//! This module contains the `Cpu` struct representing the 6502 processor state
//! and the per-cycle clock state machine that drives it.
//!
//! ## Processor State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status**: [`Status`] bit set
//! - **Decode state**: current opcode, resolved address/offset, fetched operand
//! - **Cycle counter**: cycles remaining for the in-flight instruction
//!
//! ## Execution Model
//!
//! The external driver calls `tick()` once per emulated clock cycle. When no
//! instruction is in flight, the tick services a pending interrupt or fetches,
//! decodes and executes the next instruction in full and loads the cycle counter
//! with its cost. Every tick, including that one, then decrements the counter.
//!
//! `step()` and `run_for_cycles()` are conveniences built on `tick()`.

use crate::addressing::page_crossed;
use crate::instructions;
use crate::trace::{TraceEvent, TraceKind, TraceSink};
use crate::{AddressingMode, CpuError, MemoryBus, Operation, Status, SystemBus, OPCODE_TABLE};

/// Address of the little-endian NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after power-on and reset.
const POWER_ON_SP: u8 = 0xFD;

/// Cycles taken by the reset sequence and by interrupt entry.
const INTERRUPT_CYCLES: u8 = 7;

/// External interrupt signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// Maskable interrupt request.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
    /// Reset line.
    Reset,
}

/// Snapshot of the programmer-visible registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

/// 6502 processor state and execution context.
///
/// The processor is generic over its bus. A bus is not required at construction
/// time; every bus access checks for one and fails with [`CpuError::NoBus`] if
/// it is missing.
///
/// # Examples
///
/// ```
/// use rp2a03::{Cpu, CpuError, MemoryBus, Status, SystemBus};
///
/// let mut cpu: Cpu = Cpu::new();
/// assert_eq!(cpu.read_from_bus(0x0000), Err(CpuError::NoBus));
///
/// cpu.connect_bus(SystemBus::new());
/// assert_eq!(cpu.read_from_bus(0x0000), Ok(0x00));
///
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag(Status::INTERRUPT_DISABLE));
/// ```
pub struct Cpu<B: MemoryBus = SystemBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Status register
    pub(crate) status: Status,

    /// Opcode of the current instruction
    pub(crate) opcode: u8,

    /// Addressing mode of the current instruction
    pub(crate) mode: AddressingMode,

    /// Effective address resolved by the addressing mode
    pub(crate) addr_abs: u16,

    /// Sign-extended branch offset resolved by relative addressing
    pub(crate) addr_rel: u16,

    /// Operand byte fetched for the current instruction
    pub(crate) fetched: u8,

    /// Cycles remaining for the in-flight instruction
    pub(crate) cycles: u8,

    /// Total clock ticks since construction
    total_cycles: u64,

    irq_pending: bool,
    nmi_pending: bool,
    reset_pending: bool,

    /// Memory bus, absent until connected
    pub(crate) bus: Option<B>,

    tracer: Option<Box<dyn TraceSink>>,
}

impl<B: MemoryBus> Cpu<B> {
    /// Creates a processor in its power-on state with no bus attached.
    ///
    /// A, X and Y are zero, SP is 0xFD, Interrupt-disable and the unused status
    /// bit are set, and PC is 0x0000 until [`Cpu::reset`] loads the reset vector.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: POWER_ON_SP,
            pc: 0x0000,
            status: Status::POWER_ON,
            opcode: 0x00,
            mode: AddressingMode::Implied,
            addr_abs: 0x0000,
            addr_rel: 0x0000,
            fetched: 0x00,
            cycles: 0,
            total_cycles: 0,
            irq_pending: false,
            nmi_pending: false,
            reset_pending: false,
            bus: None,
            tracer: None,
        }
    }

    // ========== Bus Connection ==========

    /// Attaches a bus, replacing any previously connected one.
    pub fn connect_bus(&mut self, bus: B) {
        self.bus = Some(bus);
    }

    /// Detaches and returns the bus, if one was connected.
    pub fn disconnect_bus(&mut self) -> Option<B> {
        self.bus.take()
    }

    /// Returns the connected bus.
    pub fn bus(&self) -> Option<&B> {
        self.bus.as_ref()
    }

    /// Returns the connected bus mutably.
    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.bus.as_mut()
    }

    /// Reads a byte through the connected bus, with side effects.
    pub fn read_from_bus(&mut self, addr: u16) -> Result<u8, CpuError> {
        self.read(addr)
    }

    /// Writes a byte through the connected bus.
    pub fn write_to_bus(&mut self, addr: u16, value: u8) -> Result<(), CpuError> {
        self.write(addr, value)
    }

    pub(crate) fn read(&mut self, addr: u16) -> Result<u8, CpuError> {
        let bus = self.bus.as_mut().ok_or(CpuError::NoBus)?;
        Ok(bus.read(addr))
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), CpuError> {
        let bus = self.bus.as_mut().ok_or(CpuError::NoBus)?;
        bus.write(addr, value)?;
        Ok(())
    }

    /// Reads a little-endian word, e.g. an interrupt vector.
    fn read_word(&mut self, addr: u16) -> Result<u16, CpuError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    // ========== Tracing ==========

    /// Installs a sink that receives one [`TraceEvent`] per tick.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, LogTracer, SystemBus};
    ///
    /// let mut cpu: Cpu = Cpu::new();
    /// cpu.set_trace_sink(LogTracer::default());
    /// ```
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.tracer = Some(Box::new(sink));
    }

    /// Removes and returns the installed trace sink.
    pub fn clear_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take()
    }

    // ========== Clock ==========

    /// Advances the processor by one clock cycle.
    ///
    /// On an instruction boundary (`cycles() == 0`) this services a pending
    /// reset, NMI or unmasked IRQ, or otherwise fetches, decodes and executes
    /// the next instruction and loads its cycle cost. Every tick then consumes
    /// one cycle.
    ///
    /// A bus fault while executing an instruction abandons it: PC goes back to
    /// its opcode, `cycles()` stays 0 and the tick is not counted. Bus writes
    /// made before the fault are not undone.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, MemoryBus, SystemBus};
    ///
    /// let mut bus = SystemBus::new();
    /// bus.write(0x0000, 0xEA).unwrap(); // NOP
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.connect_bus(bus);
    ///
    /// cpu.tick().unwrap();
    /// assert_eq!(cpu.pc(), 0x0001);
    /// assert_eq!(cpu.cycles(), 1);
    ///
    /// cpu.tick().unwrap();
    /// assert!(cpu.complete());
    /// ```
    pub fn tick(&mut self) -> Result<(), CpuError> {
        let start_pc = self.pc;
        let kind = if self.cycles == 0 {
            Some(self.begin_instruction()?)
        } else {
            None
        };

        self.cycles = self.cycles.saturating_sub(1);
        self.total_cycles += 1;

        if self.tracer.is_some() {
            let event = TraceEvent {
                clock: self.total_cycles,
                pc: start_pc,
                kind: kind.unwrap_or(TraceKind::Wait),
                registers: self.registers(),
                cycles_remaining: self.cycles,
            };
            if let Some(tracer) = self.tracer.as_mut() {
                tracer.record(&event);
            }
        }

        Ok(())
    }

    /// Work done on an instruction boundary.
    fn begin_instruction(&mut self) -> Result<TraceKind, CpuError> {
        if self.reset_pending {
            self.enter_reset()?;
            return Ok(TraceKind::Interrupt(Interrupt::Reset));
        }

        if self.nmi_pending {
            self.nmi_pending = false;
            self.enter_interrupt(NMI_VECTOR)?;
            return Ok(TraceKind::Interrupt(Interrupt::Nmi));
        }

        if self.irq_pending {
            self.irq_pending = false;
            if !self.status.contains(Status::INTERRUPT_DISABLE) {
                self.enter_interrupt(IRQ_VECTOR)?;
                return Ok(TraceKind::Interrupt(Interrupt::Irq));
            }
            log::debug!("IRQ ignored at ${:04X}: interrupts disabled", self.pc);
        }

        self.execute_next()
    }

    /// Fetches, decodes and executes the instruction at PC.
    fn execute_next(&mut self) -> Result<TraceKind, CpuError> {
        let opcode_addr = self.pc;
        let opcode = self.read(opcode_addr)?;
        self.status.insert(Status::UNUSED);
        self.pc = opcode_addr.wrapping_add(1);

        let entry = &OPCODE_TABLE[opcode as usize];
        self.opcode = opcode;
        self.mode = entry.mode;
        self.cycles = entry.cycles;

        let penalty = match self.run_operation(entry.mode, entry.operation) {
            Ok(penalty) => penalty,
            Err(err) => {
                self.pc = opcode_addr;
                self.cycles = 0;
                return Err(err);
            }
        };
        if penalty {
            self.cycles += 1;
        }

        self.status.insert(Status::UNUSED);

        Ok(TraceKind::Fetch {
            opcode,
            mnemonic: entry.mnemonic,
            mode: entry.mode,
        })
    }

    /// Resolves the operand and executes. Returns true when the instruction
    /// owes the page-cross cycle.
    fn run_operation(
        &mut self,
        mode: AddressingMode,
        operation: Operation,
    ) -> Result<bool, CpuError> {
        let page_crossed = self.resolve_address(mode)?;
        let penalty_applies = instructions::execute(self, operation)?;

        // Only read-type operations pay for an indexed page crossing
        Ok(page_crossed && penalty_applies)
    }

    /// Ticks until the in-flight instruction, or the next one if idle, has
    /// fully elapsed. Returns the number of ticks consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, MemoryBus, SystemBus};
    ///
    /// let mut bus = SystemBus::new();
    /// bus.load(0x0000, &[0xAD, 0x00, 0x02]).unwrap(); // LDA $0200
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.connect_bus(bus);
    /// assert_eq!(cpu.step().unwrap(), 4);
    /// ```
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let mut ticks = 0;
        loop {
            self.tick()?;
            ticks += 1;
            if self.cycles == 0 {
                return Ok(ticks);
            }
        }
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the number of cycles actually consumed, which may exceed the
    /// budget by part of an instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, MemoryBus, SystemBus};
    ///
    /// let mut bus = SystemBus::new();
    /// bus.load(0x0000, &[0xEA; 16]).unwrap(); // NOPs, 2 cycles each
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.connect_bus(bus);
    /// assert_eq!(cpu.run_for_cycles(5).unwrap(), 6);
    /// assert_eq!(cpu.pc(), 0x0003);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, CpuError> {
        let mut consumed = 0u64;
        while consumed < cycle_budget {
            consumed += self.step()? as u64;
        }
        Ok(consumed)
    }

    // ========== Reset and Interrupts ==========

    /// Resets the processor.
    ///
    /// Registers return to their power-on values, Interrupt-disable is set, any
    /// latched interrupt is dropped, and PC is loaded from the reset vector at
    /// 0xFFFC/0xFFFD. The reset sequence then takes 7 cycles.
    ///
    /// On an instruction boundary the reset happens at once. While an
    /// instruction is in flight it is latched instead and serviced at the next
    /// boundary, ahead of NMI and IRQ.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, MemoryBus, SystemBus};
    ///
    /// let mut bus = SystemBus::new();
    /// bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.connect_bus(bus);
    /// cpu.reset().unwrap();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.cycles(), 7);
    /// ```
    pub fn reset(&mut self) -> Result<(), CpuError> {
        if self.cycles > 0 {
            self.reset_pending = true;
            return Ok(());
        }

        self.enter_reset()?;
        self.trace_signal(Interrupt::Reset);
        Ok(())
    }

    /// Runs the reset sequence and loads its 7 cycles.
    fn enter_reset(&mut self) -> Result<(), CpuError> {
        let pc = self.read_word(RESET_VECTOR)?;

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = POWER_ON_SP;
        self.status = Status::POWER_ON;
        self.pc = pc;

        self.addr_abs = 0x0000;
        self.addr_rel = 0x0000;
        self.fetched = 0x00;
        self.irq_pending = false;
        self.nmi_pending = false;
        self.reset_pending = false;
        self.cycles = INTERRUPT_CYCLES;

        log::debug!("reset: PC=${:04X}", pc);
        Ok(())
    }

    /// Raises a maskable interrupt request.
    ///
    /// The request is serviced at the next instruction boundary. If
    /// Interrupt-disable is set at that point the request is ignored.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Raises a non-maskable interrupt.
    ///
    /// Always serviced at the next instruction boundary, ahead of any IRQ.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Pushes PC and status (Break clear), masks IRQs and jumps through `vector`.
    fn enter_interrupt(&mut self, vector: u16) -> Result<(), CpuError> {
        self.push_word(self.pc)?;
        self.push(self.status.to_stack(false))?;
        self.status.insert(Status::INTERRUPT_DISABLE);
        self.pc = self.read_word(vector)?;
        self.cycles = INTERRUPT_CYCLES;

        log::debug!("interrupt via ${:04X}: PC=${:04X}", vector, self.pc);
        Ok(())
    }

    /// Reports a reset to the tracer outside of the tick stream.
    fn trace_signal(&mut self, signal: Interrupt) {
        if self.tracer.is_some() {
            let event = TraceEvent {
                clock: self.total_cycles,
                pc: self.pc,
                kind: TraceKind::Interrupt(signal),
                registers: self.registers(),
                cycles_remaining: self.cycles,
            };
            if let Some(tracer) = self.tracer.as_mut() {
                tracer.record(&event);
            }
        }
    }

    // ========== Instruction Helpers ==========

    /// Loads the operand of the current instruction into `fetched`.
    ///
    /// Implied mode already latched the accumulator, so nothing is read.
    pub(crate) fn fetch(&mut self) -> Result<u8, CpuError> {
        if self.mode != AddressingMode::Implied {
            self.fetched = self.read(self.addr_abs)?;
        }
        Ok(self.fetched)
    }

    /// Pushes a byte onto the stack page.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), CpuError> {
        self.write(STACK_BASE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte from the stack page.
    pub(crate) fn pull(&mut self) -> Result<u8, CpuError> {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) -> Result<(), CpuError> {
        self.push((value >> 8) as u8)?;
        self.push(value as u8)
    }

    /// Pulls a word pushed by `push_word`.
    pub(crate) fn pull_word(&mut self) -> Result<u16, CpuError> {
        let lo = self.pull()? as u16;
        let hi = self.pull()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Sets Zero and Negative from `value`.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.status.set(Status::ZERO, value == 0);
        self.status.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Takes a branch if `condition` holds: one extra cycle, plus one more if
    /// the target lies on a different page from the next instruction.
    pub(crate) fn branch_if(&mut self, condition: bool) {
        if condition {
            self.cycles += 1;
            let target = self.pc.wrapping_add(self.addr_rel);
            if page_crossed(target, self.pc) {
                self.cycles += 1;
            }
            self.pc = target;
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every bit of `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Returns all programmer-visible registers at once.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status,
        }
    }

    /// Returns the cycles remaining for the in-flight instruction.
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    /// Returns the total number of ticks since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// True on an instruction boundary.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Returns the opcode of the most recently decoded instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// True if an IRQ is latched and waiting for the next boundary.
    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// True if an NMI is latched and waiting for the next boundary.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// True if a reset arrived mid-instruction and waits for the boundary.
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status register. The unused bit is kept set.
    pub fn set_status(&mut self, status: Status) {
        self.status = status | Status::UNUSED;
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
        self.status.insert(Status::UNUSED);
    }
}

impl<B: MemoryBus> Default for Cpu<B> {
    fn default() -> Self {
        Self::new()
    }
}
