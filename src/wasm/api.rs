//! WASM API for the processor.
//!
//! Provides JavaScript-callable interfaces for clocking the processor and
//! inspecting its state.

use crate::{
    disassemble_bus, format_instruction, Cpu, CpuError, MemoryBus, Status, SystemBus,
    RESET_VECTOR,
};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<CpuError> for JsError {
    fn from(err: CpuError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: Cpu<SystemBus>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a processor attached to a zeroed 64 KiB bus
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut cpu = Cpu::new();
        cpu.connect_bus(SystemBus::new());
        Emulator { cpu }
    }

    /// Copy a program into memory and point the reset vector at it
    ///
    /// Call `reset()` afterwards to start executing it.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        let bus = self.bus_mut()?;
        bus.load(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        bus.load(RESET_VECTOR, &start_addr.to_le_bytes())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(())
    }

    /// Run the reset sequence
    pub fn reset(&mut self) -> Result<(), JsError> {
        Ok(self.cpu.reset()?)
    }

    /// Advance one clock cycle
    pub fn tick(&mut self) -> Result<(), JsError> {
        Ok(self.cpu.tick()?)
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        Ok(self.cpu.run_for_cycles(cycles as u64)? as u32)
    }

    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn total_cycles(&self) -> f64 {
        self.cpu.total_cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag(Status::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag(Status::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag(Status::DECIMAL)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag(Status::INTERRUPT_DISABLE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag(Status::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag(Status::CARRY)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory without side effects
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.bus().map_or(0, |bus| bus.peek(addr))
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), JsError> {
        Ok(self.cpu.write_to_bus(addr, value)?)
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        match self.cpu.bus() {
            Some(bus) => js_sys::Uint8Array::from(&bus.as_slice()[start..start + 0x100]),
            None => js_sys::Uint8Array::new_with_length(0x100),
        }
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let Some(bus) = self.cpu.bus() else {
            return Vec::new();
        };

        disassemble_bus(bus, start_addr, num_instructions as usize)
            .iter()
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if instr.mnemonic != ".byte" {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}

impl Emulator {
    fn bus_mut(&mut self) -> Result<&mut SystemBus, JsError> {
        self.cpu
            .bus_mut()
            .ok_or_else(|| JsError::from(CpuError::NoBus))
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
