//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 56 documented instructions,
//! organized by category. Each instruction is a standalone function that runs
//! after the addressing mode has resolved its operand location.
//!
//! Every handler returns `Ok(true)` if the instruction pays the extra cycle
//! when its addressing mode crosses a page (the read-type instructions), and
//! `Ok(false)` otherwise.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic, logic and compare (ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY)
//! - **branches**: Conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow (JMP, JSR, RTS, RTI, BRK, NOP) and undocumented opcodes
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{Cpu, CpuError, MemoryBus, Operation};

/// Runs the handler for `operation`.
pub(crate) fn execute<B: MemoryBus>(
    cpu: &mut Cpu<B>,
    operation: Operation,
) -> Result<bool, CpuError> {
    use Operation::*;

    match operation {
        Adc => alu::execute_adc(cpu),
        Sbc => alu::execute_sbc(cpu),
        And => alu::execute_and(cpu),
        Ora => alu::execute_ora(cpu),
        Eor => alu::execute_eor(cpu),
        Bit => alu::execute_bit(cpu),
        Cmp => alu::execute_cmp(cpu),
        Cpx => alu::execute_cpx(cpu),
        Cpy => alu::execute_cpy(cpu),

        Bcc => branches::execute_bcc(cpu),
        Bcs => branches::execute_bcs(cpu),
        Beq => branches::execute_beq(cpu),
        Bne => branches::execute_bne(cpu),
        Bmi => branches::execute_bmi(cpu),
        Bpl => branches::execute_bpl(cpu),
        Bvc => branches::execute_bvc(cpu),
        Bvs => branches::execute_bvs(cpu),

        Asl => shifts::execute_asl(cpu),
        Lsr => shifts::execute_lsr(cpu),
        Rol => shifts::execute_rol(cpu),
        Ror => shifts::execute_ror(cpu),

        Lda => load_store::execute_lda(cpu),
        Ldx => load_store::execute_ldx(cpu),
        Ldy => load_store::execute_ldy(cpu),
        Sta => load_store::execute_sta(cpu),
        Stx => load_store::execute_stx(cpu),
        Sty => load_store::execute_sty(cpu),

        Inc => inc_dec::execute_inc(cpu),
        Dec => inc_dec::execute_dec(cpu),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu),
        Jsr => control::execute_jsr(cpu),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => control::execute_nop(cpu),
        Illegal => control::execute_illegal(cpu),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::execute_clc(cpu),
        Sec => flags::execute_sec(cpu),
        Cli => flags::execute_cli(cpu),
        Sei => flags::execute_sei(cpu),
        Cld => flags::execute_cld(cpu),
        Sed => flags::execute_sed(cpu),
        Clv => flags::execute_clv(cpu),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }
}
