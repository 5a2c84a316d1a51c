//! Integration tests for the disassembler.

use rp2a03::{
    disassemble, disassemble_bus, format_instruction, AddressingMode, DisassemblyOptions,
    SystemBus,
};

fn listing(bytes: &[u8], start_address: u16) -> Vec<String> {
    disassemble(bytes, DisassemblyOptions { start_address })
        .iter()
        .map(|instr| format!("{:04X}  {}", instr.address, format_instruction(instr)))
        .collect()
}

#[test]
fn test_small_program_listing() {
    // LDX #$0A; loop: TXA; STA $01FF,X; DEX; BNE loop; BRK
    let program = [0xA2, 0x0A, 0x8A, 0x9D, 0xFF, 0x01, 0xCA, 0xD0, 0xF9, 0x00];

    assert_eq!(
        listing(&program, 0x8000),
        [
            "8000  LDX #$0A",
            "8002  TXA",
            "8003  STA $01FF,X",
            "8006  DEX",
            "8007  BNE $8002",
            "8009  BRK",
        ]
    );
}

#[test]
fn test_every_addressing_mode_formats() {
    let program = [
        0xEA, // NOP
        0x4A, // LSR A
        0x69, 0x01, // ADC #$01
        0x65, 0x02, // ADC $02
        0x75, 0x03, // ADC $03,X
        0xB6, 0x04, // LDX $04,Y
        0x6D, 0x05, 0x06, // ADC $0605
        0x7D, 0x07, 0x08, // ADC $0807,X
        0x79, 0x09, 0x0A, // ADC $0A09,Y
        0x6C, 0x0B, 0x0C, // JMP ($0C0B)
        0x61, 0x0D, // ADC ($0D,X)
        0x71, 0x0E, // ADC ($0E),Y
    ];

    let lines: Vec<String> = disassemble(&program, DisassemblyOptions::default())
        .iter()
        .map(format_instruction)
        .collect();

    assert_eq!(
        lines,
        [
            "NOP",
            "LSR A",
            "ADC #$01",
            "ADC $02",
            "ADC $03,X",
            "LDX $04,Y",
            "ADC $0605",
            "ADC $0807,X",
            "ADC $0A09,Y",
            "JMP ($0C0B)",
            "ADC ($0D,X)",
            "ADC ($0E),Y",
        ]
    );
}

#[test]
fn test_undocumented_opcodes_as_data() {
    let instructions = disassemble(
        &[0x02, 0xA7, 0x10, 0x10, 0x1A],
        DisassemblyOptions::default(),
    );

    let lines: Vec<String> = instructions.iter().map(format_instruction).collect();
    assert_eq!(lines, [".byte $02", ".byte $A7", "BPL $0014", "NOP"]);
    assert_eq!(instructions[3].addressing_mode, AddressingMode::Implied);
}

#[test]
fn test_disassemble_bus_matches_slice() {
    let program = [0xA9, 0x01, 0x8D, 0x00, 0x02, 0x4C, 0x00, 0x80];
    let mut bus = SystemBus::new();
    bus.load(0x8000, &program).unwrap();

    let from_bus = disassemble_bus(&bus, 0x8000, 3);
    let from_slice = disassemble(
        &program,
        DisassemblyOptions {
            start_address: 0x8000,
        },
    );

    assert_eq!(from_bus, from_slice);
}

#[test]
fn test_instruction_metadata() {
    let instructions = disassemble(&[0xBD, 0x00, 0x30], DisassemblyOptions::default());
    let lda = &instructions[0];

    assert_eq!(lda.opcode, 0xBD);
    assert_eq!(lda.mnemonic, "LDA");
    assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
    assert_eq!(lda.operand_bytes, vec![0x00, 0x30]);
    assert_eq!(lda.size_bytes, 3);
    assert_eq!(lda.base_cycles, 4);
}
