//! # Control Unit Tests
//!
//! Subroutine calls, conditional jumps, software interrupts, memory
//! instructions, and console output.

use ls8_core::common::constants::INITIAL_SP;
use ls8_core::common::{Fault, SimError};
use ls8_core::isa::opcodes::*;
use ls8_core::soc::devices::Console;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use crate::common::mocks::console::BrokenPipe;

#[test]
fn test_call_ret_resumes_after_call() {
    let program = ProgramBuilder::new()
        .ldi(1, 10)
        .flow(CALL, 1) // 3
        .prn(0) // 5
        .hlt() // 7
        .pad_to(10)
        .ldi(0, 99)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);

    ctx.step(2);
    assert_eq!(ctx.cpu().pc, 10);
    assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP - 1);
    assert_eq!(ctx.mem(usize::from(INITIAL_SP - 1)), 5);

    ctx.step(2);
    assert_eq!(ctx.cpu().pc, 5);
    assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP);

    ctx.run_to_halt();
    assert_eq!(ctx.output(), "99\n");
}

#[test]
fn test_jmp_sets_pc() {
    let program = ProgramBuilder::new().ldi(0, 0x40).flow(JMP, 0).build();
    let mut ctx = TestContext::new().load(&program);
    ctx.step(2);
    assert_eq!(ctx.cpu().pc, 0x40);
}

/// Compares `a` with `b`, then jumps with `op`. R3 ends as 2 if the jump
/// was taken and 1 if it fell through.
fn conditional_jump(op: u8, a: u8, b: u8) -> TestContext {
    let program = ProgramBuilder::new()
        .ldi(0, a)
        .ldi(1, b)
        .alu(CMP, 0, 1)
        .ldi(2, 18)
        .flow(op, 2) // 12
        .ldi(3, 1) // 14
        .hlt() // 17
        .ldi(3, 2) // 18
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    ctx
}

#[rstest]
#[case(JEQ, 5, 5, true)]
#[case(JEQ, 5, 6, false)]
#[case(JNE, 5, 6, true)]
#[case(JNE, 5, 5, false)]
#[case(JGT, 6, 5, true)]
#[case(JGT, 5, 5, false)]
#[case(JLT, 4, 5, true)]
#[case(JLT, 5, 5, false)]
#[case(JLE, 5, 5, true)]
#[case(JLE, 4, 5, true)]
#[case(JLE, 6, 5, false)]
#[case(JGE, 5, 5, true)]
#[case(JGE, 6, 5, true)]
#[case(JGE, 4, 5, false)]
fn test_conditional_jumps(#[case] op: u8, #[case] a: u8, #[case] b: u8, #[case] taken: bool) {
    let ctx = conditional_jump(op, a, b);
    assert_eq!(ctx.reg(3), if taken { 2 } else { 1 });
}

#[test]
fn test_jump_without_compare_falls_through() {
    let program = ProgramBuilder::new().ldi(0, 0x80).flow(JEQ, 0).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.cpu().pc, 6);
}

#[test]
fn test_int_raises_status_bit() {
    let program = ProgramBuilder::new().ldi(0, 3).flow(INT, 0).build();
    let mut ctx = TestContext::new().load(&program);
    ctx.step(2);
    assert_eq!(ctx.cpu().regs.is(), 0b100);
    assert_eq!(ctx.cpu().pc, 5);
}

#[rstest]
#[case(0)]
#[case(9)]
#[case(255)]
fn test_int_rejects_invalid_line(#[case] line: u8) {
    let program = ProgramBuilder::new().ldi(0, line).flow(INT, 0).build();
    let mut ctx = TestContext::new().load(&program);
    let err = ctx.run().unwrap_err();
    match err {
        SimError::Fault { pc, fault } => {
            assert_eq!(pc, 3);
            assert!(matches!(fault, Fault::InvalidInterruptLine(v) if v == line));
        }
    }
}

#[test]
fn test_ld_and_st() {
    let program = ProgramBuilder::new()
        .ldi(0, 0x80)
        .ldi(1, 0x7E)
        .st(0, 1)
        .ld(2, 0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.mem(0x80), 0x7E);
    assert_eq!(ctx.reg(2), 0x7E);
}

#[test]
fn test_prn_and_pra_output() {
    let program = ProgramBuilder::new()
        .ldi(0, 255)
        .prn(0)
        .ldi(1, b'h')
        .pra(1)
        .ldi(1, b'i')
        .pra(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.output(), "255\nhi");
}

#[test]
fn test_register_operand_out_of_range_faults() {
    let program = ProgramBuilder::new().ldi(8, 1).build();
    let mut ctx = TestContext::new().load(&program);
    assert!(matches!(
        ctx.run(),
        Err(SimError::Fault {
            pc: 0,
            fault: Fault::RegisterOutOfRange(8)
        })
    ));
}

#[test]
fn test_division_by_zero_reports_pc() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 0)
        .alu(DIV, 0, 1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    assert!(matches!(
        ctx.run(),
        Err(SimError::Fault {
            pc: 6,
            fault: Fault::DivisionByZero
        })
    ));
    assert_eq!(ctx.reg(0), 1);
}

#[test]
fn test_unassigned_opcode_faults_at_its_address() {
    let program = ProgramBuilder::new().nop().raw(&[0x0F]).build();
    let mut ctx = TestContext::new().load(&program);
    assert!(matches!(
        ctx.run(),
        Err(SimError::Fault {
            pc: 1,
            fault: Fault::IllegalInstruction(0x0F)
        })
    ));
}

#[test]
fn test_console_failure_is_a_fault() {
    let mut ctx = TestContext::new().load(&ProgramBuilder::new().prn(0).hlt().build());
    ctx.cpu_mut().bus.console = Console::new(Box::new(BrokenPipe));
    assert!(matches!(
        ctx.run(),
        Err(SimError::Fault {
            fault: Fault::Console(_),
            ..
        })
    ));
}
