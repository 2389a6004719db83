//! # Stack and Memory Access Tests

use ls8_core::common::Fault;
use ls8_core::common::constants::INITIAL_SP;
use ls8_core::isa::opcodes::LDI;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_push_decrements_then_stores() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().push(0xAB).unwrap();
    assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP - 1);
    assert_eq!(ctx.mem(usize::from(INITIAL_SP - 1)), 0xAB);
}

#[test]
fn test_pop_loads_then_increments() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().push(1).unwrap();
    ctx.cpu_mut().push(2).unwrap();
    assert_eq!(ctx.cpu_mut().pop().unwrap(), 2);
    assert_eq!(ctx.cpu_mut().pop().unwrap(), 1);
    assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP);
}

#[test]
fn test_sp_wraps_below_zero() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().regs.set_sp(0);
    ctx.cpu_mut().push(0x5A).unwrap();
    assert_eq!(ctx.cpu().regs.sp(), 0xFF);
    assert_eq!(ctx.mem(0xFF), 0x5A);
    assert_eq!(ctx.cpu_mut().pop().unwrap(), 0x5A);
    assert_eq!(ctx.cpu().regs.sp(), 0);
}

#[test]
fn test_push_pop_instructions_roundtrip() {
    let program = ProgramBuilder::new()
        .ldi(0, 42)
        .push(0)
        .ldi(0, 0)
        .pop(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.reg(1), 42);
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP);
}

#[test]
fn test_operand_past_end_of_memory_faults() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().write_mem(0xFF, LDI).unwrap();
    ctx.cpu_mut().pc = 0xFF;
    assert!(matches!(
        ctx.cpu_mut().step(),
        Err(Fault::AddressOutOfRange(0x100))
    ));
    assert_eq!(ctx.cpu().pc, 0xFF);
}

#[test]
fn test_fetch_past_end_of_memory_faults() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pc = 0x100;
    assert!(matches!(
        ctx.cpu_mut().step(),
        Err(Fault::AddressOutOfRange(0x100))
    ));
}

proptest! {
    #[test]
    fn prop_push_then_pop_restores_sp_and_value(sp: u8, val: u8) {
        let mut ctx = TestContext::new();
        ctx.cpu_mut().regs.set_sp(sp);
        ctx.cpu_mut().push(val).unwrap();
        prop_assert_eq!(ctx.cpu_mut().pop().unwrap(), val);
        prop_assert_eq!(ctx.cpu().regs.sp(), sp);
    }

    #[test]
    fn prop_push_pop_same_register(val: u8, reg in 0u8..5) {
        let program = ProgramBuilder::new().ldi(reg, val).push(reg).pop(reg).hlt().build();
        let mut ctx = TestContext::new().load(&program);
        ctx.run_to_halt();
        prop_assert_eq!(ctx.reg(usize::from(reg)), val);
        prop_assert_eq!(ctx.cpu().regs.sp(), INITIAL_SP);
    }
}
