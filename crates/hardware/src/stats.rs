//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics for the LS-8 emulator. It provides:
//! 1. **Throughput:** Total cycles, retired instructions, and host-side speed.
//! 2. **Instruction mix:** Counts by routing category (ALU, branch, flow).
//! 3. **Events:** Interrupts serviced and key presses received.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::isa::Operation;

/// Simulation statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed (one per `step`).
    pub cycles: u64,
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of non-ALU instructions that leave PC to the CPU (`LDI`, `PRN`, ...).
    pub inst_branch: u64,
    /// Count of instructions that set PC themselves (`CALL`, `JMP`, ...).
    pub inst_flow: u64,

    /// Number of interrupt handlers entered.
    pub interrupts_serviced: u64,
    /// Number of key presses delivered to the machine.
    pub keys_received: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_branch: 0,
            inst_flow: 0,
            interrupts_serviced: 0,
            keys_received: 0,
        }
    }
}

impl SimStats {
    /// Restarts the host wall clock; called when a run begins.
    pub fn restart_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// Host time since the clock was last started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Counts one retired instruction under its category.
    pub const fn record_retired(&mut self, op: Operation) {
        self.instructions_retired += 1;
        match op {
            Operation::Alu(_) => self.inst_alu += 1,
            Operation::Branch(_) => self.inst_branch += 1,
            Operation::Flow(_) => self.inst_flow += 1,
        }
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let share = |n: u64| (n as f64 / total) * 100.0;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS-8 SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_freq                 {khz:.2} kHz");
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        let _ = writeln!(
            out,
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            share(self.inst_alu)
        );
        let _ = writeln!(
            out,
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            share(self.inst_branch)
        );
        let _ = writeln!(
            out,
            "  op.flow                {} ({:.2}%)",
            self.inst_flow,
            share(self.inst_flow)
        );
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "EVENTS");
        let _ = writeln!(out, "  interrupts.serviced    {}", self.interrupts_serviced);
        let _ = writeln!(out, "  keys.received          {}", self.keys_received);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the report to stderr, keeping stdout for program output.
    pub fn print(&self) {
        eprint!("{}", self.report());
    }
}
