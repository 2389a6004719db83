use ls8_core::isa::opcodes;

/// Assembles LS-8 programs one instruction at a time.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the next byte to be emitted.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    /// Appends raw bytes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn nop(self) -> Self {
        self.raw(&[opcodes::NOP])
    }

    pub fn hlt(self) -> Self {
        self.raw(&[opcodes::HLT])
    }

    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.raw(&[opcodes::LDI, reg, imm])
    }

    pub fn ld(self, dst: u8, addr_reg: u8) -> Self {
        self.raw(&[opcodes::LD, dst, addr_reg])
    }

    pub fn st(self, addr_reg: u8, src: u8) -> Self {
        self.raw(&[opcodes::ST, addr_reg, src])
    }

    pub fn push(self, reg: u8) -> Self {
        self.raw(&[opcodes::PUSH, reg])
    }

    pub fn pop(self, reg: u8) -> Self {
        self.raw(&[opcodes::POP, reg])
    }

    pub fn prn(self, reg: u8) -> Self {
        self.raw(&[opcodes::PRN, reg])
    }

    pub fn pra(self, reg: u8) -> Self {
        self.raw(&[opcodes::PRA, reg])
    }

    /// Two-operand ALU instruction (`ADD`, `CMP`, ...).
    pub fn alu(self, op: u8, a: u8, b: u8) -> Self {
        self.raw(&[op, a, b])
    }

    /// One-operand ALU instruction (`INC`, `DEC`, `NOT`).
    pub fn alu1(self, op: u8, a: u8) -> Self {
        self.raw(&[op, a])
    }

    /// One-operand flow instruction (`CALL`, `JMP`, `JEQ`, `INT`, ...).
    pub fn flow(self, op: u8, reg: u8) -> Self {
        self.raw(&[op, reg])
    }

    pub fn ret(self) -> Self {
        self.raw(&[opcodes::RET])
    }

    pub fn iret(self) -> Self {
        self.raw(&[opcodes::IRET])
    }

    /// Pads with zero bytes up to `addr`.
    pub fn pad_to(mut self, addr: u8) -> Self {
        self.bytes.resize(usize::from(addr), 0);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the program in the text format accepted by the loader.
    pub fn to_text(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:08b}\n")).collect()
    }
}
