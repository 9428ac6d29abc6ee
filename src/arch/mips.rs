//! MIPS instruction details. MIPS records carry operands only, no flags.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawMips, RawMipsOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipsMem {
    pub base: RegId,
    pub disp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipsOperandValue {
    Register(RegId),
    Immediate(i64),
    Memory(MipsMem),
    Invalid(u32),
}

#[derive(Clone, Copy)]
pub struct MipsOperand<'a> {
    raw: &'a RawMipsOp,
    index: usize,
}

impl MipsOperand<'_> {
    pub fn typed_value(&self) -> MipsOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => MipsOperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => MipsOperandValue::Immediate(raw.value.imm),
                OP_MEM => MipsOperandValue::Memory(MipsMem {
                    base: RegId(raw.value.mem.base as u16),
                    disp: raw.value.mem.disp,
                }),
                other => MipsOperandValue::Invalid(other),
            }
        }
    }
}

impl Operand for MipsOperand<'_> {
    fn index(&self) -> usize {
        self.index
    }

    fn type_tag(&self) -> u32 {
        self.raw.op_type
    }

    fn kind(&self) -> OperandKind {
        match self.raw.op_type {
            OP_REG => OperandKind::Register,
            OP_IMM => OperandKind::Immediate,
            OP_MEM => OperandKind::Memory,
            _ => OperandKind::Invalid,
        }
    }

    fn value(&self) -> OperandValue {
        match self.typed_value() {
            MipsOperandValue::Register(r) => OperandValue::Register(r),
            MipsOperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            MipsOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                disp: mem.disp,
                scale: 1,
                ..MemOperand::default()
            }),
            MipsOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for MipsOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MipsOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["op_count"];

#[derive(Clone, Copy)]
pub struct MipsDetail<'a> {
    raw: &'a RawMips,
}

impl<'a> MipsDetail<'a> {
    pub(crate) fn new(raw: &'a RawMips) -> Self {
        Self { raw }
    }

    fn valid(&self) -> &'a [RawMipsOp] {
        valid_prefix(Architecture::Mips, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = MipsOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| MipsOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<MipsOperand<'a>> {
        self.valid().get(index).map(|raw| MipsOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "op_count" => Some((self.op_count() as u64).into()),
            _ => None,
        }
    }
}

impl fmt::Debug for MipsDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MipsDetail")
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
