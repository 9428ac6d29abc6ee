//! SPARC instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawSparc, RawSparcOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;

/// Branch hint bits: annul, predict taken, predict not taken.
pub const HINT_A: u32 = 1;
pub const HINT_PT: u32 = 2;
pub const HINT_PN: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparcMem {
    pub base: RegId,
    pub index: RegId,
    pub disp: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparcOperandValue {
    Register(RegId),
    Immediate(i64),
    Memory(SparcMem),
    Invalid(u32),
}

#[derive(Clone, Copy)]
pub struct SparcOperand<'a> {
    raw: &'a RawSparcOp,
    index: usize,
}

impl SparcOperand<'_> {
    pub fn typed_value(&self) -> SparcOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => SparcOperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => SparcOperandValue::Immediate(raw.value.imm),
                OP_MEM => {
                    let mem = raw.value.mem;
                    SparcOperandValue::Memory(SparcMem {
                        base: RegId(mem.base.into()),
                        index: RegId(mem.index.into()),
                        disp: mem.disp,
                    })
                }
                other => SparcOperandValue::Invalid(other),
            }
        }
    }
}

impl Operand for SparcOperand<'_> {
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
            SparcOperandValue::Register(r) => OperandValue::Register(r),
            SparcOperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            SparcOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                index: mem.index,
                scale: 1,
                disp: mem.disp.into(),
                segment: RegId::INVALID,
            }),
            SparcOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for SparcOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparcOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["cc", "hint", "op_count"];

#[derive(Clone, Copy)]
pub struct SparcDetail<'a> {
    raw: &'a RawSparc,
}

impl<'a> SparcDetail<'a> {
    pub(crate) fn new(raw: &'a RawSparc) -> Self {
        Self { raw }
    }

    /// Raw condition code; integer and floating-point codes share the space.
    pub fn cc(&self) -> u32 {
        self.raw.cc
    }

    /// Branch hint, a bitwise OR of the `HINT_*` constants.
    pub fn hint(&self) -> u32 {
        self.raw.hint
    }

    pub fn annul(&self) -> bool {
        self.raw.hint & HINT_A != 0
    }

    fn valid(&self) -> &'a [RawSparcOp] {
        valid_prefix(Architecture::Sparc, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = SparcOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| SparcOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<SparcOperand<'a>> {
        self.valid().get(index).map(|raw| SparcOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "cc" => self.cc().into(),
            "hint" => self.hint().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for SparcDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparcDetail")
            .field("cc", &self.cc())
            .field("hint", &self.hint())
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
