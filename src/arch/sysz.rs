//! SystemZ instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawSysz, RawSyszOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;
/// Access register; classified as a register operand.
pub const OP_ACREG: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyszMem {
    pub base: RegId,
    pub index: RegId,
    pub length: u64,
    pub disp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyszOperandValue {
    Register(RegId),
    AccessRegister(RegId),
    Immediate(i64),
    Memory(SyszMem),
    Invalid(u32),
}

#[derive(Clone, Copy)]
pub struct SyszOperand<'a> {
    raw: &'a RawSyszOp,
    index: usize,
}

impl SyszOperand<'_> {
    pub fn typed_value(&self) -> SyszOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => SyszOperandValue::Register(RegId(raw.value.reg as u16)),
                OP_ACREG => SyszOperandValue::AccessRegister(RegId(raw.value.reg as u16)),
                OP_IMM => SyszOperandValue::Immediate(raw.value.imm),
                OP_MEM => {
                    let mem = raw.value.mem;
                    SyszOperandValue::Memory(SyszMem {
                        base: RegId(mem.base.into()),
                        index: RegId(mem.index.into()),
                        length: mem.length,
                        disp: mem.disp,
                    })
                }
                other => SyszOperandValue::Invalid(other),
            }
        }
    }

    pub fn is_access_register(&self) -> bool {
        self.raw.op_type == OP_ACREG
    }
}

impl Operand for SyszOperand<'_> {
    fn index(&self) -> usize {
        self.index
    }

    fn type_tag(&self) -> u32 {
        self.raw.op_type
    }

    fn kind(&self) -> OperandKind {
        match self.raw.op_type {
            OP_REG | OP_ACREG => OperandKind::Register,
            OP_IMM => OperandKind::Immediate,
            OP_MEM => OperandKind::Memory,
            _ => OperandKind::Invalid,
        }
    }

    fn value(&self) -> OperandValue {
        match self.typed_value() {
            SyszOperandValue::Register(r) | SyszOperandValue::AccessRegister(r) => {
                OperandValue::Register(r)
            }
            SyszOperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            SyszOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                index: mem.index,
                scale: 1,
                disp: mem.disp,
                segment: RegId::INVALID,
            }),
            SyszOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for SyszOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyszOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["cc", "op_count"];

#[derive(Clone, Copy)]
pub struct SyszDetail<'a> {
    raw: &'a RawSysz,
}

impl<'a> SyszDetail<'a> {
    pub(crate) fn new(raw: &'a RawSysz) -> Self {
        Self { raw }
    }

    pub fn cc(&self) -> u32 {
        self.raw.cc
    }

    fn valid(&self) -> &'a [RawSyszOp] {
        valid_prefix(Architecture::SysZ, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = SyszOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| SyszOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<SyszOperand<'a>> {
        self.valid().get(index).map(|raw| SyszOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "cc" => self.cc().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for SyszDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyszDetail")
            .field("cc", &self.cc())
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
