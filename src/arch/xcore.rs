//! XCore instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawXcore, RawXcoreOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XcoreMem {
    pub base: RegId,
    pub index: RegId,
    pub disp: i32,
    /// +1 for forward, -1 for backward addressing.
    pub direct: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XcoreOperandValue {
    Register(RegId),
    Immediate(i32),
    Memory(XcoreMem),
    Invalid(u32),
}

#[derive(Clone, Copy)]
pub struct XcoreOperand<'a> {
    raw: &'a RawXcoreOp,
    index: usize,
}

impl XcoreOperand<'_> {
    pub fn typed_value(&self) -> XcoreOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => XcoreOperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => XcoreOperandValue::Immediate(raw.value.imm),
                OP_MEM => {
                    let mem = raw.value.mem;
                    XcoreOperandValue::Memory(XcoreMem {
                        base: RegId(mem.base.into()),
                        index: RegId(mem.index.into()),
                        disp: mem.disp,
                        direct: mem.direct,
                    })
                }
                other => XcoreOperandValue::Invalid(other),
            }
        }
    }
}

impl Operand for XcoreOperand<'_> {
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
            XcoreOperandValue::Register(r) => OperandValue::Register(r),
            XcoreOperandValue::Immediate(imm) => OperandValue::Immediate(imm.into()),
            XcoreOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                index: mem.index,
                scale: mem.direct,
                disp: mem.disp.into(),
                segment: RegId::INVALID,
            }),
            XcoreOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for XcoreOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XcoreOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["op_count"];

#[derive(Clone, Copy)]
pub struct XcoreDetail<'a> {
    raw: &'a RawXcore,
}

impl<'a> XcoreDetail<'a> {
    pub(crate) fn new(raw: &'a RawXcore) -> Self {
        Self { raw }
    }

    fn valid(&self) -> &'a [RawXcoreOp] {
        valid_prefix(Architecture::XCore, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = XcoreOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| XcoreOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<XcoreOperand<'a>> {
        self.valid().get(index).map(|raw| XcoreOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "op_count" => Some((self.op_count() as u64).into()),
            _ => None,
        }
    }
}

impl fmt::Debug for XcoreDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XcoreDetail")
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawDetail, RawXcoreMem, RawXcoreOpValue};

    #[test]
    fn test_direct_memory_operand() {
        let mut detail = RawDetail::zeroed();
        let xcore = unsafe { &mut detail.arch.xcore };
        xcore.operands[0].op_type = OP_MEM;
        xcore.operands[0].value = RawXcoreOpValue {
            mem: RawXcoreMem { base: 5, index: 6, disp: 0, direct: -1 },
        };
        xcore.op_count = 1;

        let view = XcoreDetail::new(unsafe { &detail.arch.xcore });
        let op = view.operand(0).unwrap();
        assert_eq!(op.as_memory().unwrap().scale, -1);
        assert!(matches!(op.typed_value(), XcoreOperandValue::Memory(m) if m.direct == -1));
    }
}
