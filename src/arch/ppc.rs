//! PowerPC instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawPpc, RawPpcOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;
pub const OP_CRX: u32 = 64;

raw_enum! {
    /// Static branch prediction hint.
    PpcBh {
        Invalid = 0 => "invalid",
        Plus = 1 => "+",
        Minus = 2 => "-",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpcMem {
    pub base: RegId,
    pub disp: i32,
}

/// Condition register field operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpcCrx {
    pub scale: u32,
    pub reg: RegId,
    pub cond: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpcOperandValue {
    Register(RegId),
    Immediate(i64),
    Memory(PpcMem),
    Crx(PpcCrx),
    Invalid(u32),
}

#[derive(Clone, Copy)]
pub struct PpcOperand<'a> {
    raw: &'a RawPpcOp,
    index: usize,
}

impl PpcOperand<'_> {
    pub fn typed_value(&self) -> PpcOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => PpcOperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => PpcOperandValue::Immediate(raw.value.imm),
                OP_MEM => PpcOperandValue::Memory(PpcMem {
                    base: RegId(raw.value.mem.base as u16),
                    disp: raw.value.mem.disp,
                }),
                OP_CRX => {
                    let crx = raw.value.crx;
                    PpcOperandValue::Crx(PpcCrx {
                        scale: crx.scale,
                        reg: RegId(crx.reg as u16),
                        cond: crx.cond,
                    })
                }
                other => PpcOperandValue::Invalid(other),
            }
        }
    }

    pub fn is_crx(&self) -> bool {
        self.raw.op_type == OP_CRX
    }
}

impl Operand for PpcOperand<'_> {
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
            OP_CRX => OperandKind::ArchExtra,
            _ => OperandKind::Invalid,
        }
    }

    fn value(&self) -> OperandValue {
        match self.typed_value() {
            PpcOperandValue::Register(r) => OperandValue::Register(r),
            PpcOperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            PpcOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                disp: mem.disp.into(),
                scale: 1,
                ..MemOperand::default()
            }),
            PpcOperandValue::Crx(crx) => OperandValue::ArchExtra {
                tag: OP_CRX,
                value: crx.reg.0.into(),
            },
            PpcOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for PpcOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PpcOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["bc", "bh", "update_cr0", "op_count"];

#[derive(Clone, Copy)]
pub struct PpcDetail<'a> {
    raw: &'a RawPpc,
}

impl<'a> PpcDetail<'a> {
    pub(crate) fn new(raw: &'a RawPpc) -> Self {
        Self { raw }
    }

    /// Branch code (condition) for branch instructions.
    pub fn bc(&self) -> u32 {
        self.raw.bc
    }

    pub fn bh(&self) -> PpcBh {
        PpcBh::from_raw(self.raw.bh)
    }

    /// True for "dot" instructions that update CR0.
    pub fn update_cr0(&self) -> bool {
        self.raw.update_cr0 != 0
    }

    fn valid(&self) -> &'a [RawPpcOp] {
        valid_prefix(Architecture::Ppc, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = PpcOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| PpcOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<PpcOperand<'a>> {
        self.valid().get(index).map(|raw| PpcOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "bc" => self.bc().into(),
            "bh" => self.raw.bh.into(),
            "update_cr0" => self.update_cr0().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for PpcDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PpcDetail")
            .field("bc", &self.bc())
            .field("bh", &self.bh())
            .field("update_cr0", &self.update_cr0())
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
