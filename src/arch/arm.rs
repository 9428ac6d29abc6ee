//! ARM and Thumb instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawArm, RawArmOp};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;
pub const OP_FP: u32 = 4;
pub const OP_CIMM: u32 = 64;
pub const OP_PIMM: u32 = 65;
pub const OP_SETEND: u32 = 66;
pub const OP_SYSREG: u32 = 67;

raw_enum! {
    /// Condition code.
    ArmCc {
        Invalid = 0 => "invalid",
        Eq = 1 => "eq",
        Ne = 2 => "ne",
        Hs = 3 => "hs",
        Lo = 4 => "lo",
        Mi = 5 => "mi",
        Pl = 6 => "pl",
        Vs = 7 => "vs",
        Vc = 8 => "vc",
        Hi = 9 => "hi",
        Ls = 10 => "ls",
        Ge = 11 => "ge",
        Lt = 12 => "lt",
        Gt = 13 => "gt",
        Le = 14 => "le",
        Al = 15 => "al",
    }
}

raw_enum! {
    /// Operand shift type. The `*Reg` variants shift by a register.
    ArmShifter {
        Invalid = 0 => "invalid",
        Asr = 1 => "asr",
        Lsl = 2 => "lsl",
        Lsr = 3 => "lsr",
        Ror = 4 => "ror",
        Rrx = 5 => "rrx",
        AsrReg = 6 => "asr",
        LslReg = 7 => "lsl",
        LsrReg = 8 => "lsr",
        RorReg = 9 => "ror",
        RrxReg = 10 => "rrx",
    }
}

raw_enum! {
    /// Endianness operand of `setend`.
    ArmSetend {
        Invalid = 0 => "invalid",
        Be = 1 => "be",
        Le = 2 => "le",
    }
}

/// Shift applied to an operand: an immediate amount, or a register id for
/// the register-shift variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmShift {
    pub kind: ArmShifter,
    pub value: u32,
}

impl ArmShift {
    pub fn by_register(&self) -> bool {
        matches!(
            self.kind,
            ArmShifter::AsrReg
                | ArmShifter::LslReg
                | ArmShifter::LsrReg
                | ArmShifter::RorReg
                | ArmShifter::RrxReg
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmMem {
    pub base: RegId,
    pub index: RegId,
    /// 1, or -1 for a subtracted index.
    pub scale: i32,
    pub disp: i32,
    /// Left shift applied to the index register.
    pub lshift: i32,
}

/// ARM operand payload, selected by the type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArmOperandValue {
    Register(RegId),
    Immediate(i32),
    FloatingPoint(f64),
    Memory(ArmMem),
    /// Coprocessor register number (`c0`..`c15`).
    Cimm(i32),
    /// Coprocessor number (`p0`..`p15`).
    Pimm(i32),
    Setend(ArmSetend),
    SysReg(RegId),
    Invalid(u32),
}

/// One ARM operand.
#[derive(Clone, Copy)]
pub struct ArmOperand<'a> {
    raw: &'a RawArmOp,
    index: usize,
}

impl<'a> ArmOperand<'a> {
    pub fn typed_value(&self) -> ArmOperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => ArmOperandValue::Register(reg(raw.value.reg)),
                OP_IMM => ArmOperandValue::Immediate(raw.value.imm),
                OP_FP => ArmOperandValue::FloatingPoint(raw.value.fp),
                OP_MEM => {
                    let mem = raw.value.mem;
                    ArmOperandValue::Memory(ArmMem {
                        base: reg(mem.base),
                        index: reg(mem.index),
                        scale: mem.scale,
                        disp: mem.disp,
                        lshift: mem.lshift,
                    })
                }
                OP_CIMM => ArmOperandValue::Cimm(raw.value.imm),
                OP_PIMM => ArmOperandValue::Pimm(raw.value.imm),
                OP_SETEND => ArmOperandValue::Setend(ArmSetend::from_raw(raw.value.setend)),
                OP_SYSREG => ArmOperandValue::SysReg(reg(raw.value.reg)),
                other => ArmOperandValue::Invalid(other),
            }
        }
    }

    /// The shift applied to this operand, if any.
    pub fn shift(&self) -> Option<ArmShift> {
        match ArmShifter::from_raw(self.raw.shift.kind) {
            ArmShifter::Invalid => None,
            kind => Some(ArmShift {
                kind,
                value: self.raw.shift.value,
            }),
        }
    }

    /// Vector element index, for operands like `d0[1]`.
    pub fn vector_index(&self) -> Option<i32> {
        (self.raw.vector_index >= 0).then_some(self.raw.vector_index)
    }

    /// True if the register operand is subtracted (`[r0, -r1]`).
    pub fn subtracted(&self) -> bool {
        self.raw.subtracted != 0
    }

    /// Access mode bits (read 1, write 2).
    pub fn access(&self) -> u8 {
        self.raw.access
    }

    pub fn neon_lane(&self) -> Option<i8> {
        (self.raw.neon_lane >= 0).then_some(self.raw.neon_lane)
    }

    pub fn is_cimm(&self) -> bool {
        self.raw.op_type == OP_CIMM
    }

    pub fn is_pimm(&self) -> bool {
        self.raw.op_type == OP_PIMM
    }

    pub fn is_setend(&self) -> bool {
        self.raw.op_type == OP_SETEND
    }

    pub fn is_sysreg(&self) -> bool {
        self.raw.op_type == OP_SYSREG
    }
}

fn reg(id: u32) -> RegId {
    RegId(id as u16)
}

impl Operand for ArmOperand<'_> {
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
            OP_FP => OperandKind::FloatingPoint,
            OP_MEM => OperandKind::Memory,
            OP_CIMM | OP_PIMM | OP_SETEND | OP_SYSREG => OperandKind::ArchExtra,
            _ => OperandKind::Invalid,
        }
    }

    fn value(&self) -> OperandValue {
        let tag = self.raw.op_type;
        match self.typed_value() {
            ArmOperandValue::Register(r) => OperandValue::Register(r),
            ArmOperandValue::Immediate(imm) => OperandValue::Immediate(imm.into()),
            ArmOperandValue::FloatingPoint(fp) => OperandValue::FloatingPoint(fp),
            ArmOperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                index: mem.index,
                scale: mem.scale,
                disp: mem.disp.into(),
                segment: RegId::INVALID,
            }),
            ArmOperandValue::Cimm(v) | ArmOperandValue::Pimm(v) => OperandValue::ArchExtra {
                tag,
                value: v.into(),
            },
            ArmOperandValue::Setend(s) => OperandValue::ArchExtra {
                tag,
                value: s.raw().into(),
            },
            ArmOperandValue::SysReg(r) => OperandValue::ArchExtra {
                tag,
                value: r.0.into(),
            },
            ArmOperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for ArmOperand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArmOperand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .field("shift", &self.shift())
            .finish()
    }
}

/// Field names understood by [`ArmDetail::field`].
pub const FIELDS: &[&str] = &[
    "cc",
    "update_flags",
    "writeback",
    "usermode",
    "vector_size",
    "vector_data",
    "cps_mode",
    "cps_flag",
    "mem_barrier",
    "op_count",
];

/// ARM view of a detail block.
#[derive(Clone, Copy)]
pub struct ArmDetail<'a> {
    raw: &'a RawArm,
}

impl<'a> ArmDetail<'a> {
    pub(crate) fn new(raw: &'a RawArm) -> Self {
        Self { raw }
    }

    pub fn cc(&self) -> ArmCc {
        ArmCc::from_raw(self.raw.cc)
    }

    pub fn update_flags(&self) -> bool {
        self.raw.update_flags != 0
    }

    pub fn writeback(&self) -> bool {
        self.raw.writeback != 0
    }

    /// User-mode registers (LDM/STM with `^`).
    pub fn usermode(&self) -> bool {
        self.raw.usermode != 0
    }

    pub fn vector_size(&self) -> i32 {
        self.raw.vector_size
    }

    pub fn vector_data(&self) -> u32 {
        self.raw.vector_data
    }

    pub fn cps_mode(&self) -> u32 {
        self.raw.cps_mode
    }

    pub fn cps_flag(&self) -> u32 {
        self.raw.cps_flag
    }

    pub fn mem_barrier(&self) -> u32 {
        self.raw.mem_barrier
    }

    fn valid(&self) -> &'a [RawArmOp] {
        valid_prefix(Architecture::Arm, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = ArmOperand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| ArmOperand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<ArmOperand<'a>> {
        self.valid().get(index).map(|raw| ArmOperand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "cc" => self.raw.cc.into(),
            "update_flags" => self.update_flags().into(),
            "writeback" => self.writeback().into(),
            "usermode" => self.usermode().into(),
            "vector_size" => self.vector_size().into(),
            "vector_data" => self.vector_data().into(),
            "cps_mode" => self.cps_mode().into(),
            "cps_flag" => self.cps_flag().into(),
            "mem_barrier" => self.mem_barrier().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for ArmDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArmDetail")
            .field("cc", &self.cc())
            .field("update_flags", &self.update_flags())
            .field("writeback", &self.writeback())
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
