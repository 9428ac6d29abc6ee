//! ARM64 (AArch64) instruction details.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawArm64, RawArm64Op};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;
pub const OP_FP: u32 = 4;
pub const OP_CIMM: u32 = 64;
pub const OP_REG_MRS: u32 = 65;
pub const OP_REG_MSR: u32 = 66;
pub const OP_PSTATE: u32 = 67;
pub const OP_SYS: u32 = 68;
pub const OP_PREFETCH: u32 = 69;
pub const OP_BARRIER: u32 = 70;

raw_enum! {
    /// Condition code.
    Arm64Cc {
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
        Nv = 16 => "nv",
    }
}

raw_enum! {
    Arm64Shifter {
        Invalid = 0 => "invalid",
        Lsl = 1 => "lsl",
        Msl = 2 => "msl",
        Lsr = 3 => "lsr",
        Asr = 4 => "asr",
        Ror = 5 => "ror",
    }
}

raw_enum! {
    /// Register extension applied to an operand.
    Arm64Extender {
        Invalid = 0 => "invalid",
        Uxtb = 1 => "uxtb",
        Uxth = 2 => "uxth",
        Uxtw = 3 => "uxtw",
        Uxtx = 4 => "uxtx",
        Sxtb = 5 => "sxtb",
        Sxth = 6 => "sxth",
        Sxtw = 7 => "sxtw",
        Sxtx = 8 => "sxtx",
    }
}

raw_enum! {
    /// Vector arrangement specifier.
    Arm64Vas {
        Invalid = 0 => "invalid",
        V16B = 1 => "16b",
        V8B = 2 => "8b",
        V4B = 3 => "4b",
        V1B = 4 => "1b",
        V8H = 5 => "8h",
        V4H = 6 => "4h",
        V2H = 7 => "2h",
        V1H = 8 => "1h",
        V4S = 9 => "4s",
        V2S = 10 => "2s",
        V1S = 11 => "1s",
        V2D = 12 => "2d",
        V1D = 13 => "1d",
        V1Q = 14 => "1q",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm64Mem {
    pub base: RegId,
    pub index: RegId,
    pub disp: i32,
}

/// ARM64 operand payload, selected by the type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arm64OperandValue {
    Register(RegId),
    Immediate(i64),
    FloatingPoint(f64),
    Memory(Arm64Mem),
    Cimm(i64),
    /// System register read by `mrs`.
    RegMrs(u32),
    /// System register written by `msr`.
    RegMsr(u32),
    Pstate(u32),
    /// Operand of `sys`-family instructions (`ic`, `dc`, `at`, `tlbi`).
    Sys(u32),
    Prefetch(u32),
    Barrier(u32),
    Invalid(u32),
}

/// One ARM64 operand.
#[derive(Clone, Copy)]
pub struct Arm64Operand<'a> {
    raw: &'a RawArm64Op,
    index: usize,
}

impl<'a> Arm64Operand<'a> {
    pub fn typed_value(&self) -> Arm64OperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => Arm64OperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => Arm64OperandValue::Immediate(raw.value.imm),
                OP_FP => Arm64OperandValue::FloatingPoint(raw.value.fp),
                OP_MEM => {
                    let mem = raw.value.mem;
                    Arm64OperandValue::Memory(Arm64Mem {
                        base: RegId(mem.base as u16),
                        index: RegId(mem.index as u16),
                        disp: mem.disp,
                    })
                }
                OP_CIMM => Arm64OperandValue::Cimm(raw.value.imm),
                OP_REG_MRS => Arm64OperandValue::RegMrs(raw.value.reg),
                OP_REG_MSR => Arm64OperandValue::RegMsr(raw.value.reg),
                OP_PSTATE => Arm64OperandValue::Pstate(raw.value.pstate),
                OP_SYS => Arm64OperandValue::Sys(raw.value.sys),
                OP_PREFETCH => Arm64OperandValue::Prefetch(raw.value.prefetch),
                OP_BARRIER => Arm64OperandValue::Barrier(raw.value.barrier),
                other => Arm64OperandValue::Invalid(other),
            }
        }
    }

    pub fn shift(&self) -> Option<(Arm64Shifter, u32)> {
        match Arm64Shifter::from_raw(self.raw.shift.kind) {
            Arm64Shifter::Invalid => None,
            kind => Some((kind, self.raw.shift.value)),
        }
    }

    pub fn ext(&self) -> Option<Arm64Extender> {
        match Arm64Extender::from_raw(self.raw.ext) {
            Arm64Extender::Invalid => None,
            ext => Some(ext),
        }
    }

    pub fn vas(&self) -> Option<Arm64Vas> {
        match Arm64Vas::from_raw(self.raw.vas) {
            Arm64Vas::Invalid => None,
            vas => Some(vas),
        }
    }

    pub fn vector_index(&self) -> Option<i32> {
        (self.raw.vector_index >= 0).then_some(self.raw.vector_index)
    }

    pub fn access(&self) -> u8 {
        self.raw.access
    }
}

impl Operand for Arm64Operand<'_> {
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
            OP_CIMM..=OP_BARRIER => OperandKind::ArchExtra,
            _ => OperandKind::Invalid,
        }
    }

    fn value(&self) -> OperandValue {
        let tag = self.raw.op_type;
        let extra = |value: i64| OperandValue::ArchExtra { tag, value };
        match self.typed_value() {
            Arm64OperandValue::Register(r) => OperandValue::Register(r),
            Arm64OperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            Arm64OperandValue::FloatingPoint(fp) => OperandValue::FloatingPoint(fp),
            Arm64OperandValue::Memory(mem) => OperandValue::Memory(MemOperand {
                base: mem.base,
                index: mem.index,
                scale: 1,
                disp: mem.disp.into(),
                segment: RegId::INVALID,
            }),
            Arm64OperandValue::Cimm(v) => extra(v),
            Arm64OperandValue::RegMrs(v)
            | Arm64OperandValue::RegMsr(v)
            | Arm64OperandValue::Pstate(v)
            | Arm64OperandValue::Sys(v)
            | Arm64OperandValue::Prefetch(v)
            | Arm64OperandValue::Barrier(v) => extra(v.into()),
            Arm64OperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for Arm64Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm64Operand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .field("shift", &self.shift())
            .field("ext", &self.ext())
            .field("vas", &self.vas())
            .finish()
    }
}

pub const FIELDS: &[&str] = &["cc", "update_flags", "writeback", "op_count"];

/// ARM64 view of a detail block.
#[derive(Clone, Copy)]
pub struct Arm64Detail<'a> {
    raw: &'a RawArm64,
}

impl<'a> Arm64Detail<'a> {
    pub(crate) fn new(raw: &'a RawArm64) -> Self {
        Self { raw }
    }

    pub fn cc(&self) -> Arm64Cc {
        Arm64Cc::from_raw(self.raw.cc)
    }

    pub fn update_flags(&self) -> bool {
        self.raw.update_flags != 0
    }

    pub fn writeback(&self) -> bool {
        self.raw.writeback != 0
    }

    fn valid(&self) -> &'a [RawArm64Op] {
        valid_prefix(Architecture::Arm64, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = Arm64Operand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| Arm64Operand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<Arm64Operand<'a>> {
        self.valid().get(index).map(|raw| Arm64Operand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "cc" => self.raw.cc.into(),
            "update_flags" => self.update_flags().into(),
            "writeback" => self.writeback().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for Arm64Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm64Detail")
            .field("cc", &self.cc())
            .field("update_flags", &self.update_flags())
            .field("writeback", &self.writeback())
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}
