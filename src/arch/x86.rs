//! x86 and x86-64 instruction details.
//!
//! Besides operands, an x86 record carries the raw encoding pieces the
//! decoder saw (prefixes, opcode bytes, REX, ModRM, SIB) and the AVX/SSE
//! condition and rounding attributes.

use std::fmt;

use crate::arch::valid_prefix;
use crate::field::FieldValue;
use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
use crate::raw::{RawX86, RawX86Op};
use crate::registers::RegId;
use crate::Architecture;

pub const OP_REG: u32 = 1;
pub const OP_IMM: u32 = 2;
pub const OP_MEM: u32 = 3;

/// Operand access bits.
pub const ACCESS_READ: u8 = 1;
pub const ACCESS_WRITE: u8 = 2;

raw_enum! {
    /// AVX broadcast applied to a memory operand.
    X86AvxBcast {
        Invalid = 0 => "invalid",
        To2 = 1 => "{1to2}",
        To4 = 2 => "{1to4}",
        To8 = 3 => "{1to8}",
        To16 = 4 => "{1to16}",
    }
}

raw_enum! {
    /// AVX static rounding mode.
    X86AvxRm {
        Invalid = 0 => "invalid",
        Rn = 1 => "{rn-sae}",
        Rd = 2 => "{rd-sae}",
        Ru = 3 => "{ru-sae}",
        Rz = 4 => "{rz-sae}",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X86Mem {
    pub segment: RegId,
    pub base: RegId,
    pub index: RegId,
    pub scale: i32,
    pub disp: i64,
}

impl From<X86Mem> for MemOperand {
    fn from(mem: X86Mem) -> Self {
        MemOperand {
            base: mem.base,
            index: mem.index,
            scale: mem.scale,
            disp: mem.disp,
            segment: mem.segment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum X86OperandValue {
    Register(RegId),
    Immediate(i64),
    Memory(X86Mem),
    Invalid(u32),
}

/// Offsets and sizes of the encoded instruction pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X86Encoding {
    pub modrm_offset: u8,
    pub disp_offset: u8,
    pub disp_size: u8,
    pub imm_offset: u8,
    pub imm_size: u8,
}

#[derive(Clone, Copy)]
pub struct X86Operand<'a> {
    raw: &'a RawX86Op,
    index: usize,
}

impl X86Operand<'_> {
    pub fn typed_value(&self) -> X86OperandValue {
        let raw = self.raw;
        // SAFETY: each arm reads only the union member its tag selects.
        unsafe {
            match raw.op_type {
                OP_REG => X86OperandValue::Register(RegId(raw.value.reg as u16)),
                OP_IMM => X86OperandValue::Immediate(raw.value.imm),
                OP_MEM => {
                    let mem = raw.value.mem;
                    X86OperandValue::Memory(X86Mem {
                        segment: RegId(mem.segment as u16),
                        base: RegId(mem.base as u16),
                        index: RegId(mem.index as u16),
                        scale: mem.scale,
                        disp: mem.disp,
                    })
                }
                other => X86OperandValue::Invalid(other),
            }
        }
    }

    /// Operand size in bytes.
    pub fn size(&self) -> u8 {
        self.raw.size
    }

    pub fn access(&self) -> u8 {
        self.raw.access
    }

    pub fn is_read(&self) -> bool {
        self.raw.access & ACCESS_READ != 0
    }

    pub fn is_written(&self) -> bool {
        self.raw.access & ACCESS_WRITE != 0
    }

    pub fn avx_bcast(&self) -> Option<X86AvxBcast> {
        match X86AvxBcast::from_raw(self.raw.avx_bcast) {
            X86AvxBcast::Invalid => None,
            bcast => Some(bcast),
        }
    }

    pub fn avx_zero_opmask(&self) -> bool {
        self.raw.avx_zero_opmask != 0
    }
}

impl Operand for X86Operand<'_> {
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
            X86OperandValue::Register(r) => OperandValue::Register(r),
            X86OperandValue::Immediate(imm) => OperandValue::Immediate(imm),
            X86OperandValue::Memory(mem) => OperandValue::Memory(mem.into()),
            X86OperandValue::Invalid(_) => OperandValue::Invalid,
        }
    }
}

impl fmt::Debug for X86Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X86Operand")
            .field("index", &self.index)
            .field("value", &self.typed_value())
            .field("size", &self.size())
            .field("access", &self.access())
            .finish()
    }
}

pub const FIELDS: &[&str] = &[
    "prefix",
    "opcode",
    "rex",
    "addr_size",
    "modrm",
    "sib",
    "disp",
    "sib_index",
    "sib_scale",
    "sib_base",
    "xop_cc",
    "sse_cc",
    "avx_cc",
    "avx_sae",
    "avx_rm",
    "eflags",
    "op_count",
];

#[derive(Clone, Copy)]
pub struct X86Detail<'a> {
    raw: &'a RawX86,
}

impl<'a> X86Detail<'a> {
    pub(crate) fn new(raw: &'a RawX86) -> Self {
        Self { raw }
    }

    /// Up to four prefix bytes; 0 marks an absent slot.
    pub fn prefix(&self) -> [u8; 4] {
        self.raw.prefix
    }

    /// Opcode bytes, zero padded.
    pub fn opcode(&self) -> [u8; 4] {
        self.raw.opcode
    }

    pub fn rex(&self) -> u8 {
        self.raw.rex
    }

    /// Address size in bytes.
    pub fn addr_size(&self) -> u8 {
        self.raw.addr_size
    }

    pub fn modrm(&self) -> u8 {
        self.raw.modrm
    }

    pub fn sib(&self) -> u8 {
        self.raw.sib
    }

    pub fn disp(&self) -> i64 {
        self.raw.disp
    }

    pub fn sib_index(&self) -> RegId {
        RegId(self.raw.sib_index as u16)
    }

    pub fn sib_scale(&self) -> i8 {
        self.raw.sib_scale
    }

    pub fn sib_base(&self) -> RegId {
        RegId(self.raw.sib_base as u16)
    }

    pub fn xop_cc(&self) -> u32 {
        self.raw.xop_cc
    }

    pub fn sse_cc(&self) -> u32 {
        self.raw.sse_cc
    }

    pub fn avx_cc(&self) -> u32 {
        self.raw.avx_cc
    }

    /// Suppress-all-exceptions flag.
    pub fn avx_sae(&self) -> bool {
        self.raw.avx_sae != 0
    }

    pub fn avx_rm(&self) -> X86AvxRm {
        X86AvxRm::from_raw(self.raw.avx_rm)
    }

    /// EFLAGS (or FPU flags, for FPU instructions) touched by the instruction.
    pub fn eflags(&self) -> u64 {
        // SAFETY: both union members are plain u64 bit sets.
        unsafe { self.raw.flags.eflags }
    }

    pub fn encoding(&self) -> X86Encoding {
        let enc = self.raw.encoding;
        X86Encoding {
            modrm_offset: enc.modrm_offset,
            disp_offset: enc.disp_offset,
            disp_size: enc.disp_size,
            imm_offset: enc.imm_offset,
            imm_size: enc.imm_size,
        }
    }

    fn valid(&self) -> &'a [RawX86Op] {
        valid_prefix(Architecture::X86, self.raw.op_count, &self.raw.operands, |op| op.op_type)
    }

    pub fn op_count(&self) -> usize {
        self.valid().len()
    }

    pub fn operands(&self) -> impl ExactSizeIterator<Item = X86Operand<'a>> + Clone + 'a {
        self.valid()
            .iter()
            .enumerate()
            .map(|(index, raw)| X86Operand { raw, index })
    }

    pub fn operand(&self, index: usize) -> Option<X86Operand<'a>> {
        self.valid().get(index).map(|raw| X86Operand { raw, index })
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "prefix" => FieldValue::Bytes(self.prefix().to_vec()),
            "opcode" => FieldValue::Bytes(self.opcode().to_vec()),
            "rex" => self.rex().into(),
            "addr_size" => self.addr_size().into(),
            "modrm" => self.modrm().into(),
            "sib" => self.sib().into(),
            "disp" => self.disp().into(),
            "sib_index" => self.raw.sib_index.into(),
            "sib_scale" => self.sib_scale().into(),
            "sib_base" => self.raw.sib_base.into(),
            "xop_cc" => self.xop_cc().into(),
            "sse_cc" => self.sse_cc().into(),
            "avx_cc" => self.avx_cc().into(),
            "avx_sae" => self.avx_sae().into(),
            "avx_rm" => self.raw.avx_rm.into(),
            "eflags" => self.eflags().into(),
            "op_count" => (self.op_count() as u64).into(),
            _ => return None,
        })
    }
}

impl fmt::Debug for X86Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X86Detail")
            .field("prefix", &self.prefix())
            .field("opcode", &self.opcode())
            .field("rex", &self.rex())
            .field("addr_size", &self.addr_size())
            .field("modrm", &self.modrm())
            .field("disp", &self.disp())
            .field("eflags", &format_args!("{:#x}", self.eflags()))
            .field("operands", &self.operands().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawDetail, RawX86Mem, RawX86OpValue};

    fn sample() -> RawDetail {
        // mov dword ptr [rbp - 4], 1
        let mut detail = RawDetail::zeroed();
        let x86 = unsafe { &mut detail.arch.x86 };
        x86.opcode = [0xc7, 0, 0, 0];
        x86.addr_size = 8;
        x86.modrm = 0x45;
        x86.disp = -4;
        x86.operands[0].op_type = OP_MEM;
        x86.operands[0].value = RawX86OpValue {
            mem: RawX86Mem { segment: 0, base: 36, index: 0, scale: 1, disp: -4 },
        };
        x86.operands[0].size = 4;
        x86.operands[0].access = ACCESS_WRITE;
        x86.operands[1].op_type = OP_IMM;
        x86.operands[1].value = RawX86OpValue { imm: 1 };
        x86.operands[1].size = 4;
        x86.operands[1].access = ACCESS_READ;
        x86.op_count = 2;
        detail
    }

    #[test]
    fn test_memory_and_immediate() {
        let detail = sample();
        let view = X86Detail::new(unsafe { &detail.arch.x86 });
        assert_eq!(view.op_count(), 2);

        let dst = view.operand(0).unwrap();
        let mem = dst.as_memory().unwrap();
        assert_eq!(mem.base, RegId(36));
        assert_eq!(mem.disp, -4);
        assert!(mem.segment.is_invalid());
        assert!(dst.is_written() && !dst.is_read());
        assert_eq!(dst.size(), 4);

        let src = view.operand(1).unwrap();
        assert_eq!(src.as_immediate().unwrap(), 1);
        assert!(src.as_register().is_err());
    }

    #[test]
    fn test_encoding_fields() {
        let detail = sample();
        let view = X86Detail::new(unsafe { &detail.arch.x86 });
        assert_eq!(view.field("opcode"), Some(FieldValue::Bytes(vec![0xc7, 0, 0, 0])));
        assert_eq!(view.field("modrm"), Some(FieldValue::Unsigned(0x45)));
        assert_eq!(view.field("disp"), Some(FieldValue::Signed(-4)));
        assert_eq!(view.field("addr_size").and_then(|v| v.as_unsigned()), Some(8));
        assert_eq!(view.avx_rm(), X86AvxRm::Invalid);
        assert!(view.field("cc").is_none());
    }

    #[test]
    fn test_avx_names_keep_braces() {
        assert_eq!(X86AvxBcast::To2.to_string(), "{1to2}");
        assert_eq!(X86AvxBcast::from_raw(4).to_string(), "{1to16}");
        assert_eq!(X86AvxRm::Rn.to_string(), "{rn-sae}");
        assert_eq!(X86AvxRm::from_raw(9).to_string(), "unknown(9)");
    }

    #[test]
    fn test_every_listed_field_resolves() {
        let detail = RawDetail::zeroed();
        let view = X86Detail::new(unsafe { &detail.arch.x86 });
        for name in FIELDS {
            assert!(view.field(name).is_some(), "{}", name);
        }
    }
}
