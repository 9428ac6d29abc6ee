//! Architecture-independent operand model.
//!
//! Every architecture's operand view implements [`Operand`], which classifies
//! the engine's integer type tag into an [`OperandKind`] and exposes the one
//! payload interpretation that tag selects. Asking for any other
//! interpretation is a [`Error::TypeMismatch`], never a reinterpretation of
//! union bits.

use std::fmt;

use crate::error::{Error, Result};
use crate::registers::RegId;

/// Coarse operand classification shared by all architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Register,
    Immediate,
    FloatingPoint,
    Memory,
    /// An architecture-specific tag (ARM `setend`, ARM64 `pstate`, PPC `crx`, ...).
    ArchExtra,
    /// Unused slot, zero tag, or a tag this binding does not recognise.
    Invalid,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Register => write!(f, "register"),
            OperandKind::Immediate => write!(f, "immediate"),
            OperandKind::FloatingPoint => write!(f, "floating-point"),
            OperandKind::Memory => write!(f, "memory"),
            OperandKind::ArchExtra => write!(f, "architecture-specific"),
            OperandKind::Invalid => write!(f, "invalid"),
        }
    }
}

/// Memory operand payload, widened to the largest width any architecture uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemOperand {
    pub base: RegId,
    /// [`RegId::INVALID`] when there is no index register.
    pub index: RegId,
    pub scale: i32,
    pub disp: i64,
    /// x86 segment override; [`RegId::INVALID`] elsewhere.
    pub segment: RegId,
}

/// The active payload of an operand, as selected by its type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperandValue {
    Register(RegId),
    Immediate(i64),
    FloatingPoint(f64),
    Memory(MemOperand),
    /// Architecture-specific payload; the typed per-architecture view
    /// carries its meaning.
    ArchExtra { tag: u32, value: i64 },
    Invalid,
}

impl OperandValue {
    pub fn kind(&self) -> OperandKind {
        match self {
            OperandValue::Register(_) => OperandKind::Register,
            OperandValue::Immediate(_) => OperandKind::Immediate,
            OperandValue::FloatingPoint(_) => OperandKind::FloatingPoint,
            OperandValue::Memory(_) => OperandKind::Memory,
            OperandValue::ArchExtra { .. } => OperandKind::ArchExtra,
            OperandValue::Invalid => OperandKind::Invalid,
        }
    }
}

/// Shared interface of every architecture's operand view.
pub trait Operand {
    /// Position of this operand within its instruction.
    fn index(&self) -> usize;

    /// The raw engine type tag.
    fn type_tag(&self) -> u32;

    /// Classification of [`Operand::type_tag`].
    fn kind(&self) -> OperandKind;

    /// The payload selected by the type tag.
    fn value(&self) -> OperandValue;

    /// True iff the type tag is one this architecture defines.
    fn is_valid(&self) -> bool {
        self.kind() != OperandKind::Invalid
    }

    fn is_register(&self) -> bool {
        self.kind() == OperandKind::Register
    }

    fn is_immediate(&self) -> bool {
        self.kind() == OperandKind::Immediate
    }

    fn is_memory(&self) -> bool {
        self.kind() == OperandKind::Memory
    }

    fn is_floating_point(&self) -> bool {
        self.kind() == OperandKind::FloatingPoint
    }

    fn is_arch_extra(&self) -> bool {
        self.kind() == OperandKind::ArchExtra
    }

    fn as_register(&self) -> Result<RegId> {
        match self.value() {
            OperandValue::Register(reg) => Ok(reg),
            other => Err(self.mismatch(OperandKind::Register, other.kind())),
        }
    }

    fn as_immediate(&self) -> Result<i64> {
        match self.value() {
            OperandValue::Immediate(imm) => Ok(imm),
            other => Err(self.mismatch(OperandKind::Immediate, other.kind())),
        }
    }

    fn as_floating_point(&self) -> Result<f64> {
        match self.value() {
            OperandValue::FloatingPoint(fp) => Ok(fp),
            other => Err(self.mismatch(OperandKind::FloatingPoint, other.kind())),
        }
    }

    fn as_memory(&self) -> Result<MemOperand> {
        match self.value() {
            OperandValue::Memory(mem) => Ok(mem),
            other => Err(self.mismatch(OperandKind::Memory, other.kind())),
        }
    }

    #[doc(hidden)]
    fn mismatch(&self, expected: OperandKind, actual: OperandKind) -> Error {
        Error::TypeMismatch {
            index: self.index(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(OperandValue);

    impl Operand for Fixed {
        fn index(&self) -> usize {
            3
        }
        fn type_tag(&self) -> u32 {
            1
        }
        fn kind(&self) -> OperandKind {
            self.0.kind()
        }
        fn value(&self) -> OperandValue {
            self.0
        }
    }

    #[test]
    fn test_predicates_follow_kind() {
        let reg = Fixed(OperandValue::Register(RegId(12)));
        assert!(reg.is_register() && reg.is_valid());
        assert!(!reg.is_memory() && !reg.is_immediate() && !reg.is_floating_point());

        let invalid = Fixed(OperandValue::Invalid);
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_wrong_interpretation_is_type_mismatch() {
        let reg = Fixed(OperandValue::Register(RegId(12)));
        assert_eq!(reg.as_register().unwrap(), RegId(12));
        match reg.as_memory() {
            Err(Error::TypeMismatch { index, expected, actual }) => {
                assert_eq!(index, 3);
                assert_eq!(expected, OperandKind::Memory);
                assert_eq!(actual, OperandKind::Register);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
        assert!(reg.as_immediate().is_err());
        assert!(reg.as_floating_point().is_err());
    }

    #[test]
    fn test_memory_payload_is_a_record() {
        let mem = MemOperand { base: RegId(5), disp: -4, ..MemOperand::default() };
        let op = Fixed(OperandValue::Memory(mem));
        assert_eq!(op.as_memory().unwrap().disp, -4);
        assert!(op.as_memory().unwrap().index.is_invalid());
    }
}
