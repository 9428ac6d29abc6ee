//! Per-architecture instruction views.
//!
//! The detail block's architecture union is exposed as the closed sum type
//! [`ArchDetail`]; the variant is chosen once from the session architecture,
//! so no other union member is ever read. Each variant wraps a typed view
//! exposing only the fields that exist for that architecture, and its
//! operands are typed views implementing [`crate::Operand`].

/// Declares a Rust enum over an engine integer constant set, keeping unknown
/// values representable.
macro_rules! raw_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
            Unknown(u32),
        }

        impl $name {
            pub fn from_raw(raw: u32) -> Self {
                match raw {
                    $($value => $name::$variant,)*
                    other => $name::Unknown(other),
                }
            }

            pub fn raw(self) -> u32 {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown(other) => other,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($name::$variant => f.write_str($text),)*
                    $name::Unknown(other) => write!(f, "unknown({})", other),
                }
            }
        }
    };
}

pub mod arm;
pub mod arm64;
pub mod mips;
pub mod ppc;
pub mod sparc;
pub mod sysz;
pub mod x86;
pub mod xcore;

use crate::field::FieldValue;
use crate::operand::{Operand, OperandKind, OperandValue};
use crate::raw::RawArchDetail;
use crate::Architecture;

pub use self::arm::{ArmDetail, ArmOperand};
pub use self::arm64::{Arm64Detail, Arm64Operand};
pub use self::mips::{MipsDetail, MipsOperand};
pub use self::ppc::{PpcDetail, PpcOperand};
pub use self::sparc::{SparcDetail, SparcOperand};
pub use self::sysz::{SyszDetail, SyszOperand};
pub use self::x86::{X86Detail, X86Operand};
pub use self::xcore::{XcoreDetail, XcoreOperand};

/// Tag every architecture uses for an unused operand slot.
pub const OP_INVALID: u32 = 0;

/// The operands an architecture record actually holds.
///
/// `op_count` is authoritative. It is clamped to the array capacity if the
/// engine ever reports more, and an invalid tag inside the counted prefix is
/// only logged, never used to cut the sequence short.
pub(crate) fn valid_prefix<'a, T>(
    arch: Architecture,
    op_count: u8,
    operands: &'a [T],
    tag: impl Fn(&T) -> u32,
) -> &'a [T] {
    let count = usize::from(op_count);
    let count = if count > operands.len() {
        log::warn!(
            "{} op_count {} exceeds operand capacity {}, clamping",
            arch,
            count,
            operands.len()
        );
        operands.len()
    } else {
        count
    };
    let prefix = &operands[..count];
    if let Some(slot) = prefix.iter().position(|op| tag(op) == OP_INVALID) {
        log::debug!(
            "{} operand {} carries the invalid tag inside op_count {}",
            arch,
            slot,
            count
        );
    }
    prefix
}

/// The architecture-specific part of a detailed instruction.
#[derive(Clone, Copy)]
pub enum ArchDetail<'a> {
    Arm(ArmDetail<'a>),
    Arm64(Arm64Detail<'a>),
    Mips(MipsDetail<'a>),
    X86(X86Detail<'a>),
    Ppc(PpcDetail<'a>),
    Sparc(SparcDetail<'a>),
    SysZ(SyszDetail<'a>),
    XCore(XcoreDetail<'a>),
}

macro_rules! each_arch {
    ($self:expr, $view:ident => $body:expr) => {
        match $self {
            ArchDetail::Arm($view) => $body,
            ArchDetail::Arm64($view) => $body,
            ArchDetail::Mips($view) => $body,
            ArchDetail::X86($view) => $body,
            ArchDetail::Ppc($view) => $body,
            ArchDetail::Sparc($view) => $body,
            ArchDetail::SysZ($view) => $body,
            ArchDetail::XCore($view) => $body,
        }
    };
}

impl<'a> ArchDetail<'a> {
    /// View the union member for `arch`.
    ///
    /// # Safety
    ///
    /// `raw` must come from a record decoded by a session opened for `arch`,
    /// so that the `arch` member is the one the engine wrote.
    pub(crate) unsafe fn new(arch: Architecture, raw: &'a RawArchDetail) -> Self {
        // SAFETY: the caller guarantees the member matching `arch` is active.
        unsafe {
            match arch {
                Architecture::Arm => ArchDetail::Arm(ArmDetail::new(&raw.arm)),
                Architecture::Arm64 => ArchDetail::Arm64(Arm64Detail::new(&raw.arm64)),
                Architecture::Mips => ArchDetail::Mips(MipsDetail::new(&raw.mips)),
                Architecture::X86 => ArchDetail::X86(X86Detail::new(&raw.x86)),
                Architecture::Ppc => ArchDetail::Ppc(PpcDetail::new(&raw.ppc)),
                Architecture::Sparc => ArchDetail::Sparc(SparcDetail::new(&raw.sparc)),
                Architecture::SysZ => ArchDetail::SysZ(SyszDetail::new(&raw.sysz)),
                Architecture::XCore => ArchDetail::XCore(XcoreDetail::new(&raw.xcore)),
            }
        }
    }

    pub fn arch(&self) -> Architecture {
        match self {
            ArchDetail::Arm(_) => Architecture::Arm,
            ArchDetail::Arm64(_) => Architecture::Arm64,
            ArchDetail::Mips(_) => Architecture::Mips,
            ArchDetail::X86(_) => Architecture::X86,
            ArchDetail::Ppc(_) => Architecture::Ppc,
            ArchDetail::Sparc(_) => Architecture::Sparc,
            ArchDetail::SysZ(_) => Architecture::SysZ,
            ArchDetail::XCore(_) => Architecture::XCore,
        }
    }

    /// Number of valid operands.
    pub fn operand_count(&self) -> usize {
        each_arch!(self, view => view.op_count())
    }

    /// The valid operands, in order, as architecture-tagged views.
    pub fn operands(&self) -> Vec<ArchOperand<'a>> {
        match self {
            ArchDetail::Arm(d) => d.operands().map(ArchOperand::Arm).collect(),
            ArchDetail::Arm64(d) => d.operands().map(ArchOperand::Arm64).collect(),
            ArchDetail::Mips(d) => d.operands().map(ArchOperand::Mips).collect(),
            ArchDetail::X86(d) => d.operands().map(ArchOperand::X86).collect(),
            ArchDetail::Ppc(d) => d.operands().map(ArchOperand::Ppc).collect(),
            ArchDetail::Sparc(d) => d.operands().map(ArchOperand::Sparc).collect(),
            ArchDetail::SysZ(d) => d.operands().map(ArchOperand::SysZ).collect(),
            ArchDetail::XCore(d) => d.operands().map(ArchOperand::XCore).collect(),
        }
    }

    /// Number of valid operands of the given kind.
    pub fn operand_count_of(&self, kind: OperandKind) -> usize {
        self.operands().iter().filter(|op| op.kind() == kind).count()
    }

    /// Number of valid operands whose raw engine type tag is `tag`, e.g.
    /// [`arm::OP_CIMM`] where [`OperandKind::ArchExtra`] would lump several
    /// tags together.
    pub fn operand_count_tagged(&self, tag: u32) -> usize {
        self.operands().iter().filter(|op| op.type_tag() == tag).count()
    }

    /// Look up an architecture field by name.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        each_arch!(self, view => view.field(name))
    }

    /// Names accepted by [`ArchDetail::field`] for this architecture.
    pub fn field_names(&self) -> &'static [&'static str] {
        field_names(self.arch())
    }

    pub fn as_arm(&self) -> Option<ArmDetail<'a>> {
        match self {
            ArchDetail::Arm(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_arm64(&self) -> Option<Arm64Detail<'a>> {
        match self {
            ArchDetail::Arm64(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_mips(&self) -> Option<MipsDetail<'a>> {
        match self {
            ArchDetail::Mips(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_x86(&self) -> Option<X86Detail<'a>> {
        match self {
            ArchDetail::X86(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_ppc(&self) -> Option<PpcDetail<'a>> {
        match self {
            ArchDetail::Ppc(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_sparc(&self) -> Option<SparcDetail<'a>> {
        match self {
            ArchDetail::Sparc(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_sysz(&self) -> Option<SyszDetail<'a>> {
        match self {
            ArchDetail::SysZ(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_xcore(&self) -> Option<XcoreDetail<'a>> {
        match self {
            ArchDetail::XCore(d) => Some(*d),
            _ => None,
        }
    }
}

/// Field names of an architecture view, without needing a record.
pub fn field_names(arch: Architecture) -> &'static [&'static str] {
    match arch {
        Architecture::Arm => arm::FIELDS,
        Architecture::Arm64 => arm64::FIELDS,
        Architecture::Mips => mips::FIELDS,
        Architecture::X86 => x86::FIELDS,
        Architecture::Ppc => ppc::FIELDS,
        Architecture::Sparc => sparc::FIELDS,
        Architecture::SysZ => sysz::FIELDS,
        Architecture::XCore => xcore::FIELDS,
    }
}

/// One operand of any architecture.
#[derive(Clone, Copy)]
pub enum ArchOperand<'a> {
    Arm(ArmOperand<'a>),
    Arm64(Arm64Operand<'a>),
    Mips(MipsOperand<'a>),
    X86(X86Operand<'a>),
    Ppc(PpcOperand<'a>),
    Sparc(SparcOperand<'a>),
    SysZ(SyszOperand<'a>),
    XCore(XcoreOperand<'a>),
}

macro_rules! each_operand {
    ($self:expr, $op:ident => $body:expr) => {
        match $self {
            ArchOperand::Arm($op) => $body,
            ArchOperand::Arm64($op) => $body,
            ArchOperand::Mips($op) => $body,
            ArchOperand::X86($op) => $body,
            ArchOperand::Ppc($op) => $body,
            ArchOperand::Sparc($op) => $body,
            ArchOperand::SysZ($op) => $body,
            ArchOperand::XCore($op) => $body,
        }
    };
}

impl Operand for ArchOperand<'_> {
    fn index(&self) -> usize {
        each_operand!(self, op => op.index())
    }

    fn type_tag(&self) -> u32 {
        each_operand!(self, op => op.type_tag())
    }

    fn kind(&self) -> OperandKind {
        each_operand!(self, op => op.kind())
    }

    fn value(&self) -> OperandValue {
        each_operand!(self, op => op.value())
    }
}

impl std::fmt::Debug for ArchOperand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        each_operand!(self, op => std::fmt::Debug::fmt(op, f))
    }
}

impl std::fmt::Debug for ArchDetail<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        each_arch!(self, view => std::fmt::Debug::fmt(view, f))
    }
}
