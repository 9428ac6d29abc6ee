//! Safe, typed views over the instruction records produced by a native
//! disassembly engine.
//!
//! The engine (capstone) decodes machine code into one contiguous batch
//! buffer of fixed-layout instruction records. This library wraps that
//! buffer and its lifetime, interprets each record through a per-architecture
//! object model, and gates every field access on the three runtime switches
//! that decide what is actually present: the active architecture, whether
//! detail decoding was requested, and whether the engine build is diet.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use crabview::{Architecture, Disassembler, Mode, Operand};
//!
//! let code = [0x04, 0xe0, 0x2d, 0xe5]; // str lr, [sp, #-4]!
//!
//! let mut cs: Disassembler = Disassembler::open(Architecture::Arm, Mode::ARM).unwrap();
//! cs.set_detail(true).unwrap();
//!
//! // Scoped mode: the engine buffer never outlives this call.
//! cs.disasm_each(&code, 0x1000, |insn| {
//!     println!("0x{:x}: {} {}", insn.address(), insn.mnemonic()?, insn.op_str()?);
//!     if let Some(arm) = insn.arch_detail()?.as_arm() {
//!         for op in arm.operands() {
//!             println!("  op {}: {:?}", op.index(), op.kind());
//!         }
//!     }
//!     Ok(())
//! })
//! .unwrap();
//! ```

pub mod arch;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod instruction;
pub mod operand;
pub mod options;
pub mod raw;
pub mod registers;
pub mod session;

#[cfg(test)]
mod session_tests;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use crate::arch::{ArchDetail, ArchOperand};
pub use crate::batch::{Batch, SharedBatch};
pub use crate::config::SessionConfig;
pub use crate::engine::capstone::Capstone;
pub use crate::engine::{Capabilities, Engine, NameSource};
pub use crate::error::{EngineErrorCode, Error, Result};
pub use crate::field::FieldValue;
pub use crate::instruction::Insn;
pub use crate::operand::{MemOperand, Operand, OperandKind, OperandValue};
pub use crate::options::{Mode, SkipData, Syntax};
pub use crate::registers::{RegId, RegisterRef, RegisterTable};
pub use crate::session::{Disassembler, SKIPDATA_MNEMONIC};

/// Represents an address in memory
pub type Address = u64;

/// Engine ABI version (major, minor) the record layouts in [`raw`] mirror.
pub const ENGINE_ABI_VERSION: (u32, u32) = (5, 0);

/// Supported architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// ARM, including Thumb and Thumb-2
    Arm,
    /// ARM 64-bit (AArch64)
    Arm64,
    /// MIPS
    Mips,
    /// x86 in 16, 32 and 64-bit modes
    X86,
    /// PowerPC
    Ppc,
    /// SPARC
    Sparc,
    /// SystemZ
    #[value(name = "sysz")]
    SysZ,
    /// XCore
    #[value(name = "xcore")]
    XCore,
}

impl Architecture {
    /// Every architecture, in engine id order.
    pub const ALL: [Architecture; 8] = [
        Architecture::Arm,
        Architecture::Arm64,
        Architecture::Mips,
        Architecture::X86,
        Architecture::Ppc,
        Architecture::Sparc,
        Architecture::SysZ,
        Architecture::XCore,
    ];

    /// The engine's numeric architecture id.
    pub fn engine_id(self) -> u32 {
        match self {
            Architecture::Arm => 0,
            Architecture::Arm64 => 1,
            Architecture::Mips => 2,
            Architecture::X86 => 3,
            Architecture::Ppc => 4,
            Architecture::Sparc => 5,
            Architecture::SysZ => 6,
            Architecture::XCore => 7,
        }
    }

    /// Number of bytes skipped per undecodable chunk when skip-data is on
    /// and no callback (or a failing callback) decides otherwise.
    pub fn default_skip(self, mode: Mode) -> usize {
        match self {
            Architecture::Arm if mode.contains(Mode::THUMB) => 2,
            Architecture::Arm
            | Architecture::Arm64
            | Architecture::Mips
            | Architecture::Ppc
            | Architecture::Sparc => 4,
            Architecture::SysZ | Architecture::XCore => 2,
            Architecture::X86 => 1,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::Arm => write!(f, "ARM"),
            Architecture::Arm64 => write!(f, "ARM64"),
            Architecture::Mips => write!(f, "MIPS"),
            Architecture::X86 => write!(f, "x86"),
            Architecture::Ppc => write!(f, "PowerPC"),
            Architecture::Sparc => write!(f, "SPARC"),
            Architecture::SysZ => write!(f, "SystemZ"),
            Architecture::XCore => write!(f, "XCore"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_ids_are_dense() {
        for (i, arch) in Architecture::ALL.iter().enumerate() {
            assert_eq!(arch.engine_id() as usize, i);
        }
    }

    #[test]
    fn test_default_skip_follows_thumb_mode() {
        assert_eq!(Architecture::Arm.default_skip(Mode::ARM), 4);
        assert_eq!(Architecture::Arm.default_skip(Mode::THUMB), 2);
        assert_eq!(Architecture::X86.default_skip(Mode::MODE_64), 1);
        assert_eq!(Architecture::SysZ.default_skip(Mode::BIG_ENDIAN), 2);
    }

    #[test]
    fn test_architecture_parses_from_cli_names() {
        assert_eq!(Architecture::from_str("arm64", true).unwrap(), Architecture::Arm64);
        assert_eq!(Architecture::from_str("sysz", true).unwrap(), Architecture::SysZ);
        assert!(Architecture::from_str("riscv", true).is_err());
    }

    #[test]
    fn test_architecture_serde_names() {
        let arch: Architecture = serde_json::from_str("\"xcore\"").unwrap();
        assert_eq!(arch, Architecture::XCore);
        assert_eq!(serde_json::to_string(&Architecture::Ppc).unwrap(), "\"ppc\"");
    }
}
