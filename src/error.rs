//! Error taxonomy shared by every layer of the binding.

use std::fmt;

use crate::operand::OperandKind;
use crate::options::Mode;
use crate::Architecture;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error numbers reported by the engine (`cs_errno` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineErrorCode {
    Ok,
    Mem,
    Arch,
    Handle,
    Csh,
    Mode,
    Option,
    Detail,
    MemSetup,
    Version,
    Diet,
    SkipData,
    X86Att,
    X86Intel,
    X86Masm,
    /// A code this binding does not know about.
    Unknown(u32),
}

impl EngineErrorCode {
    /// Map a raw engine error number.
    pub fn from_raw(code: u32) -> Self {
        match code {
            0 => EngineErrorCode::Ok,
            1 => EngineErrorCode::Mem,
            2 => EngineErrorCode::Arch,
            3 => EngineErrorCode::Handle,
            4 => EngineErrorCode::Csh,
            5 => EngineErrorCode::Mode,
            6 => EngineErrorCode::Option,
            7 => EngineErrorCode::Detail,
            8 => EngineErrorCode::MemSetup,
            9 => EngineErrorCode::Version,
            10 => EngineErrorCode::Diet,
            11 => EngineErrorCode::SkipData,
            12 => EngineErrorCode::X86Att,
            13 => EngineErrorCode::X86Intel,
            14 => EngineErrorCode::X86Masm,
            other => EngineErrorCode::Unknown(other),
        }
    }

    /// The raw engine error number.
    pub fn raw(self) -> u32 {
        match self {
            EngineErrorCode::Ok => 0,
            EngineErrorCode::Mem => 1,
            EngineErrorCode::Arch => 2,
            EngineErrorCode::Handle => 3,
            EngineErrorCode::Csh => 4,
            EngineErrorCode::Mode => 5,
            EngineErrorCode::Option => 6,
            EngineErrorCode::Detail => 7,
            EngineErrorCode::MemSetup => 8,
            EngineErrorCode::Version => 9,
            EngineErrorCode::Diet => 10,
            EngineErrorCode::SkipData => 11,
            EngineErrorCode::X86Att => 12,
            EngineErrorCode::X86Intel => 13,
            EngineErrorCode::X86Masm => 14,
            EngineErrorCode::Unknown(other) => other,
        }
    }

    pub fn is_ok(self) -> bool {
        self == EngineErrorCode::Ok
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineErrorCode::Ok => write!(f, "CS_ERR_OK"),
            EngineErrorCode::Mem => write!(f, "CS_ERR_MEM"),
            EngineErrorCode::Arch => write!(f, "CS_ERR_ARCH"),
            EngineErrorCode::Handle => write!(f, "CS_ERR_HANDLE"),
            EngineErrorCode::Csh => write!(f, "CS_ERR_CSH"),
            EngineErrorCode::Mode => write!(f, "CS_ERR_MODE"),
            EngineErrorCode::Option => write!(f, "CS_ERR_OPTION"),
            EngineErrorCode::Detail => write!(f, "CS_ERR_DETAIL"),
            EngineErrorCode::MemSetup => write!(f, "CS_ERR_MEMSETUP"),
            EngineErrorCode::Version => write!(f, "CS_ERR_VERSION"),
            EngineErrorCode::Diet => write!(f, "CS_ERR_DIET"),
            EngineErrorCode::SkipData => write!(f, "CS_ERR_SKIPDATA"),
            EngineErrorCode::X86Att => write!(f, "CS_ERR_X86_ATT"),
            EngineErrorCode::X86Intel => write!(f, "CS_ERR_X86_INTEL"),
            EngineErrorCode::X86Masm => write!(f, "CS_ERR_X86_MASM"),
            EngineErrorCode::Unknown(code) => write!(f, "engine error {}", code),
        }
    }
}

/// Name tables the engine owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Register,
    Instruction,
    Group,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Register => write!(f, "register"),
            NameKind::Instruction => write!(f, "instruction"),
            NameKind::Group => write!(f, "group"),
        }
    }
}

/// Every failure the binding can report.
///
/// Everything except [`Error::AbiMismatch`] is recoverable at the call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The engine refused to open a session.
    #[error("failed to open {arch} engine (mode {mode}): {message} ({code})")]
    EngineOpen {
        arch: Architecture,
        mode: Mode,
        code: EngineErrorCode,
        message: String,
    },

    /// An engine call reported a failure through its error number.
    #[error("engine call `{call}` failed: {message} ({code})")]
    EngineCall {
        call: &'static str,
        code: EngineErrorCode,
        message: String,
    },

    /// A detail-only field was read from a record decoded without detail.
    #[error("`{field}` requires detail mode, which was off when this instruction was decoded")]
    DetailUnavailable { field: &'static str },

    /// A text or name field was requested from a diet engine build.
    #[error("`{field}` is not available from a diet engine build")]
    DietModeUnavailable { field: &'static str },

    /// An option value was rejected, locally or by the engine.
    #[error("unsupported {option} value `{value}`")]
    UnsupportedOption { option: &'static str, value: String },

    /// The engine rejected the mode bits for this architecture.
    #[error("mode {mode} is not supported for {arch}")]
    UnsupportedMode { arch: Architecture, mode: Mode },

    /// Capability dispatch found the field on neither the generic nor the
    /// architecture view.
    #[error("unknown field `{field}` for {wrapper} ({arch})")]
    UnknownField {
        field: String,
        wrapper: &'static str,
        arch: Architecture,
    },

    /// An operand accessor asked for the wrong payload interpretation.
    #[error("operand {index} is {actual}, not {expected}")]
    TypeMismatch {
        index: usize,
        expected: OperandKind,
        actual: OperandKind,
    },

    /// The engine's ABI version differs from the layouts this crate mirrors.
    #[error(
        "engine ABI {}.{} does not match the expected {}.{}",
        found.0, found.1, expected.0, expected.1
    )]
    AbiMismatch { expected: (u32, u32), found: (u32, u32) },

    /// The engine has no name for this id.
    #[error("no {kind} name for id {id}")]
    NameUnavailable { kind: NameKind, id: u32 },

    /// A skip-data callback failed or panicked; the fallback skip was used.
    #[error("skip-data callback failed at offset {offset}: {message}")]
    SkipDataCallback { offset: usize, message: String },

    /// A fixed-capacity text field was not valid NUL-terminated UTF-8.
    #[error("`{field}` is not valid UTF-8 text")]
    MalformedText { field: &'static str },

    /// Session configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Only an ABI mismatch is fatal: continuing would misread every record.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::AbiMismatch { .. })
    }
}
