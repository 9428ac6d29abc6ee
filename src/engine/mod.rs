//! The boundary with the native disassembly engine.
//!
//! [`Engine`] is the whole surface the rest of the crate consumes: open,
//! configure, disassemble into a batch buffer, release that buffer, name
//! lookups and error introspection. [`capstone::Capstone`] implements it over
//! the `capstone-sys` FFI.

pub mod capstone;
#[cfg(test)]
pub(crate) mod scripted;

use std::ffi::{c_char, c_void};

use crate::error::EngineErrorCode;
use crate::options::{Mode, Syntax};
use crate::raw::RawInsn;
use crate::Architecture;

/// Process-wide, read-only properties of an engine build.
///
/// Queried once per engine type and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Engine ABI version (major, minor).
    pub version: (u32, u32),
    /// True for reduced-footprint builds without name tables or text fields.
    pub diet: bool,
}

/// Engine-owned name tables, reachable only through an open session.
pub trait NameSource {
    fn reg_name(&self, id: u32) -> Option<&str>;
    fn insn_name(&self, id: u32) -> Option<&str>;
    fn group_name(&self, id: u32) -> Option<&str>;
}

/// Native skip-data hook signature.
pub type SkipDataFn = unsafe extern "C" fn(*const u8, usize, usize, *mut c_void) -> usize;

/// Raw skip-data setup handed to the engine. The engine copies the struct
/// but keeps the mnemonic and user-data pointers, which must stay valid
/// until skip-data is reconfigured or the session closes.
#[derive(Debug, Clone, Copy)]
pub struct SkipDataSetup {
    pub mnemonic: *const c_char,
    pub callback: Option<SkipDataFn>,
    pub user_data: *mut c_void,
}

/// One configure call.
#[derive(Debug, Clone, Copy)]
pub enum EngineOption {
    Syntax(Syntax),
    Detail(bool),
    SkipData(bool),
    SkipDataSetup(SkipDataSetup),
}

/// A native disassembly engine session.
pub trait Engine: NameSource + Sized {
    /// Version and diet flag of the linked engine build.
    fn capabilities() -> Capabilities;

    /// True if the engine build was compiled with `arch`.
    fn supports(arch: Architecture) -> bool;

    fn open(arch: Architecture, mode: Mode) -> Result<Self, EngineErrorCode>;

    fn set_option(&mut self, option: EngineOption) -> Result<(), EngineErrorCode>;

    /// Decode up to `count` instructions (0 means until the input runs out).
    ///
    /// Returns the batch buffer and the number of records in it. The buffer
    /// may be null when nothing was decoded.
    fn disasm(&self, code: &[u8], address: u64, count: usize) -> (*mut RawInsn, usize);

    /// Release a batch buffer returned by [`Engine::disasm`].
    ///
    /// # Safety
    ///
    /// `insns` and `count` must be exactly what one `disasm` call returned,
    /// and each buffer may be released only once.
    unsafe fn release(insns: *mut RawInsn, count: usize);

    /// Last error recorded on this session.
    fn errno(&self) -> EngineErrorCode;

    fn strerror(code: EngineErrorCode) -> String;

    /// Close the session, reporting the engine's verdict.
    fn close(self) -> Result<(), EngineErrorCode>;
}
