//! Engine sessions: open, configure, disassemble.

use std::cell::{Cell, RefCell};
use std::ffi::{c_void, CString};
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

use crate::batch::{Batch, NativeBuffer, SharedBatch};
use crate::config::SessionConfig;
use crate::engine::capstone::Capstone;
use crate::engine::{Capabilities, Engine, EngineOption, SkipDataSetup};
use crate::error::{EngineErrorCode, Error, NameKind, Result};
use crate::instruction::{Insn, InsnContext};
use crate::options::{Mode, SkipCallback, SkipData, Syntax};
use crate::registers::{RegId, RegisterRef, RegisterTable};
use crate::{Address, Architecture, ENGINE_ABI_VERSION};

/// Mnemonic the engine gives data records unless configured otherwise.
pub const SKIPDATA_MNEMONIC: &str = ".byte";

/// State shared with the skip-data trampoline while the engine runs.
///
/// Boxed by the session so its address stays fixed while the engine holds it
/// as user data.
struct SkipDataGuard {
    mnemonic: CString,
    callback: RefCell<Option<SkipCallback>>,
    fallback: usize,
    failure: RefCell<Option<(usize, String)>>,
    calls: Cell<usize>,
}

impl SkipDataGuard {
    fn on_data(&self, code: &[u8], offset: usize) -> usize {
        self.calls.set(self.calls.get() + 1);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut callback = self.callback.borrow_mut();
            match callback.as_mut() {
                Some(callback) => callback(code, offset),
                None => Ok(self.fallback),
            }
        }));
        let message = match outcome {
            Ok(Ok(skip)) => return skip,
            Ok(Err(err)) => {
                let message = format!("{:#}", err);
                log::warn!(
                    "skip-data callback failed at offset {}: {}; skipping {} bytes",
                    offset,
                    message,
                    self.fallback
                );
                message
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!(
                    "skip-data callback panicked at offset {}: {}; skipping {} bytes",
                    offset,
                    message,
                    self.fallback
                );
                message
            }
        };
        let mut failure = self.failure.borrow_mut();
        if failure.is_none() {
            *failure = Some((offset, message));
        }
        self.fallback
    }

    fn take_failure(&self) -> Option<Error> {
        self.failure
            .borrow_mut()
            .take()
            .map(|(offset, message)| Error::SkipDataCallback { offset, message })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "callback panicked".to_string()
    }
}

/// Called by the engine on undecodable bytes. Never unwinds.
unsafe extern "C" fn skipdata_trampoline(
    code: *const u8,
    code_size: usize,
    offset: usize,
    user_data: *mut c_void,
) -> usize {
    // SAFETY: `user_data` is the session's boxed guard, installed together
    // with this function and kept alive while the engine may call it.
    let guard = unsafe { &*(user_data as *const SkipDataGuard) };
    let code = if code.is_null() {
        &[][..]
    } else {
        // SAFETY: the engine passes back the input buffer of the running call.
        unsafe { std::slice::from_raw_parts(code, code_size) }
    };
    guard.on_data(code, offset)
}

/// An open engine session for one architecture and mode.
///
/// Sessions are `Send` but not `Sync`: the engine handle must not be used
/// from two threads at once. Disassembly calls block until the whole input
/// is decoded and cannot be cancelled.
///
/// Instructions borrow the session they were decoded with, so options
/// cannot change and the session cannot close while any of them is alive.
pub struct Disassembler<E: Engine = Capstone> {
    engine: E,
    arch: Architecture,
    mode: Mode,
    caps: Capabilities,
    detail: bool,
    syntax: Option<Syntax>,
    // Dropped after the engine, which may still hold a pointer to it.
    skipdata: Option<Box<SkipDataGuard>>,
    not_sync: PhantomData<Cell<()>>,
}

impl Disassembler<Capstone> {
    /// True if the linked engine was built with `arch`.
    pub fn supports(arch: Architecture) -> bool {
        Capstone::supports(arch)
    }
}

impl<E: Engine> Disassembler<E> {
    /// Open a session.
    ///
    /// Fails with [`Error::AbiMismatch`] if the engine's version differs from
    /// [`ENGINE_ABI_VERSION`]; that error is fatal, no session of this engine
    /// can ever be opened.
    pub fn open(arch: Architecture, mode: Mode) -> Result<Self> {
        let caps = E::capabilities();
        if caps.version != ENGINE_ABI_VERSION {
            log::error!(
                "engine ABI {}.{} does not match record layouts for {}.{}",
                caps.version.0,
                caps.version.1,
                ENGINE_ABI_VERSION.0,
                ENGINE_ABI_VERSION.1
            );
            return Err(Error::AbiMismatch {
                expected: ENGINE_ABI_VERSION,
                found: caps.version,
            });
        }

        let engine = E::open(arch, mode).map_err(|code| match code {
            EngineErrorCode::Mode => Error::UnsupportedMode { arch, mode },
            code => Error::EngineOpen {
                arch,
                mode,
                code,
                message: E::strerror(code),
            },
        })?;
        log::debug!(
            "opened {} session (mode {}, engine {}.{}{})",
            arch,
            mode,
            caps.version.0,
            caps.version.1,
            if caps.diet { ", diet" } else { "" }
        );

        Ok(Disassembler {
            engine,
            arch,
            mode,
            caps,
            detail: false,
            syntax: None,
            skipdata: None,
            not_sync: PhantomData,
        })
    }

    /// Open and configure a session from a [`SessionConfig`].
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let mut session = Self::open(config.arch, config.mode()?)?;
        if let Some(syntax) = config.syntax {
            session.set_syntax(syntax)?;
        }
        session.set_detail(config.detail)?;
        if let Some(skipdata) = &config.skipdata {
            let mut setup = SkipData::new();
            if let Some(mnemonic) = &skipdata.mnemonic {
                setup = setup.mnemonic(mnemonic.as_str());
            }
            session.set_skipdata(Some(setup))?;
        }
        Ok(session)
    }

    /// Close the session, reporting any engine error. Dropping the session
    /// closes it too, silently.
    pub fn close(self) -> Result<()> {
        let Disassembler {
            engine, skipdata, arch, ..
        } = self;
        let result = engine.close();
        drop(skipdata);
        log::debug!("closed {} session", arch);
        result.map_err(|code| Error::EngineCall {
            call: "cs_close",
            code,
            message: E::strerror(code),
        })
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Engine ABI version (major, minor).
    pub fn version(&self) -> (u32, u32) {
        self.caps.version
    }

    /// True if the engine build has no name tables or text fields.
    pub fn is_diet(&self) -> bool {
        self.caps.diet
    }

    pub fn detail(&self) -> bool {
        self.detail
    }

    pub fn syntax(&self) -> Option<Syntax> {
        self.syntax
    }

    /// Last error recorded by the engine on this session.
    pub fn errno(&self) -> EngineErrorCode {
        self.engine.errno()
    }

    pub fn set_syntax(&mut self, syntax: Syntax) -> Result<()> {
        self.engine
            .set_option(EngineOption::Syntax(syntax))
            .map_err(|code| match code {
                EngineErrorCode::Option | EngineErrorCode::X86Att | EngineErrorCode::X86Masm => {
                    Error::UnsupportedOption {
                        option: "syntax",
                        value: syntax.to_string(),
                    }
                }
                code => self.option_error(code),
            })?;
        log::debug!("{} syntax set to {}", self.arch, syntax);
        self.syntax = Some(syntax);
        Ok(())
    }

    /// Set the syntax from its name; unknown names are rejected without
    /// calling the engine.
    pub fn set_syntax_str(&mut self, syntax: &str) -> Result<()> {
        self.set_syntax(syntax.parse()?)
    }

    /// Turn detail decoding on or off for subsequent calls. Instructions
    /// already decoded keep whatever they were decoded with.
    pub fn set_detail(&mut self, enabled: bool) -> Result<()> {
        self.engine
            .set_option(EngineOption::Detail(enabled))
            .map_err(|code| self.option_error(code))?;
        log::debug!("{} detail {}", self.arch, if enabled { "on" } else { "off" });
        self.detail = enabled;
        Ok(())
    }

    /// Configure skip-data, or turn it off with `None`.
    pub fn set_skipdata(&mut self, skipdata: Option<SkipData>) -> Result<()> {
        let Some(SkipData { mnemonic, callback }) = skipdata else {
            self.engine
                .set_option(EngineOption::SkipData(false))
                .map_err(|code| self.option_error(code))?;
            log::debug!("{} skip-data off", self.arch);
            self.skipdata = None;
            return Ok(());
        };

        // The engine copies the mnemonic pointer as given and reads it for
        // every data record, so it is never null.
        let mnemonic = mnemonic.unwrap_or_else(|| SKIPDATA_MNEMONIC.to_string());
        let mnemonic = CString::new(mnemonic.as_str()).map_err(|_| Error::UnsupportedOption {
            option: "skipdata mnemonic",
            value: mnemonic.clone(),
        })?;
        let has_callback = callback.is_some();
        let guard = Box::new(SkipDataGuard {
            mnemonic,
            callback: RefCell::new(callback),
            fallback: self.arch.default_skip(self.mode),
            failure: RefCell::new(None),
            calls: Cell::new(0),
        });
        let setup = SkipDataSetup {
            mnemonic: guard.mnemonic.as_ptr(),
            callback: has_callback.then_some(skipdata_trampoline as crate::engine::SkipDataFn),
            user_data: &*guard as *const SkipDataGuard as *mut c_void,
        };

        self.engine
            .set_option(EngineOption::SkipDataSetup(setup))
            .map_err(|code| self.option_error(code))?;
        // The engine now points at the new guard; the old one can go.
        self.skipdata = Some(guard);
        self.engine
            .set_option(EngineOption::SkipData(true))
            .map_err(|code| self.option_error(code))?;
        log::debug!(
            "{} skip-data on (callback: {}, fallback skip {})",
            self.arch,
            has_callback,
            self.arch.default_skip(self.mode)
        );
        Ok(())
    }

    /// Number of times the skip-data callback has been consulted.
    pub fn skipdata_calls(&self) -> usize {
        self.skipdata.as_ref().map_or(0, |guard| guard.calls.get())
    }

    fn option_error(&self, code: EngineErrorCode) -> Error {
        Error::EngineCall {
            call: "cs_option",
            code,
            message: E::strerror(code),
        }
    }

    fn require_names(&self, field: &'static str) -> Result<()> {
        if self.caps.diet {
            return Err(Error::DietModeUnavailable { field });
        }
        Ok(())
    }

    pub fn reg_name(&self, id: u32) -> Result<&str> {
        self.require_names("reg_name")?;
        self.engine
            .reg_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Register, id })
    }

    pub fn insn_name(&self, id: u32) -> Result<&str> {
        self.require_names("insn_name")?;
        self.engine
            .insn_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Instruction, id })
    }

    pub fn group_name(&self, id: u32) -> Result<&str> {
        self.require_names("group_name")?;
        self.engine
            .group_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Group, id })
    }

    /// Resolve a register name or id through this architecture's table.
    /// Unknown registers resolve to [`RegId::INVALID`].
    pub fn register<'r>(&self, reg: impl Into<RegisterRef<'r>>) -> RegId {
        RegisterTable::for_arch(self.arch).resolve(reg)
    }

    fn context(&self) -> InsnContext<'_> {
        InsnContext {
            arch: self.arch,
            mode: self.mode,
            diet: self.caps.diet,
            names: &self.engine,
        }
    }

    /// One engine call. Empty input never reaches the engine.
    fn decode(&self, code: &[u8], address: Address, count: usize) -> Result<Option<NativeBuffer>> {
        if code.is_empty() {
            log::trace!("empty input at {:#x}, skipping engine call", address);
            return Ok(None);
        }
        if let Some(guard) = &self.skipdata {
            guard.failure.borrow_mut().take();
        }

        log::trace!(
            "disasm {} bytes at {:#x} (count {})",
            code.len(),
            address,
            count
        );
        let (insns, decoded) = self.engine.disasm(code, address, count);
        // SAFETY: exactly what the engine returned, released by its own
        // release function.
        let buffer = unsafe { NativeBuffer::new(insns, decoded, E::release) };
        log::trace!("decoded {} instructions", decoded);

        if let Some(err) = self.skipdata.as_ref().and_then(|guard| guard.take_failure()) {
            drop(buffer);
            return Err(err);
        }
        if decoded == 0 {
            drop(buffer);
            let errno = self.engine.errno();
            let message = if errno.is_ok() {
                format!("no instructions decoded from {} bytes", code.len())
            } else {
                E::strerror(errno)
            };
            return Err(Error::EngineCall {
                call: "cs_disasm",
                code: errno,
                message,
            });
        }
        Ok(buffer)
    }

    /// Scoped disassembly: `visit` sees every instruction while the buffer is
    /// alive, and the buffer is released before this returns, whether or not
    /// `visit` fails.
    pub fn disasm_each<F>(&self, code: &[u8], address: Address, mut visit: F) -> Result<()>
    where
        F: FnMut(Insn<'_>) -> Result<()>,
    {
        let batch = self.disasm_batch(code, address, 0)?;
        for insn in batch.iter() {
            visit(insn)?;
        }
        Ok(())
    }

    /// Eager disassembly of the whole input: every instruction is copied out
    /// and the engine buffer is released before this returns.
    pub fn disasm(&self, code: &[u8], address: Address) -> Result<Vec<Insn<'_>>> {
        self.disasm_count(code, address, 0)
    }

    /// Eager disassembly of at most `count` instructions (0 means no limit).
    pub fn disasm_count(&self, code: &[u8], address: Address, count: usize) -> Result<Vec<Insn<'_>>> {
        let batch = self.disasm_batch(code, address, count)?;
        let insns = batch.to_vec();
        batch.release();
        Ok(insns)
    }

    /// Disassemble into a scoped [`Batch`].
    pub fn disasm_batch(&self, code: &[u8], address: Address, count: usize) -> Result<Batch<'_>> {
        let buffer = self.decode(code, address, count)?;
        Ok(Batch::new(buffer, self.context()))
    }

    /// Disassemble into a [`SharedBatch`] whose buffer lives as long as the
    /// last instruction taken from it.
    pub fn disasm_shared(
        &self,
        code: &[u8],
        address: Address,
        count: usize,
    ) -> Result<SharedBatch<'_>> {
        let buffer = self.decode(code, address, count)?;
        Ok(SharedBatch::new(buffer, self.context()))
    }
}

impl<E: Engine + fmt::Debug> fmt::Debug for Disassembler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disassembler")
            .field("engine", &self.engine)
            .field("arch", &self.arch)
            .field("mode", &self.mode)
            .field("caps", &self.caps)
            .field("detail", &self.detail)
            .field("syntax", &self.syntax)
            .field("skipdata", &self.skipdata.is_some())
            .finish()
    }
}
