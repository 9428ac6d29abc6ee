//! Capstone, through the raw `capstone-sys` bindings.

use std::ffi::CStr;
use std::ptr;
use std::sync::OnceLock;

use capstone_sys::{
    cs_arch, cs_close, cs_disasm, cs_errno, cs_free, cs_group_name, cs_insn, cs_insn_name, cs_mode,
    cs_open, cs_opt_skipdata, cs_opt_type, cs_opt_value, cs_option, cs_reg_name, cs_strerror, csh,
};

use super::{Capabilities, Engine, EngineOption, NameSource};
use crate::error::EngineErrorCode;
use crate::options::Mode;
use crate::raw::RawInsn;
use crate::Architecture;

/// An open capstone handle.
#[derive(Debug)]
pub struct Capstone {
    handle: csh,
}

fn native_arch(arch: Architecture) -> cs_arch {
    match arch {
        Architecture::Arm => cs_arch::CS_ARCH_ARM,
        Architecture::Arm64 => cs_arch::CS_ARCH_ARM64,
        Architecture::Mips => cs_arch::CS_ARCH_MIPS,
        Architecture::X86 => cs_arch::CS_ARCH_X86,
        Architecture::Ppc => cs_arch::CS_ARCH_PPC,
        Architecture::Sparc => cs_arch::CS_ARCH_SPARC,
        Architecture::SysZ => cs_arch::CS_ARCH_SYSZ,
        Architecture::XCore => cs_arch::CS_ARCH_XCORE,
    }
}

fn lib_arch(arch: Architecture) -> ::capstone::Arch {
    match arch {
        Architecture::Arm => ::capstone::Arch::ARM,
        Architecture::Arm64 => ::capstone::Arch::ARM64,
        Architecture::Mips => ::capstone::Arch::MIPS,
        Architecture::X86 => ::capstone::Arch::X86,
        Architecture::Ppc => ::capstone::Arch::PPC,
        Architecture::Sparc => ::capstone::Arch::SPARC,
        Architecture::SysZ => ::capstone::Arch::SYSZ,
        Architecture::XCore => ::capstone::Arch::XCORE,
    }
}

fn check(code: u32) -> Result<(), EngineErrorCode> {
    match EngineErrorCode::from_raw(code) {
        EngineErrorCode::Ok => Ok(()),
        err => Err(err),
    }
}

fn on_off(enabled: bool) -> usize {
    if enabled {
        cs_opt_value::CS_OPT_ON as usize
    } else {
        cs_opt_value::CS_OPT_OFF as usize
    }
}

/// Borrow an engine-owned, NUL-terminated static string.
///
/// # Safety
///
/// `name` must be null or point at a string the engine never frees.
unsafe fn static_name<'a>(name: *const std::ffi::c_char) -> Option<&'a str> {
    if name.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(name) }.to_str().ok()
}

impl NameSource for Capstone {
    fn reg_name(&self, id: u32) -> Option<&str> {
        // SAFETY: the engine's name tables are static.
        unsafe { static_name(cs_reg_name(self.handle, id)) }
    }

    fn insn_name(&self, id: u32) -> Option<&str> {
        // SAFETY: as above.
        unsafe { static_name(cs_insn_name(self.handle, id)) }
    }

    fn group_name(&self, id: u32) -> Option<&str> {
        // SAFETY: as above.
        unsafe { static_name(cs_group_name(self.handle, id)) }
    }
}

impl Engine for Capstone {
    fn capabilities() -> Capabilities {
        static CAPS: OnceLock<Capabilities> = OnceLock::new();
        *CAPS.get_or_init(|| Capabilities {
            version: ::capstone::Capstone::lib_version(),
            diet: ::capstone::Capstone::is_diet(),
        })
    }

    fn supports(arch: Architecture) -> bool {
        ::capstone::Capstone::supports_arch(lib_arch(arch))
    }

    fn open(arch: Architecture, mode: Mode) -> Result<Self, EngineErrorCode> {
        let mut handle: csh = 0;
        // Mode bits are passed through untouched; the engine validates them.
        let code = unsafe { cs_open(native_arch(arch), cs_mode(mode.bits() as i32), &mut handle) };
        check(code)?;
        Ok(Capstone { handle })
    }

    fn set_option(&mut self, option: EngineOption) -> Result<(), EngineErrorCode> {
        let code = match option {
            EngineOption::Syntax(syntax) => unsafe {
                cs_option(self.handle, cs_opt_type::CS_OPT_SYNTAX, syntax.engine_value())
            },
            EngineOption::Detail(enabled) => unsafe {
                cs_option(self.handle, cs_opt_type::CS_OPT_DETAIL, on_off(enabled))
            },
            EngineOption::SkipData(enabled) => unsafe {
                cs_option(self.handle, cs_opt_type::CS_OPT_SKIPDATA, on_off(enabled))
            },
            EngineOption::SkipDataSetup(setup) => {
                let native = cs_opt_skipdata {
                    mnemonic: setup.mnemonic,
                    callback: setup.callback,
                    user_data: setup.user_data,
                };
                // The engine copies the struct before returning.
                unsafe {
                    cs_option(
                        self.handle,
                        cs_opt_type::CS_OPT_SKIPDATA_SETUP,
                        &native as *const cs_opt_skipdata as usize,
                    )
                }
            }
        };
        check(code)
    }

    fn disasm(&self, code: &[u8], address: u64, count: usize) -> (*mut RawInsn, usize) {
        let mut insns: *mut cs_insn = ptr::null_mut();
        let decoded =
            unsafe { cs_disasm(self.handle, code.as_ptr(), code.len(), address, count, &mut insns) };
        // RawInsn mirrors cs_insn field for field.
        (insns.cast::<RawInsn>(), decoded)
    }

    unsafe fn release(insns: *mut RawInsn, count: usize) {
        unsafe { cs_free(insns.cast::<cs_insn>(), count) }
    }

    fn errno(&self) -> EngineErrorCode {
        EngineErrorCode::from_raw(unsafe { cs_errno(self.handle) })
    }

    fn strerror(code: EngineErrorCode) -> String {
        let message = unsafe { cs_strerror(code.raw()) };
        if message.is_null() {
            return code.to_string();
        }
        unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned()
    }

    fn close(mut self) -> Result<(), EngineErrorCode> {
        let code = unsafe { cs_close(&mut self.handle) };
        // cs_close zeroes the handle on success, so Drop becomes a no-op.
        check(code)
    }
}

impl Drop for Capstone {
    fn drop(&mut self) {
        if self.handle != 0 {
            unsafe { cs_close(&mut self.handle) };
        }
    }
}
