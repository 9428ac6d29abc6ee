//! A deterministic stand-in for the native engine, for tests.
//!
//! Decodes fixed-width chunks (the architecture's natural skip unit). A chunk
//! whose first byte is [`DATA_MARKER`] is undecodable: decoding stops there
//! unless skip-data is on. Record buffers are heap allocated and released the
//! same way the native engine does it, and every disasm/release is counted
//! per thread so tests can check the release discipline.

use std::cell::Cell;
use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::ptr;

use super::{Capabilities, Engine, EngineOption, NameSource, SkipDataFn};
use crate::error::EngineErrorCode;
use crate::options::{Mode, Syntax};
use crate::raw::{RawDetail, RawInsn, MNEMONIC_LEN, OP_STR_LEN};
use crate::registers::{RegId, RegisterTable};
use crate::{Architecture, ENGINE_ABI_VERSION};

pub const DATA_MARKER: u8 = 0xff;

/// A mode bit [`Engine::open`] rejects with a mode error.
pub const REJECTED_MODE: Mode = Mode::from_bits(1 << 30);

const GROUPS: [&str; 8] = [
    "invalid",
    "jump",
    "call",
    "ret",
    "int",
    "iret",
    "privilege",
    "branch_relative",
];

thread_local! {
    static DISASM_CALLS: Cell<usize> = const { Cell::new(0) };
    static RELEASES: Cell<usize> = const { Cell::new(0) };
    static LIVE_BUFFERS: Cell<isize> = const { Cell::new(0) };
}

/// Engine calls and releases seen on this thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub disasm_calls: usize,
    pub releases: usize,
    pub live_buffers: isize,
}

pub fn counters() -> Counters {
    Counters {
        disasm_calls: DISASM_CALLS.with(Cell::get),
        releases: RELEASES.with(Cell::get),
        live_buffers: LIVE_BUFFERS.with(Cell::get),
    }
}

/// Build flavours of the scripted engine.
pub trait Build {
    const CAPS: Capabilities;
}

#[derive(Debug)]
pub struct Standard;

#[derive(Debug)]
pub struct Diet;

/// Reports an engine ABI older than the record layouts.
#[derive(Debug)]
pub struct Stale;

impl Build for Standard {
    const CAPS: Capabilities = Capabilities {
        version: ENGINE_ABI_VERSION,
        diet: false,
    };
}

impl Build for Diet {
    const CAPS: Capabilities = Capabilities {
        version: ENGINE_ABI_VERSION,
        diet: true,
    };
}

impl Build for Stale {
    const CAPS: Capabilities = Capabilities {
        version: (4, 0),
        diet: false,
    };
}

#[derive(Debug)]
pub struct Scripted<B: Build = Standard> {
    arch: Architecture,
    mode: Mode,
    detail: bool,
    syntax: Option<Syntax>,
    skipdata: bool,
    skip_mnemonic: Option<String>,
    skip_callback: Option<SkipDataFn>,
    skip_user_data: *mut c_void,
    errno: Cell<EngineErrorCode>,
    build: PhantomData<B>,
}

// The raw user-data pointer is owned by the session that configured it.
unsafe impl<B: Build> Send for Scripted<B> {}

impl<B: Build> Scripted<B> {
    pub fn syntax(&self) -> Option<Syntax> {
        self.syntax
    }

    fn width(&self) -> usize {
        self.arch.default_skip(self.mode)
    }

    fn record(&self, chunk: &[u8], address: u64) -> RawInsn {
        let mut insn = RawInsn::zeroed();
        insn.id = u32::from(chunk[0]) + 1;
        insn.address = address;
        insn.size = chunk.len() as u16;
        insn.bytes[..chunk.len()].copy_from_slice(chunk);
        let mnemonic = format!("op{:02x}", chunk[0]);
        let op_str = chunk[1..]
            .iter()
            .map(|b| format!("#{}", b))
            .collect::<Vec<_>>()
            .join(", ");
        write_text(&mut insn.mnemonic, &mnemonic);
        write_text(&mut insn.op_str, &op_str);
        if self.detail {
            let mut detail = Box::new(RawDetail::zeroed());
            // Byte 1 is read, byte 2 written; byte 3 selects a group.
            if let Some(&reg) = chunk.get(1) {
                detail.regs_read[0] = reg.into();
                detail.regs_read_count = 1;
            }
            if let Some(&reg) = chunk.get(2) {
                detail.regs_write[0] = reg.into();
                detail.regs_write_count = 1;
            }
            if let Some(&group) = chunk.get(3) {
                detail.groups[0] = group % GROUPS.len() as u8;
                detail.groups_count = 1;
            }
            insn.detail = Box::into_raw(detail);
        }
        insn
    }

    fn data_record(&self, chunk: &[u8], address: u64) -> RawInsn {
        let mut insn = RawInsn::zeroed();
        insn.address = address;
        insn.size = chunk.len() as u16;
        insn.bytes[..chunk.len()].copy_from_slice(chunk);
        // Like the native engine, a null setup mnemonic is dereferenced here.
        let mnemonic = self
            .skip_mnemonic
            .as_deref()
            .expect("skip-data mnemonic was set up as a null pointer");
        write_text(&mut insn.mnemonic, mnemonic);
        if self.detail {
            insn.detail = Box::into_raw(Box::new(RawDetail::zeroed()));
        }
        insn
    }
}

fn write_text(dst: &mut [std::ffi::c_char], text: &str) {
    let len = text.len().min(dst.len() - 1);
    for (slot, byte) in dst.iter_mut().zip(text.bytes().take(len)) {
        *slot = byte as std::ffi::c_char;
    }
    dst[len] = 0;
}

impl<B: Build> NameSource for Scripted<B> {
    fn reg_name(&self, id: u32) -> Option<&str> {
        let id = u16::try_from(id).ok()?;
        RegisterTable::for_arch(self.arch).id_to_name(RegId(id))
    }

    fn insn_name(&self, id: u32) -> Option<&str> {
        (id != 0).then_some("scripted")
    }

    fn group_name(&self, id: u32) -> Option<&str> {
        GROUPS.get(usize::try_from(id).ok()?).copied()
    }
}

impl<B: Build> Engine for Scripted<B> {
    fn capabilities() -> Capabilities {
        B::CAPS
    }

    fn supports(_arch: Architecture) -> bool {
        true
    }

    fn open(arch: Architecture, mode: Mode) -> Result<Self, EngineErrorCode> {
        if mode.contains(REJECTED_MODE) {
            return Err(EngineErrorCode::Mode);
        }
        Ok(Scripted {
            arch,
            mode,
            detail: false,
            syntax: None,
            skipdata: false,
            skip_mnemonic: Some(".byte".to_string()),
            skip_callback: None,
            skip_user_data: ptr::null_mut(),
            errno: Cell::new(EngineErrorCode::Ok),
            build: PhantomData,
        })
    }

    fn set_option(&mut self, option: EngineOption) -> Result<(), EngineErrorCode> {
        match option {
            EngineOption::Syntax(syntax) => {
                if self.arch != Architecture::X86 && syntax != Syntax::NoRegisterNames {
                    return Err(EngineErrorCode::Option);
                }
                self.syntax = Some(syntax);
            }
            EngineOption::Detail(enabled) => self.detail = enabled,
            EngineOption::SkipData(enabled) => self.skipdata = enabled,
            EngineOption::SkipDataSetup(setup) => {
                self.skip_mnemonic = (!setup.mnemonic.is_null()).then(|| {
                    // SAFETY: the session keeps the mnemonic alive and NUL terminated.
                    unsafe { CStr::from_ptr(setup.mnemonic) }
                        .to_string_lossy()
                        .into_owned()
                });
                self.skip_callback = setup.callback;
                self.skip_user_data = setup.user_data;
            }
        }
        Ok(())
    }

    fn disasm(&self, code: &[u8], address: u64, count: usize) -> (*mut RawInsn, usize) {
        DISASM_CALLS.with(|c| c.set(c.get() + 1));
        let width = self.width();
        let mut records = Vec::new();
        let mut offset = 0;
        while offset < code.len() && (count == 0 || records.len() < count) {
            let address = address + offset as u64;
            if code[offset] != DATA_MARKER {
                let end = (offset + width).min(code.len());
                records.push(self.record(&code[offset..end], address));
                offset = end;
                continue;
            }
            if !self.skipdata {
                break;
            }
            let skip = match self.skip_callback {
                // SAFETY: the callback and user data were installed together
                // by the session, which outlives this call.
                Some(callback) => unsafe {
                    callback(code.as_ptr(), code.len(), offset, self.skip_user_data)
                },
                None => width,
            };
            if skip == 0 {
                break;
            }
            let end = (offset + skip).min(code.len());
            records.push(self.data_record(&code[offset..end], address));
            offset = end;
        }

        if records.is_empty() {
            self.errno.set(EngineErrorCode::Ok);
            return (ptr::null_mut(), 0);
        }
        let count = records.len();
        LIVE_BUFFERS.with(|c| c.set(c.get() + 1));
        let buffer = Box::into_raw(records.into_boxed_slice());
        (buffer.cast::<RawInsn>(), count)
    }

    unsafe fn release(insns: *mut RawInsn, count: usize) {
        RELEASES.with(|c| c.set(c.get() + 1));
        if insns.is_null() {
            return;
        }
        LIVE_BUFFERS.with(|c| c.set(c.get() - 1));
        let records = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(insns, count)) };
        for insn in records.iter() {
            if !insn.detail.is_null() {
                drop(unsafe { Box::from_raw(insn.detail) });
            }
        }
    }

    fn errno(&self) -> EngineErrorCode {
        self.errno.get()
    }

    fn strerror(code: EngineErrorCode) -> String {
        format!("scripted {}", code)
    }

    fn close(self) -> Result<(), EngineErrorCode> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_and_releases() {
        let engine = Scripted::<Standard>::open(Architecture::Arm, Mode::ARM).unwrap();
        let before = counters();
        let (ptr, count) = engine.disasm(&[1, 2, 3, 4, 5, 6, 7, 8], 0x100, 0);
        assert_eq!(count, 2);
        let second = unsafe { &*ptr.add(1) };
        assert_eq!(second.address, 0x104);
        assert_eq!(second.size, 4);
        unsafe { Scripted::<Standard>::release(ptr, count) };
        let after = counters();
        assert_eq!(after.disasm_calls, before.disasm_calls + 1);
        assert_eq!(after.releases, before.releases + 1);
        assert_eq!(after.live_buffers, before.live_buffers);
    }

    #[test]
    fn test_marker_stops_without_skipdata() {
        let engine = Scripted::<Standard>::open(Architecture::X86, Mode::MODE_32).unwrap();
        let (ptr, count) = engine.disasm(&[DATA_MARKER, 0x90], 0, 0);
        assert!(ptr.is_null());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_text_is_nul_terminated() {
        let mut buf = [1 as std::ffi::c_char; MNEMONIC_LEN];
        write_text(&mut buf, "op01");
        assert_eq!(buf[4], 0);
        let mut small = [1 as std::ffi::c_char; OP_STR_LEN];
        write_text(&mut small, &"x".repeat(OP_STR_LEN * 2));
        assert_eq!(small[OP_STR_LEN - 1], 0);
    }
}
