//! `#[repr(C)]` mirrors of the engine's instruction records.
//!
//! Field order, widths and padding follow the capstone 5.0 ABI exactly
//! (see [`crate::ENGINE_ABI_VERSION`]). Enum-typed C fields are kept as plain
//! integers and C `bool`s as `u8`, so any bit pattern the engine writes is a
//! valid Rust value; the typed views in [`crate::arch`] interpret them.
//!
//! Nothing outside this crate's views should read these unions directly:
//! the active member is decided by the session architecture (for
//! [`RawArchDetail`]) or by the operand type tag (for the operand unions).

#![allow(missing_docs)]

use std::os::raw::c_char;

/// Capacity of [`RawInsn::bytes`].
pub const MAX_INSN_BYTES: usize = 24;
pub const MNEMONIC_LEN: usize = 32;
pub const OP_STR_LEN: usize = 160;
pub const MAX_REGS_READ: usize = 16;
pub const MAX_REGS_WRITE: usize = 20;
pub const MAX_GROUPS: usize = 8;

/// One instruction record of a batch buffer (`cs_insn`).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawInsn {
    pub id: u32,
    pub address: u64,
    pub size: u16,
    pub bytes: [u8; MAX_INSN_BYTES],
    pub mnemonic: [c_char; MNEMONIC_LEN],
    pub op_str: [c_char; OP_STR_LEN],
    /// Null unless detail mode was on when the record was decoded.
    pub detail: *mut RawDetail,
}

impl RawInsn {
    /// An all-zero record with a null detail pointer.
    pub fn zeroed() -> Self {
        // SAFETY: every field is an integer, an integer array or a raw
        // pointer, for all of which the zero bit pattern is valid.
        unsafe { std::mem::zeroed() }
    }
}

/// The detail block hanging off a detailed record (`cs_detail`).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawDetail {
    pub regs_read: [u16; MAX_REGS_READ],
    pub regs_read_count: u8,
    pub regs_write: [u16; MAX_REGS_WRITE],
    pub regs_write_count: u8,
    pub groups: [u8; MAX_GROUPS],
    pub groups_count: u8,
    pub arch: RawArchDetail,
}

impl RawDetail {
    pub fn zeroed() -> Self {
        // SAFETY: plain integers, floats and unions thereof; all-zero is valid.
        unsafe { std::mem::zeroed() }
    }
}

/// Per-architecture part of the detail block. Only the member matching the
/// session architecture is ever written by the engine.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawArchDetail {
    pub x86: RawX86,
    pub arm64: RawArm64,
    pub arm: RawArm,
    pub mips: RawMips,
    pub ppc: RawPpc,
    pub sparc: RawSparc,
    pub sysz: RawSysz,
    pub xcore: RawXcore,
}

/* ARM */

pub const ARM_MAX_OPERANDS: usize = 36;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawArmMem {
    pub base: u32,
    pub index: u32,
    pub scale: i32,
    pub disp: i32,
    pub lshift: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawArmShift {
    pub kind: u32,
    pub value: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawArmOpValue {
    pub reg: u32,
    pub imm: i32,
    pub fp: f64,
    pub mem: RawArmMem,
    pub setend: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawArmOp {
    pub vector_index: i32,
    pub shift: RawArmShift,
    pub op_type: u32,
    pub value: RawArmOpValue,
    pub subtracted: u8,
    pub access: u8,
    pub neon_lane: i8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawArm {
    pub usermode: u8,
    pub vector_size: i32,
    pub vector_data: u32,
    pub cps_mode: u32,
    pub cps_flag: u32,
    pub cc: u32,
    pub update_flags: u8,
    pub writeback: u8,
    pub mem_barrier: u32,
    pub op_count: u8,
    pub operands: [RawArmOp; ARM_MAX_OPERANDS],
}

/* ARM64 */

pub const ARM64_MAX_OPERANDS: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawArm64Mem {
    pub base: u32,
    pub index: u32,
    pub disp: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawArm64Shift {
    pub kind: u32,
    pub value: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawArm64OpValue {
    pub reg: u32,
    pub imm: i64,
    pub fp: f64,
    pub mem: RawArm64Mem,
    pub pstate: u32,
    pub sys: u32,
    pub prefetch: u32,
    pub barrier: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawArm64Op {
    pub vector_index: i32,
    pub vas: u32,
    pub shift: RawArm64Shift,
    pub ext: u32,
    pub op_type: u32,
    pub value: RawArm64OpValue,
    pub access: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawArm64 {
    pub cc: u32,
    pub update_flags: u8,
    pub writeback: u8,
    pub op_count: u8,
    pub operands: [RawArm64Op; ARM64_MAX_OPERANDS],
}

/* MIPS */

pub const MIPS_MAX_OPERANDS: usize = 10;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawMipsMem {
    pub base: u32,
    pub disp: i64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawMipsOpValue {
    pub reg: u32,
    pub imm: i64,
    pub mem: RawMipsMem,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawMipsOp {
    pub op_type: u32,
    pub value: RawMipsOpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawMips {
    pub op_count: u8,
    pub operands: [RawMipsOp; MIPS_MAX_OPERANDS],
}

/* x86 */

pub const X86_MAX_OPERANDS: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawX86Mem {
    pub segment: u32,
    pub base: u32,
    pub index: u32,
    pub scale: i32,
    pub disp: i64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawX86OpValue {
    pub reg: u32,
    pub imm: i64,
    pub mem: RawX86Mem,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawX86Op {
    pub op_type: u32,
    pub value: RawX86OpValue,
    pub size: u8,
    pub access: u8,
    pub avx_bcast: u32,
    pub avx_zero_opmask: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawX86Encoding {
    pub modrm_offset: u8,
    pub disp_offset: u8,
    pub disp_size: u8,
    pub imm_offset: u8,
    pub imm_size: u8,
}

/// `eflags` for integer instructions, `fpu_flags` for x87 ones.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawX86Flags {
    pub eflags: u64,
    pub fpu_flags: u64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawX86 {
    pub prefix: [u8; 4],
    pub opcode: [u8; 4],
    pub rex: u8,
    pub addr_size: u8,
    pub modrm: u8,
    pub sib: u8,
    pub disp: i64,
    pub sib_index: u32,
    pub sib_scale: i8,
    pub sib_base: u32,
    pub xop_cc: u32,
    pub sse_cc: u32,
    pub avx_cc: u32,
    pub avx_sae: u8,
    pub avx_rm: u32,
    pub flags: RawX86Flags,
    pub op_count: u8,
    pub operands: [RawX86Op; X86_MAX_OPERANDS],
    pub encoding: RawX86Encoding,
}

/* PowerPC */

pub const PPC_MAX_OPERANDS: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPpcMem {
    pub base: u32,
    pub disp: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPpcCrx {
    pub scale: u32,
    pub reg: u32,
    pub cond: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawPpcOpValue {
    pub reg: u32,
    pub imm: i64,
    pub mem: RawPpcMem,
    pub crx: RawPpcCrx,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawPpcOp {
    pub op_type: u32,
    pub value: RawPpcOpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawPpc {
    pub bc: u32,
    pub bh: u32,
    pub update_cr0: u8,
    pub op_count: u8,
    pub operands: [RawPpcOp; PPC_MAX_OPERANDS],
}

/* SPARC */

pub const SPARC_MAX_OPERANDS: usize = 4;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawSparcMem {
    pub base: u8,
    pub index: u8,
    pub disp: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawSparcOpValue {
    pub reg: u32,
    pub imm: i64,
    pub mem: RawSparcMem,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawSparcOp {
    pub op_type: u32,
    pub value: RawSparcOpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawSparc {
    pub cc: u32,
    pub hint: u32,
    pub op_count: u8,
    pub operands: [RawSparcOp; SPARC_MAX_OPERANDS],
}

/* SystemZ */

pub const SYSZ_MAX_OPERANDS: usize = 6;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawSyszMem {
    pub base: u8,
    pub index: u8,
    pub length: u64,
    pub disp: i64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawSyszOpValue {
    pub reg: u32,
    pub imm: i64,
    pub mem: RawSyszMem,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawSyszOp {
    pub op_type: u32,
    pub value: RawSyszOpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawSysz {
    pub cc: u32,
    pub op_count: u8,
    pub operands: [RawSyszOp; SYSZ_MAX_OPERANDS],
}

/* XCore */

pub const XCORE_MAX_OPERANDS: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawXcoreMem {
    pub base: u8,
    pub index: u8,
    pub disp: i32,
    pub direct: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawXcoreOpValue {
    pub reg: u32,
    pub imm: i32,
    pub mem: RawXcoreMem,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawXcoreOp {
    pub op_type: u32,
    pub value: RawXcoreOpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawXcore {
    pub op_count: u8,
    pub operands: [RawXcoreOp; XCORE_MAX_OPERANDS],
}

#[cfg(test)]
mod tests {
    use super::*;
    use capstone_sys as sys;
    use std::mem::{align_of, offset_of, size_of};

    macro_rules! assert_same_layout {
        ($ours:ty, $theirs:ty) => {
            assert_eq!(
                size_of::<$ours>(),
                size_of::<$theirs>(),
                "size of {}",
                stringify!($ours)
            );
            assert_eq!(
                align_of::<$ours>(),
                align_of::<$theirs>(),
                "align of {}",
                stringify!($ours)
            );
        };
    }

    #[test]
    fn test_insn_matches_engine_abi() {
        assert_same_layout!(RawInsn, sys::cs_insn);
        assert_eq!(offset_of!(RawInsn, id), offset_of!(sys::cs_insn, id));
        assert_eq!(offset_of!(RawInsn, address), offset_of!(sys::cs_insn, address));
        assert_eq!(offset_of!(RawInsn, size), offset_of!(sys::cs_insn, size));
        assert_eq!(offset_of!(RawInsn, bytes), offset_of!(sys::cs_insn, bytes));
        assert_eq!(offset_of!(RawInsn, mnemonic), offset_of!(sys::cs_insn, mnemonic));
        assert_eq!(offset_of!(RawInsn, op_str), offset_of!(sys::cs_insn, op_str));
        assert_eq!(offset_of!(RawInsn, detail), offset_of!(sys::cs_insn, detail));
    }

    /// Every listed field sits at the engine's offset.
    macro_rules! assert_offsets {
        ($ours:ty, $theirs:ty, { $($field:ident => $sys:ident),* $(,)? }) => {
            $(
                assert_eq!(
                    offset_of!($ours, $field),
                    offset_of!($theirs, $sys),
                    "offset of {}::{}",
                    stringify!($ours),
                    stringify!($field)
                );
            )*
        };
    }

    #[test]
    fn test_detail_matches_engine_abi() {
        assert_offsets!(RawDetail, sys::cs_detail, {
            regs_read => regs_read,
            regs_read_count => regs_read_count,
            regs_write => regs_write,
            regs_write_count => regs_write_count,
            groups => groups,
            groups_count => groups_count,
            arch => __bindgen_anon_1,
        });
        // The engine's union also covers architectures this crate does not
        // model, so ours may be smaller but never larger.
        assert!(size_of::<RawDetail>() <= size_of::<sys::cs_detail>());
        assert_eq!(align_of::<RawDetail>(), align_of::<sys::cs_detail>());
    }

    #[test]
    fn test_arm_records_match_engine_abi() {
        assert_same_layout!(RawArm, sys::cs_arm);
        assert_offsets!(RawArm, sys::cs_arm, {
            usermode => usermode,
            vector_size => vector_size,
            vector_data => vector_data,
            cps_mode => cps_mode,
            cps_flag => cps_flag,
            cc => cc,
            update_flags => update_flags,
            writeback => writeback,
            mem_barrier => mem_barrier,
            op_count => op_count,
            operands => operands,
        });
        assert_same_layout!(RawArmOp, sys::cs_arm_op);
        assert_offsets!(RawArmOp, sys::cs_arm_op, {
            vector_index => vector_index,
            shift => shift,
            op_type => type_,
            value => __bindgen_anon_1,
            subtracted => subtracted,
            access => access,
            neon_lane => neon_lane,
        });
        assert_same_layout!(RawArmShift, sys::cs_arm_op__bindgen_ty_1);
        assert_offsets!(RawArmShift, sys::cs_arm_op__bindgen_ty_1, { kind => type_, value => value });
        assert_same_layout!(RawArmOpValue, sys::cs_arm_op__bindgen_ty_2);
        assert_same_layout!(RawArmMem, sys::arm_op_mem);
        assert_offsets!(RawArmMem, sys::arm_op_mem, {
            base => base,
            index => index,
            scale => scale,
            disp => disp,
            lshift => lshift,
        });
    }

    #[test]
    fn test_arm64_records_match_engine_abi() {
        assert_same_layout!(RawArm64, sys::cs_arm64);
        assert_offsets!(RawArm64, sys::cs_arm64, {
            cc => cc,
            update_flags => update_flags,
            writeback => writeback,
            op_count => op_count,
            operands => operands,
        });
        assert_same_layout!(RawArm64Op, sys::cs_arm64_op);
        assert_offsets!(RawArm64Op, sys::cs_arm64_op, {
            vector_index => vector_index,
            vas => vas,
            shift => shift,
            ext => ext,
            op_type => type_,
            value => __bindgen_anon_1,
            access => access,
        });
        assert_same_layout!(RawArm64Shift, sys::cs_arm64_op__bindgen_ty_1);
        assert_offsets!(RawArm64Shift, sys::cs_arm64_op__bindgen_ty_1, { kind => type_, value => value });
        assert_same_layout!(RawArm64OpValue, sys::cs_arm64_op__bindgen_ty_2);
        assert_same_layout!(RawArm64Mem, sys::arm64_op_mem);
        assert_offsets!(RawArm64Mem, sys::arm64_op_mem, { base => base, index => index, disp => disp });
    }

    #[test]
    fn test_mips_records_match_engine_abi() {
        assert_same_layout!(RawMips, sys::cs_mips);
        assert_offsets!(RawMips, sys::cs_mips, { op_count => op_count, operands => operands });
        assert_same_layout!(RawMipsOp, sys::cs_mips_op);
        assert_offsets!(RawMipsOp, sys::cs_mips_op, { op_type => type_, value => __bindgen_anon_1 });
        assert_same_layout!(RawMipsOpValue, sys::cs_mips_op__bindgen_ty_1);
        assert_same_layout!(RawMipsMem, sys::mips_op_mem);
        assert_offsets!(RawMipsMem, sys::mips_op_mem, { base => base, disp => disp });
    }

    #[test]
    fn test_x86_records_match_engine_abi() {
        assert_same_layout!(RawX86, sys::cs_x86);
        assert_offsets!(RawX86, sys::cs_x86, {
            prefix => prefix,
            opcode => opcode,
            rex => rex,
            addr_size => addr_size,
            modrm => modrm,
            sib => sib,
            disp => disp,
            sib_index => sib_index,
            sib_scale => sib_scale,
            sib_base => sib_base,
            xop_cc => xop_cc,
            sse_cc => sse_cc,
            avx_cc => avx_cc,
            avx_sae => avx_sae,
            avx_rm => avx_rm,
            flags => __bindgen_anon_1,
            op_count => op_count,
            operands => operands,
            encoding => encoding,
        });
        assert_same_layout!(RawX86Flags, sys::cs_x86__bindgen_ty_1);
        assert_same_layout!(RawX86Op, sys::cs_x86_op);
        assert_offsets!(RawX86Op, sys::cs_x86_op, {
            op_type => type_,
            value => __bindgen_anon_1,
            size => size,
            access => access,
            avx_bcast => avx_bcast,
            avx_zero_opmask => avx_zero_opmask,
        });
        assert_same_layout!(RawX86OpValue, sys::cs_x86_op__bindgen_ty_1);
        assert_same_layout!(RawX86Mem, sys::x86_op_mem);
        assert_offsets!(RawX86Mem, sys::x86_op_mem, {
            segment => segment,
            base => base,
            index => index,
            scale => scale,
            disp => disp,
        });
        assert_same_layout!(RawX86Encoding, sys::cs_x86_encoding);
        assert_offsets!(RawX86Encoding, sys::cs_x86_encoding, {
            modrm_offset => modrm_offset,
            disp_offset => disp_offset,
            disp_size => disp_size,
            imm_offset => imm_offset,
            imm_size => imm_size,
        });
    }

    #[test]
    fn test_ppc_records_match_engine_abi() {
        assert_same_layout!(RawPpc, sys::cs_ppc);
        assert_offsets!(RawPpc, sys::cs_ppc, {
            bc => bc,
            bh => bh,
            update_cr0 => update_cr0,
            op_count => op_count,
            operands => operands,
        });
        assert_same_layout!(RawPpcOp, sys::cs_ppc_op);
        assert_offsets!(RawPpcOp, sys::cs_ppc_op, { op_type => type_, value => __bindgen_anon_1 });
        assert_same_layout!(RawPpcOpValue, sys::cs_ppc_op__bindgen_ty_1);
        assert_same_layout!(RawPpcMem, sys::ppc_op_mem);
        assert_offsets!(RawPpcMem, sys::ppc_op_mem, { base => base, disp => disp });
        assert_same_layout!(RawPpcCrx, sys::ppc_op_crx);
        assert_offsets!(RawPpcCrx, sys::ppc_op_crx, { scale => scale, reg => reg, cond => cond });
    }

    #[test]
    fn test_sparc_records_match_engine_abi() {
        assert_same_layout!(RawSparc, sys::cs_sparc);
        assert_offsets!(RawSparc, sys::cs_sparc, {
            cc => cc,
            hint => hint,
            op_count => op_count,
            operands => operands,
        });
        assert_same_layout!(RawSparcOp, sys::cs_sparc_op);
        assert_offsets!(RawSparcOp, sys::cs_sparc_op, { op_type => type_, value => __bindgen_anon_1 });
        assert_same_layout!(RawSparcOpValue, sys::cs_sparc_op__bindgen_ty_1);
        assert_same_layout!(RawSparcMem, sys::sparc_op_mem);
        assert_offsets!(RawSparcMem, sys::sparc_op_mem, { base => base, index => index, disp => disp });
    }

    #[test]
    fn test_sysz_records_match_engine_abi() {
        assert_same_layout!(RawSysz, sys::cs_sysz);
        assert_offsets!(RawSysz, sys::cs_sysz, { cc => cc, op_count => op_count, operands => operands });
        assert_same_layout!(RawSyszOp, sys::cs_sysz_op);
        assert_offsets!(RawSyszOp, sys::cs_sysz_op, { op_type => type_, value => __bindgen_anon_1 });
        assert_same_layout!(RawSyszOpValue, sys::cs_sysz_op__bindgen_ty_1);
        assert_same_layout!(RawSyszMem, sys::sysz_op_mem);
        assert_offsets!(RawSyszMem, sys::sysz_op_mem, {
            base => base,
            index => index,
            length => length,
            disp => disp,
        });
    }

    #[test]
    fn test_xcore_records_match_engine_abi() {
        assert_same_layout!(RawXcore, sys::cs_xcore);
        assert_offsets!(RawXcore, sys::cs_xcore, { op_count => op_count, operands => operands });
        assert_same_layout!(RawXcoreOp, sys::cs_xcore_op);
        assert_offsets!(RawXcoreOp, sys::cs_xcore_op, { op_type => type_, value => __bindgen_anon_1 });
        assert_same_layout!(RawXcoreOpValue, sys::cs_xcore_op__bindgen_ty_1);
        assert_same_layout!(RawXcoreMem, sys::xcore_op_mem);
        assert_offsets!(RawXcoreMem, sys::xcore_op_mem, {
            base => base,
            index => index,
            disp => disp,
            direct => direct,
        });
    }

    #[test]
    fn test_record_stride() {
        assert_eq!(size_of::<RawInsn>(), 248);
        assert_eq!(size_of::<RawArm>(), 1768);
    }
}
