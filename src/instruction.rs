//! The architecture-independent instruction envelope.

use std::fmt;
use std::rc::Rc;

use crate::arch::{self, ArchDetail};
use crate::batch::NativeBuffer;
use crate::engine::NameSource;
use crate::error::{Error, NameKind, Result};
use crate::field::FieldValue;
use crate::operand::OperandKind;
use crate::options::Mode;
use crate::raw::{RawDetail, RawInsn, MAX_GROUPS, MAX_INSN_BYTES, MAX_REGS_READ, MAX_REGS_WRITE};
use crate::registers::{RegId, RegisterRef, RegisterTable};
use crate::{Address, Architecture};

/// Generic fields answered by [`Insn::field`] before the architecture view.
pub const GENERIC_FIELDS: &[&str] = &[
    "id",
    "address",
    "size",
    "bytes",
    "mnemonic",
    "op_str",
    "regs_read",
    "regs_write",
    "groups",
    "op_count",
    "detailed",
];

/// Everything an instruction needs from its session: the architecture it
/// was decoded for, the diet flag, and the engine's name tables.
#[derive(Clone, Copy)]
pub(crate) struct InsnContext<'a> {
    pub arch: Architecture,
    pub mode: Mode,
    pub diet: bool,
    pub names: &'a dyn NameSource,
}

/// A record copied out of its batch, with its detail block.
#[derive(Clone)]
struct OwnedRecord {
    insn: RawInsn,
    detail: Option<Box<RawDetail>>,
}

#[derive(Clone)]
enum Record<'a> {
    /// A slice of a batch buffer the borrow checker keeps alive.
    Borrowed(&'a RawInsn),
    /// An independent copy; the batch buffer may already be gone.
    Owned(Box<OwnedRecord>),
    /// A slot of a reference-counted batch buffer.
    Shared { buffer: Rc<NativeBuffer>, index: usize },
}

/// One decoded instruction.
///
/// `'a` never outlives the session the instruction was decoded with, since
/// name lookups go through that session's engine. Whether the record itself
/// borrows the batch buffer, owns a copy, or shares the buffer depends on
/// which disassembly call produced it.
#[derive(Clone)]
pub struct Insn<'a> {
    record: Record<'a>,
    ctx: InsnContext<'a>,
}

impl<'a> Insn<'a> {
    pub(crate) fn borrowed(raw: &'a RawInsn, ctx: InsnContext<'a>) -> Self {
        Insn {
            record: Record::Borrowed(raw),
            ctx,
        }
    }

    pub(crate) fn shared(buffer: Rc<NativeBuffer>, index: usize, ctx: InsnContext<'a>) -> Self {
        Insn {
            record: Record::Shared { buffer, index },
            ctx,
        }
    }

    /// Copy the record and its detail block out of the batch buffer.
    pub fn detach(&self) -> Insn<'a> {
        self.detach_into(self.ctx)
    }

    /// Copy the record out, bound to `ctx` instead of the batch borrow. The
    /// copy owns everything it reads, so only the session borrow remains.
    pub(crate) fn detach_into<'c>(&self, ctx: InsnContext<'c>) -> Insn<'c> {
        let mut insn = *self.raw();
        let detail = self.raw_detail().map(|detail| Box::new(*detail));
        insn.detail = std::ptr::null_mut();
        Insn {
            record: Record::Owned(Box::new(OwnedRecord { insn, detail })),
            ctx,
        }
    }

    /// True if this instruction owns its storage independently of any batch.
    pub fn is_detached(&self) -> bool {
        matches!(self.record, Record::Owned(_))
    }

    fn raw(&self) -> &RawInsn {
        match &self.record {
            Record::Borrowed(raw) => raw,
            Record::Owned(owned) => &owned.insn,
            Record::Shared { buffer, index } => &buffer.records()[*index],
        }
    }

    fn raw_detail(&self) -> Option<&RawDetail> {
        match &self.record {
            Record::Owned(owned) => owned.detail.as_deref(),
            // SAFETY: a non-null detail pointer points into the same batch
            // allocation as the record, which outlives `self`.
            _ => unsafe { self.raw().detail.as_ref() },
        }
    }

    fn require_detail(&self, field: &'static str) -> Result<&RawDetail> {
        self.raw_detail().ok_or(Error::DetailUnavailable { field })
    }

    fn require_text(&self, field: &'static str) -> Result<()> {
        if self.ctx.diet {
            return Err(Error::DietModeUnavailable { field });
        }
        Ok(())
    }

    pub fn arch(&self) -> Architecture {
        self.ctx.arch
    }

    pub fn mode(&self) -> Mode {
        self.ctx.mode
    }

    /// Architecture-specific instruction id; 0 for skip-data records.
    pub fn id(&self) -> u32 {
        self.raw().id
    }

    pub fn address(&self) -> Address {
        self.raw().address
    }

    pub fn size(&self) -> usize {
        usize::from(self.raw().size)
    }

    /// The encoded bytes; only the first `size` bytes of the record.
    pub fn bytes(&self) -> &[u8] {
        let raw = self.raw();
        &raw.bytes[..self.size().min(MAX_INSN_BYTES)]
    }

    pub fn mnemonic(&self) -> Result<&str> {
        self.require_text("mnemonic")?;
        fixed_text(&self.raw().mnemonic, "mnemonic")
    }

    pub fn op_str(&self) -> Result<&str> {
        self.require_text("op_str")?;
        fixed_text(&self.raw().op_str, "op_str")
    }

    /// The engine's name for this instruction id.
    pub fn name(&self) -> Result<&'a str> {
        self.require_text("name")?;
        let id = self.id();
        self.ctx
            .names
            .insn_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Instruction, id })
    }

    pub fn group_name(&self, group: u8) -> Result<&'a str> {
        self.require_text("group_name")?;
        let id = u32::from(group);
        self.ctx
            .names
            .group_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Group, id })
    }

    pub fn reg_name(&self, reg: RegId) -> Result<&'a str> {
        self.require_text("reg_name")?;
        let id = u32::from(reg.0);
        self.ctx
            .names
            .reg_name(id)
            .ok_or(Error::NameUnavailable { kind: NameKind::Register, id })
    }

    /// True iff the record carries a detail block.
    pub fn detailed(&self) -> bool {
        self.raw_detail().is_some()
    }

    /// Registers implicitly read, in engine order.
    pub fn regs_read(&self) -> Result<Vec<RegId>> {
        let detail = self.require_detail("regs_read")?;
        let count = clamp_count("regs_read", detail.regs_read_count, MAX_REGS_READ);
        Ok(detail.regs_read[..count].iter().map(|&id| RegId(id)).collect())
    }

    /// Registers implicitly written, in engine order.
    pub fn regs_write(&self) -> Result<Vec<RegId>> {
        let detail = self.require_detail("regs_write")?;
        let count = clamp_count("regs_write", detail.regs_write_count, MAX_REGS_WRITE);
        Ok(detail.regs_write[..count].iter().map(|&id| RegId(id)).collect())
    }

    pub fn groups(&self) -> Result<Vec<u8>> {
        let detail = self.require_detail("groups")?;
        let count = clamp_count("groups", detail.groups_count, MAX_GROUPS);
        Ok(detail.groups[..count].to_vec())
    }

    pub fn is_in_group(&self, group: u8) -> Result<bool> {
        Ok(self.groups()?.contains(&group))
    }

    /// True if `reg` is implicitly read. Accepts an id or a register name;
    /// a name and its id always give the same answer.
    pub fn reads_register<'r>(&self, reg: impl Into<RegisterRef<'r>>) -> Result<bool> {
        let regs = self.regs_read()?;
        Ok(self.contains_register(&regs, reg.into()))
    }

    /// True if `reg` is implicitly written. Accepts an id or a register name.
    pub fn writes_register<'r>(&self, reg: impl Into<RegisterRef<'r>>) -> Result<bool> {
        let regs = self.regs_write()?;
        Ok(self.contains_register(&regs, reg.into()))
    }

    fn contains_register(&self, regs: &[RegId], reg: RegisterRef<'_>) -> bool {
        let id = RegisterTable::for_arch(self.ctx.arch).resolve(reg);
        !id.is_invalid() && regs.contains(&id)
    }

    /// Number of operands, optionally only those of one kind.
    pub fn operand_count(&self, kind: Option<OperandKind>) -> Result<usize> {
        let detail = self.arch_detail()?;
        Ok(match kind {
            Some(kind) => detail.operand_count_of(kind),
            None => detail.operand_count(),
        })
    }

    /// Number of operands carrying the raw engine type tag `tag`. Tags are
    /// per architecture, see the `OP_*` constants in [`crate::arch`].
    pub fn operand_count_tagged(&self, tag: u32) -> Result<usize> {
        Ok(self.arch_detail()?.operand_count_tagged(tag))
    }

    /// The architecture-specific view of the detail block.
    pub fn arch_detail(&self) -> Result<ArchDetail<'_>> {
        let detail = self.require_detail("detail")?;
        // SAFETY: the record was decoded by a session opened for `ctx.arch`.
        Ok(unsafe { ArchDetail::new(self.ctx.arch, &detail.arch) })
    }

    /// Look up a field by name: generic fields first, then the active
    /// architecture's fields.
    pub fn field(&self, name: &str) -> Result<FieldValue> {
        match name {
            "id" => return Ok(self.id().into()),
            "address" => return Ok(self.address().into()),
            "size" => return Ok((self.size() as u64).into()),
            "bytes" => return Ok(FieldValue::Bytes(self.bytes().to_vec())),
            "mnemonic" => return Ok(FieldValue::Text(self.mnemonic()?.to_string())),
            "op_str" => return Ok(FieldValue::Text(self.op_str()?.to_string())),
            "regs_read" => return Ok(FieldValue::Registers(self.regs_read()?)),
            "regs_write" => return Ok(FieldValue::Registers(self.regs_write()?)),
            "groups" => return Ok(FieldValue::Groups(self.groups()?)),
            "op_count" => return Ok((self.operand_count(None)? as u64).into()),
            "detailed" => return Ok(self.detailed().into()),
            _ => {}
        }

        let arch = self.ctx.arch;
        let Some(&known) = arch::field_names(arch).iter().find(|&&f| f == name) else {
            return Err(Error::UnknownField {
                field: name.to_string(),
                wrapper: "Insn",
                arch,
            });
        };
        self.require_detail(known)?;
        self.arch_detail()?
            .field(known)
            .ok_or_else(|| Error::UnknownField {
                field: name.to_string(),
                wrapper: "Insn",
                arch,
            })
    }
}

/// Decode a fixed-capacity, NUL-terminated engine text field.
fn fixed_text<'t>(text: &'t [std::ffi::c_char], field: &'static str) -> Result<&'t str> {
    // SAFETY: c_char and u8 have the same size and alignment.
    let bytes = unsafe { std::slice::from_raw_parts(text.as_ptr().cast::<u8>(), text.len()) };
    let end = bytes
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::MalformedText { field })?;
    std::str::from_utf8(&bytes[..end]).map_err(|_| Error::MalformedText { field })
}

fn clamp_count(field: &str, count: u8, capacity: usize) -> usize {
    let count = usize::from(count);
    if count > capacity {
        log::warn!("{} count {} exceeds capacity {}, clamping", field, count, capacity);
        return capacity;
    }
    count
}

impl fmt::Debug for Insn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Insn")
            .field("arch", &self.ctx.arch)
            .field("id", &self.id())
            .field("address", &format_args!("{:#x}", self.address()))
            .field("size", &self.size())
            .field("mnemonic", &self.mnemonic().ok())
            .field("op_str", &self.op_str().ok())
            .field("detailed", &self.detailed())
            .finish()
    }
}
