//! Ownership of the engine's batch buffer.
//!
//! One disassembly call yields one native allocation holding `count`
//! instruction records back to back. [`NativeBuffer`] owns that allocation
//! and releases it exactly once, on drop. Two holders are offered:
//!
//! * [`Batch`]: scoped ownership. Instructions borrow the batch, so the
//!   borrow checker rules out any read after release, and
//!   [`Batch::release`] consumes the batch so it cannot be released twice.
//! * [`SharedBatch`]: zero-copy bulk access. The buffer is reference
//!   counted and lives until the last instruction taken from it is dropped.
//!   Every surviving instruction pins the whole buffer, so prefer
//!   [`Batch`] or the eager [`crate::Disassembler::disasm`] unless the copy
//!   cost matters.

use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::instruction::{Insn, InsnContext};
use crate::raw::RawInsn;

/// Releases a batch buffer; an engine's [`crate::Engine::release`].
pub(crate) type ReleaseFn = unsafe fn(*mut RawInsn, usize);

/// An engine-allocated array of instruction records.
pub(crate) struct NativeBuffer {
    insns: NonNull<RawInsn>,
    count: usize,
    release: ReleaseFn,
}

impl NativeBuffer {
    /// Take ownership of a disasm result. A null pointer yields `None`.
    ///
    /// # Safety
    ///
    /// `insns` and `count` must come from one engine disasm call whose
    /// release function is `release`, and nothing else may release them.
    pub(crate) unsafe fn new(insns: *mut RawInsn, count: usize, release: ReleaseFn) -> Option<Self> {
        let insns = NonNull::new(insns)?;
        Some(NativeBuffer {
            insns,
            count,
            release,
        })
    }

    pub(crate) fn records(&self) -> &[RawInsn] {
        // SAFETY: the engine allocated `count` contiguous records and they
        // stay valid until drop.
        unsafe { std::slice::from_raw_parts(self.insns.as_ptr(), self.count) }
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }
}

impl Drop for NativeBuffer {
    fn drop(&mut self) {
        log::trace!("releasing batch buffer of {} records", self.count);
        // SAFETY: ownership was handed over in `new`, and drop runs once.
        unsafe { (self.release)(self.insns.as_ptr(), self.count) }
    }
}

impl fmt::Debug for NativeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBuffer")
            .field("insns", &self.insns)
            .field("count", &self.count)
            .finish()
    }
}

/// The result of one disassembly call, scoped to the session that made it.
pub struct Batch<'s> {
    buffer: Option<NativeBuffer>,
    ctx: InsnContext<'s>,
}

impl<'s> Batch<'s> {
    pub(crate) fn new(buffer: Option<NativeBuffer>, ctx: InsnContext<'s>) -> Self {
        Batch { buffer, ctx }
    }

    fn records(&self) -> &[RawInsn] {
        self.buffer.as_ref().map_or(&[][..], NativeBuffer::records)
    }

    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, NativeBuffer::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Insn<'_>> {
        self.records()
            .get(index)
            .map(|raw| Insn::borrowed(raw, self.ctx))
    }

    /// Instructions in decode order. Each call starts from the first record.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Insn<'_>> + '_ {
        self.records()
            .iter()
            .map(move |raw| Insn::borrowed(raw, self.ctx))
    }

    /// Copies of every instruction that outlive the batch.
    pub fn to_vec(&self) -> Vec<Insn<'s>> {
        self.records()
            .iter()
            .map(|raw| Insn::borrowed(raw, self.ctx).detach_into(self.ctx))
            .collect()
    }

    /// Release the buffer now. Dropping the batch does the same.
    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for Batch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("arch", &self.ctx.arch)
            .field("len", &self.len())
            .finish()
    }
}

/// A batch whose buffer is shared by every instruction taken from it.
pub struct SharedBatch<'s> {
    buffer: Option<Rc<NativeBuffer>>,
    ctx: InsnContext<'s>,
}

impl<'s> SharedBatch<'s> {
    pub(crate) fn new(buffer: Option<NativeBuffer>, ctx: InsnContext<'s>) -> Self {
        SharedBatch {
            buffer: buffer.map(Rc::new),
            ctx,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, |buffer| buffer.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An instruction that keeps the buffer alive on its own.
    pub fn get(&self, index: usize) -> Option<Insn<'s>> {
        let buffer = self.buffer.as_ref()?;
        (index < buffer.len()).then(|| Insn::shared(Rc::clone(buffer), index, self.ctx))
    }

    pub fn iter(&self) -> impl Iterator<Item = Insn<'s>> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }

    pub fn into_vec(self) -> Vec<Insn<'s>> {
        self.iter().collect()
    }

    /// Number of holders of the buffer, this batch included.
    pub fn holders(&self) -> usize {
        self.buffer.as_ref().map_or(0, Rc::strong_count)
    }
}

impl fmt::Debug for SharedBatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBatch")
            .field("arch", &self.ctx.arch)
            .field("len", &self.len())
            .field("holders", &self.holders())
            .finish()
    }
}
