//! Syscall Trampoline
//!
//! Portable rendition of the trap path. The raw architecture shims in
//! [`crate::arch`] run the same two steps in assembly; this module runs them
//! over a [`Trap`] so that every backend (native, hosted, test stubs) shares
//! one marshalling routine.
//!
//! # State Machine
//! ```text
//!   Armed ──trap──▶ Returning ──store reply──▶ (return to caller)
//! ```
//! - *Armed*: the 8 request words sit in the frame registers and the reply
//!   slot holds the caller's buffer pointer.
//! - *Returning*: the trap came back; the slot is read once and the 8
//!   registers are stored through it in index order.
//!
//! # Security Considerations
//! - The only unsafe step is the single store through the reply slot
//! - All safe entry points derive the slot from `&mut ResultVector`
//! - A failed trap never touches the reply buffer

use super::vector::{ArgVector, ResultVector, WORDS};

/// Register image handed to a [`Trap`] while the call is in flight.
///
/// Mirrors what the kernel sees on a real trap: eight argument registers it
/// may overwrite, and the caller's stack slot holding the reply pointer,
/// which it may inspect but not move.
#[repr(C)]
#[derive(Debug)]
pub struct TrapFrame {
    regs: [usize; WORDS],
    reply_slot: *mut ResultVector,
}

impl TrapFrame {
    /// Arm a frame: load the request into the registers and park the reply
    /// pointer in the stack slot.
    #[inline]
    fn arm(args: ArgVector, reply_slot: *mut ResultVector) -> Self {
        Self {
            regs: args.into_words(),
            reply_slot,
        }
    }

    /// Current register contents: the request before the trap, the reply
    /// after it.
    #[inline]
    pub fn regs(&self) -> &[usize; WORDS] {
        &self.regs
    }

    /// Registers as the kernel writes them.
    #[inline]
    pub fn regs_mut(&mut self) -> &mut [usize; WORDS] {
        &mut self.regs
    }

    /// Register 0.
    #[inline]
    pub fn tag(&self) -> usize {
        self.regs[0]
    }

    /// The pointer the caller parked in the stack slot.
    #[inline]
    pub fn reply_slot(&self) -> *const ResultVector {
        self.reply_slot
    }
}

/// Something that can take a frame across the privilege boundary and back.
///
/// Implementations read the request from [`TrapFrame::regs`] and leave the
/// reply in [`TrapFrame::regs_mut`]. They must not interpret the words.
pub trait Trap {
    /// Failure of the transfer itself. Kernel-reported failures are reply
    /// data, not errors.
    type Error;

    /// Perform one synchronous trap.
    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), Self::Error>;
}

impl<T: Trap + ?Sized> Trap for &mut T {
    type Error = T::Error;

    #[inline]
    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), Self::Error> {
        (**self).trap(frame)
    }
}

/// Run one syscall through `trap`, storing the reply through `reply_slot`.
///
/// # Safety
/// - `reply_slot` must be non-null, aligned for `usize`, and valid for a
///   write of [`WORDS`] machine words
/// - The buffer must stay valid until this function returns
///
/// Nothing is checked in release builds; use [`invoke`] or [`invoke_into`]
/// unless you are bridging a raw calling convention.
pub unsafe fn trampoline<T: Trap + ?Sized>(
    trap: &mut T,
    args: ArgVector,
    reply_slot: *mut ResultVector,
) -> Result<(), T::Error> {
    let mut frame = TrapFrame::arm(args, reply_slot);

    trap.trap(&mut frame)?;

    let slot = frame.reply_slot;
    debug_assert!(!slot.is_null(), "reply slot is null");
    debug_assert_eq!(
        slot as usize % core::mem::align_of::<usize>(),
        0,
        "reply slot is misaligned"
    );

    // SAFETY:
    // - Caller guarantees the slot points at a writable 8-word buffer
    // - The slot is read from the frame after the trap, as the raw shims do
    // - Exactly one store of the whole vector
    unsafe { slot.write(ResultVector::new(frame.regs)) };
    Ok(())
}

/// Run one syscall and write the reply into `reply`.
///
/// On error `reply` keeps its previous contents.
#[inline]
pub fn invoke_into<T: Trap + ?Sized>(
    trap: &mut T,
    args: &ArgVector,
    reply: &mut ResultVector,
) -> Result<(), T::Error> {
    // SAFETY: a `&mut ResultVector` is non-null, aligned and exclusively ours
    // for the whole call.
    unsafe { trampoline(trap, *args, reply) }
}

/// Run one syscall and return the reply by value.
#[inline]
pub fn invoke<T: Trap + ?Sized>(trap: &mut T, args: &ArgVector) -> Result<ResultVector, T::Error> {
    let mut reply = ResultVector::zeroed();
    invoke_into(trap, args, &mut reply)?;
    Ok(reply)
}
