//! Raw Trampoline Bindings
//!
//! Safe entry points over the assembly shims. These are the calls a typed
//! wrapper makes on real hardware.

use crate::syscall::{ArgVector, ResultVector};

extern "C" {
    /// Request in the 8 argument registers, reply pointer in the ninth
    /// argument, which the C ABI places in the top stack slot.
    fn _panther_trap(
        a0: usize,
        a1: usize,
        a2: usize,
        a3: usize,
        a4: usize,
        a5: usize,
        a6: usize,
        a7: usize,
        reply: *mut ResultVector,
    );

    /// Request loaded from `args`, reply stored through `reply`.
    fn _panther_trap_indirect(args: *const ArgVector, reply: *mut ResultVector);
}

/// Trap into the kernel with `args` and return its reply.
#[inline]
pub fn syscall(args: &ArgVector) -> ResultVector {
    let mut reply = ResultVector::zeroed();
    let [a0, a1, a2, a3, a4, a5, a6, a7] = args.into_words();

    // SAFETY:
    // - `reply` is a live, aligned 8-word local for the whole call
    // - The shim writes exactly those 8 words and nothing else
    unsafe { _panther_trap(a0, a1, a2, a3, a4, a5, a6, a7, &mut reply) };
    reply
}

/// Same as [`syscall`], going through the pointer-taking shim.
#[inline]
pub fn syscall_indirect(args: &ArgVector) -> ResultVector {
    let mut reply = ResultVector::zeroed();

    // SAFETY: `args` is read-only for the call; `reply` as in `syscall`.
    unsafe { _panther_trap_indirect(args, &mut reply) };
    reply
}
