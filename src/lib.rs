//! panther-trap - PantherOS Syscall Trampoline
//!
//! The single routine through which user code crosses into the PantherOS
//! microkernel. Eight request words go out in the argument registers, the
//! trap instruction runs, and the eight registers the kernel leaves behind
//! are copied into a caller-owned reply buffer.
//!
//! # Layers
//! - [`arch`]: assembly shims and the `Native` trap (bare-metal targets)
//! - [`syscall`]: request/reply vectors, the trampoline, the [`Trap`] seam
//! - `hosted`: the same path against a kernel in another host process
//!
//! # Security Features
//! - The reply store is the only unsafe dereference, behind checked wrappers
//! - No state is kept between calls
//! - Nothing is interpreted: tags and replies are opaque words
//!
//! # Example
//! ```
//! use panther_trap::{invoke, ArgVector, Loopback};
//!
//! let mut kernel = Loopback::new(|r: &[usize; 8]| [r[0], r[1] + r[2], 0, 0, 0, 0, 0, 0]);
//! let args = ArgVector::from_parts(7, [100, 200, 0, 0, 0, 0, 0]);
//! let reply = invoke(&mut kernel, &args).unwrap();
//! assert_eq!(reply.into_words(), [7, 300, 0, 0, 0, 0, 0, 0]);
//! ```

#![cfg_attr(not(any(test, feature = "hosted")), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod arch;
#[cfg(feature = "hosted")]
pub mod hosted;
pub mod syscall;

pub use syscall::{
    invoke, invoke_into, trampoline, ArgVector, Loopback, ResultVector, Trap, TrapFrame, WORDS,
};

#[cfg(all(
    target_os = "none",
    any(target_arch = "riscv32", target_arch = "riscv64", target_arch = "aarch64")
))]
pub use arch::{syscall, syscall_indirect, Native};
