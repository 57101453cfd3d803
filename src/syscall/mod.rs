//! System Call Interface
//!
//! User-side half of the kernel boundary: the 8-word request/reply vectors
//! and the trampoline that carries them across a trap.
//!
//! # Calling Convention
//! - Request: 8 words in the 8 argument registers, slot 0 is the tag
//! - Reply: the kernel overwrites the same 8 registers
//! - The trampoline stores those registers into a caller-owned buffer
//!
//! # Non-Goals
//! - Nothing here validates, retries or interprets a syscall
//! - Kernel-reported failures are ordinary reply words

mod loopback;
mod trampoline;
mod vector;

pub use loopback::Loopback;
pub use trampoline::{invoke, invoke_into, trampoline, Trap, TrapFrame};
pub use vector::{ArgVector, ResultVector, WORDS};
