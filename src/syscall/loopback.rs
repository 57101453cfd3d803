//! Loopback Trap
//!
//! A [`Trap`] that never leaves the current thread: the "kernel" is a
//! closure from request registers to reply registers. Typed wrappers use it
//! to test their encoding and decoding without a kernel underneath.

use core::convert::Infallible;

use super::trampoline::{Trap, TrapFrame};
use super::vector::WORDS;

/// Stub trap handler backed by a closure.
pub struct Loopback<F> {
    handler: F,
}

impl<F> Loopback<F>
where
    F: FnMut(&[usize; WORDS]) -> [usize; WORDS],
{
    /// Create a loopback that answers every trap with `handler(request)`.
    pub const fn new(handler: F) -> Self {
        Self { handler }
    }

    /// Take the handler back.
    pub fn into_inner(self) -> F {
        self.handler
    }
}

impl<F> Trap for Loopback<F>
where
    F: FnMut(&[usize; WORDS]) -> [usize; WORDS],
{
    type Error = Infallible;

    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), Infallible> {
        let reply = (self.handler)(frame.regs());
        *frame.regs_mut() = reply;
        Ok(())
    }
}
