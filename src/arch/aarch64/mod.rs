//! AArch64 Trap Entry
//!
//! `svc #0` with the request in `x0`..`x7`. The kernel returns the reply in
//! the same registers.

use core::arch::{asm, global_asm};
use core::convert::Infallible;

use crate::syscall::{Trap, TrapFrame};

global_asm!(include_str!("trampoline.S"));

/// Traps into the running kernel with `svc #0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

impl Trap for Native {
    type Error = Infallible;

    #[inline]
    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), Infallible> {
        let [x0, x1, x2, x3, x4, x5, x6, x7] = frame.regs_mut();

        // SAFETY:
        // - SVC is the defined EL0-to-EL1 transition
        // - The kernel only rewrites x0-x7, all declared inout
        // - Memory may change under us (IPC buffers), so no `nomem`
        unsafe {
            asm!(
                "svc #0",
                inout("x0") *x0,
                inout("x1") *x1,
                inout("x2") *x2,
                inout("x3") *x3,
                inout("x4") *x4,
                inout("x5") *x5,
                inout("x6") *x6,
                inout("x7") *x7,
                options(nostack),
            );
        }
        Ok(())
    }
}
