//! RISC-V Trap Entry
//!
//! `ecall` with the request in `a0`..`a7`. The kernel returns the reply in
//! the same registers.

use core::arch::{asm, global_asm};
use core::convert::Infallible;

use crate::syscall::{Trap, TrapFrame};

#[cfg(target_arch = "riscv32")]
global_asm!(include_str!("trampoline32.S"));
#[cfg(target_arch = "riscv64")]
global_asm!(include_str!("trampoline64.S"));

/// Traps into the running kernel with `ecall`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

impl Trap for Native {
    type Error = Infallible;

    #[inline]
    fn trap(&mut self, frame: &mut TrapFrame) -> Result<(), Infallible> {
        let [a0, a1, a2, a3, a4, a5, a6, a7] = frame.regs_mut();

        // SAFETY:
        // - `ecall` is the defined user-to-kernel transition
        // - The kernel only rewrites a0-a7, all declared inout
        // - Memory may change under us (IPC buffers), so no `nomem`
        unsafe {
            asm!(
                "ecall",
                inout("a0") *a0,
                inout("a1") *a1,
                inout("a2") *a2,
                inout("a3") *a3,
                inout("a4") *a4,
                inout("a5") *a5,
                inout("a6") *a6,
                inout("a7") *a7,
                options(nostack),
            );
        }
        Ok(())
    }
}
