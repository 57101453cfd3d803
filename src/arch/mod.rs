//! Architecture Trap Shims
//!
//! Each supported architecture provides:
//! - `_panther_trap` / `_panther_trap_indirect` in assembly
//! - `Native`, a [`Trap`](crate::syscall::Trap) over the raw instruction
//!
//! # Supported Targets
//! - RISC-V (RV32, RV64): `ecall`, registers `a0`..`a7`
//! - AArch64: `svc #0`, registers `x0`..`x7`
//!
//! Only bare-metal builds (`target_os = "none"`) get the shims. Hosted
//! builds for the same architectures use the `hosted` backend instead.
//! Host test runs never assemble them; check each target explicitly:
//! ```text
//! cargo check --no-default-features --target riscv32imac-unknown-none-elf
//! cargo check --no-default-features --target riscv64gc-unknown-none-elf
//! cargo check --no-default-features --target aarch64-unknown-none
//! ```
//! The tests below still read the assembly sources on the host and check
//! the reply stores against the vector layout.

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "none", any(target_arch = "riscv32", target_arch = "riscv64")))] {
        mod riscv;
        mod shim;

        pub use self::riscv::Native;
        pub use self::shim::{syscall, syscall_indirect};
    } else if #[cfg(all(target_os = "none", target_arch = "aarch64"))] {
        mod aarch64;
        mod shim;

        pub use self::aarch64::Native;
        pub use self::shim::{syscall, syscall_indirect};
    }
}

#[cfg(test)]
mod tests {
    use crate::syscall::WORDS;

    const RV32: &str = include_str!("riscv/trampoline32.S");
    const RV64: &str = include_str!("riscv/trampoline64.S");
    const AARCH64: &str = include_str!("aarch64/trampoline.S");

    /// Instruction lines with comments, directives and labels stripped and
    /// whitespace collapsed.
    fn instructions(source: &str, comment: &str) -> Vec<String> {
        source
            .lines()
            .map(|line| line.split(comment).next().unwrap_or("").trim())
            .filter(|line| !line.is_empty() && !line.starts_with('.') && !line.ends_with(':'))
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    fn count(code: &[String], insn: &str) -> usize {
        code.iter().filter(|line| *line == insn).count()
    }

    fn check_symbols(source: &str) {
        assert!(source.contains(".global _panther_trap\n"));
        assert!(source.contains(".global _panther_trap_indirect\n"));
    }

    fn check_riscv(source: &str, load: &str, store: &str, word: usize) {
        check_symbols(source);
        let code = instructions(source, "#");

        assert_eq!(count(&code, "ecall"), 2);
        assert_eq!(count(&code, "ret"), 2);
        // Both shims fetch the reply pointer from the stack after the trap.
        assert_eq!(count(&code, &format!("{} t0, 0(sp)", load)), 2);
        for reg in 0..WORDS {
            let offset = reg * word;
            assert_eq!(count(&code, &format!("{} a{}, {}(t0)", store, reg, offset)), 2);
            assert_eq!(count(&code, &format!("{} a{}, {}(t0)", load, reg, offset)), 1);
        }
    }

    #[test]
    fn test_rv32_reply_layout() {
        check_riscv(RV32, "lw", "sw", 4);
    }

    #[test]
    fn test_rv64_reply_layout() {
        check_riscv(RV64, "ld", "sd", 8);
    }

    #[test]
    fn test_aarch64_reply_layout() {
        check_symbols(AARCH64);
        let code = instructions(AARCH64, "//");

        assert_eq!(count(&code, "svc #0"), 2);
        assert_eq!(count(&code, "ret"), 2);
        assert_eq!(count(&code, "ldr x9, [sp]"), 2);
        for pair in 0..WORDS / 2 {
            let (lo, hi) = (2 * pair, 2 * pair + 1);
            let addr = match pair * 16 {
                0 => "[x9]".to_owned(),
                offset => format!("[x9, #{}]", offset),
            };
            assert_eq!(count(&code, &format!("stp x{}, x{}, {}", lo, hi, addr)), 2);
            assert_eq!(count(&code, &format!("ldp x{}, x{}, {}", lo, hi, addr)), 1);
        }
    }
}
