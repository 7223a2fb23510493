//! Tick source for the default `cpu_cycles` build of `vector-bench`.
//!
//! Samples are the difference of two reads taken around a single kernel call.

#[cfg(target_arch = "x86")]
use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch;

/// Current tick count.
///
/// x86 reads the TSC between two LFENCEs so the kernel's loads cannot drift
/// across the read. aarch64 reads CNTVCT_EL0, which ticks at a fixed
/// frequency rather than the core clock; its samples are comparable between
/// variants but are not cycles.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        unsafe {
            arch::_mm_lfence();
            let ticks = arch::_rdtsc();
            arch::_mm_lfence();
            ticks
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks) };
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles needs an x86, x86_64 or aarch64 target; build with --features use_time");
    }
}
