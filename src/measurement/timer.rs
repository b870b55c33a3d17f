//! Platform-specific cycle counter reads.
//!
//! Provides the two measurement primitives:
//! - x86_64: `lfence; rdtsc` (start) and `rdtscp` (end)
//! - Fallback: constant 0 on all other architectures

use std::hint::black_box as std_black_box;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Wrap the timed region in this to prevent the compiler from optimizing
/// away the computation or reordering it relative to the counter reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Read the cycle counter at the start of a timed region.
///
/// On x86_64 this executes `lfence; rdtsc`: the fence waits for all prior
/// instructions to complete, so out-of-order execution cannot hoist work
/// from the timed region ahead of the read.
///
/// On other architectures this returns 0.
#[inline]
pub fn bench_start() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        bench_start_x86_64()
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        0
    }
}

/// Read the cycle counter at the end of a timed region.
///
/// On x86_64 this executes `rdtscp`, which waits until all prior
/// instructions have executed before sampling the counter. Unlike
/// [`bench_start`] there is no trailing fence: the read itself may be
/// reordered ahead of unrelated subsequent instructions, trading a little
/// precision for lower overhead. This asymmetry is why start and end are
/// two functions rather than one.
///
/// On other architectures this returns 0.
#[inline]
pub fn bench_end() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        bench_end_x86_64()
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        0
    }
}

/// x86_64 start read using lfence + rdtsc.
#[cfg(target_arch = "x86_64")]
#[inline]
fn bench_start_x86_64() -> u64 {
    // Compiler fence to prevent reordering
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);

    let cycles: u64;
    unsafe {
        // lfence serializes instruction execution
        // rdtsc reads the timestamp counter
        std::arch::asm!(
            "lfence",
            "rdtsc",
            "shl rdx, 32",
            "or rax, rdx",
            out("rax") cycles,
            out("rdx") _,
            options(nostack, nomem),
        );
    }

    // Compiler fence after measurement
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);

    cycles
}

/// x86_64 end read using rdtscp.
#[cfg(target_arch = "x86_64")]
#[inline]
fn bench_end_x86_64() -> u64 {
    // Compiler fence to prevent reordering
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);

    let cycles: u64;
    unsafe {
        // rdtscp waits for prior instructions to execute, then reads the
        // counter; no fence afterwards so the read stays cheap
        std::arch::asm!(
            "rdtscp",
            "shl rdx, 32",
            "or rax, rdx",
            out("rax") cycles,
            out("rdx") _,
            out("ecx") _,
            options(nostack, nomem),
        );
    }

    // Compiler fence after measurement
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn test_reads_monotonic() {
        for _ in 0..1000 {
            let a = bench_start();
            let b = bench_end();
            assert!(b >= a, "bench_end ({b}) earlier than bench_start ({a})");
        }
    }

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn test_counter_advances() {
        let a = bench_start();
        for i in 0..10_000u64 {
            black_box(i.wrapping_mul(i));
        }
        let b = bench_end();
        assert!(b > a, "counter did not advance across real work");
    }

    #[test]
    #[cfg(not(target_arch = "x86_64"))]
    fn test_fallback_returns_zero() {
        assert_eq!(bench_start(), 0);
        assert_eq!(bench_end(), 0);
    }
}
