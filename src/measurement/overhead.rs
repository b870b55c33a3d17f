//! Calibration of the fixed cost of a counter read pair.

use super::timer::{bench_end, bench_start};

/// Default number of calibration trials used by [`tsc_overhead`].
///
/// Large enough that the minimum delta is stable against scheduling noise,
/// small enough that calibration finishes in single-digit milliseconds on
/// modern hardware.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Measure the cycle overhead of a [`bench_start`]/[`bench_end`] pair.
///
/// Runs [`DEFAULT_TRIALS`] back-to-back read pairs and returns the minimum
/// observed delta. Subtract this value from raw deltas to accurately
/// benchmark short regions; the reads themselves cost a few dozen cycles.
///
/// The minimum is the right statistic here: preemption, interrupts, and
/// cache misses only ever inflate a trial, so across many trials the
/// minimum converges to the fixed cost of the pair with the pipeline warm.
///
/// Recomputed fresh on every call, nothing is cached. On architectures
/// without the counter both reads return 0, so this returns 0.
pub fn tsc_overhead() -> u64 {
    overhead_with_trials(DEFAULT_TRIALS)
}

/// Measure the read-pair overhead with an explicit trial count.
///
/// Use this to trade calibration time against noise rejection when the
/// default in [`DEFAULT_TRIALS`] does not fit the target environment. The
/// count is clamped to at least 1.
pub fn overhead_with_trials(trials: usize) -> u64 {
    let mut overhead = u64::MAX;

    for _ in 0..trials.max(1) {
        let t0 = bench_start();
        let t1 = bench_end();
        // A wrapped or skewed pair yields a huge delta the minimum discards
        let delta = t1.wrapping_sub(t0);
        if delta < overhead {
            overhead = delta;
        }
    }

    overhead
}
