//! # tsc-bench
//!
//! Access to the timestamp cycle counter on x86-64 for close to
//! cycle-accurate benchmarking. All recent (think since 2010) generation
//! Intel CPUs provide a global, synchronized cycle counter that is great
//! for benchmarking and time measurement across all cores.
//!
//! The crate exposes three operations:
//! - [`bench_start`] - read the counter at the start of a timed region
//! - [`bench_end`] - read the counter at the end of a timed region
//! - [`tsc_overhead`] - estimate the fixed cost of the two reads themselves
//!
//! `bench_start` and `bench_end` carry deliberately asymmetric ordering
//! guarantees (see [`measurement`] for the exact instruction sequences),
//! which is why they are two functions rather than one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tsc_bench::{bench_start, bench_end, tsc_overhead, black_box};
//!
//! let overhead = tsc_overhead();
//!
//! let start = bench_start();
//! black_box(my_workload());
//! let end = bench_end();
//!
//! let cycles = (end - start).saturating_sub(overhead);
//! println!("workload took {cycles} cycles");
//! # fn my_workload() -> u64 { 42 }
//! ```
//!
//! Subtract the overhead estimate from every raw delta; the two reads cost
//! a few dozen cycles on their own, which dominates short measurements.
//!
//! ## Platform support
//!
//! On x86_64 the counter is read with `rdtsc`/`rdtscp`. On every other
//! architecture all three operations return the constant 0, so dependent
//! code stays portable even where high-resolution timing is unavailable.
//!
//! ## What this crate is not
//!
//! Cycle counts are not converted to seconds - frequency scaling is the
//! caller's responsibility. There is no wall-clock source, no statistics
//! layer, and no benchmark runner here; this is the measurement primitive
//! those tools build on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod measurement;

pub use measurement::{
    bench_end, bench_start, black_box, overhead_with_trials, tsc_overhead, DEFAULT_TRIALS,
};
