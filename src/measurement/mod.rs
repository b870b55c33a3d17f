//! Cycle counter access and overhead calibration.
//!
//! This module provides:
//! - Paired counter reads with asymmetric ordering guarantees
//! - Self-calibration of the fixed cost of the read pair
//!
//! # Read sequences
//!
//! On x86_64 the two primitives compile to different instruction sequences:
//! - [`bench_start`]: `lfence; rdtsc` - the fence drains the pipeline
//!   before the read, so work from the timed region cannot execute ahead
//!   of it
//! - [`bench_end`]: `rdtscp` - waits for all prior instructions to finish
//!   before sampling the counter, but carries no trailing fence, so the
//!   read stays cheap
//!
//! A symmetric fence on both ends would inflate the measured overhead and
//! distort short measurements; the asymmetry is deliberate.
//!
//! On every other architecture both reads return the constant 0 and the
//! overhead estimate degenerates to 0. The selection happens at compile
//! time with no runtime branching.

mod overhead;
mod timer;

pub use overhead::{overhead_with_trials, tsc_overhead, DEFAULT_TRIALS};
pub use timer::{bench_end, bench_start, black_box};
