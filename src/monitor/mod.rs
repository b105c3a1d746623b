// src/monitor/mod.rs
// =============================================================================
// The monitoring pipeline.
//
// - cycle: one pass over every site and every discovered file
// - scheduler: repeats the cycle forever at a fixed interval
// =============================================================================

mod cycle;
mod scheduler;

pub use cycle::{CycleSummary, PollCycle};
pub use scheduler::Scheduler;
