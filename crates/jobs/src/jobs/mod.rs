//! The five periodic jobs.
//!
//! Each job is a stateless, single-attempt unit of work: one read (and
//! optionally one write) against the Query/Mutation Service or the
//! store, followed by appends to its own log file. Jobs keep no state
//! across invocations and never retry; the external scheduler's next
//! tick is the retry policy.
//!
//! Error handling is per-job, matching the documented contracts:
//!
//! | job             | service/store failure                          |
//! |-----------------|------------------------------------------------|
//! | [`heartbeat`]   | probe failure logged, run still succeeds       |
//! | [`low_stock`]   | logged, reported as a failed outcome           |
//! | [`cleanup`]     | store errors propagate to the invoker          |
//! | [`reminders`]   | logged and returned as an error                |
//! | [`report`]      | logged, reported as a failed outcome           |
//!
//! Log append failures always propagate; a job that cannot record its
//! result has failed.

pub mod cleanup;
pub mod heartbeat;
pub mod low_stock;
pub mod reminders;
pub mod report;
