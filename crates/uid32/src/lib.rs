//! Cheap 32-byte unique tags built from machine/process/thread telemetry.
//!
//! Every call to [`generate`] packs a hardware cycle-counter snapshot, a
//! stack-address sample, a configurable machine id, the current CPU core
//! index, and the OS thread id — plus an XOR mix word — into a fixed
//! 32-byte [`Uid32`]. Generation is a handful of instructions with no
//! locks and no allocation, which makes it suitable for high-frequency
//! tagging (request ids, span ids, trace correlation).
//!
//! Uniqueness is probabilistic, driven by timestamp-counter entropy. This
//! is **not** a cryptographic identifier: the fields are predictable and
//! the mix word is not an integrity check.
//!
//! ```
//! uid32::set_machine_id(42);
//! let id = uid32::generate();
//! assert_eq!(id.as_bytes().len(), 32);
//! println!("{id}"); // 64 hex digits
//! ```
//!
//! Unsupported targets (no recognized cycle counter, core-index, or
//! thread-id source) fail at build time rather than degrading to a
//! placeholder value at runtime.

pub mod generator;
pub mod machine_id;
mod platform;
pub mod uid;

pub use generator::generate;
pub use machine_id::{machine_id, set_machine_id};
pub use uid::{LEN, OFF_CORE, OFF_MACHINE, OFF_MIX, OFF_STACK, OFF_THREAD, OFF_TIMESTAMP, Uid32};
