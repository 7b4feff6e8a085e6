//! Build-time-selected accessors for the hardware and OS values a UID
//! samples: the cycle counter, the current core index, and the calling
//! thread's id.
//!
//! Each accessor has exactly one implementation per supported target
//! triple; an unsupported target fails the build outright. There is no
//! runtime fallback, since a silently-zero field would be
//! indistinguishable from a real one and weaken uniqueness.

mod core_index;
mod thread_id;
mod timestamp;

pub(crate) use core_index::read_core_index;
pub(crate) use thread_id::read_thread_id;
pub(crate) use timestamp::read_timestamp;
