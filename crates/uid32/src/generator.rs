use crate::machine_id;
use crate::platform;
use crate::uid::{self, Uid32};

/// Generates one UID32 value.
///
/// Samples the cycle counter, the address of a local variable in this call
/// frame, the process-wide machine id, the current core index, and the
/// calling thread's id, then packs them with the derived mix word into the
/// fixed 32-byte layout.
///
/// The value is returned by copy. Nothing here blocks, takes a lock, or
/// mutates global state; the only shared read is the machine id, so the
/// function is safe to call from any number of threads at once.
///
/// ```
/// uid32::set_machine_id(42);
/// let id = uid32::generate();
/// println!("{id}");
/// ```
#[inline]
pub fn generate() -> Uid32 {
    let ts = platform::read_timestamp();
    // The counter local doubles as the frame-address sample. The address
    // is entropy only; it means nothing outside this call.
    let stack = &ts as *const u64 as usize as u64;
    let machine = machine_id::machine_id();
    let core = platform::read_core_index();
    let tid = platform::read_thread_id();
    uid::pack(ts, stack, machine, core, tid)
}
