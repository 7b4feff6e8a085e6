use std::sync::atomic::{AtomicU32, Ordering};

// Deployment-assigned machine/node identifier. 0 until configured.
static MACHINE_ID: AtomicU32 = AtomicU32::new(0);

/// Overwrites the process-wide machine identifier.
///
/// Visible to every subsequent [`generate`](crate::generate) call on any
/// thread. Concurrent writers race last-writer-wins; nothing stronger is
/// needed because the value carries no cross-field consistency constraint.
pub fn set_machine_id(id: u32) {
    MACHINE_ID.store(id, Ordering::Relaxed);
    tracing::debug!(machine_id = id, "machine id updated");
}

/// Returns the machine identifier as of the instant of the call.
pub fn machine_id() -> u32 {
    MACHINE_ID.load(Ordering::Relaxed)
}
