/// Returns the logical index of the CPU core the calling thread is
/// executing on.
///
/// Best-effort snapshot: the scheduler may migrate the thread right after
/// this returns.
#[cfg(target_os = "linux")]
#[inline]
pub fn read_core_index() -> u32 {
    (unsafe { libc::sched_getcpu() }) as u32
}

#[cfg(windows)]
#[inline]
pub fn read_core_index() -> u32 {
    unsafe { windows_sys::Win32::System::Threading::GetCurrentProcessorNumber() }
}

#[cfg(not(any(target_os = "linux", windows)))]
compile_error!("uid32: no current-core source for this target OS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_index_is_plausible() {
        // Logical core counts top out far below this on any real machine.
        assert!(read_core_index() < 4096);
    }
}
