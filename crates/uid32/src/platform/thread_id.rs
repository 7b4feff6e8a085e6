/// Returns the OS-level identifier of the calling thread.
///
/// Unique among live threads on the machine at the time of the call; the
/// kernel may reuse the value after the thread exits.
#[cfg(target_os = "linux")]
#[inline]
pub fn read_thread_id() -> u32 {
    (unsafe { libc::syscall(libc::SYS_gettid) }) as u32
}

#[cfg(windows)]
#[inline]
pub fn read_thread_id() -> u32 {
    unsafe { windows_sys::Win32::System::Threading::GetCurrentThreadId() }
}

#[cfg(not(any(target_os = "linux", windows)))]
compile_error!("uid32: no thread-id source for this target OS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_within_a_thread() {
        assert_eq!(read_thread_id(), read_thread_id());
    }

    #[test]
    fn distinct_across_live_threads() {
        let here = read_thread_id();
        let there = std::thread::spawn(read_thread_id).join().unwrap();
        assert_ne!(here, there);
    }
}
