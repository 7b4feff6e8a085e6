/// Reads the hardware free-running cycle counter.
///
/// Monotonic between two reads on the same core under normal operation;
/// not comparable across cores or processes.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn read_timestamp() -> u64 {
    // RDTSC has no memory side effects and is readable from user mode.
    unsafe { std::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "x86")]
#[inline]
pub fn read_timestamp() -> u64 {
    unsafe { std::arch::x86::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline]
pub fn read_timestamp() -> u64 {
    let cnt: u64;
    // CNTVCT_EL0, the generic-timer virtual count, readable from EL0.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nomem, nostack));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
compile_error!("uid32: no cycle counter source for this target architecture");
