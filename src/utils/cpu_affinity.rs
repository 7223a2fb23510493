//! Keeps a timed kernel call on the core it started on.
//!
//! A dot product over a few thousand f64s finishes in microseconds, so one
//! migration mid-call dominates the sample. Linux binds with
//! `sched_setaffinity`; elsewhere the guard records that nothing was bound.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem::{size_of, zeroed};

    pub type Mask = libc::cpu_set_t;

    /// Bind the calling thread to the core it is running on.
    /// Returns that core and the mask to put back afterwards.
    pub fn bind_to_current() -> Option<(usize, Mask)> {
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu < 0 {
                return None;
            }

            let mut previous: Mask = zeroed();
            if libc::sched_getaffinity(0, size_of::<Mask>(), &mut previous) != 0 {
                return None;
            }

            let mut only: Mask = zeroed();
            libc::CPU_ZERO(&mut only);
            libc::CPU_SET(cpu as usize, &mut only);
            (libc::sched_setaffinity(0, size_of::<Mask>(), &only) == 0).then_some((cpu as usize, previous))
        }
    }

    pub fn restore(previous: &Mask) {
        let rc = unsafe { libc::sched_setaffinity(0, size_of::<Mask>(), previous) };
        if rc != 0 {
            log::warn!("failed to restore CPU affinity after a pinned measurement");
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Mask = ();

    pub fn bind_to_current() -> Option<(usize, Mask)> {
        None
    }

    pub fn restore(_previous: &Mask) {}
}

/// Binds the measuring thread to its current core until dropped.
pub struct CpuPinGuard {
    bound: Option<(usize, platform::Mask)>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let bound = platform::bind_to_current();
        if bound.is_none() {
            log::trace!("CPU pinning unavailable, measuring unpinned");
        }
        Self { bound }
    }

    /// Core the thread is bound to, if binding succeeded
    pub fn core_id(&self) -> Option<usize> {
        self.bound.as_ref().map(|(core, _)| *core)
    }

    pub fn is_pinned(&self) -> bool {
        self.bound.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some((_, previous)) = &self.bound {
            platform::restore(previous);
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_reports_core() {
        let guard = CpuPinGuard::new();
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_pin_guard_restores_affinity() {
        use std::mem::{size_of, zeroed};

        let read_mask = || unsafe {
            let mut mask: libc::cpu_set_t = zeroed();
            assert_eq!(libc::sched_getaffinity(0, size_of::<libc::cpu_set_t>(), &mut mask), 0);
            (0..libc::CPU_SETSIZE as usize)
                .filter(|&cpu| libc::CPU_ISSET(cpu, &mask))
                .collect::<Vec<_>>()
        };

        let before = read_mask();
        {
            let guard = CpuPinGuard::new();
            if let Some(core) = guard.core_id() {
                assert_eq!(read_mask(), [core]);
            }
        }
        assert_eq!(read_mask(), before);
    }
}
