use std::sync::atomic::{AtomicBool, Ordering};

/// Single in-flight guard for one session.
#[derive(Debug, Default)]
pub struct Latch {
    busy: AtomicBool,
}

impl Latch {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Claim the latch, or `None` when a call is already running.
    pub fn try_acquire(&self) -> Option<LatchGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LatchGuard { latch: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the latch on drop, whether the call succeeded, failed, or was
/// cancelled.
#[derive(Debug)]
pub struct LatchGuard<'a> {
    latch: &'a Latch,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.busy.store(false, Ordering::Release);
    }
}
