//! # Synchronization Utilities
//!
//! Consistent mutex handling for the crate's shared state.
//!
//! The only shared mutable state is the color parse cache. Rust's mutexes
//! become "poisoned" when a thread panics while holding the lock; for a cache
//! the data is still usable (worst case a stale entry), so every lock goes
//! through [`lock_recover`], which recovers instead of propagating the poison.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |
//!
//! ```rust
//! use std::sync::Mutex;
//! use colorful::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// In debug builds a recovered poison is reported through `log::warn!`.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        log::warn!(target: "colorful::sync", "mutex poison recovered");
        e.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_lock_recover_normal_operation() {
        let mutex = Mutex::new(42);
        let guard = lock_recover(&mutex);
        assert_eq!(*guard, 42);
    }

    #[test]
    fn test_lock_recover_after_poison() {
        let mutex = Mutex::new(42);

        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = mutex.lock().unwrap();
            panic!("intentional panic to poison mutex");
        }));

        assert!(mutex.lock().is_err(), "Mutex should be poisoned");

        let guard = lock_recover(&mutex);
        assert_eq!(*guard, 42);
    }

    #[test]
    fn test_lock_recover_allows_mutation_after_poison() {
        let mutex = Mutex::new(vec![1]);

        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut guard = mutex.lock().unwrap();
            guard.push(2);
            panic!("poison mid-update");
        }));

        lock_recover(&mutex).push(3);
        assert_eq!(*lock_recover(&mutex), vec![1, 2, 3]);
    }
}
