//! Secure handling of prompted secrets.
//!
//! [`Secret`] wraps a prompted string so that its memory is cleared on drop
//! (`zeroize`) and, where the platform permits, locked with `mlock()` so it
//! cannot be swapped to disk while held.
//!
//! ## Platform Support
//!
//! - **Unix**: locks pages with `mlock()`
//! - **Other**: logs a warning and continues without locking
//!
//! Memory locking may require elevated permissions on some systems, so a
//! lock failure is logged but never aborts the run.

use std::fmt;
use std::ptr::NonNull;

use zeroize::Zeroizing;

/// Result of a memory lock operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockResult {
    /// Memory was successfully locked
    Locked,
    /// Memory locking failed (warning logged, continuing without lock)
    Failed,
    /// Memory locking not supported on this platform
    Unsupported,
}

/// Lock a memory region to prevent it from being swapped to disk.
///
/// # Safety
/// The caller must ensure that `ptr` points to valid memory of at least
/// `len` bytes.
unsafe fn mlock(ptr: NonNull<u8>, len: usize) -> LockResult {
    if len == 0 {
        return LockResult::Locked;
    }

    #[cfg(unix)]
    {
        let result = libc::mlock(ptr.as_ptr() as *const libc::c_void, len);
        if result == 0 {
            tracing::debug!("locked {} bytes of secret memory", len);
            LockResult::Locked
        } else {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            tracing::warn!(
                "failed to lock secret memory (errno {}); it may be swapped to disk",
                errno
            );
            LockResult::Failed
        }
    }

    #[cfg(not(unix))]
    {
        tracing::warn!("memory locking not supported on this platform");
        LockResult::Unsupported
    }
}

/// Unlock a previously locked memory region.
///
/// # Safety
/// `ptr` must point to valid memory of at least `len` bytes that was
/// previously locked with `mlock()`.
unsafe fn munlock(ptr: NonNull<u8>, len: usize) {
    if len == 0 {
        return;
    }

    #[cfg(unix)]
    {
        // Non-zero means the region was already unlocked; the memory is
        // about to be dropped either way.
        let _ = libc::munlock(ptr.as_ptr() as *const libc::c_void, len);
    }

    #[cfg(not(unix))]
    let _ = (ptr, len);
}

/// Locks memory on creation and unlocks on drop.
#[derive(Debug)]
struct LockedRegion {
    ptr: NonNull<u8>,
    len: usize,
    was_locked: bool,
}

impl LockedRegion {
    /// # Safety
    /// `ptr` must point to valid memory of at least `len` bytes that
    /// outlives this region.
    unsafe fn new(ptr: NonNull<u8>, len: usize) -> Self {
        let lock_result = mlock(ptr, len);
        Self {
            ptr,
            len,
            was_locked: lock_result == LockResult::Locked,
        }
    }

    fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            was_locked: false,
        }
    }
}

impl Drop for LockedRegion {
    fn drop(&mut self) {
        if self.was_locked {
            // SAFETY: only memory we successfully locked is unlocked here,
            // and the owning Secret keeps it valid until after this drop.
            unsafe {
                munlock(self.ptr, self.len);
            }
        }
    }
}

// SAFETY: the pointer is never dereferenced, only passed to the OS memory
// locking calls.
unsafe impl Send for LockedRegion {}
unsafe impl Sync for LockedRegion {}

/// A prompted secret.
///
/// The backing memory is locked against swapping while the secret is alive
/// and zeroized when it is dropped. Field order matters: the region must
/// unlock before the string deallocates.
pub struct Secret {
    region: LockedRegion,
    value: Zeroizing<String>,
}

impl Secret {
    pub fn new(value: Zeroizing<String>) -> Self {
        let region = match NonNull::new(value.as_ptr() as *mut u8) {
            Some(ptr) if !value.is_empty() => {
                // SAFETY: the string buffer stays valid for the lifetime of
                // this Secret; moves relocate the String, not its heap
                // buffer.
                unsafe { LockedRegion::new(ptr, value.len()) }
            }
            _ => LockedRegion::empty(),
        };
        Self { region, value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the backing memory is actually locked.
    pub fn is_locked(&self) -> bool {
        self.region.was_locked
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_unlock_basic() {
        let data = vec![0u8; 4096];
        let ptr = NonNull::new(data.as_ptr() as *mut u8).unwrap();

        // SAFETY: data is valid for the duration of this test
        unsafe {
            // Whether the lock succeeds depends on platform permissions;
            // just verify it never panics.
            let result = mlock(ptr, data.len());
            assert!(matches!(
                result,
                LockResult::Locked | LockResult::Failed | LockResult::Unsupported
            ));

            if result == LockResult::Locked {
                munlock(ptr, data.len());
            }
        }
    }

    #[test]
    fn test_secret_round_trip() {
        let secret = Secret::new(Zeroizing::new("hunter2".to_string()));
        assert_eq!(secret.as_str(), "hunter2");

        // Lock state depends on permissions; dropping must not panic
        // either way.
        let _ = secret.is_locked();
        drop(secret);
    }

    #[test]
    fn test_empty_secret() {
        let secret = Secret::new(Zeroizing::new(String::new()));
        assert_eq!(secret.as_str(), "");
        assert!(!secret.is_locked());
    }

    #[test]
    fn test_secret_moves_keep_value() {
        let secret = Secret::new(Zeroizing::new("correct horse".to_string()));
        let moved = secret;
        assert_eq!(moved.as_str(), "correct horse");
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = Secret::new(Zeroizing::new("hunter2".to_string()));
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("hunter2"));
    }
}
