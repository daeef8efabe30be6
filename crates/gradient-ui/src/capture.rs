//! Global pointer capture.
//!
//! While a stop is dragged, pointer moves and the release must reach the
//! picker even when the pointer leaves its rect. Capture is a scoped resource:
//! [`PointerCapture::acquire`] hands out a [`CaptureGuard`] and dropping the
//! guard is the only way the owner gives it back.
//!
//! A [`PointerCapture`] lives on [`crate::scene::UiScene`] and is lent to
//! widgets through [`crate::event::EventCtx`]. Clones share the same slot.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a capture holder, allocated once per controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CaptureOwner(u64);

impl CaptureOwner {
    pub fn new() -> Self {
        CaptureOwner(NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for CaptureOwner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared capture slot. At most one owner holds it at a time.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    holder: Rc<Cell<Option<CaptureOwner>>>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn holder(&self) -> Option<CaptureOwner> {
        self.holder.get()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.holder.get().is_some()
    }

    /// Takes the capture for `owner`. Returns `None` while anyone holds it,
    /// including `owner` itself.
    pub fn acquire(&self, owner: CaptureOwner) -> Option<CaptureGuard> {
        if let Some(current) = self.holder.get() {
            log::warn!("pointer capture requested by {owner:?} while held by {current:?}");
            return None;
        }
        self.holder.set(Some(owner));
        log::trace!("pointer capture acquired by {owner:?}");
        Some(CaptureGuard { capture: self.clone(), owner })
    }

    /// Clears the slot regardless of the holder. The holder's guard becomes
    /// inert. Returns the previous holder.
    pub fn force_release(&self) -> Option<CaptureOwner> {
        self.holder.take()
    }
}

/// Proof of capture ownership; releases the capture when dropped.
#[derive(Debug)]
pub struct CaptureGuard {
    capture: PointerCapture,
    owner: CaptureOwner,
}

impl CaptureGuard {
    #[inline]
    pub fn owner(&self) -> CaptureOwner {
        self.owner
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        // A forced release may already have handed the slot to someone else.
        if self.capture.holder.get() == Some(self.owner) {
            self.capture.holder.set(None);
            log::trace!("pointer capture released by {:?}", self.owner);
        }
    }
}
