use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use wrap_logging::wrap_debug;

use crate::LogoFile;

/// Book-keeping for live preview references, standing in for the browser's
/// object-URL table. Tests use [`live_count`] to prove that every acquired
/// reference is released exactly once.
///
/// [`live_count`]: PreviewRegistry::live_count
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    next_id: AtomicU64,
    live: Mutex<HashSet<u64>>,
}

impl PreviewRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn create(self: &Arc<Self>) -> PreviewHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.live.lock().expect("preview registry lock").insert(id);
        PreviewHandle {
            id,
            token: format!("preview://{id}"),
            registry: Arc::downgrade(self),
        }
    }

    fn release(&self, id: u64) {
        let removed = self.live.lock().expect("preview registry lock").remove(&id);
        debug_assert!(removed, "preview {id} released twice");
        wrap_debug!("preview {} released", id);
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().expect("preview registry lock").len()
    }
}

/// A revocable reference to displayable logo data. The underlying registry
/// entry is released when the handle drops, so replacement, explicit clear
/// and intake teardown all free the resource through the same path.
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    token: String,
    registry: Weak<PreviewRegistry>,
}

impl PreviewHandle {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.release(self.id);
        }
    }
}

/// Owns the current logo and its preview reference, 1:1. At most one live
/// handle exists per intake.
pub struct LogoIntake {
    registry: Arc<PreviewRegistry>,
    current: Option<(LogoFile, PreviewHandle)>,
}

impl LogoIntake {
    pub fn new(registry: Arc<PreviewRegistry>) -> Self {
        Self {
            registry,
            current: None,
        }
    }

    /// Replaces the current logo. A `None` or non-`image/*` file clears it.
    /// Any existing preview is released before a replacement is created.
    pub fn set_logo(&mut self, file: Option<LogoFile>) -> Option<&PreviewHandle> {
        self.current = None;
        let accepted = file.filter(LogoFile::is_image);
        self.current = accepted.map(|file| {
            let handle = self.registry.create();
            (file, handle)
        });
        self.preview()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.current.as_ref().map(|(_, handle)| handle)
    }

    pub fn logo(&self) -> Option<&LogoFile> {
        self.current.as_ref().map(|(file, _)| file)
    }
}
