//! Shared snapshot of the currently displayed segments.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::segments::TextSegment;

/// Single-writer, multi-reader handle to the current segment sequence.
///
/// The scheduler publishes a fresh snapshot each cycle; the renderer
/// takes an `Arc` to the whole sequence, so a repaint never observes a
/// half-replaced line.
#[derive(Clone)]
pub struct SegmentStore {
    inner: Arc<RwLock<Arc<[TextSegment]>>>,
}

impl SegmentStore {
    /// Creates a store holding an empty sequence.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new().into())),
        }
    }

    /// Atomically replaces the current sequence.
    pub fn publish(&self, segments: Vec<TextSegment>) {
        *self.inner.write() = segments.into();
    }

    /// The current sequence.
    pub fn current(&self) -> Arc<[TextSegment]> {
        self.inner.read().clone()
    }
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}
