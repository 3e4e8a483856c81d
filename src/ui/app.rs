//! UI state: the quit flag and access to the published snapshot.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::segments::{SegmentStore, TextSegment};

pub struct App {
    store: SegmentStore,
    should_quit: bool,
}

impl App {
    pub fn new(store: SegmentStore) -> Self {
        Self {
            store,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot for the next repaint.
    pub fn segments(&self) -> Arc<[TextSegment]> {
        self.store.current()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
            self.should_quit = true;
        }
    }
}
