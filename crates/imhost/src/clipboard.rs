//! Clipboard bridge between the GUI library and the host clipboard.

use std::sync::Arc;

use tracing::trace;

use crate::context::ClipboardBackend;
use crate::host::Clipboard;

/// [`ClipboardBackend`] that reads through to the host clipboard.
///
/// Every read refreshes a cached copy and lends it out, so the GUI library
/// gets text that stays valid until it asks again. Writes go straight to the
/// host.
pub struct HostClipboardBridge {
    clipboard: Arc<dyn Clipboard>,
    cache: String,
}

impl HostClipboardBridge {
    /// Bridge onto `clipboard`.
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            cache: String::new(),
        }
    }

    /// Text returned by the last read.
    pub fn cached(&self) -> &str {
        &self.cache
    }
}

impl ClipboardBackend for HostClipboardBridge {
    fn get(&mut self) -> Option<&str> {
        self.cache = self.clipboard.text();
        trace!(len = self.cache.len(), "clipboard read");
        if self.cache.is_empty() {
            None
        } else {
            Some(&self.cache)
        }
    }

    fn set(&mut self, text: &str) {
        trace!(len = text.len(), "clipboard write");
        self.clipboard.set_text(text);
    }
}

impl std::fmt::Debug for HostClipboardBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostClipboardBridge")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Board(Mutex<String>);

    impl Clipboard for Board {
        fn text(&self) -> String {
            self.0.lock().clone()
        }
        fn set_text(&self, text: &str) {
            *self.0.lock() = text.to_owned();
        }
    }

    #[test]
    fn reads_refresh_the_cache() {
        let board = Arc::new(Board::default());
        let mut bridge = HostClipboardBridge::new(board.clone());

        *board.0.lock() = "first".into();
        assert_eq!(bridge.get(), Some("first"));

        *board.0.lock() = "second".into();
        assert_eq!(bridge.cached(), "first");
        assert_eq!(bridge.get(), Some("second"));
        assert_eq!(bridge.cached(), "second");
    }

    #[test]
    fn empty_clipboard_reads_as_none() {
        let mut bridge = HostClipboardBridge::new(Arc::new(Board::default()));
        assert_eq!(bridge.get(), None);
    }

    #[test]
    fn writes_go_through_immediately() {
        let board = Arc::new(Board::default());
        let mut bridge = HostClipboardBridge::new(board.clone());
        bridge.set("copied");
        assert_eq!(board.text(), "copied");
        assert_eq!(bridge.get(), Some("copied"));
    }
}
