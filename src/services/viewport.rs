//! Content viewport seam for TabShell.
//!
//! The engine never renders external content itself. Load requests are
//! handed to a [`ContentViewport`] together with the tab's mute flag, and
//! the embedder reports back through the engine's `complete_load`.

/// Sink for external-content load requests issued by the engine.
///
/// `sequence` is the tab's load counter at request time; the embedder must
/// echo it back with the completion so stale loads can be discarded.
pub trait ContentViewport {
    fn load(&mut self, tab_id: &str, sequence: u64, url: &str, muted: bool);
    fn set_muted(&mut self, tab_id: &str, muted: bool);
}

/// Viewport that discards all requests. Used when no embedder is attached.
pub struct NullViewport;

impl ContentViewport for NullViewport {
    fn load(&mut self, _tab_id: &str, _sequence: u64, _url: &str, _muted: bool) {}

    fn set_muted(&mut self, _tab_id: &str, _muted: bool) {}
}
