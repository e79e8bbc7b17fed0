//! Plugin lifecycle
//!
//! Wires the scanner to the host's link-graph update events and the
//! panel view to the scanner's change signal. The host mounts the
//! panel through its own shell; this module only supplies the
//! registration identity and the event loop that keeps everything
//! current.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::host::{Clock, DailyNoteConfig, LinkIndex, Navigator, PanelSurface, Vault};
use crate::panel::PanelView;
use crate::scanner::GraphScanner;

/// Stable identifier the host registers the panel type under.
pub const PANEL_TYPE: &str = "future-dates-panel";

/// Human-readable panel title.
pub const PANEL_TITLE: &str = "Future dates";

/// Identity handed to the host's panel registry. Mounting on first
/// activation and unmounting at shutdown stay host-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelRegistration {
    pub panel_type: &'static str,
    pub title: &'static str,
}

/// The panel registration for this extension.
pub fn registration() -> PanelRegistration {
    PanelRegistration {
        panel_type: PANEL_TYPE,
        title: PANEL_TITLE,
    }
}

/// The assembled extension: one scanner, one panel view.
pub struct FutureDatesPlugin<L, V, C, K, N, S> {
    scanner: GraphScanner<L, V, C, K>,
    view: PanelView<N, S>,
}

impl<L, V, C, K, N, S> FutureDatesPlugin<L, V, C, K, N, S>
where
    L: LinkIndex,
    V: Vault,
    C: DailyNoteConfig,
    K: Clock,
    N: Navigator,
    S: PanelSurface,
{
    pub fn new(scanner: GraphScanner<L, V, C, K>, view: PanelView<N, S>) -> Self {
        Self { scanner, view }
    }

    pub fn scanner(&self) -> &GraphScanner<L, V, C, K> {
        &self.scanner
    }

    /// Drive the extension until the host shuts down.
    ///
    /// `graph_updates` carries one message per link-graph rebuild (the
    /// host's "resolved" signal). One eager scan runs at startup, then
    /// one per event; triggers are awaited sequentially, so scans
    /// driven by this loop never overlap. Dropping the sender ends the
    /// loop and tears the panel down with it.
    pub async fn run(self, mut graph_updates: mpsc::Receiver<()>) {
        let changes = self.scanner.subscribe();

        let scan_loop = async {
            self.scanner.rescan().await;
            while graph_updates.recv().await.is_some() {
                self.scanner.rescan().await;
            }
        };

        tokio::select! {
            _ = scan_loop => {}
            _ = self.view.run(changes) => {}
        }
    }
}
