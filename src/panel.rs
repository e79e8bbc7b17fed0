//! Sidebar panel rendering
//!
//! Turns a scan result into a three-level element tree (date -> source
//! file -> excerpt) the host can mount however it likes. The tree is
//! text-only by construction: excerpt leaves are plain strings, never
//! markup, so embedded link-like syntax cannot inject anything on the
//! host side.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::error::Result;
use crate::host::{Navigator, PanelSurface};
use crate::scanner::FutureNotes;

/// One excerpt list under a source file; `target` navigates to the
/// source note when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    pub label: String,
    pub target: String,
    pub excerpts: Vec<String>,
}

/// One future date with every note that mentions it; `target`
/// navigates to (and, per host policy, creates) the daily note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateItem {
    pub label: String,
    pub target: String,
    pub files: Vec<FileItem>,
}

/// The whole panel, dates ascending. An empty tree is the normal
/// "nothing upcoming" state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PanelTree {
    pub dates: Vec<DateItem>,
}

/// Build the panel tree for a scan result.
///
/// Dates ascend (the result map's key order), sources follow the
/// result map's iteration order, excerpts keep capture order.
pub fn render(notes: &FutureNotes) -> PanelTree {
    let dates = notes
        .iter()
        .map(|(date, sources)| DateItem {
            label: date.clone(),
            target: date.clone(),
            files: sources
                .iter()
                .map(|(source, excerpts)| FileItem {
                    label: source.clone(),
                    target: source.clone(),
                    excerpts: excerpts.clone(),
                })
                .collect(),
        })
        .collect();

    PanelTree { dates }
}

/// Owns the panel's host-facing side: pushes rebuilt trees to the
/// surface and forwards activations to the navigator.
pub struct PanelView<N, S> {
    navigator: N,
    surface: S,
}

impl<N, S> PanelView<N, S>
where
    N: Navigator,
    S: PanelSurface,
{
    pub fn new(navigator: N, surface: S) -> Self {
        Self { navigator, surface }
    }

    /// Rebuild the panel for `notes`. Always a full rebuild, no
    /// diffing.
    pub fn show(&self, notes: &FutureNotes) {
        let tree = render(notes);
        debug!(dates = tree.dates.len(), "rebuilding panel");
        self.surface.set_content(tree);
    }

    /// Forward a click on a date or file item to the host.
    pub async fn activate(&self, target: &str) -> Result<()> {
        self.navigator.open_note(target).await
    }

    /// Re-render on every scan completion until the scanner goes away.
    ///
    /// The initial value is rendered immediately, so the panel is
    /// populated even if no scan completes after mounting.
    pub async fn run(&self, mut updates: watch::Receiver<Arc<FutureNotes>>) {
        let initial = updates.borrow_and_update().clone();
        self.show(&initial);

        while updates.changed().await.is_ok() {
            let notes = updates.borrow_and_update().clone();
            self.show(&notes);
        }
    }
}
