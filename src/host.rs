//! Host interface traits
//!
//! The scanner and panel never reach into the host application
//! directly; every host capability they need (vault reads, link cache
//! snapshots, daily-note configuration, navigation, the panel surface)
//! arrives through one of these narrow traits. Tests drive the whole
//! pipeline with in-memory fakes.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::error::{FutureDatesError, Result};
use crate::graph::LinkMap;
use crate::panel::PanelTree;

/// Read access to note contents by vault-relative path.
///
/// `read_to_string` fails with [`FutureDatesError::NoteNotFound`] when
/// the path no longer resolves to a file; the scanner treats that as a
/// skip, not a failure.
pub trait Vault {
    fn read_to_string(&self, path: &str) -> impl std::future::Future<Output = Result<String>>;
}

/// Snapshot access to the host's link cache.
///
/// Both maps have the same shape: source path -> target path -> number
/// of links from source to target. The count is carried through the
/// merge but the scan only cares about presence.
pub trait LinkIndex {
    fn resolved_links(&self) -> LinkMap;
    fn unresolved_links(&self) -> LinkMap;
}

/// The host's daily-note naming convention, if one is configured.
pub trait DailyNoteConfig {
    /// A chrono `strftime` format string (e.g. `%Y-%m-%d`), or `None`
    /// when the host has no daily-note configuration.
    fn date_format(&self) -> Option<String>;
}

/// Navigation requests back into the host.
pub trait Navigator {
    /// Open or focus the note identified by `target` (a date token or a
    /// source path). The host decides whether a missing note is created.
    fn open_note(&self, target: &str) -> impl std::future::Future<Output = Result<()>>;
}

/// Source of "today" for the future check, injectable for tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock days in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Sink for rendered panel content; the host owns the actual widgets.
pub trait PanelSurface {
    fn set_content(&self, tree: PanelTree);
}

/// [`Vault`] backed by a directory on disk.
///
/// Suits hosts whose vault is a plain folder of markdown files; hosts
/// with their own storage layer implement [`Vault`] directly.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Vault for FsVault {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FutureDatesError::NoteNotFound { path: full })
            }
            Err(e) => Err(e.into()),
        }
    }
}
