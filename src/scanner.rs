//! Link-graph scan pipeline
//!
//! On every rescan the scanner merges the host's resolved and
//! unresolved link views, classifies link targets against the
//! daily-note naming convention, keeps the strictly-future dates,
//! re-reads each implicated source file and collects bounded excerpts
//! around every literal `[[date]]` mention. The finished result
//! replaces the previous one wholesale; subscribers observe the change
//! through a watch channel.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::date::{classify_as_date, DateToken};
use crate::excerpt::{extract_excerpts, wikilink};
use crate::graph::merge_links;
use crate::host::{Clock, DailyNoteConfig, LinkIndex, Vault};

/// Excerpts of one source file, in order of appearance.
pub type Mentions = Vec<String>;

/// Date token -> source path -> excerpts.
///
/// Only strictly-future dates appear, and every (date, source) entry
/// holds at least one excerpt. BTreeMap keys make date order
/// lexicographic (chronological for the `YYYY-MM-DD` shape) and source
/// order deterministic.
pub type FutureNotes = BTreeMap<String, BTreeMap<String, Mentions>>;

/// Scans the host link graph for mentions of future daily notes.
///
/// All host access goes through the injected traits; the scanner owns
/// no state besides the latest published result and a generation
/// counter guarding overlapping scans.
pub struct GraphScanner<L, V, C, K> {
    links: L,
    vault: V,
    config: C,
    clock: K,
    generation: AtomicU64,
    publisher: watch::Sender<Arc<FutureNotes>>,
}

impl<L, V, C, K> GraphScanner<L, V, C, K>
where
    L: LinkIndex,
    V: Vault,
    C: DailyNoteConfig,
    K: Clock,
{
    pub fn new(links: L, vault: V, config: C, clock: K) -> Self {
        let (publisher, _) = watch::channel(Arc::new(FutureNotes::new()));
        Self {
            links,
            vault,
            config,
            clock,
            generation: AtomicU64::new(0),
            publisher,
        }
    }

    /// Subscribe to scan completions. The receiver always holds the
    /// latest published result, starting from the empty one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<FutureNotes>> {
        self.publisher.subscribe()
    }

    /// The most recently published result.
    pub fn latest(&self) -> Arc<FutureNotes> {
        self.publisher.borrow().clone()
    }

    /// Classify a link-target path against the active naming
    /// convention (see [`classify_as_date`]).
    pub fn classify_target(&self, path: &str) -> Option<DateToken> {
        classify_as_date(path, self.config.date_format().as_deref())
    }

    /// Whether a token lies strictly after today, at day granularity.
    pub fn is_future(&self, token: &DateToken) -> bool {
        token.is_future(self.clock.today())
    }

    /// Run the full scan pipeline and publish the result.
    ///
    /// Never fails outward: unreadable sources are skipped and an
    /// empty result is a valid result. If another rescan starts while
    /// this one is awaiting reads, the older one finishes its work but
    /// skips its publish, so only the newest-started scan is ever
    /// observable.
    #[tracing::instrument(skip(self))]
    pub async fn rescan(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let notes = self.collect_notes().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "scan superseded, skipping publish");
            return;
        }

        debug!(generation, dates = notes.len(), "publishing scan result");
        self.publisher.send_replace(Arc::new(notes));
    }

    async fn collect_notes(&self) -> FutureNotes {
        let merged = merge_links(&self.links.resolved_links(), &self.links.unresolved_links());
        let format = self.config.date_format();
        let today = self.clock.today();

        // Future date text -> sources that link to it. Distinct target
        // paths normalizing to the same token land in one entry.
        let mut future: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (source, targets) in &merged {
            for target in targets.keys() {
                if let Some(token) = classify_as_date(target, format.as_deref()) {
                    if token.is_future(today) {
                        future.entry(token.text).or_default().insert(source.clone());
                    }
                }
            }
        }

        // One read per source per scan, shared across its dates.
        let mut contents: HashMap<String, Option<String>> = HashMap::new();
        let mut notes = FutureNotes::new();

        for (date, sources) in future {
            let pattern = wikilink(&date);
            for source in sources {
                if !contents.contains_key(&source) {
                    let read = match self.vault.read_to_string(&source).await {
                        Ok(content) => Some(content),
                        Err(err) => {
                            debug!(source = %source, error = %err, "skipping unreadable source");
                            None
                        }
                    };
                    contents.insert(source.clone(), read);
                }

                let Some(content) = contents.get(&source).and_then(Option::as_ref) else {
                    continue;
                };

                let excerpts = extract_excerpts(content, &pattern);
                if !excerpts.is_empty() {
                    notes.entry(date.clone()).or_default().insert(source, excerpts);
                }
            }
        }

        notes
    }
}
