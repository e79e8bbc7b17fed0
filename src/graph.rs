//! Link-graph snapshot types and the resolved/unresolved merge

use std::collections::HashMap;

/// Source path -> target path -> link count.
///
/// Mirrors the shape the host's link cache exposes for both the
/// resolved and unresolved views.
pub type LinkMap = HashMap<String, HashMap<String, u64>>;

/// Merge the resolved and unresolved link views into one snapshot.
///
/// Starts from the unresolved view and overlays the resolved one, so
/// for a (source, target) pair present in both the resolved count wins.
/// The result is rebuilt fresh for every scan; nothing is mutated in
/// place across scans.
pub fn merge_links(resolved: &LinkMap, unresolved: &LinkMap) -> LinkMap {
    let mut merged = unresolved.clone();

    for (source, targets) in resolved {
        let entry = merged.entry(source.clone()).or_default();
        for (target, count) in targets {
            entry.insert(target.clone(), *count);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(entries: &[(&str, &[(&str, u64)])]) -> LinkMap {
        entries
            .iter()
            .map(|(source, targets)| {
                (
                    source.to_string(),
                    targets
                        .iter()
                        .map(|(t, n)| (t.to_string(), *n))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_merge_disjoint_sources() {
        let resolved = links(&[("a.md", &[("x.md", 1)])]);
        let unresolved = links(&[("a.md", &[("y.md", 1)]), ("b.md", &[("z.md", 1)])]);

        let merged = merge_links(&resolved, &unresolved);

        let expected = links(&[
            ("a.md", &[("x.md", 1), ("y.md", 1)]),
            ("b.md", &[("z.md", 1)]),
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_resolved_count_wins() {
        let resolved = links(&[("a.md", &[("x.md", 3)])]);
        let unresolved = links(&[("a.md", &[("x.md", 1)])]);

        let merged = merge_links(&resolved, &unresolved);

        assert_eq!(merged["a.md"]["x.md"], 3);
    }

    #[test]
    fn test_merge_empty_views() {
        let merged = merge_links(&LinkMap::new(), &LinkMap::new());
        assert!(merged.is_empty());
    }
}
