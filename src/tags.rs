// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Tag counting and tag based filtering.
//!
//! Tags are compared in normalized form: surrounding whitespace trimmed and
//! lowercased. So "Python" on one entry and "python " on another count as the
//! same tag.

use crate::catalog::Tagged;

use std::{
    collections::{BTreeMap, BTreeSet},
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Normalize tag for comparison.
pub fn normalize_tag(tag: impl AsRef<str>) -> String {
    tag.as_ref().trim().to_lowercase()
}

/// Occurrence count of every normalized tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagIndex {
    counts: BTreeMap<String, usize>,
}

impl TagIndex {
    /// Count tags of all given entries.
    pub fn from_entries<'a, T>(entries: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: Tagged + 'a,
    {
        let mut counts = BTreeMap::new();
        for tag in entries.into_iter().flat_map(Tagged::tags) {
            let tag = normalize_tag(tag);
            if tag.is_empty() {
                continue;
            }

            *counts.entry(tag).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Occurrence count of tag, zero if unused.
    pub fn count(&self, tag: impl AsRef<str>) -> usize {
        self.counts.get(&normalize_tag(tag)).copied().unwrap_or(0)
    }

    /// Check if any entry carries tag.
    pub fn contains(&self, tag: impl AsRef<str>) -> bool {
        self.count(tag) > 0
    }

    /// Tag counts sorted alphabetically by tag.
    pub fn into_counts(self) -> Vec<TagCount> {
        self.counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect()
    }
}

/// Tag with its occurrence count.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl Display for TagCount {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        write!(fmt, "{} ({})", self.tag, self.count)
    }
}

/// Set of selected tags.
///
/// An empty selection shows everything. Otherwise an entry is shown if at
/// least one of its tags is selected. Tags that no entry carries should be
/// dropped through [`TagSelection::known_in`] before matching, so a selection
/// of nothing but unknown tags falls back to showing everything.
///
/// # Invariant
///
/// - No duplicate tags.
/// - Tags are kept normalized and sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagSelection {
    tags: BTreeSet<String>,
}

impl TagSelection {
    /// Construct new selection from tags.
    pub fn new(tags: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let tags = tags
            .into_iter()
            .map(normalize_tag)
            .filter(|tag| !tag.is_empty())
            .collect();

        Self { tags }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Check if tag is selected.
    pub fn contains(&self, tag: impl AsRef<str>) -> bool {
        self.tags.contains(&normalize_tag(tag))
    }

    /// Select tag if it is not selected, deselect it otherwise.
    ///
    /// Returns true if tag is selected afterwards. Blank tags are ignored.
    pub fn toggle(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return false;
        }

        if self.tags.remove(&tag) {
            false
        } else {
            self.tags.insert(tag)
        }
    }

    /// Selection restricted to tags present in index.
    pub fn known_in(&self, index: &TagIndex) -> Self {
        let tags = self
            .tags
            .iter()
            .filter(|tag| index.contains(tag))
            .cloned()
            .collect();

        Self { tags }
    }

    /// Check if entry is shown under this selection.
    pub fn matches(&self, entry: &impl Tagged) -> bool {
        self.is_empty() || entry.tags().iter().any(|tag| self.contains(tag))
    }

    /// Iterate over selected tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl FromStr for TagSelection {
    type Err = Infallible;

    /// Parse comma separated tag listing, e.g., "python,library".
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(data.split(',')))
    }
}

impl Display for TagSelection {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(&self.iter().collect::<Vec<_>>().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Repository;
    use pretty_assertions::assert_eq;

    fn tagged(tags: &[&str]) -> Repository {
        Repository {
            tags: Some(tags.iter().map(|tag| tag.to_string()).collect()),
            ..Repository::default()
        }
    }

    #[test]
    fn index_counts_normalized_tags() {
        let repos = [
            tagged(&["python", "library"]),
            tagged(&["Python ", "windows"]),
            tagged(&[]),
            Repository::default(),
        ];
        let index = TagIndex::from_entries(&repos);
        assert_eq!(index.count("PYTHON"), 2);
        assert_eq!(index.count("c++"), 0);

        let result = index
            .into_counts()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(result, ["library (1)", "python (2)", "windows (1)"]);
    }

    #[test]
    fn selection_is_normalized_and_sorted() {
        let selection: TagSelection = "youtube, Python,,python".parse().unwrap();
        assert_eq!(selection.to_string(), "python,youtube");
        assert!(selection.contains("PYTHON"));
    }

    #[test]
    fn empty_selection_shows_everything() {
        let selection = TagSelection::default();
        assert!(selection.matches(&tagged(&["c++"])));
        assert!(selection.matches(&Repository::default()));
    }

    #[test]
    fn selection_shows_entries_with_any_selected_tag() {
        let selection = TagSelection::new(["library", "noise"]);
        assert!(selection.matches(&tagged(&["c++", "Library"])));
        assert!(!selection.matches(&tagged(&["python", "windows"])));
        assert!(!selection.matches(&Repository::default()));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = TagSelection::default();
        assert!(selection.toggle("Python"));
        assert!(selection.toggle("library"));
        assert_eq!(selection.to_string(), "library,python");

        assert!(!selection.toggle(" python"));
        assert_eq!(selection.to_string(), "library");

        assert!(!selection.toggle("  "));
        assert_eq!(selection.to_string(), "library");
    }

    #[test]
    fn unknown_tags_are_dropped_from_selection() {
        let repos = [tagged(&["python", "library"]), tagged(&["c++"])];
        let index = TagIndex::from_entries(&repos);

        let selection = TagSelection::new(["nosuchtag"]).known_in(&index);
        assert!(selection.is_empty());
        assert!(repos.iter().all(|repo| selection.matches(repo)));

        let selection = TagSelection::new(["C++", "nosuchtag"]).known_in(&index);
        assert_eq!(selection.to_string(), "c++");
        assert!(!selection.matches(&repos[0]));
        assert!(selection.matches(&repos[1]));
    }
}
