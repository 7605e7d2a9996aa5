// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Portfolio construction.
//!
//! A __portfolio__ is the read-only view of a catalog snapshot that a page
//! layer renders from. It is built exactly once from [`CatalogData`] and
//! [`Settings`], in this order:
//!
//! 1. Monochrome override, if color display is disabled.
//! 2. Gist type metadata.
//! 3. Repository ordering by hue (and name, depending on [`SortOrder`]).
//! 4. Grouping of gists by type.
//! 5. Ordering of each gist group by file name, ignoring case.
//!
//! Nothing is mutated after construction.

use crate::{
    catalog::{CatalogData, Gist, GistType, Repository},
    config::{SortOrder, Settings},
    tags::{TagCount, TagIndex, TagSelection},
};

use tracing::{debug, info, instrument};

/// Sorted and grouped catalog, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    repositories: Vec<Repository>,
    gist_types: Vec<GistType>,
    gist_groups: GistGroups,
}

impl Portfolio {
    /// Build portfolio from catalog snapshot.
    #[instrument(skip(data, settings), level = "debug")]
    pub fn build(mut data: CatalogData, settings: &Settings) -> Self {
        if !settings.colored {
            apply_monochrome(&mut data, &settings.gray);
        }

        let gist_types = data.gist_types;
        sort_repositories(&mut data.repositories, settings.sort);
        let gist_groups = GistGroups::from_gists(data.gists);

        info!(
            "built portfolio with {} repositories and {} gist groups",
            data.repositories.len(),
            gist_groups.len()
        );

        Self {
            repositories: data.repositories,
            gist_types,
            gist_groups,
        }
    }

    /// Repositories in display order.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Gist categories with their display colors, in authored order.
    pub fn gist_types(&self) -> &[GistType] {
        &self.gist_types
    }

    /// Display color of a gist category, if it is known.
    pub fn gist_type_color(&self, kind: impl AsRef<str>) -> Option<&str> {
        self.gist_types
            .iter()
            .find(|meta| meta.kind == kind.as_ref())
            .map(|meta| meta.color.as_str())
    }

    /// Gists grouped by type.
    pub fn gist_groups(&self) -> &GistGroups {
        &self.gist_groups
    }

    /// Tag counts across all repositories.
    pub fn tag_index(&self) -> Vec<TagCount> {
        TagIndex::from_entries(&self.repositories).into_counts()
    }

    /// Repositories shown under a tag selection, in display order.
    ///
    /// Selected tags that no repository carries are ignored. If none of the
    /// selected tags are known, every repository is shown.
    pub fn repositories_tagged(&self, selection: &TagSelection) -> Vec<&Repository> {
        let known = selection.known_in(&TagIndex::from_entries(&self.repositories));
        if known != *selection {
            debug!("ignoring unknown tags, selection reduced to {:?}", known.to_string());
        }

        self.repositories
            .iter()
            .filter(|repo| known.matches(*repo))
            .collect()
    }
}

/// Replace every repository and gist type color with one gray.
pub fn apply_monochrome(data: &mut CatalogData, gray: &str) {
    debug!("monochrome override with {gray}");
    for repo in &mut data.repositories {
        repo.color = gray.to_owned();
    }

    for meta in &mut data.gist_types {
        meta.color = gray.to_owned();
    }
}

/// Sort repositories in place.
///
/// Sorting is stable. With [`SortOrder::Hue`], repositories of equal hue keep
/// their authored order. [`SortOrder::Name`] orders by display name.
pub fn sort_repositories(repositories: &mut [Repository], order: SortOrder) {
    match order {
        SortOrder::Hue => repositories.sort_by_key(Repository::hue_key),
        SortOrder::HueThenName => repositories.sort_by(|lhs, rhs| {
            lhs.hue_key()
                .cmp(&rhs.hue_key())
                .then_with(|| lhs.name.cmp(&rhs.name))
        }),
        SortOrder::Name => repositories.sort_by(|lhs, rhs| lhs.name_full.cmp(&rhs.name_full)),
    }
}

/// Gists grouped by their type key.
///
/// # Invariant
///
/// - Group order follows the first occurrence of each type in the source.
/// - Every gist is in exactly one group, the one matching its type.
/// - Gists within a group are ordered by lowercased `main_file`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GistGroups {
    groups: Vec<GistGroup>,
}

impl GistGroups {
    /// Group gists by type and sort each group by file name.
    pub fn from_gists(gists: impl IntoIterator<Item = Gist>) -> Self {
        let mut groups: Vec<GistGroup> = Vec::new();
        for gist in gists {
            match groups.iter_mut().find(|group| group.kind == gist.kind) {
                Some(group) => group.gists.push(gist),
                None => groups.push(GistGroup {
                    kind: gist.kind.clone(),
                    gists: vec![gist],
                }),
            }
        }

        for group in &mut groups {
            group
                .gists
                .sort_by_cached_key(|gist| gist.main_file.to_lowercase());
        }

        Self { groups }
    }

    /// Gists of one type, if any gist has that type.
    pub fn get(&self, kind: impl AsRef<str>) -> Option<&[Gist]> {
        self.groups
            .iter()
            .find(|group| group.kind == kind.as_ref())
            .map(|group| group.gists.as_slice())
    }

    /// Iterate over groups in first occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &GistGroup> {
        self.groups.iter()
    }

    /// Type keys in first occurrence order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.kind.as_str())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// All gists sharing one type key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GistGroup {
    pub kind: String,
    pub gists: Vec<Gist>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HueKey;
    use pretty_assertions::assert_eq;

    fn repo(name: &str, color: &str) -> Repository {
        Repository {
            name: name.into(),
            name_full: name.to_uppercase(),
            color: color.into(),
            ..Repository::default()
        }
    }

    fn gist(main_file: &str, kind: &str) -> Gist {
        Gist {
            main_file: main_file.into(),
            kind: kind.into(),
            ..Gist::default()
        }
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|repo| repo.name.as_str()).collect()
    }

    #[test]
    fn sort_by_hue() {
        let mut repos = vec![
            repo("blue", "#0000ff"),
            repo("red", "#ff0000"),
            repo("green", "#00ff00"),
            repo("broken", "#12"),
        ];
        sort_repositories(&mut repos, SortOrder::Hue);
        assert_eq!(names(&repos), ["red", "broken", "green", "blue"]);
    }

    #[test]
    fn sort_by_hue_keeps_authored_order_for_ties() {
        let mut repos = vec![
            repo("c", "#404040"),
            repo("a", "#404040"),
            repo("b", "#404040"),
        ];
        sort_repositories(&mut repos, SortOrder::Hue);
        assert_eq!(names(&repos), ["c", "a", "b"]);
    }

    #[test]
    fn sort_by_hue_then_name_breaks_ties() {
        let mut repos = vec![
            repo("c", "#404040"),
            repo("z", "#0000ff"),
            repo("a", "#404040"),
            repo("b", "#ff0000"),
        ];
        sort_repositories(&mut repos, SortOrder::HueThenName);
        assert_eq!(names(&repos), ["a", "b", "c", "z"]);
    }

    #[test]
    fn sort_by_name_uses_display_name() {
        let mut repos = vec![repo("b", "#ff0000"), repo("a", "#0000ff")];
        repos[0].name_full = "Alpha".into();
        repos[1].name_full = "Beta".into();
        sort_repositories(&mut repos, SortOrder::Name);
        assert_eq!(names(&repos), ["b", "a"]);
    }

    #[test]
    fn monochrome_override_recolors_everything() {
        let mut data = CatalogData {
            repositories: vec![repo("a", "#ff0000"), repo("b", "")],
            gist_types: vec![GistType {
                kind: "python".into(),
                color: "#60c020".into(),
            }],
            gists: vec![],
        };
        apply_monochrome(&mut data, "#404040");
        assert!(data.repositories.iter().all(|repo| repo.color == "#404040"));
        assert!(data.gist_types.iter().all(|meta| meta.color == "#404040"));
    }

    #[test]
    fn group_gists_by_first_occurrence() {
        let groups = GistGroups::from_gists([
            gist("b.js", "javascript"),
            gist("crc.py", "python"),
            gist("A.js", "javascript"),
            gist("x.lisp", "unlisted"),
        ]);

        assert_eq!(
            groups.kinds().collect::<Vec<_>>(),
            ["javascript", "python", "unlisted"]
        );
        let js = groups
            .get("javascript")
            .unwrap()
            .iter()
            .map(|gist| gist.main_file.as_str())
            .collect::<Vec<_>>();
        assert_eq!(js, ["A.js", "b.js"]);
        assert_eq!(groups.get("cpp"), None);
    }

    #[test]
    fn group_sort_ignores_case_and_is_stable() {
        let mut first = gist("Save.js", "javascript");
        first.name = "first".into();
        let mut second = gist("save.js", "javascript");
        second.name = "second".into();

        let groups = GistGroups::from_gists([
            second.clone(),
            gist("bind.js", "javascript"),
            first.clone(),
        ]);
        let result = groups.get("javascript").unwrap();
        assert_eq!(result[0].main_file, "bind.js");
        assert_eq!(result[1], second);
        assert_eq!(result[2], first);
    }

    #[test]
    fn build_honors_colored_setting() {
        let data = CatalogData {
            repositories: vec![
                repo("z", "#ff0000"),
                repo("m", "#00ff00"),
                repo("a", "#0000ff"),
            ],
            gist_types: vec![GistType {
                kind: "cpp".into(),
                color: "#e09a14".into(),
            }],
            gists: vec![gist("ccmd.cpp", "cpp")],
        };

        let colored = Portfolio::build(data.clone(), &Settings::default());
        assert_eq!(names(colored.repositories()), ["z", "m", "a"]);
        assert_eq!(colored.gist_type_color("cpp"), Some("#e09a14"));

        let settings = Settings {
            colored: false,
            ..Settings::default()
        };
        let gray = Portfolio::build(data, &settings);
        assert_eq!(names(gray.repositories()), ["a", "m", "z"]);
        assert_eq!(gray.gist_type_color("cpp"), Some("#404040"));
        let hues = gray
            .repositories()
            .iter()
            .map(Repository::hue_key)
            .collect::<Vec<_>>();
        assert!(hues.iter().all(|hue| *hue == HueKey::from_hex("#404040")));
        assert_eq!(gray.gist_groups().len(), 1);
    }
}
