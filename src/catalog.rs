// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Catalog layout.
//!
//! Specify the layout of catalog snapshots, i.e., the literal data that
//! describes every repository and gist shown in the portfolio.
//!
//! # Snapshots
//!
//! A catalog __snapshot__ is a TOML document with three arrays of tables:
//! `repository`, `gist_type`, and `gist`. Snapshots are plain reference data.
//! Nothing here sorts, groups, or recolors anything. That happens once when a
//! [`Portfolio`](crate::portfolio::Portfolio) is built from a snapshot.
//!
//! Different pages of the portfolio used to carry slightly different copies of
//! the same data. Here they are all just snapshots of one schema, so a variant
//! is a different file rather than a different code path. The main snapshot
//! ships inside the crate, see [`CatalogData::builtin`].

use crate::color::HueKey;

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, instrument};

const BUILTIN_SNAPSHOT: &str = include_str!("../data/portfolio.toml");

/// Full catalog snapshot.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct CatalogData {
    /// Repository entries in authored order.
    #[serde(rename = "repository", default)]
    pub repositories: Vec<Repository>,

    /// Known gist categories and their display colors.
    #[serde(rename = "gist_type", default)]
    pub gist_types: Vec<GistType>,

    /// Gist entries in authored order.
    #[serde(rename = "gist", default)]
    pub gists: Vec<Gist>,
}

impl CatalogData {
    /// Catalog snapshot bundled with the crate.
    ///
    /// # Errors
    ///
    /// - Return [`CatalogError::Deserialize`] if bundled snapshot is invalid.
    pub fn builtin() -> Result<Self> {
        BUILTIN_SNAPSHOT.parse()
    }

    /// Load catalog snapshot from file.
    ///
    /// # Errors
    ///
    /// - Return [`CatalogError::ReadFile`] if snapshot file cannot be read.
    /// - Return [`CatalogError::Deserialize`] if snapshot is invalid.
    #[instrument(skip(path), level = "debug")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("load catalog snapshot: {:?}", path.display());
        let content = read_to_string(path).map_err(|err| CatalogError::ReadFile {
            source: err,
            path: path.to_path_buf(),
        })?;

        content.parse()
    }
}

impl FromStr for CatalogData {
    type Err = CatalogError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        toml::de::from_str(data).map_err(CatalogError::Deserialize)
    }
}

impl Display for CatalogData {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(CatalogError::Serialize)?
                .as_str(),
        )
    }
}

/// Repository or project entry.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct Repository {
    /// Short identifier, also used as tie-breaker when sorting.
    pub name: String,

    /// Display name.
    pub name_full: String,

    /// Free text description. May contain trusted markup.
    pub description: String,

    /// Subtype label, e.g., "Command line application".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Ordered tag listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Hex color string. Missing or malformed colors sort as opaque black.
    #[serde(default)]
    pub color: String,
}

impl Repository {
    /// Hue of repository color.
    pub fn hue_key(&self) -> HueKey {
        HueKey::from_hex(&self.color)
    }
}

/// Gist entry.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct Gist {
    /// Display name.
    pub name: String,

    /// File name shown for the gist, also used as its sort key.
    pub main_file: String,

    /// Free text description. May contain trusted markup.
    pub description: String,

    /// Link to the gist.
    pub url: String,

    /// Category key. Need not be listed in any [`GistType`].
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered tag listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Gist category with its display color.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct GistType {
    /// Category key matched against [`Gist::kind`].
    #[serde(rename = "type")]
    pub kind: String,

    /// Hex color string.
    pub color: String,
}

/// Entry that can be annotated with info text and tags.
pub trait Tagged {
    /// Subtype label, if any.
    fn info(&self) -> Option<&str>;

    /// Ordered tags, empty if absent.
    fn tags(&self) -> &[String];
}

impl Tagged for Repository {
    fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

impl Tagged for Gist {
    fn info(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Catalog error types.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Snapshot file cannot be read.
    #[error("failed to read catalog snapshot at {:?}", path.display())]
    ReadFile {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to deserialize snapshot.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize snapshot.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

impl From<CatalogError> for FmtError {
    fn from(_: CatalogError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
