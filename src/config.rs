// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the settings file that Folio uses to simplify the
//! process of serialization and deserialization. File I/O is left to the
//! caller to figure out.
//!
//! # General Layout
//!
//! ```toml
//! colored = true
//! gray = "#404040"
//! sort = "hue-then-name"
//! catalog = "$HOME/portfolio/catalog.toml"
//!
//! [markup]
//! has_info = false
//! escape = false
//! ```
//!
//! Every field is optional. Settings are read once, before a
//! [`Portfolio`](crate::portfolio::Portfolio) is built, and never change
//! afterwards.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Gray that replaces every catalog color when color display is disabled.
pub const DEFAULT_GRAY: &str = "#404040";

/// Portfolio settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Show real catalog colors instead of one uniform gray.
    pub colored: bool,

    /// Gray to use when `colored` is off.
    pub gray: String,

    /// Order of repository listing.
    pub sort: SortOrder,

    /// Catalog snapshot to load instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogPath>,

    /// Tag markup rendering options.
    pub markup: MarkupOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            colored: true,
            gray: DEFAULT_GRAY.into(),
            sort: SortOrder::default(),
            catalog: None,
            markup: MarkupOptions::default(),
        }
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut settings: Settings = toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Perform shell expansion on catalog path field.
        if let Some(catalog) = settings.catalog.take() {
            settings.catalog = Some(CatalogPath::new(
                shellexpand::full(catalog.to_string().as_str())
                    .map_err(ConfigError::ShellExpansion)?
                    .into_owned(),
            ));
        }

        Ok(settings)
    }
}

impl Display for Settings {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

/// Ordering applied to the repository listing.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Ascending hue only. Equal hues keep authored order.
    Hue,

    /// Ascending hue, then name for equal hues.
    #[default]
    HueThenName,

    /// Name only.
    Name,
}

/// Options for tag markup renderers.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkupOptions {
    /// Render entry info text as a leading span.
    pub has_info: bool,

    /// HTML-escape interpolated info and tag text.
    ///
    /// Off by default because catalog text is trusted and may already
    /// contain entities like `&amp;`.
    pub escape: bool,
}

/// Path to a catalog snapshot.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct CatalogPath(PathBuf);

impl CatalogPath {
    /// Construct new catalog path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Treat catalog path as [`Path`] slice.
    pub fn as_path(&self) -> &Path {
        self.0.as_path()
    }
}

impl Display for CatalogPath {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.as_path().to_string_lossy().as_ref())
    }
}

/// Configuration error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}
