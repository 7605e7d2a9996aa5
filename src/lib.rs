// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Portfolio catalog of repositories and gists.
//!
//! Folio keeps the literal data behind a personal portfolio page, i.e., a
//! listing of repositories and a listing of code gists, and derives what the
//! page needs from it: repositories ordered around the color wheel, gists
//! grouped by type, and small HTML fragments for tag lines. Assembling the
//! actual page is left to whatever consumes these structures.
//!
//! # Usage
//!
//! ```no_run
//! use folio::{catalog::CatalogData, config::Settings, markup, portfolio::Portfolio};
//!
//! let portfolio = Portfolio::build(CatalogData::builtin()?, &Settings::default());
//! for repo in portfolio.repositories() {
//!     println!("{} {}", repo.name, markup::region_tags(repo, Default::default()));
//! }
//! # Ok::<(), folio::catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod markup;
pub mod path;
pub mod portfolio;
pub mod tags;
