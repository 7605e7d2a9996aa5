// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Tag markup fragments.
//!
//! Inline HTML for the annotation line under each entry: an optional info
//! label followed by the entry's tags separated by bullets. There are two
//! flavors with the same shape and different class names. Region markup is
//! used for the repository cards, repository markup for compact listings.
//!
//! Catalog text is trusted by default and inserted verbatim, since entries
//! already carry entities such as `&amp;`. Turn on [`MarkupOptions::escape`]
//! for catalogs that come from somewhere less trusted.

use crate::{catalog::Tagged, config::MarkupOptions};

use maud::{html, Markup, PreEscaped};

const SEPARATOR: PreEscaped<&str> = PreEscaped(" &bull; ");

/// Render region annotation for entry.
///
/// Returns an empty string if there is nothing to show.
pub fn region_tags(entry: &impl Tagged, options: MarkupOptions) -> String {
    let info = shown_info(entry, options);
    let tags = entry.tags();

    let markup = html! {
        @if let Some(info) = info {
            span class="region_description_text" { (text(info, options)) }
        }
        @if !tags.is_empty() {
            span class="region_description_tags" {
                @if info.is_some() { (SEPARATOR) }
                @for (idx, tag) in tags.iter().enumerate() {
                    @if idx > 0 { (SEPARATOR) }
                    a class="region_description_tag" { span { (text(tag, options)) } }
                }
            }
        }
    };

    markup.into_string()
}

/// Render repository annotation for entry.
///
/// Returns an empty string if there is nothing to show.
pub fn repository_tags(entry: &impl Tagged, options: MarkupOptions) -> String {
    let info = shown_info(entry, options);
    let tags = entry.tags();

    let markup = html! {
        @if let Some(info) = info {
            span class="repository_info_text" { (text(info, options)) }
        }
        @if !tags.is_empty() {
            div class="repository_tags" {
                @if info.is_some() { (SEPARATOR) }
                @for (idx, tag) in tags.iter().enumerate() {
                    @if idx > 0 { (SEPARATOR) }
                    span class="repository_tag" { span { (text(tag, options)) } }
                }
            }
        }
    };

    markup.into_string()
}

fn shown_info(entry: &impl Tagged, options: MarkupOptions) -> Option<&str> {
    entry.info().filter(|_| options.has_info)
}

fn text(value: &str, options: MarkupOptions) -> Markup {
    if options.escape {
        html! { (value) }
    } else {
        PreEscaped(value.to_owned())
    }
}
