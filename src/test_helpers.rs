//! Shared test utilities for the site-chrome test suite.
//!
//! Provides a stub permalink resolver, config fixture setup, lookup helpers,
//! and header tree assertions that work with the assembled chrome structures
//! (`HeaderData`, `FooterData`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let header = HeaderData::build(&config.header, &StubResolver).unwrap();
//!
//! assert_header_shape(&header, &[
//!     ("Home", &[]),
//!     ("Blog", &["Blog List"]),
//!     ("Pages", &["Category Page", "Tag Page"]),
//!     ("About me", &[]),
//! ]);
//!
//! let social = find_social(&footer, "QQ");
//! assert_eq!(social.qr_src.as_deref(), Some("/qq.png"));
//! ```

use tempfile::TempDir;

use crate::footer::{FooterData, SocialLink};
use crate::header::{HeaderData, NavEntry, NavLink};
use crate::permalink::{PermalinkResolver, ResolveError, Taxonomy};

// =========================================================================
// Stub resolver
// =========================================================================

/// Deterministic resolver that wraps its inputs in recognizable markers
/// instead of building real URLs. Lets tests assert that configured
/// targets reach the resolver unchanged, independent of URL policy.
///
/// - `resolve("/about", None)` → `[page:/about]`
/// - `resolve("astro", Some(Tag))` → `[tag:astro]`
/// - `blog_index()` → `[blog]`
///
/// Honors the resolver contract for empty taxonomy slugs.
pub struct StubResolver;

impl PermalinkResolver for StubResolver {
    fn resolve(&self, path: &str, taxonomy: Option<Taxonomy>) -> Result<String, ResolveError> {
        match taxonomy {
            None => Ok(format!("[page:{path}]")),
            Some(kind) => {
                if path.trim().trim_matches('/').is_empty() {
                    return Err(ResolveError::EmptySlug(kind));
                }
                Ok(format!("[{}:{}]", kind.name(), path))
            }
        }
    }

    fn blog_index(&self) -> Result<String, ResolveError> {
        Ok("[blog]".to_string())
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp site root containing the given `config.toml` content.
///
/// Tests get an isolated directory they can load config from without
/// affecting other tests.
pub fn site_dir(config_toml: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), config_toml).unwrap();
    tmp
}

// =========================================================================
// Chrome lookups — panics with a clear message on miss
// =========================================================================

/// Find a header entry by display text. Panics if not found.
pub fn find_entry<'a>(header: &'a HeaderData, text: &str) -> &'a NavEntry {
    header
        .links
        .iter()
        .find(|e| e.text() == text)
        .unwrap_or_else(|| {
            let texts = header_texts(header);
            panic!("header entry '{text}' not found. Available: {texts:?}")
        })
}

/// The links of a menu entry. Panics if the entry is a direct link.
pub fn menu_links<'a>(header: &'a HeaderData, text: &str) -> &'a [NavLink] {
    match find_entry(header, text) {
        NavEntry::Menu { links, .. } => links,
        NavEntry::Link(_) => panic!("header entry '{text}' is a direct link, not a menu"),
    }
}

/// Find a social link by accessible name. Panics if not found.
pub fn find_social<'a>(footer: &'a FooterData, aria_label: &str) -> &'a SocialLink {
    footer
        .social_links
        .iter()
        .find(|s| s.aria_label == aria_label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = footer
                .social_links
                .iter()
                .map(|s| s.aria_label.as_str())
                .collect();
            panic!("social link '{aria_label}' not found. Available: {labels:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Top-level header entry texts in order.
pub fn header_texts(header: &HeaderData) -> Vec<&str> {
    header.links.iter().map(|e| e.text()).collect()
}

// =========================================================================
// Header shape assertion
// =========================================================================

/// Assert that the header tree matches an expected shape.
///
/// Each entry is `(text, menu link texts)`. Use `&[]` for direct links;
/// menus cannot be empty, so an empty child list always means a direct
/// link.
///
/// ```rust
/// assert_header_shape(&header, &[
///     ("Home", &[]),
///     ("Blog", &["Blog List"]),
/// ]);
/// ```
pub fn assert_header_shape(header: &HeaderData, expected: &[(&str, &[&str])]) {
    let actual = header_texts(header);
    let expected_texts: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(actual, expected_texts, "header top-level texts mismatch");

    for (text, children) in expected {
        match find_entry(header, text) {
            NavEntry::Link(_) => {
                assert!(
                    children.is_empty(),
                    "header entry '{text}' is a direct link but menu links were expected"
                );
            }
            NavEntry::Menu { links, .. } => {
                let actual_children: Vec<&str> = links.iter().map(|l| l.text.as_str()).collect();
                assert_eq!(
                    actual_children,
                    children.to_vec(),
                    "menu links of '{text}' mismatch"
                );
            }
        }
    }
}
