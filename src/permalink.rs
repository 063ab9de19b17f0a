//! Permalink resolution for navigation targets.
//!
//! Header links are configured as *targets* (a page path, a taxonomy term,
//! or the blog index) and resolved to canonical site URLs exactly once,
//! when the chrome is assembled. The rendering layer only ever sees the
//! resolved strings.
//!
//! ## URL grammar
//!
//! URLs are site-relative, decoded paths. Input paths are cleaned (outer
//! whitespace and slashes trimmed, duplicate slashes collapsed), prefixed
//! with the configured base pathname, and finished according to the
//! trailing-slash policy:
//!
//! ```text
//! resolve("/", None)                      → /
//! resolve(" /about//me/ ", None)          → /about/me
//! resolve("tutorials", Some(Category))    → /category/tutorials
//! resolve("astro", Some(Tag))             → /tag/astro
//! blog_index()                            → /blog
//! ```
//!
//! With `base_pathname = "/docs"` and `trailing_slash = true` the same
//! inputs become `/docs/`, `/docs/about/me/`, and so on. The root is always
//! the bare `/`.
//!
//! Resolution is pure and deterministic: the same input always produces the
//! same URL, so assembling twice yields identical navigation trees.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("cannot resolve a {0} permalink for an empty slug")]
    EmptySlug(Taxonomy),
}

/// Classification axis for content grouping, used to build taxonomy
/// listing URLs. A closed enum: an unknown taxonomy kind cannot be
/// constructed, so it is not a representable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    /// Display name for this taxonomy kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
        }
    }
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability consumed by header construction: given a path or a taxonomy
/// term, produce a canonical site URL. Must be deterministic for fixed
/// input. Tests substitute a stub; production uses [`SitePermalinks`].
pub trait PermalinkResolver {
    /// Canonical URL for a site-relative path, or for a taxonomy term when
    /// `taxonomy` is given (the path argument is then the term's slug).
    fn resolve(&self, path: &str, taxonomy: Option<Taxonomy>) -> Result<String, ResolveError>;

    /// Canonical URL of the blog listing page.
    fn blog_index(&self) -> Result<String, ResolveError>;
}

/// Production resolver derived from site configuration.
///
/// Holds pre-cleaned copies of the configured path segments so repeated
/// resolutions do no redundant work.
#[derive(Debug, Clone)]
pub struct SitePermalinks {
    base: String,
    trailing_slash: bool,
    blog: String,
    category_base: String,
    tag_base: String,
}

impl SitePermalinks {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base: clean_path(&config.base_pathname),
            trailing_slash: config.trailing_slash,
            blog: clean_path(&config.blog.pathname),
            category_base: clean_path(&config.taxonomies.category),
            tag_base: clean_path(&config.taxonomies.tag),
        }
    }

    /// Join a cleaned path under the base pathname and apply the
    /// trailing-slash policy. The root stays `/` regardless of policy.
    fn finish(&self, cleaned: &str) -> String {
        let mut url = String::from("/");
        if !self.base.is_empty() {
            url.push_str(&self.base);
        }
        if !cleaned.is_empty() {
            if !url.ends_with('/') {
                url.push('/');
            }
            url.push_str(cleaned);
        }
        if self.trailing_slash && url.len() > 1 {
            url.push('/');
        }
        url
    }
}

impl PermalinkResolver for SitePermalinks {
    fn resolve(&self, path: &str, taxonomy: Option<Taxonomy>) -> Result<String, ResolveError> {
        match taxonomy {
            None => Ok(self.finish(&clean_path(path))),
            Some(kind) => {
                let slug = clean_path(path);
                if slug.is_empty() {
                    return Err(ResolveError::EmptySlug(kind));
                }
                let base = match kind {
                    Taxonomy::Category => &self.category_base,
                    Taxonomy::Tag => &self.tag_base,
                };
                Ok(self.finish(&clean_path(&format!("{base}/{slug}"))))
            }
        }
    }

    fn blog_index(&self) -> Result<String, ResolveError> {
        Ok(self.finish(&self.blog))
    }
}

/// Normalize a path fragment: trim outer whitespace and slashes, collapse
/// duplicate slashes. The result has no leading or trailing slash; the
/// root (or an empty input) becomes the empty string.
fn clean_path(path: &str) -> String {
    path.trim()
        .split('/')
        .filter(|seg| !seg.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
