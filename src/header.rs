//! Header navigation construction.
//!
//! Turns configured header entries into a frozen link tree: every target is
//! resolved to a concrete URL exactly once, here, so downstream renderers
//! never see a target or touch a resolver. Construction is all-or-nothing;
//! a single unresolvable target fails the whole header rather than
//! producing a partial tree.

use serde::{Deserialize, Serialize};

use crate::config::{HeaderConfig, LinkTarget, MenuEntry};
use crate::permalink::{PermalinkResolver, ResolveError, Taxonomy};

/// A leaf link: display text plus a fully resolved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// A top-level header entry: a direct link, or a drop-down menu of links.
///
/// Serialized without a tag; the two shapes are distinguished by the
/// presence of `links` (menus) versus `href` (direct links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    // Menu first: an untagged map with a `links` key must parse as a menu,
    // never as a link that ignores it.
    Menu { text: String, links: Vec<NavLink> },
    Link(NavLink),
}

impl NavEntry {
    /// Display text of the entry, whichever shape it has.
    pub fn text(&self) -> &str {
        match self {
            Self::Menu { text, .. } => text,
            Self::Link(link) => &link.text,
        }
    }
}

/// The complete header navigation tree, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub links: Vec<NavEntry>,
}

impl HeaderData {
    /// Resolve every configured entry against `resolver` and freeze the
    /// tree. Entry order and menu link order follow the configuration;
    /// duplicate display texts are allowed and preserved.
    pub fn build(
        config: &HeaderConfig,
        resolver: &impl PermalinkResolver,
    ) -> Result<Self, ResolveError> {
        let mut links = Vec::with_capacity(config.links.len());
        for entry in &config.links {
            let built = match entry {
                MenuEntry::Link { text, target } => NavEntry::Link(NavLink {
                    text: text.clone(),
                    href: resolve_target(target, resolver)?,
                }),
                MenuEntry::Menu {
                    text,
                    links: menu_links,
                } => {
                    let mut resolved = Vec::with_capacity(menu_links.len());
                    for link in menu_links {
                        resolved.push(NavLink {
                            text: link.text.clone(),
                            href: resolve_target(&link.target, resolver)?,
                        });
                    }
                    NavEntry::Menu {
                        text: text.clone(),
                        links: resolved,
                    }
                }
            };
            links.push(built);
        }
        Ok(Self { links })
    }
}

/// Map a configured target onto the resolver. Literal URLs skip the
/// resolver entirely.
fn resolve_target(
    target: &LinkTarget,
    resolver: &impl PermalinkResolver,
) -> Result<String, ResolveError> {
    match target {
        LinkTarget::Path(path) => resolver.resolve(path, None),
        LinkTarget::Category(slug) => resolver.resolve(slug, Some(Taxonomy::Category)),
        LinkTarget::Tag(slug) => resolver.resolve(slug, Some(Taxonomy::Tag)),
        LinkTarget::Blog => resolver.blog_index(),
        LinkTarget::Url(url) => Ok(url.clone()),
    }
}
