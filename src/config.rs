//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` files. Stock
//! defaults cover the whole configuration; a user config file in the site
//! root overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! name = "QingYe"           # Site name, stamped into the copyright line
//! base_pathname = "/"       # Prefix for every generated URL
//! trailing_slash = false    # Append "/" to non-root URLs
//!
//! [blog]
//! pathname = "blog"         # Path of the blog listing page
//!
//! [taxonomies]
//! category = "category"     # URL base for category listings
//! tag = "tag"               # URL base for tag listings
//!
//! # Header entries are either direct links (text + target) or drop-down
//! # menus (text + links). See `stock_config_toml()` for the full grammar.
//! [[header.links]]
//! text = "Home"
//! target = { path = "/" }
//!
//! [[header.links]]
//! text = "Blog"
//! links = [{ text = "Blog List", target = "blog" }]
//!
//! [footer]
//! # year = 2026             # Pin the copyright year (default: build clock)
//!
//! [[footer.groups]]
//! links = [{ text = "Support", href = "#" }]
//!
//! [[footer.social]]
//! aria_label = "GitHub"
//! icon = "tabler:brand-github"
//! href = "https://github.com/Haileon"
//! label = "https://github.com/Haileon"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the site name
//! name = "Another Site"
//! ```
//!
//! Arrays (`header.links`, `footer.groups`, `footer.social`) are replaced
//! wholesale, not merged element-by-element. Unknown keys are rejected to
//! catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, used in the footer copyright line.
    pub name: String,
    /// Pathname every generated URL is joined under (`"/"` for none).
    pub base_pathname: String,
    /// Whether non-root URLs end with a trailing slash.
    pub trailing_slash: bool,
    /// Blog listing settings.
    pub blog: BlogConfig,
    /// URL bases for taxonomy listing pages.
    pub taxonomies: TaxonomiesConfig,
    /// Header navigation entries.
    pub header: HeaderConfig,
    /// Footer link groups, social links, and copyright settings.
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "QingYe".to_string(),
            base_pathname: "/".to_string(),
            trailing_slash: false,
            blog: BlogConfig::default(),
            taxonomies: TaxonomiesConfig::default(),
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Header entry shape (a target XOR sub-links, menus non-empty) is
    /// already enforced during parsing, so only scalar values are checked
    /// here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation("name must not be empty".into()));
        }
        if self.blog.pathname.trim().is_empty() {
            return Err(ConfigError::Validation(
                "blog.pathname must not be empty".into(),
            ));
        }
        if self.taxonomies.category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "taxonomies.category must not be empty".into(),
            ));
        }
        if self.taxonomies.tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "taxonomies.tag must not be empty".into(),
            ));
        }
        if let Some(year) = self.footer.year
            && !(1000..=9999).contains(&year)
        {
            return Err(ConfigError::Validation(
                "footer.year must be a four-digit year".into(),
            ));
        }
        Ok(())
    }
}

/// Blog listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    /// Path of the blog listing page, joined under the base pathname.
    pub pathname: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            pathname: "blog".to_string(),
        }
    }
}

/// URL bases for taxonomy listing pages.
///
/// A category term `tutorials` resolves to `<base>/<category>/tutorials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxonomiesConfig {
    pub category: String,
    pub tag: String,
}

impl Default for TaxonomiesConfig {
    fn default() -> Self {
        Self {
            category: "category".to_string(),
            tag: "tag".to_string(),
        }
    }
}

// =============================================================================
// Header configuration
// =============================================================================

/// Header navigation entries, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub links: Vec<MenuEntry>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            links: vec![
                MenuEntry::link("Home", LinkTarget::Path("/".to_string())),
                MenuEntry::menu(
                    "Blog",
                    vec![MenuLink::new("Blog List", LinkTarget::Blog)],
                ),
                MenuEntry::menu(
                    "Pages",
                    vec![
                        MenuLink::new(
                            "Category Page",
                            LinkTarget::Category("tutorials".to_string()),
                        ),
                        MenuLink::new("Tag Page", LinkTarget::Tag("astro".to_string())),
                    ],
                ),
                MenuEntry::link("About me", LinkTarget::Path("/about".to_string())),
            ],
        }
    }
}

/// Where a header link points. Resolved to a concrete URL when the chrome
/// is assembled.
///
/// In TOML:
///
/// ```toml
/// target = { path = "/about" }         # page path
/// target = { category = "tutorials" }  # category listing
/// target = { tag = "astro" }           # tag listing
/// target = "blog"                      # blog index
/// target = { url = "https://..." }     # literal URL, used as-is
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Site-relative page path, resolved to a permalink.
    Path(String),
    /// Category listing for the given term slug.
    Category(String),
    /// Tag listing for the given term slug.
    Tag(String),
    /// The blog index page.
    Blog,
    /// Literal URL, passed through without resolution.
    Url(String),
}

/// A top-level header entry: either a direct link or a drop-down menu of
/// links. An entry is one or the other, never both, and menus must have at
/// least one link; violations are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawMenuEntry", try_from = "RawMenuEntry")]
pub enum MenuEntry {
    Link { text: String, target: LinkTarget },
    Menu { text: String, links: Vec<MenuLink> },
}

impl MenuEntry {
    pub fn link(text: &str, target: LinkTarget) -> Self {
        Self::Link {
            text: text.to_string(),
            target,
        }
    }

    pub fn menu(text: &str, links: Vec<MenuLink>) -> Self {
        Self::Menu {
            text: text.to_string(),
            links,
        }
    }

    /// Display text of the entry, whichever shape it has.
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Menu { text, .. } => text,
        }
    }
}

/// Wire shape of a header entry. `MenuEntry` parses through this so that
/// an entry with both a target and sub-links (or neither) never makes it
/// into the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMenuEntry {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<LinkTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    links: Vec<MenuLink>,
}

impl From<MenuEntry> for RawMenuEntry {
    fn from(entry: MenuEntry) -> Self {
        match entry {
            MenuEntry::Link { text, target } => Self {
                text,
                target: Some(target),
                links: Vec::new(),
            },
            MenuEntry::Menu { text, links } => Self {
                text,
                target: None,
                links,
            },
        }
    }
}

impl TryFrom<RawMenuEntry> for MenuEntry {
    type Error = String;

    fn try_from(raw: RawMenuEntry) -> Result<Self, Self::Error> {
        let RawMenuEntry {
            text,
            target,
            links,
        } = raw;
        match (target, links.is_empty()) {
            (Some(target), true) => Ok(Self::Link { text, target }),
            (None, false) => Ok(Self::Menu { text, links }),
            (Some(_), false) => Err(format!(
                "header entry '{text}' cannot have both a target and sub-links"
            )),
            (None, true) => Err(format!(
                "header entry '{text}' needs a target or sub-links"
            )),
        }
    }
}

/// A link inside a drop-down menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuLink {
    pub text: String,
    pub target: LinkTarget,
}

impl MenuLink {
    pub fn new(text: &str, target: LinkTarget) -> Self {
        Self {
            text: text.to_string(),
            target,
        }
    }
}

// =============================================================================
// Footer configuration
// =============================================================================

/// Footer link groups, social links, and copyright settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Link columns, in display order.
    pub groups: Vec<FooterGroup>,
    /// Social links, in display order.
    pub social: Vec<SocialEntry>,
    /// Pinned copyright year. When absent, the local calendar year at
    /// build time is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                FooterGroup {
                    title: None,
                    links: vec![FooterLink {
                        text: "Support".to_string(),
                        href: "#".to_string(),
                    }],
                },
                FooterGroup {
                    title: None,
                    links: vec![FooterLink {
                        text: "About".to_string(),
                        href: "#".to_string(),
                    }],
                },
            ],
            social: vec![
                SocialEntry {
                    aria_label: "GitHub".to_string(),
                    icon: "tabler:brand-github".to_string(),
                    href: "https://github.com/Haileon".to_string(),
                    label: "https://github.com/Haileon".to_string(),
                    copy_text: None,
                    qr_src: None,
                },
                SocialEntry {
                    aria_label: "Email".to_string(),
                    icon: "tabler:mail".to_string(),
                    href: "mailto:qye9828@gmail.com".to_string(),
                    label: "qye9828@gmail.com".to_string(),
                    copy_text: Some("qye9828@gmail.com".to_string()),
                    qr_src: None,
                },
                SocialEntry {
                    aria_label: "QQ".to_string(),
                    icon: "tabler:brand-qq".to_string(),
                    href: "https://wpa.qq.com/msgrd?v=3&uin=12345678&site=qq&menu=yes"
                        .to_string(),
                    label: "2188832247".to_string(),
                    copy_text: Some("2188832247".to_string()),
                    qr_src: Some("/qq.png".to_string()),
                },
            ],
            year: None,
        }
    }
}

/// A column of literal footer links. Hrefs are used exactly as written,
/// never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterGroup {
    /// Optional column heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub links: Vec<FooterLink>,
}

/// A literal footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub text: String,
    pub href: String,
}

/// A social link as configured. `copy_text` and `qr_src` are independent
/// affordances: copy-to-clipboard text and a QR code image path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialEntry {
    /// Accessible name for the icon link.
    pub aria_label: String,
    /// Icon identifier, e.g. `tabler:brand-github`.
    pub icon: String,
    /// Link destination, used exactly as written.
    pub href: String,
    /// Visible text next to the icon.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_src: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Chrome Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in the site root (the --source directory).
# Arrays (header.links, footer.groups, footer.social) replace the defaults
# wholesale; scalar keys override individually.
# Unknown keys will cause an error.

# Site name, stamped into the footer copyright line.
name = "QingYe"

# Pathname every generated URL is joined under. "/" means none.
base_pathname = "/"

# Append "/" to non-root URLs (the root is always the bare "/").
trailing_slash = false

# ---------------------------------------------------------------------------
# Blog
# ---------------------------------------------------------------------------
[blog]
# Path of the blog listing page.
pathname = "blog"

# ---------------------------------------------------------------------------
# Taxonomies
# ---------------------------------------------------------------------------
[taxonomies]
# URL bases for taxonomy listing pages: a category term "tutorials"
# resolves to /category/tutorials.
category = "category"
tag = "tag"

# ---------------------------------------------------------------------------
# Header navigation
# ---------------------------------------------------------------------------
# Each entry is either a direct link (text + target) or a drop-down menu
# (text + links), never both. Target forms:
#   { path = "/about" }         page path, resolved to a permalink
#   { category = "tutorials" }  category listing
#   { tag = "astro" }           tag listing
#   "blog"                      the blog index
#   { url = "https://..." }     literal URL, used as-is
[[header.links]]
text = "Home"
target = { path = "/" }

[[header.links]]
text = "Blog"
links = [{ text = "Blog List", target = "blog" }]

[[header.links]]
text = "Pages"
links = [
    { text = "Category Page", target = { category = "tutorials" } },
    { text = "Tag Page", target = { tag = "astro" } },
]

[[header.links]]
text = "About me"
target = { path = "/about" }

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# Pin the copyright year instead of reading the clock at build time.
# year = 2026

# Link columns. An optional title turns a column into a headed section.
[[footer.groups]]
links = [{ text = "Support", href = "#" }]

[[footer.groups]]
links = [{ text = "About", href = "#" }]

# Social links. copy_text adds a copy-to-clipboard affordance; qr_src
# points at a QR code image for the link.
[[footer.social]]
aria_label = "GitHub"
icon = "tabler:brand-github"
href = "https://github.com/Haileon"
label = "https://github.com/Haileon"

[[footer.social]]
aria_label = "Email"
icon = "tabler:mail"
href = "mailto:qye9828@gmail.com"
label = "qye9828@gmail.com"
copy_text = "qye9828@gmail.com"

[[footer.social]]
aria_label = "QQ"
icon = "tabler:brand-qq"
href = "https://wpa.qq.com/msgrd?v=3&uin=12345678&site=qq&menu=yes"
label = "2188832247"
copy_text = "2188832247"
qr_src = "/qq.png"
"##
}
