//! Chrome manifest assembly.
//!
//! Ties the stages together: a validated config plus a copyright year in,
//! one frozen snapshot of the site chrome out. The snapshot is what gets
//! serialized to `chrome.json` for page renderers; they never re-resolve
//! anything.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::footer::FooterData;
use crate::header::HeaderData;
use crate::permalink::{ResolveError, SitePermalinks};

/// The complete chrome snapshot: one header tree and one footer, both
/// fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeManifest {
    pub header: HeaderData,
    pub footer: FooterData,
}

/// Assemble the full chrome from a validated config, resolving header
/// targets against the production resolver derived from the same config.
///
/// `year` is decided once per build by the caller (see
/// [`crate::footer::copyright_year`]); passing it in keeps assembly
/// deterministic. A resolution failure fails the whole assembly; no
/// partial manifest is ever produced.
pub fn assemble(config: &SiteConfig, year: i32) -> Result<ChromeManifest, ResolveError> {
    let resolver = SitePermalinks::from_config(config);
    let header = HeaderData::build(&config.header, &resolver)?;
    let footer = FooterData::build(&config.footer, &config.name, year);
    Ok(ChromeManifest { header, footer })
}
