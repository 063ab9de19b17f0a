//! Footer data construction.
//!
//! The footer is literal data: link columns and social links are copied
//! from the configuration as-is, hrefs untouched. The only computed piece
//! is the copyright line, stamped with the site name and a year that is
//! either pinned in the config or read from the local clock once per
//! build.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::config::{FooterConfig, SocialEntry};
use crate::header::NavLink;

/// A column of footer links, with an optional heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinkGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub links: Vec<NavLink>,
}

/// A social link. `copy_text` and `qr_src` are independent optional
/// affordances (copy-to-clipboard and a QR code image); when absent, the
/// serialized link omits the keys entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub aria_label: String,
    pub icon: String,
    pub href: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_src: Option<String>,
}

impl From<&SocialEntry> for SocialLink {
    fn from(entry: &SocialEntry) -> Self {
        Self {
            aria_label: entry.aria_label.clone(),
            icon: entry.icon.clone(),
            href: entry.href.clone(),
            label: entry.label.clone(),
            copy_text: entry.copy_text.clone(),
            qr_src: entry.qr_src.clone(),
        }
    }
}

/// The complete footer: link columns, social links, and the copyright
/// line, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub links: Vec<FooterLinkGroup>,
    pub social_links: Vec<SocialLink>,
    pub foot_note: String,
}

impl FooterData {
    /// Assemble the footer for the given site name and copyright year.
    /// Infallible: footer content is literal configuration, nothing is
    /// resolved.
    pub fn build(config: &FooterConfig, site_name: &str, year: i32) -> Self {
        let links = config
            .groups
            .iter()
            .map(|group| FooterLinkGroup {
                title: group.title.clone(),
                links: group
                    .links
                    .iter()
                    .map(|link| NavLink {
                        text: link.text.clone(),
                        href: link.href.clone(),
                    })
                    .collect(),
            })
            .collect();
        let social_links = config.social.iter().map(SocialLink::from).collect();
        Self {
            links,
            social_links,
            foot_note: foot_note(site_name, year),
        }
    }
}

/// The year stamped into the foot note: the configured pin when present,
/// otherwise the local calendar year at the time of the call.
pub fn copyright_year(config: &FooterConfig) -> i32 {
    config.year.unwrap_or_else(|| Local::now().year())
}

fn foot_note(site_name: &str, year: i32) -> String {
    format!("© {year} {site_name}. All rights reserved.")
}
