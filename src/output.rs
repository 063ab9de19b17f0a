//! CLI output formatting for the assembled chrome.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity leads
//! with its semantic identity — positional index plus display text — with
//! resolved URLs shown after an arrow and secondary details (copy text, QR
//! images, labels) as indented context lines.
//!
//! # Output Format
//!
//! ```text
//! Header
//! 001 Home → /
//! 002 Blog
//!     001 Blog List → /blog
//! 003 Pages
//!     001 Category Page → /category/tutorials
//!     002 Tag Page → /tag/astro
//! 004 About me → /about
//!
//! Footer
//! 001 Support → #
//! 002 About → #
//!
//! Social
//! 001 GitHub → https://github.com/Haileon
//! 002 Email → mailto:qye9828@gmail.com
//!     Label: qye9828@gmail.com
//!     Copy: qye9828@gmail.com
//! 003 QQ → https://wpa.qq.com/msgrd?v=3&uin=12345678&site=qq&menu=yes
//!     Label: 2188832247
//!     Copy: 2188832247
//!     QR: /qq.png
//!
//! © 2026 QingYe. All rights reserved.
//!
//! Assembled 4 header entries, 2 footer groups, 3 social links
//! ```
//!
//! Untitled single-link footer groups collapse to one line; titled or
//! multi-link groups show a header line with their links indented.
//!
//! # Architecture
//!
//! `format_chrome_output` returns `Vec<String>` for testability; the
//! `print_chrome_output` wrapper writes to stdout. Format functions are
//! pure — no I/O, no side effects.

use crate::footer::{FooterLinkGroup, SocialLink};
use crate::header::NavEntry;
use crate::manifest::ChromeManifest;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a resolved link line: positional index + text + arrow + URL.
///
/// ```text
/// 001 Home → /
/// ```
fn link_line(index: usize, text: &str, href: &str) -> String {
    format!("{} {} \u{2192} {}", format_index(index), text, href)
}

// ============================================================================
// Chrome output
// ============================================================================

/// Format the assembled chrome as display lines.
///
/// Information-first: each entry leads with its positional index and
/// display text; menus and headed footer columns indent their children one
/// level.
pub fn format_chrome_output(manifest: &ChromeManifest) -> Vec<String> {
    let mut lines = Vec::new();

    // Header section
    lines.push("Header".to_string());
    for (i, entry) in manifest.header.links.iter().enumerate() {
        match entry {
            NavEntry::Link(link) => {
                lines.push(link_line(i + 1, &link.text, &link.href));
            }
            NavEntry::Menu { text, links } => {
                lines.push(format!("{} {}", format_index(i + 1), text));
                for (j, link) in links.iter().enumerate() {
                    lines.push(format!("{}{}", indent(1), link_line(j + 1, &link.text, &link.href)));
                }
            }
        }
    }

    // Footer section
    lines.push(String::new());
    lines.push("Footer".to_string());
    for (i, group) in manifest.footer.links.iter().enumerate() {
        lines.extend(format_footer_group(i + 1, group));
    }

    // Social section
    lines.push(String::new());
    lines.push("Social".to_string());
    for (i, social) in manifest.footer.social_links.iter().enumerate() {
        lines.extend(format_social_link(i + 1, social));
    }

    lines.push(String::new());
    lines.push(manifest.footer.foot_note.clone());

    lines.push(String::new());
    lines.push(format!(
        "Assembled {} header entries, {} footer groups, {} social links",
        manifest.header.links.len(),
        manifest.footer.links.len(),
        manifest.footer.social_links.len(),
    ));

    lines
}

/// Format one footer link group.
///
/// An untitled group with a single link collapses to one link line; any
/// other shape gets a header line with its links indented below.
fn format_footer_group(index: usize, group: &FooterLinkGroup) -> Vec<String> {
    match (&group.title, group.links.as_slice()) {
        (None, [only]) => vec![link_line(index, &only.text, &only.href)],
        (title, links) => {
            let heading = title.as_deref().unwrap_or("(untitled)");
            let mut lines = vec![format!("{} {}", format_index(index), heading)];
            for (j, link) in links.iter().enumerate() {
                lines.push(format!("{}{}", indent(1), link_line(j + 1, &link.text, &link.href)));
            }
            lines
        }
    }
}

/// Format one social link with its affordances as indented context lines.
///
/// The label is only shown when it adds information, i.e. when it differs
/// from both the accessible name and the href.
fn format_social_link(index: usize, social: &SocialLink) -> Vec<String> {
    let mut lines = vec![link_line(index, &social.aria_label, &social.href)];
    if social.label != social.aria_label && social.label != social.href {
        lines.push(format!("{}Label: {}", indent(1), social.label));
    }
    if let Some(copy) = &social.copy_text {
        lines.push(format!("{}Copy: {}", indent(1), copy));
    }
    if let Some(qr) = &social.qr_src {
        lines.push(format!("{}QR: {}", indent(1), qr));
    }
    lines
}

/// Print chrome output to stdout.
pub fn print_chrome_output(manifest: &ChromeManifest) {
    for line in format_chrome_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
