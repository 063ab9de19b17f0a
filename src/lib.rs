//! # Site Chrome
//!
//! Builds the navigation chrome — header link tree, footer link columns,
//! social links, and copyright line — for a content site. Configuration in
//! `config.toml` is the data source: link targets are declarative (a page
//! path, a taxonomy term, the blog index), and assembly resolves every
//! target to a concrete URL exactly once.
//!
//! # Architecture: Assemble Once, Render Many
//!
//! The chrome is assembled in a single pass and frozen into a JSON manifest
//! that page renderers consume:
//!
//! ```text
//! config.toml  →  assemble  →  chrome.json    (targets → resolved URLs)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Consistency**: every page shows the identical header and footer,
//!   because there is exactly one resolution pass.
//! - **Debuggability**: the manifest is human-readable JSON you can inspect
//!   and diff between builds.
//! - **Testability**: assembly is a pure function of config, resolver, and
//!   year, so tests can substitute a stub resolver or freeze the clock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, merging, and validation; stock site data |
//! | [`permalink`] | The resolver seam: target paths and taxonomy terms → canonical URLs |
//! | [`header`] | Header link tree construction against a resolver |
//! | [`footer`] | Footer columns, social links, and the computed copyright line |
//! | [`manifest`] | Ties the stages together into the `chrome.json` snapshot |
//! | [`output`] | CLI output formatting — tree-based display of the assembled chrome |
//!
//! # Design Decisions
//!
//! ## Resolution at Assembly, Not Render
//!
//! Header targets resolve when the chrome is assembled and never again.
//! Renderers get plain strings, so URL policy (base pathname, trailing
//! slashes, taxonomy bases) lives in exactly one place and a misconfigured
//! target fails the build instead of producing a half-broken nav at render
//! time. Assembly is all-or-nothing: one bad target, no manifest.
//!
//! ## Two-Variant Entries Over Optional Fields
//!
//! A header entry is either a direct link or a drop-down menu. Rather than
//! a struct with an optional `href` and an optional `links` list, both the
//! config ([`config::MenuEntry`]) and the manifest ([`header::NavEntry`])
//! model this as a two-variant enum, so rendering code exhaustively handles
//! both shapes and the "both set" and "neither set" states are rejected
//! while parsing.
//!
//! ## The Copyright Year Is Decided Once
//!
//! The foot note stamps the local calendar year at build time (or a year
//! pinned in config). The year is read once per build and passed down, so
//! the manifest never disagrees with itself and tests can freeze it.
//!
//! ## Stock Data in Code
//!
//! The default configuration is the complete chrome of a real site, not an
//! empty skeleton. Running with no `config.toml` at all produces a working
//! manifest; a user config overrides only what it names. The commented
//! stock config from `gen-config` round-trips to exactly these defaults.

pub mod config;
pub mod footer;
pub mod header;
pub mod manifest;
pub mod output;
pub mod permalink;

#[cfg(test)]
pub(crate) mod test_helpers;
