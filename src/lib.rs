//! # refetch - Reference Library Fetcher
//!
//! refetch (`rf`) pulls third-party C/C++ reference libraries from git and
//! stages their public headers into a local `references/` tree, so a project
//! can include all of them from one search path.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter refs.toml
//! rf init
//!
//! # Fetch and stage everything enabled
//! rf fetch
//! ```
//!
//! ## Module Organization
//!
//! - [`fetch`] - The per-dependency pipeline: reset, clone, stage
//! - [`config`] - Configuration parsing (`refs.toml`)
//! - [`tools`] - The external capabilities (git, fs, C compiler) behind a seam
//! - [`layout`] - The `references/` staging tree

/// Staging tree cleanup.
pub mod clean;

/// Optional compile-only step into `references/lib/`.
pub mod compile;

/// Configuration file parsing (`refs.toml`).
pub mod config;

/// Reference fetching and staging.
pub mod fetch;

/// Staging tree layout and initialization.
pub mod layout;

/// Dependency listing.
pub mod status;

/// External tool seam (git clone, recursive copy, object compile).
pub mod tools;

/// Terminal UI utilities (tables, colors).
pub mod ui;
