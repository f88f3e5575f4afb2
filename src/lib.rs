// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Gitignore template generator.
//!
//! Iggen fetches gitignore templates from a remote template repository, finds
//! them through fuzzy name lookup, and merges the selected ones into a local
//! `.gitignore` file.
//!
//! # Flow
//!
//! 1. [`remote`] lists available templates and fetches raw template bodies.
//! 2. [`matcher`] filters template names by a fuzzy search term.
//! 3. [`merge`] concatenates fetched bodies, and writes the target file.
//!
//! [`workflow`] ties these together for the command-line interface.

pub mod config;
pub mod help;
pub mod matcher;
pub mod merge;
pub mod path;
pub mod remote;
pub mod workflow;

pub use config::{RemoteSettings, Settings};
pub use matcher::{fuzzy_search, FuzzyMatcher};
pub use merge::{GitignoreMerger, DEFAULT_OUTPUT};
pub use remote::{GitHubClient, TemplateIndex, TemplateSource};
