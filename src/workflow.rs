// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command workflows.
//!
//! Glue between a [`TemplateSource`], the matcher, and the merger, kept apart
//! from the command-line layer so any source can drive it.

use crate::{
    matcher::fuzzy_search,
    merge::{self, GitignoreMerger},
    remote::{self, TemplateSource},
};

use futures::future::try_join_all;
use tracing::{debug, instrument};

/// Search templates of source by fuzzy term.
///
/// # Errors
///
/// - Return [`remote::RemoteError`] if listing fails.
pub async fn search_templates(
    source: &impl TemplateSource,
    term: &str,
) -> remote::Result<Vec<String>> {
    Ok(fuzzy_search(source.list_templates().await?, term))
}

/// Fetch template bodies for requested names, in request order.
///
/// Lists templates once, and resolves every name before fetching any body.
/// Bodies are fetched concurrently. The first failure aborts the whole batch.
///
/// # Errors
///
/// - Return [`remote::RemoteError::NotFound`] if any name cannot be resolved.
/// - Return [`remote::RemoteError`] if listing or any fetch fails.
#[instrument(skip(source), level = "debug")]
pub async fn fetch_templates(
    source: &impl TemplateSource,
    names: &[String],
) -> remote::Result<Vec<Vec<u8>>> {
    let index = source.index().await?;
    let canonical = names
        .iter()
        .map(|name| index.resolve(name))
        .collect::<remote::Result<Vec<_>>>()?;
    debug!("resolved canonical names {canonical:?}");

    try_join_all(canonical.into_iter().map(|name| source.fetch_raw(name))).await
}

/// Fetch requested templates, and merge them into target file.
///
/// Nothing is written unless every template was fetched.
///
/// # Errors
///
/// - Return [`WorkflowError::Remote`] if fetching fails.
/// - Return [`WorkflowError::Merge`] if writing fails.
pub async fn generate_gitignore(
    source: &impl TemplateSource,
    merger: &GitignoreMerger,
    names: &[String],
) -> Result<()> {
    let contents = fetch_templates(source, names).await?;
    merger.generate(&contents, names)?;

    Ok(())
}

/// Confirmation message for generated file.
pub fn success_message(merger: &GitignoreMerger, names: &[String]) -> String {
    format!(
        "generated {} from templates: {}",
        merger.path().display(),
        names.join(", ")
    )
}

/// Workflow error types.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Template source operation fails.
    #[error(transparent)]
    Remote(#[from] remote::RemoteError),

    /// Merging templates into target file fails.
    #[error(transparent)]
    Merge(#[from] merge::MergeError),
}

/// Friendly result alias :3
pub type Result<T, E = WorkflowError> = std::result::Result<T, E>;
