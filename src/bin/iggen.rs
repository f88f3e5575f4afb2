// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use iggen::{
    help,
    path::default_settings_path,
    remote::TemplateSource,
    workflow::{generate_gitignore, search_templates, success_message},
    GitHubClient, GitignoreMerger, Settings, DEFAULT_OUTPUT,
};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, InquireError};
use std::{
    io::{stdin, stdout, Write},
    path::{Path, PathBuf},
    process::exit,
    time::Duration,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "iggen [options] <command> [args]...",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    /// Route every request through HTTP proxy at address.
    #[arg(short, long, global = true, value_name = "address")]
    pub proxy: Option<String>,

    /// Read settings from file instead of default location.
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    async fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let client = GitHubClient::new(&settings.remote)?;

        match self.command {
            Command::List => run_list(&client).await,
            Command::Search(opts) => run_search(&client, opts).await,
            Command::Gen(opts) => run_gen(&client, opts).await,
        }
    }

    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => match default_settings_path() {
                Ok(path) => Settings::load_or_default(path)?,
                Err(err) => {
                    debug!("{err}, using default settings");
                    Settings::default()
                }
            },
        };

        if let Some(proxy) = &self.proxy {
            settings.remote.proxy = Some(proxy.clone());
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    #[command(
        about = help::summary("list"),
        after_long_help = help::details("list"),
        override_usage = "iggen list [options]"
    )]
    List,

    #[command(
        about = help::summary("search"),
        after_long_help = help::details("search"),
        override_usage = "iggen search [options] <keyword>"
    )]
    Search(SearchOptions),

    #[command(
        about = help::summary("gen"),
        after_long_help = help::details("gen"),
        override_usage = "iggen gen [options] <template>..."
    )]
    Gen(GenOptions),
}

#[derive(Args, Clone, Debug)]
struct SearchOptions {
    /// Keyword to match template names against.
    #[arg(value_name = "keyword")]
    pub term: String,
}

#[derive(Args, Clone, Debug)]
struct GenOptions {
    /// Names of templates to merge, in order.
    #[arg(required = true, value_name = "template")]
    pub names: Vec<String>,

    /// Overwrite existing .gitignore without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Precede each template with a banner naming it.
    #[arg(short, long)]
    pub banners: bool,
}

#[tokio::main]
async fn main() {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    let result = tokio::select! {
        result = run() => result,
        _ = tokio::signal::ctrl_c() => Err(anyhow!("interrupted")),
    };

    if let Err(error) = result {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

async fn run() -> Result<()> {
    Cli::parse().run().await
}

async fn run_list(client: &GitHubClient) -> Result<()> {
    let templates = client
        .list_templates()
        .await
        .context("failed to fetch template listing")?;

    for template in templates {
        println!("{template}");
    }

    Ok(())
}

async fn run_search(client: &GitHubClient, opts: SearchOptions) -> Result<()> {
    let matches = search_templates(client, &opts.term)
        .await
        .context("failed to fetch template listing")?;

    if matches.is_empty() {
        println!("no matching templates for {:?}", opts.term);
        return Ok(());
    }

    println!("found {} matching template(s):", matches.len());
    for name in matches {
        println!("  {name}");
    }

    Ok(())
}

async fn run_gen(client: &GitHubClient, opts: GenOptions) -> Result<()> {
    let merger = GitignoreMerger::new(DEFAULT_OUTPUT).with_banners(opts.banners);
    if merger.file_exists() && !opts.force && !confirm_overwrite(merger.path())? {
        println!("operation cancelled");
        return Ok(());
    }

    let bar = fetch_spinner(&opts.names)?;
    let result = generate_gitignore(client, &merger, &opts.names).await;
    bar.finish_and_clear();
    result.with_context(|| format!("failed to generate from {}", opts.names.join(", ")))?;

    println!("{}", success_message(&merger, &opts.names));

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    let message = format!("{} already exists. Overwrite it?", path.display());
    match Confirm::new(&message).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(InquireError::NotTTY) => {
            // Piped answer, anything but "y" declines.
            print!("{message} (y/N) ");
            stdout().flush()?;
            let mut answer = String::new();
            stdin()
                .read_line(&mut answer)
                .context("failed to read overwrite confirmation")?;
            println!();
            Ok(answer.trim().eq_ignore_ascii_case("y"))
        }
        Err(err) => Err(err.into()),
    }
}

fn fetch_spinner(names: &[String]) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template(
        "{elapsed_precise:.green}  {spinner:.yellow}  {msg}",
    )?);
    bar.set_message(format!("fetching {}", names.join(", ")));
    bar.enable_steady_tick(Duration::from_millis(100));

    Ok(bar)
}
