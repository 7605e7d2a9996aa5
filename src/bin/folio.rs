// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use folio::{
    catalog::CatalogData,
    config::{MarkupOptions, Settings, SortOrder},
    markup::{region_tags, repository_tags},
    path::default_config_path,
    portfolio::Portfolio,
    tags::TagSelection,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs::read_to_string, path::PathBuf, process::exit};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "folio [options] <command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    /// Path to settings file.
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Path to catalog snapshot to use instead of the bundled one.
    #[arg(long, global = true, value_name = "path")]
    pub catalog: Option<PathBuf>,

    /// Replace every catalog color with one gray.
    #[arg(short, long, global = true)]
    pub monochrome: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        let mut settings = load_settings(self.config)?;
        if self.monochrome {
            settings.colored = false;
        }

        let catalog = self
            .catalog
            .or_else(|| settings.catalog.as_ref().map(|path| path.as_path().to_path_buf()));
        let data = match catalog {
            Some(path) => CatalogData::load(path)?,
            None => CatalogData::builtin()?,
        };

        match self.command {
            Command::Repos(opts) => run_repos(opts, data, settings),
            Command::Gists => run_gists(data, settings),
            Command::Tags => run_tags(data, settings),
            Command::Render(opts) => run_render(opts, data, settings),
            Command::Dump => run_dump(data),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List repositories in display order.
    #[command(override_usage = "folio repos [options]")]
    Repos(ReposOptions),

    /// List gists grouped by type.
    #[command(override_usage = "folio gists [options]")]
    Gists,

    /// List tags with their occurrence counts.
    #[command(override_usage = "folio tags [options]")]
    Tags,

    /// Render tag markup of every repository.
    #[command(override_usage = "folio render [options]")]
    Render(RenderOptions),

    /// Print loaded catalog snapshot as TOML.
    #[command(override_usage = "folio dump [options]")]
    Dump,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct ReposOptions {
    /// Ordering to use instead of the configured one.
    #[arg(short, long, value_enum, value_name = "order")]
    pub sort_by: Option<SortOrder>,

    /// Only show repositories with any of these tags.
    #[arg(short, long = "tag", value_name = "tag")]
    pub tags: Vec<String>,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct RenderOptions {
    /// Render info text in front of tags.
    #[arg(long)]
    pub has_info: bool,

    /// HTML-escape info and tag text.
    #[arg(long)]
    pub escape: bool,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (default_config_path()?, false),
    };

    if !required && !path.exists() {
        debug!("no settings at {:?}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = read_to_string(&path)
        .with_context(|| format!("failed to read settings at {:?}", path.display()))?;
    Ok(content.parse()?)
}

fn run_repos(opts: ReposOptions, data: CatalogData, mut settings: Settings) -> Result<()> {
    if let Some(order) = opts.sort_by {
        settings.sort = order;
    }

    let portfolio = Portfolio::build(data, &settings);
    let selection = TagSelection::new(opts.tags);
    for repo in portfolio.repositories_tagged(&selection) {
        println!(
            "{:.3}  {:<7}  {:<6}  {}",
            repo.hue_key().hue(),
            repo.color,
            repo.name,
            repo.name_full
        );
    }

    Ok(())
}

fn run_gists(data: CatalogData, settings: Settings) -> Result<()> {
    let portfolio = Portfolio::build(data, &settings);
    for group in portfolio.gist_groups().iter() {
        let color = portfolio.gist_type_color(&group.kind).unwrap_or("-");
        println!("{} ({color})", group.kind);
        for gist in &group.gists {
            println!("  {:<24}  {:<34}  {}", gist.main_file, gist.name, gist.url);
        }
    }

    Ok(())
}

fn run_tags(data: CatalogData, settings: Settings) -> Result<()> {
    let portfolio = Portfolio::build(data, &settings);
    for count in portfolio.tag_index() {
        println!("{count}");
    }

    Ok(())
}

fn run_render(opts: RenderOptions, data: CatalogData, settings: Settings) -> Result<()> {
    let options = MarkupOptions {
        has_info: opts.has_info || settings.markup.has_info,
        escape: opts.escape || settings.markup.escape,
    };

    let portfolio = Portfolio::build(data, &settings);
    for repo in portfolio.repositories() {
        println!("{}", repo.name);
        println!("  region:     {}", region_tags(repo, options));
        println!("  repository: {}", repository_tags(repo, options));
    }

    Ok(())
}

fn run_dump(data: CatalogData) -> Result<()> {
    print!("{data}");
    Ok(())
}
