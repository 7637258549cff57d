//! Command-line front end: renders icons and snippets locally, audits the
//! catalog and runs the HTTP service.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;

use stackicons::catalog::{self, Category, Tab, TechEntry};
use stackicons::markdown::{MarkdownGenerator, MarkdownOptions, OutputFormat};
use stackicons::raster::render_png;
use stackicons::validate::{DEFAULT_ICON_SIZE, DEFAULT_PER_LINE, QueryParams};
use stackicons::{IconGenerator, ResolveMode, ServiceConfig, Theme, validate_grid, validate_single};

#[derive(Debug, Parser)]
#[command(name = "stackicons", about = "Tech stack icon service", version, long_about = None)]
struct Cli {
    /// JSON service configuration.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fail on identifiers that resolve to no icon.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one icon.
    Icon {
        id: String,
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
        #[arg(long, default_value_t = DEFAULT_ICON_SIZE)]
        size: u32,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a grid from a comma-separated identifier list.
    Grid {
        ids: String,
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
        #[arg(long, default_value_t = DEFAULT_PER_LINE)]
        per_line: u32,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a README snippet for catalog technologies.
    Markdown {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
        #[arg(long, default_value_t = DEFAULT_ICON_SIZE)]
        size: u32,
        #[arg(long, default_value_t = DEFAULT_PER_LINE)]
        per_line: u32,
        #[arg(long)]
        title: Option<String>,
    },

    /// List catalog entries.
    List {
        #[arg(long, value_enum, conflicts_with = "tab")]
        category: Option<Category>,
        #[arg(long, value_enum)]
        tab: Option<Tab>,
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Verify that every catalog reference resolves.
    Check,

    /// Print the JSON schema of the configuration file.
    #[cfg(feature = "jsonschema")]
    Schema,

    /// Run the HTTP service.
    #[cfg(feature = "server")]
    Serve {
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
        #[arg(long)]
        public_url: Option<String>,
    },
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
    /// Write the SVG here instead of stdout.
    #[arg(short, long, value_name = "FILE", conflicts_with = "png")]
    output: Option<PathBuf>,

    /// Rasterise to a PNG file.
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// PNG scale factor.
    #[arg(long, default_value_t = 1.0, requires = "png")]
    scale: f32,
}

fn main() -> Result<()> {
    logger_builder(Env::default()).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::new(),
    };
    if cli.strict {
        config.resolve_mode = ResolveMode::Strict;
    }

    match cli.command {
        Command::Icon {
            id,
            theme,
            size,
            output,
        } => {
            let request = validate_single(&QueryParams::from_iter([
                ("i", id),
                ("theme", theme.to_string()),
                ("size", size.to_string()),
            ]))?;
            let svg = IconGenerator::from_config(&config)?.render_single(&request)?;
            emit(&svg, &output)
        }
        Command::Grid {
            ids,
            theme,
            per_line,
            output,
        } => {
            let request = validate_grid(&QueryParams::from_iter([
                ("i", ids),
                ("theme", theme.to_string()),
                ("perline", per_line.to_string()),
            ]))?;
            let svg = IconGenerator::from_config(&config)?.render_grid(&request)?;
            emit(&svg, &output)
        }
        Command::Markdown {
            ids,
            format,
            theme,
            size,
            per_line,
            title,
        } => {
            let techs = ids
                .iter()
                .map(|id| catalog::get(id).with_context(|| format!("unknown technology '{id}'")))
                .collect::<Result<Vec<_>>>()?;
            let generator = MarkdownGenerator::new(MarkdownOptions {
                base_url: config.base_url().to_string(),
                theme,
                per_line,
                title,
            });
            println!("{}", generator.generate(&techs, format, size));
            Ok(())
        }
        Command::List {
            category,
            tab,
            search,
            json,
        } => list(category, tab, search.as_deref(), json),
        Command::Check => {
            let provider = config.icon_provider()?;
            let issues = catalog::check(&*provider);
            for issue in &issues {
                println!("{issue}");
            }
            if !issues.is_empty() {
                bail!("{} catalog issue(s) found", issues.len());
            }
            log::info!("All {} catalog entries resolve", catalog::all().len());
            Ok(())
        }
        #[cfg(feature = "jsonschema")]
        Command::Schema => {
            let schema = schemars::schema_for!(ServiceConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        #[cfg(feature = "server")]
        Command::Serve { bind, public_url } => {
            if let Some(bind) = bind {
                config = config.with_bind(bind);
            }
            if let Some(url) = public_url {
                config = config.with_public_url(url);
            }
            config.validate()?;
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(stackicons::server::run(&config))?;
            Ok(())
        }
    }
}

/// Logs at `info` unless the filter variable of `env` (`RUST_LOG` by
/// default) says otherwise.
fn logger_builder(env: Env<'_>) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("info"))
}

fn list(category: Option<Category>, tab: Option<Tab>, search: Option<&str>, json: bool) -> Result<()> {
    let mut entries: Vec<&TechEntry> = match (category, tab) {
        (Some(category), _) => catalog::filter_by_categories(&[category]),
        (None, Some(tab)) => tab.entries(),
        (None, None) => catalog::all().iter().collect(),
    };
    if let Some(keyword) = search {
        let matches = catalog::search(keyword);
        entries.retain(|entry| matches.iter().any(|m| m.id == entry.id));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:<16} {:<24} {}", entry.id, entry.name, entry.category.label());
        }
    }
    Ok(())
}

fn emit(svg: &str, args: &OutputArgs) -> Result<()> {
    if let Some(path) = &args.png {
        return write(path, &render_png(svg, args.scale)?);
    }
    match &args.output {
        Some(path) => write(path, svg.as_bytes()),
        None => {
            println!("{svg}");
            Ok(())
        }
    }
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
