use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitfolio::catalog::{available_categories, filter_projects, CatalogFilter};
use gitfolio::certifications::{CertificationSet, ALL_CERTIFICATIONS};
use gitfolio::project::{DisplayProject, ProjectStatus};
use gitfolio::{Config, ProjectPipeline};

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(about = "Portfolio project pipeline: fetch, classify and rank GitHub repositories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (defaults to XDG config location)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init {
        /// GitHub account to build the portfolio from
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Show the home-page featured widget (top 4 projects by score)
    Featured {
        /// Emit JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show the full project catalog
    Projects {
        /// Only show projects in this category
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search over title, description, tech and topics
        #[arg(long)]
        search: Option<String>,

        /// Emit JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show certifications and achievements
    Certifications {
        /// Only show certifications in this category
        #[arg(long, default_value = ALL_CERTIFICATIONS)]
        category: String,

        /// Override the configured data file path
        #[arg(long)]
        path: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config)?;

    init_logging(cli.verbose, &config.logging.level)?;
    info!("Starting gitfolio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Init { username } => cmd_init(username, &config),
        Commands::Featured { json } => cmd_featured(json, config).await,
        Commands::Projects {
            category,
            search,
            json,
        } => cmd_projects(category, search, json, config).await,
        Commands::Certifications { category, path } => {
            cmd_certifications(&category, path, &config)
        }
    }
}

/// Initialize logging from the configured level, with -v forcing debug
fn init_logging(verbose: bool, level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

/// Load configuration from specified path or default location
fn load_config(config_path: Option<std::path::PathBuf>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load(&path),
        None => Config::load_or_default(),
    }
}

/// Write a configuration file the user can edit
fn cmd_init(username: Option<String>, config: &Config) -> Result<()> {
    let mut new_config = config.clone();
    if let Some(username) = username {
        new_config.github.username = username;
    }

    let config_path = Config::default_config_path()?;
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    new_config.save(&config_path)?;

    println!("✅ gitfolio initialized");
    println!("   Config: {:?}", config_path);
    println!("   Account: {}", new_config.github.username);

    Ok(())
}

/// The home-page featured widget
///
/// A listing failure falls back to a single static project so the section is
/// never empty; rerun the command to retry.
async fn cmd_featured(json: bool, config: Config) -> Result<()> {
    let pipeline = ProjectPipeline::new(config)?;
    let projects = pipeline.featured_or_fallback().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    println!("🌟 Featured Projects ({}):", projects.len());
    println!();
    for project in &projects {
        print_project_card(project);
    }

    Ok(())
}

/// The full catalog page
///
/// A listing failure here is the page-level error state: the command fails
/// with the fetch error and the user retries by rerunning.
async fn cmd_projects(
    category: Option<String>,
    search: Option<String>,
    json: bool,
    config: Config,
) -> Result<()> {
    let pipeline = ProjectPipeline::new(config)?;
    let projects = pipeline.catalog_projects().await?;

    let categories = available_categories(&projects);
    let filter = CatalogFilter::new(category, search);
    let matched = filter_projects(&projects, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    println!("📂 Categories: {}", categories.join(", "));
    println!(
        "📁 Projects ({} of {} shown):",
        matched.len(),
        projects.len()
    );
    println!();
    for project in matched {
        print_project_card(project);
    }

    Ok(())
}

/// The certifications page
fn cmd_certifications(
    category: &str,
    path: Option<std::path::PathBuf>,
    config: &Config,
) -> Result<()> {
    let configured = Path::new(&config.certifications.path);
    let path = path.as_deref().unwrap_or(configured);
    let set = CertificationSet::load(path)?;

    let stats = set.stats();
    println!("🏆 Certifications & Achievements");
    println!(
        "   Total: {} | Completed: {} | In Progress: {} | Participated: {}",
        stats.total, stats.completed, stats.in_progress, stats.participated
    );

    if !set.categories.is_empty() {
        let chips: Vec<String> = set
            .categories
            .iter()
            .map(|c| format!("{} ({})", c.label, set.category_count(&c.id)))
            .collect();
        println!("   Filters: {}", chips.join(", "));
    }

    let matched = set.filtered(category);
    if matched.is_empty() {
        println!();
        println!("No certifications found");
        return Ok(());
    }

    println!();
    for cert in matched {
        println!("🎓 {} — {}", cert.title, cert.provider);
        println!("   📅 {} | {}", cert.issue_date, cert.status);
        if !cert.description.is_empty() {
            println!("   📝 {}", cert.description);
        }
        if !cert.skills.is_empty() {
            println!("   🔧 {}", cert.skills.join(", "));
        }
        if let Some(credential_id) = &cert.credential_id {
            println!("   🆔 {}", credential_id);
        }
        println!();
    }

    Ok(())
}

/// Print one project card to stdout
fn print_project_card(project: &DisplayProject) {
    let status_icon = match project.status {
        ProjectStatus::Active => "🟢",
        ProjectStatus::Archived => "📦",
    };

    if project.featured {
        println!("📁 {} ⭐ [{}] {}", project.title, project.category, status_icon);
    } else {
        println!("📁 {} [{}] {}", project.title, project.category, status_icon);
    }
    println!("   📝 {}", project.description);
    if !project.tech.is_empty() {
        println!("   🔧 {}", project.tech.join(", "));
    }
    println!(
        "   ⭐ {} | 🍴 {} | 👁 {}",
        project.stats.stars, project.stats.forks, project.stats.watchers
    );
    println!("   🔗 {}", project.github);
    println!("   🚀 {}", project.demo);
    println!();
}
