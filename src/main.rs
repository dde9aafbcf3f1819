//! cloud-db-advisor: database architecture recommendations weighted by cost,
//! carbon and security.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use cloud_db_advisor::{
    AppConfig, PriorityPreset, cli,
    config::{
        ConfigOverrides, discover_config_file,
        file::{CONFIG_FILE_NAMES, search_paths},
        generate_full_example_config, load_or_default,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with reference data info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nArchitectures:",
        "\n  rds_multi_az, dynamodb, aurora_serverless (us-east-1 pricing and carbon)",
        "\n\nOutput Formats:",
        "\n  summary, table, json, markdown",
    )
}

#[derive(Parser)]
#[command(name = "cloud-db-advisor")]
#[command(version, long_version = build_long_version())]
#[command(
    about = "Recommend a cloud database architecture by cost, carbon and security",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Recommended score below --min-score
    3  Error occurred

EXAMPLES:
    # Balanced recommendation for the default workload
    cloud-db-advisor recommend

    # Security-heavy weighting for a 2 TB workload
    cloud-db-advisor recommend --storage-gb 2000 --preset security-first

    # CI gate: fail if nothing scores at least 75
    cloud-db-advisor recommend -o json --min-score 75

    # Five-year cost of ownership as Markdown
    cloud-db-advisor project --years 5 -o markdown")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "CLOUD_DB_ADVISOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output destination and format
#[derive(Args)]
struct OutputArgs {
    /// Output format (auto: summary on a terminal, JSON otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Workload and priority inputs shared by the evaluation commands
#[derive(Args)]
struct EvalArgs {
    /// Stored data volume in GB
    #[arg(long)]
    storage_gb: Option<f64>,

    /// Monthly requests in millions
    #[arg(long = "requests")]
    requests_millions: Option<f64>,

    /// Named priority preset (balanced, cost-first, green, security-first)
    #[arg(long)]
    preset: Option<String>,

    /// Relative importance of cost (overrides the preset)
    #[arg(long)]
    cost_weight: Option<f64>,

    /// Relative importance of carbon emissions (overrides the preset)
    #[arg(long)]
    carbon_weight: Option<f64>,

    /// Relative importance of security (overrides the preset)
    #[arg(long)]
    security_weight: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `recommend` subcommand
#[derive(Parser)]
struct RecommendArgs {
    #[command(flatten)]
    eval: EvalArgs,

    /// Exit with code 1 if the recommended option scores below this (0-100)
    #[arg(long)]
    min_score: Option<f64>,
}

/// Arguments for the `project` subcommand
#[derive(Parser)]
struct ProjectArgs {
    #[command(flatten)]
    eval: EvalArgs,

    /// Months of cumulative cost to show
    #[arg(long)]
    months: Option<u32>,

    /// Years used for total cost of ownership
    #[arg(long)]
    years: Option<u32>,
}

/// Arguments for the `options` subcommand
#[derive(Parser)]
struct OptionsArgs {
    /// Show only this architecture (e.g. rds, dynamodb, aurora)
    architecture: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every architecture and recommend one
    Recommend(RecommendArgs),

    /// Show cost, carbon, security and score for every architecture
    Metrics(EvalArgs),

    /// Project cumulative cost and total cost of ownership
    Project(ProjectArgs),

    /// Describe the available architectures
    Options(OptionsArgs),

    /// List the named priority presets
    Presets,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .cloud-db-advisor.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let globals = GlobalFlags {
        config: cli.config.clone(),
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Recommend(args) => {
            let mut overrides = globals.overrides(&args.eval);
            overrides.min_score = args.min_score;
            let config = globals.effective_config(args.eval.preset.as_deref(), &overrides)?;
            cli::run_recommend(&config)
        }

        Commands::Metrics(args) => {
            let overrides = globals.overrides(&args);
            let config = globals.effective_config(args.preset.as_deref(), &overrides)?;
            cli::run_metrics(&config)
        }

        Commands::Project(args) => {
            let mut overrides = globals.overrides(&args.eval);
            overrides.projection_months = args.months;
            overrides.tco_years = args.years;
            let config = globals.effective_config(args.eval.preset.as_deref(), &overrides)?;
            cli::run_project(&config)
        }

        Commands::Options(args) => {
            let overrides = ConfigOverrides {
                format: args.output.output,
                output_file: args.output.output_file.clone(),
                ..globals.base_overrides()
            };
            let config = globals.effective_config(None, &overrides)?;
            cli::run_options(&config, args.architecture.as_deref())
        }

        Commands::Presets => {
            for preset in PriorityPreset::all() {
                let p = preset.priorities();
                println!(
                    "{:<16} cost {:>2}  carbon {:>2}  security {:>2}  {}",
                    preset.name(),
                    p.cost,
                    p.carbon,
                    p.security,
                    preset.description()
                );
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "cloud-db-advisor",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = cloud_db_advisor::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Global flags that feed every evaluation
struct GlobalFlags {
    config: Option<PathBuf>,
    quiet: bool,
    no_color: bool,
}

impl GlobalFlags {
    fn base_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            no_color: self.no_color,
            quiet: self.quiet,
            ..ConfigOverrides::default()
        }
    }

    fn overrides(&self, args: &EvalArgs) -> ConfigOverrides {
        ConfigOverrides {
            storage_gb: args.storage_gb,
            requests_millions: args.requests_millions,
            cost_weight: args.cost_weight,
            carbon_weight: args.carbon_weight,
            security_weight: args.security_weight,
            format: args.output.output,
            output_file: args.output.output_file.clone(),
            ..self.base_overrides()
        }
    }

    /// Defaults, then config file, then preset, then explicit flags.
    fn effective_config(
        &self,
        preset: Option<&str>,
        overrides: &ConfigOverrides,
    ) -> Result<AppConfig> {
        let (mut config, loaded_from) = load_or_default(self.config.as_deref());
        if let Some(path) = &loaded_from {
            tracing::debug!("Using config file {}", path.display());
        }

        if let Some(name) = preset {
            let Some(preset) = PriorityPreset::from_name(name) else {
                let valid = PriorityPreset::all()
                    .iter()
                    .map(PriorityPreset::name)
                    .collect::<Vec<_>>()
                    .join(", ");
                bail!("Unknown priority preset: {name}. Valid options: {valid}");
            };
            config.priorities = preset.priorities();
        }

        config.apply(overrides);
        Ok(config)
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for path in search_paths() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".cloud-db-advisor.yaml");
            if target.exists() {
                bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
