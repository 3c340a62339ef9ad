use clap::{Parser, Subcommand};
use eastern_edition::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "eastern-edition")]
#[command(about = "Static site generator for the Eastern Edition landing page")]
#[command(long_about = "\
Static site generator for the Eastern Edition landing page

Every section ships with stock content. A config.toml in the source directory
overrides any part of it; unknown keys are rejected.

Source structure:

  content/
  ├── config.toml      # Optional overrides (see 'gen-config')
  └── assets/          # Copied verbatim to dist/assets/

Output structure:

  dist/
  ├── index.html
  ├── style.<hash>.css
  ├── site.<hash>.js
  ├── assets/
  └── sections/        # Deferred optional sections, fetched after load
      ├── testimonials.html
      ├── cta.html
      ├── about.html
      └── faq.html

Run 'eastern-edition gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory holding config.toml and assets/
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log build steps (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page into the output directory
    Build,
    /// Validate the configuration without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the resolved configuration as JSON
    Dump,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Loading config from {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            println!("==> Rendering page");
            let report = generate::generate(&site_config, &cli.source, &cli.output)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config, &cli.source);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Dump => {
            let site_config = config::load_config(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&site_config)?);
        }
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
