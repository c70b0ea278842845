use clap::{Parser, Subcommand};
use justified_rows::{config, gallery, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that lay out a gallery.
#[derive(clap::Args, Clone)]
struct InputArgs {
    /// Gallery manifest with per-section item dimensions
    #[arg(long, default_value = "gallery.json")]
    manifest: PathBuf,
}

#[derive(Parser)]
#[command(name = "justified-rows")]
#[command(about = "Justified-row layout for gallery pages")]
#[command(long_about = "\
Justified-row layout for gallery pages

Packs images and videos into rows that exactly fill a fixed width while
keeping every item's aspect ratio. Dimensions come from a gallery manifest;
layout policy comes from layout.toml.

Manifest structure (gallery.json):

  {
    \"sections\": [
      {
        \"key\": \"main\",                 # matches [sections.main] in layout.toml
        \"title\": \"Display\",            # optional
        \"items\": [
          { \"src\": \"01.mp4\", \"width\": 1920, \"height\": 1080 },
          { \"src\": \"02.jpg\", \"width\": 1200, \"height\": 800 }
        ]
      }
    ]
  }

Items are numbered across the whole gallery in manifest order. Videos are
detected by extension (.mp4, .webm, .mov) unless \"is_video\" is given.

Run 'justified-rows gen-config' to generate a documented layout.toml.")]
#[command(version)]
struct Cli {
    /// Layout configuration file (missing file = stock defaults)
    #[arg(long, default_value = "layout.toml", global = true)]
    config: PathBuf,

    /// Maximum parallel layout workers (default: all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out every section and print the rows
    Layout {
        #[command(flatten)]
        input: InputArgs,
        /// Emit JSON for the renderer instead of the text tree
        #[arg(long)]
        json: bool,
        /// Write JSON here instead of stdout (implies --json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate config and manifest, reporting one line per section
    Check(InputArgs),
    /// Print a stock layout.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    init_thread_pool(cli.threads);

    match cli.command {
        Command::Layout {
            input,
            json,
            output: output_path,
        } => {
            let layout = gallery::layout_from_files(&input.manifest, &cli.config)?;
            if let Some(path) = output_path {
                let text = serde_json::to_string_pretty(&layout)?;
                std::fs::write(&path, text)?;
                println!("==> Layout written: {}", path.display());
            } else if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                output::print_gallery_layout(&layout);
            }
            if layout.failed_count() > 0 {
                std::process::exit(1);
            }
        }
        Command::Check(input) => {
            println!("==> Checking {}", input.manifest.display());
            let layout = gallery::layout_from_files(&input.manifest, &cli.config)?;
            output::print_check_output(&layout);
            if layout.failed_count() > 0 {
                std::process::exit(1);
            }
            println!("==> Layout is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for JSON. Level from `RUST_LOG`,
/// `warn` when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize the rayon thread pool.
///
/// Caps at the number of available CPU cores. The user can constrain down, not up.
fn init_thread_pool(threads: Option<usize>) {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let threads = threads.map(|n| n.clamp(1, cores)).unwrap_or(cores);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
