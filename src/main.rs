use clap::{Parser, Subcommand};
use log::{error, info};
use roomprep::blob::Blob;
use roomprep::data_url::{DataUrl, read_as_data_url};
use roomprep::imaging::{CompressOptions, RustBackend, compress_many};
use roomprep::{config, output, prompt, validation};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roomprep")]
#[command(about = "Prepare room photos and prompts for interior-design generation")]
#[command(long_about = "\
Prepare room photos and prompts for interior-design generation

Uploads are checked against an allow-list (JPEG, PNG, WebP) and a 10 MiB
ceiling, shrunk to fit a bounding square, re-encoded as JPEG, and emitted as
self-contained data URLs that can be stored or posted as-is.

Examples:

  roomprep check living.jpg scan.gif
  roomprep compress living.jpg --max-dimension 768 --quality 0.7 > living.txt
  roomprep prompt \"Make it cozy\" --room living-room

Run 'roomprep gen-config' to generate a documented roomprep.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = "roomprep.toml", global = true)]
    config: PathBuf,

    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags for the compress command. Unset flags fall back to the config file.
#[derive(clap::Args)]
struct CompressArgs {
    /// Image files to compress
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Longest edge of the output, in pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// JPEG quality as a fraction in (0, 1]
    #[arg(long)]
    quality: Option<f32>,

    /// Enlarge images smaller than the max dimension
    /// (`--allow-upscale=false` turns off a config file's `true`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_upscale: Option<bool>,

    /// Write the data URL to a file instead of stdout (single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Check files against the upload allow-list and size ceiling
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print one JSON object per file instead of text
        #[arg(long)]
        json: bool,
    },
    /// Shrink images and print them as JPEG data URLs
    Compress(CompressArgs),
    /// Print a file, unmodified, as a data URL
    Encode { file: PathBuf },
    /// Decode a data URL stored in a file back to raw bytes
    Decode {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Compose a generation prompt for a room type
    Prompt {
        text: String,
        /// Room key, e.g. living-room (see `roomprep rooms`)
        #[arg(long)]
        room: String,
    },
    /// List known room types
    Rooms,
    /// Print a stock roomprep.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check { files, json } => {
            let mut all_valid = true;
            for path in &files {
                let blob = match Blob::from_path_metadata(path) {
                    Ok(blob) => blob,
                    Err(e) => {
                        all_valid = false;
                        if json {
                            let line = serde_json::json!({
                                "file": path.display().to_string(),
                                "valid": false,
                                "error": e.to_string(),
                            });
                            println!("{}", line);
                        } else {
                            error!("{e}");
                        }
                        continue;
                    }
                };
                let outcome = validation::validate(&blob);
                all_valid &= outcome.valid;

                if json {
                    let line = serde_json::json!({
                        "file": path.display().to_string(),
                        "valid": outcome.valid,
                        "failure": outcome.failure,
                        "message": outcome.message(),
                    });
                    println!("{}", line);
                } else {
                    output::print_validation(&label(path), blob.media_type(), blob.size(), &outcome);
                }
            }
            if !all_valid {
                std::process::exit(1);
            }
        }
        Command::Compress(args) => {
            let site_config = config::load_config(&cli.config)?;
            let options = site_config.compress.with_overrides(
                args.max_dimension,
                args.quality,
                args.allow_upscale,
            )?;
            if args.output.is_some() && args.files.len() > 1 {
                return Err("--output takes a single input file".into());
            }
            init_thread_pool(&site_config.processing);

            let blobs = args
                .files
                .iter()
                .map(|path| Blob::from_path(path))
                .collect::<Result<Vec<_>, _>>()?;
            let results = compress_many(&RustBackend::new(), &blobs, &options);

            let mut failed = false;
            for ((path, blob), result) in args.files.iter().zip(&blobs).zip(results) {
                match result {
                    Ok(compressed) => {
                        eprintln!(
                            "{}",
                            output::format_compression(&label(path), blob.size(), &compressed)
                        );
                        match &args.output {
                            Some(out) => {
                                std::fs::write(out, compressed.data_url)?;
                                info!("wrote {}", out.display());
                            }
                            None => println!("{}", compressed.data_url),
                        }
                    }
                    Err(e) => {
                        error!("{}: {}", path.display(), e);
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        Command::Encode { file } => {
            let blob = Blob::from_path(&file)?;
            println!("{}", read_as_data_url(&blob));
        }
        Command::Decode { input, output } => {
            let text = std::fs::read_to_string(&input)?;
            let data_url = DataUrl::parse(&text)?;
            std::fs::write(&output, &data_url.bytes)?;
            eprintln!(
                "{} → {} ({}, {})",
                label(&input),
                output.display(),
                data_url.media_type,
                output::format_bytes(data_url.bytes.len() as u64)
            );
        }
        Command::Prompt { text, room } => {
            println!("{}", prompt::compose_prompt(&text, &room));
        }
        Command::Rooms => {
            output::print_room_types(prompt::room_types());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Route `log` output to stderr. `-v` forces debug; otherwise `RUST_LOG`
/// decides, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// Short display name for a path: its file name, or the whole path.
fn label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
