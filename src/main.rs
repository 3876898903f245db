use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use roomgen::{Error, Generator, MazeConfig, config::parse_coverage, generate_maze, graph, render};

/// Rooms-and-corridors layout generator
#[derive(Parser, Debug)]
#[command(name = "roomgen")]
#[command(version, about = "Generate a rooms-and-corridors layout and render it to a PNG image", long_about = None)]
struct Args {
    /// Area width in tiles
    #[arg(long, default_value_t = 1000)]
    width: u16,

    /// Area height in tiles
    #[arg(long, default_value_t = 1000)]
    height: u16,

    /// Minimum room width
    #[arg(long, default_value_t = 2)]
    min_room_width: u16,

    /// Minimum room height
    #[arg(long, default_value_t = 2)]
    min_room_height: u16,

    /// Maximum room width
    #[arg(long, default_value_t = 200)]
    max_room_width: u16,

    /// Maximum room height
    #[arg(long, default_value_t = 200)]
    max_room_height: u16,

    /// Target coverage as a fraction (0.5) or a percentage (50)
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    coverage: f64,

    /// Hallway width in tiles
    #[arg(long, default_value_t = 1)]
    hallway_width: u16,

    /// Connectivity algorithm: rooms_and_corridors or closest_wall
    #[arg(long, default_value = "rooms_and_corridors")]
    algorithm: String,

    /// Output PNG path
    #[arg(short, long, default_value = "maze.png")]
    output: PathBuf,

    /// Optional Graphviz DOT path for the room graph
    #[arg(long)]
    graph_output: Option<PathBuf>,

    /// Random seed for reproducible layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Print the layout to the terminal as well
    #[arg(long)]
    preview: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn to_config(&self) -> Result<MazeConfig, Error> {
        Ok(MazeConfig {
            width: self.width,
            height: self.height,
            min_room_width: self.min_room_width,
            min_room_height: self.min_room_height,
            max_room_width: self.max_room_width,
            max_room_height: self.max_room_height,
            coverage: parse_coverage(self.coverage),
            hallway_width: self.hallway_width,
            algorithm: self.algorithm.parse::<Generator>()?,
            seed: self.seed,
        })
    }
}

/// Installs the global subscriber. The returned guard flushes the log file on drop.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log file path '{}' has no file name", path.display()),
                )
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            subscriber.with_ansi(false).with_writer(writer).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = args.to_config()?;
    tracing::debug!("[main] {:?}", config);

    let maze = generate_maze(&config)?;
    render::save_png(maze.grid(), &args.output)?;

    if let Some(path) = &args.graph_output {
        let edges = graph::build_room_mst(maze.rooms());
        graph::write_graphviz(maze.rooms(), &edges, path)?;
        tracing::info!("[main] wrote room graph with {} edges to {}", edges.len(), path.display());
    }

    if args.preview {
        render::preview(maze.grid(), &mut std::io::stdout())?;
    }

    println!(
        "Generated {} rooms on a {}x{} grid with '{}'. Coverage: {:.1}% ({}/{} tiles). Output: {}",
        maze.rooms().len(),
        maze.width(),
        maze.height(),
        config.algorithm.name(),
        maze.coverage() * 100.0,
        maze.filled_count(),
        config.area(),
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match init_logging(args.verbose, args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to set up logging: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Logs `err` and prints it to `out`, whatever the log filter lets through.
fn report_error(err: &Error, out: &mut impl Write) {
    tracing::error!("[main] {}", err);
    // Nothing is left to report to if stderr itself is gone
    let _ = writeln!(out, "Error: {}", err);
}
