//! Algorithm visualizer CLI.
//!
//! Provides the `algoviz` binary with subcommands for exploring the
//! algorithm catalog and for running an algorithm against a manual or
//! randomly generated array. A run either animates the recorded trace
//! step-by-step in the terminal or prints it in full (plain or JSON).
//!
//! Uses the same `algoviz_engine::generate()` entry point a graphical
//! front end would, so both consume identical traces.

use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};

use algoviz_core::{Algorithm, Catalog, Element, Status, Trace};
use algoviz_engine::{input, Playback};

/// Algorithm visualizer and trace explorer.
#[derive(Parser)]
#[command(name = "algoviz", about = "Animated sorting and searching algorithm traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the algorithm catalog.
    List {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run an algorithm and show its trace.
    Run {
        /// Algorithm slug, e.g. bubble-sort (see `algoviz list`).
        #[arg(short, long)]
        algorithm: String,

        /// Comma-separated input values, e.g. "5, 2, 9, 1, 5".
        #[arg(long)]
        array: Option<String>,

        /// Random array size (used when --array is absent).
        #[arg(long, default_value_t = 10)]
        size: usize,

        /// Minimum random value.
        #[arg(long, default_value_t = 1)]
        min: i64,

        /// Maximum random value.
        #[arg(long, default_value_t = 100)]
        max: i64,

        /// Random seed (same seed reproduces the same array).
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Target value (required for searches).
        #[arg(short, long)]
        target: Option<i64>,

        /// Milliseconds between animation steps.
        #[arg(long, default_value_t = 400)]
        speed: u64,

        /// Print every step at once instead of animating.
        #[arg(long)]
        no_animate: bool,

        /// Print the full trace as JSON to stdout.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List { json } => run_list(json),
        Commands::Run {
            algorithm,
            array,
            size,
            min,
            max,
            seed,
            target,
            speed,
            no_animate,
            json,
        } => run_algorithm(
            &algorithm, array, size, min, max, seed, target, speed, no_animate, json,
        ),
    };
    process::exit(exit_code);
}

/// Execute the list subcommand.
///
/// Returns exit code: 0 = success, 1 = serialization error.
fn run_list(json: bool) -> i32 {
    let catalog = Catalog::new();

    if json {
        let entries: Vec<_> = catalog.iter().collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize catalog: {}", e);
                return 1;
            }
        }
        return 0;
    }

    for info in catalog.iter() {
        println!(
            "{:<15} {:<15} {:<10} best {:<11} avg {:<11} worst {:<7} space {}",
            info.algorithm.slug(),
            info.algorithm.name(),
            info.algorithm.category().to_string(),
            info.time_best,
            info.time_average,
            info.time_worst,
            info.space,
        );
    }
    0
}

/// Execute the run subcommand.
///
/// Returns exit code: 0 = success, 1 = usage or input error.
#[allow(clippy::too_many_arguments)]
fn run_algorithm(
    slug: &str,
    array: Option<String>,
    size: usize,
    min: i64,
    max: i64,
    seed: u64,
    target: Option<i64>,
    speed: u64,
    no_animate: bool,
    json: bool,
) -> i32 {
    let algorithm = match Algorithm::from_slug(slug) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}. Run `algoviz list` for available algorithms.", e);
            return 1;
        }
    };

    if algorithm.requires_target() && target.is_none() {
        eprintln!("Error: {} requires --target.", algorithm.name());
        return 1;
    }

    let elements = match provision_input(algorithm, array, size, min, max, seed) {
        Ok(els) => els,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let trace = match algoviz_engine::generate(algorithm, &elements, target) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    tracing::info!("{}: {} steps recorded", algorithm.name(), trace.len());

    if json {
        match serde_json::to_string_pretty(&trace) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize trace: {}", e);
                return 1;
            }
        }
        return 0;
    }

    if no_animate {
        print_all_steps(&trace);
    } else {
        animate(trace, speed);
    }
    0
}

/// Builds the input array from either a manual value list or the seeded
/// random generator, enforcing the sorted precondition for binary search.
fn provision_input(
    algorithm: Algorithm,
    array: Option<String>,
    size: usize,
    min: i64,
    max: i64,
    seed: u64,
) -> Result<Vec<Element>, String> {
    match array {
        Some(text) => {
            let values = input::parse_values(&text).map_err(|e| e.to_string())?;
            let elements = input::elements_from_values(&values);
            if algorithm == Algorithm::BinarySearch {
                input::ensure_sorted(&elements)
                    .map_err(|e| format!("{} (binary search needs an ascending array)", e))?;
            }
            Ok(elements)
        }
        None => {
            let mut elements =
                input::random_elements(size, min, max, seed).map_err(|e| e.to_string())?;
            if algorithm == Algorithm::BinarySearch {
                // A random array is provisioned sorted so the precondition holds.
                let mut values: Vec<i64> = elements.iter().map(|el| el.value).collect();
                values.sort_unstable();
                elements = input::elements_from_values(&values);
            }
            Ok(elements)
        }
    }
}

/// Prints the whole trace at once, one step per line pair.
fn print_all_steps(trace: &Trace) {
    let width = trace.len().to_string().len();
    for (i, step) in trace.iter().enumerate() {
        println!("[{:>w$}/{}] {}", i + 1, trace.len(), step.description, w = width);
        println!("        {}", render_elements(&step.array));
    }
    println!(
        "\n{} steps, {} comparisons, {} swaps",
        trace.len(),
        trace.comparison_count(),
        trace.swap_count()
    );
}

/// Plays the trace through the playback controller, one tick per
/// `speed` milliseconds.
fn animate(trace: Trace, speed: u64) {
    let total = trace.len();
    let width = total.to_string().len();
    let mut playback = Playback::new(trace);
    playback.play();

    loop {
        if let Some(step) = playback.current() {
            println!(
                "[{:>w$}/{}] {}",
                playback.cursor() + 1,
                total,
                step.description,
                w = width
            );
            println!("        {}", render_elements(&step.array));
        }

        if playback.is_complete() {
            break;
        }

        thread::sleep(Duration::from_millis(speed));
        playback.tick();
    }

    println!(
        "\n{} steps, {} comparisons, {} swaps",
        total,
        playback.comparisons(),
        playback.swaps()
    );
}

/// One-line array rendering with status markers: `(n)` comparing,
/// `<n>` swapping, `[n]` sorted.
fn render_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|el| match el.status {
            Status::Default => el.value.to_string(),
            Status::Comparing => format!("({})", el.value),
            Status::Swapping => format!("<{}>", el.value),
            Status::Sorted => format!("[{}]", el.value),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
