//! Classroom CLI for the animated sort visualizer.

use clap::Parser;
use sort_classroom_rs::driver::{run, Algorithm, RunConfig};
use sort_classroom_rs::input::{parse_values, random_values};
use sort_classroom_rs::render::{format_final, TerminalSink};
use sort_step_tools::NullSink;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sort-classroom")]
#[command(about = "Animated comparison-sort visualizer for the terminal")]
#[command(version)]
struct Cli {
    /// Algorithm to animate (bubble, selection, insertion, insertion-textbook)
    #[arg(short, long, default_value = "bubble", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Delay between animation frames (e.g. "300ms", "1s")
    #[arg(short, long, default_value = "300ms")]
    delay: humantime::Duration,

    /// Comma-separated values to sort, e.g. "19, 80, 77, 11, 54".
    /// Random data is generated when omitted.
    #[arg(short, long)]
    values: Option<String>,

    /// Number of random elements to generate (2 to 20)
    #[arg(short, long, default_value = "10")]
    count: usize,

    /// Seed for reproducible random data
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the animation and print the final summary only
    #[arg(long)]
    no_animation: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so animation frames on stdout stay intact.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let values = match &cli.values {
        Some(raw) => parse_values(raw)?,
        None => random_values(cli.count, cli.seed)?,
    };

    let config = RunConfig::new(cli.algorithm, values).with_delay(cli.delay.into());

    let outcome = if cli.no_animation {
        run(&config, &mut NullSink)
    } else {
        let mut sink = TerminalSink::new(config.delay);
        run(&config, &mut sink)
    };

    println!("{}", format_final(&outcome.sorted, &outcome.counters));
    Ok(())
}
