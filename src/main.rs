//! # wordstorm CLI
//!
//! Command-line interface for the wordstorm library.

use std::fmt::Display;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use rand::Rng;
use tracing_subscriber::EnvFilter;

use wordstorm::WordstormError;
use wordstorm::cli::Args;
use wordstorm::config::SEED_RANGE;
use wordstorm::format::{TableFormat, to_format_string};
use wordstorm::input::read_input;
use wordstorm::pipeline::run_pipeline;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        if e.is_user_warning() {
            eprintln!("⚠️  {e}");
            process::exit(2);
        }
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordstorm={}", args.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Decorative progress output.
///
/// Silent with `--quiet`; routed to stderr when stdout carries CSV or JSON.
struct Console {
    quiet: bool,
    to_stderr: bool,
}

impl Console {
    fn new(args: &Args) -> Self {
        Self {
            quiet: args.quiet,
            to_stderr: TableFormat::from(args.table) != TableFormat::Text,
        }
    }

    fn say(&self, line: impl Display) {
        if self.quiet {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

fn run(args: &Args) -> Result<(), WordstormError> {
    let total_start = Instant::now();
    let console = Console::new(args);

    let (seed, seed_note) = match args.seed {
        Some(seed) => (seed, ""),
        None => (rand::thread_rng().gen_range(SEED_RANGE), " (random)"),
    };
    let config = args.pipeline_config(seed)?;

    console.say(format_args!("☁️  wordstorm v{}", env!("CARGO_PKG_VERSION")));
    console.say("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    console.say(format_args!("📂 Input:   {}", args.input.display()));
    console.say(format_args!("🖼️  Output:  {}", args.output.display()));
    console.say(format_args!("🎨 Theme:   {}", args.theme));
    console.say(format_args!(
        "⚖️  Mode:    {}",
        if args.no_freq { "processed text" } else { "word frequency" }
    ));
    console.say(format_args!("🎲 Seed:    {seed}{seed_note}"));
    if args.include_emojis {
        console.say("😀 Emojis:  kept");
    }
    if let Some(ref from) = args.from {
        console.say(format_args!("👤 From:    {from}"));
    }
    if let Some(ref after) = args.after {
        console.say(format_args!("📅 After:   {after}"));
    }
    if let Some(ref before) = args.before {
        console.say(format_args!("📅 Before:  {before}"));
    }
    console.say("");

    console.say("⏳ Reading export...");
    let lines = read_input(&args.input)?;

    console.say("🔍 Extracting messages and drawing cloud...");
    let report = run_pipeline(lines, &config)?;
    console.say(format_args!(
        "   {} messages from {} lines ({:.1}%)",
        report.stats.kept,
        report.stats.lines,
        report.stats.yield_ratio()
    ));
    console.say(format_args!(
        "   {} words placed on the cloud",
        report.cloud.words().len()
    ));
    console.say("");

    console.say("📊 Top words:");
    let table = to_format_string(&report.table, args.table.into())?;
    print!("{table}");
    if !table.ends_with('\n') {
        println!();
    }
    console.say("");

    report.cloud.save_png(&args.output)?;
    console.say(format_args!(
        "✅ Done! Word cloud saved to {}",
        args.output.display()
    ));
    console.say(format_args!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    ));

    Ok(())
}
