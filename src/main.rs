//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::analyzer::Analyzer;
use chatlens::cli::{Args, DEFAULT_OUTPUT};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::parser::TranscriptParser;
use chatlens::text::StopWords;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the report banners.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let lib_format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, lib_format);
    let filter = args.filter();

    // Print header
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let content = fs::read_to_string(&args.input)?;
    let outcome = TranscriptParser::with_config(args.parser_config()).parse_with_diagnostics(&content)?;
    println!(
        "   Found {} messages ({:.2}s)",
        outcome.dataset.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if !outcome.skipped.is_empty() || outcome.dropped_lines > 0 {
        println!(
            "   Skipped {} malformed lines, dropped {} stray lines",
            outcome.skipped.len(),
            outcome.dropped_lines
        );
    }

    if args.list_users {
        println!();
        println!("👥 Users:");
        for option in outcome.dataset.selection_options() {
            println!("   {}", option);
        }
        return Ok(());
    }

    // Step 2: Session
    let stop_words = StopWords::from_resource(&args.stop_words)?;
    let analyzer = Analyzer::new(outcome.dataset)
        .with_config(args.analytics_config())
        .with_stop_words(stop_words);

    println!("👤 User:    {}", filter);
    if let Err(e) = analyzer.dataset().ensure_sender(&filter) {
        println!("⚠️  {} (results will be empty)", e);
    }
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", lib_format);
    if lib_format == OutputFormat::Csv {
        println!("📋 Table:   {}", args.table);
    }
    println!();

    // Step 3: Analyze and write
    println!("📊 Analyzing...");
    let write_start = Instant::now();
    write_to_format(&analyzer, &filter, args.table, &output_path, lib_format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    let stats = analyzer.fetch_stats(&filter);
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.messages);
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    format!("chat_report.{}", format.extension())
}
