//! audiobook-rs CLI entry point.

use std::process;

use anyhow::{Context, Result};
use audiobook_rs::audio::FfmpegTranscoder;
use audiobook_rs::backend::create_backend;
use audiobook_rs::cli::{Action, Args, ArgsError, speaker_listing};
use audiobook_rs::pipeline::{AudiobookGenerator, GenerateRequest};
use clap::{CommandFactory, Parser};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let request = match args.action() {
        Ok(Action::ListSpeakers) => {
            print!("{}", speaker_listing());
            return Ok(());
        }
        Ok(Action::Generate(request)) => request,
        Err(ArgsError::MissingPositional(_)) => {
            Args::command().print_help()?;
            process::exit(1);
        }
        Err(e @ ArgsError::ConflictingVoiceOptions) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    generate(&args, &request)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn generate(args: &Args, request: &GenerateRequest) -> Result<()> {
    let backend = create_backend(&args.host, args.port).context("Failed to create backend")?;
    let transcoder = FfmpegTranscoder::new(args.ffmpeg.clone());
    let generator = AudiobookGenerator::new(backend, transcoder);

    println!("Connecting to XTTS-v2 server at {}:{}", args.host, args.port);

    let audiobook = generator
        .generate(request)
        .context("Failed to generate audiobook")?;

    println!(
        "✓ Audiobook generated successfully: {}",
        audiobook.path().display()
    );
    println!("Duration: {} seconds", audiobook.duration_display());

    Ok(())
}
