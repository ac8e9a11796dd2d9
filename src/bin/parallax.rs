use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "parallax", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an event script and print one transform per event as JSON lines.
    Replay(ReplayArgs),
    /// Print the default engine configuration as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print driver statistics to stderr after the replay.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = parallax::Script::from_path(&args.in_path)?;
    let replay = parallax::replay(&script)?;

    let mut sink: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    for step in &replay.steps {
        serde_json::to_writer(&mut sink, step).with_context(|| "serialize replay step")?;
        writeln!(sink)?;
    }
    sink.flush()?;

    if args.stats {
        let s = replay.stats;
        eprintln!("scroll events:     {}", s.scroll_events);
        eprintln!("frames requested:  {}", s.frames_requested);
        eprintln!("geometry reads:    {}", s.geometry_reads);
        eprintln!("scroll recomputes: {}", s.scroll_recomputes);
    }
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    let cfg = parallax::EngineConfig::default();
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
