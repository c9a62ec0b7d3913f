use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "eventsketch", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a long log into separate logs wherever the recording paused.
    Split(SplitArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input event log (rows of `timestamp,source,payload`).
    log: Option<PathBuf>,

    /// Output PNG path [default: output.png].
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config file (magnitude_source, state_source, output).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source identifier of the magnitude channel.
    #[arg(long)]
    magnitude_source: Option<String>,

    /// Source identifier of the on/off channel.
    #[arg(long)]
    state_source: Option<String>,

    /// Also write the computed scene (region, lines, circles) as JSON.
    #[arg(long)]
    dump_scene: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Input event log.
    log: PathBuf,

    /// Directory for the segment files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Largest gap, in minutes, allowed inside one segment.
    #[arg(long, default_value_t = eventsketch::DEFAULT_MAX_GAP_MINUTES)]
    gap_minutes: i64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Some(Command::Split(args)) => cmd_split(args),
        None => cmd_render(cli.render),
    }
}

fn load_config(args: &RenderArgs) -> anyhow::Result<eventsketch::SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => eventsketch::SketchConfig::from_path(path)?,
        None => eventsketch::SketchConfig::default(),
    };
    if let Some(out) = &args.out {
        cfg.output = out.clone();
    }
    if let Some(src) = &args.magnitude_source {
        cfg.magnitude_source = src.clone();
    }
    if let Some(src) = &args.state_source {
        cfg.state_source = src.clone();
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let Some(log) = args.log.as_deref() else {
        anyhow::bail!("missing input log path (usage: eventsketch <LOG>)");
    };
    let cfg = load_config(&args)?;

    let report = eventsketch::render_log(log, &cfg)?;

    if let Some(path) = &args.dump_scene {
        dump_scene_json(&report.scene, path)?;
    }

    println!("Time elapsed: {}", report.elapsed_text());
    eprintln!(
        "wrote {} ({} lines, {} circles, {} skipped)",
        report.output.display(),
        report.scene.lines.len(),
        report.scene.circles.len(),
        report.scene.diagnostics.len()
    );
    Ok(())
}

fn dump_scene_json(scene: &eventsketch::Scene, path: &Path) -> anyhow::Result<()> {
    eventsketch::ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), scene)
        .with_context(|| format!("write scene JSON '{}'", path.display()))?;
    Ok(())
}

fn cmd_split(args: SplitArgs) -> anyhow::Result<()> {
    if args.gap_minutes < 0 {
        anyhow::bail!("--gap-minutes must be >= 0");
    }
    let Some(max_gap) = eventsketch::TimeDelta::try_minutes(args.gap_minutes) else {
        anyhow::bail!("--gap-minutes {} is out of range", args.gap_minutes);
    };
    let text = std::fs::read_to_string(&args.log)
        .with_context(|| format!("read event log '{}'", args.log.display()))?;
    let split = eventsketch::split_by_gap(&text, max_gap)?;
    let written = eventsketch::write_segments(&split, &args.out_dir)?;

    for path in &written {
        println!("{}", path.display());
    }
    eprintln!("wrote {} segment(s)", written.len());
    Ok(())
}
