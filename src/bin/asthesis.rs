use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use asthesis::{
    ChainConfig, ExplodedRig, FigmaProxy, FrameInput, ProxyConfig, ScrollSample, ScrollSequencer,
};

#[derive(Parser, Debug)]
#[command(name = "asthesis", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a scroll chain over a range of offsets and dump progress.
    Trace(TraceArgs),
    /// Dump the exploded-view layer poses at a progress value.
    Explode(ExplodeArgs),
    /// Run the Figma API proxy.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input chain configuration JSON; omit for the built-in landing-page
    /// chain.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1000.0)]
    viewport: f64,

    /// First scroll offset to sample.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset to sample (inclusive).
    #[arg(long)]
    to: f64,

    /// Sampling step in pixels.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Simulate the anchor node latching at this absolute scroll offset.
    #[arg(long)]
    anchor_at: Option<f64>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExplodeArgs {
    /// Explode progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Which rig to pose.
    #[arg(long, value_enum, default_value_t = RigChoice::Device)]
    rig: RigChoice,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address (overrides ASTHESIS_BIND).
    #[arg(long)]
    bind: Option<String>,

    /// Upstream API base (testing hook).
    #[arg(long)]
    upstream: Option<String>,

    /// Access token (overrides FIGMA_ACCESS_TOKEN).
    #[arg(long)]
    token: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RigChoice {
    Device,
    BackCase,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Explode(args) => cmd_explode(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn read_chain_json(path: &Path) -> anyhow::Result<ChainConfig> {
    let f = File::open(path).with_context(|| format!("open chain '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: ChainConfig = serde_json::from_reader(r).with_context(|| "parse chain JSON")?;
    Ok(cfg)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let config = match &args.in_path {
        Some(path) => read_chain_json(path)?,
        None => ChainConfig::asthesis_home(),
    };
    let mut sequencer = ScrollSequencer::new(config)?;

    anyhow::ensure!(args.step > 0.0, "step must be > 0");
    anyhow::ensure!(args.to >= args.from, "to must be >= from");

    let mut records = Vec::new();
    let mut scroll_y = args.from;
    while scroll_y <= args.to {
        let scroll = ScrollSample::new(scroll_y, args.viewport);
        // Synthesize the anchor node's viewport position so the latch
        // resolves exactly at --anchor-at.
        let anchor_center_y = args
            .anchor_at
            .map(|at| scroll.viewport_center() + (at - scroll_y));
        let progress = sequencer.sample(FrameInput {
            scroll,
            anchor_center_y,
        });
        records.push(serde_json::json!({
            "scroll_y": scroll_y,
            "stages": progress.iter().map(|(name, p)| {
                serde_json::json!({ "name": name, "progress": p })
            }).collect::<Vec<_>>(),
        }));
        scroll_y += args.step;
    }

    let out = serde_json::to_string_pretty(&records)?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let mut f = File::create(path)
                .with_context(|| format!("write trace '{}'", path.display()))?;
            f.write_all(out.as_bytes())?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{out}"),
    }
    Ok(())
}

fn cmd_explode(args: ExplodeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.progress),
        "progress must be in [0, 1]"
    );
    let rig = match args.rig {
        RigChoice::Device => ExplodedRig::device(),
        RigChoice::BackCase => ExplodedRig::back_case(),
    };
    let poses = rig.pose_at(args.progress);
    println!("{}", serde_json::to_string_pretty(&poses)?);
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ProxyConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(upstream) = args.upstream {
        config.upstream_base = upstream;
    }
    if let Some(token) = args.token {
        config.access_token = Some(token);
    }
    let proxy = FigmaProxy::new(config);
    proxy.serve()?;
    Ok(())
}
