use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shadowlayout", version)]
struct Cli {
    /// Log debug events (ring counts, skip decisions) to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render content with its silhouette shadow as a PNG.
    Frame(FrameArgs),
    /// Print the silhouette outline of an image as JSON.
    Outline(OutlineArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Content image (PNG or any format `image` can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Shadow style JSON. Defaults apply to anything left out.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background colour (#RRGGBB or #RRGGBBAA). Transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Number of redraws to run before writing the frame.
    #[arg(long, default_value_t = 1)]
    redraws: u32,
}

#[derive(Parser, Debug)]
struct OutlineArgs {
    /// Content image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path. Written to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Outline(args) => cmd_outline(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_content(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let img = image::open(path).with_context(|| format!("open content '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let content = read_content(&args.in_path)?;
    let style = match &args.style {
        Some(p) => shadowlayout::ShadowStyle::from_json_file(p)?,
        None => shadowlayout::ShadowStyle::default(),
    };
    let config = style.resolve()?;
    let background = args
        .background
        .as_deref()
        .map(shadowlayout::parse_hex)
        .transpose()
        .map_err(anyhow::Error::msg)
        .context("parse --background")?
        .map(|c| c.to_rgba8());

    let size = shadowlayout::Canvas::new(content.width(), content.height());
    let mut layout = shadowlayout::ShadowLayout::new(size, config)?;
    layout.set_content_image(&content)?;
    for _ in 0..args.redraws.max(1) {
        let report = layout.redraw()?;
        tracing::debug!(?report, "redraw");
    }

    let frame = layout.compose(background);
    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_outline(args: OutlineArgs) -> anyhow::Result<()> {
    let content = read_content(&args.in_path)?;
    let snapshot = shadowlayout::ContentSnapshot::from_image(&content);
    let outline = shadowlayout::extract_outline(&snapshot);

    let doc = serde_json::json!({
        "width": content.width(),
        "height": content.height(),
        "points": outline.points(),
    });

    match &args.out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path)
                .with_context(|| format!("create outline json '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &doc).context("write outline json")?;
            w.flush().context("flush outline json")?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &doc).context("write outline json")?;
            writeln!(w).context("write outline json")?;
        }
    }
    Ok(())
}
