use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rasterfx", version)]
struct Cli {
    /// Log filter decisions at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a single filter to one image.
    Apply(ApplyArgs),
    /// Apply a JSON filter recipe to one image.
    Recipe(RecipeArgs),
    /// Apply a JSON filter recipe to many images in parallel.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Filter name: none, grayscale, sepia, sharpen or sharpen:<amount>.
    #[arg(long)]
    filter: String,

    /// Sharpen edge handling.
    #[arg(long, value_enum, default_value_t = BorderChoice::CopySource)]
    border: BorderChoice,
}

#[derive(Parser, Debug)]
struct RecipeArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Recipe JSON.
    #[arg(long)]
    recipe: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Recipe JSON.
    #[arg(long)]
    recipe: PathBuf,

    /// Directory receiving `<input stem>.png` for every input.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Input images.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderChoice {
    CopySource,
    Zero,
}

impl From<BorderChoice> for rasterfx::BorderPolicy {
    fn from(c: BorderChoice) -> Self {
        match c {
            BorderChoice::CopySource => Self::CopySource,
            BorderChoice::Zero => Self::Zero,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Recipe(args) => cmd_recipe(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let kind: rasterfx::FilterKind = args
        .filter
        .parse()
        .with_context(|| format!("parse filter '{}'", args.filter))?;
    let buffer = read_buffer(&args.in_path)?;
    let out = rasterfx::apply_filter_with(buffer, &kind, args.border.into())?;
    write_png(&args.out, out)
}

fn cmd_recipe(args: RecipeArgs) -> anyhow::Result<()> {
    let chain = rasterfx::FilterRecipe::from_path(&args.recipe)?.to_chain()?;
    let buffer = read_buffer(&args.in_path)?;
    let out = chain.apply(buffer)?;
    write_png(&args.out, out)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let chain = rasterfx::FilterRecipe::from_path(&args.recipe)?.to_chain()?;

    let mut out_paths = Vec::with_capacity(args.inputs.len());
    let mut seen = HashSet::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let stem = path
            .file_stem()
            .with_context(|| format!("input '{}' has no file name", path.display()))?;
        let mut name = stem.to_os_string();
        name.push(".png");
        let out = args.out_dir.join(name);
        if !seen.insert(out.clone()) {
            anyhow::bail!(
                "input '{}' maps to '{}', which another input already writes",
                path.display(),
                out.display()
            );
        }
        out_paths.push(out);
    }

    let buffers = args
        .inputs
        .iter()
        .map(|path| read_buffer(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let opts = rasterfx::BatchOpts {
        threads: args.threads,
    };
    let outputs = rasterfx::apply_batch(buffers, &chain, &opts)?;
    for (path, out) in out_paths.iter().zip(outputs) {
        write_png(path, out)?;
    }
    Ok(())
}

fn read_buffer(path: &Path) -> anyhow::Result<rasterfx::PixelBuffer> {
    let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    let buffer = rasterfx::PixelBuffer::try_from(img.to_rgba8())
        .with_context(|| format!("wrap pixels of '{}'", path.display()))?;
    Ok(buffer)
}

fn write_png(path: &Path, buffer: rasterfx::PixelBuffer) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let (width, height) = buffer.dimensions();
    image::save_buffer_with_format(
        path,
        buffer.as_raw(),
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::info!(path = %path.display(), width, height, "wrote");
    Ok(())
}
