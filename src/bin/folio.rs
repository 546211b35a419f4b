use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a catalog and print its counts.
    Check(CheckArgs),
    /// Print the projects visible under a filter selection.
    Filter(FilterArgs),
    /// Print the section active at a scroll offset.
    Scroll(ScrollArgs),
    /// Run the decorative scene for a number of frames and dump a JSON snapshot.
    Scene(SceneArgs),
    /// Submit a contact message through the configured function host.
    Send(SendArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Category id, or `all`.
    #[arg(long, default_value = "all")]
    category: String,

    /// Subcategory id, or `all`. Requires a concrete category.
    #[arg(long, default_value = "all")]
    subcategory: String,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Document scroll offset in CSS pixels.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Section layout JSON (defaults to stacked 800px sections).
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Frames to render before the snapshot.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Render the project gallery instead of the background.
    #[arg(long)]
    gallery: bool,

    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SendArgs {
    /// Sender name.
    #[arg(long)]
    name: String,

    /// Sender email.
    #[arg(long)]
    email: String,

    /// Message body.
    #[arg(long)]
    message: String,

    /// Site configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

const DEFAULT_SECTION_HEIGHT: f64 = 800.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Filter(args) => cmd_filter(args),
        Command::Scroll(args) => cmd_scroll(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Send(args) => cmd_send(args),
    }
}

fn read_catalog(path: Option<&Path>) -> anyhow::Result<folio::Catalog> {
    let catalog = match path {
        Some(p) => folio::Catalog::from_path(p)
            .with_context(|| format!("load catalog '{}'", p.display()))?,
        None => folio::Catalog::builtin(),
    };
    catalog.validate().context("validate catalog")?;
    Ok(catalog)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<folio::SiteConfig> {
    let cfg = match path {
        Some(p) => folio::SiteConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => folio::SiteConfig::default(),
    };
    let cfg = cfg.with_env_overrides();
    cfg.validate().context("validate config")?;
    Ok(cfg)
}

fn default_layout() -> anyhow::Result<folio::PageLayout> {
    let mut layout = folio::PageLayout::new();
    for (i, section) in folio::SectionId::ALL.into_iter().enumerate() {
        let band = folio::Band::new(i as f64 * DEFAULT_SECTION_HEIGHT, DEFAULT_SECTION_HEIGHT)?;
        layout.insert(section, band);
    }
    Ok(layout)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    println!("projects: {}", catalog.projects.len());
    println!("categories: {}", catalog.categories.len());
    println!(
        "skills: {} (average level {})",
        catalog.total_skills(),
        catalog.average_level()
    );
    println!("certifications: {}", catalog.certifications.len());
    Ok(())
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    let category: folio::CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("parse category '{}'", args.category))?;
    let subcategory: folio::SubcategoryFilter = args
        .subcategory
        .parse()
        .with_context(|| format!("parse subcategory '{}'", args.subcategory))?;

    let mut gallery = folio::ProjectGallery::new();
    gallery.select_category(category);
    gallery.select_subcategory(subcategory)?;

    match gallery.view(&catalog) {
        folio::GalleryView::Projects(projects) => {
            for p in projects {
                println!("{}", p.title);
            }
        }
        folio::GalleryView::Empty { .. } => println!("no projects in this category yet"),
    }
    Ok(())
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let layout = match &args.layout {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open layout '{}'", p.display()))?;
            folio::PageLayout::from_reader(BufReader::new(f))
                .with_context(|| format!("parse layout '{}'", p.display()))?
        }
        None => default_layout()?,
    };
    let mut tracker = folio::ScrollTracker::new(&cfg.scroll);
    println!("{}", tracker.sample(args.y, &layout));
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mut device = folio::HeadlessDevice::new();
    let mut scene = if args.gallery {
        let catalog = folio::Catalog::builtin();
        let gallery = folio::Gallery::from_catalog(&catalog, cfg.scene.gallery_radius);
        folio::SceneRenderer::gallery(&cfg.scene, gallery)
    } else {
        folio::SceneRenderer::background(&cfg.scene)
    };
    scene.mount(&mut device)?;
    for _ in 0..args.frames {
        scene.frame();
    }
    let snapshot = scene.snapshot();
    scene.unmount(&mut device);

    let json = serde_json::to_string_pretty(&snapshot).context("serialize scene snapshot")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn cmd_send(args: SendArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let client = folio::HttpFunctionClient::from_config(&cfg.contact)?;
    let relay = folio::ContactRelay::new(client);

    let mut form = folio::ContactForm::new(&cfg.contact);
    form.name = args.name;
    form.email = args.email;
    form.message = args.message;
    relay.submit(&mut form)?;

    match form.notice() {
        Some(n) => eprintln!("{}: {}", n.title, n.description),
        None => eprintln!("sent"),
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn cmd_send(_args: SendArgs) -> anyhow::Result<()> {
    anyhow::bail!("send is only available on native targets")
}
