use civic_portal::config::{self, SiteConfig};
use civic_portal::loader::PageLoader;
use civic_portal::portal::{PageState, Portal};
use civic_portal::render::{self, RenderContext};
use civic_portal::routes::Route;
use civic_portal::session::Interaction;
use civic_portal::store::{ContentStore, StaticStore, StoreError};
use civic_portal::{output, site};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "civic-portal")]
#[command(about = "Content pages for a public information portal")]
#[command(long_about = "\
Content pages for a public information portal

Each page is an ordered list of image galleries, videos, PDF documents and
rich-text blocks, stored as JSON and keyed by page id:

  content/
  ├── actualizacion-datos.json     # {\"id\": ..., \"title\": ..., \"items\": [...]}
  └── servicios/
      └── solicitud-finiquito.json # nested directories are walked too

Without --content (or content.source in portal.toml) the built-in pages are
served. Routes map to pages by their deepest segment:

  /declaracion-patrimonial                 → declaracion-patrimonial
  /servicios/servicios-linea/declaraciones → declaraciones

Unknown keys show the fallback page (content.fallback_page).

Logging goes to stderr; set RUST_LOG=debug for load and build details.
Run 'civic-portal gen-config' to generate a documented portal.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file [default: ./portal.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of page JSON files (overrides content.source)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one route to HTML
    Render(RenderArgs),
    /// Render every page into a static site
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Load and validate every page, then print an inventory
    Check,
    /// List page ids and titles
    List,
    /// Print a stock portal.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// URL path, e.g. /declaracion-patrimonial
    path: String,

    /// Search text applied to both content groups
    #[arg(long)]
    search: Option<String>,

    /// PDF category to show
    #[arg(long)]
    category: Option<String>,

    /// Interaction applied before rendering, e.g. next:galeria, open:galeria:2,
    /// zoom-in:galeria, open-pdf:manual (repeatable, applied in order)
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<String>,

    /// Write the HTML to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => {
            let (config, loader) = setup(cli.config.as_deref(), cli.content.as_deref())?;
            render_route(&config, loader, args).await?;
        }
        Command::Build { output: out_dir } => {
            let (config, loader) = setup(cli.config.as_deref(), cli.content.as_deref())?;
            println!("==> Building site → {}", out_dir.display());
            let report = site::build_site(&loader, &config, &out_dir).await?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let (_, loader) = setup(cli.config.as_deref(), cli.content.as_deref())?;
            let pages = site::load_all_pages(&loader).await?;
            output::print_page_inventory(&pages);
            println!("==> Content is valid");
        }
        Command::List => {
            let (_, loader) = setup(cli.config.as_deref(), cli.content.as_deref())?;
            let pages = site::load_all_pages(&loader).await?;
            output::print_page_list(&pages);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config and build the one loader every command shares.
fn setup(
    config_path: Option<&Path>,
    content_dir: Option<&Path>,
) -> Result<(SiteConfig, PageLoader), Box<dyn std::error::Error>> {
    let config = config::load_config(config_path)?;
    let store = open_store(&config, content_dir)?;
    let loader = PageLoader::new(store, config.content.fallback_page.clone());
    Ok((config, loader))
}

/// `--content` wins over `content.source`; with neither, the built-in pages.
fn open_store(
    config: &SiteConfig,
    content_dir: Option<&Path>,
) -> Result<Arc<dyn ContentStore>, StoreError> {
    let source = content_dir
        .map(Path::to_path_buf)
        .or_else(|| config.content.source.as_ref().map(PathBuf::from));
    let store = match source {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading content directory");
            StaticStore::from_dir(&dir)?
        }
        None => StaticStore::builtin()?,
    };
    tracing::debug!(pages = store.len(), "content store ready");
    Ok(Arc::new(store.with_delay(config.content.fetch_delay())))
}

async fn render_route(
    config: &SiteConfig,
    loader: PageLoader,
    args: RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interactions = Vec::new();
    if let Some(search) = args.search {
        interactions.push(Interaction::Search(search));
    }
    if let Some(category) = args.category {
        interactions.push(Interaction::Category(category));
    }
    for event in &args.events {
        interactions.push(event.parse::<Interaction>()?);
    }

    let ctx = RenderContext::new(config).with_nav(site::nav_links(loader.store()).await);

    let route = Route::parse(&args.path);
    let mut portal = Portal::new(loader);
    portal.navigate(&route).await;

    match portal.state_mut() {
        PageState::Ready(session) => {
            for interaction in interactions {
                session.apply(interaction)?;
            }
        }
        state => {
            if !interactions.is_empty() {
                tracing::warn!(route = %route, "no page loaded, interactions ignored");
            }
            if let PageState::Failed { reason, .. } = state {
                tracing::error!(route = %route, reason = %reason, "page failed to load");
            }
        }
    }

    let html = render::render_state(&ctx, portal.state()).into_string();
    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}
