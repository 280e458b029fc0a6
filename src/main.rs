use clap::{Parser, Subcommand};
use folio::access::{Availability, BaseUrlResolver, ContentSource};
use folio::config::{self, FolioConfig};
use folio::fallback::FallbackDataset;
use folio::inquiry::{Field, Inquiry, ProjectType};
use folio::output;
use folio::store::{DirectoryStore, DocumentStore};
use folio::submission::{ContactPipeline, InquirySink, SinkError, SubmitOutcome};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("FOLIO_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FOLIO_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Resilient portfolio content and contact-form pipeline")]
#[command(long_about = "\
Resilient portfolio content and contact-form pipeline

Reads portfolio content from a directory of JSON documents and falls back to a
bundled dataset whenever the store is unreachable or a collection is empty.
The store is probed once at startup; if the probe fails, every read for the
rest of the run is served from the fallback.

Store layout:

  content/
  ├── hero/main.json               # Singletons: first document wins
  ├── about/main.json
  ├── contact/info.json
  ├── stats/main.json
  ├── skills/main.json             # { \"list\": [\"Revit\", ...] }
  ├── projects/atrium.json         # Collections: one file per document,
  ├── testimonials/...             #   id = file stem
  ├── timeline/ certificates/ affiliations/ publications/ awards/ books/
  └── messages/                    # Inquiries written by `folio contact`

Run 'folio gen-config' to generate a documented folio.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, env = "FOLIO_CONFIG", default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Store root directory (overrides [store] root)
    #[arg(long, env = "FOLIO_STORE", global = true)]
    store: Option<PathBuf>,

    /// Skip the probe and serve fallback content only
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe the store and report availability
    Probe,
    /// Print one entity as JSON
    Show(ShowArgs),
    /// Read every entity
    Snapshot {
        /// Print JSON instead of the inventory summary
        #[arg(long)]
        json: bool,
    },
    /// Validate and submit a contact inquiry
    Contact(ContactArgs),
    /// Print the effective fallback dataset as JSON
    Fallback,
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Entity {
    Hero,
    About,
    Contact,
    Stats,
    Skills,
    Projects,
    Project,
    Testimonials,
    Timeline,
    Certificates,
    Affiliations,
    Publications,
    Awards,
    Books,
}

#[derive(clap::Args)]
struct ShowArgs {
    entity: Entity,

    /// Project document id (with `project`)
    #[arg(long, conflicts_with = "slug")]
    id: Option<String>,

    /// Project route slug (with `project`)
    #[arg(long)]
    slug: Option<String>,

    /// Filter projects by category (with `projects`)
    #[arg(long)]
    category: Option<String>,
}

#[derive(clap::Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, value_enum)]
    project_type: Option<ProjectType>,

    /// Required when --project-type is other
    #[arg(long, default_value = "")]
    custom_project_type: String,

    #[arg(long, default_value = "")]
    message: String,

    /// Validate only; nothing is written
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(&cli.config)?;
    init_logging(&config);

    let fallback = match &config.fallback.path {
        Some(path) => FallbackDataset::load(Path::new(path))?,
        None => FallbackDataset::bundled(),
    };

    if let Command::Fallback = cli.command {
        return print_json(&fallback);
    }

    let root = cli
        .store
        .clone()
        .unwrap_or_else(|| config.store.root_path());
    let store = DirectoryStore::new(&root);
    let source = if cli.offline {
        ContentSource::with_availability(store, fallback, Availability::Unavailable)
    } else {
        ContentSource::connect(store, fallback)
    }
    .with_resolver(BaseUrlResolver::new(config.store.asset_base_url.clone()));

    match cli.command {
        Command::Probe => {
            output::print_probe(&root, source.availability());
        }
        Command::Show(args) => show(&source, args)?,
        Command::Snapshot { json } => {
            let site = source.snapshot();
            if json {
                print_json(&site)?;
            } else {
                output::print_site_summary(&site);
            }
        }
        Command::Contact(args) => {
            if !contact(&source, &config, args) {
                std::process::exit(1);
            }
        }
        Command::Fallback | Command::GenConfig => unreachable!("handled before the store is opened"),
    }

    Ok(())
}

/// RUST_LOG wins; otherwise `[log] level`. Logs go to stderr so JSON output
/// on stdout stays clean.
fn init_logging(config: &FolioConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_json(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn show<S: DocumentStore>(
    source: &ContentSource<S>,
    args: ShowArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.entity {
        Entity::Hero => print_json(&source.hero()),
        Entity::About => print_json(&source.about()),
        Entity::Contact => print_json(&source.contact()),
        Entity::Stats => print_json(&source.stats()),
        Entity::Skills => print_json(&source.skills()),
        Entity::Projects => match &args.category {
            Some(category) => print_json(&source.projects_by_category(category)),
            None => print_json(&source.projects()),
        },
        Entity::Project => match (&args.id, &args.slug) {
            (Some(id), _) => print_json(&source.project(id)),
            (None, Some(slug)) => print_json(&source.project_by_slug(slug)),
            (None, None) => Err("show project needs --id or --slug".into()),
        },
        Entity::Testimonials => print_json(&source.testimonials()),
        Entity::Timeline => print_json(&source.timeline()),
        Entity::Certificates => print_json(&source.certificates()),
        Entity::Affiliations => print_json(&source.affiliations()),
        Entity::Publications => print_json(&source.publications()),
        Entity::Awards => print_json(&source.awards()),
        Entity::Books => print_json(&source.books()),
    }
}

/// Prints what the write path did before the pipeline reports its status.
struct ReportingSink<'a, S> {
    source: &'a ContentSource<S>,
}

impl<S: DocumentStore> InquirySink for ReportingSink<'_, S> {
    fn submit_message(&self, inquiry: &Inquiry) -> Result<SubmitOutcome, SinkError> {
        let outcome = self.source.submit_message(inquiry);
        println!("{}", output::format_outcome(&outcome));
        Ok(outcome)
    }
}

/// Run the contact pipeline once. Returns `true` on success.
fn contact<S: DocumentStore>(
    source: &ContentSource<S>,
    config: &FolioConfig,
    args: ContactArgs,
) -> bool {
    let mut pipeline = ContactPipeline::new(config.contact.rules());
    let form = pipeline.form_mut();
    form.set(Field::FirstName, args.first_name);
    form.set(Field::LastName, args.last_name);
    form.set(Field::Email, args.email);
    form.set(
        Field::ProjectType,
        args.project_type
            .map(|p| p.as_str().to_string())
            .unwrap_or_default(),
    );
    form.set(Field::CustomProjectType, args.custom_project_type);
    form.set(Field::Message, args.message);

    if args.dry_run {
        let errors = pipeline.form().validate();
        for line in output::format_field_errors(&errors) {
            println!("{}", line);
        }
        if errors.is_empty() {
            println!("Valid");
        }
        return errors.is_empty();
    }

    let sink = ReportingSink { source };
    let status = pipeline.submit(&sink).clone();
    output::print_contact_result(pipeline.form().errors(), &status);
    status.is_success()
}
