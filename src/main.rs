use clap::{Parser, Subcommand, ValueEnum};
use mimalloc::MiMalloc;
use std::process::ExitCode;
use student_roster::config::Config;
use student_roster::types::StudentForm;
use student_roster::view::{Document, html, text};
use student_roster::{StudentListClient, StudentsApi};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "student-roster", version, about = "Client for the student roster service")]
struct Cli {
    /// Service root, overriding the configured `base_url`.
    #[arg(long, global = true)]
    base_url: Option<Url>,

    /// How to print the resulting page.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load every student.
    List,
    /// Load students of one grade.
    Filter {
        /// Defaults to the configured `default_grade`.
        #[arg(long)]
        grade: Option<String>,
    },
    /// Load a single student by id.
    Show { id: i64 },
    /// Submit a new student, then reload the list.
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, default_value = "")]
        grade: String,
        #[arg(long, default_value = "")]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(base_url) = cli.base_url {
        cfg.base_url = base_url;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        base_url = %cfg.base_url,
        proxy = %cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        default_grade = %cfg.default_grade,
        loglevel = %cfg.loglevel
    );

    let api = StudentsApi::from_config(&cfg)?;
    let client = StudentListClient::new(api, cfg.default_grade.clone());

    // Failures are already shown in the document and logged.
    let ok = match cli.command {
        Command::List => client.load_all().await.is_ok(),
        Command::Filter { grade } => client.load_filtered(grade.as_deref()).await.is_ok(),
        Command::Show { id } => client.load_one(id).await.is_ok(),
        Command::Add {
            name,
            age,
            grade,
            email,
        } => {
            client.fill_form(StudentForm::new(name, age, grade, email));
            client.submit().await.is_ok()
        }
    };

    print_document(&client.snapshot(), cli.format);
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_document(doc: &Document, format: Format) {
    match format {
        Format::Text => print!("{}", text::render(doc)),
        Format::Html => println!("{}", html::render(doc).into_string()),
    }
}
