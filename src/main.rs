use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tech_jobs::config::AppConfig;
use tech_jobs::error::AppError;
use tech_jobs::telemetry;
use tech_jobs::{Job, JobData, JobField, NamedEntity};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "tech-jobs",
    about = "List and search job listings loaded from a CSV export",
    version
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Override the configured CSV export path
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every job, or every distinct value of one column (default command)
    List {
        #[arg(value_enum, default_value_t = ListKind::Jobs)]
        kind: ListKind,
    },
    /// Search jobs by column and value
    Search(SearchArgs),
    /// Show the column selectors accepted by `search --column`
    Columns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListKind {
    Jobs,
    Employer,
    Location,
    PositionType,
    CoreCompetency,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Column selector, or "all" to search every column
    #[arg(long, default_value = "all")]
    column: String,
    /// Text to look for; "all" returns every job
    term: String,
}

#[derive(Debug, Serialize)]
struct ColumnView {
    selector: &'static str,
    label: &'static str,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(path) = cli.output.data {
        config.data.path = path;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, path = %config.data.path.display(), "tech jobs catalog");

    let data = JobData::from_config(&config.data);
    let json = cli.output.json;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::List {
        kind: ListKind::Jobs,
    }) {
        Command::List { kind: ListKind::Jobs } => {
            render_jobs(&mut out, &data.find_all(), json)?;
        }
        Command::List { kind } => {
            let names = entity_names(&data, kind);
            render_names(&mut out, &names, json)?;
        }
        Command::Search(args) => {
            let jobs = data.find_by_column_and_value(&args.column, &args.term);
            render_search(&mut out, &args, &jobs, json)?;
        }
        Command::Columns => render_columns(&mut out, json)?,
    }

    Ok(())
}

fn entity_names(data: &JobData, kind: ListKind) -> Vec<String> {
    fn names<T: NamedEntity>(entities: Vec<Arc<T>>) -> Vec<String> {
        entities.iter().map(|entity| entity.name().to_string()).collect()
    }

    match kind {
        ListKind::Jobs => data.find_all().into_iter().map(|job| job.name).collect(),
        ListKind::Employer => names(data.all_employers()),
        ListKind::Location => names(data.all_locations()),
        ListKind::PositionType => names(data.all_position_types()),
        ListKind::CoreCompetency => names(data.all_core_competencies()),
    }
}

fn render_jobs<W: Write>(out: &mut W, jobs: &[Job], json: bool) -> Result<(), AppError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, jobs)?;
        writeln!(out)?;
        return Ok(());
    }

    if jobs.is_empty() {
        writeln!(out, "No results")?;
        return Ok(());
    }

    for job in jobs {
        writeln!(out, "\n#{} {}", job.id, job.name)?;
        for field in &JobField::ALL[1..] {
            writeln!(out, "  {}: {}", field.label(), job.field(*field))?;
        }
    }

    Ok(())
}

fn render_names<W: Write>(out: &mut W, names: &[String], json: bool) -> Result<(), AppError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, names)?;
        writeln!(out)?;
        return Ok(());
    }

    for name in names {
        writeln!(out, "- {name}")?;
    }

    Ok(())
}

fn render_search<W: Write>(
    out: &mut W,
    args: &SearchArgs,
    jobs: &[Job],
    json: bool,
) -> Result<(), AppError> {
    if !json {
        let column = match args.column.as_str() {
            "all" => "All",
            other => JobField::from_selector(other).label(),
        };
        writeln!(
            out,
            "Jobs with {}: {} ({} found)",
            column,
            args.term,
            jobs.len()
        )?;
    }

    render_jobs(out, jobs, json)
}

fn render_columns<W: Write>(out: &mut W, json: bool) -> Result<(), AppError> {
    let columns: Vec<ColumnView> = JobField::ALL
        .iter()
        .map(|field| ColumnView {
            selector: field.selector(),
            label: field.label(),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &columns)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "- all: All")?;
    for column in &columns {
        writeln!(out, "- {}: {}", column.selector, column.label)?;
    }

    Ok(())
}
