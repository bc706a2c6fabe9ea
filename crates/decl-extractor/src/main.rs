use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use decl_extractor::{Config, MainFile, ReportOptions, collect_records, parse_tree, run_ast_dump};

/// Extract every declaration and definition from one C/C++ translation unit.
#[derive(Parser, Debug)]
#[command(name = "decl-extractor", version, about)]
struct Args {
    /// C/C++ source file to analyze.
    source: PathBuf,

    /// Include macro definitions in the report (reserved: the front-end's
    /// AST dump carries no preprocessing entities).
    #[arg(short = 'm', long = "macros")]
    macros: bool,

    /// Show only definitions, dropping plain declarations.
    #[arg(short = 'd', long = "definitions-only")]
    definitions_only: bool,

    /// Configuration file (defaults to `decl-extractor.toml` if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Extra front-end arguments (include paths, `-std=` flags, defines),
    /// passed through verbatim after `--`.
    #[arg(last = true)]
    frontend_args: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("decl-extractor: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decl-extractor: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: &Args,
    config: &Config,
) -> decl_extractor::Result<()> {
    let options = config.frontend_options(args.frontend_args.clone());
    let json = run_ast_dump(&args.source, &options)?;
    let root = parse_tree(&json)?;

    let main_file = MainFile::new(&args.source);
    let records = collect_records(&root, &main_file);
    debug!("emitting report for {} record(s)", records.len());

    let report_options = ReportOptions {
        definitions_only: args.definitions_only,
        include_macros: args.macros,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    decl_extractor::emit(
        &mut out,
        &args.source.display().to_string(),
        &records,
        &report_options,
    )?;
    out.flush()?;
    Ok(())
}

fn init_logging(
    args: &Args,
    config: &Config,
) {
    let directive = if args.verbose {
        "decl_extractor=debug"
    } else {
        config.logging.level.as_filter()
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(directive));

    if let Some(log_path) = &args.log_file {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("decl-extractor.log")),
        );
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(directive));
        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(stderr_layer).init();
    }
}
