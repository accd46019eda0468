use clap::{Parser, ValueEnum};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tandem::{
    compose, export_eps, load_document, CombineError, CombineOptions, ConverterChoice, ExportOptions,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConverterArg {
    /// CairoSVG if installed, otherwise Inkscape
    Auto,
    Cairosvg,
    Inkscape,
}

impl From<ConverterArg> for ConverterChoice {
    fn from(arg: ConverterArg) -> Self {
        match arg {
            ConverterArg::Auto => ConverterChoice::Auto,
            ConverterArg::Cairosvg => ConverterChoice::CairoSvg,
            ConverterArg::Inkscape => ConverterChoice::Inkscape,
        }
    }
}

/// Place two SVG documents side by side in a single SVG.
#[derive(Parser, Debug)]
#[command(name = "combine", version, about, long_about = None)]
struct Args {
    /// SVG placed on the left
    left: PathBuf,

    /// SVG placed on the right
    right: PathBuf,

    /// Output path for the combined SVG
    out: PathBuf,

    /// Gap between the two documents in px
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    gap: f64,

    /// Scale the shorter document up so both heights match
    #[arg(long)]
    match_height: bool,

    /// Also export an EPS to this path (requires CairoSVG or Inkscape)
    #[arg(long, value_name = "OUT_PATH")]
    eps: Option<PathBuf>,

    /// Converter used for --eps
    #[arg(long, value_enum, default_value_t = ConverterArg::Auto)]
    converter: ConverterArg,

    /// Abort the EPS converter after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_seconds)]
    export_timeout: Option<Duration>,

    /// Keep text as text in the EPS (Inkscape only)
    #[arg(long)]
    keep_text: bool,

    /// Print the computed layout as JSON
    #[arg(long)]
    print_plan: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let secs: f64 = value.parse().map_err(|e| format!("{}", e))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("'{}' is not a valid duration", value))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "tandem=debug" } else { "tandem=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<(), CombineError> {
    let options = CombineOptions::new()
        .gap(args.gap)
        .match_height(args.match_height);

    let left = load_document(&args.left)?;
    let right = load_document(&args.right)?;
    let composite = compose(&left, &right, &options)?;
    let svg = composite.write_to(&args.out)?;

    if args.print_plan {
        match serde_json::to_string_pretty(&composite.plan) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Could not print layout plan: {}", e),
        }
    }

    if let Some(eps_path) = &args.eps {
        let export_options = ExportOptions::new()
            .converter(args.converter.into())
            .timeout(args.export_timeout)
            .text_to_path(!args.keep_text);
        export_eps(&svg, eps_path, &export_options)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if matches!(e, CombineError::Export(_)) {
                eprintln!("note: {} was written; only the EPS export failed", args.out.display());
            }
            ExitCode::FAILURE
        }
    }
}
