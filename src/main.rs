use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use formulang::{interpreter::series::Series, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The CLOSE series used when no data is supplied.
const DEMO_CLOSE: [f64; 10] = [10.0, 12.0, 15.0, 14.0, 16.0, 18.0, 20.0, 19.0, 22.0, 25.0];

/// formulang evaluates technical-analysis formulas such as
/// `V1:=MA(CLOSE,5);` over numeric time series and prints every assigned
/// series as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a file holding the formula.
    #[arg(short, long)]
    file: bool,

    /// JSON file with an object of named series, e.g. {"CLOSE": [10, 12]}.
    /// `null` entries are read as missing data.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// An inline series such as `CLOSE=10,12,15`. May be repeated; overrides
    /// series of the same name from --data.
    #[arg(short, long = "series", value_parser = parse_series_arg)]
    series: Vec<(String, Series)>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    match execute(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let source = if args.file {
        fs::read_to_string(&args.contents).map_err(|e| {
                                              format!("Failed to read the formula file '{}': {e}",
                                                      &args.contents)
                                          })?
    } else {
        args.contents.clone()
    };

    let inputs = load_inputs(args)?;
    info!(series = inputs.len(), "running formula");

    let symbols = run(&source, inputs)?;
    let sorted: BTreeMap<_, _> = symbols.into_iter().collect();

    let output = if args.pretty {
        serde_json::to_string_pretty(&sorted)?
    } else {
        serde_json::to_string(&sorted)?
    };
    Ok(output)
}

/// Gathers input series from --data and --series, falling back to the
/// demonstration CLOSE series when neither is given.
fn load_inputs(args: &Args) -> Result<HashMap<String, Series>, Box<dyn std::error::Error>> {
    let mut inputs = HashMap::new();

    if let Some(path) = &args.data {
        let text = fs::read_to_string(path).map_err(|e| {
                                               format!("Failed to read the data file '{}': {e}",
                                                       path.display())
                                           })?;
        let raw: HashMap<String, Vec<Option<f64>>> = serde_json::from_str(&text)?;
        for (name, values) in raw {
            let series = values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
            inputs.insert(name, series);
        }
    }

    for (name, series) in &args.series {
        inputs.insert(name.clone(), series.clone());
    }

    if inputs.is_empty() {
        info!("no data supplied, using the demonstration CLOSE series");
        inputs.insert("CLOSE".to_string(), DEMO_CLOSE.to_vec());
    }

    Ok(inputs)
}

/// Parses `NAME=v1,v2,...`.
///
/// An empty field or `nan` marks a missing point, so `10,,15` keeps three
/// indices. One trailing comma is allowed.
fn parse_series_arg(arg: &str) -> Result<(String, Series), String> {
    let (name, values) = arg.split_once('=')
                            .ok_or_else(|| format!("expected NAME=v1,v2,..., found '{arg}'"))?;
    if name.is_empty() {
        return Err(format!("missing series name in '{arg}'"));
    }

    let values = values.trim();
    let values = values.strip_suffix(',').unwrap_or(values);
    if values.is_empty() {
        return Ok((name.to_string(), Series::new()));
    }

    let series = values.split(',')
                       .map(|v| match v.trim() {
                           "" => Ok(f64::NAN),
                           v => {
                               v.parse::<f64>()
                                .map_err(|e| format!("invalid value '{v}' in series {name}: {e}"))
                           },
                       })
                       .collect::<Result<Series, _>>()?;

    Ok((name.to_string(), series))
}
