use std::path::PathBuf;
use std::sync::Arc;

use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::Viewport;
use barchart_rs::render::SvgRenderer;
use barchart_rs::source::{
    DEFAULT_RECENT_WINDOW, PaymentRecord, latest, load_payment_records, payment_points,
};
use barchart_rs::telemetry::init_default_tracing;

const USAGE: &str = "usage: render_payment_chart --input <path|url> [--output <path>] \
[--recent <n>] [--max <value>] [--width <px>] [--height <px>]";

struct CliArgs {
    input: String,
    output: Option<PathBuf>,
    recent: usize,
    max: Option<f64>,
    width: u32,
    height: u32,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let records = read_records(&args.input)?;

    let config = BarChartConfig::new(Viewport::new(args.width, args.height)).with_max(args.max);
    let mut chart = BarChart::with_transform(SvgRenderer::new(), config, Arc::new(payment_points))
        .map_err(|err| format!("failed to create chart: {err}"))?;
    chart
        .draw(latest(&records, args.recent))
        .map_err(|err| format!("failed to draw chart: {err}"))?;

    let renderer = chart.into_renderer();
    match &args.output {
        Some(path) => renderer
            .write_to_path(path)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{}", renderer.document());
            Ok(())
        }
    }
}

fn read_records(input: &str) -> Result<Vec<PaymentRecord>, String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return fetch_records(input);
    }
    load_payment_records(&PathBuf::from(input)).map_err(|err| err.to_string())
}

#[cfg(feature = "fetch")]
fn fetch_records(url: &str) -> Result<Vec<PaymentRecord>, String> {
    barchart_rs::source::fetch_payment_records(&barchart_rs::source::ReqwestClient, url)
        .map_err(|err| err.to_string())
}

#[cfg(not(feature = "fetch"))]
fn fetch_records(url: &str) -> Result<Vec<PaymentRecord>, String> {
    Err(format!(
        "cannot fetch `{url}`: rebuild with the `fetch` feature enabled"
    ))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = None::<String>;
    let mut output = None::<PathBuf>;
    let mut recent = DEFAULT_RECENT_WINDOW;
    let mut max = Some(2100.0);
    let mut width = 800;
    let mut height = 200;

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("missing value for {flag}\n{USAGE}"));
        match flag.as_str() {
            "--input" => input = Some(value()?),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--recent" => recent = parse_number(&flag, &value()?)?,
            "--max" => {
                let raw = value()?;
                max = if raw == "auto" {
                    None
                } else {
                    Some(parse_number(&flag, &raw)?)
                };
            }
            "--width" => width = parse_number(&flag, &value()?)?,
            "--height" => height = parse_number(&flag, &value()?)?,
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        recent,
        max,
        width,
        height,
    })
}

fn parse_number<N: std::str::FromStr>(flag: &str, raw: &str) -> Result<N, String> {
    raw.parse()
        .map_err(|_| format!("invalid value `{raw}` for {flag}"))
}
