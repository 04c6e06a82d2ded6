use std::fs;
use std::path::PathBuf;

use carbon_charts::api::{ChartConfig, ChartEngine};
use carbon_charts::core::{DataRecord, Viewport};
use carbon_charts::render::SvgRenderer;
use carbon_charts::telemetry::init_default_tracing;

const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 640,
    height: 320,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bars,
    Pie,
}

#[derive(Debug)]
struct CliArgs {
    kind: ChartKind,
    records_path: PathBuf,
    config_path: Option<PathBuf>,
    svg: bool,
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
    let raw = fs::read_to_string(&args.records_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.records_path.display()))?;
    let records = DataRecord::parse_sequence_json(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::new(DEFAULT_VIEWPORT),
    };
    let mut engine =
        ChartEngine::new(SvgRenderer::default(), config).map_err(|err| err.to_string())?;

    if args.svg {
        let rendered = match args.kind {
            ChartKind::Bars => engine.render_bars(&records),
            ChartKind::Pie => engine.render_pie(&records),
        };
        rendered.map_err(|err| err.to_string())?;
        let document = engine
            .renderer()
            .last_document()
            .ok_or_else(|| "renderer produced no document".to_owned())?;
        println!("{document}");
        return Ok(());
    }

    let json = match args.kind {
        ChartKind::Bars => {
            let bars = engine.bars(&records).map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&bars)
        }
        ChartKind::Pie => {
            let slices = engine.slices(&records).map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&slices)
        }
    }
    .map_err(|err| format!("failed to serialize descriptors: {err}"))?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut kind: Option<ChartKind> = None;
    let mut records_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut svg = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "bars" => kind = Some(ChartKind::Bars),
            "pie" => kind = Some(ChartKind::Pie),
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--svg" => svg = true,
            "-h" | "--help" => {
                println!(
                    "Usage: carbon_chart_dump <bars|pie> <records.json> [--config <path>] [--svg]"
                );
                std::process::exit(0);
            }
            _ if records_path.is_none() && !arg.starts_with('-') => {
                records_path = Some(PathBuf::from(&arg));
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        kind: kind.ok_or_else(|| "missing chart kind (`bars` or `pie`)".to_owned())?,
        records_path: records_path.ok_or_else(|| "missing records path".to_owned())?,
        config_path,
        svg,
    })
}
