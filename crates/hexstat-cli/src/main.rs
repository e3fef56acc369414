use hexstat::render::raster::{Exporter, RasterError, RasterOptions};
use hexstat::render::{ChartRenderer, layout_stat_chart};
use hexstat::{ChartConfig, StatSet, StatSheet};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(hexstat::Error),
    Render(hexstat_render::Error),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<hexstat::Error> for CliError {
    fn from(value: hexstat::Error) -> Self {
        Self::Chart(value)
    }
}

impl From<hexstat_render::Error> for CliError {
    fn from(value: hexstat_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Resolve,
    Layout,
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    chart_id: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct ResolveOut<'a> {
    #[serde(rename = "maxRank")]
    max_rank: &'a str,
    stats: &'a [hexstat::StatRecord],
}

fn usage() -> &'static str {
    "hexstat-cli\n\
\n\
USAGE:\n\
  hexstat-cli [resolve] [--pretty] [<path>|-]\n\
  hexstat-cli layout [--pretty] [<path>|-]\n\
  hexstat-cli render [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--id <chart-id>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON stat sheet: {\"maxRank\": \"S\", \"stats\": [{\"name\": ..., \"rank\": ...}]}.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - resolve prints each stat with its derived percentage.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the input file (or ./out.<ext> for stdin).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Resolve,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "resolve" => args.command = Command::Resolve,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.chart_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let sheet = StatSheet::from_json(&text)?;
    let stats = StatSet::from_sheet(&sheet)?;
    let config = sheet.config.clone().unwrap_or_default();

    match args.command {
        Command::Resolve => {
            write_json(
                &ResolveOut {
                    max_rank: stats.scale().max_rank(),
                    stats: stats.records(),
                },
                args.pretty,
            )?;
            println!();
        }
        Command::Layout => {
            let layout = layout_stat_chart(&stats, &config);
            print!("{}", hexstat_render::layout_to_json(&layout, args.pretty)?);
            println!();
        }
        Command::Render => {
            let mut renderer = ChartRenderer::new().with_config(config);
            if let Some(id) = args.chart_id.as_deref() {
                renderer = renderer.with_chart_id(id);
            }
            let svg = renderer.render_svg(&stats);

            match args.render_format {
                RenderFormat::Svg => match args.out.as_deref() {
                    None => print!("{svg}"),
                    Some(path) => std::fs::write(path, &svg)?,
                },
                RenderFormat::Png | RenderFormat::Jpeg | RenderFormat::Pdf => {
                    let raster = RasterOptions {
                        scale: args.render_scale,
                        background: args.background.clone(),
                        jpeg_quality: 90,
                    };
                    let exporter = Exporter::new();
                    let (bytes, ext) = match args.render_format {
                        RenderFormat::Png => (exporter.export_png(&svg, &raster)?, "png"),
                        RenderFormat::Jpeg => (exporter.export_jpeg(&svg, &raster)?, "jpg"),
                        RenderFormat::Pdf => (exporter.export_pdf(&svg)?, "pdf"),
                        RenderFormat::Svg => unreachable!(),
                    };
                    let out = match args.out.as_deref() {
                        Some(path) => std::path::PathBuf::from(path),
                        None => default_raster_out_path(args.input.as_deref(), ext),
                    };
                    std::fs::write(&out, &bytes)?;
                    eprintln!("wrote {}", out.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    match parse_args(&argv).and_then(run) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
