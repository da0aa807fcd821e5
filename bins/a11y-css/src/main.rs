//! a11y-css: inspect, compile and bundle the accessibility widget stylesheets.

use a11y_cli::{format_count, format_duration, format_size, Status};
use a11y_core::config::{Config, ConfigSchema};
use a11y_core::error::exit_codes;
use a11y_core::Error;
use a11y_styles::{compile_css, Registry};
use a11y_telemetry::{TelemetryConfig, Timer};
use a11y_widget::{MemoryDocument, NewElement, Widget};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "a11y-css")]
#[command(about = "Accessibility widget stylesheet compiler")]
#[command(version)]
struct Cli {
    /// Path to a widget configuration file
    #[arg(long, short, global = true, env = "A11Y_WIDGET_CONFIG")]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tools and filters
    List,
    /// Print the stylesheet of one tool or filter
    Compile {
        /// Tool or filter name
        name: String,
    },
    /// Concatenate every stylesheet into one file
    Bundle {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Show how text sizes scale under a multiplier
    PreviewFont {
        /// Font-size multiplier, 1.0 keeps original sizes
        #[arg(long, short)]
        multiplier: f64,
        /// Original sizes in pixels
        #[arg(long = "size", short, default_values_t = [12.0, 16.0, 24.0, 32.0])]
        sizes: Vec<f64>,
    },
    /// Check the configuration for problems
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let telemetry = TelemetryConfig::default().with_verbosity(cli.verbose);
    if let Err(e) = a11y_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(core) => {
                if json {
                    print_report(core);
                } else {
                    Status::report(core);
                }
                exit_codes::for_code(core.code)
            }
            None => {
                Status::error(&format!("{:#}", err));
                exit_codes::FAILURE
            }
        },
    };
    ExitCode::from(code as u8)
}

fn print_report(err: &Error) {
    match serde_json::to_string_pretty(&err.to_report()) {
        Ok(report) => println!("{}", report),
        Err(_) => Status::report(err),
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    if let Commands::Validate = cli.command {
        let config = Config::load_unchecked(cli.config.as_deref())?;
        return validate(&config, cli.json);
    }

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(
        path = config.path.as_deref().unwrap_or("<defaults>"),
        session = a11y_telemetry::session_id(),
        "Configuration loaded"
    );
    let schema = &config.schema;

    match cli.command {
        Commands::List => list(schema, cli.json)?,
        Commands::Compile { name } => compile(schema, &name)?,
        Commands::Bundle { out } => bundle(schema, out)?,
        Commands::PreviewFont { multiplier, sizes } => {
            preview_font(schema, multiplier, &sizes, cli.json)?
        }
        Commands::Validate => return validate(&config, cli.json),
    }
    Ok(exit_codes::SUCCESS)
}

fn list(schema: &ConfigSchema, json: bool) -> anyhow::Result<()> {
    let prefix = &schema.general.prefix;
    let tools = schema.tool_registry();
    let filters = schema.filter_registry();

    if json {
        let entries = |registry: &Registry| -> Vec<serde_json::Value> {
            registry
                .iter()
                .map(|(name, config)| {
                    serde_json::json!({
                        "name": name,
                        "id": config.id,
                        "marker": config.marker(prefix),
                    })
                })
                .collect()
        };
        let listing = serde_json::json!({
            "prefix": prefix,
            "tools": entries(&tools),
            "filters": entries(&filters),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    Status::header(&format!("Tools ({})", format_count(tools.len(), "entry", "entries")));
    for (name, config) in tools.iter() {
        Status::entry(name, &config.marker(prefix));
    }
    Status::header(&format!("Filters ({})", format_count(filters.len(), "entry", "entries")));
    for (name, config) in filters.iter() {
        Status::entry(name, &config.marker(prefix));
    }
    Ok(())
}

fn compile(schema: &ConfigSchema, name: &str) -> anyhow::Result<()> {
    let tools = schema.tool_registry();
    let filters = schema.filter_registry();
    let config = tools
        .get(name)
        .or_else(|| filters.get(name))
        .ok_or_else(|| Error::unknown_tool(name))?;

    println!("{}", compile_css(config));
    Ok(())
}

fn bundle(schema: &ConfigSchema, out: Option<PathBuf>) -> anyhow::Result<()> {
    let timer = Timer::start("bundle");
    let mut sheets = Vec::new();
    for registry in [schema.tool_registry(), schema.filter_registry()] {
        for (name, config) in registry.iter() {
            let css = compile_css(config);
            if !css.is_empty() {
                sheets.push(format!("/* {} */\n{}", name, css));
            }
        }
    }
    let count = sheets.len();
    let bundle = sheets.join("\n\n") + "\n";
    let elapsed = timer.stop();

    match out {
        Some(path) => {
            std::fs::write(&path, &bundle).map_err(|e| {
                Error::from(e).with_context(format!("writing {}", path.display()))
            })?;
            Status::success(&format!(
                "Wrote {} ({}) to {} in {}",
                format_count(count, "stylesheet", "stylesheets"),
                format_size(bundle.len()),
                path.display(),
                format_duration(elapsed),
            ));
        }
        None => print!("{}", bundle),
    }
    Ok(())
}

fn preview_font(
    schema: &ConfigSchema,
    multiplier: f64,
    sizes: &[f64],
    json: bool,
) -> anyhow::Result<()> {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let nodes: Vec<_> = sizes
        .iter()
        .map(|&px| doc.append(body, NewElement::new("p").font_size(px).text("Sample")))
        .collect();

    let mut widget = Widget::new(doc, schema);
    widget
        .adjust_font_size(multiplier)
        .map_err(|e| Error::from(e).with_context(format!("multiplier {}", multiplier)))?;

    let rows: Vec<(f64, f64)> = sizes
        .iter()
        .zip(&nodes)
        .map(|(&original, &node)| {
            let scaled = widget.document().inline_font_size(node).unwrap_or(original);
            (original, scaled)
        })
        .collect();

    if json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(original, scaled)| serde_json::json!({ "original_px": original, "scaled_px": scaled }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "multiplier": multiplier,
                "min_px": schema.font_size.min_px,
                "max_px": schema.font_size.max_px,
                "sizes": rows,
            }))?
        );
        return Ok(());
    }

    Status::header(&format!("Font sizes at x{}", multiplier));
    for (original, scaled) in rows {
        let clamped = if scaled != original * multiplier { " (clamped)" } else { "" };
        println!("  {:>6}px -> {:>6}px{}", original, scaled, clamped);
    }
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<i32> {
    let result = config.schema.validate();
    let code = if result.is_valid() {
        exit_codes::SUCCESS
    } else {
        exit_codes::CONFIG_ERROR
    };

    if json {
        let report = serde_json::json!({
            "path": config.path,
            "valid": result.is_valid(),
            "errors": result.errors(),
            "warnings": result.warnings(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(code);
    }

    for warning in result.warnings() {
        Status::warning(&warning.to_string());
    }
    for error in result.errors() {
        Status::error(&error.to_string());
    }
    if result.is_valid() {
        Status::success("Configuration is valid");
    } else {
        Status::error(&format!(
            "Configuration is invalid ({})",
            format_count(result.errors().len(), "error", "errors")
        ));
    }
    Ok(code)
}
