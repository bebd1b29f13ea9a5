#![deny(unsafe_code)]
//! CLI binary for shadegen.
//!
//! Subcommands:
//! - `generate <color>` — build a shade ramp, render it for export
//! - `inspect <color>` — normalize one color and print its descriptor
//! - `names` — print the named-color vocabulary, policies, and formats

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use shadegen_core::{generate_shades_with, named, parse, ColorDescriptor, ShadePolicy};
use shadegen_export::{render, ExportFormat};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "shadegen", about = "Color shade-ramp generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a shade ramp from a base color and render it for export.
    Generate {
        /// Base color: hex ("#6366f1"), name ("purple"), or rgb()/hsl().
        color: String,

        /// Number of shades (raised to 10 if lower).
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Shade policy (light-to-dark, around-base).
        #[arg(short, long, default_value = "light-to-dark")]
        policy: String,

        /// Export format (vanilla, tailwind).
        #[arg(short, long, default_value = "vanilla")]
        format: String,

        /// Write the rendered export to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Normalize a single color and print its descriptor.
    Inspect {
        /// Color in any supported syntax.
        color: String,
    },
    /// List named colors, shade policies, and export formats.
    Names,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            color,
            count,
            policy,
            format,
            output,
        } => {
            let policy = ShadePolicy::from_name(&policy).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown policy '{policy}' (expected one of: {})",
                    ShadePolicy::list_names().join(", ")
                ))
            })?;
            let format = ExportFormat::from_name(&format).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown format '{format}' (expected one of: {})",
                    ExportFormat::list_names().join(", ")
                ))
            })?;

            let base = ColorDescriptor::from_rgb(parse::parse(&color)?);
            let shades = generate_shades_with(&color, count, policy);

            let text = if cli.json {
                let info = serde_json::json!({
                    "base": base.hex,
                    "policy": policy.name(),
                    "format": format.name(),
                    "count": shades.len(),
                    "shades": &shades,
                });
                serde_json::to_string_pretty(&info)?
            } else {
                render(format, &base.hex, &shades)
            };

            match output {
                Some(path) => {
                    fs::write(&path, text + "\n")?;
                    eprintln!(
                        "wrote {} shades ({}, {}) -> {}",
                        shades.len(),
                        policy.name(),
                        format.name(),
                        path.display()
                    );
                }
                None => println!("{text}"),
            }
        }
        Command::Inspect { color } => {
            let descriptor = ColorDescriptor::from_rgb(parse::parse(&color)?);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
            } else {
                println!("hex:        {}", descriptor.hex);
                println!("rgb:        {}", descriptor.rgb);
                println!("hsl:        {}", descriptor.hsl);
                println!("brightness: {}", descriptor.brightness);
                println!("luminance:  {:.4}", descriptor.luminance);
                println!(
                    "class:      {}",
                    if descriptor.is_light { "light" } else { "dark" }
                );
            }
        }
        Command::Names => {
            if cli.json {
                let info = serde_json::json!({
                    "colors": named::names(),
                    "policies": ShadePolicy::list_names(),
                    "formats": ExportFormat::list_names(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Named colors:");
                for name in named::names() {
                    println!("  {name:<10} {}", named::lookup(name).unwrap_or_default());
                }
                println!("Policies:");
                println!("  {}", ShadePolicy::list_names().join(", "));
                println!("Formats:");
                println!("  {}", ExportFormat::list_names().join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
