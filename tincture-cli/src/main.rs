//! Tincture CLI
//!
//! Builds a color from hex digits, RGB(A) components or HSL and prints its
//! serializations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use tincture_common::warning::warn_once;
use tincture_css::PackedColor;

#[derive(Parser, Debug)]
#[command(name = "tincture", version, about = "Convert colors between hex, RGB(A) and HSL")]
struct Cli {
    /// Which serialization to print
    #[arg(long, value_enum, default_value_t = Format::All, global = true)]
    format: Format,

    /// Do not print a colored swatch
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 3 or 6 hex digits, with or without a leading '#'
    Hex {
        /// The digits, e.g. f0a or #ff00aa
        digits: String,
        /// Decode malformed input to a default color instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Red, green and blue bytes
    Rgb {
        /// Red channel (0-255)
        r: u8,
        /// Green channel (0-255)
        g: u8,
        /// Blue channel (0-255)
        b: u8,
        /// Opacity from 0 to 1
        #[arg(long)]
        alpha: Option<f64>,
    },
    /// Normalized hue, saturation and lightness
    #[command(allow_negative_numbers = true)]
    Hsl {
        /// Hue, one full turn is 1.0
        h: f32,
        /// Saturation (0-1)
        s: f32,
        /// Lightness (0-1)
        l: f32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// rgb()/rgba()
    Css,
    /// #rrggbb
    Html,
    /// rgba() with alpha always present
    Debug,
    /// JSON object of channel bytes
    Json,
    /// Every textual form
    All,
}

fn build_color(command: &Command) -> Result<PackedColor> {
    match command {
        Command::Hex { digits, lenient } => {
            // The engine hands over digits without the hash
            let digits = digits.strip_prefix('#').unwrap_or(digits);
            if *lenient {
                if PackedColor::try_from_hex(digits).is_err() {
                    warn_once("Color", "malformed hex color decoded leniently");
                }
                Ok(PackedColor::from_hex(digits))
            } else {
                PackedColor::try_from_hex(digits).with_context(|| format!("invalid hex color {digits:?}"))
            }
        }
        Command::Rgb { r, g, b, alpha } => Ok(match alpha {
            Some(a) => PackedColor::from_rgba(*r, *g, *b, *a),
            None => PackedColor::from_rgb(*r, *g, *b),
        }),
        Command::Hsl { h, s, l } => Ok(PackedColor::from_hsl(*h, *s, *l)),
    }
}

fn render(color: PackedColor, format: Format) -> Result<Vec<String>> {
    let lines = match format {
        Format::Css => vec![color.to_css()],
        Format::Html => vec![color.to_html()],
        Format::Debug => vec![color.to_string()],
        Format::Json => vec![serde_json::to_string(&color).context("failed to serialize color")?],
        Format::All => vec![
            format!("css:   {}", color.to_css()),
            format!("html:  {}", color.to_html()),
            format!("debug: {color}"),
        ],
    };
    Ok(lines)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let color = build_color(&cli.command)?;
    for line in render(color, cli.format)? {
        println!("{line}");
    }

    if !cli.no_color && cli.format == Format::All {
        println!("{}", "        ".on_truecolor(color.r(), color.g(), color.b()));
    }

    Ok(())
}
