//! stackview-cli: inspect colormaps and lookup tables from the terminal.
#![allow(clippy::uninlined_format_args)]

use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::debug;

use stackview_core::{
    dark_sequential, light_sequential, moving_square, BrowseOptions, ColorTable, Colormap,
    NamedScale, StackBrowser, TargetColor,
};
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Core(#[from] stackview_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    Argument(String),
}

/// Frame size given as `HEIGHTxWIDTH`.
#[derive(Debug, Clone, Copy)]
struct FrameSize {
    height: usize,
    width: usize,
}

impl FromStr for FrameSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (h, w) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected HEIGHTxWIDTH, got '{s}'"))?;
        let height = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
        let width = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
        Ok(Self { height, width })
    }
}

/// Colorization and lookup-table tools for scientific image stacks.
#[derive(Parser)]
#[command(name = "stackview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available colormaps
    Colormaps,

    /// Print a colormap lookup table as JSON
    Lut {
        /// Colormap name, `_r` suffix for reversed
        name: NamedScale,

        /// Number of table entries
        #[arg(short, long, default_value = "256")]
        size: usize,

        /// Reverse the colormap
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print a sequential palette built around a color as JSON
    Sequential {
        /// Target color: a name, #rrggbb, or r,g,b components
        #[arg(default_value = "255,165,2")]
        color: String,

        /// Build the dark palette (black to color) instead of the light one
        #[arg(long)]
        dark: bool,

        /// Number of palette steps
        #[arg(long, default_value = "256")]
        steps: usize,

        /// Number of table entries sampled from the palette
        #[arg(short, long, default_value = "256")]
        size: usize,

        /// Reverse the palette
        #[arg(short, long)]
        reverse: bool,
    },

    /// Render a frame of a synthetic moving-square stack in the terminal
    Preview {
        /// Colormap name; grayscale when omitted
        #[arg(short, long)]
        cmap: Option<NamedScale>,

        /// Frame index
        #[arg(short, long, default_value = "0")]
        frame: usize,

        /// Number of frames in the stack
        #[arg(long, default_value = "10")]
        steps: usize,

        /// Frame size as HEIGHTxWIDTH
        #[arg(long, default_value = "32x32")]
        size: FrameSize,

        /// Pixels the square moves per frame
        #[arg(long, default_value = "1")]
        factor: usize,

        /// Scale factor applied before printing
        #[arg(long)]
        resize: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Colormaps => {
            for cmap in Colormap::ALL {
                writeln!(out, "{:<10} {}", cmap.name(), cmap)?;
            }
        }

        Commands::Lut {
            mut name,
            size,
            reverse,
        } => {
            name.reversed ^= reverse;
            let table = ColorTable::from_scale(&name, size)?;
            debug!("{} table with {} entries", name.name(), table.len());
            serde_json::to_writer_pretty(&mut out, table.entries())?;
            writeln!(out)?;
        }

        Commands::Sequential {
            color,
            dark,
            steps,
            size,
            reverse,
        } => {
            let target = parse_target(&color)?;
            let palette = if dark {
                dark_sequential(target, steps, reverse)?
            } else {
                light_sequential(target, steps, reverse)?
            };
            let table = ColorTable::from_scale(&palette, size)?;
            serde_json::to_writer_pretty(&mut out, table.entries())?;
            writeln!(out)?;
        }

        Commands::Preview {
            cmap,
            frame,
            steps,
            size,
            factor,
            resize,
        } => {
            if steps == 0 || size.height == 0 || size.width == 0 {
                return Err(CliError::Argument(
                    "stack needs at least one non-empty frame".to_string(),
                ));
            }
            let stack = moving_square(steps, (size.height, size.width), factor).into_dyn();
            let mut options = BrowseOptions::new();
            options.colormap = cmap;
            options.resize = resize;
            let browser = StackBrowser::new(stack, options)?;
            let image = browser.on_index_change(frame)?.to_rgba8();
            write_half_blocks(&mut out, &image)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Accepts a color name, a hex string or comma-separated components.
fn parse_target(color: &str) -> Result<TargetColor> {
    if !color.contains(',') {
        return Ok(color.parse()?);
    }
    let parts = color
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| CliError::Argument(format!("bad color component: {e}")))?;
    match parts.as_slice() {
        [r, g, b] => Ok(TargetColor::from_components([*r, *g, *b])),
        _ => Err(CliError::Argument(format!(
            "expected three color components, got {}",
            parts.len()
        ))),
    }
}

/// Print two pixel rows per text line using upper half blocks.
fn write_half_blocks(out: &mut impl Write, image: &image::RgbaImage) -> io::Result<()> {
    let (width, height) = image.dimensions();
    for y in (0..height).step_by(2) {
        for x in 0..width {
            let top = image.get_pixel(x, y).0;
            let bottom = if y + 1 < height {
                image.get_pixel(x, y + 1).0
            } else {
                [0, 0, 0, 255]
            };
            write!(
                out,
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
            )?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_parsing() {
        let size: FrameSize = "24x48".parse().unwrap();
        assert_eq!((size.height, size.width), (24, 48));
        assert!("24".parse::<FrameSize>().is_err());
        assert!("ax3".parse::<FrameSize>().is_err());
    }

    #[test]
    fn test_target_color_forms() {
        let byte = parse_target("255, 0, 0").unwrap();
        assert_eq!(byte, TargetColor::from([255, 0, 0]));
        let named = parse_target("red").unwrap();
        assert_eq!(named, byte);
        assert!(parse_target("1,2").is_err());
        assert!(parse_target("1,x,2").is_err());
    }

    #[test]
    fn test_half_block_rows() {
        let image = image::RgbaImage::from_pixel(2, 3, image::Rgba([1, 2, 3, 255]));
        let mut buf = Vec::new();
        write_half_blocks(&mut buf, &image).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.matches('\u{2580}').count(), 4);
    }

    #[test]
    fn test_cli_parses_lut_command() {
        let cli = Cli::try_parse_from(["stackview", "lut", "viridis_r", "--size", "16"]).unwrap();
        match cli.command {
            Commands::Lut {
                name,
                size,
                reverse,
            } => {
                assert_eq!(name.colormap, Colormap::Viridis);
                assert!(name.reversed);
                assert_eq!(size, 16);
                assert!(!reverse);
            }
            _ => panic!("expected lut command"),
        }
    }
}
