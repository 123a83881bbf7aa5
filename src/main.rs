// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

fn main() {
    if std::env::args_os().len() <= 1 {
        print!("{}", HELP);
        return;
    }

    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match collect_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e.to_string());
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let now = std::time::Instant::now();

    let opt = svgpng::Options {
        width: args.width,
        height: args.height,
        padding: args.padding,
        background: args.background,
        omit_background: !args.opaque,
        overwrite: args.overwrite,
        trim: args.trim,
        default_svg_length: args.default_svg_length,
        resources_dir: args.resources_dir,
        fonts: svgpng::FontOptions {
            files: args.font_files,
            dirs: args.font_dirs,
            skip_system_fonts: args.skip_system_fonts,
        },
    };

    let dest = svgpng::convert(args.input, args.output, &opt).map_err(|e| e.to_string())?;

    println!(
        "PNG written to \"{}\" in {}s",
        dest.display(),
        now.elapsed().as_secs_f64()
    );

    Ok(())
}

const HELP: &str = "\
svgpng converts an SVG file into a PNG image.

USAGE:
  svgpng [OPTIONS] <source> <output>

  svgpng in.svg out.png
  svgpng -w 600 -p 10 in.svg out.png
  svgpng --trim --backgroundColor=white in.svg out.png

OPTIONS:
  -H, --help                    Prints this help
  -V, --version                 Prints version

  -w, --width LENGTH            Sets the width of the output image in pixels
  -h, --height LENGTH           Sets the height of the output image in pixels
  -p, --padding LENGTH          Sets the padding around the output image in pixels
                                [default: 0]
  -b, --backgroundColor COLOR   Sets the background color as any valid CSS color
                                Examples: red, #fff, #fff000, rgb(0, 0, 255)
  -f, --defaultSvgLength LENGTH Sets the width and height used when the SVG size
                                cannot be determined
                                [default: 1000]
  -y, --overwrite               Overwrites the output file if it exists
  -t, --trim                    Trims the output image to the bounds of the SVG content
  -o, --opaque                  Saves the output image with an opaque background

  --resources-dir DIR           Sets a directory that will be used during
                                relative paths resolving.
                                [default: input file directory]
  --use-font-file PATH          Load a specified font file into the fonts database.
                                Will be used during text to path conversion.
                                This option can be set multiple times
  --use-fonts-dir PATH          Loads all fonts from the specified directory
                                into the fonts database.
                                This option can be set multiple times
  --skip-system-fonts           Disables system fonts loading

  --quiet                       Disables warnings

ARGS:
  <source>                      Input SVG file
  <output>                      Output PNG file
";

#[derive(Debug)]
struct CliArgs {
    width: Option<u32>,
    height: Option<u32>,
    padding: u32,
    background: Option<svgtypes::Color>,
    default_svg_length: u32,
    overwrite: bool,
    trim: bool,
    opaque: bool,

    resources_dir: Option<path::PathBuf>,
    font_files: Vec<path::PathBuf>,
    font_dirs: Vec<path::PathBuf>,
    skip_system_fonts: bool,

    quiet: bool,

    input: path::PathBuf,
    output: path::PathBuf,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains(["-H", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let args = CliArgs {
        width: input.opt_value_from_fn(["-w", "--width"], parse_length)?,
        height: input.opt_value_from_fn(["-h", "--height"], parse_length)?,
        padding: input
            .opt_value_from_fn(["-p", "--padding"], parse_padding)?
            .unwrap_or(0),
        background: input.opt_value_from_str(["-b", "--backgroundColor"])?,
        default_svg_length: input
            .opt_value_from_fn(["-f", "--defaultSvgLength"], parse_length)?
            .unwrap_or(1000),
        overwrite: input.contains(["-y", "--overwrite"]),
        trim: input.contains(["-t", "--trim"]),
        opaque: input.contains(["-o", "--opaque"]),

        resources_dir: input.opt_value_from_str("--resources-dir")?,
        font_files: input.values_from_str("--use-font-file")?,
        font_dirs: input.values_from_str("--use-fonts-dir")?,
        skip_system_fonts: input.contains("--skip-system-fonts"),

        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.free_from_str()?,
    };

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {:?}", remaining),
        });
    }

    Ok(args)
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_padding(s: &str) -> Result<u32, String> {
    s.parse().map_err(|_| "invalid padding".to_string())
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                _ => eprintln!("Warning (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
