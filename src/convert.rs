// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::page::{Document, Engine};
use crate::{measure, optimize, resolve, view_box, Error, OptimizeOptions, Options, RenderPlan};

/// A single SVG to PNG conversion.
#[derive(Clone, Debug)]
pub struct Request {
    source: PathBuf,
    dest: PathBuf,
    options: Options,
}

impl Request {
    /// Creates a new conversion request.
    pub fn new<S, D>(source: S, dest: D, options: Options) -> Self
    where
        S: Into<PathBuf>,
        D: Into<PathBuf>,
    {
        Request {
            source: source.into(),
            dest: dest.into(),
            options,
        }
    }

    /// Returns the source SVG path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the destination PNG path.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Returns the conversion options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs the conversion and returns the destination path.
    pub fn run(&self) -> Result<PathBuf, Error> {
        let opt = &self.options;

        if !self.source.is_file() {
            return Err(Error::SourceNotFound(self.source.clone()));
        }

        if !opt.overwrite && self.dest.exists() {
            return Err(Error::DestinationExists(self.dest.clone()));
        }

        let mut data = std::fs::read(&self.source)?;
        if data.starts_with(&[0x1f, 0x8b]) {
            data = usvg::decompress_svgz(&data)?;
        }

        let intrinsic = measure(&data);
        match intrinsic {
            Some(size) => log::debug!("SVG size is {}x{}.", size.width, size.height),
            None => log::debug!("SVG size is unknown. Trimming to content."),
        }

        let svg = std::str::from_utf8(&data).map_err(|_| usvg::Error::NotAnUtf8Str)?;
        let optimized = optimize(
            svg,
            &OptimizeOptions {
                path: &self.source,
                resources_dir: opt.resources_dir.clone(),
                default_length: opt.default_svg_length,
                fonts: &opt.fonts,
            },
        )?;

        let document = Document {
            svg: optimized,
            padding: opt.padding,
            background: opt.background,
            view_box: view_box(&data),
        };

        let layout = resolve(opt, intrinsic);
        layout.check(opt.padding)?;

        let engine = Engine::launch();
        let mut page = engine.new_page();
        page.set_content(&document)?;

        let size = page.evaluate(&layout)?;
        let plan = RenderPlan::new(size, opt.padding)
            .ok_or_else(|| Error::Rendering("target size is too big".to_string()))?;
        log::debug!(
            "Rendering at {}x{} into {}x{}.",
            plan.viewport_width,
            plan.viewport_height,
            plan.output_width,
            plan.output_height
        );

        page.set_viewport(plan.output_width, plan.output_height)?;
        let pixmap = page.screenshot(opt.omits_background())?;
        write_png(&pixmap, &self.dest, opt.overwrite)?;

        Ok(self.dest.clone())
    }
}

/// Converts an SVG file into a PNG file.
///
/// Returns the destination path.
pub fn convert<S, D>(source: S, dest: D, opt: &Options) -> Result<PathBuf, Error>
where
    S: Into<PathBuf>,
    D: Into<PathBuf>,
{
    Request::new(source, dest, opt.clone()).run()
}

/// Saves a pixmap as PNG.
///
/// Without `overwrite`, the file is created exclusively,
/// so a file created after the existence check is never replaced.
pub fn write_png(pixmap: &tiny_skia::Pixmap, path: &Path, overwrite: bool) -> Result<(), Error> {
    let data = pixmap
        .encode_png()
        .map_err(|e| Error::Rendering(e.to_string()))?;

    let mut file = if overwrite {
        std::fs::File::create(path)?
    } else {
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::DestinationExists(path.to_path_buf()),
                _ => Error::Io(e),
            })?
    };

    file.write_all(&data)?;
    Ok(())
}
