// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use usvg::fontdb;

use crate::{Error, FontOptions};

/// SVG optimization options.
#[derive(Clone, Debug)]
pub struct OptimizeOptions<'a> {
    /// The source file path.
    ///
    /// Used to resolve relative paths when `resources_dir` is not set.
    pub path: &'a Path,

    /// A directory used to resolve relative paths.
    pub resources_dir: Option<PathBuf>,

    /// The size relative `width` and `height` resolve against
    /// when there is no `viewBox`.
    ///
    /// An SVG without `width`, `height` and `viewBox` is sized
    /// by its content instead.
    pub default_length: u32,

    /// Fonts used to convert text into paths.
    pub fonts: &'a FontOptions,
}

/// Simplifies an SVG markup.
///
/// The result is a self-contained SVG with resolved styles and references,
/// text converted into paths and images embedded.
pub fn optimize(svg: &str, opt: &OptimizeOptions) -> Result<String, Error> {
    let mut usvg_opt = usvg::Options::default();
    usvg_opt.resources_dir = match opt.resources_dir {
        Some(ref dir) => Some(dir.clone()),
        None => std::fs::canonicalize(opt.path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf())),
    };

    let len = opt.default_length as f32;
    if let Some(size) = usvg::Size::from_wh(len, len) {
        usvg_opt.default_size = size;
    }

    // fontdb initialization is pretty expensive, so perform it only when needed.
    if has_text_nodes(svg) {
        load_fonts(opt.fonts, usvg_opt.fontdb_mut());
    }

    let tree = usvg::Tree::from_str(svg, &usvg_opt)?;
    log::debug!(
        "Optimized '{}' to {}x{}.",
        opt.path.display(),
        tree.size().width(),
        tree.size().height()
    );

    Ok(tree.to_string(&usvg::WriteOptions::default()))
}

fn has_text_nodes(svg: &str) -> bool {
    let xml_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };

    // Malformed markup will be reported by the parser.
    match roxmltree::Document::parse_with_options(svg, xml_opt) {
        Ok(doc) => doc.descendants().any(|n| n.tag_name().name() == "text"),
        Err(_) => false,
    }
}

fn load_fonts(fonts: &FontOptions, fontdb: &mut fontdb::Database) {
    if !fonts.skip_system_fonts {
        fontdb.load_system_fonts();
    }

    for path in &fonts.files {
        if let Err(e) = fontdb.load_font_file(path) {
            log::warn!("Failed to load '{}' cause {}.", path.display(), e);
        }
    }

    for path in &fonts.dirs {
        fontdb.load_fonts_dir(path);
    }

    log::debug!("Loaded {} font faces.", fontdb.len());
}
