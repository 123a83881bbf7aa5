// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// Font sources used during text-to-path conversion.
#[derive(Clone, Default, Debug)]
pub struct FontOptions {
    /// Font files to load.
    pub files: Vec<PathBuf>,

    /// Directories to load fonts from.
    pub dirs: Vec<PathBuf>,

    /// Do not load system fonts.
    ///
    /// Default: false
    pub skip_system_fonts: bool,
}

/// Conversion options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Output width in pixels, padding included.
    ///
    /// When only one of `width` and `height` is set,
    /// the other one is computed from the image aspect ratio.
    ///
    /// Default: None
    pub width: Option<u32>,

    /// Output height in pixels, padding included.
    ///
    /// Default: None
    pub height: Option<u32>,

    /// Padding added on each side of the image.
    ///
    /// Default: 0
    pub padding: u32,

    /// Page background color.
    ///
    /// Fills the whole output, padding included.
    /// When set, `omit_background` is ignored.
    ///
    /// Default: None
    pub background: Option<svgtypes::Color>,

    /// Render with a transparent backdrop instead of an opaque white page.
    ///
    /// Default: true
    pub omit_background: bool,

    /// Replace an existing destination file.
    ///
    /// Default: false
    pub overwrite: bool,

    /// Trim the image to the bounding box of its content.
    ///
    /// Forced for SVGs which size cannot be measured.
    ///
    /// Default: false
    pub trim: bool,

    /// Width and height used when the SVG size cannot be measured.
    ///
    /// Default: 1000
    pub default_svg_length: u32,

    /// A directory used to resolve relative paths.
    ///
    /// Default: the source file directory
    pub resources_dir: Option<PathBuf>,

    /// Fonts to use for `text` elements.
    pub fonts: FontOptions,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            width: None,
            height: None,
            padding: 0,
            background: None,
            omit_background: true,
            overwrite: false,
            trim: false,
            default_svg_length: 1000,
            resources_dir: None,
            fonts: FontOptions::default(),
        }
    }
}

impl Options {
    /// Checks that the backdrop should be transparent.
    ///
    /// A background color always makes the backdrop opaque.
    pub fn omits_background(&self) -> bool {
        self.background.is_none() && self.omit_background
    }
}
