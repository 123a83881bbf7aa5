// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// The source path doesn't point to an existing file.
    SourceNotFound(PathBuf),

    /// The destination file already exists and overwriting wasn't requested.
    DestinationExists(PathBuf),

    /// Padding doesn't leave any room for the image.
    ///
    /// Occurs when `2 * padding` is greater or equal to the requested
    /// (or measured) width or height.
    PaddingTooLarge {
        /// Padding on each side.
        padding: u32,
        /// The length the padding was subtracted from.
        length: f32,
    },

    /// SVG optimization failed.
    ///
    /// Usually caused by a malformed markup.
    Optimization(usvg::Error),

    /// Page loading, layout or capturing failed.
    Rendering(String),

    /// Failed to read the source or to write the destination.
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Error::Optimization(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::SourceNotFound(ref path) => {
                write!(f, "SVG file not found at \"{}\"", path.display())
            }
            Error::DestinationExists(ref path) => {
                write!(f, "file exists at \"{}\"", path.display())
            }
            Error::PaddingTooLarge { padding, length } => {
                write!(
                    f,
                    "padding of {}px leaves no room for an image of {}px",
                    padding, length
                )
            }
            Error::Optimization(ref e) => {
                write!(f, "SVG optimization failed cause {}", e)
            }
            Error::Rendering(ref msg) => {
                write!(f, "rendering failed cause {}", msg)
            }
            Error::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Optimization(ref e) => Some(e),
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}
