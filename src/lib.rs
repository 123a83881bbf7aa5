// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgpng` converts an SVG file into a PNG image.

The output size is resolved from the requested width and height,
the SVG own size and the padding, without distorting the aspect ratio
unless both width and height are requested.

```no_run
let opt = svgpng::Options {
    width: Some(600),
    padding: 10,
    ..svgpng::Options::default()
};
svgpng::convert("in.svg", "out.png", &opt).unwrap();
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use tiny_skia;
pub use usvg;

mod convert;
mod error;
mod measure;
mod optimize;
mod options;
pub mod page;
mod resolve;

pub use crate::convert::{convert, write_png, Request};
pub use crate::error::Error;
pub use crate::measure::{measure, view_box, IntrinsicSize, ViewBox};
pub use crate::optimize::{optimize, OptimizeOptions};
pub use crate::options::{FontOptions, Options};
pub use crate::resolve::{resolve, ComputedSize, LayoutRequest, RenderPlan};

pub(crate) trait OptionLog {
    fn log_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionLog for Option<T> {
    #[inline]
    fn log_none<F: FnOnce()>(self, f: F) -> Self {
        self.or_else(|| {
            f();
            None
        })
    }
}
