// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Error, IntrinsicSize, Options};

/// Layout parameters sent to a page.
///
/// Lengths are in pixels and exclude padding.
/// A missing length is computed by the page from the content aspect ratio.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutRequest {
    /// Content width.
    pub width: Option<f32>,
    /// Content height.
    pub height: Option<f32>,
    /// Shrink the content box to the content bounding box first.
    pub trim: bool,
}

/// Content size computed by a page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ComputedSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Final image dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderPlan {
    /// Content width, without padding.
    pub viewport_width: u32,
    /// Content height, without padding.
    pub viewport_height: u32,
    /// Output image width, padding included.
    pub output_width: u32,
    /// Output image height, padding included.
    pub output_height: u32,
}

/// Resolves the content size to request from a page.
///
/// Explicit `width` and `height` take precedence over the intrinsic size.
/// When only one of them is set, the other one is left to the page.
/// Without explicit lengths, the intrinsic size is used, or
/// `default_svg_length` when the SVG size is unknown.
///
/// Padding is subtracted from each known length, so the output size
/// stays as requested after padding is added back.
///
/// Unknown intrinsic size always forces trimming.
pub fn resolve(opt: &Options, intrinsic: Option<IntrinsicSize>) -> LayoutRequest {
    let explicit = opt.width.is_some() || opt.height.is_some();

    let (width, height) = if explicit {
        (opt.width.map(|w| w as f32), opt.height.map(|h| h as f32))
    } else if let Some(size) = intrinsic {
        (Some(size.width), Some(size.height))
    } else {
        let len = opt.default_svg_length as f32;
        (Some(len), Some(len))
    };

    let inset = opt.padding as f32 * 2.0;

    LayoutRequest {
        width: width.map(|w| w - inset),
        height: height.map(|h| h - inset),
        trim: opt.trim || intrinsic.is_none(),
    }
}

impl LayoutRequest {
    /// Checks that padding left some room for the content.
    pub fn check(&self, padding: u32) -> Result<(), Error> {
        let inset = padding as f32 * 2.0;
        for length in [self.width, self.height].into_iter().flatten() {
            if length <= 0.0 {
                return Err(Error::PaddingTooLarge {
                    padding,
                    length: length + inset,
                });
            }
        }

        Ok(())
    }

    /// Computes the content size for a content box of the provided size.
    ///
    /// Missing lengths are scaled using the content box aspect ratio.
    /// When both lengths are set, they are used as is.
    ///
    /// Returns `None` when a computed length is less than a pixel.
    pub fn compute(&self, box_width: f32, box_height: f32) -> Option<ComputedSize> {
        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w * box_height / box_width),
            (None, Some(h)) => (h * box_width / box_height, h),
            (None, None) => (box_width, box_height),
        };

        Some(ComputedSize {
            width: to_px(width)?,
            height: to_px(height)?,
        })
    }
}

impl RenderPlan {
    /// Adds padding back to a computed content size.
    ///
    /// Returns `None` on overflow.
    pub fn new(size: ComputedSize, padding: u32) -> Option<Self> {
        let inset = padding.checked_mul(2)?;
        Some(RenderPlan {
            viewport_width: size.width,
            viewport_height: size.height,
            output_width: size.width.checked_add(inset)?,
            output_height: size.height.checked_add(inset)?,
        })
    }
}

/// Truncates a length to whole pixels, ignoring float noise.
fn to_px(n: f32) -> Option<u32> {
    let n = ((n * 1000.0).round() / 1000.0).trunc();
    if n.is_finite() && n >= 1.0 && n <= u32::MAX as f32 {
        Some(n as u32)
    } else {
        None
    }
}
