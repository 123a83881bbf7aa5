// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use svgtypes::{AspectRatio, Length, LengthUnit as Unit};

use crate::OptionLog;

const DPI: f64 = 96.0;
const FONT_SIZE: f64 = 16.0;

/// An SVG size declared by its root element.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IntrinsicSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// An SVG `viewBox` together with its `preserveAspectRatio`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewBox {
    /// The `viewBox` rectangle in user units.
    pub rect: tiny_skia::NonZeroRect,
    /// How the `viewBox` is fitted into the SVG size.
    pub aspect: AspectRatio,
}

/// Measures an SVG size using the root element `width`, `height` and `viewBox`.
///
/// Returns `None` when the data is not an SVG or when its size
/// cannot be resolved without laying out the content.
/// That is, when there is no `viewBox` to resolve a missing
/// or a relative length against.
pub fn measure(data: &[u8]) -> Option<IntrinsicSize> {
    with_root(data, measure_root)
}

/// Returns the root element `viewBox`, if any.
///
/// The `viewBox` defines the content aspect ratio
/// regardless of the declared `width` and `height`.
pub fn view_box(data: &[u8]) -> Option<ViewBox> {
    with_root(data, |svg| {
        let vb = parse_view_box(svg)?;
        let aspect = svg
            .attribute("preserveAspectRatio")
            .and_then(|v| AspectRatio::from_str(v).ok())
            .unwrap_or_default();

        Some(ViewBox {
            rect: tiny_skia::NonZeroRect::from_xywh(
                vb.x as f32,
                vb.y as f32,
                vb.w as f32,
                vb.h as f32,
            )?,
            aspect,
        })
    })
}

fn with_root<T, F>(data: &[u8], f: F) -> Option<T>
where
    F: FnOnce(roxmltree::Node) -> Option<T>,
{
    let text = std::str::from_utf8(data)
        .ok()
        .log_none(|| log::debug!("SVG data is not UTF-8."))?;

    let xml_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, xml_opt)
        .ok()
        .log_none(|| log::debug!("SVG data is not a valid XML."))?;

    let svg = doc.root_element();
    if svg.tag_name().name() != "svg" {
        log::debug!("The root element is '{}' and not 'svg'.", svg.tag_name().name());
        return None;
    }

    f(svg)
}

fn parse_view_box(svg: roxmltree::Node) -> Option<svgtypes::ViewBox> {
    svg.attribute("viewBox")
        .and_then(|v| svgtypes::ViewBox::from_str(v).ok())
        .filter(|vb| vb.w > 0.0 && vb.h > 0.0)
}

fn measure_root(svg: roxmltree::Node) -> Option<IntrinsicSize> {
    let view_box = parse_view_box(svg);

    let width = svg.attribute("width").and_then(|v| Length::from_str(v).ok());
    let height = svg.attribute("height").and_then(|v| Length::from_str(v).ok());

    let (width, height) = match (width, height, view_box) {
        (Some(w), Some(h), vb) => (
            convert_length(w, vb.map(|vb| vb.w))?,
            convert_length(h, vb.map(|vb| vb.h))?,
        ),
        (Some(w), None, Some(vb)) => {
            let w = convert_length(w, Some(vb.w))?;
            (w, w * vb.h / vb.w)
        }
        (None, Some(h), Some(vb)) => {
            let h = convert_length(h, Some(vb.h))?;
            (h * vb.w / vb.h, h)
        }
        (None, None, Some(vb)) => (vb.w, vb.h),
        _ => {
            log::debug!("SVG has neither a size nor a viewBox.");
            return None;
        }
    };

    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        log::debug!("SVG has an invalid size {}x{}.", width, height);
        return None;
    }

    Some(IntrinsicSize {
        width: width as f32,
        height: height as f32,
    })
}

/// Converts a root element length into pixels.
///
/// Percentages are resolved against `base`, which is the `viewBox` size.
fn convert_length(length: Length, base: Option<f64>) -> Option<f64> {
    let n = length.number;
    let px = match length.unit {
        Unit::None | Unit::Px => n,
        Unit::Em => n * FONT_SIZE,
        Unit::Ex => n * FONT_SIZE / 2.0,
        Unit::In => n * DPI,
        Unit::Cm => n * DPI / 2.54,
        Unit::Mm => n * DPI / 25.4,
        Unit::Pt => n * DPI / 72.0,
        Unit::Pc => n * DPI / 6.0,
        Unit::Percent => {
            let base = base.log_none(|| log::debug!("Cannot resolve a relative SVG size."))?;
            base * n / 100.0
        }
    };

    Some(px)
}
