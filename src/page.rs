// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
An off-screen page that lays out and captures a single SVG.

A page is driven the same way as a browser tab:
load a [`Document`], evaluate the layout, set the viewport and take a screenshot.
Layout requests and results are plain data, so a page never sees the caller state.
*/

use tiny_skia::{Color, IntSize, Paint, Pixmap, Rect, Transform};

use svgtypes::Align;

use crate::{ComputedSize, Error, LayoutRequest, ViewBox};

/// Page content.
#[derive(Clone, Debug)]
pub struct Document {
    /// An optimized SVG markup.
    pub svg: String,

    /// Space around the SVG on each side.
    pub padding: u32,

    /// Page background color.
    pub background: Option<svgtypes::Color>,

    /// The source SVG `viewBox`.
    ///
    /// Defines the content aspect ratio, since the page ignores
    /// the declared `width` and `height`.
    pub view_box: Option<ViewBox>,
}

/// A rendering engine.
///
/// Pages borrow the engine, so it cannot be closed while a page is alive.
pub struct Engine {
    opt: usvg::Options<'static>,
}

impl Engine {
    /// Starts a new engine.
    pub fn launch() -> Self {
        log::debug!("Engine launched.");
        Engine {
            opt: usvg::Options::default(),
        }
    }

    /// Opens an empty page.
    pub fn new_page(&self) -> Page<'_> {
        Page {
            engine: self,
            content: None,
            viewport: None,
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        log::debug!("Engine closed.");
    }
}

struct Content {
    tree: usvg::Tree,
    padding: u32,
    background: Option<svgtypes::Color>,
    // The SVG region mapped onto the content box.
    view: Rect,
    size: Option<ComputedSize>,
}

/// An off-screen page.
pub struct Page<'a> {
    engine: &'a Engine,
    content: Option<Content>,
    viewport: Option<IntSize>,
}

impl Page<'_> {
    /// Loads a document, replacing the current one.
    pub fn set_content(&mut self, doc: &Document) -> Result<(), Error> {
        let tree = usvg::Tree::from_str(&doc.svg, &self.engine.opt)
            .map_err(|e| Error::Rendering(e.to_string()))?;

        let size = tree.size();
        let canvas = Rect::from_xywh(0.0, 0.0, size.width(), size.height())
            .ok_or_else(|| Error::Rendering("SVG has an invalid size".to_string()))?;
        let view = match doc.view_box {
            Some(vb) => view_box_rect(vb, size).unwrap_or(canvas),
            None => canvas,
        };

        self.content = Some(Content {
            tree,
            padding: doc.padding,
            background: doc.background,
            view,
            size: None,
        });
        self.viewport = None;

        Ok(())
    }

    /// Lays out the document content and returns its size.
    ///
    /// When trimming, the content box is shrunk to the content bounding box
    /// before sizing. An empty SVG cannot be trimmed and keeps its canvas.
    pub fn evaluate(&mut self, req: &LayoutRequest) -> Result<ComputedSize, Error> {
        let content = self.content.as_mut().ok_or_else(no_content)?;

        if req.trim {
            let bbox = content.tree.root().abs_bounding_box();
            if bbox.width() > 0.0 && bbox.height() > 0.0 {
                content.view = bbox;
            } else {
                log::warn!("SVG has no content to trim to.");
            }
        }

        let size = req
            .compute(content.view.width(), content.view.height())
            .ok_or_else(|| Error::Rendering("target size is zero".to_string()))?;

        log::debug!(
            "Content box {}x{} laid out as {}x{}.",
            content.view.width(),
            content.view.height(),
            size.width,
            size.height
        );

        content.size = Some(size);
        Ok(size)
    }

    /// Sets the captured area size.
    ///
    /// Device scale factor is always 1.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<(), Error> {
        let size = IntSize::from_wh(width, height)
            .ok_or_else(|| Error::Rendering("target size is zero".to_string()))?;
        self.viewport = Some(size);
        Ok(())
    }

    /// Renders the viewport.
    ///
    /// Without `omit_background`, the page has an opaque white backdrop.
    /// The document background is painted over the whole viewport, padding included.
    pub fn screenshot(&self, omit_background: bool) -> Result<Pixmap, Error> {
        let content = self.content.as_ref().ok_or_else(no_content)?;
        let size = content
            .size
            .ok_or_else(|| Error::Rendering("page layout was not evaluated".to_string()))?;
        let viewport = self
            .viewport
            .ok_or_else(|| Error::Rendering("viewport is not set".to_string()))?;

        let mut pixmap = Pixmap::new(viewport.width(), viewport.height())
            .ok_or_else(|| Error::Rendering("failed to allocate an image".to_string()))?;

        if !omit_background {
            pixmap.fill(Color::WHITE);
        }

        if let Some(c) = content.background {
            let mut paint = Paint::default();
            paint.set_color_rgba8(c.red, c.green, c.blue, c.alpha);
            let rect = Rect::from_xywh(
                0.0,
                0.0,
                viewport.width() as f32,
                viewport.height() as f32,
            );
            if let Some(rect) = rect {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }

        let ts = fit_transform(content.view, size, content.padding);
        resvg::render(&content.tree, ts, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Drop for Page<'_> {
    fn drop(&mut self) {
        log::debug!("Page closed.");
    }
}

fn no_content() -> Error {
    Error::Rendering("page has no content".to_string())
}

/// Returns the canvas region occupied by a `viewBox`.
///
/// The `viewBox` was already fitted into the declared size during parsing,
/// so this mirrors that fitting. With `preserveAspectRatio="none"`
/// the `viewBox` is stretched over the whole canvas.
fn view_box_rect(vb: ViewBox, size: usvg::Size) -> Option<Rect> {
    let vr = vb.rect;
    let sx = size.width() / vr.width();
    let sy = size.height() / vr.height();

    if vb.aspect.align == Align::None {
        return Rect::from_xywh(0.0, 0.0, size.width(), size.height());
    }

    let s = if vb.aspect.slice { sx.max(sy) } else { sx.min(sy) };
    let w = vr.width() * s;
    let h = vr.height() * s;
    let (x, y) = aligned_pos(vb.aspect.align, size.width() - w, size.height() - h);

    Rect::from_xywh(x, y, w, h)
}

fn aligned_pos(align: Align, w: f32, h: f32) -> (f32, f32) {
    match align {
        Align::None | Align::XMinYMin => (0.0, 0.0),
        Align::XMidYMin => (w / 2.0, 0.0),
        Align::XMaxYMin => (w, 0.0),
        Align::XMinYMid => (0.0, h / 2.0),
        Align::XMidYMid => (w / 2.0, h / 2.0),
        Align::XMaxYMid => (w, h / 2.0),
        Align::XMinYMax => (0.0, h),
        Align::XMidYMax => (w / 2.0, h),
        Align::XMaxYMax => (w, h),
    }
}

/// Maps `view` onto the content box using `xMidYMid meet`.
fn fit_transform(view: Rect, size: ComputedSize, padding: u32) -> Transform {
    let (w, h) = (size.width as f32, size.height as f32);
    let scale = (w / view.width()).min(h / view.height());
    let dx = (w - view.width() * scale) / 2.0 - view.x() * scale;
    let dy = (h - view.height() * scale) / 2.0 - view.y() * scale;
    let p = padding as f32;

    Transform::from_row(scale, 0.0, 0.0, scale, p + dx, p + dy)
}
