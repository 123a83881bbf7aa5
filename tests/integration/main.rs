use std::path::{Path, PathBuf};

mod background;
mod size;

pub struct Image {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl Image {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

pub fn svg(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/svg")
        .join(name)
}

/// Converts a test SVG into a PNG inside a temporary directory and loads it back.
pub fn render(name: &str, opt: svgpng::Options) -> Image {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    let dest = svgpng::convert(svg(name), &out, &opt).unwrap();
    assert_eq!(dest, out);
    load_png(&out)
}

pub fn load_png(path: &Path) -> Image {
    let data = std::fs::read(path).unwrap();
    let mut decoder = png::Decoder::new(data.as_slice());
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().unwrap();
    let mut img_data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut img_data).unwrap();

    match info.color_type {
        png::ColorType::Rgba => {}
        _ => panic!("only RGBA PNG is expected"),
    }

    Image {
        width: info.width,
        height: info.height,
        data: img_data,
    }
}

#[test]
fn generates_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("1.png");
    svgpng::convert(svg("1.svg"), &out, &svgpng::Options::default()).unwrap();
    assert!(out.exists());
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("1.png");
    let res = svgpng::convert(svg("3.svg"), &out, &svgpng::Options::default());
    assert!(matches!(res, Err(svgpng::Error::SourceNotFound(_))));
    assert!(!out.exists());
}

#[test]
fn malformed_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("1.png");
    let res = svgpng::convert(svg("malformed.svg"), &out, &svgpng::Options::default());
    assert!(matches!(res, Err(svgpng::Error::Optimization(_))));
    assert!(!out.exists());
}

#[test]
fn does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("1.png");
    std::fs::write(&out, b"old").unwrap();

    let res = svgpng::convert(svg("1.svg"), &out, &svgpng::Options::default());
    assert!(matches!(res, Err(svgpng::Error::DestinationExists(_))));
    assert_eq!(std::fs::read(&out).unwrap(), b"old");
}

#[test]
fn overwrites_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("1.png");
    std::fs::write(&out, b"old").unwrap();

    let opt = svgpng::Options {
        overwrite: true,
        ..svgpng::Options::default()
    };
    svgpng::convert(svg("1.svg"), &out, &opt).unwrap();

    let img = load_png(&out);
    assert_eq!((img.width, img.height), (300, 300));
}

#[test]
fn svgz_source() {
    let img = render("1.svgz", svgpng::Options::default());
    assert_eq!((img.width, img.height), (300, 300));
}

#[test]
fn request_accessors() {
    let opt = svgpng::Options {
        width: Some(10),
        ..svgpng::Options::default()
    };
    let req = svgpng::Request::new("in.svg", "out.png", opt);
    assert_eq!(req.source(), Path::new("in.svg"));
    assert_eq!(req.dest(), Path::new("out.png"));
    assert_eq!(req.options().width, Some(10));
}
