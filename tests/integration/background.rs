use std::str::FromStr;

use crate::render;

use svgpng::Options;

#[test]
fn transparent_by_default() {
    let img = render("1.svg", Options::default());
    assert_eq!(img.pixel(0, 0)[3], 0);
    assert_eq!(img.pixel(150, 150), [0x33, 0x66, 0xcc, 255]);
}

#[test]
fn opaque_backdrop_is_white() {
    let opt = Options {
        omit_background: false,
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!(img.pixel(0, 0), [255, 255, 255, 255]);
}

#[test]
fn background_fills_padding() {
    let opt = Options {
        width: Some(320),
        height: Some(320),
        padding: 10,
        background: Some(svgtypes::Color::from_str("#ff8800").unwrap()),
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (320, 320));
    assert_eq!(img.pixel(3, 3), [0xff, 0x88, 0x00, 255]);
    assert_eq!(img.pixel(316, 160), [0xff, 0x88, 0x00, 255]);
    assert_eq!(img.pixel(160, 160), [0x33, 0x66, 0xcc, 255]);
}

#[test]
fn background_overrides_omit_background() {
    let opt = Options {
        omit_background: true,
        background: Some(svgtypes::Color::from_str("rgb(0, 128, 0)").unwrap()),
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!(img.pixel(0, 0), [0, 128, 0, 255]);
}
