use crate::render;

use svgpng::Options;

#[test]
fn intrinsic_size() {
    let img = render("1.svg", Options::default());
    assert_eq!((img.width, img.height), (300, 300));
}

#[test]
fn width_only() {
    let opt = Options {
        width: Some(600),
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (600, 600));
}

#[test]
fn width_only_non_square() {
    let opt = Options {
        width: Some(400),
        ..Options::default()
    };

    let img = render("wide.svg", opt);
    assert_eq!((img.width, img.height), (400, 200));
}

#[test]
fn height_only_non_square() {
    let opt = Options {
        height: Some(50),
        ..Options::default()
    };

    let img = render("wide.svg", opt);
    assert_eq!((img.width, img.height), (100, 50));
}

#[test]
fn width_only_follows_view_box() {
    let opt = Options {
        width: Some(400),
        ..Options::default()
    };

    // The declared size is 200x100, but the viewBox is square.
    let img = render("view-box.svg", opt);
    assert_eq!((img.width, img.height), (400, 400));
    assert_eq!(img.pixel(5, 395), [0x33, 0x66, 0xcc, 255]);
    assert_eq!(img.pixel(395, 5), [0x33, 0x66, 0xcc, 255]);
}

#[test]
fn wide_size_without_skewing() {
    let opt = Options {
        width: Some(1200),
        height: Some(500),
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (1200, 500));
}

#[test]
fn tall_size_without_skewing() {
    let opt = Options {
        width: Some(500),
        height: Some(1200),
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (500, 1200));
}

#[test]
fn trimmed_keeps_size() {
    let opt = Options {
        width: Some(500),
        height: Some(500),
        trim: true,
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (500, 500));

    // The circle touches the image edges after trimming.
    assert_eq!(img.pixel(250, 1), [0x33, 0x66, 0xcc, 255]);
}

#[test]
fn trimmed_intrinsic_size() {
    let opt = Options {
        trim: true,
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (300, 300));
}

#[test]
fn unknown_size_with_explicit_size() {
    let opt = Options {
        width: Some(500),
        height: Some(500),
        ..Options::default()
    };

    let img = render("2.svg", opt);
    assert_eq!((img.width, img.height), (500, 500));
}

#[test]
fn unknown_size_uses_default_length() {
    let img = render("2.svg", Options::default());
    assert_eq!((img.width, img.height), (1000, 1000));
}

#[test]
fn unknown_size_uses_custom_default_length() {
    let opt = Options {
        default_svg_length: 500,
        ..Options::default()
    };

    let img = render("2.svg", opt);
    assert_eq!((img.width, img.height), (500, 500));
}

#[test]
fn unknown_size_single_length() {
    let opt = Options {
        width: Some(160),
        ..Options::default()
    };

    // Trimmed to the 80x40 rect.
    let img = render("2.svg", opt);
    assert_eq!((img.width, img.height), (160, 80));
}

#[test]
fn padding_keeps_explicit_size() {
    let opt = Options {
        width: Some(400),
        height: Some(300),
        padding: 25,
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (400, 300));
}

#[test]
fn padding_around_intrinsic_size() {
    let opt = Options {
        padding: 10,
        ..Options::default()
    };

    let img = render("1.svg", opt);
    assert_eq!((img.width, img.height), (300, 300));
    assert_eq!(img.pixel(5, 150)[3], 0);
    assert_eq!(img.pixel(150, 150), [0x33, 0x66, 0xcc, 255]);
}

#[test]
fn padding_too_large() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");
    let opt = Options {
        width: Some(100),
        padding: 60,
        ..Options::default()
    };

    let res = svgpng::convert(crate::svg("1.svg"), &out, &opt);
    assert!(matches!(res, Err(svgpng::Error::PaddingTooLarge { .. })));
    assert!(!out.exists());
}
