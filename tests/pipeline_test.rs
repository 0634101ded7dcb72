//! End-to-end tests for the byte-level rendering pipeline.
//!
//! These feed real encoded PNG bytes through `MosaicRenderer::render`,
//! covering what the decode layer adds on top of the in-crate unit
//! tests: format sniffing, decode failures and the JSON shape of the
//! final mosaic.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;

use emoji_mosaic::{Catalog, CatalogEntry, CatalogOptions, MosaicError, MosaicRenderer};

/// Encode a solid-color image as PNG bytes.
fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb(color));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

fn rgb(r: u8, g: u8, b: u8) -> emoji_mosaic::Rgb {
    emoji_mosaic::Rgb { r, g, b }
}

#[test]
fn test_solid_blue_png_renders_uniform_mosaic() {
    let bytes = solid_png(100, 100, [0, 0, 255]);
    let mut renderer = MosaicRenderer::new(Catalog::builtin())
        .grid_size(16)
        .aspect_ratio("1:1");

    let mosaic = renderer.render(&bytes).expect("render");

    assert_eq!((mosaic.rows(), mosaic.cols()), (16, 16));
    assert_eq!(mosaic.tiles().len(), 256);
    for tile in mosaic.tiles() {
        assert_eq!(tile.glyph, "\u{1F7E6}");
        assert_eq!(tile.color, "#0000ff");
    }
}

#[test]
fn test_jpeg_bytes_are_accepted() {
    // Format is sniffed from the bytes, not declared by the caller.
    let image = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("encode jpeg");

    let mut renderer = MosaicRenderer::new(Catalog::builtin()).grid_size(8);
    let mosaic = renderer.render(&bytes).expect("render");

    assert_eq!((mosaic.rows(), mosaic.cols()), (8, 8));
    // JPEG is lossy; a white input still lands on a white-ish entry.
    assert_eq!(mosaic.get(0, 0).unwrap().glyph, "\u{2B1C}");
}

#[test]
fn test_undecodable_bytes_error() {
    let mut renderer = MosaicRenderer::new(Catalog::builtin());

    let err = renderer.render(b"this is not an image").unwrap_err();

    assert!(
        matches!(err, MosaicError::UnprocessableImage(_)),
        "expected UnprocessableImage, got {err:?}"
    );
}

#[test]
fn test_zero_grid_size_errors() {
    let bytes = solid_png(32, 32, [10, 20, 30]);
    let mut renderer = MosaicRenderer::new(Catalog::builtin()).grid_size(0);

    let err = renderer.render(&bytes).unwrap_err();

    assert!(
        matches!(err, MosaicError::Grid(_)),
        "expected a grid error for grid size 0, got {err:?}"
    );
}

#[test]
fn test_grid_finer_than_image_errors() {
    let bytes = solid_png(8, 8, [10, 20, 30]);
    let mut renderer = MosaicRenderer::new(Catalog::builtin()).grid_size(16);

    let err = renderer.render(&bytes).unwrap_err();

    assert!(
        matches!(err, MosaicError::Grid(_)),
        "expected a grid error when cells round to zero pixels, got {err:?}"
    );
}

#[test]
fn test_wide_aspect_shapes_intermediate_dimensions() {
    // 16:9 on a square source keeps the longer side and derives the
    // shorter one; the grid itself stays square.
    let bytes = solid_png(100, 100, [0, 0, 255]);
    let mut renderer = MosaicRenderer::new(Catalog::builtin())
        .grid_size(8)
        .aspect_ratio("16:9");

    let mosaic = renderer.render(&bytes).expect("render");

    assert_eq!((mosaic.width(), mosaic.height()), (100, 56));
    assert_eq!((mosaic.rows(), mosaic.cols()), (8, 8));
}

#[test]
fn test_unparseable_aspect_falls_back_to_square() {
    let bytes = solid_png(64, 64, [0, 0, 255]);
    let mut renderer = MosaicRenderer::new(Catalog::builtin())
        .grid_size(4)
        .aspect_ratio("banana");

    let mosaic = renderer.render(&bytes).expect("render");

    assert_eq!((mosaic.width(), mosaic.height()), (64, 64));
}

#[test]
fn test_empty_catalog_renders_fallback_tiles() {
    let bytes = solid_png(32, 32, [200, 30, 90]);
    let mut renderer = MosaicRenderer::new(Catalog::new(Vec::new())).grid_size(4);

    let mosaic = renderer.render(&bytes).expect("render");

    for tile in mosaic.tiles() {
        assert_eq!(tile.glyph, emoji_mosaic::FALLBACK_GLYPH);
        assert_eq!(tile.color, "#ffffff");
    }
}

#[test]
fn test_renderer_from_csv_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
    file.write_all(
        "Emoji,ASCII Code,Hex Color\n\
         \u{1F7E5},128997,#ff0000\n\
         \u{1F7E6},128998,#0000ff\n"
            .as_bytes(),
    )
    .expect("write temp csv");

    let mut renderer = MosaicRenderer::from_csv(file.path(), CatalogOptions::new())
        .expect("build renderer")
        .grid_size(4);
    let mosaic = renderer.render(&solid_png(32, 32, [200, 0, 0])).expect("render");
    assert!(mosaic.tiles().iter().all(|t| t.glyph == "\u{1F7E5}"));

    // A bad catalog path surfaces as the catalog error branch.
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = MosaicRenderer::from_csv(dir.path().join("missing.csv"), CatalogOptions::new())
        .unwrap_err();
    assert!(
        matches!(err, MosaicError::Catalog(_)),
        "expected Catalog error for a missing file, got {err:?}"
    );
}

#[test]
fn test_mosaic_json_shape() {
    let bytes = solid_png(32, 32, [0, 255, 0]);
    let catalog = Catalog::new(vec![CatalogEntry::new(
        "\u{1F7E9}",
        rgb(0, 255, 0),
        Some("Green".into()),
    )]);
    let mut renderer = MosaicRenderer::new(catalog).grid_size(2);

    let mosaic = renderer.render(&bytes).expect("render");
    let json = serde_json::to_value(&mosaic).expect("serialize");

    assert_eq!(json["rows"], 2);
    assert_eq!(json["cols"], 2);
    let tiles = json["tiles"].as_array().expect("tiles array");
    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[0]["row"], 0);
    assert_eq!(tiles[0]["col"], 0);
    assert_eq!(tiles[0]["glyph"], "\u{1F7E9}");
    assert_eq!(tiles[0]["color"], "#00ff00");
    assert_eq!(tiles[3]["row"], 1);
    assert_eq!(tiles[3]["col"], 1);
}
