use buffalo_overlay::decoration::{resolve_resource, resource_dir, Decoration, KEY_COLOR};
use image::{Rgba, RgbaImage};
use tempfile::tempdir;

#[test]
fn load_flattens_alpha_onto_the_key_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decoration.png");

    let mut img = RgbaImage::new(3, 2);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
    img.put_pixel(2, 0, Rgba([0, 255, 0, 255]));
    img.save(&path).unwrap();

    let decoration = Decoration::load(&path).unwrap();
    assert_eq!(decoration.width(), 3);
    assert_eq!(decoration.height(), 2);

    let pixels = decoration.pixels();
    assert_eq!(pixels.len(), 3 * 2 * 4);

    // Opaque red comes through as BGRX.
    assert_eq!(&pixels[0..4], &[0, 0, 255, 0]);

    // A fully transparent pixel becomes the key color, so the window system
    // keys it out.
    let (r, g, b) = KEY_COLOR;
    assert_eq!(&pixels[4..8], &[b, g, r, 0]);
}

#[test]
fn semi_transparent_pixels_blend_toward_the_key_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decoration.png");

    let mut img = RgbaImage::new(1, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 128]));
    img.save(&path).unwrap();

    let decoration = Decoration::load(&path).unwrap();
    let pixels = decoration.pixels();

    // Half-covered black over white lands mid-gray on every channel.
    assert_eq!(pixels[0], pixels[1]);
    assert_eq!(pixels[1], pixels[2]);
    assert!(pixels[0] > 100 && pixels[0] < 155, "channel: {}", pixels[0]);
}

#[test]
fn missing_image_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Decoration::load(&dir.path().join("nope.png")).is_err());
}

#[test]
fn relative_resources_resolve_next_to_the_executable() {
    assert_eq!(
        resolve_resource("buffalo.png"),
        resource_dir().join("buffalo.png")
    );
}

#[test]
fn absolute_resources_are_left_alone() {
    let dir = tempdir().unwrap();
    let absolute = dir.path().join("buffalo.png");
    assert_eq!(
        resolve_resource(absolute.to_str().unwrap()),
        absolute
    );
}
