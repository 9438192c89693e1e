use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::geometry::DecorationSize;

/// Color keyed out by the overlay windows. The decoration is flattened onto
/// this color at load time, so transparent source pixels end up invisible on
/// screen.
pub const KEY_COLOR: (u8, u8, u8) = (255, 255, 255);

/// The decoration image, loaded once at startup and shared read-only by
/// every overlay window.
///
/// Pixels are stored as top-down 32-bit BGRX rows ready for a GDI bitmap,
/// with any source alpha already blended onto [`KEY_COLOR`].
pub struct Decoration {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Decoration {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let img = image::open(path)
            .with_context(|| {
                format!("decoration image '{}' is missing or unreadable", path.display())
            })?
            .into_rgba8();
        let (width, height) = img.dimensions();
        let (key_r, key_g, key_b) = KEY_COLOR;
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for px in img.pixels() {
            let [r, g, b, a] = px.0;
            let blend =
                |c: u8, key: u8| ((c as u32 * a as u32 + key as u32 * (255 - a as u32)) / 255) as u8;
            pixels.extend_from_slice(&[blend(b, key_b), blend(g, key_g), blend(r, key_r), 0]);
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            pixels,
        })
    }

    pub fn size(&self) -> DecorationSize {
        DecorationSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw BGRX rows, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Directory bundled resources are resolved against: the executable's
/// directory, falling back to the working directory when it cannot be
/// determined.
pub fn resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a settings path against [`resource_dir`]. Absolute paths are
/// used as given.
pub fn resolve_resource(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        resource_dir().join(path)
    }
}
