#[cfg(target_os = "windows")]
fn main() {
    use std::path::PathBuf;

    use image::imageops::FilterType;

    // winres needs an .ico file on disk; render one from the bundled PNG.
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set"));
    let ico_path = out_dir.join("buffalo.ico");

    let icon = image::load_from_memory(include_bytes!("Resources/buffalo-icon.png"))
        .expect("decode app icon")
        .resize(256, 256, FilterType::Lanczos3);
    let mut file = std::fs::File::create(&ico_path).expect("create ico");
    icon.write_to(&mut file, image::ImageOutputFormat::Ico)
        .expect("encode ico");

    let mut res = winres::WindowsResource::new();
    res.set_icon(ico_path.to_str().expect("ico path is not utf-8"));
    res.compile().expect("compile windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
