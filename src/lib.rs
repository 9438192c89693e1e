pub mod decoration;
pub mod geometry;
pub mod logging;
pub mod overlay;
pub mod placement;
pub mod settings;
pub mod target;
pub mod tray;
pub mod watcher;
