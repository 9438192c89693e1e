/// Tooltip shown when hovering the tray icon.
pub const TRAY_TOOLTIP: &str = "Buffalo Overlay";

#[cfg(windows)]
const MENU_ID_QUIT: &str = "quit";

#[cfg(windows)]
const TRAY_ICON: &[u8] = include_bytes!("../Resources/buffalo-icon.png");

/// Tray icon with its menu. Dropping the value removes the icon, so keep it
/// alive for the lifetime of the process.
#[cfg(windows)]
pub struct Tray {
    _icon: tray_icon::TrayIcon,
}

#[cfg(windows)]
impl Tray {
    pub fn new() -> anyhow::Result<Self> {
        use muda::{Menu, MenuItem, PredefinedMenuItem};
        use tray_icon::TrayIconBuilder;

        let menu = Menu::new();
        let status_item = MenuItem::new("Buffalo Overlay is running", false, None);
        let quit_item = MenuItem::with_id(MENU_ID_QUIT, "Quit", true, None);
        menu.append(&status_item)?;
        menu.append(&PredefinedMenuItem::separator())?;
        menu.append(&quit_item)?;

        let icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(TRAY_TOOLTIP)
            .with_icon(load_icon()?)
            .build()?;

        Ok(Self { _icon: icon })
    }

    /// Drain pending menu events; true when the user picked Quit since the
    /// last call.
    pub fn quit_requested(&self) -> bool {
        use tray_icon::menu::MenuEvent;

        let mut quit = false;
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if event.id.0 == MENU_ID_QUIT {
                quit = true;
            }
        }
        quit
    }
}

#[cfg(windows)]
fn load_icon() -> anyhow::Result<tray_icon::Icon> {
    let image = image::load_from_memory(TRAY_ICON)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(tray_icon::Icon::from_rgba(image.into_raw(), width, height)?)
}

#[cfg(not(windows))]
pub struct Tray;

#[cfg(not(windows))]
impl Tray {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    pub fn quit_requested(&self) -> bool {
        false
    }
}
