use crate::geometry::Rect;

/// Snapshot of the target window taken by one poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetState {
    pub exists: bool,
    pub foreground: bool,
    pub maximized: bool,
    /// Outer frame of the target in screen coordinates. `None` when the
    /// window does not exist.
    pub rect: Option<Rect>,
}

impl TargetState {
    /// Decorations are shown only while the target is present, focused and
    /// maximized, all at once.
    pub fn eligible(&self) -> bool {
        self.exists && self.foreground && self.maximized
    }
}

/// Window-system query surface, kept narrow so tests can script it.
pub trait TargetProbe {
    fn probe(&self) -> anyhow::Result<TargetState>;
}

/// Probe backed by the Win32 window list, matching the target by its exact
/// title.
#[cfg(windows)]
pub struct WinTargetProbe {
    title: Vec<u16>,
}

#[cfg(windows)]
impl WinTargetProbe {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.encode_utf16().chain(std::iter::once(0)).collect(),
        }
    }
}

#[cfg(windows)]
impl TargetProbe for WinTargetProbe {
    fn probe(&self) -> anyhow::Result<TargetState> {
        use anyhow::Context;
        use windows::core::PCWSTR;
        use windows::Win32::Foundation::RECT;
        use windows::Win32::UI::WindowsAndMessaging::{
            FindWindowW, GetForegroundWindow, GetWindowPlacement, GetWindowRect,
            SW_SHOWMAXIMIZED, WINDOWPLACEMENT,
        };

        unsafe {
            let hwnd =
                FindWindowW(PCWSTR::null(), PCWSTR(self.title.as_ptr())).unwrap_or_default();
            if hwnd.0.is_null() {
                return Ok(TargetState::default());
            }

            let mut placement = WINDOWPLACEMENT::default();
            placement.length = std::mem::size_of::<WINDOWPLACEMENT>() as u32;
            GetWindowPlacement(hwnd, &mut placement)
                .context("GetWindowPlacement on target window failed")?;

            let mut rect = RECT::default();
            GetWindowRect(hwnd, &mut rect).context("GetWindowRect on target window failed")?;

            Ok(TargetState {
                exists: true,
                foreground: GetForegroundWindow().0 == hwnd.0,
                maximized: placement.showCmd == SW_SHOWMAXIMIZED.0 as u32,
                rect: Some(Rect::new(rect.left, rect.top, rect.right, rect.bottom)),
            })
        }
    }
}
