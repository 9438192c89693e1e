use std::sync::Arc;

use crate::decoration::Decoration;
use crate::geometry::DecorationSize;

/// Handle to one live decoration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayId(pub isize);

/// Window-system surface for decoration windows.
///
/// Implementations create borderless, always-on-top, click-through windows
/// that render the decoration image and nothing else. Destroying an id that
/// was already destroyed is a no-op.
pub trait OverlayBackend {
    fn create(&mut self, x: i32, y: i32) -> anyhow::Result<OverlayId>;
    fn destroy(&mut self, id: OverlayId);
}

/// Owns every live decoration window; nothing else creates or destroys
/// them.
pub struct OverlayPool {
    backend: Box<dyn OverlayBackend>,
    decoration_size: DecorationSize,
    live: Vec<OverlayId>,
}

impl OverlayPool {
    pub fn new(backend: Box<dyn OverlayBackend>, decoration_size: DecorationSize) -> Self {
        Self {
            backend,
            decoration_size,
            live: Vec::new(),
        }
    }

    /// Pool backed by the platform window system, or by a no-op backend
    /// where there is none.
    pub fn platform(decoration: Arc<Decoration>) -> Self {
        let size = decoration.size();
        #[cfg(windows)]
        {
            Self::new(Box::new(GdiOverlayBackend::new(decoration)), size)
        }
        #[cfg(not(windows))]
        {
            let _ = decoration;
            Self::new(Box::new(NoopOverlayBackend::default()), size)
        }
    }

    pub fn decoration_size(&self) -> DecorationSize {
        self.decoration_size
    }

    /// Create one decoration window per position. Any windows left over from
    /// an earlier show are destroyed first, so the pool never accumulates.
    /// A creation failure skips that position and keeps the rest.
    pub fn show(&mut self, positions: &[(i32, i32)]) {
        self.hide_all();
        for &(x, y) in positions {
            match self.backend.create(x, y) {
                Ok(id) => self.live.push(id),
                Err(err) => {
                    tracing::warn!("decoration window at ({x}, {y}) failed: {err:#}");
                }
            }
        }
    }

    /// Destroy all live decoration windows. Safe to call when none exist.
    pub fn hide_all(&mut self) {
        for id in self.live.drain(..) {
            self.backend.destroy(id);
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Drop for OverlayPool {
    fn drop(&mut self) {
        self.hide_all();
    }
}

/// Backend for platforms without a window system binding; hands out ids and
/// draws nothing.
#[derive(Debug, Default)]
pub struct NoopOverlayBackend {
    next_id: isize,
}

impl OverlayBackend for NoopOverlayBackend {
    fn create(&mut self, _x: i32, _y: i32) -> anyhow::Result<OverlayId> {
        self.next_id += 1;
        Ok(OverlayId(self.next_id))
    }

    fn destroy(&mut self, _id: OverlayId) {}
}

#[cfg(windows)]
pub use platform::GdiOverlayBackend;

#[cfg(windows)]
mod platform {
    use std::collections::HashMap;
    use std::mem;
    use std::ptr;
    use std::sync::Arc;
    use std::sync::Once;

    use anyhow::Context;
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{COLORREF, HANDLE, HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::Graphics::Gdi::{
        BeginPaint, BitBlt, CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, EndPaint,
        SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS, HBITMAP, HDC, HGDIOBJ,
        PAINTSTRUCT, SRCCOPY,
    };
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DestroyWindow, GetWindowLongPtrW, RegisterClassW,
        SetLayeredWindowAttributes, SetWindowLongPtrW, SetWindowPos, GWLP_USERDATA, HWND_TOPMOST,
        LWA_COLORKEY, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW, WM_ERASEBKGND,
        WM_PAINT, WM_SHOWWINDOW, WM_WINDOWPOSCHANGED, WNDCLASSW, WS_DISABLED, WS_EX_LAYERED,
        WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
    };

    use super::{OverlayBackend, OverlayId};
    use crate::decoration::{Decoration, KEY_COLOR};

    fn transparency_colorkey() -> COLORREF {
        let (r, g, b) = KEY_COLOR;
        COLORREF((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    fn widestring(value: &str) -> Vec<u16> {
        value.encode_utf16().chain(std::iter::once(0)).collect()
    }

    unsafe extern "system" fn overlay_wndproc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match msg {
            WM_ERASEBKGND => LRESULT(1),
            WM_PAINT => {
                let mut ps = PAINTSTRUCT::default();
                let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
                if !hdc.0.is_null() {
                    let mem_dc = HDC(unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut _);
                    if !mem_dc.0.is_null() {
                        let width = ps.rcPaint.right - ps.rcPaint.left;
                        let height = ps.rcPaint.bottom - ps.rcPaint.top;
                        let _ = unsafe {
                            BitBlt(
                                hdc,
                                ps.rcPaint.left,
                                ps.rcPaint.top,
                                width,
                                height,
                                mem_dc,
                                ps.rcPaint.left,
                                ps.rcPaint.top,
                                SRCCOPY,
                            )
                        };
                    }
                }
                unsafe {
                    let _ = EndPaint(hwnd, &ps);
                }
                LRESULT(0)
            }
            // The target reasserts its own z-order while in focus; stay above
            // it whenever our position in the stack changes.
            WM_SHOWWINDOW | WM_WINDOWPOSCHANGED => {
                let _ = unsafe {
                    SetWindowPos(
                        hwnd,
                        HWND_TOPMOST,
                        0,
                        0,
                        0,
                        0,
                        SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
                    )
                };
                unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
            }
            _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        }
    }

    /// One decoration window and the GDI objects backing its pixels.
    struct GdiOverlay {
        hwnd: HWND,
        mem_dc: HDC,
        dib: HBITMAP,
        old_bitmap: HGDIOBJ,
    }

    /// Backend rendering decorations as layered windows with a color key.
    /// The decoration bitmap is copied into a DIB section per window; the
    /// window procedure blits from it on every paint.
    pub struct GdiOverlayBackend {
        decoration: Arc<Decoration>,
        windows: HashMap<isize, GdiOverlay>,
    }

    impl GdiOverlayBackend {
        pub fn new(decoration: Arc<Decoration>) -> Self {
            Self {
                decoration,
                windows: HashMap::new(),
            }
        }
    }

    impl OverlayBackend for GdiOverlayBackend {
        fn create(&mut self, x: i32, y: i32) -> anyhow::Result<OverlayId> {
            static REGISTER_CLASS: Once = Once::new();
            let class_name = widestring("BuffaloOverlay");
            let hinstance = unsafe { GetModuleHandleW(PCWSTR::null()) }
                .context("GetModuleHandleW failed")?;

            REGISTER_CLASS.call_once(|| unsafe {
                let wc = WNDCLASSW {
                    hInstance: hinstance.into(),
                    lpszClassName: PCWSTR(class_name.as_ptr()),
                    lpfnWndProc: Some(overlay_wndproc),
                    ..Default::default()
                };
                let _ = RegisterClassW(&wc);
            });

            let width = self.decoration.width();
            let height = self.decoration.height();
            let hwnd = unsafe {
                CreateWindowExW(
                    WS_EX_LAYERED
                        | WS_EX_TRANSPARENT
                        | WS_EX_TOPMOST
                        | WS_EX_TOOLWINDOW
                        | WS_EX_NOACTIVATE,
                    PCWSTR(class_name.as_ptr()),
                    PCWSTR::null(),
                    WS_POPUP | WS_DISABLED,
                    x,
                    y,
                    width,
                    height,
                    None,
                    None,
                    hinstance,
                    None,
                )
                .context("CreateWindowExW failed")?
            };

            if let Err(err) =
                unsafe { SetLayeredWindowAttributes(hwnd, transparency_colorkey(), 0, LWA_COLORKEY) }
            {
                unsafe {
                    let _ = DestroyWindow(hwnd);
                }
                return Err(err).context("SetLayeredWindowAttributes failed");
            }

            let mem_dc = unsafe { CreateCompatibleDC(HDC::default()) };
            if mem_dc.0.is_null() {
                unsafe {
                    let _ = DestroyWindow(hwnd);
                }
                anyhow::bail!("CreateCompatibleDC failed");
            }

            let mut bmi = BITMAPINFO::default();
            bmi.bmiHeader = BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            };

            let mut bits: *mut core::ffi::c_void = ptr::null_mut();
            let dib = match unsafe {
                CreateDIBSection(mem_dc, &bmi, DIB_RGB_COLORS, &mut bits, HANDLE::default(), 0)
            } {
                Ok(dib) if !bits.is_null() => dib,
                Ok(dib) => {
                    unsafe {
                        let _ = DeleteObject(dib);
                        let _ = DeleteDC(mem_dc);
                        let _ = DestroyWindow(hwnd);
                    }
                    anyhow::bail!("CreateDIBSection returned no pixel storage");
                }
                Err(err) => {
                    unsafe {
                        let _ = DeleteDC(mem_dc);
                        let _ = DestroyWindow(hwnd);
                    }
                    return Err(err).context("CreateDIBSection failed");
                }
            };

            let pixels = self.decoration.pixels();
            unsafe {
                std::slice::from_raw_parts_mut(bits as *mut u8, pixels.len())
                    .copy_from_slice(pixels);
            }

            let old_bitmap = unsafe { SelectObject(mem_dc, dib) };
            unsafe {
                let _ = SetWindowLongPtrW(hwnd, GWLP_USERDATA, mem_dc.0 as isize);
                let _ = SetWindowPos(
                    hwnd,
                    HWND_TOPMOST,
                    0,
                    0,
                    0,
                    0,
                    SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_SHOWWINDOW,
                );
            }

            let id = hwnd.0 as isize;
            self.windows.insert(
                id,
                GdiOverlay {
                    hwnd,
                    mem_dc,
                    dib,
                    old_bitmap,
                },
            );
            Ok(OverlayId(id))
        }

        fn destroy(&mut self, id: OverlayId) {
            let Some(overlay) = self.windows.remove(&id.0) else {
                return;
            };
            unsafe {
                let _ = SelectObject(overlay.mem_dc, overlay.old_bitmap);
                let _ = DeleteObject(overlay.dib);
                let _ = DeleteDC(overlay.mem_dc);
                let _ = DestroyWindow(overlay.hwnd);
            }
        }
    }

}
