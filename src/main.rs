#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    #[cfg(windows)]
    {
        run()
    }
    #[cfg(not(windows))]
    {
        anyhow::bail!("buffalo_overlay only runs on Windows")
    }
}

#[cfg(windows)]
fn run() -> anyhow::Result<()> {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::Context;
    use buffalo_overlay::decoration::{resolve_resource, resource_dir, Decoration};
    use buffalo_overlay::logging;
    use buffalo_overlay::overlay::OverlayPool;
    use buffalo_overlay::settings::{Settings, SETTINGS_FILE};
    use buffalo_overlay::target::WinTargetProbe;
    use buffalo_overlay::tray::Tray;
    use buffalo_overlay::watcher::{LayoutParams, TargetWatcher};

    let settings_path = resource_dir().join(SETTINGS_FILE);
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("invalid settings file {}", settings_path.display()))?;
    logging::init(settings.debug_logging, settings.log_file.clone());

    let image_path = resolve_resource(&settings.image_path);
    let decoration = match Decoration::load(&image_path) {
        Ok(decoration) => Arc::new(decoration),
        Err(err) => {
            tracing::error!("cannot start without the decoration image: {err:#}");
            return Err(err);
        }
    };
    tracing::info!(
        image = %image_path.display(),
        width = decoration.width(),
        height = decoration.height(),
        "decoration image loaded"
    );

    let pool = OverlayPool::platform(decoration);
    let probe = WinTargetProbe::new(&settings.target_title);
    let layout = LayoutParams {
        content_width: settings.content_width,
        top_margin: settings.top_margin,
        per_side: settings.per_side,
    };
    let mut watcher = TargetWatcher::new(Box::new(probe), pool, layout);

    let tray = Tray::new().context("tray icon setup failed")?;
    tracing::info!(
        target_title = %settings.target_title,
        interval_ms = settings.poll_interval_ms,
        "watching for the target window"
    );

    let poll_interval = Duration::from_millis(settings.poll_interval_ms);
    let mut next_poll = Instant::now();
    loop {
        pump_messages();

        if tray.quit_requested() {
            tracing::info!("quit requested from the tray menu");
            drop(watcher);
            drop(tray);
            std::process::exit(0);
        }

        if Instant::now() >= next_poll {
            watcher.poll();
            next_poll = Instant::now() + poll_interval;
        }

        std::thread::sleep(Duration::from_millis(50));
    }
}

/// Dispatch pending window messages so the decoration windows repaint and
/// the tray menu stays responsive.
#[cfg(windows)]
fn pump_messages() {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE,
    };

    unsafe {
        let mut msg = MSG::default();
        while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).into() {
            let _ = TranslateMessage(&msg);
            let _ = DispatchMessageW(&msg);
        }
    }
}
