use crate::geometry::{compute_zones, Rect};
use crate::overlay::OverlayPool;
use crate::placement::scatter_in_zone;
use crate::target::{TargetProbe, TargetState};

/// Margin layout handed to the zone planner on every show.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Width of the target's central content column in pixels.
    pub content_width: i32,
    /// Pixels skipped below the target's top edge.
    pub top_margin: i32,
    /// Decorations scattered into each side margin.
    pub per_side: usize,
}

/// Polls the target window and drives the overlay pool on visibility
/// transitions. Decorations keep their positions while the target stays
/// eligible; they are re-scattered only when it becomes eligible again.
pub struct TargetWatcher {
    probe: Box<dyn TargetProbe>,
    pool: OverlayPool,
    layout: LayoutParams,
    visible: bool,
}

impl TargetWatcher {
    pub fn new(probe: Box<dyn TargetProbe>, pool: OverlayPool, layout: LayoutParams) -> Self {
        Self {
            probe,
            pool,
            layout,
            visible: false,
        }
    }

    /// One timer tick: query the target and reconcile overlay visibility.
    ///
    /// A probe failure counts as "target not eligible" for this tick only;
    /// it never interrupts the caller's schedule.
    pub fn poll(&mut self) {
        let state = match self.probe.probe() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("target window query failed: {err:#}");
                TargetState::default()
            }
        };

        let eligible = state.eligible();
        if eligible == self.visible {
            return;
        }

        tracing::debug!(from=?self.visible, to=?eligible, "decoration visibility changed");
        if eligible {
            if let Some(rect) = state.rect {
                self.scatter(rect);
            }
        } else {
            self.pool.hide_all();
        }
        self.visible = eligible;
    }

    fn scatter(&mut self, target: Rect) {
        let decoration = self.pool.decoration_size();
        let (left, right) =
            compute_zones(target, self.layout.content_width, self.layout.top_margin, decoration);

        let mut positions = Vec::new();
        for zone in [left, right].into_iter().flatten() {
            positions.extend(scatter_in_zone(zone, self.layout.per_side, decoration));
        }
        if positions.is_empty() {
            tracing::debug!(
                width = target.width(),
                height = target.height(),
                "target window has no room for decorations"
            );
        }
        self.pool.show(&positions);
    }

    /// Whether the last poll considered the target eligible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pool(&self) -> &OverlayPool {
        &self.pool
    }
}
