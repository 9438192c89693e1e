/// Screen-space rectangle in the window system's convention: `right` and
/// `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Pixel dimensions of the decoration image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationSize {
    pub width: i32,
    pub height: i32,
}

/// Axis-aligned region of the screen eligible for decoration placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Derive the left and right margin zones of a target window.
///
/// The target is assumed to center a content column of `content_width`
/// pixels, leaving two side margins of equal width. The top `top_margin`
/// pixels are excluded so decorations never cover the title and menu band.
///
/// Returns `None` for both zones when the margins are too narrow for the
/// decoration or the remaining height cannot fit it. Margins narrower than
/// the decoration are the normal case on small screens, so this check runs
/// before any zone is built.
pub fn compute_zones(
    target: Rect,
    content_width: i32,
    top_margin: i32,
    decoration: DecorationSize,
) -> (Option<Zone>, Option<Zone>) {
    let side_width = (target.width() - content_width) / 2;
    if side_width <= decoration.width {
        return (None, None);
    }

    let draw_height = target.height() - top_margin;
    if draw_height < decoration.height {
        return (None, None);
    }

    let y = target.top + top_margin;
    let left = Zone {
        x: target.left,
        y,
        width: side_width,
        height: draw_height,
    };
    let right = Zone {
        x: target.left + side_width + content_width,
        y,
        width: side_width,
        height: draw_height,
    };
    (Some(left), Some(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECORATION: DecorationSize = DecorationSize {
        width: 100,
        height: 100,
    };

    #[test]
    fn maximized_full_hd_window_yields_symmetric_zones() {
        let target = Rect::new(0, 0, 1920, 1080);
        let (left, right) = compute_zones(target, 1000, 40, DECORATION);

        let left = left.expect("left zone");
        let right = right.expect("right zone");
        assert_eq!(left, Zone { x: 0, y: 40, width: 460, height: 1040 });
        assert_eq!(right, Zone { x: 1460, y: 40, width: 460, height: 1040 });
    }

    #[test]
    fn zones_follow_a_window_not_anchored_at_the_origin() {
        let target = Rect::new(-1920, 200, 0, 1280);
        let (left, right) = compute_zones(target, 1000, 40, DECORATION);

        let left = left.expect("left zone");
        let right = right.expect("right zone");
        assert_eq!(left.x, -1920);
        assert_eq!(left.y, 240);
        assert_eq!(right.x, -1920 + 460 + 1000);
        assert_eq!(left.height, 1040);
    }

    #[test]
    fn narrow_margins_produce_no_zones() {
        // 1160 wide leaves 80 px per side, less than the decoration.
        let target = Rect::new(0, 0, 1160, 1080);
        assert_eq!(compute_zones(target, 1000, 40, DECORATION), (None, None));
    }

    #[test]
    fn margin_equal_to_decoration_width_is_still_too_narrow() {
        let target = Rect::new(0, 0, 1200, 1080);
        assert_eq!(compute_zones(target, 1000, 40, DECORATION), (None, None));
    }

    #[test]
    fn window_narrower_than_the_content_column_produces_no_zones() {
        let target = Rect::new(0, 0, 800, 1080);
        assert_eq!(compute_zones(target, 1000, 40, DECORATION), (None, None));
    }

    #[test]
    fn short_window_produces_no_zones() {
        let target = Rect::new(0, 0, 1920, 130);
        assert_eq!(compute_zones(target, 1000, 40, DECORATION), (None, None));
    }

    #[test]
    fn draw_height_exactly_the_decoration_height_is_accepted() {
        let target = Rect::new(0, 0, 1920, 140);
        let (left, right) = compute_zones(target, 1000, 40, DECORATION);
        assert_eq!(left.expect("left zone").height, 100);
        assert!(right.is_some());
    }

    #[test]
    fn zone_computation_is_deterministic() {
        let target = Rect::new(13, 7, 1933, 1087);
        let first = compute_zones(target, 1000, 40, DECORATION);
        let second = compute_zones(target, 1000, 40, DECORATION);
        assert_eq!(first, second);
    }
}
