use rand::{thread_rng, Rng};

use crate::geometry::{DecorationSize, Zone};

/// Pick up to `count` top-left positions for decorations inside `zone`,
/// uniformly at random. Both range ends are inclusive, so a decoration can
/// sit flush against any edge of the zone.
///
/// Draws are independent and may overlap. An attempt whose decoration does
/// not fit the zone is skipped rather than clamped, so the result may hold
/// fewer than `count` positions.
pub fn scatter_in_zone(zone: Zone, count: usize, decoration: DecorationSize) -> Vec<(i32, i32)> {
    let mut rng = thread_rng();
    let mut positions = Vec::with_capacity(count);
    for _ in 0..count {
        let max_x = zone.x + zone.width - decoration.width;
        let max_y = zone.y + zone.height - decoration.height;
        if max_x < zone.x || max_y < zone.y {
            continue;
        }
        let x = rng.gen_range(zone.x..=max_x);
        let y = rng.gen_range(zone.y..=max_y);
        positions.push((x, y));
    }
    positions
}
