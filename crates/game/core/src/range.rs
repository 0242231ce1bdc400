//! Movement-range predicates shared by the engine and the highlight layer.
//!
//! All functions are pure and deterministic given the current tile set.

use crate::common::Position;
use crate::map::MapGrid;
use crate::unit::Unit;

/// True iff the Manhattan distance from `origin` to `target` is within
/// `range` and the target terrain is not in the blocked set.
pub fn is_within_distance(map: &MapGrid, origin: Position, target: Position, range: u32) -> bool {
    let Some(tile) = map.tile(target) else {
        return false;
    };
    if tile.terrain.is_blocked() {
        return false;
    }
    origin.manhattan_distance(target) <= range
}

/// True iff `target` belongs to `unit`'s highlighted reachable set.
///
/// A unit's own tile is never part of its range set, even though distance 0
/// trivially satisfies "within range". Unselected units have an empty set.
pub fn is_in_range(map: &MapGrid, unit: &Unit, target: Position) -> bool {
    if unit.position == target {
        return false;
    }
    unit.selected && is_within_distance(map, unit.position, target, unit.movement_range as u32)
}

/// Highlight predicate: true iff any unit considers `target` reachable.
pub fn in_range_of_any<'a>(
    map: &MapGrid,
    units: impl IntoIterator<Item = &'a Unit>,
    target: Position,
) -> bool {
    units
        .into_iter()
        .any(|unit| is_in_range(map, unit, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UnitId;
    use crate::map::TILE_COUNT;
    use crate::unit::UnitKind;

    fn plains_map() -> MapGrid {
        MapGrid::from_display_indices(&[1; TILE_COUNT])
    }

    fn selected_unit(x: u8, y: u8, range: u8) -> Unit {
        let mut unit = Unit::new(UnitId(7), UnitKind::Warrior, Position::new(x, y), range);
        unit.selected = true;
        unit
    }

    #[test]
    fn own_tile_is_never_in_range() {
        let map = plains_map();
        let unit = selected_unit(3, 3, 3);
        assert!(!is_in_range(&map, &unit, unit.position));
    }

    #[test]
    fn unselected_unit_has_empty_range_set() {
        let map = plains_map();
        let mut unit = selected_unit(3, 3, 3);
        unit.selected = false;
        for y in 0..20 {
            for x in 0..20 {
                assert!(!is_in_range(&map, &unit, Position::new(x, y)));
            }
        }
    }

    #[test]
    fn selected_unit_reaches_all_unblocked_tiles_within_manhattan_range() {
        let map = plains_map();
        let unit = selected_unit(3, 3, 3);
        for y in 0..20u8 {
            for x in 0..20u8 {
                let target = Position::new(x, y);
                let expected = target != unit.position
                    && unit.position.manhattan_distance(target) <= 3;
                assert_eq!(is_in_range(&map, &unit, target), expected, "at {target}");
            }
        }
    }

    #[test]
    fn blocked_terrain_is_untargetable_even_within_range() {
        let mut indices = [1u8; TILE_COUNT];
        indices[4 * 20 + 3] = 10; // Village at (3, 4)
        indices[2 * 20 + 3] = 9; // Mountains at (3, 2)
        let map = MapGrid::from_display_indices(&indices);
        let unit = selected_unit(3, 3, 3);

        assert!(!is_within_distance(&map, unit.position, Position::new(3, 4), 3));
        assert!(!is_within_distance(&map, unit.position, Position::new(3, 2), 3));
        assert!(!is_in_range(&map, &unit, Position::new(3, 4)));
        assert!(!is_in_range(&map, &unit, Position::new(3, 2)));
    }

    #[test]
    fn village_outside_range_is_rejected_by_distance_alone() {
        // Unit at (3, 3) with range 3; tile (1, 1) is a Village at distance 4.
        let mut indices = [1u8; TILE_COUNT];
        indices[20 + 1] = 10;
        let map = MapGrid::from_display_indices(&indices);
        let unit = selected_unit(3, 3, 3);
        assert!(!is_within_distance(&map, unit.position, Position::new(1, 1), 3));
    }

    #[test]
    fn highlight_covers_any_selected_unit() {
        let map = plains_map();
        let selected = selected_unit(3, 3, 2);
        let idle = Unit::new(UnitId(8), UnitKind::Archer, Position::new(10, 10), 2);
        let units = [selected, idle];

        assert!(in_range_of_any(&map, &units, Position::new(3, 5)));
        assert!(!in_range_of_any(&map, &units, Position::new(10, 11)));
    }
}
