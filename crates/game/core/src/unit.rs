use crate::common::{Position, UnitId};

/// Unit categories understood by the client.
///
/// `Barbarian` covers the NPC variants the program may report; anything the
/// client does not recognize is rendered as a `Warrior` rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Settler,
    Builder,
    Warrior,
    Archer,
    Swordsman,
    Barbarian,
}

impl UnitKind {
    pub fn from_wire(value: u8) -> Self {
        match value {
            0 => UnitKind::Settler,
            1 => UnitKind::Builder,
            2 => UnitKind::Warrior,
            3 => UnitKind::Archer,
            4 => UnitKind::Swordsman,
            5 => UnitKind::Barbarian,
            other => {
                tracing::debug!(kind = other, "unknown unit kind, rendering as warrior");
                UnitKind::Warrior
            }
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            UnitKind::Settler => 0,
            UnitKind::Builder => 1,
            UnitKind::Warrior => 2,
            UnitKind::Archer => 3,
            UnitKind::Swordsman => 4,
            UnitKind::Barbarian => 5,
        }
    }
}

/// A movable game piece.
///
/// `selected` is a local UI-only flag; it never round-trips to the program
/// and is cleared whenever the roster is replaced from upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub position: Position,
    pub kind: UnitKind,
    /// Remaining Manhattan tiles this unit may traverse this turn.
    pub movement_range: u8,
    pub health: u8,
    pub selected: bool,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, position: Position, movement_range: u8) -> Self {
        Self {
            id,
            position,
            kind,
            movement_range,
            health: 100,
            selected: false,
        }
    }

    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health;
        self
    }
}

/// The full unit set for the map, replaced wholesale on every refresh.
///
/// Enforces the single-selection invariant: at most one unit is selected at
/// any time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRoster {
    units: Vec<Unit>,
}

impl UnitRoster {
    /// Replace the full unit set and reset every selection flag.
    pub fn load(&mut self, units: Vec<Unit>) {
        self.units = units;
        for unit in &mut self.units {
            unit.selected = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.position == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.unit_at(position).is_some()
    }

    pub fn selected(&self) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.selected)
    }

    /// Toggle selection of `id`, deselecting every other unit in the same
    /// update. Returns the unit that is selected afterwards, if any.
    pub fn toggle_selection(&mut self, id: UnitId) -> Option<UnitId> {
        for unit in &mut self.units {
            if unit.id == id {
                unit.selected = !unit.selected;
            } else {
                unit.selected = false;
            }
        }
        self.selected().map(|unit| unit.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(units: Vec<Unit>) -> UnitRoster {
        let mut roster = UnitRoster::default();
        roster.load(units);
        roster
    }

    #[test]
    fn load_resets_selection_flags() {
        let mut unit = Unit::new(UnitId(1), UnitKind::Warrior, Position::new(2, 2), 2);
        unit.selected = true;
        let roster = roster(vec![unit]);
        assert!(roster.selected().is_none());
    }

    #[test]
    fn selecting_b_while_a_selected_leaves_exactly_one_selected() {
        let mut roster = roster(vec![
            Unit::new(UnitId(1), UnitKind::Warrior, Position::new(1, 1), 2),
            Unit::new(UnitId(2), UnitKind::Archer, Position::new(5, 5), 2),
        ]);

        roster.toggle_selection(UnitId(1));
        assert_eq!(roster.selected().map(|u| u.id), Some(UnitId(1)));

        roster.toggle_selection(UnitId(2));
        let selected: Vec<_> = roster.iter().filter(|u| u.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, UnitId(2));
    }

    #[test]
    fn toggling_selected_unit_deselects_it() {
        let mut roster = roster(vec![Unit::new(
            UnitId(1),
            UnitKind::Settler,
            Position::new(0, 0),
            2,
        )]);
        roster.toggle_selection(UnitId(1));
        roster.toggle_selection(UnitId(1));
        assert!(roster.selected().is_none());
    }

    #[test]
    fn unknown_wire_kind_falls_back_to_warrior() {
        assert_eq!(UnitKind::from_wire(42), UnitKind::Warrior);
    }
}
