//! Cell-to-unit mapping for both rosters.
use rand::Rng;
use rand::seq::SliceRandom;

use super::{Position, Team, Unit};

/// A unit together with the cell it occupies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub unit: Unit,
    pub position: Position,
}

impl RosterEntry {
    pub fn new(unit: Unit, position: Position) -> Self {
        Self { unit, position }
    }
}

/// Entries split into the two sides of a match, each in roster order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub player: Vec<&'a RosterEntry>,
    pub computer: Vec<&'a RosterEntry>,
}

/// Every unit on the board, at most one per cell.
///
/// Entries keep insertion order; that order is the iteration order the AI
/// and the surfaces observe.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterStore {
    entries: Vec<RosterEntry>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `unit` at `position`, returning the unit it displaced, if any.
    pub fn add(&mut self, unit: Unit, position: Position) -> Option<Unit> {
        if let Some(entry) = self.entry_mut(position) {
            return Some(std::mem::replace(&mut entry.unit, unit));
        }
        self.entries.push(RosterEntry::new(unit, position));
        None
    }

    pub fn remove(&mut self, position: Position) -> Option<Unit> {
        let index = self.index_of(position)?;
        Some(self.entries.remove(index).unit)
    }

    /// Relocates the unit at `from` to `to`.
    ///
    /// Returns `false` without touching the roster when `from` is empty or
    /// `to` already holds a unit. Moving onto the same cell is a no-op success.
    pub fn move_unit(&mut self, from: Position, to: Position) -> bool {
        if from == to {
            return self.is_occupied(from);
        }
        if self.is_occupied(to) {
            return false;
        }
        match self.entry_mut(from) {
            Some(entry) => {
                entry.position = to;
                true
            }
            None => false,
        }
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.entries
            .iter()
            .find(|entry| entry.position == position)
            .map(|entry| &entry.unit)
    }

    pub(crate) fn unit_at_mut(&mut self, position: Position) -> Option<&mut Unit> {
        self.entry_mut(position).map(|entry| &mut entry.unit)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.entries.iter().map(|entry| entry.position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> + '_ {
        self.entries.iter_mut().map(|entry| &mut entry.unit)
    }

    /// Splits entries by `is_player`; everything else belongs to the computer.
    pub fn partition(&self, is_player: impl Fn(&Unit) -> bool) -> Partition<'_> {
        let (player, computer): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .partition(|entry| is_player(&entry.unit));
        Partition { player, computer }
    }

    /// Places each unit of `team` on a distinct random free cell from
    /// `candidates`.
    ///
    /// Occupied candidates are skipped. Placement stops when free cells run
    /// out; the remaining units stay unplaced. Returns the number placed.
    pub fn assign_random<R: Rng + ?Sized>(
        &mut self,
        team: Team,
        candidates: &[Position],
        rng: &mut R,
    ) -> usize {
        let mut free: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|position| !self.is_occupied(*position))
            .collect();
        free.sort_unstable();
        free.dedup();
        free.shuffle(rng);

        let mut placed = 0;
        for (unit, position) in team.into_units().into_iter().zip(free) {
            self.entries.push(RosterEntry::new(unit, position));
            placed += 1;
        }
        placed
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.entries.iter().position(|entry| entry.position == position)
    }

    fn entry_mut(&mut self, position: Position) -> Option<&mut RosterEntry> {
        self.entries.iter_mut().find(|entry| entry.position == position)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::state::{Side, UnitKind, UnitTable};

    fn unit(kind: UnitKind) -> Unit {
        Unit::new(kind, 1, &UnitTable::standard()).unwrap()
    }

    fn p(index: usize) -> Position {
        Position::new(index)
    }

    #[test]
    fn add_replaces_existing_occupant() {
        let mut roster = RosterStore::new();
        assert_eq!(roster.add(unit(UnitKind::Archer), p(3)), None);
        let displaced = roster.add(unit(UnitKind::Mage), p(3));

        assert_eq!(displaced.map(|u| u.kind()), Some(UnitKind::Archer));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.unit_at(p(3)).map(Unit::kind), Some(UnitKind::Mage));
    }

    #[test]
    fn move_unit_preserves_identity_and_refuses_occupied_targets() {
        let mut roster = RosterStore::new();
        roster.add(unit(UnitKind::Archer), p(0));
        roster.add(unit(UnitKind::Skeleton), p(9));

        assert!(!roster.move_unit(p(5), p(6)));
        assert!(!roster.move_unit(p(0), p(9)));
        assert!(roster.move_unit(p(0), p(1)));

        assert!(!roster.is_occupied(p(0)));
        assert_eq!(roster.unit_at(p(1)).map(Unit::kind), Some(UnitKind::Archer));
        assert_eq!(roster.entries()[0].position, p(1));
    }

    #[test]
    fn remove_returns_the_unit() {
        let mut roster = RosterStore::new();
        roster.add(unit(UnitKind::Vampire), p(4));
        assert_eq!(roster.remove(p(4)).map(|u| u.kind()), Some(UnitKind::Vampire));
        assert_eq!(roster.remove(p(4)), None);
        assert!(roster.is_empty());
    }

    #[test]
    fn partition_keeps_roster_order() {
        let table = UnitTable::standard();
        let mut roster = RosterStore::new();
        roster.add(unit(UnitKind::Demon), p(7));
        roster.add(unit(UnitKind::Archer), p(0));
        roster.add(unit(UnitKind::Skeleton), p(15));
        roster.add(unit(UnitKind::Mage), p(8));

        let teams = roster.partition(|u| table.side_of(u.kind()) == Side::Player);
        let player: Vec<_> = teams.player.iter().map(|e| e.position).collect();
        let computer: Vec<_> = teams.computer.iter().map(|e| e.position).collect();

        assert_eq!(player, vec![p(0), p(8)]);
        assert_eq!(computer, vec![p(7), p(15)]);
    }

    #[test]
    fn assign_random_skips_occupied_cells_and_stops_when_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut roster = RosterStore::new();
        roster.add(unit(UnitKind::Archer), p(0));

        let team = Team::new(vec![
            unit(UnitKind::Skeleton),
            unit(UnitKind::Demon),
            unit(UnitKind::Vampire),
        ]);
        let placed = roster.assign_random(team, &[p(0), p(1), p(2)], &mut rng);

        assert_eq!(placed, 2);
        assert_eq!(roster.len(), 3);
        assert!(roster.is_occupied(p(1)));
        assert!(roster.is_occupied(p(2)));
        assert_eq!(roster.unit_at(p(0)).map(Unit::kind), Some(UnitKind::Archer));
    }
}
