use rand::Rng;
use rand::seq::SliceRandom;

use super::{Unit, UnitKind, UnitTable};

/// Ordered units without positions, waiting to be placed on the board.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Team {
    units: Vec<Unit>,
}

impl Team {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<Unit> for Team {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Draws `count` units with a uniformly random kind from `kinds` and a
/// uniformly random level in `1..=max_level`.
///
/// `max_level` is clamped into the valid level range. An empty `kinds`
/// slice yields an empty team.
pub fn generate_team<R: Rng + ?Sized>(
    kinds: &[UnitKind],
    max_level: u8,
    count: usize,
    units: &UnitTable,
    rng: &mut R,
) -> Team {
    let max_level = max_level.clamp(Unit::MIN_LEVEL, Unit::MAX_LEVEL);
    (0..count)
        .filter_map(|_| {
            let kind = *kinds.choose(rng)?;
            let level = rng.gen_range(Unit::MIN_LEVEL..=max_level);
            Unit::new(kind, level, units).ok()
        })
        .collect()
}
