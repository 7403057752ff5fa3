use std::fmt;

use super::Side;
use crate::state::UnitError;

/// Fixed set of unit kinds.
///
/// Parsing is case-insensitive and also accepts the legacy tags older saves
/// used (`bowman`, `magician`, `daemon`, `undead`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    #[strum(to_string = "archer", serialize = "bowman")]
    #[cfg_attr(feature = "serde", serde(alias = "bowman"))]
    Archer,
    Swordsman,
    #[strum(to_string = "mage", serialize = "magician")]
    #[cfg_attr(feature = "serde", serde(alias = "magician"))]
    Mage,
    #[strum(to_string = "demon", serialize = "daemon")]
    #[cfg_attr(feature = "serde", serde(alias = "daemon"))]
    Demon,
    #[strum(to_string = "skeleton", serialize = "undead")]
    #[cfg_attr(feature = "serde", serde(alias = "undead"))]
    Skeleton,
    Vampire,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Archer,
        UnitKind::Swordsman,
        UnitKind::Mage,
        UnitKind::Demon,
        UnitKind::Skeleton,
        UnitKind::Vampire,
    ];

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Static attributes shared by every unit of one kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitProfile {
    pub side: Side,
    pub move_range: usize,
    pub attack_range: usize,
    pub base_attack: f64,
    pub base_defence: f64,
}

impl UnitProfile {
    pub const fn new(
        side: Side,
        move_range: usize,
        attack_range: usize,
        base_attack: f64,
        base_defence: f64,
    ) -> Self {
        Self {
            side,
            move_range,
            attack_range,
            base_attack,
            base_defence,
        }
    }
}

/// Lookup table from [`UnitKind`] to its [`UnitProfile`].
///
/// Replaces per-kind subtypes: range queries and team membership are plain
/// table lookups keyed by the kind tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTable {
    profiles: [UnitProfile; 6],
}

impl UnitTable {
    /// The classic roster: melee runners, balanced skirmishers, static casters.
    pub const fn standard() -> Self {
        use Side::{Computer, Player};
        Self {
            profiles: [
                UnitProfile::new(Player, 2, 2, 25.0, 25.0),   // archer
                UnitProfile::new(Player, 4, 1, 40.0, 10.0),   // swordsman
                UnitProfile::new(Player, 1, 4, 10.0, 40.0),   // mage
                UnitProfile::new(Computer, 1, 4, 10.0, 10.0), // demon
                UnitProfile::new(Computer, 4, 1, 40.0, 10.0), // skeleton
                UnitProfile::new(Computer, 2, 2, 25.0, 25.0), // vampire
            ],
        }
    }

    pub fn profile(&self, kind: UnitKind) -> &UnitProfile {
        &self.profiles[kind.slot()]
    }

    pub fn side_of(&self, kind: UnitKind) -> Side {
        self.profile(kind).side
    }

    pub fn move_range(&self, kind: UnitKind) -> usize {
        self.profile(kind).move_range
    }

    pub fn attack_range(&self, kind: UnitKind) -> usize {
        self.profile(kind).attack_range
    }

    /// Kinds that belong to `side`, in declaration order.
    pub fn kinds_for(&self, side: Side) -> Vec<UnitKind> {
        UnitKind::ALL
            .into_iter()
            .filter(|kind| self.side_of(*kind) == side)
            .collect()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Coarse health bucket for surfaces that colour health bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HealthLevel {
    Critical,
    Normal,
    High,
}

impl HealthLevel {
    pub fn from_health(health: f64) -> Self {
        if health < 15.0 {
            Self::Critical
        } else if health < 50.0 {
            Self::Normal
        } else {
            Self::High
        }
    }
}

/// One combatant.
///
/// Fields are private: health changes only through combat resolution, and
/// attack/defence/level only through the level-up procedure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    kind: UnitKind,
    level: u8,
    attack: f64,
    defence: f64,
    health: f64,
}

impl Unit {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 4;
    pub const MAX_HEALTH: f64 = 100.0;
    pub const STARTING_HEALTH: f64 = 50.0;

    /// Creates a fresh unit with its kind's base stats and starting health.
    pub fn new(kind: UnitKind, level: u8, units: &UnitTable) -> Result<Self, UnitError> {
        let profile = units.profile(kind);
        Self::from_parts(
            kind,
            level,
            profile.base_attack,
            profile.base_defence,
            Self::STARTING_HEALTH,
        )
    }

    /// Rebuilds a unit from raw fields, enforcing the unit invariants.
    pub fn from_parts(
        kind: UnitKind,
        level: u8,
        attack: f64,
        defence: f64,
        health: f64,
    ) -> Result<Self, UnitError> {
        if !(Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            return Err(UnitError::LevelOutOfRange { level });
        }
        for (stat, value) in [("attack", attack), ("defence", defence)] {
            if !value.is_finite() || value < 0.0 {
                return Err(UnitError::InvalidStat { stat, value });
            }
        }
        if !health.is_finite() || !(0.0..=Self::MAX_HEALTH).contains(&health) {
            return Err(UnitError::HealthOutOfRange { health });
        }
        Ok(Self {
            kind,
            level,
            attack,
            defence,
            health,
        })
    }

    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn attack(&self) -> f64 {
        self.attack
    }

    pub const fn defence(&self) -> f64 {
        self.defence
    }

    pub const fn health(&self) -> f64 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn health_level(&self) -> HealthLevel {
        HealthLevel::from_health(self.health)
    }

    pub(crate) fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, Self::MAX_HEALTH);
    }

    pub(crate) fn set_progression(&mut self, level: u8, attack: f64, defence: f64) {
        self.level = level.clamp(Self::MIN_LEVEL, Self::MAX_LEVEL);
        self.attack = attack;
        self.defence = defence;
    }
}

/// Tooltip line: `🎖level ⚔attack 🛡defence ❤health`.
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🎖{} ⚔{} 🛡{} ❤{}",
            self.level, self.attack, self.defence, self.health
        )
    }
}
