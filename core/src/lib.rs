#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core vocabulary shared across the Redoubt match-rules layer.
//!
//! This crate defines the value types a match ruleset is assembled from:
//! teams, items, spawn descriptors, weather scheduling entries, and the
//! [`GameMode`] tags a ruleset classifies into. Every type serializes
//! structurally so that the persistence layer and the ruleset's own deep
//! copy can travel the same encoding. Nothing here holds game state; these
//! are configuration values consumed by the simulation, rendering, and
//! session-loading collaborators.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Teams a match participant can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Unaligned structures and derelict wrecks.
    Neutral,
    /// Default team assigned to players.
    Wardens,
    /// Default team assigned to wave enemies.
    Swarm,
    /// Additional player-assignable team for multi-sided matches.
    Verdant,
    /// Additional player-assignable team for multi-sided matches.
    Cinder,
}

/// Resource items that can appear in loadouts and spawn rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Common ore granted in the default core loadout.
    Ferrite,
    /// Conductive metal consumed by power blocks.
    Cobalt,
    /// Glass precursor refined from sand.
    Silica,
    /// Volatile mineral used in munitions.
    Pyrite,
}

/// Quantity of a single item type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item the stack contains.
    pub item: Item,
    /// Number of units in the stack.
    pub amount: u32,
}

impl ItemStack {
    /// Creates a new stack of the provided item and quantity.
    #[must_use]
    pub const fn new(item: Item, amount: u32) -> Self {
        Self { item, amount }
    }
}

/// Opaque identifier naming a block type.
///
/// The ruleset only records membership of blocks in its banned-placement
/// set; resolving an identifier to a concrete block definition is the
/// content registry's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(u16);

impl BlockId {
    /// Creates a new block identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

/// Opaque identifier naming an externally-owned sector.
///
/// Rulesets loaded from sector saves carry one of these as a non-owning
/// association. Copying a ruleset copies the identifier, never the sector
/// it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectorId(u32);

impl SectorId {
    /// Creates a new sector identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Enemy unit classes referenced by spawn descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Fast, fragile ground swarmer.
    Skitter,
    /// Armored walker that targets defensive blocks.
    Breacher,
    /// Slow siege unit with long-range artillery.
    Mortar,
    /// Airborne raider that bypasses ground defences.
    Kestrel,
}

/// Wave number used by spawn descriptors to mean "never ends".
pub const WAVE_NEVER: u32 = u32::MAX;

/// Describes one entry of a wave composition plan.
///
/// A spawn group contributes units to every wave in its `[begin, end]`
/// window whose offset from `begin` is a multiple of `spacing`. The spawn
/// scheduler reads these descriptors in insertion order; the descriptor
/// itself performs no scheduling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnGroup {
    /// Unit class spawned by this group.
    pub unit: UnitClass,
    /// First wave this group participates in.
    pub begin: u32,
    /// Last wave this group participates in.
    pub end: u32,
    /// Number of waves between occurrences of this group.
    pub spacing: u32,
    /// Units contributed per occurrence before scaling.
    pub unit_amount: u32,
    /// Additional units granted per wave past `begin`. Zero disables scaling.
    pub unit_scaling: f32,
    /// Upper bound on units contributed by a single occurrence.
    pub max: u32,
    /// Item stack handed to each spawned unit, if any.
    pub items: Option<ItemStack>,
}

impl SpawnGroup {
    /// Creates a group for the provided unit class with default cadence.
    #[must_use]
    pub fn new(unit: UnitClass) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Number of units this group contributes to the provided wave.
    ///
    /// Waves outside the `[begin, end]` window, or off the `spacing`
    /// cadence, contribute zero. Scaling is truncated toward zero and the
    /// result never exceeds `max`. A `spacing` of zero is treated as one.
    #[must_use]
    pub fn units_for_wave(&self, wave: u32) -> u32 {
        if wave < self.begin || wave > self.end {
            return 0;
        }

        let offset = wave - self.begin;
        if offset % self.spacing.max(1) != 0 {
            return 0;
        }

        let scaled = offset as f32 * self.unit_scaling;
        self.unit_amount.saturating_add(scaled as u32).min(self.max)
    }
}

impl Default for SpawnGroup {
    fn default() -> Self {
        Self {
            unit: UnitClass::Skitter,
            begin: 0,
            end: WAVE_NEVER,
            spacing: 1,
            unit_amount: 1,
            unit_scaling: 0.0,
            max: 60,
            items: None,
        }
    }
}

/// Weather kinds a ruleset can schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Steady rain that dampens fires and slows units.
    Rainfall,
    /// Abrasive dust storm that obscures vision.
    DustStorm,
    /// Drifting ash that smothers exposed blocks.
    AshFall,
}

/// Schedules recurring weather over a match.
///
/// Frequencies and durations are expressed in simulation ticks. The
/// scheduler picks a concrete value inside each range; the entry itself
/// only carries the bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    /// Weather kind this entry schedules.
    pub weather: Weather,
    /// Strength of the event, where 1.0 is the kind's baseline.
    pub intensity: f32,
    /// Minimum ticks between occurrences.
    pub min_frequency: f32,
    /// Maximum ticks between occurrences.
    pub max_frequency: f32,
    /// Minimum ticks an occurrence lasts.
    pub min_duration: f32,
    /// Maximum ticks an occurrence lasts.
    pub max_duration: f32,
}

impl WeatherEntry {
    /// Creates an entry for the provided weather kind with default timing.
    #[must_use]
    pub fn new(weather: Weather) -> Self {
        Self {
            weather,
            ..Self::default()
        }
    }
}

impl Default for WeatherEntry {
    fn default() -> Self {
        Self {
            weather: Weather::Rainfall,
            intensity: 1.0,
            min_frequency: 3600.0,
            max_frequency: 18_000.0,
            min_duration: 1800.0,
            max_duration: 3600.0,
        }
    }
}

/// RGBA color with floating point channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Classification tags a ruleset resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Player-versus-player objective.
    Pvp,
    /// Map editor session.
    Editor,
    /// Assault on enemy cores without defensive waves.
    Attack,
    /// Unconstrained building with infinite resources.
    Sandbox,
    /// Default wave-defence objective.
    Survival,
}

impl GameMode {
    /// All classification tags in precedence order.
    pub const ALL: [Self; 5] = [
        Self::Pvp,
        Self::Editor,
        Self::Attack,
        Self::Sandbox,
        Self::Survival,
    ];

    /// Lowercase name used in transfer strings and command lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pvp => "pvp",
            Self::Editor => "editor",
            Self::Attack => "attack",
            Self::Sandbox => "sandbox",
            Self::Survival => "survival",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pvp" => Ok(Self::Pvp),
            "editor" => Ok(Self::Editor),
            "attack" => Ok(Self::Attack),
            "sandbox" => Ok(Self::Sandbox),
            "survival" => Ok(Self::Survival),
            other => Err(ParseGameModeError(other.to_owned())),
        }
    }
}

/// Error produced when a string does not name a [`GameMode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGameModeError(String);

impl fmt::Display for ParseGameModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' does not name a game mode", self.0)
    }
}

impl Error for ParseGameModeError {}

#[cfg(test)]
mod tests {
    use super::{
        BlockId, GameMode, Item, ItemStack, SectorId, SpawnGroup, UnitClass, Weather, WeatherEntry,
        WAVE_NEVER,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn item_stack_round_trips_through_bincode() {
        assert_round_trip(&ItemStack::new(Item::Ferrite, 100));
    }

    #[test]
    fn block_id_round_trips_through_bincode() {
        assert_round_trip(&BlockId::new(42));
    }

    #[test]
    fn sector_id_round_trips_through_bincode() {
        assert_round_trip(&SectorId::new(7));
    }

    #[test]
    fn spawn_group_round_trips_through_bincode() {
        let group = SpawnGroup {
            unit: UnitClass::Breacher,
            begin: 4,
            end: 20,
            spacing: 2,
            unit_amount: 3,
            unit_scaling: 0.5,
            max: 12,
            items: Some(ItemStack::new(Item::Pyrite, 10)),
        };
        assert_round_trip(&group);
    }

    #[test]
    fn weather_entry_round_trips_through_bincode() {
        assert_round_trip(&WeatherEntry::new(Weather::AshFall));
    }

    #[test]
    fn default_spawn_group_covers_every_wave() {
        let group = SpawnGroup::default();
        assert_eq!(group.begin, 0);
        assert_eq!(group.end, WAVE_NEVER);
        assert_eq!(group.units_for_wave(0), 1);
        assert_eq!(group.units_for_wave(17), 1);
    }

    #[test]
    fn spawn_group_respects_window_and_cadence() {
        let group = SpawnGroup {
            begin: 5,
            end: 11,
            spacing: 3,
            ..SpawnGroup::default()
        };
        assert_eq!(group.units_for_wave(4), 0);
        assert_eq!(group.units_for_wave(5), 1);
        assert_eq!(group.units_for_wave(6), 0);
        assert_eq!(group.units_for_wave(8), 1);
        assert_eq!(group.units_for_wave(11), 1);
        assert_eq!(group.units_for_wave(12), 0);
    }

    #[test]
    fn spawn_group_scaling_truncates_and_caps() {
        let group = SpawnGroup {
            unit_amount: 2,
            unit_scaling: 0.5,
            max: 5,
            ..SpawnGroup::default()
        };
        assert_eq!(group.units_for_wave(0), 2);
        assert_eq!(group.units_for_wave(1), 2);
        assert_eq!(group.units_for_wave(2), 3);
        assert_eq!(group.units_for_wave(40), 5);
    }

    #[test]
    fn spawn_group_treats_zero_spacing_as_one() {
        let group = SpawnGroup {
            spacing: 0,
            ..SpawnGroup::default()
        };
        assert_eq!(group.units_for_wave(0), 1);
        assert_eq!(group.units_for_wave(1), 1);
    }

    #[test]
    fn game_mode_names_round_trip() {
        for mode in GameMode::ALL {
            let parsed: GameMode = mode.name().parse().expect("known name parses");
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn unknown_game_mode_name_is_rejected() {
        assert!("conquest".parse::<GameMode>().is_err());
    }
}
