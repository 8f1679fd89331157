#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative match configuration for Redoubt.
//!
//! A [`Ruleset`] is the complete bag of knobs describing how one match
//! behaves: wave timing, stat multipliers, the spawn plan, the starting
//! loadout, banned blocks, lighting, and team assignments. It stores no
//! game state. Map and mode setup code mutates it freely before (and
//! during) a session, the simulation and rendering collaborators read it,
//! and the persistence layer serializes it structurally. The ruleset never
//! enforces cross-field consistency; [`Ruleset::mode`] resolves ambiguous
//! flag combinations with a fixed precedence instead.

use std::collections::{HashMap, HashSet};

use redoubt_core::{
    BlockId, Color, GameMode, Item, ItemStack, SectorId, SpawnGroup, Team, WeatherEntry,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ticks between waves: two minutes at sixty ticks per second.
const DEFAULT_WAVE_SPACING: f32 = 60.0 * 60.0 * 2.0;

/// Ambient light applied when lighting is enabled.
const DEFAULT_AMBIENT_LIGHT: Color = Color::new(0.01, 0.01, 0.04, 0.99);

/// Enemy-core no-build radius used by the PvP preset.
const PVP_ENEMY_CORE_BUILD_RADIUS: f32 = 600.0;

/// Complete configuration for one match.
///
/// Every field is independently settable; defaults come from
/// [`Ruleset::default`]. The struct deliberately does not implement
/// `Clone`: copies travel through the same structural encoding as saves
/// (see [`Ruleset::copy`]), so a copy can never contain state a save
/// would drop.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    /// Whether players build and spend from an infinite resource pool.
    pub infinite_resources: bool,
    /// Whether waves arrive automatically on a timer. When false, waves
    /// launch only on explicit player request.
    pub wave_timer: bool,
    /// Whether waves spawn at all.
    pub waves: bool,
    /// Whether enemy AI buildings act as if supplied with infinite
    /// resources.
    pub enemy_cheat: bool,
    /// Whether the match objective is player versus player.
    pub pvp: bool,
    /// Whether reactors detonate and damage surrounding blocks.
    pub reactor_explosions: bool,
    /// How fast factories assemble units.
    pub unit_build_speed_multiplier: f32,
    /// Health scale applied to units when they spawn.
    pub unit_health_multiplier: f32,
    /// Health scale applied to players when they spawn.
    pub player_health_multiplier: f32,
    /// Health scale applied to blocks when they are placed.
    pub block_health_multiplier: f32,
    /// Damage scale applied to player-controlled units.
    pub player_damage_multiplier: f32,
    /// Damage scale applied to all other units.
    pub unit_damage_multiplier: f32,
    /// Cost scale applied to player construction.
    pub build_cost_multiplier: f32,
    /// Speed scale applied to player construction.
    pub build_speed_multiplier: f32,
    /// Fraction of build materials refunded on deconstruction.
    pub deconstruct_refund_multiplier: f32,
    /// Radius around enemy cores where the player cannot build.
    pub enemy_core_build_radius: f32,
    /// Radius kept clear around enemy wave drop zones.
    pub drop_zone_radius: f32,
    /// Ticks between waves.
    pub wave_spacing: f32,
    /// How many times longer a boss wave lasts.
    pub boss_wave_multiplier: f32,
    /// How many times longer a launch wave lasts.
    pub launch_wave_multiplier: f32,
    /// Base unit cap. Blocks contributed by other subsystems may raise it.
    pub unit_cap: i32,
    /// Sector association for sector-based saves. Identifier only; the
    /// sector itself is owned elsewhere.
    pub sector: Option<SectorId>,
    /// Wave composition plan, in insertion order.
    pub spawns: Vec<SpawnGroup>,
    /// Whether the wave timer pauses until all enemies are destroyed.
    pub wait_enemies: bool,
    /// Whether the match objective is assaulting enemy cores.
    pub attack_mode: bool,
    /// Whether this session is the map editor.
    pub editor: bool,
    /// Whether the tutorial is active.
    pub tutorial: bool,
    /// Whether the match can end in a game over at all. Disable to drive
    /// custom end conditions from outside.
    pub can_game_over: bool,
    /// Whether edge and static-block shadows are drawn.
    pub draw_darkness: bool,
    /// Item stacks granted to each core at session start.
    pub loadout: Vec<ItemStack>,
    /// Weather events scheduled for this match, in insertion order.
    pub weather: Vec<WeatherEntry>,
    /// Block types that cannot be placed.
    pub banned_blocks: HashSet<BlockId>,
    /// Whether the map is dark and dynamic lights are enabled.
    pub lighting: bool,
    /// Ambient light color used when lighting is enabled.
    pub ambient_light: Color,
    /// Solar panel output scale. Negative means "derive from ambient
    /// light when lighting is enabled".
    pub solar_power_multiplier: f32,
    /// Team assigned to players by default.
    pub default_team: Team,
    /// Team assigned to wave and sector enemies.
    pub wave_team: Team,
    /// Opaque extension tags carried alongside the ruleset.
    pub tags: HashMap<String, String>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            infinite_resources: false,
            wave_timer: true,
            waves: false,
            enemy_cheat: false,
            pvp: false,
            reactor_explosions: true,
            unit_build_speed_multiplier: 1.0,
            unit_health_multiplier: 1.0,
            player_health_multiplier: 1.0,
            block_health_multiplier: 1.0,
            player_damage_multiplier: 1.0,
            unit_damage_multiplier: 1.0,
            build_cost_multiplier: 1.0,
            build_speed_multiplier: 1.0,
            deconstruct_refund_multiplier: 0.5,
            enemy_core_build_radius: 400.0,
            drop_zone_radius: 300.0,
            wave_spacing: DEFAULT_WAVE_SPACING,
            boss_wave_multiplier: 3.0,
            launch_wave_multiplier: 2.0,
            unit_cap: 0,
            sector: None,
            spawns: Vec::new(),
            wait_enemies: false,
            attack_mode: false,
            editor: false,
            tutorial: false,
            can_game_over: true,
            draw_darkness: true,
            loadout: vec![ItemStack::new(Item::Ferrite, 100)],
            weather: Vec::new(),
            banned_blocks: HashSet::new(),
            lighting: false,
            ambient_light: DEFAULT_AMBIENT_LIGHT,
            solar_power_multiplier: -1.0,
            default_team: Team::Wardens,
            wave_team: Team::Swarm,
            tags: HashMap::new(),
        }
    }
}

impl Ruleset {
    /// Copies this ruleset exactly by round-tripping it through its
    /// structural encoding. Not cheap; do not call per tick.
    ///
    /// The result is deep and fully independent: every owned collection is
    /// duplicated, and mutating one side never affects the other. The
    /// sector association is an identifier and is copied as one. The
    /// receiver is never mutated, even on failure.
    pub fn copy(&self) -> Result<Self, CopyError> {
        let tree = serde_json::to_value(self)?;
        Ok(serde_json::from_value(tree)?)
    }

    /// Returns the game mode that best fits these rules.
    ///
    /// Classification uses a fixed precedence over the mode flags: `pvp`,
    /// then `editor`, then `attack_mode`, then `infinite_resources`, and
    /// Survival when none are set. The first match wins; a ruleset with
    /// several flags set silently reports the highest-priority one.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        if self.pvp {
            GameMode::Pvp
        } else if self.editor {
            GameMode::Editor
        } else if self.attack_mode {
            GameMode::Attack
        } else if self.infinite_resources {
            GameMode::Sandbox
        } else {
            GameMode::Survival
        }
    }

    /// Configures these rules to conform to the provided mode preset.
    ///
    /// Presets apply on top of the current configuration; they set the
    /// fields a mode owns and leave everything else untouched. After
    /// applying a preset to a default ruleset, [`Ruleset::mode`] reports
    /// that mode.
    pub fn apply_mode(&mut self, mode: GameMode) {
        match mode {
            GameMode::Survival => {
                self.waves = true;
                self.wave_timer = true;
            }
            GameMode::Sandbox => {
                self.infinite_resources = true;
                self.waves = true;
                self.wave_timer = false;
            }
            GameMode::Attack => {
                self.attack_mode = true;
            }
            GameMode::Pvp => {
                self.pvp = true;
                self.enemy_core_build_radius = PVP_ENEMY_CORE_BUILD_RADIUS;
            }
            GameMode::Editor => {
                self.editor = true;
                self.infinite_resources = true;
                self.waves = false;
                self.wave_timer = false;
            }
        }
    }
}

/// Error produced when a ruleset fails to round-trip through its
/// structural encoding.
///
/// Unreachable for the declared field types except through non-finite
/// floats, which the encoding cannot represent.
#[derive(Debug, Error)]
#[error("ruleset could not be structurally copied: {0}")]
pub struct CopyError(#[from] serde_json::Error);

#[cfg(test)]
mod tests {
    use super::Ruleset;
    use redoubt_core::GameMode;

    #[test]
    fn default_ruleset_classifies_as_survival() {
        assert_eq!(Ruleset::default().mode(), GameMode::Survival);
    }

    #[test]
    fn preset_radius_override_applies_only_to_pvp() {
        let mut pvp = Ruleset::default();
        pvp.apply_mode(GameMode::Pvp);
        assert!((pvp.enemy_core_build_radius - 600.0).abs() < f32::EPSILON);

        let mut attack = Ruleset::default();
        attack.apply_mode(GameMode::Attack);
        assert!((attack.enemy_core_build_radius - 400.0).abs() < f32::EPSILON);
    }
}
