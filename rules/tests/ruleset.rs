use redoubt_core::{Item, ItemStack, Team};
use redoubt_rules::Ruleset;

#[test]
fn default_ruleset_matches_documented_values() {
    let rules = Ruleset::default();

    assert!(!rules.infinite_resources);
    assert!(rules.wave_timer);
    assert!(!rules.waves);
    assert!(!rules.enemy_cheat);
    assert!(!rules.pvp);
    assert!(rules.reactor_explosions);
    assert!(!rules.wait_enemies);
    assert!(!rules.attack_mode);
    assert!(!rules.editor);
    assert!(!rules.tutorial);
    assert!(rules.can_game_over);
    assert!(rules.draw_darkness);
    assert!(!rules.lighting);

    assert_eq!(rules.unit_build_speed_multiplier, 1.0);
    assert_eq!(rules.unit_health_multiplier, 1.0);
    assert_eq!(rules.player_health_multiplier, 1.0);
    assert_eq!(rules.block_health_multiplier, 1.0);
    assert_eq!(rules.player_damage_multiplier, 1.0);
    assert_eq!(rules.unit_damage_multiplier, 1.0);
    assert_eq!(rules.build_cost_multiplier, 1.0);
    assert_eq!(rules.build_speed_multiplier, 1.0);
    assert_eq!(rules.deconstruct_refund_multiplier, 0.5);
    assert_eq!(rules.solar_power_multiplier, -1.0);

    assert_eq!(rules.enemy_core_build_radius, 400.0);
    assert_eq!(rules.drop_zone_radius, 300.0);
    assert_eq!(rules.wave_spacing, 7200.0);
    assert_eq!(rules.boss_wave_multiplier, 3.0);
    assert_eq!(rules.launch_wave_multiplier, 2.0);
    assert_eq!(rules.unit_cap, 0);

    assert_eq!(rules.sector, None);
    assert!(rules.spawns.is_empty());
    assert_eq!(rules.loadout, vec![ItemStack::new(Item::Ferrite, 100)]);
    assert!(rules.weather.is_empty());
    assert!(rules.banned_blocks.is_empty());
    assert!(rules.tags.is_empty());

    assert_eq!(rules.ambient_light.red, 0.01);
    assert_eq!(rules.ambient_light.green, 0.01);
    assert_eq!(rules.ambient_light.blue, 0.04);
    assert_eq!(rules.ambient_light.alpha, 0.99);

    assert_eq!(rules.default_team, Team::Wardens);
    assert_eq!(rules.wave_team, Team::Swarm);
}

#[test]
fn mutating_one_field_leaves_the_rest_unchanged() {
    let baseline = Ruleset::default();

    let mut rules = Ruleset::default();
    rules.enemy_cheat = true;
    assert_ne!(rules, baseline);
    rules.enemy_cheat = false;
    assert_eq!(rules, baseline);

    let mut rules = Ruleset::default();
    rules.wave_spacing = 60.0;
    assert_ne!(rules, baseline);
    rules.wave_spacing = 7200.0;
    assert_eq!(rules, baseline);

    let mut rules = Ruleset::default();
    rules.default_team = Team::Verdant;
    assert_ne!(rules, baseline);
    rules.default_team = Team::Wardens;
    assert_eq!(rules, baseline);

    let mut rules = Ruleset::default();
    rules.loadout.push(ItemStack::new(Item::Cobalt, 25));
    assert_ne!(rules, baseline);
    let _ = rules.loadout.pop();
    assert_eq!(rules, baseline);
}
