#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that moves Redoubt rulesets around as single-line
//! transfer strings.

mod ruleset_transfer;

use clap::{Parser, Subcommand};
use redoubt_core::GameMode;
use redoubt_rules::Ruleset;

/// Exports and inspects match rulesets.
#[derive(Debug, Parser)]
#[command(name = "redoubt", version)]
struct Cli {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,
}

/// Actions exposed by the ruleset tool.
#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the transfer string for a default ruleset.
    Export {
        /// Mode preset applied before exporting: pvp, editor, attack,
        /// sandbox, or survival.
        #[arg(long)]
        mode: Option<GameMode>,
    },
    /// Decodes a transfer string and prints a short report.
    Inspect {
        /// Transfer string produced by `export`.
        transfer: String,
    },
}

/// Entry point for the Redoubt ruleset command-line interface.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export { mode } => {
            let mut rules = Ruleset::default();
            if let Some(mode) = mode {
                rules.apply_mode(mode);
            }
            println!("{}", ruleset_transfer::encode(&rules)?);
        }
        Command::Inspect { transfer } => {
            let rules = ruleset_transfer::decode(&transfer)?;
            print!("{}", render_report(&rules));
        }
    }

    Ok(())
}

/// Renders the human-readable summary printed by `inspect`.
fn render_report(rules: &Ruleset) -> String {
    let defaults = Ruleset::default();
    let mut report = String::new();

    report.push_str(&format!("mode: {}\n", rules.mode()));
    report.push_str(&format!(
        "waves: {} (timer: {}, spacing: {} ticks)\n",
        rules.waves, rules.wave_timer, rules.wave_spacing
    ));

    let multipliers = [
        (
            "unit build speed",
            rules.unit_build_speed_multiplier,
            defaults.unit_build_speed_multiplier,
        ),
        (
            "unit health",
            rules.unit_health_multiplier,
            defaults.unit_health_multiplier,
        ),
        (
            "player health",
            rules.player_health_multiplier,
            defaults.player_health_multiplier,
        ),
        (
            "block health",
            rules.block_health_multiplier,
            defaults.block_health_multiplier,
        ),
        (
            "player damage",
            rules.player_damage_multiplier,
            defaults.player_damage_multiplier,
        ),
        (
            "unit damage",
            rules.unit_damage_multiplier,
            defaults.unit_damage_multiplier,
        ),
        (
            "build cost",
            rules.build_cost_multiplier,
            defaults.build_cost_multiplier,
        ),
        (
            "build speed",
            rules.build_speed_multiplier,
            defaults.build_speed_multiplier,
        ),
        (
            "deconstruct refund",
            rules.deconstruct_refund_multiplier,
            defaults.deconstruct_refund_multiplier,
        ),
        (
            "solar power",
            rules.solar_power_multiplier,
            defaults.solar_power_multiplier,
        ),
    ];
    for (label, value, default) in multipliers {
        if value != default {
            report.push_str(&format!("{label} multiplier: {value}\n"));
        }
    }

    report.push_str(&format!(
        "spawn groups: {}, loadout stacks: {}, weather entries: {}, \
         banned blocks: {}, tags: {}\n",
        rules.spawns.len(),
        rules.loadout.len(),
        rules.weather.len(),
        rules.banned_blocks.len(),
        rules.tags.len(),
    ));

    if let Some(sector) = rules.sector {
        report.push_str(&format!("sector: {}\n", sector.get()));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use redoubt_core::{GameMode, SectorId};
    use redoubt_rules::Ruleset;

    #[test]
    fn report_leads_with_the_classified_mode() {
        let mut rules = Ruleset::default();
        rules.apply_mode(GameMode::Pvp);
        let report = render_report(&rules);
        assert!(report.starts_with("mode: pvp\n"), "report was: {report}");
    }

    #[test]
    fn report_only_lists_multipliers_that_changed() {
        let mut rules = Ruleset::default();
        rules.block_health_multiplier = 2.0;
        let report = render_report(&rules);
        assert!(report.contains("block health multiplier: 2\n"));
        assert!(!report.contains("unit damage multiplier"));
    }

    #[test]
    fn report_mentions_the_sector_when_present() {
        let mut rules = Ruleset::default();
        rules.sector = Some(SectorId::new(12));
        assert!(render_report(&rules).contains("sector: 12\n"));
    }
}
