// src/config.rs
use std::path::PathBuf;

use loot_summary_core::{options::LinkStyle, QualityTier};

use crate::args::Args;

/// Option overrides taken from CLI flags. `None`/`false` leaves whatever the
/// saved options document (or the built-in default) says untouched; flags
/// only ever tighten or switch features on, except `no_combine`.
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub sorted: bool,
    pub sorted_by_quality: bool,
    pub min_quality: Option<QualityTier>,
    pub show_icon: bool,
    pub icon_size: Option<u32>,
    pub show_trait: bool,
    pub show_not_collected: bool,
    pub no_combine: bool,
    pub hide_singular: bool,
    pub delimiter: Option<String>,
    pub link_style: Option<LinkStyle>,
    pub show_counter: bool,
}

/// Resolved runtime configuration for one CLI invocation.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub events: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub options_file: Option<PathBuf>,
    pub overrides: OptionOverrides,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub counter_text: Option<String>,
    pub capacity: Option<usize>,
    pub dry_run: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            events: args.events.filter(|p| p.as_os_str() != "-"),
            catalog: args.catalog,
            options_file: args.options,
            overrides: OptionOverrides {
                sorted: args.sorted,
                sorted_by_quality: args.sorted_by_quality,
                min_quality: args.min_quality,
                show_icon: args.show_icon,
                icon_size: args.icon_size,
                show_trait: args.show_trait,
                show_not_collected: args.show_not_collected,
                no_combine: args.no_combine,
                hide_singular: args.hide_singular,
                delimiter: args.delimiter,
                link_style: args.link_style,
                show_counter: args.show_counter,
            },
            prefix: args.prefix,
            suffix: args.suffix,
            counter_text: args.counter_text,
            capacity: args.capacity,
            dry_run: args.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn dash_events_path_means_stdin() {
        let args = Args::try_parse_from(["loot_summary", "-"]).unwrap();
        let config = Config::from_args(args);
        assert!(config.events.is_none());
    }

    #[test]
    fn flags_land_in_overrides() {
        let args = Args::try_parse_from([
            "loot_summary",
            "--sorted",
            "--no-combine",
            "--delimiter",
            ", ",
            "--capacity",
            "120",
        ])
        .unwrap();
        let config = Config::from_args(args);
        assert!(config.overrides.sorted);
        assert!(config.overrides.no_combine);
        assert_eq!(config.overrides.delimiter.as_deref(), Some(", "));
        assert_eq!(config.capacity, Some(120));
    }
}
