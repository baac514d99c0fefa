// src/args.rs
use std::path::PathBuf;

use clap::Parser;

use loot_summary_core::{options::LinkStyle, QualityTier};

use crate::parsers;

/// ルート取得イベントをチャット幅のサマリ行へ集約するツール
#[derive(Parser, Debug)]
#[command(name = "loot_summary", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Event stream (JSON Lines). Reads stdin when omitted or "-"
    pub events: Option<PathBuf>,

    /// Item/currency catalog file (JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Saved options document (JSON object), bound as the external
    /// options tree before CLI overrides apply
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Sort items alphabetically
    #[arg(long)]
    pub sorted: bool,

    /// Sort items by quality, then name (overrides --sorted)
    #[arg(long)]
    pub sorted_by_quality: bool,

    /// Exclude items below this quality tier
    #[arg(long, value_parser = parsers::parse_quality)]
    pub min_quality: Option<QualityTier>,

    /// Prepend item icons
    #[arg(long)]
    pub show_icon: bool,

    /// Icon render size in percent
    #[arg(long, value_name = "PERCENT")]
    pub icon_size: Option<u32>,

    /// Append trait annotations to equippable items
    #[arg(long)]
    pub show_trait: bool,

    /// Mark uncollected set pieces
    #[arg(long)]
    pub show_not_collected: bool,

    /// List repeated additions separately instead of summing them
    #[arg(long)]
    pub no_combine: bool,

    /// Suppress "x1" on single quantities
    #[arg(long)]
    pub hide_singular: bool,

    /// Token separator; a leading newline forces one token per line
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Entity reference rendering style
    #[arg(long, value_parser = parsers::parse_link_style)]
    pub link_style: Option<LinkStyle>,

    /// Append the discrete-event counter
    #[arg(long)]
    pub show_counter: bool,

    /// Singular noun for the counter annotation
    #[arg(long)]
    pub counter_text: Option<String>,

    /// Text wrapped before every emitted line
    #[arg(long)]
    pub prefix: Option<String>,

    /// Text wrapped after every emitted line
    #[arg(long)]
    pub suffix: Option<String>,

    /// Override the sink's per-line capacity
    #[arg(long, value_name = "CHARS")]
    pub capacity: Option<usize>,

    /// Pack the summary but only report line metrics on stderr
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn quality_flag_parses_tiers() {
        let args = Args::try_parse_from(["loot_summary", "--min-quality", "epic"]).unwrap();
        assert_eq!(args.min_quality, Some(QualityTier::Epic));
        assert!(Args::try_parse_from(["loot_summary", "--min-quality", "shiny"]).is_err());
    }

    #[test]
    fn defaults_leave_overrides_unset() {
        let args = Args::try_parse_from(["loot_summary"]).unwrap();
        assert!(args.min_quality.is_none());
        assert!(args.delimiter.is_none());
        assert!(!args.sorted);
        assert!(!args.dry_run);
    }
}
