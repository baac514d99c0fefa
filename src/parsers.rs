// src/parsers.rs
//! Value parsers for CLI flags whose types live in the core library.

use loot_summary_core::{options::LinkStyle, QualityTier};

pub fn parse_quality(raw: &str) -> Result<QualityTier, String> {
    raw.parse().map_err(|_| {
        format!("unknown quality tier '{raw}' (expected trash|normal|fine|superior|epic|legendary)")
    })
}

pub fn parse_link_style(raw: &str) -> Result<LinkStyle, String> {
    raw.parse()
        .map_err(|_| format!("unknown link style '{raw}' (expected default|brackets)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(parse_quality("superior").unwrap(), QualityTier::Superior);
        assert_eq!(parse_link_style("brackets").unwrap(), LinkStyle::Brackets);
    }

    #[test]
    fn rejects_unknown_values_with_hints() {
        let err = parse_quality("shiny").unwrap_err();
        assert!(err.contains("legendary"));
        assert!(parse_link_style("fancy").is_err());
    }
}
