// crates/domain/src/sort.rs
use std::cmp::Reverse;

use loot_summary_shared_kernel::QualityTier;

/// The three supported orderings. Quality-sort takes precedence over
/// name-sort when both flags are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Insertion,
    Name,
    QualityName,
}

impl SortMode {
    pub fn from_flags(sorted: bool, sorted_by_quality: bool) -> Self {
        if sorted_by_quality {
            Self::QualityName
        } else if sorted {
            Self::Name
        } else {
            Self::Insertion
        }
    }

    /// Currencies have no quality concept; quality-sort degrades to name.
    pub fn for_currencies(self) -> Self {
        match self {
            Self::Insertion => Self::Insertion,
            Self::Name | Self::QualityName => Self::Name,
        }
    }
}

/// Sort inputs for one key, resolved from metadata before sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRank {
    pub name: String,
    pub quality: QualityTier,
}

/// Reorders `keys` in place. Insertion order is left untouched; the other
/// modes use a stable sort, so true ties keep their insertion order and the
/// result is deterministic for deterministic rank input.
pub fn sort_keys<K, F>(keys: &mut [K], mode: SortMode, mut rank: F)
where
    F: FnMut(&K) -> SortRank,
{
    match mode {
        SortMode::Insertion => {}
        SortMode::Name => keys.sort_by_cached_key(|key| rank(key).name),
        SortMode::QualityName => keys.sort_by_cached_key(|key| {
            let r = rank(key);
            (Reverse(r.quality), r.name)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_table(key: &&str) -> SortRank {
        let (name, quality) = match **key {
            "a" => ("Rubedite Sword", QualityTier::Fine),
            "b" => ("Ancestor Silk", QualityTier::Epic),
            "c" => ("Bone", QualityTier::Fine),
            _ => ("Laurel", QualityTier::Normal),
        };
        SortRank {
            name: name.to_string(),
            quality,
        }
    }

    #[test]
    fn insertion_mode_keeps_order() {
        let mut keys = ["c", "a", "b"];
        sort_keys(&mut keys, SortMode::Insertion, rank_table);
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn name_mode_sorts_ascending() {
        let mut keys = ["c", "a", "b"];
        sort_keys(&mut keys, SortMode::Name, rank_table);
        assert_eq!(keys, ["b", "c", "a"]);
    }

    #[test]
    fn quality_mode_sorts_descending_then_name() {
        let mut keys = ["c", "a", "b", "d"];
        sort_keys(&mut keys, SortMode::QualityName, rank_table);
        // Epic first, then the two Fine items in name order, then Normal.
        assert_eq!(keys, ["b", "c", "a", "d"]);
    }

    #[test]
    fn quality_ties_follow_name_order() {
        let mut by_name = ["c", "a"];
        let mut by_quality = ["c", "a"];
        sort_keys(&mut by_name, SortMode::Name, rank_table);
        sort_keys(&mut by_quality, SortMode::QualityName, rank_table);
        assert_eq!(by_name, by_quality);
    }

    #[test]
    fn flags_resolve_with_quality_precedence() {
        assert_eq!(SortMode::from_flags(false, false), SortMode::Insertion);
        assert_eq!(SortMode::from_flags(true, false), SortMode::Name);
        assert_eq!(SortMode::from_flags(false, true), SortMode::QualityName);
        assert_eq!(SortMode::from_flags(true, true), SortMode::QualityName);
    }

    #[test]
    fn currency_mode_never_uses_quality() {
        assert_eq!(SortMode::QualityName.for_currencies(), SortMode::Name);
        assert_eq!(SortMode::Insertion.for_currencies(), SortMode::Insertion);
    }
}
