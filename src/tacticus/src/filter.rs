//! Character filters used to build legendary event tracks
//!
//! Every filter returns an order-preserving subsequence of its input and
//! takes an `exclude` flag that flips it to the complement. Filters are
//! composed by narrowing: filter the roster, then filter the result.
//!
//! ```
//! use tacticus::filter::filter;
//! use tacticus::reference::{DamageType, Faction};
//!
//! let roster = tacticus::default_roster();
//! let no_orks = filter(&roster).by_faction(Faction::Orks, true);
//! let piercing = filter(&no_orks).by_damage_type(DamageType::Piercing, false);
//! assert!(piercing.iter().all(|c| c.unit.faction != Faction::Orks));
//! ```

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::reference::{Alliance, AttackType, DamageType, Faction, Trait};

/// A single filter criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "by", content = "value")]
pub enum Criterion {
    Faction(Faction),
    Alliance(Alliance),
    Trait(Trait),
    DamageType(DamageType),
    AttackType(AttackType),
    /// Every attack hits at least this many times
    MinHits(u8),
    /// Every attack hits at most this many times
    MaxHits(u8),
    Mechanical,
    NoSummons,
}

impl Criterion {
    pub fn matches(&self, character: &Character) -> bool {
        let unit = &character.unit;
        match *self {
            Criterion::Faction(faction) => unit.faction == faction,
            Criterion::Alliance(alliance) => unit.alliance() == alliance,
            Criterion::Trait(t) => unit.has_trait(t),
            Criterion::DamageType(damage) => unit.damage.contains(damage),
            Criterion::AttackType(attack) => unit.attack_type() == attack,
            Criterion::MinHits(min) => unit.hit_counts().all(|hits| hits >= min),
            Criterion::MaxHits(max) => unit.hit_counts().all(|hits| hits <= max),
            Criterion::Mechanical => unit.has_trait(Trait::Mechanical),
            Criterion::NoSummons => !unit.summons,
        }
    }
}

/// Apply one criterion to `units`
pub fn apply(units: &[Character], criterion: Criterion, exclude: bool) -> Vec<Character> {
    units
        .iter()
        .filter(|c| criterion.matches(c) != exclude)
        .cloned()
        .collect()
}

/// Start a filter over `units`
pub fn filter(units: &[Character]) -> CharacterFilter<'_> {
    CharacterFilter { units }
}

/// Filter entry point over a borrowed character slice
#[derive(Debug, Clone, Copy)]
pub struct CharacterFilter<'a> {
    units: &'a [Character],
}

impl CharacterFilter<'_> {
    pub fn by(&self, criterion: Criterion, exclude: bool) -> Vec<Character> {
        apply(self.units, criterion, exclude)
    }

    pub fn by_faction(&self, faction: Faction, exclude: bool) -> Vec<Character> {
        self.by(Criterion::Faction(faction), exclude)
    }

    pub fn by_alliance(&self, alliance: Alliance, exclude: bool) -> Vec<Character> {
        self.by(Criterion::Alliance(alliance), exclude)
    }

    pub fn by_trait(&self, t: Trait, exclude: bool) -> Vec<Character> {
        self.by(Criterion::Trait(t), exclude)
    }

    pub fn by_damage_type(&self, damage: DamageType, exclude: bool) -> Vec<Character> {
        self.by(Criterion::DamageType(damage), exclude)
    }

    pub fn by_attack_type(&self, attack: AttackType, exclude: bool) -> Vec<Character> {
        self.by(Criterion::AttackType(attack), exclude)
    }

    pub fn by_min_hits(&self, hits: u8, exclude: bool) -> Vec<Character> {
        self.by(Criterion::MinHits(hits), exclude)
    }

    pub fn by_max_hits(&self, hits: u8, exclude: bool) -> Vec<Character> {
        self.by(Criterion::MaxHits(hits), exclude)
    }

    pub fn is_mechanical(&self, exclude: bool) -> Vec<Character> {
        self.by(Criterion::Mechanical, exclude)
    }

    pub fn by_no_summons(&self, exclude: bool) -> Vec<Character> {
        self.by(Criterion::NoSummons, exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::default_roster;

    fn names(units: &[Character]) -> Vec<&str> {
        units.iter().map(|c| c.name()).collect()
    }

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::Faction(Faction::Orks),
            Criterion::Faction(Faction::TauEmpire),
            Criterion::Alliance(Alliance::Imperial),
            Criterion::Alliance(Alliance::Chaos),
            Criterion::Trait(Trait::Flying),
            Criterion::Trait(Trait::Resilient),
            Criterion::DamageType(DamageType::Physical),
            Criterion::DamageType(DamageType::Psychic),
            Criterion::AttackType(AttackType::MeleeOnly),
            Criterion::MinHits(3),
            Criterion::MaxHits(1),
            Criterion::Mechanical,
            Criterion::NoSummons,
        ]
    }

    #[test]
    fn test_include_exclude_partition_roster() {
        let roster = default_roster();
        for criterion in criteria() {
            let included = apply(&roster, criterion, false);
            let excluded = apply(&roster, criterion, true);

            assert_eq!(
                included.len() + excluded.len(),
                roster.len(),
                "{:?}",
                criterion
            );
            for c in &roster {
                let in_inc = included.iter().any(|x| x.name() == c.name());
                let in_exc = excluded.iter().any(|x| x.name() == c.name());
                assert!(in_inc ^ in_exc, "{} for {:?}", c.name(), criterion);
            }
        }
    }

    #[test]
    fn test_filters_preserve_order() {
        let roster = default_roster();
        let order: Vec<&str> = names(&roster);
        for criterion in criteria() {
            let result = apply(&roster, criterion, false);
            let positions: Vec<usize> = result
                .iter()
                .filter_map(|c| order.iter().position(|n| *n == c.name()))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let roster = default_roster();
        let before = roster.clone();
        let _ = filter(&roster).by_alliance(Alliance::Xenos, true);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_composition_narrows() {
        let roster = default_roster();
        let no_orks = filter(&roster).by_faction(Faction::Orks, true);
        let melee = filter(&no_orks).by_attack_type(AttackType::MeleeOnly, false);

        assert!(melee.len() <= no_orks.len());
        assert!(melee
            .iter()
            .all(|c| c.unit.faction != Faction::Orks && c.unit.range_hits.is_none()));
        assert!(names(&melee).contains(&"Aun'shi"));
    }

    #[test]
    fn test_hit_bounds() {
        let roster = default_roster();
        let max_two = filter(&roster).by_max_hits(2, false);
        assert!(max_two.iter().all(|c| c.unit.hit_counts().all(|h| h <= 2)));
        // Gulgortz shoots four times
        assert!(!names(&max_two).contains(&"Gulgortz"));

        let min_three = filter(&roster).by_min_hits(3, false);
        assert!(names(&min_three).contains(&"Aun'shi"));
        assert!(!names(&min_three).contains(&"Ragnar"));
    }

    #[test]
    fn test_mechanical_and_summons() {
        let roster = default_roster();
        let mech = filter(&roster).is_mechanical(false);
        assert!(names(&mech).contains(&"Actus"));
        assert!(mech.iter().all(|c| c.unit.has_trait(Trait::Mechanical)));

        let no_summons = filter(&roster).by_no_summons(false);
        assert!(!names(&no_summons).contains(&"Typhus"));
    }

    #[test]
    fn test_criterion_json() {
        let c: Criterion = serde_json::from_str(r#"{"by":"faction","value":"Orks"}"#).unwrap();
        assert_eq!(c, Criterion::Faction(Faction::Orks));
        let c: Criterion = serde_json::from_str(r#"{"by":"max_hits","value":2}"#).unwrap();
        assert_eq!(c, Criterion::MaxHits(2));
        let c: Criterion = serde_json::from_str(r#"{"by":"mechanical"}"#).unwrap();
        assert_eq!(c, Criterion::Mechanical);
    }
}
