//! Character classification: factions, alliances, traits, damage and attack types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ReferenceError;

/// Declares a fieldless enum whose variants serialize to (and parse from)
/// their in-game display names.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $display:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $display)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ReferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.name()) == wanted)
                    .ok_or_else(|| ReferenceError::UnknownName {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// Lowercase ASCII alphanumerics only, so "Anti-Air" matches "antiair"
pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

named_enum! {
    /// Grand alliance a faction belongs to
    Alliance, "alliance" {
        Imperial => "Imperial",
        Chaos => "Chaos",
        Xenos => "Xenos",
    }
}

named_enum! {
    Faction, "faction" {
        Ultramarines => "Ultramarines",
        AstraMilitarum => "Astra Militarum",
        BlackTemplars => "Black Templars",
        AdeptaSororitas => "Adepta Sororitas",
        SpaceWolves => "Space Wolves",
        DarkAngels => "Dark Angels",
        BloodAngels => "Blood Angels",
        AdeptusMechanicus => "Adeptus Mechanicus",
        AdeptusCustodes => "Adeptus Custodes",
        BlackLegion => "Black Legion",
        DeathGuard => "Death Guard",
        ThousandSons => "Thousand Sons",
        WorldEaters => "World Eaters",
        EmperorsChildren => "Emperor's Children",
        Orks => "Orks",
        Necrons => "Necrons",
        Aeldari => "Aeldari",
        TauEmpire => "T'au Empire",
        Tyranids => "Tyranids",
        GenestealerCults => "Genestealer Cults",
    }
}

impl Faction {
    /// Grand alliance of this faction
    pub fn alliance(self) -> Alliance {
        match self {
            Faction::Ultramarines
            | Faction::AstraMilitarum
            | Faction::BlackTemplars
            | Faction::AdeptaSororitas
            | Faction::SpaceWolves
            | Faction::DarkAngels
            | Faction::BloodAngels
            | Faction::AdeptusMechanicus
            | Faction::AdeptusCustodes => Alliance::Imperial,
            Faction::BlackLegion
            | Faction::DeathGuard
            | Faction::ThousandSons
            | Faction::WorldEaters
            | Faction::EmperorsChildren => Alliance::Chaos,
            Faction::Orks
            | Faction::Necrons
            | Faction::Aeldari
            | Faction::TauEmpire
            | Faction::Tyranids
            | Faction::GenestealerCults => Alliance::Xenos,
        }
    }
}

named_enum! {
    Trait, "trait" {
        BigTarget => "Big Target",
        Flying => "Flying",
        Overwatch => "Overwatch",
        Resilient => "Resilient",
        Mechanical => "Mechanical",
        Psyker => "Psyker",
        Terrifying => "Terrifying",
        Infiltrate => "Infiltrate",
        HeavyWeapon => "Heavy Weapon",
        Unstoppable => "Unstoppable",
        LetTheGalaxyBurn => "Let the Galaxy Burn",
        Diminutive => "Diminutive",
        CloseCombatWeakness => "Close Combat Weakness",
        MartialKatah => "Martial Ka'tah",
        ActOfFaith => "Act of Faith",
        Camouflage => "Camouflage",
        Parry => "Parry",
        Crushing => "Crushing Strike",
        DeepStrike => "Deep Strike",
        ContagionsOfNurgle => "Contagions of Nurgle",
        Beast => "Beast",
        Daemon => "Daemon",
        Synapse => "Synapse",
        ShadowInTheWarp => "Shadow in the Warp",
    }
}

named_enum! {
    DamageType, "damage type" {
        Physical => "Physical",
        Piercing => "Piercing",
        Power => "Power",
        Bolter => "Bolter",
        Plasma => "Plasma",
        Flame => "Flame",
        Chain => "Chain",
        Energy => "Energy",
        Eviscerate => "Eviscerating",
        HeavyRound => "Heavy Round",
        Blast => "Blast",
        Molecular => "Molecular",
        Toxic => "Toxic",
        Psychic => "Psychic",
        Projectile => "Projectile",
        Direct => "Direct",
        Gauss => "Gauss",
        Particle => "Particle",
        Pulse => "Pulse",
        BioPlasma => "Bio-Plasma",
    }
}

named_enum! {
    /// Which attacks a character has
    AttackType, "attack type" {
        MeleeOnly => "Melee Only",
        RangeOnly => "Range Only",
        Both => "Both",
    }
}

/// Planner-only hint on whether to recommend a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CharacterBias {
    #[default]
    None = 0,
    AlwaysRecommend = 1,
    NeverRecommend = 2,
}

impl From<CharacterBias> for u8 {
    fn from(bias: CharacterBias) -> Self {
        bias as u8
    }
}

impl TryFrom<u8> for CharacterBias {
    type Error = ReferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CharacterBias::None),
            1 => Ok(CharacterBias::AlwaysRecommend),
            2 => Ok(CharacterBias::NeverRecommend),
            other => Err(ReferenceError::UnknownName {
                kind: "bias",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for CharacterBias {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" | "0" => Ok(CharacterBias::None),
            "always" | "alwaysrecommend" | "1" => Ok(CharacterBias::AlwaysRecommend),
            "never" | "neverrecommend" | "2" => Ok(CharacterBias::NeverRecommend),
            _ => Err(ReferenceError::UnknownName {
                kind: "bias",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_alliance() {
        assert_eq!(Faction::Ultramarines.alliance(), Alliance::Imperial);
        assert_eq!(Faction::DeathGuard.alliance(), Alliance::Chaos);
        assert_eq!(Faction::TauEmpire.alliance(), Alliance::Xenos);
    }

    #[test]
    fn test_parse_ignores_case_and_punctuation() {
        assert_eq!("tau empire".parse::<Faction>().unwrap(), Faction::TauEmpire);
        assert_eq!("T'au Empire".parse::<Faction>().unwrap(), Faction::TauEmpire);
        assert_eq!("space-wolves".parse::<Faction>().unwrap(), Faction::SpaceWolves);
        assert_eq!("bigtarget".parse::<Trait>().unwrap(), Trait::BigTarget);
        assert_eq!("meleeonly".parse::<AttackType>().unwrap(), AttackType::MeleeOnly);
        assert!("Squats".parse::<Faction>().is_err());
    }

    #[test]
    fn test_display_names_serialize() {
        let json = serde_json::to_string(&Faction::EmperorsChildren).unwrap();
        assert_eq!(json, "\"Emperor's Children\"");
        let damage: DamageType = serde_json::from_str("\"Heavy Round\"").unwrap();
        assert_eq!(damage, DamageType::HeavyRound);
    }

    #[test]
    fn test_bias_parse() {
        assert_eq!(
            "always".parse::<CharacterBias>().unwrap(),
            CharacterBias::AlwaysRecommend
        );
        assert_eq!(
            serde_json::from_str::<CharacterBias>("2").unwrap(),
            CharacterBias::NeverRecommend
        );
    }
}
