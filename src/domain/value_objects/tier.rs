//! Tier value object - rarity classification of an icon slot
//!
//! Tiers run from 1 (Common) to 10 (Divine). Each tier owns one output
//! folder under the icons directory.

use serde::{Deserialize, Serialize};

/// Rarity tier of a slot (1..=10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Tier used when no header precedes an entry
    pub const COMMON: Tier = Tier(1);

    /// All tiers in ascending order
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN..=Self::MAX).map(Tier)
    }

    /// Create a tier, returning `None` outside 1..=10
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Tier(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Marker that opens this tier's section in the ledger, e.g. `Tier 3:`
    pub fn header_marker(&self) -> String {
        format!("Tier {}:", self.0)
    }

    /// Output folder name for this tier
    pub fn folder_name(&self) -> &'static str {
        match self.0 {
            2 => "Tier_2_Uncommon",
            3 => "Tier_3_Rare",
            4 => "Tier_4_Epic",
            5 => "Tier_5_Ultra Epic",
            6 => "Tier_6_Legendary",
            7 => "Tier_7_Mythic",
            8 => "Tier_8_Celestial",
            9 => "Tier_9_Cosmic",
            10 => "Tier_10_Divine",
            _ => "Tier_1_Common",
        }
    }

    /// Human-readable rarity label
    pub fn label(&self) -> &'static str {
        match self.0 {
            2 => "Uncommon",
            3 => "Rare",
            4 => "Epic",
            5 => "Ultra Epic",
            6 => "Legendary",
            7 => "Mythic",
            8 => "Celestial",
            9 => "Cosmic",
            10 => "Divine",
            _ => "Common",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::COMMON
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value).ok_or_else(|| format!("tier {} is outside 1..=10", value))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}
