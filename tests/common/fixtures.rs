//! Test fixtures - ledger texts shared across CLI tests.

/// Three open slots in tier 1
pub const BASIC_LEDGER: &str = "\
# Remaining Icons

**Total Status**: 0/150 Complete

## Tier 1: Common Items
1. [ ] **Fire Sword**
A blade wreathed in flame.
2. [ ] **Ice Shard**
A sliver of frozen sky.
3. [ ] **Wind Blade**
An edge honed by gales.
";

/// `BASIC_LEDGER` after ingesting `fire_sword.png` and `mystery_orb.png`
pub const BASIC_LEDGER_AFTER_INGEST: &str = "\
# Remaining Icons

**Total Status**: 2/150 Complete

## Tier 1: Common Items
1. [x] **Fire Sword**
A blade wreathed in flame.
2. [x] **Mystery Orb**
Auto-ingested asset. Replacing placeholder.
3. [ ] **Wind Blade**
An edge honed by gales.
";

/// Slots spread over several tiers, one already complete
pub const TIERED_LEDGER: &str = "\
# Remaining Icons

**Total Status**: 1/150 Complete

## Tier 1: Common Items
1. [x] **Copper Coin**
A worn coin.
2. [ ] **Iron Ring**
A plain band.

## Tier 4: Epic Items
20. [ ] **Storm Staff**
Crackles faintly.

## Tier 10: Divine Items
140. [ ] **Dawn Halo**
The first light.
";

/// A ledger shorter than three lines has no summary to rewrite
pub const SHORT_LEDGER: &str = "1. [ ] **Lone Gem**\nShines alone.\n";

/// Bytes standing in for a PNG image
pub fn png_bytes(tag: &str) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(tag.as_bytes());
    bytes
}
