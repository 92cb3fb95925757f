/// ======================= Live sources =======================
/// Mintscan top-holders endpoint - Public, unauthenticated
pub const MINTSCAN_TOP_HOLDERS_URL: &str = "https://api.mintscan.io/v1/akash/account/top-holders?limit=15";

/// Arcturian LCD bank supply for uakt - Informational only
pub const ARCTURIAN_SUPPLY_URL: &str = "https://akash.api.arcturian.tech/cosmos/bank/v1beta1/supply/uakt";

/// Cosmostation holders endpoint
pub const COSMOSTATION_HOLDERS_URL: &str = "https://api-akash.cosmostation.io/v1/account/holders?limit=15";

pub const MINTSCAN_SOURCE: &str = "mintscan";
pub const ARCTURIAN_SOURCE: &str = "arcturian";
pub const COSMOSTATION_SOURCE: &str = "cosmostation";

/// ======================= Token =======================
pub const UAKT_PER_AKT: f64 = 1_000_000.0;

/// Circulating AKT used when a source does not report supply
pub const DEFAULT_TOTAL_SUPPLY_AKT: f64 = 388_539_008.0;

pub const TOKEN_SYMBOL: &str = "AKT";

pub const MAX_HOLDERS: usize = 15;

pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// ======================= Display =======================
pub const ADDRESS_DISPLAY_MAX_LEN: usize = 20;
pub const ADDRESS_PREFIX_LEN: usize = 11;
pub const ADDRESS_SUFFIX_LEN: usize = 4;

pub const ADVISORY_SAMPLE_DATA: &str = "Live data unavailable. Displaying sample data.";

/// ======================= Layout =======================
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const CANVAS_PADDING: f64 = 100.0;
pub const MIN_BUBBLE_SIZE: f64 = 40.0;
pub const MAX_BUBBLE_SIZE: f64 = 180.0;

/// Golden-angle-ish step that spreads bubbles into a spiral
pub const SPIRAL_ANGLE_STEP: f64 = 2.4;
pub const SPIRAL_RADIUS_DIVISOR: f64 = 2.5;

/// ======================= Palette =======================
/// Akash brand red fading to near white, indexed by rank - 1
pub const BUBBLE_PALETTE: [&str; 15] = [
    "#FF414C", "#FF5058", "#FF5F64", "#FF6E70", "#FF7D7C",
    "#FF8C88", "#FF9B94", "#FFAAA0", "#FFB9AC", "#FFC8B8",
    "#FFD7C4", "#FFE6D0", "#FFF5DC", "#FFF8E8", "#FFFCF4",
];

pub const AKASH_PRIMARY: &str = "#FF414C";
pub const SHADOW_ELEVATED: &str = "0 20px 60px rgba(255, 65, 76, 0.5)";
pub const SHADOW_RESTING: &str = "0 10px 30px rgba(0, 0, 0, 0.3)";
