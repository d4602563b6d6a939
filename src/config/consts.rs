// src/config/consts.rs

// Net config
pub const CAREER_URL: &str = "https://playoverwatch.com/en-us/career";
pub const USER_AGENT: &str = "throwverwatch/0.2";

// Account defaults
pub const DEFAULT_BATTLETAG: &str = "Calvin#1337";
pub const DEFAULT_REGION: &str = "us";
pub const DEFAULT_PLATFORM: &str = "pc";
pub const DEFAULT_HOTKEY: &str = "home";

// Page markers
pub const RANK_WIDGET_CLASS: &str = "competitive-rank";
pub const HERO_SELECT_ATTRS: &[(&str, &str)] = &[("data-js", "career-select"), ("data-group-id", "stats")];
pub const CATEGORY_ATTR: &str = "data-category-id";
pub const ALL_HEROES_CATEGORY: &str = "0x02E00000FFFFFFFF";

/// Rank badge image code (character before `.png`) → tier.
pub const RANK_TIERS: &[(char, &str)] = &[
    ('7', "Grandmaster"),
    ('6', "Master"),
    ('5', "Diamond"),
    ('4', "Platinum"),
    ('3', "Gold"),
    ('2', "Silver"),
    ('1', "Bronze"),
];

// Output
pub const DEFAULT_FILE_STEM: &str = "throwverwatch";
pub const FILE_STAMP_FMT: &str = "%Y%m%d-%H%M%S";
pub const DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const MAX_FILENAME_FUDGE: u32 = 1000;
pub const CSV_SEP: char = ',';
pub const DATE_COLUMN: &str = "date";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
