//! Fixed values the scraper and the renderer are built around.

/// Index page listing the latest MTGO events.
pub const DECKLISTS_INDEX_URL: &str =
    "https://magic.wizards.com/en/content/deck-lists-magic-online-products-game-info";
pub const BASE_URL: &str = "https://magic.wizards.com";
/// Every accepted URL must start with this.
pub const TRUSTED_PREFIX: &str = "https://magic.wizards.com/";
/// Links tried in order when no URL is given on the command line.
pub const DEFAULT_LINK_SELECTORS: [&str; 2] = [
    "a[href*=modern-challenge]",
    "a[href*=modern-preliminary]",
];

pub const USER_AGENT: &str = concat!("deck_cloud/", env!("CARGO_PKG_VERSION"));

pub const DECKLIST_SELECTOR: &str = "div.sorted-by-overview-container";
pub const ROW_SELECTOR: &str = "span.row";
pub const CARD_NAME_SELECTOR: &str = "span.card-name";
pub const CARD_COUNT_SELECTOR: &str = "span.card-count";
pub const LAND_SELECTOR: &str = "div.sorted-by-land";

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 250;
pub const CANVAS_SCALE: u32 = 5;
pub const BACKGROUND_COLOR: &str = "black";
/// Color for words that belong to no category.
pub const DEFAULT_COLOR: &str = "black";
pub const MAX_WORDS: usize = 200;
pub const MARGIN: u32 = 2;
pub const RELATIVE_SCALING: f64 = 0.5;
pub const MIN_FONT_SIZE: u32 = 5;
pub const FONT_STEP: u32 = 1;
