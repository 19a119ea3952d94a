pub mod scraper;
pub mod wikitext;

/// Message to print before any scraper logs
pub const SCRAPER_HEADING: &str = "[SCRAPER] ";

/// The worlds to collect lots for, in the order they are written out
pub const WORLDS: [&str; 30] = [
    "Batuu",
    "Brindleton Bay",
    "Britechester",
    "Chestnut Ridge",
    "Ciudad Enamorada",
    "Copperdale",
    "Del Sol Valley",
    "Evergreen Harbor",
    "Forgotten Hollow",
    "Gibbi Point",
    "Glimmerbrook",
    "Granite Falls",
    "Henford-on-Bagley",
    "Innisgreen",
    "Magnolia Promenade",
    "Moonwood Mill",
    "Mt. Komorebi",
    "Newcrest",
    "Nordhaven",
    "Oasis Springs",
    "Ravenwood",
    "San Myshuno",
    "San Sequoia",
    "Selvadorada",
    "StrangerVille",
    "Sulani",
    "Tartosa",
    "Tomarang",
    "Willow Creek",
    "Windenburg",
];
