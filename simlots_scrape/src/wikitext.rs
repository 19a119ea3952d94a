use lazy_static::lazy_static;
use regex::Regex;
use simlots::lots_core::{LotRecord, DEFAULT_LOT_TYPE};

lazy_static! {
    pub static ref HEADING_PATTERN: Regex =
        Regex::new(r"^=+.*=+$").expect("Hardcoded regex should be valid.");
    pub static ref HEADING_MARKERS: Regex =
        Regex::new(r"^=+|\[\]|=+$").expect("Hardcoded regex should be valid.");
    pub static ref LINK_PATTERN: Regex =
        Regex::new(r"\[\[(.*?)\]\]").expect("Hardcoded regex should be valid.");
    pub static ref GAME_PATTERN: Regex =
        Regex::new(r"\|\s*game\s*=\s*\[\[(.*?)\]\]").expect("Hardcoded regex should be valid.");
}

/// What a single line of a lots section turned out to be
#[derive(Debug, PartialEq, Eq)]
pub enum LotLine {
    /// A heading, carrying its stripped text (possibly empty)
    Heading(String),
    /// A bullet with at least one link
    Lot {
        lot_name: String,
        /// Type given after a " - " separator, if any
        explicit_type: Option<String>,
    },
    /// Anything else, including bullets without links
    Other,
}

/// Returns the stripped heading text if the line is a heading.
/// `Some("")` means the line was a heading with nothing left after stripping.
pub fn parse_heading(line: &str) -> Option<String> {
    if !HEADING_PATTERN.is_match(line) {
        return None;
    }

    Some(HEADING_MARKERS.replace_all(line, "").trim().to_string())
}

/// All `[[...]]` contents in the line, in order of appearance
pub fn extract_links(line: &str) -> Vec<&str> {
    LINK_PATTERN
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|link| link.as_str())
        .collect()
}

/// Handles both [[Page|Display]] and [[Display]]
pub fn clean_wikilink(link_text: &str) -> String {
    match link_text.split_once('|') {
        Some((_, display)) => display.trim().to_string(),
        None => link_text.trim().to_string(),
    }
}

/// Maps the current bucket heading onto a lot type. Order matters: the first match wins.
pub fn infer_lot_type(bucket: &str) -> &'static str {
    let bucket = bucket.to_lowercase();

    if bucket.contains("community") {
        "Community lot"
    } else if bucket.contains("apartment") {
        "Apartment"
    } else if bucket.contains("penthouse") {
        "Penthouse"
    } else if bucket.contains("rental") && bucket.contains("vacation") {
        "Vacation Rental"
    } else if bucket.contains("rental") {
        "Rental"
    } else if bucket.contains("special") {
        "Special lot"
    } else if bucket.contains("empty") {
        "Empty lot"
    } else {
        DEFAULT_LOT_TYPE
    }
}

/// Classifies one already-trimmed line
pub fn parse_line(line: &str) -> LotLine {
    if let Some(heading) = parse_heading(line) {
        return LotLine::Heading(heading);
    }

    if !line.starts_with('*') {
        return LotLine::Other;
    }

    // The first link is the lot itself
    let lot_name = match extract_links(line).first() {
        Some(link) => clean_wikilink(link),
        None => return LotLine::Other,
    };

    // " - [[Lot Type]]" after the lot, if present
    let explicit_type = line
        .split_once(" - ")
        .and_then(|(_, after)| extract_links(after).first().map(|link| clean_wikilink(link)))
        .filter(|lot_type| !lot_type.is_empty());

    LotLine::Lot {
        lot_name,
        explicit_type,
    }
}

/// Splits on every character a generic line splitter treats as a line boundary.
/// The empty pieces left between CR and LF are harmless since blank lines are ignored.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c| {
        matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// Turns the raw markup of a lots section into records, in document order
pub fn parse_lots(wikitext: &str, pack: &str, world: &str) -> Vec<LotRecord> {
    let mut lots = Vec::new();
    let mut current_bucket = String::new();

    for raw in split_lines(wikitext) {
        match parse_line(raw.trim()) {
            LotLine::Heading(heading) => {
                if !heading.is_empty() {
                    current_bucket = heading;
                }
            }
            LotLine::Lot {
                lot_name,
                explicit_type,
            } => {
                let lot_type = explicit_type
                    .unwrap_or_else(|| String::from(infer_lot_type(&current_bucket)));

                lots.push(LotRecord {
                    world: String::from(world),
                    pack: String::from(pack),
                    lot_name,
                    lot_type,
                    bucket: current_bucket.clone(),
                });
            }
            LotLine::Other => (),
        }
    }

    lots
}

/// The first `| game = [[...]]` link in the lead section, raw
pub fn find_pack(lead_wikitext: &str) -> Option<&str> {
    GAME_PATTERN
        .captures(lead_wikitext)
        .and_then(|captures| captures.get(1))
        .map(|link| link.as_str())
        .filter(|pack| !pack.is_empty())
}
