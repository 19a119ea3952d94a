use crate::PACKAGER_HEADING;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::{
    fmt::Debug,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Global the front-end reads the catalog from
pub const GLOBAL_NAME: &str = "window.SIMS4_LOTS_CSV";

pub enum PackageError {
    File(io::Error),
    Json(serde_json::Error),
}

impl Debug for PackageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::File(err) => format!("File: {:?}", err),
            Self::Json(err) => format!("Json: {:?}", err),
        };

        write!(f, "{}", message)
    }
}

impl From<io::Error> for PackageError {
    fn from(value: io::Error) -> Self {
        PackageError::File(value)
    }
}

impl From<serde_json::Error> for PackageError {
    fn from(value: serde_json::Error) -> Self {
        PackageError::Json(value)
    }
}

/// What a packaging run wrote
#[derive(Debug, PartialEq, Eq)]
pub struct PackageSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Length of the packaged text in characters
    pub chars: usize,
}

/// JSON formatter which writes every non-ASCII character as a `\uXXXX` escape,
/// using a surrogate pair above U+FFFF. U+2028 and U+2029 are escaped along with the rest.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }

        Ok(())
    }
}

/// The text as a JSON string literal made only of ASCII
fn ascii_json(text: &str) -> Result<String, serde_json::Error> {
    let mut out = Vec::with_capacity(text.len() + 2);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
    text.serialize(&mut serializer)?;

    // Every byte written is ASCII
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Builds the script text for a CSV file's contents.
/// The same input always gives byte-identical output. Line endings are kept as they are.
pub fn render_script(source_name: &str, csv_text: &str) -> Result<String, PackageError> {
    let payload = ascii_json(csv_text)?;

    Ok(format!(
        "/* Auto-generated from {}. */\n{} = {};\n",
        source_name, GLOBAL_NAME, payload
    ))
}

/// Reads the CSV as plain text and writes it out as a script assigning it to GLOBAL_NAME.
/// The CSV is not parsed or checked in any way.
pub fn package_csv(csv_path: &Path, out_path: &Path) -> Result<PackageSummary, PackageError> {
    eprintln!("{}Reading {}", PACKAGER_HEADING, csv_path.display());
    let text = fs::read_to_string(csv_path)?;

    let source_name = csv_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| csv_path.display().to_string());
    let script = render_script(&source_name, &text)?;

    eprintln!("{}Writing {}", PACKAGER_HEADING, out_path.display());
    fs::write(out_path, script)?;

    Ok(PackageSummary {
        source: csv_path.to_path_buf(),
        output: out_path.to_path_buf(),
        chars: text.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "World,Pack/DLC,Lot Name,Lot Type,Bucket/Section\r\nSulani,The Sims 4: Island Living,\"Cabin, \"\"Blue\"\"\",Rental,Vacation Homes\r\n";

    #[test]
    fn script_shape() {
        let script = render_script("lots.csv", "a,b\r\n").expect("Test failed");
        assert_eq!(
            script,
            "/* Auto-generated from lots.csv. */\nwindow.SIMS4_LOTS_CSV = \"a,b\\r\\n\";\n"
        );
    }

    #[test]
    fn payload_decodes_to_original_text() {
        let script = render_script("lots.csv", CSV).expect("Test failed");
        let assignment = script.lines().nth(1).expect("Assignment line should exist");
        let literal = assignment
            .strip_prefix("window.SIMS4_LOTS_CSV = ")
            .and_then(|rest| rest.strip_suffix(';'))
            .expect("Assignment should have the expected shape");

        let decoded: String = serde_json::from_str(literal).expect("Literal should be JSON");
        assert_eq!(decoded, CSV);
    }

    #[test]
    fn packaging_is_idempotent() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let csv_path = dir.path().join("sims4_worlds_lots_full.csv");
        let first = dir.path().join("first.js");
        let second = dir.path().join("second.js");
        fs::write(&csv_path, CSV).expect("Seeding should work");

        package_csv(&csv_path, &first).expect("Test failed");
        package_csv(&csv_path, &second).expect("Test failed");

        assert_eq!(
            fs::read(&first).expect("Output should exist"),
            fs::read(&second).expect("Output should exist")
        );
    }

    #[test]
    fn summary_counts_characters() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let csv_path = dir.path().join("lots.csv");
        let out_path = dir.path().join("data.js");
        fs::write(&csv_path, "Héllo,wörld\n").expect("Seeding should work");

        let summary = package_csv(&csv_path, &out_path).expect("Test failed");

        assert_eq!(summary.chars, 12);
        assert_eq!(summary.source, csv_path);
        assert_eq!(summary.output, out_path);
        let script = fs::read_to_string(&out_path).expect("Output should exist");
        assert!(script.starts_with("/* Auto-generated from lots.csv. */\n"));
        assert!(script.contains(r#""H\u00e9llo,w\u00f6rld\n""#));
    }

    #[test]
    fn non_ascii_is_escaped() {
        let script =
            render_script("lots.csv", "Caf\u{e9}\u{2028}\u{2029}\u{1F3E0}").expect("Test failed");

        assert!(script.is_ascii());
        assert!(script.contains(r#"= "Caf\u00e9\u2028\u2029\ud83c\udfe0";"#));
    }

    #[test]
    fn escaped_payload_decodes_to_original_text() {
        let text = "Willow Creek,Caf\u{e9} \u{201C}Bleu\u{201D} \u{1F3E0}\r\n";
        let script = render_script("lots.csv", text).expect("Test failed");
        let literal = script
            .lines()
            .nth(1)
            .and_then(|line| line.strip_prefix("window.SIMS4_LOTS_CSV = "))
            .and_then(|rest| rest.strip_suffix(';'))
            .expect("Assignment should have the expected shape");

        let decoded: String = serde_json::from_str(literal).expect("Literal should be JSON");
        assert_eq!(decoded, text);
    }

    #[test]
    fn overwrites_existing_script() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let csv_path = dir.path().join("lots.csv");
        let out_path = dir.path().join("data.js");
        fs::write(&csv_path, "").expect("Seeding should work");
        fs::write(&out_path, "old script ".repeat(100)).expect("Seeding should work");

        package_csv(&csv_path, &out_path).expect("Test failed");

        assert_eq!(
            fs::read_to_string(&out_path).expect("Output should exist"),
            "/* Auto-generated from lots.csv. */\nwindow.SIMS4_LOTS_CSV = \"\";\n"
        );
    }

    #[test]
    fn missing_csv_is_an_error() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let result = package_csv(&dir.path().join("missing.csv"), &dir.path().join("data.js"));

        assert!(matches!(result, Err(PackageError::File(_))));
        assert!(!dir.path().join("data.js").exists());
    }
}
