use super::ScrapeError;
use simlots::lots_core::{LotRecord, LOT_HEADERS};
use std::{fs::File, io::Write};

// Message to print before all writer logs
const WRITER_HEADING: &str = "[WRITER] ";

/// Record all the scraped lots to a CSV file, overwriting it.
/// The header row is always written, even with no lots.
pub fn record_lots(lots: &[LotRecord], output_name: &str) -> Result<(), ScrapeError> {
    eprintln!("{}Recording {} lots to {}", WRITER_HEADING, lots.len(), output_name);
    let file = File::create(output_name)?;
    write_lots(file, lots)?;
    eprintln!("{}Lots recorded successfully", WRITER_HEADING);

    Ok(())
}

/// Writes the header and one row per lot, quoting only where needed
pub fn write_lots<W: Write>(out: W, lots: &[LotRecord]) -> Result<(), ScrapeError> {
    // Headers are written by hand so an empty catalog still gets them
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(LOT_HEADERS)?;
    for lot in lots {
        writer.serialize(lot)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_data() -> Vec<LotRecord> {
        vec![
            LotRecord {
                world: String::from("Sulani"),
                pack: String::from("The Sims 4: Island Living"),
                lot_name: String::from("Cabin"),
                lot_type: String::from("Rental"),
                bucket: String::from("Vacation Homes"),
            },
            LotRecord {
                world: String::from("San Myshuno"),
                pack: String::from("The Sims 4: City Living"),
                lot_name: String::from("17 Culpepper House, Apt 1"),
                lot_type: String::from("Apartment"),
                bucket: String::from("Fashion District"),
            },
            LotRecord {
                world: String::from("Newcrest"),
                pack: String::from("(Pack not found via infobox parse)"),
                lot_name: String::from("The \"Blank\" Plot"),
                lot_type: String::from("Empty lot"),
                bucket: String::new(),
            },
        ]
    }

    fn read_back(path: &std::path::Path) -> (Vec<String>, Vec<LotRecord>) {
        let mut reader = csv::Reader::from_path(path).expect("Written file should be readable");
        let headers = reader
            .headers()
            .expect("Header row should exist")
            .iter()
            .map(String::from)
            .collect();
        let lots = reader
            .deserialize()
            .collect::<Result<Vec<LotRecord>, _>>()
            .expect("Rows should deserialize");

        (headers, lots)
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let path = dir.path().join("lots.csv");
        let lots = get_test_data();

        record_lots(&lots, path.to_str().expect("Temp path should be UTF-8")).expect("Test failed");

        let (headers, read) = read_back(&path);
        assert_eq!(headers, LOT_HEADERS);
        assert_eq!(read, lots);
    }

    #[test]
    fn header_only_when_empty() {
        let mut buffer = Vec::new();
        write_lots(&mut buffer, &[]).expect("Test failed");

        assert_eq!(
            String::from_utf8(buffer).expect("CSV should be UTF-8"),
            "World,Pack/DLC,Lot Name,Lot Type,Bucket/Section\r\n"
        );
    }

    #[test]
    fn quotes_only_where_needed() {
        let mut buffer = Vec::new();
        write_lots(&mut buffer, &get_test_data()).expect("Test failed");
        let text = String::from_utf8(buffer).expect("CSV should be UTF-8");
        let rows: Vec<_> = text.split("\r\n").collect();

        assert_eq!(rows[1], "Sulani,The Sims 4: Island Living,Cabin,Rental,Vacation Homes");
        assert_eq!(
            rows[2],
            "San Myshuno,The Sims 4: City Living,\"17 Culpepper House, Apt 1\",Apartment,Fashion District"
        );
        assert_eq!(
            rows[3],
            "Newcrest,(Pack not found via infobox parse),\"The \"\"Blank\"\" Plot\",Empty lot,"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Temp dir should be creatable");
        let path = dir.path().join("lots.csv");
        std::fs::write(&path, "stale contents that are longer than the new file\n".repeat(50))
            .expect("Seeding should work");

        record_lots(&[], path.to_str().expect("Temp path should be UTF-8")).expect("Test failed");

        let (headers, read) = read_back(&path);
        assert_eq!(headers, LOT_HEADERS);
        assert!(read.is_empty());
    }

    #[test]
    fn fail_write_lots() {
        // Let's hope you don't have a folder named this in the test directory
        let out_dir = "7XLrFH2oGy5e7C5BYXZeVVvwQjaDIe7dMReaLinD47h5R6O4D8SWZUfiod6VF0aN";

        let result = record_lots(&get_test_data(), &format!("{}/lots.csv", out_dir));
        assert!(matches!(result, Err(ScrapeError::WritingError(_))));
    }
}
