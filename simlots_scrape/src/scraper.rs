mod scrape_writer;
mod scraper_types;

use crate::{wikitext, SCRAPER_HEADING};
use const_format::formatcp;
use http::HeaderMap;
use reqwest::blocking::Client;
use simlots::{
    lots_core::{LotRecord, PACK_NOT_FOUND},
    OutputFiles,
};
use std::time::Duration;

pub use scrape_writer::{record_lots, write_lots};
pub use scraper_types::{ParseProp, ParseResponse, ScrapeError, Section};

const WIKI_PREFIX: &str = "https://sims.fandom.com/";
pub const API_URL: &str = formatcp!("{}api.php", WIKI_PREFIX);

/// Seconds to wait on any single request before giving up on the whole scrape
const REQUEST_TIMEOUT: u64 = 30;

/// Section headings (trimmed, lowercased) which hold the lot listing
const LOTS_HEADINGS: [&str; 2] = ["lots", "lots[]"];

/// Something which can answer `action=parse` queries for a page
pub trait WikiApi {
    fn parse(
        &self,
        page: &str,
        prop: ParseProp,
        section: Option<&str>,
    ) -> Result<ParseResponse, ScrapeError>;
}

/// Talks to the real wiki over HTTP. Requests are blocking and never retried.
pub struct HttpWikiApi {
    client: Client,
    api_url: String,
}

impl HttpWikiApi {
    pub fn new_with_url(api_url: String) -> Result<HttpWikiApi, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "user-agent",
            "Mozilla/5.0"
                .parse()
                .expect("Hardcoded header should be valid."),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build()?;

        Ok(HttpWikiApi { client, api_url })
    }
}

impl WikiApi for HttpWikiApi {
    fn parse(
        &self,
        page: &str,
        prop: ParseProp,
        section: Option<&str>,
    ) -> Result<ParseResponse, ScrapeError> {
        let mut query = vec![
            ("action", "parse"),
            ("page", page),
            ("format", "json"),
            ("prop", prop.as_str()),
        ];
        if let Some(section) = section {
            query.push(("section", section));
        }

        eprintln!(
            "{}Request sent: {} prop={} section={:?}",
            SCRAPER_HEADING,
            page,
            prop.as_str(),
            section
        );

        let response = self
            .client
            .get(self.api_url.as_str())
            .query(&query)
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}

/// Used to scrape the lots of each world from the wiki, and store them
pub struct Scraper<A: WikiApi> {
    api: A,
}

impl<A: WikiApi> Scraper<A> {
    pub fn new_with_api(api: A) -> Scraper<A> {
        Scraper { api }
    }

    /// Scrapes every world in order and records all their lots.
    /// Nothing is written if any request fails. Returns the number of lots recorded.
    pub fn scrape(&self, worlds: &[&str], outputs: &OutputFiles) -> Result<usize, ScrapeError> {
        let lots = self.scrape_worlds(worlds)?;

        record_lots(&lots, outputs.lots_output.as_str())?;

        Ok(lots.len())
    }

    /// All lots of the given worlds, world by world in the order given
    pub fn scrape_worlds(&self, worlds: &[&str]) -> Result<Vec<LotRecord>, ScrapeError> {
        let mut lots = Vec::new();
        for world in worlds {
            lots.append(&mut self.scrape_world(world)?);
        }

        Ok(lots)
    }

    /// The lots of one world. A world without a lots section has none.
    /// Always asks for the section list and the infobox, then the lots section if there is one.
    pub fn scrape_world(&self, world: &str) -> Result<Vec<LotRecord>, ScrapeError> {
        eprintln!("{}Scraping {}", SCRAPER_HEADING, world);

        let section = self.find_lots_section_index(world)?;
        // The infobox is fetched even for worlds without lots, so its failure still aborts
        let pack = self.find_pack(world)?;

        let section = match section {
            Some(section) => section,
            None => {
                eprintln!("{}No lots section for {}, skipping", SCRAPER_HEADING, world);
                return Ok(Vec::new());
            }
        };

        let response = self.api.parse(world, ParseProp::Wikitext, Some(&section))?;
        let lots = wikitext::parse_lots(response.wikitext(), &pack, world);

        eprintln!("{}Found {} lots in {}", SCRAPER_HEADING, lots.len(), world);
        Ok(lots)
    }

    /// Index of the first section titled "Lots", if the page has one
    pub fn find_lots_section_index(&self, page: &str) -> Result<Option<String>, ScrapeError> {
        let response = self.api.parse(page, ParseProp::Sections, None)?;

        let index = response
            .sections()
            .iter()
            .find(|section| is_lots_heading(&section.line))
            .map(|section| section.index.clone());

        Ok(index)
    }

    /// The pack named in the page's infobox, or the not-found placeholder
    pub fn find_pack(&self, page: &str) -> Result<String, ScrapeError> {
        let response = self.api.parse(page, ParseProp::Wikitext, Some("0"))?;

        let pack = match wikitext::find_pack(response.wikitext()) {
            Some(pack) => String::from(pack),
            None => String::from(PACK_NOT_FOUND),
        };

        Ok(pack)
    }
}

fn is_lots_heading(line: &str) -> bool {
    let heading = line.trim().to_lowercase();
    LOTS_HEADINGS.contains(&heading.as_str())
}
