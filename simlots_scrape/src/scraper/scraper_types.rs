use serde::Deserialize;
use std::fmt::{Debug, Display};

/// Holds information about the errors which can happen while scraping
pub enum ScrapeError {
    /// Transport failure, timeout, non-success status or an undecodable body
    WebError(reqwest::Error),
    CsvError(csv::Error),
    WritingError(std::io::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::WebError(err)
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(err: csv::Error) -> Self {
        ScrapeError::CsvError(err)
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        ScrapeError::WritingError(err)
    }
}

impl Debug for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ScrapeError::WebError(err) => format!("There was an error in a web request: {:?}", err),
            ScrapeError::CsvError(err) => format!("There was an error in writing CSV: {:?}", err),
            ScrapeError::WritingError(err) => {
                format!("There was an error in writing to a file: {:?}", err)
            }
        };

        write!(f, "{}", message)
    }
}

impl Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ScrapeError {}

/// What `action=parse` asks the wiki to return
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseProp {
    Sections,
    Wikitext,
}

impl ParseProp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseProp::Sections => "sections",
            ParseProp::Wikitext => "wikitext",
        }
    }
}

// The shape of an `action=parse` response. Anything missing reads as empty, so error
// responses from the wiki behave like pages without the wanted content.

#[derive(Debug, Default, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub parse: ParseBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParseBody {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub wikitext: Wikitext,
}

/// One entry of the table of contents
#[derive(Debug, Default, Deserialize)]
pub struct Section {
    /// Heading text as rendered, e.g. "Lots"
    #[serde(default)]
    pub line: String,
    /// Index to pass back as `section=`
    #[serde(default)]
    pub index: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Wikitext {
    #[serde(rename = "*", default)]
    pub content: String,
}

impl ParseResponse {
    pub fn sections(&self) -> &[Section] {
        &self.parse.sections
    }

    pub fn wikitext(&self) -> &str {
        &self.parse.wikitext.content
    }
}
