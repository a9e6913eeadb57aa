use serde::Serialize;

/// One item of a structured search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "derivedLinkURL", skip_serializing_if = "Option::is_none")]
    pub derived_link_url: Option<String>,
}

/// An anchor pulled out of a markup search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapedLink {
    pub title: String,
    pub url: String,
}

/// Search results, shaped by whichever branch parsed the upstream payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Structured(Vec<SearchResult>),
    Scraped(Vec<ScrapedLink>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Structured(items) => items.len(),
            SearchResults::Scraped(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchResults::Structured(_) => "structured",
            SearchResults::Scraped(_) => "scraped",
        }
    }
}
