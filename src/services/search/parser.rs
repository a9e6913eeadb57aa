use scraper::{Html, Selector};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{ScrapedLink, SearchResult, SearchResults},
};

use super::SearchSettings;

/// Raw item of the provider's JSON response
///
/// Every field is optional and scalar values of any type are stringified, so
/// one sloppy item cannot sink the whole result list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiItem {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    channel_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    source: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, anything else is `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Parses an upstream payload, picking the branch from its shape
///
/// A JSON object with an `items` key is a structured response; anything
/// else is scanned as markup.
pub fn parse_payload(body: &str, settings: &SearchSettings) -> AppResult<SearchResults> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut object)) if object.contains_key("items") => {
            let items = object.remove("items").unwrap_or(Value::Null);
            parse_structured(items, &settings.derived_link_base)
        }
        _ => scrape_links(body, &settings.link_domain),
    }
}

fn parse_structured(items: Value, derived_link_base: &str) -> AppResult<SearchResults> {
    let items: Vec<ApiItem> = serde_json::from_value(items)
        .map_err(|e| AppError::Upstream(format!("Unparseable search payload: {}", e)))?;

    let results = items
        .into_iter()
        .map(|item| {
            let title = item.title.unwrap_or_default();
            let derived_link_url = item.id.as_ref().map(|id| {
                format!(
                    "{}/{}/{}",
                    derived_link_base.trim_end_matches('/'),
                    urlencoding::encode(&title),
                    id
                )
            });

            SearchResult {
                title,
                id: item.id,
                duration: item.duration,
                channel: item.channel_title,
                source: item.source,
                derived_link_url,
            }
        })
        .collect();

    Ok(SearchResults::Structured(results))
}

/// Collects anchors referencing `link_domain`, in document order
///
/// Best-effort: any anchor whose target mentions the domain is kept.
fn scrape_links(body: &str, link_domain: &str) -> AppResult<SearchResults> {
    let selector = Selector::parse("a[href]")
        .map_err(|e| AppError::Internal(format!("Invalid anchor selector: {:?}", e)))?;

    let document = Html::parse_document(body);
    let links = document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            href.contains(link_domain).then(|| ScrapedLink {
                title: anchor.text().collect::<String>(),
                url: href.to_string(),
            })
        })
        .collect();

    Ok(SearchResults::Scraped(links))
}
