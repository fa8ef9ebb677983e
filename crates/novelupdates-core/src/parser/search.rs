//! Search results parser for NovelUpdates
//!
//! Parses HTML from `/?s=<query>` pages. Every `search_main_box_nu` card
//! becomes one [`SearchResult`], in page order.

use std::sync::LazyLock;

use regex_lite::Regex;
use scraper::{ElementRef, Html};

use crate::dom;
use crate::error::{NovelUpdatesError, Result};
use crate::types::{Link, SearchResult};

const CARD: &str = "div[class='search_main_box_nu']";
const BODY: &str = "div[class='search_body_nu']";
const IMAGE_REGION: &str = "div[class='search_img_nu']";
const TITLE_LINK: &str = "div[class='search_title'] > a";
const RATING_BOX: &str = "div[class='search_ratings']";
const LONG_DESCRIPTION: &str = "span[class='testhide']";
const STATS: &str = "div[class='search_stats'] > span[class='ss_desk']";
const GENRE_LINKS: &str = "div[class='search_genre'] > a";

/// `/series/<slug>/` at the end of a series URL
static RE_SERIES_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/series/([a-z0-9-]+)/$").unwrap());

/// Suffix of the cover the site shows when a series has none
const PLACEHOLDER_COVER: &str = "noimagemid.jpg";

/// Fragments of the expanded blurb that are UI chrome, not description
const LONG_DESCRIPTION_CHROME: [&str; 3] = [
    "span[class='morelink list']",
    "p[style='margin-top:-5px;']",
    "span[class='moreurl list']",
];

/// Extract the series slug from a series URL.
///
/// # Returns
/// The slug, or an empty string when `url` is not a `/series/<slug>/` URL
///
/// # Examples
/// ```
/// use novelupdates_core::parser::extract_series_id;
///
/// assert_eq!(
///     extract_series_id("https://www.novelupdates.com/series/mushoku-tensei-ln/"),
///     "mushoku-tensei-ln"
/// );
/// assert_eq!(extract_series_id("https://www.novelupdates.com/series/no-slash"), "");
/// ```
pub fn extract_series_id(url: &str) -> String {
    RE_SERIES_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Strip whitespace and parentheses from a card rating, "( 4.5 )" -> "4.5".
pub fn clean_search_rating(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect()
}

/// Parse search results from NovelUpdates search page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the search results page
///
/// # Returns
/// * `Ok(Vec<SearchResult>)` with one record per card, empty if no cards
/// * `Err(NovelUpdatesError::ElementNotFound)` if a card lacks a required part
pub fn parse_search_results(html: &str) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let cards = dom::find_all(document.root_element(), CARD)?;

    let mut results = Vec::with_capacity(cards.len());
    for (index, card) in cards.into_iter().enumerate() {
        let result = parse_search_card(card).map_err(|e| match e {
            NovelUpdatesError::ElementNotFound(what) => {
                NovelUpdatesError::ElementNotFound(format!("search card {}: {}", index + 1, what))
            }
            other => other,
        })?;
        results.push(result);
    }

    tracing::debug!(count = results.len(), "parsed search results");
    Ok(results)
}

/// Parse a single search card.
fn parse_search_card(card: ElementRef<'_>) -> Result<SearchResult> {
    let body = dom::require(card, BODY)?;

    let title_link = dom::require(body, TITLE_LINK)?;
    let title = dom::inner_text(title_link).trim().to_string();
    let url = dom::attr(title_link, "href");
    let id = extract_series_id(&url);

    let (image, search_rating) = match dom::find_one(card, IMAGE_REGION)? {
        Some(region) => (extract_cover(region)?, extract_search_rating(region)?),
        None => (String::new(), String::new()),
    };

    let description = extract_description(body)?;

    let stats = dom::find_all(body, STATS)?;
    let stat = |index: usize| -> Result<String> {
        stats
            .get(index)
            .map(|span| dom::inner_text(*span).trim().to_string())
            .ok_or_else(|| {
                NovelUpdatesError::ElementNotFound(format!("search_stats span.ss_desk[{}]", index))
            })
    };

    let genres = dom::find_all(body, GENRE_LINKS)?
        .into_iter()
        .map(|a| Link::new(dom::inner_text(a).trim(), dom::attr(a, "href")))
        .collect();

    Ok(SearchResult {
        title,
        id,
        url,
        image,
        search_rating,
        description,
        releases: stat(0)?,
        update_freq: stat(1)?,
        nu_readers: stat(2)?,
        nu_reviews: stat(3)?,
        last_updated: stat(4)?,
        genres,
    })
}

/// Cover URL from the card's image region; empty for the placeholder.
fn extract_cover(region: ElementRef<'_>) -> Result<String> {
    let src = dom::find_one(region, "img")?
        .map(|img| dom::attr(img, "src"))
        .unwrap_or_default();
    if src.ends_with(PLACEHOLDER_COVER) {
        return Ok(String::new());
    }
    Ok(src)
}

/// Rating overlay text with the star icon span left out.
fn extract_search_rating(region: ElementRef<'_>) -> Result<String> {
    let Some(rating_box) = dom::find_one(region, RATING_BOX)? else {
        return Ok(String::new());
    };
    let star: Vec<_> = dom::find_one(rating_box, "span")?.into_iter().collect();
    Ok(clean_search_rating(&dom::text_without(rating_box, &star)))
}

/// Short blurb plus expanded blurb, joined by a newline.
fn extract_description(body: ElementRef<'_>) -> Result<String> {
    let short = dom::first_text_child(body)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let long = match dom::find_one(body, LONG_DESCRIPTION)? {
        Some(span) => dom::inner_text_excluding(span, &LONG_DESCRIPTION_CHROME)?
            .trim()
            .to_string(),
        None => String::new(),
    };

    Ok(format!("{}\n{}", short, long).trim_end_matches('\n').to_string())
}
