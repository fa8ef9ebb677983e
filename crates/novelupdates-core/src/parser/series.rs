//! Series detail parser for NovelUpdates
//!
//! Parses HTML from `/series/<slug>/` pages. The page body lives in
//! `div.w-blog-content`; inside it a row holds a narrow left column with the
//! metadata boxes (`#showtype`, `#seriesgenre`, ...) and a wide right column
//! with the description.

use scraper::{ElementRef, Html};

use super::{GroupSlug, LabelStrip, ParseOptions};
use crate::dom;
use crate::error::Result;
use crate::types::{Link, RatingEntry, SeriesDetail, TaggedLink};

const PAGE: &str = "div[class='w-blog-content']";
const ROW: &str = "div[class='g-cols wpb_row offset_default']";
const LEFT_COLUMN: &str = "div.one-third";
const RIGHT_COLUMN: &str = "div.two-thirds";

/// Prefix of translator group pages
const GROUP_BASE_URL: &str = "https://www.novelupdates.com/group/";

/// Row labels of the `#myrates` table, top to bottom
const STAR_LABELS: [&str; 5] = ["5", "4", "3", "2", "1"];

/// Parse series detail from NovelUpdates series page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the series page
/// * `options` - Cleaning behaviour for labels and group URLs
///
/// # Returns
/// * `Ok(SeriesDetail)` with parsed series information
/// * `Err(NovelUpdatesError::ElementNotFound)` if the page container or the
///   title is missing
pub fn parse_series_detail(html: &str, options: &ParseOptions) -> Result<SeriesDetail> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let page = dom::require(root, PAGE)?;
    let row = dom::find_one(page, ROW)?.unwrap_or(page);
    let left = dom::find_one(row, LEFT_COLUMN)?.unwrap_or(page);
    let right = dom::find_one(row, RIGHT_COLUMN)?.unwrap_or(page);

    let title = dom::inner_text(dom::require(page, "div.seriestitlenu")?)
        .trim()
        .to_string();

    let image = dom::find_one(left, "div.seriesimg img")?
        .map(|img| dom::attr(img, "src"))
        .unwrap_or_default();

    let detail = SeriesDetail {
        title,
        image,
        series_type: extract_type(page)?,
        genre: extract_tagged_links(page, "div#seriesgenre a")?,
        tags: extract_tagged_links(page, "div#showtags a")?,
        rating: extract_rating(root)?,
        language: extract_link(page, "div#showlang a")?.unwrap_or_default(),
        authors: extract_links(page, "div#showauthors a")?,
        artists: extract_links(page, "div#showartists a")?,
        year: extract_text(page, "div#edityear")?.trim().to_string(),
        status: extract_status(page, options.label_strip)?,
        licensed: strip_label(&extract_text(page, "div#showlicensed")?, options.label_strip),
        completely_translated: strip_label(
            &extract_text(page, "div#showtranslated")?,
            options.label_strip,
        ),
        original_publisher: extract_link(page, "div#showopublisher a")?,
        english_publisher: extract_link(page, "div#showepublisher a")?,
        release_freq: extract_release_frequency(page)?,
        description: extract_description(right)?,
        associated_names: extract_associated_names(root)?,
        groups: extract_groups(root, options.group_slug)?,
    };

    tracing::debug!(
        title = %detail.title,
        genres = detail.genre.len(),
        tags = detail.tags.len(),
        groups = detail.groups.len(),
        "parsed series page"
    );
    Ok(detail)
}

/// Clean a label value per `mode`.
///
/// `Legacy` drops one leading space and then one more character, so
/// `"  Yes"` and `"\nYes"` both become `"Yes"` but `"Yes"` becomes `"es"`.
pub fn strip_label(raw: &str, mode: LabelStrip) -> String {
    match mode {
        LabelStrip::Legacy => {
            let rest = raw.strip_prefix(' ').unwrap_or(raw);
            let mut chars = rest.chars();
            chars.next();
            chars.as_str().to_string()
        }
        LabelStrip::Trim => raw.trim().to_string(),
    }
}

/// Derive a translator group page URL from the group's name.
///
/// # Examples
/// ```
/// use novelupdates_core::parser::{group_url, GroupSlug};
///
/// assert_eq!(
///     group_url("Foo Bar TL", GroupSlug::Legacy),
///     "https://www.novelupdates.com/group/foobartl"
/// );
/// assert_eq!(
///     group_url("Foo Bar TL", GroupSlug::Hyphenated),
///     "https://www.novelupdates.com/group/foo-bar-tl/"
/// );
/// ```
pub fn group_url(name: &str, mode: GroupSlug) -> String {
    match mode {
        GroupSlug::Legacy => {
            let collapsed = name.replace(' ', "-").to_lowercase().replace('-', "");
            let slug: String = collapsed
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_ascii_whitespace())
                .collect();
            format!("{}{}", GROUP_BASE_URL, slug)
        }
        GroupSlug::Hyphenated => {
            let mut slug = String::new();
            let mut separator = false;
            for c in name.to_lowercase().chars() {
                if c.is_alphanumeric() {
                    if separator && !slug.is_empty() {
                        slug.push('-');
                    }
                    separator = false;
                    slug.push(c);
                } else {
                    separator = true;
                }
            }
            format!("{}{}/", GROUP_BASE_URL, slug)
        }
    }
}

/// Text of the first match, or empty.
fn extract_text(scope: ElementRef<'_>, css: &str) -> Result<String> {
    Ok(dom::find_one(scope, css)?
        .map(dom::inner_text)
        .unwrap_or_default())
}

fn to_link(anchor: ElementRef<'_>) -> Link {
    Link::new(dom::inner_text(anchor).trim(), dom::attr(anchor, "href"))
}

fn extract_link(scope: ElementRef<'_>, css: &str) -> Result<Option<Link>> {
    Ok(dom::find_one(scope, css)?.map(to_link))
}

fn extract_links(scope: ElementRef<'_>, css: &str) -> Result<Vec<Link>> {
    Ok(dom::find_all(scope, css)?.into_iter().map(to_link).collect())
}

fn extract_tagged_links(scope: ElementRef<'_>, css: &str) -> Result<Vec<TaggedLink>> {
    Ok(dom::find_all(scope, css)?
        .into_iter()
        .map(|anchor| TaggedLink {
            name: dom::inner_text(anchor).trim().to_string(),
            url: dom::attr(anchor, "href"),
            description: dom::attr(anchor, "title"),
        })
        .collect())
}

/// "Light Novel" + " " + "(JP)" style type label.
fn extract_type(scope: ElementRef<'_>) -> Result<Link> {
    let Some(container) = dom::find_one(scope, "div#showtype")? else {
        return Ok(Link::default());
    };
    let anchor = dom::find_one(container, "a")?;
    let origin = dom::find_one(container, "span")?
        .map(dom::inner_text)
        .unwrap_or_default();

    let label = anchor.map(dom::inner_text).unwrap_or_default();
    let name = format!("{} {}", label.trim(), origin.trim()).trim().to_string();
    let url = anchor.map(|a| dom::attr(a, "href")).unwrap_or_default();
    Ok(Link::new(name, url))
}

/// Overall score followed by the per-star vote breakdown.
fn extract_rating(scope: ElementRef<'_>) -> Result<Vec<RatingEntry>> {
    let overall = dom::find_one(scope, "h5.seriesother span.uvotes")?
        .map(|span| dom::inner_text(span).replace(['(', ')'], "").trim().to_string())
        .unwrap_or_default();

    let mut rating = vec![RatingEntry {
        name: "Overall".to_string(),
        rating: overall,
    }];

    let rows = dom::find_all(scope, "table#myrates > tbody > tr")?;
    if rows.len() > STAR_LABELS.len() {
        tracing::warn!(rows = rows.len(), "ratings table has more rows than star levels");
    }
    for (row, stars) in rows.into_iter().zip(STAR_LABELS) {
        let cells = dom::find_all(row, "td")?;
        let value = cells
            .get(1)
            .map(|cell| dom::inner_text(*cell).trim().to_string())
            .unwrap_or_default();
        rating.push(RatingEntry {
            name: stars.to_string(),
            rating: value,
        });
    }
    Ok(rating)
}

/// Status in country of origin; a trailing newline is dropped when the
/// first text node of the box carries one.
fn extract_status(scope: ElementRef<'_>, mode: LabelStrip) -> Result<String> {
    let Some(node) = dom::find_one(scope, "div#editstatus")? else {
        return Ok(String::new());
    };
    let mut status = strip_label(&dom::inner_text(node), mode);

    let first_ends_in_newline = node
        .first_child()
        .and_then(|child| child.value().as_text().map(|text| text.ends_with('\n')))
        .unwrap_or(false);
    if first_ends_in_newline {
        if let Some(stripped) = status.strip_suffix('\n') {
            status = stripped.to_string();
        }
    }
    Ok(status)
}

fn extract_release_frequency(scope: ElementRef<'_>) -> Result<String> {
    let mut frequency = String::new();
    for heading in dom::find_all(scope, "h5.seriesother")? {
        if !dom::inner_text(heading).contains("Release Frequency") {
            continue;
        }
        if let Some(text) = dom::next_text_sibling(heading) {
            frequency.push_str(text.trim());
        }
    }
    Ok(frequency)
}

fn extract_description(scope: ElementRef<'_>) -> Result<String> {
    let text = extract_text(scope, "div#editdescription")?;
    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}

/// Alternative titles, one per `<br>`-separated line.
fn extract_associated_names(scope: ElementRef<'_>) -> Result<Vec<String>> {
    let Some(container) = dom::find_one(scope, "div#editassociated")? else {
        return Ok(Vec::new());
    };
    Ok(dom::child_texts(container)
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect())
}

fn extract_groups(scope: ElementRef<'_>, mode: GroupSlug) -> Result<Vec<Link>> {
    let Some(table) = dom::find_one(scope, "ol.sp_grouptable")? else {
        return Ok(Vec::new());
    };

    let mut groups = Vec::new();
    for item in dom::find_all(table, "li")? {
        let Some(label) = dom::find_one(item, "span[style='padding-left:20px;']")? else {
            tracing::warn!("group entry without a name span, skipping");
            continue;
        };
        let name = dom::attr(label, "title");
        let url = group_url(&name, mode);
        groups.push(Link::new(name, url));
    }
    Ok(groups)
}
