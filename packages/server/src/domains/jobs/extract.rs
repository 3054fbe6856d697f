//! Structured extraction from raw search results.
//!
//! Job boards render result titles as "<company> hiring <type> in
//! <location>" and snippets with relative ages ("3 days ago"). Both
//! heuristics live here and are total: anything unparseable degrades to
//! the documented sentinels instead of failing the item.

use chrono::{DateTime, Duration, Utc};
use customsearch_client::SearchItem;
use lazy_static::lazy_static;
use regex::Regex;

use super::models::{JobRecord, JobStatus, POSTED_AT_UNKNOWN, UNKNOWN_FIELD};

lazy_static! {
    // "3 hours ago", "2 Weeks ago"... anywhere in the snippet. Plural
    // units only, case-insensitive.
    static ref RELATIVE_AGE_REGEX: Regex =
        Regex::new(r"(?i)\b(\d+)\s*(hours|days|weeks|months|years) ago\b").unwrap();

    // "<company> hiring <type> in <location> | LinkedIn"; the location
    // and the trailing board marker are both optional.
    static ref HIRING_TITLE_REGEX: Regex =
        Regex::new(r"^(.*) hiring (.*?)(?: in (.*?))?(?:\s*\| LinkedIn)?$").unwrap();

    // Emphasis tags the search API injects around matched query terms.
    static ref BOLD_TAG_REGEX: Regex = Regex::new(r"</?b>").unwrap();
}

/// Turn one raw search result into a job record.
///
/// `name` and `url` pass through verbatim from the item; company, job type
/// and location come from the HTML title, the posting time from the
/// snippet. `website` is the board name the caller searched, echoed into
/// every record of the run.
pub fn extract(item: &SearchItem, website: &str) -> JobRecord {
    let (company, job_type, location) = decompose_title(&item.html_title);

    JobRecord {
        name: item.title.clone(),
        url: item.link.clone(),
        posted_at: posted_at(&item.html_snippet, Utc::now()),
        status: JobStatus::New,
        website: website.to_string(),
        company,
        job_type,
        location,
    }
}

/// Resolve a relative-age phrase against `now`.
///
/// Months and years are approximated as 30 and 365 days. Returns
/// [`POSTED_AT_UNKNOWN`] when the snippet carries no parseable phrase or
/// the age does not fit the calendar arithmetic.
fn posted_at(snippet: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let caps = match RELATIVE_AGE_REGEX.captures(snippet) {
        Some(caps) => caps,
        None => return POSTED_AT_UNKNOWN,
    };

    let value = match caps[1].parse::<i64>() {
        Ok(value) => value,
        Err(_) => return POSTED_AT_UNKNOWN,
    };

    let age = match caps[2].to_lowercase().as_str() {
        "hours" => Duration::try_hours(value),
        "days" => Duration::try_days(value),
        "weeks" => Duration::try_weeks(value),
        "months" => value.checked_mul(30).and_then(Duration::try_days),
        "years" => value.checked_mul(365).and_then(Duration::try_days),
        _ => None,
    };

    age.and_then(|age| now.checked_sub_signed(age))
        .unwrap_or(POSTED_AT_UNKNOWN)
}

/// Split an HTML title of the form `<company> hiring <type> [in <location>]
/// [| LinkedIn]` into its segments, stripping emphasis markup.
///
/// Each segment falls back to [`UNKNOWN_FIELD`] independently when missing
/// or empty; a title that does not match the shape at all yields all three
/// sentinels.
fn decompose_title(html_title: &str) -> (String, String, String) {
    match HIRING_TITLE_REGEX.captures(html_title) {
        Some(caps) => (
            clean_segment(caps.get(1).map(|m| m.as_str())),
            clean_segment(caps.get(2).map(|m| m.as_str())),
            clean_segment(caps.get(3).map(|m| m.as_str())),
        ),
        None => (
            UNKNOWN_FIELD.to_string(),
            UNKNOWN_FIELD.to_string(),
            UNKNOWN_FIELD.to_string(),
        ),
    }
}

fn clean_segment(segment: Option<&str>) -> String {
    segment
        .map(|text| BOLD_TAG_REGEX.replace_all(text, "").trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}
