//! Search query construction.

use super::models::SearchRequest;

/// Known job boards and the site filter scoping results to their posting
/// pages (rather than search or index pages).
const SITE_FILTERS: &[(&str, &str)] = &[
    ("indeed", "site:ie.indeed.com/viewjob"),
    ("linkedin", "site:linkedin.com/jobs/view"),
    ("irishjobs", "site:www.irishjobs.ie/job/"),
    ("jobs", "site:www.jobs.ie/job"),
];

/// Build the search-engine query for a request.
///
/// Total over all inputs: unrecognized websites fall back to
/// `site:<website>.com`, and an empty job-type list simply omits the
/// OR-group. Website matching is case-insensitive; job types and location
/// are quoted as exact phrases.
pub fn build_query(request: &SearchRequest) -> String {
    let website = request.website.to_lowercase();
    let site_filter = SITE_FILTERS
        .iter()
        .find(|(name, _)| *name == website)
        .map(|(_, filter)| (*filter).to_string())
        .unwrap_or_else(|| format!("site:{website}.com"));

    let mut segments = vec![site_filter];

    if !request.job_types.is_empty() {
        let titles = request
            .job_types
            .iter()
            .map(|title| format!("\"{title}\""))
            .collect::<Vec<_>>()
            .join(" | ");
        segments.push(format!("({titles})"));
    }

    segments.push(format!("\"{}\"", request.location));
    segments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(website: &str, job_types: &[&str], location: &str) -> SearchRequest {
        SearchRequest {
            website: website.to_string(),
            job_types: job_types.iter().map(|t| t.to_string()).collect(),
            location: location.to_string(),
            recency_days: 3,
        }
    }

    #[test]
    fn known_boards_map_to_their_posting_pages() {
        let query = build_query(&request("linkedin", &["Backend Developer"], "Dublin"));
        assert_eq!(
            query,
            "site:linkedin.com/jobs/view (\"Backend Developer\") \"Dublin\""
        );

        let query = build_query(&request("indeed", &["Data Engineer"], "Cork"));
        assert_eq!(query, "site:ie.indeed.com/viewjob (\"Data Engineer\") \"Cork\"");

        let query = build_query(&request("irishjobs", &[], "Galway"));
        assert_eq!(query, "site:www.irishjobs.ie/job/ \"Galway\"");

        let query = build_query(&request("jobs", &[], "Limerick"));
        assert_eq!(query, "site:www.jobs.ie/job \"Limerick\"");
    }

    #[test]
    fn website_lookup_is_case_insensitive() {
        let query = build_query(&request("LinkedIn", &["Backend Developer"], "Dublin"));
        assert!(query.starts_with("site:linkedin.com/jobs/view "));
    }

    #[test]
    fn unknown_websites_fall_back_to_a_dot_com_filter() {
        let query = build_query(&request("Glassdoor", &["Backend Developer"], "Dublin"));
        assert!(query.starts_with("site:glassdoor.com "));
    }

    #[test]
    fn multiple_job_types_form_an_or_group_in_request_order() {
        let query = build_query(&request(
            "linkedin",
            &["Backend Developer", "Data Engineer", "SRE"],
            "Dublin",
        ));
        assert!(query.contains("(\"Backend Developer\" | \"Data Engineer\" | \"SRE\")"));
    }

    #[test]
    fn empty_job_types_omit_the_or_group() {
        let query = build_query(&request("linkedin", &[], "Dublin"));
        assert_eq!(query, "site:linkedin.com/jobs/view \"Dublin\"");
    }
}
