use serde::{Deserialize, Serialize};

/// A single result entry from a Custom Search response page.
///
/// Fields the API omits deserialize as empty strings; callers treat the
/// plain and HTML variants independently (`html_title` keeps the `<b>`
/// emphasis markup the API injects around query terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "htmlTitle", default)]
    pub html_title: String,
    #[serde(rename = "htmlSnippet", default)]
    pub html_snippet: String,
    #[serde(default)]
    pub link: String,
}

/// Wrapper for one response page. Pages past the end of the result set
/// come back without an `items` key at all.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_item_fields_default_to_empty() {
        let item: SearchItem =
            serde_json::from_value(serde_json::json!({ "link": "https://example.com/job/1" }))
                .unwrap();

        assert_eq!(item.link, "https://example.com/job/1");
        assert_eq!(item.title, "");
        assert_eq!(item.html_title, "");
        assert_eq!(item.html_snippet, "");
    }

    #[test]
    fn page_without_items_key_is_empty() {
        let page: SearchResponse = serde_json::from_value(serde_json::json!({
            "kind": "customsearch#search"
        }))
        .unwrap();

        assert!(page.items.is_empty());
    }

    #[test]
    fn html_fields_use_the_api_key_names() {
        let item: SearchItem = serde_json::from_value(serde_json::json!({
            "title": "Acme hiring Backend Developer",
            "htmlTitle": "<b>Acme</b> hiring Backend Developer",
            "htmlSnippet": "3 days ago ...",
            "link": "https://example.com/job/2"
        }))
        .unwrap();

        assert_eq!(item.html_title, "<b>Acme</b> hiring Backend Developer");
        assert_eq!(item.html_snippet, "3 days ago ...");
    }
}
