//! schema.org ItemList emission for search engines.

use crate::records::ProjectRecord;

/// Build the JSON-LD ItemList for the given records, positions 1-based in
/// catalogue order.
pub fn structured_data(records: &[ProjectRecord]) -> serde_json::Value {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": "WebAR Portfolio Projects",
        "description": "A curated list of WebAR and immersive web projects built by Hachem Awawi.",
        "itemListElement": records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::json!({
                    "@type": "CreativeWork",
                    "position": index + 1,
                    "name": record.title,
                    "url": record.primary_url(),
                    "description": record.description,
                    "keywords": record.stack.join(", "),
                    "inLanguage": "en",
                })
            })
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CATALOGUE;

    #[test]
    fn item_list_positions_follow_catalogue_order() {
        let data = structured_data(CATALOGUE);
        let items = data["itemListElement"].as_array().expect("item list array");
        assert_eq!(items.len(), CATALOGUE.len());
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item["position"], index as u64 + 1);
            assert_eq!(item["name"], CATALOGUE[index].title);
        }
    }

    #[test]
    fn every_item_carries_a_url() {
        let data = structured_data(CATALOGUE);
        for item in data["itemListElement"].as_array().expect("item list array") {
            let url = item["url"].as_str().expect("url string");
            assert!(url.starts_with("https://"), "unexpected url {url}");
        }
    }
}
