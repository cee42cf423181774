//! Catalog Wire Types
//!
//! Shapes of the JSON documents the remote catalog returns. The client
//! decodes these from freshly fetched or cached response bytes.

use serde::Deserialize;

// == Area Listing ==

/// One page of the paginated area listing (`GET /areas`).
#[derive(Debug, Clone, Deserialize)]
pub struct AreaPage {
    /// Total number of areas in the catalog
    #[allow(dead_code)]
    pub count: u32,
    /// Absolute URL of the next page; absent on the last page
    pub next: Option<String>,
    /// Absolute URL of the previous page; absent on the first page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<AreaSummary>,
}

/// Name and canonical URL of one area in a listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaSummary {
    pub name: String,
    #[allow(dead_code)]
    pub url: String,
}

// == Area Detail ==

/// Full record for one area (`GET /areas/{name}`).
#[derive(Debug, Clone, Deserialize)]
pub struct AreaDetail {
    pub name: String,
    /// Creatures recently sighted in this area
    pub sightings: Vec<CreatureRef>,
}

/// Name and canonical URL of a creature referenced from an area.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureRef {
    pub name: String,
    #[allow(dead_code)]
    pub url: String,
}

// == Creature ==

/// Full record for one creature (`GET /creatures/{name}`).
#[derive(Debug, Clone, Deserialize)]
pub struct Creature {
    pub name: String,
    /// Catch difficulty; a catch roll must beat this score
    pub rarity: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<StatValue>,
    /// Taxonomic kinds, e.g. "beast" or "spirit"
    pub kinds: Vec<String>,
}

/// One named stat on a creature record.
#[derive(Debug, Clone, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_page_parses() {
        let body = r#"{
            "count": 42,
            "next": "https://catalog/areas?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "mirror-marsh", "url": "https://catalog/areas/mirror-marsh"},
                {"name": "ember-steppe", "url": "https://catalog/areas/ember-steppe"}
            ]
        }"#;

        let page: AreaPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 42);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "mirror-marsh");
    }

    #[test]
    fn test_area_detail_parses() {
        let body = r#"{
            "name": "mirror-marsh",
            "sightings": [
                {"name": "glimmer-newt", "url": "https://catalog/creatures/glimmer-newt"}
            ]
        }"#;

        let detail: AreaDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.name, "mirror-marsh");
        assert_eq!(detail.sightings.len(), 1);
        assert_eq!(detail.sightings[0].name, "glimmer-newt");
    }

    #[test]
    fn test_creature_parses() {
        let body = r#"{
            "name": "glimmer-newt",
            "rarity": 64,
            "height": 3,
            "weight": 12,
            "stats": [
                {"name": "vigor", "value": 35},
                {"name": "cunning", "value": 48}
            ],
            "kinds": ["amphibian", "spirit"]
        }"#;

        let creature: Creature = serde_json::from_str(body).unwrap();
        assert_eq!(creature.name, "glimmer-newt");
        assert_eq!(creature.rarity, 64);
        assert_eq!(creature.stats[1].value, 48);
        assert_eq!(creature.kinds, vec!["amphibian", "spirit"]);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let body = r#"{"name": "glimmer-newt"}"#;
        assert!(serde_json::from_str::<Creature>(body).is_err());
    }

    #[test]
    fn test_empty_sightings_parses() {
        let body = r#"{"name": "salt-flats", "sightings": []}"#;
        let detail: AreaDetail = serde_json::from_str(body).unwrap();
        assert!(detail.sightings.is_empty());
    }
}
