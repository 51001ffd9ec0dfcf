//! Model Marketplace: a fixed community catalog that can be searched,
//! sorted and imported into the session's model library.

use serde::{Deserialize, Serialize};

use crate::model::DeployedModel;
use crate::session::SessionStore;

/// A community model offered in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketListing {
    pub name: String,
    /// Space-separated hashtags, e.g. `#Tissue #H&E`
    pub tags: String,
    /// Rating from 1 to 5
    pub stars: u8,
    /// Preview image shown on the card, if the listing has a remote one
    pub image_url: Option<String>,
}

impl MarketListing {
    fn new(name: &str, tags: &str, stars: u8, image_url: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            tags: tags.to_string(),
            stars,
            image_url: image_url.map(str::to_string),
        }
    }

    /// Star rating as display text, e.g. `⭐⭐⭐`.
    pub fn star_label(&self) -> String {
        "⭐".repeat(usize::from(self.stars))
    }

    /// Case-insensitive substring match on name or tags.
    ///
    /// `query` must already be lower-cased.
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.tags.to_lowercase().contains(query)
    }
}

/// The community catalog, oldest listing first.
pub fn catalog() -> Vec<MarketListing> {
    vec![
        MarketListing::new(
            "H&E Histology Segmenter",
            "#Tissue #H&E",
            5,
            Some("https://images.unsplash.com/photo-1576086213369-97a306d36557?auto=format&fit=crop&w=400&q=80"),
        ),
        MarketListing::new(
            "Fluorescent Nuclei (DAPI)",
            "#Nuclei #Fluorescence",
            4,
            None,
        ),
        MarketListing::new(
            "Stem Cell Colony Tracker",
            "#LiveCell #PhaseContrast",
            5,
            Some("https://www.whatisbiotechnology.org/assets/images/science/pages/stem.jpg"),
        ),
        MarketListing::new(
            "Bacteria/Microbe Counter",
            "#Microbiology #100x",
            3,
            Some("https://images.unsplash.com/photo-1581093450021-4a7360e9a6b5?auto=format&fit=crop&w=400&q=80"),
        ),
    ]
}

/// Card ordering offered by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Popularity,
    /// Most recently listed first
    Newest,
    /// Highest rating first; ties keep catalog order
    Rating,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "Popularity",
            SortOrder::Newest => "Newest",
            SortOrder::Rating => "Rating",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Popularity, SortOrder::Newest, SortOrder::Rating]
    }
}

/// Listings whose name or tags contain `query`, ignoring case.
///
/// An empty query matches everything.
pub fn search(listings: &[MarketListing], query: &str, order: SortOrder) -> Vec<MarketListing> {
    let query = query.to_lowercase();
    let mut found: Vec<MarketListing> = listings
        .iter()
        .filter(|m| m.matches(&query))
        .cloned()
        .collect();

    match order {
        SortOrder::Popularity => {}
        SortOrder::Newest => found.reverse(),
        SortOrder::Rating => found.sort_by(|a, b| b.stars.cmp(&a.stars)),
    }

    if found.is_empty() {
        log::debug!("No marketplace listings match {:?}", query);
    }
    found
}

/// Add a listing to the session's model library.
pub fn import(store: &mut SessionStore, listing: &MarketListing) -> DeployedModel {
    let model = DeployedModel::imported(listing.name.clone());
    store.append_model(model.clone());
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(listings: &[MarketListing]) -> Vec<&str> {
        listings.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let all = catalog();
        assert_eq!(search(&all, "", SortOrder::Popularity), all);
    }

    #[test]
    fn test_search_name_case_insensitive() {
        let found = search(&catalog(), "NUCLEI", SortOrder::Popularity);
        assert_eq!(names(&found), vec!["Fluorescent Nuclei (DAPI)"]);
    }

    #[test]
    fn test_search_tags() {
        let found = search(&catalog(), "h&e", SortOrder::Popularity);
        assert_eq!(names(&found), vec!["H&E Histology Segmenter"]);

        let found = search(&catalog(), "#livecell", SortOrder::Popularity);
        assert_eq!(names(&found), vec!["Stem Cell Colony Tracker"]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search(&catalog(), "brain", SortOrder::Rating).is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let all = catalog();
        let newest = search(&all, "", SortOrder::Newest);
        assert_eq!(newest.first().unwrap().name, "Bacteria/Microbe Counter");

        let rated = search(&all, "", SortOrder::Rating);
        assert_eq!(
            names(&rated),
            vec![
                "H&E Histology Segmenter",
                "Stem Cell Colony Tracker",
                "Fluorescent Nuclei (DAPI)",
                "Bacteria/Microbe Counter",
            ]
        );
    }

    #[test]
    fn test_sort_picker_labels() {
        let labels: Vec<&str> = SortOrder::all().iter().map(|o| o.name()).collect();
        assert_eq!(labels, vec!["Popularity", "Newest", "Rating"]);
        assert_eq!(SortOrder::default(), SortOrder::all()[0]);
    }

    #[test]
    fn test_star_label() {
        assert_eq!(catalog()[3].star_label(), "⭐⭐⭐");
    }

    #[test]
    fn test_import_appends_community_model() {
        let mut store = SessionStore::new();
        let listings = catalog();
        let listing = &listings[2];
        import(&mut store, listing);
        import(&mut store, listing);

        let models = &store.get_or_init().models;
        assert_eq!(models.len(), 4);
        assert_eq!(
            models.last().unwrap(),
            &DeployedModel::new("Stem Cell Colony Tracker", "Community", "Imported", "Unknown")
        );
    }
}
