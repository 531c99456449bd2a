use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable product with pricing tiers and branding customization options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_from: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
    #[serde(default)]
    pub branding_options: Vec<String>,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    /// Quantity range label, e.g. "50-100 units".
    pub quantity: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub before_image: String,
    #[serde(default)]
    pub after_image: String,
    #[serde(default)]
    pub results: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            currency_code: default_currency_code(),
            currency_symbol: Some("$".to_string()),
            hero_image: None,
        }
    }
}

impl SiteSettings {
    pub fn symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub currency_code: Option<String>,
    pub currency_symbol: Option<String>,
    pub hero_image: Option<String>,
}

/// Admin session issued by the external identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// The four collections the store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Items,
    Testimonials,
    CaseStudies,
    Settings,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Items => "items",
            CollectionKind::Testimonials => "testimonials",
            CollectionKind::CaseStudies => "case_studies",
            CollectionKind::Settings => "settings",
        }
    }
}

impl std::str::FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "items" => Ok(CollectionKind::Items),
            "testimonials" => Ok(CollectionKind::Testimonials),
            "case_studies" => Ok(CollectionKind::CaseStudies),
            "settings" => Ok(CollectionKind::Settings),
            other => Err(format!(
                "unknown collection: {} (expected items, testimonials, case_studies, or settings)",
                other
            )),
        }
    }
}

/// Built-in category tabs. Unlike the collections above these are not
/// staff-editable; `all` is the no-filter sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub slug: &'static str,
}

pub const ALL_CATEGORY: &str = "all";

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "All Products",
        slug: ALL_CATEGORY,
    },
    Category {
        name: "Notebooks & Journals",
        slug: "notebooks",
    },
    Category {
        name: "Drinkware",
        slug: "drinkware",
    },
    Category {
        name: "Bags & Totes",
        slug: "bags",
    },
    Category {
        name: "Tech Accessories",
        slug: "tech",
    },
    Category {
        name: "Gift Hampers",
        slug: "hampers",
    },
];

pub fn category_name(slug: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| c.slug == slug)
        .map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_snapshot_roundtrip_uses_camel_case() {
        let item = CatalogItem {
            id: "p1".to_string(),
            name: "Leather Notebook".to_string(),
            description: "A5 journal".to_string(),
            category: "notebooks".to_string(),
            price_from: 25.0,
            image: "https://cdn.example.com/p1.jpg".to_string(),
            before_image: None,
            after_image: None,
            branding_options: vec!["Foil deboss".to_string()],
            pricing_tiers: vec![],
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["priceFrom"], 25.0);
        assert!(json["brandingOptions"].is_array());
        assert!(json.get("beforeImage").is_none());

        let back: CatalogItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_item_decode_tolerates_missing_fields() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":"p1","name":"Mug"}"#).unwrap();
        assert_eq!(item.price_from, 0.0);
        assert!(item.branding_options.is_empty());
        assert!(item.pricing_tiers.is_empty());
    }

    #[test]
    fn test_default_settings() {
        let settings = SiteSettings::default();
        assert_eq!(settings.currency_code, "USD");
        assert_eq!(settings.symbol(), "$");
        assert!(settings.hero_image.is_none());
    }

    #[test]
    fn test_category_name_lookup() {
        assert_eq!(category_name("notebooks"), Some("Notebooks & Journals"));
        assert_eq!(category_name("all"), Some("All Products"));
        assert_eq!(category_name("unknown"), None);
    }

    #[test]
    fn test_expired_session_is_invalid() {
        let session = Session {
            access_token: "tok".to_string(),
            email: "admin@vendaa.co".to_string(),
            expires_at: Utc::now() - chrono::Duration::hours(1),
        };
        assert!(!session.is_valid());
    }
}
