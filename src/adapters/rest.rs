//! PostgREST-style remote backend: four tables under `/rest/v1`, image
//! assets under `/storage/v1`, identity under `/auth/v1`. Table rows use
//! snake_case column names and are decoded tolerantly so a half-migrated
//! backend never takes the site down.

use crate::domain::model::{CaseStudy, CatalogItem, PricingTier, Session, SiteSettings, Testimonial};
use crate::domain::ports::{IdentityProvider, ImageField, RemoteBackend};
use crate::utils::error::{CmsError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const IMAGE_BUCKET: &str = "product-images";
const SETTINGS_ROW_ID: &str = "global";

#[derive(Debug, Clone)]
pub struct RestBackend {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RestBackend {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch_table<T: serde::de::DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = self.endpoint(&format!("rest/v1/{}", table));
        tracing::debug!("Fetching table {} from {}", table, url);

        let rows = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "created_at.asc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows)
    }

    async fn upsert_table<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        let url = self.endpoint(&format!("rest/v1/{}", table));
        tracing::debug!("Upserting {} rows into {}", rows.len(), table);

        self.client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(rows)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl RemoteBackend for RestBackend {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>> {
        let rows: Vec<ItemRow> = self.fetch_table("items").await?;
        Ok(rows.into_iter().map(ItemRow::into_item).collect())
    }

    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>> {
        let rows: Vec<TestimonialRow> = self.fetch_table("testimonials").await?;
        Ok(rows.into_iter().map(TestimonialRow::into_testimonial).collect())
    }

    async fn fetch_case_studies(&self) -> Result<Vec<CaseStudy>> {
        let rows: Vec<CaseStudyRow> = self.fetch_table("case_studies").await?;
        Ok(rows.into_iter().map(CaseStudyRow::into_case_study).collect())
    }

    async fn fetch_settings(&self) -> Result<Option<SiteSettings>> {
        let url = self.endpoint("rest/v1/settings");
        let id_filter = format!("eq.{}", SETTINGS_ROW_ID);
        let rows: Vec<SettingsRow> = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows.into_iter().next().map(SettingsRow::into_settings))
    }

    async fn save_items(&self, items: &[CatalogItem]) -> Result<()> {
        let rows: Vec<ItemRow> = items.iter().map(ItemRow::from_item).collect();
        self.upsert_table("items", &rows).await
    }

    async fn save_testimonials(&self, testimonials: &[Testimonial]) -> Result<()> {
        let rows: Vec<TestimonialRow> = testimonials
            .iter()
            .map(TestimonialRow::from_testimonial)
            .collect();
        self.upsert_table("testimonials", &rows).await
    }

    async fn save_case_studies(&self, case_studies: &[CaseStudy]) -> Result<()> {
        let rows: Vec<CaseStudyRow> = case_studies
            .iter()
            .map(CaseStudyRow::from_case_study)
            .collect();
        self.upsert_table("case_studies", &rows).await
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<()> {
        let row = SettingsRow {
            id: SETTINGS_ROW_ID.to_string(),
            currency_code: Some(settings.currency_code.clone()),
            currency_symbol: Some(settings.symbol().to_string()),
            hero_image: settings.hero_image.clone(),
            created_at: None,
        };
        self.upsert_table("settings", std::slice::from_ref(&row)).await
    }

    async fn upload_image(
        &self,
        item_id: &str,
        field: ImageField,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let ext = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_else(|| "jpg".to_string());
        let object_path = format!("{}/{}/{}.{}", IMAGE_BUCKET, item_id, field.as_str(), ext);
        let url = self.endpoint(&format!("storage/v1/object/{}", object_path));
        tracing::debug!("Uploading {} bytes to {}", bytes.len(), url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("x-upsert", "true")
            .header("cache-control", "3600")
            .header("content-type", content_type_for(&ext))
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CmsError::UploadError {
                message: format!("storage rejected {} ({})", object_path, response.status()),
            });
        }

        Ok(self.endpoint(&format!("storage/v1/object/public/{}", object_path)))
    }
}

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}

/// Identity provider backed by the same host's `/auth/v1` token endpoint.
#[derive(Debug, Clone)]
pub struct RestIdentity {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RestIdentity {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[async_trait]
impl IdentityProvider for RestIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CmsError::auth(format!(
                "sign-in rejected for {} ({})",
                email,
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await?;
        let expires_in = token.expires_in.unwrap_or(3600);
        Ok(Session {
            access_token: token.access_token,
            email: email.to_string(),
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }

    async fn sign_out(&self, session: &Session) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        self.client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

// Wire rows. Columns are snake_case; every non-key column is optional so
// partially populated tables decode to usable defaults.

#[derive(Debug, Serialize, Deserialize)]
struct ItemRow {
    id: String,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    price_from: Option<f64>,
    image: Option<String>,
    before_image: Option<String>,
    after_image: Option<String>,
    branding_options: Option<Vec<String>>,
    pricing_tiers: Option<Vec<PricingTier>>,
    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,
}

impl ItemRow {
    fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            category: Some(item.category.clone()),
            price_from: Some(item.price_from),
            image: Some(item.image.clone()),
            before_image: item.before_image.clone(),
            after_image: item.after_image.clone(),
            branding_options: Some(item.branding_options.clone()),
            pricing_tiers: Some(item.pricing_tiers.clone()),
            created_at: None,
        }
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: self.id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price_from: self.price_from.unwrap_or(0.0),
            image: self.image.unwrap_or_default(),
            before_image: self.before_image,
            after_image: self.after_image,
            branding_options: self.branding_options.unwrap_or_default(),
            pricing_tiers: self.pricing_tiers.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TestimonialRow {
    id: String,
    quote: Option<String>,
    author: Option<String>,
    role: Option<String>,
    company: Option<String>,
    rating: Option<u8>,
    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,
}

impl TestimonialRow {
    fn from_testimonial(t: &Testimonial) -> Self {
        Self {
            id: t.id.clone(),
            quote: Some(t.quote.clone()),
            author: Some(t.author.clone()),
            role: Some(t.role.clone()),
            company: Some(t.company.clone()),
            rating: t.rating,
            created_at: None,
        }
    }

    fn into_testimonial(self) -> Testimonial {
        Testimonial {
            id: self.id,
            quote: self.quote.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            rating: self.rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CaseStudyRow {
    id: String,
    title: Option<String>,
    client: Option<String>,
    description: Option<String>,
    before_image: Option<String>,
    after_image: Option<String>,
    results: Option<Vec<String>>,
    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,
}

impl CaseStudyRow {
    fn from_case_study(c: &CaseStudy) -> Self {
        Self {
            id: c.id.clone(),
            title: Some(c.title.clone()),
            client: Some(c.client.clone()),
            description: Some(c.description.clone()),
            before_image: Some(c.before_image.clone()),
            after_image: Some(c.after_image.clone()),
            results: Some(c.results.clone()),
            created_at: None,
        }
    }

    fn into_case_study(self) -> CaseStudy {
        CaseStudy {
            id: self.id,
            title: self.title.unwrap_or_default(),
            client: self.client.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            before_image: self.before_image.unwrap_or_default(),
            after_image: self.after_image.unwrap_or_default(),
            results: self.results.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SettingsRow {
    id: String,
    currency_code: Option<String>,
    currency_symbol: Option<String>,
    hero_image: Option<String>,
    #[serde(default, skip_serializing)]
    created_at: Option<DateTime<Utc>>,
}

impl SettingsRow {
    fn into_settings(self) -> SiteSettings {
        SiteSettings {
            currency_code: self.currency_code.unwrap_or_else(|| "USD".to_string()),
            currency_symbol: Some(self.currency_symbol.unwrap_or_else(|| "$".to_string())),
            hero_image: self.hero_image,
        }
    }
}
