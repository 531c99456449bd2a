use crate::domain::model::{CaseStudy, CatalogItem, Session, SiteSettings, Testimonial};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value snapshot persistence for the four collections. Implementations
/// must be safe to call repeatedly with the same key (last write wins).
pub trait SnapshotStorage: Send + Sync {
    fn read_file(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Move a snapshot aside (e.g. after a failed parse) so it can be
    /// inspected later instead of being overwritten.
    fn quarantine(&self, name: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Which item image an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Image,
    BeforeImage,
    AfterImage,
}

impl ImageField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageField::Image => "image",
            ImageField::BeforeImage => "before_image",
            ImageField::AfterImage => "after_image",
        }
    }
}

impl std::str::FromStr for ImageField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "image" => Ok(ImageField::Image),
            "before_image" | "before" => Ok(ImageField::BeforeImage),
            "after_image" | "after" => Ok(ImageField::AfterImage),
            other => Err(format!("unknown image field: {}", other)),
        }
    }
}

/// Remote CMS backend: four tables plus an image bucket, all keyed by id.
/// Saves are last-write-wins upserts; reads return whatever the backend has.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>>;
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>>;
    async fn fetch_case_studies(&self) -> Result<Vec<CaseStudy>>;
    async fn fetch_settings(&self) -> Result<Option<SiteSettings>>;

    async fn save_items(&self, items: &[CatalogItem]) -> Result<()>;
    async fn save_testimonials(&self, testimonials: &[Testimonial]) -> Result<()>;
    async fn save_case_studies(&self, case_studies: &[CaseStudy]) -> Result<()>;
    async fn save_settings(&self, settings: &SiteSettings) -> Result<()>;

    /// Upload an image for one item field; returns the public URL.
    async fn upload_image(
        &self,
        item_id: &str,
        field: ImageField,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String>;
}

/// External identity provider the admin gate delegates to. No credentials
/// are stored or checked locally.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_out(&self, session: &Session) -> Result<()>;
}
