pub mod catalogue;
pub mod contact;
pub mod session;
pub mod store;

pub use crate::domain::model::{
    CaseStudy, CatalogItem, Category, PricingTier, Session, SettingsPatch, SiteSettings,
    Testimonial, ALL_CATEGORY, CATEGORIES,
};
pub use crate::domain::ports::{
    IdentityProvider, ImageField, RemoteBackend, SnapshotStorage,
};
pub use crate::utils::error::Result;
pub use store::{ContentStore, RemoteSync};
