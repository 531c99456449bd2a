//! The content store: single source of truth for catalog items,
//! testimonials, case studies, and site settings. Writes are local-first:
//! memory and the snapshot files are updated before the remote push, and a
//! failed push never rolls the local state back.

use crate::domain::model::{
    CaseStudy, CatalogItem, SettingsPatch, SiteSettings, Testimonial,
};
use crate::domain::ports::{ImageField, RemoteBackend, SnapshotStorage};
use crate::domain::seed;
use crate::utils::error::{CmsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_rating};
use serde::de::DeserializeOwned;
use serde::Serialize;

const ITEMS_SNAPSHOT: &str = "items.json";
const TESTIMONIALS_SNAPSHOT: &str = "testimonials.json";
const CASE_STUDIES_SNAPSHOT: &str = "case_studies.json";
const SETTINGS_SNAPSHOT: &str = "settings.json";

/// Outcome of the remote leg of a write. Informational only: the local
/// write has already committed by the time this is produced.
#[derive(Debug)]
pub enum RemoteSync {
    /// No remote backend configured.
    Skipped,
    Synced,
    Failed(CmsError),
}

impl RemoteSync {
    pub fn failed(&self) -> bool {
        matches!(self, RemoteSync::Failed(_))
    }
}

pub struct ContentStore<S: SnapshotStorage, R: RemoteBackend> {
    storage: S,
    remote: Option<R>,
    items: Vec<CatalogItem>,
    testimonials: Vec<Testimonial>,
    case_studies: Vec<CaseStudy>,
    settings: SiteSettings,
}

impl<S: SnapshotStorage, R: RemoteBackend> ContentStore<S, R> {
    pub fn local_only(storage: S) -> Self {
        Self::build(storage, None)
    }

    pub fn with_remote(storage: S, remote: R) -> Self {
        Self::build(storage, Some(remote))
    }

    fn build(storage: S, remote: Option<R>) -> Self {
        Self {
            storage,
            remote,
            items: Vec::new(),
            testimonials: Vec::new(),
            case_studies: Vec::new(),
            settings: SiteSettings::default(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Initial load. Remote mode reads the four tables, degrading any
    /// failed or missing table to empty/default rather than erroring.
    /// Local mode reads snapshots, falling back to the built-in seed set.
    pub async fn load(&mut self) {
        if let Some(remote) = &self.remote {
            self.items = fetch_or_empty("items", remote.fetch_items().await);
            self.testimonials =
                fetch_or_empty("testimonials", remote.fetch_testimonials().await);
            self.case_studies =
                fetch_or_empty("case_studies", remote.fetch_case_studies().await);
            self.settings = match remote.fetch_settings().await {
                Ok(Some(settings)) => settings,
                Ok(None) => SiteSettings::default(),
                Err(err) => {
                    tracing::warn!("Remote settings fetch failed: {}", err);
                    SiteSettings::default()
                }
            };
            tracing::info!(
                "Loaded {} items, {} testimonials, {} case studies from remote",
                self.items.len(),
                self.testimonials.len(),
                self.case_studies.len()
            );
        } else {
            self.items = self
                .read_snapshot(ITEMS_SNAPSHOT, seed::default_items())
                .await;
            self.testimonials = self
                .read_snapshot(TESTIMONIALS_SNAPSHOT, seed::default_testimonials())
                .await;
            self.case_studies = self
                .read_snapshot(CASE_STUDIES_SNAPSHOT, seed::default_case_studies())
                .await;
            self.settings = self
                .read_snapshot(SETTINGS_SNAPSHOT, SiteSettings::default())
                .await;
            tracing::debug!(
                "Loaded {} items, {} testimonials, {} case studies from local snapshots",
                self.items.len(),
                self.testimonials.len(),
                self.case_studies.len()
            );
        }
    }

    /// Replace the item collection with a transformation of the previous
    /// list. Full replacement is `|_| new_list`.
    pub async fn set_items<F>(&mut self, update: F) -> RemoteSync
    where
        F: FnOnce(&[CatalogItem]) -> Vec<CatalogItem>,
    {
        self.items = update(&self.items);
        self.persist(ITEMS_SNAPSHOT, &self.items).await;
        self.push_items().await
    }

    pub async fn set_testimonials<F>(&mut self, update: F) -> RemoteSync
    where
        F: FnOnce(&[Testimonial]) -> Vec<Testimonial>,
    {
        self.testimonials = update(&self.testimonials);
        self.persist(TESTIMONIALS_SNAPSHOT, &self.testimonials).await;
        self.push_testimonials().await
    }

    pub async fn set_case_studies<F>(&mut self, update: F) -> RemoteSync
    where
        F: FnOnce(&[CaseStudy]) -> Vec<CaseStudy>,
    {
        self.case_studies = update(&self.case_studies);
        self.persist(CASE_STUDIES_SNAPSHOT, &self.case_studies).await;
        self.push_case_studies().await
    }

    /// Merge a partial settings patch; `None` fields are untouched.
    pub async fn update_settings(&mut self, patch: SettingsPatch) -> RemoteSync {
        if let Some(code) = patch.currency_code {
            self.settings.currency_code = code;
        }
        if let Some(symbol) = patch.currency_symbol {
            self.settings.currency_symbol = Some(symbol);
        }
        if let Some(hero) = patch.hero_image {
            self.settings.hero_image = Some(hero);
        }
        self.persist(SETTINGS_SNAPSHOT, &self.settings).await;
        self.push_settings().await
    }

    /// Insert or update one item by id. A blank name blocks the save and
    /// leaves the collection unchanged.
    pub async fn upsert_item(&mut self, item: CatalogItem) -> Result<RemoteSync> {
        validate_non_empty_string("Item name", &item.name)?;
        Ok(self
            .set_items(move |prev| upsert_by_id(prev, item, |i| i.id.as_str()))
            .await)
    }

    pub async fn upsert_testimonial(&mut self, testimonial: Testimonial) -> Result<RemoteSync> {
        validate_non_empty_string("Quote", &testimonial.quote)?;
        if let Some(rating) = testimonial.rating {
            validate_rating("Rating", rating)?;
        }
        let testimonial = Testimonial {
            quote: testimonial.quote.trim().to_string(),
            author: testimonial.author.trim().to_string(),
            role: testimonial.role.trim().to_string(),
            company: testimonial.company.trim().to_string(),
            ..testimonial
        };
        Ok(self
            .set_testimonials(move |prev| upsert_by_id(prev, testimonial, |t| t.id.as_str()))
            .await)
    }

    pub async fn upsert_case_study(&mut self, case_study: CaseStudy) -> Result<RemoteSync> {
        validate_non_empty_string("Title", &case_study.title)?;
        Ok(self
            .set_case_studies(move |prev| upsert_by_id(prev, case_study, |c| c.id.as_str()))
            .await)
    }

    pub async fn delete_item(&mut self, id: &str) -> RemoteSync {
        let id = id.to_string();
        self.set_items(move |prev| prev.iter().filter(|i| i.id != id).cloned().collect())
            .await
    }

    pub async fn delete_testimonial(&mut self, id: &str) -> RemoteSync {
        let id = id.to_string();
        self.set_testimonials(move |prev| prev.iter().filter(|t| t.id != id).cloned().collect())
            .await
    }

    pub async fn delete_case_study(&mut self, id: &str) -> RemoteSync {
        let id = id.to_string();
        self.set_case_studies(move |prev| prev.iter().filter(|c| c.id != id).cloned().collect())
            .await
    }

    /// Point one image field of an item at a new reference (typically the
    /// public URL an upload returned).
    pub async fn set_item_image(
        &mut self,
        id: &str,
        field: ImageField,
        reference: String,
    ) -> Result<RemoteSync> {
        if !self.items.iter().any(|i| i.id == id) {
            return Err(CmsError::validation(format!("No item with id {}", id)));
        }
        let id = id.to_string();
        Ok(self
            .set_items(move |prev| {
                prev.iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            match field {
                                ImageField::Image => item.image = reference.clone(),
                                ImageField::BeforeImage => {
                                    item.before_image = Some(reference.clone())
                                }
                                ImageField::AfterImage => {
                                    item.after_image = Some(reference.clone())
                                }
                            }
                        }
                        item
                    })
                    .collect()
            })
            .await)
    }

    /// Upload an image through the remote backend and point the item field
    /// at the returned public URL. Without a remote the local reference is
    /// used directly.
    pub async fn upload_item_image(
        &mut self,
        id: &str,
        field: ImageField,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<RemoteSync> {
        let reference = match &self.remote {
            Some(remote) => remote.upload_image(id, field, file_name, bytes).await?,
            None => file_name.to_string(),
        };
        self.set_item_image(id, field, reference).await
    }

    /// `{symbol}{amount}`; no locale-aware grouping.
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{}", self.settings.symbol(), amount)
    }

    async fn read_snapshot<T: DeserializeOwned>(&self, name: &str, fallback: T) -> T {
        let bytes = match self.storage.read_file(name).await {
            Ok(bytes) => bytes,
            Err(_) => return fallback,
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    "Snapshot {} is malformed ({}); keeping a copy aside and using defaults",
                    name,
                    err
                );
                if let Err(err) = self.storage.quarantine(name).await {
                    tracing::warn!("Could not quarantine snapshot {}: {}", name, err);
                }
                fallback
            }
        }
    }

    async fn persist<T: Serialize>(&self, name: &str, value: &T) {
        match serde_json::to_vec_pretty(value) {
            Ok(bytes) => {
                if let Err(err) = self.storage.write_file(name, &bytes).await {
                    tracing::warn!("Failed to persist snapshot {}: {}", name, err);
                }
            }
            Err(err) => tracing::warn!("Failed to encode snapshot {}: {}", name, err),
        }
    }

    async fn push_items(&self) -> RemoteSync {
        let Some(remote) = &self.remote else {
            return RemoteSync::Skipped;
        };
        match remote.save_items(&self.items).await {
            Ok(()) => RemoteSync::Synced,
            Err(err) => {
                tracing::warn!("Remote items upsert failed: {}", err);
                RemoteSync::Failed(err)
            }
        }
    }

    async fn push_testimonials(&self) -> RemoteSync {
        let Some(remote) = &self.remote else {
            return RemoteSync::Skipped;
        };
        match remote.save_testimonials(&self.testimonials).await {
            Ok(()) => RemoteSync::Synced,
            Err(err) => {
                tracing::warn!("Remote testimonials upsert failed: {}", err);
                RemoteSync::Failed(err)
            }
        }
    }

    async fn push_case_studies(&self) -> RemoteSync {
        let Some(remote) = &self.remote else {
            return RemoteSync::Skipped;
        };
        match remote.save_case_studies(&self.case_studies).await {
            Ok(()) => RemoteSync::Synced,
            Err(err) => {
                tracing::warn!("Remote case studies upsert failed: {}", err);
                RemoteSync::Failed(err)
            }
        }
    }

    async fn push_settings(&self) -> RemoteSync {
        let Some(remote) = &self.remote else {
            return RemoteSync::Skipped;
        };
        match remote.save_settings(&self.settings).await {
            Ok(()) => RemoteSync::Synced,
            Err(err) => {
                tracing::warn!("Remote settings upsert failed: {}", err);
                RemoteSync::Failed(err)
            }
        }
    }
}

fn fetch_or_empty<T>(table: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("Remote {} fetch failed: {}", table, err);
            Vec::new()
        }
    }
}

/// Replace the matching entry in place, preserving its position; append
/// when the id is new.
fn upsert_by_id<T: Clone>(list: &[T], entry: T, id_of: impl Fn(&T) -> &str) -> Vec<T> {
    let mut next: Vec<T> = list.to_vec();
    let entry_id = id_of(&entry).to_string();
    match next.iter().position(|existing| id_of(existing) == entry_id) {
        Some(idx) => next[idx] = entry,
        None => next.push(entry),
    }
    next
}
