//! Generic in-memory collection shared by every resource type
//!
//! A [`Collection`] owns one insertion-ordered map from id to record behind an
//! async read/write lock. Every mutation, including the uniqueness scan,
//! runs under the write lock so concurrent requests cannot break the id or
//! per-resource uniqueness invariants.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A record type stored in a [`Collection`].
///
/// Implementors describe how to build themselves from the Create and Replace
/// payloads and how to merge an Update payload onto an existing record.
pub trait Resource: Clone + Send + Sync + 'static {
    type Create: Send;
    type Update: Send;
    type Replace: Send;

    /// Human readable name used in error messages ("Book", "Library", ...)
    const NAME: &'static str;

    fn id(&self) -> Uuid;

    fn from_create(data: Self::Create, now: DateTime<Utc>) -> Self;

    /// Apply only the fields present in `data`
    fn apply_update(&mut self, data: Self::Update);

    /// Rebuild the record from a full payload, keeping only `id`
    fn from_replace(id: Uuid, data: Self::Replace, now: DateTime<Utc>) -> Self;

    /// Reject `self` if it collides with `other`, a different record of the
    /// same collection.
    fn check_unique(&self, _other: &Self) -> AppResult<()> {
        Ok(())
    }
}

/// Offset/limit slice applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Page {
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }
}

/// Thread-safe map from id to record for one resource type
pub struct Collection<R: Resource> {
    records: Arc<RwLock<IndexMap<Uuid, R>>>,
}

impl<R: Resource> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<R: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", R::NAME))
}

fn check_against_others<R: Resource>(records: &IndexMap<Uuid, R>, candidate: &R) -> AppResult<()> {
    records
        .values()
        .filter(|other| other.id() != candidate.id())
        .try_for_each(|other| candidate.check_unique(other))
}

impl<R: Resource> Collection<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Insert a new record, rejecting a duplicate id or a uniqueness violation
    pub async fn create(&self, data: R::Create) -> AppResult<R> {
        let record = R::from_create(data, Utc::now());
        let mut records = self.records.write().await;

        if records.contains_key(&record.id()) {
            return Err(AppError::Conflict(format!(
                "{} with this ID already exists",
                R::NAME
            )));
        }
        check_against_others(&records, &record)?;

        records.insert(record.id(), record.clone());
        Ok(record)
    }

    /// Records matching `filter`, in insertion order, sliced by `page`
    pub async fn list<F>(&self, filter: F, page: Page) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let records = self.records.read().await;
        let matching = records.values().filter(|record| filter(record)).skip(page.offset);

        match page.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<R> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(not_found::<R>)
    }

    /// Merge a partial update; nothing is committed if the result collides
    pub async fn update(&self, id: Uuid, data: R::Update) -> AppResult<R> {
        let mut records = self.records.write().await;

        let mut updated = records.get(&id).cloned().ok_or_else(not_found::<R>)?;
        updated.apply_update(data);
        check_against_others(&records, &updated)?;

        records.insert(id, updated.clone());
        Ok(updated)
    }

    /// Overwrite every field but `id`, keeping the record's position
    pub async fn replace(&self, id: Uuid, data: R::Replace) -> AppResult<R> {
        let mut records = self.records.write().await;

        if !records.contains_key(&id) {
            return Err(not_found::<R>());
        }
        let replaced = R::from_replace(id, data, Utc::now());
        check_against_others(&records, &replaced)?;

        records.insert(id, replaced.clone());
        Ok(replaced)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.records
            .write()
            .await
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(not_found::<R>)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
