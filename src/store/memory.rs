//! In-memory analysis store
//!
//! A `RwLock`-guarded map keyed by id. Creation stamps id and timestamp
//! under the write lock, so concurrent creates serialize and never collide.
//! Reads clone records out under the read lock and never observe a
//! partially-written record.
//!
//! Listing order is reverse-chronological by `analyzed_at`. Timestamps from
//! back-to-back creates can be equal at clock resolution, so a monotonic
//! insertion sequence breaks ties and keeps the order total and stable.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::query;
use crate::schema::{Analysis, InsertAnalysis};

use super::errors::{StoreError, StoreResult};

struct Entry {
    analysis: Analysis,
    seq: u64,
}

#[derive(Default)]
struct StoreInner {
    records: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// Owner of the live analysis collection.
///
/// Explicitly constructed (starts empty), explicitly shared by handle; no
/// ambient global state. All mutation goes through `create` and `delete`.
#[derive(Default)]
pub struct AnalysisStore {
    inner: RwLock<StoreInner>,
}

impl AnalysisStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a validated creation payload.
    ///
    /// Assigns a fresh v4 id and the current timestamp, inserts the record,
    /// and returns the stored value. Infallible for validated payloads short
    /// of lock poisoning.
    pub fn create(&self, payload: InsertAnalysis) -> StoreResult<Analysis> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        // Id and timestamp are assigned under the write lock so two
        // concurrent creates cannot interleave partially-built records.
        let analysis = Analysis {
            id: Uuid::new_v4(),
            claim: payload.claim,
            context: payload.context,
            verdict: payload.verdict,
            reasoning: payload.reasoning,
            confidence_score: payload.confidence_score,
            impact_mode: payload.impact_mode,
            analyzed_at: Utc::now(),
            source_urls: payload.source_urls,
        };

        let seq = inner.next_seq;
        inner.next_seq += 1;

        let stored = analysis.clone();
        inner.records.insert(analysis.id, Entry { analysis, seq });

        Ok(stored)
    }

    /// Fetch one record by id, `NotFound` on miss
    pub fn get(&self, id: Uuid) -> StoreResult<Analysis> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .records
            .get(&id)
            .map(|e| e.analysis.clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Every live record, most recent first.
    ///
    /// This ordering is the one exposed to all read paths including search,
    /// so history and export views are stable and predictable.
    pub fn list_all(&self) -> StoreResult<Vec<Analysis>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut entries: Vec<&Entry> = inner.records.values().collect();
        entries.sort_by(|a, b| {
            (b.analysis.analyzed_at, b.seq).cmp(&(a.analysis.analyzed_at, a.seq))
        });

        Ok(entries.into_iter().map(|e| e.analysis.clone()).collect())
    }

    /// Live records matching a free-text query, most recent first.
    ///
    /// Matching is delegated to the query engine; an empty query matches
    /// everything, so `search("")` equals `list_all()`.
    pub fn search(&self, text: &str) -> StoreResult<Vec<Analysis>> {
        let mut records = self.list_all()?;
        records.retain(|a| query::matches(a, text));
        Ok(records)
    }

    /// Remove a record if present, reporting whether anything was removed.
    ///
    /// Deleting a missing id is not an error; duplicate deletes (for
    /// example, slow network retries) simply report `false`.
    pub fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.remove(&id).is_some())
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    /// Whether the store holds no live records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
