//! In-memory record stores.
//!
//! The [`Registry`] owns one [`Table`] per entity. Cross-entity references
//! are plain copied ids, so every create path checks its foreign ids against
//! the live records and every delete path walks the dependents downward:
//!
//! ```text
//! user ──< image ──< assessment ── quality metrics
//!                        │
//! model ─────────────────┘   (not cascaded)
//! ```
//!
//! Operations are grouped per entity in the submodules as `impl Registry`
//! blocks. [`SharedRegistry`] puts the registry behind one lock so each
//! request runs as a single transaction.

pub mod assessments;
pub mod cascade;
pub mod images;
pub mod models;
pub mod quality_metrics;
pub mod users;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{Assessment, Image, QualityMetrics, ScoringModel, User};
use crate::services::{RandomScores, ScoreSource};

pub use cascade::{CascadeReport, Deleted};

/// Identifies one of the five stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Users,
    Images,
    Models,
    Assessments,
    QualityMetrics,
}

impl StoreKind {
    /// Singular record name used in messages.
    pub fn record_name(&self) -> &'static str {
        match self {
            Self::Users => "User",
            Self::Images => "Image",
            Self::Models => "Model",
            Self::Assessments => "Assessment",
            Self::QualityMetrics => "Quality metrics",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.record_name())
    }
}

/// Id-keyed collection with a monotonically increasing id counter.
///
/// Ids are never derived from the number of live rows, so an id freed by a
/// delete is never handed out again. Iteration order is ascending id, which
/// is insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Id the next insert will receive.
    pub fn next_id(&self) -> u64 {
        self.last_id + 1
    }

    /// Assign a fresh id, build the row from it and insert it.
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &mut T {
        let id = self.next_id();
        self.last_id = id;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Remove every row matching `pred`, returning the removed rows in id order.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        let doomed: Vec<u64> = self
            .rows
            .iter()
            .filter(|(_, row)| pred(row))
            .map(|(id, _)| *id)
            .collect();

        doomed
            .into_iter()
            .filter_map(|id| self.rows.remove(&id))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop all rows and restart the id counter.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.last_id = 0;
    }
}

impl<T: Clone> Table<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

/// Live record count per store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreCounts {
    pub users: usize,
    pub images: usize,
    pub models: usize,
    pub assessments: usize,
    pub quality_metrics: usize,
}

/// A live record whose foreign id does not resolve.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityViolation {
    pub store: StoreKind,
    pub id: u64,
    pub missing_store: StoreKind,
    pub missing_id: u64,
}

/// Owner of all five stores.
pub struct Registry {
    users: Table<User>,
    images: Table<Image>,
    models: Table<ScoringModel>,
    assessments: Table<Assessment>,
    quality_metrics: Table<QualityMetrics>,
    scores: Box<dyn ScoreSource>,
}

impl Registry {
    /// Create an empty registry drawing scores from entropy.
    pub fn new() -> Self {
        Self::with_score_source(Box::new(RandomScores::new()))
    }

    /// Create an empty registry with a specific score source.
    pub fn with_score_source(scores: Box<dyn ScoreSource>) -> Self {
        Self {
            users: Table::default(),
            images: Table::default(),
            models: Table::default(),
            assessments: Table::default(),
            quality_metrics: Table::default(),
            scores,
        }
    }

    /// Empty every store. No cascade is needed since nothing survives.
    pub fn reset_all(&mut self) -> StoreCounts {
        let cleared = self.counts();
        self.users.clear();
        self.images.clear();
        self.models.clear();
        self.assessments.clear();
        self.quality_metrics.clear();
        cleared
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            images: self.images.len(),
            models: self.models.len(),
            assessments: self.assessments.len(),
            quality_metrics: self.quality_metrics.len(),
        }
    }

    /// Check that `id` is live in `store`, before a dependent insert.
    pub(crate) fn ensure_exists(&self, store: StoreKind, id: u64) -> AppResult<()> {
        let live = match store {
            StoreKind::Users => self.users.contains(id),
            StoreKind::Images => self.images.contains(id),
            StoreKind::Models => self.models.contains(id),
            StoreKind::Assessments => self.assessments.contains(id),
            StoreKind::QualityMetrics => self.quality_metrics.contains(id),
        };

        if live {
            Ok(())
        } else {
            Err(AppError::DanglingReference { store, id })
        }
    }

    /// Scan every owned reference and report the ones that do not resolve.
    ///
    /// Assessment → model edges are excluded: a deleted model leaves its
    /// assessments in place. Also reports assessments missing their metrics.
    #[cfg(test)]
    pub fn integrity_violations(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for image in self.images.iter() {
            if !self.users.contains(image.user_id) {
                violations.push(IntegrityViolation {
                    store: StoreKind::Images,
                    id: image.id,
                    missing_store: StoreKind::Users,
                    missing_id: image.user_id,
                });
            }
        }

        for assessment in self.assessments.iter() {
            if !self.images.contains(assessment.image_id) {
                violations.push(IntegrityViolation {
                    store: StoreKind::Assessments,
                    id: assessment.id,
                    missing_store: StoreKind::Images,
                    missing_id: assessment.image_id,
                });
            }
            let metrics = self
                .quality_metrics
                .iter()
                .filter(|qm| qm.assessment_id == assessment.id)
                .count();
            if metrics != 1 {
                violations.push(IntegrityViolation {
                    store: StoreKind::Assessments,
                    id: assessment.id,
                    missing_store: StoreKind::QualityMetrics,
                    missing_id: assessment.id,
                });
            }
        }

        for qm in self.quality_metrics.iter() {
            if !self.assessments.contains(qm.assessment_id) {
                violations.push(IntegrityViolation {
                    store: StoreKind::QualityMetrics,
                    id: qm.id,
                    missing_store: StoreKind::Assessments,
                    missing_id: qm.assessment_id,
                });
            }
        }

        violations
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry behind a single global mutation lock.
///
/// Every handler takes the lock once and holds it for the whole operation,
/// cascades included, so a create can never interleave with a cascade that
/// is removing its parent.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Acquire the registry for one logical transaction.
    pub fn lock(&self) -> AppResult<MutexGuard<'_, Registry>> {
        Ok(self.inner.lock()?)
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}
