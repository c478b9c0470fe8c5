//! Project catalogue access
//!
//! Handlers depend on [`ProjectStore`] rather than a concrete backend, so the
//! server can run against the built-in seed catalogue or a Postgres table.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    entity::{ProjectRecord, ProjectRow},
    seed,
};

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects in catalogue order
    async fn list(&self) -> Result<Vec<ProjectRecord>, sqlx::Error>;

    /// Find a project by id
    async fn find(&self, id: &str) -> Result<Option<ProjectRecord>, sqlx::Error>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// In-memory catalogue backed by the seed data
#[derive(Debug, Clone)]
pub struct SeedCatalogue {
    projects: Vec<ProjectRecord>,
}

impl SeedCatalogue {
    pub fn new() -> Self {
        Self::with_projects(seed::projects())
    }

    pub fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }
}

impl Default for SeedCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for SeedCatalogue {
    async fn list(&self) -> Result<Vec<ProjectRecord>, sqlx::Error> {
        Ok(self.projects.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<ProjectRecord>, sqlx::Error> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        "seed"
    }
}

/// Catalogue stored in the Postgres `projects` table
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    db_pool: Pool<Postgres>,
}

impl PgProjectStore {
    pub fn new(db_pool: Pool<Postgres>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<ProjectRecord>, sqlx::Error> {
        let rows = ProjectRow::find_all(&self.db_pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: &str) -> Result<Option<ProjectRecord>, sqlx::Error> {
        let row = ProjectRow::find_by_id(id, &self.db_pool).await?;
        Ok(row.map(Into::into))
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
