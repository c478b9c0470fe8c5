use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

pub mod entity;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use entity::{
    DevActivity, Project, ProjectRecord, ProjectRow, ProjectScore, Signal, SocialMetrics, TvlBasis,
};
pub use store::{PgProjectStore, ProjectStore, SeedCatalogue};

pub mod defaults {
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
}

/// Connect to the Postgres catalogue
pub async fn initialize_database(
    database_url: &str,
    max_connections: u32,
) -> Result<Pool<Postgres>, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
