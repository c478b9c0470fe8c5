use pulse_scoring::HypeLevel;
use serde::Serialize;
use sqlx::{Executor, Postgres};

/// How a project's TVL is recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TvlBasis {
    /// Fixed USD amount
    Usd(f64),
    /// Amount of ETH, valued at the current ETH/USD price
    Eth(f64),
}

impl TvlBasis {
    pub fn resolve(&self, eth_price: f64) -> f64 {
        match *self {
            TvlBasis::Usd(usd) => usd,
            TvlBasis::Eth(eth) => eth * eth_price,
        }
    }
}

/// Project catalogue entry as stored
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub tvl: TvlBasis,
    pub wallets: u64,
    pub mentions: u64,
    pub commits: u64,
    pub score: f64,
    pub hype: HypeLevel,
    pub description: String,
    pub twitter_handle: Option<String>,
}

/// Project as served by the API - matches frontend Project interface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub tvl: f64,
    pub wallets: u64,
    pub mentions: u64,
    pub commits: u64,
    pub score: f64,
    pub hype: HypeLevel,
    pub price: f64,
    pub description: String,
    pub twitter_handle: Option<String>,
}

impl ProjectRecord {
    /// Value the record at the given ETH/USD price
    pub fn resolve(&self, eth_price: f64) -> Project {
        Project {
            id: self.id.clone(),
            name: self.name.clone(),
            chain: self.chain.clone(),
            tvl: self.tvl.resolve(eth_price),
            wallets: self.wallets,
            mentions: self.mentions,
            commits: self.commits,
            score: self.score,
            hype: self.hype,
            price: eth_price,
            description: self.description.clone(),
            twitter_handle: self.twitter_handle.clone(),
        }
    }
}

/// Row of the `projects` table.
///
/// ```sql
/// CREATE TABLE projects (
///     id              TEXT PRIMARY KEY,
///     name            TEXT NOT NULL,
///     chain           TEXT NOT NULL,
///     tvl_usd         DOUBLE PRECISION,
///     tvl_eth         DOUBLE PRECISION,
///     wallets         BIGINT,
///     mentions        BIGINT,
///     commits         BIGINT,
///     score           DOUBLE PRECISION,
///     hype            TEXT,
///     description     TEXT,
///     twitter_handle  TEXT,
///     created_at      TIMESTAMPTZ DEFAULT NOW()
/// );
/// ```
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub tvl_usd: Option<f64>,
    pub tvl_eth: Option<f64>,
    pub wallets: Option<i64>,
    pub mentions: Option<i64>,
    pub commits: Option<i64>,
    pub score: Option<f64>,
    pub hype: Option<String>,
    pub description: Option<String>,
    pub twitter_handle: Option<String>,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        let tvl = match (row.tvl_eth, row.tvl_usd) {
            (Some(eth), _) => TvlBasis::Eth(eth),
            (None, usd) => TvlBasis::Usd(usd.unwrap_or(0.0)),
        };
        let wallets = non_negative(row.wallets);
        let mentions = non_negative(row.mentions);
        let score = row.score.unwrap_or(0.0);

        // Unlabelled rows get a label derived from their figures
        let hype = row
            .hype
            .as_deref()
            .and_then(|h| h.parse().ok())
            .unwrap_or_else(|| HypeLevel::classify(mentions, score));

        Self {
            id: row.id,
            name: row.name,
            chain: row.chain,
            tvl,
            wallets,
            mentions,
            commits: non_negative(row.commits),
            score,
            hype,
            description: row.description.unwrap_or_default(),
            twitter_handle: row.twitter_handle.filter(|h| !h.is_empty()),
        }
    }
}

fn non_negative(value: Option<i64>) -> u64 {
    value.and_then(|v| u64::try_from(v).ok()).unwrap_or(0)
}

impl ProjectRow {
    /// List all projects
    pub async fn find_all<'c, E>(connection: E) -> Result<Vec<ProjectRow>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, chain, tvl_usd, tvl_eth, wallets, mentions, commits,
                   score, hype, description, twitter_handle
            FROM projects
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(connection)
        .await
    }

    /// Find project by id
    pub async fn find_by_id<'c, E>(
        id: &str,
        connection: E,
    ) -> Result<Option<ProjectRow>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, chain, tvl_usd, tvl_eth, wallets, mentions, commits,
                   score, hype, description, twitter_handle
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(connection)
        .await
    }
}
