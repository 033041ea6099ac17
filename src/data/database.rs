//! Subscription and user tables
//!
//! A small SQLite schema: subscription plans and users with a plan name.
//! Seeding only happens on empty tables, so setup can run on every start.

use std::fmt;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::error::Result;

/// Plans inserted into an empty `subscription_plans` table
const SEED_PLANS: [&str; 2] = ["Basic", "Premium"];

/// Users inserted into an empty `users` table
const SEED_USERS: [(i64, &str, &str); 3] = [
    (1, "Alice", "Premium"),
    (2, "Bob", "Basic"),
    (3, "Charlie", "Premium"),
];

/// Plan name selected by [`DatabaseManager::premium_users`]
pub const PREMIUM_PLAN: &str = "Premium";

/// A subscription plan row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionPlan(id={}, name='{}')", self.id, self.name)
    }
}

/// A user row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub plan: String,
}

/// Owns the connection pool and the schema
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Connect using the configured URL and pool size
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        Self::connect_with(&config.database_url, config.database_max_connections).await
    }

    /// Connect to `url` with a single pooled connection
    ///
    /// A single connection keeps `sqlite::memory:` databases consistent.
    pub async fn connect_url(url: &str) -> Result<Self> {
        Self::connect_with(url, 1).await
    }

    async fn connect_with(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        tracing::debug!(url = %url, max_connections = max_connections, "Database connected");
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create `subscription_plans` and seed it when empty
    pub async fn setup_database(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS subscription_plans (
                id INTEGER PRIMARY KEY,
                name TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // The emptiness check and the inserts are one statement, so two
        // processes starting together cannot both seed.
        let sql = format!(
            "INSERT INTO subscription_plans (name) \
             SELECT * FROM (VALUES {}) \
             WHERE NOT EXISTS (SELECT 1 FROM subscription_plans)",
            placeholders(SEED_PLANS.len(), 1)
        );
        let mut insert = sqlx::query(&sql);
        for name in SEED_PLANS {
            insert = insert.bind(name);
        }
        let seeded = insert.execute(&self.pool).await?.rows_affected();

        if seeded > 0 {
            tracing::info!(plans = seeded, "Seeded subscription plans");
        }

        Ok(())
    }

    /// Create `users` and seed it when empty
    pub async fn seed_users(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER,
                name TEXT,
                plan TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let sql = format!(
            "INSERT INTO users (id, name, plan) \
             SELECT * FROM (VALUES {}) \
             WHERE NOT EXISTS (SELECT 1 FROM users)",
            placeholders(SEED_USERS.len(), 3)
        );
        let mut insert = sqlx::query(&sql);
        for (id, name, plan) in SEED_USERS {
            insert = insert.bind(id).bind(name).bind(plan);
        }
        let seeded = insert.execute(&self.pool).await?.rows_affected();

        if seeded > 0 {
            tracing::info!(users = seeded, "Seeded users");
        }

        Ok(())
    }

    /// All subscription plans ordered by ID
    pub async fn subscription_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        let plans = sqlx::query_as::<_, SubscriptionPlan>(
            "SELECT id, name FROM subscription_plans ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    /// Users on the Premium plan ordered by ID
    pub async fn premium_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, plan FROM users WHERE plan = ? ORDER BY id",
        )
        .bind(PREMIUM_PLAN)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Close the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// `(?, ?), (?, ?)` style row list for a multi-row `VALUES` clause
fn placeholders(rows: usize, columns: usize) -> String {
    let row = format!("({})", vec!["?"; columns].join(", "));
    vec![row; rows].join(", ")
}
