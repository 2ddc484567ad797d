#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::product::{Feature, FeatureTag, Product, ProductSummary};
    use crate::models::review::{Review, ReviewDraft};
    use chrono::{SecondsFormat, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;


    pub const DEMO_TOKEN: &str = "demo-token";

    /// Lower-cased words joined by single dashes. Unicode letters are kept.
    pub fn slugify(name: &str) -> String {
        name.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct UserRow {
        pub id: i64,
        pub name: String,
    }

    #[derive(Debug, Clone)]
    pub struct NewProduct {
        pub id: String,
        pub name: String,
        pub description: Option<String>,
        pub logo: Option<String>,
        pub website_url: Option<String>,
        pub primary_color: Option<String>,
        pub secondary_color: Option<String>,
        pub allow_anonymous_vote: bool,
        pub public: bool,
    }

    #[derive(Debug, Clone)]
    pub struct NewFeature {
        pub id: String,
        pub product_id: String,
        pub name: String,
        pub description: Option<String>,
        pub type_id: Option<i64>,
        pub status_id: Option<i64>,
        pub public: bool,
    }

    /// Who is voting: a known user, or an anonymous client by address.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Voter {
        User(i64),
        Anonymous(String),
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum VoteOutcome {
        /// New vote count of the feature.
        Counted(i64),
        AlreadyVoted,
        AnonymousNotAllowed,
        UnknownFeature,
    }

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("[DB] Connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "PRAGMA foreign_keys = ON;

                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    token TEXT NOT NULL UNIQUE,
                    is_admin INTEGER NOT NULL DEFAULT 0
                );

                CREATE TABLE IF NOT EXISTS products (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    slug TEXT NOT NULL UNIQUE,
                    logo TEXT,
                    website_url TEXT,
                    description TEXT,
                    allow_anonymous_vote INTEGER NOT NULL DEFAULT 1,
                    primary_color TEXT,
                    secondary_color TEXT,
                    public INTEGER NOT NULL DEFAULT 1,
                    rating REAL,
                    num_reviews INTEGER NOT NULL DEFAULT 0,
                    created_at TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS feature_types (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    color TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS feature_statuses (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    color TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS features (
                    id TEXT PRIMARY KEY,
                    product_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    slug TEXT NOT NULL,
                    description TEXT,
                    type_id INTEGER,
                    status_id INTEGER,
                    votes INTEGER NOT NULL DEFAULT 0,
                    public INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE,
                    FOREIGN KEY (type_id) REFERENCES feature_types(id) ON DELETE SET NULL,
                    FOREIGN KEY (status_id) REFERENCES feature_statuses(id) ON DELETE SET NULL
                );

                CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    product_id TEXT,
                    user_id INTEGER,
                    name TEXT,
                    rating INTEGER NOT NULL DEFAULT 0,
                    comment TEXT,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE SET NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE SET NULL
                );

                CREATE TABLE IF NOT EXISTS votes (
                    id INTEGER PRIMARY KEY,
                    user_id INTEGER,
                    product_id TEXT NOT NULL,
                    feature_id TEXT NOT NULL,
                    ip TEXT,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE,
                    FOREIGN KEY (feature_id) REFERENCES features(id) ON DELETE CASCADE
                );
                CREATE INDEX IF NOT EXISTS votes_ip ON votes (ip);",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating schema: {}", e);
                e
            })?;
            Ok(())
        }

        pub async fn is_empty(&self) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
            Ok(count == 0)
        }

        pub async fn insert_user(
            &self,
            name: &str,
            email: &str,
            token: &str,
            is_admin: bool,
        ) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO users (name, email, token, is_admin) VALUES (?, ?, ?, ?)",
                params![name, email, token, is_admin],
            )?;
            Ok(conn.last_insert_rowid())
        }

        pub async fn user_by_token(&self, token: &str) -> Result<Option<UserRow>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, name FROM users WHERE token = ?",
                [token],
                |row| {
                    Ok(UserRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()
        }

        pub async fn insert_product(&self, product: &NewProduct) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO products (id, name, slug, logo, website_url, description,
                    allow_anonymous_vote, primary_color, secondary_color, public, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    &product.id,
                    product.name.trim(),
                    slugify(&product.name),
                    &product.logo,
                    &product.website_url,
                    product.description.as_deref().map(str::trim),
                    product.allow_anonymous_vote,
                    &product.primary_color,
                    &product.secondary_color,
                    product.public,
                    now()
                ],
            )?;
            log!("[DB] Product inserted: {}", product.id);
            Ok(())
        }

        pub async fn insert_feature_type(&self, name: &str, color: &str) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute("INSERT INTO feature_types (name, color) VALUES (?, ?)", [name, color])?;
            Ok(conn.last_insert_rowid())
        }

        pub async fn insert_feature_status(&self, name: &str, color: &str) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute("INSERT INTO feature_statuses (name, color) VALUES (?, ?)", [name, color])?;
            Ok(conn.last_insert_rowid())
        }

        pub async fn insert_feature(&self, feature: &NewFeature) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO features (id, product_id, name, slug, description, type_id, status_id, public, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    &feature.id,
                    &feature.product_id,
                    feature.name.trim(),
                    slugify(&feature.name),
                    &feature.description,
                    feature.type_id,
                    feature.status_id,
                    feature.public,
                    now()
                ],
            )?;
            Ok(())
        }

        pub async fn get_products(&self) -> Result<Vec<ProductSummary>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, name, description, logo, primary_color, rating, num_reviews
                FROM products WHERE public = 1 ORDER BY created_at, name",
            )?;
            let products = stmt
                .query_map([], |row| {
                    Ok(ProductSummary {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        logo: row.get(3)?,
                        primary_color: row.get(4)?,
                        rating: row.get(5)?,
                        num_reviews: row.get(6)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            log!("[DB] Fetched {} products", products.len());
            Ok(products)
        }

        /// Product with its public features, every type and status, and its reviews.
        pub async fn get_product(&self, id: &str) -> Result<Option<Product>, Error> {
            let conn = self.conn.lock().await;
            let product = conn
                .query_row(
                    "SELECT id, name, description, logo, primary_color, secondary_color,
                        website_url, rating, num_reviews
                    FROM products WHERE id = ?",
                    [id],
                    |row| {
                        Ok(Product {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            description: row.get(2)?,
                            logo: row.get(3)?,
                            primary_color: row.get(4)?,
                            secondary_color: row.get(5)?,
                            website_url: row.get(6)?,
                            rating: row.get(7)?,
                            num_reviews: row.get(8)?,
                            features: Vec::new(),
                            feature_types: Vec::new(),
                            feature_statuses: Vec::new(),
                            reviews: Vec::new(),
                        })
                    },
                )
                .optional()?;

            let mut product = match product {
                Some(product) => product,
                None => return Ok(None),
            };

            let mut features = conn.prepare(
                "SELECT id, name, slug, description, votes, type_id, status_id, created_at
                FROM features WHERE product_id = ? AND public = 1
                ORDER BY created_at, rowid",
            )?;
            product.features = features
                .query_map([id], |row| {
                    Ok(Feature {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        slug: row.get(2)?,
                        description: row.get(3)?,
                        votes: row.get(4)?,
                        kind: row.get(5)?,
                        status: row.get(6)?,
                        created_at: row.get(7)?,
                    })
                })?
                .collect::<Result<_, _>>()?;

            product.feature_types = load_tags(&conn, "feature_types")?;
            product.feature_statuses = load_tags(&conn, "feature_statuses")?;

            let mut reviews = conn.prepare(
                "SELECT id, product_id, user_id, name, rating, comment, created_at
                FROM reviews WHERE product_id = ? ORDER BY id",
            )?;
            product.reviews = reviews
                .query_map([id], review_from_row)?
                .collect::<Result<_, _>>()?;

            Ok(Some(product))
        }

        pub async fn product_exists(&self, id: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM products WHERE id = ?", [id], |row| row.get(0))?;
            Ok(count > 0)
        }

        pub async fn has_reviewed(&self, product_id: &str, user_id: i64) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM reviews WHERE product_id = ? AND user_id = ?",
                params![product_id, user_id],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        }

        /// Stores a review and refreshes the product's review count and average rating.
        pub async fn insert_review(
            &self,
            product_id: &str,
            user: &UserRow,
            draft: &ReviewDraft,
        ) -> Result<Review, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO reviews (product_id, user_id, name, rating, comment, created_at)
                VALUES (?, ?, ?, ?, ?, ?)",
                params![product_id, user.id, &user.name, draft.rating, draft.comment.trim(), now()],
            )?;
            let review_id = tx.last_insert_rowid();

            tx.execute(
                "UPDATE products SET
                    num_reviews = (SELECT COUNT(*) FROM reviews WHERE product_id = ?1),
                    rating = (SELECT AVG(rating) FROM reviews WHERE product_id = ?1)
                WHERE id = ?1",
                [product_id],
            )?;

            let review = tx.query_row(
                "SELECT id, product_id, user_id, name, rating, comment, created_at
                FROM reviews WHERE id = ?",
                [review_id],
                review_from_row,
            )?;
            tx.commit()?;
            log!("[DB] Review {} stored for product {}", review_id, product_id);
            Ok(review)
        }

        pub async fn record_vote(
            &self,
            product_id: &str,
            feature_id: &str,
            voter: &Voter,
        ) -> Result<VoteOutcome, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let owner = tx
                .query_row(
                    "SELECT f.product_id, p.allow_anonymous_vote
                    FROM features f JOIN products p ON p.id = f.product_id
                    WHERE f.id = ? AND f.public = 1",
                    [feature_id],
                    |row| Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?)),
                )
                .optional()?;

            let allow_anonymous = match owner {
                Some((owner_id, allow)) if owner_id == product_id => allow,
                _ => return Ok(VoteOutcome::UnknownFeature),
            };

            let (user_id, ip) = match voter {
                Voter::User(id) => (Some(*id), None),
                Voter::Anonymous(_) if !allow_anonymous => {
                    return Ok(VoteOutcome::AnonymousNotAllowed)
                }
                Voter::Anonymous(ip) => (None, Some(ip.as_str())),
            };

            let previous: i64 = tx.query_row(
                "SELECT COUNT(*) FROM votes
                WHERE feature_id = ?1
                  AND ((?2 IS NOT NULL AND user_id = ?2) OR (?2 IS NULL AND user_id IS NULL AND ip = ?3))",
                params![feature_id, user_id, ip],
                |row| row.get(0),
            )?;
            if previous > 0 {
                return Ok(VoteOutcome::AlreadyVoted);
            }

            tx.execute(
                "INSERT INTO votes (user_id, product_id, feature_id, ip, created_at) VALUES (?, ?, ?, ?, ?)",
                params![user_id, product_id, feature_id, ip, now()],
            )?;
            tx.execute("UPDATE features SET votes = votes + 1 WHERE id = ?", [feature_id])?;
            let votes: i64 =
                tx.query_row("SELECT votes FROM features WHERE id = ?", [feature_id], |row| row.get(0))?;
            tx.commit()?;
            log!("[DB] Feature {} now has {} votes", feature_id, votes);
            Ok(VoteOutcome::Counted(votes))
        }

        /// Inserts a demo product and user into an empty database. Returns false if data already exists.
        pub async fn seed_demo(&self) -> Result<bool, Error> {
            if !self.is_empty().await? {
                return Ok(false);
            }
            log!("[DB] Seeding demo data");

            let product_id = uuid::Uuid::new_v4().to_string();
            self.insert_product(&NewProduct {
                id: product_id.clone(),
                name: "ProdVote".into(),
                description: Some("Vote on what we build next and tell us what you think.".into()),
                logo: None,
                website_url: Some("https://example.com".into()),
                primary_color: Some("#0d6efd".into()),
                secondary_color: Some("#e7f1ff".into()),
                allow_anonymous_vote: true,
                public: true,
            })
            .await?;

            let feature = self.insert_feature_type("Feature", "#0d6efd").await?;
            let bug = self.insert_feature_type("Bug", "#dc3545").await?;
            let improvement = self.insert_feature_type("Improvement", "#6f42c1").await?;
            let planned = self.insert_feature_status("Planned", "#6c757d").await?;
            let in_progress = self.insert_feature_status("In Progress", "#fd7e14").await?;
            let done = self.insert_feature_status("Done", "#198754").await?;

            for (name, type_id, status_id) in [
                ("Dark mode", feature, planned),
                ("Export votes to CSV", improvement, in_progress),
                ("Vote counter resets on reload", bug, done),
                ("Email digest of new features", feature, planned),
            ] {
                self.insert_feature(&NewFeature {
                    id: uuid::Uuid::new_v4().to_string(),
                    product_id: product_id.clone(),
                    name: name.into(),
                    description: None,
                    type_id: Some(type_id),
                    status_id: Some(status_id),
                    public: true,
                })
                .await?;
            }

            self.insert_user("Demo User", "demo@example.com", DEMO_TOKEN, false).await?;
            log!("[DB] Demo product {} seeded; demo session token is {:?}", product_id, DEMO_TOKEN);
            Ok(true)
        }
    }

    fn load_tags(conn: &Connection, table: &str) -> Result<Vec<FeatureTag>, Error> {
        let mut stmt = conn.prepare(&format!("SELECT id, name, color FROM {} ORDER BY id", table))?;
        let tags = stmt
            .query_map([], |row| {
                Ok(FeatureTag {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            id: row.get(0)?,
            product: row.get(1)?,
            user: row.get(2)?,
            name: row.get(3)?,
            rating: row.get(4)?,
            comment: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{
    slugify, Database, NewFeature, NewProduct, UserRow, VoteOutcome, Voter, DEMO_TOKEN,
};
