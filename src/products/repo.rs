use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Product {
    pub async fn list(db: &SqlitePool, skip: i64, limit: i64) -> anyhow::Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock_quantity, image_url, created_at
            FROM products
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock_quantity, image_url, created_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    pub async fn create(
        db: &SqlitePool,
        name: &str,
        description: Option<&str>,
        price: f64,
        stock_quantity: i64,
        image_url: Option<&str>,
    ) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, stock_quantity, image_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, description, price, stock_quantity, image_url, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock_quantity)
        .bind(image_url)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(product)
    }

    /// Full replace: every mutable field is set from the arguments; omitted
    /// optional fields become NULL. Returns None when the row is absent.
    pub async fn replace(
        db: &SqlitePool,
        id: i64,
        name: &str,
        description: Option<&str>,
        price: f64,
        stock_quantity: i64,
        image_url: Option<&str>,
    ) -> anyhow::Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, stock_quantity = ?, image_url = ?
            WHERE id = ?
            RETURNING id, name, description, price, stock_quantity, image_url, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock_quantity)
        .bind(image_url)
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(product)
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
