//! Product repository.

use sqlx::MySqlPool;

use crate::models::{NewProduct, Product, UpdateProduct};

use super::DbError;

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a listing for the given owner, returning the stored record.
    pub async fn create(&self, user_id: i64, new: NewProduct) -> Result<Product, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO Products
                (user_id, name, description, product_categories_sub_id, location_id,
                 dropoff_distance, price_full, price_half, image, minimum_age)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.product_categories_sub_id)
        .bind(new.location_id)
        .bind(new.dropoff_distance)
        .bind(new.price_full)
        .bind(new.price_half)
        .bind(&new.image)
        .bind(new.minimum_age)
        .execute(self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    /// Fetch a single product by id.
    pub async fn get(&self, product_id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>("SELECT * FROM Products WHERE id = ? LIMIT 1")
            .bind(product_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "product",
                id: product_id.to_string(),
            })
    }

    /// List every product owned by a user, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM Products WHERE user_id = ? ORDER BY created_on DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Apply a partial update; absent fields keep their stored value.
    pub async fn update(
        &self,
        product_id: i64,
        changes: UpdateProduct,
    ) -> Result<Product, DbError> {
        sqlx::query(
            r#"
            UPDATE Products SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                product_categories_sub_id = COALESCE(?, product_categories_sub_id),
                location_id = COALESCE(?, location_id),
                dropoff_distance = COALESCE(?, dropoff_distance),
                price_full = COALESCE(?, price_full),
                price_half = COALESCE(?, price_half),
                image = COALESCE(?, image),
                minimum_age = COALESCE(?, minimum_age)
            WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.product_categories_sub_id)
        .bind(changes.location_id)
        .bind(changes.dropoff_distance)
        .bind(changes.price_full)
        .bind(changes.price_half)
        .bind(&changes.image)
        .bind(changes.minimum_age)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        // rows_affected is 0 for both no-op updates and missing rows;
        // the follow-up read distinguishes them
        self.get(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_roundtrip() {
        let pool = crate::db::create_pool(&std::env::var("DATABASE_URL").unwrap())
            .await
            .unwrap();
        let repo = ProductRepo::new(&pool);

        let created = repo
            .create(
                1,
                NewProduct {
                    name: "cordless drill".into(),
                    description: None,
                    product_categories_sub_id: None,
                    location_id: Some(1),
                    dropoff_distance: Some(10),
                    price_full: Some(12.50),
                    price_half: None,
                    image: None,
                    minimum_age: None,
                },
            )
            .await
            .unwrap();

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "cordless drill");
    }
}
