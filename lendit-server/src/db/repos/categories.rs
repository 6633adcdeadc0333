//! Product category repository.
//!
//! The hierarchy is read-only reference data: major → minor → sub.

use sqlx::MySqlPool;

use crate::models::{CategoryRow, MajorCategory, MinorCategory, SubCategory};

use super::DbError;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// The full hierarchy as flat joined rows.
    pub async fn all(&self) -> Result<Vec<CategoryRow>, DbError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT
                maj.id   AS major_id,
                maj.name AS major_name,
                min.id   AS minor_id,
                min.name AS minor_name,
                sub.id   AS sub_id,
                sub.name AS sub_name
            FROM Product_Categories_Major maj
            JOIN Product_Categories_Minor min ON min.product_categories_major_id = maj.id
            JOIN Product_Categories_Sub sub ON sub.product_categories_minor_id = min.id
            ORDER BY maj.name, min.name, sub.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn majors(&self) -> Result<Vec<MajorCategory>, DbError> {
        let majors = sqlx::query_as::<_, MajorCategory>(
            "SELECT * FROM Product_Categories_Major ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(majors)
    }

    pub async fn major(&self, major_id: i64) -> Result<MajorCategory, DbError> {
        sqlx::query_as::<_, MajorCategory>(
            "SELECT * FROM Product_Categories_Major WHERE id = ? LIMIT 1",
        )
        .bind(major_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "major category",
            id: major_id.to_string(),
        })
    }

    /// Minor categories under one major.
    pub async fn minors(&self, major_id: i64) -> Result<Vec<MinorCategory>, DbError> {
        let minors = sqlx::query_as::<_, MinorCategory>(
            "SELECT * FROM Product_Categories_Minor WHERE product_categories_major_id = ? ORDER BY name",
        )
        .bind(major_id)
        .fetch_all(self.pool)
        .await?;

        Ok(minors)
    }

    pub async fn minor(&self, minor_id: i64) -> Result<MinorCategory, DbError> {
        sqlx::query_as::<_, MinorCategory>(
            "SELECT * FROM Product_Categories_Minor WHERE id = ? LIMIT 1",
        )
        .bind(minor_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "minor category",
            id: minor_id.to_string(),
        })
    }

    /// Sub categories under one minor.
    pub async fn subs(&self, minor_id: i64) -> Result<Vec<SubCategory>, DbError> {
        let subs = sqlx::query_as::<_, SubCategory>(
            "SELECT * FROM Product_Categories_Sub WHERE product_categories_minor_id = ? ORDER BY name",
        )
        .bind(minor_id)
        .fetch_all(self.pool)
        .await?;

        Ok(subs)
    }

    pub async fn sub(&self, sub_id: i64) -> Result<SubCategory, DbError> {
        sqlx::query_as::<_, SubCategory>(
            "SELECT * FROM Product_Categories_Sub WHERE id = ? LIMIT 1",
        )
        .bind(sub_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "sub category",
            id: sub_id.to_string(),
        })
    }
}
