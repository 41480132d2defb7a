//! Diesel-based flag repository for SQLite.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::diesel_models::{FlagRecord, NewFlag};
use super::diesel_pool::AsyncSqlitePool;
use super::StoreError;
use crate::models::Flag;
use crate::schema::flagged_images;

/// Repository for persisted image flags.
///
/// Flags are insert-only; nothing here updates or deletes rows. The read
/// helpers exist for the operator `status` command and tests.
#[derive(Clone)]
pub struct DieselFlagRepository {
    pool: AsyncSqlitePool,
}

impl DieselFlagRepository {
    /// Create a new flag repository with an existing pool.
    pub fn new(pool: AsyncSqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one flag. The store assigns `id` and `created_at`.
    pub async fn insert(&self, flag: &Flag) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;

        let record = NewFlag {
            image_prompt: &flag.image_prompt,
            steps: &flag.steps,
            sampler: &flag.sampler,
            cfg_scale: &flag.cfg_scale,
            seed: &flag.seed,
            size: &flag.size,
            model_hash: &flag.model_hash,
            model_name: &flag.model_name,
            seed_resize_from: &flag.seed_resize_from,
            denoising_strength: &flag.denoising_strength,
        };

        diesel::insert_into(flagged_images::table)
            .values(&record)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Count persisted flags.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get().await?;

        Ok(flagged_images::table
            .count()
            .get_result::<i64>(&mut conn)
            .await?)
    }

    /// Most recently stored flags, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<FlagRecord>, StoreError> {
        let mut conn = self.pool.get().await?;

        Ok(flagged_images::table
            .order(flagged_images::id.desc())
            .limit(limit)
            .load::<FlagRecord>(&mut conn)
            .await?)
    }
}
