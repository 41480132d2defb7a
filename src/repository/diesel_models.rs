//! Diesel ORM models for the flagged_images table.

use diesel::prelude::*;

use crate::schema::flagged_images;

/// Flag record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = flagged_images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FlagRecord {
    pub id: i32,
    pub image_prompt: String,
    pub steps: String,
    pub sampler: String,
    pub cfg_scale: String,
    pub seed: String,
    pub size: String,
    pub model_hash: String,
    pub model_name: String,
    pub seed_resize_from: String,
    pub denoising_strength: String,
    pub created_at: String,
}

/// New flag for insertion. `id` and `created_at` are left to the store.
#[derive(Insertable, Debug)]
#[diesel(table_name = flagged_images)]
pub struct NewFlag<'a> {
    pub image_prompt: &'a str,
    pub steps: &'a str,
    pub sampler: &'a str,
    pub cfg_scale: &'a str,
    pub seed: &'a str,
    pub size: &'a str,
    pub model_hash: &'a str,
    pub model_name: &'a str,
    pub seed_resize_from: &'a str,
    pub denoising_strength: &'a str,
}
