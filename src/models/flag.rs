//! Flag model: a moderation report about a generated image.

use serde::Serialize;
use serde_json::Value;

/// Payload keys a flag must carry, in declaration order.
///
/// Validation checks presence only; values are never type-checked, so a
/// report with odd-looking numbers is still accepted and kept for audit.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "image_prompt",
    "steps",
    "sampler",
    "cfg_scale",
    "seed",
    "size",
    "model_hash",
    "model_name",
    "seed_resize_from",
    "denoising_strength",
];

/// A moderation report carrying the generation parameters of the flagged
/// image. `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
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
}

impl Flag {
    /// Build a flag from a JSON payload, checking key presence only.
    ///
    /// Returns the missing keys, in declaration order, when any are absent.
    /// Keys present with any value (including `null` or `""`) satisfy the
    /// contract; unknown keys are ignored.
    pub fn from_json(data: &Value) -> Result<Self, Vec<&'static str>> {
        let missing = missing_fields(data);
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            image_prompt: text_value(&data["image_prompt"]),
            steps: text_value(&data["steps"]),
            sampler: text_value(&data["sampler"]),
            cfg_scale: text_value(&data["cfg_scale"]),
            seed: text_value(&data["seed"]),
            size: text_value(&data["size"]),
            model_hash: text_value(&data["model_hash"]),
            model_name: text_value(&data["model_name"]),
            seed_resize_from: text_value(&data["seed_resize_from"]),
            denoising_strength: text_value(&data["denoising_strength"]),
        })
    }
}

/// Required keys absent from the payload, in declaration order.
pub fn missing_fields(data: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| data.get(*field).is_none())
        .collect()
}

/// Text form of a payload value. Strings pass through unchanged; anything
/// else keeps its JSON rendering so the row stays loggable.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
