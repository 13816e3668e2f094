use chrono::NaiveDateTime;

/// A shortened URL record from the `urls` table.
///
/// `id` and `short_url` always hold the same value: the short code derived
/// from `original_url`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: NaiveDateTime,
}

impl UrlMapping {
    /// Build a fresh mapping for `original_url`, stamped with the current UTC time.
    pub fn new(original_url: impl Into<String>) -> Self {
        let original_url = original_url.into();
        let id = crate::shortcode::generate(&original_url);
        Self {
            short_url: id.clone(),
            id,
            original_url,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
