//! Built-in publisher list and startup seeding.

use tracing::{error, info};

use super::repository::PublisherRepository;
use super::types::NewPublisher;
use crate::db::{DbPool, Database};
use crate::Result;

/// Publishers seeded on every start, as `(publisher_id, name)`.
///
/// `UCY8_y20lxQhhBe8GZl5A9rw` appears twice ("Channel 2" and "Channel 8");
/// both rows are seeded.
pub const DEFAULT_PUBLISHERS: &[(&str, &str)] = &[
    ("UCXxNR5OIs52ZQUDc9RlAing", "Channel 1"),
    ("UCY8_y20lxQhhBe8GZl5A9rw", "Channel 2"),
    ("UCKydEBEvAU5zkN8o1snt62A", "Channel 3"),
    ("UC2CMBX0xUGWdK9SmewrU8B", "Channel 4"),
    ("UCg4HwkoSEhqyvk_qwiB5M7g", "Channel 5"),
    ("UCbFRFUEgRI64ZogqawRh5Wg", "Channel 6"),
    ("UCLcnbgnInVXNeR4mnB6-ScQ", "Channel 7"),
    ("UCY8_y20lxQhhBe8GZl5A9rw", "Channel 8"),
    ("UC-RVESJTf_zSaFB8qGoxOnA", "Channel 9"),
    ("UCZPDvPgP_E1Z-qyMppvJsRQ", "Channel 10"),
    ("UCKgYw7coD5LZXGiS-sXnzJQ", "Channel 11"),
    ("UC-T9Vf1N9MwW8HttzC_KIaQ", "Channel 12"),
    ("UCVBZ9XZcgv0h3dscFWaHNgA", "Channel 13"),
    ("UCD3m_nnW8Tma4FIhg56IuIA", "Channel 14"),
    ("UCtrJ2-RStj9rX6SOGzv7ybA", "Channel 15"),
];

/// Delete every publisher, then insert [`DEFAULT_PUBLISHERS`].
///
/// Returns the number of seeded publishers.
pub async fn reset_and_seed(pool: &DbPool) -> Result<usize> {
    let repo = PublisherRepository::new(pool);

    info!("Clearing existing publishers");
    let removed = repo.delete_all().await?;

    let publishers: Vec<NewPublisher> = DEFAULT_PUBLISHERS
        .iter()
        .map(|(id, name)| NewPublisher::new(*id, *name))
        .collect();

    info!(removed, "Seeding default publishers");
    let seeded = repo.insert_many(&publishers).await?;
    info!(seeded, "Default publishers seeded");

    Ok(seeded)
}

/// Startup step run before the web server accepts requests.
///
/// Seeding failures are logged and the process keeps running with whatever
/// the registry holds.
pub async fn initialize(db: &Database) {
    if let Err(e) = reset_and_seed(db.pool()).await {
        error!("Seeding publishers failed: {}", e);
    }
}
