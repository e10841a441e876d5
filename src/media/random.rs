//! Uniform random selection over stored media items.

use rand::Rng;
use tracing::debug;

use super::repository::MediaItemRepository;
use super::types::MediaItem;
use crate::db::DbPool;
use crate::Result;

/// Pick an offset uniformly in `[0, count)`, or `None` when `count` is not positive.
pub fn pick_index<R: Rng>(rng: &mut R, count: i64) -> Option<i64> {
    if count <= 0 {
        return None;
    }
    Some(rng.random_range(0..count))
}

/// Return a uniformly random stored item, or `None` when storage is empty.
pub async fn pick_random(pool: &DbPool) -> Result<Option<MediaItem>> {
    let repo = MediaItemRepository::new(pool);

    let count = repo.count().await?;
    // ThreadRng is !Send; keep it out of the await points.
    let offset = {
        let mut rng = rand::rng();
        pick_index(&mut rng, count)
    };

    let Some(offset) = offset else {
        debug!("No media items stored");
        return Ok(None);
    };

    repo.get_at_offset(offset).await
}
