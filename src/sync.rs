// Simulated Herakles sync for approved products.
use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::models::notification::NotificationType;
use crate::state::AppState;

const SYNC_STEPS: u32 = 4;

/// Runs the timed `syncing -> synced` transition in the background.
///
/// The configured delay is split into even steps; each step bumps
/// `sync_progress` and the last one marks the product as synced and posts a
/// "Sync Complete" notification. The lock is only held while applying a step.
pub fn spawn_product_sync(state: AppState, product_id: String) -> JoinHandle<()> {
    let step_delay = state.config.sync_delay / SYNC_STEPS;

    tokio::spawn(async move {
        for step in 1..SYNC_STEPS {
            sleep(step_delay).await;
            let progress = step_progress(step);
            let advanced = state
                .store
                .write()
                .await
                .product_mut(&product_id)
                .map(|p| p.advance_sync(progress, Utc::now()))
                .unwrap_or(false);
            if !advanced {
                warn!(%product_id, "Product left syncing before the sync finished");
                return;
            }
        }

        sleep(step_delay).await;
        let mut store = state.store.write().await;
        let completed = store
            .product_mut(&product_id)
            .map(|p| p.complete_sync(Utc::now()))
            .unwrap_or(false);
        if completed {
            store.notifications.push(
                "Sync Complete",
                "Product successfully synced to Herakles",
                NotificationType::Success,
            );
            info!(%product_id, "Product synced");
        }
    })
}

/// Percentage reached after `step` of the even sync steps.
fn step_progress(step: u32) -> u8 {
    (step.min(SYNC_STEPS) * 100 / SYNC_STEPS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::config::AppConfig;
    use crate::models::product::ProductStatus;

    fn state_with_delay(ms: u64) -> AppState {
        let mut config = AppConfig::with_secret("test");
        config.sync_delay = Duration::from_millis(ms);
        AppState::new(config)
    }

    #[tokio::test]
    async fn approved_product_ends_up_synced() {
        let state = state_with_delay(40);
        {
            let mut store = state.store.write().await;
            store.product_mut("PROD-002").unwrap().approve(Utc::now()).unwrap();
        }
        spawn_product_sync(state.clone(), "PROD-002".into()).await.unwrap();

        let store = state.store.read().await;
        let product = store.product("PROD-002").unwrap();
        assert_eq!(product.status, ProductStatus::Synced);
        assert_eq!(product.sync_progress, Some(100));
        assert_eq!(store.notifications.all()[0].title, "Sync Complete");
    }

    #[tokio::test]
    async fn non_syncing_product_is_left_alone() {
        let state = state_with_delay(8);
        spawn_product_sync(state.clone(), "PROD-002".into()).await.unwrap();

        let store = state.store.read().await;
        assert_eq!(store.product("PROD-002").unwrap().status, ProductStatus::PendingReview);
        assert_eq!(store.notifications.unread_count(), 3);
    }

    #[test]
    fn progress_moves_in_even_steps() {
        let steps: Vec<u8> = (0..=SYNC_STEPS).map(step_progress).collect();
        assert_eq!(steps, vec![0, 25, 50, 75, 100]);
    }

    #[tokio::test]
    async fn intermediate_progress_is_observable() {
        let state = state_with_delay(400);
        {
            let mut store = state.store.write().await;
            store.product_mut("PROD-002").unwrap().approve(Utc::now()).unwrap();
        }
        let handle = spawn_product_sync(state.clone(), "PROD-002".into());

        let mut seen = vec![0u8];
        for _ in 0..500 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let store = state.store.read().await;
            let product = store.product("PROD-002").unwrap();
            let progress = product.sync_progress.unwrap();
            if seen.last() != Some(&progress) {
                seen.push(progress);
            }
            if product.status == ProductStatus::Synced {
                break;
            }
            assert_eq!(product.status, ProductStatus::Syncing);
        }
        handle.await.unwrap();

        assert!(seen.windows(2).all(|w| w[0] < w[1]), "progress went backwards: {seen:?}");
        assert!(seen.iter().all(|p| [0, 25, 50, 75, 100].contains(p)), "unexpected step: {seen:?}");
        assert!(seen.iter().any(|p| (1..100).contains(p)), "no intermediate step seen: {seen:?}");
        assert_eq!(seen.last(), Some(&100));
    }
}
