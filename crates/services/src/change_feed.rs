use health_core::model::HealthCollection;
use tokio::sync::broadcast;
use tracing::{debug, trace};

const FEED_CAPACITY: usize = 64;

/// In-process notifications of appends to the health collections.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<HealthCollection>,
}

impl ChangeFeed {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Announce that a record was appended to `collection`.
    pub fn publish(&self, collection: HealthCollection) {
        // No subscribers is not an error.
        let receivers = self.tx.send(collection).unwrap_or(0);
        trace!(%collection, receivers, "change published");
    }

    /// Watch one collection. Dropping the subscription unsubscribes.
    #[must_use]
    pub fn subscribe(&self, collection: HealthCollection) -> Subscription {
        Subscription {
            collection,
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Subscription {
    collection: HealthCollection,
    rx: broadcast::Receiver<HealthCollection>,
}

impl Subscription {
    #[must_use]
    pub fn collection(&self) -> HealthCollection {
        self.collection
    }

    /// Wait for the next append to this subscription's collection.
    ///
    /// Appends to other collections are skipped. Missed notifications count as a
    /// change. Returns `false` once the feed has been dropped.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(collection) if collection == self.collection => return true,
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(collection = %self.collection, skipped, "change subscription lagged");
                    return true;
                }
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn wakes_only_for_own_collection() {
        let feed = ChangeFeed::new();
        let mut water = feed.subscribe(HealthCollection::WaterLogs);

        feed.publish(HealthCollection::BmiHistory);
        feed.publish(HealthCollection::ExerciseLogs);
        assert!(
            timeout(Duration::from_millis(50), water.changed())
                .await
                .is_err()
        );

        feed.publish(HealthCollection::WaterLogs);
        assert!(
            timeout(Duration::from_millis(50), water.changed())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn lag_counts_as_change() {
        let feed = ChangeFeed::new();
        let mut bmi = feed.subscribe(HealthCollection::BmiHistory);
        for _ in 0..(FEED_CAPACITY + 8) {
            feed.publish(HealthCollection::WaterLogs);
        }
        assert!(
            timeout(Duration::from_millis(50), bmi.changed())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn closed_feed_ends_subscription() {
        let feed = ChangeFeed::new();
        let mut sub = feed.subscribe(HealthCollection::ExerciseLogs);
        drop(feed);
        assert!(!sub.changed().await);
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        ChangeFeed::new().publish(HealthCollection::WaterLogs);
    }
}
