use std::sync::Arc;

use health_core::model::{BmiReading, BodyMeasurement, HealthCollection, UserId};
use storage::repository::{BmiHistoryRecord, BmiHistoryRepository, NewBmiEntry};
use tracing::{info, warn};

use crate::Clock;
use crate::change_feed::ChangeFeed;
use crate::error::BmiServiceError;

/// Whether a calculated reading made it into the history.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved(BmiHistoryRecord),
    Failed(String),
}

/// A reading plus the outcome of recording it.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiCalculation {
    pub reading: BmiReading,
    pub status: SaveStatus,
}

#[derive(Clone)]
pub struct BmiService {
    clock: Clock,
    user: UserId,
    history: Arc<dyn BmiHistoryRepository>,
    feed: ChangeFeed,
}

impl BmiService {
    #[must_use]
    pub fn new(
        clock: Clock,
        user: UserId,
        history: Arc<dyn BmiHistoryRepository>,
        feed: ChangeFeed,
    ) -> Self {
        Self {
            clock,
            user,
            history,
            feed,
        }
    }

    /// Compute a reading from raw weight (kg) and height (cm) input.
    ///
    /// # Errors
    ///
    /// Returns `BmiServiceError::Invalid` for non-numeric or non-positive input.
    pub fn calculate(&self, weight: &str, height: &str) -> Result<BmiReading, BmiServiceError> {
        Ok(BodyMeasurement::parse(weight, height)?.reading())
    }

    /// Compute a reading and append it to the history.
    ///
    /// A storage failure does not discard the reading; it is reported through
    /// [`SaveStatus::Failed`].
    ///
    /// # Errors
    ///
    /// Returns `BmiServiceError::Invalid` for bad input; nothing is stored.
    pub async fn calculate_and_record(
        &self,
        weight: &str,
        height: &str,
    ) -> Result<BmiCalculation, BmiServiceError> {
        let reading = self.calculate(weight, height)?;
        let entry = NewBmiEntry {
            user: self.user.clone(),
            reading,
            recorded_at: self.clock.now(),
        };

        let status = match self.history.append_bmi(entry).await {
            Ok(record) => {
                info!(
                    bmi = reading.value(),
                    category = reading.category().as_str(),
                    user = %self.user,
                    "bmi recorded"
                );
                self.feed.publish(HealthCollection::BmiHistory);
                SaveStatus::Saved(record)
            }
            Err(err) => {
                warn!(%err, user = %self.user, "bmi reading not saved");
                SaveStatus::Failed(err.to_string())
            }
        };

        Ok(BmiCalculation { reading, status })
    }

    /// Recorded readings, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `BmiServiceError::Storage` if the history cannot be read.
    pub async fn history(&self) -> Result<Vec<BmiHistoryRecord>, BmiServiceError> {
        Ok(self.history.list_bmi(&self.user).await?)
    }
}
