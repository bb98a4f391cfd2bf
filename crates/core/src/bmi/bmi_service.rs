use log::debug;
use std::sync::Arc;

use super::bmi_calculator::assess;
use super::bmi_model::{BmiInput, BmiRecord, NewBmiRecord};
use super::bmi_traits::{BmiRepositoryTrait, BmiServiceTrait};
use crate::errors::Result;
use crate::exports::{append_row, ExportWriter};
use crate::users::UserFilter;

/// Service for BMI measurements
pub struct BmiService {
    repository: Arc<dyn BmiRepositoryTrait>,
    export_writer: Option<Arc<ExportWriter>>,
}

impl BmiService {
    pub fn new(repository: Arc<dyn BmiRepositoryTrait>) -> Self {
        Self {
            repository,
            export_writer: None,
        }
    }

    /// Appends every stored measurement to the standing CSV export.
    pub fn with_export_writer(mut self, export_writer: Arc<ExportWriter>) -> Self {
        self.export_writer = Some(export_writer);
        self
    }
}

#[async_trait::async_trait]
impl BmiServiceTrait for BmiService {
    async fn record_bmi(&self, user_id: i32, input: BmiInput) -> Result<BmiRecord> {
        let reading = assess(input.height, input.weight)?;
        let record = self
            .repository
            .create(NewBmiRecord {
                user_id,
                height: input.height,
                weight: input.weight,
                bmi: reading.bmi,
                category: reading.category,
            })
            .await?;
        debug!(
            "Stored BMI {:.2} ({}) for user {}",
            record.bmi, record.category, user_id
        );

        append_row(self.export_writer.as_ref(), &record).await?;
        Ok(record)
    }

    fn get_history(&self, user_id: i32) -> Result<Vec<BmiRecord>> {
        self.repository.list_by_user(user_id)
    }

    fn list_records(&self, filter: UserFilter) -> Result<Vec<BmiRecord>> {
        self.repository.list_all(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;
    use crate::errors::Error;
    use chrono::{Duration, NaiveDate};
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct MockBmiRepository {
        records: Arc<Mutex<Vec<BmiRecord>>>,
    }

    #[async_trait::async_trait]
    impl BmiRepositoryTrait for MockBmiRepository {
        async fn create(&self, new_record: NewBmiRecord) -> Result<BmiRecord> {
            let mut records = self.records.lock().unwrap();
            let base = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let record = BmiRecord {
                id: records.len() as i32 + 1,
                user_id: new_record.user_id,
                height: new_record.height,
                weight: new_record.weight,
                bmi: new_record.bmi,
                category: new_record.category,
                timestamp: base + Duration::minutes(records.len() as i64),
            };
            records.push(record.clone());
            Ok(record)
        }

        fn list_all(&self, filter: UserFilter) -> Result<Vec<BmiRecord>> {
            let mut records: Vec<BmiRecord> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| filter.user_id().map_or(true, |id| r.user_id == id))
                .cloned()
                .collect();
            records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
            Ok(records)
        }
    }

    #[tokio::test]
    async fn test_record_bmi_classifies_and_stores() {
        let service = BmiService::new(Arc::new(MockBmiRepository::default()));
        let record = service
            .record_bmi(
                1,
                BmiInput {
                    height: 170.0,
                    weight: 70.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.category, BmiCategory::NormalWeight);
        assert!((record.bmi - 24.22).abs() < 0.01);
        assert_eq!(record.height, 170.0);
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first() {
        let service = BmiService::new(Arc::new(MockBmiRepository::default()));
        for weight in [45.0, 70.0, 100.0] {
            service
                .record_bmi(
                    1,
                    BmiInput {
                        height: 170.0,
                        weight,
                    },
                )
                .await
                .unwrap();
        }
        service
            .record_bmi(
                2,
                BmiInput {
                    height: 160.0,
                    weight: 60.0,
                },
            )
            .await
            .unwrap();

        let history = service.get_history(1).unwrap();
        let weights: Vec<f64> = history.iter().map(|r| r.weight).collect();
        assert_eq!(weights, vec![100.0, 70.0, 45.0]);
        assert_eq!(service.list_records(UserFilter::User(2)).unwrap().len(), 1);
        assert_eq!(service.list_records(UserFilter::All).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_invalid_measurement_stores_nothing() {
        let repo = Arc::new(MockBmiRepository::default());
        let service = BmiService::new(repo.clone());

        let err = service
            .record_bmi(
                1,
                BmiInput {
                    height: 0.0,
                    weight: 70.0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_failure_is_reported_after_store() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let repo = Arc::new(MockBmiRepository::default());
        let service =
            BmiService::new(repo.clone()).with_export_writer(Arc::new(ExportWriter::new(&blocker)));

        let err = service
            .record_bmi(
                1,
                BmiInput {
                    height: 170.0,
                    weight: 70.0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert_eq!(repo.records.lock().unwrap().len(), 1);
    }
}
