use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use diet_consultant_core::bmi::{BmiRecord, BmiRepositoryTrait, NewBmiRecord};
use diet_consultant_core::{Result, UserFilter};

use super::model::{BmiRecordDB, NewBmiRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::bmi_records;

pub struct BmiRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BmiRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BmiRepository { pool, writer }
    }
}

#[async_trait]
impl BmiRepositoryTrait for BmiRepository {
    async fn create(&self, new_record: NewBmiRecord) -> Result<BmiRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BmiRecord> {
                let row = NewBmiRecordDB::from_domain(new_record, Utc::now().naive_utc());
                let created = diesel::insert_into(bmi_records::table)
                    .values(&row)
                    .returning(BmiRecordDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                BmiRecord::try_from(created)
            })
            .await
    }

    fn list_all(&self, filter: UserFilter) -> Result<Vec<BmiRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = bmi_records::table
            .select(BmiRecordDB::as_select())
            .order((bmi_records::timestamp.desc(), bmi_records::id.desc()))
            .into_boxed();
        if let Some(user_id) = filter.user_id() {
            query = query.filter(bmi_records::user_id.eq(user_id));
        }

        query
            .load::<BmiRecordDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(BmiRecord::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{open_temp_database, seed_user};
    use diet_consultant_core::bmi::BmiCategory;

    fn measurement(user_id: i32, weight: f64) -> NewBmiRecord {
        let bmi = weight / (1.7 * 1.7);
        NewBmiRecord {
            user_id,
            height: 170.0,
            weight,
            bmi,
            category: BmiCategory::from_bmi(bmi),
        }
    }

    #[tokio::test]
    async fn test_create_round_trips_category() {
        let (_dir, db) = open_temp_database();
        let user_id = seed_user(&db, "a@x.com").await;
        let repo = BmiRepository::new(db.pool.clone(), db.writer.clone());

        let created = repo.create(measurement(user_id, 100.0)).await.unwrap();
        assert_eq!(created.category, BmiCategory::Obese);

        let listed = repo.list_by_user(user_id).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filtered() {
        let (_dir, db) = open_temp_database();
        let alice = seed_user(&db, "a@x.com").await;
        let bob = seed_user(&db, "b@x.com").await;
        let repo = BmiRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(measurement(alice, 60.0)).await.unwrap();
        repo.create(measurement(alice, 65.0)).await.unwrap();
        repo.create(measurement(bob, 80.0)).await.unwrap();

        let weights: Vec<f64> = repo
            .list_by_user(alice)
            .unwrap()
            .iter()
            .map(|r| r.weight)
            .collect();
        assert_eq!(weights, vec![65.0, 60.0]);

        let all = repo.list_all(UserFilter::All).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].user_id, bob);
        assert!(repo.list_by_user(999).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected() {
        let (_dir, db) = open_temp_database();
        let repo = BmiRepository::new(db.pool.clone(), db.writer.clone());
        assert!(repo.create(measurement(42, 70.0)).await.is_err());
    }
}
