use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use diet_consultant_core::records::{MedicalRecord, MedicalRecordRepositoryTrait, NewMedicalRecord};
use diet_consultant_core::{Result, UserFilter};

use super::model::{MedicalRecordDB, NewMedicalRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::medical_records;

pub struct MedicalRecordRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MedicalRecordRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MedicalRecordRepository { pool, writer }
    }
}

#[async_trait]
impl MedicalRecordRepositoryTrait for MedicalRecordRepository {
    async fn create(&self, new_record: NewMedicalRecord) -> Result<MedicalRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MedicalRecord> {
                let row = NewMedicalRecordDB::from_domain(new_record, Utc::now().naive_utc());
                let created = diesel::insert_into(medical_records::table)
                    .values(&row)
                    .returning(MedicalRecordDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(MedicalRecord::from(created))
            })
            .await
    }

    fn list_all(&self, filter: UserFilter) -> Result<Vec<MedicalRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = medical_records::table
            .select(MedicalRecordDB::as_select())
            .order((
                medical_records::date.desc(),
                medical_records::created_at.desc(),
                medical_records::id.desc(),
            ))
            .into_boxed();
        if let Some(user_id) = filter.user_id() {
            query = query.filter(medical_records::user_id.eq(user_id));
        }

        let rows = query.load::<MedicalRecordDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(MedicalRecord::from).collect())
    }
}
