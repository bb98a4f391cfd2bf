use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use diet_consultant_core::diet_plans::{DietPlan, DietPlanRepositoryTrait, NewDietPlan};
use diet_consultant_core::{Error, Result, UserFilter};

use super::model::{DietPlanDB, NewDietPlanDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::diet_plans;

pub struct DietPlanRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DietPlanRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DietPlanRepository { pool, writer }
    }
}

fn to_domain(rows: Vec<DietPlanDB>) -> Result<Vec<DietPlan>> {
    rows.into_iter()
        .map(|row| DietPlan::try_from(row).map_err(Error::from))
        .collect()
}

#[async_trait]
impl DietPlanRepositoryTrait for DietPlanRepository {
    async fn create(&self, new_plan: NewDietPlan) -> Result<DietPlan> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DietPlan> {
                let row = NewDietPlanDB::from_domain(new_plan, Utc::now().naive_utc())?;
                let created = diesel::insert_into(diet_plans::table)
                    .values(&row)
                    .returning(DietPlanDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(DietPlan::try_from(created)?)
            })
            .await
    }

    fn find_latest(&self, user_id: i32, bmi: f64) -> Result<Option<DietPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let row = diet_plans::table
            .filter(diet_plans::user_id.eq(user_id))
            .filter(diet_plans::bmi.eq(bmi))
            .order((diet_plans::created_at.desc(), diet_plans::id.desc()))
            .select(DietPlanDB::as_select())
            .first::<DietPlanDB>(&mut conn)
            .optional()
            .into_core()?;
        row.map(|row| DietPlan::try_from(row).map_err(Error::from))
            .transpose()
    }

    fn list_all(&self, filter: UserFilter) -> Result<Vec<DietPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = diet_plans::table
            .select(DietPlanDB::as_select())
            .order((diet_plans::created_at.desc(), diet_plans::id.desc()))
            .into_boxed();
        if let Some(user_id) = filter.user_id() {
            query = query.filter(diet_plans::user_id.eq(user_id));
        }
        to_domain(query.load::<DietPlanDB>(&mut conn).into_core()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{open_temp_database, seed_user};
    use diet_consultant_core::diet_plans::plan_for_bmi;

    fn new_plan(user_id: i32, bmi: f64) -> NewDietPlan {
        NewDietPlan {
            user_id,
            bmi,
            plan: plan_for_bmi(bmi),
        }
    }

    #[tokio::test]
    async fn test_plan_document_round_trips_through_json_column() {
        let (_dir, db) = open_temp_database();
        let user_id = seed_user(&db, "a@x.com").await;
        let repo = DietPlanRepository::new(db.pool.clone(), db.writer.clone());

        let created = repo.create(new_plan(user_id, 17.3)).await.unwrap();
        assert_eq!(created.plan, plan_for_bmi(17.3));

        let found = repo.find_latest(user_id, 17.3).unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_latest_matches_exact_bmi_only() {
        let (_dir, db) = open_temp_database();
        let user_id = seed_user(&db, "a@x.com").await;
        let repo = DietPlanRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(new_plan(user_id, 22.5)).await.unwrap();
        let newer = repo.create(new_plan(user_id, 22.5)).await.unwrap();

        assert_eq!(repo.find_latest(user_id, 22.5).unwrap().unwrap().id, newer.id);
        assert!(repo.find_latest(user_id, 22.500001).unwrap().is_none());
        assert!(repo.find_latest(user_id + 1, 22.5).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_filters_by_user() {
        let (_dir, db) = open_temp_database();
        let alice = seed_user(&db, "a@x.com").await;
        let bob = seed_user(&db, "b@x.com").await;
        let repo = DietPlanRepository::new(db.pool.clone(), db.writer.clone());

        repo.create(new_plan(alice, 20.0)).await.unwrap();
        repo.create(new_plan(bob, 31.0)).await.unwrap();

        assert_eq!(repo.list_all(UserFilter::All).unwrap().len(), 2);
        let bobs = repo.list_by_user(bob).unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].bmi, 31.0);
    }
}
