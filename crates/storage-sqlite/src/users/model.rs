//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use diet_consultant_core::users::{NewUser, User};

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
        }
    }
}

impl NewUserDB {
    pub fn from_domain(domain: NewUser, created_at: NaiveDateTime) -> Self {
        Self {
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            created_at,
        }
    }
}
