//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use scribe_core::domain::{NewPost, NewUser, Post, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// Map a SeaORM error to the repository taxonomy.
///
/// Constraint violations are recognized via the driver error code, not by
/// matching on message text.
fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => RepoError::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => RepoError::ForeignKeyViolation(msg),
        _ => match err {
            DbErr::Conn(e) => RepoError::Connection(e.to_string()),
            other => RepoError::Query(other.to_string()),
        },
    }
}

/// Mask an email for logging to avoid PII in logs.
///
/// Works on characters, not bytes; the local part may start with a
/// multibyte character.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let mut chars = local.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => format!("{first}***{domain}"),
                _ => format!("***{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

/// PostgreSQL user repository.
pub struct PgUserRepository {
    db: DbConn,
}

impl PgUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(Into::into))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new: NewUser) -> Result<User, RepoError> {
        tracing::debug!(user_email = %mask_email(&new.email), "Creating user");

        let model = user::ActiveModel::from(new)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn upsert(&self, id: i32, new: NewUser) -> Result<User, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Any early return below drops the guard and rolls the
        // transaction back.
        let found = UserEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let model = match found {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.name = Set(new.name);
                active.email = Set(new.email);
                active.update(&txn).await.map_err(map_db_err)?
            }
            None => {
                tracing::debug!(user_id = id, "No row to update, inserting with supplied id");
                let active = user::ActiveModel {
                    id: Set(id),
                    name: Set(new.name),
                    email: Set(new.email),
                };
                active.insert(&txn).await.map_err(map_db_err)?
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, RepoError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        let Some(model) = found else {
            return Ok(None);
        };

        // The removal itself is a single atomic statement; a concurrent
        // delete shows up as rows_affected == 0.
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(model.into()))
    }
}

/// PostgreSQL post repository.
pub struct PgPostRepository {
    db: DbConn,
}

impl PgPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let found = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(Into::into))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, owner_id: i32, new: NewPost) -> Result<Post, RepoError> {
        let mut active = post::ActiveModel::from(new);
        active.owner_id = Set(owner_id);

        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: i32, new: NewPost) -> Result<Option<Post>, RepoError> {
        let found = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        let Some(existing) = found else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = Set(new.title);
        active.content = Set(new.content);
        let model = active.update(&self.db).await.map_err(map_db_err)?;

        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let found = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        let Some(model) = found else {
            return Ok(None);
        };

        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(model.into()))
    }

    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::OwnerId.eq(owner_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn mask_email_keeps_first_char_and_domain() {
        assert_eq!(mask_email("ann@x.com"), "a***@x.com");
    }

    #[test]
    fn mask_email_handles_multibyte_local_part() {
        assert_eq!(mask_email("élise@x.com"), "é***@x.com");
        assert_eq!(mask_email("é@x.com"), "***@x.com");
    }

    #[test]
    fn mask_email_without_at_sign_is_fully_masked() {
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
