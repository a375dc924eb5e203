use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::session::{CreateSessionParams, Session, UpdateSessionParams};

/// Session table access.
///
/// Generic over the connection so the activation paths can run every statement inside
/// one `DatabaseTransaction`.
pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a session with pre-generated id and color.
    ///
    /// Does not touch other rows; callers creating an active session must call
    /// `deactivate_all` first within the same transaction.
    pub async fn create(
        &self,
        session_id: String,
        session_color: String,
        params: CreateSessionParams,
    ) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            session_id: ActiveValue::Set(session_id),
            title: ActiveValue::Set(params.title),
            academic_year: ActiveValue::Set(params.academic_year),
            year_id: ActiveValue::Set(params.year_id),
            active: ActiveValue::Set(params.active),
            year_colors: ActiveValue::Set(params.year_colors),
            session_color: ActiveValue::Set(session_color),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Gets all sessions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Session>, DbErr> {
        let entities = entity::prelude::Session::find()
            .order_by_desc(entity::session::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Session::from_entity).collect())
    }

    pub async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find_by_id(session_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Gets the active session, if any.
    pub async fn find_active(&self) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find()
            .filter(entity::session::Column::Active.eq(true))
            .order_by_desc(entity::session::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Gets every active session. Outside a failed invariant this has at most one element.
    #[cfg(test)]
    pub async fn get_active(&self) -> Result<Vec<Session>, DbErr> {
        let entities = entity::prelude::Session::find()
            .filter(entity::session::Column::Active.eq(true))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Session::from_entity).collect())
    }

    /// Marks every session inactive. Returns the number of rows that changed.
    pub async fn deactivate_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::update_many()
            .col_expr(entity::session::Column::Active, Expr::value(false))
            .filter(entity::session::Column::Active.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks one session active without touching any other row.
    pub async fn set_active(&self, session_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::update_many()
            .col_expr(entity::session::Column::Active, Expr::value(true))
            .filter(entity::session::Column::SessionId.eq(session_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a partial update.
    ///
    /// Only fields present in `params` are written. An empty patch writes nothing and
    /// reports 1 when the session exists, 0 otherwise.
    pub async fn update(&self, params: UpdateSessionParams) -> Result<u64, DbErr> {
        if params.is_empty() {
            let exists = self.find_by_id(&params.session_id).await?.is_some();
            return Ok(exists as u64);
        }

        let mut model = <entity::session::ActiveModel as std::default::Default>::default();
        if let Some(title) = params.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(academic_year) = params.academic_year {
            model.academic_year = ActiveValue::Set(Some(academic_year));
        }
        if let Some(year_id) = params.year_id {
            model.year_id = ActiveValue::Set(Some(year_id));
        }
        if let Some(active) = params.active {
            model.active = ActiveValue::Set(active);
        }

        let result = entity::prelude::Session::update_many()
            .set(model)
            .filter(entity::session::Column::SessionId.eq(params.session_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a session regardless of its state. Returns the number of rows deleted.
    pub async fn delete(&self, session_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_by_id(session_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
