use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateUserParams, UpdateProfileParams, UpdateUserParams, User, UserCredentials,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active, unverified user.
    ///
    /// # Arguments
    /// - `user_id` - Pre-generated public identifier
    /// - `password_hash` - bcrypt hash of `params.password`
    /// - `params` - Validated account fields; the plaintext password is ignored
    pub async fn create(
        &self,
        user_id: String,
        password_hash: String,
        params: CreateUserParams,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password: ActiveValue::Set(password_hash),
            member: ActiveValue::Set(params.member),
            country: ActiveValue::Set(params.country),
            area: ActiveValue::Set(params.area),
            district: ActiveValue::Set(params.district),
            local_assembly: ActiveValue::Set(params.local_assembly),
            profile_url: ActiveValue::Set(params.profile_url),
            is_active: ActiveValue::Set(true),
            email_verified: ActiveValue::Set(false),
            phone_verified: ActiveValue::Set(false),
            otp: ActiveValue::Set(None),
            otp_expires: ActiveValue::Set(None),
            password_reset_token: ActiveValue::Set(None),
            password_reset_expires: ActiveValue::Set(None),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets all users, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        Ok(self.find_entity(user_id).await?.map(User::from_entity))
    }

    pub async fn find_credentials_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        Ok(self
            .find_entity(user_id)
            .await?
            .map(UserCredentials::from_entity))
    }

    /// Finds an active user by lower-cased email, with their password hash.
    pub async fn find_active_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an active user by phone number along with their pending OTP, if any.
    pub async fn find_active_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<(User, Option<String>, Option<DateTime<Utc>>)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let otp = e.otp.clone();
            let otp_expires = e.otp_expires;
            (User::from_entity(e), otp, otp_expires)
        }))
    }

    /// Checks whether `phone` belongs to any user other than `exclude_user_id`.
    pub async fn phone_taken(
        &self,
        phone: &str,
        exclude_user_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Phone.eq(phone));

        if let Some(user_id) = exclude_user_id {
            query = query.filter(entity::user::Column::UserId.ne(user_id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Stores a one-time password and its deadline.
    pub async fn set_otp(
        &self,
        id: i32,
        otp: String,
        expires: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.update_by_id(
            id,
            entity::user::ActiveModel {
                otp: ActiveValue::Set(Some(otp)),
                otp_expires: ActiveValue::Set(Some(expires)),
                ..Default::default()
            },
        )
        .await
    }

    /// Stores a sign-in OTP and stamps the login time.
    pub async fn record_login(
        &self,
        id: i32,
        otp: String,
        otp_expires: DateTime<Utc>,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.update_by_id(
            id,
            entity::user::ActiveModel {
                otp: ActiveValue::Set(Some(otp)),
                otp_expires: ActiveValue::Set(Some(otp_expires)),
                last_login: ActiveValue::Set(Some(at)),
                ..Default::default()
            },
        )
        .await
    }

    /// Marks the phone verified and clears the pending OTP.
    pub async fn mark_phone_verified(&self, id: i32) -> Result<Option<User>, DbErr> {
        self.update_by_id(
            id,
            entity::user::ActiveModel {
                phone_verified: ActiveValue::Set(true),
                otp: ActiveValue::Set(None),
                otp_expires: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .await?;

        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;
        Ok(entity.map(User::from_entity))
    }

    /// Stores the SHA-256 digest of a password reset token and its deadline.
    pub async fn set_reset_token(
        &self,
        id: i32,
        digest: String,
        expires: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.update_by_id(
            id,
            entity::user::ActiveModel {
                password_reset_token: ActiveValue::Set(Some(digest)),
                password_reset_expires: ActiveValue::Set(Some(expires)),
                ..Default::default()
            },
        )
        .await
    }

    /// Finds the user holding an unexpired reset token with the given digest.
    pub async fn find_by_reset_digest(
        &self,
        digest: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PasswordResetToken.eq(digest))
            .filter(entity::user::Column::PasswordResetExpires.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Replaces the password hash and clears any pending reset token.
    pub async fn reset_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        self.update_by_id(
            id,
            entity::user::ActiveModel {
                password: ActiveValue::Set(password_hash),
                password_reset_token: ActiveValue::Set(None),
                password_reset_expires: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .await
    }

    /// Replaces the password hash. Returns the number of rows affected.
    pub async fn set_password(&self, user_id: &str, password_hash: String) -> Result<u64, DbErr> {
        self.update_by_user_id(
            user_id,
            entity::user::ActiveModel {
                password: ActiveValue::Set(password_hash),
                ..Default::default()
            },
        )
        .await
    }

    /// Applies a self-service profile patch. Only fields present in `params` are written.
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<u64, DbErr> {
        let mut model = <entity::user::ActiveModel as std::default::Default>::default();
        if let Some(name) = params.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(country) = params.country {
            model.country = ActiveValue::Set(Some(country));
        }
        if let Some(area) = params.area {
            model.area = ActiveValue::Set(Some(area));
        }
        if let Some(district) = params.district {
            model.district = ActiveValue::Set(Some(district));
        }
        if let Some(local_assembly) = params.local_assembly {
            model.local_assembly = ActiveValue::Set(Some(local_assembly));
        }
        if let Some(profile_url) = params.profile_url {
            model.profile_url = ActiveValue::Set(Some(profile_url));
        }

        self.update_by_user_id(&params.user_id, model).await
    }

    /// Overwrites a user's editable fields.
    pub async fn update(&self, params: UpdateUserParams) -> Result<u64, DbErr> {
        let mut model = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            member: ActiveValue::Set(params.member),
            country: ActiveValue::Set(params.country),
            area: ActiveValue::Set(params.area),
            district: ActiveValue::Set(params.district),
            local_assembly: ActiveValue::Set(params.local_assembly),
            profile_url: ActiveValue::Set(params.profile_url),
            ..Default::default()
        };
        if let Some(is_active) = params.is_active {
            model.is_active = ActiveValue::Set(is_active);
        }

        self.update_by_user_id(&params.user_id, model).await
    }

    pub async fn set_active(&self, user_id: &str, active: bool) -> Result<u64, DbErr> {
        self.update_by_user_id(
            user_id,
            entity::user::ActiveModel {
                is_active: ActiveValue::Set(active),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, user_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_entity(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    async fn update_by_id(&self, id: i32, model: entity::user::ActiveModel) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .set(model)
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn update_by_user_id(
        &self,
        user_id: &str,
        model: entity::user::ActiveModel,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .set(model)
            .filter(entity::user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
