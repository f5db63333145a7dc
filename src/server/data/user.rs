use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(
        &self,
        email: String,
        password: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
