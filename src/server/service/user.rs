use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{resource::ResourceError, Error},
        service::{ensure_max_length, EMAIL_MAX_LENGTH, PASSWORD_MAX_LENGTH},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users ordered by ID, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Creates a new active user.
    ///
    /// The email is trimmed before it is stored and must not already be registered.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ResourceError(MissingField))` - Email or password is blank
    /// - `Err(Error::ResourceError(FieldTooLong))` - Email or password exceeds its column length
    /// - `Err(Error::ResourceError(DuplicateEmail))` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let email = user.email.trim().to_string();

        if email.is_empty() {
            return Err(ResourceError::MissingField("email").into());
        }
        if user.password.trim().is_empty() {
            return Err(ResourceError::MissingField("password").into());
        }
        ensure_max_length("email", &email, EMAIL_MAX_LENGTH)?;
        ensure_max_length("password", &user.password, PASSWORD_MAX_LENGTH)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(ResourceError::DuplicateEmail(email).into());
        }

        let user = user_repo.create(email, user.password).await?;

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user.into())
    }
}
