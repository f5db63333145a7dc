use axum::Json;
use holocron::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, get_all_users, get_user},
};

use super::*;

#[tokio::test]
async fn get_all_users_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .build()
        .await?;

    let result = get_all_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when no users are registered
#[tokio::test]
async fn get_all_users_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_all_users(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_user_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .build()
        .await?;

    let result = get_user(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 for a user ID that does not exist
#[tokio::test]
async fn get_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_user(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the user table does not exist
#[tokio::test]
async fn get_user_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_user(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn create_user_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let payload = CreateUserDto {
        email: "leia@alderaan.com".to_string(),
        password: "hope".to_string(),
    };
    let result = create_user(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn create_user_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("leia@alderaan.com")
        .build()
        .await?;

    let payload = CreateUserDto {
        email: "leia@alderaan.com".to_string(),
        password: "hope".to_string(),
    };
    let result = create_user(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the password is blank
#[tokio::test]
async fn create_user_blank_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let payload = CreateUserDto {
        email: "leia@alderaan.com".to_string(),
        password: "   ".to_string(),
    };
    let result = create_user(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
