use holocron::server::controller::favorite::{
    add_favorite_person, add_favorite_planet, get_user_favorites, remove_favorite_person,
    remove_favorite_planet,
};

use super::*;

#[tokio::test]
async fn get_user_favorites_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_planet("Tatooine")
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the user has no favorites
#[tokio::test]
async fn get_user_favorites_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .build()
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_user_favorites_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_user_favorites(State(test.into_app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the favorites table does not exist
#[tokio::test]
async fn get_user_favorites_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_mock_user("luke@tatooine.com")
        .build()
        .await?;

    let result = get_user_favorites(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn add_favorite_planet_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_planet("Dagobah")
        .build()
        .await?;

    let result = add_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the planet does not exist
#[tokio::test]
async fn add_favorite_planet_unknown_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .build()
        .await?;

    let result = add_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn add_favorite_person_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_person("Yoda")
        .build()
        .await?;

    let result = add_favorite_person(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the user does not exist
#[tokio::test]
async fn add_favorite_person_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_person("Yoda")
        .build()
        .await?;

    let result = add_favorite_person(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn remove_favorite_planet_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_planet("Dagobah")
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let result = remove_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the planet was never favorited
#[tokio::test]
async fn remove_favorite_planet_not_in_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_planet("Dagobah")
        .build()
        .await?;

    let result = remove_favorite_planet(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when only a planet with the same ID is favorited
#[tokio::test]
async fn remove_favorite_person_not_in_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_user("luke@tatooine.com")
        .with_mock_planet("Dagobah")
        .with_mock_person("Yoda")
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let result = remove_favorite_person(State(test.into_app_state()), Path((1, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
