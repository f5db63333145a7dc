use axum::Json;
use holocron::{
    model::planet::CreatePlanetDto,
    server::controller::planet::{create_planet, get_all_planets, get_planet},
};

use super::*;

fn hoth() -> CreatePlanetDto {
    CreatePlanetDto {
        name: "Hoth".to_string(),
        diameter: "7200".to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "549".to_string(),
        population: "unknown".to_string(),
        terrain: "tundra, ice caves, mountain ranges".to_string(),
        surface_water: "100".to_string(),
    }
}

#[tokio::test]
async fn get_all_planets_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let result = get_all_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when no planets are registered
#[tokio::test]
async fn get_all_planets_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_all_planets(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_planet_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = get_planet(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_planet(State(test.into_app_state()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn create_planet_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = create_planet(State(test.into_app_state()), Ok(Json(hoth()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when a planet with the same name exists
#[tokio::test]
async fn create_planet_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let result = create_planet(State(test.into_app_state()), Ok(Json(hoth()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the planet table does not exist
#[tokio::test]
async fn create_planet_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_planet(State(test.into_app_state()), Ok(Json(hoth()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
