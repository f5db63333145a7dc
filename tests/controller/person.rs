use axum::Json;
use holocron::{
    model::person::CreatePersonDto,
    server::controller::person::{create_person, get_all_people, get_person},
};

use super::*;

fn chewbacca() -> CreatePersonDto {
    CreatePersonDto {
        name: "Chewbacca".to_string(),
        birth_year: "200BBY".to_string(),
        eye_color: "blue".to_string(),
        gender: "male".to_string(),
        hair_color: "brown".to_string(),
        height: "228".to_string(),
    }
}

#[tokio::test]
async fn get_all_people_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_person("Luke Skywalker")
        .build()
        .await?;

    let result = get_all_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn get_all_people_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_all_people(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the person to be found even when no planet shares its ID
#[tokio::test]
async fn get_person_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_person("Luke Skywalker")
        .build()
        .await?;

    let result = get_person(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when only a planet exists with the requested ID
#[tokio::test]
async fn get_person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = get_person(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn create_person_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = create_person(State(test.into_app_state()), Ok(Json(chewbacca()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 when the name is blank
#[tokio::test]
async fn create_person_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let payload = CreatePersonDto {
        name: "".to_string(),
        ..chewbacca()
    };
    let result = create_person(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
