use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub population: String,
    pub terrain: String,
    pub surface_water: String,
}

/// Body of `POST /planets`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub population: String,
    pub terrain: String,
    pub surface_water: String,
}
