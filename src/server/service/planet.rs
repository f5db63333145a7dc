use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{resource::ResourceError, Error},
        service::{ensure_max_length, NAME_MAX_LENGTH},
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Creates a new planet, the trimmed name must be non-empty, unused and at most
    /// [`NAME_MAX_LENGTH`] characters
    pub async fn create_planet(&self, mut planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        planet.name = planet.name.trim().to_string();

        if planet.name.is_empty() {
            return Err(ResourceError::MissingField("name").into());
        }
        ensure_max_length("name", &planet.name, NAME_MAX_LENGTH)?;

        let planet_repo = PlanetRepository::new(self.db);

        if planet_repo.get_by_name(&planet.name).await?.is_some() {
            return Err(ResourceError::DuplicatePlanet(planet.name).into());
        }

        let planet = planet_repo.create(planet).await?;

        tracing::info!(planet_id = %planet.id, "Created planet {}", planet.name);

        Ok(planet.into())
    }
}
