use sea_orm::DatabaseConnection;

use crate::{
    model::person::{CreatePersonDto, PersonDto},
    server::{
        data::person::PersonRepository,
        error::{resource::ResourceError, Error},
        service::{ensure_max_length, NAME_MAX_LENGTH},
    },
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new instance of [`PersonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    pub async fn get_person(&self, person_id: i32) -> Result<Option<PersonDto>, Error> {
        let person = PersonRepository::new(self.db).get_by_id(person_id).await?;

        Ok(person.map(PersonDto::from))
    }

    /// Creates a new person, the trimmed name must be non-empty, unused and at most
    /// [`NAME_MAX_LENGTH`] characters
    pub async fn create_person(&self, mut person: CreatePersonDto) -> Result<PersonDto, Error> {
        person.name = person.name.trim().to_string();

        if person.name.is_empty() {
            return Err(ResourceError::MissingField("name").into());
        }
        ensure_max_length("name", &person.name, NAME_MAX_LENGTH)?;

        let person_repo = PersonRepository::new(self.db);

        if person_repo.get_by_name(&person.name).await?.is_some() {
            return Err(ResourceError::DuplicatePerson(person.name).into());
        }

        let person = person_repo.create(person).await?;

        tracing::info!(person_id = %person.id, "Created person {}", person.name);

        Ok(person.into())
    }
}
