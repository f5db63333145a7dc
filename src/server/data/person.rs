use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::person::CreatePersonDto;

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, person: CreatePersonDto) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(person.name),
            birth_year: ActiveValue::Set(person.birth_year),
            eye_color: ActiveValue::Set(person.eye_color),
            gender: ActiveValue::Set(person.gender),
            hair_color: ActiveValue::Set(person.hair_color),
            height: ActiveValue::Set(person.height),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every person ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the people matching the provided IDs, IDs without a record are skipped
    pub async fn get_many_by_ids(
        &self,
        person_ids: &[i32],
    ) -> Result<Vec<entity::person::Model>, DbErr> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
