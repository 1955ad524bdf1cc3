use crate::model::group::GroupDto;

/// Community group that posts may optionally belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
        }
    }
}
