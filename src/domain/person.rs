//! Person (actor) domain entity and cast credit types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Person domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact person representation for list endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonSummary {
    pub id: Uuid,
    #[schema(example = "Harrison Ford")]
    pub name: String,
    pub birth_year: Option<i32>,
}

impl From<Person> for PersonSummary {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            birth_year: person.birth_year,
        }
    }
}

/// A cast membership seen from the title side
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CastMember {
    pub person_id: Uuid,
    pub name: String,
    /// Character played in the title
    #[schema(example = "Rick Deckard")]
    pub character: String,
}

/// A cast membership seen from the person side
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilmographyEntry {
    pub title_id: Uuid,
    pub name: String,
    pub year: i32,
    pub character: String,
}
