//! Skill entity model and DTOs. The only collection without an image.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow)]
pub struct Skill {
    pub id: DbId,
    pub skill_name: String,
    pub ordinal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone)]
pub struct CreateSkill {
    pub skill_name: String,
    pub ordinal: i32,
}

/// DTO for updating a skill. `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateSkill {
    pub skill_name: Option<String>,
    pub ordinal: Option<i32>,
}

/// Wire representation. The historical field name `skillName` is kept on
/// the wire for client compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: DbId,
    #[serde(rename = "skillName")]
    pub skill_name: String,
    pub ordinal: i32,
}

impl From<Skill> for SkillResponse {
    fn from(row: Skill) -> Self {
        Self {
            id: row.id,
            skill_name: row.skill_name,
            ordinal: row.ordinal,
        }
    }
}
