use sea_orm::entity::prelude::*;

/// Report record owned by the reports service.
///
/// `status` holds `"Draft"` or `"Submitted"`. The three `file_*` columns are
/// written together at upload; a row where only some of them are set breaks
/// the file-reference invariant and is rejected when mapped to the domain
/// model. The owning user lives in the identity service; `student_id` is a
/// plain reference, not a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub status: String,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub file_size: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
