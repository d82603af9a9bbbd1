use sea_orm::entity::prelude::*;

/// The biography of a speaker.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bios")]
pub struct Model {
    /// The ID of the bio.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The text of the bio.
    #[sea_orm(column_type = "Text")]
    pub bio_text: String,
    /// The ID of the speaker this bio describes.
    ///
    /// The column is unique, so a speaker has at most one bio.
    #[sea_orm(unique)]
    pub speaker_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::speaker::Entity",
        from = "Column::SpeakerId",
        to = "super::speaker::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Speaker,
}

impl Related<super::speaker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speaker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
