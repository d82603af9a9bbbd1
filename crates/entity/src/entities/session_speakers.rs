use sea_orm::entity::prelude::*;

/// The association between sessions and their speakers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "session_speakers")]
pub struct Model {
    /// The ID of the session.
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: i32,
    /// The ID of the speaker.
    #[sea_orm(primary_key, auto_increment = false)]
    pub speaker_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::session::Entity",
        from = "Column::SessionId",
        to = "super::session::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::speaker::Entity",
        from = "Column::SpeakerId",
        to = "super::speaker::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Speaker,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::speaker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speaker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
