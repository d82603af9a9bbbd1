use sea_orm::entity::prelude::*;

/// A person speaking at one or more sessions.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "speakers")]
pub struct Model {
    /// The ID of the speaker.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The name of the speaker.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::bio::Entity")]
    Bio,
    #[sea_orm(has_many = "super::session_speakers::Entity")]
    SessionSpeakers,
}

impl Related<super::bio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bio.def()
    }
}

impl Related<super::session_speakers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionSpeakers.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_speakers::Relation::Session.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::session_speakers::Relation::Speaker.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
