use sea_orm::entity::prelude::*;

/// A session of an event.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// The ID of the session.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The title of the session.
    pub title: String,
    /// When the session starts, if it was scheduled.
    pub start_time: Option<DateTime>,
    /// The ID of the event owning this session.
    pub event_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(has_many = "super::session_speakers::Entity")]
    SessionSpeakers,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::session_speakers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionSpeakers.def()
    }
}

impl Related<super::speaker::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_speakers::Relation::Speaker.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::session_speakers::Relation::Session.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
