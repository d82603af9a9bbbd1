use sea_orm::entity::prelude::*;

/// A conference event, taking place somewhere.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// The ID of the event.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The name of the event.
    pub name: String,
    /// Where the event takes place.
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
