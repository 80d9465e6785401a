use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub stadium_id: i32,
    pub kickoff: DateTimeUtc,
    pub home_goals: i32,
    pub away_goals: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clubs::Entity",
        from = "Column::HomeClubId",
        to = "super::clubs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HomeClub,
    #[sea_orm(
        belongs_to = "super::clubs::Entity",
        from = "Column::AwayClubId",
        to = "super::clubs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AwayClub,
    #[sea_orm(
        belongs_to = "super::stadiums::Entity",
        from = "Column::StadiumId",
        to = "super::stadiums::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Stadium,
}

impl Related<super::stadiums::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stadium.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
