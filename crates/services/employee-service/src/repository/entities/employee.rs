//! Employee database entity for SeaORM.
//!
//! Each row belongs to exactly one user (`user_id` is unique). Removing the
//! user row cascades to the employee row.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Employee, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub id_number: String,
    pub position: String,
    pub department: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl Model {
    /// Build the domain entity from this row and its linked user.
    pub fn into_domain(self, user: User) -> Employee {
        Employee {
            id: self.id,
            id_number: self.id_number,
            position: self.position,
            department: self.department,
            user,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
