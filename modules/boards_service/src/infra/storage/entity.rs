//! SeaORM entities for database tables

/// Boards table entity
pub mod board {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "boards")]
    pub struct Model {
        /// Store-generated primary key
        #[sea_orm(primary_key)]
        pub board_id: i32,

        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub board_name: Option<String>,

        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub board_description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with tasks
        #[sea_orm(has_many = "super::task::Entity")]
        Tasks,
    }

    impl Related<super::task::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Tasks.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Tasks table entity
pub mod task {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "tasks")]
    pub struct Model {
        /// Store-generated primary key
        #[sea_orm(primary_key)]
        pub task_id: i32,

        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub task_name: Option<String>,

        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub task_description: Option<String>,

        #[sea_orm(column_type = "String(StringLen::N(20))")]
        pub task_icon: Option<String>,

        #[sea_orm(column_type = "String(StringLen::N(20))")]
        pub task_status: Option<String>,

        /// Owning board
        pub board_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to boards; removing a board removes its tasks
        #[sea_orm(
            belongs_to = "super::board::Entity",
            from = "Column::BoardId",
            to = "super::board::Column::BoardId",
            on_update = "Cascade",
            on_delete = "Cascade"
        )]
        Board,
    }

    impl Related<super::board::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Board.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
