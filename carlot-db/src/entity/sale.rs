use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sale")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: String,
    pub salesperson: String,
    pub customer_name: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub sale_price: String,
    pub commission_rate: f64,
    pub commission_earned: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
