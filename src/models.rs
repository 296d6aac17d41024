use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Branch{
    pub id: i32,
    pub name: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub date: NaiveDate,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Person{
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub phone_number: String,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Employee{
    pub id: i32,
    pub branch_id: i32,
    pub post: String,
    pub degree: String,
    pub birth_date: NaiveDate,
    pub salary: f32,
    pub state: String,
    pub married: String,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Customer{
    pub id: i32,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Salon{
    pub id: i32,
    pub capacity: i32,
    pub kind: String,
    pub floor: i32,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Order{
    pub id: i32,
    pub customer_id: i32,
    pub waiter_id: i32,
    pub accountant_id: i32,
    pub salon_id: i32,
    pub order_date: NaiveDate,
    pub reg_time: NaiveTime,
    pub total_cost: f32,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct Food{
    pub id: i32,
    pub chef_id: i32,
    pub name: String,
    pub kind: String,
    pub cost: f32,
}

#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct OrderFood{
    pub id: i32,
    pub order_id: i32,
    pub food_id: i32,
}
