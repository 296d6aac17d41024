//! Canned read-only reports.

use std::fmt;

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Double, Integer, Text};
use diesel::PgConnection;

use crate::error::{AppError, AppResult};
use crate::schema::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report{
    StaffPerBranch,
    OrderBills,
    ChefMenus,
    SalonUsage,
    OrderContents,
}

impl Report{
    pub const ALL:[Report;5]=[
        Report::StaffPerBranch,
        Report::OrderBills,
        Report::ChefMenus,
        Report::SalonUsage,
        Report::OrderContents,
    ];

    pub fn title(self)->&'static str{
        match self {
            Report::StaffPerBranch=>"Staff and payroll per branch",
            Report::OrderBills=>"Order bills",
            Report::ChefMenus=>"Dishes by chef",
            Report::SalonUsage=>"Orders and revenue per salon",
            Report::OrderContents=>"Food items in each order",
        }
    }

    pub fn header(self)->&'static [&'static str]{
        match self {
            Report::StaffPerBranch=>&["branch","city","employees","payroll"],
            Report::OrderBills=>&["order","customer","waiter","date","total_cost"],
            Report::ChefMenus=>&["chef","food","type","cost"],
            Report::SalonUsage=>&["salon","type","orders","revenue"],
            Report::OrderContents=>&["order","items","foods"],
        }
    }

    /// Resolves a 1-based menu selection.
    pub fn from_index(index:usize)->AppResult<Report>{
        index.checked_sub(1)
            .and_then(|i|Report::ALL.get(i).copied())
            .ok_or_else(||AppError::UnknownQuery(index.to_string()))
    }

    pub fn run(self,conn:&mut PgConnection)->AppResult<Vec<Vec<String>>>{
        let rows=match self {
            Report::StaffPerBranch=>cells(diesel::sql_query(STAFF_PER_BRANCH).load::<BranchStaff>(conn)?),
            Report::OrderBills=>cells(diesel::sql_query(ORDER_BILLS).load::<OrderBill>(conn)?),
            Report::ChefMenus=>food::table
                .inner_join(employee::table.inner_join(person::table))
                .select((person::first_name,person::last_name,food::name,food::kind,food::cost))
                .order(food::id)
                .load::<(String,String,String,String,f32)>(conn)?
                .into_iter()
                .map(|(first_name,last_name,name,kind,cost)|vec![
                    format!("{first_name} {last_name}"),
                    name,
                    kind,
                    cost.to_string(),
                ])
                .collect(),
            Report::SalonUsage=>cells(diesel::sql_query(SALON_USAGE).load::<SalonUsage>(conn)?),
            Report::OrderContents=>cells(diesel::sql_query(ORDER_CONTENTS).load::<OrderContents>(conn)?),
        };

        Ok(rows)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

trait ReportRow{
    fn cells(self)->Vec<String>;
}

fn cells<T:ReportRow>(rows:Vec<T>)->Vec<Vec<String>>{
    rows.into_iter().map(ReportRow::cells).collect()
}

const STAFF_PER_BRANCH:&str="
    SELECT b.name AS branch_name, b.city AS city,
           COUNT(e.id) AS employees,
           COALESCE(SUM(e.salary), 0)::float8 AS payroll
    FROM branch b
    LEFT JOIN employee e ON e.branch_id = b.id
    GROUP BY b.id, b.name, b.city
    ORDER BY b.id";

#[derive(QueryableByName, Debug)]
struct BranchStaff{
    #[diesel(sql_type = Text)]
    branch_name:String,
    #[diesel(sql_type = Text)]
    city:String,
    #[diesel(sql_type = BigInt)]
    employees:i64,
    #[diesel(sql_type = Double)]
    payroll:f64,
}

impl ReportRow for BranchStaff {
    fn cells(self)->Vec<String>{
        vec![self.branch_name,self.city,self.employees.to_string(),self.payroll.to_string()]
    }
}

const ORDER_BILLS:&str="
    SELECT o.id AS order_id,
           c.first_name || ' ' || c.last_name AS customer_name,
           w.first_name || ' ' || w.last_name AS waiter_name,
           o.order_date AS order_date,
           o.total_cost::float8 AS total_cost
    FROM orders o
    JOIN person c ON c.id = o.customer_id
    JOIN person w ON w.id = o.waiter_id
    ORDER BY o.id";

#[derive(QueryableByName, Debug)]
struct OrderBill{
    #[diesel(sql_type = Integer)]
    order_id:i32,
    #[diesel(sql_type = Text)]
    customer_name:String,
    #[diesel(sql_type = Text)]
    waiter_name:String,
    #[diesel(sql_type = Date)]
    order_date:NaiveDate,
    #[diesel(sql_type = Double)]
    total_cost:f64,
}

impl ReportRow for OrderBill {
    fn cells(self)->Vec<String>{
        vec![
            self.order_id.to_string(),
            self.customer_name,
            self.waiter_name,
            self.order_date.to_string(),
            self.total_cost.to_string(),
        ]
    }
}

const SALON_USAGE:&str="
    SELECT s.id AS salon_id, s.type AS salon_type,
           COUNT(o.id) AS order_count,
           COALESCE(SUM(o.total_cost), 0)::float8 AS revenue
    FROM salon s
    LEFT JOIN orders o ON o.salon_id = s.id
    GROUP BY s.id, s.type
    ORDER BY s.id";

#[derive(QueryableByName, Debug)]
struct SalonUsage{
    #[diesel(sql_type = Integer)]
    salon_id:i32,
    #[diesel(sql_type = Text)]
    salon_type:String,
    #[diesel(sql_type = BigInt)]
    order_count:i64,
    #[diesel(sql_type = Double)]
    revenue:f64,
}

impl ReportRow for SalonUsage {
    fn cells(self)->Vec<String>{
        vec![self.salon_id.to_string(),self.salon_type,self.order_count.to_string(),self.revenue.to_string()]
    }
}

const ORDER_CONTENTS:&str="
    SELECT o.id AS order_id,
           COUNT(f.id) AS item_count,
           COALESCE(string_agg(f.name, ', ' ORDER BY link.id), '') AS foods
    FROM orders o
    LEFT JOIN order_foods link ON link.order_id = o.id
    LEFT JOIN food f ON f.id = link.food_id
    GROUP BY o.id
    ORDER BY o.id";

#[derive(QueryableByName, Debug)]
struct OrderContents{
    #[diesel(sql_type = Integer)]
    order_id:i32,
    #[diesel(sql_type = BigInt)]
    item_count:i64,
    #[diesel(sql_type = Text)]
    foods:String,
}

impl ReportRow for OrderContents {
    fn cells(self)->Vec<String>{
        vec![self.order_id.to_string(),self.item_count.to_string(),self.foods]
    }
}

#[cfg(test)]
mod test{
    use super::*;

    #[test]
    fn test_report_lookup(){
        assert_eq!(Report::from_index(1).unwrap(),Report::StaffPerBranch);
        assert_eq!(Report::from_index(5).unwrap(),Report::OrderContents);
        assert!(matches!(Report::from_index(0),Err(AppError::UnknownQuery(_))));
        assert!(matches!(Report::from_index(6),Err(AppError::UnknownQuery(s)) if s=="6"));
    }

    #[test]
    fn test_cells_follow_header(){
        let row=BranchStaff{
            branch_name:"BestFood_1".into(),
            city:"Varamin".into(),
            employees:6,
            payroll:2650.0,
        };
        let cells=row.cells();
        assert_eq!(cells.len(),Report::StaffPerBranch.header().len());
        assert_eq!(cells,vec!["BestFood_1","Varamin","6","2650"]);

        let row=OrderContents{order_id:1,item_count:3,foods:"Chelo Morgh, Chelo Kabab, Hot Dog".into()};
        assert_eq!(row.cells().len(),Report::OrderContents.header().len());
    }
}
