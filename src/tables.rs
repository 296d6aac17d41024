//! Static table metadata and the row mapper.
//!
//! Every table the console can write to is a variant of [`Table`]; its columns and
//! its INSERT statement are exhaustive matches so a new table cannot be half wired.

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table{
    Branch,
    Person,
    Employee,
    Customer,
    Salon,
    Orders,
    Food,
    OrderFoods,
}

impl Table{
    /// Menu order, which is also the order foreign keys allow rows to be inserted in.
    pub const ALL:[Table;8]=[
        Table::Branch,
        Table::Person,
        Table::Employee,
        Table::Customer,
        Table::Salon,
        Table::Orders,
        Table::Food,
        Table::OrderFoods,
    ];

    pub fn name(self)->&'static str{
        match self {
            Table::Branch=>"branch",
            Table::Person=>"person",
            Table::Employee=>"employee",
            Table::Customer=>"customer",
            Table::Salon=>"salon",
            Table::Orders=>"orders",
            Table::Food=>"food",
            Table::OrderFoods=>"order_foods",
        }
    }

    /// Columns supplied on insert, in statement order. Generated ids are not listed.
    pub fn columns(self)->&'static [&'static str]{
        match self {
            Table::Branch=>&["id","name","state","city","street","date"],
            Table::Person=>&["id","first_name","last_name","gender","phone_number"],
            Table::Employee=>&["id","branch_id","post","degree","birth_date","salary","state","married"],
            Table::Customer=>&["id"],
            Table::Salon=>&["id","capacity","type","floor"],
            Table::Orders=>&["customer_id","waiter_id","accountant_id","salon_id","order_date","reg_time","total_cost"],
            Table::Food=>&["id","chef_id","name","type","cost"],
            Table::OrderFoods=>&["order_id","food_id"],
        }
    }

    pub fn insert_sql(self)->&'static str{
        match self {
            Table::Branch=>"INSERT INTO branch (id, name, state, city, street, date) \
                VALUES ($1, $2, $3, $4, $5, $6::date)",
            Table::Person=>"INSERT INTO person (id, first_name, last_name, gender, phone_number) \
                VALUES ($1, $2, $3, $4, $5)",
            Table::Employee=>"INSERT INTO employee (id, branch_id, post, degree, birth_date, salary, state, married) \
                VALUES ($1, $2, $3, $4, $5::date, $6, $7, $8)",
            Table::Customer=>"INSERT INTO customer (id) VALUES ($1)",
            Table::Salon=>"INSERT INTO salon (id, capacity, type, floor) VALUES ($1, $2, $3, $4)",
            Table::Orders=>"INSERT INTO orders (customer_id, waiter_id, accountant_id, salon_id, order_date, reg_time, total_cost) \
                VALUES ($1, $2, $3, $4, $5::date, $6::time, $7)",
            Table::Food=>"INSERT INTO food (id, chef_id, name, type, cost) VALUES ($1, $2, $3, $4, $5)",
            Table::OrderFoods=>"INSERT INTO order_foods (order_id, food_id) VALUES ($1, $2)",
        }
    }

    /// Resolves a 1-based menu selection.
    pub fn from_index(index:usize)->AppResult<Table>{
        index.checked_sub(1)
            .and_then(|i|Table::ALL.get(i).copied())
            .ok_or_else(||AppError::UnknownTable(index.to_string()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err=AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL.iter()
            .copied()
            .find(|t|t.name()==s)
            .ok_or_else(||AppError::UnknownTable(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind{
    Integer,
    Float,
    Text,
}

impl ColumnKind{
    /// Type is decided by the column name alone.
    pub fn of(column:&str)->ColumnKind{
        if column.contains("id") || column=="capacity" || column=="floor" {
            ColumnKind::Integer
        } else if matches!(column,"salary" | "total_cost" | "cost") {
            ColumnKind::Float
        } else {
            ColumnKind::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value{
    Int(i32),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v)=>write!(f,"{v}"),
            Value::Float(v)=>write!(f,"{v}"),
            Value::Text(v)=>f.write_str(v),
        }
    }
}

pub fn coerce(column:&'static str,raw:&str)->AppResult<Value>{
    let invalid=||AppError::InvalidInput{column,value:raw.to_string()};

    match ColumnKind::of(column) {
        ColumnKind::Integer=>raw.trim().parse::<i32>().map(Value::Int).map_err(|_|invalid()),
        ColumnKind::Float=>raw.trim().parse::<f64>()
            .ok()
            .filter(|v|v.is_finite())
            .map(Value::Float)
            .ok_or_else(invalid),
        ColumnKind::Text=>Ok(Value::Text(raw.to_string())),
    }
}

/// A typed row for one table, values in [`Table::columns`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row{
    table:Table,
    values:Vec<Value>,
}

impl Row{
    /// Wraps already coerced values, checking only that there is one per column.
    pub fn new(table:Table,values:Vec<Value>)->AppResult<Row>{
        let expected=table.columns().len();
        if values.len()!=expected {
            return Err(AppError::ColumnCount{
                table:table.name(),
                expected,
                found:values.len(),
            });
        }
        Ok(Row{table,values})
    }

    pub fn table(&self)->Table{
        self.table
    }

    pub fn values(&self)->&[Value]{
        &self.values
    }
}

pub fn map_row<S:AsRef<str>>(table:Table,raw:&[S])->AppResult<Row>{
    let columns=table.columns();
    if raw.len()!=columns.len() {
        return Err(AppError::ColumnCount{
            table:table.name(),
            expected:columns.len(),
            found:raw.len(),
        });
    }

    let values=columns.iter()
        .zip(raw)
        .map(|(column,value)|coerce(*column,value.as_ref()))
        .collect::<AppResult<Vec<_>>>()?;

    Row::new(table,values)
}

#[cfg(test)]
mod test{
    use super::*;

    fn sample(table:Table)->Vec<&'static str>{
        match table {
            Table::Branch=>vec!["96101","BestFood_1","Tehran","Varamin","Zeytoun","1390-11-05"],
            Table::Person=>vec!["13114","Mostafa","Mirzaee","male","9177463827"],
            Table::Employee=>vec!["13114","96101","Manager","Master","1367-09-27","950","Tehran","Yes"],
            Table::Customer=>vec!["24127"],
            Table::Salon=>vec!["101","20","Class A","1"],
            Table::Orders=>vec!["24127","13119","23814","101","1399-11-07","06:05 PM","75000"],
            Table::Food=>vec!["961","13835","Chelo Morgh","Food","25000"],
            Table::OrderFoods=>vec!["1","961"],
        }
    }

    #[test]
    fn test_row_length_matches_columns(){
        for table in Table::ALL {
            let row=map_row(table,&sample(table)).unwrap();
            assert_eq!(row.values().len(),table.columns().len(),"{table}");
            assert_eq!(row.table(),table);
        }
    }

    #[test]
    fn test_values_follow_column_kind(){
        for table in Table::ALL {
            let row=map_row(table,&sample(table)).unwrap();
            for (column,value) in table.columns().iter().zip(row.values()) {
                match ColumnKind::of(column) {
                    ColumnKind::Integer=>assert!(matches!(value,Value::Int(_)),"{table}.{column}"),
                    ColumnKind::Float=>assert!(matches!(value,Value::Float(_)),"{table}.{column}"),
                    ColumnKind::Text=>assert!(matches!(value,Value::Text(_)),"{table}.{column}"),
                }
            }
        }
    }

    #[test]
    fn test_column_kinds(){
        assert_eq!(ColumnKind::of("id"),ColumnKind::Integer);
        assert_eq!(ColumnKind::of("accountant_id"),ColumnKind::Integer);
        assert_eq!(ColumnKind::of("capacity"),ColumnKind::Integer);
        assert_eq!(ColumnKind::of("floor"),ColumnKind::Integer);
        assert_eq!(ColumnKind::of("salary"),ColumnKind::Float);
        assert_eq!(ColumnKind::of("total_cost"),ColumnKind::Float);
        assert_eq!(ColumnKind::of("cost"),ColumnKind::Float);
        assert_eq!(ColumnKind::of("phone_number"),ColumnKind::Text);
        assert_eq!(ColumnKind::of("reg_time"),ColumnKind::Text);
    }

    #[test]
    fn test_branch_row(){
        let row=map_row(Table::Branch,&sample(Table::Branch)).unwrap();
        assert_eq!(row.values(),&[
            Value::Int(96101),
            Value::Text("BestFood_1".into()),
            Value::Text("Tehran".into()),
            Value::Text("Varamin".into()),
            Value::Text("Zeytoun".into()),
            Value::Text("1390-11-05".into()),
        ]);
    }

    #[test]
    fn test_numeric_input_is_trimmed(){
        assert_eq!(coerce("floor"," 3 ").unwrap(),Value::Int(3));
        assert_eq!(coerce("salary","950\n").unwrap(),Value::Float(950.0));
    }

    #[test]
    fn test_non_numeric_is_invalid(){
        let err=map_row(Table::Salon,&["101","twenty","Class A","1"]).unwrap_err();
        assert!(matches!(err,AppError::InvalidInput{column:"capacity",..}));

        let err=coerce("cost","cheap").unwrap_err();
        assert!(matches!(err,AppError::InvalidInput{column:"cost",ref value} if value=="cheap"));

        assert!(coerce("salary","NaN").is_err());
        assert!(coerce("id","1.5").is_err());
    }

    #[test]
    fn test_wrong_column_count(){
        let err=map_row(Table::OrderFoods,&["1"]).unwrap_err();
        assert!(matches!(err,AppError::ColumnCount{table:"order_foods",expected:2,found:1}));
    }

    #[test]
    fn test_row_from_coerced_values(){
        let row=Row::new(Table::OrderFoods,vec![Value::Int(1),Value::Int(961)]).unwrap();
        assert_eq!(row,map_row(Table::OrderFoods,&["1","961"]).unwrap());

        let err=Row::new(Table::Customer,vec![]).unwrap_err();
        assert!(matches!(err,AppError::ColumnCount{table:"customer",expected:1,found:0}));
    }

    #[test]
    fn test_table_lookup(){
        assert_eq!(Table::from_index(1).unwrap(),Table::Branch);
        assert_eq!(Table::from_index(8).unwrap(),Table::OrderFoods);
        assert!(matches!(Table::from_index(0),Err(AppError::UnknownTable(_))));
        assert!(matches!(Table::from_index(9),Err(AppError::UnknownTable(s)) if s=="9"));
        assert_eq!("orders".parse::<Table>().unwrap(),Table::Orders);
        assert!(matches!("waiters".parse::<Table>(),Err(AppError::UnknownTable(_))));
    }

    #[test]
    fn test_insert_sql_placeholders(){
        for table in Table::ALL {
            let sql=table.insert_sql();
            let count=table.columns().len();
            assert!(sql.contains(&format!("${count}")),"{table}");
            assert!(!sql.contains(&format!("${}",count+1)),"{table}");
            assert!(sql.starts_with(&format!("INSERT INTO {} (",table.name())));
        }
    }
}
