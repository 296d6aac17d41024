use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{Double, Integer, Text};
use diesel::PgConnection;

use crate::error::AppResult;
use crate::models::Branch;
use crate::reports::Report;
use crate::schema::branch;
use crate::schema_manager;
use crate::tables::{Row, Value};
use crate::utils::establish_connection;

/// Everything the shell and the seed loader need from the database.
pub trait Store{
    fn server_version(&mut self)->AppResult<String>;

    fn create_tables(&mut self)->AppResult<()>;

    /// Returns the number of rows written.
    fn insert_row(&mut self,row:&Row)->AppResult<usize>;

    /// All rows commit together or none do.
    fn insert_rows(&mut self,rows:&[Row])->AppResult<usize>;

    /// Like [`Store::insert_rows`], but returns the stored `id` of each row in input order.
    fn insert_rows_returning_ids(&mut self,rows:&[Row])->AppResult<Vec<i32>>;

    fn run_report(&mut self,report:Report)->AppResult<Vec<Vec<String>>>;
}

/// Postgres store. Each call opens its own connection and drops it before returning.
#[derive(Clone)]
pub struct PgGateway{
    database_url:String,
}

impl std::fmt::Debug for PgGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgGateway")
         .field("database_url", &"url hidden")
         .finish()
    }
}

impl PgGateway{
    pub fn new(database_url:impl Into<String>)->PgGateway{
        PgGateway{
            database_url:database_url.into(),
        }
    }

    fn with_connection<T,F>(&self,f:F)->AppResult<T>
    where
    F:FnOnce(&mut PgConnection)->AppResult<T>
    {
        let result=establish_connection(&self.database_url)
            .and_then(|mut conn|f(&mut conn));

        if let Err(e)=result.as_ref() {
            tracing::error!("database operation failed: {}",e);
        }
        result
    }

    pub fn find_branch(&self,id:i32)->AppResult<Option<Branch>>{
        self.with_connection(|conn|find_branch(conn,id))
    }
}

impl Store for PgGateway {
    fn server_version(&mut self)->AppResult<String>{
        self.with_connection(server_version)
    }

    fn create_tables(&mut self)->AppResult<()>{
        self.with_connection(schema_manager::create_tables)
    }

    fn insert_row(&mut self,row:&Row)->AppResult<usize>{
        self.with_connection(|conn|insert_row(conn,row))
    }

    fn insert_rows(&mut self,rows:&[Row])->AppResult<usize>{
        self.with_connection(|conn|insert_rows(conn,rows))
    }

    fn insert_rows_returning_ids(&mut self,rows:&[Row])->AppResult<Vec<i32>>{
        self.with_connection(|conn|insert_rows_returning_ids(conn,rows))
    }

    fn run_report(&mut self,report:Report)->AppResult<Vec<Vec<String>>>{
        self.with_connection(|conn|report.run(conn))
    }
}

/// A single connection used directly, e.g. inside a test transaction.
impl Store for PgConnection {
    fn server_version(&mut self)->AppResult<String>{
        server_version(self)
    }

    fn create_tables(&mut self)->AppResult<()>{
        schema_manager::create_tables(self)
    }

    fn insert_row(&mut self,row:&Row)->AppResult<usize>{
        insert_row(self,row)
    }

    fn insert_rows(&mut self,rows:&[Row])->AppResult<usize>{
        insert_rows(self,rows)
    }

    fn insert_rows_returning_ids(&mut self,rows:&[Row])->AppResult<Vec<i32>>{
        insert_rows_returning_ids(self,rows)
    }

    fn run_report(&mut self,report:Report)->AppResult<Vec<Vec<String>>>{
        report.run(self)
    }
}

#[derive(QueryableByName)]
struct InsertedId{
    #[diesel(sql_type = Integer)]
    id:i32,
}

fn bind_row(row:&Row)->BoxedSqlQuery<'_,Pg,SqlQuery>{
    bind_values(diesel::sql_query(row.table().insert_sql()),row)
}

fn bind_values(query:SqlQuery,row:&Row)->BoxedSqlQuery<'_,Pg,SqlQuery>{
    let query=query.into_boxed::<Pg>();

    row.values().iter().fold(query,|query,value|match value {
        Value::Int(v)=>query.bind::<Integer,_>(*v),
        Value::Float(v)=>query.bind::<Double,_>(*v),
        Value::Text(v)=>query.bind::<Text,_>(v.as_str()),
    })
}

pub fn server_version(conn:&mut PgConnection)->AppResult<String>{
    let version=diesel::select(diesel::dsl::sql::<Text>("version()"))
        .get_result::<String>(conn)?;
    Ok(version)
}

pub fn insert_row(conn:&mut PgConnection,row:&Row)->AppResult<usize>{
    let count=bind_row(row).execute(conn)?;
    tracing::info!("inserted {} row into `{}`",count,row.table());
    Ok(count)
}

pub fn insert_rows(conn:&mut PgConnection,rows:&[Row])->AppResult<usize>{
    let count=conn.transaction(|conn|{
        rows.iter().try_fold(0,|count,row|Ok::<_,diesel::result::Error>(count+bind_row(row).execute(conn)?))
    })?;

    if let Some(row)=rows.first() {
        tracing::info!("inserted {} rows into `{}`",count,row.table());
    }
    Ok(count)
}

pub fn insert_rows_returning_ids(conn:&mut PgConnection,rows:&[Row])->AppResult<Vec<i32>>{
    let ids=conn.transaction(|conn|{
        rows.iter()
            .map(|row|{
                let sql=format!("{} RETURNING id",row.table().insert_sql());
                bind_values(diesel::sql_query(sql),row)
                    .get_result::<InsertedId>(conn)
                    .map(|inserted|inserted.id)
            })
            .collect::<QueryResult<Vec<_>>>()
    })?;

    if let Some(row)=rows.first() {
        tracing::info!("inserted {} rows into `{}`",ids.len(),row.table());
    }
    Ok(ids)
}

pub fn find_branch(conn:&mut PgConnection,id:i32)->AppResult<Option<Branch>>{
    let found=branch::table
        .find(id)
        .first::<Branch>(conn)
        .optional()?;
    Ok(found)
}
