use diesel::PgConnection;
use diesel::prelude::*;

use crate::error::AppResult;

/// Opens a fresh connection. Callers drop it when their operation is over.
pub fn establish_connection(database_url:&str)->AppResult<PgConnection>{
    let conn=PgConnection::establish(database_url)?;
    Ok(conn)
}

#[cfg(test)]
pub(crate) fn test_database_url()->String{
    dotenvy::dotenv().ok();

    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Connection inside a transaction that is never committed.
#[cfg(test)]
pub(crate) fn test_connection()->PgConnection{
    let mut conn=establish_connection(&test_database_url()).unwrap();
    conn.begin_test_transaction().unwrap();
    conn
}
