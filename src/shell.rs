//! Numbered-menu console over a [`Store`].

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};
use crate::gateway::Store;
use crate::reports::Report;
use crate::seed::load_seed_data;
use crate::tables::{coerce, Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState{
    MenuRoot,
    CollectRow,
    RunReport,
    InitSchema,
    Closed,
}

const MENU:&str="
    :: Use belows numbers to do something:
       1 - Insert data into a table.
       2 - Run a report.
       3 - Create tables and insert sample data.
       0 - Close the app.";

/// One console session. Owns the store, the console streams and the
/// "sample data already loaded" flag.
pub struct Shell<S,R,W>{
    store:S,
    input:R,
    output:W,
    initialized:bool,
}

impl<S:Store,R:BufRead,W:Write> Shell<S,R,W>{
    pub fn new(store:S,input:R,output:W)->Shell<S,R,W>{
        Shell{
            store,
            input,
            output,
            initialized:false,
        }
    }

    pub fn is_initialized(&self)->bool{
        self.initialized
    }

    pub fn store(&self)->&S{
        &self.store
    }

    /// Runs until the operator exits or input ends. Only console I/O errors escape.
    pub fn run(&mut self)->AppResult<()>{
        writeln!(self.output,"{MENU}")?;

        let mut state=ShellState::MenuRoot;
        while state!=ShellState::Closed {
            state=self.step(state)?;
        }

        Ok(())
    }

    pub fn step(&mut self,state:ShellState)->AppResult<ShellState>{
        let result=match state {
            ShellState::MenuRoot=>self.menu_root(),
            ShellState::CollectRow=>self.collect_row(),
            ShellState::RunReport=>self.run_report(),
            ShellState::InitSchema=>self.init_schema(),
            ShellState::Closed=>Ok(ShellState::Closed),
        };

        match result {
            Err(AppError::Io(e))=>Err(AppError::Io(e)),
            Err(e)=>{
                tracing::warn!("{:?} failed: {}",state,e);
                writeln!(self.output,"!! {e}")?;
                Ok(ShellState::MenuRoot)
            }
            next=>next,
        }
    }

    fn menu_root(&mut self)->AppResult<ShellState>{
        let Some(choice)=self.prompt("\n>> ")? else {
            return Ok(ShellState::Closed);
        };

        let next=match choice.trim() {
            "1"=>ShellState::CollectRow,
            "2"=>ShellState::RunReport,
            "3"=>ShellState::InitSchema,
            "0"=>{
                writeln!(self.output,"!! App closed.")?;
                ShellState::Closed
            }
            other=>{
                writeln!(self.output,":: Unknown command `{other}`.{MENU}")?;
                ShellState::MenuRoot
            }
        };
        Ok(next)
    }

    fn collect_row(&mut self)->AppResult<ShellState>{
        writeln!(self.output,"\n    :: Select number of the table:")?;
        for (index,table) in Table::ALL.iter().enumerate() {
            writeln!(self.output,"       {}. {}",index+1,table)?;
        }

        let Some(choice)=self.prompt(">> Enter the table number: ")? else {
            return Ok(ShellState::Closed);
        };
        let choice=choice.trim();
        let table=choice.parse::<usize>()
            .map_err(|_|AppError::UnknownTable(choice.to_string()))
            .and_then(Table::from_index)?;

        writeln!(self.output,":: Insert data for each column:")?;
        let mut values=Vec::with_capacity(table.columns().len());
        for column in table.columns() {
            let Some(value)=self.prompt(&format!(">> Column '{column}': "))? else {
                return Ok(ShellState::Closed);
            };
            values.push(coerce(*column,&value)?);
        }

        let row=Row::new(table,values)?;
        let count=self.store.insert_row(&row)?;
        writeln!(self.output,":: {count} row inserted into '{table}'.")?;

        Ok(ShellState::MenuRoot)
    }

    fn run_report(&mut self)->AppResult<ShellState>{
        writeln!(self.output,"\n    :: Select number of the report:")?;
        for (index,report) in Report::ALL.iter().enumerate() {
            writeln!(self.output,"       {}. {}",index+1,report)?;
        }

        let Some(choice)=self.prompt(">> Enter the report number: ")? else {
            return Ok(ShellState::Closed);
        };
        let choice=choice.trim();
        let report=choice.parse::<usize>()
            .map_err(|_|AppError::UnknownQuery(choice.to_string()))
            .and_then(Report::from_index)?;

        let rows=self.store.run_report(report)?;
        writeln!(self.output,":: {}",report.header().join(" | "))?;
        for row in &rows {
            writeln!(self.output,"   {}",row.join(" | "))?;
        }
        writeln!(self.output,":: {} rows.",rows.len())?;

        Ok(ShellState::MenuRoot)
    }

    fn init_schema(&mut self)->AppResult<ShellState>{
        if self.initialized {
            writeln!(self.output,":: Tables and sample data are already set up.")?;
            return Ok(ShellState::MenuRoot);
        }

        self.store.create_tables()?;
        writeln!(self.output,":: All tables created successfully.\n")?;

        writeln!(self.output,":: Inserting sample data ...")?;
        for (table,count) in load_seed_data(&mut self.store)? {
            writeln!(self.output,"   [Done] Inserting to '{table}' ({count} rows)")?;
        }
        self.initialized=true;

        Ok(ShellState::MenuRoot)
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self,text:&str)->AppResult<Option<String>>{
        write!(self.output,"{text}")?;
        self.output.flush()?;

        let mut line=String::new();
        if self.input.read_line(&mut line)?==0 {
            return Ok(None);
        }

        let trimmed=line.trim_end_matches(['\n','\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod test{
    use std::io::Cursor;

    use super::*;
    use crate::tables::Value;

    #[derive(Default)]
    struct MemoryStore{
        rows:Vec<Row>,
        batches:usize,
        tables_created:usize,
        fail_writes:bool,
    }

    impl Store for MemoryStore {
        fn server_version(&mut self)->AppResult<String>{
            Ok("memory".into())
        }

        fn create_tables(&mut self)->AppResult<()>{
            self.tables_created+=1;
            Ok(())
        }

        fn insert_row(&mut self,row:&Row)->AppResult<usize>{
            if self.fail_writes {
                return Err(AppError::Execution(diesel::result::Error::NotFound));
            }
            self.rows.push(row.clone());
            Ok(1)
        }

        fn insert_rows(&mut self,rows:&[Row])->AppResult<usize>{
            if self.fail_writes {
                return Err(AppError::Execution(diesel::result::Error::NotFound));
            }
            self.batches+=1;
            self.rows.extend_from_slice(rows);
            Ok(rows.len())
        }

        fn insert_rows_returning_ids(&mut self,rows:&[Row])->AppResult<Vec<i32>>{
            let first=self.rows.len() as i32+1;
            self.insert_rows(rows)?;
            Ok((first..first+rows.len() as i32).collect())
        }

        fn run_report(&mut self,report:Report)->AppResult<Vec<Vec<String>>>{
            match report {
                Report::StaffPerBranch=>Ok(vec![vec!["BestFood_1".into(),"Varamin".into(),"6".into(),"2650".into()]]),
                _=>Ok(vec![]),
            }
        }
    }

    fn run_shell(store:MemoryStore,input:&str)->Shell<MemoryStore,Cursor<Vec<u8>>,Vec<u8>>{
        let mut shell=Shell::new(store,Cursor::new(input.as_bytes().to_vec()),Vec::new());
        shell.run().unwrap();
        shell
    }

    fn output_of<S,R>(shell:&Shell<S,R,Vec<u8>>)->String{
        String::from_utf8(shell.output.clone()).unwrap()
    }

    #[test]
    fn test_insert_branch(){
        let shell=run_shell(MemoryStore::default(),"1\n1\n96101\nBestFood_1\nTehran\nVaramin\nZeytoun\n1390-11-05\n0\n");

        assert_eq!(shell.store().rows.len(),1);
        let row=&shell.store().rows[0];
        assert_eq!(row.table(),Table::Branch);
        assert_eq!(row.values()[0],Value::Int(96101));
        assert_eq!(row.values()[5],Value::Text("1390-11-05".into()));
        assert!(output_of(&shell).contains("1 row inserted into 'branch'"));
    }

    #[test]
    fn test_inserted_row_keeps_typed_values(){
        let shell=run_shell(MemoryStore::default(),"1\n3\n13114\n96101\nManager\nMaster\n1367-09-27\n 950 \nTehran\nYes\n0\n");

        let row=&shell.store().rows[0];
        assert_eq!(row.table(),Table::Employee);
        assert_eq!(row.values()[1],Value::Int(96101));
        assert_eq!(row.values()[5],Value::Float(950.0));
        assert_eq!(row.values()[7],Value::Text("Yes".into()));
    }

    #[test]
    fn test_table_past_the_end_is_rejected(){
        let shell=run_shell(MemoryStore::default(),"1\n9\n0\n");

        assert!(shell.store().rows.is_empty());
        let output=output_of(&shell);
        assert!(output.contains("!! unknown table `9`"));
        assert!(output.contains("App closed."));
    }

    #[test]
    fn test_non_numeric_table_is_rejected(){
        let shell=run_shell(MemoryStore::default(),"1\nbranch\n0\n");
        assert!(output_of(&shell).contains("!! unknown table `branch`"));
    }

    #[test]
    fn test_bad_number_returns_to_menu(){
        let shell=run_shell(MemoryStore::default(),"1\n5\nabc\n1\n4\n24127\n0\n");

        assert!(output_of(&shell).contains("invalid value \"abc\" for column `id`"));
        assert_eq!(shell.store().rows.len(),1);
        assert_eq!(shell.store().rows[0].table(),Table::Customer);
    }

    #[test]
    fn test_store_failure_is_reported(){
        let store=MemoryStore{fail_writes:true,..Default::default()};
        let shell=run_shell(store,"1\n4\n24127\n0\n");

        let output=output_of(&shell);
        assert!(output.contains("!! statement failed"));
        assert!(output.contains("App closed."));
    }

    #[test]
    fn test_end_of_input_closes(){
        let shell=run_shell(MemoryStore::default(),"1\n1\n96101\n");
        assert!(shell.store().rows.is_empty());
    }

    #[test]
    fn test_init_runs_once(){
        let shell=run_shell(MemoryStore::default(),"3\n3\n0\n");

        assert!(shell.is_initialized());
        assert_eq!(shell.store().tables_created,1);
        assert_eq!(shell.store().batches,8);
        assert_eq!(shell.store().rows.len(),97);
        assert!(output_of(&shell).contains("already set up"));
    }

    #[test]
    fn test_failed_init_can_be_retried(){
        let store=MemoryStore{fail_writes:true,..Default::default()};
        let shell=run_shell(store,"3\n3\n0\n");

        assert!(!shell.is_initialized());
        assert_eq!(shell.store().tables_created,2);
    }

    #[test]
    fn test_report_rows_are_printed(){
        let shell=run_shell(MemoryStore::default(),"2\n1\n0\n");

        let output=output_of(&shell);
        assert!(output.contains("branch | city | employees | payroll"));
        assert!(output.contains("BestFood_1 | Varamin | 6 | 2650"));
        assert!(output.contains(":: 1 rows."));
    }

    #[test]
    fn test_unknown_report(){
        let shell=run_shell(MemoryStore::default(),"2\n6\n0\n");
        assert!(output_of(&shell).contains("!! unknown report `6`"));
    }

    #[test]
    fn test_step_from_closed_stays_closed(){
        let mut shell=Shell::new(MemoryStore::default(),Cursor::new(Vec::new()),Vec::new());
        assert_eq!(shell.step(ShellState::Closed).unwrap(),ShellState::Closed);
        assert_eq!(shell.step(ShellState::MenuRoot).unwrap(),ShellState::Closed);
    }
}
