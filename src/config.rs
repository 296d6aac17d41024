use std::collections::HashMap;
use std::path::Path;
use std::{env, fs};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_CONFIG_FILE: &str = "database.toml";
pub const DEFAULT_SECTION: &str = "postgresql";

/// Connection parameters read from one section of the config file.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig{
    pub host:String,

    #[serde(default="default_port")]
    pub port:u16,

    pub dbname:String,

    pub user:String,

    pub password:String,
}

fn default_port()->u16{
    5432
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"password hidden")
            .finish()
    }
}

impl DatabaseConfig{
    /// libpq keyword/value connection string. Values are quoted, so any
    /// character is allowed in them.
    pub fn database_url(&self)->String{
        format!(
            "host={} port={} dbname={} user={} password={}",
            conninfo_value(&self.host),
            self.port,
            conninfo_value(&self.dbname),
            conninfo_value(&self.user),
            conninfo_value(&self.password),
        )
    }
}

fn conninfo_value(value:&str)->String{
    let escaped=value.replace('\\',"\\\\").replace('\'',"\\'");
    format!("'{escaped}'")
}

/// Parses `content` and returns the named section.
pub fn parse_config(content:&str,section:&str)->AppResult<DatabaseConfig>{
    let mut sections:HashMap<String,toml::Value>=toml::from_str(content)
        .map_err(|e|AppError::Config(e.to_string()))?;

    let value=sections.remove(section)
        .ok_or_else(||AppError::Config(format!("section [{section}] not found")))?;

    value.try_into::<DatabaseConfig>()
        .map_err(|e|AppError::Config(format!("section [{section}]: {e}")))
}

pub fn load_config(path:&Path,section:&str)->AppResult<DatabaseConfig>{
    let content=fs::read_to_string(path)
        .map_err(|e|AppError::Config(format!("cannot read {}: {}",path.display(),e)))?;

    parse_config(&content,section)
        .map_err(|e|match e {
            AppError::Config(msg)=>AppError::Config(format!("{msg} in {}",path.display())),
            other=>other,
        })
}

/// `DATABASE_URL` wins over the config file, the way `.env` driven setups expect.
pub fn resolve_database_url(path:&Path,section:&str)->AppResult<String>{
    database_url_or_config(env::var("DATABASE_URL").ok(),path,section)
}

/// Uses `env_url` when set, otherwise reads `section` of the file at `path`.
pub fn database_url_or_config(env_url:Option<String>,path:&Path,section:&str)->AppResult<String>{
    if let Some(url)=env_url {
        tracing::debug!("using DATABASE_URL from the environment");
        return Ok(url);
    }

    let config=load_config(path,section)?;
    tracing::debug!("loaded {:?} from {}",config,path.display());

    Ok(config.database_url())
}
