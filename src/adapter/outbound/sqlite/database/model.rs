//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::patent_cache;

/// Database row for a cached patent.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = patent_cache)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CacheRow {
    pub patent_number: String,
    pub data_json: Option<String>,
    pub gpt_json: Option<String>,
}

/// Metadata write; leaves `gpt_json` untouched.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = patent_cache)]
pub struct NewMetadataRow<'a> {
    pub patent_number: &'a str,
    pub data_json: Option<&'a str>,
}
