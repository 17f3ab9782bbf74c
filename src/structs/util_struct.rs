use serde::{Deserialize, Serialize};

use crate::structs::db_struct::{Booking, Service};

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePage {
    pub services: Vec<Service>,
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResult {
    pub modified_count: u64,
    pub booking: Booking,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}
