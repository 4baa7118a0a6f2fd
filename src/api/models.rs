use serde::{Deserialize, Serialize};

use crate::database::PlayerId;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlayer {
    pub player_id: PlayerId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TableList {
    pub tables: Vec<String>,
}
