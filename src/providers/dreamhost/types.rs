use serde::{Deserialize, Deserializer};

use crate::core::record::{DNSRecord, DNSRecordInput};
use crate::error::Error;

pub const CMD_LIST_RECORDS: &str = "dns-list_records";
pub const CMD_ADD_RECORD: &str = "dns-add_record";
pub const CMD_REMOVE_RECORD: &str = "dns-remove_record";

/// Every DreamHost API response is wrapped in this envelope. On failure
/// `data` holds an error code string instead of the payload.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub result: String,
    pub data: T,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DreamhostError {
    pub data: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl DreamhostError {
    pub fn message(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{}: {}", self.data, reason),
            None => self.data.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DreamhostRecord {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub zone: String,
    pub record: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "flag")]
    pub editable: bool,
}

/// DreamHost encodes booleans as `"0"` / `"1"`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Str(String),
        Num(u8),
        Bool(bool),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Str(s) => s == "1",
        Flag::Num(n) => n == 1,
        Flag::Bool(b) => b,
    })
}

impl TryFrom<DreamhostRecord> for DNSRecord {
    type Error = Error;

    fn try_from(dr: DreamhostRecord) -> Result<Self, Self::Error> {
        Ok(DNSRecord {
            record_type: dr.record_type.parse()?,
            record: dr.record,
            value: dr.value,
            comment: dr.comment,
            account_id: dr.account_id,
            zone: dr.zone,
            editable: dr.editable,
        })
    }
}

/// Query parameters identifying a record on add/remove.
pub fn record_params(input: &DNSRecordInput, with_comment: bool) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("record", input.record.clone()),
        ("type", input.record_type.to_string()),
        ("value", input.value.clone()),
    ];
    if with_comment {
        if let Some(comment) = &input.comment {
            params.push(("comment", comment.clone()));
        }
    }
    params
}
