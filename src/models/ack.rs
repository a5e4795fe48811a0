use serde::{Deserialize, Serialize};

/// Insert acknowledgment echoed back to the client, mirroring the wire shape of
/// a document-store insert result.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Delete acknowledgment. A count of 0 is still a success; the caller cannot
/// distinguish "not found" from "nothing to delete".
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
