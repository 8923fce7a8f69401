use serde::Deserialize;

/// Decoded response from the A record history endpoint.
///
/// The API omits `records` (or returns an empty array) for domains with no
/// recorded history; both decode to an empty vector here.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsHistory {
    #[serde(default)]
    pub records: Vec<HistoryRecord>,
}

/// One historical window: the IPs that answered for the domain between
/// `first_seen` and `last_seen`. The date strings are kept verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub values: Vec<RecordValue>,
    pub first_seen: String,
    pub last_seen: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordValue {
    pub ip: String,
}
