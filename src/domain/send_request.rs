/// A validated send request: the required fields are present and non-empty,
/// `to` is normalized into a list. `from` and `reply_to` stay optional until
/// the relay resolves them against the configured defaults.
pub struct SendRequest {
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub from: Option<String>,
    pub reply_to: Option<String>,
}

/// The `to` field as browsers send it: a single address or a list.
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Normalize into an ordered list, wrapping a single address.
    pub fn into_addresses(self) -> Vec<String> {
        match self {
            Recipients::One(address) => vec![address],
            Recipients::Many(addresses) => addresses,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::One(address) => address.is_empty(),
            Recipients::Many(addresses) => addresses.is_empty(),
        }
    }
}
