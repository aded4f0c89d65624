use serde::Deserialize;

use crate::types::UserAccountInfo;

#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateSessionTicketResult {
    /// Set when the ticket was valid but has since expired.
    pub is_session_ticket_expired: Option<bool>,
    pub user_info: Option<UserAccountInfo>,
}
