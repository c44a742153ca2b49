use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard roles known to the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    Agent,
    Seller,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Superadmin, Role::Admin, Role::Agent, Role::Seller];

    /// Case-insensitive parse. Unknown or padded strings are not roles.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "superadmin" => Some(Role::Superadmin),
            "admin" => Some(Role::Admin),
            "agent" => Some(Role::Agent),
            "seller" => Some(Role::Seller),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Seller => "seller",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Superadmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Agent => "Agent",
            Role::Seller => "Seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification state of a seller account.
///
/// Decoding is lenient: a value the dashboard does not know becomes
/// `Unknown` instead of failing the surrounding payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SellerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Suspended,
    Unknown,
}

impl SellerStatus {
    pub const ALL: [SellerStatus; 4] = [
        SellerStatus::Pending,
        SellerStatus::Approved,
        SellerStatus::Rejected,
        SellerStatus::Suspended,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(SellerStatus::Pending),
            "approved" => Some(SellerStatus::Approved),
            "rejected" => Some(SellerStatus::Rejected),
            "suspended" => Some(SellerStatus::Suspended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Pending => "pending",
            SellerStatus::Approved => "approved",
            SellerStatus::Rejected => "rejected",
            SellerStatus::Suspended => "suspended",
            SellerStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellerStatus::Pending => "Pending",
            SellerStatus::Approved => "Approved",
            SellerStatus::Rejected => "Rejected",
            SellerStatus::Suspended => "Suspended",
            SellerStatus::Unknown => "Unknown",
        }
    }
}

impl From<String> for SellerStatus {
    fn from(value: String) -> Self {
        SellerStatus::parse(&value).unwrap_or(SellerStatus::Unknown)
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_ignores_case_only() {
        assert_eq!(Role::parse("SuperAdmin"), Some(Role::Superadmin));
        assert_eq!(Role::parse("SELLER"), Some(Role::Seller));
        assert_eq!(Role::parse(" seller "), None);
        assert_eq!(Role::parse("admin\n"), None);
        assert_eq!(Role::parse("customer"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn seller_status_round_trips_through_str() {
        for status in SellerStatus::ALL {
            assert_eq!(SellerStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SellerStatus::parse("unknown"), None);
    }

    #[test]
    fn seller_status_decodes_unknown_values() {
        let decoded: Vec<SellerStatus> =
            serde_json::from_str(r#"["approved","Suspended","archived",""]"#).unwrap();
        assert_eq!(
            decoded,
            vec![
                SellerStatus::Approved,
                SellerStatus::Suspended,
                SellerStatus::Unknown,
                SellerStatus::Unknown,
            ]
        );
        assert_eq!(serde_json::to_string(&SellerStatus::Rejected).unwrap(), r#""rejected""#);
    }
}
