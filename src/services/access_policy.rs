//! Visibility gate layered in front of raw metadata lookups.

use crate::models::record::ObjectRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Permission grants a principal may carry beyond plain ownership.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Admin,
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            "admin" => Ok(Permission::Admin),
            _ => Err(()),
        }
    }
}

impl Permission {
    /// Parse a comma-separated grant list, ignoring unknown entries.
    pub fn parse_list(raw: &str) -> Vec<Permission> {
        raw.split(',').filter_map(|s| s.parse().ok()).collect()
    }
}

/// Decides whether a record is visible to a principal.
pub trait AccessPolicy: Send + Sync {
    fn is_visible(&self, record: &ObjectRecord, principal_id: i64, granted: &[Permission])
    -> bool;
}

/// Default policy: public records are visible to anyone; otherwise the
/// principal must own the record or hold an admin grant.
pub struct OwnerOrPublicPolicy;

impl AccessPolicy for OwnerOrPublicPolicy {
    fn is_visible(
        &self,
        record: &ObjectRecord,
        principal_id: i64,
        granted: &[Permission],
    ) -> bool {
        if record.publicity {
            return true;
        }
        record.owner_user_id == principal_id || granted.contains(&Permission::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(owner: i64, publicity: bool) -> ObjectRecord {
        let mut record = ObjectRecord::empty_at(format!("/{owner}/f.txt"));
        record.owner_user_id = owner;
        record.publicity = publicity;
        record
    }

    #[test]
    fn publicity_overrides_ownership() {
        let policy = OwnerOrPublicPolicy;
        assert!(policy.is_visible(&record(7, true), 99, &[]));
    }

    #[test]
    fn owner_sees_private_records() {
        let policy = OwnerOrPublicPolicy;
        assert!(policy.is_visible(&record(7, false), 7, &[]));
        assert!(!policy.is_visible(&record(7, false), 8, &[]));
    }

    #[test]
    fn admin_grant_overrides() {
        let policy = OwnerOrPublicPolicy;
        assert!(policy.is_visible(&record(7, false), 8, &[Permission::Admin]));
        assert!(!policy.is_visible(&record(7, false), 8, &[Permission::Read]));
    }

    #[test]
    fn grant_lists_parse_leniently() {
        assert_eq!(
            Permission::parse_list("read, admin, bogus"),
            vec![Permission::Read, Permission::Admin]
        );
        assert!(Permission::parse_list("").is_empty());
    }
}
