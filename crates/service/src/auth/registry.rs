use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use super::domain::StaffUser;
use super::errors::AuthError;
use super::repository::StaffRepository;

/// Immutable staff roster loaded once at startup.
///
/// Lookup is by exact `staff_no`; when the file lists the same number twice
/// the first entry wins. Every entry must carry `staff_no` as a JSON string,
/// a numeric id fails the load.
#[derive(Debug, Clone, Default)]
pub struct StaffRegistry {
    users: Vec<StaffUser>,
}

impl StaffRegistry {
    pub fn from_users(users: Vec<StaffUser>) -> Self { Self { users } }

    /// Read the roster (a JSON array of staff objects) from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AuthError::Roster(format!("cannot read {}: {e}", path.display())))?;
        let registry = Self::from_json(&bytes)
            .map_err(|e| AuthError::Roster(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), staff = registry.users.len(), "staff roster loaded");
        Ok(registry)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let users: Vec<StaffUser> = serde_json::from_slice(bytes)?;
        Ok(Self { users })
    }

    pub fn get(&self, staff_no: &str) -> Option<&StaffUser> {
        self.users.iter().find(|u| u.staff_no == staff_no)
    }
}

#[async_trait]
impl StaffRepository for StaffRegistry {
    async fn find_by_staff_no(&self, staff_no: &str) -> Result<Option<StaffUser>, AuthError> {
        Ok(self.get(staff_no).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn parses_roster_and_keeps_profile_fields() -> Result<(), anyhow::Error> {
        let raw = json!([
            {"staff_no": "86001", "name": "Mercy Nambiro", "role": "supervisor"},
            {"staff_no": "85905", "name": "Noel Nanzushi", "role": "staff"}
        ]);
        let reg = StaffRegistry::from_json(&serde_json::to_vec(&raw)?)?;
        assert!(reg.get("85905").is_some());
        let mercy = reg.get("86001").expect("present");
        assert_eq!(mercy.profile["role"], "supervisor");
        assert_eq!(serde_json::to_value(mercy)?, raw[0]);
        assert!(reg.get("8600").is_none());
        Ok(())
    }

    #[test]
    fn first_duplicate_wins() -> Result<(), anyhow::Error> {
        let raw = br#"[{"staff_no":"1","name":"first"},{"staff_no":"1","name":"second"}]"#;
        let reg = StaffRegistry::from_json(raw)?;
        assert_eq!(reg.get("1").unwrap().profile["name"], "first");
        Ok(())
    }

    #[test]
    fn entries_without_staff_no_are_rejected() {
        assert!(StaffRegistry::from_json(br#"[{"name":"nobody"}]"#).is_err());
        assert!(StaffRegistry::from_json(br#"{"staff_no":"1"}"#).is_err());
        assert!(StaffRegistry::from_json(br#"[{"staff_no":86001,"name":"numeric"}]"#).is_err());
    }

    #[tokio::test]
    async fn load_from_disk_and_missing_file() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("staff_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, br#"[{"staff_no":"85915","name":"Patrick Moenga"}]"#).await?;
        let reg = StaffRegistry::load(&tmp).await?;
        assert!(reg.find_by_staff_no("85915").await?.is_some());
        let _ = tokio::fs::remove_file(&tmp).await;

        let err = StaffRegistry::load(&tmp).await.unwrap_err();
        assert!(matches!(err, AuthError::Roster(_)));
        Ok(())
    }
}
