//! Identity records and the merged managed + discovered view.

use serde::{Deserialize, Serialize};

use crate::ssh_config::{
    DiscoveredIdentity, SshConfigEngine, DEFAULT_PORT, SSH_USER, TARGET_HOST,
};

/// One usable SSH credential for github.com. The key file is the identity's
/// dedup key across sources; commit-author metadata only ever appears on
/// records the user created, never on discovered ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Absolute path to the private key
    pub key_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_email: Option<String>,
}

fn default_host() -> String {
    TARGET_HOST.to_string()
}

fn default_user() -> String {
    SSH_USER.to_string()
}

impl Identity {
    /// A user-created record.
    pub fn managed(
        name: String,
        key_file: String,
        git_name: Option<String>,
        git_email: Option<String>,
    ) -> Self {
        Self {
            name,
            host: default_host(),
            user: default_user(),
            port: None,
            key_file,
            git_name,
            git_email,
        }
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

impl From<DiscoveredIdentity> for Identity {
    fn from(discovered: DiscoveredIdentity) -> Self {
        Self {
            name: discovered.name,
            host: default_host(),
            user: default_user(),
            port: None,
            key_file: discovered.key_file,
            git_name: None,
            git_email: None,
        }
    }
}

/// Display metadata for one identity, as the list/status output renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityView {
    pub label: String,
    pub description: String,
    pub tooltip: String,
    pub active: bool,
}

/// Managed records first, in their given order, then discovered records
/// whose key file is not already present. Stable and deterministic; on a
/// key-file collision the managed record's fields win.
pub fn merge(managed: &[Identity], discovered: Vec<DiscoveredIdentity>) -> Vec<Identity> {
    let mut view: Vec<Identity> = managed.to_vec();

    for entry in discovered {
        if !view.iter().any(|id| id.key_file == entry.key_file) {
            view.push(entry.into());
        }
    }

    view
}

/// Commit-author metadata for the record owning `key_file`, when that
/// record carries both a name and an email. Absence just means there is
/// nothing to patch.
pub fn resolve_author_metadata(key_file: &str, records: &[Identity]) -> Option<(String, String)> {
    let record = records.iter().find(|id| id.key_file == key_file)?;
    match (&record.git_name, &record.git_email) {
        (Some(name), Some(email)) => Some((name.clone(), email.clone())),
        _ => None,
    }
}

/// Produces the merged identity view and per-record display metadata,
/// consulting the config engine for the active key.
pub struct Reconciler<'a> {
    engine: &'a SshConfigEngine,
}

impl<'a> Reconciler<'a> {
    pub fn new(engine: &'a SshConfigEngine) -> Self {
        Self { engine }
    }

    /// Fresh merged view: managed records plus whatever a scan of the
    /// config file turns up.
    pub fn refresh(&self, managed: &[Identity]) -> Vec<Identity> {
        merge(managed, self.engine.scan())
    }

    pub fn describe(&self, identity: &Identity) -> IdentityView {
        let active = self.engine.is_active(&identity.key_file);
        let label = if active {
            format!("{} (active)", identity.name)
        } else {
            identity.name.clone()
        };

        IdentityView {
            label,
            description: format!("{}@{}", identity.user, identity.host),
            tooltip: format!(
                "{}@{}:{} {}",
                identity.user,
                identity.host,
                identity.port_or_default(),
                identity.key_file
            ),
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn managed(name: &str, key_file: &str) -> Identity {
        Identity::managed(
            name.to_string(),
            key_file.to_string(),
            Some(format!("{} Author", name)),
            Some(format!("{}@example.com", name)),
        )
    }

    fn discovered(key_file: &str) -> DiscoveredIdentity {
        DiscoveredIdentity {
            name: key_file.rsplit('/').next().unwrap().to_string(),
            key_file: key_file.to_string(),
        }
    }

    #[test]
    fn test_merge_keeps_managed_order_then_discovered() {
        let managed = vec![managed("work", "/k/work"), managed("oss", "/k/oss")];
        let merged = merge(
            &managed,
            vec![discovered("/k/scanned_a"), discovered("/k/scanned_b")],
        );

        let keys: Vec<&str> = merged.iter().map(|id| id.key_file.as_str()).collect();
        assert_eq!(keys, ["/k/work", "/k/oss", "/k/scanned_a", "/k/scanned_b"]);
    }

    #[test]
    fn test_merge_dedups_by_key_file_managed_wins() {
        let managed = vec![managed("work", "/k/shared")];
        let merged = merge(&managed, vec![discovered("/k/shared")]);

        assert_eq!(merged.len(), 1);
        // The managed record's fields survive, not the discovered ones
        assert_eq!(merged[0].name, "work");
        assert!(merged[0].git_name.is_some());
    }

    #[test]
    fn test_merge_never_duplicates_key_files() {
        let managed = vec![managed("a", "/k/a"), managed("b", "/k/b")];
        let merged = merge(
            &managed,
            vec![discovered("/k/a"), discovered("/k/c"), discovered("/k/c")],
        );

        for identity in &merged {
            let count = merged
                .iter()
                .filter(|other| other.key_file == identity.key_file)
                .count();
            assert_eq!(count, 1, "duplicate key file {}", identity.key_file);
        }
    }

    #[test]
    fn test_discovered_identity_carries_no_author_metadata() {
        let identity: Identity = discovered("/home/u/.ssh/id_work").into();
        assert_eq!(identity.name, "id_work");
        assert_eq!(identity.host, "github.com");
        assert_eq!(identity.user, "git");
        assert_eq!(identity.port, None);
        assert_eq!(identity.git_name, None);
        assert_eq!(identity.git_email, None);
    }

    #[test]
    fn test_resolve_author_metadata() {
        let records = vec![managed("work", "/k/work")];
        assert_eq!(
            resolve_author_metadata("/k/work", &records),
            Some(("work Author".to_string(), "work@example.com".to_string()))
        );
        assert_eq!(resolve_author_metadata("/k/unknown", &records), None);
    }

    #[test]
    fn test_resolve_author_metadata_requires_both_fields() {
        let mut record = managed("work", "/k/work");
        record.git_email = None;
        assert_eq!(resolve_author_metadata("/k/work", &[record]), None);
    }

    #[test]
    fn test_describe_inactive_identity() {
        let engine = SshConfigEngine::new("/nonexistent/ghid-test/config");
        let reconciler = Reconciler::new(&engine);

        let view = reconciler.describe(&managed("work", "/k/work"));
        assert!(!view.active);
        assert_eq!(view.label, "work");
        assert_eq!(view.description, "git@github.com");
        assert_eq!(view.tooltip, "git@github.com:22 /k/work");
    }

    #[test]
    fn test_describe_honors_explicit_port() {
        let engine = SshConfigEngine::new("/nonexistent/ghid-test/config");
        let reconciler = Reconciler::new(&engine);

        let mut identity = managed("work", "/k/work");
        identity.port = Some(443);
        let view = reconciler.describe(&identity);
        assert_eq!(view.tooltip, "git@github.com:443 /k/work");
    }

    #[test]
    fn test_serde_uses_camel_case_field_names() {
        let value = serde_json::to_value(managed("work", "/k/work")).unwrap();
        assert!(value.get("keyFile").is_some());
        assert!(value.get("gitName").is_some());
        assert!(value.get("gitEmail").is_some());
    }

    #[test]
    fn test_serde_defaults_for_missing_fields() {
        let identity: Identity =
            serde_json::from_str(r#"{"name": "work", "keyFile": "/k/work"}"#).unwrap();
        assert_eq!(identity.host, "github.com");
        assert_eq!(identity.user, "git");
        assert_eq!(identity.port, None);
        assert_eq!(identity.port_or_default(), 22);
    }
}
