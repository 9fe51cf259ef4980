//! XML-backed user directory.
//!
//! Parses the intranet users export:
//!
//! ```xml
//! <intranet>
//!   <server>
//!     <host>intranet.example.com</host>
//!     <protocol>https</protocol>
//!   </server>
//!   <users>
//!     <user id="141">
//!       <avatar>/api/images/users/141</avatar>
//!       <name>Adam P.</name>
//!     </user>
//!   </users>
//! </intranet>
//! ```
//!
//! Avatar URLs are absolutized against the `<server>` block. A missing host
//! or protocol degrades to an empty string; a user entry with a malformed id
//! is skipped with a debug log.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::directory::{UserDirectory, UserProfile};
use super::source::{SourceError, SourceResult};
use crate::api::UserId;

/// User directory parsed once from the intranet users XML file.
#[derive(Debug, Clone, Default)]
pub struct XmlUserDirectory {
    profiles: HashMap<UserId, UserProfile>,
}

#[derive(Debug, Deserialize)]
struct UsersFile {
    #[serde(default)]
    server: Option<ServerXml>,
    #[serde(default)]
    users: Option<UsersXml>,
}

#[derive(Debug, Deserialize)]
struct ServerXml {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    protocol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsersXml {
    #[serde(default, rename = "user")]
    entries: Vec<UserXml>,
}

#[derive(Debug, Deserialize)]
struct UserXml {
    #[serde(rename = "@id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl XmlUserDirectory {
    /// Parse the directory from an XML file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse the directory from XML text.
    pub fn from_str(xml: &str) -> SourceResult<Self> {
        let file: UsersFile =
            quick_xml::de::from_str(xml).map_err(|e| SourceError::Xml(e.to_string()))?;

        let (host, protocol) = match file.server {
            Some(server) => (
                server.host.unwrap_or_default(),
                server.protocol.unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        let mut profiles = HashMap::new();
        for entry in file.users.map(|u| u.entries).unwrap_or_default() {
            let user_id: i64 = match entry.id.trim().parse() {
                Ok(id) => id,
                Err(err) => {
                    debug!("problem with user entry id {:?}: {}", entry.id, err);
                    continue;
                }
            };

            let avatar_path = entry.avatar.unwrap_or_default();
            profiles.insert(
                UserId::new(user_id),
                UserProfile {
                    name: entry.name.unwrap_or_default(),
                    avatar: format!("{}://{}{}", protocol, host, avatar_path),
                },
            );
        }

        Ok(Self { profiles })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl UserDirectory for XmlUserDirectory {
    fn lookup(&self, user_id: UserId) -> Option<UserProfile> {
        self.profiles.get(&user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
<intranet>
  <server>
    <host>intranet.example.com</host>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="141">
      <avatar>/api/images/users/141</avatar>
      <name>Adam P.</name>
    </user>
    <user id="176">
      <avatar>/api/images/users/176</avatar>
      <name>Adrian K.</name>
    </user>
  </users>
</intranet>
"#;

    #[test]
    fn test_parse_and_lookup() {
        let directory = XmlUserDirectory::from_str(SAMPLE).unwrap();
        assert_eq!(directory.len(), 2);

        let profile = directory.lookup(UserId::new(141)).unwrap();
        assert_eq!(profile.name, "Adam P.");
        assert_eq!(
            profile.avatar,
            "https://intranet.example.com/api/images/users/141"
        );
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let directory = XmlUserDirectory::from_str(SAMPLE).unwrap();
        assert!(directory.lookup(UserId::new(999)).is_none());
    }

    #[test]
    fn test_missing_server_block_degrades_to_empty() {
        let xml = r#"
<intranet>
  <users>
    <user id="10">
      <avatar>/api/images/users/10</avatar>
      <name>Jan N.</name>
    </user>
  </users>
</intranet>
"#;
        let directory = XmlUserDirectory::from_str(xml).unwrap();
        let profile = directory.lookup(UserId::new(10)).unwrap();
        assert_eq!(profile.avatar, ":///api/images/users/10");
    }

    #[test]
    fn test_malformed_id_is_skipped() {
        let xml = r#"
<intranet>
  <server>
    <host>intranet.example.com</host>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="not-a-number">
      <name>Broken</name>
    </user>
    <user id="10">
      <name>Jan N.</name>
    </user>
  </users>
</intranet>
"#;
        let directory = XmlUserDirectory::from_str(xml).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.lookup(UserId::new(10)).is_some());
    }

    #[test]
    fn test_invalid_xml_is_an_error() {
        assert!(XmlUserDirectory::from_str("<intranet><users>").is_err());
    }
}
