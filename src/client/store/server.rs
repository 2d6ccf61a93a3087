use crate::model::server::ServerDto;

/// The server whose pages are open, with the subuser permissions granted on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerState {
    pub server: Option<ServerDto>,
    pub permissions: Vec<String>,
}

impl ServerState {
    pub fn new(server: ServerDto, permissions: Vec<String>) -> Self {
        Self {
            server: Some(server),
            permissions,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.identifier.as_str())
    }

    /// Whether `permission` (e.g. `file.read`) is granted.
    ///
    /// Owners and admins receive `*`; `file.*` grants every `file.` permission.
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.iter().any(|granted| {
            granted == "*"
                || granted == permission
                || granted
                    .strip_suffix(".*")
                    .is_some_and(|prefix| {
                        permission
                            .strip_prefix(prefix)
                            .is_some_and(|rest| rest.starts_with('.'))
                    })
        })
    }

    pub fn clear(&mut self) {
        self.server = None;
        self.permissions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_permissions(permissions: &[&str]) -> ServerState {
        ServerState {
            server: None,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Tests wildcard and exact permission checks.
    ///
    /// Expected: `*` grants everything, `prefix.*` only its own prefix
    #[test]
    fn checks_permissions() {
        assert!(with_permissions(&["*"]).can("backup.delete"));

        let state = with_permissions(&["file.*", "backup.read"]);
        assert!(state.can("file.read"));
        assert!(state.can("file.update"));
        assert!(state.can("backup.read"));
        assert!(!state.can("backup.delete"));
        assert!(!state.can("filex.read"));
        assert!(!with_permissions(&[]).can("file.read"));
    }
}
