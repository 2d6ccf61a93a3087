#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            FlashKind::Success => "alert-success",
            FlashKind::Info => "alert-info",
            FlashKind::Warning => "alert-warning",
            FlashKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlashMessage {
    /// Area of the UI the message belongs to, e.g. `backups`.
    pub key: String,
    pub kind: FlashKind,
    pub message: String,
}

/// Messages shown at the top of a page section until dismissed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    messages: Vec<FlashMessage>,
}

impl FlashState {
    pub fn add(&mut self, key: &str, kind: FlashKind, message: impl Into<String>) {
        self.messages.push(FlashMessage {
            key: key.to_string(),
            kind,
            message: message.into(),
        });
    }

    /// Replaces whatever is shown under `key` with an error.
    pub fn error(&mut self, key: &str, message: impl Into<String>) {
        self.clear_key(key);
        self.add(key, FlashKind::Error, message);
    }

    pub fn clear_key(&mut self, key: &str) {
        self.messages.retain(|m| m.key != key);
    }

    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    pub fn for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FlashMessage> + 'a {
        self.messages.iter().filter(move |m| m.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests keyed storage and clearing.
    ///
    /// Expected: messages scoped per key; `error` replaces earlier messages
    #[test]
    fn scopes_messages_by_key() {
        let mut flash = FlashState::default();
        flash.add("backups", FlashKind::Success, "Backup started");
        flash.add("files", FlashKind::Info, "Uploading");

        assert_eq!(flash.for_key("backups").count(), 1);

        flash.error("backups", "Backup limit reached");
        let messages: Vec<_> = flash.for_key("backups").collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, FlashKind::Error);
        assert_eq!(messages[0].message, "Backup limit reached");

        flash.clear_key("files");
        assert_eq!(flash.for_key("files").count(), 0);

        flash.clear_all();
        assert_eq!(flash.for_key("backups").count(), 0);
    }
}
