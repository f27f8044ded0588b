/// Remembers the last message handed to the user so it is not sent twice in a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupFilter {
    last: Option<String>,
}

impl DedupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_repeat(&self, message: &str) -> bool {
        self.last.as_deref() == Some(message)
    }

    pub fn remember(&mut self, message: impl Into<String>) {
        self.last = Some(message.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
