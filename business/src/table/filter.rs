use crate::{UserField, UserRecord};

/// Lower-cased global filter, prepared once per derivation.
#[derive(Debug, Clone)]
pub struct GlobalFilter {
    needle: String,
}

impl GlobalFilter {
    pub fn new(filter: &str) -> Self {
        Self {
            needle: filter.to_lowercase(),
        }
    }

    /// An empty filter is inactive and keeps every row.
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Case-insensitive substring match against the text of every column,
    /// hidden ones included.
    pub fn matches(&self, record: &UserRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        UserField::ALL
            .into_iter()
            .any(|field| field.value(record).to_lowercase().contains(&self.needle))
    }
}
