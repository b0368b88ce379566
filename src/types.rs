/// Kind of entry shown in the dashboard. Determines the displayed icon
/// only; no behavioral difference between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Document,
    Archive,
    Presentation,
    Text,
    Folder,
}

impl FileCategory {
    /// Presentation token for the category.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            FileCategory::Document => "📄",
            FileCategory::Archive => "📦",
            FileCategory::Presentation => "📊",
            FileCategory::Text => "📃",
            FileCategory::Folder => "📁",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub category: FileCategory,
    /// Display label like "2.4 GB"; folders have none.
    pub size: Option<String>,
    /// Static relative-time label ("2 hours ago"); never recomputed.
    pub modified: String,
    pub protected: bool,
}

/// Transient message emitted by a dashboard operation. The presentation
/// layer decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mapping_is_total_and_distinct() {
        let all = [
            FileCategory::Document,
            FileCategory::Archive,
            FileCategory::Presentation,
            FileCategory::Text,
            FileCategory::Folder,
        ];

        for (i, a) in all.iter().enumerate() {
            assert!(!a.icon().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.icon(), b.icon());
            }
        }
    }
}
