use crate::types::{FileCategory, FileRecord, Notification};

/// In-memory dashboard state: the master protection switch plus the
/// ordered record list. Insertion order is display order and never
/// changes. Operations mutate state and return the notification to show;
/// they never print.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub protection_enabled: bool,
    pub files: Vec<FileRecord>,
}

impl Dashboard {
    /// Fixed seed list: 5 records, ids "1".."5", 3 protected. Every fresh
    /// instance starts from this; nothing is persisted.
    #[must_use]
    pub fn seed() -> Self {
        let files = vec![
            FileRecord {
                id: "1".to_string(),
                name: "Important Documents".to_string(),
                category: FileCategory::Folder,
                size: None,
                modified: "2 hours ago".to_string(),
                protected: true,
            },
            FileRecord {
                id: "2".to_string(),
                name: "family_photos.zip".to_string(),
                category: FileCategory::Archive,
                size: Some("2.4 GB".to_string()),
                modified: "1 day ago".to_string(),
                protected: true,
            },
            FileRecord {
                id: "3".to_string(),
                name: "work_presentation.pptx".to_string(),
                category: FileCategory::Presentation,
                size: Some("45 MB".to_string()),
                modified: "3 hours ago".to_string(),
                protected: false,
            },
            FileRecord {
                id: "4".to_string(),
                name: "System Backup".to_string(),
                category: FileCategory::Folder,
                size: None,
                modified: "1 week ago".to_string(),
                protected: true,
            },
            FileRecord {
                id: "5".to_string(),
                name: "temp_download.txt".to_string(),
                category: FileCategory::Text,
                size: Some("1.2 KB".to_string()),
                modified: "5 minutes ago".to_string(),
                protected: false,
            },
        ];

        Dashboard {
            protection_enabled: true,
            files,
        }
    }

    /// Always recomputed from the record list; never cached.
    #[must_use]
    pub fn protected_count(&self) -> usize {
        self.files.iter().filter(|f| f.protected).count()
    }

    /// Flips the master switch. Per-file flags are independent and are
    /// not touched. The notification describes the resulting state.
    pub fn toggle_system_protection(&mut self) -> Notification {
        self.protection_enabled = !self.protection_enabled;

        if self.protection_enabled {
            Notification {
                title: "Protection Enabled".to_string(),
                description: "File protection system is now active".to_string(),
            }
        } else {
            Notification {
                title: "Protection Disabled".to_string(),
                description: "File protection system has been disabled".to_string(),
            }
        }
    }

    /// Flips protection on the record with the given id. Unknown ids are
    /// a silent no-op: no state change, no notification. The notification
    /// describes the resulting state of the record.
    pub fn toggle_file_protection(&mut self, id: &str) -> Option<Notification> {
        let file = self.files.iter_mut().find(|f| f.id == id)?;
        file.protected = !file.protected;

        let (title, verb) = if file.protected {
            ("Protection Added", "is now")
        } else {
            ("Protection Removed", "is no longer")
        };

        Some(Notification {
            title: title.to_string(),
            description: format!("{} {} protected", file.name, verb),
        })
    }

    /// Placeholder: no record is appended. A real add flow would need
    /// file selection and validation, which this system does not have.
    pub fn add_file(&mut self) -> Notification {
        Notification {
            title: "Add File".to_string(),
            description: "File selection dialog would open here".to_string(),
        }
    }
}
