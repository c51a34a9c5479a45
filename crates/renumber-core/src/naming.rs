use std::fmt;
use std::path::Path;

/// Key of one renumbering sequence: base name followed by the extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file name split into its `base_sequence.ext` parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceName {
    /// Text before the first underscore.
    pub base: String,
    /// Text between the first underscore and the first dot. Never validated.
    pub sequence: String,
    /// Final extension including its leading dot, or empty.
    pub extension: String,
}

impl SequenceName {
    /// Split `file_name`, or `None` when it lacks either an underscore or a dot.
    ///
    /// The two characters may appear in any order. The extension comes from
    /// the last dot, so `shot_1.tar.gz` has extension `.gz` while its
    /// sequence text is `1`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let underscore = file_name.find('_')?;
        let dot = file_name.find('.')?;

        let sequence = if dot > underscore {
            file_name[underscore + 1..dot].to_string()
        } else {
            String::new()
        };

        let extension = Path::new(file_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Some(Self {
            base: file_name[..underscore].to_string(),
            sequence,
            extension,
        })
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey(format!("{}{}", self.base, self.extension))
    }

    /// File name carrying sequence number `n`.
    pub fn renamed(&self, n: u32) -> String {
        format!("{}_{}{}", self.base, pad_sequence(n), self.extension)
    }
}

/// Zero-pad to at least two digits. Wider numbers are left as they are.
pub fn pad_sequence(n: u32) -> String {
    format!("{:02}", n)
}
