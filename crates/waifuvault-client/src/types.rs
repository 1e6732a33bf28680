//! Common types for the client SDK

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a file expires.
///
/// Plain file info carries an epoch timestamp in milliseconds; formatted file
/// info and uploads carry a human readable duration such as
/// `"332 days 7 hours 18 minutes 8 seconds"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetentionPeriod {
    /// Epoch timestamp (milliseconds)
    Epoch(i64),
    /// Human readable duration
    Formatted(String),
}

/// Form of [`RetentionPeriod`] an operation returns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RetentionFormat {
    Epoch,
    Formatted,
}

impl RetentionPeriod {
    pub(crate) fn format(&self) -> RetentionFormat {
        match self {
            Self::Epoch(_) => RetentionFormat::Epoch,
            Self::Formatted(_) => RetentionFormat::Formatted,
        }
    }

    /// Epoch timestamp, if this is the raw form
    pub fn as_epoch(&self) -> Option<i64> {
        match self {
            Self::Epoch(ts) => Some(*ts),
            Self::Formatted(_) => None,
        }
    }

    /// Human readable duration, if this is the formatted form
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            Self::Epoch(_) => None,
            Self::Formatted(s) => Some(s),
        }
    }

    /// Expiry instant for the raw form
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.as_epoch().and_then(DateTime::from_timestamp_millis)
    }
}

/// Per-file flags
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    /// Filename is hidden from the URL
    #[serde(default)]
    pub hide_filename: bool,
    /// File is deleted once it has been downloaded
    #[serde(default)]
    pub one_time_download: bool,
    /// File is password protected (encrypted)
    #[serde(default)]
    pub protected: bool,
}

/// An uploaded file as described by the service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Private token of the file
    pub token: String,
    /// Download URL
    pub url: String,
    /// Password protected (older servers report it here, newer ones in `options`)
    #[serde(default)]
    pub protected: bool,
    /// Expiry of the file
    pub retention_period: RetentionPeriod,
    /// Token of the owning bucket
    #[serde(default)]
    pub bucket: Option<String>,
    /// Public numeric id, used to pick files in album downloads
    #[serde(default)]
    pub id: Option<i64>,
    /// Number of downloads
    #[serde(default)]
    pub views: Option<i64>,
    /// Flags the file was uploaded with
    #[serde(default)]
    pub options: Option<FileOptions>,
}

impl FileRecord {
    /// Whether a password is needed to download the file
    pub fn is_protected(&self) -> bool {
        self.protected || self.options.as_ref().is_some_and(|o| o.protected)
    }
}

/// A bucket and everything it contains
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket token
    pub token: String,
    /// Files in the bucket
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Albums in the bucket
    #[serde(default)]
    pub albums: Vec<AlbumStub>,
}

/// An album without its files
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumStub {
    /// Private token of the album
    pub token: String,
    /// Token of the owning bucket
    pub bucket: String,
    /// Public token, set while the album is shared
    #[serde(default)]
    pub public_token: Option<String>,
    /// Album name
    pub name: String,
    /// Creation time (epoch milliseconds)
    pub date_created: i64,
}

impl AlbumStub {
    /// Creation time
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_created)
    }
}

/// A named collection of files within a bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Private token of the album
    pub token: String,
    /// Token of the owning bucket
    pub bucket_token: String,
    /// Public token, set while the album is shared
    #[serde(default)]
    pub public_token: Option<String>,
    /// Album name
    pub name: String,
    /// Files in the album
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Creation time (epoch milliseconds)
    pub date_created: i64,
}

impl Album {
    /// Creation time
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date_created)
    }

    /// Whether the album is publicly shared
    pub fn is_shared(&self) -> bool {
        self.public_token.is_some()
    }
}

/// Acknowledgement returned by album delete, share and revoke
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Details; the public URL for a share
    pub description: String,
}

/// Changes to apply to an uploaded file. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyEntryPayload {
    /// New password; an empty string removes protection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Current password, required when changing an existing one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_password: Option<String>,
    /// New expiry, same format as upload `expires`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_expiry: Option<String>,
    /// Hide the filename in the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_filename: Option<bool>,
}

impl ModifyEntryPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Encrypt an unprotected file
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Current password of a protected file
    pub fn with_previous_password(mut self, password: impl Into<String>) -> Self {
        self.previous_password = Some(password.into());
        self
    }

    /// Replace the password of a protected file
    pub fn change_password(self, previous: impl Into<String>, new: impl Into<String>) -> Self {
        self.with_previous_password(previous).with_password(new)
    }

    /// Decrypt a protected file
    pub fn remove_password(self, previous: impl Into<String>) -> Self {
        self.change_password(previous, "")
    }

    /// Set a new expiry
    pub fn with_custom_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.custom_expiry = Some(expiry.into());
        self
    }

    /// Show or hide the filename
    pub fn with_hide_filename(mut self, hide: bool) -> Self {
        self.hide_filename = Some(hide);
        self
    }
}

/// Which file to download
#[derive(Clone, Debug, Default)]
pub struct GetFileOptions {
    /// File token, resolved to a URL with a file info lookup
    pub token: Option<String>,
    /// Epoch and name, e.g. `1710111505084/08.png`; hidden filenames are
    /// only the epoch with the extension, e.g. `1710111505084.png`
    pub filename: Option<String>,
    /// Password of a protected file
    pub password: Option<String>,
}

impl GetFileOptions {
    /// Download by file token
    pub fn by_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Download by filename
    pub fn by_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Default::default()
        }
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}
