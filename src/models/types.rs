//! API resource types
//!
//! Fields the API may omit are optional or defaulted so that new or
//! missing fields never break deserialization.

use crate::error::{Error, Result};
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Enums
// ============================================================================

/// Status of an API call or async operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiCallStatus {
    #[default]
    Queued,
    Uploaded,
    InProgress,
    Completed,
    Failed,
}

impl ApiCallStatus {
    /// Check if the operation has stopped running
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Sort order for list endpoints keyed on creation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatedAtSortMode {
    CreatedAtAscending,
    #[default]
    CreatedAtDescending,
}

impl CreatedAtSortMode {
    /// Wire name of the sort mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAtAscending => "created_at_ascending",
            Self::CreatedAtDescending => "created_at_descending",
        }
    }
}

impl fmt::Display for CreatedAtSortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatedAtSortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created_at_ascending" | "asc" | "ascending" => Ok(Self::CreatedAtAscending),
            "created_at_descending" | "desc" | "descending" => Ok(Self::CreatedAtDescending),
            other => Err(Error::invalid_value(
                "sort_by",
                format!("unknown sort mode '{other}'"),
            )),
        }
    }
}

/// Formats accepted as conversion input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileImportFormat {
    Fbx,
    Gltf,
    Obj,
    Ply,
    Sldprt,
    Step,
    Stl,
}

impl FileImportFormat {
    /// Wire name of the format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fbx => "fbx",
            Self::Gltf => "gltf",
            Self::Obj => "obj",
            Self::Ply => "ply",
            Self::Sldprt => "sldprt",
            Self::Step => "step",
            Self::Stl => "stl",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for FileImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileImportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fbx" => Ok(Self::Fbx),
            "gltf" | "glb" => Ok(Self::Gltf),
            "obj" => Ok(Self::Obj),
            "ply" => Ok(Self::Ply),
            "sldprt" => Ok(Self::Sldprt),
            "step" | "stp" => Ok(Self::Step),
            "stl" => Ok(Self::Stl),
            other => Err(Error::invalid_value(
                "src_format",
                format!("unsupported import format '{other}'"),
            )),
        }
    }
}

/// Formats a conversion can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExportFormat {
    Fbx,
    Glb,
    Gltf,
    Obj,
    Ply,
    Step,
    Stl,
}

impl FileExportFormat {
    /// Wire name of the format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fbx => "fbx",
            Self::Glb => "glb",
            Self::Gltf => "gltf",
            Self::Obj => "obj",
            Self::Ply => "ply",
            Self::Step => "step",
            Self::Stl => "stl",
        }
    }
}

impl fmt::Display for FileExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fbx" => Ok(Self::Fbx),
            "glb" => Ok(Self::Glb),
            "gltf" => Ok(Self::Gltf),
            "obj" => Ok(Self::Obj),
            "ply" => Ok(Self::Ply),
            "step" | "stp" => Ok(Self::Step),
            "stl" => Ok(Self::Stl),
            other => Err(Error::invalid_value(
                "output_format",
                format!("unsupported export format '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Resources
// ============================================================================

/// An API user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Best available display name
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// A recorded API call with its billing information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiCallWithPrice {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub minutes: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// An API token belonging to the current user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: String,
    pub token: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A file conversion operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConversion {
    pub id: String,
    #[serde(default)]
    pub status: ApiCallStatus,
    #[serde(default)]
    pub src_format: Option<FileImportFormat>,
    #[serde(default)]
    pub output_format: Option<FileExportFormat>,
    /// Output files keyed by file name, base64 encoded
    #[serde(default)]
    pub outputs: BTreeMap<String, String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl FileConversion {
    /// Decode the base64 output files
    pub fn decoded_outputs(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        self.outputs
            .iter()
            .map(|(name, encoded)| {
                let bytes = STANDARD
                    .decode(encoded)
                    .or_else(|_| URL_SAFE.decode(encoded))
                    .map_err(|e| Error::decode(format!("output '{name}': {e}")))?;
                Ok((name.clone(), bytes))
            })
            .collect()
    }
}
