//! Local package metadata via `rpm -qip`.

use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpmInfoError {
    #[error("failed to run rpm -qip {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("rpm -qip {path} failed: {stderr}")]
    Query { path: String, stderr: String },
}

/// Header fields worth showing before an install. Anything rpm does not
/// report stays None and is omitted from the rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    pub architecture: Option<String>,
    pub summary: Option<String>,
    pub size: Option<String>,
    pub license: Option<String>,
}

pub fn query_package_info(package: &Path) -> Result<PackageInfo, RpmInfoError> {
    let output = Command::new("rpm")
        .arg("-qip")
        .arg(package)
        .output()
        .map_err(|source| RpmInfoError::Spawn {
            path: package.display().to_string(),
            source,
        })?;
    if !output.status.success() {
        return Err(RpmInfoError::Query {
            path: package.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(parse_package_info(&String::from_utf8_lossy(&output.stdout)))
}

/// rpm pads header keys with spaces before the colon, so fields are split
/// on the first colon rather than matched by prefix.
pub fn parse_package_info(text: &str) -> PackageInfo {
    let mut info = PackageInfo::default();
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "Name" => info.name = Some(value.to_string()),
            "Version" => info.version = Some(value.to_string()),
            "Release" => info.release = Some(value.to_string()),
            "Architecture" => info.architecture = Some(value.to_string()),
            "Summary" => info.summary = Some(value.to_string()),
            "Size" => info.size = Some(value.to_string()),
            "License" => info.license = Some(value.to_string()),
            _ => {}
        }
    }
    info
}

/// Render the fields for display, version and release joined, size in KB.
pub fn format_package_info(info: &PackageInfo) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(name) = &info.name {
        lines.push(format!("Name: {name}"));
    }
    if let Some(version) = &info.version {
        match &info.release {
            Some(release) => lines.push(format!("Version: {version}-{release}")),
            None => lines.push(format!("Version: {version}")),
        }
    }
    if let Some(arch) = &info.architecture {
        lines.push(format!("Architecture: {arch}"));
    }
    if let Some(size) = &info.size {
        let kb = size
            .parse::<u64>()
            .map(|bytes| (bytes / 1024).to_string())
            .unwrap_or_else(|_| "?".to_string());
        lines.push(format!("Installed size: {kb} KB"));
    }
    if let Some(license) = &info.license {
        lines.push(format!("License: {license}"));
    }
    if let Some(summary) = &info.summary {
        lines.push(format!("Summary: {summary}"));
    }
    lines
}
