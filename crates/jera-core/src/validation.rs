//! Validation for user settings.

use crate::config::{Settings, DEFAULT_PREFERRED_PM};
use crate::types::PackageManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub level: IssueLevel,
    pub code: &'static str,
    pub message: String,
}

pub trait Validate {
    fn validate(&self) -> Vec<ValidationIssue>;
}

impl Validate for Settings {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.preferred_pm != DEFAULT_PREFERRED_PM
            && self.preferred_pm.parse::<PackageManager>().is_err()
        {
            issues.push(ValidationIssue {
                level: IssueLevel::Error,
                code: "settings.preferred_pm.unknown",
                message: format!(
                    "preferred_pm '{}' is not \"auto\" or a known package manager (dnf, zypper, yum, rpm)",
                    self.preferred_pm
                ),
            });
        }

        if let Some(dir) = &self.log_dir {
            if dir.as_os_str().is_empty() {
                issues.push(ValidationIssue {
                    level: IssueLevel::Warning,
                    code: "settings.log_dir.empty",
                    message: "log_dir is empty; unset it or point it at a directory".to_string(),
                });
            }
        }

        issues
    }
}
