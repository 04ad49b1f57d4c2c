//! Core types for the package operation orchestrator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification key for a task. Exit-code rules are looked up by kind,
/// so two tasks running the same binary can still be judged differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    DnfUpgrade,
    DnfInstall,
    ZypperRefresh,
    ZypperUpdate,
    ZypperInstall,
    YumUpdate,
    YumInstall,
    RpmInstall,
    FlatpakUpdate,
    SnapRefresh,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::DnfUpgrade => "dnf-upgrade",
            TaskKind::DnfInstall => "dnf-install",
            TaskKind::ZypperRefresh => "zypper-refresh",
            TaskKind::ZypperUpdate => "zypper-update",
            TaskKind::ZypperInstall => "zypper-install",
            TaskKind::YumUpdate => "yum-update",
            TaskKind::YumInstall => "yum-install",
            TaskKind::RpmInstall => "rpm-install",
            TaskKind::FlatpakUpdate => "flatpak-update",
            TaskKind::SnapRefresh => "snap-refresh",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package managers the resolver knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageManager {
    Dnf,
    Zypper,
    Yum,
    Rpm,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Dnf => "dnf",
            PackageManager::Zypper => "zypper",
            PackageManager::Yum => "yum",
            PackageManager::Rpm => "rpm",
        }
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dnf" => Ok(PackageManager::Dnf),
            "zypper" => Ok(PackageManager::Zypper),
            "yum" => Ok(PackageManager::Yum),
            "rpm" => Ok(PackageManager::Rpm),
            other => Err(format!(
                "invalid package manager '{other}'. valid values: dnf, zypper, yum, rpm"
            )),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privilege escalation wrappers, in resolution priority order elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationTool {
    Pkexec,
    Kdesu,
    Sudo,
}

impl EscalationTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationTool::Pkexec => "pkexec",
            EscalationTool::Kdesu => "kdesu",
            EscalationTool::Sudo => "sudo",
        }
    }
}

impl fmt::Display for EscalationTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    PackageManager,
    EscalationTool,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::PackageManager => "package_manager",
            ToolKind::EscalationTool => "escalation_tool",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one resolution request. Never cached: callers re-resolve
/// each time they need a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTool {
    pub kind: ToolKind,
    pub binary_name: String,
}

impl From<PackageManager> for ResolvedTool {
    fn from(pm: PackageManager) -> Self {
        ResolvedTool {
            kind: ToolKind::PackageManager,
            binary_name: pm.as_str().to_string(),
        }
    }
}

impl From<EscalationTool> for ResolvedTool {
    fn from(tool: EscalationTool) -> Self {
        ResolvedTool {
            kind: ToolKind::EscalationTool,
            binary_name: tool.as_str().to_string(),
        }
    }
}

/// Immutable description of one operation to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub kind: TaskKind,
    pub argv: Vec<String>,
    pub needs_escalation: bool,
}

impl TaskSpec {
    pub fn new(
        name: impl Into<String>,
        kind: TaskKind,
        argv: Vec<String>,
        needs_escalation: bool,
    ) -> Self {
        TaskSpec {
            name: name.into(),
            kind,
            argv,
            needs_escalation,
        }
    }
}

/// Judged outcome of one finished task. Produced exactly once per spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub name: String,
    pub kind: TaskKind,
    pub exit_code: i32,
    pub succeeded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskKind::DnfUpgrade).unwrap();
        assert_eq!(json, "\"dnf-upgrade\"");
        let json = serde_json::to_string(&TaskKind::ZypperRefresh).unwrap();
        assert_eq!(json, "\"zypper-refresh\"");
    }

    #[test]
    fn task_kind_display_matches_as_str() {
        let kinds = [
            TaskKind::DnfUpgrade,
            TaskKind::DnfInstall,
            TaskKind::ZypperRefresh,
            TaskKind::ZypperUpdate,
            TaskKind::ZypperInstall,
            TaskKind::YumUpdate,
            TaskKind::YumInstall,
            TaskKind::RpmInstall,
            TaskKind::FlatpakUpdate,
            TaskKind::SnapRefresh,
        ];
        for kind in kinds {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn package_manager_parses_known_names() {
        assert_eq!("dnf".parse::<PackageManager>(), Ok(PackageManager::Dnf));
        assert_eq!("rpm".parse::<PackageManager>(), Ok(PackageManager::Rpm));
    }

    #[test]
    fn package_manager_rejects_unknown_names() {
        let err = "apt".parse::<PackageManager>().unwrap_err();
        assert!(err.contains("invalid package manager 'apt'"));
        assert!(err.contains("valid values"));
    }

    #[test]
    fn tool_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ToolKind::PackageManager).unwrap();
        assert_eq!(json, "\"package_manager\"");
    }

    #[test]
    fn resolved_tool_from_enums_carries_binary_name() {
        let pm = ResolvedTool::from(PackageManager::Zypper);
        assert_eq!(pm.kind, ToolKind::PackageManager);
        assert_eq!(pm.binary_name, "zypper");

        let esc = ResolvedTool::from(EscalationTool::Pkexec);
        assert_eq!(esc.kind, ToolKind::EscalationTool);
        assert_eq!(esc.binary_name, "pkexec");
    }

    #[test]
    fn task_spec_new_keeps_fields() {
        let spec = TaskSpec::new(
            "Snap - Refresh all",
            TaskKind::SnapRefresh,
            vec!["snap".to_string(), "refresh".to_string()],
            true,
        );
        assert_eq!(spec.name, "Snap - Refresh all");
        assert_eq!(spec.kind, TaskKind::SnapRefresh);
        assert_eq!(spec.argv, vec!["snap", "refresh"]);
        assert!(spec.needs_escalation);
    }
}
