//! Fixed catalog of update and install operations.

use jera_core::types::{PackageManager, TaskKind, TaskSpec};
use jera_exec::probe::ToolProbe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Sources the update command knows how to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSource {
    Dnf,
    Zypper,
    Yum,
    Flatpak,
    Snap,
}

pub const ALL_SOURCES: [PackageSource; 5] = [
    PackageSource::Dnf,
    PackageSource::Zypper,
    PackageSource::Yum,
    PackageSource::Flatpak,
    PackageSource::Snap,
];

impl PackageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSource::Dnf => "dnf",
            PackageSource::Zypper => "zypper",
            PackageSource::Yum => "yum",
            PackageSource::Flatpak => "flatpak",
            PackageSource::Snap => "snap",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PackageSource::Dnf => "system packages via dnf",
            PackageSource::Zypper => "system packages via zypper",
            PackageSource::Yum => "system packages via yum",
            PackageSource::Flatpak => "sandboxed applications via flatpak",
            PackageSource::Snap => "snap packages via snapd",
        }
    }
}

impl FromStr for PackageSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dnf" => Ok(PackageSource::Dnf),
            "zypper" => Ok(PackageSource::Zypper),
            "yum" => Ok(PackageSource::Yum),
            "flatpak" => Ok(PackageSource::Flatpak),
            "snap" => Ok(PackageSource::Snap),
            other => Err(format!(
                "invalid package source '{other}'. valid values: dnf, zypper, yum, flatpak, snap"
            )),
        }
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources whose backing binary is installed, probed in catalog order.
pub fn available_sources(probe: &dyn ToolProbe) -> Vec<PackageSource> {
    ALL_SOURCES
        .into_iter()
        .filter(|source| probe.command_exists(source.as_str()))
        .collect()
}

/// Expand selected sources into their update tasks in source order.
/// Zypper contributes a repo refresh before its update.
pub fn update_tasks(sources: &[PackageSource]) -> Vec<TaskSpec> {
    let mut tasks = Vec::new();
    for source in sources {
        match source {
            PackageSource::Dnf => tasks.push(TaskSpec::new(
                "DNF - Upgrade packages",
                TaskKind::DnfUpgrade,
                vec!["dnf".to_string(), "upgrade".to_string(), "-y".to_string()],
                true,
            )),
            PackageSource::Zypper => {
                tasks.push(TaskSpec::new(
                    "Zypper - Refresh repos",
                    TaskKind::ZypperRefresh,
                    vec!["zypper".to_string(), "refresh".to_string()],
                    true,
                ));
                tasks.push(TaskSpec::new(
                    "Zypper - Update packages",
                    TaskKind::ZypperUpdate,
                    vec![
                        "zypper".to_string(),
                        "--non-interactive".to_string(),
                        "update".to_string(),
                    ],
                    true,
                ));
            }
            PackageSource::Yum => tasks.push(TaskSpec::new(
                "YUM - Update packages",
                TaskKind::YumUpdate,
                vec!["yum".to_string(), "update".to_string(), "-y".to_string()],
                true,
            )),
            PackageSource::Flatpak => tasks.push(TaskSpec::new(
                "Flatpak - Update all",
                TaskKind::FlatpakUpdate,
                vec![
                    "flatpak".to_string(),
                    "update".to_string(),
                    "-y".to_string(),
                ],
                false,
            )),
            PackageSource::Snap => tasks.push(TaskSpec::new(
                "Snap - Refresh all",
                TaskKind::SnapRefresh,
                vec!["snap".to_string(), "refresh".to_string()],
                true,
            )),
        }
    }
    tasks
}

/// Install command for one local package file under the given manager.
pub fn install_task(pm: PackageManager, package: &Path) -> TaskSpec {
    let path = package.display().to_string();
    let file_name = package
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());
    let (kind, argv) = match pm {
        PackageManager::Dnf => (
            TaskKind::DnfInstall,
            vec![
                "dnf".to_string(),
                "install".to_string(),
                "-y".to_string(),
                path,
            ],
        ),
        PackageManager::Zypper => (
            TaskKind::ZypperInstall,
            vec![
                "zypper".to_string(),
                "--non-interactive".to_string(),
                "install".to_string(),
                path,
            ],
        ),
        PackageManager::Yum => (
            TaskKind::YumInstall,
            vec![
                "yum".to_string(),
                "install".to_string(),
                "-y".to_string(),
                path,
            ],
        ),
        PackageManager::Rpm => (
            TaskKind::RpmInstall,
            vec![
                "rpm".to_string(),
                "-ivh".to_string(),
                "--replacepkgs".to_string(),
                path,
            ],
        ),
    };
    TaskSpec::new(format!("Install {file_name}"), kind, argv, true)
}

/// Announcement line for the chosen manager. Raw rpm gets a warning since
/// it resolves no dependencies.
pub fn install_notice(pm: PackageManager) -> &'static str {
    match pm {
        PackageManager::Dnf => "Using dnf (dependency resolution enabled)...",
        PackageManager::Zypper => "Using zypper (dependency resolution enabled)...",
        PackageManager::Yum => "Using yum (dependency resolution enabled)...",
        PackageManager::Rpm => "WARNING: Using rpm directly - no automatic dependency resolution.",
    }
}
