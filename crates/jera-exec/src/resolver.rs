use crate::probe::ToolProbe;
use jera_core::{EscalationTool, PackageManager, ToolKind};
use serde::{Deserialize, Serialize};

/// Selection order when no preference applies.
pub const PACKAGE_MANAGER_PRIORITY: [PackageManager; 4] = [
    PackageManager::Dnf,
    PackageManager::Zypper,
    PackageManager::Yum,
    PackageManager::Rpm,
];

pub const ESCALATION_PRIORITY: [EscalationTool; 3] = [
    EscalationTool::Pkexec,
    EscalationTool::Kdesu,
    EscalationTool::Sudo,
];

/// Pick the package manager to use. A preferred manager wins when it is
/// installed; otherwise the first installed manager in priority order.
/// None means nothing usable is on the system, a normal outcome.
pub fn resolve_package_manager(
    probe: &dyn ToolProbe,
    preferred: Option<PackageManager>,
) -> Option<PackageManager> {
    if let Some(pm) = preferred {
        if probe.command_exists(pm.as_str()) {
            return Some(pm);
        }
    }
    PACKAGE_MANAGER_PRIORITY
        .into_iter()
        .find(|pm| probe.command_exists(pm.as_str()))
}

pub fn resolve_escalation_tool(probe: &dyn ToolProbe) -> Option<EscalationTool> {
    ESCALATION_PRIORITY
        .into_iter()
        .find(|tool| probe.command_exists(tool.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProbeRow {
    pub name: String,
    pub kind: ToolKind,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProbeReport {
    pub package_managers: Vec<ToolProbeRow>,
    pub escalation_tools: Vec<ToolProbeRow>,
}

/// Probe every known candidate once and report availability.
pub fn probe_tools(probe: &dyn ToolProbe) -> ToolProbeReport {
    let package_managers = PACKAGE_MANAGER_PRIORITY
        .into_iter()
        .map(|pm| ToolProbeRow {
            name: pm.as_str().to_string(),
            kind: ToolKind::PackageManager,
            available: probe.command_exists(pm.as_str()),
        })
        .collect();
    let escalation_tools = ESCALATION_PRIORITY
        .into_iter()
        .map(|tool| ToolProbeRow {
            name: tool.as_str().to_string(),
            kind: ToolKind::EscalationTool,
            available: probe.command_exists(tool.as_str()),
        })
        .collect();
    ToolProbeReport {
        package_managers,
        escalation_tools,
    }
}
