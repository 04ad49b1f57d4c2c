mod catalog;
mod rpm_info;
mod session;

use catalog::PackageSource;
use chrono::Local;
use jera_core::config::{default_settings_path, load_settings, ConfigError, Settings};
use jera_core::types::PackageManager;
use jera_core::validation::{IssueLevel, Validate};
use jera_exec::executor::SystemProcessRunner;
use jera_exec::probe::{ProcessToolProbe, ToolProbe};
use jera_exec::resolver::{probe_tools, resolve_package_manager, ToolProbeRow};
use jera_notify::error::NotifyError;
use jera_notify::sink::{EventDispatcher, SessionSink, StdoutSink, TranscriptSink};
use rpm_info::RpmInfoError;
use session::{Scheduler, SchedulerError, SessionReport};
use std::env;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
struct UpdateCliArgs {
    settings_path: PathBuf,
    /// Empty means every source whose binary is installed.
    sources: Vec<PackageSource>,
    save_log: bool,
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InstallCliArgs {
    settings_path: PathBuf,
    package: PathBuf,
    pm: Option<PackageManager>,
    assume_yes: bool,
    save_log: bool,
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InfoCliArgs {
    package: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CliCommand {
    Update(UpdateCliArgs),
    Install(InstallCliArgs),
    Info(InfoCliArgs),
    Tools,
    Help(String),
}

#[derive(Debug, thiserror::Error)]
enum MainError {
    #[error("{0}")]
    Args(String),
    #[error("failed to load settings at {path}: {source}")]
    LoadSettings {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("package file not found: {path}")]
    PackageNotFound { path: PathBuf },
    #[error("no package manager found (looked for dnf, zypper, yum, rpm)")]
    NoPackageManager,
    #[error("no package sources available on this system")]
    NoSources,
    #[error("failed to create log directory {path}: {source}")]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("confirmation requires an interactive terminal; pass --yes to skip the prompt")]
    ConfirmNotInteractive,
    #[error("failed to read confirmation input: {source}")]
    ConfirmRead {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write confirmation prompt: {source}")]
    ConfirmWrite {
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
    #[error(transparent)]
    RpmInfo(#[from] RpmInfoError),
    #[error("{failed} of {total} task(s) failed")]
    SessionFailed { failed: usize, total: usize },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("jera failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), MainError> {
    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "jera".to_string());
    let command = parse_cli_args(argv.collect::<Vec<_>>(), &program)?;

    match command {
        CliCommand::Help(text) => {
            println!("{text}");
            Ok(())
        }
        CliCommand::Update(args) => run_update(args),
        CliCommand::Install(args) => run_install(args),
        CliCommand::Info(args) => run_info(args),
        CliCommand::Tools => run_tools(),
    }
}

fn run_update(args: UpdateCliArgs) -> Result<(), MainError> {
    let settings = load_or_default_settings(&args.settings_path)?;
    report_validation_issues(&settings)?;

    let probe = ProcessToolProbe;
    let sources = select_update_sources(&probe, &args.sources)?;
    let tasks = catalog::update_tasks(&sources);

    let (dispatcher, transcript_path) = build_dispatcher(
        args.save_log,
        args.log_dir.as_deref(),
        settings.log_dir.as_deref(),
    )?;
    let runner = SystemProcessRunner;
    let scheduler = Scheduler::new(&probe, &runner, &dispatcher);
    let report = scheduler.run(tasks)?;

    if let Some(path) = transcript_path {
        println!("transcript saved to {}", path.display());
    }
    finish_session(report)
}

/// Named sources that are not installed are skipped with a notice; with no
/// names given every installed source is updated.
fn select_update_sources(
    probe: &dyn ToolProbe,
    named: &[PackageSource],
) -> Result<Vec<PackageSource>, MainError> {
    if named.is_empty() {
        let sources = catalog::available_sources(probe);
        if sources.is_empty() {
            return Err(MainError::NoSources);
        }
        return Ok(sources);
    }

    let mut sources = Vec::new();
    for source in named {
        if probe.command_exists(source.as_str()) {
            sources.push(*source);
        } else {
            eprintln!("skipping {source}: not installed on this system");
        }
    }
    if sources.is_empty() {
        return Err(MainError::NoSources);
    }
    Ok(sources)
}

fn run_install(args: InstallCliArgs) -> Result<(), MainError> {
    if !args.package.is_file() {
        return Err(MainError::PackageNotFound {
            path: args.package.clone(),
        });
    }
    let settings = load_or_default_settings(&args.settings_path)?;
    report_validation_issues(&settings)?;

    let probe = ProcessToolProbe;
    let preferred = args.pm.or_else(|| settings.preferred_package_manager());
    // No manager at all means there is no install command to build, so
    // this is resolved before a session exists.
    let pm = resolve_package_manager(&probe, preferred).ok_or(MainError::NoPackageManager)?;

    match rpm_info::query_package_info(&args.package) {
        Ok(info) => {
            for line in rpm_info::format_package_info(&info) {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("warning: could not read package info: {err}"),
    }

    if !args.assume_yes {
        if !io::stdin().is_terminal() {
            return Err(MainError::ConfirmNotInteractive);
        }
        let file_name = args
            .package
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.package.display().to_string());
        let answer = prompt_line(&format!(
            "Install {file_name}? You will be prompted for your password. [Y/n] "
        ))?;
        if !is_affirmative(&answer) {
            println!("installation cancelled");
            return Ok(());
        }
    }

    println!("{}", catalog::install_notice(pm));

    let (dispatcher, transcript_path) = build_dispatcher(
        args.save_log,
        args.log_dir.as_deref(),
        settings.log_dir.as_deref(),
    )?;
    let runner = SystemProcessRunner;
    let scheduler = Scheduler::new(&probe, &runner, &dispatcher);
    let report = scheduler.run(vec![catalog::install_task(pm, &args.package)])?;

    if let Some(path) = transcript_path {
        println!("transcript saved to {}", path.display());
    }
    finish_session(report)
}

fn run_info(args: InfoCliArgs) -> Result<(), MainError> {
    if !args.package.is_file() {
        return Err(MainError::PackageNotFound {
            path: args.package.clone(),
        });
    }
    let info = rpm_info::query_package_info(&args.package)?;
    let lines = rpm_info::format_package_info(&info);
    if lines.is_empty() {
        println!("no package metadata reported by rpm");
        return Ok(());
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run_tools() -> Result<(), MainError> {
    let probe = ProcessToolProbe;
    let report = probe_tools(&probe);
    println!("package managers:");
    print_probe_rows(&report.package_managers);
    println!("escalation tools:");
    print_probe_rows(&report.escalation_tools);
    println!("update sources:");
    for source in catalog::ALL_SOURCES {
        let status = if probe.command_exists(source.as_str()) {
            "available"
        } else {
            "not found"
        };
        println!("  {source}: {status}");
    }
    Ok(())
}

fn print_probe_rows(rows: &[ToolProbeRow]) {
    for row in rows {
        let status = if row.available {
            "available"
        } else {
            "not found"
        };
        println!("  {}: {}", row.name, status);
    }
}

fn finish_session(report: SessionReport) -> Result<(), MainError> {
    if report.succeeded {
        return Ok(());
    }
    let failed = report
        .results
        .iter()
        .filter(|result| !result.succeeded)
        .count();
    Err(MainError::SessionFailed {
        failed,
        total: report.results.len(),
    })
}

fn load_or_default_settings(path: &Path) -> Result<Settings, MainError> {
    match load_settings(path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(Settings::default())
        }
        Err(source) => Err(MainError::LoadSettings {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn report_validation_issues(settings: &Settings) -> Result<(), MainError> {
    for issue in settings.validate() {
        match issue.level {
            IssueLevel::Warning => eprintln!("warning: {}", issue.message),
            IssueLevel::Error => return Err(MainError::InvalidSettings(issue.message)),
        }
    }
    Ok(())
}

fn build_dispatcher(
    save_log: bool,
    flag_dir: Option<&Path>,
    settings_dir: Option<&Path>,
) -> Result<(EventDispatcher, Option<PathBuf>), MainError> {
    let mut sinks: Vec<Box<dyn SessionSink>> = vec![Box::new(StdoutSink)];
    if !save_log {
        return Ok((EventDispatcher::new(sinks), None));
    }
    let dir = flag_dir.or(settings_dir).unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|source| MainError::CreateLogDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = transcript_file_path(dir);
    sinks.push(Box::new(TranscriptSink::create(&path)?));
    Ok((EventDispatcher::new(sinks), Some(path)))
}

fn transcript_file_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("jera_log_{stamp}.txt"))
}

fn prompt_line(prompt: &str) -> Result<String, MainError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|source| MainError::ConfirmWrite { source })?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|source| MainError::ConfirmRead { source })?;
    Ok(line)
}

/// Empty input accepts, matching the [Y/n] default.
fn is_affirmative(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("y")
        || trimmed.eq_ignore_ascii_case("yes")
}

fn parse_cli_args(args: Vec<String>, program: &str) -> Result<CliCommand, MainError> {
    if args.is_empty() {
        return Ok(CliCommand::Help(usage(program)));
    }

    match args[0].as_str() {
        "update" => parse_update_cli_args(args[1..].to_vec(), program),
        "install" => parse_install_cli_args(args[1..].to_vec(), program),
        "info" => parse_info_cli_args(args[1..].to_vec(), program),
        "tools" => parse_tools_cli_args(args[1..].to_vec(), program),
        "help" | "--help" | "-h" => Ok(CliCommand::Help(usage(program))),
        other => Err(MainError::Args(format!(
            "unknown command: {other}\n\n{}",
            usage(program)
        ))),
    }
}

fn parse_update_cli_args(args: Vec<String>, program: &str) -> Result<CliCommand, MainError> {
    let mut parsed = UpdateCliArgs {
        settings_path: default_settings_path(),
        sources: Vec::new(),
        save_log: false,
        log_dir: None,
    };

    let mut idx = 0usize;
    while idx < args.len() {
        let arg = &args[idx];
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help(update_usage(program))),
            "--settings" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| MainError::Args("missing value for --settings".to_string()))?;
                parsed.settings_path = PathBuf::from(value);
            }
            "--save-log" => {
                parsed.save_log = true;
            }
            "--log-dir" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| MainError::Args("missing value for --log-dir".to_string()))?;
                parsed.log_dir = Some(PathBuf::from(value));
            }
            other if !other.starts_with('-') => {
                let source = other.parse::<PackageSource>().map_err(MainError::Args)?;
                if !parsed.sources.contains(&source) {
                    parsed.sources.push(source);
                }
            }
            other => {
                return Err(MainError::Args(format!(
                    "unknown update argument: {other}\n\n{}",
                    update_usage(program)
                )));
            }
        }
        idx += 1;
    }

    Ok(CliCommand::Update(parsed))
}

fn parse_install_cli_args(args: Vec<String>, program: &str) -> Result<CliCommand, MainError> {
    let mut package: Option<PathBuf> = None;
    let mut parsed = InstallCliArgs {
        settings_path: default_settings_path(),
        package: PathBuf::new(),
        pm: None,
        assume_yes: false,
        save_log: false,
        log_dir: None,
    };

    let mut idx = 0usize;
    while idx < args.len() {
        let arg = &args[idx];
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help(install_usage(program))),
            "--pm" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| MainError::Args("missing value for --pm".to_string()))?;
                parsed.pm = Some(value.parse::<PackageManager>().map_err(MainError::Args)?);
            }
            "--yes" | "-y" => {
                parsed.assume_yes = true;
            }
            "--settings" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| MainError::Args("missing value for --settings".to_string()))?;
                parsed.settings_path = PathBuf::from(value);
            }
            "--save-log" => {
                parsed.save_log = true;
            }
            "--log-dir" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| MainError::Args("missing value for --log-dir".to_string()))?;
                parsed.log_dir = Some(PathBuf::from(value));
            }
            other if !other.starts_with('-') && package.is_none() => {
                package = Some(PathBuf::from(other));
            }
            other => {
                return Err(MainError::Args(format!(
                    "unknown install argument: {other}\n\n{}",
                    install_usage(program)
                )));
            }
        }
        idx += 1;
    }

    parsed.package = package.ok_or_else(|| {
        MainError::Args(format!(
            "missing <package.rpm> argument\n\n{}",
            install_usage(program)
        ))
    })?;
    Ok(CliCommand::Install(parsed))
}

fn parse_info_cli_args(args: Vec<String>, program: &str) -> Result<CliCommand, MainError> {
    let mut package: Option<PathBuf> = None;

    let mut idx = 0usize;
    while idx < args.len() {
        let arg = &args[idx];
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help(info_usage(program))),
            other if !other.starts_with('-') && package.is_none() => {
                package = Some(PathBuf::from(other));
            }
            other => {
                return Err(MainError::Args(format!(
                    "unknown info argument: {other}\n\n{}",
                    info_usage(program)
                )));
            }
        }
        idx += 1;
    }

    let package = package.ok_or_else(|| {
        MainError::Args(format!(
            "missing <package.rpm> argument\n\n{}",
            info_usage(program)
        ))
    })?;
    Ok(CliCommand::Info(InfoCliArgs { package }))
}

fn parse_tools_cli_args(args: Vec<String>, program: &str) -> Result<CliCommand, MainError> {
    match args.first().map(String::as_str) {
        None => Ok(CliCommand::Tools),
        Some("--help") | Some("-h") => Ok(CliCommand::Help(tools_usage(program))),
        Some(other) => Err(MainError::Args(format!(
            "unknown tools argument: {other}\n\n{}",
            tools_usage(program)
        ))),
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} update [dnf|zypper|yum|flatpak|snap]... [--save-log] [--log-dir <path>] [--settings <path>]\n  {program} install <package.rpm> [--pm <dnf|zypper|yum|rpm>] [--yes] [--save-log] [--log-dir <path>] [--settings <path>]\n  {program} info <package.rpm>\n  {program} tools\n\
\nDefaults:\n  --settings ~/.config/jera/settings.toml\n  update: every source whose backing binary is installed\n  --log-dir: log_dir from settings, else the current directory"
    )
}

fn update_usage(program: &str) -> String {
    format!(
        "Usage: {program} update [dnf|zypper|yum|flatpak|snap]... [--save-log] [--log-dir <path>] [--settings <path>]\n\
\nExamples:\n  {program} update\n  {program} update flatpak snap\n  {program} update --save-log --log-dir ~/jera-logs\n\
\nNotes:\n  without source names every installed source is updated\n  named sources that are not installed are skipped with a notice\n  tasks run strictly one at a time, in the order listed"
    )
}

fn install_usage(program: &str) -> String {
    format!(
        "Usage: {program} install <package.rpm> [--pm <dnf|zypper|yum|rpm>] [--yes] [--save-log] [--log-dir <path>] [--settings <path>]\n\
\nExamples:\n  {program} install ./htop-3.3.0.rpm\n  {program} install ./htop-3.3.0.rpm --pm zypper --yes\n\
\nNotes:\n  --pm overrides preferred_pm from settings for this run\n  --yes skips the confirmation prompt (required when stdin is not a terminal)"
    )
}

fn info_usage(program: &str) -> String {
    format!("Usage: {program} info <package.rpm>")
}

fn tools_usage(program: &str) -> String {
    format!(
        "Usage: {program} tools\n\
\nNotes:\n  probes package managers (dnf, zypper, yum, rpm), escalation tools\n  (pkexec, kdesu, sudo) and update sources, and reports availability"
    )
}

#[cfg(test)]
mod tests {
    use super::{
        is_affirmative, load_or_default_settings, parse_cli_args, report_validation_issues,
        select_update_sources, transcript_file_path, CliCommand, MainError,
    };
    use crate::catalog::PackageSource;
    use jera_core::config::{default_settings_path, save_settings, Settings};
    use jera_core::types::PackageManager;
    use jera_exec::probe::ToolProbe;
    use std::path::{Path, PathBuf};

    fn parse(args: &[&str]) -> Result<CliCommand, MainError> {
        parse_cli_args(args.iter().map(|arg| arg.to_string()).collect(), "jera")
    }

    struct MockProbe {
        installed: Vec<&'static str>,
    }

    impl ToolProbe for MockProbe {
        fn command_exists(&self, executable: &str) -> bool {
            self.installed.contains(&executable)
        }
    }

    #[test]
    fn no_args_prints_usage() {
        let command = parse(&[]).unwrap();
        assert!(matches!(command, CliCommand::Help(text) if text.contains("Usage:")));
    }

    #[test]
    fn help_aliases_print_usage() {
        for alias in ["help", "--help", "-h"] {
            let command = parse(&[alias]).unwrap();
            assert!(matches!(command, CliCommand::Help(text) if text.contains("Usage:")));
        }
    }

    #[test]
    fn unknown_command_is_rejected_with_usage() {
        let err = parse(&["frobnicate"]).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("unknown command: frobnicate"));
        assert!(rendered.contains("Usage:"));
    }

    #[test]
    fn update_defaults_to_auto_sources_and_default_settings() {
        let command = parse(&["update"]).unwrap();
        let CliCommand::Update(args) = command else {
            panic!("expected update command");
        };
        assert!(args.sources.is_empty());
        assert_eq!(args.settings_path, default_settings_path());
        assert!(!args.save_log);
        assert_eq!(args.log_dir, None);
    }

    #[test]
    fn update_collects_named_sources_in_order_without_duplicates() {
        let command = parse(&["update", "flatpak", "snap", "flatpak"]).unwrap();
        let CliCommand::Update(args) = command else {
            panic!("expected update command");
        };
        assert_eq!(
            args.sources,
            vec![PackageSource::Flatpak, PackageSource::Snap]
        );
    }

    #[test]
    fn update_parses_log_flags_and_settings_override() {
        let command = parse(&[
            "update",
            "--save-log",
            "--log-dir",
            "/tmp/jera-logs",
            "--settings",
            "/tmp/settings.toml",
        ])
        .unwrap();
        let CliCommand::Update(args) = command else {
            panic!("expected update command");
        };
        assert!(args.save_log);
        assert_eq!(args.log_dir, Some(PathBuf::from("/tmp/jera-logs")));
        assert_eq!(args.settings_path, PathBuf::from("/tmp/settings.toml"));
    }

    #[test]
    fn update_rejects_unknown_source() {
        let err = parse(&["update", "apt"]).unwrap_err();
        assert!(err.to_string().contains("invalid package source 'apt'"));
    }

    #[test]
    fn update_requires_a_value_for_log_dir() {
        let err = parse(&["update", "--log-dir"]).unwrap_err();
        assert!(err.to_string().contains("missing value for --log-dir"));
    }

    #[test]
    fn install_requires_a_package_argument() {
        let err = parse(&["install"]).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("missing <package.rpm> argument"));
        assert!(rendered.contains("Usage:"));
    }

    #[test]
    fn install_parses_package_and_flags() {
        let command = parse(&["install", "./htop.rpm", "--pm", "zypper", "--yes"]).unwrap();
        let CliCommand::Install(args) = command else {
            panic!("expected install command");
        };
        assert_eq!(args.package, PathBuf::from("./htop.rpm"));
        assert_eq!(args.pm, Some(PackageManager::Zypper));
        assert!(args.assume_yes);
    }

    #[test]
    fn install_rejects_unknown_manager() {
        let err = parse(&["install", "./htop.rpm", "--pm", "apt"]).unwrap_err();
        assert!(err.to_string().contains("invalid package manager 'apt'"));
    }

    #[test]
    fn install_rejects_a_second_positional() {
        let err = parse(&["install", "./a.rpm", "./b.rpm"]).unwrap_err();
        assert!(err.to_string().contains("unknown install argument: ./b.rpm"));
    }

    #[test]
    fn info_parses_its_package() {
        let command = parse(&["info", "./htop.rpm"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Info(super::InfoCliArgs {
                package: PathBuf::from("./htop.rpm"),
            })
        );
    }

    #[test]
    fn tools_takes_no_arguments() {
        assert_eq!(parse(&["tools"]).unwrap(), CliCommand::Tools);
        let err = parse(&["tools", "--verbose"]).unwrap_err();
        assert!(err.to_string().contains("unknown tools argument"));
    }

    #[test]
    fn per_command_help_prints_command_usage() {
        let command = parse(&["install", "--help"]).unwrap();
        assert!(matches!(
            command,
            CliCommand::Help(text) if text.contains("install <package.rpm>")
        ));
    }

    #[test]
    fn auto_selection_uses_every_installed_source() {
        let probe = MockProbe {
            installed: vec!["zypper", "flatpak"],
        };
        let sources = select_update_sources(&probe, &[]).unwrap();
        assert_eq!(sources, vec![PackageSource::Zypper, PackageSource::Flatpak]);
    }

    #[test]
    fn auto_selection_with_nothing_installed_is_an_error() {
        let probe = MockProbe { installed: vec![] };
        let err = select_update_sources(&probe, &[]).unwrap_err();
        assert!(matches!(err, MainError::NoSources));
    }

    #[test]
    fn named_sources_skip_missing_binaries() {
        let probe = MockProbe {
            installed: vec!["snap"],
        };
        let sources =
            select_update_sources(&probe, &[PackageSource::Dnf, PackageSource::Snap]).unwrap();
        assert_eq!(sources, vec![PackageSource::Snap]);
    }

    #[test]
    fn all_named_sources_missing_is_an_error() {
        let probe = MockProbe { installed: vec![] };
        let err = select_update_sources(&probe, &[PackageSource::Dnf]).unwrap_err();
        assert!(matches!(err, MainError::NoSources));
    }

    #[test]
    fn transcript_path_carries_the_session_stamp() {
        let path = transcript_file_path(Path::new("/tmp/logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("jera_log_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(path.parent(), Some(Path::new("/tmp/logs")));
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative(""));
        assert!(is_affirmative("\n"));
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES\n"));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("never"));
    }

    #[test]
    fn missing_settings_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = load_or_default_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn saved_settings_round_trip_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            preferred_pm: "zypper".to_string(),
            log_dir: Some(dir.path().join("logs")),
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_or_default_settings(&path).unwrap(), settings);
    }

    #[test]
    fn broken_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "preferred_pm = [broken").unwrap();
        let err = load_or_default_settings(&path).unwrap_err();
        assert!(matches!(err, MainError::LoadSettings { .. }));
    }

    #[test]
    fn settings_with_unknown_manager_fail_validation() {
        let settings = Settings {
            preferred_pm: "apt".to_string(),
            log_dir: None,
        };
        let err = report_validation_issues(&settings).unwrap_err();
        assert!(matches!(err, MainError::InvalidSettings(_)));
    }

    #[test]
    fn default_settings_pass_validation() {
        assert!(report_validation_issues(&Settings::default()).is_ok());
    }
}
