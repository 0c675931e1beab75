/// Package manager detected from the npm user-agent environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgInfo {
    pub name: String,
    pub version: String,
}

impl PkgInfo {
    /// Parses `<name>/<version>` from the first space-delimited token of
    /// `npm_config_user_agent`, e.g. `pnpm/8.15.4 npm/? node/v20.11.1`.
    pub fn from_user_agent(user_agent: Option<&str>) -> Option<Self> {
        let spec = user_agent?.split(' ').next()?;
        let (name, version) = spec.split_once('/')?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Yarn 1.x lacks `@version` support in its `create` invocation.
    pub fn is_yarn1(&self) -> bool {
        self.name == "yarn" && self.version.starts_with("1.")
    }
}

pub const DEFAULT_PKG_MANAGER: &str = "npm";

/// The placeholder custom commands use for the target directory. Substituted
/// per argv token in [`split_command`], after word splitting, because the
/// directory may contain spaces.
pub const TARGET_DIR_PLACEHOLDER: &str = "TARGET_DIR";

/// Rewrites a generic `npm`-flavored custom command into the detected
/// package manager's idiomatic invocation.
///
/// Three independent rules, applied in order:
/// 1. leading `npm create ` becomes `<mgr> create `, except bun which runs
///    the create package directly via `bun x create-`;
/// 2. the first `@latest` is dropped for yarn 1.x only;
/// 3. leading `npm exec` becomes `pnpm dlx`, `yarn dlx` (modern yarn), or
///    `bun x`; every other manager, yarn 1.x included, keeps `npm exec`.
pub fn rewrite_custom_command(custom_command: &str, pkg_manager: &str, is_yarn1: bool) -> String {
    let mut command = custom_command.to_string();

    if let Some(rest) = command.strip_prefix("npm create ") {
        command = if pkg_manager == "bun" {
            format!("bun x create-{rest}")
        } else {
            format!("{pkg_manager} create {rest}")
        };
    }

    if is_yarn1 {
        command = command.replacen("@latest", "", 1);
    }

    if let Some(rest) = command.strip_prefix("npm exec") {
        let runner = match pkg_manager {
            "pnpm" => "pnpm dlx",
            "yarn" if !is_yarn1 => "yarn dlx",
            "bun" => "bun x",
            _ => "npm exec",
        };
        command = format!("{runner}{rest}");
    }

    command
}

/// Splits a rewritten command line into a program and its arguments,
/// substituting the target directory into each token.
pub fn split_command(command: &str, target_dir: &str) -> (String, Vec<String>) {
    let mut words = command.split(' ');
    let program = words.next().unwrap_or_default().to_string();
    let args = words
        .map(|arg| arg.replace(TARGET_DIR_PLACEHOLDER, target_dir))
        .collect();
    (program, args)
}
