use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::catalog::{find_variant, split_swc_marker};
use crate::domain::model::OverwriteDecision;
use crate::domain::name::{format_target_dir, is_valid_package_name, to_valid_package_name};
use crate::domain::pkg_manager::{
    rewrite_custom_command, split_command, PkgInfo, DEFAULT_PKG_MANAGER,
};
use crate::infrastructure::fs_util::{empty_dir, is_empty};
use crate::infrastructure::manifest::{patch_manifest_name, setup_react_swc};

use super::ports::{CommandRunner, TemplateFetcher, UserPrompt};

pub const DEFAULT_TARGET_DIR: &str = "xc-project";

/// Inputs resolved before any prompting: CLI flags plus process context.
/// Each wizard step reads only the fields it needs and is skipped when its
/// value is already determined.
pub struct ScaffoldArgs {
    pub cwd: PathBuf,
    pub target_dir: Option<String>,
    pub template: Option<String>,
    pub overwrite: Option<OverwriteDecision>,
    pub user_agent: Option<String>,
}

/// Terminal state of one scaffolding run.
#[derive(Debug)]
pub enum Outcome {
    /// Template fetched and manifest patched at `root`.
    Scaffolded { root: PathBuf },
    /// An external generator ran instead; its exit status is mirrored.
    Delegated { status: Option<i32> },
    /// The user backed out; nothing further was touched.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ProjectName,
    Overwrite,
    PackageName,
    Template,
}

pub struct ScaffoldUseCase<P, F, R> {
    prompt: P,
    fetcher: F,
    runner: R,
}

impl<P: UserPrompt, F: TemplateFetcher, R: CommandRunner> ScaffoldUseCase<P, F, R> {
    pub fn new(prompt: P, fetcher: F, runner: R) -> Self {
        Self {
            prompt,
            fetcher,
            runner,
        }
    }

    pub fn execute(&self, args: ScaffoldArgs) -> Result<Outcome> {
        let arg_target = args
            .target_dir
            .as_deref()
            .map(format_target_dir)
            .filter(|dir| !dir.is_empty());

        let mut target_dir = arg_target
            .clone()
            .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());
        let mut overwrite: Option<OverwriteDecision> = None;
        let mut package_name: Option<String> = None;
        let mut template: Option<String> = None;

        let mut step = Step::ProjectName;
        loop {
            match step {
                Step::ProjectName => {
                    if arg_target.is_none() {
                        match self.prompt.input_project_name(DEFAULT_TARGET_DIR)? {
                            Some(name) => {
                                let formatted = format_target_dir(&name);
                                target_dir = if formatted.is_empty() {
                                    DEFAULT_TARGET_DIR.to_string()
                                } else {
                                    formatted
                                };
                            }
                            None => return Ok(Outcome::Cancelled),
                        }
                    }
                    step = Step::Overwrite;
                }
                Step::Overwrite => {
                    let root = resolve_root(&args.cwd, &target_dir);
                    if root.exists() && !is_empty(&root)? {
                        let decision = match args.overwrite {
                            Some(decision) => decision,
                            None => match self.prompt.select_overwrite(&target_dir)? {
                                Some(decision) => decision,
                                None => return Ok(Outcome::Cancelled),
                            },
                        };
                        if decision == OverwriteDecision::Cancel {
                            return Ok(Outcome::Cancelled);
                        }
                        overwrite = Some(decision);
                    }
                    step = Step::PackageName;
                }
                Step::PackageName => {
                    let name = project_name(&args.cwd, &target_dir);
                    if !is_valid_package_name(&name) {
                        match self
                            .prompt
                            .input_package_name(&to_valid_package_name(&name))?
                        {
                            Some(name) => package_name = Some(name),
                            None => return Ok(Outcome::Cancelled),
                        }
                    }
                    step = Step::Template;
                }
                Step::Template => {
                    let known = args
                        .template
                        .as_deref()
                        .filter(|t| find_variant(t).is_some());
                    if let Some(t) = known {
                        template = Some(t.to_string());
                        break;
                    }
                    let framework = match self.prompt.select_framework(args.template.as_deref())? {
                        Some(framework) => framework,
                        None => return Ok(Outcome::Cancelled),
                    };
                    let variant = match self.prompt.select_variant(framework)? {
                        Some(variant) => variant,
                        None => return Ok(Outcome::Cancelled),
                    };
                    template = Some(variant.name.to_string());
                    break;
                }
            }
        }

        // Invariant past this point: a template identifier and target
        // directory are both resolved.
        let template = template.expect("template resolved by wizard");
        let root = resolve_root(&args.cwd, &target_dir);

        if overwrite == Some(OverwriteDecision::Clear) {
            empty_dir(&root)?;
        } else if !root.exists() {
            fs::create_dir_all(&root)?;
        }

        let (template, is_swc) = split_swc_marker(&template);

        let pkg_info = PkgInfo::from_user_agent(args.user_agent.as_deref());
        let pkg_manager = pkg_info
            .as_ref()
            .map(|info| info.name.as_str())
            .unwrap_or(DEFAULT_PKG_MANAGER);
        let is_yarn1 = pkg_info.as_ref().is_some_and(PkgInfo::is_yarn1);

        if let Some(custom) = find_variant(&template).and_then(|v| v.custom_command) {
            let full_command = rewrite_custom_command(custom, pkg_manager, is_yarn1);
            let (program, command_args) = split_command(&full_command, &target_dir);
            let status = self.runner.run(&program, &command_args)?;
            return Ok(Outcome::Delegated { status });
        }

        println!("\nScaffolding project in {}...", root.display());
        self.fetcher.fetch(&template, &root)?;

        let manifest_name = package_name
            .clone()
            .unwrap_or_else(|| project_name(&args.cwd, &target_dir));
        patch_manifest_name(&root, &manifest_name)?;

        if is_swc {
            setup_react_swc(&root, template.ends_with("-ts"))?;
        }

        report_next_steps(&args.cwd, &root, pkg_manager);
        Ok(Outcome::Scaffolded { root })
    }
}

fn resolve_root(cwd: &Path, target_dir: &str) -> PathBuf {
    if target_dir == "." {
        cwd.to_path_buf()
    } else {
        cwd.join(target_dir)
    }
}

/// The project name backing the manifest: the target directory itself, or
/// the basename of the current directory when scaffolding in place.
fn project_name(cwd: &Path, target_dir: &str) -> String {
    if target_dir == "." {
        cwd.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_TARGET_DIR)
            .to_string()
    } else {
        target_dir.to_string()
    }
}

fn report_next_steps(cwd: &Path, root: &Path, pkg_manager: &str) {
    println!("\nDone. Now run:\n");
    if root != cwd {
        let cd_path = root
            .strip_prefix(cwd)
            .unwrap_or(root)
            .display()
            .to_string();
        if cd_path.contains(' ') {
            println!("  cd \"{cd_path}\"");
        } else {
            println!("  cd {cd_path}");
        }
    }
    match pkg_manager {
        "yarn" => {
            println!("  yarn");
            println!("  yarn dev");
        }
        _ => {
            println!("  {pkg_manager} install");
            println!("  {pkg_manager} run dev");
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::domain::catalog::{Framework, Variant, FRAMEWORKS};

    struct MockPrompt {
        project_name: Option<String>,
        overwrite: Option<OverwriteDecision>,
        package_name: Option<String>,
        framework: &'static Framework,
        variant_index: usize,
        calls: RefCell<Vec<String>>,
        invalid_template_seen: RefCell<Option<String>>,
    }

    impl MockPrompt {
        fn new() -> Self {
            Self {
                project_name: Some("test-app".to_string()),
                overwrite: Some(OverwriteDecision::Clear),
                package_name: Some("test-app".to_string()),
                framework: &FRAMEWORKS[1],
                variant_index: 0,
                calls: RefCell::new(Vec::new()),
                invalid_template_seen: RefCell::new(None),
            }
        }
    }

    impl UserPrompt for MockPrompt {
        fn input_project_name(&self, _default: &str) -> Result<Option<String>> {
            self.calls.borrow_mut().push("project_name".to_string());
            Ok(self.project_name.clone())
        }

        fn select_overwrite(&self, _target_dir: &str) -> Result<Option<OverwriteDecision>> {
            self.calls.borrow_mut().push("overwrite".to_string());
            Ok(self.overwrite)
        }

        fn input_package_name(&self, suggestion: &str) -> Result<Option<String>> {
            self.calls
                .borrow_mut()
                .push(format!("package_name:{suggestion}"));
            Ok(self.package_name.clone())
        }

        fn select_framework(
            &self,
            invalid_template: Option<&str>,
        ) -> Result<Option<&'static Framework>> {
            self.calls.borrow_mut().push("framework".to_string());
            *self.invalid_template_seen.borrow_mut() = invalid_template.map(str::to_string);
            Ok(Some(self.framework))
        }

        fn select_variant(&self, framework: &'static Framework) -> Result<Option<&'static Variant>> {
            self.calls.borrow_mut().push("variant".to_string());
            Ok(framework.variants.get(self.variant_index))
        }
    }

    /// Writes a minimal package.json into the destination, standing in for
    /// a fetched template tree.
    struct MockFetcher {
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl MockFetcher {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TemplateFetcher for MockFetcher {
        fn fetch(&self, template: &str, dest: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((template.to_string(), dest.to_path_buf()));
            fs::create_dir_all(dest)?;
            fs::write(
                dest.join("package.json"),
                "{\n  \"name\": \"template-placeholder\",\n  \"version\": \"0.0.0\"\n}\n",
            )?;
            Ok(())
        }
    }

    struct MockRunner {
        status: Option<i32>,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl MockRunner {
        fn new() -> Self {
            Self {
                status: Some(0),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for MockRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            Ok(self.status)
        }
    }

    fn use_case() -> ScaffoldUseCase<MockPrompt, MockFetcher, MockRunner> {
        ScaffoldUseCase::new(MockPrompt::new(), MockFetcher::new(), MockRunner::new())
    }

    fn args_in(cwd: &Path) -> ScaffoldArgs {
        ScaffoldArgs {
            cwd: cwd.to_path_buf(),
            target_dir: None,
            template: None,
            overwrite: None,
            user_agent: None,
        }
    }

    fn manifest_name(root: &Path) -> String {
        let raw = fs::read_to_string(root.join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        value["name"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_all_flags_skip_every_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        let uc = use_case();

        let mut args = args_in(tmp.path());
        args.target_dir = Some("my-app".to_string());
        args.template = Some("out-react".to_string());

        let outcome = uc.execute(args).unwrap();
        assert!(matches!(outcome, Outcome::Scaffolded { .. }));
        assert!(uc.prompt.calls.borrow().is_empty());

        let fetches = uc.fetcher.calls.borrow();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].0, "out-react");
        assert_eq!(fetches[0].1, tmp.path().join("my-app"));
        assert_eq!(manifest_name(&tmp.path().join("my-app")), "my-app");
    }

    #[test]
    fn test_interactive_fills_missing_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let uc = use_case();

        let outcome = uc.execute(args_in(tmp.path())).unwrap();
        assert!(matches!(outcome, Outcome::Scaffolded { .. }));

        let calls = uc.prompt.calls.borrow();
        assert!(calls.contains(&"project_name".to_string()));
        assert!(calls.contains(&"framework".to_string()));
        assert!(calls.contains(&"variant".to_string()));
        // Fresh directory, so no overwrite prompt; valid name, so no
        // package-name prompt.
        assert!(!calls.iter().any(|c| c == "overwrite"));
        assert!(!calls.iter().any(|c| c.starts_with("package_name")));

        assert_eq!(manifest_name(&tmp.path().join("test-app")), "test-app");
    }

    #[test]
    fn test_invalid_project_name_triggers_package_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompt = MockPrompt::new();
        prompt.package_name = Some("renamed-app".to_string());
        let uc = ScaffoldUseCase::new(prompt, MockFetcher::new(), MockRunner::new());

        let mut args = args_in(tmp.path());
        args.target_dir = Some("My App".to_string());
        args.template = Some("out-vanilla".to_string());

        uc.execute(args).unwrap();
        let calls = uc.prompt.calls.borrow();
        assert!(calls.contains(&"package_name:my-app".to_string()));
        assert_eq!(manifest_name(&tmp.path().join("My App")), "renamed-app");
    }

    #[test]
    fn test_overwrite_cancel_leaves_directory_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("busy");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("keep.txt"), "precious").unwrap();

        let uc = use_case();
        let mut args = args_in(tmp.path());
        args.target_dir = Some("busy".to_string());
        args.template = Some("out-react".to_string());
        args.overwrite = Some(OverwriteDecision::Cancel);

        let outcome = uc.execute(args).unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
        assert!(uc.fetcher.calls.borrow().is_empty());
        assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "precious");
    }

    #[test]
    fn test_overwrite_clear_empties_directory_first() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("busy");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("stale.txt"), "old").unwrap();

        let uc = use_case();
        let mut args = args_in(tmp.path());
        args.target_dir = Some("busy".to_string());
        args.template = Some("out-react".to_string());
        args.overwrite = Some(OverwriteDecision::Clear);

        uc.execute(args).unwrap();
        assert!(!root.join("stale.txt").exists());
        assert!(root.join("package.json").exists());
    }

    #[test]
    fn test_unknown_template_flag_reprompts_with_message() {
        let tmp = tempfile::tempdir().unwrap();
        let uc = use_case();

        let mut args = args_in(tmp.path());
        args.target_dir = Some("my-app".to_string());
        args.template = Some("bogus-template".to_string());

        uc.execute(args).unwrap();
        assert!(uc.prompt.calls.borrow().contains(&"framework".to_string()));
        assert_eq!(
            uc.prompt.invalid_template_seen.borrow().as_deref(),
            Some("bogus-template")
        );
    }

    #[test]
    fn test_custom_variant_delegates_without_fetch() {
        let tmp = tempfile::tempdir().unwrap();
        let mut runner = MockRunner::new();
        runner.status = Some(3);
        let uc = ScaffoldUseCase::new(MockPrompt::new(), MockFetcher::new(), runner);

        let mut args = args_in(tmp.path());
        args.target_dir = Some("my-app".to_string());
        args.template = Some("custom-nuxt".to_string());
        args.user_agent = Some("pnpm/8.15.4 npm/? node/v20.11.1".to_string());

        let outcome = uc.execute(args).unwrap();
        assert!(matches!(outcome, Outcome::Delegated { status: Some(3) }));
        assert!(uc.fetcher.calls.borrow().is_empty());

        let runs = uc.runner.calls.borrow();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0, "pnpm");
        assert_eq!(runs[0].1, vec!["dlx", "nuxi", "init", "my-app"]);
        // Directory creation happens before delegation, like the fetch path.
        assert!(tmp.path().join("my-app").is_dir());
    }

    #[test]
    fn test_yarn1_delegation_drops_version_pin() {
        let tmp = tempfile::tempdir().unwrap();
        let uc = use_case();

        let mut args = args_in(tmp.path());
        args.target_dir = Some("my-app".to_string());
        args.template = Some("custom-create-vue".to_string());
        args.user_agent = Some("yarn/1.22.19 npm/? node/v18.19.0".to_string());

        uc.execute(args).unwrap();
        let runs = uc.runner.calls.borrow();
        assert_eq!(runs[0].0, "yarn");
        assert_eq!(runs[0].1, vec!["create", "vue", "my-app"]);
    }

    #[test]
    fn test_prompt_cancellation_unwinds_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompt = MockPrompt::new();
        prompt.project_name = None;
        let uc = ScaffoldUseCase::new(prompt, MockFetcher::new(), MockRunner::new());

        let outcome = uc.execute(args_in(tmp.path())).unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
        assert!(uc.fetcher.calls.borrow().is_empty());
        assert!(uc.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_scaffold_in_current_directory_uses_basename() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().join("basename-app");
        fs::create_dir_all(&cwd).unwrap();

        let uc = use_case();
        let mut args = args_in(&cwd);
        args.target_dir = Some(".".to_string());
        args.template = Some("out-vue".to_string());

        let outcome = uc.execute(args).unwrap();
        match outcome {
            Outcome::Scaffolded { root } => assert_eq!(root, cwd),
            other => panic!("expected scaffolded outcome, got {other:?}"),
        }
        assert_eq!(manifest_name(&cwd), "basename-app");
    }

    #[test]
    fn test_empty_target_arg_falls_back_to_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        let uc = use_case();

        let mut args = args_in(tmp.path());
        // Whitespace-only positional argument normalizes to empty.
        args.target_dir = Some("   ".to_string());
        args.template = Some("out-vanilla".to_string());

        uc.execute(args).unwrap();
        assert!(uc.prompt.calls.borrow().contains(&"project_name".to_string()));
        assert!(tmp.path().join("test-app").is_dir());
    }
}
