// tests/integration_test.rs
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--bin", "version-bumper", "--quiet", "--"])
        .args(args)
        .env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_EVENT_PATH")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_WORKSPACE")
        .env_remove("INPUT_TOKEN")
        .env_remove("INPUT_INITIAL_VERSION")
        .env_remove("INPUT_FORCE_INITIAL")
        .env_remove("CORE_ACCESS_TOKEN")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_version_bumper_help() {
    let output = run_binary(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version-bumper"));
    assert!(stdout.contains("Bump the semantic version"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version_bumper_version_flag() {
    let output = run_binary(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version-bumper"));
}

fn dry_run(baseline: &str, title: &str) -> String {
    let output = run_binary(&[
        "--dry-run",
        "--initial-version",
        baseline,
        "--title",
        title,
    ]);

    assert!(
        output.status.success(),
        "dry run should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_dry_run_feat_title() {
    let stdout = dry_run("1.0.0", "feat: add login");
    assert!(stdout.contains("Bump type determined: minor"));
    assert!(stdout.contains("1.1.0"));
}

#[test]
fn test_dry_run_fix_title() {
    let stdout = dry_run("1.0.0", "fix: null pointer");
    assert!(stdout.contains("Bump type determined: patch"));
    assert!(stdout.contains("1.0.1"));
}

#[test]
fn test_dry_run_breaking_title() {
    let stdout = dry_run("1.2.3", "feat!: redesign API");
    assert!(stdout.contains("Bump type determined: major"));
    assert!(stdout.contains("2.0.0"));
}

#[test]
fn test_dry_run_chore_title_plans_no_tag() {
    let stdout = dry_run("1.2.3", "chore: update deps");
    assert!(stdout.contains("Bump type determined: none"));
    assert!(stdout.contains("No tag would be created"));
}

#[test]
fn test_dry_run_breaking_change_footer() {
    let stdout = dry_run(
        "2.5.9",
        "fix: patch release\n\nBREAKING CHANGE: removes old field",
    );
    assert!(stdout.contains("Bump type determined: major"));
    assert!(stdout.contains("3.0.0"));
}

#[test]
fn test_dry_run_rejects_malformed_baseline() {
    let output = run_binary(&["--dry-run", "--initial-version", "v1.2.3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Action failed"));
    assert!(stderr.contains("Version parsing error"));
}

#[test]
fn test_real_run_without_token_fails_before_any_side_effect() {
    let output = run_binary(&["--initial-version", "1.0.0", "--title", "feat: x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Action failed"));
    assert!(stderr.contains("Input required and not supplied: token"));
}

#[cfg(test)]
mod git_operations_tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use version_bumper::cli::orchestration::publish_tag;
    use version_bumper::config::Config;
    use version_bumper::git::Git2Repository;
    use version_bumper::handoff::{CoreAction, HandoffContext};
    use version_bumper::version::Version;

    use super::*;

    // Helper to set up a git repo with one commit at the given path
    fn init_repo_with_commit(dir: &Path) -> git2::Repository {
        let repo = git2::Repository::init(dir).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        fs::write(dir.join("entrypoint.sh"), "#!/bin/sh\nexit 0\n")
            .expect("Could not write entrypoint");

        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("entrypoint.sh"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");
        let tree_id = index.write_tree().expect("Could not write tree");

        {
            let tree = repo.find_tree(tree_id).expect("Could not find tree");
            let sig = repo.signature().expect("Could not get sig");
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("Could not create commit");
        }

        repo
    }

    #[test]
    fn test_publish_tag_against_real_repository() {
        let work_dir = TempDir::new().expect("Could not create temp dir");
        let remote_dir = TempDir::new().expect("Could not create temp dir");

        let repo = init_repo_with_commit(work_dir.path());
        git2::Repository::init_bare(remote_dir.path()).expect("Could not init bare repo");
        repo.remote("origin", remote_dir.path().to_str().unwrap())
            .expect("Could not add remote");

        let config = Config::default();
        let git_repo = Git2Repository::open(work_dir.path()).expect("Could not open repo");

        publish_tag(&git_repo, &config, Version::new(1, 1, 0)).expect("publish should succeed");

        // The annotated tag exists locally with the release message and the
        // configured bot identity
        let tag_ref = repo
            .find_reference("refs/tags/1.1.0")
            .expect("tag should exist locally");
        let tag = tag_ref
            .peel(git2::ObjectType::Tag)
            .expect("tag should be annotated")
            .into_tag()
            .map_err(|_| "not an annotated tag")
            .unwrap();
        assert_eq!(tag.message(), Some("Release version 1.1.0"));
        assert_eq!(
            tag.tagger().and_then(|sig| sig.name().map(String::from)),
            Some("github-actions[bot]".to_string())
        );

        // ...and was pushed to the remote
        let bare =
            git2::Repository::open_bare(remote_dir.path()).expect("Could not open bare repo");
        assert!(bare.find_reference("refs/tags/1.1.0").is_ok());
    }

    #[test]
    fn test_publish_tag_fails_without_remote() {
        let work_dir = TempDir::new().expect("Could not create temp dir");
        init_repo_with_commit(work_dir.path());

        let config = Config::default();
        let git_repo = Git2Repository::open(work_dir.path()).expect("Could not open repo");

        let result = publish_tag(&git_repo, &config, Version::new(1, 0, 1));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Remote operation failed"));
    }

    #[test]
    fn test_core_action_staging_from_local_repository() {
        let source_dir = TempDir::new().expect("Could not create temp dir");
        let parent_dir = TempDir::new().expect("Could not create temp dir");

        init_repo_with_commit(source_dir.path());

        let action = CoreAction::new(
            source_dir.path().to_str().unwrap(),
            "core-action",
            "entrypoint.sh",
        );

        let checkout = action
            .stage("unused-token", parent_dir.path())
            .expect("stage should clone the repository");

        assert_eq!(checkout, parent_dir.path().join("core-action"));
        assert!(checkout.join("entrypoint.sh").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_core_action_stage_then_invoke() {
        use std::os::unix::fs::PermissionsExt;

        let source_dir = TempDir::new().expect("Could not create temp dir");
        let parent_dir = TempDir::new().expect("Could not create temp dir");

        init_repo_with_commit(source_dir.path());

        let action = CoreAction::new(
            source_dir.path().to_str().unwrap(),
            "core-action",
            "entrypoint.sh",
        );

        let checkout = action
            .stage("unused-token", parent_dir.path())
            .expect("stage should clone the repository");

        // The clone does not preserve the executable bit from this test's
        // plain fs::write, so set it on the checkout
        let entry = checkout.join("entrypoint.sh");
        fs::set_permissions(&entry, fs::Permissions::from_mode(0o755))
            .expect("Could not chmod entry point");

        let context = HandoffContext {
            token: "user-token".to_string(),
            initial_version: "1.0.0".to_string(),
            force_initial: false,
        };

        action
            .invoke(&checkout, &context)
            .expect("invoke should run the staged entry point");
    }

    #[test]
    fn test_core_action_stage_missing_repository_fails() {
        let parent_dir = TempDir::new().expect("Could not create temp dir");

        let action = CoreAction::new(
            "/nonexistent/core-action-repo",
            "core-action",
            "entrypoint.sh",
        );

        let result = action.stage("unused-token", parent_dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot access core action repository"));
    }
}
