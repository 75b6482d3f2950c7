// tests/workflow_test.rs
//
// The classification and bump arithmetic through the orchestration surface,
// plus the tagging side effect against the mock repository.

use version_bumper::cli::orchestration::{compute_next_version, publish_tag};
use version_bumper::config::Config;
use version_bumper::git::{MockRepository, Repository};
use version_bumper::version::{Version, VersionBump};

#[test]
fn test_feat_title_bumps_minor() {
    let (bump, version) = compute_next_version("1.0.0", "feat: add login").unwrap();
    assert_eq!(bump, VersionBump::Minor);
    assert_eq!(version.to_string(), "1.1.0");
}

#[test]
fn test_fix_title_bumps_patch() {
    let (bump, version) = compute_next_version("1.0.0", "fix: null pointer").unwrap();
    assert_eq!(bump, VersionBump::Patch);
    assert_eq!(version.to_string(), "1.0.1");
}

#[test]
fn test_breaking_feat_title_bumps_major() {
    let (bump, version) = compute_next_version("1.2.3", "feat!: redesign API").unwrap();
    assert_eq!(bump, VersionBump::Major);
    assert_eq!(version.to_string(), "2.0.0");
}

#[test]
fn test_chore_title_leaves_version_unchanged() {
    let (bump, version) = compute_next_version("1.2.3", "chore: update deps").unwrap();
    assert_eq!(bump, VersionBump::None);
    assert_eq!(version.to_string(), "1.2.3");
    assert!(!bump.requires_tag());
}

#[test]
fn test_breaking_change_footer_beats_fix_prefix() {
    let title = "fix: patch release\n\nBREAKING CHANGE: removes old field";
    let (bump, version) = compute_next_version("2.5.9", title).unwrap();
    assert_eq!(bump, VersionBump::Major);
    assert_eq!(version.to_string(), "3.0.0");
}

#[test]
fn test_empty_title_is_a_no_op() {
    let (bump, version) = compute_next_version("0.4.2", "").unwrap();
    assert_eq!(bump, VersionBump::None);
    assert_eq!(version, Version::new(0, 4, 2));
}

#[test]
fn test_malformed_baselines_are_rejected() {
    for baseline in ["1.2", "1.2.3.4", "v1.2.3", "1.2.x", " 1.2.3", ""] {
        let result = compute_next_version(baseline, "feat: add login");
        assert!(
            result.is_err(),
            "baseline '{}' should be rejected",
            baseline
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Version parsing error"));
    }
}

#[test]
fn test_publish_tag_records_identity_tag_and_push() {
    let repo = MockRepository::new();
    let config = Config::default();

    publish_tag(&repo, &config, Version::new(1, 1, 0)).unwrap();

    assert_eq!(
        repo.identity(),
        Some((
            "github-actions[bot]".to_string(),
            "github-actions[bot]@users.noreply.github.com".to_string()
        ))
    );

    let tags = repo.created_tags();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "1.1.0");
    assert_eq!(tags[0].message, "Release version 1.1.0");
    assert_eq!(tags[0].target, repo.head_oid().unwrap());
}

#[test]
fn test_publish_tag_pushes_to_configured_remote() {
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.tagging.remote = "upstream".to_string();

    publish_tag(&repo, &config, Version::new(2, 0, 0)).unwrap();

    assert_eq!(
        repo.pushed_tags(),
        vec![("upstream".to_string(), "2.0.0".to_string())]
    );
}

#[test]
fn test_publish_tag_honors_tag_format() {
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.tagging.tag_format = "v{version}".to_string();

    publish_tag(&repo, &config, Version::new(1, 0, 1)).unwrap();

    let tags = repo.created_tags();
    assert_eq!(tags[0].name, "v1.0.1");
    assert_eq!(
        repo.pushed_tags(),
        vec![("origin".to_string(), "v1.0.1".to_string())]
    );
}

#[test]
fn test_publish_tag_propagates_tag_failure_without_pushing() {
    let repo = MockRepository::new().fail_on_tag();
    let config = Config::default();

    let result = publish_tag(&repo, &config, Version::new(1, 1, 0));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().starts_with("Tag error"));
    assert!(repo.pushed_tags().is_empty());
}

#[test]
fn test_publish_tag_propagates_push_failure_keeping_local_tag() {
    let repo = MockRepository::new().fail_on_push();
    let config = Config::default();

    let result = publish_tag(&repo, &config, Version::new(1, 1, 0));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .starts_with("Remote operation failed"));

    // No rollback: the locally created tag stays in place.
    assert_eq!(repo.created_tags().len(), 1);
    assert!(repo.pushed_tags().is_empty());
}
