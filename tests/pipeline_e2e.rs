//! End-to-end pipeline tests against a stub analyzer.
//!
//! The stub is a `sh -c` one-liner printing marker lines; the per-bug
//! `-p <project> -i <index>` arguments land in its positional parameters
//! and are ignored.

use std::fs;
use std::path::Path;

use metaforge::invoke::AnalyzerCommand;
use metaforge::manifest::{Manifest, ProjectSpec};
use metaforge::pipeline::{GeneratorConfig, GeneratorPipeline};
use metaforge::provision::HELPER_SCRIPTS;
use metaforge::record::MetadataRecord;

fn seed_scripts(dir: &Path) {
    for script in HELPER_SCRIPTS {
        fs::write(dir.join(script), format!("#!/bin/bash\n# {script}\n")).unwrap();
    }
}

fn stub_analyzer(script: &str) -> AnalyzerCommand {
    AnalyzerCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string(), "stub".to_string()],
    }
}

fn config(root: &Path, analyzer: AnalyzerCommand, manifest: Manifest) -> GeneratorConfig {
    GeneratorConfig {
        workspace_dir: root.to_path_buf(),
        scripts_dir: root.to_path_buf(),
        output_path: root.join("meta-data.json"),
        analyzer,
        manifest,
    }
}

fn read_records(path: &Path) -> Vec<MetadataRecord> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn demo_project_produces_two_records() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());

    let analyzer = stub_analyzer(
        "printf 'Revision id\\nabc123\\nBuggy id\\ndef456\\nGithub URL: https://example.com/x\\n'",
    );
    let manifest = Manifest {
        projects: vec![ProjectSpec::new("Demo", 3)],
    };
    let cfg = config(tmp.path(), analyzer, manifest);
    let summary = GeneratorPipeline::new(cfg).run().await.unwrap();

    assert_eq!(summary.projects, 1);
    assert_eq!(summary.records, 2);

    let records = read_records(&tmp.path().join("meta-data.json"));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[0].bug_id, "Demo-1");
    assert_eq!(records[1].bug_id, "Demo-2");
    assert_eq!(records[0].fix_commit, "abc123");
    assert_eq!(records[0].bug_commit, "def456");
    assert_eq!(records[0].test_timeout, 5);
    assert_eq!(records[0].language, records[1].language);
    assert_eq!(records[1].test_timeout, 5);

    // Bug directories exist and carry all helper scripts.
    for index in [1, 2] {
        let bug_dir = tmp.path().join("Demo").join(format!("Demo-{index}"));
        for script in HELPER_SCRIPTS {
            assert!(bug_dir.join(script).is_file(), "missing {script}");
        }
    }
}

#[tokio::test]
async fn ids_stay_contiguous_across_projects() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());

    let manifest = Manifest {
        projects: vec![
            ProjectSpec::new("Alpha", 3),
            ProjectSpec::new("Beta", 2),
            ProjectSpec::new("Gamma", 4),
        ],
    };
    let cfg = config(tmp.path(), stub_analyzer("true"), manifest);
    let summary = GeneratorPipeline::new(cfg).run().await.unwrap();

    // 2 + 1 + 3 bugs in generation order
    assert_eq!(summary.records, 6);
    let records = read_records(&tmp.path().join("meta-data.json"));
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let bug_ids: Vec<&str> = records.iter().map(|r| r.bug_id.as_str()).collect();
    assert_eq!(
        bug_ids,
        vec!["Alpha-1", "Alpha-2", "Beta-1", "Gamma-1", "Gamma-2", "Gamma-3"]
    );
}

#[tokio::test]
async fn markerless_output_yields_sentinel_commits() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());

    let manifest = Manifest {
        projects: vec![ProjectSpec::new("Demo", 2)],
    };
    let cfg = config(tmp.path(), stub_analyzer("echo no markers here"), manifest);
    GeneratorPipeline::new(cfg).run().await.unwrap();

    let records = read_records(&tmp.path().join("meta-data.json"));
    assert_eq!(records[0].fix_commit, "N/A");
    assert_eq!(records[0].bug_commit, "N/A");
}

#[tokio::test]
async fn analyzer_failure_degrades_instead_of_aborting() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());

    let manifest = Manifest {
        projects: vec![ProjectSpec::new("Demo", 2)],
    };
    let cfg = config(tmp.path(), stub_analyzer("exit 7"), manifest);
    let summary = GeneratorPipeline::new(cfg).run().await.unwrap();

    assert_eq!(summary.records, 1);
    let records = read_records(&tmp.path().join("meta-data.json"));
    assert_eq!(records[0].fix_commit, "N/A");
    assert_eq!(records[0].bug_commit, "N/A");
}

#[tokio::test]
async fn missing_helper_script_aborts_with_no_document() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());
    fs::remove_file(tmp.path().join("test_subject")).unwrap();

    let manifest = Manifest {
        projects: vec![ProjectSpec::new("Demo", 2)],
    };
    let cfg = config(tmp.path(), stub_analyzer("true"), manifest);
    let result = GeneratorPipeline::new(cfg).run().await;

    assert!(result.is_err());
    assert!(!tmp.path().join("meta-data.json").exists());
}

#[tokio::test]
async fn empty_manifest_writes_empty_document() {
    let tmp = tempfile::tempdir().unwrap();
    seed_scripts(tmp.path());

    let cfg = config(
        tmp.path(),
        stub_analyzer("true"),
        Manifest { projects: vec![] },
    );
    let summary = GeneratorPipeline::new(cfg).run().await.unwrap();

    assert_eq!(summary.records, 0);
    let records = read_records(&tmp.path().join("meta-data.json"));
    assert!(records.is_empty());
}
