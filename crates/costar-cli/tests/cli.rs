use std::fs;

use costar::{CostarOptions, OutputFormat, build_collaboration_graph, run_main};
use costar_core::{CastMember, DateRange, MovieCredit, PersonId};
use costar_error::ErrorKind;
use costar_tmdb::MockSource;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const P: PersonId = 2975;
const A: PersonId = 6384;
const B: PersonId = 530;
const C: PersonId = 1331;

fn fixture_source() -> MockSource {
    MockSource::new()
        .with_person(P, "Laurence Fishburne")
        .with_filmography(
            P,
            vec![
                MovieCredit::new(1, "M1", "2020-01-01"),
                MovieCredit::new(2, "M2", "2019-01-01"),
                MovieCredit::new(3, "Too early", "1995-01-01"),
            ],
        )
        .with_cast(
            1,
            vec![
                CastMember::new(P, "Laurence Fishburne", 0),
                CastMember::new(A, "A", 1),
                CastMember::new(B, "B", 2),
            ],
        )
        .with_cast(
            2,
            vec![
                CastMember::new(P, "Laurence Fishburne", 0),
                CastMember::new(A, "A", 1),
                CastMember::new(C, "C", 2),
            ],
        )
}

fn base_options() -> CostarOptions {
    CostarOptions::new(P, DateRange::parse("2000-01-01", "2025-12-31").expect("range"))
}

fn edge_labels(outcome: &costar::BuildOutcome) -> Vec<(PersonId, PersonId, String)> {
    outcome
        .graph
        .edges()
        .map(|(key, info)| (key.low(), key.high(), info.label.clone()))
        .collect()
}

#[test]
fn builds_focal_collaboration_graph() {
    let source = fixture_source();
    let outcome = build_collaboration_graph(&source, &base_options()).expect("build");

    assert_eq!(outcome.focal_name, "Laurence Fishburne");
    assert_eq!(outcome.movies_considered, 2);
    assert!(outcome.skipped.is_empty());
    assert_eq!(source.cast_requests(), vec![1, 2]);

    assert_eq!(outcome.graph.total_nodes(), 4);
    assert_eq!(
        edge_labels(&outcome),
        vec![
            (B, P, "M1".to_string()),
            (C, P, "M2".to_string()),
            (P, A, "M1".to_string()),
        ]
    );
    assert_eq!(outcome.graph.degree(P), 3);
    for id in [A, B, C] {
        assert_eq!(outcome.graph.degree(id), 1, "degree of {id}");
    }
    assert_eq!(
        outcome.graph.max_degree_nodes().into_iter().collect::<Vec<_>>(),
        vec![(P, "Laurence Fishburne".to_string())]
    );
}

#[test]
fn failed_cast_fetch_skips_only_that_movie() {
    let source = fixture_source().fail_cast(1);
    let outcome = build_collaboration_graph(&source, &base_options()).expect("build");

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].id, 1);
    assert_eq!(outcome.skipped[0].reason, "Network");
    assert_eq!(
        edge_labels(&outcome),
        vec![(C, P, "M2".to_string()), (P, A, "M2".to_string())]
    );
}

#[test]
fn failed_filmography_fetch_is_fatal() {
    let source = fixture_source().fail_filmography(P);
    let err = build_collaboration_graph(&source, &base_options()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.operation(), "pipeline::filmography");
    assert_eq!(err.context_value("person_id"), Some("2975"));
}

#[test]
fn explicit_name_wins_and_missing_name_falls_back() {
    let mut opts = base_options();
    opts.person_name = Some("Larry".to_string());
    let outcome = build_collaboration_graph(&fixture_source(), &opts).expect("build");
    assert_eq!(outcome.graph.name(P), Some("Larry"));

    let source = MockSource::new().with_filmography(7, Vec::new());
    let mut opts = base_options();
    opts.person = 7;
    let outcome = build_collaboration_graph(&source, &opts).expect("build");
    assert_eq!(outcome.focal_name, "person 7");
    assert_eq!(outcome.graph.total_nodes(), 1);
    assert_eq!(outcome.graph.total_edges(), 0);
}

#[test]
fn parallel_run_matches_sequential_run() {
    let mut source = fixture_source();
    for id in 10..40u64 {
        source = source.with_cast(
            id,
            (0..6)
                .map(|i| CastMember::new(1000 + (id + i) % 17, format!("actor {i}"), i as u32))
                .collect(),
        );
    }
    let filmography: Vec<MovieCredit> = (10..40u64)
        .map(|id| MovieCredit::new(id, format!("Film {id}"), format!("2010-01-{:02}", id % 28 + 1)))
        .collect();
    let source = source.with_filmography(P, filmography).fail_cast(17);

    let sequential = build_collaboration_graph(&source, &base_options()).expect("sequential");
    let mut opts = base_options();
    opts.parallel = true;
    let parallel = build_collaboration_graph(&source, &opts).expect("parallel");

    assert_eq!(edge_labels(&sequential), edge_labels(&parallel));
    assert_eq!(sequential.skipped, parallel.skipped);
    assert_eq!(
        sequential.graph.max_degree_nodes(),
        parallel.graph.max_degree_nodes()
    );
}

#[test]
fn run_main_writes_dot_and_reports() {
    let dir = tempdir().expect("tempdir");
    let dot_path = dir.path().join("graph.dot");

    let mut opts = base_options();
    opts.dot_path = Some(dot_path.clone());
    opts.top = Some(2);

    let report = run_main(&fixture_source(), &opts).expect("run");
    assert!(report.contains("=== Collaboration Graph for Laurence Fishburne ==="));
    assert!(report.contains("Total Nodes: 4"));
    assert!(report.contains("Total Edges: 3"));
    assert!(report.contains("  Laurence Fishburne (ID 2975)"));
    assert!(report.contains("Top Collaborators:"));

    let dot = fs::read_to_string(&dot_path).expect("dot file");
    assert!(dot.starts_with("graph G {"));
    assert!(dot.contains("n2975 -- n6384 [label=\"M1\"];"));
    assert!(dot.contains("n1331 -- n2975 [label=\"M2\"];"));
    assert!(dot.contains("n2975 [label=\"Laurence Fishburne\", fillcolor=\"#ffd966\"];"));
}

#[test]
fn run_main_json_report() {
    let mut opts = base_options();
    opts.format = OutputFormat::Json;

    let report = run_main(&fixture_source().fail_cast(2), &opts).expect("run");
    let value: serde_json::Value = serde_json::from_str(&report).expect("json");
    assert_eq!(value["stats"]["total_nodes"], 3);
    assert_eq!(value["movies_skipped"], 1);
    assert_eq!(value["skipped"][0]["title"], "M2");
}
