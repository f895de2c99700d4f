use sentinel::{
    from_node_link_str, load_node_link, AnomalyEngine, EmbeddingMap, EntityGraph, EntityId,
    ResultExporter, ScoreRecord, ScoringConfig, ScoringError,
};
use std::io::Write;
use tempfile::NamedTempFile;

const GRAPH: &str = r#"{
    "directed": true,
    "multigraph": true,
    "nodes": [
        {"id": 979893388, "type": "vessel"},
        {"id": "Oceanfront Oasis Inc Carriers", "type": "company"},
        {"id": 101, "type": "person"},
        {"id": 202, "type": "vessel"},
        {"id": "Harbor Party", "type": "political_organization"}
    ],
    "links": [
        {"source": 979893388, "target": 101, "type": "ownership"},
        {"source": 101, "target": "Oceanfront Oasis Inc Carriers", "type": "family_relationship"},
        {"source": "Oceanfront Oasis Inc Carriers", "target": 979893388, "type": "ownership"},
        {"source": 202, "target": "Harbor Party", "type": "membership"}
    ]
}"#;

const EMBEDDINGS: &str = r#"{
    "979893388": [0.0, 0.0],
    "Oceanfront Oasis Inc Carriers": [3.0, 4.0],
    "101": [0.0, 4.0],
    "202": [6.0, 8.0],
    "Harbor Party": [3.0, 0.0]
}"#;

fn setup() -> (EntityGraph, EmbeddingMap) {
    let (graph, report) = from_node_link_str(GRAPH).unwrap();
    assert!(!report.has_repairs());
    let embeddings = EmbeddingMap::from_json_str(EMBEDDINGS).unwrap();
    (graph, embeddings)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_end_to_end_scores() {
    let (graph, embeddings) = setup();
    let report = AnomalyEngine::new(&graph, &embeddings, ScoringConfig::default())
        .run()
        .unwrap();

    assert_eq!(report.len(), 5);
    assert_eq!(report.component_count, 2);
    // (3 * 1/3 + 2 * 1/2) / 5
    assert_close(report.mean_vessel_ratio, 0.4);

    // The 3-cycle runs through both seed entities
    let cycles: Vec<u64> = report.features.iter().map(|f| f.cycles).collect();
    assert_eq!(cycles, vec![1, 1, 1, 0, 0]);

    // Only the family edge out of 101 is in reach of the two seeds
    let family: Vec<u64> = report.features.iter().map(|f| f.family_edges).collect();
    assert_eq!(family, vec![1, 1, 0, 0, 0]);

    let political: Vec<u64> = report.features.iter().map(|f| f.political_orgs).collect();
    assert_eq!(political, vec![0, 0, 0, 1, 0]);

    let third = 1.0 / 3.0;
    let expected_raw = [
        third - 0.4 + 0.1 + 5.0 + 1.0,
        third - 0.4 + 0.1 - 2.5 + 1.0,
        third - 0.4 - 2.0 + 3.0 + 1.0,
        0.5 - 0.4 + 1.0 - 5.0 + 5.0,
        0.5 - 0.4 - 1.5 + 4.0,
    ];
    for (record, expected) in report.records.iter().zip(expected_raw) {
        assert_close(record.raw_score, expected);
    }

    assert_eq!(report.records[0].id, EntityId::Int(979893388));
    assert_eq!(report.records[0].norm_score, 100.0);
    assert_eq!(report.records[1].norm_score, 0.0);

    let ranked: Vec<&EntityId> = report.top(5).iter().map(|r| &r.id).collect();
    assert_eq!(
        ranked,
        vec![
            &EntityId::Int(979893388),
            &EntityId::from("Harbor Party"),
            &EntityId::Int(101),
            &EntityId::Int(202),
            &EntityId::from("Oceanfront Oasis Inc Carriers"),
        ]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let (graph, embeddings) = setup();
    let parallel = AnomalyEngine::new(&graph, &embeddings, ScoringConfig::default())
        .run()
        .unwrap();

    let config = ScoringConfig {
        parallel: false,
        ..ScoringConfig::default()
    };
    let sequential = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();

    for (a, b) in parallel.records.iter().zip(&sequential.records) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.raw_score.to_bits(), b.raw_score.to_bits());
        assert_eq!(a.norm_score.to_bits(), b.norm_score.to_bits());
    }
    assert_eq!(parallel.features, sequential.features);
}

#[test]
fn test_short_cycle_bound_drops_cycle() {
    let (graph, embeddings) = setup();
    let config = ScoringConfig::default().with_max_cycle_length(2);
    let report = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();
    assert!(report.features.iter().all(|f| f.cycles == 0));
}

#[test]
fn test_cycle_budget_marks_lower_bounds() {
    let (graph, embeddings) = setup();
    let config = ScoringConfig {
        cycle_budget: Some(1),
        ..ScoringConfig::default()
    };
    let report = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();
    assert!(report.truncated_searches > 0);
    assert!(report.features.iter().any(|f| f.cycles_truncated));
}

#[test]
fn test_no_seeds_present_scores_zero_cycles() {
    let (graph, embeddings) = setup();
    let config = ScoringConfig {
        illegal_entities: vec![EntityId::from("Not In Graph")],
        ..ScoringConfig::default()
    };
    let report = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();
    assert!(report.features.iter().all(|f| f.cycles == 0));
}

#[test]
fn test_missing_reference_fails() {
    let (graph, embeddings) = setup();
    let config = ScoringConfig {
        primary_reference: EntityId::Int(1),
        ..ScoringConfig::default()
    };
    let err = AnomalyEngine::new(&graph, &embeddings, config)
        .run()
        .unwrap_err();
    assert!(matches!(err, ScoringError::UnreachableReference(EntityId::Int(1))));
}

#[test]
fn test_file_round_trip() {
    let mut graph_file = NamedTempFile::new().unwrap();
    graph_file.write_all(GRAPH.as_bytes()).unwrap();
    let mut embedding_file = NamedTempFile::new().unwrap();
    embedding_file.write_all(EMBEDDINGS.as_bytes()).unwrap();
    let mut config_file = NamedTempFile::new().unwrap();
    config_file
        .write_all(b"max_cycle_length: 3\ndegenerate_policy: midpoint\n")
        .unwrap();

    let (graph, _) = load_node_link(graph_file.path()).unwrap();
    let embeddings = EmbeddingMap::load(embedding_file.path()).unwrap();
    let config = ScoringConfig::load(config_file.path()).unwrap();
    assert_eq!(config.max_cycle_length, 3);
    assert_eq!(config.illegal_entities, ScoringConfig::default().illegal_entities);

    let report = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("nodes_coef.json");
    ResultExporter::default()
        .write_to_path(&out_path, &report.records)
        .unwrap();

    let text = std::fs::read_to_string(&out_path).unwrap();
    let back: Vec<ScoreRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, report.records);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["id"], 979893388);
    assert_eq!(value[1]["id"], "Oceanfront Oasis Inc Carriers");
}

#[test]
fn test_single_node_degenerate() {
    let (graph, _) = from_node_link_str(
        r#"{"nodes": [
            {"id": 979893388, "type": "vessel"},
            {"id": "Oceanfront Oasis Inc Carriers", "type": "company"}
        ], "links": []}"#,
    )
    .unwrap();
    let embeddings = EmbeddingMap::from_json_str(
        r#"{"979893388": [0.0, 0.0], "Oceanfront Oasis Inc Carriers": [0.0, 0.0]}"#,
    )
    .unwrap();

    // Two singleton components: Rv = 1 and 0, r̂ = 0.5; distances are all zero
    let report = AnomalyEngine::new(&graph, &embeddings, ScoringConfig::default())
        .run()
        .unwrap();
    assert_eq!(report.component_count, 2);
    assert_close(report.records[0].raw_score, 0.5);
    assert_close(report.records[1].raw_score, -0.5);

    let same_type = ScoringConfig::default();
    let (graph, _) = from_node_link_str(
        r#"{"nodes": [
            {"id": 979893388, "type": "company"},
            {"id": "Oceanfront Oasis Inc Carriers", "type": "company"}
        ]}"#,
    )
    .unwrap();
    let report = AnomalyEngine::new(&graph, &embeddings, same_type).run().unwrap();
    assert!(report.normalization.degenerate);
    assert!(report.records.iter().all(|r| r.norm_score == 0.0));
}

#[test]
fn test_cycle_participation_alone_sets_ranking() {
    // One seed. s -> a -> b -> s is a flagged cycle; c <-> d is a cycle
    // without the seed. Same type everywhere, one shared embedding point.
    let (graph, report) = from_node_link_str(
        r#"{
            "nodes": [
                {"id": "Seed Shipping", "type": "company"},
                {"id": "a", "type": "company"},
                {"id": "b", "type": "company"},
                {"id": "c", "type": "company"},
                {"id": "d", "type": "company"}
            ],
            "links": [
                {"source": "Seed Shipping", "target": "a", "type": "ownership"},
                {"source": "a", "target": "b", "type": "partnership"},
                {"source": "b", "target": "Seed Shipping", "type": "ownership"},
                {"source": "c", "target": "d", "type": "partnership"},
                {"source": "d", "target": "c", "type": "partnership"}
            ]
        }"#,
    )
    .unwrap();
    assert!(!report.has_repairs());

    let embeddings = EmbeddingMap::from_json_str(
        r#"{"Seed Shipping": [1.0, 1.0], "a": [1.0, 1.0], "b": [1.0, 1.0],
            "c": [1.0, 1.0], "d": [1.0, 1.0]}"#,
    )
    .unwrap();

    let seed = EntityId::from("Seed Shipping");
    let config = ScoringConfig {
        illegal_entities: vec![seed.clone()],
        primary_reference: seed.clone(),
        secondary_reference: seed,
        ..ScoringConfig::default()
    };
    let report = AnomalyEngine::new(&graph, &embeddings, config).run().unwrap();

    assert_eq!(report.mean_vessel_ratio, 0.0);
    for features in &report.features {
        assert_eq!(features.vessel_ratio, 0.0);
        assert_eq!(features.family_edges, 0);
        assert_eq!(features.political_orgs, 0);
        assert_eq!(features.dist_primary, 0.0);
        assert_eq!(features.dist_secondary, 0.0);
    }

    let raw: Vec<f64> = report.records.iter().map(|r| r.raw_score).collect();
    assert_eq!(raw, vec![1.0, 1.0, 1.0, 0.0, 0.0]);
    let norm: Vec<f64> = report.records.iter().map(|r| r.norm_score).collect();
    assert_eq!(norm, vec![100.0, 100.0, 100.0, 0.0, 0.0]);

    let ranked: Vec<&EntityId> = report.top(3).iter().map(|r| &r.id).collect();
    assert_eq!(
        ranked,
        vec![
            &EntityId::from("Seed Shipping"),
            &EntityId::from("a"),
            &EntityId::from("b"),
        ]
    );
}

#[test]
fn test_extreme_coordinates_abort_before_export() {
    let (graph, _) = from_node_link_str(GRAPH).unwrap();
    let embeddings = EmbeddingMap::from_json_str(
        r#"{
            "979893388": [0.0, 0.0],
            "Oceanfront Oasis Inc Carriers": [3.0, 4.0],
            "101": [0.0, 4.0],
            "202": [1e200, 1e200],
            "Harbor Party": [3.0, 0.0]
        }"#,
    )
    .unwrap();

    let err = AnomalyEngine::new(&graph, &embeddings, ScoringConfig::default())
        .run()
        .unwrap_err();
    assert!(matches!(err, ScoringError::NonFiniteScore(EntityId::Int(202))));
}
