//! Tests for leaf aggregation over connection catalogs

use rstest::{fixture, rstest};

use cozydash::domain::{count, count_leaves, count_matching, count_protocol, ConnectionStats, Node};

#[fixture]
fn catalog() -> Vec<Node> {
    vec![
        Node::folder(
            "datacenter",
            vec![
                Node::leaf("dc-01", "rdp"),
                Node::folder(
                    "linux",
                    vec![
                        Node::leaf("web-01", "ssh"),
                        Node::leaf("web-02", "ssh"),
                        Node::folder("empty", vec![]),
                    ],
                ),
            ],
        ),
        Node::leaf("kiosk", "vnc"),
        Node::leaf("legacy", "telnet"),
    ]
}

// ============================================================
// Totals and protocol filters
// ============================================================

#[rstest]
#[case::rdp("rdp", 1)]
#[case::ssh("ssh", 2)]
#[case::vnc("vnc", 1)]
#[case::unknown("telnet", 1)]
#[case::case_sensitive("SSH", 0)]
#[case::no_match("spice", 0)]
fn given_catalog_when_counting_protocol_then_matches_exactly(
    catalog: Vec<Node>,
    #[case] protocol: &str,
    #[case] expected: usize,
) {
    assert_eq!(count_protocol(&catalog, protocol), expected);
}

#[rstest]
fn given_catalog_when_counting_without_predicate_then_counts_all_leaves(catalog: Vec<Node>) {
    assert_eq!(count(Some(catalog.as_slice()), None), 5);
    assert_eq!(count_leaves(&catalog), 5);
}

#[rstest]
fn given_catalog_when_building_stats_then_matches_individual_counts(catalog: Vec<Node>) {
    let stats = ConnectionStats::from_forest(&catalog);

    assert_eq!(stats.total, count_leaves(&catalog));
    assert_eq!(stats.rdp, 1);
    assert_eq!(stats.ssh, 2);
    assert_eq!(stats.vnc, 1);
}

// ============================================================
// Degenerate input
// ============================================================

#[test]
fn given_absent_catalog_when_counting_then_zero() {
    let ssh: &dyn Fn(&Node) -> bool = &|node| node.has_protocol("ssh");
    assert_eq!(count(None, None), 0);
    assert_eq!(count(None, Some(ssh)), 0);
}

#[test]
fn given_only_empty_folders_when_counting_then_zero() {
    let catalog = vec![
        Node::folder("a", vec![]),
        Node::folder("b", vec![Node::folder("c", vec![])]),
    ];
    assert_eq!(count_leaves(&catalog), 0);
    assert_eq!(ConnectionStats::from_forest(&catalog), ConnectionStats::default());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
#[case(500)]
fn given_single_leaf_at_any_depth_when_counting_then_one(#[case] depth: usize) {
    let mut node = Node::leaf("deep", "rdp");
    for level in 0..depth {
        node = Node::folder(format!("level-{}", level), vec![node]);
    }
    let catalog = vec![node];

    assert_eq!(count_leaves(&catalog), 1);
    assert_eq!(count_protocol(&catalog, "rdp"), 1);
}

// ============================================================
// Predicate semantics
// ============================================================

#[rstest]
fn given_predicate_when_counting_then_only_leaves_are_tested(catalog: Vec<Node>) {
    let seen = std::cell::RefCell::new(Vec::new());

    count_matching(&catalog, |node| {
        seen.borrow_mut().push(node.is_folder);
        true
    });

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 5);
    assert!(seen.iter().all(|is_folder| !is_folder));
}

#[test]
fn given_leaf_without_protocol_when_filtering_by_protocol_then_not_counted() {
    let catalog = vec![Node {
        name: Some("odd".to_string()),
        is_folder: false,
        protocol: None,
        children: vec![],
    }];
    assert_eq!(count_leaves(&catalog), 1);
    assert_eq!(count_protocol(&catalog, "ssh"), 0);
}

#[test]
fn given_exported_leaf_without_protocol_when_counting_then_total_only() {
    let catalog: Vec<Node> =
        serde_json::from_str(r#"[{"isFolder": false}]"#).expect("parse catalog");

    assert_eq!(count_leaves(&catalog), 1);
    assert_eq!(count_protocol(&catalog, "ssh"), 0);
    assert_eq!(ConnectionStats::from_forest(&catalog).total, 1);
}
