use brickset_core::{InMemoryLegoSetRepository, LegoSet, SetQueryService};

fn service(sets: Vec<LegoSet>) -> SetQueryService<InMemoryLegoSetRepository> {
    SetQueryService::new(InMemoryLegoSetRepository::new(sets))
}

fn mixed_catalogue() -> Vec<LegoSet> {
    vec![
        LegoSet::new(7541)
            .with_theme("Star Wars")
            .with_tags(["Adventure", "Alpine"]),
        LegoSet::new(250),
        LegoSet::new(1000).with_theme("City").with_tags(["Arctic"]),
        LegoSet::new(1001).with_theme("Star Wars"),
        LegoSet::new(0).with_tags(Vec::<String>::new()),
    ]
}

#[test]
fn has_tag_anywhere_matches_exact_tag_only() {
    let service = service(vec![
        LegoSet::new(10),
        LegoSet::new(20).with_tags(["Micro", "Microscale"]),
    ]);

    assert!(service.has_tag_anywhere("Microscale"));
    assert!(!service.has_tag_anywhere("microscale"));
    assert!(!service.has_tag_anywhere("Microscal"));
}

#[test]
fn has_tag_anywhere_is_false_when_all_tags_are_absent() {
    let service = service(vec![LegoSet::new(10), LegoSet::new(20)]);
    assert!(!service.has_tag_anywhere("Microscale"));
}

#[test]
fn count_tags_with_prefix_counts_every_occurrence() {
    let service = service(vec![
        LegoSet::new(1).with_tags(["Adventure", "Alpine"]),
        LegoSet::new(2),
        LegoSet::new(3).with_tags(["Arctic"]),
    ]);
    assert_eq!(service.count_tags_with_prefix("A"), 3);
    assert_eq!(service.count_tags_with_prefix("Al"), 1);
    assert_eq!(service.count_tags_with_prefix(""), 3);
}

#[test]
fn count_tags_with_prefix_is_case_sensitive_and_counts_duplicates() {
    let lower = service(vec![LegoSet::new(1).with_tags(["apple"])]);
    assert_eq!(lower.count_tags_with_prefix("A"), 0);

    let repeated = service(vec![LegoSet::new(1).with_tags(["Arctic", "Arctic"])]);
    assert_eq!(repeated.count_tags_with_prefix("Arc"), 2);
}

#[test]
fn count_tags_with_prefix_is_zero_without_tags() {
    assert_eq!(service(vec![LegoSet::new(1)]).count_tags_with_prefix("A"), 0);
    assert_eq!(service(Vec::new()).count_tags_with_prefix(""), 0);
}

#[test]
fn max_pieces_uses_zero_floor() {
    assert_eq!(service(Vec::new()).max_pieces(), 0);
    assert_eq!(service(vec![LegoSet::new(250)]).max_pieces(), 250);
    assert_eq!(service(mixed_catalogue()).max_pieces(), 7541);
}

#[test]
fn partition_always_has_both_keys() {
    let empty = service(Vec::new()).partition_by_piece_threshold(1000);
    assert_eq!(empty.len(), 2);
    assert_eq!(empty[&true], 0);
    assert_eq!(empty[&false], 0);

    let all_small = service(vec![LegoSet::new(5)]).partition_by_default_threshold();
    assert_eq!(all_small[&true], 0);
    assert_eq!(all_small[&false], 1);
}

#[test]
fn partition_counts_sum_to_record_count_for_any_threshold() {
    let service = service(mixed_catalogue());
    for threshold in [0, 1, 249, 250, 999, 1000, 1001, 7541, u32::MAX] {
        let buckets = service.partition_by_piece_threshold(threshold);
        assert_eq!(
            buckets[&true] + buckets[&false],
            service.record_count() as u64,
            "threshold {threshold}"
        );
    }

    let buckets = service.partition_by_default_threshold();
    assert_eq!(buckets[&true], 2);
    assert_eq!(buckets[&false], 3);
}

#[test]
fn count_by_theme_skips_sets_without_theme() {
    let service = service(mixed_catalogue());
    let counts = service.count_by_theme();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts["Star Wars"], 2);
    assert_eq!(counts["City"], 1);
    assert!(!counts.contains_key(""));

    let themed = mixed_catalogue()
        .iter()
        .filter(|set| set.theme.is_some())
        .count() as u64;
    assert_eq!(counts.values().sum::<u64>(), themed);
}

#[test]
fn count_by_theme_is_empty_when_no_theme_is_set() {
    let service = service(vec![LegoSet::new(1), LegoSet::new(2)]);
    assert!(service.count_by_theme().is_empty());
}

#[test]
fn count_by_theme_groups_by_exact_string() {
    let service = service(vec![
        LegoSet::new(1).with_theme("City"),
        LegoSet::new(2).with_theme("city"),
        LegoSet::new(3).with_theme("City"),
    ]);
    let counts = service.count_by_theme();
    assert_eq!(counts["City"], 2);
    assert_eq!(counts["city"], 1);
}

#[test]
fn repeated_queries_return_identical_results() {
    let service = service(mixed_catalogue());

    assert_eq!(
        service.has_tag_anywhere("Arctic"),
        service.has_tag_anywhere("Arctic")
    );
    assert_eq!(
        service.count_tags_with_prefix("A"),
        service.count_tags_with_prefix("A")
    );
    assert_eq!(service.max_pieces(), service.max_pieces());
    assert_eq!(
        service.partition_by_piece_threshold(500),
        service.partition_by_piece_threshold(500)
    );
    assert_eq!(service.count_by_theme(), service.count_by_theme());
}

#[test]
fn service_accepts_borrowed_repository() {
    let repo = InMemoryLegoSetRepository::new(mixed_catalogue());
    let first = SetQueryService::new(&repo);
    let second = SetQueryService::new(&repo);
    assert_eq!(first.count_by_theme(), second.count_by_theme());
}
