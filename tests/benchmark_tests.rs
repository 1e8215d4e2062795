use bibsort::core::NamedKey;
use bibsort::prelude::*;
use bibsort::record::article_key;
use chrono::NaiveDate;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bibsort=debug")
        .with_test_writer()
        .try_init();
}

fn articles() -> Vec<Article> {
    let entries = [
        (17, "Usability heuristics", "Nielsen, J.", 1994, "ACM"),
        (3, "Human Computer Interaction", "Dix, A.", 2004, "Scopus"),
        (8, "Deep learning for HCI", "Li, T.", 2021, "ScienceDirect"),
        (5, "Card sorting revisited", "Spencer, D.", 2009, "SAGE"),
        (12, "Eye tracking in UX", "Duchowski, A.", 2017, "Scopus"),
    ];
    entries
        .iter()
        .map(|&(id, title, authors, year, source)| Article {
            id,
            title: title.to_string(),
            authors: authors.to_string(),
            publication_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            source: source.to_string(),
            link: format!("https://doi.org/10.1000/{id}"),
        })
        .collect()
}

#[test]
fn test_full_sweep_records_every_pair() {
    init_tracing();
    let keys = article_keys();
    let harness = BenchmarkHarness::new(SortConfig::benchmark()).unwrap();
    let report = harness.run(&articles(), &keys);

    assert_eq!(report.len(), keys.len() * Algorithm::ALL.len());

    // Every comparison sort completes on every key.
    for key in &keys {
        for algorithm in Algorithm::ALL {
            let completed = report
                .timings_for(key.name())
                .iter()
                .any(|(a, _)| *a == algorithm);
            if algorithm.family() == Family::Comparison {
                assert!(completed, "{algorithm} on {}", key.name());
            }
        }
    }
}

#[test]
fn test_failures_are_isolated_per_run() {
    init_tracing();
    let keys = article_keys();
    let harness = BenchmarkHarness::new(SortConfig::benchmark()).unwrap();
    let report = harness.run(&articles(), &keys);

    // Text keys cannot feed the distribution family; the sweep still runs the rest.
    for text_key in ["title", "source", "authors", "link"] {
        let failures = report.failures_for(text_key);
        let failed: Vec<Algorithm> = failures.iter().map(|(a, _)| *a).collect();
        assert_eq!(
            failed,
            vec![
                Algorithm::PigeonholeSort,
                Algorithm::BucketSort,
                Algorithm::RadixSort
            ],
            "{text_key}"
        );
        assert!(failures.iter().all(|(_, reason)| reason.contains("text key")));
        assert_eq!(report.timings_for(text_key).len(), Algorithm::ALL.len() - 3);
    }

    // Integer and date keys work for all of them.
    for numeric_key in ["id", "publication_date"] {
        assert!(report.failures_for(numeric_key).is_empty(), "{numeric_key}");
        assert_eq!(report.timings_for(numeric_key).len(), Algorithm::ALL.len());
        assert!(report.fastest_for(numeric_key).is_some());
    }
}

#[test]
fn test_harness_leaves_input_untouched() {
    let input = articles();
    let keys = vec![article_key("id").unwrap()];
    let harness = BenchmarkHarness::default().with_algorithms([Algorithm::BubbleSort]);
    let report = harness.run(&input, &keys);

    assert_eq!(input, articles());
    assert_eq!(report.rows()[0].algorithm, Algorithm::BubbleSort);
    assert_eq!(harness.algorithms(), &[Algorithm::BubbleSort]);
}

#[test]
fn test_default_harness_times_every_kernel() {
    let harness = BenchmarkHarness::default();
    assert!(!harness.config().presorted_fast_path);
    assert_eq!(harness.config(), &SortConfig::benchmark());
    assert_eq!(harness.algorithms(), &Algorithm::ALL);

    let custom = BenchmarkHarness::new(SortConfig::default()).unwrap();
    assert!(custom.config().presorted_fast_path);
}

#[test]
fn test_failures_outlive_key_argument() {
    let keys = vec![article_key("source").unwrap()];
    let harness = BenchmarkHarness::default().with_algorithms([Algorithm::RadixSort]);
    let report = harness.run(&articles(), &keys);

    let failures = {
        let key = String::from("source");
        report.failures_for(&key)
    };
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, Algorithm::RadixSort);
}

#[test]
fn test_harness_search_term_and_custom_keys() {
    let keys = vec![NamedKey::new("title_len", |a: &Article| a.title.len() as i64)];
    let harness = BenchmarkHarness::new(SortConfig::benchmark())
        .unwrap()
        .with_algorithms([Algorithm::RadixSort, Algorithm::TreeSort])
        .with_search_term("2");
    let report = harness.run(&articles(), &keys);

    assert_eq!(report.len(), 2);
    assert!(report.failures_for("title_len").is_empty());
    assert!(report.timings_for("missing").is_empty());
}

#[test]
fn test_invalid_harness_config() {
    let err = BenchmarkHarness::new(SortConfig::default().with_min_run(0)).unwrap_err();
    assert!(matches!(err, SortError::InvalidConfig { field: "min_run", .. }));
}

#[test]
fn test_report_serializes_and_renders() {
    let keys = vec![article_key("title").unwrap()];
    let harness = BenchmarkHarness::default()
        .with_algorithms([Algorithm::TimSort, Algorithm::RadixSort]);
    let report = harness.run(&articles(), &keys);

    let json = serde_json::to_value(&report).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["algorithm"], "TimSort");
    assert_eq!(rows[0]["key"], "title");
    assert_eq!(rows[0]["outcome"]["status"], "completed");
    assert!(rows[0]["outcome"]["elapsed_ms"].is_number());
    assert_eq!(rows[1]["outcome"]["status"], "failed");

    let table = report.to_string();
    assert!(table.starts_with("key"));
    assert!(table.contains("TimSort"));
    assert!(table.contains("Radix Sort"));
    assert!(table.contains("failed: record 0 has a text key"));
}

#[test]
fn test_article_keys_catalogue() {
    let names: Vec<String> = article_keys()
        .iter()
        .map(|k| k.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["title", "publication_date", "source", "authors", "id", "link"]
    );
    assert!(article_key("doi").is_none());
}

#[test]
fn test_article_roundtrip_json() {
    let json = r#"{
        "id": 9,
        "title": "Bibliometric mapping",
        "authors": "van Eck, N.",
        "publication_date": "2010-08-01",
        "source": "Scopus",
        "link": "https://doi.org/10.1007/s11192-009-0146-3"
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.publication_date, NaiveDate::from_ymd_opt(2010, 8, 1).unwrap());

    let sorted = Algorithm::PigeonholeSort
        .sort(vec![article.clone()], &article_key("publication_date").unwrap(), None)
        .unwrap();
    assert_eq!(sorted, vec![article]);
}
