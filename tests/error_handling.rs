use sealscan::{
    AnalysisConfig, AnalysisError, CanonicalError, CanonicalizeConfig, ConfigLoadError,
    DocumentAnalyzer, MatchConfig, MatchError, PageText, ScoringConfig, SealscanConfig,
    split_pages,
};

#[test]
fn malformed_pattern_fails_at_construction() {
    let cfg = AnalysisConfig {
        matcher: MatchConfig {
            keywords: vec!["Sealed by".into()],
            patterns: vec![r"\b(sealed|stamped\s+by".into()],
        },
        ..AnalysisConfig::default()
    };

    let result = DocumentAnalyzer::new(&cfg);
    match result {
        Err(AnalysisError::Match(MatchError::InvalidPattern { pattern, .. })) => {
            assert_eq!(pattern, r"\b(sealed|stamped\s+by");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn canonical_version_zero_is_rejected() {
    let cfg = AnalysisConfig {
        canonical: CanonicalizeConfig {
            version: 0,
            ..CanonicalizeConfig::default()
        },
        ..AnalysisConfig::default()
    };

    assert!(matches!(
        DocumentAnalyzer::new(&cfg),
        Err(AnalysisError::Canonical(CanonicalError::InvalidConfig(_)))
    ));
}

#[test]
fn zero_proximity_window_is_rejected() {
    let cfg = AnalysisConfig {
        scoring: ScoringConfig {
            proximity_window: 0,
            ..ScoringConfig::default()
        },
        ..AnalysisConfig::default()
    };

    let err = DocumentAnalyzer::new(&cfg).expect_err("config should be invalid");
    assert!(err.to_string().contains("proximity_window"));
}

#[test]
fn duplicate_keywords_are_rejected() {
    let cfg = AnalysisConfig {
        matcher: MatchConfig {
            keywords: vec!["PE seal".into(), "PE seal".into()],
            patterns: vec![],
        },
        ..AnalysisConfig::default()
    };

    assert!(matches!(
        DocumentAnalyzer::new(&cfg),
        Err(AnalysisError::Match(MatchError::InvalidConfig(_)))
    ));
}

#[test]
fn yaml_with_bad_pattern_is_a_validation_error() {
    let yaml = r#"
version: "1.0"
matcher:
  keywords: ["Sealed by"]
  patterns: ['[unterminated']
"#;

    assert!(matches!(
        SealscanConfig::from_yaml(yaml),
        Err(ConfigLoadError::Validation(_))
    ));
}

#[test]
fn unusual_page_text_never_fails() {
    let analyzer = DocumentAnalyzer::with_defaults().expect("default analyzer");
    let long_line = "x".repeat(10_000);
    let awkward = [
        "",
        "   \n\t\r\n  ",
        "\u{0000}\u{FEFF}\u{200B}",
        "1.05\n1.\na.\nA.\n)\n-\n.",
        "\u{e9}\u{e9}\u{e9} sealed by \u{1F600}\u{1F600} engineer of record \u{2014}",
        long_line.as_str(),
        "a.\nb.\nc.\n99.99.99.99 sealed by",
    ];

    for (i, text) in awkward.iter().enumerate() {
        let page = PageText::new(i as u32 + 1, *text);
        let analysis = analyzer.analyze_page(&page, None);
        for record in &analysis.records {
            assert!((0.0..=1.0).contains(&record.confidence));
            assert!(!record.snippet.is_empty());
        }
    }
}

#[test]
fn form_feed_only_input_is_a_single_blank_page() {
    let analyzer = DocumentAnalyzer::with_defaults().expect("default analyzer");
    let report = analyzer.analyze_document(&split_pages("\x0c"));
    assert_eq!(report.num_pages, 1);
    assert_eq!(report.total_matches(), 0);
}

#[test]
fn out_of_order_pages_are_still_processed() {
    let analyzer = DocumentAnalyzer::with_defaults().expect("default analyzer");
    let pages = vec![
        PageText::new(3, "1.05 SUBMITTALS\nSealed by the engineer."),
        PageText::new(2, "Stamped by the engineer."),
    ];
    let report = analyzer.analyze_document(&pages);

    let pages_seen: Vec<u32> = report.records.iter().map(|r| r.page).collect();
    assert!(pages_seen.contains(&3));
    assert!(pages_seen.contains(&2));
    // State still threads in the order given.
    let stamped = report
        .records
        .iter()
        .find(|r| r.keyword == "Stamped by")
        .expect("stamped record");
    assert_eq!(stamped.section_code.as_deref(), Some("1.05"));
}
