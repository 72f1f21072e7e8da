use std::collections::HashSet;

use greeninvest_core::sentiment::{
    EsgAnalyzer, KeywordScorer, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, SentimentScorer,
    VaderLexicon, keyword_ratio,
};
use greeninvest_core::{ScoringMethod, SentimentResult};
use proptest::prelude::*;

fn lexicon_analyzer() -> EsgAnalyzer {
    EsgAnalyzer::with_lexicon(VaderLexicon::from_entries([
        ("sustainable", 2.1),
        ("improvement", 1.8),
        ("violation", -2.2),
        ("scandal", -2.9),
        ("good", 1.9),
    ]))
}

fn arb_whitespace() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..20)
        .prop_map(|v| v.into_iter().collect())
}

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(POSITIVE_KEYWORDS).prop_map(str::to_string),
        proptest::sample::select(NEGATIVE_KEYWORDS).prop_map(str::to_string),
        "[a-z]{1,10}",
    ]
}

fn reference_ratio(words: &[String]) -> f64 {
    let set: HashSet<&str> = words.iter().map(String::as_str).collect();
    let pos = POSITIVE_KEYWORDS.iter().filter(|k| set.contains(*k)).count();
    let neg = NEGATIVE_KEYWORDS.iter().filter(|k| set.contains(*k)).count();
    if pos + neg == 0 {
        0.5
    } else {
        pos as f64 / (pos + neg) as f64
    }
}

proptest! {
    #[test]
    fn blank_text_is_always_neutral(ws in arb_whitespace()) {
        for analyzer in [lexicon_analyzer(), EsgAnalyzer::keyword_fallback()] {
            let r = analyzer.analyze(&ws);
            prop_assert_eq!(r, SentimentResult::neutral());
            prop_assert!((r.score - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn keyword_ratio_matches_set_overlap(words in proptest::collection::vec(arb_word(), 0..40)) {
        let text = words.join(" ");
        let expected = reference_ratio(&words);
        prop_assert!((keyword_ratio(&text) - expected).abs() < 1e-12);
    }

    #[test]
    fn fallback_breakdown_is_consistent(words in proptest::collection::vec(arb_word(), 1..40)) {
        let r = KeywordScorer.score(&words.join(" "));
        prop_assert!((0.0..=1.0).contains(&r.score));
        prop_assert!((r.breakdown.compound - (2.0 * r.score - 1.0)).abs() < 1e-12);
        prop_assert!((r.breakdown.pos + r.breakdown.neg - 1.0).abs() < 1e-12);
        prop_assert_eq!(r.method, ScoringMethod::KeywordFallback);
    }

    #[test]
    fn lexicon_scores_stay_in_range(words in proptest::collection::vec(arb_word(), 1..40), bangs in 0usize..6) {
        let text = format!("{}{}", words.join(" "), "!".repeat(bangs));
        let r = lexicon_analyzer().analyze(&text);
        prop_assert!((0.0..=1.0).contains(&r.score));
        prop_assert!((-1.0..=1.0).contains(&r.breakdown.compound));
        let total = r.breakdown.pos + r.breakdown.neu + r.breakdown.neg;
        prop_assert!(total == 0.0 || (total - 1.0).abs() < 0.01);
    }
}

#[test]
fn no_keyword_overlap_returns_half() {
    assert!((keyword_ratio("the quarterly filing was submitted") - 0.5).abs() < f64::EPSILON);
    assert!((keyword_ratio("") - 0.5).abs() < f64::EPSILON);
}

#[test]
fn keyword_ratio_counts_distinct_matches() {
    // positives: sustainable, green; negatives: risk
    let r = keyword_ratio("Sustainable and green operations, with some risk. Green!");
    assert!((r - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn missing_lexicon_selects_keyword_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = EsgAnalyzer::from_lexicon_path(&dir.path().join("absent.txt"));
    assert_eq!(analyzer.method(), ScoringMethod::KeywordFallback);
    let r = analyzer.analyze("An excellent and ethical year");
    assert!((r.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(r.method, ScoringMethod::KeywordFallback);
}

#[test]
fn malformed_lexicon_selects_keyword_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vader_lexicon.txt");
    std::fs::write(&path, "good\tnot-a-number\n").unwrap();
    let analyzer = EsgAnalyzer::from_lexicon_path(&path);
    assert_eq!(analyzer.method(), ScoringMethod::KeywordFallback);
}

#[test]
fn lexicon_file_is_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vader_lexicon.txt");
    std::fs::write(
        &path,
        "sustainable\t2.1\t0.7\t[2, 2, 3]\nscandal\t-2.9\t0.8\t[-3, -3, -2]\n",
    )
    .unwrap();
    let analyzer = EsgAnalyzer::from_lexicon_path(&path);
    assert_eq!(analyzer.method(), ScoringMethod::Lexicon);

    let positive = analyzer.analyze("A sustainable supply chain");
    assert!(positive.score > 0.5);
    assert_eq!(positive.method, ScoringMethod::Lexicon);
    let negative = analyzer.analyze("Another scandal this quarter");
    assert!(negative.score < 0.5);
}

#[test]
fn lexicon_score_maps_compound_to_unit_interval() {
    let r = lexicon_analyzer().analyze("a good and sustainable improvement");
    assert!((r.score - (r.breakdown.compound + 1.0) / 2.0).abs() < 1e-12);
}

#[test]
fn empty_text_reports_neutral_breakdown() {
    let r = lexicon_analyzer().analyze("");
    assert_eq!(r.method, ScoringMethod::NeutralDefault);
    assert!((r.breakdown.compound - 0.5).abs() < f64::EPSILON);
    assert!((r.breakdown.neu - 1.0).abs() < f64::EPSILON);
    assert_eq!((r.breakdown.pos, r.breakdown.neg), (0.0, 0.0));
}
