use std::fs;
use std::path::PathBuf;

use ambiclass::core::Result;
use ambiclass::evaluation::{evaluate_against_gold, EvaluationReport};
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_fixture(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_evaluation(gold: &str, ambiguous: &str, proper: &str) -> Result<EvaluationReport> {
    let temp = TempDir::new().unwrap();
    let gold_path = write_fixture(&temp, "gold.tsv", gold);
    let ambiguous_path = write_fixture(&temp, "ambiguous.txt", ambiguous);
    let proper_path = write_fixture(&temp, "proper.txt", proper);
    evaluate_against_gold(&gold_path, &ambiguous_path, &proper_path)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_perfect_predictions() {
    let gold = indoc! {"
        Word\tTruth
        bank\tCommon
        Paris\tProper
    "};
    let report = run_evaluation(gold, "bank\n", "Paris\n").unwrap();

    assert_eq!(report.total_words, 2);
    assert_eq!(report.total_common, 1);
    assert_eq!(report.total_proper, 1);
    assert_eq!(report.predicted_common, 1);
    assert_eq!(report.predicted_proper, 1);
    assert_eq!(report.true_positive, 1);
    assert_eq!(report.true_negative, 1);
    assert_eq!(report.false_positive, 0);
    assert_eq!(report.false_negative, 0);
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.precision, Some(1.0));
    assert_eq!(report.recall, Some(1.0));
    assert_eq!(report.f1, Some(1.0));
    assert!(report.missing_words.is_empty());
    assert!(report.false_positive_words.is_empty());
    assert!(report.false_negative_words.is_empty());
    assert!(report.extra_common_predictions.is_empty());
    assert!(report.extra_proper_predictions.is_empty());
}

#[test]
fn test_missing_gold_words_count_as_false_negatives() {
    let gold = "Word\tTruth\nbank\tCommon\n";
    let report = run_evaluation(gold, "", "").unwrap();

    assert_eq!(report.total_words, 1);
    assert_eq!(report.predicted_common, 0);
    assert_eq!(report.predicted_proper, 0);
    assert_eq!(report.true_positive, 0);
    assert_eq!(report.false_negative, 1);
    assert_eq!(report.accuracy, 0.0);
    // Nothing was predicted common, so precision is undefined
    assert_eq!(report.precision, None);
    assert_eq!(report.recall, Some(0.0));
    assert_eq!(report.f1, None);
    assert_eq!(report.missing_words, words(&["bank"]));
    assert_eq!(report.false_negative_words, words(&["bank"]));
}

#[test]
fn test_inverted_predictions_leave_f1_undefined() {
    let gold = indoc! {"
        Word\tTruth
        bank\tCommon
        Paris\tProper
    "};
    let report = run_evaluation(gold, "Paris\n", "bank\n").unwrap();

    assert_eq!(report.true_positive, 0);
    assert_eq!(report.true_negative, 0);
    assert_eq!(report.false_positive, 1);
    assert_eq!(report.false_negative, 1);
    assert_eq!(report.accuracy, 0.0);
    assert_eq!(report.precision, Some(0.0));
    assert_eq!(report.recall, Some(0.0));
    // Precision and recall are both zero, so F1 has no value
    assert_eq!(report.f1, None);
    assert_eq!(report.false_positive_words, words(&["Paris"]));
    assert_eq!(report.false_negative_words, words(&["bank"]));
}

#[test]
fn test_extra_predictions_are_set_aside() {
    let gold = "Word\tTruth\nbank\tCommon\n";
    let report = run_evaluation(gold, "bank\nstray\n", "Wanderer\n").unwrap();

    // Extras never enter the confusion matrix
    assert_eq!(report.predicted_common, 1);
    assert_eq!(report.predicted_proper, 0);
    assert_eq!(report.true_positive, 1);
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.f1, Some(1.0));
    assert_eq!(report.extra_common_predictions, words(&["stray"]));
    assert_eq!(report.extra_proper_predictions, words(&["Wanderer"]));
}

#[test]
fn test_word_in_both_files_outside_gold_is_not_fatal() {
    let gold = "Word\tTruth\nbank\tCommon\n";
    let report = run_evaluation(gold, "bank\nstray\n", "stray\n").unwrap();

    // "stray" is unknown to the gold standard, so the contradiction is
    // recorded on both extras lists instead of failing the run
    assert_eq!(report.extra_common_predictions, words(&["stray"]));
    assert_eq!(report.extra_proper_predictions, words(&["stray"]));
}

#[test]
fn test_overlapping_gold_words_are_fatal() {
    let gold = indoc! {"
        Word\tTruth
        bank\tCommon
        bat\tCommon
    "};
    let error = run_evaluation(gold, "bank\nbat\n", "bat\n").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Found 1 words present in both prediction files; examples: bat"
    );
}

#[test]
fn test_overlap_preview_shows_first_five_sorted() {
    let names = [
        "apricot", "banana", "cherry", "damson", "elder", "fig", "grape",
    ];
    let mut gold = String::from("Word\tTruth\n");
    for name in names {
        gold.push_str(&format!("{}\tCommon\n", name));
    }
    let predictions = names.join("\n");

    let error = run_evaluation(&gold, &predictions, &predictions).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Found 7 words present in both prediction files; examples: \
         apricot, banana, cherry, damson, elder"
    );
}

#[test]
fn test_conflicting_gold_labels_are_fatal() {
    let gold = indoc! {"
        Word\tTruth
        bank\tCommon
        bank\tProper
    "};
    let error = run_evaluation(gold, "", "").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Conflicting labels detected for word 'bank': 'common' vs 'proper'"
    );
}

#[test]
fn test_agreeing_duplicates_and_spellings_normalize() {
    let gold = indoc! {"
        Word\tTruth
        bank\tCommon
        bank\tambiguous noun
        Paris\tPROPER NOUN
    "};
    let report = run_evaluation(gold, "bank\n", "Paris\n").unwrap();

    assert_eq!(report.total_words, 2);
    assert_eq!(report.total_common, 1);
    assert_eq!(report.total_proper, 1);
    assert_eq!(report.accuracy, 1.0);
}

#[test]
fn test_header_column_order_is_free_and_extras_ignored() {
    let gold = indoc! {"
        Truth\tNotes\tWord
        Common\tfrom batch 3\tbank
        Proper\t\tParis
    "};
    let report = run_evaluation(gold, "bank\n", "Paris\n").unwrap();

    assert_eq!(report.total_words, 2);
    assert_eq!(report.accuracy, 1.0);
}

#[test]
fn test_missing_required_columns_is_fatal() {
    let error = run_evaluation("Word\tLabel\nbank\tCommon\n", "", "").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("must contain 'Word' and 'Truth' columns"));
    assert!(message.contains("gold.tsv"));
}

#[test]
fn test_empty_gold_file_is_fatal() {
    let error = run_evaluation("", "", "").unwrap_err();
    assert!(error
        .to_string()
        .contains("must contain 'Word' and 'Truth' columns"));
}

#[test]
fn test_header_only_gold_yields_an_empty_report() {
    let report = run_evaluation("Word\tTruth\n", "", "").unwrap();

    assert_eq!(report.total_words, 0);
    assert_eq!(report.accuracy, 0.0);
    assert_eq!(report.precision, None);
    assert_eq!(report.recall, None);
    assert_eq!(report.f1, None);
    assert!(report.missing_words.is_empty());
}

#[test]
fn test_unrecognized_label_is_fatal() {
    let error = run_evaluation("Word\tTruth\nbank\tnoun\n", "", "").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Unrecognized label 'noun', expected 'Common' or 'Proper'"
    );
}

#[test]
fn test_empty_truth_cell_is_fatal() {
    let error = run_evaluation("Word\tTruth\nbank\t\n", "", "").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Unrecognized label '', expected 'Common' or 'Proper'"
    );
}

#[test]
fn test_rows_without_a_word_are_skipped() {
    let gold = indoc! {"
        Word\tTruth
        \tCommon
        bank\tCommon

           \tProper
    "};
    let report = run_evaluation(gold, "bank\n", "").unwrap();

    assert_eq!(report.total_words, 1);
    assert_eq!(report.accuracy, 1.0);
}

#[test]
fn test_crlf_line_endings_parse() {
    let gold = "Word\tTruth\r\nbank\tCommon\r\nParis\tProper\r\n";
    let report = run_evaluation(gold, "bank\r\n", "Paris\r\n").unwrap();

    assert_eq!(report.total_words, 2);
    assert_eq!(report.accuracy, 1.0);
}

#[test]
fn test_mismatch_lists_sort_case_insensitively() {
    let gold = indoc! {"
        Word\tTruth
        banana\tCommon
        Apple\tCommon
        apple\tCommon
        Cherry\tCommon
    "};
    let report = run_evaluation(gold, "", "").unwrap();

    assert_eq!(
        report.missing_words,
        words(&["Apple", "apple", "banana", "Cherry"])
    );
    assert_eq!(
        report.false_negative_words,
        words(&["Apple", "apple", "banana", "Cherry"])
    );
}

#[test]
fn test_confusion_matrix_accounts_for_every_gold_word() {
    let gold = indoc! {"
        Word\tTruth
        alpha\tCommon
        bravo\tCommon
        Charlie\tProper
        Delta\tProper
    "};
    let report = run_evaluation(gold, "alpha\n", "Charlie\n").unwrap();

    assert_eq!(report.true_positive, 1);
    assert_eq!(report.false_negative, 1);
    assert_eq!(report.true_negative, 1);
    assert_eq!(report.false_positive, 0);
    assert_eq!(report.missing_words, words(&["bravo", "Delta"]));
    assert_eq!(report.accuracy, 0.5);

    // Recall covers every gold-common word because missing common words
    // fall through to false negatives; the matrix only misses gold-proper
    // words absent from both files.
    assert_eq!(report.true_positive + report.false_negative, report.total_common);
    let matrix_total = report.true_positive
        + report.true_negative
        + report.false_positive
        + report.false_negative;
    assert_eq!(matrix_total, 3);
    assert_eq!(report.total_words - matrix_total, 1);
}
