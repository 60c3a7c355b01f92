// tests/integration_tests/edge_cases_test.rs
use super::common::pairs;
use wfc::{AccentFolder, CaseMode, Pipeline, SortOrder, count_words, order_words, process};

#[test]
fn test_whitespace_only_input() {
    assert!(process(" \t\n\r\n ").is_empty());
}

#[test]
fn test_punctuation_stays_part_of_word() {
    let entries = process("teste teste. teste, Teste.");
    assert_eq!(pairs(&entries), [("teste", 1), ("teste,", 1), ("teste.", 2)]);
}

#[test]
fn test_words_differing_only_by_accent_are_distinct() {
    let table = count_words("cafe café CAFÉ Cafe");
    assert_eq!(table.get("cafe"), Some(2));
    assert_eq!(table.get("café"), Some(2));
    assert_eq!(order_words(&table), ["cafe", "café"]);
}

#[test]
fn test_uppercase_accents_fold_in_preserve_mode() {
    let pipeline = Pipeline::new(CaseMode::Preserve, AccentFolder::default(), SortOrder::Alpha);
    let entries = pipeline.process("Zé Ávila Bruno");
    assert_eq!(pairs(&entries), [("Ávila", 1), ("Bruno", 1), ("Zé", 1)]);
}

#[test]
fn test_non_latin_text_passes_through() {
    let entries = process("Привет мир привет 世界");
    assert_eq!(pairs(&entries), [("мир", 1), ("привет", 2), ("世界", 1)]);
}

#[test]
fn test_sort_by_count() {
    let pipeline = Pipeline::new(CaseMode::Simple, AccentFolder::default(), SortOrder::Count);
    let entries = pipeline.process("b a b c c c é");
    assert_eq!(pairs(&entries), [("c", 3), ("b", 2), ("a", 1), ("é", 1)]);
}
