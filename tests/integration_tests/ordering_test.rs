// tests/integration_tests/ordering_test.rs
use std::collections::BTreeSet;
use wfc::{FrequencyTable, fold_accents, order_words};

#[test]
fn test_order_words_common() {
    let table: FrequencyTable = [("banana", 1), ("abacaxi", 1), ("laranja", 1)]
        .into_iter()
        .collect();
    assert_eq!(order_words(&table), ["abacaxi", "banana", "laranja"]);
}

#[test]
fn test_order_words_empty() {
    assert!(order_words(&FrequencyTable::new()).is_empty());
}

#[test]
fn test_accented_words_sort_with_base_letter() {
    let table: FrequencyTable = [
        ("zebra", 1),
        ("árvore", 1),
        ("avião", 1),
        ("éter", 1),
        ("estrela", 1),
        ("ônibus", 1),
        ("ovo", 1),
        ("ção", 1),
        ("casa", 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        order_words(&table),
        ["árvore", "avião", "ção", "casa", "estrela", "éter", "ônibus", "ovo", "zebra"]
    );
}

#[test]
fn test_order_words_is_bijection() {
    let table: FrequencyTable = ["é", "e", "ê", "ação", "acao", "açao", "z", "Á", "a"]
        .into_iter()
        .map(|w| (w, 1))
        .collect();
    let ordered = order_words(&table);
    assert_eq!(ordered.len(), table.len());
    let unique: BTreeSet<&str> = ordered.iter().copied().collect();
    assert_eq!(unique.len(), ordered.len(), "no word appears twice");
    let keys: BTreeSet<&str> = table.words().collect();
    assert_eq!(unique, keys);
}

#[test]
fn test_order_is_strict_on_composite_key() {
    let table: FrequencyTable = ["ê", "é", "e", "è"].into_iter().map(|w| (w, 1)).collect();
    let ordered = order_words(&table);
    assert_eq!(ordered, ["e", "è", "é", "ê"]);
    for pair in ordered.windows(2) {
        let left = (fold_accents(pair[0]), pair[0]);
        let right = (fold_accents(pair[1]), pair[1]);
        assert!(left < right);
    }
}

#[test]
fn test_fold_accents_idempotent() {
    for word in ["será", "ÀÉÎÕÜÇ", "coração", "pingüim", "plain"] {
        let once = fold_accents(word);
        assert_eq!(fold_accents(&once), once);
    }
}
