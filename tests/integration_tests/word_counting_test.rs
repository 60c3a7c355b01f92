// tests/integration_tests/word_counting_test.rs
use anyhow::Result;
use std::collections::BTreeSet;
use wfc::{
    AsciiLowercase, CaseFolder as _, FrequencyTable, SimpleLowercase, count_words,
    count_words_with, tokenize,
};

#[test]
fn test_count_words_case_insensitive() {
    let table = count_words("Esta é uma frase de teste. Esta é uma frase de Teste.");
    let expected: FrequencyTable = [
        ("esta", 2),
        ("é", 2),
        ("uma", 2),
        ("frase", 2),
        ("de", 2),
        ("teste.", 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(table, expected);
}

#[test]
fn test_count_words_empty() {
    assert_eq!(count_words(""), FrequencyTable::new());
}

#[test]
fn test_count_words_with_ascii_folding() {
    let table = count_words_with("ÉRA Éra éra", &AsciiLowercase);
    assert_eq!(table.get("Éra"), Some(2));
    assert_eq!(table.get("éra"), Some(1));
}

#[test]
fn test_counts_match_tokens() -> Result<()> {
    let samples = [
        "",
        "uma",
        "Uma uma UMA\n\numa.",
        "  Ação\tação  AÇÃO ação! ",
        "o rato roeu a roupa do rei de Roma",
    ];
    for text in samples {
        let table = count_words(text);
        let tokens = tokenize(text);
        assert_eq!(table.total(), u64::try_from(tokens.len())?, "token total for {text:?}");

        let distinct: BTreeSet<String> =
            tokens.iter().map(|t| SimpleLowercase.fold_case(t)).collect();
        let keys: BTreeSet<String> = table.words().map(str::to_owned).collect();
        assert_eq!(keys, distinct, "key set for {text:?}");
    }
    Ok(())
}
