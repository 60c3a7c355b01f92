// tests/integration_tests/tokenizer_test.rs
use wfc::{tokenize, words};

#[test]
fn test_tokenize_mixed_whitespace() {
    assert_eq!(
        tokenize("Esta  é   uma\nfrase de teste."),
        ["Esta", "é", "uma", "frase", "de", "teste."]
    );
}

#[test]
fn test_tokenize_keeps_content() {
    assert_eq!(tokenize("  «Olá»,\tMUNDO!\r\n"), ["«Olá»,", "MUNDO!"]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_words_is_lazy_view_of_tokenize() {
    let text = "um dois\n\ntrês";
    assert_eq!(words(text).collect::<Vec<_>>(), tokenize(text));
}
