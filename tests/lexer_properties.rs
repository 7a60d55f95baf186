//! Свойства лексера на произвольном входе

use proptest::prelude::*;
use sqllexer::{decode_name, encode_name, tokenize, tokenize_reader, Lexer, LexerConfig, Token};

/// Текст, насыщенный ограничителями и операторами
fn sqlish() -> impl Strategy<Value = String> {
    prop_oneof![
        r#"[-/*N'"\[\]+%&|^~<>=,.;:()! \t\r\nab1]{0,64}"#,
        any::<String>(),
    ]
}

fn lex_with_batch(text: &str, batch_size: usize) -> Vec<Token> {
    let lexer = Lexer::new(LexerConfig {
        batch_size,
        ..LexerConfig::default()
    })
    .unwrap();
    lexer.tokenize_str(text).unwrap().into_vec()
}

proptest! {
    #[test]
    fn round_trip_reconstructs_input(text in sqlish()) {
        let stream = tokenize(Some(text.as_str()), false).unwrap();
        prop_assert_eq!(stream.to_source(), text);
        prop_assert!(stream.iter().all(|t| !t.text().is_empty()));
    }

    #[test]
    fn skip_sundry_keeps_significant_subsequence(text in sqlish()) {
        let all = tokenize(Some(text.as_str()), false).unwrap();
        let skipped = tokenize(Some(text.as_str()), true).unwrap();
        let expected: Vec<Token> = all.significant().cloned().collect();
        prop_assert_eq!(skipped.into_vec(), expected);
    }

    #[test]
    fn batch_size_is_invisible(text in sqlish(), batch_size in 1usize..9) {
        prop_assert_eq!(lex_with_batch(&text, batch_size), lex_with_batch(&text, 64));
    }

    #[test]
    fn reader_agrees_with_str(text in sqlish()) {
        let from_str = tokenize(Some(text.as_str()), false).unwrap();
        let from_reader = tokenize_reader(Some(text.as_bytes()), false).unwrap();
        prop_assert_eq!(from_reader, from_str);
    }

    #[test]
    fn encode_decode_round_trip(name in ".{1,24}", use_quotes in any::<bool>()) {
        let encoded = encode_name(&name, use_quotes);
        prop_assert_eq!(tokenize(Some(encoded.as_str()), false).unwrap().len(), 1);
        prop_assert_eq!(decode_name(&encoded), name);
    }
}
