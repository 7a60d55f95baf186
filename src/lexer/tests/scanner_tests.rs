//! Тесты сканеров: позиционирование источника и режим отбрасывания

use crate::lexer::classifier::classify;
use crate::lexer::scanners::Scanners;
use crate::lexer::{CharSource, TokenKind};

/// Сканирует первый токен и возвращает его текст вместе с остатком входа
fn scan_first(input: &str, batch_size: usize, discard: bool) -> (TokenKind, Option<String>, String) {
    let mut source = CharSource::for_str(input);
    let mut scanners = Scanners::new(batch_size);
    let mut lookahead = ['\0'; 2];

    let count = source.fill(&mut lookahead, 2).unwrap();
    let kind = classify(&lookahead[..count]);
    let text = scanners
        .scan(kind, &mut source, &lookahead[..count], discard)
        .unwrap();

    let mut rest = String::new();
    let mut buf = ['\0'; 8];
    loop {
        let n = source.fill_remaining(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        rest.extend(&buf[..n]);
    }

    (kind, text, rest)
}

#[test]
fn test_scanner_leaves_source_after_token() {
    let cases = [
        ("SELECT 1", TokenKind::Literal, "SELECT", " 1"),
        (" x", TokenKind::Whitespace, " ", "x"),
        ("  \t\nx", TokenKind::Whitespace, "  \t\n", "x"),
        ("-- c\nnext", TokenKind::LineComment, "-- c\n", "next"),
        ("/* c */next", TokenKind::BlockComment, "/* c */", "next"),
        ("[a]]b] c", TokenKind::SquareString, "[a]]b]", " c"),
        ("'a''b'c", TokenKind::QuotedString, "'a''b'", "c"),
        ("N'x' y", TokenKind::QuotedString, "N'x'", " y"),
        ("\"q\"\"\".z", TokenKind::QuotedString, "\"q\"\"\"", ".z"),
        (">=1", TokenKind::Symbol, ">=", "1"),
        ("> =", TokenKind::Symbol, ">", " ="),
        ("(a)", TokenKind::Symbol, "(", "a)"),
    ];

    for batch_size in [1, 2, 3, 64] {
        for (input, kind, token, rest) in cases {
            let (scanned_kind, text, remaining) = scan_first(input, batch_size, false);
            assert_eq!(scanned_kind, kind, "{:?}", input);
            assert_eq!(text.as_deref(), Some(token), "{:?} batch {}", input, batch_size);
            assert_eq!(remaining, rest, "{:?} batch {}", input, batch_size);
        }
    }
}

#[test]
fn test_discard_advances_identically() {
    let inputs = [
        "   \n\tSELECT",
        "-- comment\nSELECT",
        "/* a\n b */SELECT",
        "/* never closes",
    ];

    for input in inputs {
        let (_, kept, kept_rest) = scan_first(input, 4, false);
        let (_, discarded, discarded_rest) = scan_first(input, 4, true);

        assert!(kept.is_some());
        assert_eq!(discarded, None);
        assert_eq!(kept_rest, discarded_rest, "{:?}", input);
    }
}

#[test]
fn test_closing_delimiter_at_batch_boundary() {
    // ']' последний в пакете, решение принимается по следующему пакету
    let (_, text, rest) = scan_first("[ab]]c]d", 4, false);
    assert_eq!(text.as_deref(), Some("[ab]]c]"));
    assert_eq!(rest, "d");

    let (_, text, rest) = scan_first("[abc]d", 4, false);
    assert_eq!(text.as_deref(), Some("[abc]"));
    assert_eq!(rest, "d");
}

#[test]
fn test_block_comment_star_at_batch_boundary() {
    let (_, text, rest) = scan_first("/*ab*/c", 4, false);
    assert_eq!(text.as_deref(), Some("/*ab*/"));
    assert_eq!(rest, "c");

    // "/*/" не закрывает комментарий
    let (_, text, rest) = scan_first("/*/ x */", 1, false);
    assert_eq!(text.as_deref(), Some("/*/ x */"));
    assert_eq!(rest, "");
}

#[test]
fn test_literal_always_consumes_first_char() {
    let (kind, text, rest) = scan_first("!x=1", 2, false);
    assert_eq!(kind, TokenKind::Literal);
    assert_eq!(text.as_deref(), Some("!x"));
    assert_eq!(rest, "=1");

    let (kind, text, rest) = scan_first(":", 2, false);
    assert_eq!(kind, TokenKind::Literal);
    assert_eq!(text.as_deref(), Some(":"));
    assert_eq!(rest, "");
}
