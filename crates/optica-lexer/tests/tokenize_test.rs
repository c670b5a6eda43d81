//! Integration tests for the public `tokenize` entry point.

use optica_lexer::{LexicalErrorKind, TokenKind, tokenize};

const TIMETABLING: &str = include_str!("fixtures/timetabling.optica");

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src)
        .unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn test_empty_input_yields_end() {
    assert_eq!(kinds(""), vec![TokenKind::End]);
    assert_eq!(kinds("\n\n"), vec![TokenKind::Newline, TokenKind::Newline, TokenKind::End]);
}

#[test]
fn test_model_header() {
    assert_eq!(
        kinds("model \"Test Model\""),
        vec![
            TokenKind::Model,
            TokenKind::String("Test Model".into()),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_all_keywords() {
    assert_eq!(
        kinds("model set param var maximize minimize subject to forall sum in binary int real"),
        vec![
            TokenKind::Model,
            TokenKind::Set,
            TokenKind::Param,
            TokenKind::Var,
            TokenKind::Maximize,
            TokenKind::Minimize,
            TokenKind::Subject,
            TokenKind::To,
            TokenKind::Forall,
            TokenKind::Sum,
            TokenKind::In,
            TokenKind::Binary,
            TokenKind::Int,
            TokenKind::RealType,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_range_is_not_a_real() {
    assert_eq!(
        kinds("1..5"),
        vec![
            TokenKind::Integer(1),
            TokenKind::DotDot,
            TokenKind::Integer(5),
            TokenKind::End,
        ]
    );
    assert_eq!(
        kinds("1.5..2.5"),
        vec![
            TokenKind::Real(1.5),
            TokenKind::DotDot,
            TokenKind::Real(2.5),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_escape_fidelity() {
    let tokens = tokenize(r#""a\nb""#).unwrap();
    match &tokens[0].kind {
        TokenKind::String(s) => {
            assert_eq!(s.chars().count(), 3);
            assert_eq!(s, "a\nb");
        }
        other => panic!("expected a string, got {other:?}"),
    }
    assert_eq!(tokens[0].raw_text, r#""a\nb""#);
}

#[test]
fn test_keyword_boundary() {
    assert_eq!(kinds("sett"), vec![ident("sett"), TokenKind::End]);
    assert_eq!(kinds("settings"), vec![ident("settings"), TokenKind::End]);
    assert_eq!(kinds("into"), vec![ident("into"), TokenKind::End]);
}

#[test]
fn test_block_then_dedent() {
    assert_eq!(
        kinds("block:\n    content\nother"),
        vec![
            ident("block"),
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent(4),
            ident("content"),
            TokenKind::Newline,
            TokenKind::Dedent,
            ident("other"),
            TokenKind::End,
        ]
    );
}

#[test]
fn test_unrecognized_character_position() {
    let err = tokenize("set @invalid").unwrap_err();
    assert_eq!(err.kind, LexicalErrorKind::UnrecognizedCharacter('@'));
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn test_unclosed_string_position() {
    let err = tokenize("\"unclosed").unwrap_err();
    assert!(err.kind.is_unterminated_string());
    assert_eq!((err.line, err.column), (1, 1));

    let err = tokenize("x\n  y = 'unclosed").unwrap_err();
    assert_eq!(err.kind, LexicalErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (2, 7));
}

#[test]
fn test_newline_inside_string_position() {
    let err = tokenize("set A = {\"S1\n\"}").unwrap_err();
    assert_eq!(err.kind, LexicalErrorKind::NewlineInString);
    assert_eq!((err.line, err.column), (1, 13));
}

#[test]
fn test_inconsistent_dedent_is_fatal() {
    let err = tokenize("a:\n        b\n    c\n").unwrap_err();
    assert_eq!(
        err.kind,
        LexicalErrorKind::InconsistentDedent {
            width: 4,
            enclosing: 0
        }
    );
    assert_eq!((err.line, err.column), (3, 1));
}

#[test]
fn test_mixed_tabs_and_spaces_are_summed() {
    // two spaces + one tab == six spaces
    assert_eq!(
        kinds("a\n  \tb\n      c"),
        vec![
            ident("a"),
            TokenKind::Newline,
            TokenKind::Indent(6),
            ident("b"),
            TokenKind::Newline,
            ident("c"),
            TokenKind::Dedent,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_multiple_dedents_on_one_line() {
    let kinds = kinds("a:\n  b:\n    c:\n      d\ne");
    let dedents = kinds
        .iter()
        .skip_while(|k| **k != ident("d"))
        .take_while(|k| **k != ident("e"))
        .filter(|k| **k == TokenKind::Dedent)
        .count();
    assert_eq!(dedents, 3);
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("line1\nline2\nline3").unwrap();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[4].line, 3);

    let tokens = tokenize("ab cd ef").unwrap();
    let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, vec![1, 4, 7, 9]);
}

#[test]
fn test_indent_position() {
    let tokens = tokenize("a:\n    b").unwrap();
    let indent = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Indent(_)))
        .unwrap();
    assert_eq!(indent.position(), (2, 1));
    assert!(indent.raw_text.is_empty());
    assert_eq!(tokens[4].position(), (2, 5));
}

#[test]
fn test_set_definitions() {
    assert_eq!(
        kinds(r#"set STUDENTS = {"S1", "S2", "S3"}"#),
        vec![
            TokenKind::Set,
            ident("STUDENTS"),
            TokenKind::Eq,
            TokenKind::LeftBrace,
            TokenKind::String("S1".into()),
            TokenKind::Comma,
            TokenKind::String("S2".into()),
            TokenKind::Comma,
            TokenKind::String("S3".into()),
            TokenKind::RightBrace,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_param_and_var_declarations() {
    assert_eq!(
        kinds("param pref[STUDENTS, TEACHERS] real\nvar x[STUDENTS] binary"),
        vec![
            TokenKind::Param,
            ident("pref"),
            TokenKind::LeftBracket,
            ident("STUDENTS"),
            TokenKind::Comma,
            ident("TEACHERS"),
            TokenKind::RightBracket,
            TokenKind::RealType,
            TokenKind::Newline,
            TokenKind::Var,
            ident("x"),
            TokenKind::LeftBracket,
            ident("STUDENTS"),
            TokenKind::RightBracket,
            TokenKind::Binary,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_sum_expression() {
    assert_eq!(
        kinds("sum(s in STUDENTS) x[s]"),
        vec![
            TokenKind::Sum,
            TokenKind::LeftParen,
            ident("s"),
            TokenKind::In,
            ident("STUDENTS"),
            TokenKind::RightParen,
            ident("x"),
            TokenKind::LeftBracket,
            ident("s"),
            TokenKind::RightBracket,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_subject_to() {
    assert_eq!(
        kinds("subject to:"),
        vec![TokenKind::Subject, TokenKind::To, TokenKind::Colon, TokenKind::End]
    );
}

#[test]
fn test_fixture_model() {
    let tokens = tokenize(TIMETABLING).expect("fixture should tokenize");
    let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();

    assert_eq!(kinds.iter().filter(|k| ***k == TokenKind::End).count(), 1);
    assert_eq!(*kinds.last().unwrap(), &TokenKind::End);

    let indents = kinds.iter().filter(|k| matches!(k, TokenKind::Indent(_))).count();
    let dedents = kinds.iter().filter(|k| ***k == TokenKind::Dedent).count();
    assert_eq!(indents, dedents);
    assert_eq!(indents, 5);

    assert_eq!(tokens[0].kind, TokenKind::Newline);
    assert_eq!(tokens[1].kind, TokenKind::Model);
    assert_eq!(tokens[1].line, 2);
    assert!(kinds.contains(&&TokenKind::Real(0.5)));
    assert!(kinds.contains(&&TokenKind::String("Juku Timetabling".into())));
}
