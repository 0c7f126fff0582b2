use calcu::{
    error::LexError,
    interpreter::lexer::{Scanner, Token, tokenize},
};
use proptest::prelude::*;

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|(token, _)| token).collect()
}

#[test]
fn scans_every_token_kind() {
    assert_eq!(tokens("1 + 22 - 3 * 4 / (5)"),
               [Token::Integer(1),
                Token::Plus,
                Token::Integer(22),
                Token::Minus,
                Token::Integer(3),
                Token::Mul,
                Token::Integer(4),
                Token::Div,
                Token::LParen,
                Token::Integer(5),
                Token::RParen,
                Token::EndOfInput]);
}

#[test]
fn reports_token_positions() {
    let positions: Vec<usize> = tokenize(" 10*(2)").unwrap().into_iter().map(|(_, p)| p).collect();
    assert_eq!(positions, [1, 3, 4, 5, 6, 7]);
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("7");
    assert_eq!(scanner.next_token().unwrap(), (Token::Integer(7), 0));
    for _ in 0..3 {
        assert_eq!(scanner.next_token().unwrap(), (Token::EndOfInput, 1));
    }
}

#[test]
fn empty_and_blank_input_is_just_the_end_marker() {
    assert_eq!(tokens(""), [Token::EndOfInput]);
    assert_eq!(tokens("   \t "), [Token::EndOfInput]);
}

#[test]
fn stops_at_the_first_bad_character() {
    let mut scanner = Scanner::new("1 $ 2");
    assert_eq!(scanner.next_token().unwrap(), (Token::Integer(1), 0));
    assert_eq!(scanner.next_token(),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   position:  2, }));
}

#[test]
fn signs_are_separate_tokens() {
    assert_eq!(tokens("-3"), [Token::Minus, Token::Integer(3), Token::EndOfInput]);
}

#[test]
fn tokens_print_with_kind_and_value() {
    assert_eq!(Token::Integer(3).to_string(), "Token(INTEGER, 3)");
    assert_eq!(Token::Plus.to_string(), "Token(PLUS, '+')");
    assert_eq!(Token::RParen.to_string(), "Token(RPAREN, ')')");
    assert_eq!(Token::EndOfInput.to_string(), "Token(EOF, None)");
}

proptest! {
    #[test]
    fn digit_strings_scan_to_their_value(n in 0u64..=u64::MAX) {
        let src = n.to_string();
        prop_assert_eq!(tokens(&src), [Token::Integer(n), Token::EndOfInput]);
    }

    #[test]
    fn leading_zeros_do_not_change_the_value(zeros in 1usize..5, n in 0u32..100_000) {
        let src = format!("{}{n}", "0".repeat(zeros));
        prop_assert_eq!(tokens(&src), [Token::Integer(u64::from(n)), Token::EndOfInput]);
    }
}
