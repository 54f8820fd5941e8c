use nom::{anychar, is_space, IResult};
use std::str::from_utf8;

/// Parses a token (i.e. a terminal symbol or a nonterminal symbol).
/// A *token* can be of one of the following two forms:
///
/// * It is a string containing neither of the symbols `'"'`, `' '`, `'-'`, `'→'`, `','`, `';'`, `')'`, `']'`.
/// * It is delimited by the symbol `'"'` on both sides and each occurrence of `'\\'` or `'"'` inside the delimiters is escaped.
pub fn parse_token(input: &[u8]) -> IResult<&[u8], String> {
    named!(
        parse_token_s<&str>,
        map_res!(
            alt!(
                delimited!(
                    char!('\"'),
                    escaped!(is_not!("\\\""), '\\', anychar),
                    char!('\"')
                ) |
                is_not!(" \"-→,;)]")
            ),
            from_utf8
        )
    );

    parse_token_s(input).map(|token| token.to_string())
}

/// Parses the `input` into a `Vec<A>` given an `item_parser` for type `A`, an
/// `opening` delimiter, a `closing` delimiter, and a `separator`.
/// The `item_parser` must not consume the `separator`s or the `closing`
/// delimiter of the given `input`.
pub fn parse_list<'a, A, P>(
    input: &'a [u8],
    item_parser: P,
    opening: &str,
    closing: &str,
    separator: &str,
) -> IResult<&'a [u8], Vec<A>>
where
    P: Fn(&'a [u8]) -> IResult<&'a [u8], A>,
{
    do_parse!(
        input,
        tag!(opening)
            >> take_while!(is_space)
            >> result:
                many0!(do_parse!(
                    opt!(tag!(separator))
                        >> take_while!(is_space)
                        >> item: item_parser
                        >> take_while!(is_space)
                        >> (item)
                ))
            >> tag!(closing)
            >> (result)
    )
}

/// Parses a declaration of the form `initial: <token>` into the token.
pub fn parse_initial(input: &[u8]) -> IResult<&[u8], String> {
    do_parse!(
        input,
        tag!("initial:") >> take_while!(is_space) >> result: parse_token >> (result)
    )
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_parse_token_legal_input() {
        let legal_inputs = vec![
            ("abcxyz", "", String::from("abcxyz")),
            ("S_newstart rest", " rest", String::from("S_newstart")),
            ("\"abc\"xyz", "xyz", String::from("abc")),
            ("\"U_literal,1\", tail", ", tail", String::from("U_literal,1")),
            ("\"a\\\\b\\\"c\"xyz", "xyz", String::from("a\\\\b\\\"c")),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_token(legal_input.as_bytes()).unwrap()
            );
        }
    }

    #[test]
    fn test_parse_token_illegal_input() {
        let illegal_inputs = vec![" quux", ",quux", "]quux", "→"];

        for illegal_input in illegal_inputs {
            match parse_token(illegal_input.as_bytes()) {
                IResult::Done(_, output) => {
                    panic!("Was able to parse \'{}\' from \'{}\'", output, illegal_input)
                }
                _ => (),
            }
        }
    }

    #[test]
    fn test_parse_list_legal_input() {
        let legal_inputs = vec![
            ("[]", "", Vec::new()),
            ("[a]", "", vec![String::from("a")]),
            (
                "[1, A, 1] rest",
                " rest",
                vec![String::from("1"), String::from("A"), String::from("1")],
            ),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_list(legal_input.as_bytes(), parse_token, "[", "]", ",").unwrap()
            );
        }
    }

    #[test]
    fn test_parse_list_illegal_input() {
        let illegal_inputs = vec!["a, b]", "(a, b]"];

        for illegal_input in illegal_inputs {
            match parse_list(illegal_input.as_bytes(), parse_token, "[", "]", ",") {
                IResult::Done(_, output) => panic!(
                    "Was able to parse \'{:?}\' from \'{}\'",
                    output, illegal_input
                ),
                _ => (),
            }
        }
    }

    #[test]
    fn test_parse_initial_legal_input() {
        let legal_inputs = vec![
            ("initial: S", "", String::from("S")),
            ("initial:  \"S\" rest", " rest", String::from("S")),
        ];

        for (legal_input, control_rest, control_parsed) in legal_inputs {
            assert_eq!(
                (control_rest.as_bytes(), control_parsed),
                parse_initial(legal_input.as_bytes()).unwrap()
            );
        }
    }

    #[test]
    fn test_parse_initial_illegal_input() {
        let illegal_inputs = vec!["inital: S", "S"];

        for illegal_input in illegal_inputs {
            match parse_initial(illegal_input.as_bytes()) {
                IResult::Done(_, output) => {
                    panic!("Was able to parse \'{}\' from \'{}\'", output, illegal_input)
                }
                _ => (),
            }
        }
    }
}
