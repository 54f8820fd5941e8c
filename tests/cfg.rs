use chomsky::grammars::cfg::{Cfg, Symbol};

use std::collections::HashSet;

/// `{1^(2k+1)} ∪ {0^(2k)}`: odd-length runs of ones or even-length runs of
/// zeros.
fn example_grammar() -> Cfg {
    Cfg::from_named_rules(
        "S",
        vec![
            ("S", vec!["A"]),
            ("S", vec!["B"]),
            ("A", vec!["1", "A", "1"]),
            ("A", vec!["1"]),
            ("B", vec!["0", "B", "0"]),
            ("B", vec![]),
        ],
    )
}

fn chars(word: &str) -> Vec<String> {
    word.chars().map(|c| c.to_string()).collect()
}

/// All strings over `{0, 1}` up to the given length, the empty string
/// included.
fn binary_strings(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];

    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for letter in &["0", "1"] {
                let mut extended = prefix.clone();
                extended.push_str(letter);
                next.push(extended);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }

    all
}

/// Reference decision procedure: expands every sentential form of the normal
/// form of `grammar` to the target length and checks whether one of them
/// maps onto the target through the unary rules.
fn naive_generates(grammar: &Cfg, target: &str) -> bool {
    let cnf = grammar.cnf_form();
    let word = chars(target);

    if word.is_empty() {
        return cnf
            .rules()
            .iter()
            .any(|rule| rule.body.is_empty() && rule.head == cnf.initial());
    }

    let mut sententials: HashSet<Vec<String>> = HashSet::new();
    sententials.insert(vec![cnf.initial().to_string()]);

    for _ in 2..=word.len() {
        let mut next: HashSet<Vec<String>> = HashSet::new();
        for sentential in &sententials {
            for (position, nonterminal) in sentential.iter().enumerate() {
                for rule in cnf.rules() {
                    if rule.head != *nonterminal || rule.body.len() != 2 {
                        continue;
                    }
                    let mut derived = sentential[..position].to_vec();
                    derived.extend(rule.body.iter().map(|symbol| symbol.token().to_string()));
                    derived.extend_from_slice(&sentential[position + 1..]);
                    next.insert(derived);
                }
            }
        }
        sententials = next;
    }

    sententials.iter().any(|sentential| {
        sentential.iter().zip(&word).all(|(nonterminal, token)| {
            cnf.rules().iter().any(|rule| {
                rule.head == *nonterminal && rule.body == vec![Symbol::Terminal(token.clone())]
            })
        })
    })
}

#[test]
fn test_generates_odd_ones_or_even_zeros() {
    let grammar = example_grammar();

    let positives = vec!["", "1", "111", "11111", "00", "0000", "000000"];
    for word in positives {
        assert!(grammar.generates(word), "should generate \'{}\'", word);
    }

    let negatives = vec!["1010101", "0", "000", "1111", "11", "10", "01", "100"];
    for word in negatives {
        assert!(!grammar.generates(word), "should not generate \'{}\'", word);
    }
}

#[test]
fn test_normal_form_properties() {
    let grammar = example_grammar();
    let cnf = grammar.cnf_form();

    assert!(cnf.in_normal_form());
    assert_eq!("S_newstart", cnf.initial());
    assert!(cnf
        .rules()
        .iter()
        .any(|rule| rule.head == cnf.initial() && rule.body.is_empty()));
    assert!(cnf
        .rules()
        .iter()
        .all(|rule| !rule.body.is_empty() || rule.head == cnf.initial()));
}

#[test]
fn test_generates_agrees_with_naive_derivation_search() {
    let grammar = example_grammar();

    for word in binary_strings(4) {
        assert_eq!(
            naive_generates(&grammar, &word),
            grammar.generates(&word),
            "disagreement on \'{}\'",
            word
        );
    }
}

#[test]
fn test_two_conversions_accept_the_same_language() {
    let first = example_grammar();
    let second = example_grammar();

    for word in binary_strings(5) {
        assert_eq!(first.generates(&word), second.generates(&word));
    }
}

#[test]
fn test_normal_form_accepts_the_same_language_as_the_original() {
    let grammar = example_grammar();
    let cnf = grammar.cnf_form().clone();

    // converting the already converted grammar once more changes the fresh
    // names but not the language
    for word in binary_strings(5) {
        assert_eq!(grammar.generates(&word), cnf.generates(&word));
    }
}

#[test]
fn test_unit_chains() {
    let grammar = Cfg::from_named_rules(
        "S",
        vec![("S", vec!["A"]), ("A", vec!["B"]), ("B", vec!["b"])],
    );

    assert!(grammar.generates("b"));
    assert!(!grammar.generates(""));
    assert!(!grammar.generates("bb"));
}

#[test]
fn test_self_referential_unit_rule() {
    let grammar = Cfg::from_named_rules("S", vec![("S", vec!["S"]), ("S", vec!["a"])]);

    assert!(grammar.generates("a"));
    assert!(!grammar.generates("aa"));
}

#[test]
fn test_nullable_symbol_uncovered_by_unit_elimination() {
    let grammar = Cfg::from_named_rules(
        "S",
        vec![("S", vec!["X", "Y"]), ("X", vec![]), ("Y", vec!["y"])],
    );

    assert!(grammar.generates("y"));
    assert!(!grammar.generates(""));
    assert!(!grammar.generates("yy"));
}

#[test]
fn test_nullable_symbol_with_two_occurrences() {
    let grammar = Cfg::from_named_rules(
        "S",
        vec![("S", vec!["X", "1", "X"]), ("X", vec!["0"]), ("X", vec![])],
    );

    let positives = vec!["1", "01", "10", "010"];
    for word in positives {
        assert!(grammar.generates(word), "should generate \'{}\'", word);
    }

    let negatives = vec!["", "0", "00", "011", "0110", "0100"];
    for word in negatives {
        assert!(!grammar.generates(word), "should not generate \'{}\'", word);
    }
}

#[test]
fn test_long_rule_accepts_exactly_its_word() {
    let grammar = Cfg::from_named_rules("S", vec![("S", vec!["a", "b", "c", "d", "e"])]);

    assert!(grammar.generates("abcde"));

    let negatives = vec!["", "abcd", "abcdee", "abbcde", "aabcde", "edcba"];
    for word in negatives {
        assert!(!grammar.generates(word), "should not generate \'{}\'", word);
    }
}

#[test]
fn test_nullable_start_symbol() {
    let grammar = Cfg::from_named_rules("S", vec![("S", vec![]), ("S", vec!["a", "S"])]);

    assert!(grammar.generates(""));
    assert!(grammar.generates("a"));
    assert!(grammar.generates("aaa"));
    assert!(!grammar.generates("b"));
}

#[test]
fn test_words_outside_the_alphabet() {
    let grammar = example_grammar();

    assert!(!grammar.generates("2"));
    assert!(!grammar.generates("1x1"));
}

#[test]
fn test_grammar_without_rules_for_the_initial_symbol() {
    let grammar = Cfg::from_named_rules("S", vec![("A", vec!["a"])]);

    assert!(!grammar.generates(""));
    assert!(!grammar.generates("a"));
}

#[test]
fn test_parsed_and_constructed_grammars_agree() {
    let parsed: Cfg = "initial: S\n\
                       S → [A]\n\
                       S → [B]\n\
                       A → [1, A, 1]\n\
                       A → [1]\n\
                       B → [0, B, 0]\n\
                       B → []"
        .parse()
        .unwrap();

    assert_eq!(example_grammar(), parsed);

    for word in binary_strings(4) {
        assert_eq!(example_grammar().generates(&word), parsed.generates(&word));
    }
}
