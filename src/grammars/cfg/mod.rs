use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::recognisable::cyk::CykRecogniser;

pub mod cli;
mod cnf;
mod from_str;

pub use self::cnf::to_normal_form;

/// Decides whether `symbol` names a nonterminal.
///
/// A nonterminal starts with an ASCII uppercase letter, optionally followed
/// by underscore-delimited segments of alphanumerics, commas, and periods.
/// All symbols invented during normalisation (`S_newstart`, `A_extra0,1`,
/// `U_literal,a`) follow this convention. Since the suffix segments are
/// optional, the decisive part is the first character.
///
/// ```
/// use chomsky::grammars::cfg::is_nonterminal;
///
/// assert!(is_nonterminal("S"));
/// assert!(is_nonterminal("S_newstart"));
/// assert!(is_nonterminal("U_literal,1"));
/// assert!(!is_nonterminal("a"));
/// assert!(!is_nonterminal("1"));
/// assert!(!is_nonterminal(""));
/// ```
pub fn is_nonterminal(symbol: &str) -> bool {
    symbol
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_uppercase())
}

/// Variable or terminal symbol in a CFG.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Nonterminal(String),
    Terminal(String),
}

impl Symbol {
    /// Classifies `token` by the naming convention. This is the only place
    /// where [`is_nonterminal`] is consulted; from here on the tag is
    /// carried with the symbol.
    pub fn from_token(token: &str) -> Self {
        if is_nonterminal(token) {
            Symbol::Nonterminal(token.to_string())
        } else {
            Symbol::Terminal(token.to_string())
        }
    }

    pub fn is_nonterminal(&self) -> bool {
        match *self {
            Symbol::Nonterminal(_) => true,
            Symbol::Terminal(_) => false,
        }
    }

    pub fn token(&self) -> &str {
        match *self {
            Symbol::Nonterminal(ref token) | Symbol::Terminal(ref token) => token,
        }
    }
}

/// A rule of a CFG. Rule identity is structural: two rules are equal iff
/// their heads and their bodies are.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
pub struct CfgRule {
    pub head: String,
    pub body: Vec<Symbol>,
}

impl CfgRule {
    /// Builds a rule from raw tokens, classifying each body token once via
    /// the naming convention.
    pub fn from_named(head: &str, body: Vec<&str>) -> Self {
        CfgRule {
            head: head.to_string(),
            body: body.into_iter().map(Symbol::from_token).collect(),
        }
    }
}

/// A context-free grammar: an initial nonterminal and a list of rules.
///
/// A `Cfg` is immutable after construction. Its Chomsky normal form is
/// computed on first use and cached for the lifetime of the grammar, see
/// [`Cfg::cnf_form`].
///
/// ```
/// use chomsky::grammars::cfg::Cfg;
///
/// let grammar: Cfg = "initial: S\n\
///                     S → [1, S, 1]\n\
///                     S → [0]".parse().unwrap();
///
/// assert!(grammar.generates("101"));
/// assert!(grammar.generates("11011"));
/// assert!(!grammar.generates("11"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cfg {
    initial: String,
    rules: Vec<CfgRule>,
    #[serde(skip)]
    cnf: OnceCell<Box<Cfg>>,
}

impl Cfg {
    /// Instantiates a grammar from an initial symbol and a list of rules,
    /// both stored verbatim. No well-formedness checks are performed:
    /// unreachable nonterminals or heads without any rule are allowed and
    /// merely never take part in a derivation.
    pub fn new(initial: String, rules: Vec<CfgRule>) -> Self {
        Cfg {
            initial,
            rules,
            cnf: OnceCell::new(),
        }
    }

    /// Builds a grammar from (head, body) token pairs, classifying every
    /// body token by the naming convention.
    pub fn from_named_rules(initial: &str, rules: Vec<(&str, Vec<&str>)>) -> Self {
        Cfg::new(
            initial.to_string(),
            rules
                .into_iter()
                .map(|(head, body)| CfgRule::from_named(head, body))
                .collect(),
        )
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn rules(&self) -> &[CfgRule] {
        &self.rules
    }

    /// Deconstructs the data type into its parts.
    pub fn destruct(self) -> (String, Vec<CfgRule>) {
        (self.initial, self.rules)
    }

    /// The set of nonterminals that occur as the head of some rule.
    pub fn nonterminals(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|rule| rule.head.as_str()).collect()
    }

    /// The Chomsky normal form of this grammar. The conversion runs at most
    /// once per grammar instance; concurrent first calls may race on who
    /// computes, but exactly one value is published and observed by all of
    /// them.
    pub fn cnf_form(&self) -> &Cfg {
        self.cnf.get_or_init(|| Box::new(cnf::to_normal_form(self)))
    }

    /// Checks whether every rule has one of the normal-form shapes: an
    /// empty body under the initial symbol, a single terminal, or two
    /// nonterminals.
    pub fn in_normal_form(&self) -> bool {
        self.rules.iter().all(|rule| match rule.body.as_slice() {
            [] => rule.head == self.initial,
            [symbol] => !symbol.is_nonterminal(),
            [left, right] => left.is_nonterminal() && right.is_nonterminal(),
            _ => false,
        })
    }

    /// Uses the CYK algorithm to decide whether this grammar generates
    /// `target`, read as a sequence of one-character terminals.
    pub fn generates(&self, target: &str) -> bool {
        let word: Vec<String> = target.chars().map(|c| c.to_string()).collect();
        CykRecogniser::from(self).recognise(&word)
    }
}

impl PartialEq for Cfg {
    fn eq(&self, other: &Self) -> bool {
        self.initial == other.initial && self.rules == other.rules
    }
}

impl Eq for Cfg {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.token())
    }
}

impl fmt::Display for CfgRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = "".to_string();

        let mut iter = self.body.iter().peekable();

        buffer.push_str("[");
        while let Some(symbol) = iter.next() {
            buffer.push_str(format!("{}", symbol).as_str());
            if iter.peek().is_some() {
                buffer.push_str(", ");
            }
        }
        buffer.push_str("]");

        write!(f, "\"{}\" → {}", self.head, buffer)
    }
}

impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = "".to_string();

        buffer.push_str(format!("initial: \"{}\"\n\n", self.initial).as_str());
        for rule in &self.rules {
            buffer.push_str(format!("{}\n", rule).as_str());
        }

        write!(f, "{}", buffer)
    }
}
