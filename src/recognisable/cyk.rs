use fnv::{FnvHashMap, FnvHashSet};
use integeriser::{HashIntegeriser, Integeriser};

use crate::grammars::cfg::{Cfg, Symbol};
use crate::recognisable::Recognisable;

/// CYK membership tester for the normal form of a context-free grammar.
///
/// Nonterminals are integerised and the rules are indexed by their shape at
/// construction time, so filling a chart cell is a hash lookup per symbol
/// pair instead of a scan over the whole rule list.
#[derive(Debug, Clone)]
pub struct CykRecogniser {
    terminal_rules: FnvHashMap<String, Vec<usize>>,
    binary_rules: FnvHashMap<(usize, usize), Vec<usize>>,
    initial: Option<usize>,
    accepts_empty: bool,
}

impl<'a> From<&'a Cfg> for CykRecogniser {
    fn from(grammar: &'a Cfg) -> Self {
        let cnf = grammar.cnf_form();

        let mut nonterminals: HashIntegeriser<String> = HashIntegeriser::new();
        let mut terminal_rules: FnvHashMap<String, Vec<usize>> = FnvHashMap::default();
        let mut binary_rules: FnvHashMap<(usize, usize), Vec<usize>> = FnvHashMap::default();
        let mut accepts_empty = false;

        for rule in cnf.rules() {
            match rule.body.as_slice() {
                [] => {
                    accepts_empty |= rule.head == cnf.initial();
                }
                [Symbol::Terminal(token)] => {
                    let head = nonterminals.integerise(rule.head.clone());
                    terminal_rules
                        .entry(token.clone())
                        .or_insert_with(Vec::new)
                        .push(head);
                }
                [Symbol::Nonterminal(first), Symbol::Nonterminal(second)] => {
                    let pair = (
                        nonterminals.integerise(first.clone()),
                        nonterminals.integerise(second.clone()),
                    );
                    let head = nonterminals.integerise(rule.head.clone());
                    binary_rules
                        .entry(pair)
                        .or_insert_with(Vec::new)
                        .push(head);
                }
                // anything else is outside the normal form and can take part
                // in no recognition run
                _ => (),
            }
        }

        let initial = nonterminals.find_key(&cnf.initial().to_string());

        CykRecogniser {
            terminal_rules,
            binary_rules,
            initial,
            accepts_empty,
        }
    }
}

impl CykRecogniser {
    /// Decides by dynamic programming whether the underlying grammar
    /// generates `word`. The chart cell of the range `(i, j)` holds every
    /// nonterminal that derives `word[i..j]`.
    pub fn recognise(&self, word: &[String]) -> bool {
        if word.is_empty() {
            return self.accepts_empty;
        }

        let initial = match self.initial {
            Some(key) => key,
            // the initial symbol heads no rule, so no non-empty word is
            // derivable
            None => return false,
        };

        let n = word.len();
        let mut chart: Vec<FnvHashSet<usize>> = vec![FnvHashSet::default(); n * (n + 1) / 2];

        for (position, token) in word.iter().enumerate() {
            if let Some(heads) = self.terminal_rules.get(token) {
                chart[chart_index(position, position + 1, n)].extend(heads.iter().cloned());
            }
        }

        for range in 2..=n {
            for left in 0..=(n - range) {
                let right = left + range;
                let mut cell: FnvHashSet<usize> = FnvHashSet::default();
                for mid in (left + 1)..right {
                    for first in &chart[chart_index(left, mid, n)] {
                        for second in &chart[chart_index(mid, right, n)] {
                            if let Some(heads) = self.binary_rules.get(&(*first, *second)) {
                                cell.extend(heads.iter().cloned());
                            }
                        }
                    }
                }
                chart[chart_index(left, right, n)] = cell;
            }
        }

        chart[chart_index(0, n, n)].contains(&initial)
    }
}

/// Flat index of the chart cell of the substring range `(i, j)` of a word of
/// length `n`, with the cells ordered by ascending range length.
pub fn chart_index(i: usize, j: usize, n: usize) -> usize {
    (n * (n + 1) - (n - (j - i) + 1) * (n - (j - i) + 2)) / 2 + i
}

impl Recognisable<String> for CykRecogniser {
    fn recognise(&self, word: &[String]) -> bool {
        CykRecogniser::recognise(self, word)
    }
}

impl Recognisable<String> for Cfg {
    fn recognise(&self, word: &[String]) -> bool {
        CykRecogniser::from(self).recognise(word)
    }
}
