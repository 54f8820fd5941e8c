use std::collections::BTreeSet;

use crate::grammars::cfg::{Cfg, CfgRule, Symbol};

/// Converts `grammar` into an equivalent grammar in Chomsky normal form:
/// every rule is of the form `A → B C` with nonterminals `B` and `C`, or
/// `A → a` with a terminal `a`, or the empty rule of the fresh initial
/// symbol.
pub fn to_normal_form(grammar: &Cfg) -> Cfg {
    let (initial, mut rules) = fresh_start_symbol(grammar);

    rules = eliminate_unit_rules(rules);
    rules = eliminate_empty_rules(rules, &initial);
    // Deleting a nullable symbol from a two-symbol body uncovers new unit
    // rules, and copying the bodies of a unit target can introduce new empty
    // bodies, so the two eliminations are repeated until no unit rule is
    // left.
    while rules.iter().any(is_unit_rule) {
        rules = eliminate_unit_rules(rules);
        rules = eliminate_empty_rules(rules, &initial);
    }

    rules = shorten_long_rules(rules);
    rules = separate_terminals(rules);

    Cfg::new(initial, rules)
}

fn is_unit_rule(rule: &CfgRule) -> bool {
    rule.body.len() == 1 && rule.body[0].is_nonterminal()
}

/// Introduces the fresh initial symbol `<initial>_newstart` together with
/// the rule `<initial>_newstart → [<initial>]`. Afterwards the initial
/// symbol occurs on no right-hand side, so its empty rule (if any) stays
/// confined to it.
fn fresh_start_symbol(grammar: &Cfg) -> (String, Vec<CfgRule>) {
    let initial = format!("{}_newstart", grammar.initial());

    let mut rules = grammar.rules().to_vec();
    rules.push(CfgRule {
        head: initial.clone(),
        body: vec![Symbol::Nonterminal(grammar.initial().to_string())],
    });

    (initial, rules)
}

/// Removes rules of the form `A → B` with a nonterminal `B` by copying every
/// non-unit body of `B` to `A`. The copies are deduplicated by value and the
/// procedure is iterated until chains like `A → B → C → a` are fully
/// resolved. Self-referential rules `A → A` are dropped.
fn eliminate_unit_rules(rules: Vec<CfgRule>) -> Vec<CfgRule> {
    let (units, mut finals): (Vec<CfgRule>, Vec<CfgRule>) =
        rules.into_iter().partition(is_unit_rule);

    let mut changed = true;
    while changed {
        changed = false;
        for unit in &units {
            let target = unit.body[0].token();
            if unit.head == target {
                continue;
            }
            let copies: Vec<CfgRule> = finals
                .iter()
                .filter(|rule| rule.head == target)
                .map(|rule| CfgRule {
                    head: unit.head.clone(),
                    body: rule.body.clone(),
                })
                .collect();
            for copy in copies {
                if !finals.contains(&copy) {
                    finals.push(copy);
                    changed = true;
                }
            }
        }
    }

    finals
}

/// Removes rules with an empty right-hand side, except for the one owned by
/// the initial symbol. For a nullable symbol `X`, every rule mentioning `X`
/// is expanded by one copy per non-empty subset of its `X`-occurrences, with
/// that subset deleted. Empty bodies derived during expansion are processed
/// in turn; an empty body re-derived for an already expanded symbol carries
/// no new information and is discarded.
fn eliminate_empty_rules(rules: Vec<CfgRule>, initial: &str) -> Vec<CfgRule> {
    let (mut blank, mut finals): (Vec<CfgRule>, Vec<CfgRule>) = rules
        .into_iter()
        .partition(|rule| rule.body.is_empty() && rule.head != initial);

    let mut expanded: BTreeSet<String> = BTreeSet::new();

    while let Some(rule) = blank.pop() {
        let nullable = rule.head;
        if !expanded.insert(nullable.clone()) {
            continue;
        }
        blank.retain(|r| r.head != nullable);

        let mut derived: Vec<CfgRule> = Vec::new();
        for rule in &finals {
            let occurrences: Vec<usize> = rule
                .body
                .iter()
                .enumerate()
                .filter(|&(_, symbol)| symbol.is_nonterminal() && symbol.token() == nullable)
                .map(|(position, _)| position)
                .collect();
            for subset in nonempty_subsets(&occurrences) {
                let body: Vec<Symbol> = rule
                    .body
                    .iter()
                    .enumerate()
                    .filter(|&(position, _)| !subset.contains(&position))
                    .map(|(_, symbol)| symbol.clone())
                    .collect();
                derived.push(CfgRule {
                    head: rule.head.clone(),
                    body,
                });
            }
        }

        for rule in derived {
            if rule.body.is_empty() && rule.head != initial {
                if !expanded.contains(&rule.head) && !blank.contains(&rule) {
                    blank.push(rule);
                }
            } else if !finals.contains(&rule) {
                finals.push(rule);
            }
        }
    }

    finals
}

/// All non-empty subsets of `items`, in the order the doubling construction
/// produces them.
fn nonempty_subsets(items: &[usize]) -> Vec<Vec<usize>> {
    let mut subsets: Vec<Vec<usize>> = vec![Vec::new()];

    for &item in items {
        let n = subsets.len();
        for i in 0..n {
            let mut extended = subsets[i].clone();
            extended.push(item);
            subsets.push(extended);
        }
    }

    subsets.remove(0);
    subsets
}

/// Breaks every body with more than two symbols into a chain of binary
/// rules, peeling one symbol at a time from the front. The helper
/// nonterminals `<head>_extra<rule>,<step>` are unique per original rule and
/// per peeled symbol.
fn shorten_long_rules(rules: Vec<CfgRule>) -> Vec<CfgRule> {
    let (long, mut finals): (Vec<CfgRule>, Vec<CfgRule>) =
        rules.into_iter().partition(|rule| rule.body.len() > 2);

    for (rule_index, rule) in long.into_iter().enumerate() {
        let CfgRule { head, mut body } = rule;

        let mut current = head.clone();
        let mut step = 0;
        while body.len() > 2 {
            let next = format!("{}_extra{},{}", head, rule_index, step);
            let first = body.remove(0);
            finals.push(CfgRule {
                head: current,
                body: vec![first, Symbol::Nonterminal(next.clone())],
            });
            current = next;
            step += 1;
        }
        finals.push(CfgRule {
            head: current,
            body,
        });
    }

    finals
}

/// Replaces terminals inside two-symbol bodies by wrapper nonterminals
/// `U_literal,<terminal>` with the corresponding unary rule. The wrapper
/// rules are collected in a set, so each terminal is wrapped exactly once.
fn separate_terminals(rules: Vec<CfgRule>) -> Vec<CfgRule> {
    let mut wrappers: BTreeSet<CfgRule> = BTreeSet::new();
    let mut finals: Vec<CfgRule> = Vec::with_capacity(rules.len());

    for rule in rules {
        if rule.body.len() != 2 {
            finals.push(rule);
            continue;
        }
        let body = rule
            .body
            .into_iter()
            .map(|symbol| match symbol {
                Symbol::Terminal(token) => {
                    let wrapper = format!("U_literal,{}", token);
                    wrappers.insert(CfgRule {
                        head: wrapper.clone(),
                        body: vec![Symbol::Terminal(token)],
                    });
                    Symbol::Nonterminal(wrapper)
                }
                nonterminal => nonterminal,
            })
            .collect();
        finals.push(CfgRule {
            head: rule.head,
            body,
        });
    }

    finals.extend(wrappers);
    finals
}
