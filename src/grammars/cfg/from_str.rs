use nom::{is_space, IResult};
use std::str::FromStr;

use crate::grammars::cfg::{is_nonterminal, Cfg, CfgRule, Symbol};
use crate::util::parsing::{parse_initial, parse_list, parse_token};

impl FromStr for Cfg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('%'));

        let initial = match lines.next() {
            Some(line) => match parse_initial(line.as_bytes()) {
                IResult::Done(_, token) => {
                    if is_nonterminal(&token) {
                        token
                    } else {
                        return Err(format!(
                            "Malformed declaration of the initial nonterminal: \'{}\'",
                            line
                        ));
                    }
                }
                _ => {
                    return Err(format!(
                        "Malformed declaration of the initial nonterminal: \'{}\'",
                        line
                    ))
                }
            },
            None => return Err("No initial nonterminal supplied.".to_string()),
        };

        let mut rules = Vec::new();
        for line in lines {
            rules.push(line.parse()?);
        }

        Ok(Cfg::new(initial, rules))
    }
}

impl FromStr for CfgRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_rule(s.as_bytes()) {
            IResult::Done(_, rule) => {
                if is_nonterminal(&rule.head) {
                    Ok(rule)
                } else {
                    Err(format!("Rule head \'{}\' is not a nonterminal.", rule.head))
                }
            }
            _ => Err(format!("Could not parse \'{}\'", s)),
        }
    }
}

fn parse_rule(input: &[u8]) -> IResult<&[u8], CfgRule> {
    do_parse!(
        input,
        head: parse_token
            >> take_while!(is_space)
            >> alt!(tag!("→") | tag!("->") | tag!("=>"))
            >> take_while!(is_space)
            >> body: call!(|slice| parse_list(slice, parse_token, "[", "]", ","))
            >> take_while!(is_space)
            >> alt!(eof!() | preceded!(tag!("%"), take_while!(|_| true)))
            >> (CfgRule {
                head,
                body: body.iter().map(|token| Symbol::from_token(token)).collect(),
            })
    )
}
