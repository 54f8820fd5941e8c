use clap::{App, Arg, ArgMatches, SubCommand};

use crate::grammars::cfg::Cfg;
use crate::recognisable::cyk::CykRecogniser;

use std::fs::File;
use std::io::{self, Read};

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("cfg")
        .about("functions related to context-free grammars")
        .subcommand(
            SubCommand::with_name("recognise")
                .about("recognises words from stdin with a context-free grammar")
                .arg(
                    Arg::with_name("grammar")
                        .help("grammar file to use")
                        .index(1)
                        .required(true),
                )
                .arg(
                    Arg::with_name("chars")
                        .help("read every line as a sequence of characters instead of whitespace-separated tokens")
                        .long("chars"),
                ),
        )
        .subcommand(
            SubCommand::with_name("normal-form")
                .about("prints the Chomsky normal form of the given grammar")
                .arg(
                    Arg::with_name("grammar")
                        .help("grammar file to use")
                        .index(1)
                        .required(true),
                ),
        )
}

pub fn handle_sub_matches(cfg_matches: &ArgMatches) {
    match cfg_matches.subcommand() {
        ("recognise", Some(recognise_matches)) => {
            let grammar = read_grammar(recognise_matches.value_of("grammar").unwrap());
            let recogniser = CykRecogniser::from(&grammar);

            let mut corpus = String::new();
            let _ = io::stdin().read_to_string(&mut corpus);

            for sentence in corpus.lines() {
                let word: Vec<String> = if recognise_matches.is_present("chars") {
                    sentence.chars().map(|c| c.to_string()).collect()
                } else {
                    sentence.split_whitespace().map(|x| x.to_string()).collect()
                };
                println!("{}", recogniser.recognise(&word));
            }
        }
        ("normal-form", Some(normal_form_matches)) => {
            let grammar = read_grammar(normal_form_matches.value_of("grammar").unwrap());
            println!("{}", grammar.cnf_form());
        }
        _ => (),
    }
}

fn read_grammar(file_name: &str) -> Cfg {
    let mut grammar_file = File::open(file_name).unwrap();
    let mut grammar_string = String::new();
    let _ = grammar_file.read_to_string(&mut grammar_string);

    grammar_string.parse().unwrap()
}
