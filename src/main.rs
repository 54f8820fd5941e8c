use clap::App;

use chomsky::grammars::cfg;

fn main() {
    let matches = App::new("chomsky")
        .version("0.1")
        .about("Membership tests for context-free languages via Chomsky normal form and the CYK algorithm")
        .subcommand(cfg::cli::get_sub_command())
        .get_matches();

    match matches.subcommand() {
        ("cfg", Some(cfg_matches)) => cfg::cli::handle_sub_matches(cfg_matches),
        _ => (),
    }
}
