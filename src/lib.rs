#[macro_use]
extern crate nom;

pub mod grammars;
pub mod recognisable;
pub mod util;
