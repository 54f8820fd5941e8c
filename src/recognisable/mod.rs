pub mod cyk;

pub use self::cyk::CykRecogniser;

/// Something that decides the membership of words in a language.
pub trait Recognisable<T> {
    fn recognise(&self, word: &[T]) -> bool;
}
