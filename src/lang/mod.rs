pub use self::simple::*;

pub mod prelude;
mod simple;

pub static ROOT_FORM: &'static str = "root";
pub static ROOT_POSTAG: &'static str = "root";

pub trait Tokenized {
    fn id(&self) -> usize;
    fn form(&self) -> &str;
    fn postag(&self) -> Option<&str>;
    fn head(&self) -> Option<usize>;
    fn deprel(&self) -> Option<&str>;
}

pub trait Phrasal {
    type Token: Tokenized;

    fn from_tokens(tokens: Vec<Self::Token>) -> Self;

    /// Words joined by spaces, the root excluded.
    fn raw(&self) -> &str;

    fn token(&self, index: usize) -> Option<&Self::Token>;

    fn tokens(&self) -> &[Self::Token];

    /// Number of tokens including the root.
    fn len(&self) -> usize {
        self.tokens().len()
    }

    fn iter(&self) -> ::std::slice::Iter<Self::Token> {
        self.tokens().iter()
    }
}
