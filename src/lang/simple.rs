use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, Index};

use crate::lang::{Phrasal, Tokenized, ROOT_FORM, ROOT_POSTAG};

#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    id: usize,
    form: Cow<'a, str>,
    postag: Option<Cow<'a, str>>,
    head: Option<usize>,
    deprel: Option<Cow<'a, str>>,
}

impl<'a> Token<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(
        id: usize,
        form: S,
        postag: Option<S>,
        head: Option<usize>,
        deprel: Option<S>,
    ) -> Self {
        Token {
            id: id,
            form: form.into(),
            postag: postag.map(|s| s.into()),
            head: head,
            deprel: deprel.map(|s| s.into()),
        }
    }

    /// The synthetic pseudo-word prepended to every sentence.
    pub fn root() -> Self {
        Token::new(0, ROOT_FORM, Some(ROOT_POSTAG), Some(0), None)
    }
}

impl<'a> Tokenized for Token<'a> {
    fn id(&self) -> usize {
        self.id
    }

    fn form(&self) -> &str {
        &self.form
    }

    fn postag(&self) -> Option<&str> {
        self.postag.as_ref().map(|x| x.deref())
    }

    fn head(&self) -> Option<usize> {
        self.head
    }

    fn deprel(&self) -> Option<&str> {
        self.deprel.as_ref().map(|x| x.deref())
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id: {}, form: {}", self.id, self.form)
    }
}

#[derive(Clone, Debug)]
pub struct Sentence<T: Tokenized> {
    raw: String,
    tokens: Vec<T>,
}

impl<'a> Sentence<Token<'a>> {
    /// Builds a sentence from `(form, postag, head, deprel)` rows, prepending the root.
    pub fn from_rows<S: Into<Cow<'a, str>>>(rows: Vec<(S, S, usize, S)>) -> Self {
        let mut tokens = Vec::with_capacity(rows.len() + 1);
        tokens.push(Token::root());
        for (i, (form, postag, head, deprel)) in rows.into_iter().enumerate() {
            tokens.push(Token::new(i + 1, form, Some(postag), Some(head), Some(deprel)));
        }
        Sentence::from_tokens(tokens)
    }
}

impl<T: Tokenized> Sentence<T> {
    pub fn forms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.form()).collect()
    }
}

impl<T: Tokenized> fmt::Display for Sentence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "raw: {}", self.raw)
    }
}

impl<T: Tokenized> Phrasal for Sentence<T> {
    type Token = T;

    fn from_tokens(tokens: Vec<T>) -> Self {
        Sentence {
            raw: tokens
                .iter()
                .skip(1)
                .map(|t| t.form().to_string())
                .collect::<Vec<String>>()
                .join(" "),
            tokens: tokens,
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn token(&self, index: usize) -> Option<&Self::Token> {
        self.tokens.get(index)
    }

    fn tokens(&self) -> &[Self::Token] {
        &self.tokens
    }
}

impl<T: Tokenized> Index<usize> for Sentence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}
