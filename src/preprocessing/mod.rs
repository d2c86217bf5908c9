use std::convert::TryFrom;

use crate::lang::{Phrasal, Tokenized};
use crate::syntax;
use crate::syntax::transition::{Error, Gold, Index};
pub use self::vocab::*;

mod vocab;

#[derive(Debug)]
pub struct Transform<'p, I, P: 'p> {
    iter: I,
    caller: &'p P,
}

impl<'p, I, P, T> Iterator for Transform<'p, I, P>
where
    I: Iterator<Item = T>,
    P: Preprocess<T>,
{
    type Item = P::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|x| self.caller.transform_each(x))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[derive(Debug)]
pub struct FitTransform<'p, I, P: 'p> {
    iter: I,
    caller: &'p mut P,
}

impl<'p, I, P, T> Iterator for FitTransform<'p, I, P>
where
    I: Iterator<Item = T>,
    P: Preprocess<T>,
{
    type Item = P::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(x) => Some(self.caller.fit_transform_each(x)),
            None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

pub trait Preprocess<T> {
    type Output;

    fn fit<I: Iterator<Item = T>>(&mut self, xs: I) {
        for x in xs {
            self.fit_each(&x);
        }
    }

    fn fit_each(&mut self, x: &T);

    fn transform<I: Iterator<Item = T>>(&self, xs: I) -> Transform<I, Self>
    where
        Self: Sized,
    {
        Transform {
            iter: xs,
            caller: self,
        }
    }

    fn transform_each(&self, x: T) -> Self::Output;

    fn fit_transform<I: Iterator<Item = T>>(&mut self, xs: I) -> FitTransform<I, Self>
    where
        Self: Sized,
    {
        FitTransform {
            iter: xs,
            caller: self,
        }
    }

    fn fit_transform_each(&mut self, x: T) -> Self::Output {
        self.fit_each(&x);
        self.transform_each(x)
    }
}

/// Maps sentences to integer gold annotations for the oracle.
#[derive(Debug)]
pub struct GoldPreprocessor {
    label_v: Vocab,
    projectivize: bool,
}

impl GoldPreprocessor {
    pub fn new(label_v: Vocab) -> Self {
        GoldPreprocessor {
            label_v: label_v,
            projectivize: false,
        }
    }

    /// Lift crossing arcs before the gold annotation is built.
    pub fn projectivize(mut self, enable: bool) -> Self {
        self.projectivize = enable;
        self
    }

    pub fn label_vocab(&self) -> &Vocab {
        &self.label_v
    }

    pub fn root_label(&self) -> Index {
        self.label_v.get(ROOT_RELATION)
    }

    /// Fails with `InvalidArgument` on a head too large for `Index`.
    pub fn heads<P: Phrasal>(x: &P) -> Result<Vec<Index>, Error> {
        x.iter()
            .map(|token| {
                Index::try_from(token.head().unwrap_or(0)).map_err(|_| Error::InvalidArgument)
            })
            .collect()
    }

    pub fn gold<P: Phrasal>(&self, x: &P) -> Result<Gold, Error> {
        let mut heads = GoldPreprocessor::heads(x)?;
        if let Some(h) = heads.first_mut() {
            *h = 0;
        }
        if self.projectivize {
            heads = syntax::projectivize(&heads)?;
        }
        let labels: Vec<Index> = x.iter()
            .map(|token| self.label_v.get(token.deprel().unwrap_or(PLACEHOLDER)))
            .collect();
        Gold::new(&heads, &labels)
    }
}

impl<P: Phrasal> Preprocess<P> for GoldPreprocessor {
    type Output = Result<(P, Gold), Error>;

    fn fit_each(&mut self, x: &P) {
        for token in x.iter().skip(1) {
            self.label_v.add(token.deprel().unwrap_or(PLACEHOLDER));
        }
    }

    fn transform_each(&self, x: P) -> Self::Output {
        let gold = self.gold(&x)?;
        Ok((x, gold))
    }
}
