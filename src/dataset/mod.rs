use std::io::Result as IOResult;
use std::marker::PhantomData;
use std::ops;
use std::path::Path;
use std::slice::Iter;

use crate::io::{FileOpen, Read};
use crate::preprocessing::Preprocess;

pub mod conll;

#[derive(Debug)]
pub struct Dataset<T> {
    items: Vec<T>,
}

impl<T> Dataset<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        Dataset { items: items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Dataset<T> {
    type Item = T;
    type IntoIter = ::std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> ops::Index<usize> for Dataset<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        ops::Index::index(&self.items, index)
    }
}

pub trait Load {
    type Item;

    fn load<P: AsRef<Path>>(&mut self, file: P) -> IOResult<Dataset<Self::Item>>;
}

/// Reads every item from a reader and runs it through a preprocessor.
///
/// While unfixed (the default) the preprocessor is fitted on the items first.
pub struct Loader<R, P> {
    _reader: PhantomData<R>,
    preprocessor: P,
    enable_fit: bool,
}

impl<T, R: Read<Item = T>, P: Preprocess<T>> Loader<R, P> {
    pub fn new(preprocessor: P) -> Self {
        Loader {
            _reader: PhantomData,
            preprocessor: preprocessor,
            enable_fit: true,
        }
    }

    pub fn unfix(&mut self) {
        self.enable_fit = true;
    }

    pub fn fix(&mut self) {
        self.enable_fit = false;
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    pub fn read_from(&mut self, reader: &mut R) -> IOResult<Dataset<P::Output>> {
        let mut buf = vec![];
        reader.read(&mut buf)?;
        if self.enable_fit {
            for x in &buf {
                self.preprocessor.fit_each(x);
            }
        }
        let items = self.preprocessor.transform(buf.into_iter()).collect();
        Ok(Dataset::from_items(items))
    }
}

impl<T, P: Preprocess<T>, R: FileOpen + Read<Item = T>> Load for Loader<R, P> {
    type Item = P::Output;

    fn load<PATH: AsRef<Path>>(&mut self, file: PATH) -> IOResult<Dataset<Self::Item>> {
        let mut reader = R::open(file)?;
        self.read_from(&mut reader)
    }
}
