use std::borrow::Borrow;
use std::collections::HashMap;
use std::rc::Rc;

/// Universal Dependencies (v1) relation names in display order.
pub static RELATIONS: [&'static str; 46] = [
    "nsubj",
    "csubj",
    "nsubjpass",
    "csubjpass",
    "dobj",
    "iobj",
    "ccomp",
    "xcomp",
    "nmod",
    "advcl",
    "advmod",
    "neg",
    "aux",
    "auxpass",
    "cop",
    "mark",
    "discourse",
    "vocative",
    "expl",
    "nummod",
    "acl",
    "amod",
    "appos",
    "det",
    "case",
    "compound",
    "mwe",
    "goeswith",
    "name",
    "foreign",
    "conj",
    "cc",
    "punct",
    "list",
    "parataxis",
    "remnant",
    "dislocated",
    "reparandum",
    "root",
    "dep",
    "nmod:npmod",
    "nmod:tmod",
    "nmod:poss",
    "acl:relcl",
    "cc:preconj",
    "compound:prt",
];

pub static PLACEHOLDER: &'static str = "_";
pub static ROOT_RELATION: &'static str = "root";

const DEFAULT_CAPACITY: usize = 64;
static UNKNOWN_TOKEN: &'static str = "<UNK>";

/// String interner; id 0 is the default token returned for unknown words.
#[derive(Debug, Clone)]
pub struct Vocab {
    s2i: HashMap<Rc<str>, u32>,
    i2s: Vec<Rc<str>>,
    freq: Vec<u32>,
}

impl Vocab {
    pub fn new() -> Self {
        Self::with_capacity_and_default_token(DEFAULT_CAPACITY, UNKNOWN_TOKEN)
    }

    pub fn with_capacity_and_default_token<S: AsRef<str>>(capacity: usize, default_token: S) -> Self {
        let mut v = Vocab {
            s2i: HashMap::with_capacity(capacity),
            i2s: Vec::with_capacity(capacity),
            freq: Vec::with_capacity(capacity),
        };
        v.register(default_token.as_ref());
        v
    }

    /// Label vocabulary: `_` at id 0 followed by `RELATIONS` in order.
    pub fn relations() -> Self {
        let mut v = Self::with_capacity_and_default_token(DEFAULT_CAPACITY, PLACEHOLDER);
        for relation in RELATIONS.iter() {
            v.register(relation);
        }
        v
    }

    fn register(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.s2i.get(word) {
            return id;
        }
        let id = self.i2s.len() as u32;
        let rc: Rc<str> = Rc::from(word);
        self.i2s.push(rc.clone());
        self.s2i.insert(rc, id);
        self.freq.push(0);
        id
    }

    /// Returns the id of `word`, adding it on first sight and counting the occurrence.
    pub fn add<S: AsRef<str>>(&mut self, word: S) -> u32 {
        let id = self.register(word.as_ref());
        self.freq[id as usize] += 1;
        id
    }

    pub fn get<Q: Borrow<str> + ?Sized>(&self, word: &Q) -> u32 {
        self.s2i.get(word.borrow()).map(|v| *v).unwrap_or(0)
    }

    pub fn contains<Q: Borrow<str> + ?Sized>(&self, word: &Q) -> bool {
        self.s2i.contains_key(word.borrow())
    }

    pub fn freq(&self, id: u32) -> Option<u32> {
        self.freq.get(id as usize).map(|v| *v)
    }

    pub fn lookup(&self, id: u32) -> Option<&str> {
        self.i2s.get(id as usize).map(|v| &**v)
    }

    pub fn size(&self) -> usize {
        self.i2s.len()
    }
}

impl Default for Vocab {
    fn default() -> Self {
        Vocab::new()
    }
}
