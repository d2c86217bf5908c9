extern crate arceager;
extern crate tempfile;

mod test_utils;

use std::fs::File;
use std::io::{self, Cursor, Write};

use arceager::dataset::conll::{self, Dialect, Reader};
use arceager::dataset::{Load, Loader};
use arceager::io::prelude::*;
use arceager::lang::prelude::*;
use arceager::preprocessing::{GoldPreprocessor, Vocab};
use tempfile::NamedTempFile;

fn read_all(text: &str, dialect: Dialect) -> io::Result<Vec<conll::ConllSentence>> {
    let mut reader = Reader::new(Cursor::new(text)).dialect(dialect);
    let mut buf = vec![];
    reader.read(&mut buf)?;
    Ok(buf)
}

#[test]
fn test_read_conll() {
    let sentences = test_utils::mock::provide_conll_sentences();
    assert_eq!(sentences.len(), 3);
    let lens: Vec<usize> = sentences.iter().map(|s| s.len()).collect();
    assert_eq!(lens, vec![5, 9, 19]);

    let s = &sentences[0];
    assert_eq!(s.raw(), "John loves Mary .");
    let root = s.token(0).unwrap();
    assert_eq!(root.form(), "root");
    assert_eq!(root.postag(), Some("root"));
    assert_eq!(root.head(), Some(0));
    assert_eq!(s[1].form(), "John");
    assert_eq!(s[1].postag(), Some("PROPN"));
    assert_eq!(s[1].head(), Some(2));
    assert_eq!(s[1].deprel(), Some("nsubj"));
    assert_eq!(s[2].head(), Some(0));
    assert_eq!(s[2].deprel(), Some("root"));
}

#[test]
fn test_read_read_upto() {
    let mut reader = Reader::new(Cursor::new(test_utils::mock::CONLL_TEXT));
    let mut buf = vec![];
    assert_eq!(reader.read_upto(2, &mut buf).unwrap(), 2);
    assert_eq!(buf.len(), 2);
    assert_eq!(buf[1].raw(), "No , it was n't Black Monday .");
}

#[test]
fn test_skip_comments_and_short_records() {
    let text = "# a comment\n1 Dogs _ X _ _ 2 nsubj\n2 bark\n3 bark _ X _ _ 0 root\n\n\n\n";
    let sentences = read_all(text, Dialect::Auto).unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].raw(), "Dogs bark");
    assert_eq!(sentences[0][2].head(), Some(0));
}

#[test]
fn test_positional_dialect() {
    let text = "1 Dogs 2 nsubj\n2 bark 0 root\n3 loudly 2 advmod\n";
    let sentences = read_all(text, Dialect::Positional).unwrap();
    assert_eq!(sentences.len(), 1);
    let s = &sentences[0];
    assert_eq!(s[1].head(), Some(2));
    assert_eq!(s[1].deprel(), Some("nsubj"));
    assert_eq!(s[3].form(), "loudly");
    assert_eq!(s[3].deprel(), Some("advmod"));

    let text = "1 Dogs two nsubj\n";
    let err = read_all(text, Dialect::Positional).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_positional_placeholder_head() {
    let sentences = read_all("1 Dogs _ X\n2 bark _ X\n", Dialect::Auto).unwrap();
    assert_eq!(sentences.len(), 1);
    let heads: Vec<Option<usize>> = sentences[0].iter().map(|t| t.head()).collect();
    assert_eq!(heads, vec![Some(0), Some(0), Some(0)]);
    assert_eq!(sentences[0][1].deprel(), Some("X"));

    let sentences = read_all("1 Dogs _ X\n", Dialect::Positional).unwrap();
    assert_eq!(sentences[0][1].head(), Some(0));
}

#[test]
fn test_auto_dialect() {
    let text = "\
1 Dogs 2 nsubj
2 bark 0 root

1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_
";
    let sentences = read_all(text, Dialect::Auto).unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0][1].head(), Some(2));
    assert_eq!(sentences[0][1].deprel(), Some("nsubj"));
    assert_eq!(sentences[1][1].head(), Some(2));
    assert_eq!(sentences[1][1].postag(), Some("NOUN"));

    let records = vec![conll::parse_record("1 Dogs 2 nsubj").unwrap()];
    assert_eq!(Dialect::Auto.resolve(&records), Dialect::Positional);
}

#[test]
fn test_conll_dialect_requires_gold_fields() {
    let text = "1 Dogs 2 nsubj\n";
    let err = read_all(text, Dialect::Conll).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_dialect_from_str() {
    assert_eq!("conll".parse::<Dialect>(), Ok(Dialect::Conll));
    assert_eq!("positional".parse::<Dialect>(), Ok(Dialect::Positional));
    assert_eq!("auto".parse::<Dialect>(), Ok(Dialect::Auto));
    assert!("tsv".parse::<Dialect>().is_err());
    assert_eq!(Dialect::default(), Dialect::Auto);
}

static UNKNOWN_LABEL_TEXT: &'static str = "\
1\tDogs\tdog\tNOUN\tNNS\t_\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_
3\tloudly\tloudly\tADV\tRB\t_\t2\tobl:manner\t_\t_
";

#[test]
fn test_loader() {
    let mut tmpfile = NamedTempFile::new().unwrap();
    write!(tmpfile.as_file_mut(), "{}", UNKNOWN_LABEL_TEXT).unwrap();

    let preprocessor = GoldPreprocessor::new(Vocab::relations());
    let mut loader = Loader::<Reader<io::BufReader<File>>, _>::new(preprocessor);
    loader.fix();
    let dataset = loader.load(tmpfile.path()).unwrap();
    assert_eq!(dataset.len(), 1);
    let (ref sentence, ref gold) = *dataset[0].as_ref().unwrap();
    assert_eq!(sentence.raw(), "Dogs bark loudly");
    assert_eq!(gold.heads(), &[0, 2, 0, 2]);
    assert_eq!(gold.labels(), &[0, 1, 39, 0]);

    loader.unfix();
    let dataset = loader.load(tmpfile.path()).unwrap();
    let (_, ref gold) = *dataset[0].as_ref().unwrap();
    assert_eq!(gold.labels(), &[0, 1, 39, 47]);
    let label_v = loader.preprocessor().label_vocab();
    assert_eq!(label_v.lookup(47), Some("obl:manner"));
    assert_eq!(label_v.size(), 48);
}

#[test]
fn test_loader_projectivize() {
    let text = "\
1 a 3 dep
2 b 4 dep
3 c 0 root
4 d 3 dep
";
    let preprocessor = GoldPreprocessor::new(Vocab::relations()).projectivize(true);
    let mut loader = Loader::new(preprocessor);
    let mut reader = Reader::new(Cursor::new(text));
    let dataset = loader.read_from(&mut reader).unwrap();
    let (_, ref gold) = *dataset[0].as_ref().unwrap();
    assert_eq!(gold.heads(), &[0, 3, 3, 0, 3]);
}
