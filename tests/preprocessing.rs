extern crate arceager;

mod test_utils;

use arceager::lang::Sentence;
use arceager::preprocessing::{GoldPreprocessor, Preprocess, Vocab, RELATIONS};

#[test]
fn test_relations() {
    let v = Vocab::relations();
    assert_eq!(v.size(), RELATIONS.len() + 1);
    assert_eq!(v.lookup(0), Some("_"));
    assert_eq!(v.get("nsubj"), 1);
    assert_eq!(v.get("advmod"), 11);
    assert_eq!(v.get("root"), 39);
    assert_eq!(v.get("compound:prt"), 46);
    for (i, relation) in RELATIONS.iter().enumerate() {
        assert_eq!(v.lookup(i as u32 + 1), Some(*relation));
    }
    assert_eq!(v.get("obl:manner"), 0);
    assert!(!v.contains("obl:manner"));
}

#[test]
fn test_vocab_add() {
    let mut v = Vocab::relations();
    assert_eq!(v.add("nsubj"), 1);
    assert_eq!(v.add("obl:manner"), 47);
    assert_eq!(v.add("obl:manner"), 47);
    assert_eq!(v.add("orphan"), 48);
    assert_eq!(v.freq(1), Some(1));
    assert_eq!(v.freq(47), Some(2));
    assert_eq!(v.freq(0), Some(0));
    assert_eq!(v.lookup(48), Some("orphan"));
    assert_eq!(v.lookup(49), None);

    let v = Vocab::new();
    assert_eq!(v.size(), 1);
    assert_eq!(v.lookup(0), Some("<UNK>"));
}

#[test]
fn test_gold_preprocessor() {
    let sentences = test_utils::mock::provide_conll_sentences();
    let mut preprocessor = GoldPreprocessor::new(Vocab::relations());
    let golds: Vec<_> = preprocessor
        .fit_transform(sentences.into_iter())
        .map(|x| x.unwrap().1)
        .collect();
    assert_eq!(golds.len(), 3);
    assert_eq!(golds[0].heads(), &[0, 2, 0, 2, 2]);
    assert_eq!(golds[0].labels(), &[0, 1, 39, 5, 33]);
    assert_eq!(golds[2].head(9), 0);
    assert_eq!(golds[2].label(5), preprocessor.label_vocab().get("nmod:npmod"));
    assert_eq!(preprocessor.label_vocab().size(), RELATIONS.len() + 1);
    assert_eq!(preprocessor.root_label(), 39);
}

#[test]
fn test_gold_preprocessor_rejects_out_of_range_heads() {
    let sentence = Sentence::from_rows(vec![("a", "X", 0, "root"), ("b", "X", 7, "dep")]);
    let preprocessor = GoldPreprocessor::new(Vocab::relations());
    assert!(preprocessor.transform_each(sentence).is_err());
}
