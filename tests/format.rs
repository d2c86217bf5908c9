extern crate arceager;
#[macro_use]
extern crate slog;

mod test_utils;

use arceager::dataset::conll::ConllSentence;
use arceager::format::{Formatter, OutputFormat};
use arceager::lang::{Sentence, Token};
use arceager::preprocessing::{GoldPreprocessor, Vocab};
use arceager::syntax::oracle::{self, Derivation};
use arceager::syntax::transition::Edge;
use slog::{Discard, Logger};

fn derive(sentence: &Sentence<Token<'static>>, label_v: &Vocab) -> Derivation {
    let preprocessor = GoldPreprocessor::new(label_v.clone());
    let gold = preprocessor.gold(sentence).unwrap();
    let logger = Logger::root(Discard, o!());
    oracle::derive(&gold, preprocessor.root_label(), true, &logger).unwrap()
}

fn render(
    format: OutputFormat,
    sentence: &Sentence<Token<'static>>,
    derivation: &Derivation,
    label_v: &Vocab,
) -> String {
    let mut formatter = Formatter::new(vec![], format, label_v);
    formatter
        .write_sentence(1, sentence, derivation.arcs(), &derivation.steps)
        .unwrap();
    String::from_utf8(formatter.into_inner()).unwrap()
}

fn dogs_bark_loudly() -> Sentence<Token<'static>> {
    Sentence::from_rows(test_utils::mock::provide_dogs_bark_loudly())
}

#[test]
fn test_tab() {
    let label_v = Vocab::relations();
    let sentence = dogs_bark_loudly();
    let derivation = derive(&sentence, &label_v);
    assert_eq!(
        render(OutputFormat::Tab, &sentence, &derivation, &label_v),
        "Dogs\tX\t2\tnsubj\nbark\tX\t0\troot\nloudly\tX\t2\tadvmod\n\n"
    );
}

#[test]
fn test_tree() {
    let label_v = Vocab::relations();
    let sentence = dogs_bark_loudly();
    let derivation = derive(&sentence, &label_v);
    assert_eq!(
        render(OutputFormat::Tree, &sentence, &derivation, &label_v),
        "Dogs bark loudly\n\
         root(root_0, bark_2)\n  \
         nsubj(bark_2, Dogs_1)\n  \
         advmod(bark_2, loudly_3)\n"
    );
}

#[test]
fn test_actions() {
    let label_v = Vocab::relations();
    let sentence = dogs_bark_loudly();
    let derivation = derive(&sentence, &label_v);
    let expected = [
        r#"{"sentence":1,"step":0,"stack":[0],"buffer":[1,2,3],"action":"Shift","label":null,"id":0}"#,
        r#"{"sentence":1,"step":1,"stack":[1,0],"buffer":[2,3],"action":"LeftArc","label":"nsubj","id":4}"#,
        r#"{"sentence":1,"step":2,"stack":[0],"buffer":[2,3],"action":"RightArc","label":"root","id":81}"#,
        r#"{"sentence":1,"step":3,"stack":[2,0],"buffer":[3],"action":"RightArc","label":"advmod","id":25}"#,
    ];
    let output = render(OutputFormat::Actions, &sentence, &derivation, &label_v);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_root_only() {
    let label_v = Vocab::relations();
    let sentence: ConllSentence = Sentence::from_rows(Vec::<(&str, &str, usize, &str)>::new());
    let derivation = derive(&sentence, &label_v);
    assert_eq!(
        render(OutputFormat::Tab, &sentence, &derivation, &label_v),
        "\n"
    );
    assert_eq!(
        render(OutputFormat::Tree, &sentence, &derivation, &label_v),
        "\n"
    );
    assert_eq!(
        render(OutputFormat::Actions, &sentence, &derivation, &label_v),
        ""
    );
}

#[test]
fn test_tree_renders_unlisted_labels_and_cycles() {
    let mut label_v = Vocab::relations();
    let custom = label_v.add("obl:manner");
    let sentence = Sentence::from_rows(vec![
        ("a", "X", 0, "root"),
        ("b", "X", 1, "obl:manner"),
    ]);
    let arcs = [
        Edge::new(0, 1, label_v.get("root")),
        Edge::new(1, 2, custom),
        Edge::new(2, 1, label_v.get("dep")),
    ];
    let mut formatter = Formatter::new(vec![], OutputFormat::Tree, &label_v);
    formatter.write_tree(&sentence, &arcs).unwrap();
    let output = String::from_utf8(formatter.into_inner()).unwrap();
    assert_eq!(
        output,
        "a b\n\
         root(root_0, a_1)\n  \
         obl:manner(a_1, b_2)\n    \
         dep(b_2, a_1)\n"
    );
}

#[test]
fn test_tab_requires_complete_arcs() {
    let label_v = Vocab::relations();
    let sentence = dogs_bark_loudly();
    let arcs = [Edge::new(2, 1, label_v.get("nsubj"))];
    let mut formatter = Formatter::new(vec![], OutputFormat::Tab, &label_v);
    assert!(formatter.write_tab(&sentence, &arcs).is_err());
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("tab".parse::<OutputFormat>(), Ok(OutputFormat::Tab));
    assert_eq!("tree".parse::<OutputFormat>(), Ok(OutputFormat::Tree));
    assert_eq!("actions".parse::<OutputFormat>(), Ok(OutputFormat::Actions));
    assert!("json".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Tree);
}
