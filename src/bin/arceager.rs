#[macro_use]
extern crate arceager;
#[macro_use]
extern crate slog;
extern crate structopt;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use arceager::app::prelude::*;
use arceager::dataset::conll::{Dialect, Reader};
use arceager::dataset::Loader;
use arceager::format::{Formatter, OutputFormat};
use arceager::lang::Phrasal;
use arceager::preprocessing::{GoldPreprocessor, Vocab};
use arceager::syntax;
use arceager::syntax::oracle;
use slog::Logger;

static LEGACY_TAB_MODE: &'static str = "tab";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "arceager",
    about = "Derives arc-eager oracle transitions from a dependency treebank"
)]
struct Args {
    #[structopt(flatten)]
    common: CommonArgs,
    /// Legacy mode switch; `tab` selects the tabular output
    #[structopt(name = "MODE")]
    mode: Option<String>,
    /// Output format: tab, tree or actions
    #[structopt(short = "f", long = "format", default_value = "tree")]
    format: OutputFormat,
    /// Input dialect: conll, positional or auto
    #[structopt(long = "dialect", default_value = "auto")]
    dialect: Dialect,
    /// Lift crossing arcs before deriving transitions
    #[structopt(long = "projectivize")]
    projectivize: bool,
    /// A treebank file; stdin is read when omitted
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    input: Option<PathBuf>,
}

impl Args {
    fn output_format(&self) -> Result<OutputFormat, String> {
        match self.mode {
            None => Ok(self.format),
            Some(ref mode) if mode == LEGACY_TAB_MODE => Ok(OutputFormat::Tab),
            Some(ref mode) => Err(format!("unknown mode: `{}`", mode)),
        }
    }
}

#[derive(Debug, Default)]
struct Summary {
    sentences: usize,
    tokens: usize,
    transitions: usize,
    orphans: usize,
    non_projective: usize,
}

fn run<R: BufRead, W: Write>(
    input: R,
    out: W,
    format: OutputFormat,
    args: &Args,
    logger: &Logger,
) -> Result<Summary, Box<dyn Error + Send + Sync>> {
    let mut reader = Reader::new(input)
        .dialect(args.dialect)
        .logger(logger.new(o!("component" => "reader")));
    let preprocessor = GoldPreprocessor::new(Vocab::relations()).projectivize(args.projectivize);
    let mut loader = Loader::new(preprocessor);
    let dataset = loader.read_from(&mut reader)?;
    info!(logger, "read {} sentences", dataset.len());

    let preprocessor = loader.preprocessor();
    let label_v = preprocessor.label_vocab();
    let root_label = preprocessor.root_label();
    debug!(logger, "label vocabulary size: {}", label_v.size());

    let mut formatter = Formatter::new(out, format, label_v);
    let mut summary = Summary::default();
    for (i, item) in dataset.into_iter().enumerate() {
        let sentence_id = i + 1;
        let (sentence, gold) = item.map_err(|e| format!("sentence {}: {}", sentence_id, e))?;
        let sentence_logger = logger.new(o!("sentence" => sentence_id));
        let record_steps = format == OutputFormat::Actions;
        let derivation = oracle::derive(&gold, root_label, record_steps, &sentence_logger)
            .map_err(|e| format!("sentence {}: {}", sentence_id, e))?;
        let num_words = sentence.len() - 1;
        debug!(
            sentence_logger,
            "derived";
            "tokens" => num_words,
            "transitions" => derivation.num_transitions(),
            "orphans" => derivation.orphans.len()
        );

        summary.sentences += 1;
        summary.tokens += num_words;
        summary.transitions += derivation.num_transitions();
        summary.orphans += derivation.orphans.len();
        if !syntax::is_projective(&GoldPreprocessor::heads(&sentence)?) {
            summary.non_projective += 1;
        }

        formatter.write_sentence(sentence_id, &sentence, derivation.arcs(), &derivation.steps)?;
    }
    formatter.flush()?;
    Ok(summary)
}

main!(|args: Args, context: Context| {
    let logger = context.logger;
    let format = args.output_format()?;
    info!(
        logger,
        "format: {}, dialect: {}, projectivize: {}", format, args.dialect, args.projectivize
    );

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    let summary = match args.input {
        Some(ref path) => {
            info!(logger, "input: {}", path.display());
            let file = File::open(path)?;
            run(BufReader::new(file), out, format, &args, &logger)?
        }
        None => {
            info!(logger, "input: <stdin>");
            let stdin = io::stdin();
            let input = stdin.lock();
            run(input, out, format, &args, &logger)?
        }
    };

    info!(
        logger,
        "processed {} sentences", summary.sentences;
        "tokens" => summary.tokens,
        "transitions" => summary.transitions,
        "orphans" => summary.orphans,
        "non_projective" => summary.non_projective
    );
    Ok(())
});
