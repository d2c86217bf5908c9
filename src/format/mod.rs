use std::fmt;
use std::io::{self as std_io, Write};
use std::str::FromStr;

use crate::io::{self as mod_io, SerializeFormat, Serializer};
use crate::lang::{Phrasal, Tokenized};
use crate::preprocessing::{Vocab, PLACEHOLDER};
use crate::syntax::oracle::Step;
use crate::syntax::transition::{Edge, Index};

static INDENT: &'static str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `form, tag, head, label` per word.
    Tab,
    /// Indented arcs reachable from the root.
    Tree,
    /// One JSON object per oracle transition.
    Actions,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match *self {
            OutputFormat::Tab => "tab",
            OutputFormat::Tree => "tree",
            OutputFormat::Actions => "actions",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Tree
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(OutputFormat::Tab),
            "tree" => Ok(OutputFormat::Tree),
            "actions" => Ok(OutputFormat::Actions),
            _ => Err(format!("unknown output format: `{}`", s)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionRecord<'a> {
    pub sentence: usize,
    pub step: usize,
    pub stack: &'a [Index],
    pub buffer: &'a [Index],
    pub action: &'static str,
    pub label: Option<&'a str>,
    pub id: u32,
}

fn invalid_data<S: Into<String>>(message: S) -> std_io::Error {
    std_io::Error::new(std_io::ErrorKind::InvalidData, message.into())
}

/// Renders finished analyses in the selected output format.
pub struct Formatter<'v, W> {
    out: W,
    format: OutputFormat,
    label_v: &'v Vocab,
}

impl<'v, W: std_io::Write> Formatter<'v, W> {
    pub fn new(out: W, format: OutputFormat, label_v: &'v Vocab) -> Self {
        Formatter {
            out: out,
            format: format,
            label_v: label_v,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, id: Index) -> &'v str {
        self.label_v.lookup(id).unwrap_or(PLACEHOLDER)
    }

    /// `sentence_id` is the 1-based position of the sentence in the input.
    pub fn write_sentence<P: Phrasal>(
        &mut self,
        sentence_id: usize,
        sentence: &P,
        arcs: &[Edge],
        steps: &[Step],
    ) -> std_io::Result<()> {
        match self.format {
            OutputFormat::Tab => self.write_tab(sentence, arcs),
            OutputFormat::Tree => self.write_tree(sentence, arcs),
            OutputFormat::Actions => self.write_actions(sentence_id, steps),
        }
    }

    pub fn write_tab<P: Phrasal>(&mut self, sentence: &P, arcs: &[Edge]) -> std_io::Result<()> {
        let n = sentence.len();
        let mut heads: Vec<Option<(Index, Index)>> = vec![None; n];
        for arc in arcs {
            if let Some(slot) = heads.get_mut(arc.dependent as usize) {
                *slot = Some((arc.head, arc.label));
            }
        }
        for (i, token) in sentence.iter().enumerate().skip(1) {
            let (head, label) = heads[i]
                .ok_or_else(|| invalid_data(format!("word {} has no head", i)))?;
            let label = self.label(label);
            writeln!(
                self.out,
                "{}\t{}\t{}\t{}",
                token.form(),
                token.postag().unwrap_or(PLACEHOLDER),
                head,
                label
            )?;
        }
        writeln!(self.out)
    }

    pub fn write_tree<P: Phrasal>(&mut self, sentence: &P, arcs: &[Edge]) -> std_io::Result<()> {
        let n = sentence.len();
        writeln!(self.out, "{}", sentence.raw())?;
        let mut children: Vec<Vec<&Edge>> = vec![vec![]; n];
        for arc in arcs {
            if (arc.head as usize) < n && (arc.dependent as usize) < n {
                children[arc.head as usize].push(arc);
            }
        }
        // a word has one head, so the label only breaks ties on malformed arc sets.
        for edges in children.iter_mut() {
            edges.sort_by_key(|arc| (arc.dependent, arc.label));
        }

        let form = |index: Index| sentence.token(index as usize).map(|t| t.form()).unwrap_or("");
        let mut visited = vec![false; n];
        if n > 0 {
            visited[0] = true;
        }
        let mut agenda: Vec<(&Edge, usize)> = children
            .get(0)
            .map(|edges| edges.iter().rev().map(|&arc| (arc, 0)).collect())
            .unwrap_or_default();
        while let Some((arc, depth)) = agenda.pop() {
            let label = self.label(arc.label);
            writeln!(
                self.out,
                "{}{}({}_{}, {}_{})",
                INDENT.repeat(depth),
                label,
                form(arc.head),
                arc.head,
                form(arc.dependent),
                arc.dependent
            )?;
            let dependent = arc.dependent as usize;
            if !visited[dependent] {
                visited[dependent] = true;
                agenda.extend(children[dependent].iter().rev().map(|&c| (c, depth + 1)));
            }
        }
        Ok(())
    }

    pub fn write_actions(&mut self, sentence_id: usize, steps: &[Step]) -> std_io::Result<()> {
        let records: Vec<ActionRecord> = steps
            .iter()
            .map(|step| {
                let action = step.action_type();
                ActionRecord {
                    sentence: sentence_id,
                    step: step.step,
                    stack: &step.stack,
                    buffer: &step.buffer,
                    action: action.name(),
                    label: action.label().map(|l| self.label(l)),
                    id: step.action,
                }
            })
            .collect();
        let mut serializer = Serializer::new(&mut self.out, SerializeFormat::Json);
        mod_io::Write::write(&mut serializer, &records)?;
        Ok(())
    }

    pub fn flush(&mut self) -> std_io::Result<()> {
        self.out.flush()
    }
}
