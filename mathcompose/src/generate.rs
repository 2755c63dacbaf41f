use crate::{
    emit::{compositions, Line},
    names::CharacterNames,
    sequence::SequenceSet,
    tables::Tables,
};
use anyhow::*;
use log::{debug, info};
use std::io::Write;
use unic_ucd_block::Block;

#[derive(Copy, Clone, Default, Debug)]
pub struct GenerateOptions {
    /// Fail once generation is finished if any character could not be found.
    pub strict: bool,
}

/// Counts of the rules written by a run.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Summary {
    pub mapped: usize,
    pub missing: usize,
}

/// Writes the compose rules for every group and font in a set of tables.
pub struct Generator<'a, N: ?Sized> {
    tables: &'a Tables,
    names: &'a N,
    options: GenerateOptions,
}
impl<'a, N: CharacterNames + ?Sized + 'a> Generator<'a, N> {
    pub fn new(tables: &'a Tables, names: &'a N) -> Self {
        Generator { tables, names, options: GenerateOptions::default() }
    }

    pub fn options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Every line of the output, in order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        let (tables, names) = (self.tables, self.names);
        tables.groups.iter().flat_map(move |group| {
            debug!("Generating {} group (indicator: {:?})", group.case, group.indicator);
            group.fonts.iter().flat_map(move |font| {
                compositions(names, font, group.indicator, group.case, &group.alphabet)
            })
        })
    }

    /// Writes every line to `out` as it is generated. Diagnostics for characters that could
    /// not be found are written to `diag`.
    ///
    /// Fails if two rules would collide, as the later one would never be reachable.
    pub fn write_to<W: Write + ?Sized, E: Write + ?Sized>(
        &self,
        out: &mut W,
        diag: &mut E,
    ) -> Result<Summary> {
        let mut sequences = SequenceSet::default();
        let mut summary = Summary::default();
        for line in self.lines() {
            match &line {
                Line::Header { .. } => {}
                Line::Mapping { sequence, character } => {
                    sequences.insert(sequence.clone())?;
                    debug!("{sequence} -> {character} ({})", block_name(*character));
                    summary.mapped += 1;
                }
                Line::Placeholder { .. } => summary.missing += 1,
            }
            if let Some(diagnostic) = line.diagnostic() {
                writeln!(diag, "{diagnostic}")?;
            }
            writeln!(out, "{line}")?;
        }
        info!("Wrote {} rules, {} characters not found.", summary.mapped, summary.missing);

        if self.options.strict {
            ensure!(summary.missing == 0, "{} characters could not be found.", summary.missing);
        }
        Ok(summary)
    }
}

fn block_name(ch: char) -> &'static str {
    match Block::of(ch) {
        None => "Unknown Block",
        Some(block) => block.name,
    }
}
