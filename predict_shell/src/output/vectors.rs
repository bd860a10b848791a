// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vector dictionary and ranking tables.

use lexicon_store::{distance, Axis, Lexicon, Vector};
use word_predictor::Candidate;

use crate::output::TableBuilder;
use crate::style::{styled, Icons, Theme};

fn vector_header() -> String {
    format!("3D Vector ({})", Axis::ALL.map(Axis::label).join(", "))
}

/// Formats the lexicon as a table, marking the predicted word.
///
/// With a target, a distance column is added.
#[must_use]
pub fn format_vector_table(
    lexicon: &Lexicon,
    highlighted: Option<&str>,
    target: Option<&Vector>,
    theme: &Theme,
    icons: &Icons,
) -> String {
    let mut output = format!(
        "{}\n",
        styled("Vector Dictionary (Simulated Embeddings)", theme.header)
    );

    if lexicon.is_empty() {
        output.push_str(&styled("(no words)", theme.muted));
        return output;
    }

    let vector_col = vector_header();
    let mut builder = TableBuilder::new();
    if target.is_some() {
        builder.add_header(vec!["Word", vector_col.as_str(), "Distance"]);
    } else {
        builder.add_header(vec!["Word", vector_col.as_str()]);
    }

    for (word, vector) in lexicon.iter() {
        let chosen = highlighted == Some(word);
        let mut row = if chosen {
            vec![
                styled(format!("{} {word}", icons.arrow), theme.highlight),
                styled(vector, theme.highlight),
            ]
        } else {
            vec![word.to_string(), styled(vector, theme.number)]
        };
        if let Some(t) = target {
            let d = format!("{:.4}", distance(t, vector));
            row.push(if chosen {
                styled(d, theme.highlight)
            } else {
                styled(d, theme.muted)
            });
        }
        builder.add_row(row);
    }

    output.push_str(&builder.build(theme));
    output
}

/// Formats ranked candidates for a prompt, nearest first.
#[must_use]
pub fn format_rank(prompt: &str, candidates: &[Candidate], theme: &Theme) -> String {
    if candidates.is_empty() {
        return styled("(no candidates)", theme.muted);
    }

    let mut output = format!(
        "{} {}\n",
        styled("Ranking for", theme.header),
        styled(format!("\"{}\"", prompt.trim()), theme.string)
    );

    let mut builder = TableBuilder::new();
    builder.add_header(vec!["#", "Word", "Vector", "Distance"]);
    for (i, c) in candidates.iter().enumerate() {
        let word = if i == 0 {
            styled(&c.word, theme.highlight)
        } else {
            c.word.clone()
        };
        builder.add_row(vec![
            styled(i + 1, theme.muted),
            word,
            styled(c.vector, theme.number),
            styled(format!("{:.4}", c.distance), theme.number),
        ]);
    }

    output.push_str(&builder.build(theme));
    output
}
