//! A `nom`-based tokenizer for `{{path}}` placeholders.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::anychar,
    combinator::{recognize, rest},
    sequence::{delimited, pair},
};

/// A piece of a string template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// The raw text between the braces, untrimmed.
    Placeholder(&'a str),
}

/// Splits a string template into literal runs and placeholders.
///
/// Never fails: text that does not form a placeholder (an unterminated
/// `{{` or an empty `{{}}`) comes back as literal text. Adjacent literal
/// text is returned as one maximal run.
pub fn parse_template(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut remaining = input;

    while !remaining.is_empty() {
        let offset = input.len() - remaining.len();
        if let Ok((rest, path)) = placeholder(remaining) {
            if let Some(start) = literal_start.take() {
                segments.push(Segment::Literal(&input[start..offset]));
            }
            segments.push(Segment::Placeholder(path));
            remaining = rest;
            continue;
        }
        literal_start.get_or_insert(offset);
        remaining = match literal(remaining) {
            Ok((rest, _)) => rest,
            Err(_) => "",
        };
    }

    if let Some(start) = literal_start {
        segments.push(Segment::Literal(&input[start..]));
    }
    segments
}

// --- Combinators ---

fn placeholder(input: &str) -> IResult<&str, &str> {
    delimited(tag("{{"), is_not("}"), tag("}}")).parse(input)
}

// At least one character, then everything up to the next `{{`.
fn literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(anychar, alt((take_until("{{"), rest)))).parse(input)
}
