//! A `nom`-based tokenizer for dotted path strings.
use crate::segment::Segment;
use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
};

/// Splits `input` on `separator`. Every token becomes a [`Segment::Key`];
/// numeric-looking tokens are not converted to indices.
///
/// The empty string is the empty path. Empty tokens are kept, so `"a..b"`
/// has three segments.
pub fn split_segments(input: &str, separator: char) -> Vec<Segment> {
    if input.is_empty() {
        return Vec::new();
    }
    match tokens(input, separator) {
        Ok((_, tokens)) => tokens.into_iter().map(Segment::from).collect(),
        // Every character is either a separator or part of a token, so the
        // tokenizer cannot reject input.
        Err(_) => vec![Segment::from(input)],
    }
}

fn tokens(input: &str, separator: char) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(
        char(separator),
        take_till(move |c| c == separator),
    ))
    .parse(input)
}
