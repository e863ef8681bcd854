use super::error::ParseError;
use crate::ir::{PatternSegment, Substitution, SubstitutionPattern};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::{map, rest, verify},
    multi::many0,
    sequence::delimited,
};

enum RawSegment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

pub fn parse_pattern(input: &str) -> Result<SubstitutionPattern, ParseError> {
    let (remaining, segments) =
        segments(input).map_err(|_| ParseError::new(format!("invalid pattern \"{}\"", input)))?;

    if !remaining.is_empty() {
        return Err(ParseError::new(format!(
            "unterminated substitution in \"{}\"",
            input
        )));
    }

    Ok(SubstitutionPattern::new(
        segments
            .into_iter()
            .map(|segment| match segment {
                RawSegment::Literal(value) => Ok(PatternSegment::Literal(value.into())),
                RawSegment::Placeholder(name) => Substitution::from_name(name)
                    .map(PatternSegment::Substitution)
                    .ok_or_else(|| {
                        ParseError::new(format!(
                            "unknown substitution \"{{{{{}}}}}\" in \"{}\"",
                            name, input
                        ))
                    }),
            })
            .collect::<Result<_, _>>()?,
    ))
}

fn segments(input: &str) -> IResult<&str, Vec<RawSegment<'_>>> {
    many0(alt((
        map(
            delimited(tag("{{"), take_until("}}"), tag("}}")),
            RawSegment::Placeholder,
        ),
        map(
            alt((
                verify(take_until("{{"), |string: &str| !string.is_empty()),
                verify(rest, |string: &str| {
                    !string.is_empty() && !string.contains("{{")
                }),
            )),
            RawSegment::Literal,
        ),
    )))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_literal() {
        assert_eq!(
            parse_pattern("foo"),
            Ok(SubstitutionPattern::new(vec![PatternSegment::Literal(
                "foo".into()
            )]))
        );
    }

    #[test]
    fn parse_empty_pattern() {
        assert_eq!(parse_pattern(""), Ok(SubstitutionPattern::new(vec![])));
    }

    #[test]
    fn parse_substitutions() {
        assert_eq!(
            parse_pattern("{{target_out_dir}}/{{source_name_part}}.o"),
            Ok(SubstitutionPattern::new(vec![
                PatternSegment::Substitution(Substitution::TargetOutDir),
                PatternSegment::Literal("/".into()),
                PatternSegment::Substitution(Substitution::SourceNamePart),
                PatternSegment::Literal(".o".into()),
            ]))
        );
    }

    #[test]
    fn fail_on_unknown_substitution() {
        assert_eq!(
            parse_pattern("cc {{foo}}"),
            Err(ParseError::new(
                "unknown substitution \"{{foo}}\" in \"cc {{foo}}\""
            ))
        );
    }

    #[test]
    fn fail_on_unterminated_substitution() {
        assert_eq!(
            parse_pattern("cc {{source"),
            Err(ParseError::new(
                "unterminated substitution in \"cc {{source\""
            ))
        );
    }

    #[test]
    fn format_parsed_pattern() {
        let input = "{{output}}{{output_extension}} -L{{root_out_dir}}";

        assert_eq!(
            parse_pattern(input).map(|pattern| pattern.to_string()),
            Ok(input.into())
        );
    }
}
