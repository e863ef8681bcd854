use super::error::ParseError;
use crate::ir::{Label, SourceDir, SourceFile};
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while1},
    combinator::{all_consuming, opt},
    sequence::{delimited, preceded},
};

type RawLabel<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>);

pub fn parse_label(
    input: &str,
    current_directory: &SourceDir,
    current_toolchain: Option<&Label>,
) -> Result<Label, ParseError> {
    let error = || ParseError::new(format!("invalid label \"{}\"", input));
    let (_, (directory, name, toolchain)) = all_consuming(label).parse(input).map_err(|_| error())?;

    if directory.is_none() && name.is_none() {
        return Err(error());
    }

    let directory = match directory {
        Some(directory) => resolve_directory(directory, current_directory),
        None => current_directory.clone(),
    };
    let name = match name {
        Some(name) => name.to_owned(),
        None => directory
            .value()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(error)?
            .to_owned(),
    };
    let toolchain = match toolchain {
        Some(toolchain) => Some(parse_label(toolchain, current_directory, None)?),
        None => current_toolchain.cloned(),
    };

    Ok(Label::new(directory, name, toolchain))
}

pub fn resolve_directory(path: &str, current_directory: &SourceDir) -> SourceDir {
    SourceDir::new(
        SourceFile::resolve(
            &(path.trim_end_matches('/').to_owned() + "/"),
            current_directory,
        )
        .value(),
    )
}

fn label(input: &str) -> IResult<&str, RawLabel<'_>> {
    (
        opt(take_while1(|character: char| !":()".contains(character))),
        opt(preceded(
            tag(":"),
            take_while1(|character: char| !":()/".contains(character)),
        )),
        opt(delimited(
            tag("("),
            take_while1(|character: char| character != ')'),
            tag(")"),
        )),
    )
        .parse(input)
}
