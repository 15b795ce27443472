//! Implementation of the `seedling names` command.

use serde::Serialize;

use seedling_core::{domain::Name, error::SeedlingError};

use crate::{
    cli::{NamesArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct NameForms {
    identifier: String,
    tokens: Vec<String>,
    snake: String,
    pascal: String,
}

impl NameForms {
    fn of(identifier: &str) -> CliResult<Self> {
        let name = Name::parse(identifier).map_err(SeedlingError::from)?;
        Ok(Self {
            identifier: identifier.to_owned(),
            tokens: name.tokens().to_vec(),
            snake: name.snake(),
            pascal: name.pascal(),
        })
    }
}

pub fn execute(args: NamesArgs, output: OutputManager) -> CliResult<()> {
    let forms = args
        .identifiers
        .iter()
        .map(|ident| NameForms::of(ident))
        .collect::<CliResult<Vec<_>>>()?;

    if output.format() == OutputFormat::Json {
        return output.json(&forms);
    }

    for form in &forms {
        output.header(&form.identifier)?;
        output.print(&format!("  tokens: {}", form.tokens.join(" ")))?;
        output.print(&format!("  snake:  {}", form.snake))?;
        output.print(&format!("  pascal: {}", form.pascal))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_for_camel_case() {
        let forms = NameForms::of("HelloWorld").unwrap();
        assert_eq!(forms.tokens, ["hello", "world"]);
        assert_eq!(forms.snake, "hello_world");
        assert_eq!(forms.pascal, "HelloWorld");
    }

    #[test]
    fn empty_identifier_is_user_error() {
        let err = NameForms::of("").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
