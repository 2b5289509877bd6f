//! Form validation command.

use anyhow::{bail, Result};
use bakery_commerce::forms::{contact_form, review_form, validate, FormInput};

use super::{FormArgs, FormKind};
use crate::context::Context;

/// Run the form command.
pub async fn run(args: FormArgs, ctx: &Context) -> Result<()> {
    let input = parse_fields(&args.fields)?;
    let specs = match args.form {
        FormKind::Review => review_form(),
        FormKind::Contact => contact_form(),
    };

    let violations = validate(&input, &specs);

    if ctx.output.is_json() {
        ctx.output.json(&violations);
    } else {
        for violation in &violations {
            ctx.output.error(&violation.message);
        }
    }

    if !violations.is_empty() {
        bail!("Form has {} problem(s)", violations.len());
    }

    ctx.output.success("Form is valid");
    Ok(())
}

fn parse_fields(fields: &[String]) -> Result<FormInput> {
    let mut input = FormInput::new();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            bail!("Expected FIELD=VALUE, got '{}'", field);
        };
        input.insert(key.trim().to_string(), value.to_string());
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_keeps_equals_in_value() {
        let input = parse_fields(&["comment=a=b".to_string(), "name = Ana".to_string()]).unwrap();
        assert_eq!(input["comment"], "a=b");
        assert_eq!(input["name"], " Ana");
    }

    #[test]
    fn test_parse_fields_requires_equals() {
        assert!(parse_fields(&["rating".to_string()]).is_err());
    }
}
