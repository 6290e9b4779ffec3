//! `${variable}` template expansion.

use crate::error::TemplateError;

/// Expand `${name}` placeholders in `template` using the given bindings.
///
/// Variable names match `[A-Za-z_][A-Za-z0-9_]*`. A `$` not followed by
/// `{` is literal text. Unknown variables and unterminated placeholders
/// are errors.
///
/// # Examples
///
/// ```
/// use temblor_core::expand_template;
///
/// let rundir = expand_template(
///     "runs/${event_name}.run",
///     &[("event_name", "ev001")],
/// ).unwrap();
/// assert_eq!(rundir, "runs/ev001.run");
/// ```
pub fn expand_template(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| TemplateError::Malformed {
            detail: format!("unterminated placeholder in '{template}'"),
        })?;
        let name = &after[..end];
        if !is_valid_name(name) {
            return Err(TemplateError::Malformed {
                detail: format!("invalid variable name '{name}' in '{template}'"),
            });
        }
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| TemplateError::MissingVariable {
                name: name.to_string(),
            })?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_single_variable() {
        let out = expand_template("${a}", &[("a", "x")]).unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn expands_repeated_and_mixed_text() {
        let out = expand_template(
            "runs/${event_name}/${event_name}_${kind}",
            &[("event_name", "ev001"), ("kind", "final")],
        )
        .unwrap();
        assert_eq!(out, "runs/ev001/ev001_final");
    }

    #[test]
    fn lone_dollar_is_literal() {
        let out = expand_template("cost: 5$ up", &[]).unwrap();
        assert_eq!(out, "cost: 5$ up");
    }

    #[test]
    fn unknown_variable_fails() {
        let err = expand_template("${missing}", &[("present", "x")]).unwrap_err();
        match err {
            TemplateError::MissingVariable { name } => assert_eq!(name, "missing"),
            other => panic!("expected MissingVariable, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_placeholder_fails() {
        let err = expand_template("runs/${event_name", &[("event_name", "x")]).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { .. }));
    }

    #[test]
    fn empty_variable_name_fails() {
        let err = expand_template("runs/${}", &[]).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { .. }));
    }

    #[test]
    fn digit_leading_name_fails() {
        let err = expand_template("${1abc}", &[("1abc", "x")]).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed { .. }));
    }

    #[test]
    fn no_placeholders_passes_through() {
        let out = expand_template("plain/path", &[]).unwrap();
        assert_eq!(out, "plain/path");
    }
}
