//! FormSpec assembly from a [`ScannedScript`].

use scriptform_types::form::FormSpec;

use crate::form::doc::split_doc_block;
use crate::prompt::grammar::parse_prompt;
use crate::script::scanner::ScannedScript;

/// Turn raw scanner output into a [`FormSpec`].
///
/// Each prompt goes through the prompt grammar in scan order; the
/// documentation block, when present, supplies title and description.
pub fn assemble_form(scanned: &ScannedScript) -> FormSpec {
    let (title, description) = scanned
        .doc
        .as_deref()
        .map(split_doc_block)
        .unwrap_or_default();

    FormSpec {
        title,
        description,
        inputs: scanned.prompts.iter().map(|p| parse_prompt(p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptform_types::form::InputField;

    #[test]
    fn test_assemble_with_doc_and_prompts() {
        let scanned = ScannedScript {
            doc: Some("Password generator\nMakes a random password.".to_string()),
            prompts: vec![
                "Password length [12]:".to_string(),
                "Allowed characters:".to_string(),
            ],
        };

        let spec = assemble_form(&scanned);
        assert_eq!(spec.title, "Password generator");
        assert_eq!(spec.description, "Makes a random password.");
        assert_eq!(
            spec.inputs,
            vec![
                InputField::new("Password length:", "12"),
                InputField::new("Allowed characters:", ""),
            ]
        );
    }

    #[test]
    fn test_assemble_without_doc() {
        let scanned = ScannedScript {
            doc: None,
            prompts: vec![r"Your city \[Seattle\]:".to_string()],
        };

        let spec = assemble_form(&scanned);
        assert_eq!(spec.title, "");
        assert_eq!(spec.description, "");
        assert_eq!(spec.inputs, vec![InputField::new("Your city [Seattle]:", "")]);
    }

    #[test]
    fn test_assemble_empty_script() {
        let spec = assemble_form(&ScannedScript::default());
        assert!(spec.is_empty());
        assert!(!spec.has_header());
    }
}
