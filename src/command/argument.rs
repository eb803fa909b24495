use chatcmd_proto::{ArgumentType, OptionData, fold_key};

/// A declared argument of a command, published as an interaction option.
///
/// The engine never validates or coerces argument tokens; the declaration
/// only drives the interaction schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgument {
    kind: ArgumentType,
    name: String,
    description: String,
    required: bool,
}

impl CommandArgument {
    /// Declare an argument. The name is stored folded.
    pub fn new(
        kind: ArgumentType,
        name: impl AsRef<str>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            kind,
            name: fold_key(name.as_ref()),
            description: description.into(),
            required,
        }
    }

    pub fn kind(&self) -> ArgumentType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn to_option_data(&self) -> OptionData {
        OptionData {
            kind: self.kind,
            name: self.name.clone(),
            description: self.description.clone(),
            required: self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_name_is_folded() {
        let arg = CommandArgument::new(ArgumentType::User, "Target", "Who to greet", true);
        assert_eq!(arg.name(), "target");
        assert_eq!(arg.kind(), ArgumentType::User);
        assert!(arg.is_required());
        assert_eq!(arg.to_option_data().name, "target");
    }
}
