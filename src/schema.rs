//! Interaction command schemas.
//!
//! Builds the [`CommandData`] a host publishes so a platform can offer
//! structured invocations for registered interaction commands.

use crate::command::{Command, CommandArgument};
use crate::handlers::Registry;
use chatcmd_proto::{CommandData, OptionData, SubcommandData};

/// Schema for one top-level command.
///
/// A root without children publishes its own arguments as options.
/// Otherwise every child becomes a sub command carrying its arguments and
/// the root's own arguments are not published.
pub fn command_data(command: &Command) -> CommandData {
    let mut data = CommandData {
        name: command.name().to_string(),
        description: description_or_name(command),
        options: Vec::new(),
        subcommands: Vec::new(),
    };

    if command.has_children() {
        data.subcommands = command
            .children()
            .map(|child| SubcommandData {
                name: child.name().to_string(),
                description: description_or_name(child),
                options: options(child.arguments()),
            })
            .collect();
    } else {
        data.options = options(command.arguments());
    }
    data
}

/// Schemas for every command registered for the interaction path.
pub fn interaction_commands(registry: &Registry) -> Vec<CommandData> {
    registry
        .all()
        .iter()
        .filter(|c| c.is_interaction())
        .map(|c| command_data(c.command()))
        .collect()
}

fn description_or_name(command: &Command) -> String {
    command
        .description()
        .filter(|d| !d.is_empty())
        .unwrap_or(command.name())
        .to_string()
}

fn options(arguments: &[CommandArgument]) -> Vec<OptionData> {
    arguments.iter().map(CommandArgument::to_option_data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandBuilder;
    use crate::handlers::{Invocation, InteractionHandler};
    use chatcmd_proto::{ArgumentType, ResponseDescriptor};

    struct Pong;

    impl InteractionHandler for Pong {
        fn initial_response(&self, _inv: &Invocation<'_>) -> ResponseDescriptor {
            ResponseDescriptor::text("pong")
        }
    }

    #[test]
    fn test_leaf_root_publishes_own_options() {
        let ping = CommandBuilder::new("ping")
            .argument(CommandArgument::new(ArgumentType::Integer, "count", "How many", false))
            .interaction_handler(Pong)
            .build_parent()
            .unwrap();

        let data = command_data(&ping);
        assert_eq!(data.name, "ping");
        assert_eq!(data.description, "ping");
        assert_eq!(data.options.len(), 1);
        assert_eq!(data.options[0].name, "count");
        assert_eq!(data.options[0].kind, ArgumentType::Integer);
        assert!(data.subcommands.is_empty());
    }

    #[test]
    fn test_children_become_subcommands() {
        let user = CommandBuilder::new("user")
            .description("Look up a user")
            .argument(CommandArgument::new(ArgumentType::User, "target", "Who", true))
            .interaction_handler(Pong)
            .build_sub()
            .unwrap();
        let server = CommandBuilder::new("server").interaction_handler(Pong).build_sub().unwrap();
        let info = CommandBuilder::new("info")
            .description("Information")
            .argument(CommandArgument::new(ArgumentType::String, "ignored", "Not published", false))
            .interaction_handler(Pong)
            .subcommand(user)
            .subcommand(server)
            .build_parent()
            .unwrap();

        let data = command_data(&info);
        assert_eq!(data.description, "Information");
        assert!(data.options.is_empty());
        let names: Vec<_> = data.subcommands.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["server", "user"]);
        assert_eq!(data.subcommands[0].description, "server");
        assert_eq!(data.subcommands[1].options[0].name, "target");
        assert!(data.subcommands[1].options[0].required);
    }
}
