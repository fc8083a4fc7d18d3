use crate::application::errors::CommandError;
use crate::domain::entities::Message;

/// A loadable bot command.
///
/// Command modules are compiled as shared libraries exporting a
/// `botkit_command_init` constructor (see `infrastructure::commands`). The
/// scaffold only calls `set_group` at load time; `execute` belongs to a
/// downstream dispatcher.
pub trait Command: Send + Sync {
    /// Command name as reported by the module itself.
    fn name(&self) -> &str;

    /// Group label assigned at load time.
    fn group(&self) -> &str;

    /// Tag the command with its owning group.
    fn set_group(&mut self, group: &str);

    /// Execute the command against an incoming message.
    fn execute(&self, message: Message) -> Result<String, CommandError>;
}
