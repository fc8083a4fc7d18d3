//! Command registry - name-keyed map of loaded command modules

use std::collections::HashMap;

use libloading::Library;

use crate::domain::entities::Command;

/// A command module held together with the library that produced it.
pub struct LoadedCommand {
    group: String,
    // Declared before `library` so the instance drops while its code is
    // still mapped. `library` is None for commands built in-process.
    instance: Box<dyn Command>,
    #[allow(dead_code)]
    library: Option<Library>,
}

impl LoadedCommand {
    pub fn new(
        group: impl Into<String>,
        instance: Box<dyn Command>,
        library: Option<Library>,
    ) -> Self {
        Self {
            group: group.into(),
            instance,
            library,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn command(&self) -> &dyn Command {
        self.instance.as_ref()
    }
}

/// Registry mapping cleaned module file names to loaded commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, LoadedCommand>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `name`. A colliding name silently replaces the earlier
    /// entry, so with several groups the one loaded last wins.
    pub fn insert(&mut self, name: impl Into<String>, command: LoadedCommand) {
        self.commands.insert(name.into(), command);
    }

    pub fn get(&self, name: &str) -> Option<&LoadedCommand> {
        self.commands.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LoadedCommand)> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::CommandError;
    use crate::domain::entities::Message;

    struct FakeCommand {
        group: String,
    }

    impl Command for FakeCommand {
        fn name(&self) -> &str {
            "fake"
        }

        fn group(&self) -> &str {
            &self.group
        }

        fn set_group(&mut self, group: &str) {
            self.group = group.to_string();
        }

        fn execute(&self, _message: Message) -> Result<String, CommandError> {
            Ok("pong".to_string())
        }
    }

    fn loaded(group: &str) -> LoadedCommand {
        let mut instance = Box::new(FakeCommand {
            group: String::new(),
        });
        instance.set_group(group);
        LoadedCommand::new(group, instance, None)
    }

    #[test]
    fn stores_by_cleaned_name() {
        let mut registry = CommandRegistry::new();
        registry.insert("ping", loaded("util"));

        let entry = registry.get("ping").unwrap();
        assert_eq!(entry.group(), "util");
        assert_eq!(entry.command().group(), "util");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn colliding_names_keep_the_last_insert() {
        let mut registry = CommandRegistry::new();
        registry.insert("ban", loaded("util"));
        registry.insert("ban", loaded("mod"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("ban").unwrap().group(), "mod");
    }
}
