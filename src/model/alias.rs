//! Alias data structures

/// A single alias binding: a short name and the command it expands to.
///
/// The name is expected to be a simple token and the command is kept
/// verbatim. Neither field is validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub command: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Render the declaration line written to the startup file.
    ///
    /// The command is embedded in single quotes. Embedded single quotes are
    /// escaped with the shell's `'\''` close-escape-reopen sequence so the
    /// written line always stays balanced.
    pub fn declaration_line(&self) -> String {
        format!("alias {}='{}'", self.name, self.command.replace('\'', r"'\''"))
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.command)
    }
}

/// Insertion-ordered alias collection with last-write-wins semantics.
///
/// A redefined name keeps its original position but takes the newer command,
/// mirroring how a sourcing shell resolves duplicate declarations while the
/// listing stays in file-encounter order.
#[derive(Debug, Default)]
pub struct AliasSet {
    entries: Vec<Alias>,
}

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias, replacing the command of an existing entry with the
    /// same name in place.
    pub fn upsert(&mut self, alias: Alias) {
        match self.entries.iter_mut().find(|e| e.name == alias.name) {
            Some(existing) => existing.command = alias.command,
            None => self.entries.push(alias),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Alias> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_line() {
        let alias = Alias::new("gp", "git push");
        assert_eq!(alias.declaration_line(), "alias gp='git push'");
    }

    #[test]
    fn test_declaration_line_escapes_single_quotes() {
        let alias = Alias::new("say", "echo 'hi'");
        assert_eq!(alias.declaration_line(), r"alias say='echo '\''hi'\'''");
    }

    #[test]
    fn test_upsert_preserves_order() {
        let mut set = AliasSet::new();
        set.upsert(Alias::new("a", "one"));
        set.upsert(Alias::new("b", "two"));
        set.upsert(Alias::new("c", "three"));

        let names: Vec<_> = set.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_upsert_last_write_wins_in_place() {
        let mut set = AliasSet::new();
        set.upsert(Alias::new("ll", "ls -l"));
        set.upsert(Alias::new("gs", "git status"));
        set.upsert(Alias::new("ll", "ls -la"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap(), &Alias::new("ll", "ls -la"));
        assert_eq!(set.get(1).unwrap(), &Alias::new("gs", "git status"));
    }
}
