//! Bundled example aliases offered as a shortcut to manual entry

/// A ready-made alias with a short human-readable description.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub command: &'static str,
    pub description: &'static str,
}

/// Reference catalog shown by the "use an example alias" flow.
pub const EXAMPLE_ALIASES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "gp",
        command: "git push",
        description: "Push changes to remote git repository",
    },
    CatalogEntry {
        name: "gco",
        command: "git checkout",
        description: "Switch git branches or restore working tree files",
    },
    CatalogEntry {
        name: "ll",
        command: "ls -la",
        description: "List directory contents in long format, including hidden files",
    },
    CatalogEntry {
        name: "myip",
        command: "curl http://ipecho.net/plain; echo",
        description: "Display public IP address",
    },
    CatalogEntry {
        name: "update",
        command: "sudo apt-get update && sudo apt-get upgrade",
        description: "Update and upgrade packages (Ubuntu/Debian)",
    },
];
