use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "energia",
    bin_name = "energia",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Energy-efficiency records and the EnergiaTech landing page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Data,
    Site,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Site => "Site Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "table" | "browse" => Some(CommandGroup::Data),
            "landing" => Some(CommandGroup::Site),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Data, CommandGroup::Site, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("energia {version}\n"));
    output.push_str("Energy-efficiency records and the EnergiaTech landing page\n");
    output.push('\n');
    output.push_str("Usage: energia [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output (debug logging)\n");
    output.push_str("      --no-color   Disable colored output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Table(_)) => "table",
        Some(Commands::Browse(_)) => "browse",
        Some(Commands::Landing { .. }) => "landing",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// View-state flags shared by `table` and `browse`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Search term (tag, ISO date or factor)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort column: start, end, tag or factor
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort descending (requires --sort)
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Show the filter panel
    #[arg(long)]
    pub filters: bool,

    /// Filter panel start date (YYYY-MM-DD, not applied)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Filter panel end date (YYYY-MM-DD, not applied)
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Filter panel minimum factor (not applied)
    #[arg(long, value_name = "FACTOR")]
    pub min_factor: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the energy data table
    #[command(alias = "ls", display_order = 1)]
    Table(ViewArgs),

    /// Browse the table interactively (reads commands from stdin)
    #[command(alias = "b", display_order = 2)]
    Browse(ViewArgs),

    /// Show the EnergiaTech landing page
    #[command(display_order = 10)]
    Landing {
        /// Only show one section (home, services, about, contact)
        #[arg(long, value_name = "ANCHOR")]
        section: Option<String>,

        /// Show the navigation menu expanded
        #[arg(long)]
        menu: bool,

        /// First line of the viewport
        #[arg(long, value_name = "LINE")]
        scroll: Option<usize>,

        /// Viewport height in lines (defaults to the terminal height)
        #[arg(long, value_name = "LINES", requires = "scroll")]
        height: Option<usize>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (date-format, zebra)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for energia or a subcommand
    #[command(display_order = 21)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("energia").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_table_flags() {
        let cli = parse(&["table", "-s", "rj", "--sort", "factor", "--desc"]);
        match cli.command {
            Some(Commands::Table(args)) => {
                assert_eq!(args.search.as_deref(), Some("rj"));
                assert_eq!(args.sort.as_deref(), Some("factor"));
                assert!(args.desc);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["energia", "table", "--desc"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["landing", "--section", "about", "-v", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Some(Commands::Landing { section: Some(ref s), .. }) if s == "about"
        ));
    }

    #[test]
    fn test_no_command() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in ["table", "browse", "landing", "config", "help"] {
            assert!(help.contains(name), "missing {}", name);
        }
        assert!(help.contains("Data Commands:"));
        assert!(help.contains("Site Commands:"));
    }
}
