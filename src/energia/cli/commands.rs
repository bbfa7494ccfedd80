//! # CLI Layer
//!
//! This module is **one possible UI client** for energia; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Initializes logging
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration and build `AppContext` around the API
//! 3. **API Dispatch**: Translate flags into a `ViewState` / options and call `EnergiaApi`
//! 4. **Output Formatting**: Hand `CmdResult`s to `render` and print the strings
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and print output

use super::render::{
    render_config, render_landing, render_messages, render_table, render_visible_anchors,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands, ViewArgs,
};
use clap::Parser;
use energia::api::{CmdMessage, EnergiaApi};
use energia::commands::config::ConfigAction;
use energia::commands::landing::LandingOptions;
use energia::commands::CmdResult;
use energia::config::{config_dir, EnergiaConfig};
use energia::error::Result;
use energia::landing::{observe_viewport, Visibility};
use energia::session::Outcome;
use energia::store::memory::InMemoryStore;
use energia::view_state::{parse_date, parse_factor, FilterPanel, SortKey, ViewState};
use env_logger::Env;
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "energia› ";

struct AppContext {
    api: EnergiaApi<InMemoryStore>,
    config: EnergiaConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the default filter
    let env = if cli.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    if cli.no_color {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.as_deref());
    }

    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Table(args)) => handle_table(&ctx, &args),
        Some(Commands::Browse(args)) => handle_browse(&ctx, &args),
        Some(Commands::Landing {
            section,
            menu,
            scroll,
            height,
        }) => handle_landing(&ctx, section, menu, scroll, height),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Help { command }) => handle_help(command.as_deref()),
        None => handle_table(&ctx, &ViewArgs::default()),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = EnergiaConfig::load(&config_dir)?;
    debug!("config from {}: {:?}", config_dir.display(), config);

    Ok(AppContext {
        api: EnergiaApi::new(InMemoryStore::sample(), config_dir),
        config,
        use_color: console::colors_enabled(),
    })
}

/// Builds the initial view state from `table`/`browse` flags.
/// `--desc` toggles the column a second time.
fn view_state(args: &ViewArgs) -> Result<ViewState> {
    let mut state = ViewState::new();

    if let Some(term) = &args.search {
        state = state.with_search(term.clone());
    }

    if let Some(column) = &args.sort {
        let key: SortKey = column.parse()?;
        state = state.toggle_sort(key);
        if args.desc {
            state = state.toggle_sort(key);
        }
    }

    let panel = FilterPanel {
        open: false,
        start: args.start.as_deref().map(parse_date).transpose()?,
        end: args.end.as_deref().map(parse_date).transpose()?,
        min_factor: args.min_factor.as_deref().map(parse_factor).transpose()?,
    };
    let open = args.filters || panel.has_values();

    Ok(state.with_filter_panel(FilterPanel { open, ..panel }))
}

fn handle_table(ctx: &AppContext, args: &ViewArgs) -> Result<()> {
    let state = view_state(args)?;
    let result = ctx.api.table(&state)?;
    print_result(ctx, &result)
}

fn handle_browse(ctx: &AppContext, args: &ViewArgs) -> Result<()> {
    let mut session = ctx.api.session(view_state(args)?)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    print_result(ctx, &session.current())?;
    if interactive {
        print_messages(
            &[CmdMessage::info("Type help for commands, quit to leave.")],
            ctx.use_color,
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let (outcome, result) = session.step(&line?);
        if outcome == Outcome::Quit {
            break;
        }
        print_result(ctx, &result)?;
    }

    debug!(
        "session ended: {} cache hits, {} misses",
        session.cache().hits(),
        session.cache().misses()
    );
    Ok(())
}

fn handle_landing(
    ctx: &AppContext,
    section: Option<String>,
    menu_open: bool,
    scroll: Option<usize>,
    height: Option<usize>,
) -> Result<()> {
    let options = LandingOptions { section, menu_open };
    let result = ctx.api.landing(&options)?;
    let Some(view) = &result.landing else {
        return Ok(());
    };
    let page = render_landing(view, ctx.use_color)?;

    for line in &page.chrome {
        println!("{}", line);
    }

    let Some(scroll) = scroll else {
        for line in &page.body {
            println!("{}", line);
        }
        print_messages(&result.messages, ctx.use_color);
        return Ok(());
    };

    let height = height.unwrap_or_else(|| {
        let (rows, _) = console::Term::stdout().size();
        (rows as usize).saturating_sub(page.chrome.len() + 1).max(1)
    });
    let top = scroll.min(page.body.len());
    let bottom = scroll.saturating_add(height).min(page.body.len());
    for line in &page.body[top..bottom] {
        println!("{}", line);
    }

    let mut visibility = Visibility::new();
    observe_viewport(&page.spans, scroll, height, &mut visibility);
    debug!("viewport {}+{}: {:?}", scroll, height, visibility.visible());
    println!(
        "{}",
        render_visible_anchors(&visibility, ctx.use_color)
    );

    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!(
                "{}",
                render_config(config, ctx.api.config_dir(), ctx.use_color)?
            );
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if let (Some(table), Some(state)) = (&result.table, &result.state) {
        println!(
            "{}",
            render_table(table, state, &ctx.config, ctx.use_color)?
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}
