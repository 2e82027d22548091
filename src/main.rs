//! Roster loads chat-user profile fixtures, answers lookups against them and checks that
//! every recorded timezone offset still agrees with its IANA zone.
//!
//! Get started with `roster list`
extern crate clap;

use clap::{Parser, Subcommand};
use config::{Args, Config};
use errors::Error;
use time::SystemTimeProvider;
use users::Users;

mod check;
mod color;
mod config;
mod debug;
mod errors;
mod format;
mod id;
mod test;
mod test_time;
mod time;
mod user;
mod users;

const NAME: &str = "Roster";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Load, query and check chat-user profile fixtures";

#[derive(Parser, Clone)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(about = ABOUT, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[arg(short, long, default_value_t = false)]
    /// Display additional debug info while processing
    verbose: bool,

    #[arg(short, long)]
    /// Absolute path of configuration. Defaults to $XDG_CONFIG_HOME/roster.cfg
    config: Option<String>,

    #[arg(short, long)]
    /// Roster fixture to read. Defaults to the fixture in config, then the bundled one
    fixture: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    #[clap(alias = "l")]
    /// (l) List every user in the roster
    List(UserList),

    #[clap(alias = "s")]
    /// (s) Show one user, found by id, name or root alias
    Show(UserShow),

    #[clap(alias = "r")]
    /// (r) List the users in a room
    Room(UserRoom),

    #[clap(alias = "z")]
    /// (z) List the users in a timezone
    Zone(UserZone),

    #[clap(alias = "n")]
    /// (n) Current local time for a user
    Now(UserNow),

    #[clap(alias = "k")]
    /// (k) Check every user, returns exit code 1 on errors
    Check(RosterCheck),

    #[command(subcommand)]
    #[clap(alias = "c")]
    /// (c) Commands around configuration
    Config(ConfigCommands),
}

// -- USERS --

#[derive(Parser, Debug, Clone)]
struct UserList {}

#[derive(Parser, Debug, Clone)]
struct UserShow {
    /// User id, name or root alias
    query: String,

    #[arg(short, long, default_value_t = false)]
    /// Print the user as fixture JSON
    json: bool,
}

#[derive(Parser, Debug, Clone)]
struct UserRoom {
    /// Room or channel code, such as C123
    room: String,
}

#[derive(Parser, Debug, Clone)]
struct UserZone {
    /// IANA timezone, such as Europe/Amsterdam, or an offset like "GMT +1:00"
    timezone: String,
}

#[derive(Parser, Debug, Clone)]
struct UserNow {
    /// User id, name or root alias
    query: String,
}

// -- CHECK --

#[derive(Parser, Debug, Clone)]
struct RosterCheck {
    #[arg(short, long)]
    /// Date to check offsets at, in format YYYY-MM-DD. Defaults to config, then today
    date: Option<String>,
}

// -- CONFIG --

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommands {
    #[clap(alias = "p")]
    /// (p) Print the path of the configuration file
    Path(ConfigPath),

    #[clap(alias = "i")]
    /// (i) Write a configuration file with defaults
    Init(ConfigInit),

    #[clap(alias = "r")]
    /// (r) Delete the configuration file
    Reset(ConfigReset),
}

#[derive(Parser, Debug, Clone)]
struct ConfigPath {}

#[derive(Parser, Debug, Clone)]
struct ConfigInit {}

#[derive(Parser, Debug, Clone)]
struct ConfigReset {}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();

    let result: Result<String, Error> = match &cli.command {
        Commands::List(args) => user_list(&cli, args),
        Commands::Show(args) => user_show(&cli, args),
        Commands::Room(args) => user_room(&cli, args),
        Commands::Zone(args) => user_zone(&cli, args),
        Commands::Now(args) => user_now(&cli, args),
        Commands::Check(args) => roster_check(&cli, args),
        Commands::Config(ConfigCommands::Path(args)) => config_path(&cli, args),
        Commands::Config(ConfigCommands::Init(args)) => config_init(&cli, args),
        Commands::Config(ConfigCommands::Reset(args)) => config_reset(&cli, args),
    };

    match result {
        Ok(text) => {
            println!("{text}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("\n\n{e}");
            std::process::exit(1);
        }
    }
}

// --- USERS ---

fn user_list(cli: &Cli, _args: &UserList) -> Result<String, Error> {
    let users = fetch_users(cli)?;
    let rows: Vec<_> = users.iter().collect();
    Ok(format::table(&rows))
}

fn user_show(cli: &Cli, args: &UserShow) -> Result<String, Error> {
    let UserShow { query, json } = args;
    let users = fetch_users(cli)?;
    let (id, user) = users.find(query)?;

    if *json {
        let single: Users = vec![(id.to_string(), user.clone())].into_iter().collect();
        single.to_json()
    } else {
        Ok(format::user(id, user))
    }
}

fn user_room(cli: &Cli, args: &UserRoom) -> Result<String, Error> {
    let UserRoom { room } = args;
    let users = fetch_users(cli)?;
    Ok(format::table(&users.in_room(room)))
}

fn user_zone(cli: &Cli, args: &UserZone) -> Result<String, Error> {
    let UserZone { timezone } = args;
    let tz = time::timezone_from_str(timezone)?;
    let users = fetch_users(cli)?;
    Ok(format::table(&users.in_timezone(tz.name())))
}

fn user_now(cli: &Cli, args: &UserNow) -> Result<String, Error> {
    let UserNow { query } = args;
    let users = fetch_users(cli)?;
    let (id, user) = users.find(query)?;
    let now = user.local_time(&SystemTimeProvider)?;
    Ok(format::local_time(id, user, &now))
}

// --- CHECK ---

fn roster_check(cli: &Cli, args: &RosterCheck) -> Result<String, Error> {
    let RosterCheck { date } = args;
    let config = fetch_config(cli, date.clone())?;
    let users = config.users()?;
    let date = config.reference_date(&SystemTimeProvider)?;
    debug::maybe_print(&config, format!("Checking {} users at {date}", users.len()));

    let report = check::check(&users, date)?;
    let text = format::report(&report);
    if report.passed() {
        Ok(text)
    } else {
        Err(errors::new("check", &text))
    }
}

// --- CONFIG ---

fn config_path(cli: &Cli, _args: &ConfigPath) -> Result<String, Error> {
    let config = fetch_config(cli, None)?;
    Ok(config.path)
}

fn config_init(cli: &Cli, _args: &ConfigInit) -> Result<String, Error> {
    let config = fetch_config(cli, None)?;
    let path = config.path.clone();
    Config::new(&path).create()?;
    Ok(format!("{} Config created in {path}", color::ok_string("✓")))
}

fn config_reset(cli: &Cli, _args: &ConfigReset) -> Result<String, Error> {
    let config = fetch_config(cli, None)?;
    let path = config.path;
    if !std::path::Path::new(&path).exists() {
        return Err(errors::new("config_reset", &format!("No config at {path}")));
    }
    std::fs::remove_file(&path)?;
    Ok(format!("{} Config deleted from {path}", color::ok_string("✓")))
}

// --- HELPERS ---

fn fetch_config(cli: &Cli, date: Option<String>) -> Result<Config, Error> {
    let Cli {
        verbose,
        config: config_path,
        fixture,
        command: _,
    } = cli;

    let args = Args {
        verbose: *verbose,
        fixture: fixture.clone(),
        date,
    };
    let config = config::get_or_default(config_path.clone(), args)?;
    debug::maybe_print(&config, debug::build_info());
    Ok(config)
}

fn fetch_users(cli: &Cli) -> Result<Users, Error> {
    let config = fetch_config(cli, None)?;
    let users = config.users()?;
    debug::maybe_print(&config, format!("Loaded ids: {}", users.ids().join(", ")));
    Ok(users)
}
