use colored::*;

/// Terminal roles, each mapped to one colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Ok,
    Error,
    Warning,
    Id,
    Label,
    Debug,
}

fn paint(str: &str, role: Role) -> String {
    if cfg!(test) {
        return normal_string(str);
    }

    let string = String::from(str);
    match role {
        Role::Ok => string.green(),
        Role::Error => string.red(),
        Role::Warning => string.yellow(),
        Role::Id => string.bright_cyan(),
        Role::Label => string.purple(),
        Role::Debug => string.bright_blue().on_yellow(),
    }
    .to_string()
}

pub fn ok_string(str: &str) -> String {
    paint(str, Role::Ok)
}

pub fn error_string(str: &str) -> String {
    paint(str, Role::Error)
}

pub fn warning_string(str: &str) -> String {
    paint(str, Role::Warning)
}

/// User ids and commands the user can type
pub fn id_string(str: &str) -> String {
    paint(str, Role::Id)
}

/// Rooms, aliases and timezone labels
pub fn label_string(str: &str) -> String {
    paint(str, Role::Label)
}

pub fn debug_string(str: &str) -> String {
    paint(str, Role::Debug)
}

pub fn normal_string(str: &str) -> String {
    String::from(str).normal().to_string()
}
