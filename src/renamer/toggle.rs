#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Strip,
    Prepend,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toggled {
    pub name: String,
    pub direction: Direction,
}

/// Strip `prefix` from `name` if present, otherwise prepend it.
///
/// A name equal to the prefix has nothing left after stripping, so it is
/// prepended instead; the next run strips it back.
pub fn toggle_name(name: &str, prefix: &str) -> Toggled {
    match name.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Toggled {
            name: rest.to_string(),
            direction: Direction::Strip,
        },
        _ => Toggled {
            name: format!("{prefix}{name}"),
            direction: Direction::Prepend,
        },
    }
}
