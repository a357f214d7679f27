//! Terminal front end: settings and text rendering.

mod render;

pub use render::*;

/// Sound effects are on unless `MONARCH_SFX` is `0`, `false` or `off`.
pub fn sfx_enabled_from_env() -> bool {
    std::env::var("MONARCH_SFX")
        .map(|v| parse_switch(&v).unwrap_or(true))
        .unwrap_or(true)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("off"), Some(false));
        assert_eq!(parse_switch(" TRUE "), Some(true));
        assert_eq!(parse_switch("0"), Some(false));
        assert_eq!(parse_switch("maybe"), None);
    }
}
