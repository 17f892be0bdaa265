use super::color::translate_chat_color;
use crate::domain::PlayerRankData;

/// One entry of the ordered prefix rule chain
pub struct PrefixRule {
    pub name: &'static str,
    matches: fn(&PlayerRankData) -> bool,
    format: fn(&PlayerRankData) -> String,
}

impl PrefixRule {
    pub fn matches(&self, data: &PlayerRankData) -> bool {
        (self.matches)(data)
    }

    pub fn format(&self, data: &PlayerRankData) -> String {
        (self.format)(data)
    }
}

/// Prefix rules in priority order; the first match wins.
pub static PREFIX_RULES: [PrefixRule; 10] = [
    PrefixRule {
        name: "prefix",
        matches: has_custom_prefix,
        format: custom_prefix,
    },
    PrefixRule {
        name: "admin",
        matches: is_admin,
        format: |_| "&c[ADMIN] ".to_string(),
    },
    PrefixRule {
        name: "game_master",
        matches: is_game_master,
        format: |_| "&2[GM] ".to_string(),
    },
    PrefixRule {
        name: "moderator",
        matches: is_moderator,
        format: |_| "&2[MOD] ".to_string(),
    },
    PrefixRule {
        name: "youtuber",
        matches: is_youtuber,
        format: |_| "&c[&fYOUTUBE&c] ".to_string(),
    },
    PrefixRule {
        name: "mvp_plus_plus",
        matches: is_superstar,
        format: superstar_prefix,
    },
    PrefixRule {
        name: "mvp_plus",
        matches: is_mvp_plus,
        format: mvp_plus_prefix,
    },
    PrefixRule {
        name: "mvp",
        matches: is_mvp,
        format: |_| "&b[MVP] ".to_string(),
    },
    PrefixRule {
        name: "vip_plus",
        matches: is_vip_plus,
        format: |_| "&a[VIP&6+&a] ".to_string(),
    },
    PrefixRule {
        name: "vip",
        matches: is_vip,
        format: |_| "&a[VIP] ".to_string(),
    },
];

/// First rule that accepts `data`, if any
pub fn matching_rule(data: &PlayerRankData) -> Option<&'static PrefixRule> {
    PREFIX_RULES.iter().find(|rule| rule.matches(data))
}

fn is(field: &Option<String>, value: &str) -> bool {
    field.as_deref() == Some(value)
}

fn has_package(data: &PlayerRankData, package: &str) -> bool {
    is(&data.new_package_rank, package) || is(&data.package_rank, package)
}

// Unset and empty color names fall back to the default
fn color_or(field: &Option<String>, default: &str) -> &'static str {
    translate_chat_color(field.as_deref().filter(|s| !s.is_empty()).unwrap_or(default))
}

fn has_custom_prefix(data: &PlayerRankData) -> bool {
    data.prefix.as_deref().is_some_and(|p| !p.is_empty())
}

fn custom_prefix(data: &PlayerRankData) -> String {
    format!("{} ", data.prefix.as_deref().unwrap_or_default())
}

fn is_admin(data: &PlayerRankData) -> bool {
    is(&data.rank, "ADMIN")
}

fn is_game_master(data: &PlayerRankData) -> bool {
    is(&data.rank, "GAME_MASTER")
}

fn is_moderator(data: &PlayerRankData) -> bool {
    is(&data.rank, "MODERATOR")
}

fn is_youtuber(data: &PlayerRankData) -> bool {
    is(&data.rank, "YOUTUBER") || is(&data.new_package_rank, "YOUTUBER")
}

fn is_superstar(data: &PlayerRankData) -> bool {
    is(&data.monthly_package_rank, "SUPERSTAR")
}

fn superstar_prefix(data: &PlayerRankData) -> String {
    let outer = color_or(&data.monthly_rank_color, "GOLD");
    let plus = color_or(&data.rank_plus_color, "RED");
    format!("{outer}[MVP{plus}++{outer}] ")
}

fn is_mvp_plus(data: &PlayerRankData) -> bool {
    has_package(data, "MVP_PLUS")
}

fn mvp_plus_prefix(data: &PlayerRankData) -> String {
    let plus = color_or(&data.rank_plus_color, "RED");
    format!("&b[MVP{plus}+&b] ")
}

fn is_mvp(data: &PlayerRankData) -> bool {
    has_package(data, "MVP")
}

fn is_vip_plus(data: &PlayerRankData) -> bool {
    has_package(data, "VIP_PLUS")
}

fn is_vip(data: &PlayerRankData) -> bool {
    has_package(data, "VIP")
}
