/// Named chat colors and styles with their `&`-codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

// (color, upstream name, code)
static COLOR_TABLE: [(ChatColor, &str, &str); 22] = [
    (ChatColor::Black, "BLACK", "&0"),
    (ChatColor::DarkBlue, "DARK_BLUE", "&1"),
    (ChatColor::DarkGreen, "DARK_GREEN", "&2"),
    (ChatColor::DarkAqua, "DARK_AQUA", "&3"),
    (ChatColor::DarkRed, "DARK_RED", "&4"),
    (ChatColor::DarkPurple, "DARK_PURPLE", "&5"),
    (ChatColor::Gold, "GOLD", "&6"),
    (ChatColor::Gray, "GRAY", "&7"),
    (ChatColor::DarkGray, "DARK_GRAY", "&8"),
    (ChatColor::Blue, "BLUE", "&9"),
    (ChatColor::Green, "GREEN", "&a"),
    (ChatColor::Aqua, "AQUA", "&b"),
    (ChatColor::Red, "RED", "&c"),
    (ChatColor::LightPurple, "LIGHT_PURPLE", "&d"),
    (ChatColor::Yellow, "YELLOW", "&e"),
    (ChatColor::White, "WHITE", "&f"),
    (ChatColor::Magic, "MAGIC", "&k"),
    (ChatColor::Bold, "BOLD", "&l"),
    (ChatColor::Strikethrough, "STRIKETHROUGH", "&m"),
    (ChatColor::Underline, "UNDERLINE", "&n"),
    (ChatColor::Italic, "ITALIC", "&o"),
    (ChatColor::Reset, "RESET", "&r"),
];

impl ChatColor {
    pub fn from_name(name: &str) -> Option<ChatColor> {
        COLOR_TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(color, _, _)| *color)
    }

    pub fn name(self) -> &'static str {
        Self::row(self).1
    }

    pub fn code(self) -> &'static str {
        Self::row(self).2
    }

    fn row(self) -> &'static (ChatColor, &'static str, &'static str) {
        // Table order matches declaration order
        &COLOR_TABLE[self as usize]
    }
}

/// Translate an upstream color name to its code; unknown names become ""
pub fn translate_chat_color(name: &str) -> &'static str {
    match ChatColor::from_name(name) {
        Some(color) => color.code(),
        None => "",
    }
}
