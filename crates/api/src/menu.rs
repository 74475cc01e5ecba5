/// Entries of the dashboard navigation menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Home,
    Subscribers,
    Progress,
    Statistics,
    My,
    ClanRank,
}

impl MenuEntry {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Subscribers,
        Self::Progress,
        Self::Statistics,
        Self::My,
        Self::ClanRank,
    ];

    /// Key as emitted by the menu widget
    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "1",
            Self::Subscribers => "2",
            Self::Progress => "3",
            Self::Statistics => "4",
            Self::My => "5",
            Self::ClanRank => "6",
        }
    }

    /// Resolve a widget key; unknown keys select nothing
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Self::Home),
            "2" => Some(Self::Subscribers),
            "3" => Some(Self::Progress),
            "4" => Some(Self::Statistics),
            "5" => Some(Self::My),
            "6" => Some(Self::ClanRank),
            _ => None,
        }
    }

    /// Relative navigation target, one full page load per selection
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "../",
            Self::Subscribers => "../subscribers/",
            Self::Progress => "../progress/",
            Self::Statistics => "../statistics/",
            Self::My => "../my/",
            Self::ClanRank => "../clan-rank/",
        }
    }
}
