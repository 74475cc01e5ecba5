/// Game server cluster a group's data lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameServer {
    Cn,
    Tw,
}

impl GameServer {
    /// Parse a backend region code. Unknown codes are not an error; the
    /// caller decides whether anything happens.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "cn" => Some(Self::Cn),
            "tw" => Some(Self::Tw),
            _ => None,
        }
    }

    /// External clan ranking site for this cluster
    pub const fn rank_url(self) -> &'static str {
        match self {
            Self::Cn => "https://kyouka.kengxxiao.com/rank/clan",
            Self::Tw => "https://rank.layvtwt.top/",
        }
    }
}

impl std::fmt::Display for GameServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cn => "cn",
            Self::Tw => "tw",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_rank_url() {
        let server = GameServer::parse("cn").unwrap();
        assert_eq!(server.rank_url(), "https://kyouka.kengxxiao.com/rank/clan");
    }

    #[test]
    fn test_tw_rank_url() {
        let server = GameServer::parse("tw").unwrap();
        assert_eq!(server.rank_url(), "https://rank.layvtwt.top/");
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert!(GameServer::parse("us").is_none());
        assert!(GameServer::parse("jp").is_none());
        assert!(GameServer::parse("").is_none());
        assert!(GameServer::parse("CN").is_none());
    }

    #[test]
    fn test_display_matches_wire_code() {
        assert_eq!(GameServer::Cn.to_string(), "cn");
        assert_eq!(GameServer::Tw.to_string(), "tw");
    }
}
