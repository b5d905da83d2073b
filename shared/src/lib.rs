use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WIRE_COUNT: usize = 3;
pub const DEFAULT_MAX_PLAYERS: u32 = 128;
pub const GAME_SERVER_ADDR: &str = "95.31.51.216:1212";

/// One of the three wires on the access panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireId {
    Green,
    Yellow,
    Orange,
}

impl WireId {
    pub const ALL: [WireId; WIRE_COUNT] = [WireId::Green, WireId::Yellow, WireId::Orange];

    pub fn color(self) -> &'static str {
        match self {
            WireId::Green => "#22c55e",
            WireId::Yellow => "#eab308",
            WireId::Orange => "#f97316",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WireId::Green => "GND",
            WireId::Yellow => "SIG",
            WireId::Orange => "PWR",
        }
    }

    /// The right-side terminal this wire must be routed to.
    pub fn target(self) -> TerminalId {
        match self {
            WireId::Green => TerminalId::Right1,
            WireId::Yellow => TerminalId::Right2,
            WireId::Orange => TerminalId::Right0,
        }
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireId::Green => "green",
            WireId::Yellow => "yellow",
            WireId::Orange => "orange",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for WireId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(WireId::Green),
            "yellow" => Ok(WireId::Yellow),
            "orange" => Ok(WireId::Orange),
            other => Err(format!("unknown wire '{}'", other)),
        }
    }
}

/// A right-side terminal on the access panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalId {
    Right0,
    Right1,
    Right2,
}

impl TerminalId {
    pub const ALL: [TerminalId; WIRE_COUNT] =
        [TerminalId::Right0, TerminalId::Right1, TerminalId::Right2];

    pub fn label(self) -> &'static str {
        self.expected().label()
    }

    /// The single wire that is correct for this terminal.
    pub fn expected(self) -> WireId {
        match self {
            TerminalId::Right0 => WireId::Orange,
            TerminalId::Right1 => WireId::Green,
            TerminalId::Right2 => WireId::Yellow,
        }
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminalId::Right0 => "right-0",
            TerminalId::Right1 => "right-1",
            TerminalId::Right2 => "right-2",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TerminalId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right-0" => Ok(TerminalId::Right0),
            "right-1" => Ok(TerminalId::Right1),
            "right-2" => Ok(TerminalId::Right2),
            other => Err(format!("unknown terminal '{}'", other)),
        }
    }
}

/// Snapshot of the game server as reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub online: bool,
    pub players: u32,
    pub max_players: u32,
}

impl ServerStatus {
    /// Value substituted when the endpoint cannot be reached or decoded.
    pub fn fallback() -> Self {
        Self {
            online: false,
            players: 0,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsTag {
    Important,
    Development,
    Content,
    Update,
}

impl fmt::Display for NewsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NewsTag::Important => "Important",
            NewsTag::Development => "Development",
            NewsTag::Content => "Content",
            NewsTag::Update => "Update",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for NewsTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "important" | "Important" => Ok(NewsTag::Important),
            "development" | "Development" => Ok(NewsTag::Development),
            "content" | "Content" => Ok(NewsTag::Content),
            "update" | "Update" => Ok(NewsTag::Update),
            other => Err(format!("unknown news tag '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub content: String,
    pub tag: NewsTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: u32,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiSection {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub description: String,
}

fn news(id: u32, title: &str, date: &str, content: &str, tag: NewsTag) -> NewsItem {
    NewsItem {
        id,
        title: title.to_string(),
        date: date.to_string(),
        content: content.to_string(),
        tag,
    }
}

/// News entries the site ships with.
pub fn default_news() -> Vec<NewsItem> {
    vec![
        news(
            1,
            "Dark Haven server launch",
            "15 December 2024",
            "We are pleased to announce the launch of our new server with \
             improved hardware and a larger player cap.",
            NewsTag::Important,
        ),
        news(
            2,
            "Economy system overhaul",
            "10 December 2024",
            "A reworked economy: shuttle prices are significantly higher and \
             players can now open their own stations.",
            NewsTag::Development,
        ),
        news(
            3,
            "New antagonists and roles",
            "5 December 2024",
            "The return of classic antagonists: thieves, syndicate agents, \
             nuclear operatives, ninjas and more!",
            NewsTag::Content,
        ),
    ]
}

/// Server rules the site ships with.
pub fn default_rules() -> Vec<Rule> {
    let seed = [
        (
            "Respect other players",
            "Do not insult other players or use abusive language.",
        ),
        (
            "Roleplay",
            "Stay in character and do not prevent others from playing.",
        ),
        (
            "No metagaming",
            "Do not use out-of-game information in game.",
        ),
        (
            "Griefing",
            "Deliberate sabotage without an in-character reason is forbidden.",
        ),
    ];

    seed.iter()
        .enumerate()
        .map(|(i, (title, text))| Rule {
            id: i as u32 + 1,
            title: title.to_string(),
            text: text.to_string(),
        })
        .collect()
}

/// Wiki landing sections.
pub fn default_wiki_sections() -> Vec<WikiSection> {
    let seed = [
        ("Getting started", "Rocket", "First steps on the Dark Haven station"),
        ("Roles and professions", "Users", "All available roles and their duties"),
        ("Economy", "DollarSign", "The trading and earning system"),
        ("Ships and stations", "Cpu", "Information about shuttles and stations"),
    ];

    seed.iter()
        .enumerate()
        .map(|(i, (title, icon, description))| WikiSection {
            id: i as u32 + 1,
            title: title.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        })
        .collect()
}
