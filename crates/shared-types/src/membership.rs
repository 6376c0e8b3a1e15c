use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a club as issued by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(pub i64);

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClubId {
    fn from(id: i64) -> Self {
        ClubId(id)
    }
}

/// A club, referenced (not owned) by memberships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
}

/// Administrative capability granted by a club membership.
///
/// Capabilities are independent of one another; holding one never implies
/// another. Names deserialize through [`Capability::parse_capability`], so
/// config files may use any casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Capability {
    ManageMembers,
    ManageCourts,
    CreateTraining,
    ManageLeagues,
    ManageClub,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 5] = [
        Capability::ManageMembers,
        Capability::ManageCourts,
        Capability::CreateTraining,
        Capability::ManageLeagues,
        Capability::ManageClub,
    ];

    fn bit(self) -> u8 {
        match self {
            Capability::ManageMembers => 1 << 0,
            Capability::ManageCourts => 1 << 1,
            Capability::CreateTraining => 1 << 2,
            Capability::ManageLeagues => 1 << 3,
            Capability::ManageClub => 1 << 4,
        }
    }

    /// Lowercase name used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageMembers => "manage_members",
            Capability::ManageCourts => "manage_courts",
            Capability::CreateTraining => "create_training",
            Capability::ManageLeagues => "manage_leagues",
            Capability::ManageClub => "manage_club",
        }
    }

    /// Parse a config name. Unknown names yield `None`.
    pub fn parse_capability(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manage_members" => Some(Capability::ManageMembers),
            "manage_courts" => Some(Capability::ManageCourts),
            "create_training" => Some(Capability::CreateTraining),
            "manage_leagues" => Some(Capability::ManageLeagues),
            "manage_club" => Some(Capability::ManageClub),
            _ => None,
        }
    }
}

impl TryFrom<String> for Capability {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Capability::parse_capability(&s).ok_or_else(|| format!("unknown capability '{s}'"))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of capabilities with a single `has` query.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    pub fn has(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// True if at least one of `capabilities` is held.
    pub fn has_any(self, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.has(*c))
    }

    pub fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.insert(capability);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Held capabilities in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.has(*c))
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::EMPTY, |set, c| set.with(c))
    }
}

/// One user's membership in one club, as delivered by the backend API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMembership {
    pub club: Club,
    /// At most one membership per user should set this. Not enforced here.
    #[serde(default)]
    pub is_preferred_club: bool,
    #[serde(default)]
    pub can_manage_members: bool,
    #[serde(default)]
    pub can_manage_courts: bool,
    #[serde(default)]
    pub can_create_training: bool,
    #[serde(default)]
    pub can_manage_leagues: bool,
    #[serde(default)]
    pub can_manage_club: bool,
}

impl ClubMembership {
    /// A membership with no capabilities and no preferred flag.
    pub fn new(club_id: impl Into<ClubId>, club_name: impl Into<String>) -> Self {
        Self {
            club: Club {
                id: club_id.into(),
                name: club_name.into(),
            },
            is_preferred_club: false,
            can_manage_members: false,
            can_manage_courts: false,
            can_create_training: false,
            can_manage_leagues: false,
            can_manage_club: false,
        }
    }

    pub fn club_id(&self) -> ClubId {
        self.club.id
    }

    /// Collapse the individual flags into a `CapabilitySet`.
    pub fn capabilities(&self) -> CapabilitySet {
        let mut set = CapabilitySet::EMPTY;
        for (held, capability) in [
            (self.can_manage_members, Capability::ManageMembers),
            (self.can_manage_courts, Capability::ManageCourts),
            (self.can_create_training, Capability::CreateTraining),
            (self.can_manage_leagues, Capability::ManageLeagues),
            (self.can_manage_club, Capability::ManageClub),
        ] {
            if held {
                set.insert(capability);
            }
        }
        set
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().has(capability)
    }

    /// Builder-style setter for the flag backing `capability`.
    pub fn grant(mut self, capability: Capability) -> Self {
        match capability {
            Capability::ManageMembers => self.can_manage_members = true,
            Capability::ManageCourts => self.can_manage_courts = true,
            Capability::CreateTraining => self.can_create_training = true,
            Capability::ManageLeagues => self.can_manage_leagues = true,
            Capability::ManageClub => self.can_manage_club = true,
        }
        self
    }

    pub fn preferred(mut self) -> Self {
        self.is_preferred_club = true;
        self
    }
}

/// Authenticated user as supplied by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    /// Empty for users who are not members of any club.
    #[serde(default)]
    pub memberships: Vec<ClubMembership>,
}
