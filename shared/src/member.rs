use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Envelope returned by the guild endpoint: `{ "guild": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildPayload {
    pub guild: GuildRoster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildRoster {
    pub members: Vec<Member>,
    pub players_online: u32,
    pub players_offline: u32,
    pub members_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub rank: String,
    pub vocation: String,
    pub level: u32,
    pub status: MemberStatus,
    pub joined: JoinedAt,
}

/// Detail page each member card links to.
pub const PLAYER_PAGE: &str = "player.html";

impl Member {
    /// `player.html?name=<url-encoded name>`
    pub fn detail_href(&self) -> String {
        format!("{PLAYER_PAGE}?name={}", urlencoding::encode(&self.name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Online,
    Offline,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    pub fn is_online(self) -> bool {
        self == Self::Online
    }

    /// Tailwind class of the small status dot on a member card.
    pub fn indicator_class(self) -> &'static str {
        match self {
            Self::Online => "bg-green-500",
            Self::Offline => "bg-red-500",
        }
    }

    /// Indicator colour as RGB bytes (green-500 / red-500).
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Online => (34, 197, 94),
            Self::Offline => (239, 68, 68),
        }
    }
}

/// Join moment of a member, kept as sent. The upstream API sends plain
/// calendar dates (`2023-05-12`); timestamps are read when a card is built,
/// so an odd value only affects its own card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinedAt(String);

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl JoinedAt {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Calendar date the member joined on, in the timestamp's own offset.
    /// `None` when the value is not a recognised date shape.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|ts| ts.date())
    }
}

impl From<&str> for JoinedAt {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upstream_guild_payload() {
        let payload = r#"{
            "guild": {
                "name": "Example Guild",
                "members": [
                    {
                        "name": "Knight Rider",
                        "title": "",
                        "rank": "Leader",
                        "vocation": "Elite Knight",
                        "level": 512,
                        "joined": "2021-03-04",
                        "status": "online"
                    },
                    {
                        "name": "Druid Mage",
                        "rank": "Member",
                        "vocation": "Druid",
                        "level": 88,
                        "joined": "2024-11-30T18:00:00Z",
                        "status": "offline"
                    }
                ],
                "players_online": 1,
                "players_offline": 1,
                "members_total": 2
            }
        }"#;

        let parsed: GuildPayload = serde_json::from_str(payload).expect("payload should parse");
        let roster = parsed.guild;
        assert_eq!(roster.members.len(), 2);
        assert_eq!(roster.members[0].status, MemberStatus::Online);
        assert_eq!(
            roster.members[0].joined.date(),
            NaiveDate::from_ymd_opt(2021, 3, 4)
        );
        assert_eq!(
            roster.members[1].joined.date(),
            NaiveDate::from_ymd_opt(2024, 11, 30)
        );
        assert_eq!(roster.members_total, 2);
    }

    #[test]
    fn member_missing_a_field_fails_the_whole_payload() {
        let payload = r#"{
            "guild": {
                "members": [{ "name": "NoRank", "vocation": "Druid", "level": 1,
                              "joined": "2024-01-01", "status": "online" }],
                "players_online": 1,
                "players_offline": 0,
                "members_total": 1
            }
        }"#;
        assert!(serde_json::from_str::<GuildPayload>(payload).is_err());
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(serde_json::from_str::<MemberStatus>(r#""away""#).is_err());
    }

    #[test]
    fn odd_join_dates_do_not_fail_the_roster() {
        let payload = r#"{
            "guild": {
                "members": [
                    {"name": "A", "rank": "Member", "vocation": "Druid", "level": 10,
                     "joined": "2020-01-01", "status": "online"},
                    {"name": "B", "rank": "Member", "vocation": "Knight", "level": 20,
                     "joined": "2020-02-02 10:00:00", "status": "offline"},
                    {"name": "C", "rank": "Member", "vocation": "Monk", "level": 30,
                     "joined": "some day", "status": "offline"}
                ],
                "players_online": 1,
                "players_offline": 2,
                "members_total": 3
            }
        }"#;
        let parsed: GuildPayload = serde_json::from_str(payload).expect("payload should parse");
        let members = parsed.guild.members;
        assert_eq!(members.len(), 3);
        assert_eq!(members[1].joined.date(), NaiveDate::from_ymd_opt(2020, 2, 2));
        assert_eq!(members[2].joined.date(), None);
        assert_eq!(members[2].joined.raw(), "some day");
    }

    #[test]
    fn join_date_shapes() {
        let date = |raw: &str| JoinedAt::from(raw).date();
        let nov_30 = NaiveDate::from_ymd_opt(2024, 11, 30);
        assert_eq!(date("2024-11-30"), nov_30);
        assert_eq!(date(" 2024-11-30 "), nov_30);
        assert_eq!(date("2024-11-30T18:00:00Z"), nov_30);
        assert_eq!(date("2024-11-30T10:15:00.250"), nov_30);
        assert_eq!(date("2024-11-30 23:59:59"), nov_30);
        assert_eq!(date("yesterday"), None);
        assert_eq!(date(""), None);
    }

    #[test]
    fn offset_timestamps_keep_their_own_calendar_day() {
        assert_eq!(
            JoinedAt::from("2024-11-30T23:30:00-03:00").date(),
            NaiveDate::from_ymd_opt(2024, 11, 30)
        );
        assert_eq!(
            JoinedAt::from("2024-12-01T00:30:00+02:00").date(),
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
    }

    #[test]
    fn detail_href_url_encodes_the_name() {
        let payload: GuildPayload = serde_json::from_str(
            r#"{"guild":{"members":[{"name":"Sir Ávila & Co","rank":"Member",
            "vocation":"Knight","level":8,"joined":"2020-02-02","status":"offline"}],
            "players_online":0,"players_offline":1,"members_total":1}}"#,
        )
        .expect("payload should parse");
        assert_eq!(
            payload.guild.members[0].detail_href(),
            "player.html?name=Sir%20%C3%81vila%20%26%20Co"
        );
    }

    #[test]
    fn status_colors_differ() {
        assert_eq!(MemberStatus::Online.indicator_class(), "bg-green-500");
        assert_eq!(MemberStatus::Offline.indicator_class(), "bg-red-500");
        assert_ne!(
            MemberStatus::Online.color_rgb(),
            MemberStatus::Offline.color_rgb()
        );
    }
}
