use std::collections::HashSet;

use crate::member::Member;

/// Select value meaning "no narrowing" for a filter control.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterChoice {
    #[default]
    All,
    Only(String),
}

impl FilterChoice {
    /// Build from a `<select>` value; `"all"` disables the predicate.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == field,
        }
    }
}

/// Current status / vocation / rank choices of the three filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub status: FilterChoice,
    pub vocation: FilterChoice,
    pub rank: FilterChoice,
}

impl FilterSelection {
    pub fn from_values(status: &str, vocation: &str, rank: &str) -> Self {
        Self {
            status: FilterChoice::from_value(status),
            vocation: FilterChoice::from_value(vocation),
            rank: FilterChoice::from_value(rank),
        }
    }

    pub fn matches(&self, member: &Member) -> bool {
        self.status.matches(member.status.as_str())
            && self.vocation.matches(&member.vocation)
            && self.rank.matches(&member.rank)
    }

    /// Narrow `members` by status, then vocation, then rank, keeping order.
    pub fn apply<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        members.iter().filter(|member| self.matches(member)).collect()
    }
}

/// Distinct ranks in first-seen order.
pub fn distinct_ranks(members: &[Member]) -> Vec<String> {
    let mut seen = HashSet::new();
    members
        .iter()
        .filter(|member| seen.insert(member.rank.as_str()))
        .map(|member| member.rank.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{JoinedAt, MemberStatus};

    fn member(name: &str, rank: &str, vocation: &str, status: MemberStatus) -> Member {
        Member {
            name: name.to_string(),
            rank: rank.to_string(),
            vocation: vocation.to_string(),
            level: 100,
            status,
            joined: JoinedAt::from("2024-01-01"),
        }
    }

    fn sample() -> Vec<Member> {
        vec![
            member("A", "Leader", "Elite Knight", MemberStatus::Online),
            member("B", "Member", "Druid", MemberStatus::Offline),
            member("C", "Member", "Elite Knight", MemberStatus::Online),
            member("D", "Vice", "Elite Knight", MemberStatus::Offline),
            member("E", "Member", "Elite Knight", MemberStatus::Online),
        ]
    }

    fn names(members: &[&Member]) -> Vec<String> {
        members.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn all_selection_keeps_everything_in_order() {
        let members = sample();
        let filtered = FilterSelection::default().apply(&members);
        assert_eq!(names(&filtered), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn status_online_returns_only_online_members() {
        let members = sample();
        let selection = FilterSelection::from_values("online", ALL, ALL);
        let filtered = selection.apply(&members);
        assert_eq!(names(&filtered), vec!["A", "C", "E"]);
        assert!(filtered.iter().all(|m| m.status == MemberStatus::Online));
    }

    #[test]
    fn combined_filters_are_the_intersection_of_each_predicate() {
        let members = sample();
        let selection = FilterSelection::from_values("online", "Elite Knight", "Member");
        let combined = names(&selection.apply(&members));

        let by_status = FilterSelection::from_values("online", ALL, ALL);
        let by_vocation = FilterSelection::from_values(ALL, "Elite Knight", ALL);
        let by_rank = FilterSelection::from_values(ALL, ALL, "Member");
        let intersection: Vec<String> = members
            .iter()
            .filter(|m| by_status.matches(m) && by_vocation.matches(m) && by_rank.matches(m))
            .map(|m| m.name.clone())
            .collect();

        assert_eq!(combined, vec!["C", "E"]);
        assert_eq!(combined, intersection);

        // Narrowing rank first, then status, gives the same set.
        let rank_first: Vec<Member> = by_rank.apply(&members).into_iter().cloned().collect();
        let then_vocation: Vec<Member> = by_vocation.apply(&rank_first).into_iter().cloned().collect();
        assert_eq!(names(&by_status.apply(&then_vocation)), combined);
    }

    #[test]
    fn unknown_values_match_nothing() {
        let members = sample();
        let selection = FilterSelection::from_values("away", ALL, ALL);
        assert!(selection.apply(&members).is_empty());
    }

    #[test]
    fn distinct_ranks_keep_first_seen_order() {
        assert_eq!(distinct_ranks(&sample()), vec!["Leader", "Member", "Vice"]);
        assert!(distinct_ranks(&[]).is_empty());
    }

    #[test]
    fn select_values_map_to_choices() {
        assert_eq!(FilterChoice::from_value("all"), FilterChoice::All);
        assert_eq!(
            FilterChoice::from_value("Vice"),
            FilterChoice::Only("Vice".to_string())
        );
        assert_eq!(
            FilterSelection::from_values("all", "all", "all"),
            FilterSelection::default()
        );
    }
}
