use chrono::NaiveDateTime;

use roster_shared::{
    FilterSelection, GuildRoster, Member, MemberStatus, background_for_vocation, distinct_ranks,
};

use crate::colors::glow_shadow_css;
use crate::fetch::FetchFailure;
use crate::time_format::{format_date_pt_br, format_datetime_pt_br};

pub const PAGE_SIZE: usize = 20;
/// Distance from the document bottom (px) under which the next page loads.
pub const SCROLL_TRIGGER_PX: f64 = 300.0;
pub const ENTRANCE_STAGGER_SECS: f64 = 0.05;
pub const DEFAULT_API_URL: &str = "/api/guild";
pub const FETCH_ERROR_MESSAGE: &str = "Erro ao carregar a lista de jogadores.";

const CARD_CLASS: &str = "player-card relative p-5 rounded-2xl shadow-xl border border-indigo-700/40 hover:border-indigo-400 hover:shadow-indigo-700/30 transition-all duration-300 fade-in overflow-hidden";

#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    pub api_url: String,
    pub page_size: usize,
    pub scroll_trigger_px: f64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: PAGE_SIZE,
            scroll_trigger_px: SCROLL_TRIGGER_PX,
        }
    }
}

impl RosterConfig {
    pub fn with_api_url(api_url: Option<String>) -> Self {
        match api_url.filter(|url| !url.trim().is_empty()) {
            Some(api_url) => Self {
                api_url,
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

/// Everything the view needs to draw one member card.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    /// Bumped on every filter change so stale cards never share a key.
    pub generation: u64,
    /// Index of the member within the filtered sequence.
    pub position: usize,
    pub name: String,
    pub detail_href: String,
    pub rank: String,
    pub vocation: String,
    pub level: u32,
    pub joined: String,
    pub status: MemberStatus,
    pub background_image: &'static str,
    pub entrance_delay_secs: f64,
}

impl MemberCard {
    fn build(member: &Member, generation: u64, position: usize, batch_index: usize) -> Self {
        Self {
            generation,
            position,
            name: member.name.clone(),
            detail_href: member.detail_href(),
            rank: member.rank.clone(),
            vocation: member.vocation.clone(),
            level: member.level,
            joined: member
                .joined
                .date()
                .map(format_date_pt_br)
                .unwrap_or_else(|| member.joined.raw().to_string()),
            status: member.status,
            background_image: background_for_vocation(&member.vocation),
            entrance_delay_secs: batch_index as f64 * ENTRANCE_STAGGER_SECS,
        }
    }

    pub fn key(&self) -> (u64, usize) {
        (self.generation, self.position)
    }

    pub fn class(&self) -> String {
        if self.status.is_online() {
            format!("{CARD_CLASS} online-glow")
        } else {
            CARD_CLASS.to_string()
        }
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "animation-delay: {:.2}s; background-image: url('{}'); background-size: contain; background-position: right; background-repeat: no-repeat;",
            self.entrance_delay_secs, self.background_image
        );
        if self.status.is_online() {
            style.push_str(&format!(
                " box-shadow: {};",
                glow_shadow_css(self.status.color_rgb())
            ));
        }
        style
    }

    pub fn indicator_class(&self) -> String {
        format!(
            "absolute top-3 right-3 w-3 h-3 rounded-full {} shadow-md",
            self.status.indicator_class()
        )
    }
}

/// Aggregate counters shown under the roster after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub players_online: u32,
    pub players_offline: u32,
    pub members_total: u32,
    pub fetched_at: NaiveDateTime,
}

impl RosterSummary {
    pub fn counters_line(&self) -> String {
        format!(
            "Jogadores Online: {} | Offline: {} | Total: {}",
            self.players_online, self.players_offline, self.members_total
        )
    }

    pub fn updated_line(&self) -> String {
        format!("Última atualização: {}", format_datetime_pt_br(self.fetched_at))
    }
}

/// Document scroll position, as read from `document.documentElement`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn distance_from_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    Loaded {
        rank_options: Vec<String>,
        first_page: Vec<MemberCard>,
        summary: RosterSummary,
    },
    Failed {
        message: &'static str,
    },
}

/// Paginated, filterable roster state. Pure: it hands back card descriptions
/// and leaves every DOM write to the caller.
#[derive(Debug, Clone)]
pub struct RosterWidget {
    config: RosterConfig,
    members: Vec<Member>,
    selection: FilterSelection,
    cursor: usize,
    generation: u64,
    scroll_active: bool,
}

impl RosterWidget {
    pub fn new(config: RosterConfig) -> Self {
        Self {
            config,
            members: Vec::new(),
            selection: FilterSelection::default(),
            cursor: 0,
            generation: 0,
            scroll_active: false,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_active(&self) -> bool {
        self.scroll_active
    }

    /// Consume the result of the one-time roster fetch.
    pub fn initialize(
        &mut self,
        result: Result<GuildRoster, FetchFailure>,
        fetched_at: NaiveDateTime,
    ) -> InitOutcome {
        let roster = match result {
            Ok(roster) => roster,
            Err(_) => {
                self.scroll_active = false;
                return InitOutcome::Failed {
                    message: FETCH_ERROR_MESSAGE,
                };
            }
        };

        self.members = roster.members;
        self.cursor = 0;
        self.scroll_active = true;
        let rank_options = distinct_ranks(&self.members);
        let first_page = self.render_page();

        InitOutcome::Loaded {
            rank_options,
            first_page,
            summary: RosterSummary {
                players_online: roster.players_online,
                players_offline: roster.players_offline,
                members_total: roster.members_total,
                fetched_at,
            },
        }
    }

    /// Members passing the current filter selection, in roster order.
    pub fn filtered(&self) -> Vec<&Member> {
        self.selection.apply(&self.members)
    }

    /// Render `[cursor, cursor + page_size)` of the filtered sequence and
    /// advance the cursor by a full page. Once the cursor reaches the end,
    /// scroll pagination stops for this view.
    pub fn render_page(&mut self) -> Vec<MemberCard> {
        let (cards, source_len) = {
            let source = self.filtered();
            let start = self.cursor.min(source.len());
            let end = (self.cursor + self.config.page_size).min(source.len());
            let cards = source[start..end]
                .iter()
                .enumerate()
                .map(|(batch_index, member)| {
                    MemberCard::build(member, self.generation, start + batch_index, batch_index)
                })
                .collect::<Vec<_>>();
            (cards, source.len())
        };

        self.cursor += self.config.page_size;
        if self.cursor >= source_len {
            self.scroll_active = false;
        }
        cards
    }

    /// Next page for a scroll event, if the document is near its bottom.
    ///
    /// The guard compares the cursor against the unfiltered roster length, so
    /// a short filtered view can see one extra, empty page.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<Vec<MemberCard>> {
        if !self.scroll_active {
            return None;
        }
        if metrics.distance_from_bottom() >= self.config.scroll_trigger_px
            || self.cursor >= self.members.len()
        {
            return None;
        }
        Some(self.render_page())
    }

    /// Replace the selection and restart from the first page. The returned
    /// cards replace everything rendered so far.
    pub fn apply_filters(&mut self, selection: FilterSelection) -> Vec<MemberCard> {
        self.selection = selection;
        self.cursor = 0;
        self.generation = self.generation.wrapping_add(1);
        let cards = self.render_page();
        self.scroll_active = true;
        cards
    }
}
