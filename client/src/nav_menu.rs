use leptos::prelude::*;

/// Links listed in the mobile navigation panel.
pub const NAV_LINKS: [(&str, &str); 2] = [("Início", "index.html"), ("Membros", "guild.html")];

const PANEL_BASE: &str = "fixed top-0 left-0 z-40 h-full w-64 bg-slate-900 border-r border-indigo-700/40 transform transition-transform duration-300";
const OVERLAY_BASE: &str = "fixed inset-0 z-30 bg-black/60 transition-opacity duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenuState {
    #[default]
    Hidden,
    Visible,
}

impl NavMenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    /// Overlay, link and button clicks always hide the panel.
    pub fn closed(self) -> Self {
        Self::Hidden
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Hidden => "-translate-x-full",
            Self::Visible => "translate-x-0",
        }
    }

    pub fn overlay_class(self) -> &'static str {
        match self {
            Self::Hidden => "opacity-0 pointer-events-none",
            Self::Visible => "opacity-100 pointer-events-auto",
        }
    }

    /// Label for the toggle button: it describes what a click will do.
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Hidden => "Abrir menu",
            Self::Visible => "Fechar menu",
        }
    }
}

/// Mobile navigation: hamburger button, slide-in panel and dimming overlay.
#[component]
pub fn NavMenu() -> impl IntoView {
    let state: RwSignal<NavMenuState> = RwSignal::new(NavMenuState::Hidden);
    let close = move || state.update(|s| *s = s.closed());

    view! {
        <button
            class="md:hidden p-2 text-slate-200 hover:text-indigo-300 transition"
            aria-label=move || state.get().aria_label()
            on:click=move |_| state.update(|s| *s = s.toggled())
        >
            <svg
                class=move || if state.get().is_visible() { "w-6 h-6 hidden" } else { "w-6 h-6" }
                xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor"
            >
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
            </svg>
            <svg
                class=move || if state.get().is_visible() { "w-6 h-6" } else { "w-6 h-6 hidden" }
                xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor"
            >
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
            </svg>
        </button>
        <div
            class=move || format!("{OVERLAY_BASE} {}", state.get().overlay_class())
            on:click=move |_| close()
        />
        <nav class=move || format!("{PANEL_BASE} {}", state.get().panel_class())>
            <ul class="flex flex-col gap-2 p-6 mt-12">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| view! {
                        <li>
                            <a
                                href=href
                                class="block py-2 text-slate-200 hover:text-indigo-300 transition"
                                on:click=move |_| close()
                            >
                                {label}
                            </a>
                        </li>
                    })
                    .collect_view()}
                <li>
                    <button
                        class="mt-4 text-sm text-slate-400 hover:text-indigo-300 transition"
                        on:click=move |_| close()
                    >
                        "Fechar"
                    </button>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::NavMenuState;

    #[test]
    fn starts_hidden() {
        let state = NavMenuState::default();
        assert!(!state.is_visible());
        assert_eq!(state.panel_class(), "-translate-x-full");
        assert_eq!(state.overlay_class(), "opacity-0 pointer-events-none");
        assert_eq!(state.aria_label(), "Abrir menu");
    }

    #[test]
    fn toggle_opens_then_closes() {
        let open = NavMenuState::Hidden.toggled();
        assert_eq!(open, NavMenuState::Visible);
        assert_eq!(open.panel_class(), "translate-x-0");
        assert_eq!(open.overlay_class(), "opacity-100 pointer-events-auto");
        assert_eq!(open.aria_label(), "Fechar menu");
        assert_eq!(open.toggled(), NavMenuState::Hidden);
    }

    #[test]
    fn close_hides_from_either_state() {
        let closed = NavMenuState::Visible.closed();
        assert_eq!(closed, NavMenuState::Hidden);
        assert_eq!(closed.panel_class(), "-translate-x-full");
        assert_eq!(closed.overlay_class(), "opacity-0 pointer-events-none");
        assert_eq!(closed.aria_label(), "Abrir menu");
        assert_eq!(NavMenuState::Hidden.closed(), NavMenuState::Hidden);
        assert_eq!(NavMenuState::Hidden.toggled().closed(), NavMenuState::Hidden);
    }
}
