use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

use roster_shared::filter::{ALL, FilterSelection};
use roster_shared::vocation::VOCATIONS;

use crate::fetch;
use crate::nav_menu::NavMenu;
use crate::roster::{
    InitOutcome, MemberCard, RosterConfig, RosterSummary, RosterWidget, ScrollMetrics,
};
use crate::time_format::local_now;

struct ScrollBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn()>,
}

thread_local! {
    static SCROLL_BINDING: RefCell<Option<ScrollBinding>> = const { RefCell::new(None) };
}

fn unbind_scroll() {
    SCROLL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old
                .window
                .remove_event_listener_with_callback("scroll", old.handler.as_ref().unchecked_ref());
        }
    });
}

fn document_scroll_metrics() -> Option<ScrollMetrics> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: root.scroll_top() as f64,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

/// Root component: navigation header plus the guild roster.
#[component]
pub fn App(config: RosterConfig) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-6 py-4 border-b border-indigo-700/40">
            <a href="index.html" class="text-xl font-bold text-slate-100">"Guild"</a>
            <NavMenu />
        </header>
        <main class="max-w-6xl mx-auto px-4 py-8">
            <RosterView config=config />
        </main>
    }
}

/// Filter controls, card grid, loading indicator and summary lines.
#[component]
fn RosterView(config: RosterConfig) -> impl IntoView {
    let api_url = config.api_url.clone();
    let widget: StoredValue<RosterWidget> = StoredValue::new(RosterWidget::new(config));
    let cards: RwSignal<Vec<MemberCard>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<&'static str>> = RwSignal::new(None);
    let summary: RwSignal<Option<RosterSummary>> = RwSignal::new(None);
    let rank_options: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let status_filter: RwSignal<String> = RwSignal::new(ALL.to_string());
    let vocation_filter: RwSignal<String> = RwSignal::new(ALL.to_string());
    let rank_filter: RwSignal<String> = RwSignal::new(ALL.to_string());

    // One-time roster fetch.
    Effect::new(move || {
        let api_url = api_url.clone();
        spawn_local(async move {
            let result = fetch::fetch_roster(&api_url).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Erro ao carregar dados: {e}").into());
            }
            let mut outcome = None;
            widget.update_value(|w| outcome = Some(w.initialize(result, local_now())));
            match outcome {
                Some(InitOutcome::Loaded {
                    rank_options: ranks,
                    first_page,
                    summary: totals,
                }) => {
                    rank_options.set(ranks);
                    cards.set(first_page);
                    summary.set(Some(totals));
                }
                Some(InitOutcome::Failed { message }) => {
                    cards.set(Vec::new());
                    error.set(Some(message));
                }
                None => {}
            }
            loading.set(false);
        });
    });

    // Single window scroll listener; the widget decides whether a page loads.
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        unbind_scroll();

        let handler = Closure::<dyn Fn()>::new(move || {
            if !widget.with_value(|w| w.scroll_active()) {
                return;
            }
            let Some(metrics) = document_scroll_metrics() else {
                return;
            };
            let mut batch = None;
            widget.update_value(|w| batch = w.on_scroll(metrics));
            if let Some(batch) = batch {
                loading.set(true);
                cards.update(|rendered| rendered.extend(batch));
                loading.set(false);
            }
        });
        if window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            SCROLL_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(ScrollBinding {
                    window: window.clone(),
                    handler,
                });
            });
        }
        on_cleanup(unbind_scroll);
    });

    let apply_filters = move || {
        let selection = FilterSelection::from_values(
            &status_filter.get_untracked(),
            &vocation_filter.get_untracked(),
            &rank_filter.get_untracked(),
        );
        loading.set(true);
        let mut batch = Vec::new();
        widget.update_value(|w| batch = w.apply_filters(selection));
        error.set(None);
        cards.set(batch);
        loading.set(false);
    };

    view! {
        <div class="flex flex-wrap gap-4 justify-center mb-8">
            <select
                class="bg-slate-800 text-slate-200 rounded-lg px-3 py-2 border border-indigo-700/40"
                on:change=move |ev| {
                    status_filter.set(event_target_value(&ev));
                    apply_filters();
                }
            >
                <option value="all">"Todos"</option>
                <option value="online">"Online"</option>
                <option value="offline">"Offline"</option>
            </select>
            <select
                class="bg-slate-800 text-slate-200 rounded-lg px-3 py-2 border border-indigo-700/40"
                on:change=move |ev| {
                    vocation_filter.set(event_target_value(&ev));
                    apply_filters();
                }
            >
                <option value="all">"Todas as vocações"</option>
                {VOCATIONS
                    .into_iter()
                    .map(|(name, _)| view! { <option value=name>{name}</option> })
                    .collect_view()}
            </select>
            <select
                class="bg-slate-800 text-slate-200 rounded-lg px-3 py-2 border border-indigo-700/40"
                on:change=move |ev| {
                    rank_filter.set(event_target_value(&ev));
                    apply_filters();
                }
            >
                <option value="all">"Todos os ranks"</option>
                <For
                    each=move || rank_options.get()
                    key=|rank| rank.clone()
                    children=move |rank: String| {
                        let label = rank.clone();
                        view! { <option value=rank>{label}</option> }
                    }
                />
            </select>
        </div>
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p class="col-span-full text-center text-red-400 text-2xl">{message}</p>
                        }
                    })
            }}
            <For
                each=move || cards.get()
                key=|card| card.key()
                children=move |card: MemberCard| view! { <MemberCardView card=card /> }
            />
        </div>
        <div class=move || {
            if loading.get() {
                "text-center text-slate-400 py-6"
            } else {
                "text-center text-slate-400 py-6 hidden"
            }
        }>"Carregando..."</div>
        {move || {
            summary
                .get()
                .map(|totals| {
                    view! {
                        <p class="text-center text-slate-400 mt-8 text-lg">{totals.counters_line()}</p>
                        <p class="text-center text-slate-500 mt-2 mb-8">{totals.updated_line()}</p>
                    }
                })
        }}
    }
}

#[component]
fn MemberCardView(card: MemberCard) -> impl IntoView {
    let class = card.class();
    let style = card.style();
    let indicator = card.indicator_class();
    let MemberCard {
        name,
        detail_href,
        rank,
        vocation,
        level,
        joined,
        ..
    } = card;

    view! {
        <div class=class style=style>
            <div class=indicator />
            <div class="absolute inset-0 bg-gradient-to-b from-black/70 via-black/40 to-black/80" />
            <div class="relative z-10">
                <h3 class="text-xl font-bold text-slate-100 mb-2 drop-shadow">
                    <a href=detail_href class="hover:text-indigo-300 transition">{name}</a>
                </h3>
                <p class="text-slate-300 text-sm">"Rank: "<span class="text-indigo-200">{rank}</span></p>
                <p class="text-slate-300 text-sm">"Vocation: "<span class="text-indigo-200">{vocation}</span></p>
                <p class="text-slate-300 text-sm">"Level: "<span class="text-indigo-200">{level}</span></p>
                <p class="text-slate-300 text-sm">"Joined: "<span class="text-indigo-200">{joined}</span></p>
            </div>
        </div>
    }
}
