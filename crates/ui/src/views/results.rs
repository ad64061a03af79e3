use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::map_results;

#[component]
pub fn ResultsView(score: usize, total: usize) -> Element {
    let navigator = use_navigator();
    let results = map_results(score, total);

    rsx! {
        div { class: "page results",
            h2 { "Quiz Complete!" }
            div { class: "{results.tier_class}",
                span { class: "emoji", "{results.emoji}" }
                p { class: "tier-message", "{results.message}" }
            }
            p { class: "final-score", "{results.score_label}" }
            p { class: "percent", "{results.percent_label}" }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {results.percent}%" }
            }
            button {
                class: "btn primary",
                id: "results-restart",
                onclick: move |_| {
                    navigator.push(Route::Setup {});
                },
                "Start New Quiz"
            }
        }
    }
}
