use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use crate::routes::Route;
use crate::vm::{OptionVm, SetupForm};

#[component]
pub fn SetupView() -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(SetupForm::default);
    let mut error = use_signal(|| None::<String>);

    let on_start = use_callback(move |()| match form.read().launch_query() {
        Ok(query) => {
            debug!(%query, "launching quiz");
            navigator.push(Route::Quiz { query });
        }
        Err(err) => error.set(Some(err.to_string())),
    });

    let current = *form.read();

    rsx! {
        div { class: "page setup",
            h2 { "Trivia Quiz" }
            p { class: "muted", "Pick a topic and test yourself." }

            div { class: "field",
                label { r#for: "setup-category", "Category" }
                select {
                    id: "setup-category",
                    onchange: move |evt| form.write().set_category(&evt.value()),
                    OptionList { options: current.category_options() }
                }
            }

            div { class: "field",
                label { r#for: "setup-difficulty", "Difficulty" }
                select {
                    id: "setup-difficulty",
                    onchange: move |evt| form.write().set_difficulty(&evt.value()),
                    OptionList { options: current.difficulty_options() }
                }
            }

            div { class: "field",
                label { r#for: "setup-amount", "Number of questions" }
                select {
                    id: "setup-amount",
                    onchange: move |evt| form.write().set_amount(&evt.value()),
                    OptionList { options: current.amount_options() }
                }
            }

            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }

            button {
                class: "btn primary",
                id: "setup-start",
                onclick: move |_| on_start.call(()),
                "Start Quiz"
            }
        }
    }
}

#[component]
fn OptionList(options: Vec<OptionVm>) -> Element {
    rsx! {
        for item in options {
            option {
                key: "{item.value}",
                value: "{item.value}",
                selected: item.selected,
                "{item.label}"
            }
        }
    }
}
