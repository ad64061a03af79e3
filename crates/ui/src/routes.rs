use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{QuizView, ResultsView, SetupView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SetupView)] Setup {},
        #[route("/quiz?:..query", QuizView)] Quiz { query: String },
        #[route("/results/:score/:total", ResultsView)] Results { score: usize, total: usize },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Setup {}, class: "brand", "Trivia Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
