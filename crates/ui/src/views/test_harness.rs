use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{InMemoryQuestionSource, QuizLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizView, ResultsView, SetupView};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Setup,
    Quiz(String),
    Results { score: usize, total: usize },
}

/// Lets a test unmount the view under test without dropping the dom.
#[derive(Clone, Default)]
pub struct MountSwitch {
    mounted: Rc<RefCell<Option<Signal<bool>>>>,
}

#[derive(Clone, Copy)]
struct Mounted(Signal<bool>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    mount: MountSwitch,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.quiz_handles.clone());
    let mounted = use_signal(|| true);
    use_hook(|| *props.mount.mounted.borrow_mut() = Some(mounted));
    use_context_provider(|| Mounted(mounted));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    // Same path as the app route so completion navigation lands here.
    #[route("/results/:score/:total", ResultsView)]
    Results { score: usize, total: usize },
}

#[component]
fn Root() -> Element {
    let Mounted(mounted) = use_context::<Mounted>();
    if !mounted() {
        return rsx! {};
    }
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Setup => rsx! { SetupView {} },
        ViewKind::Quiz(query) => rsx! { QuizView { query } },
        ViewKind::Results { score, total } => rsx! { ResultsView { score, total } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub source: Arc<InMemoryQuestionSource>,
    pub quiz_handles: QuizTestHandles,
    mount: MountSwitch,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Pick an answer the way a click on its button would.
    pub fn choose(&mut self, answer: &str) {
        let choose = self.quiz_handles.choose();
        let answer = answer.to_string();
        self.dom.in_runtime(|| choose.call(answer));
        drive_dom(&mut self.dom);
    }

    /// Drive the dom until the rendered html contains `needle` or ~2s pass.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    /// Remove the view under test from the tree.
    pub fn unmount(&mut self) {
        let mounted = (*self.mount.mounted.borrow()).expect("mount switch registered");
        self.dom.in_runtime(|| {
            let mut mounted = mounted;
            mounted.set(false);
        });
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    source: InMemoryQuestionSource,
    feedback_delay: Duration,
) -> ViewHarness {
    let source = Arc::new(source);
    let quiz_loop = Arc::new(
        QuizLoopService::new(source.clone())
            .with_feedback_delay(feedback_delay)
            .with_shuffle_seed(7),
    );
    let quiz_handles = QuizTestHandles::default();
    let mount = MountSwitch::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { quiz_loop }),
            view,
            quiz_handles: quiz_handles.clone(),
            mount: mount.clone(),
        },
    );

    ViewHarness {
        dom,
        source,
        quiz_handles,
        mount,
    }
}
