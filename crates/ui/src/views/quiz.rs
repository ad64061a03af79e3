use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::Advance;
use services::{AnswerResult, SessionLauncher};
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChoiceVm, QuizScreenVm, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;

#[component]
pub fn QuizView(query: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let vm = use_signal(|| None::<QuizVm>);
    // At most one feedback delay runs at a time.
    let feedback_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    {
        let feedback_task = Rc::clone(&feedback_task);
        use_drop(move || {
            if let Some(task) = feedback_task.take() {
                debug!("quiz view dropped, cancelling pending advance");
                task.cancel();
            }
        });
    }

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let query = query.clone();
        let mut vm = vm;

        async move {
            let request = SessionLauncher::from_query(&query)
                .map_err(|err| ViewError::from_request(&err))?;
            let started = start_quiz(&quiz_loop, &request).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let on_choose = {
        let quiz_loop = quiz_loop.clone();
        let feedback_task = Rc::clone(&feedback_task);
        use_callback(move |answer: String| {
            let mut vm = vm;

            let outcome = match vm.write().as_mut() {
                Some(current) => current.choose(&quiz_loop, &answer),
                None => return,
            };
            let AnswerResult::Accepted { pending, .. } = outcome else {
                return;
            };

            let quiz_loop = quiz_loop.clone();
            let slot = Rc::clone(&feedback_task);
            #[cfg(test)]
            let test_handles = try_consume_context::<QuizTestHandles>();
            let task = spawn(async move {
                let ticket = pending.elapsed().await;
                #[cfg(test)]
                {
                    if let Some(handles) = &test_handles {
                        handles.record_elapsed();
                    }
                }
                slot.set(None);
                let advance = vm
                    .write()
                    .as_mut()
                    .map(|current| current.finish_feedback(&quiz_loop, ticket));
                if let Some(Advance::Completed(result)) = advance {
                    navigator.push(Route::Results {
                        score: result.score(),
                        total: result.total(),
                    });
                }
            });
            feedback_task.set(Some(task));
        })
    };

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(on_choose);
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Key::Character(value) = evt.data.key() {
            let answer = vm
                .read()
                .as_ref()
                .and_then(|current| current.answer_for_shortcut(&value));
            if let Some(answer) = answer {
                evt.prevent_default();
                on_choose.call(answer);
            }
        }
    });

    let state = view_state_from_resource(resource);
    let screen = vm.read().as_ref().and_then(QuizVm::screen);

    rsx! {
        div { class: "page quiz", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    ErrorPanel { title: err.title(), message: err.message() }
                },
                ViewState::Ready(()) => match screen {
                    Some(screen) => rsx! {
                        QuestionCard { screen, on_choose }
                    },
                    None => rsx! {
                        p { class: "loading", "Tallying your score..." }
                    },
                },
            }
        }
    }
}

#[component]
fn QuestionCard(screen: QuizScreenVm, on_choose: EventHandler<String>) -> Element {
    rsx! {
        div { class: "quiz-header",
            span { class: "question-count", "{screen.question_label}" }
            span { class: "score", "{screen.score_label}" }
        }
        div { class: "progress",
            div { class: "progress-fill", style: "width: {screen.progress_percent}%" }
        }
        h3 { class: "prompt", "{screen.prompt}" }
        div { class: "choices",
            for choice in screen.choices.iter().cloned() {
                ChoiceButton {
                    key: "{choice.shortcut}",
                    choice,
                    locked: screen.locked,
                    on_choose,
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, locked: bool, on_choose: EventHandler<String>) -> Element {
    let text = choice.text.clone();
    rsx! {
        button {
            class: "{choice.feedback.class()}",
            disabled: locked,
            onclick: move |_| on_choose.call(text.clone()),
            span { class: "shortcut", "{choice.shortcut}" }
            span { class: "choice-text", "{choice.text}" }
        }
    }
}

#[component]
fn ErrorPanel(title: &'static str, message: String) -> Element {
    let navigator = use_navigator();
    rsx! {
        div { class: "error-panel",
            h3 { "{title}" }
            p { "{message}" }
            button {
                class: "btn",
                onclick: move |_| {
                    navigator.push(Route::Setup {});
                },
                "Go Back"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    choose: Rc<RefCell<Option<Callback<String>>>>,
    elapsed: Rc<Cell<usize>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, choose: Callback<String>) {
        *self.choose.borrow_mut() = Some(choose);
    }

    pub(crate) fn choose(&self) -> Callback<String> {
        (*self.choose.borrow()).expect("quiz choose registered")
    }

    fn record_elapsed(&self) {
        self.elapsed.set(self.elapsed.get() + 1);
    }

    /// Feedback delays that ran to completion.
    pub(crate) fn elapsed_count(&self) -> usize {
        self.elapsed.get()
    }
}
