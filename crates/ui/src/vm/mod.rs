mod quiz_vm;
mod results_vm;
mod setup_vm;

pub use quiz_vm::{ChoiceFeedback, ChoiceVm, QuizScreenVm, QuizVm, start_quiz};
pub use results_vm::{ResultsVm, map_results};
pub use setup_vm::{OptionVm, SetupForm};
