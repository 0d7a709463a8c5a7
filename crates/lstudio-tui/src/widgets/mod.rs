//! Custom widget components

mod content_view;
mod header;
mod lesson_input;
mod panels;
mod status_bar;
mod step_viewer;
mod strategy_list;

pub use content_view::{block_line, ContentView};
pub use header::MainHeader;
pub use lesson_input::{visible_tail, LessonInput};
pub use panels::{spinner_frame, ErrorPanel, LoadingPanel, WelcomePanel};
pub use status_bar::StatusBar;
pub use step_viewer::StepTimeline;
pub use strategy_list::StrategyList;
