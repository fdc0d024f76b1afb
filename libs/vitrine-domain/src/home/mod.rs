//! Home feed module
//!
//! Model, presenter and view contract of the home/discovery screen. The
//! model wraps the catalog port with the feed's page sizes; the presenter
//! orchestrates a load and drives a `HomeView`.

mod config;
mod model;
mod presenter;
mod view;

#[cfg(test)]
mod test_support;

pub use config::{PageSizes, PresenterConfig, MIN_LOADING_DURATION};
pub use model::{GenreBatch, HomeModel};
pub use presenter::{genre_error_message, HomePresenter, Phase, RunOutcome, LOAD_ERROR_MESSAGE};
pub use view::HomeView;
