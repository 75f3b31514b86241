//! The add-recipe flow and the recipe collection it feeds.
//!
//! A submission moves `Idle -> Submitting -> Succeeded | Failed` and is
//! settled back to `Idle` by [`Planner::acknowledge`] or by the next
//! submission. The extraction call happens between [`Planner::begin_submit`]
//! and [`Planner::complete`], so the input stays editable while it runs.

mod notice;

pub use notice::Notice;

use log::{debug, error, info};
use thiserror::Error;

use crate::extraction::RecipeExtractor;
use crate::{ExtractedRecipe, PlannerError, Recipe};

/// Label of the add control while idle
pub const ADD_LABEL: &str = "Add Recipe";
/// Label of the add control while a submission is in flight
pub const ADDING_LABEL: &str = "Adding…";

/// Where the current add attempt stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddState {
    #[default]
    Idle,
    /// One extraction is in flight for `url`
    Submitting { url: String },
    /// The last attempt added the recipe with this upstream id
    Succeeded { id: i64 },
    /// The last attempt failed; the collection was left untouched
    Failed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// The add control is disabled while a submission is in flight
    #[error("A recipe is already being added")]
    Busy,
    /// `complete` was called without a matching submission
    #[error("No submission in progress")]
    NotSubmitting,
}

/// Token for a submission in flight; carries the URL as it was when submitted
#[derive(Debug)]
#[must_use = "a pending submission must be passed to Planner::complete"]
pub struct PendingSubmit {
    url: String,
}

impl PendingSubmit {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Outcome of a submission as seen by the user
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A recipe was added at the front of the collection
    Added,
    /// Nothing was added; show this notice
    Rejected(Notice),
}

/// Owns the URL input, the add-flow state and the recipe collection
#[derive(Debug, Default)]
pub struct Planner {
    input: String,
    recipes: Vec<Recipe>,
    state: AddState,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Recipes, most recently added first
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn state(&self) -> &AddState {
        &self.state
    }

    pub fn trigger_enabled(&self) -> bool {
        !matches!(self.state, AddState::Submitting { .. })
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.trigger_enabled() {
            ADD_LABEL
        } else {
            ADDING_LABEL
        }
    }

    /// Dismiss the outcome of the last attempt
    pub fn acknowledge(&mut self) {
        if self.trigger_enabled() {
            self.state = AddState::Idle;
        }
    }

    /// Start a submission with the current input
    ///
    /// An empty input is answered with [`Notice::MissingUrl`] and leaves the
    /// planner idle.
    pub fn begin_submit(&mut self) -> Result<Result<PendingSubmit, Notice>, ShellError> {
        if !self.trigger_enabled() {
            return Err(ShellError::Busy);
        }
        self.state = AddState::Idle;

        if self.input.is_empty() {
            debug!("Rejected submission with empty input");
            return Ok(Err(Notice::MissingUrl));
        }

        let url = self.input.clone();
        debug!("Submitting {}", url);
        self.state = AddState::Submitting { url: url.clone() };
        Ok(Ok(PendingSubmit { url }))
    }

    /// Finish a submission with the extractor's result
    pub fn complete(
        &mut self,
        pending: PendingSubmit,
        result: Result<ExtractedRecipe, PlannerError>,
    ) -> Result<SubmitOutcome, ShellError> {
        match &self.state {
            AddState::Submitting { url } if *url == pending.url => {}
            _ => return Err(ShellError::NotSubmitting),
        }

        match result {
            Ok(extracted) => {
                let recipe = extracted.with_source(pending.url);
                info!("Added '{}' from {}", recipe.title, recipe.url);
                self.state = AddState::Succeeded { id: recipe.id };
                self.recipes.insert(0, recipe);
                self.input.clear();
                Ok(SubmitOutcome::Added)
            }
            Err(e) => {
                error!("Failed to add recipe from {}: {}", pending.url, e);
                self.state = AddState::Failed;
                Ok(SubmitOutcome::Rejected(Notice::FetchFailed))
            }
        }
    }

    /// Run one full add attempt against `extractor`
    pub async fn submit<E>(&mut self, extractor: &E) -> Result<SubmitOutcome, ShellError>
    where
        E: RecipeExtractor + ?Sized,
    {
        let pending = match self.begin_submit()? {
            Ok(pending) => pending,
            Err(notice) => return Ok(SubmitOutcome::Rejected(notice)),
        };

        debug!("Extracting with {}", extractor.extractor_name());
        let result = extractor.extract(pending.url()).await;
        self.complete(pending, result)
    }
}
