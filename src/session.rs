//! Search-to-viewport orchestration
//!
//! Ties a [`Resolver`], a [`Gazetteer`] for typed suggestions, and a
//! [`MapView`] together: the embedding UI feeds it text and selections and
//! reads back the viewport and marker state. Resolution failures propagate
//! as errors so the UI can show "search failed" distinctly from "no
//! results".

use crate::core::config::GoToOptions;
use crate::resolve::{gazetteer::Gazetteer, Candidate, Resolution, Resolver};
use crate::view::controller::MapView;
use crate::Result;

/// What a completed search did to the view
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query resolved and the view is flying to the candidate
    Located(Candidate),
    /// The source answered but had no match; the view is unchanged
    NoResults,
    /// A newer search superseded this one; the view is unchanged
    Superseded,
}

/// One search-driven map session
pub struct SearchSession {
    resolver: Resolver,
    gazetteer: Gazetteer,
    view: MapView,
    go_to: GoToOptions,
}

impl SearchSession {
    pub fn new(resolver: Resolver, gazetteer: Gazetteer, view: MapView) -> Self {
        Self {
            resolver,
            gazetteer,
            view,
            go_to: GoToOptions::default(),
        }
    }

    /// Use the given fly options instead of the defaults
    pub fn with_go_to_options(mut self, options: GoToOptions) -> Self {
        self.go_to = options;
        self
    }

    /// Typed-suggestion list for the query, from the gazetteer
    pub fn suggest(&self, query: &str) -> Vec<Candidate> {
        self.gazetteer.suggest(query)
    }

    /// Resolve a free-text query and, on a hit, fly the view there and
    /// place the marker.
    ///
    /// A blank query is answered with [`SearchOutcome::NoResults`] without
    /// consulting the source.
    pub async fn search(&mut self, query: &str) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::NoResults);
        }

        match self.resolver.resolve(query).await? {
            Resolution::Found(candidate) => {
                self.apply(&candidate);
                Ok(SearchOutcome::Located(candidate))
            }
            Resolution::NotFound => {
                log::debug!("no results for {query:?}");
                Ok(SearchOutcome::NoResults)
            }
            Resolution::Superseded => Ok(SearchOutcome::Superseded),
        }
    }

    /// Apply a suggestion the user picked from the list. The candidate's
    /// stored coordinates are used as-is; no lookup happens.
    pub fn select(&mut self, candidate: &Candidate) {
        self.apply(candidate);
    }

    fn apply(&mut self, candidate: &Candidate) {
        self.view.go_to(candidate, &self.go_to);
        self.view.place_marker(candidate);
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }
}
