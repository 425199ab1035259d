use crate::diagnostic::RenderDiagnostic;
use crate::ids::CardId;
use crate::provider::CardProvider;
use crate::renderers::{render_card_list, render_transaction_list};
use crate::view::{Region, Surface};
use crate::Command;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("No cards to display")]
    NoCards,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),
}

/// Which card the detail view is showing. Always names a card known to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active_card_id: CardId,
}

/// Owns the selection state and re-renders the whole view whenever it changes
pub struct ViewController<P: CardProvider> {
    provider: P,
    state: SelectionState,
    diagnostics: Vec<RenderDiagnostic>,
}

impl<P: CardProvider> ViewController<P> {
    /// Starts with the first card selected
    pub fn new(provider: P) -> Result<Self, ControllerError> {
        let first = provider.cards().first().ok_or(ControllerError::NoCards)?;

        let state = SelectionState {
            active_card_id: first.id,
        };

        return Ok(Self {
            provider,
            state,
            diagnostics: vec![],
        });
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active_card_id(&self) -> CardId {
        self.state.active_card_id
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Diagnostics from the most recent render
    pub fn diagnostics(&self) -> &[RenderDiagnostic] {
        &self.diagnostics
    }

    /// Initial render, once the surface is ready
    pub fn mount(&mut self, surface: &mut impl Surface) {
        log::debug!("Mounting view with card {} active", self.state.active_card_id);

        surface.set_loading(false);
        self.render(surface);
    }

    pub fn dispatch(&mut self, command: Command, surface: &mut impl Surface) -> Result<(), SelectionError> {
        log::debug!("Dispatching command: {command:?}");

        return match command {
            Command::Select(id) => self.select(id, surface),
        };
    }

    /// Makes a card active and re-renders. Unknown ids leave state and surface untouched.
    pub fn select(&mut self, id: CardId, surface: &mut impl Surface) -> Result<(), SelectionError> {
        if self.provider.find(id).is_none() {
            return Err(SelectionError::CardNotFound(id));
        }

        self.state.active_card_id = id;
        self.render(surface);

        return Ok(());
    }

    fn render(&mut self, surface: &mut impl Surface) {
        let active_card_id = self.state.active_card_id;

        surface.clear(Region::CardList);
        surface.render_list(
            Region::CardList,
            render_card_list(self.provider.cards(), active_card_id),
        );

        surface.clear(Region::TransactionList);

        // Only reachable if the provider changed underneath us
        let card = match self.provider.find(active_card_id) {
            Some(card) => card,
            None => {
                log::warn!("{}", SelectionError::CardNotFound(active_card_id));
                surface.clear(Region::Balance);
                return;
            }
        };

        let view = render_transaction_list(card);

        surface.render_list(Region::TransactionList, view.rows);
        surface.render_text(Region::Balance, view.balance);

        for diagnostic in view.diagnostics.iter() {
            log::warn!("{diagnostic}");
        }

        log::debug!("Rendered card {active_card_id} with {} diagnostics", view.diagnostics.len());
        self.diagnostics = view.diagnostics;
    }
}
