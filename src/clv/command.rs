use crate::ids::CardId;

/// Messages a rendered view sends back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(CardId),
}
