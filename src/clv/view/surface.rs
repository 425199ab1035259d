use super::Node;

/// Named areas of the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CardList,
    TransactionList,
    Balance,
}

/// Anything able to display the rendered view
pub trait Surface {
    /// Removes everything previously rendered in a region
    fn clear(&mut self, region: Region);

    /// Appends list entries to a region
    fn render_list(&mut self, region: Region, nodes: Vec<Node>);

    /// Replaces the text of a scalar region
    fn render_text(&mut self, region: Region, text: String);

    fn set_loading(&mut self, _loading: bool) {}
}

/// Keeps the last rendered tree in memory
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedSurface {
    pub loading: bool,
    pub cards: Vec<Node>,
    pub transactions: Vec<Node>,
    pub balance: String,
}

impl Default for RetainedSurface {
    fn default() -> Self {
        return Self {
            loading: true,
            cards: vec![],
            transactions: vec![],
            balance: String::new(),
        };
    }
}

impl RetainedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_mut(&mut self, region: Region) -> Option<&mut Vec<Node>> {
        return match region {
            Region::CardList => Some(&mut self.cards),
            Region::TransactionList => Some(&mut self.transactions),
            Region::Balance => None,
        };
    }
}

impl Surface for RetainedSurface {
    fn clear(&mut self, region: Region) {
        match region {
            Region::Balance => self.balance.clear(),
            _ => {
                if let Some(list) = self.list_mut(region) {
                    list.clear();
                }
            }
        }
    }

    fn render_list(&mut self, region: Region, nodes: Vec<Node>) {
        match self.list_mut(region) {
            Some(list) => list.extend(nodes),
            None => log::warn!("Cannot render a list into the {region:?} region"),
        }
    }

    fn render_text(&mut self, region: Region, text: String) {
        match region {
            Region::Balance => self.balance = text,
            _ => log::warn!("Cannot render text into the {region:?} region"),
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
