use crate::amount::{parse_amount, SplitAmount};
use crate::diagnostic::RenderDiagnostic;
use crate::format::{format_balance, info_line};
use crate::ids::CardId;
use crate::models::{Card, Transaction};
use crate::view::{Node, Tag};

const PLACEHOLDER_DOLLARS: &str = "--";
const PLACEHOLDER_CENTS: &str = "--";

/// Rendered detail for one card
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListView {
    pub rows: Vec<Node>,
    pub balance: String,
    pub diagnostics: Vec<RenderDiagnostic>,
}

pub fn render_transaction_list(card: &Card) -> TransactionListView {
    let mut diagnostics = vec![];

    if card.transactions.is_empty() {
        diagnostics.push(RenderDiagnostic::EmptyTransactions(card.id));
    }

    let rows = card
        .transactions
        .iter()
        .map(|transaction| render_transaction(card.id, transaction, &mut diagnostics))
        .collect();

    let total = compute_balance(card, &mut diagnostics);

    return TransactionListView {
        rows,
        balance: format_balance(total),
        diagnostics,
    };
}

/// Signed sum of all transactions plus the card's credit amount.
///
/// Amounts that aren't numbers count as zero.
pub fn compute_balance(card: &Card, diagnostics: &mut Vec<RenderDiagnostic>) -> f64 {
    let transaction_total: f64 = card
        .transactions
        .iter()
        .map(|transaction| match parse_amount(&transaction.amount) {
            Ok(amount) => transaction.action.signed(amount),
            Err(e) => {
                diagnostics.push(RenderDiagnostic::Format(card.id, e));
                0.0
            }
        })
        .sum();

    return transaction_total + card.credit_adjustment();
}

fn render_transaction(
    card_id: CardId,
    transaction: &Transaction,
    diagnostics: &mut Vec<RenderDiagnostic>,
) -> Node {
    let action = transaction.action;

    let left = Node::new(Tag::Section, "transaction__left").with_children(vec![
        Node::new(Tag::Span, "transaction__symbol").with_text(action.symbol()),
    ]);

    let middle = Node::new(Tag::Section, "transaction__middle").with_children(vec![
        Node::new(Tag::Heading, "transaction__description").with_text(&transaction.description),
        Node::new(Tag::Paragraph, "transaction__info-text").with_text(info_line(transaction)),
    ]);

    let (dollars, cents) = match SplitAmount::parse(&transaction.amount) {
        Ok(split) => (split.dollars, split.cents),
        Err(e) => {
            diagnostics.push(RenderDiagnostic::Format(card_id, e));
            (PLACEHOLDER_DOLLARS, PLACEHOLDER_CENTS)
        }
    };

    let amount = Node::new(Tag::Paragraph, "transaction__amount")
        .with_attribute("variant", action.class_name())
        .with_children(vec![
            Node::new(Tag::Span, "amount__big").with_text(format!("${dollars}")),
            Node::new(Tag::Span, "amount__small").with_text(format!(".{cents}")),
        ]);

    let right = Node::new(Tag::Section, "transaction__right").with_children(vec![amount]);

    return Node::new(Tag::ListItem, "app__transaction")
        .with_attribute("variant", action.class_name())
        .with_children(vec![left, middle, right]);
}

#[cfg(test)]
mod tests {
    use crate::amount::AmountError;
    use crate::models::{Action, CardType};

    use chrono::NaiveDate;

    use super::*;

    const SOME_CARD_ID: CardId = CardId(7);

    fn build_transaction(action: Action, amount: &str) -> Transaction {
        Transaction {
            action,
            category: "Payment".to_string(),
            reference: "#343212".to_string(),
            date: NaiveDate::from_ymd_opt(2015, 7, 11).unwrap(),
            amount: amount.to_string(),
            description: "Funds Added".to_string(),
        }
    }

    fn build_card(transactions: Vec<Transaction>, credit_amount: Option<f64>) -> Card {
        let mut card = Card::new(SOME_CARD_ID, CardType::Visa, 1234567825622562, "12/17");
        card.transactions = transactions;
        card.credit_amount = credit_amount;
        card
    }

    #[test]
    fn balance_sums_credits_and_debits() {
        let card = build_card(
            vec![
                build_transaction(Action::Credit, "100.00"),
                build_transaction(Action::Debit, "30.00"),
            ],
            None,
        );

        let view = render_transaction_list(&card);

        assert_eq!(view.balance, "$70");
        assert!(view.diagnostics.is_empty());
    }

    #[test]
    fn balance_adds_credit_amount() {
        let card = build_card(vec![build_transaction(Action::Debit, "30.00")], Some(1000.0));

        assert_eq!(render_transaction_list(&card).balance, "$970");
    }

    #[test]
    fn empty_transactions() {
        let card = build_card(vec![], Some(500.0));

        let view = render_transaction_list(&card);

        assert!(view.rows.is_empty());
        assert_eq!(view.balance, "$500");
        assert_eq!(
            view.diagnostics,
            vec![RenderDiagnostic::EmptyTransactions(SOME_CARD_ID)]
        );
    }

    #[test]
    fn empty_transactions_without_credit_amount() {
        let card = build_card(vec![], None);

        assert_eq!(render_transaction_list(&card).balance, "$0");
    }

    #[test]
    fn credit_row() {
        let card = build_card(vec![build_transaction(Action::Credit, "900.00")], None);

        let view = render_transaction_list(&card);
        let row = &view.rows[0];

        assert_eq!(row.attribute("variant"), Some("transaction__credit"));
        assert_eq!(row.find_by_class("transaction__symbol").unwrap().text_content(), "+");
        assert_eq!(
            row.find_by_class("transaction__description").unwrap().text_content(),
            "Funds Added"
        );
        assert_eq!(
            row.find_by_class("transaction__info-text").unwrap().text_content(),
            "#343212 - 11 July 2015"
        );
        assert_eq!(row.find_by_class("amount__big").unwrap().text_content(), "$900");
        assert_eq!(row.find_by_class("amount__small").unwrap().text_content(), ".00");
    }

    #[test]
    fn debit_row() {
        let card = build_card(vec![build_transaction(Action::Debit, "84.96")], None);

        let view = render_transaction_list(&card);
        let row = &view.rows[0];

        assert_eq!(row.attribute("variant"), Some("transaction__debit"));
        assert_eq!(row.find_by_class("transaction__symbol").unwrap().text_content(), "-");
        assert_eq!(
            row.find_by_class("transaction__amount").unwrap().text_content(),
            "$84.96"
        );
        assert_eq!(view.balance, "$-84.96");
    }

    #[test]
    fn malformed_amount_renders_placeholder() {
        let card = build_card(
            vec![
                build_transaction(Action::Credit, "650"),
                build_transaction(Action::Debit, "10.00"),
            ],
            None,
        );

        let view = render_transaction_list(&card);

        assert_eq!(view.rows.len(), 2);
        assert_eq!(
            view.rows[0].find_by_class("transaction__amount").unwrap().text_content(),
            "$--.--"
        );
        assert_eq!(
            view.rows[1].find_by_class("transaction__amount").unwrap().text_content(),
            "$10.00"
        );
        assert_eq!(
            view.diagnostics,
            vec![RenderDiagnostic::Format(
                SOME_CARD_ID,
                AmountError::MissingDecimalPoint("650".to_string())
            )]
        );

        // Still a number, so it counts towards the balance
        assert_eq!(view.balance, "$640");
    }

    #[test]
    fn unparseable_amount_counts_as_zero() {
        let card = build_card(
            vec![
                build_transaction(Action::Credit, "abc.de"),
                build_transaction(Action::Credit, "5.50"),
            ],
            None,
        );

        let view = render_transaction_list(&card);

        assert_eq!(view.balance, "$5.5");
        assert_eq!(
            view.diagnostics,
            vec![RenderDiagnostic::Format(
                SOME_CARD_ID,
                AmountError::NotANumber("abc.de".to_string())
            )]
        );
    }
}
