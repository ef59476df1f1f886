//! Property-based tests for the view tree
//!
//! Uses proptest to generate arbitrary messages and check the visibility
//! rules hold for all of them

mod common;

use common::*;
use proptest::prelude::*;
use querychat::shared::actions::Action;
use querychat::shared::message::{Message, Role, Row};
use serde_json::Value;

fn arb_cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn arb_table() -> impl Strategy<Value = (Vec<String>, Vec<Row>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..5).prop_flat_map(|cols| {
        let cols: Vec<String> = cols.into_iter().collect();
        let n = cols.len();
        let names = cols.clone();
        let rows = prop::collection::vec(
            prop::collection::vec(prop::option::of(arb_cell()), n).prop_map(move |cells| {
                let mut row = Row::new();
                for (name, value) in names.iter().zip(cells) {
                    if let Some(value) = value {
                        row.insert(name.clone(), value);
                    }
                }
                row
            }),
            0..6,
        );
        (Just(cols), rows)
    })
}

fn arb_message() -> impl Strategy<Value = Message> {
    (
        prop_oneof![Just(Role::User), Just(Role::Assistant)],
        ".{0,20}",
        prop::option::of("SELECT [a-z]{1,8}"),
        prop::option::of("[a-z ]{1,12}"),
        prop::option::of(arb_table()),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(0u64..100_000),
        any::<(bool, bool)>(),
    )
        .prop_map(|(role, content, sql, error, table, keep_cols, keep_rows, row_count, (liked, disliked))| {
            let mut message = Message::new(role, content).with_timestamp(fixed_time());
            message.sql = sql;
            message.error = error;
            if let Some((cols, rows)) = table {
                message.columns = keep_cols.then_some(cols);
                message.results = keep_rows.then_some(rows);
            }
            message.row_count = row_count;
            message.liked = liked;
            message.disliked = disliked;
            message
        })
}

proptest! {
    #[test]
    fn user_turns_never_show_assistant_sections(message in arb_message()) {
        prop_assume!(message.role == Role::User);
        let tree = build(&message);
        prop_assert!(tree.query.is_none());
        prop_assert!(tree.results.is_none());
        prop_assert!(tree.actions.is_none());
    }

    #[test]
    fn errors_hide_query_and_results(message in arb_message()) {
        prop_assume!(message.error.is_some());
        let tree = build(&message);
        prop_assert!(tree.query.is_none());
        prop_assert!(tree.results.is_none());
    }

    #[test]
    fn table_shape_matches_record(message in arb_message()) {
        let tree = build(&message);
        let eligible = message.role == Role::Assistant
            && message.error.is_none()
            && message.columns.is_some()
            && message.results.as_ref().is_some_and(|r| !r.is_empty());
        prop_assert_eq!(tree.results.is_some(), eligible);

        if let Some(table) = tree.results {
            let columns = message.columns.as_ref().unwrap();
            let results = message.results.as_ref().unwrap();
            prop_assert_eq!(&table.header, columns);
            prop_assert_eq!(table.rows.len(), results.len());
            prop_assert_eq!(table.row_count, message.row_count.unwrap_or(results.len() as u64));
            for (cells, row) in table.rows.iter().zip(results) {
                prop_assert_eq!(cells.len(), columns.len());
                for (cell, column) in cells.iter().zip(columns) {
                    match row.get(column) {
                        None | Some(Value::Null) => prop_assert_eq!(cell.as_str(), "-"),
                        Some(Value::String(s)) => prop_assert_eq!(cell, s),
                        Some(other) => prop_assert_eq!(cell, &other.to_string()),
                    }
                }
            }
        }
    }

    #[test]
    fn copy_button_requires_both_results_and_columns(message in arb_message()) {
        let tree = build(&message);
        let expected = message.role == Role::Assistant
            && message.results.is_some()
            && message.columns.is_some();
        prop_assert_eq!(tree.has_action(Action::CopyCsv), expected);
        prop_assert_eq!(tree.actions.is_some(), message.role == Role::Assistant);
    }

    #[test]
    fn query_block_matches_sql(message in arb_message()) {
        let tree = build(&message);
        let expected = if message.role == Role::Assistant && message.error.is_none() {
            message.sql.clone()
        } else {
            None
        };
        prop_assert_eq!(tree.query.map(|q| q.sql), expected);
    }
}
