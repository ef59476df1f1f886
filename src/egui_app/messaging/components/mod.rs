//! Messaging UI Components

pub mod message_view;
