//! Quill - a keystroke-level rich-text editing core

pub mod error;
pub mod key;
pub mod dom;
pub mod boundary;
pub mod overrides;
pub mod whitespace;
pub mod editing;
pub mod history;
pub mod lists;
pub mod metaview;
pub mod event;
pub mod action;
pub mod keymap;
pub mod typing;
