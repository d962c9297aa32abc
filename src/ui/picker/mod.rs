//! Tree Picker
//!
//! A keyboard-driven host of the selection core. The picker owns the committed
//! selection and the expansion state; every check or uncheck goes through
//! [`crate::tree::toggle_node`].
//!
//! - `menu` - picker state and action handling
//! - `input` - keyboard mapping and the interactive loop

mod input;
mod menu;

pub use input::{key_to_action, run_interactive, viewport, PickerView};
pub use menu::{PickerAction, TreePicker};
