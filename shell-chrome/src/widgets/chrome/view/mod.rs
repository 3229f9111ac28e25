pub(crate) mod action_bar;
pub(crate) mod navbar;
