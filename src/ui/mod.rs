//! UI module - widgets shared by the board views and the task form

pub mod components;
