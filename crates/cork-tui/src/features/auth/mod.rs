//! Login and register form slices.

mod render;
mod state;
mod update;

pub use render::{render_login, render_register};
pub use state::{LoginField, LoginForm, RegisterField, RegisterForm};
pub use update::{
    handle_login_key, handle_login_result, handle_register_key, handle_register_result,
};
