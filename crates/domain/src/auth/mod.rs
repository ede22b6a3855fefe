//! Authorization tab types

mod types;

pub use types::{AuthMode, AuthSetting};
