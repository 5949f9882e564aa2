mod event;
mod notification;
mod reminder;
mod settings;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::reminder::api::*;
pub use crate::settings::api::*;
pub use crate::status::api::*;
