//! Pure data types shared across the interaction-state core.

pub mod dialog;
pub mod notification;
pub mod product;

pub use dialog::{
    DialogCallback, DialogDescriptor, DialogVariant, CANCEL_LABEL, CONFIRMATION_TITLE,
    CONFIRM_LABEL,
};
pub use notification::{
    NotificationCallback, NotificationEntry, NotificationId, NotificationVariant,
};
pub use product::{CartLine, Product, ProductId};
