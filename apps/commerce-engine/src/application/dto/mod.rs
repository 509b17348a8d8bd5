//! Application DTOs
//!
//! Plain result objects handed to the presentation layer. No wire format is
//! prescribed; everything is serde-serializable.

mod order_view;
mod payment_view;

pub use order_view::{LineItemRequest, OrderItemView, OrderSummary, OrderView};
pub use payment_view::{PaymentDetail, PaymentReceipt, PaymentView, UserView};
