pub mod api_key;
pub mod booking;
pub mod domain_record;
pub mod facility;
pub mod fee_schedule;
pub mod merchant;
pub mod payment_attempt;
pub mod payment_instrument;

pub use self::{
    api_key::*, booking::*, domain_record::*, facility::*, fee_schedule::*, merchant::*,
    payment_attempt::*, payment_instrument::*,
};
