pub mod checkout_hold_cmd;
pub mod place_hold_cmd;
