pub mod u501_withdraw_crypto;
