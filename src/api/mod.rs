pub mod cosmetics;
pub mod battlepass;
