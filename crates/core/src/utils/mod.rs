pub mod currency_utils;
