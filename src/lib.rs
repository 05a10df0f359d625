pub mod hex;
pub mod md5;
