pub mod create;
pub mod delete;
pub mod feed;
pub mod like;
pub mod read;
