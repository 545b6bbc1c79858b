pub mod bean_profile;
pub mod comment;
pub mod device_token;
pub mod follower;
pub mod gear;
pub mod post;
pub mod post_image;
pub mod user;
