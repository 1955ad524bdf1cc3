mod comment;
mod follow;
mod post;
mod user;
