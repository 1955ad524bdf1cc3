mod follow;
mod post;
