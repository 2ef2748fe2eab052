pub mod error_notice;
pub mod footer;
pub mod header;
pub mod hero_carousel;
pub mod movie_card;
pub mod movie_grid;
pub mod movie_row;
pub mod pagination;
pub mod search_box;
